use super::{byte_index, char_len, clamp_selection, Edit};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EditorAction {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    OrderedList,
    UnorderedList,
    Link,
    CodeBlock,
    Blockquote,
    Heading(u8),
    Enter,
}

impl EditorAction {
    pub fn apply(&self, text: &str, start: usize, end: usize) -> Edit {
        match self {
            Self::Bold => {
                wrap_selection(text, start, end, "**", "**", "bold text")
            }
            Self::Italic => {
                wrap_selection(text, start, end, "_", "_", "italic text")
            }
            Self::Underline => wrap_selection(
                text,
                start,
                end,
                "<u>",
                "</u>",
                "underlined text",
            ),
            Self::Strikethrough => wrap_selection(
                text,
                start,
                end,
                "~~",
                "~~",
                "strikethrough text",
            ),
            Self::OrderedList => prefix_line(text, start, "1. "),
            Self::UnorderedList => prefix_line(text, start, "- "),
            Self::Link => {
                wrap_selection(text, start, end, "[", "](url)", "link text")
            }
            Self::CodeBlock => {
                wrap_selection(text, start, end, "```\n", "\n```", "code")
            }
            Self::Blockquote => prefix_line(text, start, "> "),
            Self::Heading(level) => {
                let prefix =
                    format!("{} ", "#".repeat(*level as usize));
                prefix_line(text, start, &prefix)
            }
            Self::Enter => press_enter(text, start, end),
        }
    }
}

impl std::fmt::Display for EditorAction {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::Bold => write!(f, "bold"),
            Self::Italic => write!(f, "italic"),
            Self::Underline => write!(f, "underline"),
            Self::Strikethrough => write!(f, "strikethrough"),
            Self::OrderedList => write!(f, "ordered-list"),
            Self::UnorderedList => write!(f, "unordered-list"),
            Self::Link => write!(f, "link"),
            Self::CodeBlock => write!(f, "code-block"),
            Self::Blockquote => write!(f, "blockquote"),
            Self::Heading(level) => write!(f, "heading-{}", level),
            Self::Enter => write!(f, "enter"),
        }
    }
}

impl std::str::FromStr for EditorAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bold" => Ok(Self::Bold),
            "italic" => Ok(Self::Italic),
            "underline" => Ok(Self::Underline),
            "strikethrough" => Ok(Self::Strikethrough),
            "ordered-list" => Ok(Self::OrderedList),
            "unordered-list" => Ok(Self::UnorderedList),
            "link" => Ok(Self::Link),
            "code-block" => Ok(Self::CodeBlock),
            "blockquote" => Ok(Self::Blockquote),
            "enter" => Ok(Self::Enter),
            other => {
                if let Some(level) = other.strip_prefix("heading-") {
                    if let Ok(level) = level.parse::<u8>() {
                        if (1..=6).contains(&level) {
                            return Ok(Self::Heading(level));
                        }
                    }
                }
                Err(format!("invalid editor action: {}", other))
            }
        }
    }
}

// Wraps the selection (or a placeholder when nothing is selected) and
// parks the cursor right after the wrapped text, before `after`.
pub fn wrap_selection(
    text: &str,
    start: usize,
    end: usize,
    before: &str,
    after: &str,
    placeholder: &str,
) -> Edit {
    let (start, end) = clamp_selection(text, start, end);
    let start_byte = byte_index(text, start);
    let end_byte = byte_index(text, end);

    let selected = &text[start_byte..end_byte];
    let inserted = if selected.is_empty() {
        placeholder
    } else {
        selected
    };

    let cursor = start + char_len(before) + char_len(inserted);
    let text = format!(
        "{}{}{}{}{}",
        &text[..start_byte],
        before,
        inserted,
        after,
        &text[end_byte..]
    );

    Edit { text, cursor }
}

// The prefix goes to the start of the cursor's line; the cursor shifts
// right by the prefix width wherever it stood.
pub fn prefix_line(text: &str, cursor: usize, prefix: &str) -> Edit {
    let cursor = cursor.min(char_len(text));
    let cursor_byte = byte_index(text, cursor);
    let line_start = text[..cursor_byte]
        .rfind('\n')
        .map(|index| index + 1)
        .unwrap_or(0);

    let edited = format!(
        "{}{}{}",
        &text[..line_start],
        prefix,
        &text[line_start..]
    );

    Edit {
        text: edited,
        cursor: cursor + char_len(prefix),
    }
}

pub fn insert_image(
    text: &str,
    cursor: usize,
    alt: &str,
    url: &str,
) -> Edit {
    let cursor = cursor.min(char_len(text));
    let cursor_byte = byte_index(text, cursor);
    let markdown = format!("![{}]({})", alt, url);

    let edited = format!(
        "{}{}{}",
        &text[..cursor_byte],
        markdown,
        &text[cursor_byte..]
    );

    Edit {
        cursor: cursor + char_len(&markdown),
        text: edited,
    }
}

// List continuation on Enter. A line holding only its marker ends the
// list; otherwise the next line starts with the follow-up marker. Off
// a list line this is the plain newline the key would have typed.
pub fn press_enter(text: &str, start: usize, end: usize) -> Edit {
    let (start, end) = clamp_selection(text, start, end);
    let start_byte = byte_index(text, start);
    let line_start = text[..start_byte]
        .rfind('\n')
        .map(|index| index + 1)
        .unwrap_or(0);
    let current_line = &text[line_start..start_byte];

    if let Some(number) = ordered_marker(current_line) {
        if current_line.trim() == format!("{}.", number) {
            let cursor = char_len(&text[..line_start]) + 1;
            let edited = format!(
                "{}\n{}",
                &text[..line_start],
                &text[start_byte..]
            );
            return Edit {
                text: edited,
                cursor,
            };
        }

        let insert = format!("\n{}. ", number + 1);
        let cursor = start + char_len(&insert);
        let edited = format!(
            "{}{}{}",
            &text[..start_byte],
            insert,
            &text[start_byte..]
        );
        return Edit {
            text: edited,
            cursor,
        };
    }

    if let Some(marker) = unordered_marker(current_line) {
        if current_line.trim() == marker.to_string() {
            let cursor = char_len(&text[..line_start]) + 1;
            let edited = format!(
                "{}\n{}",
                &text[..line_start],
                &text[start_byte..]
            );
            return Edit {
                text: edited,
                cursor,
            };
        }

        let insert = format!("\n{} ", marker);
        let cursor = start + char_len(&insert);
        let edited = format!(
            "{}{}{}",
            &text[..start_byte],
            insert,
            &text[start_byte..]
        );
        return Edit {
            text: edited,
            cursor,
        };
    }

    let end_byte = byte_index(text, end);
    let edited =
        format!("{}\n{}", &text[..start_byte], &text[end_byte..]);
    Edit {
        text: edited,
        cursor: start + 1,
    }
}

// `^(\d+)\.\s`
fn ordered_marker(line: &str) -> Option<u64> {
    let digits: String = line
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }

    let mut rest = line[digits.len()..].chars();
    if rest.next() != Some('.') {
        return None;
    }
    match rest.next() {
        Some(c) if c.is_whitespace() => digits.parse().ok(),
        _ => None,
    }
}

// `^([-*])\s`
fn unordered_marker(line: &str) -> Option<char> {
    let mut chars = line.chars();
    let marker = chars.next()?;
    if marker != '-' && marker != '*' {
        return None;
    }
    match chars.next() {
        Some(c) if c.is_whitespace() => Some(marker),
        _ => None,
    }
}
