// Browser selection offsets count characters, not bytes. Every edit
// below works over character indices so multi-byte content cannot
// split a code point.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub text: String,
    pub cursor: usize,
}

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

pub fn byte_index(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(index, _)| index)
        .unwrap_or(text.len())
}

pub fn clamp_selection(
    text: &str,
    start: usize,
    end: usize,
) -> (usize, usize) {
    let len = char_len(text);
    let start = start.min(len);
    let end = end.clamp(start, len);
    (start, end)
}
