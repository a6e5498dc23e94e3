use pulldown_cmark::{html, Event, Options, Parser};

// GitHub-flavored rendering with hard line breaks, matching how the
// public site renders the same content.
pub fn render_markdown(input: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser =
        Parser::new_ext(input, options).map(|event| match event {
            Event::SoftBreak => Event::HardBreak,
            other => other,
        });

    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}
