//! Markdown to HTML rendering with pulldown-cmark.
//!
//! The output is HTML, not plain text. Raw HTML in the source is escaped and
//! rendered as text, and links or images pointing at `javascript:`,
//! `vbscript:`, `file:` or non-image `data:` URLs lose their destination.

use crate::core::config::MarkdownConfig;
use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

const BLOCKED_SCHEMES: [&str; 4] = ["javascript:", "vbscript:", "file:", "data:"];
const ALLOWED_DATA_PREFIXES: [&str; 4] = ["data:image/gif;", "data:image/png;", "data:image/jpeg;", "data:image/webp;"];

/// Returns `false` for URLs whose scheme can run script.
///
/// Whitespace and control characters are ignored when reading the scheme, so
/// `java\tscript:` is caught too.
pub fn is_safe_url(url: &str) -> bool {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();

    if ALLOWED_DATA_PREFIXES.iter().any(|prefix| normalized.starts_with(prefix)) {
        return true;
    }

    !BLOCKED_SCHEMES.iter().any(|scheme| normalized.starts_with(scheme))
}

fn sanitize(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) if !is_safe_url(&dest_url) => Event::Start(Tag::Link {
            link_type,
            dest_url: CowStr::Borrowed(""),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) if !is_safe_url(&dest_url) => Event::Start(Tag::Image {
            link_type,
            dest_url: CowStr::Borrowed(""),
            title,
            id,
        }),
        other => other,
    }
}

/// Render CommonMark source to an HTML string.
///
/// ```rust
/// use doctext::core::config::MarkdownConfig;
/// use doctext::extraction::markdown::render_html;
///
/// let html = render_html("# Hi", &MarkdownConfig::default());
/// assert_eq!(html, "<h1>Hi</h1>\n");
/// ```
pub fn render_html(source: &str, config: &MarkdownConfig) -> String {
    let mut options = Options::empty();
    if config.tables {
        options.insert(Options::ENABLE_TABLES);
    }
    if config.strikethrough {
        options.insert(Options::ENABLE_STRIKETHROUGH);
    }

    let parser = Parser::new_ext(source, options).map(sanitize);
    let mut output = String::with_capacity(source.len() + source.len() / 2);
    html::push_html(&mut output, parser);
    output
}
