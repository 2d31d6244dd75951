//! Markdown renderer.

use crate::core::config::MarkdownConfig;
use crate::plugins::{MarkdownRenderer, Plugin};

/// Markdown to HTML renderer using pulldown-cmark.
pub struct MarkdownExtractor;

impl Default for MarkdownExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for MarkdownExtractor {
    fn name(&self) -> &str {
        "markdown-extractor"
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    fn description(&self) -> &str {
        "Renders Markdown to HTML (CommonMark, tables, strikethrough)"
    }
}

impl MarkdownRenderer for MarkdownExtractor {
    fn render_html(&self, source: &str, options: &MarkdownConfig) -> String {
        crate::extraction::markdown::render_html(source, options)
    }
}
