//! Conversion options.

use serde::{Deserialize, Serialize};

/// Options for Markdown to HTML conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Wrap non-header, non-list text lines in `<p>` tags
    pub wrap_paragraphs: bool,
}

impl ConvertOptions {
    /// Create new conversion options with defaults (paragraph wrapping off).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable paragraph wrapping.
    pub fn with_paragraphs(mut self, wrap: bool) -> Self {
        self.wrap_paragraphs = wrap;
        self
    }
}
