//! Inline formatting resolution for bold and italic spans.

use regex::{Captures, Regex};

use crate::error::Result;

/// Resolves bold and italic markers within a single line of text.
///
/// Bold spans must be resolved before standalone italic spans: a bold
/// span's inner asterisks would otherwise be read as an italic span that
/// also consumes the closing bold marker.
pub(crate) struct InlineResolver {
    bold: Regex,
    italic: Regex,
}

impl InlineResolver {
    /// Create a resolver, compiling the span patterns.
    pub fn new() -> Result<Self> {
        Ok(Self {
            bold: Regex::new(r"\*\*(.*?)\*\*")?,
            italic: Regex::new(r"\*(.*?)\*")?,
        })
    }

    /// Replace bold and italic markers with `<strong>`/`<em>` tags.
    ///
    /// Matching is non-greedy and never crosses a line boundary.
    /// Unmatched markers are left as literal asterisks; empty spans
    /// resolve to empty tags.
    pub fn resolve(&self, text: &str) -> String {
        let bolded = self.bold.replace_all(text, |caps: &Captures| {
            // Italic nests one level deep inside a bold span.
            let inner = self.italic.replace_all(&caps[1], "<em>${1}</em>");
            format!("<strong>{inner}</strong>")
        });
        self.italic
            .replace_all(&bolded, "<em>${1}</em>")
            .into_owned()
    }
}
