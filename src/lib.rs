//! # mdhtml
//!
//! Bidirectional conversion between a constrained Markdown subset and
//! HTML.
//!
//! The supported subset covers headers (levels 1-6), bold, italic
//! (including one level of mutual nesting), hard line breaks,
//! paragraphs, and ordered/unordered lists nested by indentation.
//! Conversion never rejects input: unmatched markers stay literal,
//! unknown tags pass through, and empty input produces empty output.
//!
//! ## Quick Start
//!
//! ```
//! use mdhtml::{ConvertOptions, MarkdownConverter};
//!
//! fn main() -> mdhtml::Result<()> {
//!     let converter = MarkdownConverter::new()?;
//!
//!     let html = converter.to_html("# Title\nSome **bold** text", &ConvertOptions::new());
//!     assert_eq!(html, "<h1>Title</h1>Some <strong>bold</strong> text");
//!
//!     let markdown = converter.to_markdown(&html);
//!     assert_eq!(markdown, "# Title\nSome **bold** text");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Round-trip fidelity**: headers, bold/italic nesting and flat
//!   lists survive a Markdown → HTML → Markdown round trip
//! - **Nested lists**: indentation-based nesting reconstructed with an
//!   explicit frame stack
//! - **Graceful degradation**: malformed constructs degrade to literal
//!   text instead of errors
//! - **Conversion statistics**: block, heading, list and word counts
//!   via the `*_with_stats` variants

mod assemble;
mod block;
mod convert;
pub mod error;
mod inline;
mod list;
mod options;
mod result;
mod rules;

pub use convert::MarkdownConverter;
pub use error::{Error, Result};
pub use options::ConvertOptions;
pub use result::{ConvertResult, ConvertStats};

/// Convert Markdown to HTML without paragraph wrapping.
///
/// # Example
///
/// ```
/// let html = mdhtml::to_html("**Bold text**").unwrap();
/// assert_eq!(html, "<strong>Bold text</strong>");
/// ```
pub fn to_html(markdown: &str) -> Result<String> {
    let converter = MarkdownConverter::new()?;
    Ok(converter.to_html(markdown, &ConvertOptions::default()))
}

/// Convert Markdown to HTML with custom options.
///
/// # Example
///
/// ```
/// use mdhtml::ConvertOptions;
///
/// let options = ConvertOptions::new().with_paragraphs(true);
/// let html = mdhtml::to_html_with_options("Some text", &options).unwrap();
/// assert_eq!(html, "<p>Some text</p>");
/// ```
pub fn to_html_with_options(markdown: &str, options: &ConvertOptions) -> Result<String> {
    let converter = MarkdownConverter::new()?;
    Ok(converter.to_html(markdown, options))
}

/// Convert HTML back to Markdown.
///
/// # Example
///
/// ```
/// let markdown = mdhtml::to_markdown("<em>Italic</em>").unwrap();
/// assert_eq!(markdown, "*Italic*");
/// ```
pub fn to_markdown(html: &str) -> Result<String> {
    let converter = MarkdownConverter::new()?;
    Ok(converter.to_markdown(html))
}
