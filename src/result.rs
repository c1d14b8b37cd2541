//! Conversion result with statistics.

use serde::{Deserialize, Serialize};

/// Result of a conversion, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResult {
    /// The converted content (HTML or Markdown)
    pub content: String,

    /// Conversion statistics
    pub stats: ConvertStats,
}

impl ConvertResult {
    /// Create a new conversion result.
    pub fn new(content: String, stats: ConvertStats) -> Self {
        Self { content, stats }
    }

    /// Create a simple result with just content.
    pub fn content_only(content: String) -> Self {
        Self {
            content,
            stats: ConvertStats::default(),
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected during a conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertStats {
    /// Number of blocks processed
    pub block_count: u32,

    /// Number of headings converted
    pub heading_count: u32,

    /// Number of paragraphs converted
    pub paragraph_count: u32,

    /// Number of lists converted
    pub list_count: u32,

    /// Number of list items converted
    pub list_item_count: u32,

    /// Number of hard line breaks converted
    pub line_break_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl ConvertStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment block count.
    pub fn add_block(&mut self) {
        self.block_count += 1;
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment list count.
    pub fn add_list(&mut self) {
        self.list_count += 1;
    }

    /// Increment list item count.
    pub fn add_list_item(&mut self) {
        self.list_item_count += 1;
    }

    /// Increment line break count.
    pub fn add_line_break(&mut self) {
        self.line_break_count += 1;
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ConvertStats) {
        self.block_count += other.block_count;
        self.heading_count += other.heading_count;
        self.paragraph_count += other.paragraph_count;
        self.list_count += other.list_count;
        self.list_item_count += other.list_item_count;
        self.line_break_count += other.line_break_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
