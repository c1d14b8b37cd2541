//! Block segmentation: splitting a document into paragraph-level blocks.

use regex::Regex;

use crate::error::Result;
use crate::list;

/// How a block should be routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockKind {
    /// First line matches the list-item pattern; the whole block goes to
    /// the list builder.
    List,
    /// Everything else: headers, paragraphs, hard breaks.
    Prose,
}

/// A maximal run of non-blank lines, delimited by blank lines.
#[derive(Debug)]
pub(crate) struct Block<'a> {
    pub text: &'a str,
    pub kind: BlockKind,
}

/// Splits a document on blank lines and classifies each block.
pub(crate) struct BlockSegmenter {
    boundary: Regex,
    list_item: Regex,
}

impl BlockSegmenter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            boundary: Regex::new(r"\n\n+")?,
            list_item: Regex::new(list::ITEM_PATTERN)?,
        })
    }

    /// Split `document` into blocks, preserving internal single newlines
    /// and source order.
    pub fn segment<'a>(&self, document: &'a str) -> Vec<Block<'a>> {
        self.boundary
            .split(document)
            .map(|text| {
                let kind = match text.lines().next() {
                    Some(first) if self.list_item.is_match(first) => BlockKind::List,
                    _ => BlockKind::Prose,
                };
                Block { text, kind }
            })
            .collect()
    }
}
