//! Line-level assembly of non-list blocks: headers, paragraphs, hard breaks.

use regex::{Captures, Regex};

use crate::error::Result;
use crate::inline::InlineResolver;
use crate::result::ConvertStats;

/// Converts a prose block to an HTML fragment.
pub(crate) struct BlockAssembler {
    header: Regex,
    hard_break: Regex,
}

impl BlockAssembler {
    pub fn new() -> Result<Self> {
        Ok(Self {
            header: Regex::new(r"^(#{1,6})\s(.+)$")?,
            hard_break: Regex::new(r"(.+?)  \n(.+)")?,
        })
    }

    /// Assemble one prose block.
    ///
    /// A line ending in two trailing spaces forces a hard break: the pair
    /// is wrapped as `<p>first<br>second</p>` and the rest of the block
    /// is emitted as-is. This takes precedence over header and paragraph
    /// handling for the block.
    pub fn assemble(
        &self,
        block: &str,
        wrap_paragraphs: bool,
        inline: &InlineResolver,
        stats: &mut ConvertStats,
    ) -> String {
        let broken = self.hard_break.replace_all(block, |caps: &Captures| {
            stats.add_line_break();
            format!(
                "<p>{}<br>{}</p>",
                inline.resolve(&caps[1]),
                inline.resolve(&caps[2])
            )
        });
        if broken.contains("<br>") {
            return broken.into_owned();
        }

        let mut out = String::new();
        for line in block.lines() {
            if let Some(caps) = self.header.captures(line) {
                let level = caps[1].len();
                let content = inline.resolve(&caps[2]);
                stats.add_heading();
                out.push_str(&format!("<h{level}>{content}</h{level}>"));
            } else {
                let resolved = inline.resolve(line);
                if wrap_paragraphs && !resolved.starts_with('<') {
                    stats.add_paragraph();
                    out.push_str(&format!("<p>{resolved}</p>"));
                } else {
                    out.push_str(&resolved);
                }
            }
        }
        out
    }
}
