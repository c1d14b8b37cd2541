//! Conversion drivers orchestrating segmentation, assembly and rule tables.

use regex::Regex;

use crate::assemble::BlockAssembler;
use crate::block::{BlockKind, BlockSegmenter};
use crate::error::Result;
use crate::inline::InlineResolver;
use crate::list::ListBuilder;
use crate::options::ConvertOptions;
use crate::result::{ConvertResult, ConvertStats};
use crate::rules::{markdown_rules, TagRule};

/// Bidirectional converter between a Markdown subset and HTML.
///
/// The converter holds only compiled rule tables, read-only after
/// construction, and is safe to share across threads; every conversion
/// call is independent.
pub struct MarkdownConverter {
    segmenter: BlockSegmenter,
    inline: InlineResolver,
    lists: ListBuilder,
    assembler: BlockAssembler,
    markdown_rules: Vec<TagRule>,
    tag_gap: Regex,
    space_run: Regex,
}

impl MarkdownConverter {
    /// Create a converter, compiling all rule tables.
    pub fn new() -> Result<Self> {
        Ok(Self {
            segmenter: BlockSegmenter::new()?,
            inline: InlineResolver::new()?,
            lists: ListBuilder::new()?,
            assembler: BlockAssembler::new()?,
            markdown_rules: markdown_rules()?,
            tag_gap: Regex::new(r">\s+<")?,
            space_run: Regex::new(r"\s+")?,
        })
    }

    /// Convert Markdown to HTML.
    ///
    /// Output uses exactly the tags `h1`-`h6`, `strong`, `em`, `br`,
    /// `p`, `ul`, `ol` and `li`, with no attributes.
    pub fn to_html(&self, markdown: &str, options: &ConvertOptions) -> String {
        let mut stats = ConvertStats::new();
        self.to_html_inner(markdown, options, &mut stats)
    }

    /// Convert Markdown to HTML, collecting conversion statistics.
    pub fn to_html_with_stats(&self, markdown: &str, options: &ConvertOptions) -> ConvertResult {
        let mut stats = ConvertStats::new();
        let content = self.to_html_inner(markdown, options, &mut stats);
        stats.count_text(&content);
        ConvertResult::new(content, stats)
    }

    fn to_html_inner(
        &self,
        markdown: &str,
        options: &ConvertOptions,
        stats: &mut ConvertStats,
    ) -> String {
        let blocks = self.segmenter.segment(markdown);
        log::debug!("segmented input into {} blocks", blocks.len());

        let mut html = String::new();
        for block in blocks {
            stats.add_block();
            match block.kind {
                BlockKind::List => {
                    html.push_str(&self.lists.build(block.text, &self.inline, stats));
                }
                BlockKind::Prose => {
                    html.push_str(&self.assembler.assemble(
                        block.text,
                        options.wrap_paragraphs,
                        &self.inline,
                        stats,
                    ));
                }
            }
        }
        self.normalize(&html)
    }

    /// Convert HTML back to Markdown.
    ///
    /// Applies the rule table in fixed order, then trims. Unknown tags
    /// pass through unchanged.
    pub fn to_markdown(&self, html: &str) -> String {
        let mut output = html.to_string();
        for rule in &self.markdown_rules {
            output = rule.apply(&output);
        }
        output.trim().to_string()
    }

    /// Convert HTML back to Markdown, collecting conversion statistics.
    pub fn to_markdown_with_stats(&self, html: &str) -> ConvertResult {
        let mut stats = ConvertStats::new();
        let mut output = html.to_string();
        for rule in &self.markdown_rules {
            let hits = rule.match_count(&output) as u32;
            match rule.name {
                "heading" => stats.heading_count += hits,
                "line-break" => stats.line_break_count += hits,
                "paragraph" => stats.paragraph_count += hits,
                "unordered-list" | "ordered-list" => stats.list_count += hits,
                _ => {}
            }
            output = rule.apply(&output);
        }
        let content = output.trim().to_string();
        stats.count_text(&content);
        ConvertResult::new(content, stats)
    }

    /// Collapse whitespace between tags, collapse remaining whitespace
    /// runs to a single space, and trim the ends.
    fn normalize(&self, html: &str) -> String {
        let collapsed = self.tag_gap.replace_all(html, "><");
        let collapsed = self.space_run.replace_all(&collapsed, " ");
        collapsed.trim().to_string()
    }
}
