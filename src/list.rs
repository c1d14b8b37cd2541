//! Nested list reconstruction between Markdown and HTML.

use regex::{Captures, Regex};

use crate::error::Result;
use crate::inline::InlineResolver;
use crate::result::ConvertStats;
use crate::rules::TagRule;

/// A single list-item line: optional leading whitespace, a `-`/`*`/`N.`
/// marker, whitespace, then content.
pub(crate) const ITEM_PATTERN: &str = r"^([ \t]*)([-*]|\d+\.)\s+(.+)$";

const ITEM_TAG_PATTERN: &str = r"<li>(.*?)</li>";

/// Container kind of an open list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    fn from_marker(marker: &str) -> Self {
        if marker.ends_with('.') {
            ListKind::Ordered
        } else {
            ListKind::Unordered
        }
    }

    fn tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "ol",
            ListKind::Unordered => "ul",
        }
    }
}

/// Stack entry tracking an open list's kind and indentation column.
#[derive(Debug, Clone, Copy)]
struct ListFrame {
    kind: ListKind,
    indent: usize,
}

/// Builds nested `<ul>`/`<ol>` markup from an indented Markdown list block.
pub(crate) struct ListBuilder {
    item: Regex,
}

impl ListBuilder {
    pub fn new() -> Result<Self> {
        Ok(Self {
            item: Regex::new(ITEM_PATTERN)?,
        })
    }

    /// Convert one list block to an HTML fragment.
    ///
    /// The stack of open frames is ordered by indentation column from the
    /// bottom up; indent is compared by raw leading-whitespace character
    /// count, tabs not normalized. Lines that do not match the item
    /// pattern are dropped from the output.
    pub fn build(&self, block: &str, inline: &InlineResolver, stats: &mut ConvertStats) -> String {
        let mut out = String::new();
        let mut stack: Vec<ListFrame> = Vec::new();

        for line in block.lines() {
            let Some(caps) = self.item.captures(line) else {
                log::debug!("dropping non-item line inside list block: {line:?}");
                continue;
            };
            let indent = caps[1].len();
            let kind = ListKind::from_marker(&caps[2]);
            let content = inline.resolve(&caps[3]);
            stats.add_list_item();

            match stack.last().map(|frame| frame.indent) {
                None => open_list(&mut out, &mut stack, kind, indent, &content, stats),
                Some(top) if indent > top => {
                    // Deeper item: nest a new list without closing the
                    // enclosing <li>.
                    open_list(&mut out, &mut stack, kind, indent, &content, stats);
                }
                Some(top) if indent < top => {
                    while stack.last().is_some_and(|frame| frame.indent > indent) {
                        if let Some(frame) = stack.pop() {
                            out.push_str("</li></");
                            out.push_str(frame.kind.tag());
                            out.push('>');
                        }
                    }
                    if stack.is_empty() {
                        open_list(&mut out, &mut stack, kind, indent, &content, stats);
                    } else {
                        out.push_str("</li><li>");
                        out.push_str(&content);
                    }
                }
                Some(_) => {
                    out.push_str("</li><li>");
                    out.push_str(&content);
                }
            }
        }

        if !stack.is_empty() {
            out.push_str("</li>");
            while let Some(frame) = stack.pop() {
                out.push_str("</");
                out.push_str(frame.kind.tag());
                out.push('>');
                if !stack.is_empty() {
                    out.push_str("</li>");
                }
            }
        }
        out
    }
}

fn open_list(
    out: &mut String,
    stack: &mut Vec<ListFrame>,
    kind: ListKind,
    indent: usize,
    content: &str,
    stats: &mut ConvertStats,
) {
    out.push_str(&format!("<{tag}><li>{content}", tag = kind.tag()));
    stack.push(ListFrame { kind, indent });
    stats.add_list();
}

/// Rule flattening each top-level `<ul>` into `- ` item lines.
///
/// Flattening works one nesting level deep: nested list markup inside an
/// item is not reconstructed as indented Markdown.
pub(crate) fn unordered_flatten_rule() -> Result<TagRule> {
    let item = Regex::new(ITEM_TAG_PATTERN)?;
    TagRule::with_replacer("unordered-list", r"<ul>(.*?)</ul>", move |caps: &Captures| {
        item.captures_iter(&caps[1])
            .map(|li| format!("- {}", &li[1]))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

/// Rule flattening each top-level `<ol>` into `N. ` item lines, numbering
/// from 1 per list.
pub(crate) fn ordered_flatten_rule() -> Result<TagRule> {
    let item = Regex::new(ITEM_TAG_PATTERN)?;
    TagRule::with_replacer("ordered-list", r"<ol>(.*?)</ol>", move |caps: &Captures| {
        item.captures_iter(&caps[1])
            .enumerate()
            .map(|(index, li)| format!("{}. {}", index + 1, &li[1]))
            .collect::<Vec<_>>()
            .join("\n")
    })
}
