//! Tag substitution rules for HTML to Markdown conversion.

use regex::{Captures, Regex};

use crate::error::Result;
use crate::list;

/// Replacement applied when a rule's pattern matches.
enum Substitution {
    /// Literal template with `${N}` capture references.
    Template(&'static str),
    /// Pure substitution function over the captured groups.
    Replacer(Box<dyn Fn(&Captures) -> String + Send + Sync>),
}

/// A named tag-to-marker substitution rule.
pub(crate) struct TagRule {
    pub name: &'static str,
    pattern: Regex,
    action: Substitution,
}

impl TagRule {
    /// Create a rule that substitutes a literal template.
    pub fn with_template(
        name: &'static str,
        pattern: &str,
        template: &'static str,
    ) -> Result<Self> {
        Ok(Self {
            name,
            pattern: Regex::new(pattern)?,
            action: Substitution::Template(template),
        })
    }

    /// Create a rule that substitutes via a function.
    pub fn with_replacer(
        name: &'static str,
        pattern: &str,
        replacer: impl Fn(&Captures) -> String + Send + Sync + 'static,
    ) -> Result<Self> {
        Ok(Self {
            name,
            pattern: Regex::new(pattern)?,
            action: Substitution::Replacer(Box::new(replacer)),
        })
    }

    /// Apply this rule to every match in the input.
    pub fn apply(&self, input: &str) -> String {
        match &self.action {
            Substitution::Template(template) => {
                self.pattern.replace_all(input, *template).into_owned()
            }
            Substitution::Replacer(replacer) => self
                .pattern
                .replace_all(input, |caps: &Captures| replacer(caps))
                .into_owned(),
        }
    }

    /// Number of matches this rule would replace.
    pub fn match_count(&self, input: &str) -> usize {
        self.pattern.find_iter(input).count()
    }
}

/// The HTML to Markdown rule table, in application order.
///
/// Structural tags (headings, lists) are unwrapped by their own rules
/// before the generic paragraph unwrap, which strips any `<p>...</p>`
/// pair without inspecting its content. The heading rule appends a
/// newline so consecutive headings and following prose stay on separate
/// lines.
pub(crate) fn markdown_rules() -> Result<Vec<TagRule>> {
    Ok(vec![
        TagRule::with_replacer("heading", r"<h([1-6])>(.*?)</h([1-6])>", |caps: &Captures| {
            // A closing tag at a different level is not a heading pair;
            // leave the match untouched.
            if caps[1] != caps[3] {
                return caps[0].to_string();
            }
            let level = caps[1].parse::<usize>().unwrap_or(1);
            format!("{} {}\n", "#".repeat(level), &caps[2])
        })?,
        TagRule::with_template("bold", r"<strong>(.*?)</strong>", "**${1}**")?,
        TagRule::with_template("italic", r"<em>(.*?)</em>", "*${1}*")?,
        TagRule::with_template("line-break", "<br>", "  \n")?,
        TagRule::with_template("paragraph", r"<p>(.*?)</p>", "${1}")?,
        list::unordered_flatten_rule()?,
        list::ordered_flatten_rule()?,
    ])
}
