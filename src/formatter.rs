//! Converts the limited markdown dialect used by post bodies into HTML.
//!
//! This is not a markdown parser. Post bodies go through a fixed chain of
//! regex rewrites ([`STAGES`]) and later stages see the output of earlier
//! ones, so the quirks of the chain are part of the output format:
//!
//! * emphasis is greedy within a line, so `**a** and **b**` becomes a single
//!   `<strong>` span;
//! * every list item gets its own `<ul>`;
//! * input HTML is passed through untouched (see [`format_escaped`] for
//!   untrusted content).
//!
//! Complete code fences are lifted out before the chain runs and put back
//! once it has finished, so no stage ever sees their contents. The
//! [`Stage::CodeFence`] slot in the chain is where that happened in the
//! legacy order; applied on its own it is the plain fence rewrite.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Heading1,
    Heading2,
    Heading3,
    Bold,
    Italic,
    LineBreak,
    CodeFence,
    ListItem,
    ListWrap,
}

pub const STAGES: [Stage; 9] = [
    Stage::Heading1,
    Stage::Heading2,
    Stage::Heading3,
    Stage::Bold,
    Stage::Italic,
    Stage::LineBreak,
    Stage::CodeFence,
    Stage::ListItem,
    Stage::ListWrap,
];

const LINE_BREAK: &str = "<br />";

// Stands in for a lifted fence while the stages run. No stage adds, drops or
// reorders it, so the n-th mask in the output is the n-th stashed entry.
const MASK: char = '\u{FDD0}';

// Captures stop at `\r` so CRLF line endings stay outside the tags.
static HEADING1: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# ([^\r\n]*)").unwrap());
static HEADING2: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^## ([^\r\n]*)").unwrap());
static HEADING3: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^### ([^\r\n]*)").unwrap());
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^\r\n]*)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^\r\n]*)\*").unwrap());
static FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").unwrap());
static FENCE_OR_MASK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(.*?)```|\x{FDD0}").unwrap());
static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^- ([^\r\n]*)").unwrap());
static LIST_WRAP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<li>.*?</li>").unwrap());

impl Stage {
    /// Applies this single rewrite to `input`.
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match self {
            Stage::Heading1 => HEADING1.replace_all(input, "<h1>${1}</h1>"),
            Stage::Heading2 => HEADING2.replace_all(input, "<h2>${1}</h2>"),
            Stage::Heading3 => HEADING3.replace_all(input, "<h3>${1}</h3>"),
            Stage::Bold => BOLD.replace_all(input, "<strong>${1}</strong>"),
            Stage::Italic => ITALIC.replace_all(input, "<em>${1}</em>"),
            Stage::LineBreak => {
                if input.contains('\n') {
                    Cow::Owned(input.replace('\n', LINE_BREAK))
                } else {
                    Cow::Borrowed(input)
                }
            }
            Stage::CodeFence => {
                FENCE.replace_all(input, |caps: &Captures| code_block(&caps[1]))
            }
            Stage::ListItem => list_items(input),
            Stage::ListWrap => LIST_WRAP.replace_all(input, "<ul>${0}</ul>"),
        }
    }
}

/// Renders post content to an HTML fragment.
pub fn format(content: &str) -> String {
    let (mut html, stash) = mask_fences(content);
    for stage in STAGES {
        // fences were lifted by `mask_fences`
        if stage == Stage::CodeFence {
            continue;
        }
        if let Cow::Owned(next) = stage.apply(&html) {
            html = next;
        }
    }
    unmask_fences(&html, &stash)
}

/// Like [`format`], but escapes HTML in `content` before any rewrite runs.
pub fn format_escaped(content: &str) -> String {
    format(&htmlescape::encode_minimal(content))
}

fn code_block(raw: &str) -> String {
    format!("<pre><code>{raw}</code></pre>")
}

// After `LineBreak` a line ends at `<br />` rather than `\n`.
fn list_items(input: &str) -> Cow<'_, str> {
    if !input.contains("- ") {
        return Cow::Borrowed(input);
    }
    let lines: Vec<Cow<'_, str>> = input
        .split(LINE_BREAK)
        .map(|line| LIST_ITEM.replace_all(line, "<li>${1}</li>"))
        .collect();
    Cow::Owned(lines.join(LINE_BREAK))
}

// Replaces every complete fence with `MASK` and stashes its rendered block.
// A `MASK` already present in the input is stashed as itself.
fn mask_fences(content: &str) -> (String, Vec<String>) {
    let mut stash = Vec::new();
    let masked = FENCE_OR_MASK.replace_all(content, |caps: &Captures| {
        match caps.get(1) {
            Some(raw) => stash.push(code_block(raw.as_str())),
            None => stash.push(MASK.to_string()),
        }
        MASK.to_string()
    });
    (masked.into_owned(), stash)
}

fn unmask_fences(input: &str, stash: &[String]) -> String {
    if stash.is_empty() {
        return input.to_owned();
    }
    let mut stash = stash.iter();
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match (ch == MASK).then(|| stash.next()).flatten() {
            Some(entry) => out.push_str(entry),
            None => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn heading_without_trailing_newline() {
        assert_eq!(format("# Title"), "<h1>Title</h1>");
    }

    #[test]
    fn headings_keep_their_line_break() {
        assert_eq!(
            format("# One\n## Two\n### Three\ntext"),
            "<h1>One</h1><br /><h2>Two</h2><br /><h3>Three</h3><br />text"
        );
    }

    #[test]
    fn heading_marker_needs_line_start_and_space() {
        assert_eq!(format("a # b"), "a # b");
        assert_eq!(format("#nospace"), "#nospace");
        assert_eq!(format("#### Four"), "#### Four");
    }

    #[test]
    fn newlines_become_breaks() {
        assert_eq!(format("Hello\nWorld"), "Hello<br />World");
    }

    #[test]
    fn bold_then_italic() {
        assert_eq!(
            format("**bold** and *italic*"),
            "<strong>bold</strong> and <em>italic</em>"
        );
    }

    #[test]
    fn emphasis_is_greedy_within_a_line() {
        assert_eq!(
            format("**a** and **b**"),
            "<strong>a<em>* and *</em>b</strong>"
        );
        assert_eq!(format("*a* and *b*"), "<em>a* and *b</em>");
    }

    #[test]
    fn emphasis_does_not_cross_lines() {
        assert_eq!(format("*a\nb*"), "*a<br />b*");
    }

    #[test]
    fn each_list_item_gets_its_own_list() {
        assert_eq!(
            format("- a\n- b"),
            "<ul><li>a</li></ul><br /><ul><li>b</li></ul>"
        );
    }

    #[test]
    fn list_marker_must_start_the_line() {
        assert_eq!(format("a - b"), "a - b");
    }

    #[test]
    fn bold_list_item() {
        assert_eq!(
            format("- **Performance**: fast"),
            "<ul><li><strong>Performance</strong>: fast</li></ul>"
        );
    }

    #[test]
    fn code_fence_is_verbatim() {
        assert_eq!(format("```\ncode\n```"), "<pre><code>\ncode\n</code></pre>");
    }

    #[test]
    fn code_fence_contents_are_not_rewritten() {
        assert_eq!(
            format("```\n# not a heading\n- **x**\n```"),
            "<pre><code>\n# not a heading\n- **x**\n</code></pre>"
        );
    }

    #[test]
    fn code_fence_between_paragraphs() {
        assert_eq!(
            format("before\n```ts\nlet a = 1;\n```\nafter"),
            "before<br /><pre><code>ts\nlet a = 1;\n</code></pre><br />after"
        );
    }

    #[test]
    fn dollar_signs_in_fence_are_literal() {
        assert_eq!(format("```$1 ${0}```"), "<pre><code>$1 ${0}</code></pre>");
    }

    #[test]
    fn unterminated_fence_is_left_alone() {
        assert_eq!(format("```\ncode"), "```<br />code");
    }

    #[test]
    fn empty_input() {
        assert_eq!(format(""), "");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(format("just words"), "just words");
    }

    #[test]
    fn html_is_not_escaped() {
        assert_eq!(format("<b>x</b>"), "<b>x</b>");
    }

    #[test]
    fn escaped_variant_neutralizes_markup() {
        let html = format_escaped("<script>alert(1)</script>\n**hi**");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.ends_with("<br /><strong>hi</strong>"));
    }

    #[test]
    fn stages_apply_in_isolation() {
        assert_eq!(Stage::Heading2.apply("## Sub"), "<h2>Sub</h2>");
        assert_eq!(Stage::Heading1.apply("## Sub"), "## Sub");
        assert_eq!(Stage::Italic.apply("**x**"), "<em>*x*</em>");
        assert_eq!(Stage::LineBreak.apply("a\nb"), "a<br />b");
        assert_eq!(
            Stage::CodeFence.apply("```a\nb```"),
            "<pre><code>a\nb</code></pre>"
        );
        assert_eq!(Stage::ListItem.apply("- a\n- b"), "<li>a</li>\n<li>b</li>");
        assert_eq!(
            Stage::ListWrap.apply("<li>a</li><li>b</li>"),
            "<ul><li>a</li></ul><ul><li>b</li></ul>"
        );
    }

    #[test]
    fn stage_order_is_fixed() {
        assert_eq!(STAGES.first(), Some(&Stage::Heading1));
        assert_eq!(STAGES.last(), Some(&Stage::ListWrap));
        let pos = |s| STAGES.iter().position(|x| *x == s).unwrap();
        assert!(pos(Stage::Bold) < pos(Stage::Italic));
        assert!(pos(Stage::LineBreak) < pos(Stage::ListItem));
    }

    #[test]
    fn renders_seed_post() {
        let post = &seed::posts()[0];
        let html = format(&post.content);
        assert!(html.starts_with("<br /><h1>Getting Started with Next.js Edge Runtime</h1>"));
        assert!(html.contains("<h2>What is Edge Runtime?</h2>"));
        assert!(html.contains("<ul><li><strong>Performance</strong>: Faster"));
        assert!(html.contains("<pre><code>ts\nexport const config = {\n  runtime: 'edge',\n}\n</code></pre>"));
        assert!(!html.contains(MASK));
    }

    #[test]
    fn list_markers_inside_fence_are_kept() {
        assert_eq!(format("```\n- item\n```"), "<pre><code>\n- item\n</code></pre>");
    }

    #[test]
    fn list_tags_inside_fence_are_not_wrapped() {
        assert_eq!(format("```\n<li>x</li>\n```"), "<pre><code>\n<li>x</li>\n</code></pre>");
    }

    #[test]
    fn fence_with_list_markup_and_emphasis() {
        assert_eq!(
            format("```\n- **a**\n<li>b</li>\n*c*\n```"),
            "<pre><code>\n- **a**\n<li>b</li>\n*c*\n</code></pre>"
        );
    }

    #[test]
    fn list_item_after_fence() {
        assert_eq!(
            format("```\nx\n```\n- a"),
            "<pre><code>\nx\n</code></pre><br /><ul><li>a</li></ul>"
        );
    }

    #[test]
    fn fence_inside_heading_line() {
        assert_eq!(
            format("# Run ```cargo test```"),
            "<h1>Run <pre><code>cargo test</code></pre></h1>"
        );
    }

    #[test]
    fn sentinel_chars_in_input_survive() {
        assert_eq!(
            format("\u{FDD0}0\u{FDD1} ```x```"),
            "\u{FDD0}0\u{FDD1} <pre><code>x</code></pre>"
        );
        assert_eq!(format("a\u{FDD0}b"), "a\u{FDD0}b");
        assert_eq!(
            format("```1```\u{FDD0}```2```"),
            "<pre><code>1</code></pre>\u{FDD0}<pre><code>2</code></pre>"
        );
    }

    #[test]
    fn crlf_stays_outside_tags() {
        assert_eq!(format("# T\r\nx"), "<h1>T</h1>\r<br />x");
        assert_eq!(format("**b**\r\n- i\r\n"), "<strong>b</strong>\r<br /><ul><li>i</li></ul>\r<br />");
    }
}
