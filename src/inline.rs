/// Inline resolver: bold stripping plus link and code-span rewriting
use crate::ast::{Inline, InlineText};
use once_cell::sync::Lazy;
use regex::Regex;

/// Paired `**...**` spans. Unpaired markers never match and pass through.
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

/// `[label](target)` where the target contains no whitespace.
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^\s)]+)\)").unwrap());

/// `` `code` `` spans with no inner backtick.
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Resolve one plain-text fragment into inline markup.
///
/// The three rewrites run in a fixed order: bold markers are stripped first
/// (the text is kept, no emphasis node is produced), then link syntax becomes
/// `Anchor` nodes, then backtick spans in the remaining plain runs become
/// `Code` nodes. There is no escaping and no backtracking across passes, so a
/// link inside a backtick span is still rewritten as a link. Malformed syntax
/// simply fails to match and stays literal text. Infallible.
pub fn resolve(fragment: &str) -> InlineText {
    let stripped = strip_bold(fragment);

    let mut inlines = Vec::new();
    let mut cursor = 0;
    for caps in LINK.captures_iter(&stripped) {
        if let (Some(whole), Some(label), Some(dest)) = (caps.get(0), caps.get(1), caps.get(2)) {
            push_code_runs(&stripped[cursor..whole.start()], &mut inlines);
            inlines.push(Inline::Anchor {
                label: label.as_str().to_string(),
                destination: dest.as_str().to_string(),
                new_tab: true,
            });
            cursor = whole.end();
        }
    }
    push_code_runs(&stripped[cursor..], &mut inlines);

    inlines
}

/// Remove every paired `**X**`, keeping X. Left-to-right, non-greedy.
fn strip_bold(fragment: &str) -> String {
    BOLD.replace_all(fragment, "$1").into_owned()
}

/// Split a plain run on backtick spans, pushing `Text` and `Code` nodes.
fn push_code_runs(run: &str, inlines: &mut InlineText) {
    let mut cursor = 0;
    for caps in CODE.captures_iter(run) {
        if let (Some(whole), Some(code)) = (caps.get(0), caps.get(1)) {
            push_text(&run[cursor..whole.start()], inlines);
            inlines.push(Inline::Code(code.as_str().to_string()));
            cursor = whole.end();
        }
    }
    push_text(&run[cursor..], inlines);
}

/// Empty runs are dropped rather than emitted as empty text nodes.
fn push_text(text: &str, inlines: &mut InlineText) {
    if !text.is_empty() {
        inlines.push(Inline::Text(text.to_string()));
    }
}
