//! Snippet extraction and keyword highlighting.
//!
//! Two separate passes with intentionally different boundary rules:
//! [`make_snippet`] marks whole-word occurrences inside a bounded excerpt
//! for the result list, while [`highlight_preview`] marks every
//! occurrence across the full document for the preview pane and records
//! where to scroll. Keep them separate; their semantics are not
//! interchangeable.

use regex::Regex;

use super::analyzer::find_ignore_case;

/// Maximum snippet length, in characters.
const SNIPPET_LEN: usize = 300;

/// Characters of context kept before the first match.
const SNIPPET_LEAD: usize = 50;

/// Extract a bounded excerpt around the first case-insensitive match of
/// `keyword`, wrapping whole-word occurrences in `<mark>` tags.
///
/// Returns an empty string when either input is blank or the keyword does
/// not occur. The window starts up to [`SNIPPET_LEAD`] characters before
/// the match and spans at most [`SNIPPET_LEN`] characters, clamped to the
/// document at both ends.
pub fn make_snippet(content: &str, keyword: &str) -> String {
    if content.trim().is_empty() || keyword.trim().is_empty() {
        return String::new();
    }
    let Some(match_idx) = find_ignore_case(content, keyword) else {
        return String::new();
    };

    let start = content[..match_idx]
        .char_indices()
        .rev()
        .nth(SNIPPET_LEAD - 1)
        .map_or(0, |(i, _)| i);
    let end = content[start..]
        .char_indices()
        .nth(SNIPPET_LEN)
        .map_or(content.len(), |(i, _)| start + i);

    mark_word_occurrences(&content[start..end], keyword)
}

/// Wrap every whole-word, case-insensitive occurrence of `keyword` in
/// `<mark>` tags. A keyword embedded inside a longer word stays unmarked.
fn mark_word_occurrences(text: &str, keyword: &str) -> String {
    let pattern = format!(r"(?i)\b({})\b", regex::escape(keyword));
    match Regex::new(&pattern) {
        Ok(re) => re.replace_all(text, "<mark>$1</mark>").into_owned(),
        // An escaped pattern that still fails to compile leaves the
        // window unmarked.
        Err(_) => text.to_string(),
    }
}

/// Full-document highlight for the preview pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewHighlight {
    /// Document text with every occurrence of the keyword wrapped in
    /// `<mark>` tags.
    pub content: String,
    /// Byte offset of the first occurrence in the original text, the
    /// scroll target for jumping to the match.
    pub anchor: Option<usize>,
}

/// Mark every case-insensitive occurrence of `keyword` across the whole
/// document, without word-boundary matching.
///
/// Unlike [`make_snippet`], embedded occurrences ("cat" inside
/// "category") are marked too; the preview pane wants every place the
/// query text appears. A blank keyword returns the content untouched.
pub fn highlight_preview(content: &str, keyword: &str) -> PreviewHighlight {
    if keyword.trim().is_empty() {
        return PreviewHighlight { content: content.to_string(), anchor: None };
    }

    let anchor = find_ignore_case(content, keyword);
    let pattern = format!("(?i){}", regex::escape(keyword));
    let content = match Regex::new(&pattern) {
        Ok(re) => re.replace_all(content, "<mark>$0</mark>").into_owned(),
        Err(_) => content.to_string(),
    };

    PreviewHighlight { content, anchor }
}
