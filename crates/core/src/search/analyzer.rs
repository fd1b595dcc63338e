//! Text normalization shared by indexing and query matching.

/// Case-fold text into the canonical form used for matching.
///
/// Both note content (at index time) and queries (at search time) pass
/// through the same fold, making matches case-insensitive. Nothing is
/// stripped or stemmed: queries are plain substring containment.
/// Idempotent and defined for any input, including the empty string.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Split normalized text into index terms.
///
/// Terms are maximal runs of alphanumeric characters; everything else
/// separates. Empty segments are dropped.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric()).filter(|t| !t.is_empty())
}

/// Byte offset of the first case-insensitive occurrence of `needle` in
/// `haystack`, relative to the untouched original text.
///
/// Characters are folded pairwise instead of lowercasing the whole
/// haystack, so the returned offset is always a valid position in
/// `haystack` even where case-folding changes string length.
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }

    for (start, _) in haystack.char_indices() {
        if starts_with_ignore_case(&haystack[start..], needle) {
            return Some(start);
        }
    }

    None
}

fn starts_with_ignore_case(haystack: &str, needle: &str) -> bool {
    let mut hay = haystack.chars().flat_map(char::to_lowercase);
    let mut ned = needle.chars().flat_map(char::to_lowercase);

    loop {
        match (ned.next(), hay.next()) {
            (None, _) => return true,
            (Some(_), None) => return false,
            (Some(n), Some(h)) if n == h => {}
            _ => return false,
        }
    }
}
