//! Keyword extraction from query text.

/// Extract alphabetic keywords from a query.
///
/// Keeps whitespace-separated words that are entirely alphabetic after
/// trimming surrounding punctuation ("rust," yields "rust", "abc123" is
/// dropped). Order-preserving and de-duplicated.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut keywords = Vec::new();
    for word in text.split_whitespace() {
        let token = word.trim_matches(|c: char| !c.is_alphanumeric());
        if token.is_empty() || !token.chars().all(char::is_alphabetic) {
            continue;
        }
        if seen.insert(token.to_string()) {
            keywords.push(token.to_string());
        }
    }
    keywords
}

#[cfg(test)]
mod tests {
    use super::extract_keywords;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_alphabetic_tokens_only() {
        assert_eq!(
            extract_keywords("what is rust 2024?"),
            vec!["what", "is", "rust"]
        );
    }

    #[test]
    fn strips_surrounding_punctuation() {
        assert_eq!(
            extract_keywords("hello, world! (again)"),
            vec!["hello", "world", "again"]
        );
    }

    #[test]
    fn drops_mixed_alphanumeric_words() {
        assert_eq!(extract_keywords("abc123 v2 plain"), vec!["plain"]);
    }

    #[test]
    fn deduplicates_preserving_order() {
        assert_eq!(
            extract_keywords("the cat and the hat"),
            vec!["the", "cat", "and", "hat"]
        );
    }

    #[test]
    fn empty_input_yields_no_keywords() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("123 456 --").is_empty());
    }
}
