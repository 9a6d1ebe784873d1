use crate::normalize::{FilterKey, Normalizer};

/// Returns the text inside the first `( ... )` pair that encloses at least
/// one character. Parentheses do not nest: `"((a)"` yields `"(a"`.
pub fn find_parenthetical(label: &str) -> Option<&str> {
    let mut from = 0;
    while let Some(open) = label[from..].find('(') {
        let start = from + open + 1;
        let close = label[start..].find(')')?;
        if close > 0 {
            return Some(&label[start..start + close]);
        }
        from = start + 1;
    }
    None
}

/// Caption text for a label's group: the parenthesized span, trimmed only.
pub fn display_parenthetical(label: &str) -> Option<&str> {
    find_parenthetical(label).map(str::trim)
}

impl Normalizer {
    /// Grouping key of a label, or `None` when it has no parenthesized span.
    /// A span holding only whitespace gives an empty key, not `None`.
    pub fn extract_key(&self, label: &str) -> Option<FilterKey> {
        find_parenthetical(label).map(|inner| self.normalize(inner))
    }
}

#[cfg(test)]
mod tests {
    use super::{display_parenthetical, find_parenthetical};
    use crate::normalize::Normalizer;

    #[test]
    fn finds_first_span() {
        assert_eq!(find_parenthetical("العلوم (رياضيات) (فيزياء)"), Some("رياضيات"));
        assert_eq!(find_parenthetical("نشاط عام"), None);
    }

    #[test]
    fn skips_empty_pairs() {
        assert_eq!(find_parenthetical("() (x)"), Some("x"));
        assert_eq!(find_parenthetical("()"), None);
    }

    #[test]
    fn does_not_nest() {
        assert_eq!(find_parenthetical("((a)"), Some("(a"));
        assert_eq!(find_parenthetical("(a (b) c)"), Some("a (b"));
    }

    #[test]
    fn unclosed_span_is_absent() {
        assert_eq!(find_parenthetical("label (open"), None);
        assert_eq!(find_parenthetical("a) b"), None);
    }

    #[test]
    fn display_is_trimmed_not_normalized() {
        assert_eq!(
            display_parenthetical("x ( قسم  العلوم )"),
            Some("قسم  العلوم")
        );
    }

    #[test]
    fn extract_key_distinguishes_empty_from_absent() {
        let normalizer = Normalizer::default();
        let empty = normalizer.extract_key("label ( )").expect("span present");
        assert!(empty.is_empty());
        assert_eq!(normalizer.extract_key("label"), None);
    }

    #[test]
    fn extract_key_normalizes_span() {
        let normalizer = Normalizer::default();
        let key = normalizer.extract_key("شعبة (قسم  الرياضيات و العلوم)").unwrap();
        assert_eq!(key.as_str(), "الرياضياتوالعلوم");
    }
}
