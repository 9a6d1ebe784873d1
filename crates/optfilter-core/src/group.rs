use std::collections::BTreeMap;

use crate::control::{SelectControl, PLACEHOLDER_INDEX};
use crate::extract::find_parenthetical;
use crate::normalize::{FilterKey, Normalizer};

/// Filter categories found in a control's option labels.
///
/// Keys iterate in ascending codepoint order. Each key keeps the trimmed
/// parenthesized text of the first option that produced it as its caption.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionGroups {
    groups: BTreeMap<FilterKey, String>,
    has_general: bool,
}

impl OptionGroups {
    /// Scans labels that exclude the placeholder entry.
    pub fn scan<'a, I>(normalizer: &Normalizer, labels: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut out = Self::default();
        for label in labels {
            match find_parenthetical(label) {
                Some(inner) => {
                    let key = normalizer.normalize(inner);
                    out.groups
                        .entry(key)
                        .or_insert_with(|| inner.trim().to_string());
                }
                None => out.has_general = true,
            }
        }
        out
    }

    pub fn from_control<C: SelectControl + ?Sized>(normalizer: &Normalizer, control: &C) -> Self {
        let labels = (PLACEHOLDER_INDEX + 1..control.len()).filter_map(|index| control.label(index));
        Self::scan(normalizer, labels)
    }

    pub fn keys(&self) -> impl Iterator<Item = &FilterKey> {
        self.groups.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FilterKey, &str)> {
        self.groups.iter().map(|(key, display)| (key, display.as_str()))
    }

    pub fn display_label(&self, key: &FilterKey) -> Option<&str> {
        self.groups.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &FilterKey) -> bool {
        self.groups.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// True when at least one option has no parenthesized span.
    pub fn has_general(&self) -> bool {
        self.has_general
    }
}

#[cfg(test)]
mod tests {
    use super::OptionGroups;
    use crate::control::OptionList;
    use crate::normalize::{normalize_label, Normalizer};

    #[test]
    fn first_seen_display_wins() {
        let normalizer = Normalizer::default();
        let groups = OptionGroups::scan(
            &normalizer,
            [
                "أ (قسم الرياضيات و العلوم)",
                "ب (الرياضيات والعلوم)",
                "ج ( الرياضيات  و العلوم )",
            ],
        );
        assert_eq!(groups.len(), 1);
        let key = normalize_label("الرياضيات و العلوم");
        assert_eq!(groups.display_label(&key), Some("قسم الرياضيات و العلوم"));
        assert!(!groups.has_general());
    }

    #[test]
    fn keys_are_sorted_by_codepoint() {
        let normalizer = Normalizer::default();
        let groups = OptionGroups::scan(&normalizer, ["x (b)", "y (B)", "z (a)", "w (ب)"]);
        let keys: Vec<&str> = groups.keys().map(|key| key.as_str()).collect();
        assert_eq!(keys, vec!["B", "a", "b", "ب"]);
    }

    #[test]
    fn general_bucket_is_sticky() {
        let normalizer = Normalizer::default();
        let groups = OptionGroups::scan(&normalizer, ["plain", "x (a)", "y (b)"]);
        assert!(groups.has_general());
        assert_eq!(groups.len(), 2);

        let groups = OptionGroups::scan(&normalizer, ["x (a)", "y (b)"]);
        assert!(!groups.has_general());
    }

    #[test]
    fn empty_span_is_its_own_group() {
        let normalizer = Normalizer::default();
        let groups = OptionGroups::scan(&normalizer, ["x ( )"]);
        assert_eq!(groups.len(), 1);
        assert!(!groups.has_general());
    }

    #[test]
    fn from_control_skips_placeholder() {
        let normalizer = Normalizer::default();
        let control = OptionList::from_labels(["-- (اختر) --", "a (x)"]);
        let groups = OptionGroups::from_control(&normalizer, &control);
        let keys: Vec<&str> = groups.keys().map(|key| key.as_str()).collect();
        assert_eq!(keys, vec!["x"]);
        assert!(!groups.has_general());
    }
}
