//! Canonical grouping keys for free-text option labels.
//!
//! Normalization is a fixed pipeline of three steps, each available on its
//! own so the rules can be checked independently:
//!
//! 1. [`collapse_whitespace`] trims the text and folds every whitespace run
//!    into a single ASCII space.
//! 2. [`merge_joiner`] glues the conjunction glyph to its neighbours by
//!    dropping one whitespace character on each side of it.
//! 3. [`strip_prefix_token`] removes one leading prefix word (compared
//!    case-insensitively) together with the whitespace that follows it.

use std::fmt;

use serde::Serialize;

use crate::error::CoreError;

pub const DEFAULT_JOINER: char = 'و';
pub const DEFAULT_PREFIX: &str = "قسم";

/// A normalized grouping key. Only produced by [`Normalizer`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FilterKey(String);

impl FilterKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FilterKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeRules {
    joiner: char,
    prefix: String,
}

impl NormalizeRules {
    pub fn new(joiner: char, prefix: &str) -> Result<Self, CoreError> {
        if joiner.is_whitespace() || joiner == '(' || joiner == ')' {
            return Err(CoreError::InvalidJoiner(joiner));
        }
        let prefix = prefix.trim();
        if prefix.is_empty() || prefix.chars().any(char::is_whitespace) {
            return Err(CoreError::InvalidPrefixToken(prefix.to_string()));
        }
        Ok(Self {
            joiner,
            prefix: prefix.to_string(),
        })
    }

    pub fn joiner(&self) -> char {
        self.joiner
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for NormalizeRules {
    fn default() -> Self {
        Self {
            joiner: DEFAULT_JOINER,
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalizer {
    rules: NormalizeRules,
}

impl Normalizer {
    pub fn new(rules: NormalizeRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &NormalizeRules {
        &self.rules
    }

    pub fn normalize(&self, raw: &str) -> FilterKey {
        let collapsed = collapse_whitespace(raw);
        let merged = merge_joiner(&collapsed, self.rules.joiner);
        let stripped = strip_prefix_token(&merged, &self.rules.prefix);
        FilterKey(stripped.to_string())
    }
}

/// Normalizes with the default joiner and prefix.
pub fn normalize_label(raw: &str) -> FilterKey {
    Normalizer::default().normalize(raw)
}

pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(segment);
    }
    out
}

/// Drops at most one whitespace character directly before and one directly
/// after each `joiner`. The glyph is matched wherever it appears, including
/// inside words.
pub fn merge_joiner(text: &str, joiner: char) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        if ch == joiner {
            out.push(ch);
            i += 1;
            if chars.get(i).is_some_and(|next| next.is_whitespace()) {
                i += 1;
            }
            continue;
        }
        if ch.is_whitespace() && chars.get(i + 1) == Some(&joiner) {
            i += 1;
            continue;
        }
        out.push(ch);
        i += 1;
    }
    out
}

/// Removes a single leading `prefix` followed by at least one whitespace
/// character. Returns the input unchanged when it does not start that way.
pub fn strip_prefix_token<'a>(text: &'a str, prefix: &str) -> &'a str {
    let mut chars = text.char_indices();
    let mut end = 0;
    for expected in prefix.chars() {
        match chars.next() {
            Some((idx, ch)) if eq_ignore_case(ch, expected) => end = idx + ch.len_utf8(),
            _ => return text,
        }
    }

    let rest = &text[end..];
    let trimmed = rest.trim_start();
    if trimmed.len() == rest.len() {
        return text;
    }
    trimmed
}

fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::{
        collapse_whitespace, merge_joiner, normalize_label, strip_prefix_token, NormalizeRules,
        Normalizer,
    };
    use crate::error::CoreError;

    #[test]
    fn collapse_trims_and_folds_runs() {
        assert_eq!(collapse_whitespace("  a \t\n b   c "), "a b c");
        assert_eq!(collapse_whitespace(""), "");
        assert_eq!(collapse_whitespace(" \u{a0} "), "");
    }

    #[test]
    fn merge_joiner_drops_surrounding_spaces() {
        assert_eq!(merge_joiner("الرياضيات و العلوم", 'و'), "الرياضياتوالعلوم");
        assert_eq!(merge_joiner("a و و b", 'و'), "aووb");
    }

    #[test]
    fn merge_joiner_only_takes_one_space_per_side() {
        assert_eq!(merge_joiner("a  و  b", 'و'), "a و b");
    }

    #[test]
    fn merge_joiner_matches_inside_words() {
        // "نحو" ends with the glyph, so the following space is swallowed too.
        assert_eq!(merge_joiner("نحو العلوم", 'و'), "نحوالعلوم");
        assert_eq!(merge_joiner("قسم علوم و رياضة", 'و'), "قسم علومورياضة");
        assert_eq!(merge_joiner("a-b c", '-'), "a-b c");
        assert_eq!(merge_joiner("a - b c", '-'), "a-b c");
    }

    #[test]
    fn strip_prefix_requires_following_whitespace() {
        assert_eq!(strip_prefix_token("قسم رياضيات", "قسم"), "رياضيات");
        assert_eq!(strip_prefix_token("قسمرياضيات", "قسم"), "قسمرياضيات");
        assert_eq!(strip_prefix_token("قسم", "قسم"), "قسم");
        assert_eq!(strip_prefix_token("رياضيات قسم x", "قسم"), "رياضيات قسم x");
    }

    #[test]
    fn strip_prefix_is_case_insensitive_on_token_only() {
        assert_eq!(strip_prefix_token("DEPT Science Lab", "dept"), "Science Lab");
        assert_eq!(strip_prefix_token("Dept  science", "dept"), "science");
        assert_eq!(strip_prefix_token("Department x", "dept"), "Department x");
    }

    #[test]
    fn normalize_joiner_example() {
        assert_eq!(
            normalize_label("قسم الرياضيات و العلوم"),
            normalize_label("الرياضياتوالعلوم")
        );
        assert_eq!(
            normalize_label("قسم الرياضيات و العلوم").as_str(),
            "الرياضياتوالعلوم"
        );
    }

    #[test]
    fn normalize_strips_only_first_prefix() {
        assert_eq!(normalize_label("قسم قسم رياضيات").as_str(), "قسم رياضيات");
    }

    #[test]
    fn normalize_is_whitespace_insensitive() {
        assert_eq!(normalize_label("a   b"), normalize_label("a b"));
        assert_eq!(normalize_label("\tقسم   فيزياء \n"), normalize_label("فيزياء"));
    }

    #[test]
    fn normalize_is_idempotent() {
        let inputs = [
            "",
            "   ",
            "رياضيات",
            "قسم الرياضيات و العلوم",
            "  a   و   b  ",
            "و",
            " و و ",
            "قسم  و",
            "Dept   of  Things",
        ];
        for input in inputs {
            let once = normalize_label(input);
            let twice = normalize_label(once.as_str());
            assert_eq!(once, twice, "input {input:?}");
        }
    }

    #[test]
    fn normalize_empty_input_gives_empty_key() {
        assert!(normalize_label("").is_empty());
        assert!(normalize_label(" \t ").is_empty());
    }

    #[test]
    fn custom_rules_apply() {
        let rules = NormalizeRules::new('&', "Dept").unwrap();
        let normalizer = Normalizer::new(rules);
        assert_eq!(
            normalizer.normalize("dept  Math & Science").as_str(),
            "Math&Science"
        );
    }

    #[test]
    fn rules_reject_bad_values() {
        assert_eq!(
            NormalizeRules::new(' ', "x").unwrap_err(),
            CoreError::InvalidJoiner(' ')
        );
        assert_eq!(
            NormalizeRules::new('(', "x").unwrap_err(),
            CoreError::InvalidJoiner('(')
        );
        assert_eq!(
            NormalizeRules::new('و', "two words").unwrap_err(),
            CoreError::InvalidPrefixToken("two words".to_string())
        );
        assert!(NormalizeRules::new('و', "  ").is_err());
    }
}
