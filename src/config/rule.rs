//! Substitution rule
//!
//! A rule replaces a literal word and its uppercase form with another
//! literal word and its uppercase form.

use std::fmt;

use crate::errors::{invalid_rule_error, Result};

/// A pair of literal words expanded into their verbatim and uppercase forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionRule {
    old: String,
    new: String,
    old_upper: String,
    new_upper: String,
}

impl SubstitutionRule {
    /// Creates a new rule replacing `old` with `new`
    ///
    /// # Arguments
    /// * `old` - The word to replace
    /// * `new` - The replacement word
    ///
    /// # Returns
    /// * `Result<SubstitutionRule>` - The rule or an error
    ///
    /// # Errors
    /// * Returns an error if `old` is empty
    /// * Returns an error if `old` and `new` are identical, since the rule would do nothing
    pub fn new(old: &str, new: &str) -> Result<Self> {
        if old.is_empty() {
            return Err(invalid_rule_error("the word to replace must not be empty"));
        }
        if old == new {
            return Err(invalid_rule_error(&format!(
                "'{old}' would be replaced with itself"
            )));
        }

        Ok(SubstitutionRule {
            old: old.to_string(),
            new: new.to_string(),
            old_upper: old.to_uppercase(),
            new_upper: new.to_uppercase(),
        })
    }

    pub fn old(&self) -> &str {
        &self.old
    }

    pub fn new_word(&self) -> &str {
        &self.new
    }

    pub fn old_upper(&self) -> &str {
        &self.old_upper
    }

    pub fn new_upper(&self) -> &str {
        &self.new_upper
    }

    /// Checks whether the text contains the old word or its uppercase form
    pub fn matches(&self, text: &str) -> bool {
        text.contains(&self.old) || text.contains(&self.old_upper)
    }

    /// Applies both replacements in order: verbatim first, uppercase second
    pub fn apply(&self, text: &str) -> String {
        text.replace(&self.old, &self.new)
            .replace(&self.old_upper, &self.new_upper)
    }

    /// Returns the replaced text, or `None` if the text has nothing to replace
    /// or the replacements leave it unchanged
    pub fn rewrite(&self, text: &str) -> Option<String> {
        if !self.matches(text) {
            return None;
        }
        let replaced = self.apply(text);
        if replaced == text {
            None
        } else {
            Some(replaced)
        }
    }
}

impl fmt::Display for SubstitutionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' -> '{}', '{}' -> '{}'",
            self.old, self.new, self.old_upper, self.new_upper
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_expands_uppercase_forms() {
        let rule = SubstitutionRule::new("bgd", "xyz").unwrap();

        assert_eq!(rule.old(), "bgd");
        assert_eq!(rule.new_word(), "xyz");
        assert_eq!(rule.old_upper(), "BGD");
        assert_eq!(rule.new_upper(), "XYZ");
    }

    #[test]
    fn test_rule_rejects_identical_words() {
        let result = SubstitutionRule::new("BGD", "BGD");
        assert!(result.is_err(), "Identical words should be rejected");
    }

    #[test]
    fn test_rule_rejects_empty_old_word() {
        assert!(SubstitutionRule::new("", "xyz").is_err());
    }

    #[test]
    fn test_rule_allows_empty_new_word() {
        let rule = SubstitutionRule::new("bgd", "").unwrap();
        assert_eq!(rule.apply("a_bgd_b_BGD"), "a__b_");
    }

    #[test]
    fn test_matches_only_exact_cases() {
        let rule = SubstitutionRule::new("bgd", "xyz").unwrap();

        assert!(rule.matches("the bgd project"));
        assert!(rule.matches("THE BGD PROJECT"));
        assert!(!rule.matches("the BgD project"));
        assert!(!rule.matches("nothing here"));
    }

    #[test]
    fn test_apply_replaces_both_forms() {
        let rule = SubstitutionRule::new("bgd", "xyz").unwrap();

        assert_eq!(rule.apply("bgd and BGD and BgD"), "xyz and XYZ and BgD");
    }

    #[test]
    fn test_apply_runs_verbatim_replacement_first() {
        // The uppercase step sees the output of the verbatim step
        let rule = SubstitutionRule::new("ab", "AB-x").unwrap();

        assert_eq!(rule.apply("ab"), "AB-X-x");
        assert_eq!(rule.apply("AB"), "AB-X");
    }

    #[test]
    fn test_rewrite_skips_unchanged_text() {
        let rule = SubstitutionRule::new("bgd", "Bgd").unwrap();

        // Both uppercase forms are "BGD", so uppercase text stays the same
        assert_eq!(rule.rewrite("BGD only"), None);
        assert_eq!(rule.rewrite("no match"), None);
        assert_eq!(rule.rewrite("bgd here"), Some("Bgd here".to_string()));
    }

    #[test]
    fn test_display_lists_both_replacements() {
        let rule = SubstitutionRule::new("bgd", "xyz").unwrap();

        assert_eq!(rule.to_string(), "'bgd' -> 'xyz', 'BGD' -> 'XYZ'");
    }
}
