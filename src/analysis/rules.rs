//! Composition rules checked for every password.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::RuleSet;

pub const MIN_LENGTH: usize = 8;

// `\d` is Unicode-aware, so Arabic-Indic and other Nd digits count too.
static DIGIT: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\d").ok());

pub(crate) fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub(crate) fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub(crate) fn has_digit(password: &str) -> bool {
    DIGIT.as_ref().is_some_and(|re| re.is_match(password))
}

/// Anything outside `[A-Za-z0-9]` counts as special, including non-ASCII.
pub(crate) fn has_special(password: &str) -> bool {
    password.chars().any(|c| !c.is_ascii_alphanumeric())
}

/// Applies every rule to the password.
pub fn check_rules(password: &str) -> RuleSet {
    RuleSet {
        length: password.chars().count() >= MIN_LENGTH,
        uppercase: has_uppercase(password),
        lowercase: has_lowercase(password),
        number: has_digit(password),
        special: has_special(password),
    }
}
