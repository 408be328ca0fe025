//! Password analysis: composition rules and crack-time estimation.
//!
//! Each concern lives in its own submodule and is a pure function of the
//! password, so the HTTP layer can call them without shared state.

mod crack_time;
mod rules;

pub use crack_time::{estimate_crack_time, DEFAULT_GUESSES_PER_SECOND};
pub use rules::check_rules;

use crate::models::StrengthResult;

/// Evaluates a password the way `POST /check` reports it.
pub struct PasswordAnalyzer {
    guesses_per_second: f64,
}

impl PasswordAnalyzer {
    pub fn new(guesses_per_second: f64) -> Self {
        Self { guesses_per_second }
    }

    pub fn analyze(&self, password: &str) -> StrengthResult {
        StrengthResult {
            rules: check_rules(password),
            crack_time: estimate_crack_time(password, self.guesses_per_second)
                .label()
                .to_string(),
        }
    }
}

impl Default for PasswordAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_GUESSES_PER_SECOND)
    }
}
