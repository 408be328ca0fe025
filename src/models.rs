// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

/// A single password-composition criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Rule {
    Length,
    Uppercase,
    Lowercase,
    Number,
    Special,
}

impl Rule {
    /// Checklist display order.
    pub const ALL: [Rule; 5] = [
        Rule::Length,
        Rule::Uppercase,
        Rule::Lowercase,
        Rule::Number,
        Rule::Special,
    ];

    #[cfg(test)]
    pub fn key(&self) -> &'static str {
        match self {
            Rule::Length => "length",
            Rule::Uppercase => "uppercase",
            Rule::Lowercase => "lowercase",
            Rule::Number => "number",
            Rule::Special => "special",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Rule::Length => "At least 8 characters",
            Rule::Uppercase => "An uppercase letter",
            Rule::Lowercase => "A lowercase letter",
            Rule::Number => "A number",
            Rule::Special => "A special character",
        }
    }
}

/// Outcome of every rule for one password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RuleSet {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
    pub special: bool,
}

impl RuleSet {
    pub fn get(&self, rule: Rule) -> bool {
        match rule {
            Rule::Length => self.length,
            Rule::Uppercase => self.uppercase,
            Rule::Lowercase => self.lowercase,
            Rule::Number => self.number,
            Rule::Special => self.special,
        }
    }

    /// Rules paired with their outcome, in checklist order.
    pub fn iter(&self) -> impl Iterator<Item = (Rule, bool)> + '_ {
        Rule::ALL.iter().map(move |rule| (*rule, self.get(*rule)))
    }

    /// Number of satisfied rules, 0 to 5.
    pub fn score(&self) -> usize {
        self.iter().filter(|(_, satisfied)| *satisfied).count()
    }

    #[cfg(test)]
    pub fn all_satisfied() -> Self {
        Self {
            length: true,
            uppercase: true,
            lowercase: true,
            number: true,
            special: true,
        }
    }
}

/// Response body of `POST /check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StrengthResult {
    /// Outcome of each composition rule
    pub rules: RuleSet,
    /// Human-readable crack-time estimate
    pub crack_time: String,
}

/// Response body of `GET /generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedPassword {
    /// Freshly generated password
    pub password: String,
}

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationOptions {
    pub length: usize,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self { length: 16 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_set_uses_wire_keys() {
        let json = serde_json::to_value(RuleSet::all_satisfied()).unwrap();
        for rule in Rule::ALL {
            assert_eq!(json[rule.key()], serde_json::Value::Bool(true));
        }
    }

    #[test]
    fn score_counts_satisfied_rules() {
        let rules = RuleSet {
            lowercase: true,
            number: true,
            ..RuleSet::default()
        };
        assert_eq!(rules.score(), 2);
        assert_eq!(RuleSet::default().score(), 0);
        assert_eq!(RuleSet::all_satisfied().score(), 5);
    }

    #[test]
    fn strength_result_decodes_backend_payload() {
        let body = r#"{"rules":{"length":false,"uppercase":false,"lowercase":true,"number":false,"special":false},"crack_time":"instant"}"#;
        let result: StrengthResult = serde_json::from_str(body).unwrap();
        assert!(result.rules.lowercase);
        assert_eq!(result.rules.score(), 1);
        assert_eq!(result.crack_time, "instant");
    }
}
