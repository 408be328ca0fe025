//! Rendered projection of a strength evaluation.

use crate::models::{Rule, RuleSet, StrengthResult};

/// Labels indexed by score.
pub const STRENGTH_LABELS: [&str; 6] = [
    "Very Weak",
    "Weak",
    "Okay",
    "Strong",
    "Very Strong",
    "Unbreakable",
];

pub const SERVER_ERROR: &str = "Server error";
pub const CRACK_TIME_PREFIX: &str = "⏳ Estimated crack time: ";
pub const CRACK_TIME_PLACEHOLDER: &str = "--";

pub const SATISFIED_ICON: &str = "✅";
pub const UNSATISFIED_ICON: &str = "❌";
pub const VALID_CLASS: &str = "valid";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarColor {
    Transparent,
    Red,
    Yellow,
    Green,
}

impl BarColor {
    pub fn for_score(score: usize) -> Self {
        match score {
            0..=2 => BarColor::Red,
            3 => BarColor::Yellow,
            _ => BarColor::Green,
        }
    }

    pub fn css(&self) -> &'static str {
        match self {
            BarColor::Transparent => "transparent",
            BarColor::Red => "#ff6b6b",
            BarColor::Yellow => "#f1c40f",
            BarColor::Green => "#2ecc71",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistItem {
    pub rule: Rule,
    pub satisfied: bool,
}

impl ChecklistItem {
    pub fn icon(&self) -> &'static str {
        if self.satisfied {
            SATISFIED_ICON
        } else {
            UNSATISFIED_ICON
        }
    }

    pub fn class(&self) -> Option<&'static str> {
        self.satisfied.then_some(VALID_CLASS)
    }
}

/// Bar width in percent for a score, clamped to 100.
pub fn bar_width(score: usize) -> u8 {
    // min() first keeps the cast lossless
    (score.min(5) * 20) as u8
}

pub fn strength_label(score: usize) -> &'static str {
    STRENGTH_LABELS[score.min(STRENGTH_LABELS.len() - 1)]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterView {
    pub width_percent: u8,
    pub color: BarColor,
    pub label: String,
    pub crack_time_text: String,
    pub checklist: Vec<ChecklistItem>,
}

impl MeterView {
    /// State shown while the input is empty.
    pub fn neutral() -> Self {
        Self {
            width_percent: 0,
            color: BarColor::Transparent,
            label: String::new(),
            crack_time_text: format!("{CRACK_TIME_PREFIX}{CRACK_TIME_PLACEHOLDER}"),
            checklist: checklist(&RuleSet::default()),
        }
    }

    pub fn from_result(result: &StrengthResult) -> Self {
        let score = result.rules.score();
        Self {
            width_percent: bar_width(score),
            color: BarColor::for_score(score),
            label: strength_label(score).to_string(),
            crack_time_text: format!("{CRACK_TIME_PREFIX}{}", result.crack_time),
            checklist: checklist(&result.rules),
        }
    }

    /// Replaces the label only; bar, crack time and checklist keep their
    /// last values.
    pub fn show_error(&mut self) {
        self.label = SERVER_ERROR.to_string();
    }
}

impl Default for MeterView {
    fn default() -> Self {
        Self::neutral()
    }
}

fn checklist(rules: &RuleSet) -> Vec<ChecklistItem> {
    rules
        .iter()
        .map(|(rule, satisfied)| ChecklistItem { rule, satisfied })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules_with_score(score: usize) -> RuleSet {
        let mut rules = RuleSet::default();
        for rule in Rule::ALL.iter().take(score) {
            match rule {
                Rule::Length => rules.length = true,
                Rule::Uppercase => rules.uppercase = true,
                Rule::Lowercase => rules.lowercase = true,
                Rule::Number => rules.number = true,
                Rule::Special => rules.special = true,
            }
        }
        rules
    }

    #[test]
    fn width_is_twenty_per_satisfied_rule() {
        for score in 0..=5 {
            let view = MeterView::from_result(&StrengthResult {
                rules: rules_with_score(score),
                crack_time: "x".to_string(),
            });
            assert_eq!(usize::from(view.width_percent), score * 20);
        }
        assert_eq!(bar_width(9), 100);
    }

    #[test]
    fn color_thresholds() {
        assert_eq!(BarColor::for_score(0), BarColor::Red);
        assert_eq!(BarColor::for_score(2), BarColor::Red);
        assert_eq!(BarColor::for_score(3), BarColor::Yellow);
        assert_eq!(BarColor::for_score(4), BarColor::Green);
        assert_eq!(BarColor::for_score(5), BarColor::Green);
    }

    #[test]
    fn labels_follow_score() {
        let expected = ["Very Weak", "Weak", "Okay", "Strong", "Very Strong", "Unbreakable"];
        for (score, label) in expected.iter().enumerate() {
            assert_eq!(strength_label(score), *label);
        }
    }

    #[test]
    fn neutral_view() {
        let view = MeterView::neutral();
        assert_eq!(view.width_percent, 0);
        assert_eq!(view.color.css(), "transparent");
        assert_eq!(view.label, "");
        assert_eq!(view.crack_time_text, "⏳ Estimated crack time: --");
        assert_eq!(view.checklist.len(), 5);
        assert!(view
            .checklist
            .iter()
            .all(|item| item.icon() == "❌" && item.class().is_none()));
    }

    #[test]
    fn lowercase_only_example() {
        let view = MeterView::from_result(&StrengthResult {
            rules: RuleSet {
                lowercase: true,
                ..RuleSet::default()
            },
            crack_time: "instant".to_string(),
        });
        assert_eq!(view.width_percent, 20);
        assert_eq!(view.color, BarColor::Red);
        assert_eq!(view.label, "Weak");
        assert_eq!(view.crack_time_text, "⏳ Estimated crack time: instant");

        let lowercase = view
            .checklist
            .iter()
            .find(|item| item.rule == Rule::Lowercase)
            .unwrap();
        assert_eq!(lowercase.icon(), "✅");
        assert_eq!(lowercase.class(), Some("valid"));
    }

    #[test]
    fn all_rules_example() {
        let view = MeterView::from_result(&StrengthResult {
            rules: RuleSet::all_satisfied(),
            crack_time: "Centuries 🧠".to_string(),
        });
        assert_eq!(view.width_percent, 100);
        assert_eq!(view.color, BarColor::Green);
        assert_eq!(view.label, "Unbreakable");
    }

    #[test]
    fn checklist_keeps_display_order() {
        let rules: Vec<Rule> = MeterView::neutral().checklist.iter().map(|i| i.rule).collect();
        assert_eq!(rules, Rule::ALL.to_vec());
    }

    #[test]
    fn show_error_only_touches_label() {
        let mut view = MeterView::from_result(&StrengthResult {
            rules: RuleSet::all_satisfied(),
            crack_time: "Years 😈".to_string(),
        });
        view.show_error();
        assert_eq!(view.label, "Server error");
        assert_eq!(view.width_percent, 100);
        assert_eq!(view.crack_time_text, "⏳ Estimated crack time: Years 😈");
    }
}
