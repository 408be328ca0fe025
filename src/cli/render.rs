//! Terminal rendering of the meter state.

use console::Style;

use crate::ui::view::{BarColor, MeterView};
use crate::ui::{Theme, UiState};
use crate::utils::render_bar;

const BAR_CELLS: usize = 20;
pub const TOAST_TEXT: &str = "📋 Copied to clipboard!";

fn bar_style(color: BarColor, theme: Theme) -> Style {
    let style = match color {
        BarColor::Transparent => Style::new().dim(),
        BarColor::Red => Style::new().red(),
        BarColor::Yellow => Style::new().yellow(),
        BarColor::Green => Style::new().green(),
    };
    // Bright variants read better on dark terminals
    if theme.is_light() {
        style
    } else {
        style.bright()
    }
}

fn render_view(view: &MeterView, theme: Theme) -> Vec<String> {
    let mut lines = Vec::new();

    let bar = render_bar(view.width_percent, BAR_CELLS);
    lines.push(format!(
        "{} {:>3}%  {}",
        bar_style(view.color, theme).apply_to(bar),
        view.width_percent,
        Style::new().bold().apply_to(&view.label)
    ));
    lines.push(view.crack_time_text.clone());

    for item in &view.checklist {
        let description = item.rule.description();
        let line = match item.class() {
            Some(_) => format!("  {} {}", item.icon(), bar_style(BarColor::Green, theme).apply_to(description)),
            None => format!("  {} {}", item.icon(), description),
        };
        lines.push(line);
    }

    lines
}

pub fn render_state(state: &UiState) -> String {
    let mut lines = vec![format!("{} {} theme", state.theme.icon(), state.theme)];

    if !state.input.is_empty() {
        lines.push(format!("🔑 Password: {}", "•".repeat(state.input.chars().count())));
    }
    lines.extend(render_view(&state.view, state.theme));

    if !state.generated.is_empty() {
        lines.push(format!("🎲 Generated: {}", state.generated));
    }
    if state.toast_visible {
        lines.push(TOAST_TEXT.to_string());
    }
    if let Some(notice) = &state.notice {
        lines.push(format!("⚠️  {}", notice));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RuleSet, StrengthResult};

    #[test]
    fn renders_neutral_state() {
        let output = render_state(&UiState::default());
        assert!(output.contains("🌙 dark theme"));
        assert!(output.contains("⏳ Estimated crack time: --"));
        assert_eq!(output.matches("❌").count(), 5);
        assert!(!output.contains(TOAST_TEXT));
    }

    #[test]
    fn renders_evaluated_state() {
        let state = UiState {
            input: "Tr0ub4dor&3".to_string(),
            generated: "Tr0ub4dor&3".to_string(),
            view: MeterView::from_result(&StrengthResult {
                rules: RuleSet::all_satisfied(),
                crack_time: "Centuries 🧠".to_string(),
            }),
            theme: Theme::Light,
            toast_visible: true,
            notice: None,
        };

        let output = render_state(&state);
        assert!(output.contains("☀️ light theme"));
        assert!(output.contains("100%"));
        assert!(output.contains("Unbreakable"));
        assert!(output.contains("🎲 Generated: Tr0ub4dor&3"));
        assert!(output.contains(TOAST_TEXT));
        assert_eq!(output.matches("✅").count(), 5);
        assert!(!output.contains("🔑 Password: Tr0ub4dor&3"));
    }

    #[test]
    fn renders_notice() {
        let state = UiState {
            notice: Some("Could not copy to clipboard".to_string()),
            ..UiState::default()
        };
        assert!(render_state(&state).contains("Could not copy to clipboard"));
    }
}
