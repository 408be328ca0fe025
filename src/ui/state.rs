use super::theme::Theme;
use super::view::MeterView;

/// Everything the meter displays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiState {
    pub input: String,
    pub generated: String,
    pub view: MeterView,
    pub theme: Theme,
    pub toast_visible: bool,
    /// Last non-fatal problem worth telling the user about.
    pub notice: Option<String>,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }
}
