//! Everything that can happen to the meter.

use super::backend::BackendError;
use crate::models::StrengthResult;

#[derive(Debug)]
pub enum UiEvent {
    /// The password text changed.
    Input(String),
    /// A `/check` round-trip completed. `password` is the text it evaluated.
    EvaluationFinished {
        request_id: u64,
        password: String,
        outcome: Result<StrengthResult, BackendError>,
    },
    GenerateRequested,
    GenerationFinished(Result<String, BackendError>),
    CopyRequested,
    /// The toast timer started by copy number `generation` elapsed.
    ToastExpired { generation: u64 },
    ThemeToggled,
}
