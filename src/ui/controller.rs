//! Event dispatch for the strength meter.
//!
//! `Controller::handle` mutates state synchronously. Backend calls and the
//! toast timer run as spawned tasks and report back through the event
//! channel, so all state changes happen on whichever task drains it.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::backend::{Backend, BackendError};
use super::clipboard::ClipboardSink;
use super::events::UiEvent;
use super::state::UiState;
use super::store::PreferenceStore;
use super::theme::{load_theme, save_theme};
use super::view::MeterView;
use crate::models::StrengthResult;
use crate::utils::redact;

pub const COPY_FAILED: &str = "Could not copy to clipboard";
pub const THEME_SAVE_FAILED: &str = "Could not save theme preference";

#[derive(Debug, Clone)]
pub struct ControllerOptions {
    pub toast_duration: Duration,
    /// Drop evaluation results whose text no longer matches the input.
    pub discard_stale_responses: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            toast_duration: Duration::from_secs(2),
            discard_stale_responses: true,
        }
    }
}

pub struct Controller {
    state: UiState,
    backend: Arc<dyn Backend>,
    store: Box<dyn PreferenceStore>,
    clipboard: Box<dyn ClipboardSink>,
    options: ControllerOptions,
    events: UnboundedSender<UiEvent>,
    next_request_id: u64,
    toast_generation: u64,
    in_flight: usize,
}

impl Controller {
    /// Builds the controller with the persisted theme already applied.
    pub fn new(
        backend: Arc<dyn Backend>,
        store: Box<dyn PreferenceStore>,
        clipboard: Box<dyn ClipboardSink>,
        options: ControllerOptions,
    ) -> (Self, UnboundedReceiver<UiEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let theme = load_theme(store.as_ref());
        log::debug!("Initial theme: {}", theme);

        let controller = Self {
            state: UiState::new(theme),
            backend,
            store,
            clipboard,
            options,
            events,
            next_request_id: 0,
            toast_generation: 0,
            in_flight: 0,
        };
        (controller, receiver)
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Whether a backend request is still outstanding.
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::Input(text) => self.on_input(text),
            UiEvent::EvaluationFinished {
                request_id,
                password,
                outcome,
            } => self.on_evaluation_finished(request_id, password, outcome),
            UiEvent::GenerateRequested => self.on_generate(),
            UiEvent::GenerationFinished(outcome) => self.on_generation_finished(outcome),
            UiEvent::CopyRequested => self.on_copy(),
            UiEvent::ToastExpired { generation } => self.on_toast_expired(generation),
            UiEvent::ThemeToggled => self.on_theme_toggled(),
        }
    }

    /// Applies events until no backend request is outstanding.
    pub async fn settle(&mut self, receiver: &mut UnboundedReceiver<UiEvent>) {
        while self.is_busy() {
            match receiver.recv().await {
                Some(event) => self.handle(event),
                None => break,
            }
        }
    }

    /// Applies whatever events are already queued without waiting.
    pub fn drain(&mut self, receiver: &mut UnboundedReceiver<UiEvent>) {
        while let Ok(event) = receiver.try_recv() {
            self.handle(event);
        }
    }

    fn on_input(&mut self, text: String) {
        self.state.input = text.clone();

        if text.is_empty() {
            self.state.view = MeterView::neutral();
            return;
        }

        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.in_flight += 1;
        log::debug!("Evaluating {} (request {})", redact(&text), request_id);

        let backend = Arc::clone(&self.backend);
        let events = self.events.clone();
        tokio::spawn(async move {
            let outcome = backend.check(&text).await;
            let _ = events.send(UiEvent::EvaluationFinished {
                request_id,
                password: text,
                outcome,
            });
        });
    }

    fn on_evaluation_finished(
        &mut self,
        request_id: u64,
        password: String,
        outcome: Result<StrengthResult, BackendError>,
    ) {
        self.in_flight = self.in_flight.saturating_sub(1);

        if self.options.discard_stale_responses && password != self.state.input {
            log::debug!("Discarding stale evaluation (request {})", request_id);
            return;
        }

        match outcome {
            Ok(result) => {
                self.state.view = MeterView::from_result(&result);
                log::debug!(
                    "Meter shows {} at {}% ({})",
                    self.state.view.label,
                    self.state.view.width_percent,
                    self.state.view.color.css()
                );
            }
            Err(e) => {
                log::warn!("Evaluation request {} failed: {}", request_id, e);
                self.state.view.show_error();
            }
        }
    }

    fn on_generate(&mut self) {
        self.in_flight += 1;

        let backend = Arc::clone(&self.backend);
        let events = self.events.clone();
        tokio::spawn(async move {
            let outcome = backend.generate().await;
            let _ = events.send(UiEvent::GenerationFinished(outcome));
        });
    }

    fn on_generation_finished(&mut self, outcome: Result<String, BackendError>) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match outcome {
            Ok(password) => {
                log::info!("Received generated password {}", redact(&password));
                self.state.generated = password.clone();
                self.handle(UiEvent::Input(password));
            }
            Err(e) => {
                log::warn!("Password generation failed: {}", e);
                self.state.view.show_error();
            }
        }
    }

    fn on_copy(&mut self) {
        if self.state.generated.is_empty() {
            return;
        }

        if let Err(e) = self.clipboard.write_text(&self.state.generated) {
            log::warn!("Copy to clipboard failed: {}", e);
            self.state.notice = Some(COPY_FAILED.to_string());
            return;
        }

        self.state.notice = None;
        self.state.toast_visible = true;
        self.toast_generation += 1;

        let generation = self.toast_generation;
        let duration = self.options.toast_duration;
        let events = self.events.clone();
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let _ = events.send(UiEvent::ToastExpired { generation });
        });
    }

    fn on_toast_expired(&mut self, generation: u64) {
        // Only the latest copy's timer may hide the toast.
        if generation == self.toast_generation {
            self.state.toast_visible = false;
        }
    }

    fn on_theme_toggled(&mut self) {
        self.state.theme = self.state.theme.toggled();
        log::info!(
            "Theme switched to {} (root class {:?})",
            self.state.theme,
            self.state.theme.root_class()
        );

        match save_theme(self.store.as_mut(), self.state.theme) {
            Ok(()) => self.state.notice = None,
            Err(e) => {
                log::warn!("Failed to persist theme: {}", e);
                self.state.notice = Some(THEME_SAVE_FAILED.to_string());
            }
        }
    }
}
