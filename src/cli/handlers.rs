// src/cli/handlers.rs
use tokio::sync::mpsc::UnboundedReceiver;

use crate::ui::{Controller, UiEvent, UiState};

// Handlers for one-shot CLI commands

pub async fn handle_check(
    mut controller: Controller,
    mut events: UnboundedReceiver<UiEvent>,
    password: String,
) -> UiState {
    controller.handle(UiEvent::Input(password));
    controller.settle(&mut events).await;
    controller.state().clone()
}

pub async fn handle_generate(
    mut controller: Controller,
    mut events: UnboundedReceiver<UiEvent>,
) -> UiState {
    controller.handle(UiEvent::GenerateRequested);
    controller.settle(&mut events).await;
    controller.state().clone()
}
