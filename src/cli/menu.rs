// src/cli/menu.rs
use inquire::{Password, PasswordDisplayMode, Select};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::cli::render::render_state;
use crate::ui::{Controller, UiEvent};

const TYPE_PASSWORD: &str = "⌨️  Type a password";
const GENERATE: &str = "🎲  Generate password";
const COPY: &str = "📋  Copy generated password";
const TOGGLE_THEME: &str = "🌗  Toggle theme";
const CLEAR: &str = "🧹  Clear input";
const EXIT: &str = "❌  Exit";

/// Masked entry; the meter re-checks whatever is submitted.
fn password_prompt() -> Password<'static> {
    Password::new("Password:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_help_message("Replaces the current input. Submit empty to clear.")
}

pub async fn run_meter_menu(
    mut controller: Controller,
    mut events: UnboundedReceiver<UiEvent>,
    should_exit: Arc<AtomicBool>,
) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║        🔐 PASSWORD STRENGTH METER     ║");
    println!("╚══════════════════════════════════════╝");

    while !should_exit.load(Ordering::SeqCst) {
        // Pick up timers that fired while waiting on the prompt
        controller.drain(&mut events);
        println!("\n{}\n", render_state(controller.state()));

        let options = vec![TYPE_PASSWORD, GENERATE, COPY, TOGGLE_THEME, CLEAR, EXIT];
        let selection = tokio::task::spawn_blocking(move || {
            Select::new("Choose an option:", options)
                .with_help_message("Use arrow keys to navigate, Enter to select. Ctrl+C to exit.")
                .prompt_skippable()
        })
        .await??;

        let event = match selection {
            Some(TYPE_PASSWORD) => {
                let text = tokio::task::spawn_blocking(|| password_prompt().prompt()).await??;
                UiEvent::Input(text)
            }
            Some(GENERATE) => UiEvent::GenerateRequested,
            Some(COPY) => {
                if controller.state().generated.is_empty() {
                    println!("Nothing generated yet.");
                }
                UiEvent::CopyRequested
            }
            Some(TOGGLE_THEME) => UiEvent::ThemeToggled,
            Some(CLEAR) => UiEvent::Input(String::new()),
            Some(_) | None => break,
        };

        controller.handle(event);
        controller.settle(&mut events).await;
    }

    log::info!("Meter closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_prompt_never_echoes_input() {
        let prompt = password_prompt();
        assert!(matches!(prompt.display_mode, PasswordDisplayMode::Masked));
        assert!(!prompt.enable_confirmation);
    }
}
