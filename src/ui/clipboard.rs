//! System clipboard access for the copy action.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Native clipboard. Holds on to the handle because some platforms drop
/// the contents together with it.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    init_error: Option<String>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        match arboard::Clipboard::new() {
            Ok(inner) => Self {
                inner: Some(inner),
                init_error: None,
            },
            Err(e) => {
                log::warn!("System clipboard unavailable: {}", e);
                Self {
                    inner: None,
                    init_error: Some(e.to_string()),
                }
            }
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        match self.inner.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .map_err(|e| ClipboardError::WriteFailed(e.to_string())),
            None => Err(ClipboardError::Unavailable(
                self.init_error.clone().unwrap_or_default(),
            )),
        }
    }
}
