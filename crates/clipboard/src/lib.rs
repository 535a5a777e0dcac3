//! Clipboard collaborator for `swatch`.
//!
//! Accepts one string per request and reports success or failure
//! asynchronously.  Callers decide what a failure means; the app ignores it.

use std::sync::{Arc, Mutex};
use swatch_core::{Result, SwatchError};

/// Anything that can place text on a clipboard.
///
/// Implementations may block; [`copy`] runs them on Tokio's blocking pool.
pub trait Clipboard: Send + Sync + 'static {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// The platform clipboard.
///
/// One `arboard::Clipboard` is opened up front and kept for the lifetime of
/// the value: on X11/Wayland the contents are only served while it is alive.
/// When the platform clipboard is unavailable every write fails.
pub struct SystemClipboard {
    inner: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(c) => Some(c),
            Err(e) => {
                tracing::warn!("System clipboard unavailable: {e}");
                None
            }
        };
        Self { inner: Mutex::new(inner) }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| SwatchError::Clipboard("clipboard lock poisoned".into()))?;

        let clipboard = guard
            .as_mut()
            .ok_or_else(|| SwatchError::Clipboard("no clipboard available".into()))?;

        clipboard
            .set_text(text)
            .map_err(|e| SwatchError::Clipboard(e.to_string()))
    }
}

/// Write `text` to `clipboard` without blocking the async executor.
pub async fn copy(clipboard: Arc<dyn Clipboard>, text: String) -> Result<()> {
    tokio::task::spawn_blocking(move || clipboard.write_text(&text))
        .await
        .map_err(|e| SwatchError::Clipboard(format!("clipboard task failed: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recording(Mutex<Vec<String>>);

    impl Clipboard for Recording {
        fn write_text(&self, text: &str) -> Result<()> {
            self.0.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct Denied;

    impl Clipboard for Denied {
        fn write_text(&self, _text: &str) -> Result<()> {
            Err(SwatchError::Clipboard("permission denied".into()))
        }
    }

    #[tokio::test]
    async fn copy_hands_text_to_clipboard() {
        let clipboard = Arc::new(Recording::default());
        copy(clipboard.clone(), "rgba(52, 148, 219, 1.00)".into())
            .await
            .unwrap();
        assert_eq!(*clipboard.0.lock().unwrap(), ["rgba(52, 148, 219, 1.00)"]);
    }

    #[tokio::test]
    async fn copy_reports_failure() {
        let result = copy(Arc::new(Denied), "#000000".into()).await;
        assert!(matches!(result, Err(SwatchError::Clipboard(_))));
    }

    #[tokio::test]
    async fn panicking_backend_becomes_an_error() {
        struct Panics;
        impl Clipboard for Panics {
            fn write_text(&self, _text: &str) -> Result<()> {
                panic!("backend crashed");
            }
        }

        assert!(copy(Arc::new(Panics), "x".into()).await.is_err());
    }
}
