//! Clipboard utilities for copying text to clipboard
//!
//! Uses the Web Clipboard API; the outcome is reported to a callback so the
//! caller can show a notification.

use wasm_bindgen_futures::{spawn_local, JsFuture};

/// Copy text to the system clipboard and report the result.
///
/// The write is asynchronous; `on_done` runs once it settles. Nothing is
/// retried on failure.
pub fn copy_to_clipboard<F>(text: &str, on_done: F)
where
    F: FnOnce(Result<(), String>) + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let result = match web_sys::window() {
            Some(window) => {
                let clipboard = window.navigator().clipboard();
                JsFuture::from(clipboard.write_text(&text))
                    .await
                    .map(|_| ())
                    .map_err(|err| format!("{:?}", err))
            }
            None => Err("window is not available".to_string()),
        };
        on_done(result);
    });
}
