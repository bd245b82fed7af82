//! Best-effort user notification via the browser alert box.
//!
//! Write failures surface the server's raw response text here; there is
//! no retry and no structured recovery. Requires a browser environment;
//! outside one the message is dropped.

/// Show a blocking browser alert with `message`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
