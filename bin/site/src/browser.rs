//! Host window backed by the real browser.
//!
//! Outside the browser (server rendering, native tests) there is no
//! viewport, so [`host_window`] falls back to an in-memory window.

use harbor_navigation::HostWindow;
use std::sync::Arc;

/// Returns the host window for the current target.
pub fn host_window() -> Arc<dyn HostWindow> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(BrowserWindow)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(harbor_navigation::MemoryWindow::new())
    }
}

/// `window` and `document.body` of the running page.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserWindow;

#[cfg(target_arch = "wasm32")]
impl BrowserWindow {
    fn body_css() -> Option<web_sys::CssStyleDeclaration> {
        let body = web_sys::window()?.document()?.body()?;
        Some(body.style())
    }
}

#[cfg(target_arch = "wasm32")]
impl HostWindow for BrowserWindow {
    fn scroll_offset(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn scroll_to(&self, top: f64) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, top);
        }
    }

    fn body_style(&self, property: harbor_navigation::BodyStyle) -> String {
        Self::body_css()
            .and_then(|css| css.get_property_value(property.as_css()).ok())
            .unwrap_or_default()
    }

    fn set_body_style(&self, property: harbor_navigation::BodyStyle, value: &str) {
        if let Some(css) = Self::body_css() {
            let result = if value.is_empty() {
                css.remove_property(property.as_css()).map(|_| ())
            } else {
                css.set_property(property.as_css(), value)
            };
            if result.is_err() {
                tracing::warn!(%property, value, "failed to set body style");
            }
        }
    }

    fn broadcast(&self, event: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        match web_sys::CustomEvent::new(event) {
            Ok(custom) => {
                let _ = window.dispatch_event(&custom);
            }
            Err(_) => tracing::warn!(event, "failed to create custom event"),
        }
    }

    fn history_back(&self) {
        if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
            let _ = history.back();
        }
    }
}
