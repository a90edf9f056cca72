//! Host window abstraction.
//!
//! The navigation helper only needs a handful of browser side effects:
//! the viewport scroll offset, a few inline styles on `document.body`,
//! a named broadcast signal, and a history step back. [`HostWindow`]
//! captures exactly those so the helper can run against the real browser
//! or against [`MemoryWindow`].

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Signal broadcast on the window when every mobile menu should close.
pub const CLOSE_MOBILE_MENU_EVENT: &str = "close-mobile-menu";

/// Inline style properties of `document.body` used for scroll locking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyStyle {
    Position,
    Top,
    Width,
    Overflow,
}

impl BodyStyle {
    /// CSS property name.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Top => "top",
            Self::Width => "width",
            Self::Overflow => "overflow",
        }
    }
}

impl fmt::Display for BodyStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Side effects the navigation layer performs on its host.
///
/// Implementations must be `Send + Sync` so the helper can live in Leptos
/// context. All calls happen on the UI thread.
pub trait HostWindow: Send + Sync {
    /// Current vertical scroll offset in CSS pixels.
    fn scroll_offset(&self) -> f64;

    /// Scrolls the viewport to `top`, instantly.
    fn scroll_to(&self, top: f64);

    /// Reads an inline style of the document body. Empty when unset.
    fn body_style(&self, property: BodyStyle) -> String;

    /// Writes an inline style of the document body. An empty value clears it.
    fn set_body_style(&self, property: BodyStyle, value: &str);

    /// Dispatches a named signal that any listener on the window can observe.
    fn broadcast(&self, event: &str);

    /// Steps back one entry in session history.
    fn history_back(&self);
}

#[derive(Debug, Default)]
struct MemoryState {
    scroll_offset: f64,
    styles: HashMap<BodyStyle, String>,
    scroll_calls: Vec<f64>,
    broadcasts: Vec<String>,
    history_backs: usize,
}

/// In-memory host window.
///
/// Used while rendering on the server, where there is no viewport, and in
/// tests. Mirrors one browser behavior the scroll lock depends on: while the
/// body is `position: fixed` the document cannot scroll, so the reported
/// offset is zero.
#[derive(Debug, Default)]
pub struct MemoryWindow {
    state: Mutex<MemoryState>,
}

impl MemoryWindow {
    /// Creates a window scrolled to the top with no inline styles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a window scrolled to `offset`.
    #[must_use]
    pub fn scrolled_to(offset: f64) -> Self {
        let window = Self::new();
        window.state().scroll_offset = offset;
        window
    }

    /// Simulates the user scrolling to `offset` (not recorded as a scroll call).
    pub fn user_scroll(&self, offset: f64) {
        self.state().scroll_offset = offset;
    }

    /// Every offset passed to [`HostWindow::scroll_to`], oldest first.
    #[must_use]
    pub fn scroll_calls(&self) -> Vec<f64> {
        self.state().scroll_calls.clone()
    }

    /// Every signal broadcast so far, oldest first.
    #[must_use]
    pub fn broadcasts(&self) -> Vec<String> {
        self.state().broadcasts.clone()
    }

    /// Number of history steps back requested.
    #[must_use]
    pub fn history_backs(&self) -> usize {
        self.state().history_backs
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl HostWindow for MemoryWindow {
    fn scroll_offset(&self) -> f64 {
        let state = self.state();
        let locked = state
            .styles
            .get(&BodyStyle::Position)
            .is_some_and(|position| position == "fixed");
        if locked { 0.0 } else { state.scroll_offset }
    }

    fn scroll_to(&self, top: f64) {
        let mut state = self.state();
        state.scroll_offset = top;
        state.scroll_calls.push(top);
    }

    fn body_style(&self, property: BodyStyle) -> String {
        self.state()
            .styles
            .get(&property)
            .cloned()
            .unwrap_or_default()
    }

    fn set_body_style(&self, property: BodyStyle, value: &str) {
        let mut state = self.state();
        if value.is_empty() {
            state.styles.remove(&property);
        } else {
            state.styles.insert(property, value.to_string());
        }
    }

    fn broadcast(&self, event: &str) {
        self.state().broadcasts.push(event.to_string());
    }

    fn history_back(&self) {
        self.state().history_backs += 1;
    }
}
