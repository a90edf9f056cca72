//! Mobile menu support: closing every open menu and locking body scroll.

use crate::window::{BodyStyle, CLOSE_MOBILE_MENU_EVENT, HostWindow};
use tracing::debug;

/// Broadcasts [`CLOSE_MOBILE_MENU_EVENT`] and drops the scroll lock styles.
///
/// Clears `overflow`, `position` and `width` whatever their prior values.
/// `top` and the scroll offset are left alone.
pub fn close_all_mobile_menus(window: &dyn HostWindow) {
    window.broadcast(CLOSE_MOBILE_MENU_EVENT);
    window.set_body_style(BodyStyle::Overflow, "");
    window.set_body_style(BodyStyle::Position, "");
    window.set_body_style(BodyStyle::Width, "");
    debug!("closed mobile menus");
}

/// Locks or unlocks body scrolling.
///
/// Locking pins the body with `position: fixed` and stores the current
/// offset in `top` as a negative pixel value. Unlocking clears the styles and
/// scrolls back to the stored offset, so a lock/unlock pair leaves the
/// viewport where it started. Locking an already locked body keeps the offset
/// recorded by the first lock.
pub fn prevent_body_scroll(window: &dyn HostWindow, lock: bool) {
    if lock {
        if window.body_style(BodyStyle::Position) == "fixed" {
            return;
        }
        // Overscroll can report a negative offset; `top` must stay valid CSS.
        let offset = window.scroll_offset().max(0.0);
        window.set_body_style(BodyStyle::Position, "fixed");
        window.set_body_style(BodyStyle::Top, &format!("-{offset}px"));
        window.set_body_style(BodyStyle::Width, "100%");
        window.set_body_style(BodyStyle::Overflow, "hidden");
        debug!(offset, "locked body scroll");
    } else {
        let top = window.body_style(BodyStyle::Top);
        window.set_body_style(BodyStyle::Position, "");
        window.set_body_style(BodyStyle::Top, "");
        window.set_body_style(BodyStyle::Width, "");
        window.set_body_style(BodyStyle::Overflow, "");
        if let Some(offset) = parse_locked_offset(&top) {
            window.scroll_to(offset);
            debug!(offset, "unlocked body scroll");
        }
    }
}

/// Parses the `top` value written by a lock (`-500px`) back into an offset.
fn parse_locked_offset(top: &str) -> Option<f64> {
    let value: f64 = top.trim().strip_suffix("px")?.parse().ok()?;
    Some((-value).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::MemoryWindow;

    #[test]
    fn lock_then_unlock_restores_offset() {
        for start in [0.0, 1.0, 500.0, 1234.5] {
            let window = MemoryWindow::scrolled_to(start);
            prevent_body_scroll(&window, true);
            prevent_body_scroll(&window, false);
            assert_eq!(window.scroll_offset(), start, "start offset {start}");
        }
    }

    #[test]
    fn lock_applies_fixed_positioning() {
        let window = MemoryWindow::scrolled_to(500.0);
        prevent_body_scroll(&window, true);
        assert_eq!(window.body_style(BodyStyle::Position), "fixed");
        assert_eq!(window.body_style(BodyStyle::Top), "-500px");
        assert_eq!(window.body_style(BodyStyle::Width), "100%");
        assert_eq!(window.body_style(BodyStyle::Overflow), "hidden");
    }

    #[test]
    fn unlock_clears_every_lock_style() {
        let window = MemoryWindow::scrolled_to(80.0);
        prevent_body_scroll(&window, true);
        prevent_body_scroll(&window, false);
        for property in [
            BodyStyle::Position,
            BodyStyle::Top,
            BodyStyle::Width,
            BodyStyle::Overflow,
        ] {
            assert_eq!(window.body_style(property), "", "{property} left set");
        }
    }

    #[test]
    fn second_lock_keeps_first_offset() {
        let window = MemoryWindow::scrolled_to(500.0);
        prevent_body_scroll(&window, true);
        prevent_body_scroll(&window, true);
        assert_eq!(window.body_style(BodyStyle::Top), "-500px");
        prevent_body_scroll(&window, false);
        assert_eq!(window.scroll_offset(), 500.0);
    }

    #[test]
    fn negative_offset_is_clamped_to_zero() {
        let window = MemoryWindow::scrolled_to(-20.0);
        prevent_body_scroll(&window, true);
        assert_eq!(window.body_style(BodyStyle::Top), "-0px");
        prevent_body_scroll(&window, false);
        assert_eq!(window.scroll_calls(), vec![0.0]);
    }

    #[test]
    fn unlock_without_lock_does_not_scroll() {
        let window = MemoryWindow::scrolled_to(42.0);
        prevent_body_scroll(&window, false);
        assert!(window.scroll_calls().is_empty());
        assert_eq!(window.scroll_offset(), 42.0);
    }

    #[test]
    fn close_all_clears_lock_styles_and_broadcasts() {
        let window = MemoryWindow::new();
        window.set_body_style(BodyStyle::Position, "sticky");
        window.set_body_style(BodyStyle::Width, "50%");
        window.set_body_style(BodyStyle::Overflow, "scroll");

        close_all_mobile_menus(&window);

        assert_eq!(window.body_style(BodyStyle::Position), "");
        assert_eq!(window.body_style(BodyStyle::Width), "");
        assert_eq!(window.body_style(BodyStyle::Overflow), "");
        assert_eq!(window.broadcasts(), vec![CLOSE_MOBILE_MENU_EVENT.to_string()]);
    }

    #[test]
    fn close_all_leaves_top_untouched() {
        let window = MemoryWindow::scrolled_to(300.0);
        prevent_body_scroll(&window, true);
        close_all_mobile_menus(&window);
        assert_eq!(window.body_style(BodyStyle::Top), "-300px");
        assert!(window.scroll_calls().is_empty());
    }

    #[test]
    fn parses_locked_offsets() {
        assert_eq!(parse_locked_offset("-500px"), Some(500.0));
        assert_eq!(parse_locked_offset("-0px"), Some(0.0));
        assert_eq!(parse_locked_offset("-12.5px"), Some(12.5));
        assert_eq!(parse_locked_offset(""), None);
        assert_eq!(parse_locked_offset("auto"), None);
    }
}
