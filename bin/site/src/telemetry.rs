//! Tracing setup for the server and the browser.

use std::fmt::Write;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// Installs the server subscriber: `RUST_LOG` filtering plus formatted output.
#[cfg(feature = "ssr")]
pub fn init_server() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Installs the browser subscriber, which writes events to the devtools console.
pub fn init_browser() {
    use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(LevelFilter::INFO)
        .with(ConsoleLayer)
        .try_init();
}

/// Layer forwarding events to the browser console.
///
/// Errors go to `console.error`, warnings to `console.warn`, the rest to
/// `console.log`. Outside the browser leptos prints them to stdout/stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let line = console_line(event);
        match *event.metadata().level() {
            Level::ERROR => leptos::logging::error!("{line}"),
            Level::WARN => leptos::logging::warn!("{line}"),
            _ => leptos::logging::log!("{line}"),
        }
    }
}

/// Formats an event as `[target] message key=value ...`.
fn console_line(event: &Event<'_>) -> String {
    let mut visitor = LineVisitor::default();
    event.record(&mut visitor);
    format!(
        "[{}] {}{}",
        event.metadata().target(),
        visitor.message,
        visitor.fields
    )
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}
