//! Session event log panel.
//!
//! Subscribes to an [`EventStore`], renders the current log, and manages
//! presentation-only state: auto-scroll on new arrivals and the responsive
//! Inline/Drawer layout. Event content is never mutated here — the only
//! write-back is the per-event expansion toggle routed through the store.

use std::time::Duration;

use dioxus::prelude::*;
use futures::StreamExt;
use tracing::trace;
use troupe_events::{ErrorClassifier, EventStore, LoggedEvent};

use super::log_row::EventLogRow;
use super::log_state::{layout_for_width, should_autoscroll, LayoutMode};

/// Scroll the log container to its maximum offset.
const SCROLL_TO_BOTTOM_JS: &str = r#"
    const el = document.getElementById('event-log-scroll');
    if (el) { el.scrollTop = el.scrollHeight; }
"#;

/// The session event log.
///
/// `is_expanded` is the single shared visibility boolean: on desktop it
/// drives the inline panel's width animation, on mobile the drawer's
/// slide-in transform. Closing the panel (backdrop click or the drawer's
/// close button) fires `on_close` and never clears the log.
///
/// The store handle is expected to live for the whole session; a session
/// reset goes through [`EventStore::clear`], not a new store prop.
#[component]
pub fn EventLogPanel(
    store: EventStore,
    is_expanded: ReadOnlySignal<bool>,
    viewport_width: ReadOnlySignal<f64>,
    on_close: EventHandler<()>,
    #[props(default)] classifier: ErrorClassifier,
) -> Element {
    let mut events = use_signal(Vec::<LoggedEvent>::new);
    let mut prev_count = use_signal(|| 0usize);

    // Store subscription: push-based, re-reads the snapshot per change.
    // Dropping the component drops the stream, which unsubscribes.
    use_effect({
        let store = store.clone();
        move || {
            let store = store.clone();
            spawn(async move {
                events.set(store.snapshot());
                let mut changes = store.changes();
                while changes.next().await.is_some() {
                    events.set(store.snapshot());
                }
                trace!("event store closed, log subscription ended");
            });
        }
    });

    // Auto-scroll: only when the panel is visible AND the count strictly
    // increased. The baseline count is updated on every pass regardless of
    // visibility, so expanding later never retroactively scrolls.
    use_effect(move || {
        let count = events.read().len();
        if should_autoscroll(is_expanded(), *prev_count.peek(), count) {
            spawn(async move {
                // Small delay to let the DOM update
                tokio::time::sleep(Duration::from_millis(50)).await;
                document::eval(SCROLL_TO_BOTTOM_JS);
            });
        }
        if count != *prev_count.peek() {
            prev_count.set(count);
        }
    });

    let layout = layout_for_width(viewport_width());
    let expanded = is_expanded();
    let snapshot = events.read().clone();
    let count = snapshot.len();

    let panel_class = match (layout, expanded) {
        (LayoutMode::Inline, true) => "event-log-panel inline open",
        (LayoutMode::Inline, false) => "event-log-panel inline closed",
        (LayoutMode::Drawer, true) => "event-log-panel drawer open",
        (LayoutMode::Drawer, false) => "event-log-panel drawer closed",
    };

    rsx! {
        // Drawer backdrop intercepts pointer input while the drawer is open
        if layout == LayoutMode::Drawer && expanded {
            div {
                class: "event-log-backdrop",
                onclick: move |_| on_close.call(()),
            }
        }

        div {
            class: "{panel_class}",
            div {
                class: "event-log-header",
                span { class: "event-log-title", "Logs" }
                span { class: "event-log-count", "{count}" }
                if layout == LayoutMode::Drawer {
                    button {
                        class: "event-log-close",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
            }

            div {
                id: "event-log-scroll",
                class: "event-log-body",

                if snapshot.is_empty() {
                    div { class: "event-log-empty", "No events yet." }
                }

                for event in snapshot.iter() {
                    EventLogRow {
                        key: "{event.id}",
                        event: event.clone(),
                        is_error: classifier.is_error(event),
                        on_toggle: {
                            let store = store.clone();
                            move |id: u64| store.toggle_expand(id)
                        },
                    }
                }
            }
        }
    }
}
