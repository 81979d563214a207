//! One line of the event log, with its optional expanded payload.

use dioxus::prelude::*;
use troupe_events::LoggedEvent;

use super::log_state::{direction_glyph, format_payload};

/// A single logged event: direction glyph, name, timestamp, and — when
/// expanded — the pretty-printed payload in a monospace block.
///
/// Clicking the header line toggles expansion via `on_toggle`; the payload
/// block itself is not clickable. Error-flagged events get alerting styling
/// on the name only; the stored event is never altered.
#[component]
pub fn EventLogRow(event: LoggedEvent, is_error: bool, on_toggle: EventHandler<u64>) -> Element {
    let id = event.id;
    let glyph = direction_glyph(event.direction);
    let name_class = if is_error {
        "event-name event-name-error"
    } else {
        "event-name"
    };
    // Absent or malformed payloads render no block rather than failing
    let payload = if event.expanded {
        format_payload(&event.event_data)
    } else {
        None
    };

    rsx! {
        div {
            class: "event-log-row",
            div {
                class: "event-log-line",
                onclick: move |_| on_toggle.call(id),
                span {
                    class: "event-glyph",
                    style: "color: {glyph.color};",
                    "{glyph.symbol}"
                }
                span { class: "{name_class}", "{event.event_name}" }
                span { class: "event-timestamp", "{event.timestamp}" }
            }
            {payload.map(|text| rsx! {
                pre { class: "event-payload", "{text}" }
            })}
        }
    }
}
