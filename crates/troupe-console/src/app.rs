//! Root App component for the Troupe console.
//!
//! Owns the per-session [`EventStore`], the scenario selection, the shared
//! Logs expand/collapse boolean, and the viewport width measurement that
//! drives the log panel's responsive layout.

use dioxus::desktop::tao::dpi::PhysicalSize;
use dioxus::desktop::tao::event::{Event as WryEvent, WindowEvent};
use dioxus::desktop::{use_window, use_wry_event_handler};
use dioxus::prelude::*;
use tracing::warn;
use troupe_events::EventStore;
use troupe_scenarios::{all_scenarios, scenario_by_key, Scenario, DEFAULT_SCENARIO_KEY};
use troupe_ui::EventLogPanel;

use crate::feed::SessionFeed;

#[component]
pub fn App() -> Element {
    // One store per session; scenario switches clear it rather than
    // replacing it, so the log panel's subscription stays valid.
    let store = use_context_provider(EventStore::new);

    let mut logs_expanded = use_signal(|| true);
    let mut viewport_width = use_signal(|| 1200.0f64);
    let scenario_key = use_signal(|| DEFAULT_SCENARIO_KEY.to_string());
    let mut feed: Signal<Option<SessionFeed>> = use_signal(|| None);

    // Track the window width; the log panel derives Inline vs Drawer from
    // it. The breakpoint and CSS are in logical pixels, while tao reports
    // physical sizes, so every read goes through the scale factor.
    let window = use_window();
    use_effect({
        let window = window.clone();
        move || {
            viewport_width.set(logical_width(window.inner_size(), window.scale_factor()));
        }
    });
    use_wry_event_handler({
        let window = window.clone();
        move |event, _| {
            if let WryEvent::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } = event
            {
                viewport_width.set(logical_width(*size, window.scale_factor()));
            }
        }
    });

    // Session lifecycle: switching scenario stops the old feed, clears the
    // log, and starts a fresh scripted session.
    use_effect({
        let store = store.clone();
        move || {
            let key = scenario_key();
            if let Some(old) = feed.write().take() {
                old.stop();
            }
            store.clear();
            match scenario_by_key(&key) {
                Ok(scenario) => feed.set(Some(SessionFeed::start(store.clone(), scenario))),
                Err(e) => warn!(error = %e, "cannot start session feed"),
            }
        }
    });

    let current = scenario_by_key(&scenario_key()).ok();

    rsx! {
        div {
            class: "app-shell",

            header {
                class: "app-header",
                h1 { class: "app-title", "Troupe Realtime Console" }
                ScenarioPicker { scenario_key }
                button {
                    class: "logs-toggle",
                    onclick: move |_| logs_expanded.toggle(),
                    if logs_expanded() { "Hide Logs" } else { "Show Logs" }
                }
            }

            main {
                class: "app-main",

                {current.map(|scenario| rsx! {
                    ScenarioPane { scenario }
                })}

                EventLogPanel {
                    store: store.clone(),
                    is_expanded: logs_expanded,
                    viewport_width,
                    on_close: move |_| logs_expanded.set(false),
                }
            }
        }
    }
}

/// Convert a physical window size to a logical width. HiDPI displays
/// report physical pixels scaled by the monitor's scale factor.
fn logical_width(size: PhysicalSize<u32>, scale_factor: f64) -> f64 {
    size.to_logical::<f64>(scale_factor).width
}

/// Scenario dropdown. Writing the key triggers the session reset effect.
#[component]
fn ScenarioPicker(scenario_key: Signal<String>) -> Element {
    let mut scenario_key = scenario_key;
    rsx! {
        select {
            class: "scenario-select",
            value: "{scenario_key}",
            onchange: move |e| scenario_key.set(e.value()),
            for scenario in all_scenarios() {
                option {
                    value: "{scenario.key}",
                    selected: scenario.key == scenario_key(),
                    "{scenario.title}"
                }
            }
        }
    }
}

/// Static view of the current scenario's cast: name, voice, description,
/// and handoff relationships per persona.
#[component]
fn ScenarioPane(scenario: Scenario) -> Element {
    rsx! {
        div {
            class: "scenario-pane",
            h2 { class: "scenario-title", "{scenario.title}" }
            div {
                class: "persona-grid",
                for persona in scenario.personas.iter() {
                    div {
                        key: "{persona.name}",
                        class: "persona-card",
                        div {
                            class: "persona-card-header",
                            span { class: "persona-name", "{persona.name}" }
                            span { class: "persona-voice", "{persona.voice}" }
                        }
                        p { class: "persona-description", "{persona.handoff_description}" }
                        if !persona.handoffs.is_empty() {
                            div {
                                class: "persona-handoffs",
                                span { class: "handoff-label", "handoffs" }
                                for target in persona.handoffs.iter() {
                                    span { key: "{target}", class: "handoff-chip", "{target}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use troupe_ui::{layout_for_width, LayoutMode};

    #[test]
    fn test_logical_width_accounts_for_scale_factor() {
        assert_eq!(logical_width(PhysicalSize::new(1000, 800), 2.0), 500.0);
        assert_eq!(logical_width(PhysicalSize::new(1000, 800), 1.0), 1000.0);
    }

    #[test]
    fn test_hidpi_window_below_breakpoint_renders_drawer() {
        // A 500-logical-px viewport on a 2x display reports 1000 physical px
        let width = logical_width(PhysicalSize::new(1000, 800), 2.0);
        assert_eq!(layout_for_width(width), LayoutMode::Drawer);
        // The same physical width on a 1x display really is desktop-sized
        let width = logical_width(PhysicalSize::new(1000, 800), 1.0);
        assert_eq!(layout_for_width(width), LayoutMode::Inline);
    }
}
