//! Shared UI components for the Troupe realtime console.
//!
//! The centerpiece is the session event log: a panel that subscribes to an
//! [`troupe_events::EventStore`], renders each event as one line with an
//! expandable payload, auto-scrolls on new arrivals, and adapts between an
//! inline desktop panel and a mobile slide-in drawer.

pub mod log;

pub use log::log_panel::EventLogPanel;
pub use log::log_row::EventLogRow;
pub use log::log_state::{
    direction_glyph, format_payload, layout_for_width, should_autoscroll, DirectionGlyph,
    LayoutMode, MOBILE_BREAKPOINT,
};

/// Shared CSS for the event log panel, rows, and drawer layout.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
