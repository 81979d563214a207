//! Session event log components.

pub mod log_panel;
pub mod log_row;
pub mod log_state;

pub use log_panel::EventLogPanel;
pub use log_row::EventLogRow;
pub use log_state::{
    direction_glyph, format_payload, layout_for_width, should_autoscroll, DirectionGlyph,
    LayoutMode,
};
