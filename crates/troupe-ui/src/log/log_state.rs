//! Pure view-model layer for the event log.
//!
//! Everything here is a total function of its inputs so the rendering rules
//! can be tested without mounting a component.

use serde_json::Value;
use troupe_events::Direction;

/// Viewport widths below this render the log as a slide-in drawer.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Which layout family the log panel renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Desktop: the panel occupies a fixed fraction of its parent's width
    /// when expanded, zero width when collapsed.
    Inline,
    /// Mobile: full-height slide-in panel with a backdrop overlay.
    Drawer,
}

/// Derive the layout family from a viewport width measurement.
///
/// Re-evaluated on every resize event. The expand/collapse boolean never
/// changes which family is active, only visibility within it.
pub fn layout_for_width(width: f64) -> LayoutMode {
    if width < MOBILE_BREAKPOINT {
        LayoutMode::Drawer
    } else {
        LayoutMode::Inline
    }
}

/// Direction indicator for one log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionGlyph {
    pub symbol: &'static str,
    pub color: &'static str,
}

/// Map a direction to its glyph. Total: unknown origins get the neutral
/// marker rather than an unmatched state.
pub fn direction_glyph(direction: Direction) -> DirectionGlyph {
    match direction {
        Direction::Client => DirectionGlyph {
            symbol: "▲",
            color: "#7f5af0",
        },
        Direction::Server => DirectionGlyph {
            symbol: "▼",
            color: "#2cb67d",
        },
        Direction::Unknown => DirectionGlyph {
            symbol: "•",
            color: "#555555",
        },
    }
}

/// Whether a render pass should scroll the log to the bottom.
///
/// Only when the panel is visible AND the event count strictly increased
/// since the last observed render. The caller must update its baseline
/// count on every pass regardless of visibility, so that expanding the
/// panel later does not retroactively scroll.
pub fn should_autoscroll(is_expanded: bool, prev_count: usize, count: usize) -> bool {
    is_expanded && count > prev_count
}

/// Pretty-print a payload for the expanded view.
///
/// Returns `None` when there is nothing worth rendering — a null or empty
/// payload degrades to no block at all rather than an empty one. Key order
/// is the order stored.
pub fn format_payload(data: &Value) -> Option<String> {
    match data {
        Value::Null => None,
        Value::Object(map) if map.is_empty() => None,
        other => serde_json::to_string_pretty(other).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_glyph_mapping_total() {
        assert_eq!(direction_glyph(Direction::Client).symbol, "▲");
        assert_eq!(direction_glyph(Direction::Server).symbol, "▼");
        assert_eq!(direction_glyph(Direction::Unknown).symbol, "•");
        // Any label, including empty, resolves through Unknown
        assert_eq!(
            direction_glyph(Direction::from_label("")).symbol,
            "•"
        );
        assert_eq!(
            direction_glyph(Direction::from_label("gateway")).symbol,
            "•"
        );
    }

    #[test]
    fn test_layout_breakpoint() {
        assert_eq!(layout_for_width(500.0), LayoutMode::Drawer);
        assert_eq!(layout_for_width(767.9), LayoutMode::Drawer);
        // At the breakpoint counts as desktop
        assert_eq!(layout_for_width(768.0), LayoutMode::Inline);
        assert_eq!(layout_for_width(1200.0), LayoutMode::Inline);
    }

    #[test]
    fn test_autoscroll_requires_visible_and_growth() {
        // Log has 3 events, panel collapsed, a 4th arrives: no scroll,
        // but the caller still moves its baseline to 4.
        assert!(!should_autoscroll(false, 3, 4));
        // Panel then expanded with no new event: still no scroll.
        assert!(!should_autoscroll(true, 4, 4));
        // A 5th event arrives while expanded: scroll.
        assert!(should_autoscroll(true, 4, 5));
        // A clear shrinks the count: never a scroll trigger.
        assert!(!should_autoscroll(true, 5, 0));
    }

    #[test]
    fn test_format_payload_nested() {
        let text = format_payload(&json!({"response": {"id": "r1", "usage": {"tokens": 42}}}))
            .expect("non-empty payload renders");
        assert!(text.contains("\"tokens\": 42"));
        // Pretty-printed, so nested keys are indented onto their own lines
        assert!(text.lines().count() > 3);
    }

    #[test]
    fn test_format_payload_degrades_to_nothing() {
        assert_eq!(format_payload(&Value::Null), None);
        assert_eq!(format_payload(&json!({})), None);
    }

    #[test]
    fn test_format_payload_non_object() {
        // Malformed payloads still render as-is rather than failing
        assert_eq!(format_payload(&json!("bare string")).unwrap(), "\"bare string\"");
    }
}
