//! Event types for the session log.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Origin of an event relative to the local process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Sent by the local client toward the platform.
    Client,
    /// Received from the platform.
    Server,
    /// Origin could not be determined.
    #[default]
    Unknown,
}

impl Direction {
    /// Parse a direction label. Total: anything that is not `"client"` or
    /// `"server"` maps to [`Direction::Unknown`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "client" => Direction::Client,
            "server" => Direction::Server,
            _ => Direction::Unknown,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Client => "client",
            Direction::Server => "server",
            Direction::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// One entry in the session event log.
///
/// Everything except `expanded` is immutable after append: the store assigns
/// `id` and `timestamp` itself and never rewrites event content. `expanded`
/// is UI-local state that happens to live next to the event so a log clear
/// drops it along with everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// Unique within the session, monotonically assigned at append time.
    pub id: u64,
    /// Origin of the event.
    pub direction: Direction,
    /// Short protocol message label, e.g. `"response.done"`.
    pub event_name: String,
    /// Display-formatted creation time, assigned at append time.
    pub timestamp: String,
    /// Arbitrary structured payload; `Value::Null` means "no payload".
    pub event_data: Value,
    /// Whether the payload view is expanded. The only mutable field.
    pub expanded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_label_total() {
        assert_eq!(Direction::from_label("client"), Direction::Client);
        assert_eq!(Direction::from_label("server"), Direction::Server);
        assert_eq!(Direction::from_label("proxy"), Direction::Unknown);
        assert_eq!(Direction::from_label(""), Direction::Unknown);
        // Labels are case-sensitive, matching the wire format
        assert_eq!(Direction::from_label("Client"), Direction::Unknown);
    }

    #[test]
    fn test_direction_serde_lowercase() {
        let json = serde_json::to_string(&Direction::Client).unwrap();
        assert_eq!(json, "\"client\"");
        let back: Direction = serde_json::from_str("\"server\"").unwrap();
        assert_eq!(back, Direction::Server);
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Unknown.to_string(), "unknown");
    }
}
