//! Error classification for logged events.
//!
//! Upstream error conditions are buried in two conventional places: the
//! event name itself, or a nested payload field like
//! `response.status_details.error`. The upstream schema is external and may
//! grow other error shapes, so the detection rule is data rather than code:
//! a classifier holds an ordered list of [`ErrorRule`]s and flags an event
//! when any rule matches. Classification is pure — it never mutates the
//! stored event and is used only for styling.

use serde_json::Value;

use crate::event::LoggedEvent;

/// One detection rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorRule {
    /// Case-insensitive substring match on the event name.
    NameContains(String),
    /// A nested payload field at this key path exists and is non-null.
    PayloadPath(Vec<String>),
}

impl ErrorRule {
    fn matches(&self, event: &LoggedEvent) -> bool {
        match self {
            ErrorRule::NameContains(needle) => event
                .event_name
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            ErrorRule::PayloadPath(path) => {
                let mut cursor = &event.event_data;
                for key in path {
                    match cursor {
                        Value::Object(map) => match map.get(key) {
                            Some(next) => cursor = next,
                            None => return false,
                        },
                        _ => return false,
                    }
                }
                !cursor.is_null()
            }
        }
    }
}

/// Ordered rule list; an event is flagged when any rule matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorClassifier {
    rules: Vec<ErrorRule>,
}

impl ErrorClassifier {
    /// Classifier with a custom rule set.
    pub fn new(rules: Vec<ErrorRule>) -> Self {
        Self { rules }
    }

    /// Add a rule to the end of the list.
    pub fn push_rule(&mut self, rule: ErrorRule) {
        self.rules.push(rule);
    }

    /// Whether this event indicates an upstream error.
    pub fn is_error(&self, event: &LoggedEvent) -> bool {
        self.rules.iter().any(|rule| rule.matches(event))
    }
}

impl Default for ErrorClassifier {
    /// The two conventional rules: `"error"` somewhere in the event name,
    /// or a non-null `response.status_details.error` payload field.
    fn default() -> Self {
        Self::new(vec![
            ErrorRule::NameContains("error".into()),
            ErrorRule::PayloadPath(vec![
                "response".into(),
                "status_details".into(),
                "error".into(),
            ]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Direction;
    use serde_json::json;

    fn event(name: &str, data: Value) -> LoggedEvent {
        LoggedEvent {
            id: 0,
            direction: Direction::Server,
            event_name: name.to_string(),
            timestamp: "12:00:00.000".to_string(),
            event_data: data,
            expanded: false,
        }
    }

    #[test]
    fn test_error_in_name_case_insensitive() {
        let classifier = ErrorClassifier::default();
        assert!(classifier.is_error(&event("Error.response", Value::Null)));
        assert!(classifier.is_error(&event("response.ERROR", Value::Null)));
        assert!(!classifier.is_error(&event("response.done", Value::Null)));
    }

    #[test]
    fn test_nested_status_details_error() {
        let classifier = ErrorClassifier::default();
        let flagged = event(
            "response.done",
            json!({"response": {"status_details": {"error": {"code": 1}}}}),
        );
        assert!(classifier.is_error(&flagged));

        let clean = event(
            "response.done",
            json!({"response": {"status_details": {"reason": "stop"}}}),
        );
        assert!(!classifier.is_error(&clean));
    }

    #[test]
    fn test_null_error_field_not_flagged() {
        let classifier = ErrorClassifier::default();
        let ev = event(
            "response.done",
            json!({"response": {"status_details": {"error": null}}}),
        );
        assert!(!classifier.is_error(&ev));
    }

    #[test]
    fn test_path_through_non_object_payload() {
        let classifier = ErrorClassifier::default();
        assert!(!classifier.is_error(&event("response.done", json!("not a map"))));
        assert!(!classifier.is_error(&event("response.done", json!({"response": 3}))));
    }

    #[test]
    fn test_custom_rule() {
        let mut classifier = ErrorClassifier::new(Vec::new());
        assert!(!classifier.is_error(&event("rate_limits.exceeded", Value::Null)));

        classifier.push_rule(ErrorRule::NameContains("exceeded".into()));
        assert!(classifier.is_error(&event("rate_limits.exceeded", Value::Null)));
    }
}
