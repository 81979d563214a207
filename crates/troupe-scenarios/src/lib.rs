//! Scenario and persona definitions for the Troupe realtime console.
//!
//! A scenario is a named cast of personas. Each persona carries the static
//! configuration a realtime agent session needs — display name, voice,
//! instructions, and which other personas it may hand the conversation off
//! to. This crate is configuration only: agent reasoning, voice synthesis,
//! and handoff decisions live in the external agent runtime.

use serde::{Deserialize, Serialize};

mod journey_to_west;
mod simple_handoff;
mod the_last_of_us;

pub use journey_to_west::journey_to_west;
pub use simple_handoff::simple_handoff;
pub use the_last_of_us::the_last_of_us;

/// Scenario selected when the console starts.
pub const DEFAULT_SCENARIO_KEY: &str = "simple_handoff";

/// Static definition of one conversational persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentPersona {
    /// Stable identifier within the scenario, e.g. `"sun_wukong"`.
    pub name: String,
    /// Voice preset requested from the agent runtime.
    pub voice: String,
    /// System instructions defining the persona.
    pub instructions: String,
    /// One-line summary shown when another persona considers a handoff.
    pub handoff_description: String,
    /// Names of personas in the same scenario this one may hand off to.
    pub handoffs: Vec<String>,
}

/// A named cast of personas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Registry key, e.g. `"journey_to_west"`.
    pub key: String,
    /// Human-readable title for the scenario picker.
    pub title: String,
    /// The cast, entry persona first.
    pub personas: Vec<AgentPersona>,
}

impl Scenario {
    /// Look up a persona by name.
    pub fn persona(&self, name: &str) -> Option<&AgentPersona> {
        self.personas.iter().find(|p| p.name == name)
    }

    /// The persona the session starts with (first in the cast).
    pub fn entry_persona(&self) -> Option<&AgentPersona> {
        self.personas.first()
    }
}

/// Error from scenario lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScenarioError {
    /// The requested key is not in the registry.
    #[error("Unknown scenario: {key}")]
    UnknownScenario { key: String },
}

/// All registered scenarios, in picker order.
pub fn all_scenarios() -> Vec<Scenario> {
    vec![simple_handoff(), journey_to_west(), the_last_of_us()]
}

/// Look up a scenario by registry key.
pub fn scenario_by_key(key: &str) -> Result<Scenario, ScenarioError> {
    all_scenarios()
        .into_iter()
        .find(|s| s.key == key)
        .ok_or_else(|| ScenarioError::UnknownScenario {
            key: key.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_keys_unique() {
        let scenarios = all_scenarios();
        for (i, a) in scenarios.iter().enumerate() {
            for b in &scenarios[i + 1..] {
                assert_ne!(a.key, b.key, "duplicate scenario key");
            }
        }
    }

    #[test]
    fn test_default_scenario_registered() {
        assert!(scenario_by_key(DEFAULT_SCENARIO_KEY).is_ok());
    }

    #[test]
    fn test_unknown_scenario_errors() {
        let err = scenario_by_key("no_such_scenario").unwrap_err();
        assert_eq!(
            err,
            ScenarioError::UnknownScenario {
                key: "no_such_scenario".to_string()
            }
        );
    }

    #[test]
    fn test_handoffs_resolve_within_scenario() {
        for scenario in all_scenarios() {
            for persona in &scenario.personas {
                for target in &persona.handoffs {
                    assert!(
                        scenario.persona(target).is_some(),
                        "{}: handoff target {:?} of {:?} not in cast",
                        scenario.key,
                        target,
                        persona.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_scenario_has_an_entry_persona() {
        for scenario in all_scenarios() {
            let entry = scenario.entry_persona();
            assert!(entry.is_some(), "{}: empty cast", scenario.key);
            assert!(!entry.unwrap().voice.is_empty());
        }
    }
}
