//! Minimal two-persona scenario demonstrating a single handoff.

use crate::{AgentPersona, Scenario};

/// A greeter that hands the conversation to a haiku writer. The smallest
/// scenario that still exercises the handoff plumbing.
pub fn simple_handoff() -> Scenario {
    let greeter = AgentPersona {
        name: "greeter".to_string(),
        voice: "sage".to_string(),
        instructions: "Please greet the user warmly, ask what topic they would like a \
                       haiku about, and then hand the conversation off to the haiku \
                       writer. Keep it brief and friendly."
            .to_string(),
        handoff_description: "A friendly greeter that collects the haiku topic".to_string(),
        handoffs: vec!["haiku_writer".to_string()],
    };

    let haiku_writer = AgentPersona {
        name: "haiku_writer".to_string(),
        voice: "shimmer".to_string(),
        instructions: "You write haikus about whatever topic the user has chosen. Respond \
                       with exactly one haiku in the 5-7-5 form, then ask whether they \
                       would like another."
            .to_string(),
        handoff_description: "A poet that answers with a single 5-7-5 haiku".to_string(),
        handoffs: Vec::new(),
    };

    Scenario {
        key: "simple_handoff".to_string(),
        title: "Simple Handoff".to_string(),
        personas: vec![greeter, haiku_writer],
    }
}
