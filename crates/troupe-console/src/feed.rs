//! Scripted session feed.
//!
//! Stands in for the external realtime transport: for a given scenario it
//! pushes a plausible bidirectional event stream into the [`EventStore`] on
//! a timer task. This is demo plumbing only — agent reasoning, voice
//! synthesis, and handoff decisions stay with the real platform.

use std::time::Duration;

use serde_json::{json, Value};
use tracing::{debug, info};
use troupe_events::{Direction, EventStore};
use troupe_scenarios::Scenario;

/// Pause between conversation turns once the opening handshake is done.
const TURN_INTERVAL: Duration = Duration::from_secs(4);

/// Every Nth turn ends with an error-shaped `response.done`.
const ERROR_TURN_PERIOD: usize = 5;

/// A running feed for one session. Aborted on scenario switch or drop.
pub struct SessionFeed {
    handle: tokio::task::JoinHandle<()>,
}

impl SessionFeed {
    /// Spawn the feed task for a scenario. The store handle is the feed's
    /// single writer path; all events go through `append`.
    pub fn start(store: EventStore, scenario: Scenario) -> Self {
        let handle = tokio::spawn(run_session(store, scenario));
        Self { handle }
    }

    /// Stop feeding. Safe to call more than once.
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for SessionFeed {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

struct ScriptedEvent {
    delay_ms: u64,
    direction: Direction,
    name: String,
    data: Value,
}

async fn run_session(store: EventStore, scenario: Scenario) {
    info!(scenario = %scenario.key, "session feed started");

    for event in opening_script(&scenario) {
        tokio::time::sleep(Duration::from_millis(event.delay_ms)).await;
        store.append(event.direction, event.name, event.data);
    }

    let mut turn = 0usize;
    loop {
        tokio::time::sleep(TURN_INTERVAL).await;
        debug!(scenario = %scenario.key, turn, "emitting conversation turn");
        for event in turn_script(&scenario, turn) {
            tokio::time::sleep(Duration::from_millis(event.delay_ms)).await;
            store.append(event.direction, event.name, event.data);
        }
        turn += 1;
    }
}

/// The session handshake: server announces the session, client configures
/// the entry persona, first audio goes up.
fn opening_script(scenario: &Scenario) -> Vec<ScriptedEvent> {
    let mut script = vec![ScriptedEvent {
        delay_ms: 300,
        direction: Direction::Server,
        name: "session.created".into(),
        data: json!({
            "session": {
                "id": format!("sess_{}", scenario.key),
                "model": "gpt-realtime",
            }
        }),
    }];

    if let Some(entry) = scenario.entry_persona() {
        script.push(ScriptedEvent {
            delay_ms: 200,
            direction: Direction::Client,
            name: "session.update".into(),
            data: json!({
                "session": {
                    "voice": entry.voice,
                    "instructions": snippet(&entry.instructions),
                    "turn_detection": { "type": "server_vad" },
                }
            }),
        });
    }

    // Raw audio frames carry no loggable payload
    script.push(ScriptedEvent {
        delay_ms: 400,
        direction: Direction::Client,
        name: "input_audio_buffer.append".into(),
        data: Value::Null,
    });
    script.push(ScriptedEvent {
        delay_ms: 250,
        direction: Direction::Server,
        name: "input_audio_buffer.speech_started".into(),
        data: json!({ "audio_start_ms": 120 }),
    });

    script
}

/// One conversation turn: the platform responds as the persona whose turn
/// it is, occasionally failing or handing off to another persona.
fn turn_script(scenario: &Scenario, turn: usize) -> Vec<ScriptedEvent> {
    let cast = &scenario.personas;
    if cast.is_empty() {
        return Vec::new();
    }
    let persona = &cast[turn % cast.len()];
    let response_id = format!("resp_{:04}", turn);

    let mut script = vec![
        ScriptedEvent {
            delay_ms: 0,
            direction: Direction::Server,
            name: "response.created".into(),
            data: json!({ "response": { "id": response_id.clone() } }),
        },
        ScriptedEvent {
            delay_ms: 300,
            direction: Direction::Server,
            name: "conversation.item.created".into(),
            data: json!({
                "item": {
                    "role": "assistant",
                    "name": persona.name,
                    "content": [{ "type": "audio", "transcript": "..." }],
                }
            }),
        },
    ];

    let failed = turn > 0 && turn % ERROR_TURN_PERIOD == 0;
    let status = if failed { "failed" } else { "completed" };
    let status_details = if failed {
        json!({
            "type": "failed",
            "error": { "type": "server_error", "code": 500 }
        })
    } else {
        json!({ "type": "completed" })
    };
    script.push(ScriptedEvent {
        delay_ms: 500,
        direction: Direction::Server,
        name: "response.done".into(),
        data: json!({
            "response": {
                "id": response_id,
                "status": status,
                "status_details": status_details,
            }
        }),
    });

    // A persona with handoff targets passes the baton every third turn
    if turn % 3 == 2 {
        if let Some(target) = persona.handoffs.first() {
            script.push(ScriptedEvent {
                delay_ms: 200,
                direction: Direction::Client,
                name: "agent_handoff".into(),
                data: json!({
                    "from": persona.name,
                    "to": target,
                    "reason": scenario
                        .persona(target)
                        .map(|p| p.handoff_description.clone())
                        .unwrap_or_default(),
                }),
            });
        }
    }

    script
}

/// Leading characters of a persona's instructions, for session.update
/// payloads. Truncation is marked with an ellipsis.
fn snippet(instructions: &str) -> String {
    let mut s: String = instructions.chars().take(80).collect();
    if s.len() < instructions.len() {
        s.push('…');
    }
    s
}
