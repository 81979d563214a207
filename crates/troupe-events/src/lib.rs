//! Session event log for the Troupe realtime console.
//!
//! A live session produces an unbounded stream of directional events
//! (client-originated and server-originated protocol messages). This crate
//! owns the ordered log of those events, the per-event UI expansion flags,
//! and the change-notification stream that views subscribe to.
//!
//! # Quick start
//!
//! ```ignore
//! use troupe_events::{Direction, EventStore};
//! use serde_json::json;
//!
//! let store = EventStore::new();
//! let mut changes = store.changes();
//!
//! store.append(Direction::Server, "session.created", json!({"session": {"id": "s1"}}));
//!
//! for event in store.snapshot() {
//!     println!("{} {}", event.timestamp, event.event_name);
//! }
//! ```
//!
//! The store is a cheap-to-clone handle: the transport layer holds one clone
//! and appends, any number of views hold clones and read. All mutations are
//! serialized by an internal mutex, so append order is arrival order even
//! when the feed runs on a background task.

pub mod classify;
pub mod event;
pub mod store;
pub(crate) mod stream;

pub use classify::{ErrorClassifier, ErrorRule};
pub use event::{Direction, LoggedEvent};
pub use store::{EventStore, StoreChange};
