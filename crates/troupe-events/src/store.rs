//! The session event store.

use std::pin::Pin;
use std::sync::{Arc, Mutex};

use futures::Stream;
use serde_json::Value;
use tokio::sync::broadcast;
use tracing::trace;

use crate::event::{Direction, LoggedEvent};
use crate::stream::broadcast_to_stream;

/// Capacity of the change-notification channel. Observers that lag past
/// this many notifications skip ahead and re-read the snapshot.
const CHANGE_CHANNEL_CAPACITY: usize = 256;

/// A change notification from the store.
///
/// Carries only the kind of mutation; observers re-derive their rendered
/// output from [`EventStore::snapshot`], so the notification does not need
/// to carry the log itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    /// A new event was appended with this id.
    Appended { id: u64 },
    /// An event's expansion flag was flipped.
    Toggled { id: u64 },
    /// The log was emptied for a session reset.
    Cleared,
}

#[derive(Debug)]
struct StoreInner {
    events: Vec<LoggedEvent>,
    next_id: u64,
}

/// Single source of truth for one session's event history.
///
/// Cheap to clone: all clones share the same log. The transport layer holds
/// one clone and calls [`append`](EventStore::append); views hold clones,
/// read [`snapshot`](EventStore::snapshot), and write back only UI-local
/// expansion state via [`toggle_expand`](EventStore::toggle_expand).
///
/// Mutations are serialized by an internal mutex, so insertion order always
/// matches the order `append` was invoked, even across tasks. Every mutating
/// call notifies subscribers exactly once.
#[derive(Debug)]
pub struct EventStore {
    inner: Arc<Mutex<StoreInner>>,
    change_tx: broadcast::Sender<StoreChange>,
}

impl EventStore {
    /// Create an empty store for a new session.
    pub fn new() -> Self {
        let (change_tx, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                events: Vec::new(),
                next_id: 0,
            })),
            change_tx,
        }
    }

    /// Append an event to the end of the log.
    ///
    /// The id and display timestamp are assigned here, not by the caller, so
    /// store-local identifiers stay monotonic regardless of upstream event
    /// ids. There are no constraints on the payload shape; malformed
    /// payloads are stored as-is and degrade at render time.
    ///
    /// Returns the assigned id.
    pub fn append(
        &self,
        direction: Direction,
        event_name: impl Into<String>,
        event_data: Value,
    ) -> u64 {
        let event_name = event_name.into();
        let id = {
            let mut inner = self.inner.lock().unwrap();
            let id = inner.next_id;
            inner.next_id += 1;
            let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
            trace!(id, %direction, event = %event_name, "append");
            inner.events.push(LoggedEvent {
                id,
                direction,
                event_name,
                timestamp,
                event_data,
                expanded: false,
            });
            id
        };
        let _ = self.change_tx.send(StoreChange::Appended { id });
        id
    }

    /// Flip the expansion flag of the event with the given id.
    ///
    /// An unknown id is a silent no-op (and sends no notification) — views
    /// may hold stale ids across a [`clear`](EventStore::clear).
    pub fn toggle_expand(&self, id: u64) {
        let flipped = {
            let mut inner = self.inner.lock().unwrap();
            match inner.events.iter_mut().find(|e| e.id == id) {
                Some(event) => {
                    event.expanded = !event.expanded;
                    true
                }
                None => false,
            }
        };
        if flipped {
            let _ = self.change_tx.send(StoreChange::Toggled { id });
        }
    }

    /// Empty the log for a session reset.
    ///
    /// Ids keep counting within the store's lifetime; a brand-new session
    /// should construct a brand-new store.
    pub fn clear(&self) {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.events.clear();
        }
        let _ = self.change_tx.send(StoreChange::Cleared);
    }

    /// Ordered copy of the current log, oldest first.
    pub fn snapshot(&self) -> Vec<LoggedEvent> {
        self.inner.lock().unwrap().events.clone()
    }

    /// Number of events currently in the log.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().events.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Subscribe to change notifications as an async stream.
    ///
    /// Dropping the stream unsubscribes; no notification is delivered to a
    /// dropped observer.
    pub fn changes(&self) -> Pin<Box<dyn Stream<Item = StoreChange> + Send>> {
        broadcast_to_stream(self.change_tx.subscribe())
    }

    /// Subscribe to change notifications as a raw broadcast receiver.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
        self.change_tx.subscribe()
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventStore {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            change_tx: self.change_tx.clone(),
        }
    }
}

/// Handles compare equal when they share the same log. Lets components
/// treat a store handle as a prop without deep-comparing the log.
impl PartialEq for EventStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_append_preserves_order_and_ids() {
        let store = EventStore::new();
        store.append(Direction::Client, "session.update", json!({"a": 1}));
        store.append(Direction::Server, "session.created", Value::Null);
        store.append(Direction::Server, "response.done", json!({}));

        let log = store.snapshot();
        assert_eq!(log.len(), 3);
        assert_eq!(
            log.iter().map(|e| e.event_name.as_str()).collect::<Vec<_>>(),
            vec!["session.update", "session.created", "response.done"]
        );
        // Ids strictly increase in append order
        assert!(log[0].id < log[1].id && log[1].id < log[2].id);
    }

    #[test]
    fn test_toggle_expand_double_negation() {
        let store = EventStore::new();
        let id = store.append(Direction::Server, "response.created", json!({"x": 1}));
        assert!(!store.snapshot()[0].expanded);

        store.toggle_expand(id);
        assert!(store.snapshot()[0].expanded);

        store.toggle_expand(id);
        assert!(!store.snapshot()[0].expanded);
    }

    #[test]
    fn test_toggle_expand_unknown_id_is_noop() {
        let store = EventStore::new();
        store.append(Direction::Client, "input_audio_buffer.append", Value::Null);
        let before = store.snapshot();

        store.toggle_expand(9999);
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_clear_then_append_yields_single_event() {
        let store = EventStore::new();
        for i in 0..5 {
            store.append(Direction::Server, format!("event.{}", i), Value::Null);
        }
        store.clear();
        assert!(store.is_empty());

        store.append(Direction::Client, "session.update", Value::Null);
        let log = store.snapshot();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].event_name, "session.update");
    }

    #[test]
    fn test_clones_share_the_log() {
        let store = EventStore::new();
        let other = store.clone();
        store.append(Direction::Server, "session.created", Value::Null);
        assert_eq!(other.len(), 1);
        assert_eq!(store, other);
        assert_ne!(store, EventStore::new());
    }

    #[tokio::test]
    async fn test_one_notification_per_mutation() {
        let store = EventStore::new();
        let mut rx = store.subscribe();

        let id = store.append(Direction::Server, "session.created", Value::Null);
        store.toggle_expand(id);
        store.toggle_expand(42); // stale id: no notification
        store.clear();

        assert_eq!(rx.recv().await.unwrap(), StoreChange::Appended { id });
        assert_eq!(rx.recv().await.unwrap(), StoreChange::Toggled { id });
        assert_eq!(rx.recv().await.unwrap(), StoreChange::Cleared);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_changes_stream_delivers_appends() {
        use futures::StreamExt;

        let store = EventStore::new();
        let mut changes = store.changes();

        store.append(Direction::Client, "conversation.item.created", json!({"n": 1}));
        store.append(Direction::Server, "response.done", json!({"n": 2}));

        assert!(matches!(
            changes.next().await,
            Some(StoreChange::Appended { id: 0 })
        ));
        assert!(matches!(
            changes.next().await,
            Some(StoreChange::Appended { id: 1 })
        ));
    }
}
