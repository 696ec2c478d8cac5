//! Change notification plumbing.
//!
//! The engine is the placement table's only direct listener; external
//! observers (UI, a replication layer) subscribe through the
//! [`EventBus`] and receive simplified `(key, kind)` events plus grid
//! resizes. Delivery is synchronous — events are queued on the
//! subscriber's channel before the triggering operation returns — and
//! best-effort: subscribers that dropped their receiver are pruned.

use crate::dims::GridDims;
use crate::placement::PlacementEntry;
use crate::table::TableHooks;
use crossbeam_channel::{unbounded, Receiver, Sender};
use stowage_core::ItemKey;

/// What happened to a placement table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryEventKind {
    /// The entry was inserted.
    Added,
    /// The entry is being removed (fired before removal).
    Removed,
    /// The entry's placement changed in place.
    Changed,
}

/// A change notification emitted by the grid engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridEvent {
    /// A placement table entry was added, removed, or changed.
    Entry {
        /// The affected item.
        key: ItemKey,
        /// What happened to it.
        kind: EntryEventKind,
    },
    /// The grid was resized; the payload is the new dimensions.
    Resized(GridDims),
}

/// Fan-out of [`GridEvent`]s to any number of subscribers.
#[derive(Debug, Default)]
pub struct EventBus {
    senders: Vec<Sender<GridEvent>>,
}

impl EventBus {
    /// A bus with no subscribers. Emitting on it is a no-op.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber and return its receiving end.
    pub fn subscribe(&mut self) -> Receiver<GridEvent> {
        let (tx, rx) = unbounded();
        self.senders.push(tx);
        rx
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.senders.len()
    }

    /// Deliver an event to every live subscriber, pruning any whose
    /// receiver has been dropped.
    pub fn emit(&mut self, event: GridEvent) {
        self.senders.retain(|tx| tx.send(event).is_ok());
    }

    /// Convenience for the common entry-event case.
    pub fn emit_entry(&mut self, key: ItemKey, kind: EntryEventKind) {
        self.emit(GridEvent::Entry { key, kind });
    }
}

/// The bus doubles as the table's listener, forwarding table callbacks
/// as simplified `(key, kind)` events.
impl TableHooks for EventBus {
    fn entry_added(&mut self, entry: &PlacementEntry) {
        self.emit_entry(entry.key, EntryEventKind::Added);
    }

    fn entry_will_remove(&mut self, entry: &PlacementEntry) {
        self.emit_entry(entry.key, EntryEventKind::Removed);
    }

    fn entry_changed(&mut self, entry: &PlacementEntry) {
        self.emit_entry(entry.key, EntryEventKind::Changed);
    }
}
