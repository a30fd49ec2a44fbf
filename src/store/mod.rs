//! In-memory observable load collection.
//!
//! The store owns the current board of loads in insertion order and
//! notifies listeners synchronously after every successful mutation.
//! Conflict detection reads an immutable view via [`LoadStore::list`] or
//! [`LoadStore::conflicts`].

use std::fmt;

use crate::detection::ConflictDetector;
use crate::error::StoreError;
use crate::models::{ConflictFinding, LoadRecord};

/// Change notification delivered to listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A load was added.
    Added(String),
    /// A load was replaced.
    Updated(String),
    /// A load was removed.
    Removed(String),
}

impl StoreEvent {
    /// ID of the affected load.
    pub fn load_id(&self) -> &str {
        match self {
            StoreEvent::Added(id) | StoreEvent::Updated(id) | StoreEvent::Removed(id) => id,
        }
    }
}

/// Handle returned by [`LoadStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent, &[LoadRecord]) + Send>;

/// Insertion-ordered load collection with change listeners.
#[derive(Default)]
pub struct LoadStore {
    loads: Vec<LoadRecord>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl fmt::Debug for LoadStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadStore")
            .field("loads", &self.loads)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl LoadStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `loads`, without notifying anyone.
    ///
    /// Fails on the first empty or duplicate ID.
    pub fn with_loads(loads: impl IntoIterator<Item = LoadRecord>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for load in loads {
            store.insert(load)?;
        }
        Ok(store)
    }

    /// Adds a new load.
    pub fn add(&mut self, load: LoadRecord) -> Result<(), StoreError> {
        let id = load.id.clone();
        self.insert(load)?;
        tracing::debug!(load = %id, "load added");
        self.notify(StoreEvent::Added(id));
        Ok(())
    }

    /// Replaces the load with the same ID.
    pub fn update(&mut self, load: LoadRecord) -> Result<(), StoreError> {
        let pos = self.position(&load.id)?;
        let id = load.id.clone();
        self.loads[pos] = load;
        tracing::debug!(load = %id, "load updated");
        self.notify(StoreEvent::Updated(id));
        Ok(())
    }

    /// Removes and returns the load with the given ID.
    pub fn remove(&mut self, id: &str) -> Result<LoadRecord, StoreError> {
        let pos = self.position(id)?;
        let removed = self.loads.remove(pos);
        tracing::debug!(load = %id, "load removed");
        self.notify(StoreEvent::Removed(removed.id.clone()));
        Ok(removed)
    }

    /// Looks up a load by ID.
    pub fn get(&self, id: &str) -> Option<&LoadRecord> {
        self.loads.iter().find(|l| l.id == id)
    }

    /// All loads in insertion order.
    pub fn list(&self) -> &[LoadRecord] {
        &self.loads
    }

    /// Owned copy of the current loads.
    pub fn snapshot(&self) -> Vec<LoadRecord> {
        self.loads.clone()
    }

    /// Number of loads.
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    /// Whether the store holds no loads.
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    /// Runs conflict detection on the current loads.
    pub fn conflicts(&self, detector: &ConflictDetector) -> Vec<ConflictFinding> {
        detector.detect(&self.loads)
    }

    /// Registers a listener called after every successful mutation with
    /// the event and the loads as they stand afterwards.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent, &[LoadRecord]) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn insert(&mut self, load: LoadRecord) -> Result<(), StoreError> {
        if load.id.trim().is_empty() {
            return Err(StoreError::EmptyId);
        }
        if self.get(&load.id).is_some() {
            return Err(StoreError::DuplicateId(load.id));
        }
        self.loads.push(load);
        Ok(())
    }

    fn position(&self, id: &str) -> Result<usize, StoreError> {
        self.loads
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn notify(&mut self, event: StoreEvent) {
        let loads = &self.loads;
        for (_, listener) in &mut self.listeners {
            listener(&event, loads);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConflictKind, LoadStatus};
    use std::sync::{Arc, Mutex};

    fn sample_store() -> LoadStore {
        LoadStore::with_loads(vec![
            LoadRecord::new("L1", "10:00").with_trip("V1"),
            LoadRecord::new("L2", "10:30").with_trip("V2"),
        ])
        .unwrap()
    }

    #[test]
    fn test_add_and_get() {
        let mut store = LoadStore::new();
        assert!(store.is_empty());
        store.add(LoadRecord::new("L1", "10:00")).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("L1").unwrap().time, "10:00");
        assert!(store.get("L9").is_none());
    }

    #[test]
    fn test_add_rejects_bad_ids() {
        let mut store = sample_store();
        assert_eq!(
            store.add(LoadRecord::new("L1", "11:00")),
            Err(StoreError::DuplicateId("L1".into()))
        );
        assert_eq!(store.add(LoadRecord::new("  ", "11:00")), Err(StoreError::EmptyId));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_and_remove() {
        let mut store = sample_store();
        store
            .update(LoadRecord::new("L2", "10:30").with_status(LoadStatus::Complete))
            .unwrap();
        assert_eq!(store.get("L2").unwrap().status, LoadStatus::Complete);
        assert_eq!(
            store.update(LoadRecord::new("L9", "10:30")),
            Err(StoreError::NotFound("L9".into()))
        );

        let removed = store.remove("L1").unwrap();
        assert_eq!(removed.id, "L1");
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.remove("L1"), Err(StoreError::NotFound("L1".into())));
    }

    #[test]
    fn test_insertion_order() {
        let mut store = sample_store();
        store.add(LoadRecord::new("L0", "09:00")).unwrap();
        let ids: Vec<&str> = store.list().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["L1", "L2", "L0"]);
        assert_eq!(store.snapshot(), store.list());
    }

    #[test]
    fn test_listeners_notified() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let mut store = sample_store();
        let sink = Arc::clone(&events);
        let sub = store.subscribe(move |event, loads| {
            sink.lock().unwrap().push((event.clone(), loads.len()));
        });

        store.add(LoadRecord::new("L3", "11:00")).unwrap();
        store.update(LoadRecord::new("L3", "11:05")).unwrap();
        store.remove("L1").unwrap();
        let _ = store.remove("missing");

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                (StoreEvent::Added("L3".into()), 3),
                (StoreEvent::Updated("L3".into()), 3),
                (StoreEvent::Removed("L1".into()), 2),
            ]
        );

        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.add(LoadRecord::new("L4", "12:00")).unwrap();
        assert_eq!(events.lock().unwrap().len(), 3);
    }

    #[test]
    fn test_listener_reruns_detection() {
        let latest = Arc::new(Mutex::new(Vec::new()));
        let mut store = sample_store();
        let sink = Arc::clone(&latest);
        let detector = ConflictDetector::default();
        store.subscribe(move |_, loads| {
            *sink.lock().unwrap() = detector.detect(loads);
        });

        store.add(LoadRecord::new("L3", "12:00").with_trip("V1")).unwrap();
        let findings = latest.lock().unwrap().clone();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, ConflictKind::DuplicateTrip);
        assert_eq!(store.conflicts(&detector), findings);
        assert_eq!(StoreEvent::Added("L3".into()).load_id(), "L3");
    }
}
