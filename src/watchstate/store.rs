use std::sync::{Arc, Mutex};

use serde::Serialize;
use tokio::sync::broadcast;

use crate::models::SavedItem;

use super::{StateStorage, StorageError};

/// Maximum number of entries kept in the recently-viewed list
pub const RECENTLY_VIEWED_CAP: usize = 10;

const WATCHLIST_KEY: &str = "watchlist";
const RECENTLY_VIEWED_KEY: &str = "recentlyViewed";

/// Broadcast to every subscribed observer after a successful mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    WatchlistUpdated,
    RecentlyViewedUpdated,
}

impl StoreEvent {
    /// Wire name of the event, used as the SSE event type
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreEvent::WatchlistUpdated => "watchlist-updated",
            StoreEvent::RecentlyViewedUpdated => "recently-viewed-updated",
        }
    }
}

/// Result of a toggle, so callers can word their confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// The watch-state store: watchlist and recently-viewed lists persisted in
/// durable storage, with a broadcast channel keeping independently mounted
/// observers consistent. Storage is the single source of truth; the store
/// holds no list state in memory.
pub struct WatchStore {
    storage: Arc<dyn StateStorage>,
    events: broadcast::Sender<StoreEvent>,
    // Serializes load-modify-write cycles so mutations never interleave
    mutation_lock: Mutex<()>,
}

impl WatchStore {
    pub fn new(storage: Arc<dyn StateStorage>) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            storage,
            events,
            mutation_lock: Mutex::new(()),
        }
    }

    /// Subscribes an observer for the lifetime of the returned receiver;
    /// dropping it unsubscribes.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Current watchlist, newest-first. Absent or unparseable storage
    /// degrades to an empty list, never an error.
    pub fn load_watchlist(&self) -> Vec<SavedItem> {
        self.load_list(WATCHLIST_KEY)
    }

    pub fn is_in_watchlist(&self, id: u64) -> bool {
        self.load_watchlist().iter().any(|item| item.id == id)
    }

    /// Prepends an item to the watchlist. A duplicate id is a silent no-op:
    /// the list is unique by id and the toggle path normally prevents this
    /// from being reached at all.
    pub fn add_to_watchlist(&self, item: SavedItem) -> Result<(), StorageError> {
        let _guard = self.mutation_lock.lock().unwrap();
        let mut list = self.load_list(WATCHLIST_KEY);
        if list.iter().any(|existing| existing.id == item.id) {
            tracing::debug!(id = item.id, "Item already in watchlist, ignoring add");
            return Ok(());
        }
        tracing::debug!(id = item.id, title = %item.title, "Adding to watchlist");
        list.insert(0, item);
        self.persist(WATCHLIST_KEY, &list)?;
        self.notify(StoreEvent::WatchlistUpdated);
        Ok(())
    }

    /// Removes the entry with the given id. No-op if absent.
    pub fn remove_from_watchlist(&self, id: u64) -> Result<(), StorageError> {
        let _guard = self.mutation_lock.lock().unwrap();
        let mut list = self.load_list(WATCHLIST_KEY);
        list.retain(|item| item.id != id);
        self.persist(WATCHLIST_KEY, &list)?;
        self.notify(StoreEvent::WatchlistUpdated);
        Ok(())
    }

    /// The entry point the UI uses: removes the item if present, adds it
    /// otherwise.
    pub fn toggle_watchlist(&self, item: SavedItem) -> Result<ToggleOutcome, StorageError> {
        let _guard = self.mutation_lock.lock().unwrap();
        let mut list = self.load_list(WATCHLIST_KEY);
        let outcome = if list.iter().any(|existing| existing.id == item.id) {
            list.retain(|existing| existing.id != item.id);
            ToggleOutcome::Removed
        } else {
            list.insert(0, item);
            ToggleOutcome::Added
        };
        self.persist(WATCHLIST_KEY, &list)?;
        self.notify(StoreEvent::WatchlistUpdated);
        Ok(outcome)
    }

    pub fn clear_watchlist(&self) -> Result<(), StorageError> {
        let _guard = self.mutation_lock.lock().unwrap();
        self.persist::<SavedItem>(WATCHLIST_KEY, &[])?;
        self.notify(StoreEvent::WatchlistUpdated);
        Ok(())
    }

    /// Recently-viewed list, newest-first, at most [`RECENTLY_VIEWED_CAP`]
    /// entries.
    pub fn load_recently_viewed(&self) -> Vec<SavedItem> {
        self.load_list(RECENTLY_VIEWED_KEY)
    }

    /// Records a detail-page view: moves the item to the front, dropping any
    /// older entry with the same id, and truncates to the cap.
    pub fn record_recently_viewed(&self, item: SavedItem) -> Result<(), StorageError> {
        let _guard = self.mutation_lock.lock().unwrap();
        let mut list = self.load_list(RECENTLY_VIEWED_KEY);
        list.retain(|existing| existing.id != item.id);
        list.insert(0, item);
        list.truncate(RECENTLY_VIEWED_CAP);
        self.persist(RECENTLY_VIEWED_KEY, &list)?;
        self.notify(StoreEvent::RecentlyViewedUpdated);
        Ok(())
    }

    fn load_list(&self, key: &str) -> Vec<SavedItem> {
        let Some(raw) = self.storage.get(key) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(key, error = %e, "Corrupt state payload, treating as empty");
                Vec::new()
            }
        }
    }

    fn persist<T: Serialize>(&self, key: &str, list: &[T]) -> Result<(), StorageError> {
        let payload = serde_json::to_string(list)?;
        self.storage.set(key, &payload)
    }

    fn notify(&self, event: StoreEvent) {
        // Send fails only when nobody is subscribed, which is fine
        let _ = self.events.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::watchstate::MemoryStorage;

    fn item(id: u64, title: &str) -> SavedItem {
        SavedItem {
            id,
            title: title.to_string(),
            poster_path: None,
            release_date: None,
            vote_average: None,
        }
    }

    fn store() -> WatchStore {
        WatchStore::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_empty_store_loads_empty_lists() {
        let store = store();
        assert!(store.load_watchlist().is_empty());
        assert!(store.load_recently_viewed().is_empty());
        assert!(!store.is_in_watchlist(1));
    }

    #[test]
    fn test_add_then_remove_leaves_exact_set() {
        let store = store();
        store.add_to_watchlist(item(1, "A")).unwrap();
        store.add_to_watchlist(item(2, "B")).unwrap();
        store.remove_from_watchlist(1).unwrap();

        let list = store.load_watchlist();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, 2);
        assert_eq!(list[0].title, "B");
    }

    #[test]
    fn test_newest_addition_is_first() {
        let store = store();
        store.add_to_watchlist(item(1, "A")).unwrap();
        store.add_to_watchlist(item(2, "B")).unwrap();
        store.add_to_watchlist(item(3, "C")).unwrap();

        let ids: Vec<u64> = store.load_watchlist().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let store = store();
        store.add_to_watchlist(item(1, "A")).unwrap();
        store.add_to_watchlist(item(1, "A again")).unwrap();

        let list = store.load_watchlist();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].title, "A");
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let store = store();
        store.add_to_watchlist(item(1, "A")).unwrap();
        store.remove_from_watchlist(99).unwrap();
        assert_eq!(store.load_watchlist().len(), 1);
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let store = store();
        store.add_to_watchlist(item(1, "A")).unwrap();
        let before = store.load_watchlist();

        assert_eq!(store.toggle_watchlist(item(2, "B")).unwrap(), ToggleOutcome::Added);
        assert_eq!(store.toggle_watchlist(item(2, "B")).unwrap(), ToggleOutcome::Removed);

        assert_eq!(store.load_watchlist(), before);
    }

    #[test]
    fn test_clear_watchlist() {
        let store = store();
        store.add_to_watchlist(item(1, "A")).unwrap();
        store.add_to_watchlist(item(2, "B")).unwrap();
        store.clear_watchlist().unwrap();
        assert!(store.load_watchlist().is_empty());
    }

    #[test]
    fn test_corrupt_watchlist_degrades_to_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set("watchlist", "{not json").unwrap();
        let store = WatchStore::new(storage);
        assert!(store.load_watchlist().is_empty());

        // And the store recovers: the next mutation writes a clean list
        store.add_to_watchlist(item(1, "A")).unwrap();
        assert_eq!(store.load_watchlist().len(), 1);
    }

    #[test]
    fn test_wrong_shape_degrades_to_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set("watchlist", r#"{"id": 1}"#).unwrap();
        let store = WatchStore::new(storage);
        assert!(store.load_watchlist().is_empty());
    }

    #[test]
    fn test_recently_viewed_caps_at_ten() {
        let store = store();
        for id in 1..=11 {
            store.record_recently_viewed(item(id, "X")).unwrap();
        }

        let ids: Vec<u64> = store.load_recently_viewed().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![11, 10, 9, 8, 7, 6, 5, 4, 3, 2]);
    }

    #[test]
    fn test_reviewing_moves_to_front_without_duplicating() {
        let store = store();
        for id in 1..=6 {
            store.record_recently_viewed(item(id, "X")).unwrap();
        }
        store.record_recently_viewed(item(5, "X")).unwrap();

        let ids: Vec<u64> = store.load_recently_viewed().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![5, 6, 4, 3, 2, 1]);
    }

    #[test]
    fn test_reviewing_same_item_twice_keeps_one_entry() {
        let store = store();
        store.record_recently_viewed(item(5, "X")).unwrap();
        store.record_recently_viewed(item(5, "X")).unwrap();

        let list = store.load_recently_viewed();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, 5);
    }

    #[test]
    fn test_watchlist_and_recent_are_independent() {
        let store = store();
        store.add_to_watchlist(item(1, "A")).unwrap();
        store.record_recently_viewed(item(2, "B")).unwrap();

        assert_eq!(store.load_watchlist().len(), 1);
        assert_eq!(store.load_recently_viewed().len(), 1);
        assert!(!store.is_in_watchlist(2));
    }

    #[test]
    fn test_mutations_notify_subscribers() {
        let store = store();
        let mut rx = store.subscribe();

        store.add_to_watchlist(item(1, "A")).unwrap();
        assert_eq!(rx.try_recv().unwrap(), StoreEvent::WatchlistUpdated);

        store.record_recently_viewed(item(1, "A")).unwrap();
        assert_eq!(rx.try_recv().unwrap(), StoreEvent::RecentlyViewedUpdated);

        store.clear_watchlist().unwrap();
        assert_eq!(rx.try_recv().unwrap(), StoreEvent::WatchlistUpdated);
    }

    #[test]
    fn test_dropped_subscriber_does_not_block_mutations() {
        let store = store();
        drop(store.subscribe());
        store.add_to_watchlist(item(1, "A")).unwrap();
        assert!(store.is_in_watchlist(1));
    }

    struct FailingStorage;

    impl crate::watchstate::StateStorage for FailingStorage {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            })
        }
    }

    #[test]
    fn test_write_failure_surfaces_and_skips_notification() {
        let store = WatchStore::new(Arc::new(FailingStorage));
        let mut rx = store.subscribe();

        assert!(store.add_to_watchlist(item(1, "A")).is_err());
        assert!(rx.try_recv().is_err());
    }
}
