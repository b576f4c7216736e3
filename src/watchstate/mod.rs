//! Durable, event-synchronized personalization state: the user's watchlist
//! and a capped recently-viewed list, shared across observers through a
//! broadcast channel rather than a central in-memory copy.

mod storage;
mod store;

pub use storage::{FileStorage, MemoryStorage, StateStorage, StorageError};
pub use store::{StoreEvent, ToggleOutcome, WatchStore, RECENTLY_VIEWED_CAP};
