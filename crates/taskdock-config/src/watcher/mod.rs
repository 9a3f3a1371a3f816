//! File watcher for the persisted group store.
//!
//! Uses the `notify` crate to watch `groups.json` for changes,
//! with a 500ms debounce so an editor's write-then-rename yields one signal.

mod store_watcher;

#[cfg(test)]
mod tests;

pub use store_watcher::StoreWatcher;
