//! Single-slot key/value storage behind a small trait.
//!
//! The session token occupies one logical slot per storage scope. Browser
//! builds back the slots with `localStorage` / `sessionStorage`; native
//! builds and tests use [`MemorySlot`]. Web storage failures (storage
//! disabled, quota, privacy mode) are swallowed: reads become `None` and
//! writes become no-ops, never errors.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::{Arc, Mutex};

/// One named slot in a key/value store.
pub trait StorageSlot: Send + Sync {
    /// Read the slot's current value, if any.
    fn read(&self) -> Option<String>;
    /// Overwrite the slot's value.
    fn write(&self, value: &str);
    /// Remove the slot's value. Idempotent.
    fn clear(&self);
}

/// In-memory slot for native builds and tests. Clones share the value.
#[derive(Clone, Debug, Default)]
pub struct MemorySlot {
    value: Arc<Mutex<Option<String>>>,
}

impl MemorySlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Option<String> {
        self.value.lock().ok().and_then(|guard| guard.clone())
    }

    fn write(&self, value: &str) {
        if let Ok(mut guard) = self.value.lock() {
            *guard = Some(value.to_owned());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.value.lock() {
            *guard = None;
        }
    }
}

/// Which browser storage scope a [`WebSlot`] targets.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WebScope {
    /// `localStorage` — survives the tab.
    Local,
    /// `sessionStorage` — cleared when the browsing session ends.
    Session,
}

/// A named slot in browser `localStorage` or `sessionStorage`.
///
/// Holds no JS handle itself (the storage object is fetched per call), so
/// the type stays plain data.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug)]
pub struct WebSlot {
    scope: WebScope,
    key: &'static str,
}

#[cfg(feature = "hydrate")]
impl WebSlot {
    #[must_use]
    pub fn new(scope: WebScope, key: &'static str) -> Self {
        Self { scope, key }
    }

    fn backing(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self.scope {
            WebScope::Local => window.local_storage().ok().flatten(),
            WebScope::Session => window.session_storage().ok().flatten(),
        }
    }
}

#[cfg(feature = "hydrate")]
impl StorageSlot for WebSlot {
    fn read(&self) -> Option<String> {
        self.backing()?.get_item(self.key).ok().flatten()
    }

    fn write(&self, value: &str) {
        if let Some(storage) = self.backing() {
            let _ = storage.set_item(self.key, value);
        }
    }

    fn clear(&self) {
        if let Some(storage) = self.backing() {
            let _ = storage.remove_item(self.key);
        }
    }
}
