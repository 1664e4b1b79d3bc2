//! Session-token lifecycle.
//!
//! A [`SessionStore`] owns the access-token record for the signed-in user.
//! The record lives in exactly one of two storage scopes, chosen at login by
//! the "remember me" flag: durable (`localStorage`) or ephemeral
//! (`sessionStorage`). Validity is checked lazily on every read; there is no
//! background expiry timer. An expired or corrupt record is purged from both
//! scopes as a side effect of the read and reported through the expiry hook
//! so the UI can tell the user to sign in again.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::{MemorySlot, StorageSlot};

/// Fixed slot name the token record is stored under, in both scopes.
pub const TOKEN_SLOT_KEY: &str = "access_token";

/// The persisted unit describing an authenticated session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub token: String,
    pub expire: String,
    pub username: String,
    pub id: String,
}

impl TokenRecord {
    /// Parse the `expire` field into epoch milliseconds.
    ///
    /// The platform backend has sent RFC 3339 strings, bare
    /// `YYYY-MM-DD HH:MM:SS` strings (read as UTC), and raw epoch
    /// milliseconds. Anything else is unparseable and the record counts as
    /// corrupt.
    fn expire_ms(&self) -> Option<i64> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.expire) {
            return Some(dt.timestamp_millis());
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(&self.expire, "%Y-%m-%d %H:%M:%S") {
            return Some(naive.and_utc().timestamp_millis());
        }
        self.expire.parse::<i64>().ok()
    }
}

/// A record is valid only while its expiry is strictly in the future.
/// `expire == now` is already expired; unparseable expiry is never valid.
fn record_is_valid(record: &TokenRecord, now_ms: i64) -> bool {
    record.expire_ms().is_some_and(|expire| expire > now_ms)
}

/// Owns the token record across the durable and ephemeral storage scopes.
///
/// Constructed once at app start and handed to the router guard, the HTTP
/// layer, and the pages via context. Never accessed as ambient global state.
pub struct SessionStore {
    durable: Arc<dyn StorageSlot>,
    ephemeral: Arc<dyn StorageSlot>,
    on_expire: Mutex<Option<Arc<dyn Fn() + Send + Sync>>>,
}

impl SessionStore {
    pub fn new(durable: Arc<dyn StorageSlot>, ephemeral: Arc<dyn StorageSlot>) -> Self {
        Self {
            durable,
            ephemeral,
            on_expire: Mutex::new(None),
        }
    }

    /// Store backed by browser `localStorage` / `sessionStorage`.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn browser() -> Self {
        use crate::storage::{WebScope, WebSlot};
        Self::new(
            Arc::new(WebSlot::new(WebScope::Local, TOKEN_SLOT_KEY)),
            Arc::new(WebSlot::new(WebScope::Session, TOKEN_SLOT_KEY)),
        )
    }

    /// Store backed by in-memory slots, for native builds and tests.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySlot::new()), Arc::new(MemorySlot::new()))
    }

    /// Register the hook fired when a read purges an expired or corrupt
    /// record. The app wires this to a "session expired" notice.
    pub fn set_expiry_hook(&self, hook: impl Fn() + Send + Sync + 'static) {
        if let Ok(mut slot) = self.on_expire.lock() {
            *slot = Some(Arc::new(hook));
        }
    }

    /// Write a token record into the scope selected by `remember`:
    /// durable when true, ephemeral otherwise. The other scope is left
    /// untouched; only [`Self::delete_token`] clears both.
    pub fn store_token(&self, remember: bool, record: &TokenRecord) {
        let Ok(serialized) = serde_json::to_string(record) else {
            return;
        };
        if remember {
            self.durable.write(&serialized);
        } else {
            self.ephemeral.write(&serialized);
        }
    }

    /// The current token, if a valid record exists.
    ///
    /// Reads the durable scope first, falling back to ephemeral. A missing
    /// record yields `None`; a corrupt or expired record is purged from both
    /// scopes, fires the expiry hook, and yields `None`.
    pub fn take_token(&self) -> Option<String> {
        self.take_record_at(Utc::now().timestamp_millis())
            .map(|record| record.token)
    }

    /// Username from the current record, when the session is valid.
    pub fn username(&self) -> Option<String> {
        self.take_record_at(Utc::now().timestamp_millis())
            .map(|record| record.username)
    }

    fn take_record_at(&self, now_ms: i64) -> Option<TokenRecord> {
        let raw = self.durable.read().or_else(|| self.ephemeral.read())?;
        match serde_json::from_str::<TokenRecord>(&raw) {
            Ok(record) if record_is_valid(&record, now_ms) => Some(record),
            _ => {
                self.delete_token();
                let hook = self.on_expire.lock().ok().and_then(|slot| slot.clone());
                if let Some(hook) = hook {
                    hook();
                }
                None
            }
        }
    }

    /// Purge the record from both scopes unconditionally. Idempotent.
    pub fn delete_token(&self) {
        self.durable.clear();
        self.ephemeral.clear();
    }

    /// Header entries for an authenticated request: empty when there is no
    /// valid token, else a single bearer credential. Routes through
    /// [`Self::take_token`] so expiry purging happens here too.
    pub fn authorization_header(&self) -> Vec<(&'static str, String)> {
        match self.take_token() {
            Some(token) => vec![("Authorization", format!("Bearer {token}"))],
            None => Vec::new(),
        }
    }

    /// True iff no valid token is available.
    pub fn is_unauthorized(&self) -> bool {
        self.take_token().is_none()
    }
}
