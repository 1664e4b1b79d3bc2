use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{Duration, Utc};

use super::*;

fn record_expiring_at(expire: &str) -> TokenRecord {
    TokenRecord {
        token: "tok-1".to_owned(),
        expire: expire.to_owned(),
        username: "alice".to_owned(),
        id: "u-1".to_owned(),
    }
}

fn future_record() -> TokenRecord {
    let expire = (Utc::now() + Duration::hours(1)).to_rfc3339();
    record_expiring_at(&expire)
}

fn past_record() -> TokenRecord {
    let expire = (Utc::now() - Duration::hours(1)).to_rfc3339();
    record_expiring_at(&expire)
}

// =============================================================
// Expiry parsing and the validity predicate
// =============================================================

#[test]
fn expire_parses_rfc3339() {
    let record = record_expiring_at("1970-01-01T00:00:10+00:00");
    assert_eq!(record.expire_ms(), Some(10_000));
}

#[test]
fn expire_parses_bare_datetime_as_utc() {
    let record = record_expiring_at("1970-01-01 00:00:10");
    assert_eq!(record.expire_ms(), Some(10_000));
}

#[test]
fn expire_parses_epoch_milliseconds() {
    let record = record_expiring_at("123456");
    assert_eq!(record.expire_ms(), Some(123_456));
}

#[test]
fn expire_garbage_is_unparseable() {
    let record = record_expiring_at("next tuesday");
    assert_eq!(record.expire_ms(), None);
}

#[test]
fn record_expiring_exactly_now_is_invalid() {
    // Strict inequality: expire == now is already expired.
    let record = record_expiring_at("10000");
    assert!(record_is_valid(&record, 9_999));
    assert!(!record_is_valid(&record, 10_000));
    assert!(!record_is_valid(&record, 10_001));
}

#[test]
fn record_with_unparseable_expire_is_invalid() {
    let record = record_expiring_at("not a date");
    assert!(!record_is_valid(&record, 0));
}

// =============================================================
// store / take / delete across the two scopes
// =============================================================

#[test]
fn take_token_absent_when_nothing_stored() {
    let session = SessionStore::in_memory();
    assert_eq!(session.take_token(), None);
    assert!(session.is_unauthorized());
}

#[test]
fn remembered_token_goes_to_the_durable_scope() {
    let durable = Arc::new(crate::storage::MemorySlot::new());
    let ephemeral = Arc::new(crate::storage::MemorySlot::new());
    let session = SessionStore::new(durable.clone(), ephemeral.clone());

    session.store_token(true, &future_record());

    assert!(durable.read().is_some());
    assert!(ephemeral.read().is_none());
    assert_eq!(session.take_token().as_deref(), Some("tok-1"));
}

#[test]
fn unremembered_token_goes_to_the_ephemeral_scope() {
    let durable = Arc::new(crate::storage::MemorySlot::new());
    let ephemeral = Arc::new(crate::storage::MemorySlot::new());
    let session = SessionStore::new(durable.clone(), ephemeral.clone());

    session.store_token(false, &future_record());

    assert!(durable.read().is_none());
    assert!(ephemeral.read().is_some());
    assert_eq!(session.take_token().as_deref(), Some("tok-1"));
}

#[test]
fn durable_scope_wins_over_ephemeral() {
    let session = SessionStore::in_memory();
    let mut remembered = future_record();
    remembered.token = "durable-tok".to_owned();
    session.store_token(true, &remembered);

    let mut transient = future_record();
    transient.token = "ephemeral-tok".to_owned();
    session.store_token(false, &transient);

    assert_eq!(session.take_token().as_deref(), Some("durable-tok"));
}

#[test]
fn losing_the_ephemeral_scope_ends_the_session() {
    // remember = false, then the browsing session ends.
    let durable = Arc::new(crate::storage::MemorySlot::new());
    let ephemeral = Arc::new(crate::storage::MemorySlot::new());
    let session = SessionStore::new(durable, ephemeral.clone());

    session.store_token(false, &future_record());
    assert!(!session.is_unauthorized());

    ephemeral.clear();
    assert!(session.is_unauthorized());
}

#[test]
fn delete_token_purges_both_scopes_and_is_idempotent() {
    let session = SessionStore::in_memory();
    session.store_token(true, &future_record());
    session.store_token(false, &future_record());

    session.delete_token();
    assert_eq!(session.take_token(), None);

    session.delete_token();
    assert_eq!(session.take_token(), None);
}

// =============================================================
// Expiry and corruption purge on read
// =============================================================

#[test]
fn expired_record_is_purged_from_both_scopes() {
    let durable = Arc::new(crate::storage::MemorySlot::new());
    let ephemeral = Arc::new(crate::storage::MemorySlot::new());
    let session = SessionStore::new(durable.clone(), ephemeral.clone());

    session.store_token(true, &past_record());
    assert_eq!(session.take_token(), None);
    assert!(durable.read().is_none());
    assert!(ephemeral.read().is_none());
}

#[test]
fn corrupt_record_is_treated_as_absent_and_purged() {
    let durable = Arc::new(crate::storage::MemorySlot::new());
    let session = SessionStore::new(durable.clone(), Arc::new(crate::storage::MemorySlot::new()));

    durable.write("{not json");
    assert_eq!(session.take_token(), None);
    assert!(durable.read().is_none());
}

#[test]
fn expiry_hook_fires_on_purge_but_not_on_missing() {
    let session = SessionStore::in_memory();
    let fired = Arc::new(AtomicU32::new(0));
    let counter = fired.clone();
    session.set_expiry_hook(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    // Missing record: no hook.
    assert_eq!(session.take_token(), None);
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    // Expired record: purged, hook fires once.
    session.store_token(true, &past_record());
    assert_eq!(session.take_token(), None);
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    // Already purged: subsequent reads see a missing record.
    assert_eq!(session.take_token(), None);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

// =============================================================
// Derived accessors
// =============================================================

#[test]
fn authorization_header_carries_the_bearer_token() {
    let session = SessionStore::in_memory();
    session.store_token(true, &future_record());

    let headers = session.authorization_header();
    assert_eq!(headers.len(), 1);
    assert_eq!(headers[0].0, "Authorization");
    assert_eq!(headers[0].1, "Bearer tok-1");
}

#[test]
fn authorization_header_is_empty_without_a_valid_token() {
    let session = SessionStore::in_memory();
    assert!(session.authorization_header().is_empty());

    session.store_token(true, &past_record());
    assert!(session.authorization_header().is_empty());
}

#[test]
fn username_is_available_while_the_session_is_valid() {
    let session = SessionStore::in_memory();
    session.store_token(false, &future_record());
    assert_eq!(session.username().as_deref(), Some("alice"));

    session.delete_token();
    assert_eq!(session.username(), None);
}
