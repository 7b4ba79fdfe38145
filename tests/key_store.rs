// tests/key_store.rs
//
// Credential slot semantics: save/clear round-trip and the resolution
// precedence (explicit > stored > environment).

use ai_news_hub::credentials::{resolve_summary_key, KeyStore, ENV_SUMMARY_API_KEY};

fn store_in(dir: &tempfile::TempDir) -> KeyStore {
    KeyStore::new(dir.path().join("credentials.json"))
}

#[test]
fn save_load_clear_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_in(&tmp);

    assert_eq!(store.load(), None);
    store.save("sk-abc").unwrap();
    assert_eq!(store.load().as_deref(), Some("sk-abc"));

    // Overwrite wins.
    store.save("sk-def").unwrap();
    assert_eq!(store.load().as_deref(), Some("sk-def"));

    store.clear().unwrap();
    assert_eq!(store.load(), None);
    // Clearing an already-empty slot is fine.
    store.clear().unwrap();
}

#[test]
fn malformed_store_counts_as_absent() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_in(&tmp);
    std::fs::write(store.path(), "not json at all").unwrap();
    assert_eq!(store.load(), None);
}

#[serial_test::serial]
#[test]
fn explicit_key_beats_stored_key() {
    std::env::remove_var(ENV_SUMMARY_API_KEY);
    let tmp = tempfile::tempdir().unwrap();
    let store = store_in(&tmp);
    store.save("stored-key").unwrap();

    let resolved = resolve_summary_key(Some("explicit-key".to_string()), &store);
    assert_eq!(resolved.as_deref(), Some("explicit-key"));

    // A blank explicit argument does not shadow the stored key.
    let resolved = resolve_summary_key(Some("   ".to_string()), &store);
    assert_eq!(resolved.as_deref(), Some("stored-key"));
}

#[serial_test::serial]
#[test]
fn stored_key_beats_environment() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_in(&tmp);

    std::env::set_var(ENV_SUMMARY_API_KEY, "env-key");
    store.save("stored-key").unwrap();
    assert_eq!(
        resolve_summary_key(None, &store).as_deref(),
        Some("stored-key")
    );

    store.clear().unwrap();
    assert_eq!(resolve_summary_key(None, &store).as_deref(), Some("env-key"));

    std::env::remove_var(ENV_SUMMARY_API_KEY);
    assert_eq!(resolve_summary_key(None, &store), None);
}
