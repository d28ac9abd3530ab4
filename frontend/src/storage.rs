use gloo_storage::{LocalStorage, Storage};
use shared::CREDENTIAL_STORAGE_KEY;

// The key is stored as a plain string, not JSON, so read and write through
// the raw storage handle.

pub fn load_credential() -> String {
    LocalStorage::raw()
        .get_item(CREDENTIAL_STORAGE_KEY)
        .ok()
        .flatten()
        .unwrap_or_default()
}

pub fn save_credential(value: &str) {
    if let Err(e) = LocalStorage::raw().set_item(CREDENTIAL_STORAGE_KEY, value) {
        log::error!("Failed to persist API key: {:?}", e);
    }
}
