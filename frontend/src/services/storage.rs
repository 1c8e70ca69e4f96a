use bank_shared::{StorageBackend, StorageError};
use gloo::storage::{LocalStorage, Storage};

/// `window.localStorage`, holding raw strings under their key
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_round_trip() {
        let mut storage = BrowserStorage;
        let key = "bank-frontend-test";

        storage.write(key, r#"{"user":"alice"}"#).unwrap();
        assert_eq!(storage.read(key).as_deref(), Some(r#"{"user":"alice"}"#));

        storage.remove(key).unwrap();
        assert_eq!(storage.read(key), None);
    }
}
