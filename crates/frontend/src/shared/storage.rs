//! Thin JSON layer over `window.localStorage`.
//!
//! Storage may be missing (private mode, sandboxed iframe) or hold garbage
//! written by an older build. Both cases degrade to "nothing stored".

use serde::de::DeserializeOwned;
use serde::Serialize;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Raw string value under `key`
pub fn load_raw(key: &str) -> Option<String> {
    storage()?.get_item(key).ok().flatten()
}

pub fn save_raw(key: &str, value: &str) {
    let Some(storage) = storage() else {
        log::warn!("localStorage unavailable, '{}' not saved", key);
        return;
    };
    if storage.set_item(key, value).is_err() {
        log::warn!("Failed to write '{}' to localStorage", key);
    }
}

/// Decode a stored JSON value, `None` for anything that does not fit `T`
pub fn decode<T: DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_str::<T>(raw)
        .map_err(|e| log::warn!("Ignoring corrupt localStorage value: {}", e))
        .ok()
}

/// Load and deserialize a JSON value stored under `key`
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    decode(&load_raw(key)?)
}

pub fn save_json<T: Serialize>(key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => save_raw(key, &raw),
        Err(e) => log::warn!("Failed to serialize '{}': {}", key, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_id_list() {
        assert_eq!(decode::<Vec<u64>>("[27992, 4]"), Some(vec![27992, 4]));
        assert_eq!(decode::<Vec<u64>>("[]"), Some(vec![]));
    }

    #[test]
    fn test_decode_rejects_corrupt_values() {
        assert_eq!(decode::<Vec<u64>>(r#"{"ids": [1]}"#), None);
        assert_eq!(decode::<Vec<u64>>(r#"["a", "b"]"#), None);
        assert_eq!(decode::<Vec<u64>>("[1, -2]"), None);
        assert_eq!(decode::<Vec<u64>>("not json"), None);
        assert_eq!(decode::<Vec<u64>>(""), None);
    }
}
