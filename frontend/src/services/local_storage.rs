use anyhow::{anyhow, Result};
use shelter_backend::KeyValueStore;
use web_sys::Storage;

/// `KeyValueStore` over the browser's `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<Storage> {
        let window = web_sys::window().ok_or_else(|| anyhow!("No browser window available"))?;
        window
            .local_storage()
            .map_err(|e| anyhow!("localStorage is not accessible: {:?}", e))?
            .ok_or_else(|| anyhow!("localStorage is disabled"))
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| anyhow!("Failed to read {} from localStorage: {:?}", key, e))
    }

    // Quota errors surface here as a plain Err
    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| anyhow!("Failed to write {} to localStorage: {:?}", key, e))
    }
}
