//! `localStorage`-backed token storage

use listkeeper_core::{CoreError, CoreResult, TOKEN_KEY, TokenStore};
use web_sys::Storage;

/// Keeps the raw bearer token under `localStorage["token"]`
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalTokenStore;

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalTokenStore {
    fn get(&self) -> Option<String> {
        local_storage()
            .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
            .filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) -> CoreResult<()> {
        let storage =
            local_storage().ok_or_else(|| CoreError::storage("localStorage is unavailable"))?;
        storage
            .set_item(TOKEN_KEY, token)
            .map_err(|e| CoreError::storage(format!("failed to store token: {e:?}")))
    }

    fn clear(&self) -> CoreResult<()> {
        let Some(storage) = local_storage() else {
            return Ok(());
        };
        storage
            .remove_item(TOKEN_KEY)
            .map_err(|e| CoreError::storage(format!("failed to remove token: {e:?}")))
    }
}
