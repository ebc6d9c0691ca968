//! Browser Session Store
//!
//! `window.localStorage`, so a login survives reloads and navigation within
//! the same browser profile.

use taskboard_client::SessionStore;

const TOKEN_KEY: &str = "authToken";
const IDENTITY_KEY: &str = "email";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    fn read(key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }
}

impl SessionStore for BrowserSessionStore {
    fn set_session(&self, token: &str, identity: &str) {
        let Some(storage) = local_storage() else {
            log::warn!("localStorage unavailable; session not persisted");
            return;
        };
        if storage.set_item(TOKEN_KEY, token).is_err() || storage.set_item(IDENTITY_KEY, identity).is_err() {
            log::warn!("Failed to write session to localStorage");
        }
    }

    fn token(&self) -> Option<String> {
        Self::read(TOKEN_KEY)
    }

    fn identity(&self) -> Option<String> {
        Self::read(IDENTITY_KEY)
    }

    fn clear_session(&self) {
        let Some(storage) = local_storage() else {
            log::warn!("localStorage unavailable; session not cleared");
            return;
        };
        for key in [TOKEN_KEY, IDENTITY_KEY] {
            if let Err(err) = storage.remove_item(key) {
                log::warn!("Failed to remove {} from localStorage: {:?}", key, err);
            }
        }
    }
}
