//! Persistent bearer-token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Bearer sessions mirror their token into `localStorage` so a reload can
//! restore the session without a network call. SSR builds have no storage
//! and behave as if it were empty.

/// Fixed `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "auth_token";

/// Synchronous key/value slot for a single token.
pub trait TokenStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn remove(&self);
}

/// `window.localStorage` under [`TOKEN_STORAGE_KEY`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStorage for LocalTokenStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()?;
            if raw.is_empty() { None } else { Some(raw) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn remove(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_STORAGE_KEY);
            }
        }
    }
}
