//! Persisted session slot: a single localStorage key surviving page reloads.
//! The last successful exchange wins; only the explicit logout clears it.

use crate::features::auth::types::SessionToken;

pub(crate) const TOKEN_KEY: &str = "token";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
}

pub fn load_token() -> Option<SessionToken> {
    local_storage()?
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|value| !value.is_empty())
        .map(SessionToken::new)
}

pub fn store_token(token: &SessionToken) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token.as_str());
    }
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
