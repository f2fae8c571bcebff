//! Session state and context for the frontend. The provider hydrates the
//! session from the persisted slot on creation and exposes derived signals for
//! guards and routes. The token signal is the single owner of the in-memory
//! session; persistence goes through it, never around it.

use crate::features::auth::{storage, types::SessionToken};
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Session context shared through Leptos.
pub struct SessionContext {
    token: RwSignal<Option<SessionToken>>,
    pub is_authenticated: Signal<bool>,
}

impl SessionContext {
    /// Builds a context around the provided token signal.
    fn new(token: RwSignal<Option<SessionToken>>) -> Self {
        let is_authenticated = Signal::derive(move || token.get().is_some());
        Self {
            token,
            is_authenticated,
        }
    }

    /// Installs a freshly exchanged session token, replacing any previous one
    /// in both the signal and the persisted slot.
    pub fn establish(&self, token: SessionToken) {
        storage::store_token(&token);
        self.token.set(Some(token));
    }

    /// Clears the session, in memory and in the persisted slot.
    pub fn logout(&self) {
        storage::clear_token();
        self.token.set(None);
    }
}

/// Provides the session context, hydrated once from the persisted slot.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let token = RwSignal::new(storage::load_token());
    let session = SessionContext::new(token);
    provide_context(session);

    view! { {children()} }
}

/// Returns the current session context or a fallback empty context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| {
        let token = RwSignal::new(None);
        SessionContext::new(token)
    })
}
