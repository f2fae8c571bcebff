//! Gated landing page shown after a successful exchange. The guard redirects
//! anonymous visitors back to the login route; signing out clears the session
//! and lets the same guard take over.

use crate::components::{Alert, AlertKind, AuthShell, Button};
use crate::features::auth::RequireSession;
use crate::features::auth::state::use_session;
use leptos::prelude::*;

#[component]
pub fn ProtectedPage() -> impl IntoView {
    let session = use_session();

    // Clearing the session flips the guard, which handles the redirect.
    let on_sign_out = Callback::new(move |_: ()| {
        session.logout();
    });

    view! {
        <RequireSession>
            <AuthShell>
                <div class="text-center space-y-6">
                    <h2 class="text-xl font-bold text-gray-900 dark:text-white">
                        "Protected"
                    </h2>
                    <Alert kind=AlertKind::Info message="You are signed in.".to_string() />
                    <Button on_click=on_sign_out>"Sign out"</Button>
                </div>
            </AuthShell>
        </RequireSession>
    }
}
