use crate::components::AuthShell;
use crate::features::auth::panel::{PanelMode, SessionPanel};
use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <AuthShell>
            <SessionPanel mode=PanelMode::Login />
        </AuthShell>
    }
}
