use crate::components::AuthShell;
use crate::features::auth::panel::{PanelMode, SessionPanel};
use leptos::prelude::*;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <AuthShell>
            <SessionPanel mode=PanelMode::Register />
        </AuthShell>
    }
}
