mod login;
mod not_found;
mod protected;
mod register;

pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use protected::ProtectedPage;
pub(crate) use register::RegisterPage;

/// Route paths shared by navigation and guards.
pub(crate) mod paths {
    pub const LOGIN: &str = "/";
    pub const REGISTER: &str = "/register";
    pub const PROTECTED: &str = "/protected";
}

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=LoginPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/protected") view=ProtectedPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
