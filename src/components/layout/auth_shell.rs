//! Shared layout wrapper with a header and centered content container. It
//! centralizes chrome so routes can focus on content. Navigation remains
//! client-side; backend routes must enforce access control.

use crate::app_lib::build_info;
use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps routes with a header, a centered main container, and a build footer.
#[component]
pub fn AuthShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-white dark:bg-gray-900">
            <header class="border-b border-gray-200 dark:border-gray-700">
                <div class="max-w-screen-xl flex items-center justify-between mx-auto p-4">
                    <A
                        href="/"
                        {..}
                        class="font-semibold text-gray-900 whitespace-nowrap dark:text-white"
                    >
                        "Ingresso"
                    </A>
                </div>
            </header>
            <main class="flex-1 flex items-center justify-center px-4 py-8">
                <div class="w-full max-w-sm">{children()}</div>
            </main>
            <footer class="p-4 text-center text-xs text-gray-400 dark:text-gray-500">
                {format!("build {}", build_info::short_sha())}
            </footer>
        </div>
    }
}
