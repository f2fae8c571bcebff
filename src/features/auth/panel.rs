//! Shared session panel for the login and register pages. The two pages run
//! the same establishment flow end to end and differ only in display copy, so
//! the whole surface lives here, parameterized by mode.

use crate::app_lib::config::AppConfig;
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::flow::{FlowError, FlowPhase};
use crate::features::auth::providers::Provider;
use crate::features::auth::state::use_session;
use crate::features::auth::types::IdentityAssertion;
use crate::features::auth::{GoogleSignInButton, client, msal};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum PanelMode {
    Login,
    Register,
}

impl PanelMode {
    fn title(self) -> &'static str {
        match self {
            PanelMode::Login => "Login",
            PanelMode::Register => "Register",
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            PanelMode::Login => "Login",
            PanelMode::Register => "Register",
        }
    }

    fn busy_label(self) -> &'static str {
        match self {
            PanelMode::Login => "Logging in...",
            PanelMode::Register => "Registering...",
        }
    }
}

#[component]
pub fn SessionPanel(mode: PanelMode) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let (phase, set_phase) = signal(FlowPhase::Idle);
    let (error, set_error) = signal(None::<FlowError>);
    let (_username, set_username) = signal(String::new());
    let (_password, set_password) = signal(String::new());

    Effect::new(move |_| {
        set_phase.set(phase.get_untracked().ready());
    });

    // Control passes to navigation once the session is established.
    Effect::new(move |_| {
        if phase.get() == FlowPhase::Authenticated {
            navigate(paths::PROTECTED, Default::default());
        }
    });

    // Single completion path for both providers: guard re-entry, exchange,
    // persist; the phase effect above hands off to navigation.
    let complete = Callback::new(move |(provider, assertion): (Provider, IdentityAssertion)| {
        let Some(next) = phase.get_untracked().begin_exchange() else {
            return;
        };
        set_error.set(None);
        set_phase.set(next);

        spawn_local(async move {
            match client::exchange(provider, &assertion).await {
                Ok(token) => {
                    session.establish(token);
                    set_phase.set(FlowPhase::Authenticated);
                }
                Err(err) => {
                    set_phase.set(FlowPhase::Failed);
                    set_error.set(Some(err));
                }
            }
        });
    });

    let on_google_assertion =
        Callback::new(move |assertion: IdentityAssertion| complete.run((Provider::Google, assertion)));

    let on_google_denied = Callback::new(move |_: ()| {
        set_phase.set(FlowPhase::Failed);
        set_error.set(Some(FlowError::ProviderDenied(Provider::Google)));
    });

    let on_microsoft = Callback::new(move |_: ()| {
        if phase.get_untracked().is_busy() {
            return;
        }
        set_error.set(None);
        set_phase.set(phase.get_untracked().ready());

        spawn_local(async move {
            let client_id = match AppConfig::load().require_microsoft_client_id() {
                Ok(id) => id,
                Err(err) => {
                    set_phase.set(FlowPhase::Failed);
                    set_error.set(Some(FlowError::from(err)));
                    return;
                }
            };

            match msal::acquire_assertion(&client_id).await {
                Ok(assertion) => complete.run((Provider::Microsoft, assertion)),
                Err(err) => {
                    set_phase.set(FlowPhase::Failed);
                    set_error.set(Some(err));
                }
            }
        });
    });

    // First-party credentials have no backend contract yet; the fields are
    // collected but the form never submits anywhere.
    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
    };

    let busy = Signal::derive(move || phase.get().is_busy());

    view! {
        <div class="space-y-6">
            <h2 class="text-xl font-bold text-gray-900 dark:text-white">{mode.title()}</h2>
            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="username"
                    >
                        "Username:"
                    </label>
                    <input
                        id="username"
                        type="text"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        autocomplete="username"
                        on:input=move |event| set_username.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="password"
                    >
                        "Password:"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        autocomplete="current-password"
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=busy>
                    {move || if busy.get() { mode.busy_label() } else { mode.submit_label() }}
                </Button>
            </form>

            <div class="flex items-center gap-4">
                <div class="flex-1 h-px bg-gray-200 dark:bg-gray-700"></div>
                <span class="text-sm text-gray-500 dark:text-gray-400">"or"</span>
                <div class="flex-1 h-px bg-gray-200 dark:bg-gray-700"></div>
            </div>

            {move || {
                error
                    .get()
                    .map(|err| view! { <Alert kind=AlertKind::Error message=err.to_string() /> })
            }}

            <GoogleSignInButton on_assertion=on_google_assertion on_denied=on_google_denied />

            <Button disabled=busy on_click=on_microsoft>
                "Sign in with Microsoft"
            </Button>

            {move || busy.get().then_some(view! { <div class="flex justify-center"><Spinner /></div> })}

            {match mode {
                PanelMode::Login => {
                    view! {
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            "Don't have an account? "
                            <A href=paths::REGISTER {..} class="text-blue-600 hover:underline dark:text-blue-400">
                                "Register here"
                            </A>
                        </p>
                    }
                        .into_any()
                }
                PanelMode::Register => {
                    view! {
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            "Already have an account? "
                            <A href=paths::LOGIN {..} class="text-blue-600 hover:underline dark:text-blue-400">
                                "Sign in"
                            </A>
                        </p>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
