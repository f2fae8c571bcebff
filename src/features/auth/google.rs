//! Google Identity Services interop.
//!
//! The GIS flow is inverted control: the SDK renders its own sign-in button
//! and invokes a credential callback when the user completes consent. This
//! component only supplies the mount point and the two callbacks. The SDK is
//! loaded from its CDN by `index.html` and reached here through `js_sys`
//! reflection (`window.google.accounts.id`).

use crate::app_lib::{AppError, config::AppConfig};
use crate::components::{Alert, AlertKind};
use crate::features::auth::types::IdentityAssertion;
use js_sys::{Function, Object, Reflect};
use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Renders the GIS sign-in button into a managed mount point. A missing SDK
/// or client ID surfaces as an inline config error instead of a dead button.
#[component]
pub fn GoogleSignInButton(
    on_assertion: Callback<IdentityAssertion>,
    on_denied: Callback<()>,
) -> impl IntoView {
    let node_ref = NodeRef::<leptos::html::Div>::new();
    let mounted = RwSignal::new(false);
    let (setup_error, set_setup_error) = signal(None::<AppError>);

    Effect::new(move |_| {
        let Some(target) = node_ref.get() else {
            return;
        };
        if mounted.get_untracked() {
            return;
        }
        mounted.set(true);

        if let Err(err) = mount_button(&target, on_assertion, on_denied) {
            set_setup_error.set(Some(err));
        }
    });

    view! {
        <div>
            <div class="flex justify-center" node_ref=node_ref></div>
            {move || {
                setup_error
                    .get()
                    .map(|err| view! { <Alert kind=AlertKind::Error message=err.to_string() /> })
            }}
        </div>
    }
}

/// Initializes GIS with the configured client ID and renders its button into
/// `target`. The credential callback is handed over to the SDK, which owns it
/// from then on.
fn mount_button(
    target: &web_sys::HtmlDivElement,
    on_assertion: Callback<IdentityAssertion>,
    on_denied: Callback<()>,
) -> Result<(), AppError> {
    let config = AppConfig::load();
    let client_id = config.require_google_client_id()?;

    let window =
        web_sys::window().ok_or_else(|| AppError::Config("Window not found".to_string()))?;
    let api = identity_api(&window)?;

    let callback = Closure::wrap(Box::new(move |response: JsValue| {
        let credential = Reflect::get(&response, &"credential".into())
            .ok()
            .and_then(|value| value.as_string())
            .filter(|value| !value.is_empty());

        match credential {
            Some(token) => on_assertion.run(IdentityAssertion::new(token)),
            None => on_denied.run(()),
        }
    }) as Box<dyn FnMut(JsValue)>)
    .into_js_value();

    let options = Object::new();
    set_property(&options, "client_id", &client_id.as_str().into())?;
    set_property(&options, "callback", &callback)?;
    call_api(&api, "initialize", &[&options])?;

    let render_options = Object::new();
    set_property(&render_options, "theme", &"outline".into())?;
    set_property(&render_options, "size", &"large".into())?;
    call_api(&api, "renderButton", &[target.as_ref(), &render_options])?;

    Ok(())
}

/// Resolves `window.google.accounts.id`, the GIS entry point.
fn identity_api(window: &web_sys::Window) -> Result<JsValue, AppError> {
    let google = Reflect::get(window, &"google".into())
        .ok()
        .filter(|value| !value.is_undefined())
        .ok_or_else(|| {
            AppError::Config("Google Identity Services SDK is not loaded.".to_string())
        })?;
    let accounts = Reflect::get(&google, &"accounts".into())
        .map_err(|_| AppError::Config("Google Identity Services SDK is not loaded.".to_string()))?;
    Reflect::get(&accounts, &"id".into())
        .map_err(|_| AppError::Config("Google Identity Services SDK is not loaded.".to_string()))
}

fn set_property(object: &Object, key: &str, value: &JsValue) -> Result<(), AppError> {
    Reflect::set(object, &key.into(), value)
        .map(|_| ())
        .map_err(|_| AppError::Config("Failed to configure Google sign-in.".to_string()))
}

fn call_api(api: &JsValue, name: &str, args: &[&JsValue]) -> Result<JsValue, AppError> {
    let function = Reflect::get(api, &name.into())
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or_else(|| {
            AppError::Config("Google Identity Services SDK is not loaded.".to_string())
        })?;

    let result = match args {
        [first] => function.call1(api, first),
        [first, second] => function.call2(api, first, second),
        _ => function.call0(api),
    };

    result.map_err(|_| AppError::Config("Failed to configure Google sign-in.".to_string()))
}
