//! Microsoft MSAL interop.
//!
//! Unlike the Google path, this flow is imperative: build a
//! `PublicClientApplication`, run `initialize()`, open the interactive login
//! popup, and pull the ID token out of the resolved result. The msal-browser
//! bundle is loaded from its CDN by `index.html` and exposed as `window.msal`;
//! it is reached here through `js_sys` reflection and `JsFuture`.
//!
//! Every thrown JS error (SDK missing, popup closed, interaction already in
//! progress) is traced to the developer console and collapsed into a single
//! provider-denied outcome; nothing is rethrown and no exchange call is made.

use crate::features::auth::flow::FlowError;
use crate::features::auth::providers::Provider;
use crate::features::auth::types::IdentityAssertion;
use js_sys::{Array, Function, Object, Promise, Reflect};
use leptos::logging;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

const LOGIN_SCOPES: [&str; 3] = ["openid", "profile", "email"];

/// Opens the Microsoft login popup and returns the resulting identity
/// assertion. The assertion itself is never logged.
pub async fn acquire_assertion(client_id: &str) -> Result<IdentityAssertion, FlowError> {
    match login_popup(client_id).await {
        Ok(assertion) => Ok(assertion),
        Err(err) => {
            logging::error!("Microsoft login error: {err:?}");
            Err(FlowError::ProviderDenied(Provider::Microsoft))
        }
    }
}

async fn login_popup(client_id: &str) -> Result<IdentityAssertion, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let msal = Reflect::get(&window, &"msal".into())?;
    if msal.is_undefined() || msal.is_null() {
        return Err(JsValue::from_str("MSAL SDK is not loaded"));
    }

    let constructor = Reflect::get(&msal, &"PublicClientApplication".into())?
        .dyn_into::<Function>()
        .map_err(|_| JsValue::from_str("PublicClientApplication is not a constructor"))?;

    let auth = Object::new();
    Reflect::set(&auth, &"clientId".into(), &client_id.into())?;
    let config = Object::new();
    Reflect::set(&config, &"auth".into(), &auth)?;
    let instance = Reflect::construct(&constructor, &Array::of1(&config))?;

    // MSAL throws on any interactive call made before initialize() resolves.
    await_method(&instance, "initialize", None).await?;

    let request = Object::new();
    let scopes = Array::new();
    for scope in LOGIN_SCOPES {
        scopes.push(&scope.into());
    }
    Reflect::set(&request, &"scopes".into(), &scopes)?;

    let result = await_method(&instance, "loginPopup", Some(&request)).await?;

    let id_token = Reflect::get(&result, &"idToken".into())?
        .as_string()
        .filter(|token| !token.is_empty())
        .ok_or_else(|| JsValue::from_str("login response carried no idToken"))?;

    Ok(IdentityAssertion::new(id_token))
}

/// Calls a promise-returning method on `target` and awaits its resolution.
async fn await_method(
    target: &JsValue,
    name: &str,
    arg: Option<&Object>,
) -> Result<JsValue, JsValue> {
    let method = Reflect::get(target, &name.into())?
        .dyn_into::<Function>()
        .map_err(|_| JsValue::from_str("expected a function"))?;

    let value = match arg {
        Some(arg) => method.call1(target, arg)?,
        None => method.call0(target)?,
    };

    let promise: Promise = value
        .dyn_into()
        .map_err(|_| JsValue::from_str("expected a promise"))?;
    JsFuture::from(promise).await
}
