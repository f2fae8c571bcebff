//! Session establishment: trading an identity-provider assertion for an
//! application session token. It keeps authentication logic out of the UI and
//! must stay aligned with the backend exchange contract. This module touches a
//! security boundary and must avoid logging assertions or session tokens.
//!
//! Flow Overview: the Google path is callback-driven (the SDK renders its own
//! button and hands a credential to our callback); the Microsoft path is
//! imperative (initialize the MSAL client, open the login popup, await the ID
//! token). Both converge on the same exchange call, and the panel's flow phase
//! refuses a second exchange while one is in flight.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod flow;
#[cfg(target_arch = "wasm32")]
mod google;
#[cfg(target_arch = "wasm32")]
mod guards;
#[cfg(target_arch = "wasm32")]
pub(crate) mod msal;
#[cfg(target_arch = "wasm32")]
pub(crate) mod panel;
pub(crate) mod providers;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
#[cfg(target_arch = "wasm32")]
mod storage;
pub(crate) mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) use google::GoogleSignInButton;
#[cfg(target_arch = "wasm32")]
pub(crate) use guards::RequireSession;
