//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! ## Core Authentication Flow
//!
//! 1. **Acquire:** The user authenticates against an external identity provider
//!    (Google Identity Services or Microsoft MSAL), which yields an opaque
//!    identity assertion.
//! 2. **Exchange:** The assertion is POSTed verbatim to the backend
//!    (`/auth/google` or `/auth/microsoft`) and traded for an application
//!    session token.
//! 3. **Persist:** The session token is written to the browser storage slot and
//!    the router moves to the protected area.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. These utilities do not handle
//! secrets directly, but callers must still avoid logging token material.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

pub(crate) use errors::AppError;
