//! Request and response types for the token exchange. These payloads carry
//! bearer credentials, so they must never be logged; the token newtypes redact
//! their `Debug` output for the same reason.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque credential issued by an identity provider. Forwarded verbatim to the
/// backend, never inspected or parsed client-side.
#[derive(Clone, PartialEq, Eq)]
pub struct IdentityAssertion(String);

impl IdentityAssertion {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for IdentityAssertion {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("IdentityAssertion(..)")
    }
}

/// Opaque backend-issued credential representing an authenticated session.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("SessionToken(..)")
    }
}

/// Body of the exchange POST: the assertion is the only credential sent.
#[derive(Clone, Debug, Serialize)]
pub struct ExchangeRequest {
    pub token: String,
}

/// Successful exchange response. Extra fields (e.g. `token_type`) are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct ExchangeResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::{IdentityAssertion, SessionToken};

    #[test]
    fn debug_output_redacts_token_material() {
        let assertion = IdentityAssertion::new("g-tok-1");
        let token = SessionToken::new("sess-abc");

        assert_eq!(format!("{assertion:?}"), "IdentityAssertion(..)");
        assert_eq!(format!("{token:?}"), "SessionToken(..)");
    }
}
