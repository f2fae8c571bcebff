//! Exchange call against the backend. The assertion is forwarded verbatim as
//! `{"token": ...}`; the response is interpreted by the pure flow layer so the
//! contract stays testable off-browser.

use crate::app_lib::api;
use crate::features::auth::flow::{self, FlowError};
use crate::features::auth::providers::Provider;
use crate::features::auth::types::{ExchangeRequest, IdentityAssertion, SessionToken};

/// Trades an identity assertion for a session token at the provider's
/// exchange endpoint. Transport faults and rejections come back as
/// `FlowError`; nothing is persisted here.
pub async fn exchange(
    provider: Provider,
    assertion: &IdentityAssertion,
) -> Result<SessionToken, FlowError> {
    let request = ExchangeRequest {
        token: assertion.as_str().to_string(),
    };

    let response = api::post_json(provider.exchange_path(), &request)
        .await
        .map_err(FlowError::from)?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    flow::interpret_exchange(provider, status, &body)
}
