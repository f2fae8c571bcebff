//! Core of the session establishment flow: the per-view phase machine and the
//! interpretation of backend exchange responses. Everything here is pure so the
//! exchange contract and the in-flight guard can be tested off-browser.

use crate::app_lib::AppError;
use crate::features::auth::providers::Provider;
use crate::features::auth::types::{ExchangeResponse, SessionToken};
use std::fmt;

/// Why the current sign-in attempt failed. Held only for display and cleared
/// at the start of the next attempt; every variant is recoverable by retry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowError {
    /// Mandatory configuration (client ID, API host) is missing.
    Config(String),
    /// The provider reported failure or the user cancelled before an
    /// assertion was issued. No exchange call is made in this case.
    ProviderDenied(Provider),
    /// The backend refused the assertion with a non-success status.
    ExchangeRejected { provider: Provider, status: u16 },
    /// Network, timeout, or malformed-response fault. The detail string is for
    /// `Debug` only; the user sees a generic message.
    Transport(String),
}

impl fmt::Display for FlowError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowError::Config(message) => formatter.write_str(message),
            FlowError::ProviderDenied(provider) => formatter.write_str(provider.denied_message()),
            FlowError::ExchangeRejected { provider, .. } => {
                write!(formatter, "{} authentication failed!", provider.display_name())
            }
            FlowError::Transport(_) => formatter.write_str("An error occurred. Please try again."),
        }
    }
}

impl std::error::Error for FlowError {}

impl From<AppError> for FlowError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Config(message) => FlowError::Config(message),
            other => FlowError::Transport(other.to_string()),
        }
    }
}

/// Where a view instance currently is in the sign-in handshake.
///
/// `Authenticated` is terminal for the view (control passes to navigation);
/// `Failed` returns to `AwaitingProvider` on the next attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowPhase {
    Idle,
    AwaitingProvider,
    Exchanging,
    Authenticated,
    Failed,
}

impl FlowPhase {
    /// True unless an exchange is already in flight or the view has finished.
    pub fn can_start_exchange(self) -> bool {
        !matches!(self, FlowPhase::Exchanging | FlowPhase::Authenticated)
    }

    /// True while an exchange call is outstanding; provider buttons are
    /// disabled in this phase.
    pub fn is_busy(self) -> bool {
        matches!(self, FlowPhase::Exchanging)
    }

    /// Returns the phase a fresh attempt starts from. A retry after `Failed`
    /// (or the initial mount from `Idle`) lands back in `AwaitingProvider`.
    pub fn ready(self) -> Self {
        match self {
            FlowPhase::Exchanging | FlowPhase::Authenticated => self,
            _ => FlowPhase::AwaitingProvider,
        }
    }

    /// Transition into `Exchanging`, or `None` when re-entry must be refused.
    pub fn begin_exchange(self) -> Option<Self> {
        self.can_start_exchange().then_some(FlowPhase::Exchanging)
    }
}

/// Interprets an exchange response: a success status yields the session token
/// carried in `access_token`, a non-success status is a rejection naming the
/// provider, and an unreadable success body is a transport fault.
pub fn interpret_exchange(
    provider: Provider,
    status: u16,
    body: &str,
) -> Result<SessionToken, FlowError> {
    if !(200..300).contains(&status) {
        return Err(FlowError::ExchangeRejected { provider, status });
    }

    let response: ExchangeResponse = serde_json::from_str(body).map_err(|err| {
        FlowError::Transport(format!("Failed to decode exchange response: {err}"))
    })?;

    Ok(SessionToken::new(response.access_token))
}

#[cfg(test)]
mod tests {
    use super::{FlowError, FlowPhase, interpret_exchange};
    use crate::app_lib::AppError;
    use crate::features::auth::providers::Provider;
    use crate::features::auth::types::SessionToken;

    #[test]
    fn successful_exchange_yields_the_backend_token() {
        let result = interpret_exchange(
            Provider::Google,
            200,
            r#"{"access_token":"sess-abc","token_type":"bearer"}"#,
        );

        assert_eq!(result, Ok(SessionToken::new("sess-abc")));
    }

    #[test]
    fn microsoft_exchange_shares_the_same_contract() {
        let result = interpret_exchange(
            Provider::Microsoft,
            200,
            r#"{"access_token":"sess-xyz","token_type":"bearer"}"#,
        );

        assert_eq!(result, Ok(SessionToken::new("sess-xyz")));
    }

    #[test]
    fn repeated_exchange_is_idempotent() {
        let body = r#"{"access_token":"sess-abc"}"#;

        let first = interpret_exchange(Provider::Google, 200, body);
        let second = interpret_exchange(Provider::Google, 200, body);

        assert_eq!(first, second);
        assert_eq!(first, Ok(SessionToken::new("sess-abc")));
    }

    #[test]
    fn rejected_exchange_names_the_provider() {
        let result = interpret_exchange(Provider::Google, 401, r#"{"detail":"Invalid token"}"#);

        let err = result.unwrap_err();
        assert_eq!(
            err,
            FlowError::ExchangeRejected {
                provider: Provider::Google,
                status: 401
            }
        );
        assert_eq!(err.to_string(), "Google authentication failed!");
    }

    #[test]
    fn rejection_wins_over_body_content() {
        // A 4xx carrying a token-shaped body must still not authenticate.
        let result = interpret_exchange(Provider::Microsoft, 403, r#"{"access_token":"x"}"#);

        assert_eq!(
            result.unwrap_err().to_string(),
            "Microsoft authentication failed!"
        );
    }

    #[test]
    fn malformed_success_body_is_a_transport_fault() {
        let result = interpret_exchange(Provider::Google, 200, "not json");

        assert!(matches!(result, Err(FlowError::Transport(_))));
        assert_eq!(
            result.unwrap_err().to_string(),
            "An error occurred. Please try again."
        );
    }

    #[test]
    fn success_body_without_access_token_is_a_transport_fault() {
        let result = interpret_exchange(Provider::Google, 200, r#"{"token_type":"bearer"}"#);

        assert!(matches!(result, Err(FlowError::Transport(_))));
    }

    #[test]
    fn provider_denial_uses_the_provider_copy() {
        assert_eq!(
            FlowError::ProviderDenied(Provider::Google).to_string(),
            "Google login failed"
        );
        assert_eq!(
            FlowError::ProviderDenied(Provider::Microsoft).to_string(),
            "Microsoft login failed."
        );
    }

    #[test]
    fn request_errors_map_onto_the_flow_taxonomy() {
        let config = FlowError::from(AppError::Config("Missing client ID.".to_string()));
        assert_eq!(config, FlowError::Config("Missing client ID.".to_string()));

        let network = FlowError::from(AppError::Network("connection refused".to_string()));
        assert!(matches!(network, FlowError::Transport(_)));

        let timeout = FlowError::from(AppError::Timeout("timed out".to_string()));
        assert_eq!(timeout.to_string(), "An error occurred. Please try again.");
    }

    #[test]
    fn exchange_guard_refuses_reentry_while_in_flight() {
        assert_eq!(
            FlowPhase::AwaitingProvider.begin_exchange(),
            Some(FlowPhase::Exchanging)
        );
        assert_eq!(FlowPhase::Failed.begin_exchange(), Some(FlowPhase::Exchanging));
        assert_eq!(FlowPhase::Exchanging.begin_exchange(), None);
        assert_eq!(FlowPhase::Authenticated.begin_exchange(), None);
    }

    #[test]
    fn retry_returns_to_awaiting_provider() {
        assert_eq!(FlowPhase::Idle.ready(), FlowPhase::AwaitingProvider);
        assert_eq!(FlowPhase::Failed.ready(), FlowPhase::AwaitingProvider);
        assert_eq!(
            FlowPhase::AwaitingProvider.ready(),
            FlowPhase::AwaitingProvider
        );
        // Terminal and in-flight phases are not reset by a stray retry.
        assert_eq!(FlowPhase::Exchanging.ready(), FlowPhase::Exchanging);
        assert_eq!(FlowPhase::Authenticated.ready(), FlowPhase::Authenticated);
    }

    #[test]
    fn busy_phase_is_exactly_exchanging() {
        assert!(FlowPhase::Exchanging.is_busy());
        assert!(!FlowPhase::Idle.is_busy());
        assert!(!FlowPhase::AwaitingProvider.is_busy());
        assert!(!FlowPhase::Authenticated.is_busy());
        assert!(!FlowPhase::Failed.is_busy());
    }
}
