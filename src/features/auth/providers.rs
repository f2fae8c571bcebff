//! Identity providers supported by the sign-in portal. Each provider maps to a
//! backend exchange endpoint and carries its own user-facing failure copy.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    Google,
    Microsoft,
}

impl Provider {
    pub fn display_name(self) -> &'static str {
        match self {
            Provider::Google => "Google",
            Provider::Microsoft => "Microsoft",
        }
    }

    /// Backend path that trades this provider's assertion for a session token.
    pub fn exchange_path(self) -> &'static str {
        match self {
            Provider::Google => "/auth/google",
            Provider::Microsoft => "/auth/microsoft",
        }
    }

    /// Message shown when the provider itself reports failure or the user
    /// cancels before an assertion is issued.
    pub fn denied_message(self) -> &'static str {
        match self {
            Provider::Google => "Google login failed",
            Provider::Microsoft => "Microsoft login failed.",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::Provider;

    #[test]
    fn exchange_paths_match_backend_contract() {
        assert_eq!(Provider::Google.exchange_path(), "/auth/google");
        assert_eq!(Provider::Microsoft.exchange_path(), "/auth/microsoft");
    }

    #[test]
    fn display_uses_provider_name() {
        assert_eq!(Provider::Google.to_string(), "Google");
        assert_eq!(Provider::Microsoft.to_string(), "Microsoft");
    }
}
