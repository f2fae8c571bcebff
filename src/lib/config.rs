//! Build-time configuration for the API endpoint and identity-provider client
//! IDs, with an optional runtime override. The runtime config is read from
//! `window.INGRESSO_CONFIG` (if present) so static deployments can change
//! endpoints without rebuilding. Configuration values are public; do not store
//! secrets here.

use super::errors::AppError;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub google_client_id: String,
    pub microsoft_client_id: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("INGRESSO_API_BASE_URL").unwrap_or("");
        let google_client_id = option_env!("INGRESSO_GOOGLE_CLIENT_ID").unwrap_or("");
        let microsoft_client_id = option_env!("INGRESSO_MICROSOFT_CLIENT_ID").unwrap_or("");

        let mut config = Self {
            api_base_url: api_base_url.to_string(),
            google_client_id: google_client_id.to_string(),
            microsoft_client_id: microsoft_client_id.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Returns the Google OAuth client ID or a config error when it is absent.
    /// An empty client ID would render a dead sign-in button, so it is treated
    /// as a recognized misconfiguration rather than passed through.
    pub fn require_google_client_id(&self) -> Result<String, AppError> {
        require_value(&self.google_client_id, "Google OAuth client ID")
    }

    /// Returns the Microsoft application ID or a config error when it is absent.
    pub fn require_microsoft_client_id(&self) -> Result<String, AppError> {
        require_value(&self.microsoft_client_id, "Microsoft application ID")
    }
}

fn require_value(value: &str, label: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(AppError::Config(format!("{label} is not configured.")))
    } else {
        Ok(trimmed.to_string())
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    google_client_id: Option<String>,
    microsoft_client_id: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.google_client_id {
        config.google_client_id = value;
    }
    if let Some(value) = runtime.microsoft_client_id {
        config.microsoft_client_id = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("INGRESSO_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        google_client_id: read_runtime_value(&object, "google_client_id"),
        microsoft_client_id: read_runtime_value(&object, "microsoft_client_id"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_runtime_value};
    use crate::app_lib::AppError;

    fn config_with(google: &str, microsoft: &str) -> AppConfig {
        AppConfig {
            api_base_url: "https://api.ingresso.dev".to_string(),
            google_client_id: google.to_string(),
            microsoft_client_id: microsoft.to_string(),
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.ingresso.dev "),
            Some("https://api.ingresso.dev".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = config_with("default-google", "default-microsoft");
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            google_client_id: normalize_runtime_value("  "),
            microsoft_client_id: normalize_runtime_value(""),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.ingresso.dev");
        assert_eq!(config.google_client_id, "default-google");
        assert_eq!(config.microsoft_client_id, "default-microsoft");
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = config_with("default-google", "default-microsoft");
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            google_client_id: normalize_runtime_value("override-google"),
            microsoft_client_id: normalize_runtime_value("override-microsoft"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.google_client_id, "override-google");
        assert_eq!(config.microsoft_client_id, "override-microsoft");
    }

    #[test]
    fn require_client_ids_reject_missing_values() {
        let config = config_with("", "   ");

        assert_eq!(
            config.require_google_client_id(),
            Err(AppError::Config(
                "Google OAuth client ID is not configured.".to_string()
            ))
        );
        assert_eq!(
            config.require_microsoft_client_id(),
            Err(AppError::Config(
                "Microsoft application ID is not configured.".to_string()
            ))
        );
    }

    #[test]
    fn require_client_ids_trim_configured_values() {
        let config = config_with(" google-id ", " ms-id ");

        assert_eq!(config.require_google_client_id(), Ok("google-id".to_string()));
        assert_eq!(config.require_microsoft_client_id(), Ok("ms-id".to_string()));
    }
}
