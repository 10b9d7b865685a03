use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use web_sys::RequestCredentials;

/// Which cookies/credentials the type lookup sends along
///
/// The backend endpoint sits behind a login session, so the default is
/// `Include`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CredentialsMode {
    #[default]
    Include,
    SameOrigin,
    Omit,
}

impl CredentialsMode {
    pub fn to_request_credentials(self) -> RequestCredentials {
        match self {
            CredentialsMode::Include => RequestCredentials::Include,
            CredentialsMode::SameOrigin => RequestCredentials::SameOrigin,
            CredentialsMode::Omit => RequestCredentials::Omit,
        }
    }
}

/// What to do with a response whose selection has since been replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StaleResponsePolicy {
    /// Drop responses that resolve after a newer reconcile started
    #[default]
    Discard,
    /// Apply every response in arrival order, the last one to arrive wins
    LastArrivalWins,
}

/// Options of the unit-label synchronizer
///
/// Every field has a default, so `{}` and `undefined` are valid options on the
/// JS side.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UnitLabelConfig {
    /// Prefix for API URLs, empty means same-origin relative URLs
    pub api_base: String,
    pub credentials: CredentialsMode,
    pub stale_responses: StaleResponsePolicy,
}

impl UnitLabelConfig {
    /// Decode options passed from a page script
    pub fn from_js(options: JsValue) -> Result<Self, String> {
        if options.is_undefined() || options.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(options).map_err(|e| format!("Invalid options: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UnitLabelConfig::default();
        assert_eq!(config.api_base, "");
        assert_eq!(config.credentials, CredentialsMode::Include);
        assert_eq!(config.stale_responses, StaleResponsePolicy::Discard);
    }

    #[test]
    fn test_partial_options() {
        let config: UnitLabelConfig =
            serde_json::from_str(r#"{"staleResponses":"last-arrival-wins"}"#).unwrap();
        assert_eq!(config.stale_responses, StaleResponsePolicy::LastArrivalWins);
        assert_eq!(config.credentials, CredentialsMode::Include);

        let config: UnitLabelConfig = serde_json::from_str(
            r#"{"apiBase":"https://condo.example","credentials":"same-origin"}"#,
        )
        .unwrap();
        assert_eq!(config.api_base, "https://condo.example");
        assert_eq!(config.credentials, CredentialsMode::SameOrigin);
        assert_eq!(config.stale_responses, StaleResponsePolicy::Discard);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(serde_json::from_str::<UnitLabelConfig>(r#"{"credentials":"always"}"#).is_err());
    }

    #[test]
    fn test_request_credentials() {
        assert_eq!(
            CredentialsMode::Include.to_request_credentials(),
            RequestCredentials::Include
        );
        assert_eq!(
            CredentialsMode::SameOrigin.to_request_credentials(),
            RequestCredentials::SameOrigin
        );
        assert_eq!(
            CredentialsMode::Omit.to_request_credentials(),
            RequestCredentials::Omit
        );
    }
}
