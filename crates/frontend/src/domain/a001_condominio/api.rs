use async_trait::async_trait;
use contracts::domain::a001_condominio::{
    ApiErrorResponse, CondominioId, CondominioTipo, CondominioTipoResponse,
};
use gloo_net::http::Request;

use super::config::{CredentialsMode, UnitLabelConfig};
use super::error::UnitTypeError;
use super::ui::unit_field::UnitTypeSource;
use crate::shared::api_utils::{api_url, is_success, path_segment};

const API_BASE: &str = "/api/condominio_tipo";

/// URL of the housing-type lookup for one condominium
pub fn condominio_tipo_url(base: &str, id: &CondominioId) -> String {
    api_url(base, &format!("{}/{}", API_BASE, path_segment(id.as_str())))
}

/// Classify a finished HTTP exchange
///
/// Non-2xx answers are failures even when they carry a JSON body; the
/// backend's `{"error": ...}` text is kept for the log.
pub fn interpret_response(status: u16, body: &str) -> Result<CondominioTipo, UnitTypeError> {
    if !is_success(status) {
        let message = serde_json::from_str::<ApiErrorResponse>(body)
            .ok()
            .map(|e| e.error);
        return Err(UnitTypeError::Status { status, message });
    }

    serde_json::from_str::<CondominioTipoResponse>(body)
        .map(|data| data.tipo)
        .map_err(|e| UnitTypeError::Payload(e.to_string()))
}

/// Fetch the housing type (casas / predio) of a condominium
pub async fn fetch_condominio_tipo(
    base: &str,
    credentials: CredentialsMode,
    id: &CondominioId,
) -> Result<CondominioTipo, UnitTypeError> {
    let url = condominio_tipo_url(base, id);

    let response = Request::get(&url)
        .credentials(credentials.to_request_credentials())
        .send()
        .await
        .map_err(|e| UnitTypeError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| UnitTypeError::Transport(format!("Failed to read body: {}", e)))?;

    interpret_response(status, &body)
}

/// Production source: asks the backend over HTTP
#[derive(Debug, Clone)]
pub struct HttpUnitTypeSource {
    base: String,
    credentials: CredentialsMode,
}

impl HttpUnitTypeSource {
    pub fn new(config: &UnitLabelConfig) -> Self {
        Self {
            base: config.api_base.clone(),
            credentials: config.credentials,
        }
    }
}

#[async_trait(?Send)]
impl UnitTypeSource for HttpUnitTypeSource {
    async fn fetch_tipo(&self, id: &CondominioId) -> Result<CondominioTipo, UnitTypeError> {
        fetch_condominio_tipo(&self.base, self.credentials, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> CondominioId {
        CondominioId::from_selector(value).unwrap()
    }

    #[test]
    fn test_url() {
        assert_eq!(condominio_tipo_url("", &id("42")), "/api/condominio_tipo/42");
        assert_eq!(
            condominio_tipo_url("https://condo.example/", &id("42")),
            "https://condo.example/api/condominio_tipo/42"
        );
        assert_eq!(
            condominio_tipo_url("", &id("../admin")),
            "/api/condominio_tipo/..%2Fadmin"
        );
    }

    #[test]
    fn test_success_bodies() {
        assert_eq!(
            interpret_response(200, r#"{"tipo":"casas"}"#),
            Ok(CondominioTipo::Casas)
        );
        assert_eq!(
            interpret_response(200, r#"{"tipo":"predio"}"#),
            Ok(CondominioTipo::Predio)
        );
        assert_eq!(
            interpret_response(200, r#"{"tipo":"chacaras","nome":"X"}"#),
            Ok(CondominioTipo::Other("chacaras".to_string()))
        );
    }

    #[test]
    fn test_error_status() {
        assert_eq!(
            interpret_response(404, r#"{"error":"Condomínio não encontrado"}"#),
            Err(UnitTypeError::Status {
                status: 404,
                message: Some("Condomínio não encontrado".to_string()),
            })
        );
        // login redirect pages are HTML, not JSON
        assert_eq!(
            interpret_response(401, "<html></html>"),
            Err(UnitTypeError::Status {
                status: 401,
                message: None,
            })
        );
        // a 500 that happens to carry a valid body is still a failure
        assert!(matches!(
            interpret_response(500, r#"{"tipo":"casas"}"#),
            Err(UnitTypeError::Status { status: 500, .. })
        ));
    }

    #[test]
    fn test_malformed_payload() {
        for body in ["", "null", "{}", r#"{"tipo":null}"#, r#"{"tipo":["casas"]}"#, "casas"] {
            assert!(
                matches!(interpret_response(200, body), Err(UnitTypeError::Payload(_))),
                "body {:?} should be rejected",
                body
            );
        }
    }
}
