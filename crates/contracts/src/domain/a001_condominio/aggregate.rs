use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Selector value meaning "no condominium chosen"
pub const NO_CONDOMINIO_SENTINEL: &str = "-1";

/// Identifier of a condominium as it appears in the selector of the form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CondominioId(String);

impl CondominioId {
    /// Interpret a raw selector value.
    ///
    /// Returns `None` for the empty value and for the `"-1"` sentinel, both of
    /// which mean that no real condominium is selected.
    pub fn from_selector(value: &str) -> Option<Self> {
        if value.is_empty() || value == NO_CONDOMINIO_SENTINEL {
            None
        } else {
            Some(Self(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CondominioId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Unit type
// ============================================================================

/// Housing type of a condominium, as classified by the backend
///
/// Unknown codes are kept verbatim in `Other` instead of failing, the frontend
/// treats everything that is not `Casas` as a building.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CondominioTipo {
    /// House-based condominium ("casas")
    Casas,
    /// Building / apartment-based condominium ("predio")
    Predio,
    Other(String),
}

impl CondominioTipo {
    pub fn code(&self) -> &str {
        match self {
            CondominioTipo::Casas => "casas",
            CondominioTipo::Predio => "predio",
            CondominioTipo::Other(code) => code,
        }
    }

    pub fn from_code(code: &str) -> Self {
        Self::from(code.to_string())
    }

    pub fn is_houses(&self) -> bool {
        matches!(self, CondominioTipo::Casas)
    }
}

impl From<String> for CondominioTipo {
    fn from(code: String) -> Self {
        match code.as_str() {
            "casas" => CondominioTipo::Casas,
            "predio" => CondominioTipo::Predio,
            _ => CondominioTipo::Other(code),
        }
    }
}

impl From<CondominioTipo> for String {
    fn from(tipo: CondominioTipo) -> Self {
        match tipo {
            CondominioTipo::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Body of `GET /api/condominio_tipo/{id}` on success
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CondominioTipoResponse {
    pub tipo: CondominioTipo,
}

/// Error body the backend sends with non-2xx answers, e.g. 404 for an unknown id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_sentinels() {
        assert_eq!(CondominioId::from_selector(""), None);
        assert_eq!(CondominioId::from_selector("-1"), None);
        assert_eq!(
            CondominioId::from_selector("42").map(|id| id.to_string()),
            Some("42".to_string())
        );
    }

    #[test]
    fn test_tipo_codes() {
        assert_eq!(CondominioTipo::from_code("casas"), CondominioTipo::Casas);
        assert_eq!(CondominioTipo::from_code("predio"), CondominioTipo::Predio);
        assert_eq!(
            CondominioTipo::from_code("casa"),
            CondominioTipo::Other("casa".to_string())
        );
        assert!(CondominioTipo::Casas.is_houses());
        assert!(!CondominioTipo::Other("Casas".into()).is_houses());
    }

    #[test]
    fn test_response_json() {
        let parsed: CondominioTipoResponse =
            serde_json::from_str(r#"{"tipo":"casas"}"#).unwrap();
        assert_eq!(parsed.tipo, CondominioTipo::Casas);

        let parsed: CondominioTipoResponse =
            serde_json::from_str(r#"{"tipo":"apartamento"}"#).unwrap();
        assert_eq!(parsed.tipo.code(), "apartamento");

        let json = serde_json::to_string(&CondominioTipoResponse {
            tipo: CondominioTipo::Predio,
        })
        .unwrap();
        assert_eq!(json, r#"{"tipo":"predio"}"#);
    }

    #[test]
    fn test_malformed_response_json() {
        assert!(serde_json::from_str::<CondominioTipoResponse>(r#"{}"#).is_err());
        assert!(serde_json::from_str::<CondominioTipoResponse>(r#"{"tipo":5}"#).is_err());
        assert!(serde_json::from_str::<CondominioTipoResponse>("not json").is_err());
    }

    #[test]
    fn test_error_body() {
        let parsed: ApiErrorResponse =
            serde_json::from_str(r#"{"error":"Condomínio não encontrado"}"#).unwrap();
        assert_eq!(parsed.error, "Condomínio não encontrado");
    }
}
