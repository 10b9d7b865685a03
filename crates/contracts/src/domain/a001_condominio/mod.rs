pub mod aggregate;

pub use aggregate::{ApiErrorResponse, CondominioId, CondominioTipo, CondominioTipoResponse};
