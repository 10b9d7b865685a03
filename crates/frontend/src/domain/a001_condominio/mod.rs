//! Condominium selection on the resident/unit forms.

pub mod api;
pub mod config;
pub mod error;
pub mod ui;

pub use config::{CredentialsMode, StaleResponsePolicy, UnitLabelConfig};
pub use error::UnitTypeError;
