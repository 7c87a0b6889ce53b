//! Estimate Errors

use serde::Serialize;
use thiserror::Error;

/// Validation failures surfaced by the engine. The Display text is the
/// user-facing message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    #[error("Campos obrigatórios: {}", .fields.join(", "))]
    MissingField { fields: Vec<&'static str> },

    #[error("Distância deve ser maior que 0")]
    InvalidDistance { distance: f64 },

    #[error("Tipo de transporte inválido. Opções: {}", .valid.join(", "))]
    UnknownTransportKind { given: String, valid: Vec<String> },
}

/// Stable tag for each error variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    MissingField,
    InvalidDistance,
    UnknownTransportKind,
}

impl EstimateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField { .. } => ErrorKind::MissingField,
            Self::InvalidDistance { .. } => ErrorKind::InvalidDistance,
            Self::UnknownTransportKind { .. } => ErrorKind::UnknownTransportKind,
        }
    }
}

pub type EstimateResult<T> = std::result::Result<T, EstimateError>;
