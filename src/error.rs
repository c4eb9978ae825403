//! Error types and handling.

use thiserror::Error;

/// Errors raised by the in-memory store and receipt output.
#[derive(Error, Debug)]
pub enum AppError {
    /// File I/O error
    #[error("Erreur d'entrée/sortie: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Erreur de sérialisation: {0}")]
    Json(#[from] serde_json::Error),

    /// A field failed validation
    #[error("{0}")]
    Validation(String),

    /// Record not found
    #[error("Introuvable: {0}")]
    NotFound(String),

    /// Payment rejected (zero amount, overpayment)
    #[error("Paiement refusé: {0}")]
    Payment(String),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn payment(msg: impl Into<String>) -> Self {
        Self::Payment(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(AppError::validation("Le nom est requis").to_string(), "Le nom est requis");
        assert_eq!(
            AppError::payment("Le montant doit être supérieur à 0").to_string(),
            "Paiement refusé: Le montant doit être supérieur à 0"
        );
    }

    #[test]
    fn test_json_errors_convert() {
        fn parse() -> Result<serde_json::Value> {
            Ok(serde_json::from_str("{")?)
        }
        assert!(matches!(parse(), Err(AppError::Json(_))));
    }
}
