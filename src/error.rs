//! Error types for Cadastro
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using CadastroError
pub type Result<T> = std::result::Result<T, CadastroError>;

/// Unified error type for Cadastro operations
#[derive(Debug, Error)]
pub enum CadastroError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Failed to read records from {path}: {reason}")]
    StorageRead { path: PathBuf, reason: String },

    #[error("Failed to write records to {path}: {reason}")]
    StorageWrite { path: PathBuf, reason: String },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Usuário com ID {0} não encontrado.")]
    NotFound(String),

    #[error("Nenhum usuário encontrado com os filtros especificados.")]
    EmptyResultSet,

    // -------------------------------------------------------------------------
    // Request Errors
    // -------------------------------------------------------------------------
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CadastroError {
    /// True for failures of the persistence layer (surface as 5xx)
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            CadastroError::Io(_)
                | CadastroError::StorageRead { .. }
                | CadastroError::StorageWrite { .. }
                | CadastroError::Serialization(_)
        )
    }
}
