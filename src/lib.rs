//! # Cadastro
//!
//! A small record-management HTTP service:
//! - CRUD over "cadastro" records under `/cadastros`
//! - Filtering by id, name and level
//! - Whole-collection persistence in one pretty-printed JSON file
//! - Generated OpenAPI document at `/api-docs`
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HTTP Server                             │
//! │          (axum router, static files, API docs)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Registry                                │
//! │            (serialized read-modify-write)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Filter    │          │ RecordStore │
//!   │  (id/name/  │          │ (JSON file) │
//!   │   level)    │          └─────────────┘
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod filter;
pub mod storage;
pub mod registry;
pub mod http;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CadastroError, Result};
pub use config::{Config, IdStrategy};
pub use filter::Filter;
pub use record::{Fields, Record};
pub use registry::Registry;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Cadastro
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
