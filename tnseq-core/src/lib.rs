//! Core library for tnseq-rs.
//!
//! Shared models and errors for working with transposon insertion-site data:
//! per-sample coordinate/count tables, gene to insertion-site mappings, and
//! the error kinds raised by the matrix builder and classifier.
pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use errors::*;
pub use models::*;
