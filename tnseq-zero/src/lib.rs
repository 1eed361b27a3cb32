//! # Zero-insertion gene classification for Tn-seq experiments.
//!
//! Builds a position-indexed matrix of transposon insertion read counts
//! across an arbitrary number of sample wig files, then classifies each
//! gene as "zero-insertion" when every one of its TA sites stays below a
//! per-sample threshold and a cross-sample threshold. Zero-insertion genes
//! are candidates for essentiality and are typically excluded from
//! downstream conditional-essentiality analysis.
pub mod classify;
pub mod consts;
pub mod files;
pub mod matrix;
pub mod zero_genes;

// re-exports
pub use classify::*;
pub use files::*;
pub use matrix::*;
pub use zero_genes::*;
