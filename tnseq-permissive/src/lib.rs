//! # Non-permissive TA-site detection.
//!
//! The Himar1 transposon inserts at TA dinucleotides, but sites whose local
//! sequence matches the non-permissive motif described by DeJesus et al.
//! (2017) are strongly biased against insertion. Scanning the reference
//! genome for that motif yields a list of 1-based TA positions that should
//! be excluded before zero-insertion classification, so that a gene is not
//! called "untouched" on the strength of sites the transposon could never
//! hit anyway.
pub mod fasta;
pub mod motif;

// re-exports
pub use fasta::*;
pub use motif::*;
