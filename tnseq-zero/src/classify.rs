use rayon::prelude::*;

use tnseq_core::{GeneSites, TnSeqError};

use crate::consts::{DEFAULT_CROSS_SAMPLE_THRESHOLD, DEFAULT_PER_SAMPLE_THRESHOLD};
use crate::matrix::InsertionMatrix;

/// What to do with a gene that has no known insertion sites.
///
/// The upstream gene/TA-site tables occasionally carry genes with an empty
/// coordinate list. Treating those as zero-insertion is vacuously true and
/// matches historical behavior, but callers may prefer to leave them out of
/// the result entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyGenePolicy {
    #[default]
    Pass,
    Skip,
}

///
/// Threshold policy for the zero-insertion predicate.
///
/// A site fails when its summed count across all samples exceeds
/// `cross_sample`, or any single sample's count exceeds `per_sample`.
/// Both comparisons are strictly greater-than: a site sitting exactly at
/// a threshold passes.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub per_sample: u32,
    pub cross_sample: u64,
    pub empty_genes: EmptyGenePolicy,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            per_sample: DEFAULT_PER_SAMPLE_THRESHOLD,
            cross_sample: DEFAULT_CROSS_SAMPLE_THRESHOLD,
            empty_genes: EmptyGenePolicy::default(),
        }
    }
}

///
/// Classify every gene in `gene_map` against the insertion matrix,
/// returning the ids of the genes whose every site passed both thresholds.
///
/// Genes are independent, so classification runs across a rayon pool; the
/// result keeps `gene_map` order and contains no duplicates. A coordinate
/// missing from the matrix domain means the gene map and matrix were built
/// from different references and fails the whole run, never silently skips.
///
/// # Errors
///
/// - [TnSeqError::EmptyInput] when `gene_map` is empty
/// - [TnSeqError::CoordinateNotFound] naming the gene and coordinate on a
///   gene-map/matrix domain mismatch
///
pub fn classify(
    matrix: &InsertionMatrix,
    gene_map: &[GeneSites],
    thresholds: &Thresholds,
) -> Result<Vec<String>, TnSeqError> {
    if gene_map.is_empty() {
        return Err(TnSeqError::EmptyInput(
            "gene map contains no genes".to_string(),
        ));
    }

    let zero_flags = gene_map
        .par_iter()
        .map(|gene| {
            let is_zero = gene_is_zero(matrix, gene, thresholds)?;
            Ok(is_zero.then(|| gene.gene.clone()))
        })
        .collect::<Result<Vec<_>, TnSeqError>>()?;

    Ok(zero_flags.into_iter().flatten().collect())
}

/// True when every site of `gene` stays at or below both thresholds.
/// Short-circuits on the first violating site.
fn gene_is_zero(
    matrix: &InsertionMatrix,
    gene: &GeneSites,
    thresholds: &Thresholds,
) -> Result<bool, TnSeqError> {
    if gene.is_empty() {
        return Ok(thresholds.empty_genes == EmptyGenePolicy::Pass);
    }

    for &coord in &gene.sites {
        let counts = matrix
            .row(coord)
            .ok_or_else(|| TnSeqError::CoordinateNotFound {
                gene: gene.gene.clone(),
                coordinate: coord,
            })?;

        let site_sum: u64 = counts.iter().map(|&c| u64::from(c)).sum();
        let max_reads = counts.iter().copied().max().unwrap_or(0);

        if site_sum > thresholds.cross_sample || max_reads > thresholds.per_sample {
            return Ok(false);
        }
    }

    Ok(true)
}
