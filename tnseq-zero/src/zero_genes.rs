use std::path::{Path, PathBuf};

use anyhow::Result;
use fxhash::FxHashSet;
use indicatif::{ProgressBar, ProgressStyle};

use tnseq_core::{Coordinate, GeneSites};

use crate::classify::{Thresholds, classify};
use crate::consts::INPUT_COLUMN;
use crate::files::read_sample_table;
use crate::matrix::{InsertionMatrix, build_matrix};

/// Outcome of a zero-gene run: the aggregated matrix and the ids of the
/// genes classified as zero-insertion, in gene-map order.
pub struct ZeroGeneRun {
    pub matrix: InsertionMatrix,
    pub zero_genes: Vec<String>,
}

///
/// Full zero-gene pipeline over wig files: load the input library and every
/// named sample, optionally drop excluded (non-permissive) sites, build the
/// insertion matrix, and classify every gene in `gene_map`.
///
/// `samples` pairs each wig path with the display name its matrix column
/// should carry; name derivation is the caller's business.
///
pub fn zero_genes_from_wigs(
    input_wig: &Path,
    samples: &[(String, PathBuf)],
    gene_map: &[GeneSites],
    excluded: Option<&FxHashSet<Coordinate>>,
    thresholds: &Thresholds,
) -> Result<ZeroGeneRun> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed}] {msg}")
            .unwrap()
            .tick_strings(&["-", "\\", "|", "/"]),
    );

    spinner.set_message("Reading input library...");
    let mut input = read_sample_table(input_wig, INPUT_COLUMN)?;

    let mut others = Vec::with_capacity(samples.len());
    for (name, path) in samples {
        spinner.set_message(format!("Reading sample {}", name));
        others.push(read_sample_table(path, name)?);
        spinner.inc(1);
    }

    if let Some(excluded) = excluded {
        spinner.set_message(format!("Removing {} excluded sites", excluded.len()));
        input = input.without_sites(excluded);
        others = others
            .iter()
            .map(|sample| sample.without_sites(excluded))
            .collect();
    }

    spinner.set_message("Building insertion matrix...");
    let matrix = build_matrix(&input, &others)?;

    spinner.set_message(format!("Classifying {} genes...", gene_map.len()));
    let zero_genes = classify(&matrix, gene_map, thresholds)?;

    spinner.finish_with_message(format!(
        "{} of {} genes are zero-insertion",
        zero_genes.len(),
        gene_map.len()
    ));

    Ok(ZeroGeneRun { matrix, zero_genes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    struct TestFiles {
        _dir: tempfile::TempDir,
        input: PathBuf,
        samples: Vec<(String, PathBuf)>,
    }

    #[fixture]
    fn wig_files() -> TestFiles {
        let dir = tempfile::tempdir().unwrap();

        let input = dir.path().join("input.wig");
        std::fs::write(&input, "variableStep chrom=test\n100 2\n200 10\n300 0\n").unwrap();

        let lung1 = dir.path().join("lung1.wig");
        std::fs::write(&lung1, "variableStep chrom=test\n100 3\n300 1\n").unwrap();

        TestFiles {
            input,
            samples: vec![("lung1".to_string(), lung1)],
            _dir: dir,
        }
    }

    #[rstest]
    fn test_pipeline_end_to_end(wig_files: TestFiles) {
        let gene_map = vec![
            GeneSites::new("G1", vec![100]),
            GeneSites::new("G2", vec![200]),
            GeneSites::new("G3", vec![300]),
        ];

        let run = zero_genes_from_wigs(
            &wig_files.input,
            &wig_files.samples,
            &gene_map,
            None,
            &Thresholds::default(),
        )
        .unwrap();

        assert_eq!(run.matrix.num_sites(), 3);
        assert_eq!(run.matrix.sample_names(), &["reads", "lung1"]);
        // G2 fails: max_reads 10 > 5 in the input library
        assert_eq!(run.zero_genes, vec!["G1", "G3"]);
    }

    #[rstest]
    fn test_pipeline_with_excluded_sites(wig_files: TestFiles) {
        // excluding 200 shrinks the matrix domain, so G2 now errors out
        let gene_map = vec![GeneSites::new("G1", vec![100])];
        let excluded: FxHashSet<Coordinate> = [200].into_iter().collect();

        let run = zero_genes_from_wigs(
            &wig_files.input,
            &wig_files.samples,
            &gene_map,
            Some(&excluded),
            &Thresholds::default(),
        )
        .unwrap();

        assert_eq!(run.matrix.num_sites(), 2);
        assert!(!run.matrix.contains(200));
        assert_eq!(run.zero_genes, vec!["G1"]);
    }
}
