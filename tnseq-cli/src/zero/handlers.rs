use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::ArgMatches;
use fxhash::FxHashSet;

use tnseq_core::Coordinate;
use tnseq_zero::consts;
use tnseq_zero::{
    EmptyGenePolicy, Thresholds, WigFileGlob, read_gene_sites, read_site_list, write_zero_genes,
    zero_genes_from_wigs,
};

pub fn run_zero(matches: &ArgMatches) -> Result<()> {
    // get arguments from CLI
    let input = matches
        .get_one::<String>("input")
        .expect("A path to the input-library wig file is required.");

    let wigs = matches
        .get_one::<String>("wigs")
        .expect("A glob pattern for the sample wig files is required.");

    let genes = matches
        .get_one::<String>("genes")
        .expect("A path to the gene/TA-site table is required.");

    let default_out = consts::DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);

    let thresholds = Thresholds {
        per_sample: matches
            .get_one::<u32>("per-sample")
            .copied()
            .unwrap_or(consts::DEFAULT_PER_SAMPLE_THRESHOLD),
        cross_sample: matches
            .get_one::<u64>("cross-sample")
            .copied()
            .unwrap_or(consts::DEFAULT_CROSS_SAMPLE_THRESHOLD),
        empty_genes: if matches.get_flag("skip-empty-genes") {
            EmptyGenePolicy::Skip
        } else {
            EmptyGenePolicy::Pass
        },
    };

    // coerce arguments to types
    let input = PathBuf::from(input);
    let wigs = WigFileGlob::new(wigs)?;
    if wigs.is_empty() {
        anyhow::bail!("No wig files match the supplied pattern");
    }

    // the input library usually sits in the same directory as the samples;
    // don't let the glob add it as a second column
    let sample_paths: Vec<PathBuf> = wigs.filter(|path| path != &input).collect();
    let samples = name_samples(&sample_paths);

    let gene_map = read_gene_sites(Path::new(genes))?;

    let excluded = match matches.get_one::<String>("exclude") {
        Some(path) => {
            let sites: FxHashSet<Coordinate> =
                read_site_list(Path::new(path))?.into_iter().collect();
            Some(sites)
        }
        None => None,
    };

    let run = zero_genes_from_wigs(&input, &samples, &gene_map, excluded.as_ref(), &thresholds)?;

    if let Some(matrix_out) = matches.get_one::<String>("matrix") {
        run.matrix.write_to_file(matrix_out)?;
    }

    write_zero_genes(Path::new(output), &run.zero_genes)?;

    Ok(())
}

/// File stem without the trailing `.wig` that `file_stem` leaves behind on
/// `.wig.gz` paths.
fn sample_stem(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    match stem.strip_suffix(".wig") {
        Some(base) => base.to_string(),
        None => stem,
    }
}

fn shared_prefix_len(stems: &[String]) -> usize {
    let first = match stems.first() {
        Some(first) => first.as_str(),
        None => return 0,
    };

    let mut len = first.len();
    for stem in &stems[1..] {
        len = first
            .bytes()
            .zip(stem.bytes())
            .take(len)
            .take_while(|(a, b)| a == b)
            .count();
    }

    len
}

/// Pair each sample path with a display name: the file stem, with the
/// longest prefix shared by every stem stripped so only the distinguishing
/// part survives. Replaces the original pipeline's hardcoded
/// `perm_lung_tpp_` prefix strip. A stem that would strip to nothing keeps
/// its full name.
pub(crate) fn name_samples(paths: &[PathBuf]) -> Vec<(String, PathBuf)> {
    let stems: Vec<String> = paths.iter().map(|path| sample_stem(path)).collect();
    let prefix = if stems.len() > 1 {
        shared_prefix_len(&stems)
    } else {
        0
    };

    stems
        .into_iter()
        .zip(paths)
        .map(|(stem, path)| {
            let name = match stem.get(prefix..) {
                Some(rest) if !rest.is_empty() => rest.to_string(),
                _ => stem.clone(),
            };
            (name, path.clone())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_name_samples_strips_shared_prefix() {
        let paths = vec![
            PathBuf::from("wigs/perm_lung_tpp_MbA27.wig"),
            PathBuf::from("wigs/perm_lung_tpp_spleen4.wig.gz"),
        ];

        let names: Vec<String> = name_samples(&paths).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["MbA27", "spleen4"]);
    }

    #[test]
    fn test_name_samples_single_file_keeps_full_stem() {
        let paths = vec![PathBuf::from("wigs/perm_lung_tpp_MbA27.wig")];

        let names: Vec<String> = name_samples(&paths).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["perm_lung_tpp_MbA27"]);
    }

    #[test]
    fn test_name_samples_identical_stems_fall_back_to_full_stem() {
        let paths = vec![
            PathBuf::from("a/sample.wig"),
            PathBuf::from("b/sample.wig"),
        ];

        let names: Vec<String> = name_samples(&paths).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["sample", "sample"]);
    }
}
