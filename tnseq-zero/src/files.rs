use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use glob::glob;

use tnseq_core::utils::get_dynamic_reader;
use tnseq_core::{Coordinate, GeneSites, SampleTable, TnSeqError};

/// Wig files matched by a glob pattern, in the order glob yields them.
pub struct WigFileGlob {
    curr: usize,
    files: Vec<PathBuf>,
}

impl WigFileGlob {
    pub fn new(pattern: &str) -> Result<Self> {
        let files = glob(pattern)?
            .map(|entry| match entry {
                Ok(path) => Ok(path),
                Err(err) => anyhow::bail!("Error reading file entry: {:?}", err),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(WigFileGlob { files, curr: 0 })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.files
    }
}

impl Iterator for WigFileGlob {
    type Item = PathBuf;
    fn next(&mut self) -> Option<Self::Item> {
        let result = self.files.get(self.curr).cloned();
        self.curr += 1;
        result
    }
}

///
/// Read one sample's insertion-site table from a wig file.
///
/// The body is a two-column position/count table, whitespace- or
/// comma-delimited. `#` comment lines are skipped, as is the single
/// declaration line (`variableStep chrom=...`) that precedes the data.
/// Plain and gzip'd files are both accepted.
///
/// `name` becomes the sample's display name; the core never derives it
/// from the path. Fails with [TnSeqError::MalformedTable] on non-numeric
/// fields, negative counts, or a zero coordinate.
///
pub fn read_sample_table(path: &Path, name: impl Into<String>) -> Result<SampleTable> {
    let name = name.into();
    let reader = get_dynamic_reader(path)?;

    let mut sites: Vec<(Coordinate, u32)> = Vec::new();
    let mut declaration_skipped = false;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if !declaration_skipped {
            declaration_skipped = true;
            continue;
        }

        let mut fields = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|f| !f.is_empty());
        let (coord_field, count_field) = match (fields.next(), fields.next()) {
            (Some(coord), Some(count)) => (coord, count),
            _ => {
                return Err(
                    TnSeqError::malformed(&name, format!("expected two columns, got '{}'", line))
                        .into(),
                );
            }
        };

        let coord: Coordinate = coord_field.parse().map_err(|_| {
            TnSeqError::malformed(&name, format!("non-numeric coordinate '{}'", coord_field))
        })?;
        if coord == 0 {
            return Err(TnSeqError::malformed(&name, "coordinate 0 in 1-based table").into());
        }

        let count: i64 = count_field.parse().map_err(|_| {
            TnSeqError::malformed(&name, format!("non-numeric count '{}'", count_field))
        })?;
        if count < 0 {
            return Err(TnSeqError::malformed(
                &name,
                format!("negative count {} at coordinate {}", count, coord),
            )
            .into());
        }
        let count = u32::try_from(count).map_err(|_| {
            TnSeqError::malformed(
                &name,
                format!("count {} at coordinate {} out of range", count, coord),
            )
        })?;

        sites.push((coord, count));
    }

    Ok(SampleTable::new(name, sites))
}

///
/// Read the gene/TA-site table: a TSV of gene id and comma-separated
/// 1-based coordinates, with a single header row. An absent or empty
/// coordinate column yields a gene with no sites; duplicate coordinates
/// within one gene are dropped on load.
///
pub fn read_gene_sites(path: &Path) -> Result<Vec<GeneSites>> {
    let source = path.display().to_string();
    let reader = get_dynamic_reader(path)?;

    let mut genes: Vec<GeneSites> = Vec::new();
    let mut header_skipped = false;

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        if !header_skipped {
            header_skipped = true;
            continue;
        }

        let mut fields = line.split('\t');
        let gene = match fields.next().map(str::trim) {
            Some(gene) if !gene.is_empty() => gene,
            _ => {
                return Err(
                    TnSeqError::malformed(&source, format!("missing gene id in '{}'", line)).into(),
                );
            }
        };

        let sites = match fields.next().map(str::trim) {
            None | Some("") => Vec::new(),
            Some(site_list) => site_list
                .split(',')
                .map(|field| {
                    field.trim().parse::<Coordinate>().map_err(|_| {
                        TnSeqError::malformed(
                            &source,
                            format!("gene '{}': non-numeric coordinate '{}'", gene, field),
                        )
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
        };

        genes.push(GeneSites::new(gene, sites));
    }

    Ok(genes)
}

/// Read a plain list of 1-based positions, one per line. Used for the
/// non-permissive site exclusion list.
pub fn read_site_list(path: &Path) -> Result<Vec<Coordinate>> {
    let source = path.display().to_string();
    let reader = get_dynamic_reader(path)?;

    let mut sites = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let coord: Coordinate = line.parse().map_err(|_| {
            TnSeqError::malformed(&source, format!("non-numeric position '{}'", line))
        })?;
        sites.push(coord);
    }

    Ok(sites)
}

/// Write zero-insertion gene ids, one per line.
pub fn write_zero_genes(path: &Path, genes: &[String]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for gene in genes {
        writeln!(writer, "{}", gene)?;
    }
    writer.flush()?;

    Ok(())
}
