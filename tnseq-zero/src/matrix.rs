use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Result;
use flate2::Compression;
use flate2::write::GzEncoder;
use fxhash::{FxHashMap, FxHashSet};

use tnseq_core::{Coordinate, SampleTable, TnSeqError};

use crate::consts::INPUT_COLUMN;

///
/// Read counts for every insertion site across every sample, keyed by
/// genomic coordinate. The coordinate domain is fixed by the input library:
/// rows follow its site order, and later samples are aligned to it, never
/// unioned. Immutable once built.
///
/// Counts are stored row-major in a flat vector, one row per coordinate and
/// one column per sample, with the input library in column 0.
///
pub struct InsertionMatrix {
    samples: Vec<String>,
    coords: Vec<Coordinate>,
    index: FxHashMap<Coordinate, usize>,
    data: Vec<u32>,
}

impl InsertionMatrix {
    pub fn num_sites(&self) -> usize {
        self.coords.len()
    }

    pub fn num_samples(&self) -> usize {
        self.samples.len()
    }

    pub fn sample_names(&self) -> &[String] {
        &self.samples
    }

    /// Coordinates in input-library order.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coords
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.index.contains_key(&coord)
    }

    /// Per-sample counts at `coord`, in column order, or `None` when the
    /// coordinate is outside the matrix domain.
    pub fn row(&self, coord: Coordinate) -> Option<&[u32]> {
        let row = *self.index.get(&coord)?;
        let cols = self.samples.len();
        Some(&self.data[row * cols..(row + 1) * cols])
    }

    /// Write the matrix as CSV, gzip-compressed when the path ends in `.gz`.
    /// One row per coordinate, in input-library order.
    pub fn write_to_file(&self, path: &str) -> Result<()> {
        let file = File::create(path)?;
        let mut writer: Box<dyn Write> = if Path::new(path).extension().is_some_and(|e| e == "gz")
        {
            Box::new(BufWriter::new(GzEncoder::new(file, Compression::default())))
        } else {
            Box::new(BufWriter::new(file))
        };

        writeln!(writer, "coordinate,{}", self.samples.join(","))?;
        for (row, coord) in self.coords.iter().enumerate() {
            let cols = self.samples.len();
            let counts = &self.data[row * cols..(row + 1) * cols];
            let counts = counts
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(",");
            writeln!(writer, "{},{}", coord, counts)?;
        }
        writer.flush()?;

        Ok(())
    }
}

///
/// Merge the input library with zero or more other sample tables into an
/// [InsertionMatrix].
///
/// The coordinate domain equals the input library's site set exactly: extra
/// coordinates in other samples are ignored, and a coordinate absent from
/// an other sample is recorded as count 0 for that sample's column. The
/// input library's column is named `"reads"`; other columns keep the
/// caller-supplied sample names.
///
/// # Errors
///
/// - [TnSeqError::EmptyInput] when the input library has no sites
/// - [TnSeqError::MalformedTable] on a duplicate coordinate within one
///   sample, or on a duplicate/reserved sample name
///
pub fn build_matrix(
    input: &SampleTable,
    others: &[SampleTable],
) -> Result<InsertionMatrix, TnSeqError> {
    if input.is_empty() {
        return Err(TnSeqError::EmptyInput(format!(
            "input library '{}' has no insertion sites",
            input.name
        )));
    }

    let mut samples = Vec::with_capacity(others.len() + 1);
    samples.push(INPUT_COLUMN.to_string());
    for other in others {
        if samples.iter().any(|name| name == &other.name) {
            return Err(TnSeqError::malformed(
                &other.name,
                "duplicate sample name in matrix",
            ));
        }
        samples.push(other.name.clone());
    }

    let cols = samples.len();
    let mut coords = Vec::with_capacity(input.len());
    let mut index: FxHashMap<Coordinate, usize> = FxHashMap::default();
    let mut data = vec![0u32; input.len() * cols];

    for (row, &(coord, count)) in input.sites.iter().enumerate() {
        if index.insert(coord, row).is_some() {
            return Err(TnSeqError::malformed(
                &input.name,
                format!("duplicate coordinate {}", coord),
            ));
        }
        coords.push(coord);
        data[row * cols] = count;
    }

    for (col, other) in others.iter().enumerate() {
        let mut seen: FxHashSet<Coordinate> = FxHashSet::default();
        for &(coord, count) in &other.sites {
            if !seen.insert(coord) {
                return Err(TnSeqError::malformed(
                    &other.name,
                    format!("duplicate coordinate {}", coord),
                ));
            }
            // Sites outside the input library's domain are dropped.
            if let Some(&row) = index.get(&coord) {
                data[row * cols + col + 1] = count;
            }
        }
    }

    Ok(InsertionMatrix {
        samples,
        coords,
        index,
        data,
    })
}
