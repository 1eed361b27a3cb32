use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use noodles_fasta as fasta;

use tnseq_core::Coordinate;

pub fn parse_fasta_file(path: &Path) -> Result<fasta::Reader<BufReader<File>>> {
    File::open(path)
        .map(BufReader::new)
        .map(fasta::Reader::new)
        .map_err(|e| anyhow!("Error opening reference genome {:?}: {}", path, e))
}

///
/// Read the reference genome sequence from a FASTA file as upper-case bytes.
///
/// A single contiguous coordinate space is assumed, so the file must hold
/// exactly one record; more than one is an error rather than a silent
/// concatenation.
///
pub fn read_reference_sequence(path: &Path) -> Result<Vec<u8>> {
    let mut reader = parse_fasta_file(path)?;

    let mut records = reader.records();
    let record = records
        .next()
        .ok_or_else(|| anyhow!("No FASTA record in {:?}", path))?
        .with_context(|| format!("Failed to read FASTA record from {:?}", path))?;

    if records.next().is_some() {
        bail!("Expected a single-contig reference, found multiple records in {:?}", path);
    }

    let sequence: Vec<u8> = record
        .sequence()
        .as_ref()
        .iter()
        .map(|b| b.to_ascii_uppercase())
        .collect();

    Ok(sequence)
}

/// Write non-permissive positions, one per line.
pub fn write_site_list(path: &Path, sites: &[Coordinate]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for site in sites {
        writeln!(writer, "{}", site)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_reference_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ref.fasta");
        std::fs::write(&path, ">Mbovis_AF2122_97 test\nacgt\nTACG\n").unwrap();

        let seq = read_reference_sequence(&path).unwrap();
        assert_eq!(seq, b"ACGTTACG");
    }

    #[test]
    fn test_multi_record_fasta_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("two.fasta");
        std::fs::write(&path, ">a\nACGT\n>b\nTTTT\n").unwrap();

        assert!(read_reference_sequence(&path).is_err());
    }

    #[test]
    fn test_write_site_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("np_sites.txt");

        write_site_list(&path, &[64, 1297]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "64\n1297\n");
    }
}
