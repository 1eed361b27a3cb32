use anyhow::{Result, bail};

use tnseq_core::Coordinate;

/// Non-permissive motif around Himar1 TA sites (DeJesus et al, 2017).
pub const NONPERMISSIVE_MOTIF: &str = "SGNTANCS";

/// Extended form of the non-permissive motif.
pub const NONPERMISSIVE_MOTIF_LONG: &str = "GCGNTANCGC";

/// Bases preceding the TA dinucleotide in [NONPERMISSIVE_MOTIF].
pub const MOTIF_TA_OFFSET: usize = 3;

/// True when `base` is one of the nucleotides the IUPAC `code` stands for.
/// Both are expected in upper case.
fn iupac_matches(code: u8, base: u8) -> bool {
    match code {
        b'A' | b'C' | b'G' | b'T' => code == base,
        b'U' => base == b'T',
        b'R' => matches!(base, b'A' | b'G'),
        b'Y' => matches!(base, b'C' | b'T'),
        b'S' => matches!(base, b'C' | b'G'),
        b'W' => matches!(base, b'A' | b'T'),
        b'K' => matches!(base, b'G' | b'T'),
        b'M' => matches!(base, b'A' | b'C'),
        b'B' => matches!(base, b'C' | b'G' | b'T'),
        b'D' => matches!(base, b'A' | b'G' | b'T'),
        b'H' => matches!(base, b'A' | b'C' | b'T'),
        b'V' => matches!(base, b'A' | b'C' | b'G'),
        b'N' => matches!(base, b'A' | b'C' | b'G' | b'T'),
        _ => false,
    }
}

fn is_iupac_code(code: u8) -> bool {
    matches!(
        code,
        b'A' | b'C'
            | b'G'
            | b'T'
            | b'U'
            | b'R'
            | b'Y'
            | b'S'
            | b'W'
            | b'K'
            | b'M'
            | b'B'
            | b'D'
            | b'H'
            | b'V'
            | b'N'
    )
}

///
/// Scan `sequence` for every occurrence of the degenerate `motif` and
/// return the 1-based genomic position of the TA site inside each match:
/// `match_start + 1 + offset`, where `offset` is the number of bases
/// preceding the TA dinucleotide in the motif. Positions come back in
/// ascending order. Matching is case-insensitive; ambiguous bases in the
/// sequence (anything other than ACGT) never match.
///
/// # Errors
///
/// Fails when `motif` is empty or contains a character that is not an
/// IUPAC nucleotide code.
///
pub fn find_nonpermissive_sites(
    sequence: &[u8],
    motif: &str,
    offset: usize,
) -> Result<Vec<Coordinate>> {
    if motif.is_empty() {
        bail!("Motif is empty");
    }
    let motif: Vec<u8> = motif.bytes().map(|b| b.to_ascii_uppercase()).collect();
    if let Some(&bad) = motif.iter().find(|&&code| !is_iupac_code(code)) {
        bail!("Invalid IUPAC code '{}' in motif", bad as char);
    }
    if offset + 2 > motif.len() {
        bail!(
            "Offset {} leaves no room for a TA dinucleotide in a {}-base motif",
            offset,
            motif.len()
        );
    }

    let mut sites = Vec::new();
    if sequence.len() < motif.len() {
        return Ok(sites);
    }

    for (start, window) in sequence.windows(motif.len()).enumerate() {
        let hit = motif
            .iter()
            .zip(window)
            .all(|(&code, &base)| iupac_matches(code, base.to_ascii_uppercase()));
        if hit {
            sites.push((start + 1 + offset) as Coordinate);
        }
    }

    Ok(sites)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_finds_motif_and_reports_ta_position() {
        //           123456789012345
        let seq = b"AACGGTATCGTTTTT";
        // SGNTANCS matches at 1-based position 3 (CGGTATCG);
        // the TA begins 3 bases in, at position 6.
        let sites = find_nonpermissive_sites(seq, NONPERMISSIVE_MOTIF, MOTIF_TA_OFFSET).unwrap();
        assert_eq!(sites, vec![6]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let sites =
            find_nonpermissive_sites(b"aacggtatcgttttt", NONPERMISSIVE_MOTIF, MOTIF_TA_OFFSET)
                .unwrap();
        assert_eq!(sites, vec![6]);
    }

    #[test]
    fn test_overlapping_matches_are_all_reported() {
        // TATA yields TA sites at positions 1 and 3
        let sites = find_nonpermissive_sites(b"TATA", "TA", 0).unwrap();
        assert_eq!(sites, vec![1, 3]);
    }

    #[test]
    fn test_sequence_shorter_than_motif_yields_nothing() {
        let sites = find_nonpermissive_sites(b"CGT", NONPERMISSIVE_MOTIF, MOTIF_TA_OFFSET).unwrap();
        assert!(sites.is_empty());
    }

    #[test]
    fn test_ambiguous_sequence_bases_never_match() {
        // N in the sequence does not satisfy N in the motif
        let sites = find_nonpermissive_sites(b"AACGGTNTCGT", NONPERMISSIVE_MOTIF, 3).unwrap();
        assert!(sites.is_empty());
    }

    #[rstest]
    #[case("")]
    #[case("SGXTANCS")]
    fn test_invalid_motif_is_rejected(#[case] motif: &str) {
        assert!(find_nonpermissive_sites(b"ACGT", motif, 0).is_err());
    }

    #[test]
    fn test_offset_past_motif_end_is_rejected() {
        assert!(find_nonpermissive_sites(b"ACGTACGT", "TA", 1).is_err());
    }
}
