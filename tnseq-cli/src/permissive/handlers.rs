use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;

use tnseq_permissive::{
    MOTIF_TA_OFFSET, NONPERMISSIVE_MOTIF, find_nonpermissive_sites, read_reference_sequence,
    write_site_list,
};

use crate::permissive::cli::DEFAULT_OUT;

pub fn run_permissive(matches: &ArgMatches) -> Result<()> {
    // get arguments from CLI
    let fasta = matches
        .get_one::<String>("fasta")
        .expect("A path to the reference genome FASTA is required.");

    let motif = matches
        .get_one::<String>("motif")
        .map(String::as_str)
        .unwrap_or(NONPERMISSIVE_MOTIF);

    let offset = matches
        .get_one::<usize>("offset")
        .copied()
        .unwrap_or(MOTIF_TA_OFFSET);

    let default_out = DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);

    let sequence = read_reference_sequence(Path::new(fasta))?;
    let sites = find_nonpermissive_sites(&sequence, motif, offset)?;

    eprintln!(
        "Found {} non-permissive sites for motif {}",
        sites.len(),
        motif
    );
    write_site_list(Path::new(output), &sites)?;

    Ok(())
}
