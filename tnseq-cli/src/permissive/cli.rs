use clap::{Arg, Command, arg};

use tnseq_permissive::{MOTIF_TA_OFFSET, NONPERMISSIVE_MOTIF};

pub const PERMISSIVE_CMD: &str = "permissive";
pub const DEFAULT_OUT: &str = "np_sites.txt";

/// Creates the non-permissive site CLI Command object
pub fn create_permissive_cli() -> Command {
    Command::new(PERMISSIVE_CMD)
        .about("Find non-permissive TA sites in a reference genome from the Himar1 motif.")
        .arg(
            Arg::new("fasta")
                .long("fasta")
                .short('f')
                .help("Reference genome FASTA file (single contig)")
                .required(true),
        )
        .arg(
            arg!(--motif <motif>)
                .help(format!("IUPAC motif marking non-permissive sites [default: {}]", NONPERMISSIVE_MOTIF)),
        )
        .arg(
            Arg::new("offset")
                .long("offset")
                .value_parser(clap::value_parser!(usize))
                .help(format!("Bases preceding the TA dinucleotide in the motif [default: {}]", MOTIF_TA_OFFSET)),
        )
        .arg(arg!(--output <output>).help("Where to write the position list"))
}
