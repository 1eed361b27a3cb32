use clap::{Arg, Command, arg};

pub const ZERO_CMD: &str = "zero";

/// Creates the zero-gene CLI Command object
pub fn create_zero_cli() -> Command {
    Command::new(ZERO_CMD)
        .about("List genes whose every TA site stays below both read-count thresholds across all samples.")
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .help("Input-library wig file; its sites fix the matrix coordinate domain")
                .required(true),
        )
        .arg(
            Arg::new("wigs")
                .long("wigs")
                .short('w')
                .help("Glob pattern for the sample wig files to merge in")
                .required(true),
        )
        .arg(
            Arg::new("genes")
                .long("genes")
                .short('g')
                .help("Gene/TA-site table: TSV of gene id and comma-separated 1-based coordinates")
                .required(true),
        )
        .arg(
            arg!(--exclude <sites>)
                .help("File of 1-based positions (e.g. non-permissive sites) to drop before classification"),
        )
        .arg(
            Arg::new("per-sample")
                .long("per-sample")
                .value_parser(clap::value_parser!(u32))
                .help("Maximum reads allowed in any single sample at one site"),
        )
        .arg(
            Arg::new("cross-sample")
                .long("cross-sample")
                .value_parser(clap::value_parser!(u64))
                .help("Maximum summed reads across all samples at one site"),
        )
        .arg(
            arg!(--"skip-empty-genes")
                .help("Exclude genes with no known TA sites instead of passing them vacuously")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(arg!(--matrix <path>).help("Also write the insertion matrix as CSV (gzip'd when the path ends in .gz)"))
        .arg(arg!(--output <output>).help("Where to write the zero-gene list"))
}
