mod permissive;
mod zero;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "tnseq";
    pub const BIN_NAME: &str = "tnseq";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Tools for transposon insertion sequencing analysis: zero-insertion gene detection and non-permissive TA site discovery.")
        .subcommand_required(true)
        .subcommand(zero::cli::create_zero_cli())
        .subcommand(permissive::cli::create_permissive_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // ZERO-INSERTION GENES
        //
        Some((zero::cli::ZERO_CMD, matches)) => {
            zero::handlers::run_zero(matches)?;
        }

        //
        // NON-PERMISSIVE SITES
        //
        Some((permissive::cli::PERMISSIVE_CMD, matches)) => {
            permissive::handlers::run_permissive(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
