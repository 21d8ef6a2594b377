use clap::{Command, arg};

use crate::consts;

pub const PROTEIN_DATA_ARG: &str = "PROTEIN_DATA";
pub const ABUNDANCES_ARG: &str = "ABUNDANCES";

pub fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Summarize a protein abundance list by molecular weight, isoelectric point and function.")
        .arg(
            arg!(<PROTEIN_DATA>)
                .required(true)
                .help("Annotated protein data file, one `<id> <mw> <pI> (<function>)` per line"),
        )
        .arg(
            arg!(<ABUNDANCES>)
                .required(true)
                .help("Abundance list, one `<id> <log2 amount>` per line; reports are written next to it"),
        )
}
