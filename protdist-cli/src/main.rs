mod cli;
mod handlers;

use anyhow::Result;
use clap::error::ErrorKind;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "protdist";
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = cli::build_parser();
    let matches = app.try_get_matches().unwrap_or_else(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        // usage errors exit with 1, not clap's default of 2
        _ => {
            let _ = e.print();
            std::process::exit(1);
        }
    });

    handlers::run_protdist(&matches)
}
