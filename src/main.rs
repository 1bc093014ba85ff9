use anyhow::Result;
use clap::Parser;
use termremote::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    termremote::debug::init_log_bridge(cli.log_level);
    log::debug!("termremote {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = cli::run(cli.command) {
        log::error!("{e:#}");
        eprintln!("termremote: error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
