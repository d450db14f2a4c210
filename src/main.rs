//! qcheck CLI: print CRC32 checksums; use --check to verify SFV checklists.

use anyhow::Result;
use clap::Parser;
use qcheck::engine::arg_parser::Cli;
use qcheck::engine::handle_run;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
