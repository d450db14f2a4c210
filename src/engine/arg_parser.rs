use clap::Parser;
use std::path::PathBuf;

/// Fast CRC32 checksums: hash files, or verify them against SFV checklists.
#[derive(Clone, Parser)]
#[command(name = "qcheck", version)]
#[command(about = "Print CRC32 checksums of files, or verify SFV checklists with --check.")]
pub struct Cli {
    /// Files to hash, or checklist files with --check.
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Number of checker threads in parallel. Default: 2.
    #[arg(long, short = 't', value_parser = clap::value_parser!(u64).range(1..))]
    pub threads: Option<u64>,

    /// Verify all input as .sfv files.
    #[arg(long, short = 'c')]
    pub check: bool,

    /// Verbose output.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
