//! CLI command handler: hash inputs by default; --check verifies them as checklists.

use anyhow::Result;
use log::{debug, warn};
use std::path::Path;

use crate::engine::arg_parser::Cli;
use crate::engine::report::Reporter;
use crate::utils::{
    PackagePaths, QcheckToml, apply_file_to_settings, cap_workers, load_qcheck_toml, setup_logging,
};
use crate::{RunSummary, Settings, run};

/// Layer settings: defaults, then `file` (if any), then flags given on the command line.
///
/// Also returns config warnings to log once logging is up.
pub fn build_settings(cli: &Cli, file: Option<&QcheckToml>) -> (Settings, Vec<String>) {
    let mut settings = Settings::default();
    let warnings = match file {
        Some(file) => apply_file_to_settings(file, &mut settings),
        None => Vec::new(),
    };
    if let Some(n) = cli.threads {
        settings.threads = usize::try_from(n).unwrap_or(usize::MAX);
    }
    // Flags can only switch modes on; the config file may already have.
    settings.check |= cli.check;
    settings.verbose |= cli.verbose;
    settings.inputs = cli.files.clone();
    (settings, warnings)
}

/// Run a hash or check pass. Errors only when a checklist cannot be read (or no worker could start).
pub fn handle_run(cli: &Cli) -> Result<RunSummary> {
    let (file, mut warnings) = match load_qcheck_toml(Path::new(".")) {
        Ok(file) => (file, Vec::new()),
        Err(w) => (None, vec![w]),
    };
    let (mut settings, file_warnings) = build_settings(cli, file.as_ref());
    warnings.extend(file_warnings);
    setup_logging(settings.verbose);
    for w in &warnings {
        warn!("{}", w);
    }
    settings.threads = cap_workers(settings.threads);

    let config_str = format!(
        "{} CONFIG:{:#?}",
        PackagePaths::get().pkg_name().to_uppercase(),
        settings
    );
    debug!("{}", config_str);

    let reporter = Reporter::stdout();
    let summary = run(&settings, &reporter)?;
    reporter.into_inner();
    Ok(summary)
}
