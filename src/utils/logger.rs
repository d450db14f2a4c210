//! Diagnostics go to stderr so stdout carries only result lines.

use colored::Colorize;
use env_logger::{Builder, Target};
use log::{Level, LevelFilter};
use std::io::Write;

use crate::utils::config::PackagePaths;

/// Init logging once; later calls (e.g. from tests) are no-ops.
///
/// Records from worker threads are tagged with the worker name, so per-file debug output
/// can be traced back to the thread that hashed it.
pub fn setup_logging(verbose: bool) {
    let pkg = PackagePaths::get().pkg_name();
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let _ = Builder::from_default_env()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn) // dependencies: warnings only
        .filter_module(pkg, level)
        .format(move |buf, record| {
            let worker = std::thread::current()
                .name()
                .filter(|n| n.starts_with(pkg))
                .map(|n| format!(" {}", n.dimmed()))
                .unwrap_or_default();
            let level_str = match record.level() {
                Level::Error => format!(" {}", "ERROR".red()),
                Level::Warn => format!(" {}", "WARN".yellow()),
                _ => String::new(),
            };
            let line = format!("[{}{}{}] {}", pkg.cyan(), worker, level_str, record.args());
            writeln!(buf, "{line}")
        })
        .try_init();
}
