//! Application configuration constants.
//! Tuning and defaults in one place.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    pkg_name: &'static str,
    config_filename: String,
    worker_prefix: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                pkg_name: pkg,
                config_filename: format!(".{pkg}.toml"),
                worker_prefix: format!("{pkg}-wkr"),
            }
        })
    }

    pub fn pkg_name(&self) -> &str {
        self.pkg_name
    }

    /// Config file looked up in the current directory (e.g. `.qcheck.toml`).
    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }

    /// OS-visible worker thread name, e.g. `qcheck-wkr-3`. Linux truncates to 15 bytes.
    pub fn worker_thread_name(&self, index: usize) -> String {
        format!("{}-{}", self.worker_prefix, index)
    }
}

// ---- Worker threads ----

/// Worker count when neither the config file nor the CLI set one.
pub const DEFAULT_THREADS: usize = 2;

// ---- Hashing ----

/// Hashing I/O buffer sizes.
pub struct HashingConsts;

impl HashingConsts {
    /// Chunk size for the buffered-read fallback (bytes).
    pub const READ_CHUNK_SIZE: usize = 4096;
}

// ---- Output ----

/// Marker printed in place of a computed checksum when the file could not be read (check mode).
pub const ERROR_OPENING_FILE: &str = "Error opening file";
