//! Load `.qcheck.toml` from a directory (CLI only). Lib callers build [`Settings`] directly.

use serde::Deserialize;
use std::path::Path;

use crate::Settings;
use crate::utils::config::PackagePaths;

#[derive(Debug, Default, Deserialize)]
pub struct QcheckToml {
    #[serde(default)]
    settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsSection {
    threads: Option<usize>,
    check: Option<bool>,
    verbose: Option<bool>,
}

/// Parse config text.
pub fn parse_qcheck_toml(text: &str) -> Result<QcheckToml, toml::de::Error> {
    toml::from_str(text)
}

/// Load the config file from `dir`. `Ok(None)` when there is no file.
///
/// `Err` carries a warning for a file that exists but cannot be read or parsed. Runs before
/// logging is set up, so the caller logs it.
pub fn load_qcheck_toml(dir: &Path) -> Result<Option<QcheckToml>, String> {
    let path = dir.join(PackagePaths::get().config_filename());
    let s = match std::fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(format!("{}: {}", path.display(), e)),
    };
    parse_qcheck_toml(&s)
        .map(Some)
        .map_err(|e| format!("{}: {}", path.display(), e))
}

/// Overwrite settings field from file when present.
macro_rules! apply_file_opt {
    ($section:expr, $settings:expr, $field:ident) => {
        if let Some(v) = $section.$field {
            $settings.$field = v;
        }
    };
}

/// Apply file config to settings (only fields present in the file). Call before applying CLI.
///
/// Returns warnings for values that were ignored (`threads = 0`).
pub fn apply_file_to_settings(file: &QcheckToml, settings: &mut Settings) -> Vec<String> {
    let section = &file.settings;
    let mut warnings = Vec::new();
    match section.threads {
        Some(0) => warnings.push("ignoring threads = 0 in config file".to_string()),
        Some(n) => settings.threads = n,
        None => {}
    }
    apply_file_opt!(section, settings, check);
    apply_file_opt!(section, settings, verbose);
    warnings
}
