//! SFV checklist parsing.
//!
//! One entry per line: `<relative path> <crc32 hex>`. The split is at the last space, so names
//! may contain spaces. Lines starting with `;` are comments. Lines whose checksum is not a
//! plain hex `u32` are dropped without error.
//!
//! Lines are handled as raw bytes; on Unix the name bytes become the path unchanged.

use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};

use crate::ChecklistEntry;

/// Byte-level [`parse_line`]: `(relative path bytes, expected crc)`.
pub fn parse_line_bytes(line: &[u8]) -> Option<(&[u8], u32)> {
    if line.first() == Some(&b';') {
        return None;
    }
    let split = line.iter().rposition(|&b| b == b' ')?;
    let (path, hex) = (&line[..split], &line[split + 1..]);
    if hex.is_empty() || !hex.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    let hex = std::str::from_utf8(hex).ok()?;
    let crc = u32::from_str_radix(hex, 16).ok()?;
    Some((path, crc))
}

/// Split one line into `(relative path, expected crc)`. `None` for comments and malformed lines.
pub fn parse_line(line: &str) -> Option<(&str, u32)> {
    let (path, crc) = parse_line_bytes(line.as_bytes())?;
    // Split at an ASCII space, so the prefix is still valid UTF-8.
    Some((std::str::from_utf8(path).ok()?, crc))
}

#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}

/// Resolve a checklist-relative path: against the checklist's directory, or `.` when it has none.
pub fn resolve_entry_path(checklist_path: &Path, relative: impl AsRef<Path>) -> PathBuf {
    let base = match checklist_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    base.join(relative)
}

/// Entries for every valid line of raw checklist contents, in line order. `\r\n` endings are accepted.
pub fn parse_checklist_bytes(checklist_path: &Path, contents: &[u8]) -> Vec<ChecklistEntry> {
    contents
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter_map(parse_line_bytes)
        .map(|(rel, expected)| ChecklistEntry {
            path: resolve_entry_path(checklist_path, path_from_bytes(rel)),
            expected,
        })
        .collect()
}

/// Entries for every valid line of `text`, in line order.
pub fn parse_checklist(checklist_path: &Path, text: &str) -> Vec<ChecklistEntry> {
    parse_checklist_bytes(checklist_path, text.as_bytes())
}

/// Read and parse each checklist, concatenating entries in the order given.
///
/// Fails on the first checklist that cannot be read; nothing is returned for the others.
pub fn load_checklists(paths: &[PathBuf]) -> Result<Vec<ChecklistEntry>> {
    let mut entries = Vec::new();
    for path in paths {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to open \"{}\" for reading", path.display()))?;
        let parsed = parse_checklist_bytes(path, &bytes);
        debug!("{}: {} entries", path.display(), parsed.len());
        entries.extend(parsed);
    }
    Ok(entries)
}
