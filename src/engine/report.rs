//! Result lines on stdout: plain when piped, colored on a terminal.
//!
//! Workers finish in any order, so each line is formatted in full and written under one lock.

use colored::Colorize;
use std::io::{self, IsTerminal, Stdout, Write};
use std::path::Path;
use std::sync::Mutex;

use crate::utils::config::ERROR_OPENING_FILE;
use crate::{ChecklistEntry, Verdict};

/// A checksum as SFV tools print it: 8 uppercase hex digits.
pub fn format_checksum(crc: u32) -> String {
    format!("{crc:08X}")
}

/// Name shown in direct-hash mode: the last path component, or the whole path if there is none.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

/// Direct-hash line for one file.
pub fn hash_line(path: &Path, crc: Option<u32>, decorate: bool) -> String {
    let name = display_name(path);
    match (crc, decorate) {
        (Some(crc), false) => format!("{}\t{}", name, format_checksum(crc)),
        (None, false) => format!("{name}\tERROR"),
        (Some(crc), true) => format!("{}\t{}", name.cyan(), format_checksum(crc).yellow()),
        (None, true) => format!("{}\t{}", name.cyan(), "ERROR".red()),
    }
}

/// Check-mode line for one entry.
pub fn check_line(entry: &ChecklistEntry, verdict: &Verdict, decorate: bool) -> String {
    let path = entry.path.display().to_string();
    let expected = format_checksum(entry.expected);
    if !decorate {
        return match verdict.computed() {
            Some(crc) => format!(
                "{}\t{}\t{}\t{}",
                path,
                expected,
                format_checksum(crc),
                verdict.label()
            ),
            None => format!("{path}\t{expected}\t\t{ERROR_OPENING_FILE}"),
        };
    }
    match verdict {
        Verdict::Ok(crc) => format!(
            "{}\t{}...{}\t{}",
            path.cyan(),
            expected.yellow(),
            format_checksum(*crc).green(),
            "OK".green()
        ),
        Verdict::Fail(crc) => format!(
            "{}\t{}...{}\t{}",
            path.cyan(),
            expected.yellow(),
            format_checksum(*crc).red(),
            "FAIL".red()
        ),
        Verdict::Error => format!(
            "{}\t{}\t\t{}",
            path.cyan(),
            expected.yellow(),
            ERROR_OPENING_FILE.red()
        ),
    }
}

/// Line sink shared by all workers.
pub struct Reporter<W: Write> {
    out: Mutex<W>,
    decorate: bool,
}

impl Reporter<Stdout> {
    /// Reporter on stdout, decorated when stdout is a terminal.
    pub fn stdout() -> Self {
        let out = io::stdout();
        let decorate = out.is_terminal();
        Self::new(out, decorate)
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, decorate: bool) -> Self {
        Self {
            out: Mutex::new(out),
            decorate,
        }
    }

    pub fn report_hash(&self, path: &Path, crc: Option<u32>) {
        self.write_line(&hash_line(path, crc, self.decorate));
    }

    pub fn report_check(&self, entry: &ChecklistEntry, verdict: &Verdict) {
        self.write_line(&check_line(entry, verdict, self.decorate));
    }

    fn write_line(&self, line: &str) {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        // A closed stdout (e.g. piped into `head`) drops the line; the run itself continues.
        let _ = writeln!(out, "{line}");
    }

    /// Flush and hand back the sink.
    pub fn into_inner(self) -> W {
        let mut out = match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = out.flush();
        out
    }
}
