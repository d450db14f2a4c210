pub mod config;
pub mod fd_limit;
pub mod logger;
pub mod qcheck_toml;

pub use config::*;
pub use fd_limit::{FDS_PER_WORKER, cap_workers, max_open_fds, max_workers_by_fd_limit};
pub use logger::setup_logging;
pub use qcheck_toml::{QcheckToml, apply_file_to_settings, load_qcheck_toml, parse_qcheck_toml};
