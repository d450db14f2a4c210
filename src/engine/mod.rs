//! Engine module: hashing, dispatch, reporting and CLI glue

pub mod arg_parser;
pub mod cli;
pub mod hashing;
pub mod parallel;
pub mod report;

// Re-export commonly used functions
pub use arg_parser::Cli;
pub use cli::{build_settings, handle_run};
pub use hashing::{FileView, checksum_file, checksum_reader, crc32_update, try_checksum_file};
pub use parallel::{Cursor, dispatch};
pub use report::{Reporter, check_line, display_name, format_checksum, hash_line};
