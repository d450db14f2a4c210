//! File hashing utilities

use crc32fast::Hasher;
use log::debug;
use memmap2::{Mmap, MmapOptions};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::utils::config::HashingConsts;

/// Continue a CRC32 from `seed` over `bytes`. Seed 0 starts a fresh checksum.
///
/// Chaining is exact: `crc32_update(crc32_update(0, a), b) == crc32_update(0, a ++ b)`.
pub fn crc32_update(seed: u32, bytes: &[u8]) -> u32 {
    let mut hasher = Hasher::new_with_initial(seed);
    hasher.update(bytes);
    hasher.finalize()
}

/// CRC32 of everything `reader` yields, read in [`HashingConsts::READ_CHUNK_SIZE`] chunks through one reused buffer.
pub fn checksum_reader<R: Read>(mut reader: R) -> io::Result<u32> {
    let mut buffer = [0u8; HashingConsts::READ_CHUNK_SIZE];
    let mut crc = 0u32;
    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        crc = crc32_update(crc, &buffer[..n]);
    }
    Ok(crc)
}

/// Read-only view of an open file's contents: the whole file mapped, or the handle for chunked reads.
///
/// Dropping the view unmaps or closes, so every exit path releases the file.
pub enum FileView {
    Mapped(Mmap),
    Streamed(File),
}

impl FileView {
    /// Try to map `file` (`size` bytes); fall back to streaming when mapping is not possible.
    ///
    /// Zero-length files are never mapped.
    pub fn acquire(file: File, size: u64) -> Self {
        let Ok(len) = usize::try_from(size) else {
            debug!("File of {} bytes exceeds address space, streaming", size);
            return FileView::Streamed(file);
        };
        if len == 0 {
            return FileView::Streamed(file);
        }
        // SAFETY: read-only mapping. Another process truncating the file mid-hash is not guarded against.
        match unsafe { MmapOptions::new().len(len).map(&file) } {
            Ok(mmap) => {
                advise_sequential(&mmap);
                FileView::Mapped(mmap)
            }
            Err(e) => {
                debug!("mmap failed ({}), falling back to buffered reads", e);
                FileView::Streamed(file)
            }
        }
    }

    /// CRC32 over the full contents. Consumes the view.
    pub fn crc32(self) -> io::Result<u32> {
        match self {
            FileView::Mapped(mmap) => Ok(crc32_update(0, &mmap)),
            FileView::Streamed(file) => checksum_reader(file),
        }
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self, FileView::Mapped(_))
    }
}

/// Hint that the mapping is read front to back and needed in full. Failures are ignored.
#[cfg(unix)]
fn advise_sequential(mmap: &Mmap) {
    use memmap2::Advice;
    let _ = mmap.advise(Advice::Sequential);
    let _ = mmap.advise(Advice::WillNeed);
}

#[cfg(not(unix))]
fn advise_sequential(_mmap: &Mmap) {}

/// CRC32 of the file at `path`, or the I/O error that made it unreadable.
///
/// Fails when the size cannot be determined, the path is not a regular file, or it cannot be opened.
pub fn try_checksum_file(path: &Path) -> io::Result<u32> {
    let meta = std::fs::metadata(path)?;
    if !meta.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        ));
    }
    let file = File::open(path)?;
    FileView::acquire(file, meta.len()).crc32()
}

/// CRC32 of the file at `path`, or `None` if it could not be read.
pub fn checksum_file(path: &Path) -> Option<u32> {
    match try_checksum_file(path) {
        Ok(crc) => Some(crc),
        Err(e) => {
            debug!("{}: {}", path.display(), e);
            None
        }
    }
}
