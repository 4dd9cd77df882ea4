//! Bounded byte-window access to inspection targets.
//!
//! A window is the byte range `[offset, offset + len)`. When the range is
//! not fully inside the target, the read yields `Ok(None)`. That case is an
//! ordinary negative result for the matcher, not an error. Genuine I/O
//! failures are returned as [`ReadError`].

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::ReadError;

/// Source of byte windows for one inspection target.
///
/// Implementations must be shareable across threads because signatures
/// may be evaluated concurrently against the same target.
pub trait WindowSource: Sync {
    /// Human-readable identity of the target (usually its path).
    fn identity(&self) -> &str;

    /// Read exactly `len` bytes at `offset`, or `Ok(None)` if the target
    /// is too short to supply them.
    fn read_window(&self, offset: u64, len: usize) -> Result<Option<Vec<u8>>, ReadError>;
}

/// Windows served from a file on disk.
///
/// Each read opens its own handle, so concurrent reads never share a cursor.
#[derive(Debug, Clone)]
pub struct FileWindows {
    path: PathBuf,
    display: String,
    size: u64,
}

impl FileWindows {
    /// Open a target, failing if it is absent or not a regular file.
    pub fn open(path: &Path) -> Result<Self, ReadError> {
        let display = path.display().to_string();
        let meta = std::fs::metadata(path).map_err(|e| ReadError::from_io(&display, e))?;

        if !meta.is_file() {
            return Err(ReadError::Io {
                path: display,
                source: std::io::Error::other("not a regular file"),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            display,
            size: meta.len(),
        })
    }

    /// Size recorded when the target was opened.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WindowSource for FileWindows {
    fn identity(&self) -> &str {
        &self.display
    }

    fn read_window(&self, offset: u64, len: usize) -> Result<Option<Vec<u8>>, ReadError> {
        check_request(offset, len)?;

        if offset >= self.size {
            trace!(offset, size = self.size, "window starts at or beyond end of file");
            return Ok(None);
        }

        let io_err = |e: std::io::Error| ReadError::from_io(&self.display, e);

        let mut file = File::open(&self.path).map_err(io_err)?;
        file.seek(SeekFrom::Start(offset)).map_err(io_err)?;

        let mut buf = Vec::with_capacity(len);
        file.take(len as u64).read_to_end(&mut buf).map_err(io_err)?;

        if buf.len() < len {
            trace!(offset, len, got = buf.len(), "short window");
            return Ok(None);
        }

        Ok(Some(buf))
    }
}

/// Windows served from an in-memory buffer.
#[derive(Debug, Clone, Copy)]
pub struct SliceWindows<'a> {
    identity: &'a str,
    bytes: &'a [u8],
}

impl<'a> SliceWindows<'a> {
    pub fn new(identity: &'a str, bytes: &'a [u8]) -> Self {
        Self { identity, bytes }
    }
}

impl WindowSource for SliceWindows<'_> {
    fn identity(&self) -> &str {
        self.identity
    }

    fn read_window(&self, offset: u64, len: usize) -> Result<Option<Vec<u8>>, ReadError> {
        check_request(offset, len)?;

        let Ok(start) = usize::try_from(offset) else {
            return Ok(None);
        };

        Ok(start
            .checked_add(len)
            .and_then(|end| self.bytes.get(start..end))
            .map(<[u8]>::to_vec))
    }
}

fn check_request(offset: u64, len: usize) -> Result<(), ReadError> {
    if len == 0 {
        return Err(ReadError::InvalidWindow { offset, len });
    }
    Ok(())
}
