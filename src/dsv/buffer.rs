//! The buffer manager and byte cursor: a seekable, chunked view over input
//! bytes, and the lightweight position cursor the state machines read
//! through.
//!
//! Three implementations ship: [`SliceBufferManager`] for bytes already in
//! memory, [`FileBufferManager`] for a chunked read of a file, and (behind
//! the `mmap` feature) [`MmapBufferManager`] for a memory-mapped file.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use super::error::{BufferIoError, DialectError};
use super::tuning::STANDARD_VECTOR_SIZE;

/// A default byte chunk size for buffer managers that don't load everything
/// into memory up front. Independent of [`STANDARD_VECTOR_SIZE`], which
/// bounds rows per sniff, not bytes per I/O read.
pub const DEFAULT_CHUNK_BYTES: usize = 64 * 1024;

/// Produces a seekable, chunked view over the bytes being sniffed.
///
/// Implementations append the next chunk's bytes to `out` and return how
/// many bytes were appended; `0` signals end of file. Faults are fatal and
/// propagate unchanged — the sniffer never retries I/O.
pub trait BufferManager {
    /// Append the next chunk to `out`, returning the number of bytes appended
    /// (`0` at end of file).
    fn read_chunk(&mut self, out: &mut Vec<u8>) -> Result<usize, DialectError>;

    /// The nominal chunk size this manager reads at a time.
    fn chunk_size(&self) -> usize;
}

/// A [`BufferManager`] over bytes already resident in memory.
#[derive(Debug, Clone)]
pub struct SliceBufferManager<'a> {
    data: &'a [u8],
    offset: usize,
    chunk_size: usize,
}

impl<'a> SliceBufferManager<'a> {
    /// Wrap `data`, chunking it in [`DEFAULT_CHUNK_BYTES`]-byte pieces.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_chunk_size(data, DEFAULT_CHUNK_BYTES)
    }

    /// Wrap `data`, chunking it in `chunk_size`-byte pieces.
    pub fn with_chunk_size(data: &'a [u8], chunk_size: usize) -> Self {
        Self { data, offset: 0, chunk_size: chunk_size.max(1) }
    }
}

impl BufferManager for SliceBufferManager<'_> {
    fn read_chunk(&mut self, out: &mut Vec<u8>) -> Result<usize, DialectError> {
        if self.offset >= self.data.len() {
            return Ok(0);
        }
        let end = (self.offset + self.chunk_size).min(self.data.len());
        out.extend_from_slice(&self.data[self.offset..end]);
        let read = end - self.offset;
        self.offset = end;
        Ok(read)
    }

    fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

/// A [`BufferManager`] reading a file with plain chunked [`std::io::Read`] calls.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct FileBufferManager {
    file: std::fs::File,
    chunk_size: usize,
    finished: bool,
}

#[cfg(feature = "std")]
impl FileBufferManager {
    /// Open `path` for chunked reading.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, DialectError> {
        Self::open_with_chunk_size(path, DEFAULT_CHUNK_BYTES)
    }

    /// Open `path`, chunking reads in `chunk_size`-byte pieces.
    pub fn open_with_chunk_size(
        path: impl AsRef<std::path::Path>,
        chunk_size: usize,
    ) -> Result<Self, DialectError> {
        let file = std::fs::File::open(path)
            .map_err(|err| DialectError::BufferIoFault(BufferIoError::from(err)))?;
        Ok(Self { file, chunk_size: chunk_size.max(1), finished: false })
    }
}

#[cfg(feature = "std")]
impl BufferManager for FileBufferManager {
    fn read_chunk(&mut self, out: &mut Vec<u8>) -> Result<usize, DialectError> {
        use std::io::Read;

        if self.finished {
            return Ok(0);
        }

        let start = out.len();
        out.resize(start + self.chunk_size, 0);
        let mut total = 0;
        while total < self.chunk_size {
            match self.file.read(&mut out[start + total..]) {
                Ok(0) => break,
                Ok(n) => total += n,
                Err(err) => {
                    out.truncate(start);
                    return Err(DialectError::BufferIoFault(BufferIoError::from(err)));
                }
            }
        }
        out.truncate(start + total);
        if total < self.chunk_size {
            self.finished = true;
        }
        Ok(total)
    }

    fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

/// A [`BufferManager`] over a memory-mapped file.
#[cfg(feature = "mmap")]
#[derive(Debug)]
pub struct MmapBufferManager {
    mmap: memmap2::Mmap,
    offset: usize,
    chunk_size: usize,
}

#[cfg(feature = "mmap")]
impl MmapBufferManager {
    /// Memory-map `path` for chunked reading.
    ///
    /// # Safety note
    /// Memory-mapping is not safe against concurrent modification of the
    /// underlying file by another process; callers must ensure the file is
    /// not mutated while the mapping is alive.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, DialectError> {
        Self::open_with_chunk_size(path, DEFAULT_CHUNK_BYTES)
    }

    /// Memory-map `path`, chunking iteration in `chunk_size`-byte pieces.
    pub fn open_with_chunk_size(
        path: impl AsRef<std::path::Path>,
        chunk_size: usize,
    ) -> Result<Self, DialectError> {
        let file = std::fs::File::open(path)
            .map_err(|err| DialectError::BufferIoFault(BufferIoError::from(err)))?;
        // Safety: see struct-level safety note.
        let mmap = unsafe { memmap2::Mmap::map(&file) }
            .map_err(|err| DialectError::BufferIoFault(BufferIoError::from(err)))?;
        Ok(Self { mmap, offset: 0, chunk_size: chunk_size.max(1) })
    }
}

#[cfg(feature = "mmap")]
impl BufferManager for MmapBufferManager {
    fn read_chunk(&mut self, out: &mut Vec<u8>) -> Result<usize, DialectError> {
        if self.offset >= self.mmap.len() {
            return Ok(0);
        }
        let end = (self.offset + self.chunk_size).min(self.mmap.len());
        out.extend_from_slice(&self.mmap[self.offset..end]);
        let read = end - self.offset;
        self.offset = end;
        Ok(read)
    }

    fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

/// A position into a growing byte buffer.
///
/// Deliberately a plain value rather than a reference into the buffer: a
/// position plus peek/advance/reset operations, with the bytes slice passed
/// in at each call. This keeps a state machine free to survive a refinement
/// round where the backing `Vec<u8>` may have grown (and reallocated) since
/// the last round, without the state machine holding a pointer back into it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteCursor {
    position: usize,
}

impl ByteCursor {
    /// A cursor starting at `position`.
    pub fn new(position: usize) -> Self {
        Self { position }
    }

    /// Current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The current byte, or `None` at end of file.
    #[inline]
    pub fn peek(&self, bytes: &[u8]) -> Option<u8> {
        bytes.get(self.position).copied()
    }

    /// Move one byte forward. Undefined (but not unsafe) past end of file.
    #[inline]
    pub fn advance(&mut self) {
        self.position += 1;
    }

    /// True once every byte in `bytes` has been consumed.
    #[inline]
    pub fn finished(&self, bytes: &[u8]) -> bool {
        self.position >= bytes.len()
    }

    /// Rewind to `position`, used by the refinement loop to replay a chunk
    /// under a new candidate.
    #[inline]
    pub fn reset_to(&mut self, position: usize) {
        self.position = position;
    }
}
