//! CSV/TSV dialect detection: delimiter, quote, escape, quote-rule, and
//! start-row recovery from an unannotated byte stream.
//!
//! ```
//! use csv_dialect_sniff::dsv::{detect_dialect, DialectOptions, SliceBufferManager};
//!
//! let bytes = b"a,b,c\n1,2,3\n4,5,6\n";
//! let winner = detect_dialect(SliceBufferManager::new(bytes), &DialectOptions::default())?;
//! assert_eq!(winner.delimiter, Some(b','));
//! # Ok::<(), csv_dialect_sniff::dsv::DialectError>(())
//! ```

mod buffer;
mod error;
mod options;
mod search_space;
mod sniffer;
mod state_machine;
mod tuning;

#[cfg(feature = "cli")]
pub mod fixtures;

pub use buffer::{BufferManager, ByteCursor, DEFAULT_CHUNK_BYTES};
#[cfg(feature = "std")]
pub use buffer::FileBufferManager;
#[cfg(feature = "mmap")]
pub use buffer::MmapBufferManager;
pub use buffer::SliceBufferManager;

pub use error::{BufferIoError, DialectError};
pub use options::{ColumnTypeHint, DialectOptions, QuoteRule};
pub use search_space::{generate_search_space, generate_state_machines, SearchSpace};
pub use sniffer::{detect_dialect, Candidate};
pub use state_machine::{Dialect, State, StateMachine};

pub use tuning::{
    DEFAULT_DELIMITERS, DEFAULT_OTHER_ESCAPES, DEFAULT_OTHER_QUOTES, DEFAULT_RFC_ESCAPES,
    DEFAULT_RFC_QUOTES, DEFAULT_SAMPLE_CHUNKS, STANDARD_VECTOR_SIZE,
};
