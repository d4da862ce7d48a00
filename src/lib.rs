//! # csv-dialect-sniff
//!
//! Automatic CSV dialect detection for embedded analytical SQL engines.
//!
//! Given an unannotated byte stream, [`dsv::detect_dialect`] recovers the
//! delimiter, quote character, escape character, quoting rule, and the first
//! data row (after any preamble and user-requested skipped rows), so that a
//! downstream scanner can parse the file as a typed relation without the
//! caller having to specify any of that by hand.
//!
//! ## Quick Start
//!
//! ```
//! use csv_dialect_sniff::dsv::{detect_dialect, DialectOptions, SliceBufferManager};
//!
//! let csv = b"a,b,c\n1,2,3\n4,5,6\n";
//! let buffer = SliceBufferManager::new(csv);
//! let options = DialectOptions::default();
//!
//! let winner = detect_dialect(buffer, &options).unwrap();
//! assert_eq!(winner.delimiter, Some(b','));
//! assert_eq!(winner.quote, Some(b'"'));
//! ```
//!
//! ## Module Organization
//!
//! - [`dsv`] - dialect detection: the byte-buffer iterator, the per-hypothesis
//!   state machine, the search-space generator, and the scoring/refinement
//!   loop that narrows candidates down to a single winner.
//!
//! ## Scope
//!
//! This crate detects *dialect* only: delimiter, quote, escape, quote-rule,
//! and start row. It does not parse field values, infer column types,
//! extract header names, validate UTF-8, or decode compressed input — those
//! are the responsibility of the downstream scanner this crate feeds.
//!
//! ## Features
//!
//! - `std` (default) - file-backed buffer managers and `std::error::Error`
//!   impls. Disable for `no_std` embedding (in-memory sniffing only).
//! - `serde` - `Serialize`/`Deserialize` for [`DialectOptions`] and
//!   [`QuoteRule`].
//! - `mmap` - memory-map file input instead of chunked reads.
//! - `cli` - build the `csv-sniff` binary.

// Use no_std unless the std feature is enabled or we're in test mode.
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// When using no_std, we need to explicitly link the alloc crate.
#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

// When using std, re-export alloc types from std for compatibility.
#[cfg(any(test, feature = "std"))]
extern crate std as alloc;

/// CSV/TSV dialect detection.
pub mod dsv;

pub use dsv::{detect_dialect, DialectError, DialectOptions, QuoteRule};
