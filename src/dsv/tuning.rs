//! Tuning constants for dialect detection.
//!
//! Documented rather than user-tunable: callers can see and reason about
//! these values but cannot change them without recompiling.

/// Rows sampled per chunk (the "standard vector size" the scorer works over).
pub const STANDARD_VECTOR_SIZE: usize = 2048;

/// Default number of chunks sampled before refinement commits to a winner.
pub const DEFAULT_SAMPLE_CHUNKS: usize = 10;

/// Delimiters tried when the user did not pin one.
pub const DEFAULT_DELIMITERS: [u8; 4] = [b',', b'|', b';', b'\t'];

/// Quotes tried for [`QuoteRule::QuotesRfc`](super::QuoteRule::QuotesRfc)
/// when the user did not pin one.
pub const DEFAULT_RFC_QUOTES: [u8; 1] = [b'"'];

/// Quotes tried for [`QuoteRule::QuotesOther`](super::QuoteRule::QuotesOther)
/// when the user did not pin one.
pub const DEFAULT_OTHER_QUOTES: [u8; 2] = [b'"', b'\''];

/// Escapes tried for [`QuoteRule::QuotesRfc`](super::QuoteRule::QuotesRfc)
/// when the user did not pin one: doubled quote, or no escape at all.
pub const DEFAULT_RFC_ESCAPES: [u8; 2] = [b'"', 0];

/// Escapes tried for [`QuoteRule::QuotesOther`](super::QuoteRule::QuotesOther)
/// when the user did not pin one.
pub const DEFAULT_OTHER_ESCAPES: [u8; 2] = [b'\\', 0];
