//! User-supplied dialect configuration.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The coarse tokenisation grammar a dialect belongs to.
///
/// Constrains which `(quote, escape)` combinations are legal: `QuotesRfc`
/// doubles the quote character to escape it, `QuotesOther` uses a distinct
/// escape byte, and `NoQuotes` disables quoting entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum QuoteRule {
    /// Quote = escape = `"` (doubling escapes, e.g. `"he said ""hi"""`).
    QuotesRfc = 0,
    /// Quote is `"` or `'`; escape is a distinct byte (commonly `\`).
    QuotesOther = 1,
    /// No quoting: quote and escape are both NUL and never match real input.
    NoQuotes = 2,
}

impl QuoteRule {
    /// All three rules, in the order the search-space generator tries them.
    pub const ALL: [QuoteRule; 3] = [QuoteRule::QuotesRfc, QuoteRule::QuotesOther, QuoteRule::NoQuotes];
}

/// A placeholder for a user-requested column type.
///
/// This crate never interprets the hint beyond counting how many were
/// requested, to reject a candidate whose column count doesn't match — type
/// inference itself happens downstream, outside this crate's scope.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColumnTypeHint(pub String);

/// User-supplied configuration for dialect detection.
///
/// Any field left unset (`None`, or the listed default) is filled in by
/// [`detect_dialect`](super::detect_dialect); fields the user did set are
/// pinned and detection fails rather than overriding them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DialectOptions {
    /// Pinned field delimiter, if the user supplied one.
    pub delimiter: Option<u8>,
    /// Pinned quote character, if the user supplied one.
    pub quote: Option<u8>,
    /// Pinned escape character, if the user supplied one (`0` means "no escape").
    pub escape: Option<u8>,
    /// Whether short rows may be padded with NULLs to reach the detected
    /// column count. Default `false`.
    pub null_padding: bool,
    /// Number of leading rows to skip before sniffing begins. Default `0`.
    pub skip_rows: usize,
    /// Whether the user explicitly set `skip_rows` (as opposed to the
    /// default applying). This gates the "preamble detected" reset branch
    /// in the scorer — see `sniffer::analyze_dialect_candidate`.
    pub skip_rows_set: bool,
    /// Number of chunks to sample before committing to a winner. Default `10`.
    pub sample_chunks: usize,
    /// Column type hints requested by the caller, if any.
    pub requested_column_types: Vec<ColumnTypeHint>,
    /// Path of the file being sniffed, used only for diagnostics.
    pub file_path: Option<String>,
    /// First data row after preamble and `skip_rows`. Populated by
    /// [`detect_dialect`](super::detect_dialect) on the winning dialect;
    /// ignored on input.
    pub start_row: usize,
}

impl Default for DialectOptions {
    fn default() -> Self {
        Self {
            delimiter: None,
            quote: None,
            escape: None,
            null_padding: false,
            skip_rows: 0,
            skip_rows_set: false,
            sample_chunks: super::tuning::DEFAULT_SAMPLE_CHUNKS,
            requested_column_types: Vec::new(),
            file_path: None,
            start_row: 0,
        }
    }
}

impl DialectOptions {
    /// Pin the delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Pin the quote character.
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = Some(quote);
        self
    }

    /// Pin the escape character (`0` to mean "no escape").
    pub fn with_escape(mut self, escape: u8) -> Self {
        self.escape = Some(escape);
        self
    }

    /// Enable or disable null-padding of short rows.
    pub fn with_null_padding(mut self, null_padding: bool) -> Self {
        self.null_padding = null_padding;
        self
    }

    /// Pin the number of rows to skip before sniffing.
    pub fn with_skip_rows(mut self, skip_rows: usize) -> Self {
        self.skip_rows = skip_rows;
        self.skip_rows_set = true;
        self
    }

    /// Set the number of chunks to sample during refinement.
    pub fn with_sample_chunks(mut self, sample_chunks: usize) -> Self {
        self.sample_chunks = sample_chunks;
        self
    }

    /// Attach a file path for diagnostics.
    pub fn with_file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_spec_defaults() {
        let options = DialectOptions::default();
        assert_eq!(options.delimiter, None);
        assert_eq!(options.quote, None);
        assert_eq!(options.escape, None);
        assert!(!options.null_padding);
        assert_eq!(options.skip_rows, 0);
        assert!(!options.skip_rows_set);
        assert_eq!(options.sample_chunks, 10);
        assert!(options.requested_column_types.is_empty());
    }

    #[test]
    fn with_skip_rows_sets_the_flag() {
        let options = DialectOptions::default().with_skip_rows(2);
        assert_eq!(options.skip_rows, 2);
        assert!(options.skip_rows_set);
    }
}
