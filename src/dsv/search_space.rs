//! Expands user options into the Cartesian product of dialects to try.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use super::error::DialectError;
use super::options::{DialectOptions, QuoteRule};
use super::state_machine::{Dialect, StateMachine};
use super::tuning::{
    DEFAULT_DELIMITERS, DEFAULT_OTHER_ESCAPES, DEFAULT_OTHER_QUOTES, DEFAULT_RFC_ESCAPES,
    DEFAULT_RFC_QUOTES,
};

/// The three maps `generate_search_space` builds, ready for the nested
/// iteration `generate_state_machines` performs over them.
#[derive(Debug, Clone)]
pub struct SearchSpace {
    /// Quote-rules actually tried (narrowed to one when the user pinned `escape`).
    pub quote_rules: Vec<QuoteRule>,
    /// Delimiters tried, unconditional on quote-rule (shared across all three).
    pub delimiters: Vec<u8>,
    /// Quotes tried, indexed by `QuoteRule as usize`.
    pub quotes: [Vec<u8>; 3],
    /// Escapes tried, indexed by `QuoteRule as usize`. Kept keyed by
    /// quote-rule rather than by `(quote-rule, quote)` so a user-pinned
    /// escape under `QuotesOther` never silently widens to other quotes.
    pub escapes: [Vec<u8>; 3],
}

/// Expand `options` into the dialects to try.
///
/// Returns [`DialectError::OptionsConflict`] when the user pins `quote = 0`
/// (no quoting) together with a non-zero pinned `escape` (which forces the
/// `QuotesOther` rule — a rule that implies quoting is enabled). Every other
/// combination is resolvable to a non-empty search space, even a narrow one
/// that may later fail to detect anything.
pub fn generate_search_space(options: &DialectOptions) -> Result<SearchSpace, DialectError> {
    if options.quote == Some(0) && matches!(options.escape, Some(escape) if escape != 0) {
        return Err(DialectError::OptionsConflict {
            reason: "quote pinned to NUL (no quoting) conflicts with a non-NUL pinned escape",
        });
    }

    let delimiters = match options.delimiter {
        Some(delimiter) => alloc::vec![delimiter],
        None => DEFAULT_DELIMITERS.to_vec(),
    };

    let quotes: [Vec<u8>; 3] = match options.quote {
        Some(quote) => [alloc::vec![quote], alloc::vec![quote], alloc::vec![quote]],
        None => [DEFAULT_RFC_QUOTES.to_vec(), DEFAULT_OTHER_QUOTES.to_vec(), alloc::vec![0]],
    };

    let (quote_rules, escapes): (Vec<QuoteRule>, [Vec<u8>; 3]) = match options.escape {
        Some(0) => (alloc::vec![QuoteRule::QuotesRfc], [alloc::vec![0], Vec::new(), Vec::new()]),
        Some(escape) => {
            (alloc::vec![QuoteRule::QuotesOther], [Vec::new(), alloc::vec![escape], Vec::new()])
        }
        None => (
            QuoteRule::ALL.to_vec(),
            [DEFAULT_RFC_ESCAPES.to_vec(), DEFAULT_OTHER_ESCAPES.to_vec(), alloc::vec![0]],
        ),
    };

    Ok(SearchSpace { quote_rules, delimiters, quotes, escapes })
}

/// Instantiate one [`StateMachine`] per dialect in `search_space`, appending
/// each into `pool`.
///
/// Iteration order is `quote-rule → quote → delimiter → escape`: RFC-quote,
/// double-quote, comma first. Refinement's tie-breaking (front of the
/// candidate list wins) depends on this exact insertion order being
/// preserved rather than sorted.
pub fn generate_state_machines(
    search_space: &SearchSpace,
    start_position: usize,
    pool: &mut Vec<StateMachine>,
) {
    for &quote_rule in &search_space.quote_rules {
        let quotes = &search_space.quotes[quote_rule as usize];
        for &quote in quotes {
            for &delimiter in &search_space.delimiters {
                let escapes = &search_space.escapes[quote_rule as usize];
                for &escape in escapes {
                    let dialect = Dialect { delimiter, quote, escape, quote_rule };
                    pool.push(StateMachine::new(dialect, start_position));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_search_space_tries_all_three_rules() {
        let space = generate_search_space(&DialectOptions::default()).unwrap();
        assert_eq!(space.quote_rules, vec![QuoteRule::QuotesRfc, QuoteRule::QuotesOther, QuoteRule::NoQuotes]);
        assert_eq!(space.delimiters, vec![b',', b'|', b';', b'\t']);
        assert_eq!(space.quotes[QuoteRule::QuotesRfc as usize], vec![b'"']);
        assert_eq!(space.quotes[QuoteRule::QuotesOther as usize], vec![b'"', b'\'']);
        assert_eq!(space.quotes[QuoteRule::NoQuotes as usize], vec![0]);
    }

    #[test]
    fn pinned_delimiter_narrows_to_one_value() {
        let options = DialectOptions::default().with_delimiter(b';');
        let space = generate_search_space(&options).unwrap();
        assert_eq!(space.delimiters, vec![b';']);
    }

    #[test]
    fn pinned_quote_overrides_every_rules_quote_list() {
        let options = DialectOptions::default().with_quote(b'\'');
        let space = generate_search_space(&options).unwrap();
        for quotes in &space.quotes {
            assert_eq!(quotes, &vec![b'\'']);
        }
    }

    #[test]
    fn pinned_nul_escape_narrows_to_rfc_only() {
        let options = DialectOptions::default().with_escape(0);
        let space = generate_search_space(&options).unwrap();
        assert_eq!(space.quote_rules, vec![QuoteRule::QuotesRfc]);
        assert_eq!(space.escapes[QuoteRule::QuotesRfc as usize], vec![0]);
    }

    #[test]
    fn pinned_nonzero_escape_narrows_to_other_only() {
        let options = DialectOptions::default().with_escape(b'\\');
        let space = generate_search_space(&options).unwrap();
        assert_eq!(space.quote_rules, vec![QuoteRule::QuotesOther]);
        assert_eq!(space.escapes[QuoteRule::QuotesOther as usize], vec![b'\\']);
    }

    #[test]
    fn no_quotes_with_nonzero_escape_conflicts() {
        let options = DialectOptions::default().with_quote(0).with_escape(b'\\');
        let err = generate_search_space(&options).unwrap_err();
        assert!(matches!(err, DialectError::OptionsConflict { .. }));
    }

    #[test]
    fn generate_state_machines_preserves_insertion_order() {
        let space = generate_search_space(&DialectOptions::default()).unwrap();
        let mut pool = Vec::new();
        generate_state_machines(&space, 0, &mut pool);

        assert!(!pool.is_empty());
        let first = &pool[0];
        assert_eq!(first.dialect.quote_rule, QuoteRule::QuotesRfc);
        assert_eq!(first.dialect.quote, b'"');
        assert_eq!(first.dialect.delimiter, b',');
    }
}
