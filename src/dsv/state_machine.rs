//! The per-hypothesis CSV tokeniser.
//!
//! A [`StateMachine`] is bound to one `(delimiter, quote, escape, quote-rule)`
//! tuple and reports a column count per physical row. It never raises: a
//! malformed row just yields an anomalous column count, which the scorer
//! (`sniffer::analyze_dialect_candidate`) treats as inconsistency rather than
//! a hard failure.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use super::buffer::ByteCursor;
use super::options::QuoteRule;
use super::tuning::STANDARD_VECTOR_SIZE;

/// The dialect one state machine is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub delimiter: u8,
    pub quote: u8,
    pub escape: u8,
    pub quote_rule: QuoteRule,
}

impl Dialect {
    #[inline]
    fn quoting_enabled(&self) -> bool {
        !matches!(self.quote_rule, QuoteRule::NoQuotes)
    }
}

/// States of the tokeniser.
///
/// `FieldEnd` and `RecordEnd` are one-tick transitional states: a byte that
/// triggers one is folded into the same drive step that records the action,
/// and the machine always lands back in `StandardField` before the next byte
/// is read. They exist as named states (rather than bare booleans on
/// [`Action`]) because they name distinct moments a consumer reading traced
/// state transitions would want to see, not just events to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    StandardField,
    InsideQuotes,
    Escaped,
    FieldEnd,
    RecordEnd,
}

/// What a transition does to the byte it consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    /// Ordinary field content; no counters change.
    Continue,
    /// Closed a field (delimiter, or un-quote followed by delimiter).
    FieldEnd,
    /// Closed a row (terminator, or un-quote followed by a terminator).
    RecordEnd,
}

/// A plain transition function: `(state, byte, dialect) -> (state, action)`.
///
/// Holds no cursor or buffer reference: the outer driver
/// ([`StateMachine::sniff_dialect`]) owns the cursor, this function only
/// classifies one byte.
fn transition(state: State, byte: u8, dialect: &Dialect) -> (State, Action) {
    match state {
        State::StandardField | State::FieldEnd | State::RecordEnd => {
            if dialect.quoting_enabled() && byte == dialect.quote {
                (State::InsideQuotes, Action::Continue)
            } else if byte == dialect.delimiter {
                (State::StandardField, Action::FieldEnd)
            } else if byte == b'\r' || byte == b'\n' {
                (State::StandardField, Action::RecordEnd)
            } else {
                (State::StandardField, Action::Continue)
            }
        }
        State::InsideQuotes => {
            if dialect.escape != dialect.quote && byte == dialect.escape {
                (State::Escaped, Action::Continue)
            } else if byte == dialect.quote {
                if dialect.escape == dialect.quote {
                    // Ambiguous: could be a doubled (escaped) quote or the real
                    // close. Resolved on the *next* byte from `Escaped`.
                    (State::Escaped, Action::Continue)
                } else {
                    // Distinct escape byte: a quote unambiguously closes.
                    (State::StandardField, Action::Continue)
                }
            } else {
                (State::InsideQuotes, Action::Continue)
            }
        }
        State::Escaped => {
            if dialect.escape == dialect.quote {
                // "An escape byte identical to the quote byte exits quoting
                // only when followed by a delimiter, terminator, or
                // end-of-file; otherwise it escapes the next quote."
                if byte == dialect.delimiter {
                    (State::StandardField, Action::FieldEnd)
                } else if byte == b'\r' || byte == b'\n' {
                    (State::StandardField, Action::RecordEnd)
                } else {
                    (State::InsideQuotes, Action::Continue)
                }
            } else {
                // Distinct escape byte: the escaped byte is always literal.
                (State::InsideQuotes, Action::Continue)
            }
        }
    }
}

/// An independent parser instance bound to one dialect, reading through a
/// shared byte buffer.
#[derive(Debug, Clone)]
pub struct StateMachine {
    pub dialect: Dialect,
    cursor: ByteCursor,
    state: State,
    /// First row whose column count equals this candidate's `num_cols`,
    /// recorded by the scorer once that's known. Meaningless until then.
    pub start_row: usize,
}

impl StateMachine {
    /// A fresh machine bound to `dialect`, reading from `start_position`.
    pub fn new(dialect: Dialect, start_position: usize) -> Self {
        Self {
            dialect,
            cursor: ByteCursor::new(start_position),
            state: State::StandardField,
            start_row: 0,
        }
    }

    /// Current byte position in the shared buffer.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// True once the shared buffer's currently available bytes are exhausted.
    #[inline]
    pub fn finished(&self, bytes: &[u8]) -> bool {
        self.cursor.finished(bytes)
    }

    /// Rewind to replay a chunk under this same dialect, used by the
    /// refinement loop between rounds.
    pub fn reset_to(&mut self, position: usize) {
        self.cursor.reset_to(position);
        self.state = State::StandardField;
    }

    /// Tokenise bytes starting at the current position, filling `output`
    /// with one column count per physical row, capped at
    /// [`STANDARD_VECTOR_SIZE`] rows. Leaves the cursor just after the last
    /// row consumed so a subsequent call continues from there.
    pub fn sniff_dialect(&mut self, bytes: &[u8], output: &mut Vec<usize>) {
        output.clear();

        let mut cols_in_row: usize = 0;
        let mut any_byte_since_terminator = false;

        while output.len() < STANDARD_VECTOR_SIZE {
            let byte = match self.cursor.peek(bytes) {
                Some(byte) => byte,
                None => break,
            };
            any_byte_since_terminator = true;

            let (next_state, action) = transition(self.state, byte, &self.dialect);
            self.cursor.advance();
            self.state = next_state;

            match action {
                Action::Continue => {}
                Action::FieldEnd => {
                    cols_in_row += 1;
                }
                Action::RecordEnd => {
                    // \r\n is a single terminator; bare \r or \n each count once.
                    if byte == b'\r' && self.cursor.peek(bytes) == Some(b'\n') {
                        self.cursor.advance();
                    }
                    output.push(cols_in_row + 1);
                    cols_in_row = 0;
                    any_byte_since_terminator = false;
                }
            }
        }

        // EOF ends the final row only if at least one byte was seen since the
        // last terminator (an empty trailing line contributes no phantom row).
        if output.len() < STANDARD_VECTOR_SIZE
            && self.cursor.finished(bytes)
            && any_byte_since_terminator
        {
            output.push(cols_in_row + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rfc_dialect(delimiter: u8) -> Dialect {
        Dialect { delimiter, quote: b'"', escape: b'"', quote_rule: QuoteRule::QuotesRfc }
    }

    fn sniff(dialect: Dialect, bytes: &[u8]) -> Vec<usize> {
        let mut machine = StateMachine::new(dialect, 0);
        let mut output = Vec::new();
        machine.sniff_dialect(bytes, &mut output);
        output
    }

    #[test]
    fn simple_rows() {
        let counts = sniff(rfc_dialect(b','), b"a,b,c\n1,2,3\n4,5,6\n");
        assert_eq!(counts, vec![3, 3, 3]);
    }

    #[test]
    fn crlf_is_one_terminator() {
        let counts = sniff(rfc_dialect(b','), b"a,b\r\n1,2\r\n");
        assert_eq!(counts, vec![2, 2]);
    }

    #[test]
    fn bare_cr_and_lf_each_count_once() {
        let counts = sniff(rfc_dialect(b','), b"a,b\r1,2\n3,4\n");
        assert_eq!(counts, vec![2, 2, 2]);
    }

    #[test]
    fn empty_fields_between_delimiters() {
        let counts = sniff(rfc_dialect(b','), b"a,,c\n,,\n");
        assert_eq!(counts, vec![3, 3]);
    }

    #[test]
    fn no_trailing_newline_still_counts_last_row() {
        let counts = sniff(rfc_dialect(b','), b"a,b,c");
        assert_eq!(counts, vec![3]);
    }

    #[test]
    fn trailing_newline_does_not_add_phantom_row() {
        let counts = sniff(rfc_dialect(b','), b"a,b\n");
        assert_eq!(counts, vec![2]);
    }

    #[test]
    fn empty_input_yields_no_rows() {
        let counts = sniff(rfc_dialect(b','), b"");
        assert!(counts.is_empty());
    }

    #[test]
    fn quoted_fields_hide_delimiters_and_newlines() {
        let counts = sniff(rfc_dialect(b','), b"\"hello,world\",test\n\"a\nb\",c\n");
        assert_eq!(counts, vec![2, 2]);
    }

    #[test]
    fn doubled_quote_is_a_literal_quote() {
        let counts = sniff(rfc_dialect(b','), b"a,b\n\"he said \"\"hi\"\"\",2\n\"x\",3\n");
        assert_eq!(counts, vec![2, 2, 2]);
    }

    #[test]
    fn other_rule_uses_distinct_escape_byte() {
        let dialect = Dialect { delimiter: b',', quote: b'"', escape: b'\\', quote_rule: QuoteRule::QuotesOther };
        let counts = sniff(dialect, b"a,\"he said \\\"hi\\\"\"\n");
        assert_eq!(counts, vec![2]);
    }

    #[test]
    fn single_quote_dialect() {
        let dialect = Dialect { delimiter: b'\t', quote: b'\'', escape: b'\'', quote_rule: QuoteRule::QuotesOther };
        let counts = sniff(dialect, b"'a'\t'b'\n'1'\t'2'\n");
        assert_eq!(counts, vec![2, 2]);
    }

    #[test]
    fn no_quotes_rule_treats_quote_byte_as_literal() {
        let dialect = Dialect { delimiter: b',', quote: 0, escape: 0, quote_rule: QuoteRule::NoQuotes };
        let counts = sniff(dialect, b"a,\"b\",c\n");
        assert_eq!(counts, vec![3]);
    }

    #[test]
    fn reset_to_replays_from_a_position() {
        let bytes: &[u8] = b"a,b\nc,d\n";
        let mut machine = StateMachine::new(rfc_dialect(b','), 0);
        let mut output = Vec::new();
        machine.sniff_dialect(bytes, &mut output);
        assert_eq!(output, vec![2, 2]);

        machine.reset_to(0);
        let mut output2 = Vec::new();
        machine.sniff_dialect(bytes, &mut output2);
        assert_eq!(output2, output);
    }

    mod proptest_tokenizer {
        use super::*;
        use proptest::prelude::*;

        fn arbitrary_dialect() -> impl Strategy<Value = Dialect> {
            (
                any::<u8>(),
                any::<u8>(),
                any::<u8>(),
                prop_oneof![
                    Just(QuoteRule::QuotesRfc),
                    Just(QuoteRule::QuotesOther),
                    Just(QuoteRule::NoQuotes),
                ],
            )
                .prop_map(|(delimiter, quote, escape, quote_rule)| Dialect {
                    delimiter,
                    quote,
                    escape,
                    quote_rule,
                })
        }

        proptest! {
            #[test]
            fn never_panics_and_always_terminates(
                dialect in arbitrary_dialect(),
                bytes in proptest::collection::vec(any::<u8>(), 0..512),
            ) {
                let counts = sniff(dialect, &bytes);
                prop_assert!(counts.iter().all(|&count| count >= 1));
                prop_assert!(counts.len() <= bytes.len() + 1);
            }

            #[test]
            fn resetting_and_replaying_reproduces_the_same_counts(
                dialect in arbitrary_dialect(),
                bytes in proptest::collection::vec(any::<u8>(), 0..512),
            ) {
                let mut machine = StateMachine::new(dialect, 0);
                let mut first = Vec::new();
                machine.sniff_dialect(&bytes, &mut first);

                machine.reset_to(0);
                let mut second = Vec::new();
                machine.sniff_dialect(&bytes, &mut second);

                prop_assert_eq!(first, second);
            }
        }
    }
}
