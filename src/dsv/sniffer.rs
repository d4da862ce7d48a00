//! Candidate scoring, refinement, and the public entry point.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use super::buffer::BufferManager;
use super::error::DialectError;
use super::options::DialectOptions;
use super::search_space::{generate_search_space, generate_state_machines};
use super::state_machine::StateMachine;

/// A surviving dialect hypothesis plus its observed column count.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    /// Index into the sniffer's append-only state-machine pool.
    pub machine_index: usize,
    pub num_cols: usize,
}

/// Counters reset at the start of every refinement round.
#[derive(Debug, Clone, Copy, Default)]
struct ScorerStats {
    rows_read: usize,
    best_consistent_rows: usize,
    prev_padding_count: usize,
    best_num_cols: usize,
}

/// Owns the state-machine pool and the candidate list across one
/// `detect_dialect` call.
struct Sniffer<'a> {
    options: &'a DialectOptions,
    pool: Vec<StateMachine>,
    candidates: Vec<Candidate>,
    stats: ScorerStats,
}

impl<'a> Sniffer<'a> {
    fn new(options: &'a DialectOptions) -> Self {
        Self { options, pool: Vec::new(), candidates: Vec::new(), stats: ScorerStats::default() }
    }

    /// Score every machine in `machine_indices` over `bytes`, each rewound to
    /// `round_start` first: every candidate in a round reads the exact same
    /// byte range, so a dialect whose quoting hides a row boundary can't
    /// drift its cursor ahead of (or behind) its siblings before the next
    /// round begins.
    fn analyze_round(
        &mut self,
        bytes: &[u8],
        prev_column_count: usize,
        round_start: usize,
        machine_indices: &[usize],
    ) {
        for &machine_index in machine_indices {
            self.pool[machine_index].reset_to(round_start);
            self.analyze_dialect_candidate(machine_index, bytes, prev_column_count);
        }
    }

    /// Run `sniff_dialect` for one candidate over `bytes` and apply the
    /// acceptance rules, in order: early reject, replace-incumbent,
    /// co-winner, discard.
    fn analyze_dialect_candidate(&mut self, machine_index: usize, bytes: &[u8], prev_column_count: usize) {
        let mut sniffed_column_counts = Vec::new();
        self.pool[machine_index].sniff_dialect(bytes, &mut sniffed_column_counts);

        let mut start_row = self.options.skip_rows;
        let mut consistent_rows: usize = 0;
        let mut num_cols = sniffed_column_counts.first().copied().unwrap_or(0);
        let mut padding_count: usize = 0;
        let allow_padding = self.options.null_padding;

        if sniffed_column_counts.len() > self.stats.rows_read {
            self.stats.rows_read = sniffed_column_counts.len();
        }

        for (row, &count) in sniffed_column_counts.iter().enumerate() {
            if count == num_cols {
                consistent_rows += 1;
            } else if num_cols < count && !self.options.skip_rows_set {
                // Preamble lines preceded the real header; widen to the new count.
                padding_count = 0;
                num_cols = count;
                start_row = row + self.options.skip_rows;
                consistent_rows = 1;
            } else if num_cols >= count {
                padding_count += 1;
            }
        }

        if num_cols < prev_column_count {
            return;
        }

        consistent_rows += padding_count;
        let more_values = consistent_rows > self.stats.best_consistent_rows && num_cols >= self.stats.best_num_cols;
        let require_more_padding = padding_count > self.stats.prev_padding_count;
        let require_less_padding = padding_count < self.stats.prev_padding_count;
        let single_column_before = self.stats.best_num_cols < 2 && num_cols > self.stats.best_num_cols;
        let rows_consistent =
            start_row + consistent_rows - self.options.skip_rows == sniffed_column_counts.len();
        let more_than_one_row = consistent_rows > 1;
        let more_than_one_column = num_cols > 1;
        let start_good = self
            .candidates
            .first()
            .map(|front| start_row <= self.pool[front.machine_index].start_row)
            .unwrap_or(false);
        let invalid_padding = !allow_padding && padding_count > 0;

        let requested = &self.options.requested_column_types;
        if !requested.is_empty() && requested.len() != num_cols && !invalid_padding {
            return;
        }

        if rows_consistent
            && !invalid_padding
            && (single_column_before
                || (more_values && !require_more_padding)
                || (more_than_one_column && require_less_padding))
        {
            self.stats.best_consistent_rows = consistent_rows;
            self.stats.best_num_cols = num_cols;
            self.stats.prev_padding_count = padding_count;
            self.pool[machine_index].start_row = start_row;
            self.candidates.clear();
            self.candidates.push(Candidate { machine_index, num_cols });
        } else if more_than_one_row
            && more_than_one_column
            && start_good
            && rows_consistent
            && !require_more_padding
            && !invalid_padding
        {
            let quote = self.pool[machine_index].dialect.quote;
            let same_quote_is_candidate =
                self.candidates.iter().any(|c| self.pool[c.machine_index].dialect.quote == quote);
            if !same_quote_is_candidate {
                self.pool[machine_index].start_row = start_row;
                self.candidates.push(Candidate { machine_index, num_cols });
            }
        }
    }

    /// Replay the remaining chunks through surviving candidates, narrowing to
    /// one winner.
    fn refine_candidates(
        &mut self,
        buffer: &mut dyn BufferManager,
        bytes: &mut Vec<u8>,
    ) -> Result<(), DialectError> {
        // Mirrors the source exactly: `cur_best_num_cols` is recomputed from
        // `self.stats.best_num_cols` every round, but `ResetStats` (the
        // `ScorerStats::default()` below) always runs first, so the `max`
        // against a freshly-zeroed value is a no-op and the floor stays
        // pinned at whatever chunk 0 established.
        let mut cur_best_num_cols = self.stats.best_num_cols;

        for _ in 1..self.options.sample_chunks {
            if self.candidates.len() <= 1 {
                return Ok(());
            }
            let front_machine = self.candidates[0].machine_index;
            if self.pool[front_machine].finished(bytes) {
                let read = buffer.read_chunk(bytes)?;
                if read == 0 {
                    return Ok(());
                }
            }
            let round_start = self.pool[front_machine].position();

            self.stats = ScorerStats::default();
            cur_best_num_cols = cur_best_num_cols.max(self.stats.best_num_cols);
            let cur_candidates = core::mem::take(&mut self.candidates);
            let machine_indices: Vec<usize> = cur_candidates.iter().map(|c| c.machine_index).collect();
            self.analyze_round(bytes, cur_best_num_cols, round_start, &machine_indices);
        }
        Ok(())
    }
}

/// Detect the CSV dialect of `buffer`, given `options`.
///
/// Returns a winning [`DialectOptions`] with `delimiter`/`quote`/`escape`/
/// `start_row` populated, or [`DialectError::InvalidInput`] if no candidate
/// survives, or [`DialectError::OptionsConflict`] if `options` pinned an
/// infeasible combination (raised before any sniffing runs).
pub fn detect_dialect(
    mut buffer: impl BufferManager,
    options: &DialectOptions,
) -> Result<DialectOptions, DialectError> {
    let search_space = generate_search_space(options)?;

    let mut bytes = Vec::new();
    buffer.read_chunk(&mut bytes)?;

    let mut sniffer = Sniffer::new(options);
    generate_state_machines(&search_space, 0, &mut sniffer.pool);

    let all_machine_indices: Vec<usize> = (0..sniffer.pool.len()).collect();
    sniffer.analyze_round(&bytes, 0, 0, &all_machine_indices);

    sniffer.refine_candidates(&mut buffer, &mut bytes)?;

    let winner = sniffer.candidates.first().ok_or_else(|| DialectError::InvalidInput {
        file_path: options.file_path.clone(),
    })?;
    let machine = &sniffer.pool[winner.machine_index];

    Ok(DialectOptions {
        delimiter: Some(machine.dialect.delimiter),
        quote: Some(machine.dialect.quote),
        escape: Some(machine.dialect.escape),
        start_row: machine.start_row,
        ..options.clone()
    })
}
