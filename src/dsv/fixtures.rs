//! Synthetic CSV generators for tests, benches, and the CLI's
//! `generate-fixture` subcommand.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A dialect shape to generate a fixture in.
#[derive(Debug, Clone, Copy)]
pub enum FixturePattern {
    /// RFC-comma, double-quoted fields, consistent column count.
    RfcQuoted,
    /// A few short rows mixed among consistent ones, needing null-padding.
    Ragged,
    /// Comment lines before the real header, semicolon-delimited.
    Preamble,
    /// Tab-delimited, single-quoted fields.
    TabSingleQuote,
    /// Comma-delimited, doubled-quote escapes inside quoted fields.
    EscapedQuotes,
}

/// Generate a fixture of approximately `target_size` bytes in `pattern`'s shape.
pub fn generate_fixture(pattern: FixturePattern, target_size: usize, seed: Option<u64>) -> String {
    match pattern {
        FixturePattern::RfcQuoted => generate_rfc_quoted(target_size, seed),
        FixturePattern::Ragged => generate_ragged(target_size, seed),
        FixturePattern::Preamble => generate_preamble(target_size, seed),
        FixturePattern::TabSingleQuote => generate_tab_single_quote(target_size, seed),
        FixturePattern::EscapedQuotes => generate_escaped_quotes(target_size, seed),
    }
}

fn generate_rfc_quoted(target_size: usize, seed: Option<u64>) -> String {
    let mut rng = seed.map(ChaCha8Rng::seed_from_u64);
    let mut csv = String::with_capacity(target_size);
    csv.push_str("id,name,note\n");

    let mut row_id = 1;
    while csv.len() < target_size {
        let score = rng.as_mut().map(|r| r.gen_range(0..10_000)).unwrap_or(row_id * 7);
        csv.push_str(&format!("{},\"User {}\",\"score={}\"\n", row_id, row_id, score));
        row_id += 1;
    }
    csv
}

fn generate_ragged(target_size: usize, seed: Option<u64>) -> String {
    let mut rng = seed.map(ChaCha8Rng::seed_from_u64);
    let mut csv = String::with_capacity(target_size);
    csv.push_str("a,b,c\n");

    let mut row_id = 1;
    while csv.len() < target_size {
        let short = rng.as_mut().map(|r| r.r#gen::<bool>()).unwrap_or(row_id % 3 == 0);
        if short {
            csv.push_str(&format!("{},{}\n", row_id, row_id * 2));
        } else {
            csv.push_str(&format!("{},{},{}\n", row_id, row_id * 2, row_id * 3));
        }
        row_id += 1;
    }
    csv
}

fn generate_preamble(target_size: usize, seed: Option<u64>) -> String {
    let mut rng = seed.map(ChaCha8Rng::seed_from_u64);
    let mut csv = String::with_capacity(target_size);
    csv.push_str("# generated fixture\n# do not edit\nx;y\n");

    let mut row_id = 1;
    while csv.len() < target_size {
        let y = rng.as_mut().map(|r| r.gen_range(0..1000)).unwrap_or(row_id * 3);
        csv.push_str(&format!("{};{}\n", row_id, y));
        row_id += 1;
    }
    csv
}

fn generate_tab_single_quote(target_size: usize, seed: Option<u64>) -> String {
    let mut rng = seed.map(ChaCha8Rng::seed_from_u64);
    let mut csv = String::with_capacity(target_size);
    csv.push_str("'a'\t'b'\n");

    let mut row_id = 1;
    while csv.len() < target_size {
        let value = rng.as_mut().map(|r| r.gen_range(0..1000)).unwrap_or(row_id);
        csv.push_str(&format!("'{}'\t'{}'\n", row_id, value));
        row_id += 1;
    }
    csv
}

fn generate_escaped_quotes(target_size: usize, seed: Option<u64>) -> String {
    let mut rng = seed.map(ChaCha8Rng::seed_from_u64);
    let mut csv = String::with_capacity(target_size);
    csv.push_str("a,b\n");

    let mut row_id = 1;
    while csv.len() < target_size {
        let note = rng
            .as_mut()
            .map(|r| if r.r#gen::<bool>() { "he said \"\"hi\"\"" } else { "plain" })
            .unwrap_or(if row_id % 2 == 0 { "he said \"\"hi\"\"" } else { "plain" });
        csv.push_str(&format!("\"{}\",{}\n", note, row_id));
        row_id += 1;
    }
    csv
}
