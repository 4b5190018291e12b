//! Fixed generation parameters.
//!
//! None of these are exposed on the command line; the shape of the data
//! is part of what the generator is.

/// Rows in every generated dataset.
pub const ROW_COUNT: usize = 100;

/// Inclusive bounds on the number of tokens in the country pool.
pub const POOL_SIZE: (usize, usize) = (8, 12);

/// Inclusive bounds on how many countries each row draws for `Visited`.
pub const VISIT_DRAWS: (usize, usize) = (1, 6);

/// Inclusive bounds on how many syllable units make up a token.
pub const TOKEN_UNITS: (usize, usize) = (1, 3);

/// Consonants a token may contain.
pub const CONSONANTS: &[u8] = b"kwrtvmnpxyd";

/// Vowels a token may contain.
pub const VOWELS: &[u8] = b"aeiou";

/// A token gets a leading vowel when a unit draw exceeds this.
pub const LEADING_VOWEL_THRESHOLD: f64 = 0.5;

/// A unit is consonant+vowel when a unit draw exceeds this, else a lone vowel.
pub const PAIR_THRESHOLD: f64 = 0.1;

/// Restlessness/mobility ratios strictly inside this band count as correlated.
pub const CORRELATION_BAND: (f64, f64) = (0.8, 1.2);

/// Maximum number of times mobility is resampled toward restlessness.
pub const NUDGE_CHANCES: u32 = 2;

/// The nudging loop keeps going only while a unit draw exceeds this.
pub const NUDGE_CONTINUE_THRESHOLD: f64 = 0.5;

/// Output written when no `--output` is given.
pub const DEFAULT_OUTPUT: &str = "data/demo.csv";

/// CSV header, in column order.
pub const HEADER: [&str; 5] = ["Name", "Country", "Visited", "Restlessness", "Mobility"];
