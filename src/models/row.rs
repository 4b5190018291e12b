//! Token, row and dataset types.
//!
//! A `Row` serializes straight into one CSV record; field renames carry the
//! header names and `Visited` is flattened into a single comma-joined field.

use super::params::{CORRELATION_BAND, HEADER};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

/// A short pronounceable string, used for both person and country names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One synthetic record.
///
/// `country` is always a member of `visited`. `visited` is a sorted set, so
/// the serialized list is deterministic for a given set of countries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    #[serde(rename = "Name")]
    pub name: Token,

    #[serde(rename = "Country")]
    pub country: Token,

    #[serde(rename = "Visited", serialize_with = "serialize_visited")]
    pub visited: BTreeSet<Token>,

    #[serde(rename = "Restlessness")]
    pub restlessness: f64,

    #[serde(rename = "Mobility")]
    pub mobility: f64,
}

impl Row {
    /// Whether the pair ended up strictly inside the correlation band.
    pub fn is_correlated(&self) -> bool {
        in_correlation_band(self.restlessness, self.mobility)
    }

    /// `Visited` as it appears in the CSV field.
    pub fn visited_field(&self) -> String {
        join_tokens(&self.visited)
    }
}

/// Whether `restlessness / mobility` lies strictly inside the correlation band.
pub fn in_correlation_band(restlessness: f64, mobility: f64) -> bool {
    let ratio = restlessness / mobility;
    ratio > CORRELATION_BAND.0 && ratio < CORRELATION_BAND.1
}

fn join_tokens(tokens: &BTreeSet<Token>) -> String {
    tokens
        .iter()
        .map(Token::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

fn serialize_visited<S: Serializer>(
    visited: &BTreeSet<Token>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&join_tokens(visited))
}

/// A generated dataset together with the pool its countries came from.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub countries: Vec<Token>,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn header() -> [&'static str; 5] {
        HEADER
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
