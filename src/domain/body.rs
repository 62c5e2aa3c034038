//! Bodies and orbit relations
//!
//! Record format: `CENTER)SATELLITE`, one per line, meaning that
//! `SATELLITE` directly orbits `CENTER` (e.g. `COM)B`).
//!
//! Identifiers are case-sensitive and may not contain whitespace.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Separator between the center and the satellite of a record
pub const SEPARATOR: char = ')';

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Malformed record at line {line}: expected 'CENTER)SATELLITE', got '{record}'")]
    MalformedRecord { line: usize, record: String },
}

/// Name of a body in the orbit map
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Body(String);

impl Body {
    /// Creates a body from its name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name of the body
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if `name` can appear as a token in a record
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty() && !name.chars().any(|c| c.is_whitespace() || c == SEPARATOR)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Body {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Body {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A direct orbit: `satellite` orbits `center`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
    pub center: Body,
    pub satellite: Body,
}

impl Relation {
    pub fn new(center: impl Into<Body>, satellite: impl Into<Body>) -> Self {
        Self {
            center: center.into(),
            satellite: satellite.into(),
        }
    }

    /// Parses a single record, reporting failures against `line`
    fn parse_record(record: &str, line: usize) -> Result<Self, ParseError> {
        let malformed = || ParseError::MalformedRecord {
            line,
            record: record.to_string(),
        };

        let record = record.trim();
        let (center, satellite) = record.split_once(SEPARATOR).ok_or_else(malformed)?;

        if !Body::is_valid_name(center) || !Body::is_valid_name(satellite) {
            return Err(malformed());
        }

        Ok(Self::new(center, satellite))
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.center, SEPARATOR, self.satellite)
    }
}

impl FromStr for Relation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_record(s, 1)
    }
}

/// Parses an orbit map into relations, one per non-blank line, in input order
pub fn parse_relations(input: &str) -> Result<Vec<Relation>, ParseError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| Relation::parse_record(line, idx + 1))
        .collect()
}

/// Renders relations back into the orbit map format
pub fn render_relations<'a>(relations: impl IntoIterator<Item = &'a Relation>) -> String {
    relations
        .into_iter()
        .map(|relation| format!("{}\n", relation))
        .collect()
}
