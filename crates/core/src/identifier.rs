//! Identifier codec
//!
//! Pure functions for building and inspecting `<name>_<DDMMYYYY>` identifiers.
//! The name part is a lower-cased, underscore-joined rendering of a person's
//! name; the date part is a zero-padded calendar date without separators.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Number of characters in the trailing date part.
const DATE_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("name is empty after normalization")]
    EmptyName,

    #[error("year {0} cannot be rendered with four digits")]
    UnsupportedYear(i32),

    #[error("malformed identifier: {0}")]
    Malformed(String),

    #[error("identifier does not encode a real calendar date: {0}")]
    ImpossibleDate(String),
}

/// A well-formed `<name>_<DDMMYYYY>` identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_identifier(s).map(|_| Identifier(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// An identifier split back into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedIdentifier {
    pub name: String,
    pub date: NaiveDate,
}

fn identifier_regex() -> &'static Regex {
    static RE_IDENTIFIER: OnceLock<Regex> = OnceLock::new();
    RE_IDENTIFIER.get_or_init(|| Regex::new(r"^[a-z_]+_[0-9]{8}$").unwrap())
}

/// Trim, lower-case, join whitespace-separated words with `_` and strip
/// leading/trailing underscores.
///
/// "  John   Doe  " becomes "john_doe".
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .trim_matches('_')
        .to_string()
}

/// Build an identifier from a name and a date.
pub fn format_identifier(name: &str, date: NaiveDate) -> Result<Identifier, IdentifierError> {
    let normalized = normalize_name(name);
    if normalized.is_empty() {
        return Err(IdentifierError::EmptyName);
    }

    let year = date.year();
    if !(0..=9999).contains(&year) {
        return Err(IdentifierError::UnsupportedYear(year));
    }

    Ok(Identifier(format!(
        "{}_{:02}{:02}{:04}",
        normalized,
        date.day(),
        date.month(),
        year
    )))
}

/// Build an identifier from separate first and last names.
pub fn format_full_name_identifier(
    first: &str,
    last: &str,
    date: NaiveDate,
) -> Result<Identifier, IdentifierError> {
    format_identifier(&format!("{first} {last}"), date)
}

/// Check the identifier shape: lowercase letters or underscores, then `_` and
/// exactly eight ASCII digits.
pub fn is_valid_identifier(candidate: &str) -> bool {
    identifier_regex().is_match(candidate)
}

/// Split an identifier into its name part and date.
///
/// Fails when the shape is wrong or when the digits are not a real date
/// (e.g. `31021999`).
pub fn parse_identifier(candidate: &str) -> Result<ParsedIdentifier, IdentifierError> {
    if !is_valid_identifier(candidate) {
        return Err(IdentifierError::Malformed(candidate.to_string()));
    }

    // The regex guarantees an ASCII tail of exactly DATE_LEN digits preceded by '_'.
    let split = candidate.len() - DATE_LEN;
    let name = &candidate[..split - 1];
    let digits = &candidate[split..];

    let malformed = || IdentifierError::Malformed(candidate.to_string());
    let day: u32 = digits[0..2].parse().map_err(|_| malformed())?;
    let month: u32 = digits[2..4].parse().map_err(|_| malformed())?;
    let year: i32 = digits[4..8].parse().map_err(|_| malformed())?;

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| IdentifierError::ImpossibleDate(digits.to_string()))?;

    Ok(ParsedIdentifier {
        name: name.to_string(),
        date,
    })
}

/// Date embedded in an identifier, or `None` when the identifier is invalid.
pub fn extract_date(candidate: &str) -> Option<NaiveDate> {
    parse_identifier(candidate).ok().map(|parsed| parsed.date)
}
