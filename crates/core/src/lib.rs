//! Core library for bfhl
//!
//! This crate implements the **Functional Core** of the bfhl service,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`bfhl_core`** (this crate): Pure transformation functions with zero I/O
//! - **`bfhl`**: HTTP server, CLI and orchestration (the Imperative Shell)
//!
//! All functions in this crate are deterministic, free of side effects and
//! never log. Anything that needs a clock, a socket or a terminal lives in the
//! shell; the current date, for example, is passed in as a value.
//!
//! # Module Organization
//!
//! - [`classify`]: Token classification into odd/even/alphabetic/special buckets,
//!   the numeric sum and the alternating-caps display string
//! - [`identifier`]: Formatting, validation and parsing of `name_DDMMYYYY` identifiers
//!
//! # Example Usage
//!
//! ```rust
//! use bfhl_core::classify::classify;
//! use bfhl_core::identifier::{extract_date, format_identifier};
//! use chrono::NaiveDate;
//!
//! let result = classify(&["a", "1", "334", "4", "R", "$"]).unwrap();
//! assert_eq!(result.sum, "339");
//! assert_eq!(result.concat_string, "Ra");
//!
//! let date = NaiveDate::from_ymd_opt(1999, 9, 17).unwrap();
//! let id = format_identifier("John Doe", date).unwrap();
//! assert_eq!(id.as_str(), "john_doe_17091999");
//! assert_eq!(extract_date(id.as_str()), Some(date));
//! ```

pub mod classify;
pub mod identifier;
