//! # Grantham Core Library
//!
//! Grantham (1974) physicochemical distances between the 20 standard amino acids,
//! together with the code conversions needed to drive a wildtype/mutant lookup.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`AminoAcid`), the
//!   compile-time distance table, and the substitution classification scheme.
//!   Nothing here allocates or mutates shared state.
//!
//! - **[`workflows`]: The Public API.** The entry point a presentation layer calls
//!   with two three-letter selections; it converts, looks up and packages the result.
//!
//! ```
//! use grantham::core::matrix::table::DistanceTable;
//!
//! assert_eq!(DistanceTable::lookup('A', 'C'), Some(195));
//! assert_eq!(DistanceTable::lookup('C', 'A'), Some(195));
//! assert_eq!(DistanceTable::lookup('A', 'B'), None);
//! ```

pub mod core;
pub mod workflows;

/// Version of the core library, for diagnostics in front ends.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
