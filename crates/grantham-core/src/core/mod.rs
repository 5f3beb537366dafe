//! # Core Module
//!
//! Fundamental building blocks of the calculator.
//!
//! - **Amino acid identities** ([`models`]) - the 20 standard residues and the
//!   one-letter / three-letter code bijection
//! - **Distance data** ([`matrix`]) - the symmetric Grantham table and the
//!   substitution classes derived from it
//! - **Display settings** ([`config`]) - validated presentation options shared by
//!   every front end

pub mod config;
pub mod matrix;
pub mod models;
