//! # Distance Matrix Module
//!
//! - [`table`] - the Grantham half-matrix and its symmetric 20×20 expansion,
//!   built at compile time
//! - [`classes`] - banding of distances into conservative/radical substitution classes

pub mod classes;
pub mod table;
