//! # Workflows Module
//!
//! High-level entry points for front ends. A front end holds the user's raw
//! selections (three-letter codes) and hands them to a workflow; the workflow
//! converts codes, consults the distance table and returns a typed result for
//! rendering.
//!
//! - **Comparison Workflow** ([`compare`]) - wildtype/mutant distance lookup

pub mod compare;
