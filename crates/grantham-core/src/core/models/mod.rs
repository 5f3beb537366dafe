//! # Core Models Module
//!
//! Amino-acid identities and the conversions between their code systems.
//!
//! - [`amino_acid`] - the [`AminoAcid`](amino_acid::AminoAcid) enum in canonical
//!   one-letter alphabet order
//! - [`codes`] - free-standing converters used by presentation code that only
//!   holds raw code strings

pub mod amino_acid;
pub mod codes;
