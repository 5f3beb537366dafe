use super::amino_acid::AminoAcid;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodeError {
    #[error("Unknown three-letter amino acid code: '{0}'")]
    UnknownThreeLetter(String),

    #[error("Unknown one-letter amino acid code: '{0}'")]
    UnknownOneLetter(char),
}

/// The three-letter codes in canonical order, as offered to users for selection.
pub const THREE_LETTER_CODES: [&str; AminoAcid::COUNT] = {
    let mut codes = [""; AminoAcid::COUNT];
    let mut i = 0;
    while i < AminoAcid::COUNT {
        codes[i] = AminoAcid::ALL[i].three_letter();
        i += 1;
    }
    codes
};

pub fn to_one_letter(three_letter: &str) -> Result<char, CodeError> {
    AminoAcid::from_three_letter(three_letter)
        .map(AminoAcid::one_letter)
        .ok_or_else(|| CodeError::UnknownThreeLetter(three_letter.to_string()))
}

pub fn to_three_letter(one_letter: char) -> Result<&'static str, CodeError> {
    AminoAcid::from_one_letter(one_letter)
        .map(AminoAcid::three_letter)
        .ok_or(CodeError::UnknownOneLetter(one_letter))
}
