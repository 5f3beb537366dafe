use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The 20 standard amino acids, ordered by one-letter code (`ACDEFGHIKLMNPQRSTVWY`).
///
/// The discriminant doubles as the row/column index into the distance table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AminoAcid {
    Alanine = 0,       // A / Ala
    Cysteine = 1,      // C / Cys
    AsparticAcid = 2,  // D / Asp
    GlutamicAcid = 3,  // E / Glu
    Phenylalanine = 4, // F / Phe
    Glycine = 5,       // G / Gly
    Histidine = 6,     // H / His
    Isoleucine = 7,    // I / Ile
    Lysine = 8,        // K / Lys
    Leucine = 9,       // L / Leu
    Methionine = 10,   // M / Met
    Asparagine = 11,   // N / Asn
    Proline = 12,      // P / Pro
    Glutamine = 13,    // Q / Gln
    Arginine = 14,     // R / Arg
    Serine = 15,       // S / Ser
    Threonine = 16,    // T / Thr
    Valine = 17,       // V / Val
    Tryptophan = 18,   // W / Trp
    Tyrosine = 19,     // Y / Tyr
}

static BY_THREE_LETTER: Map<&'static str, AminoAcid> = phf_map! {
    "Ala" => AminoAcid::Alanine,
    "Cys" => AminoAcid::Cysteine,
    "Asp" => AminoAcid::AsparticAcid,
    "Glu" => AminoAcid::GlutamicAcid,
    "Phe" => AminoAcid::Phenylalanine,
    "Gly" => AminoAcid::Glycine,
    "His" => AminoAcid::Histidine,
    "Ile" => AminoAcid::Isoleucine,
    "Lys" => AminoAcid::Lysine,
    "Leu" => AminoAcid::Leucine,
    "Met" => AminoAcid::Methionine,
    "Asn" => AminoAcid::Asparagine,
    "Pro" => AminoAcid::Proline,
    "Gln" => AminoAcid::Glutamine,
    "Arg" => AminoAcid::Arginine,
    "Ser" => AminoAcid::Serine,
    "Thr" => AminoAcid::Threonine,
    "Val" => AminoAcid::Valine,
    "Trp" => AminoAcid::Tryptophan,
    "Tyr" => AminoAcid::Tyrosine,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unrecognized amino acid '{0}'. Expected a one-letter code, three-letter code or full name.")]
pub struct ParseAminoAcidError(pub String);

impl AminoAcid {
    pub const COUNT: usize = 20;

    /// All 20 amino acids in canonical one-letter order.
    pub const ALL: [AminoAcid; Self::COUNT] = [
        Self::Alanine,
        Self::Cysteine,
        Self::AsparticAcid,
        Self::GlutamicAcid,
        Self::Phenylalanine,
        Self::Glycine,
        Self::Histidine,
        Self::Isoleucine,
        Self::Lysine,
        Self::Leucine,
        Self::Methionine,
        Self::Asparagine,
        Self::Proline,
        Self::Glutamine,
        Self::Arginine,
        Self::Serine,
        Self::Threonine,
        Self::Valine,
        Self::Tryptophan,
        Self::Tyrosine,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-letter IUPAC code.
    pub const fn one_letter(self) -> char {
        match self {
            Self::Alanine => 'A',
            Self::Cysteine => 'C',
            Self::AsparticAcid => 'D',
            Self::GlutamicAcid => 'E',
            Self::Phenylalanine => 'F',
            Self::Glycine => 'G',
            Self::Histidine => 'H',
            Self::Isoleucine => 'I',
            Self::Lysine => 'K',
            Self::Leucine => 'L',
            Self::Methionine => 'M',
            Self::Asparagine => 'N',
            Self::Proline => 'P',
            Self::Glutamine => 'Q',
            Self::Arginine => 'R',
            Self::Serine => 'S',
            Self::Threonine => 'T',
            Self::Valine => 'V',
            Self::Tryptophan => 'W',
            Self::Tyrosine => 'Y',
        }
    }

    /// Three-letter display code, capitalized as `Ala`.
    pub const fn three_letter(self) -> &'static str {
        match self {
            Self::Alanine => "Ala",
            Self::Cysteine => "Cys",
            Self::AsparticAcid => "Asp",
            Self::GlutamicAcid => "Glu",
            Self::Phenylalanine => "Phe",
            Self::Glycine => "Gly",
            Self::Histidine => "His",
            Self::Isoleucine => "Ile",
            Self::Lysine => "Lys",
            Self::Leucine => "Leu",
            Self::Methionine => "Met",
            Self::Asparagine => "Asn",
            Self::Proline => "Pro",
            Self::Glutamine => "Gln",
            Self::Arginine => "Arg",
            Self::Serine => "Ser",
            Self::Threonine => "Thr",
            Self::Valine => "Val",
            Self::Tryptophan => "Trp",
            Self::Tyrosine => "Tyr",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Alanine => "Alanine",
            Self::Cysteine => "Cysteine",
            Self::AsparticAcid => "Aspartic acid",
            Self::GlutamicAcid => "Glutamic acid",
            Self::Phenylalanine => "Phenylalanine",
            Self::Glycine => "Glycine",
            Self::Histidine => "Histidine",
            Self::Isoleucine => "Isoleucine",
            Self::Lysine => "Lysine",
            Self::Leucine => "Leucine",
            Self::Methionine => "Methionine",
            Self::Asparagine => "Asparagine",
            Self::Proline => "Proline",
            Self::Glutamine => "Glutamine",
            Self::Arginine => "Arginine",
            Self::Serine => "Serine",
            Self::Threonine => "Threonine",
            Self::Valine => "Valine",
            Self::Tryptophan => "Tryptophan",
            Self::Tyrosine => "Tyrosine",
        }
    }

    /// Exact, uppercase one-letter lookup. Usable in const context.
    pub const fn from_one_letter(code: char) -> Option<Self> {
        match code {
            'A' => Some(Self::Alanine),
            'C' => Some(Self::Cysteine),
            'D' => Some(Self::AsparticAcid),
            'E' => Some(Self::GlutamicAcid),
            'F' => Some(Self::Phenylalanine),
            'G' => Some(Self::Glycine),
            'H' => Some(Self::Histidine),
            'I' => Some(Self::Isoleucine),
            'K' => Some(Self::Lysine),
            'L' => Some(Self::Leucine),
            'M' => Some(Self::Methionine),
            'N' => Some(Self::Asparagine),
            'P' => Some(Self::Proline),
            'Q' => Some(Self::Glutamine),
            'R' => Some(Self::Arginine),
            'S' => Some(Self::Serine),
            'T' => Some(Self::Threonine),
            'V' => Some(Self::Valine),
            'W' => Some(Self::Tryptophan),
            'Y' => Some(Self::Tyrosine),
            _ => None,
        }
    }

    /// Exact three-letter lookup (`"Ala"`, not `"ALA"`).
    pub fn from_three_letter(code: &str) -> Option<Self> {
        BY_THREE_LETTER.get(code).copied()
    }
}

impl FromStr for AminoAcid {
    type Err = ParseAminoAcidError;

    /// Lenient parsing for user input: one-letter, three-letter or full name, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let parsed = match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_one_letter(c.to_ascii_uppercase()),
            _ if trimmed.len() == 3 => {
                let normalized: String = trimmed
                    .char_indices()
                    .map(|(i, c)| {
                        if i == 0 {
                            c.to_ascii_uppercase()
                        } else {
                            c.to_ascii_lowercase()
                        }
                    })
                    .collect();
                Self::from_three_letter(&normalized)
            }
            _ => Self::ALL
                .into_iter()
                .find(|aa| aa.name().eq_ignore_ascii_case(trimmed)),
        };
        parsed.ok_or_else(|| ParseAminoAcidError(s.to_string()))
    }
}

impl TryFrom<String> for AminoAcid {
    type Error = ParseAminoAcidError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AminoAcid> for String {
    fn from(aa: AminoAcid) -> Self {
        aa.three_letter().to_string()
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.three_letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_is_in_canonical_alphabet_order() {
        let alphabet: String = AminoAcid::ALL.iter().map(|aa| aa.one_letter()).collect();
        assert_eq!(alphabet, "ACDEFGHIKLMNPQRSTVWY");
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, aa) in AminoAcid::ALL.iter().enumerate() {
            assert_eq!(aa.index(), i, "{:?}", aa);
        }
    }

    #[test]
    fn one_letter_codes_are_unique() {
        let codes: HashSet<char> = AminoAcid::ALL.iter().map(|aa| aa.one_letter()).collect();
        assert_eq!(codes.len(), AminoAcid::COUNT);
    }

    #[test]
    fn three_letter_codes_are_unique() {
        let codes: HashSet<&str> = AminoAcid::ALL.iter().map(|aa| aa.three_letter()).collect();
        assert_eq!(codes.len(), AminoAcid::COUNT);
    }

    #[test]
    fn code_systems_agree_for_every_amino_acid() {
        for aa in AminoAcid::ALL {
            assert_eq!(AminoAcid::from_one_letter(aa.one_letter()), Some(aa));
            assert_eq!(AminoAcid::from_three_letter(aa.three_letter()), Some(aa));
        }
    }

    #[test]
    fn three_letter_lookup_is_exact() {
        assert_eq!(AminoAcid::from_three_letter("Ala"), Some(AminoAcid::Alanine));
        assert_eq!(AminoAcid::from_three_letter("ALA"), None);
        assert_eq!(AminoAcid::from_three_letter("ala"), None);
        assert_eq!(AminoAcid::from_three_letter("Xaa"), None);
    }

    #[test]
    fn one_letter_lookup_rejects_non_standard_codes() {
        for code in ['B', 'J', 'O', 'U', 'X', 'Z', '*', 'a'] {
            assert_eq!(AminoAcid::from_one_letter(code), None, "{}", code);
        }
    }

    #[test]
    fn from_str_accepts_any_case_and_form() {
        assert_eq!("Cys".parse::<AminoAcid>(), Ok(AminoAcid::Cysteine));
        assert_eq!("CYS".parse::<AminoAcid>(), Ok(AminoAcid::Cysteine));
        assert_eq!("cys".parse::<AminoAcid>(), Ok(AminoAcid::Cysteine));
        assert_eq!("c".parse::<AminoAcid>(), Ok(AminoAcid::Cysteine));
        assert_eq!(" W ".parse::<AminoAcid>(), Ok(AminoAcid::Tryptophan));
        assert_eq!(
            "aspartic acid".parse::<AminoAcid>(),
            Ok(AminoAcid::AsparticAcid)
        );
    }

    #[test]
    fn from_str_reports_the_original_input() {
        let err = "Xyz".parse::<AminoAcid>().unwrap_err();
        assert_eq!(err, ParseAminoAcidError("Xyz".to_string()));
        assert!("".parse::<AminoAcid>().is_err());
        assert!("B".parse::<AminoAcid>().is_err());
    }

    #[test]
    fn display_uses_three_letter_code() {
        assert_eq!(AminoAcid::Histidine.to_string(), "His");
    }
}
