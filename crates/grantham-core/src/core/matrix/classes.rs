use std::fmt;
use std::ops::RangeInclusive;

/// Li, Wu & Luo (1984) banding of Grantham distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubstitutionClass {
    Conservative,           // 0-50
    ModeratelyConservative, // 51-100
    ModeratelyRadical,      // 101-150
    Radical,                // >150
}

impl SubstitutionClass {
    pub fn from_distance(distance: u16) -> Self {
        match distance {
            0..=50 => Self::Conservative,
            51..=100 => Self::ModeratelyConservative,
            101..=150 => Self::ModeratelyRadical,
            _ => Self::Radical,
        }
    }

    pub fn range(self) -> RangeInclusive<u16> {
        match self {
            Self::Conservative => 0..=50,
            Self::ModeratelyConservative => 51..=100,
            Self::ModeratelyRadical => 101..=150,
            Self::Radical => 151..=u16::MAX,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::ModeratelyConservative => "moderately conservative",
            Self::ModeratelyRadical => "moderately radical",
            Self::Radical => "radical",
        }
    }
}

impl fmt::Display for SubstitutionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
