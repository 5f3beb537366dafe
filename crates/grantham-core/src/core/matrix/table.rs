//! The Grantham (1974) distance table.
//!
//! The published data is a half-matrix of the 190 unordered pairs of distinct
//! amino acids. [`expand`] mirrors it into a full 20×20 matrix with a zero
//! diagonal at compile time, so the table is a plain `static` with no
//! initialization order or mutation path at runtime.

use crate::core::models::amino_acid::AminoAcid;

const N: usize = AminoAcid::COUNT;
const UNSET: u16 = u16::MAX;

/// Number of unordered pairs of distinct amino acids.
pub const CROSS_PAIR_COUNT: usize = N * (N - 1) / 2;

/// Grantham, R. (1974) Science 185:862-864, upper triangle in one-letter code order.
#[rustfmt::skip]
pub const HALF_MATRIX: [(char, char, u16); CROSS_PAIR_COUNT] = [
    ('A', 'C', 195), ('A', 'D', 126), ('A', 'E', 107), ('A', 'F', 113), ('A', 'G', 60),
    ('A', 'H', 86), ('A', 'I', 94), ('A', 'K', 106), ('A', 'L', 96), ('A', 'M', 84),
    ('A', 'N', 111), ('A', 'P', 27), ('A', 'Q', 91), ('A', 'R', 112), ('A', 'S', 99),
    ('A', 'T', 58), ('A', 'V', 64), ('A', 'W', 148), ('A', 'Y', 112),
    ('C', 'D', 154), ('C', 'E', 170), ('C', 'F', 205), ('C', 'G', 159), ('C', 'H', 174),
    ('C', 'I', 198), ('C', 'K', 202), ('C', 'L', 198), ('C', 'M', 196), ('C', 'N', 139),
    ('C', 'P', 169), ('C', 'Q', 154), ('C', 'R', 180), ('C', 'S', 112), ('C', 'T', 149),
    ('C', 'V', 192), ('C', 'W', 215), ('C', 'Y', 194),
    ('D', 'E', 45), ('D', 'F', 177), ('D', 'G', 94), ('D', 'H', 81), ('D', 'I', 168),
    ('D', 'K', 101), ('D', 'L', 172), ('D', 'M', 160), ('D', 'N', 23), ('D', 'P', 108),
    ('D', 'Q', 61), ('D', 'R', 96), ('D', 'S', 65), ('D', 'T', 85), ('D', 'V', 152),
    ('D', 'W', 181), ('D', 'Y', 160),
    ('E', 'F', 140), ('E', 'G', 98), ('E', 'H', 40), ('E', 'I', 134), ('E', 'K', 56),
    ('E', 'L', 138), ('E', 'M', 126), ('E', 'N', 42), ('E', 'P', 93), ('E', 'Q', 29),
    ('E', 'R', 54), ('E', 'S', 80), ('E', 'T', 65), ('E', 'V', 121), ('E', 'W', 152),
    ('E', 'Y', 122),
    ('F', 'G', 153), ('F', 'H', 100), ('F', 'I', 21), ('F', 'K', 102), ('F', 'L', 22),
    ('F', 'M', 28), ('F', 'N', 158), ('F', 'P', 114), ('F', 'Q', 116), ('F', 'R', 97),
    ('F', 'S', 155), ('F', 'T', 103), ('F', 'V', 50), ('F', 'W', 40), ('F', 'Y', 22),
    ('G', 'H', 98), ('G', 'I', 135), ('G', 'K', 127), ('G', 'L', 138), ('G', 'M', 127),
    ('G', 'N', 80), ('G', 'P', 42), ('G', 'Q', 87), ('G', 'R', 125), ('G', 'S', 56),
    ('G', 'T', 59), ('G', 'V', 109), ('G', 'W', 184), ('G', 'Y', 147),
    ('H', 'I', 94), ('H', 'K', 32), ('H', 'L', 99), ('H', 'M', 87), ('H', 'N', 68), ('H', 'P', 77),
    ('H', 'Q', 24), ('H', 'R', 29), ('H', 'S', 89), ('H', 'T', 47), ('H', 'V', 84),
    ('H', 'W', 115), ('H', 'Y', 83),
    ('I', 'K', 102), ('I', 'L', 5), ('I', 'M', 10), ('I', 'N', 149), ('I', 'P', 95),
    ('I', 'Q', 109), ('I', 'R', 97), ('I', 'S', 142), ('I', 'T', 89), ('I', 'V', 29),
    ('I', 'W', 61), ('I', 'Y', 33),
    ('K', 'L', 107), ('K', 'M', 95), ('K', 'N', 94), ('K', 'P', 103), ('K', 'Q', 53),
    ('K', 'R', 26), ('K', 'S', 121), ('K', 'T', 78), ('K', 'V', 97), ('K', 'W', 110),
    ('K', 'Y', 85),
    ('L', 'M', 15), ('L', 'N', 153), ('L', 'P', 98), ('L', 'Q', 113), ('L', 'R', 102),
    ('L', 'S', 145), ('L', 'T', 92), ('L', 'V', 32), ('L', 'W', 61), ('L', 'Y', 36),
    ('M', 'N', 142), ('M', 'P', 87), ('M', 'Q', 101), ('M', 'R', 91), ('M', 'S', 135),
    ('M', 'T', 81), ('M', 'V', 21), ('M', 'W', 67), ('M', 'Y', 36),
    ('N', 'P', 91), ('N', 'Q', 46), ('N', 'R', 86), ('N', 'S', 46), ('N', 'T', 65),
    ('N', 'V', 133), ('N', 'W', 174), ('N', 'Y', 143),
    ('P', 'Q', 76), ('P', 'R', 103), ('P', 'S', 74), ('P', 'T', 38), ('P', 'V', 68),
    ('P', 'W', 147), ('P', 'Y', 110),
    ('Q', 'R', 43), ('Q', 'S', 68), ('Q', 'T', 42), ('Q', 'V', 96), ('Q', 'W', 130),
    ('Q', 'Y', 99),
    ('R', 'S', 110), ('R', 'T', 71), ('R', 'V', 96), ('R', 'W', 101), ('R', 'Y', 77),
    ('S', 'T', 58), ('S', 'V', 64), ('S', 'W', 177), ('S', 'Y', 144),
    ('T', 'V', 69), ('T', 'W', 128), ('T', 'Y', 92),
    ('V', 'W', 88), ('V', 'Y', 55),
    ('W', 'Y', 37),
];

static MATRIX: [[u16; N]; N] = expand(&HALF_MATRIX);

const fn index_of(code: char) -> usize {
    match AminoAcid::from_one_letter(code) {
        Some(aa) => aa.index(),
        None => panic!("half-matrix contains a non-standard one-letter code"),
    }
}

/// Mirrors `half` into both orderings and zeroes the diagonal.
///
/// Fails const evaluation if a pair is repeated, a self-pair is listed, or any
/// cross pair is missing.
const fn expand(half: &[(char, char, u16)]) -> [[u16; N]; N] {
    let mut matrix = [[UNSET; N]; N];

    let mut i = 0;
    while i < N {
        matrix[i][i] = 0;
        i += 1;
    }

    let mut k = 0;
    while k < half.len() {
        let (a, b, distance) = half[k];
        let (i, j) = (index_of(a), index_of(b));
        assert!(i != j, "half-matrix lists a self-pair");
        assert!(matrix[i][j] == UNSET, "half-matrix lists a pair twice");
        assert!(distance != UNSET, "distance collides with the unset marker");
        matrix[i][j] = distance;
        matrix[j][i] = distance;
        k += 1;
    }

    let mut i = 0;
    while i < N {
        let mut j = 0;
        while j < N {
            assert!(matrix[i][j] != UNSET, "half-matrix is missing a pair");
            j += 1;
        }
        i += 1;
    }

    matrix
}

/// Read-only view over the symmetric Grantham matrix.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceTable;

impl DistanceTable {
    /// Directed entries: every ordered pair including self-pairs.
    pub const LEN: usize = N * N;

    /// Looks up the distance between two one-letter codes.
    ///
    /// Returns `None` when either code is outside the 20-letter alphabet.
    /// Matching is exact, so lowercase codes are not found.
    pub fn lookup(x: char, y: char) -> Option<u16> {
        let a = AminoAcid::from_one_letter(x)?;
        let b = AminoAcid::from_one_letter(y)?;
        Some(Self::distance(a, b))
    }

    #[inline]
    pub fn distance(a: AminoAcid, b: AminoAcid) -> u16 {
        MATRIX[a.index()][b.index()]
    }

    pub fn row(aa: AminoAcid) -> &'static [u16; N] {
        &MATRIX[aa.index()]
    }

    pub const fn len() -> usize {
        Self::LEN
    }

    /// All directed entries in row-major canonical order.
    pub fn entries() -> impl Iterator<Item = (AminoAcid, AminoAcid, u16)> {
        AminoAcid::ALL.into_iter().flat_map(|a| {
            AminoAcid::ALL
                .into_iter()
                .map(move |b| (a, b, Self::distance(a, b)))
        })
    }
}
