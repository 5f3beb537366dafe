use crate::core::matrix::classes::SubstitutionClass;
use crate::core::matrix::table::DistanceTable;
use crate::core::models::codes::{self, CodeError};
use tracing::{debug, instrument, warn};

/// Result of comparing a wildtype selection with a mutant selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub wildtype: String,  // Selection as shown to the user (e.g. "Ala")
    pub mutant: String,    // Selection as shown to the user (e.g. "Cys")
    pub wildtype_code: char,
    pub mutant_code: char,
    pub score: Option<u16>, // None on a table miss
}

impl Comparison {
    pub fn is_found(&self) -> bool {
        self.score.is_some()
    }

    pub fn class(&self) -> Option<SubstitutionClass> {
        self.score.map(SubstitutionClass::from_distance)
    }
}

/// Converts both selections to one-letter codes and looks up their distance.
///
/// An unknown selection is an error; a table miss is not, and is reported
/// through [`Comparison::score`] being `None`.
#[instrument(level = "debug", name = "compare_workflow")]
pub fn run(wildtype: &str, mutant: &str) -> Result<Comparison, CodeError> {
    let wildtype_code = codes::to_one_letter(wildtype)?;
    let mutant_code = codes::to_one_letter(mutant)?;
    debug!(
        "Resolved selections to one-letter codes {} -> {}",
        wildtype_code, mutant_code
    );

    let score = DistanceTable::lookup(wildtype_code, mutant_code);
    match score {
        Some(s) => debug!("Grantham distance {} -> {} is {}", wildtype_code, mutant_code, s),
        None => warn!(
            "No Grantham distance for {} -> {}",
            wildtype_code, mutant_code
        ),
    }

    Ok(Comparison {
        wildtype: wildtype.to_string(),
        mutant: mutant.to_string(),
        wildtype_code,
        mutant_code,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::codes::THREE_LETTER_CODES;

    #[test]
    fn ala_to_cys_scores_195() {
        let result = run("Ala", "Cys").unwrap();
        assert_eq!(result.wildtype_code, 'A');
        assert_eq!(result.mutant_code, 'C');
        assert_eq!(result.score, Some(195));
        assert_eq!(result.class(), Some(SubstitutionClass::Radical));
    }

    #[test]
    fn identical_selections_score_zero() {
        let result = run("Trp", "Trp").unwrap();
        assert_eq!(result.score, Some(0));
        assert_eq!(result.class(), Some(SubstitutionClass::Conservative));
    }

    #[test]
    fn every_selectable_pair_is_found() {
        for wt in THREE_LETTER_CODES {
            for mu in THREE_LETTER_CODES {
                let result = run(wt, mu).unwrap();
                assert!(result.is_found(), "{} -> {}", wt, mu);
            }
        }
    }

    #[test]
    fn direction_does_not_change_the_score() {
        let forward = run("Ile", "Leu").unwrap();
        let reverse = run("Leu", "Ile").unwrap();
        assert_eq!(forward.score, Some(5));
        assert_eq!(forward.score, reverse.score);
    }

    #[test]
    fn selections_are_preserved_for_display() {
        let result = run("Trp", "Tyr").unwrap();
        assert_eq!(result.wildtype, "Trp");
        assert_eq!(result.mutant, "Tyr");
        assert_eq!(result.score, Some(37));
    }

    #[test]
    fn unknown_selection_is_an_error() {
        assert_eq!(
            run("Ala", "Xaa"),
            Err(CodeError::UnknownThreeLetter("Xaa".to_string()))
        );
        assert_eq!(
            run("Sec", "Ala"),
            Err(CodeError::UnknownThreeLetter("Sec".to_string()))
        );
    }
}
