use crate::cli::ScoreArgs;
use crate::config::models::AppConfig;
use crate::error::{CliError, Result};
use grantham::core::matrix::classes::SubstitutionClass;
use grantham::core::models::amino_acid::AminoAcid;
use grantham::workflows::compare::{self, Comparison};
use std::io::{self, Write};
use tracing::{info, warn};

/// What the user sees after pressing "Calculate".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreMessage {
    Success(String),
    Warning(String),
}

pub fn run(args: ScoreArgs, config: &AppConfig) -> Result<()> {
    let wildtype = select(args.wildtype, config.display.default_wildtype, "wildtype")?;
    let mutant = select(args.mutant, config.display.default_mutant, "mutant")?;
    info!("Scoring substitution {} -> {}", wildtype, mutant);

    let comparison = compare::run(wildtype.three_letter(), mutant.three_letter())?;

    let message = render(&comparison, config.display.classify);
    if let ScoreMessage::Warning(msg) = &message {
        warn!("{}", msg);
    }

    let stdout = io::stdout();
    write_message(&mut stdout.lock(), &message)
}

pub fn write_message<W: Write>(out: &mut W, message: &ScoreMessage) -> Result<()> {
    match message {
        ScoreMessage::Success(msg) => writeln!(out, "✅ {}", msg)?,
        ScoreMessage::Warning(msg) => writeln!(out, "⚠️  {}", msg)?,
    }
    out.flush()?;
    Ok(())
}

fn select(
    given: Option<AminoAcid>,
    configured: Option<AminoAcid>,
    role: &str,
) -> Result<AminoAcid> {
    given.or(configured).ok_or_else(|| {
        CliError::Argument(format!(
            "No {role} amino acid selected. Pass it as an argument or set `default-{role}`. \
             Run 'grantham codes' to list the options."
        ))
    })
}

pub fn render(comparison: &Comparison, classify: bool) -> ScoreMessage {
    match comparison.score {
        Some(score) => {
            let mut msg = format!(
                "Grantham score between {} → {} is: {}",
                comparison.wildtype, comparison.mutant, score
            );
            if classify {
                let class = SubstitutionClass::from_distance(score);
                msg.push_str(&format!(" ({} substitution)", class));
            }
            ScoreMessage::Success(msg)
        }
        None => ScoreMessage::Warning(format!(
            "No Grantham score found for {} → {}.",
            comparison.wildtype_code, comparison.mutant_code
        )),
    }
}
