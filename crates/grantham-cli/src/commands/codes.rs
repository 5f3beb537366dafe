use crate::error::Result;
use grantham::core::models::amino_acid::AminoAcid;
use std::io::{self, Write};

pub fn run() -> Result<()> {
    let stdout = io::stdout();
    write_codes(&mut stdout.lock())
}

pub fn write_codes<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{:<6} {:<6} {}", "Code", "Short", "Name")?;
    for aa in AminoAcid::ALL {
        writeln!(
            out,
            "{:<6} {:<6} {}",
            aa.three_letter(),
            aa.one_letter(),
            aa.name()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_all_twenty_options_in_order() {
        let mut buf = Vec::new();
        write_codes(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 21);
        assert!(lines[1].starts_with("Ala"));
        assert!(lines[1].contains("Alanine"));
        assert!(lines[20].starts_with("Tyr"));
    }
}
