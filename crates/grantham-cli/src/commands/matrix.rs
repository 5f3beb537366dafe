use crate::config::models::AppConfig;
use crate::error::Result;
use grantham::core::config::MatrixFormat;
use grantham::core::matrix::table::DistanceTable;
use grantham::core::models::amino_acid::AminoAcid;
use std::io::{self, Write};
use tracing::info;

pub fn run(config: &AppConfig) -> Result<()> {
    let format = config.display.matrix_format;
    info!(
        "Writing the {n}x{n} Grantham matrix as {}",
        format,
        n = AminoAcid::COUNT
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        MatrixFormat::Table => write_table(&mut out),
        MatrixFormat::Csv => write_csv(&mut out),
    }
}

pub fn write_table<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "   ")?;
    for aa in AminoAcid::ALL {
        write!(out, "{:>4}", aa.one_letter())?;
    }
    writeln!(out)?;

    for a in AminoAcid::ALL {
        write!(out, "{:<3}", a.one_letter())?;
        for d in DistanceTable::row(a) {
            write!(out, "{:>4}", d)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_csv<W: Write>(out: &mut W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);

    let mut header = vec![String::new()];
    header.extend(AminoAcid::ALL.iter().map(|aa| aa.one_letter().to_string()));
    writer.write_record(&header)?;

    for a in AminoAcid::ALL {
        let mut record = vec![a.one_letter().to_string()];
        record.extend(DistanceTable::row(a).iter().map(u16::to_string));
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}
