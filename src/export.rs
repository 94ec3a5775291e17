//! CSV export of sweep series and yearly projection rows

use crate::error::LabResult;
use crate::projection::YearRow;
use crate::sweep::SweepResult;
use csv::Writer;
use std::io;
use std::path::Path;

/// Write one or more labelled sweeps as long-format CSV: `series,x,npv,break_even`
pub fn write_sweeps<W: io::Write>(writer: W, sweeps: &[(&str, &SweepResult)]) -> LabResult<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(["series", "x", "npv", "break_even"])?;

    for (label, sweep) in sweeps {
        let break_even_x = sweep.break_even.map(|b| b.x);
        for (x, npv) in sweep.points() {
            let is_break_even = break_even_x == Some(x);
            csv.write_record([
                label.to_string(),
                x.to_string(),
                npv.to_string(),
                is_break_even.to_string(),
            ])?;
        }
    }

    csv.flush()?;
    Ok(())
}

pub fn write_sweeps_to_path(path: &Path, sweeps: &[(&str, &SweepResult)]) -> LabResult<()> {
    let file = std::fs::File::create(path)?;
    write_sweeps(file, sweeps)
}

/// Write yearly projection rows with a header taken from the row fields
pub fn write_year_rows<W: io::Write>(writer: W, rows: &[YearRow]) -> LabResult<()> {
    let mut csv = Writer::from_writer(writer);
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_year_rows_to_path(path: &Path, rows: &[YearRow]) -> LabResult<()> {
    let file = std::fs::File::create(path)?;
    write_year_rows(file, rows)
}
