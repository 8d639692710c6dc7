//! Semicolon CSV writer with a UTF-8 byte-order mark (what Excel and
//! Power BI expect when opening the file directly)

use crate::error::KpiResult;
use csv::{Terminator, WriterBuilder};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const DELIMITER: u8 = b';';
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write `rows` to any writer: BOM, header from the first row, then records
pub fn write_csv<W: Write, T: Serialize>(mut out: W, rows: &[T]) -> KpiResult<()> {
    out.write_all(UTF8_BOM)?;

    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .terminator(Terminator::CRLF)
        .from_writer(out);

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Create (or truncate) `path` and write `rows` into it
pub fn write_csv_file<T: Serialize>(path: &Path, rows: &[T]) -> KpiResult<()> {
    let file = File::create(path)?;
    write_csv(BufWriter::new(file), rows)
}
