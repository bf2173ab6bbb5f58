use std::io::Write;
use std::path;

use crate::errors::Error;
use crate::journals::JournalTable;
use crate::row;
use crate::types;
use crate::types::BibEntry;

/// Append one table row per entry to `out`, preceded by the header row if
/// `with_header` is set. Entries are written in the order given; the first
/// formatter error aborts the run (rows already written stay written).
pub fn write_table<W: Write>(
    entries: &[BibEntry],
    journals: &JournalTable,
    with_header: bool,
    out: &mut W,
) -> Result<(), Error> {
    if with_header {
        out.write_all(row::HEADER.as_bytes())?;
    }
    for entry in entries {
        let line = row::format_row(entry, journals)?;
        out.write_all(line.as_bytes())?;
    }
    Ok(())
}

/// Convert one input file into rows appended to `out`. Fails before
/// touching `out` when the input does not exist or does not parse.
pub fn convert_file<P: AsRef<path::Path>, W: Write>(
    path: P,
    journals: &JournalTable,
    with_header: bool,
    out: &mut W,
) -> Result<(), Error> {
    let entries = types::read_entries(path)?;
    write_table(&entries, journals, with_header, out)
}
