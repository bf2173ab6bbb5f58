//! This crate converts `.bib` files into tab-separated tables in pure, safe rust.
//!
//! `.bib` files are popular in reference management since many resources
//! allow to export metadata in a BibTeχ or BibLaTeχ file. One entry
//! in such a file can look like this:
//!
//! ```tex
//! @article{riess1998,
//!     author  = {Riess, Adam G. and Filippenko, Alexei V.},
//!     title   = "{Observational Evidence from Supernovae}",
//!     journal = {\apj},
//!     year    = {1998},
//!     volume  = {116},
//!     pages   = {1009-1038},
//!     doi     = {10.1086/300499}
//! }
//! ```
//!
//! For every such entry, one table row with five tab-separated cells is
//! produced: authors, year, title, journal with its metadata, and DOI.
//! Journal macros like `\apj` are replaced by the full journal name from a
//! fixed abbreviation table. The entry above becomes:
//!
//! ```text
//! "Adam G Riess, Alexei V Filippenko" 	1998 	Observational Evidence from Supernovae 	"Astrophysical Journal, v:116, p:1009-1038" 	10.1086/300499
//! ```
//!
//! Grammar parsing is delegated to the [`biblatex`] crate; this crate only
//! maps its parsed entries to output rows. The API mirrors that split:
//!
//! ```rust
//! use bib2csv::{parse_entries, write_table, JournalTable};
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let journals = JournalTable::new();
//!     let entries = parse_entries(r#"@book{tolkien1937, author = {Tolkien, J. R. R.}}"#)?;
//!     let mut table = Vec::new();
//!     write_table(&entries, &journals, true, &mut table)?;
//!     print!("{}", String::from_utf8(table)?);
//!     Ok(())
//! }
//! ```
//!
//! The whole input is read and parsed at once; entries are converted in
//! declaration order. There is no deduplication and no incremental output.

mod convert;
mod errors;
mod journals;
mod row;
mod types;

pub use crate::convert::convert_file;
pub use crate::convert::write_table;
pub use crate::errors::Error;
pub use crate::journals::JournalTable;
pub use crate::row::format_row;
pub use crate::row::HEADER;
pub use crate::types::parse_entries;
pub use crate::types::read_entries;
pub use crate::types::Author;
pub use crate::types::BibEntry;
