use std::collections::HashMap;
use std::fs;
use std::path;

use biblatex::{Bibliography, Chunk, Spanned};

use crate::errors::Error;

/// One author of a bib entry, in western name order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// given name(s), e.g. “Donald E.”
    pub first: String,
    /// family name, e.g. “Knuth”
    pub last: String,
}

/// One entry of a `.bib` file, reduced to what the table converter needs:
/// the entry ID, a case-insensitive field map, and the author list in
/// citation order. Instances are built from the output of the external
/// `biblatex` parser and consumed once by the row formatter.
#[derive(Debug, Clone, Default)]
pub struct BibEntry {
    /// entry name, e.g. “DBLP:books/lib/Knuth97”
    pub id: String,
    /// map of fields with lowercase names, e.g. “year” mapped to “1997”
    pub fields: HashMap<String, String>,
    /// parsed “author” field, empty if the entry has none
    pub authors: Vec<Author>,
}

impl BibEntry {
    /// Look up a field by name, ignoring ASCII case.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    /// Build a converter entry from a parsed `biblatex` entry.
    pub fn from_entry(entry: &biblatex::Entry) -> BibEntry {
        let fields = entry
            .fields
            .iter()
            .map(|(name, chunks)| (name.to_ascii_lowercase(), raw_value(chunks)))
            .collect();
        let authors = entry
            .author()
            .unwrap_or_default()
            .into_iter()
            .map(|person| Author {
                first: person.given_name,
                last: person.name,
            })
            .collect();
        BibEntry {
            id: entry.key.clone(),
            fields,
            authors,
        }
    }
}

/// Rebuild a field value close to its source notation. `biblatex` splits
/// data into chunks and strips the braces of verbatim groups; titles in ADS
/// exports come `"{…}"`-wrapped and the row formatter strips exactly that
/// outer layer, so verbatim chunks are re-wrapped here and math chunks get
/// their dollar signs back.
fn raw_value(chunks: &[Spanned<Chunk>]) -> String {
    let mut value = String::new();
    for chunk in chunks {
        match &chunk.v {
            Chunk::Normal(s) => value.push_str(s),
            Chunk::Verbatim(s) => {
                value.push('{');
                value.push_str(s);
                value.push('}');
            }
            Chunk::Math(s) => {
                value.push('$');
                value.push_str(s);
                value.push('$');
            }
        }
    }
    value
}

/// Parse bib source text into converter entries, in declaration order.
pub fn parse_entries(src: &str) -> Result<Vec<BibEntry>, Error> {
    let bibliography = Bibliography::parse(src).map_err(|e| Error::Parse {
        file: None,
        message: e.to_string(),
    })?;
    Ok(bibliography.iter().map(BibEntry::from_entry).collect())
}

/// Read and parse one input file. A path that is not an existing file is
/// reported before any output is touched for it.
pub fn read_entries<P: AsRef<path::Path>>(path: P) -> Result<Vec<BibEntry>, Error> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::MissingInput(path.to_path_buf()));
    }
    let src = fs::read_to_string(path)?;
    parse_entries(&src).map_err(|e| match e {
        Error::Parse { message, .. } => Error::Parse {
            file: Some(path.to_path_buf()),
            message,
        },
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error;

    #[test]
    fn test_field_lookup_is_case_insensitive() {
        let mut entry = BibEntry::default();
        entry.fields.insert("year".to_string(), "1997".to_string());
        assert_eq!(entry.field("Year"), Some("1997"));
        assert_eq!(entry.field("YEAR"), Some("1997"));
        assert_eq!(entry.field("journal"), None);
    }

    #[test]
    fn test_tolkien() -> Result<(), Box<dyn error::Error>> {
        let entries = parse_entries(
            "@book{tolkien1937, author = {Tolkien, J. R. R.}, year = {1937}}",
        )?;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "tolkien1937");
        assert_eq!(entries[0].field("year"), Some("1937"));
        assert_eq!(
            entries[0].authors,
            vec![Author {
                first: "J. R. R.".to_string(),
                last: "Tolkien".to_string(),
            }]
        );
        Ok(())
    }

    #[test]
    fn test_quoted_braces_survive() -> Result<(), Box<dyn error::Error>> {
        let entries = parse_entries(
            r#"@article{x2020, title = "{A Study of X}", pages = {45-50}}"#,
        )?;
        assert_eq!(entries[0].field("title"), Some("{A Study of X}"));
        assert_eq!(entries[0].field("pages"), Some("45-50"));
        assert!(entries[0].authors.is_empty());
        Ok(())
    }

    #[test]
    fn test_parse_failure_becomes_a_crate_error() {
        let err = parse_entries("@article{broken, title = {unclosed").unwrap_err();
        match err {
            Error::Parse { file, message } => {
                assert!(file.is_none());
                assert!(!message.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_declaration_order_is_kept() -> Result<(), Box<dyn error::Error>> {
        let entries = parse_entries(
            "@misc{zulu, year = {1}}\n@misc{alpha, year = {2}}\n@misc{mike, year = {3}}",
        )?;
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["zulu", "alpha", "mike"]);
        Ok(())
    }
}
