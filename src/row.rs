use crate::errors::Error;
use crate::journals::JournalTable;
use crate::types::BibEntry;

/// Header row of the output table. Note the space after each tab; the data
/// rows put their space before the tab instead.
pub const HEADER: &str = "author\t year\t title\t journal\t doi\n";

/// cell separator: every cell ends with a space before the tab
const SEP: &str = " \t";

/// journal metadata rendered as `<first letter>:<value>`, in this order
const JOURNAL_DETAILS: [&str; 4] = ["volume", "number", "pages", "month"];

/// Render one bib entry as one tab-separated table row, terminated by a
/// newline. Cells are authors, year, title, journal with its metadata, and
/// DOI; missing fields degrade to empty cells. The only failure mode is a
/// journal field whose `\code` abbreviation the table does not know.
pub fn format_row(entry: &BibEntry, journals: &JournalTable) -> Result<String, Error> {
    let mut row = String::new();

    // authors: "First Last, First Last" with all punctuation dropped from
    // the names; no quotes at all if the entry has no authors
    if !entry.authors.is_empty() {
        let names: Vec<String> = entry
            .authors
            .iter()
            .map(|author| strip_punctuation(&format!("{} {}", author.first, author.last)))
            .collect();
        row.push('"');
        row.push_str(&names.join(", "));
        row.push('"');
    }
    row.push_str(SEP);

    // year: taken literally
    if let Some(year) = entry.field("year") {
        row.push_str(year);
    }
    row.push_str(SEP);

    // title: first and last character dropped, since titles come wrapped in
    // one layer of braces (unconditional, also on titles without braces)
    if let Some(title) = entry.field("title") {
        let mut inner = title.chars();
        inner.next();
        inner.next_back();
        row.push_str(inner.as_str());
    }
    row.push_str(SEP);

    // journal: name plus v:/n:/p:/m: details, comma-joined, always quoted
    let mut details = Vec::new();
    if let Some(journal) = entry.field("journal") {
        match journal.strip_prefix('\\') {
            Some(code) => {
                // biblatex keeps a trailing space on command tokens like
                // `\apj`, which is not part of the abbreviation code
                let code = code.trim_end();
                let name = journals.resolve(code).ok_or_else(|| Error::UnknownJournal {
                    code: code.to_string(),
                    entry: entry.id.clone(),
                })?;
                details.push(name.to_string());
            }
            None => details.push(journal.to_string()),
        }
    }
    for name in JOURNAL_DETAILS {
        if let Some(value) = entry.field(name) {
            details.push(format!("{}:{}", &name[..1], value));
        }
    }
    row.push('"');
    row.push_str(&details.join(", "));
    row.push('"');
    row.push_str(SEP);

    // doi: taken literally, last cell, no trailing separator
    if let Some(doi) = entry.field("doi") {
        row.push_str(doi);
    }
    row.push('\n');

    Ok(row)
}

/// Drop every ASCII punctuation character, keeping everything else
/// (in particular the spaces between name tokens).
fn strip_punctuation(name: &str) -> String {
    name.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}
