use std::error;
use std::fmt;
use std::io;
use std::path;

// Represents an error that happened while converting one input file.
#[derive(Debug)]
pub enum Error {
    /// the named input file does not exist on disk
    MissingInput(path::PathBuf),
    /// the external parser rejected the source
    Parse {
        file: Option<path::PathBuf>,
        message: String,
    },
    /// a journal field referenced an abbreviation code the table does not know
    UnknownJournal { code: String, entry: String },
    /// reading an input or writing the output table failed
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput(path) => {
                write!(f, "the file specified does not exist: {}", path.display())
            }
            Self::Parse { file, message } => match file {
                Some(path) => {
                    write!(f, "cannot parse bib file {}: {}", path.display(), message)
                }
                None => write!(f, "cannot parse bib source: {message}"),
            },
            Self::UnknownJournal { code, entry } => {
                write!(
                    f,
                    "unknown journal abbreviation '\\{code}' in entry '{entry}'"
                )
            }
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
