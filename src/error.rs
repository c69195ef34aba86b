use std::error;
use std::fmt;
use std::io;

/// Errors raised by table construction and lookups.
#[derive(Debug)]
pub enum Error {
    /// A vertex identifier that is not part of the dictionary the table was built from.
    UnknownVertex(String),
    /// A row written to a growable matrix whose width differs from the one fixed at construction.
    ShapeMismatch { expected: usize, actual: usize },
    /// A similarity-file line with a field count other than three.
    MalformedLine { line: u64, fields: usize },
    /// A similarity value that does not parse as a floating point literal.
    InvalidSimilarity { line: u64, value: String },
    Csv(csv::Error),
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnknownVertex(name) => write!(f, "unknown vertex '{}'", name),
            Error::ShapeMismatch { expected, actual } => {
                write!(f, "row of width {} appended to a matrix of width {}", actual, expected)
            },
            Error::MalformedLine { line, fields } => {
                write!(f, "line {}: expected 3 comma-separated fields, found {}", line, fields)
            },
            Error::InvalidSimilarity { line, value } => {
                write!(f, "line {}: '{}' is not a valid similarity value", line, value)
            },
            Error::Csv(e) => write!(f, "csv error: {}", e),
            Error::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Csv(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::Csv(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
