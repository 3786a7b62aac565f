//
// Errors
//
use std::io;
use std::result;
use std::error;
use std::fmt;
use csv;
use regex;

/// Type alias for pdtb2 errors
pub type Result<X> = result::Result<X, Error>;

/// Wrapper for the kinds of errors occuring while reading or filtering the corpus
#[derive(Debug)]
pub enum Error {
    InvalidRecord(String),
    Pattern(regex::Error),
    SpanList(String),
    Csv(csv::Error),
    IOError(io::Error),
    MissingFile(&'static str, Option<io::Error>),
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidRecord(ref info) => write!(f, "Invalid record: {}", info),
            Error::Pattern(ref err) => write!(f, "Bad semantic class pattern: {}", err),
            Error::SpanList(ref info) => write!(f, "Can't parse span list: {}", info),
            Error::Csv(ref err) => write!(f, "CSV error: {}", err),
            Error::IOError(ref err) => write!(f, "IO error: {}", err),
            Error::MissingFile(ref info, ref opt_err) => {
                write!(f,
                    "The {} must already exist at this point but there was a problem opening it. \
                    Wrong directory? The OS error was: ",
                    info)?;
                if let Some(ref err) = *opt_err { err.fmt(f) }
                else { write!(f, "Unknown") }
            },
            Error::Other(ref info) => write!(f, "{}", info),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::InvalidRecord(_) => None,
            Error::Pattern(ref err) => Some(err),
            Error::SpanList(_) => None,
            Error::Csv(ref err) => Some(err),
            Error::IOError(ref err) => Some(err),
            Error::MissingFile(_, Some(ref err)) => Some(err),
            Error::MissingFile(_, None) => None,
            Error::Other(_) => None,
        }
    }
}
//
// Convert everything else into Error
//
impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::Pattern(err)
    }
}
impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::IOError(err)
    }
}

//
// Convert Error into a general io Error
//
impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        io::Error::new(io::ErrorKind::Other, err)
    }
}
