use std::string::FromUtf8Error;
use thiserror::Error;

use crate::rules::parser::ParserError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error when reading {0}")]
    IoError(#[from] std::io::Error),
    #[error("Output was not valid UTF-8 {0}")]
    Utf8Error(#[from] FromUtf8Error),
    #[error("Unable to initialize logging {0}")]
    LoggerError(#[from] log::SetLoggerError),
    #[error("Parser Error when parsing `{0}`")]
    ParseError(String),
    #[error("The path `{0}` does not exist")]
    FileNotFoundError(String),
    #[error("{0}")]
    IllegalArguments(String),
}

impl<'a> From<nom::Err<ParserError<'a>>> for Error {
    fn from(err: nom::Err<ParserError<'a>>) -> Self {
        let msg = match err {
            nom::Err::Failure(e) | nom::Err::Error(e) => format!("Parsing Error {e}"),
            nom::Err::Incomplete(_) => "More bytes required for parsing".to_string(),
        };
        Error::ParseError(msg)
    }
}
