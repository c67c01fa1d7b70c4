use thiserror::Error;

/// Errors produced while parsing an episode release date.
#[derive(Debug, Error, PartialEq)]
pub enum ReleaseDateError {
    #[error("Not a YYYY-MM-DD date: '{input}'")]
    Malformed { input: String },
    #[error("Invalid calendar date '{input}': {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Errors produced while resolving a locale for month abbreviations.
#[derive(Debug, Error, PartialEq)]
pub enum LocaleError {
    #[error("Unknown locale: '{name}'")]
    Unknown { name: String },
}
