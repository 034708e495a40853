use thiserror::Error;

use crate::time::TimeUnit;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The word table has no forms for the requested unit
    #[error("no word forms configured for unit \"{0}\"")]
    MissingWordForms(TimeUnit),

    #[error("unknown language \"{0}\"")]
    UnknownLanguage(String),

    #[error("unknown time unit \"{0}\"")]
    UnknownUnit(String),

    #[error("invalid date format \"{0}\"")]
    InvalidDateFormat(String),
}
