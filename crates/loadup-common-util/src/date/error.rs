use thiserror::Error;

/// Errors raised by the date helpers.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("failed to parse date: {0}")]
    Parse(#[from] chrono::ParseError),

    #[error("date string too short: expected at least {expected} characters, got {actual}")]
    TooShort { expected: usize, actual: usize },

    #[error("date string is not all digits: `{0}`")]
    NotNumeric(String),

    #[error("date string is blank")]
    Blank,

    #[error("invalid time zone `{0}`")]
    InvalidTimeZone(String),

    /// A zoned date string has no `|` between the date and the zone.
    #[error("missing `|` zone delimiter in `{0}`")]
    MissingZoneDelimiter(String),

    #[error("date arithmetic out of range")]
    OutOfRange,
}
