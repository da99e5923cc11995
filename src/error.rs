use std::{fmt::Display, io};

use thiserror::Error;

#[derive(Error, Debug)]
/// Format error
pub enum FormatError {
    /// The value does not have the shape the encoder requires.
    #[error("TypeError: {0}")]
    Type(String),

    /// The value cannot be represented in the target format.
    #[error("EncodeError: {0}")]
    Encode(String),

    /// The sink rejected a write.
    #[error("IOError: {0}")]
    Io(#[from] io::Error),
}

impl From<serde_json::Error> for FormatError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            FormatError::Io(error.into())
        } else {
            FormatError::Encode(error.to_string())
        }
    }
}

impl serde::ser::Error for FormatError {
    fn custom<T: Display>(msg: T) -> Self {
        FormatError::Encode(msg.to_string())
    }
}

#[cfg(feature = "csv")]
impl From<csv::Error> for FormatError {
    fn from(error: csv::Error) -> Self {
        if !error.is_io_error() {
            return FormatError::Encode(error.to_string());
        }

        match error.into_kind() {
            csv::ErrorKind::Io(error) => FormatError::Io(error),
            kind => FormatError::Encode(format!("{kind:?}")),
        }
    }
}
