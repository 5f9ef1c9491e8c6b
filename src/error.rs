use std::result;

use serenity::prelude::SerenityError;
use thiserror::Error as ThisError;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, Clone, Eq, PartialEq, ThisError)]
pub enum Error {
    // The duration token doesn't match the `<integer><unit>` grammar.
    #[error("{0}")]
    InvalidFormat(String),
    // The requested giveaway parameters are unusable (zero duration,
    // zero winners and so on).
    #[error("{0}")]
    InvalidSpec(String),
    // Any I/O failure against the messaging platform.
    #[error("{0}")]
    Platform(String),
    // Errors in the giveaway lifecycle itself.
    #[error("{0}")]
    Giveaway(String),
}

impl From<SerenityError> for Error {
    fn from(err: SerenityError) -> Error {
        let description = err.to_string();
        Error::Platform(description)
    }
}
