use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading a word file or cube file
    #[error("File \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing bincoded dictionary
    #[cfg(feature = "bincode")]
    #[error("Dictionary {0} could not be deserialized")]
    DeserializeError(String),

    /// Error serializing dictionary with bincode
    #[cfg(feature = "bincode")]
    #[error("Dictionary could not be serialized to {0}")]
    SerializeError(String),

    /// A board must be at least 2x2
    #[error("Invalid board size {0} (expect at least 2)")]
    InvalidBoardSize(usize),

    /// Not enough cubes to fill every cell of the board
    #[error("Not enough cubes: need {needed}, found {found}")]
    InsufficientCubes { needed: usize, found: usize },

    /// Parsing a row on the board needs one letter per cell
    #[error("Invalid row \"{row}\": length {found}, expect {expected}")]
    InvalidRowLength {
        row: String,
        expected: usize,
        found: usize,
    },

    /// A configuration value could not be parsed
    #[error("Invalid value \"{value}\" for {key}")]
    InvalidConfigValue { key: String, value: String },
}

impl Error {
    /// Returns true if the error describes a game that can not be set up:
    /// a board that is too small, or too few cubes to fill it.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            Error::InvalidBoardSize(_) | Error::InsufficientCubes { .. }
        )
    }
}
