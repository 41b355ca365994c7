use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Characteristic errors
    #[error("Invalid value for {characteristic}: {value}")]
    InvalidCharacteristicValue {
        characteristic: String,
        value: String,
    },

    #[error("Characteristic is read-only: {0}")]
    ReadOnlyCharacteristic(String),

    #[error("Unsupported characteristic: {0}")]
    UnsupportedCharacteristic(String),

    // Accessory errors
    #[error("Accessory not found: {0}")]
    AccessoryNotFound(String),

    /// Surfaces to the host as "Not Responding".
    #[error("Service communication failure: {0}")]
    CommunicationFailure(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid value error for the named characteristic.
    pub fn invalid_value(characteristic: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidCharacteristicValue {
            characteristic: characteristic.into(),
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
