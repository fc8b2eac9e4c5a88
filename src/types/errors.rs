use std::fmt;

// === ValidationError ===

/// Errors produced while validating shorten-request input.
#[derive(Debug, PartialEq)]
pub enum ValidationError {
    /// The input could not be normalized into an absolute URL.
    InvalidUrl(String),
    /// The custom alias does not match `[A-Za-z0-9_]{5,30}`.
    InvalidAlias(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidUrl(input) => write!(f, "Invalid URL: {}", input),
            ValidationError::InvalidAlias(alias) => write!(f, "Invalid alias format: {}", alias),
        }
    }
}

impl std::error::Error for ValidationError {}

// === ShortenError ===

/// Errors produced by the shortening call.
#[derive(Debug, PartialEq)]
pub enum ShortenError {
    /// The request never completed (DNS, TLS, connectivity).
    Network(String),
    /// The service answered with an error message.
    Service(String),
    /// The response body carried neither a short URL nor an error message.
    UnexpectedResponse(String),
}

impl fmt::Display for ShortenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortenError::Network(msg) => write!(f, "Network error: {}", msg),
            ShortenError::Service(msg) => write!(f, "Service error: {}", msg),
            ShortenError::UnexpectedResponse(msg) => {
                write!(f, "Unexpected response from service: {}", msg)
            }
        }
    }
}

impl std::error::Error for ShortenError {}

// === HistoryError ===

/// Errors related to the shortening history store.
#[derive(Debug, PartialEq)]
pub enum HistoryError {
    /// Database operation failed.
    DatabaseError(String),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::DatabaseError(msg) => write!(f, "History database error: {}", msg),
        }
    }
}

impl std::error::Error for HistoryError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, PartialEq)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === QrRenderError ===

/// Errors related to QR code rendering.
#[derive(Debug, PartialEq)]
pub enum QrRenderError {
    /// The data could not be encoded as a QR code.
    Encoding(String),
}

impl fmt::Display for QrRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QrRenderError::Encoding(msg) => write!(f, "QR encoding failed: {}", msg),
        }
    }
}

impl std::error::Error for QrRenderError {}

// === AppError ===

/// Application-level error unifying the failure kinds of the shorten flow.
#[derive(Debug, PartialEq)]
pub enum AppError {
    Validation(ValidationError),
    Shorten(ShortenError),
    History(HistoryError),
    Settings(SettingsError),
    /// Database open or filesystem setup failed.
    Database(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(e) => write!(f, "{}", e),
            AppError::Shorten(e) => write!(f, "{}", e),
            AppError::History(e) => write!(f, "{}", e),
            AppError::Settings(e) => write!(f, "{}", e),
            AppError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e)
    }
}

impl From<ShortenError> for AppError {
    fn from(e: ShortenError) -> Self {
        AppError::Shorten(e)
    }
}

impl From<HistoryError> for AppError {
    fn from(e: HistoryError) -> Self {
        AppError::History(e)
    }
}

impl From<SettingsError> for AppError {
    fn from(e: SettingsError) -> Self {
        AppError::Settings(e)
    }
}
