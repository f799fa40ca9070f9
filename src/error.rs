//! Error types for locale resolution, number formatting and parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by formatting and parsing operations
#[derive(Error, Debug)]
pub enum LocalizationError {
    /// The locale identifier has no associated rule set
    #[error("unknown locale: {locale}")]
    UnknownLocale { locale: String },

    /// The value is not a finite number (NaN, infinity, or a malformed literal)
    #[error("invalid number: {value}")]
    InvalidNumber { value: String },

    /// A localized number string could not be read back
    #[error("malformed localized number '{input}': {reason}")]
    MalformedNumber { input: String, reason: String },

    /// The locale rule table could not be loaded
    #[error(transparent)]
    LocaleData(#[from] LocaleDataError),
}

/// Errors raised while loading locale rule tables
#[derive(Error, Debug)]
pub enum LocaleDataError {
    #[error("failed to read locale data from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("locale data is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid rules for locale '{locale}': {reason}")]
    Invalid { locale: String, reason: String },
}

impl LocaleDataError {
    pub(crate) fn invalid(locale: &str, reason: impl Into<String>) -> Self {
        LocaleDataError::Invalid {
            locale: locale.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LocalizationError>;
