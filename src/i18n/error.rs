//! Error type shared by the i18n module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building resources or resolving language names.
#[derive(Debug, Error)]
pub enum I18nError {
    /// The code is not a structurally valid language identifier.
    #[error("invalid language code: '{0}'")]
    InvalidLanguageCode(String),

    /// A resource registry must contain at least one language.
    #[error("resource registry contains no languages")]
    EmptyRegistry,

    /// The same code appears twice in a resource registry.
    #[error("duplicate language code in resources: '{0}'")]
    DuplicateLanguage(String),

    /// A translation bundle must be a JSON object.
    #[error("translation bundle for '{0}' is not a JSON object")]
    InvalidBundle(String),

    /// A locales directory or file could not be read.
    #[error("failed to read resources from {path}")]
    ReadResources {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A locale file is not valid JSON.
    #[error("failed to parse resources in {path}")]
    ParseResources {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The process-wide runtime was already installed.
    #[error("localization runtime is already installed")]
    AlreadyInstalled,
}

pub type Result<T> = std::result::Result<T, I18nError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_code_message() {
        let err = I18nError::InvalidLanguageCode("12".to_string());
        assert_eq!(err.to_string(), "invalid language code: '12'");
    }

    #[test]
    fn test_read_error_keeps_source() {
        let err = I18nError::ReadResources {
            path: PathBuf::from("/missing"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/missing"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
