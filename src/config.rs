use anyhow::{bail, Result};
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

use crate::i18n::DEFAULT_LANGUAGE;

#[derive(Debug, Clone)]
pub struct Config {
    // Translation fallback when a key is missing or no language is active
    pub default_language: String,

    // Active language at startup (skips system locale detection)
    pub initial_language: Option<String>,

    // Directory of <code>.json bundles replacing the compiled-in ones
    pub locales_dir: Option<PathBuf>,

    // Use the OS locale as the initial language when it is supported
    pub detect_system_locale: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
            initial_language: None,
            locales_dir: None,
            detect_system_locale: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            default_language: non_empty_var("DEFAULT_LANGUAGE")
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            initial_language: non_empty_var("INITIAL_LANGUAGE"),
            locales_dir: non_empty_var("LOCALES_DIR").map(PathBuf::from),
            detect_system_locale: non_empty_var("DETECT_SYSTEM_LOCALE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        };

        if config
            .default_language
            .parse::<LanguageIdentifier>()
            .is_err()
        {
            bail!(
                "DEFAULT_LANGUAGE is not a valid language code: '{}'",
                config.default_language
            );
        }

        Ok(config)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
