//! Resource registry: translation bundles keyed by language code.
//!
//! The registry is the single source of truth for which languages the
//! application supports. Its key order is the order in which languages are
//! offered to the user. A compiled-in registry (`en`, `vn`) is built lazily
//! with `OnceLock`; alternative registries can be loaded from a directory of
//! `<code>.json` files.

use crate::i18n::error::{I18nError, Result};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;
use unic_langid::LanguageIdentifier;

/// Compiled-in bundles, in the order they are offered.
const EMBEDDED_SOURCES: &[(&str, &str)] = &[
    ("en", include_str!("../../locales/en.json")),
    ("vn", include_str!("../../locales/vn.json")),
];

/// One language entry: its code and its translation bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleResource {
    /// Language code as used by the application (e.g., "en", "vn")
    pub code: String,

    /// JSON object tree of translation strings
    pub bundle: Value,
}

/// Ordered, validated mapping of language code to translation bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceRegistry {
    languages: Vec<LocaleResource>,
}

/// Compiled-in registry instance (initialized lazily)
static EMBEDDED: OnceLock<ResourceRegistry> = OnceLock::new();

impl ResourceRegistry {
    /// Get the compiled-in resource registry.
    ///
    /// # Panics
    /// Panics if the bundles under `locales/` are not valid. They are
    /// compiled into the binary and covered by tests, so this indicates a
    /// build error rather than a runtime condition.
    pub fn embedded() -> &'static ResourceRegistry {
        EMBEDDED.get_or_init(|| {
            let entries = EMBEDDED_SOURCES
                .iter()
                .map(|(code, source)| {
                    let bundle: Value = serde_json::from_str(source)
                        .expect("Embedded locale bundle should be valid JSON");
                    (code.to_string(), bundle)
                })
                .collect();

            ResourceRegistry::from_entries(entries)
                .expect("Embedded locale bundles should form a valid registry")
        })
    }

    /// Build a registry from `(code, bundle)` pairs, keeping their order.
    ///
    /// # Errors
    /// * `EmptyRegistry` if `entries` is empty
    /// * `InvalidLanguageCode` if a code is not a valid language identifier
    /// * `DuplicateLanguage` if a code appears more than once
    /// * `InvalidBundle` if a bundle is not a JSON object
    pub fn from_entries(entries: Vec<(String, Value)>) -> Result<Self> {
        if entries.is_empty() {
            return Err(I18nError::EmptyRegistry);
        }

        let mut seen = HashSet::new();
        let mut languages = Vec::with_capacity(entries.len());

        for (code, bundle) in entries {
            if code.is_empty() || code.parse::<LanguageIdentifier>().is_err() {
                return Err(I18nError::InvalidLanguageCode(code));
            }
            if !seen.insert(code.clone()) {
                return Err(I18nError::DuplicateLanguage(code));
            }
            if !bundle.is_object() {
                return Err(I18nError::InvalidBundle(code));
            }
            languages.push(LocaleResource { code, bundle });
        }

        Ok(Self { languages })
    }

    /// Load every `*.json` file in `dir`; the file stem is the language code.
    ///
    /// Languages are ordered by code so the result does not depend on the
    /// directory listing order.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let read_error = |path: &Path, source| I18nError::ReadResources {
            path: path.to_path_buf(),
            source,
        };

        let mut entries = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| read_error(dir, e))? {
            let path = entry.map_err(|e| read_error(dir, e))?.path();

            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(code) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            let source = fs::read_to_string(&path).map_err(|e| read_error(path.as_path(), e))?;
            let bundle: Value =
                serde_json::from_str(&source).map_err(|e| I18nError::ParseResources {
                    path: path.clone(),
                    source: e,
                })?;

            entries.push((code.to_string(), bundle));
        }

        entries.sort_by(|a, b| a.0.cmp(&b.0));
        debug!(
            "Loaded {} locale bundles from {}",
            entries.len(),
            dir.display()
        );

        Self::from_entries(entries)
    }

    /// Get all language codes in registry order.
    pub fn codes(&self) -> Vec<&str> {
        self.languages.iter().map(|lang| lang.code.as_str()).collect()
    }

    /// Check whether `code` is one of the registry's keys (exact match).
    pub fn contains(&self, code: &str) -> bool {
        self.languages.iter().any(|lang| lang.code == code)
    }

    /// Get the translation bundle for `code`.
    pub fn bundle(&self, code: &str) -> Option<&Value> {
        self.languages
            .iter()
            .find(|lang| lang.code == code)
            .map(|lang| &lang.bundle)
    }

    /// Number of languages in the registry.
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Always `false` for a constructed registry; provided for completeness.
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
