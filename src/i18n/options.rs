//! Language options: the language selector surface used by the UI.
//!
//! `LanguageOptions` reads the current language from a
//! [`LocalizationRuntime`], lists the languages its resources support,
//! resolves their display names and switches the active language.

use crate::i18n::error::Result;
use crate::i18n::{DisplayNameResolver, LocalizationRuntime};
use serde::Serialize;

/// Language reported while the runtime has none, and the default argument
/// of the name and change operations. Independent of the runtime's
/// translation fallback.
pub const DEFAULT_LANGUAGE: &str = "vn";

/// Read/query/update surface over a runtime's language state.
///
/// The display-name resolver is built once, from the supported languages,
/// when the accessor is constructed.
#[derive(Debug, Clone, Copy)]
pub struct LanguageOptions<'a> {
    runtime: &'a LocalizationRuntime,
    names: DisplayNameResolver,
}

/// One row of a language selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageEntry {
    /// Language code (e.g., "en")
    pub code: String,

    /// Display name in the resolver's display locale
    pub name: String,

    /// Whether this is the language currently reported as active
    pub current: bool,
}

/// Get language options bound to the process-wide runtime.
pub fn language_options() -> Result<LanguageOptions<'static>> {
    LanguageOptions::new(LocalizationRuntime::global())
}

impl<'a> LanguageOptions<'a> {
    /// Create language options over `runtime`.
    ///
    /// # Errors
    /// Propagates resolver construction errors for the supported codes.
    pub fn new(runtime: &'a LocalizationRuntime) -> Result<Self> {
        let names = DisplayNameResolver::new(&runtime.resources().codes())?;
        Ok(Self { runtime, names })
    }

    /// Get the active language, or [`DEFAULT_LANGUAGE`] when no language is
    /// active.
    pub fn current_language(&self) -> String {
        self.runtime
            .language()
            .filter(|code| !code.is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
    }

    /// Get the supported language codes in resource order.
    pub fn supported_languages(&self) -> Vec<&'a str> {
        self.runtime.resources().codes()
    }

    /// Get the display name of `code`.
    ///
    /// `code` is not checked against the supported languages; unknown but
    /// well-formed codes resolve to the code itself.
    ///
    /// # Errors
    /// Returns `InvalidLanguageCode` if `code` is not a valid language identifier.
    pub fn language_name(&self, code: &str) -> Result<String> {
        self.names.of(code)
    }

    /// Get the display name of [`DEFAULT_LANGUAGE`].
    pub fn default_language_name(&self) -> Result<String> {
        self.language_name(DEFAULT_LANGUAGE)
    }

    /// Switch the active language to `code`.
    ///
    /// # Returns
    /// * `true` if `code` is supported and the runtime was switched
    /// * `false` if `code` is not supported; nothing is changed
    pub fn change_language(&self, code: &str) -> bool {
        if !self.runtime.resources().contains(code) {
            return false;
        }
        self.runtime.change_language(code);
        true
    }

    /// Switch the active language to [`DEFAULT_LANGUAGE`].
    pub fn change_to_default(&self) -> bool {
        self.change_language(DEFAULT_LANGUAGE)
    }

    /// Get every supported language with its display name, in resource order.
    ///
    /// # Errors
    /// Propagates name resolution errors.
    pub fn entries(&self) -> Result<Vec<LanguageEntry>> {
        let current = self.current_language();
        let mut entries = Vec::new();
        for code in self.supported_languages() {
            entries.push(LanguageEntry {
                code: code.to_string(),
                name: self.language_name(code)?,
                current: code == current,
            });
        }
        Ok(entries)
    }

    /// Get the display resolver's locale.
    pub fn display_locale(&self) -> &'static str {
        self.names.display_locale()
    }
}
