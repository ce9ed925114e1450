//! Localization runtime: active-language state and translation lookup.
//!
//! The runtime owns a [`ResourceRegistry`] and the current language. It is
//! an ordinary value so it can be constructed per test or injected into
//! callers; [`LocalizationRuntime::global`] provides the process-wide
//! instance the UI reads from.

use crate::config::Config;
use crate::i18n::error::{I18nError, Result};
use crate::i18n::options::DEFAULT_LANGUAGE;
use crate::i18n::ResourceRegistry;
use regex::{Captures, Regex};
use serde_json::Value;
use std::sync::{OnceLock, PoisonError, RwLock};
use tracing::{debug, info, warn};
use unic_langid::LanguageIdentifier;

/// Process-wide runtime instance (installed once, or initialized lazily)
static GLOBAL: OnceLock<LocalizationRuntime> = OnceLock::new();

/// `{{name}}` placeholder pattern (cached)
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Holds the active language and the translation bundles.
#[derive(Debug)]
pub struct LocalizationRuntime {
    resources: ResourceRegistry,
    fallback: String,
    language: RwLock<Option<String>>,
}

impl LocalizationRuntime {
    /// Create a runtime with no active language.
    ///
    /// # Arguments
    /// * `resources` - The translation bundles
    /// * `fallback` - Language used for lookups when a key is missing or no
    ///   language is active
    pub fn new(resources: ResourceRegistry, fallback: impl Into<String>) -> Self {
        Self {
            resources,
            fallback: fallback.into(),
            language: RwLock::new(None),
        }
    }

    /// Set the initial active language.
    pub fn with_language(self, code: impl Into<String>) -> Self {
        *self.language.write().unwrap_or_else(PoisonError::into_inner) = Some(code.into());
        self
    }

    /// Build a runtime from configuration.
    ///
    /// Resources come from `LOCALES_DIR` when set, otherwise from the
    /// compiled-in bundles. The initial language is `INITIAL_LANGUAGE` when
    /// set, otherwise the system locale (when detection is enabled and it
    /// matches a supported language), otherwise none.
    pub fn from_config(config: &Config) -> Result<Self> {
        let resources = match &config.locales_dir {
            Some(dir) => ResourceRegistry::from_dir(dir)?,
            None => ResourceRegistry::embedded().clone(),
        };

        let initial = match &config.initial_language {
            Some(code) => {
                if !resources.contains(code) {
                    warn!("INITIAL_LANGUAGE '{}' has no translation bundle", code);
                }
                Some(code.clone())
            }
            None if config.detect_system_locale => {
                sys_locale::get_locale().and_then(|locale| match_supported(&locale, &resources))
            }
            None => None,
        };

        let runtime = Self::new(resources, config.default_language.clone());
        match initial {
            Some(code) => {
                info!("Starting with language '{}'", code);
                Ok(runtime.with_language(code))
            }
            None => Ok(runtime),
        }
    }

    /// Install `runtime` as the process-wide instance.
    ///
    /// # Errors
    /// Returns `AlreadyInstalled` if a runtime was installed before, or if
    /// [`global`](Self::global) already initialized the default one.
    pub fn install(runtime: Self) -> Result<&'static Self> {
        GLOBAL
            .set(runtime)
            .map_err(|_| I18nError::AlreadyInstalled)?;
        Ok(Self::global())
    }

    /// Get the process-wide runtime.
    ///
    /// Falls back to a runtime over the compiled-in bundles (no active
    /// language, fallback `"vn"`) when none was installed.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(|| Self::new(ResourceRegistry::embedded().clone(), DEFAULT_LANGUAGE))
    }

    /// Get the active language, if any.
    pub fn language(&self) -> Option<String> {
        self.language
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Get the fallback language.
    pub fn fallback_language(&self) -> &str {
        &self.fallback
    }

    /// Switch the active language. Last writer wins.
    ///
    /// The runtime does not check `code` against its resources; callers that
    /// need validation go through `LanguageOptions::change_language`.
    pub fn change_language(&self, code: &str) {
        let mut language = self.language.write().unwrap_or_else(PoisonError::into_inner);
        let previous = language.replace(code.to_string());
        info!(
            "Language changed: {} -> {}",
            previous.as_deref().unwrap_or("<unset>"),
            code
        );
    }

    /// Get the resource registry.
    pub fn resources(&self) -> &ResourceRegistry {
        &self.resources
    }

    /// Translate a dot-separated key (e.g., "settings.language").
    ///
    /// Looks in the active language's bundle, then the fallback language's
    /// bundle, and returns the key itself when neither has it.
    pub fn translate(&self, key: &str) -> String {
        self.translate_with(key, &[])
    }

    /// Translate a key and interpolate `{{name}}` placeholders from `args`.
    ///
    /// Placeholders without a matching argument are left as they are.
    pub fn translate_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        let active = self.language();
        let candidates = active
            .as_deref()
            .into_iter()
            .chain(std::iter::once(self.fallback.as_str()));

        for code in candidates {
            if let Some(template) = self
                .resources
                .bundle(code)
                .and_then(|bundle| lookup(bundle, key))
            {
                return interpolate(template, args);
            }
        }

        debug!("Missing translation for key '{}'", key);
        key.to_string()
    }
}

/// Resolve a dot-separated path to a string leaf.
fn lookup<'a>(bundle: &'a Value, key: &str) -> Option<&'a str> {
    key.split('.')
        .try_fold(bundle, |node, segment| node.get(segment))
        .and_then(Value::as_str)
}

fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let regex = PLACEHOLDER_REGEX.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z0-9_.]+)\s*\}\}").expect("Invalid placeholder regex")
    });

    regex
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            args.iter()
                .find(|(arg, _)| *arg == name)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Match a system locale such as "en-US" against the supported codes:
/// exact match first, then by language subtag.
fn match_supported(locale: &str, resources: &ResourceRegistry) -> Option<String> {
    if resources.contains(locale) {
        return Some(locale.to_string());
    }

    let id: LanguageIdentifier = locale.parse().ok()?;
    let language = id.language.as_str();
    resources
        .codes()
        .into_iter()
        .find(|code| *code == language)
        .map(str::to_string)
}
