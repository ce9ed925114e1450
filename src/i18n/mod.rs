//! Internationalization (i18n) module: language selection and lookup.
//!
//! # Architecture
//!
//! - `resources`: Ordered registry of translation bundles; its keys are the supported languages
//! - `runtime`: Active-language state and translation lookup
//! - `display_names`: Human-readable language names in a negotiated display locale
//! - `options`: The language selector surface (current, supported, names, change)
//!
//! # Example
//!
//! ```rust,ignore
//! use language_options::i18n::language_options;
//!
//! let options = language_options()?;
//! for code in options.supported_languages() {
//!     println!("{} - {}", code, options.language_name(code)?);
//! }
//!
//! if !options.change_language("en") {
//!     // not supported; nothing changed
//! }
//! ```

mod display_names;
mod error;
mod options;
mod resources;
mod runtime;

pub use display_names::DisplayNameResolver;
pub use error::{I18nError, Result};
pub use options::{language_options, LanguageEntry, LanguageOptions, DEFAULT_LANGUAGE};
pub use resources::{LocaleResource, ResourceRegistry};
pub use runtime::LocalizationRuntime;
