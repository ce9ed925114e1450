//! Integration tests for language options
//!
//! These tests exercise the public API end to end: resources feeding a
//! runtime, the selector surface over it, and the process-wide instance.

use language_options::config::Config;
use language_options::i18n::{
    language_options, I18nError, LanguageOptions, LocalizationRuntime, ResourceRegistry,
    DEFAULT_LANGUAGE,
};
use proptest::prelude::*;
use serial_test::serial;
use tempfile::TempDir;

// ==================== Test Helpers ====================

/// Runtime over the compiled-in bundles with no active language
fn embedded_runtime() -> LocalizationRuntime {
    LocalizationRuntime::new(ResourceRegistry::embedded().clone(), DEFAULT_LANGUAGE)
}

/// Write a locales directory with one bundle per code
fn write_locales(codes: &[&str]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for code in codes {
        let bundle = format!(r#"{{"settings": {{"language": "language-{}"}}}}"#, code);
        std::fs::write(dir.path().join(format!("{}.json", code)), bundle)
            .expect("Failed to write bundle");
    }
    dir
}

// ==================== Selector Workflow Tests ====================

#[test]
fn test_documented_example() {
    let runtime = embedded_runtime();
    let options = LanguageOptions::new(&runtime).expect("Should build options");

    assert_eq!(options.supported_languages(), vec!["en", "vn"]);
    assert_eq!(options.current_language(), "vn");

    assert!(options.change_language("en"));
    assert_eq!(options.current_language(), "en");

    assert!(!options.change_language("fr"));
    assert_eq!(options.current_language(), "en");
}

#[test]
fn test_names_for_embedded_languages() {
    let runtime = embedded_runtime();
    let options = LanguageOptions::new(&runtime).expect("Should build options");

    assert_eq!(options.language_name("en").unwrap(), "English");
    // "vn" has no name in the English display locale
    assert_eq!(options.default_language_name().unwrap(), "vn");
}

#[test]
fn test_translation_follows_language_switch() {
    let runtime = embedded_runtime();
    let options = LanguageOptions::new(&runtime).expect("Should build options");

    assert_eq!(runtime.translate("common.save"), "Lưu");
    assert!(options.change_language("en"));
    assert_eq!(runtime.translate("common.save"), "Save");
    assert_eq!(
        runtime.translate_with("settings.current", &[("language", "English")]),
        "Current language: English"
    );
}

#[test]
fn test_rejected_change_keeps_translations() {
    let runtime = embedded_runtime();
    let options = LanguageOptions::new(&runtime).expect("Should build options");

    assert!(options.change_language("en"));
    assert!(!options.change_language("de"));
    assert_eq!(runtime.translate("common.cancel"), "Cancel");
}

// ==================== Configuration Tests ====================

#[test]
fn test_runtime_from_locales_dir() {
    let dir = write_locales(&["vn", "en", "de"]);
    let config = Config {
        default_language: "en".to_string(),
        initial_language: Some("de".to_string()),
        locales_dir: Some(dir.path().to_path_buf()),
        detect_system_locale: false,
    };

    let runtime = LocalizationRuntime::from_config(&config).expect("Should build runtime");
    let options = LanguageOptions::new(&runtime).expect("Should build options");

    assert_eq!(options.supported_languages(), vec!["de", "en", "vn"]);
    assert_eq!(options.current_language(), "de");
    assert_eq!(runtime.translate("settings.language"), "language-de");
    assert_eq!(options.language_name("de").unwrap(), "German");
}

#[test]
fn test_configured_fallback_only_affects_translation() {
    let dir = write_locales(&["en", "vn"]);
    let config = Config {
        default_language: "en".to_string(),
        initial_language: None,
        locales_dir: Some(dir.path().to_path_buf()),
        detect_system_locale: false,
    };

    let runtime = LocalizationRuntime::from_config(&config).expect("Should build runtime");
    let options = LanguageOptions::new(&runtime).expect("Should build options");
    assert_eq!(options.current_language(), "vn");
    assert_eq!(runtime.translate("settings.language"), "language-en");
}

#[test]
fn test_unsupported_configured_fallback_is_not_reported() {
    let config = Config {
        default_language: "fr".to_string(),
        initial_language: None,
        locales_dir: None,
        detect_system_locale: false,
    };

    let runtime = LocalizationRuntime::from_config(&config).expect("Should build runtime");
    let options = LanguageOptions::new(&runtime).expect("Should build options");

    assert_eq!(options.current_language(), "vn");
    let entries = options.entries().expect("Should list entries");
    assert!(entries.iter().any(|entry| entry.current));

    assert!(options.change_to_default());
    assert_eq!(options.current_language(), "vn");
}

#[test]
fn test_invalid_locale_file_name_is_rejected() {
    let dir = write_locales(&["en"]);
    std::fs::write(dir.path().join("not a code.json"), "{}").unwrap();

    let result = ResourceRegistry::from_dir(dir.path());
    assert!(matches!(result, Err(I18nError::InvalidLanguageCode(_))));
}

// ==================== Process-wide Runtime Tests ====================

#[test]
#[serial]
fn test_global_options_share_state() {
    let first = language_options().expect("Should build options");
    let second = language_options().expect("Should build options");

    assert!(first.change_language("en"));
    assert_eq!(second.current_language(), "en");
    assert_eq!(LocalizationRuntime::global().language().as_deref(), Some("en"));

    assert!(second.change_to_default());
    assert_eq!(first.current_language(), "vn");
}

#[test]
#[serial]
fn test_install_after_global_is_rejected() {
    let _ = LocalizationRuntime::global();
    let result = LocalizationRuntime::install(embedded_runtime());
    assert!(matches!(result, Err(I18nError::AlreadyInstalled)));
}

// ==================== Property Tests ====================

proptest! {
    #[test]
    fn prop_supported_change_is_applied(index in 0usize..3) {
        let codes = ["en", "vn", "fr"];
        let dir = write_locales(&codes);
        let resources = ResourceRegistry::from_dir(dir.path()).unwrap();
        let runtime = LocalizationRuntime::new(resources, DEFAULT_LANGUAGE);
        let options = LanguageOptions::new(&runtime).unwrap();

        prop_assert!(options.change_language(codes[index]));
        prop_assert_eq!(options.current_language(), codes[index]);
    }

    #[test]
    fn prop_unsupported_change_is_ignored(code in "[a-zA-Z-]{0,8}", start in prop::bool::ANY) {
        prop_assume!(code != "en" && code != "vn");

        let runtime = embedded_runtime();
        let options = LanguageOptions::new(&runtime).unwrap();
        if start {
            prop_assert!(options.change_language("en"));
        }
        let before = options.current_language();

        prop_assert!(!options.change_language(&code));
        prop_assert_eq!(options.current_language(), before);
    }

    #[test]
    fn prop_supported_languages_are_stable(changes in prop::collection::vec("[a-z]{2}", 0..5)) {
        let runtime = embedded_runtime();
        let options = LanguageOptions::new(&runtime).unwrap();
        let before = options.supported_languages();

        for code in &changes {
            let _ = options.change_language(code);
        }

        prop_assert_eq!(options.supported_languages(), before);
    }
}
