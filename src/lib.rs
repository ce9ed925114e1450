//! Language selection for localized front ends.
//!
//! Exposes the current interface language, the supported languages, their
//! display names and a validated language switch over an injectable
//! localization runtime.

pub mod config;
pub mod i18n;
