//! Locale display-name resolution.
//!
//! A `DisplayNameResolver` is built from a list of candidate locales. The
//! first candidate with a name table becomes the display locale (English when
//! none has one), and codes are then rendered in that locale: `"en"` is
//! "English" when displaying in English and "Tiếng Anh" when displaying in
//! Vietnamese.

use crate::i18n::error::{I18nError, Result};
use unic_langid::LanguageIdentifier;

type NameTable = &'static [(&'static str, &'static str)];

/// Language names as displayed in English.
const ENGLISH_NAMES: NameTable = &[
    ("ar", "Arabic"),
    ("de", "German"),
    ("en", "English"),
    ("en-GB", "British English"),
    ("en-US", "American English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("hi", "Hindi"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("km", "Khmer"),
    ("ko", "Korean"),
    ("lo", "Lao"),
    ("nl", "Dutch"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("th", "Thai"),
    ("und", "Unknown language"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese"),
    ("zh-Hans", "Simplified Chinese"),
    ("zh-Hant", "Traditional Chinese"),
];

/// Language names as displayed in Vietnamese.
const VIETNAMESE_NAMES: NameTable = &[
    ("ar", "Tiếng Ả Rập"),
    ("de", "Tiếng Đức"),
    ("en", "Tiếng Anh"),
    ("en-GB", "Tiếng Anh (Anh)"),
    ("en-US", "Tiếng Anh (Mỹ)"),
    ("es", "Tiếng Tây Ban Nha"),
    ("fr", "Tiếng Pháp"),
    ("hi", "Tiếng Hindi"),
    ("id", "Tiếng Indonesia"),
    ("it", "Tiếng Italy"),
    ("ja", "Tiếng Nhật"),
    ("km", "Tiếng Khmer"),
    ("ko", "Tiếng Hàn"),
    ("lo", "Tiếng Lào"),
    ("nl", "Tiếng Hà Lan"),
    ("pt", "Tiếng Bồ Đào Nha"),
    ("ru", "Tiếng Nga"),
    ("th", "Tiếng Thái"),
    ("und", "Ngôn ngữ không xác định"),
    ("vi", "Tiếng Việt"),
    ("zh", "Tiếng Trung"),
    ("zh-Hans", "Tiếng Trung (Giản thể)"),
    ("zh-Hant", "Tiếng Trung (Phồn thể)"),
];

/// Region names as displayed in English.
const ENGLISH_REGIONS: NameTable = &[
    ("AU", "Australia"),
    ("BR", "Brazil"),
    ("CA", "Canada"),
    ("CH", "Switzerland"),
    ("CN", "China"),
    ("DE", "Germany"),
    ("ES", "Spain"),
    ("FR", "France"),
    ("GB", "United Kingdom"),
    ("IN", "India"),
    ("JP", "Japan"),
    ("KR", "South Korea"),
    ("MX", "Mexico"),
    ("PT", "Portugal"),
    ("TW", "Taiwan"),
    ("US", "United States"),
    ("VN", "Vietnam"),
];

/// Region names as displayed in Vietnamese.
const VIETNAMESE_REGIONS: NameTable = &[
    ("AU", "Úc"),
    ("BR", "Brazil"),
    ("CA", "Canada"),
    ("CH", "Thụy Sĩ"),
    ("CN", "Trung Quốc"),
    ("DE", "Đức"),
    ("ES", "Tây Ban Nha"),
    ("FR", "Pháp"),
    ("GB", "Vương quốc Anh"),
    ("IN", "Ấn Độ"),
    ("JP", "Nhật Bản"),
    ("KR", "Hàn Quốc"),
    ("MX", "Mexico"),
    ("PT", "Bồ Đào Nha"),
    ("TW", "Đài Loan"),
    ("US", "Hoa Kỳ"),
    ("VN", "Việt Nam"),
];

/// Display locales with language and region tables, keyed by language subtag.
const DISPLAY_LOCALES: &[(&str, NameTable, NameTable)] = &[
    ("en", ENGLISH_NAMES, ENGLISH_REGIONS),
    ("vi", VIETNAMESE_NAMES, VIETNAMESE_REGIONS),
];

/// Display locale used when no candidate has a name table.
const DEFAULT_DISPLAY_LOCALE: (&str, NameTable, NameTable) =
    ("en", ENGLISH_NAMES, ENGLISH_REGIONS);

/// Maps language codes to human-readable names in a negotiated display locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayNameResolver {
    display_locale: &'static str,
    names: NameTable,
    regions: NameTable,
}

impl DisplayNameResolver {
    /// Build a resolver for the given candidate locales.
    ///
    /// # Errors
    /// Returns `InvalidLanguageCode` if any candidate is not a structurally
    /// valid language identifier.
    pub fn new<S: AsRef<str>>(candidates: &[S]) -> Result<Self> {
        let mut negotiated = None;

        for candidate in candidates {
            let id = parse_code(candidate.as_ref())?;
            if negotiated.is_none() {
                negotiated = DISPLAY_LOCALES
                    .iter()
                    .find(|(locale, _, _)| *locale == id.language.as_str())
                    .copied();
            }
        }

        let (display_locale, names, regions) = negotiated.unwrap_or(DEFAULT_DISPLAY_LOCALE);
        Ok(Self {
            display_locale,
            names,
            regions,
        })
    }

    /// Language subtag of the locale names are displayed in.
    pub fn display_locale(&self) -> &'static str {
        self.display_locale
    }

    /// Get the display name of `code`.
    ///
    /// Lookup order: the canonical form of the full code, then its language
    /// subtag (with the region name appended in parentheses when present;
    /// the raw region subtag when the region has no name). A well-formed
    /// code without a known language name resolves to its canonical form.
    ///
    /// # Errors
    /// Returns `InvalidLanguageCode` if `code` is not a structurally valid
    /// language identifier.
    pub fn of(&self, code: &str) -> Result<String> {
        let id = parse_code(code)?;
        let canonical = id.to_string();

        if let Some(name) = self.lookup(&canonical) {
            return Ok(name.to_string());
        }

        let name = match (self.lookup(id.language.as_str()), id.region) {
            (Some(name), Some(region)) => {
                let region = region.as_str();
                let region_name = find(self.regions, region).unwrap_or(region);
                format!("{} ({})", name, region_name)
            }
            (Some(name), None) => name.to_string(),
            (None, _) => canonical,
        };
        Ok(name)
    }

    fn lookup(&self, code: &str) -> Option<&'static str> {
        find(self.names, code)
    }
}

fn find(table: NameTable, key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(entry, _)| *entry == key)
        .map(|(_, name)| *name)
}

fn parse_code(code: &str) -> Result<LanguageIdentifier> {
    if code.is_empty() {
        return Err(I18nError::InvalidLanguageCode(code.to_string()));
    }
    code.parse()
        .map_err(|_| I18nError::InvalidLanguageCode(code.to_string()))
}
