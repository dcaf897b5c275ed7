//! Supported locales and per-locale values.

use serde::{Deserialize, Serialize};

/// Display language for catalog content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ko,
}

impl Locale {
    /// Every supported locale, in display order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ko];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ko => "ko",
        }
    }

    /// Parse from a language tag, returning None for unsupported languages.
    ///
    /// Matching is case-insensitive and ignores a region suffix, so
    /// `"ko-KR"` and `"KO_kr"` both parse as [`Locale::Ko`].
    pub fn parse(s: &str) -> Option<Self> {
        let lang = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Some(Locale::En),
            "ko" => Some(Locale::Ko),
            _ => None,
        }
    }

    /// Parse a language tag, falling back to English.
    pub fn parse_lenient(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unsupported locale: {}", s))
    }
}

/// A value present for every supported locale.
///
/// Holding one field per locale makes a missing translation a compile
/// error rather than a runtime lookup failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub en: T,
    pub ko: T,
}

impl<T> Localized<T> {
    pub fn new(en: T, ko: T) -> Self {
        Self { en, ko }
    }

    /// Resolve the value for a locale.
    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::En => &self.en,
            Locale::Ko => &self.ko,
        }
    }

    /// Apply `f` to each locale's value.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Localized<U> {
        Localized {
            en: f(&self.en),
            ko: f(&self.ko),
        }
    }
}

impl Localized<String> {
    pub fn text(en: &str, ko: &str) -> Self {
        Self::new(en.to_string(), ko.to_string())
    }
}

impl Localized<Vec<String>> {
    pub fn words(en: &[&str], ko: &[&str]) -> Self {
        Self::new(
            en.iter().map(|s| s.to_string()).collect(),
            ko.iter().map(|s| s.to_string()).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_tags() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("ko"), Some(Locale::Ko));
        assert_eq!(Locale::parse("fr"), None);
    }

    #[test]
    fn test_parse_region_and_case() {
        assert_eq!(Locale::parse("ko-KR"), Some(Locale::Ko));
        assert_eq!(Locale::parse("EN_us"), Some(Locale::En));
        assert_eq!(Locale::parse("  Ko "), Some(Locale::Ko));
    }

    #[test]
    fn test_parse_lenient_falls_back_to_english() {
        assert_eq!(Locale::parse_lenient("ja"), Locale::En);
        assert_eq!(Locale::parse_lenient(""), Locale::En);
    }

    #[test]
    fn test_locale_serde() {
        let json = serde_json::to_string(&Locale::Ko).unwrap();
        assert_eq!(json, "\"ko\"");
        let decoded: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(decoded, Locale::En);
    }

    #[test]
    fn test_localized_get() {
        let title = Localized::text("Meta-Analysis", "메타분석");
        assert_eq!(title.get(Locale::En), "Meta-Analysis");
        assert_eq!(title.get(Locale::Ko), "메타분석");
    }

    #[test]
    fn test_localized_map() {
        let keywords = Localized::words(&["a", "b"], &["가"]);
        let counts = keywords.map(|k| k.len());
        assert_eq!(counts.en, 2);
        assert_eq!(counts.ko, 1);
    }
}
