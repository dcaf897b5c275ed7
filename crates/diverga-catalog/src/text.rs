//! Compile-time bilingual text used by the static sources.

use diverga_types::{Locale, Localized};

/// English/Korean string pair stored in static data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text {
    pub en: &'static str,
    pub ko: &'static str,
}

impl Text {
    pub const fn new(en: &'static str, ko: &'static str) -> Self {
        Self { en, ko }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Ko => self.ko,
        }
    }

    pub fn localized(&self) -> Localized<String> {
        Localized::text(self.en, self.ko)
    }
}

/// English/Korean keyword lists stored in static data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keywords {
    pub en: &'static [&'static str],
    pub ko: &'static [&'static str],
}

impl Keywords {
    pub const fn new(en: &'static [&'static str], ko: &'static [&'static str]) -> Self {
        Self { en, ko }
    }

    pub fn get(&self, locale: Locale) -> &'static [&'static str] {
        match locale {
            Locale::En => self.en,
            Locale::Ko => self.ko,
        }
    }

    pub fn localized(&self) -> Localized<Vec<String>> {
        Localized::words(self.en, self.ko)
    }
}
