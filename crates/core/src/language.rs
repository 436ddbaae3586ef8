//! Display language for the bilingual site.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown language code.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown language code: {0} (expected 'en' or 'ar')")]
pub struct LanguageError(String);

/// The active display language.
///
/// Both languages of a content document are always fetched together, so
/// switching languages is a pure re-render and never a new lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (left-to-right).
    #[default]
    En,
    /// Arabic (right-to-left).
    Ar,
}

impl Language {
    /// Two-letter language code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// CSS text direction for this language.
    #[must_use]
    pub const fn text_direction(self) -> &'static str {
        match self {
            Self::En => "ltr",
            Self::Ar => "rtl",
        }
    }

    /// The content-document field carrying this language's sub-map.
    #[must_use]
    pub const fn content_field(self) -> &'static str {
        match self {
            Self::En => "contentEn",
            Self::Ar => "contentAr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "ar" => Ok(Self::Ar),
            other => Err(LanguageError(other.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("ar".parse::<Language>().unwrap(), Language::Ar);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_direction() {
        assert_eq!(Language::En.text_direction(), "ltr");
        assert_eq!(Language::Ar.text_direction(), "rtl");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Language::Ar).unwrap(), "\"ar\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
    }

    #[test]
    fn test_content_field_names() {
        assert_eq!(Language::En.content_field(), "contentEn");
        assert_eq!(Language::Ar.content_field(), "contentAr");
    }
}
