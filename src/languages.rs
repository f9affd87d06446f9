use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages offered by the translator form. The upstream API decides
/// whether a given pair can actually be translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedLanguage {
    English,
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
}

impl SupportedLanguage {
    pub const ALL: [SupportedLanguage; 6] = [
        SupportedLanguage::English,
        SupportedLanguage::Spanish,
        SupportedLanguage::French,
        SupportedLanguage::German,
        SupportedLanguage::Italian,
        SupportedLanguage::Portuguese,
    ];

    /// Machine code sent over the wire
    pub fn code(&self) -> &'static str {
        match self {
            SupportedLanguage::English => "english",
            SupportedLanguage::Spanish => "spanish",
            SupportedLanguage::French => "french",
            SupportedLanguage::German => "german",
            SupportedLanguage::Italian => "italian",
            SupportedLanguage::Portuguese => "portuguese",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SupportedLanguage::English => "English",
            SupportedLanguage::Spanish => "Spanish",
            SupportedLanguage::French => "French",
            SupportedLanguage::German => "German",
            SupportedLanguage::Italian => "Italian",
            SupportedLanguage::Portuguese => "Portuguese",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|lang| lang.code() == code)
    }
}

impl fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported language code: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for SupportedLanguage {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(&s.to_lowercase()).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// Entry of the `/api/languages` listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanguageOption {
    pub code: String,
    pub name: String,
}

pub fn language_options() -> Vec<LanguageOption> {
    SupportedLanguage::ALL
        .iter()
        .map(|lang| LanguageOption {
            code: lang.code().to_string(),
            name: lang.display_name().to_string(),
        })
        .collect()
}
