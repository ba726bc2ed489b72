use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Language code for English.
pub const LANG_EN: &str = "en";
/// Language code for Thai.
pub const LANG_TH: &str = "th";

/// Per-language text stored as a small JSON object keyed by language code.
///
/// An empty field means no text has been recorded for that locale yet. Missing
/// keys deserialize as empty strings so partial payloads such as
/// `{"en": "Title"}` are accepted.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, FromJsonQueryResult,
)]
#[serde(default)]
pub struct MultilingualText {
    pub en: String,
    pub th: String,
}

impl MultilingualText {
    pub fn new(en: impl Into<String>, th: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            th: th.into(),
        }
    }

    /// Builds a value from `(language code, text)` pairs.
    ///
    /// Unrecognised codes are ignored; a later pair for the same code wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut text = Self::default();
        for (code, value) in pairs {
            match code.as_ref() {
                LANG_EN => text.en = value.into(),
                LANG_TH => text.th = value.into(),
                _ => {}
            }
        }
        text
    }

    /// Returns the text for `code`, or `""` when it is unpopulated or not a
    /// supported language.
    pub fn get(&self, code: &str) -> &str {
        match code {
            LANG_EN => &self.en,
            LANG_TH => &self.th,
            _ => "",
        }
    }

    /// True when no language has any text.
    pub fn is_empty(&self) -> bool {
        self.en.is_empty() && self.th.is_empty()
    }
}
