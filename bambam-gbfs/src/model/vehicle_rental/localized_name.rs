use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt::Display};

/// a station name with optional translations keyed by locale tag, such as
/// "de" or "pt-BR".
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct LocalizedName {
    pub default: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub translations: HashMap<String, String>,
}

impl LocalizedName {
    pub fn new(default: &str) -> LocalizedName {
        LocalizedName {
            default: default.to_string(),
            translations: HashMap::new(),
        }
    }

    pub fn with_translation(mut self, locale: &str, name: &str) -> LocalizedName {
        self.translations
            .insert(locale.to_string(), name.to_string());
        self
    }

    /// picks the name for `locale`. an exact tag match wins, then any
    /// translation with the same language, then the default name.
    /// tags compare case-insensitively and treat '_' like '-'.
    pub fn resolve(&self, locale: Option<&str>) -> &str {
        let Some(locale) = locale else {
            return &self.default;
        };
        let wanted = normalize_tag(locale);
        let candidates = self
            .translations
            .iter()
            .map(|(tag, name)| (normalize_tag(tag), name))
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .collect_vec();

        let exact = candidates
            .iter()
            .find(|(tag, _)| *tag == wanted)
            .map(|(_, name)| *name);
        if let Some(name) = exact {
            return name;
        }
        let language = language_of(&wanted);
        candidates
            .iter()
            .find(|(tag, _)| language_of(tag) == language)
            .map(|(_, name)| *name)
            .map(String::as_str)
            .unwrap_or(&self.default)
    }
}

impl Display for LocalizedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.default)
    }
}

impl From<&str> for LocalizedName {
    fn from(value: &str) -> Self {
        LocalizedName::new(value)
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().replace('_', "-").to_lowercase()
}

fn language_of(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}
