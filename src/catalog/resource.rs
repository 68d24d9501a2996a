//! Configuration-backed message catalog

use log::debug;
use serde::Deserialize;
use std::collections::HashMap;

use crate::catalog::MessageCatalog;

/// One `[[messages]]` entry of the configuration file.
#[derive(Debug, Deserialize, Clone)]
pub struct MessageEntry {
    pub code: u16,

    #[serde(default)]
    pub sub_id: Option<String>,

    /// Language tag; entries without one belong to the default table.
    #[serde(default)]
    pub language: Option<String>,

    pub text: String,
}

impl MessageEntry {
    fn key(&self) -> String {
        message_key(self.code, self.sub_id.as_deref())
    }
}

fn message_key(code: u16, sub_id: Option<&str>) -> String {
    match sub_id {
        Some(sub_id) => format!("{}.{}", code, sub_id),
        None => code.to_string(),
    }
}

/// Templates grouped per language, plus a default table.
#[derive(Debug, Default, Clone)]
pub struct MessageResource {
    default_language: String,
    default_messages: HashMap<String, String>,
    languages: HashMap<String, HashMap<String, String>>,
}

impl MessageResource {
    /// Builds the catalog. Entries tagged with `default_language` are merged
    /// into the default table. Later entries override earlier ones.
    pub fn new(default_language: &str, entries: &[MessageEntry]) -> Self {
        let default_language = default_language.to_ascii_lowercase();
        let mut resource = Self {
            default_language: default_language.clone(),
            ..Self::default()
        };

        for entry in entries {
            let table = match entry.language.as_deref().map(str::to_ascii_lowercase) {
                Some(language) if language != default_language => {
                    resource.languages.entry(language).or_default()
                }
                _ => &mut resource.default_messages,
            };
            table.insert(entry.key(), entry.text.clone());
        }

        debug!(
            "Loaded {} default messages and {} languages",
            resource.default_messages.len(),
            resource.languages.len()
        );
        resource
    }

    /// Languages with a dedicated table, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }
}

impl MessageCatalog for MessageResource {
    fn message(&self, code: u16, sub_id: Option<&str>, language: Option<&str>) -> Option<String> {
        let key = message_key(code, sub_id);

        let localized = language
            .map(str::to_ascii_lowercase)
            .and_then(|language| self.languages.get(&language))
            .and_then(|table| table.get(&key));

        localized.or_else(|| self.default_messages.get(&key)).cloned()
    }

    fn supports_language(&self, language: &str) -> bool {
        let language = language.to_ascii_lowercase();
        language == self.default_language || self.languages.contains_key(&language)
    }
}
