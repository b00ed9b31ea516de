// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of spothinta.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

mod format;

pub use format::PriceFormat;

use fluent::{FluentArgs, FluentResource};
use std::collections::HashMap;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

/// Fluent bundle with a thread-safe memoizer, so `I18n` is `Send + Sync`.
type Bundle = fluent_bundle::bundle::FluentBundle<
    FluentResource,
    intl_memoizer::concurrent::IntlLangMemoizer,
>;

/// Translation domains loaded for every language
const DOMAINS: [&str; 2] = ["stats", "units"];

/// Supported languages
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, Default,
)]
pub enum Language {
    /// Finnish (default)
    #[default]
    #[serde(rename = "fi", alias = "finnish")]
    Finnish,
    /// English
    #[serde(rename = "en", alias = "english")]
    English,
}

impl Language {
    /// Get the language identifier string (e.g., "fi", "en")
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Finnish => "fi",
            Self::English => "en",
        }
    }

    /// List all supported languages
    pub const ALL: [Language; 2] = [Language::Finnish, Language::English];

    /// Parse language from string code
    ///
    /// # Errors
    ///
    /// Returns `I18nError::UnsupportedLanguage` if the language code is not supported.
    pub fn from_code(code: &str) -> Result<Self, I18nError> {
        match code.to_lowercase().as_str() {
            "fi" | "finnish" | "suomi" => Ok(Self::Finnish),
            "en" | "english" => Ok(Self::English),
            _ => Err(I18nError::UnsupportedLanguage(code.to_owned())),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = I18nError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

/// Translation errors
#[derive(Debug, Error)]
pub enum I18nError {
    /// Translation key not found
    #[error("Translation key not found: {0}")]
    KeyNotFound(String),

    /// Failed to load translation resource
    #[error("Failed to load translation resource: {0}")]
    LoadError(String),

    /// Unsupported language
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Formatting error
    #[error("Failed to format translation: {0}")]
    FormatError(String),
}

/// Main i18n interface
pub struct I18n {
    bundles: HashMap<&'static str, Bundle>,
    language: Language,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("language", &self.language)
            .field("bundles", &"<FluentBundle>")
            .finish()
    }
}

impl I18n {
    /// Create a new i18n instance for the specified language
    ///
    /// # Errors
    ///
    /// Returns `I18nError::LoadError` if translation files cannot be loaded.
    pub fn new(language: Language) -> Result<Self, I18nError> {
        let mut i18n = Self {
            bundles: HashMap::new(),
            language,
        };

        for domain in DOMAINS {
            i18n.load_domain(domain)?;
        }

        Ok(i18n)
    }

    /// Load a translation domain (e.g., "stats", "units")
    fn load_domain(&mut self, domain: &'static str) -> Result<(), I18nError> {
        let lang_code = self.language.code();
        let ftl_content = Self::load_ftl_file(lang_code, domain)?;

        let resource = FluentResource::try_new(ftl_content.to_owned())
            .map_err(|e| I18nError::LoadError(format!("Failed to parse {domain}.ftl: {e:?}")))?;

        let lang_id: LanguageIdentifier = lang_code
            .parse()
            .map_err(|e| I18nError::LoadError(format!("Invalid language ID: {e}")))?;

        let mut bundle = Bundle::new_concurrent(vec![lang_id]);
        // Output goes to terminals and plain HTML, not bidi-aware widgets
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|e| I18nError::LoadError(format!("Failed to add resource: {e:?}")))?;

        self.bundles.insert(domain, bundle);
        Ok(())
    }

    /// Embedded FTL file content
    fn load_ftl_file(lang_code: &str, domain: &str) -> Result<&'static str, I18nError> {
        match (lang_code, domain) {
            ("fi", "stats") => Ok(include_str!("../locales/fi/stats.ftl")),
            ("fi", "units") => Ok(include_str!("../locales/fi/units.ftl")),
            ("en", "stats") => Ok(include_str!("../locales/en/stats.ftl")),
            ("en", "units") => Ok(include_str!("../locales/en/units.ftl")),
            _ => Err(I18nError::LoadError(format!(
                "Translation file not found: {lang_code}/{domain}.ftl"
            ))),
        }
    }

    /// Get a translated string by key
    ///
    /// # Errors
    ///
    /// Returns `I18nError::KeyNotFound` if the translation key is not found in any domain.
    pub fn get(&self, key: &str) -> Result<String, I18nError> {
        self.format(key, None)
    }

    /// Format a translated string with arguments
    ///
    /// # Errors
    ///
    /// Returns `I18nError::KeyNotFound` if the translation key is not found.
    /// Returns `I18nError::FormatError` if formatting fails.
    pub fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> Result<String, I18nError> {
        for bundle in self.bundles.values() {
            if let Some(message) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(message, args, &mut errors);

                if !errors.is_empty() {
                    return Err(I18nError::FormatError(format!(
                        "Formatting errors: {errors:?}"
                    )));
                }

                return Ok(value.into_owned());
            }
        }

        Err(I18nError::KeyNotFound(key.to_owned()))
    }

    /// Label of the cheapest `hours`-long period, e.g. "Halvin 3h jakso"
    ///
    /// # Errors
    ///
    /// Returns `I18nError` if the message is missing or fails to format.
    pub fn cheapest_period_label(&self, hours: usize) -> Result<String, I18nError> {
        let mut args = FluentArgs::new();
        args.set("hours", hours);
        self.format("cheapest-period", Some(&args))
    }

    /// Get the current language
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }
}
