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

use crate::{I18n, I18nError};

/// Locale-specific rendering of prices: two decimals, the language's decimal
/// separator, a unit suffix and a placeholder for missing values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormat {
    pub decimal_separator: String,
    pub unit: String,
    pub placeholder: String,
}

impl PriceFormat {
    /// Build the format from the translations of `i18n`'s language.
    pub fn from_i18n(i18n: &I18n) -> Result<Self, I18nError> {
        Ok(Self {
            decimal_separator: i18n.get("decimal-separator")?,
            unit: i18n.get("unit-price")?,
            placeholder: i18n.get("not-available")?,
        })
    }

    /// `12.5` -> `"12,50"` (Finnish) or `"12.50"` (English)
    #[must_use]
    pub fn number(&self, value: f64) -> String {
        format!("{value:.2}").replace('.', &self.decimal_separator)
    }

    /// Number with unit, or the placeholder when there is no value.
    #[must_use]
    pub fn price(&self, value: Option<f64>) -> String {
        match value {
            Some(v) => format!("{} {}", self.number(v), self.unit),
            None => self.placeholder.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Language;

    fn format_for(language: Language) -> PriceFormat {
        PriceFormat::from_i18n(&I18n::new(language).unwrap()).unwrap()
    }

    #[test]
    fn test_finnish_prices() {
        let fmt = format_for(Language::Finnish);
        assert_eq!(fmt.price(Some(12.5)), "12,50 snt/kWh");
        assert_eq!(fmt.price(Some(-1.5)), "-1,50 snt/kWh");
        assert_eq!(fmt.price(Some(0.0)), "0,00 snt/kWh");
        assert_eq!(fmt.price(None), "-");
    }

    #[test]
    fn test_english_prices() {
        let fmt = format_for(Language::English);
        assert_eq!(fmt.price(Some(10.104_166)), "10.10 c/kWh");
        assert_eq!(fmt.number(7.0), "7.00");
        assert_eq!(fmt.price(None), "-");
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        let fmt = format_for(Language::Finnish);
        assert_eq!(fmt.number(5.55555), "5,56");
        assert_eq!(fmt.number(2.678), "2,68");
        assert_eq!(fmt.number(1234.0), "1234,00");
    }
}
