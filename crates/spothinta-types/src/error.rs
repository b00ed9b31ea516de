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

use thiserror::Error;

/// Errors raised while turning the raw price feed into typed points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// A timestamp did not match `DD.MM.YYYY HH:MM`. The entry is never skipped.
    #[error("malformed timestamp {raw:?} at index {index} (expected DD.MM.YYYY HH:MM)")]
    MalformedTimestamp {
        index: usize,
        raw: String,
        #[source]
        source: chrono::ParseError,
    },
}
