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

pub mod aggregate;
pub mod partition;
pub mod stats;
pub mod time_context;
pub mod window;

pub use aggregate::*;
pub use partition::*;
pub use stats::*;
pub use time_context::*;
pub use window::*;

pub use spothinta_types::{
    BucketSummary, CheapestWindow, PricePoint, RawPricePoint, SeriesError, StatsResult,
    TimeBucket,
};
