//! Fundamentals normalization for the Intrinsic valuation engine.
//!
//! This crate turns partially-populated provider data into a complete,
//! USD-denominated [`Fundamentals`](intrinsic_traits::Fundamentals) record:
//! - Derivation tables: ordered fallback strategies for FCF, cash and debt
//! - History: average P/E and FCF CAGR over annual series
//! - Normalizer: currency conversion, 52-week-high clamping, assembly
//!
//! The normalizer is the only component allowed to convert currency.
//!
//! # Example
//!
//! ```rust,ignore
//! use intrinsic_normalize::Normalizer;
//!
//! let rate = intrinsic_traits::usd_rate_or_default(&fx, raw.currency_or_usd()).await;
//! let fundamentals = Normalizer::default().normalize(&raw, rate)?;
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod derivation;
pub mod history;
pub mod normalizer;

// Re-export key types
pub use derivation::{Derivation, Derived, first_match};
pub use history::{fcf_cagr_percent, historical_pe};
pub use normalizer::{Normalizer, NormalizerConfig};
