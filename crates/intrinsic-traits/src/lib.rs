#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/intrinsic-value/intrinsic/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core definitions for the Intrinsic valuation engine.
//!
//! This crate provides the value types passed between the normalizer, the
//! DCF calculator, the ratio calculators and the data-fetch collaborators.

/// The version of the intrinsic-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod fx;
pub mod raw;
pub mod types;

// Re-exports
pub use error::{IntrinsicError, Result};
pub use fx::{FxRateProvider, StaticRates, usd_rate_or_default};
pub use raw::{AnnualObservation, RawFundamentals};
pub use types::{
    Assumptions, Fundamentals, MarketPrice, ProjectionPoint, SensitivityCell, TerminalMethod,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }
}
