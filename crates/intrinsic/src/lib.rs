#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/intrinsic-value/intrinsic/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # intrinsic
//!
//! Discounted cash flow valuation for individual equities.
//!
//! ## Quick Start
//!
//! ```
//! use intrinsic::{Assumptions, Fundamentals, MarketPrice, ValuationReport};
//!
//! let fundamentals = Fundamentals {
//!     fcf_per_share: 6.0,
//!     shares_outstanding_b: 1.0,
//!     ..Default::default()
//! };
//! let report = ValuationReport::build(
//!     &fundamentals,
//!     &Assumptions::default(),
//!     MarketPrice::new(100.0),
//! )?;
//!
//! assert!(report.intrinsic_value() > 100.0);
//! assert_eq!(report.buyable, Some(true));
//! # Ok::<(), intrinsic::IntrinsicError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Data model, error type and the FX collaborator trait
//! - [`normalize`] - Raw provider data to USD fundamentals
//! - [`dcf`] - DCF calculator, projection, reverse solver, sensitivity grid
//! - [`ratios`] - PEG, FCF yield, CAPM suggestion, buy target
//! - [`fetch`] - Finnhub and ExchangeRate-API clients
//!
//! ## Architecture
//!
//! 1. **Fetch** pulls a quote, profile and basic financials, plus an FX rate
//! 2. **Normalize** reconciles them into a USD [`Fundamentals`] snapshot
//! 3. **Value** runs the DCF and everything derived from it
//!
//! Steps 2 and 3 are pure and synchronous. Only step 1 awaits.

/// Version information for the intrinsic crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod report;

pub use report::{ReportConfig, ValuationReport};

/// Core data model and collaborator traits.
pub mod traits {
    pub use intrinsic_traits::*;
}

/// Fundamentals normalizer.
///
/// Every derived field is resolved by an ordered table of strategies; the
/// first one whose inputs are present wins. Monetary fields are converted to
/// USD with the caller-supplied rate, ratios are not.
pub mod normalize {
    pub use intrinsic_normalize::*;
}

/// Discounted cash flow valuation.
///
/// ```text
/// FCF_i   = fcf * (1 + g)^i                     i = 1..5
/// PV      = Σ FCF_i / (1 + r)^i
/// TV      = FCF_5 * (1 + tg) / (r - tg)         Gordon growth
///         = FCF_5 * multiple                    market multiple
/// value   = PV + TV / (1 + r)^5 + net cash per share
/// ```
pub mod dcf {
    pub use intrinsic_dcf::*;
}

/// Ratios computed alongside the DCF value.
pub mod ratios {
    pub use intrinsic_ratios::*;
}

/// Market-data clients.
///
/// ## Setup
///
/// Set `FINNHUB_API_KEY` and `EXCHANGERATE_API_KEY` in the environment or a
/// `.env` file.
pub mod fetch {
    pub use intrinsic_fetch::*;
}

// Re-export the types most callers need at the top level
pub use intrinsic_traits::{
    Assumptions, Fundamentals, IntrinsicError, MarketPrice, RawFundamentals, Result,
    TerminalMethod,
};

/// Prelude module for convenient imports.
///
/// ```
/// use intrinsic::prelude::*;
/// ```
pub mod prelude {
    pub use crate::traits::*;
    pub use crate::{ReportConfig, ValuationReport};
    pub use intrinsic_dcf::{ReverseDcf, SensitivityGrid, intrinsic_value};
    pub use intrinsic_normalize::Normalizer;
}
