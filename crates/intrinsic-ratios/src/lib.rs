//! Derived valuation ratios for the Intrinsic engine.
//!
//! This crate provides the signals computed alongside the DCF value:
//! - PEG: trailing P/E over assumed growth
//! - FCF yield: free cash flow per share over price
//! - CAPM: a suggested discount rate from beta
//! - Buy target: intrinsic value less a margin of safety
//!
//! These consume fundamentals and assumptions directly and do not depend on
//! the DCF output, except the buy target which takes the value as input.
//!
//! # Example
//!
//! ```
//! use intrinsic_ratios::{BuyTarget, CapmConfig, Peg, PegVerdict};
//!
//! let peg = Peg::calculate(18.0, 20.0);
//! assert_eq!(peg.verdict(), Some(PegVerdict::Undervalued));
//!
//! let rate = CapmConfig::default().suggested_discount_rate(Some(1.0));
//! assert!(rate.is_some());
//!
//! let target = BuyTarget::new(120.0, 25.0).unwrap();
//! assert!(target.is_buyable(85.0));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod buy_target;
pub mod capm;
pub mod fcf_yield;
pub mod peg;

// Re-export key types
pub use buy_target::{BuyTarget, MAX_MARGIN_OF_SAFETY};
pub use capm::CapmConfig;
pub use fcf_yield::{FcfYield, FcfYieldVerdict};
pub use peg::{Peg, PegVerdict};
