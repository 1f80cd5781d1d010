//! Discounted cash flow valuation for the Intrinsic engine.
//!
//! This crate provides the numerical core:
//! - DCF calculator: five-year explicit horizon plus terminal value
//! - Projection: the intrinsic value carried forward year by year
//! - Reverse DCF: bisection for the growth rate implied by a price
//! - Sensitivity grid: DCF outcomes across growth and discount perturbations
//!
//! Every function is pure and synchronous; none hold state between calls.
//!
//! # Example
//!
//! ```rust,ignore
//! use intrinsic_dcf::{ReverseDcf, SensitivityGrid, intrinsic_value};
//!
//! let value = intrinsic_value(&fundamentals, &assumptions)?;
//! let implied = ReverseDcf::default().solve(&fundamentals, &assumptions, price)?;
//! let grid = SensitivityGrid::generate(&fundamentals, &assumptions)?;
//! ```

pub mod dcf;
pub mod projection;
pub mod reverse;
pub mod sensitivity;

// Re-export main types
pub use dcf::{DcfBreakdown, HORIZON_YEARS, dcf_breakdown, intrinsic_value};
pub use projection::project;
pub use reverse::{BisectionConfig, ReverseDcf, ReverseDcfSolution};
pub use sensitivity::{GridConfig, MAX_HALF_WIDTH, SensitivityGrid};
