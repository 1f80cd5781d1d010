//! Growth × discount-rate sensitivity grid.
//!
//! Rows vary growth, columns vary the discount rate, and the center cell uses
//! the caller's assumptions unchanged. Cells are independent; with the
//! `parallel` feature they are evaluated on the rayon pool.

use crate::dcf::intrinsic_value;
use intrinsic_traits::{
    Assumptions, Fundamentals, IntrinsicError, MarketPrice, Result, SensitivityCell,
};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Largest accepted [`GridConfig::half_width`].
pub const MAX_HALF_WIDTH: usize = 50;

/// Configuration for the sensitivity grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Steps on each side of the base value (default: 3, giving a 7×7 grid)
    pub half_width: usize,

    /// Distance between steps in percentage points (default: 1.0)
    pub step: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            half_width: 3,
            step: 1.0,
        }
    }
}

impl GridConfig {
    /// Number of values on each axis.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.half_width.saturating_mul(2).saturating_add(1)
    }

    /// Checks the half-width bound and that the step is a positive number.
    ///
    /// # Errors
    ///
    /// Returns [`IntrinsicError::Configuration`] when `half_width` exceeds
    /// [`MAX_HALF_WIDTH`] or `step` is not finite and positive.
    pub fn validate(&self) -> Result<()> {
        if self.half_width > MAX_HALF_WIDTH {
            return Err(IntrinsicError::Configuration(format!(
                "grid half-width {} exceeds {MAX_HALF_WIDTH}",
                self.half_width
            )));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(IntrinsicError::Configuration(format!(
                "grid step {} must be a positive number",
                self.step
            )));
        }
        Ok(())
    }

    fn axis(&self, base: f64) -> Result<Vec<f64>> {
        let half = i64::try_from(self.half_width).map_err(|_| {
            IntrinsicError::Configuration(format!("grid half-width {}", self.half_width))
        })?;
        Ok((-half..=half).map(|k| base + k as f64 * self.step).collect())
    }
}

/// A square matrix of DCF outcomes around the current assumptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityGrid {
    /// Growth rate of each row, ascending.
    pub growth_axis: Vec<f64>,
    /// Discount rate of each column, ascending.
    pub discount_axis: Vec<f64>,
    /// Row-major cells, `cells[row][col]`.
    pub cells: Vec<Vec<SensitivityCell>>,
}

impl SensitivityGrid {
    /// Generate the default 7×7 grid.
    ///
    /// # Errors
    ///
    /// Returns the calculator's configuration error when the base assumptions
    /// themselves are invalid. Individual perturbed cells that break the
    /// Gordon-Growth precondition get `value: None` instead.
    pub fn generate(fundamentals: &Fundamentals, assumptions: &Assumptions) -> Result<Self> {
        Self::with_config(fundamentals, assumptions, &GridConfig::default())
    }

    /// Generate a grid with a custom size and step.
    ///
    /// # Errors
    ///
    /// As [`SensitivityGrid::generate`], plus the configuration errors of
    /// [`GridConfig::validate`].
    pub fn with_config(
        fundamentals: &Fundamentals,
        assumptions: &Assumptions,
        config: &GridConfig,
    ) -> Result<Self> {
        config.validate()?;
        intrinsic_value(fundamentals, assumptions)?;

        let growth_axis = config.axis(assumptions.growth_rate_percent)?;
        let discount_axis = config.axis(assumptions.discount_rate_percent)?;

        let keys: Vec<(f64, f64)> = growth_axis
            .iter()
            .flat_map(|&g| discount_axis.iter().map(move |&r| (g, r)))
            .collect();

        let evaluate = |&(growth_rate, discount_rate): &(f64, f64)| SensitivityCell {
            growth_rate,
            discount_rate,
            value: intrinsic_value(
                fundamentals,
                &assumptions.with_growth(growth_rate).with_discount(discount_rate),
            )
            .ok(),
        };

        #[cfg(feature = "parallel")]
        let flat: Vec<SensitivityCell> = keys.par_iter().map(evaluate).collect();
        #[cfg(not(feature = "parallel"))]
        let flat: Vec<SensitivityCell> = keys.iter().map(evaluate).collect();

        let cells = flat
            .chunks(discount_axis.len())
            .map(<[SensitivityCell]>::to_vec)
            .collect();

        Ok(Self {
            growth_axis,
            discount_axis,
            cells,
        })
    }

    /// Cell at `row` (growth) and `col` (discount).
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&SensitivityCell> {
        self.cells.get(row)?.get(col)
    }

    /// The cell computed with the unperturbed assumptions.
    #[must_use]
    pub fn center(&self) -> Option<&SensitivityCell> {
        self.cell(self.growth_axis.len() / 2, self.discount_axis.len() / 2)
    }

    /// Iterate all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &SensitivityCell> {
        self.cells.iter().flatten()
    }

    /// Number of cells valued strictly above `price`.
    #[must_use]
    pub fn favorable_count(&self, price: MarketPrice) -> usize {
        self.iter().filter(|c| c.is_favorable(price)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use intrinsic_traits::TerminalMethod;

    fn fundamentals() -> Fundamentals {
        Fundamentals {
            fcf_per_share: 6.0,
            shares_outstanding_b: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = GridConfig::default();
        assert_eq!(config.half_width, 3);
        assert_relative_eq!(config.step, 1.0);
        assert_eq!(config.size(), 7);
    }

    #[test]
    fn test_grid_shape_and_axes() {
        let a = Assumptions::default();
        let grid = SensitivityGrid::generate(&fundamentals(), &a).unwrap();

        assert_eq!(grid.cells.len(), 7);
        assert!(grid.cells.iter().all(|row| row.len() == 7));
        assert_eq!(grid.iter().count(), 49);
        assert_eq!(grid.growth_axis, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0]);
        assert_eq!(grid.discount_axis, vec![6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);

        let corner = grid.cell(0, 6).unwrap();
        assert_relative_eq!(corner.growth_rate, 7.0);
        assert_relative_eq!(corner.discount_rate, 12.0);
    }

    #[test]
    fn test_center_equals_base_value_exactly() {
        let f = fundamentals();
        let a = Assumptions::default();
        let grid = SensitivityGrid::generate(&f, &a).unwrap();

        let center = grid.center().unwrap();
        assert_eq!(grid.cell(3, 3), Some(center));
        assert_eq!(center.value, Some(intrinsic_value(&f, &a).unwrap()));
    }

    #[test]
    fn test_cells_monotone_along_axes() {
        let grid = SensitivityGrid::generate(&fundamentals(), &Assumptions::default()).unwrap();
        for row in &grid.cells {
            for pair in row.windows(2) {
                assert!(pair[0].value.unwrap() >= pair[1].value.unwrap());
            }
        }
        for col in 0..7 {
            for row in 1..7 {
                let below = grid.cell(row - 1, col).unwrap().value.unwrap();
                let here = grid.cell(row, col).unwrap().value.unwrap();
                assert!(here >= below);
            }
        }
    }

    #[test]
    fn test_invalid_perturbations_are_empty() {
        let a = Assumptions {
            discount_rate_percent: 5.0,
            terminal_growth_percent: 3.0,
            method: TerminalMethod::GordonGrowth,
            ..Default::default()
        };
        let grid = SensitivityGrid::generate(&fundamentals(), &a).unwrap();

        // Discount columns 2%, 3% are at or below terminal growth.
        for row in &grid.cells {
            assert!(row[0].value.is_none());
            assert!(row[1].value.is_none());
            assert!(row[2].value.is_some());
        }
    }

    #[test]
    fn test_invalid_base_fails() {
        let a = Assumptions {
            discount_rate_percent: 2.0,
            terminal_growth_percent: 5.0,
            ..Default::default()
        };
        assert!(SensitivityGrid::generate(&fundamentals(), &a).is_err());
    }

    #[test]
    fn test_out_of_range_config_rejected() {
        let f = fundamentals();
        let a = Assumptions::default();

        let huge = GridConfig {
            half_width: usize::MAX,
            step: 1.0,
        };
        assert_eq!(huge.size(), usize::MAX);
        let err = SensitivityGrid::with_config(&f, &a, &huge).unwrap_err();
        assert!(err.is_configuration());

        for step in [0.0, -1.0, f64::NAN] {
            let config = GridConfig {
                half_width: 3,
                step,
            };
            let err = SensitivityGrid::with_config(&f, &a, &config).unwrap_err();
            assert!(err.is_configuration());
        }

        let widest = GridConfig {
            half_width: MAX_HALF_WIDTH,
            step: 0.1,
        };
        let grid = SensitivityGrid::with_config(&f, &a, &widest).unwrap();
        assert_eq!(grid.growth_axis.len(), widest.size());
    }

    #[test]
    fn test_favorable_count() {
        let f = fundamentals();
        let a = Assumptions::default();
        let grid = SensitivityGrid::generate(&f, &a).unwrap();

        let tiny = MarketPrice::new(0.01).unwrap();
        assert_eq!(grid.favorable_count(tiny), 49);

        let huge = MarketPrice::new(1e9).unwrap();
        assert_eq!(grid.favorable_count(huge), 0);

        // Equal to the center value is not favorable.
        let at_center = MarketPrice::new(grid.center().unwrap().value.unwrap()).unwrap();
        assert!(!grid.center().unwrap().is_favorable(at_center));
    }
}
