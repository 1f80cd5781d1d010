//! Five-year value projection for charting.

use crate::dcf::{HORIZON_YEARS, intrinsic_value};
use intrinsic_traits::{Assumptions, Fundamentals, ProjectionPoint, Result};

/// Projects intrinsic value across the explicit horizon.
///
/// Year 0 is the current intrinsic value; each later year compounds it by the
/// assumed growth rate. Always returns `HORIZON_YEARS + 1` points.
///
/// # Errors
///
/// Propagates the calculator's configuration errors.
pub fn project(
    fundamentals: &Fundamentals,
    assumptions: &Assumptions,
) -> Result<Vec<ProjectionPoint>> {
    let anchor = intrinsic_value(fundamentals, assumptions)?;
    let g = assumptions.growth_rate_percent / 100.0;

    Ok((0..=HORIZON_YEARS)
        .map(|year| ProjectionPoint {
            year: year as u32,
            value: anchor * (1.0 + g).powi(year),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_projection_shape() {
        let f = Fundamentals {
            fcf_per_share: 5.0,
            shares_outstanding_b: 1.0,
            ..Default::default()
        };
        let a = Assumptions::default();
        let points = project(&f, &a).unwrap();

        assert_eq!(points.len(), 6);
        assert_eq!(points[0].year, 0);
        assert_eq!(points[5].year, 5);
        assert_eq!(points[0].value, intrinsic_value(&f, &a).unwrap());
        assert_relative_eq!(points[1].value, points[0].value * 1.1, epsilon = 1e-9);
        assert!(points.windows(2).all(|w| w[0].year < w[1].year));
    }

    #[test]
    fn test_projection_propagates_errors() {
        let a = Assumptions {
            discount_rate_percent: 1.0,
            terminal_growth_percent: 3.0,
            ..Default::default()
        };
        assert!(project(&Fundamentals::default(), &a).is_err());
    }
}
