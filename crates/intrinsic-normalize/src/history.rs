//! Statistics over annual history: average P/E and FCF CAGR.

use intrinsic_traits::AnnualObservation;

fn chronological(series: &[AnnualObservation]) -> Vec<AnnualObservation> {
    let mut sorted = series.to_vec();
    sorted.sort_by_key(|o| o.period);
    sorted
}

/// Mean of the `window` most recent positive annual P/Es.
///
/// Falls back to `trailing` when the series is absent or holds no positive
/// observation, and to `0.0` when neither is available.
#[must_use]
pub fn historical_pe(
    series: Option<&[AnnualObservation]>,
    trailing: Option<f64>,
    window: usize,
) -> f64 {
    let recent: Vec<f64> = series
        .map(|s| {
            chronological(s)
                .into_iter()
                .rev()
                .map(|o| o.value)
                .filter(|v| v.is_finite() && *v > 0.0)
                .take(window)
                .collect()
        })
        .unwrap_or_default();

    if recent.is_empty() {
        return trailing.filter(|pe| pe.is_finite()).unwrap_or(0.0);
    }

    recent.iter().sum::<f64>() / recent.len() as f64
}

/// Compound annual growth of FCF in percent.
///
/// Uses a lookback of `min(max_lookback, n - 1)` years ending at the most
/// recent observation. Returns `None` with fewer than two observations or
/// when either endpoint is not strictly positive, since a sign change makes a
/// geometric rate undefined.
#[must_use]
pub fn fcf_cagr_percent(series: &[AnnualObservation], max_lookback: usize) -> Option<f64> {
    if series.len() < 2 {
        return None;
    }

    let sorted = chronological(series);
    let n = sorted.len();
    let years = max_lookback.min(n - 1);
    if years == 0 {
        return None;
    }

    let start = sorted[n - 1 - years].value;
    let end = sorted[n - 1].value;
    if start <= 0.0 || end <= 0.0 {
        return None;
    }

    let cagr = ((end / start).powf(1.0 / years as f64) - 1.0) * 100.0;
    cagr.is_finite().then_some(cagr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn obs(year: i32, value: f64) -> AnnualObservation {
        AnnualObservation::new(NaiveDate::from_ymd_opt(year, 12, 31).unwrap(), value)
    }

    #[test]
    fn test_historical_pe_takes_five_most_recent_positive() {
        let series = vec![
            obs(2016, 100.0),
            obs(2023, 20.0),
            obs(2019, 10.0),
            obs(2022, -5.0),
            obs(2021, 30.0),
            obs(2020, 40.0),
            obs(2018, 50.0),
        ];
        // Most recent positives: 2023, 2021, 2020, 2019, 2018.
        let pe = historical_pe(Some(series.as_slice()), Some(99.0), 5);
        assert_relative_eq!(pe, 30.0);
    }

    #[test]
    fn test_historical_pe_short_series() {
        let series = vec![obs(2022, 12.0), obs(2023, 18.0)];
        assert_relative_eq!(historical_pe(Some(series.as_slice()), None, 5), 15.0);
    }

    #[test]
    fn test_historical_pe_falls_back_to_trailing() {
        assert_relative_eq!(historical_pe(None, Some(22.0), 5), 22.0);

        let negative_only = vec![obs(2023, -3.0)];
        assert_relative_eq!(historical_pe(Some(negative_only.as_slice()), Some(22.0), 5), 22.0);
    }

    #[test]
    fn test_historical_pe_unknown() {
        assert_relative_eq!(historical_pe(None, None, 5), 0.0);
    }

    #[test]
    fn test_cagr_sorts_chronologically() {
        let series = vec![obs(2023, 121.0), obs(2021, 100.0), obs(2022, 110.0)];
        let cagr = fcf_cagr_percent(&series, 5).unwrap();
        assert_relative_eq!(cagr, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cagr_window_capped_at_five_years() {
        // Five-year window ending 2023 starts at 2018.
        let series = vec![
            obs(2015, 1.0),
            obs(2016, 1.0),
            obs(2017, 1.0),
            obs(2018, 100.0),
            obs(2019, 1.0),
            obs(2020, 1.0),
            obs(2021, 1.0),
            obs(2022, 1.0),
            obs(2023, 200.0),
        ];
        let cagr = fcf_cagr_percent(&series, 5).unwrap();
        let expected = (2.0_f64.powf(1.0 / 5.0) - 1.0) * 100.0;
        assert_relative_eq!(cagr, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_cagr_requires_two_points() {
        assert!(fcf_cagr_percent(&[], 5).is_none());
        assert!(fcf_cagr_percent(&[obs(2023, 10.0)], 5).is_none());
    }

    #[test]
    fn test_cagr_sign_change_is_undefined() {
        let neg_to_pos = vec![obs(2022, -10.0), obs(2023, 10.0)];
        assert!(fcf_cagr_percent(&neg_to_pos, 5).is_none());

        let pos_to_neg = vec![obs(2022, 10.0), obs(2023, -10.0)];
        assert!(fcf_cagr_percent(&pos_to_neg, 5).is_none());

        let zero_start = vec![obs(2022, 0.0), obs(2023, 10.0)];
        assert!(fcf_cagr_percent(&zero_start, 5).is_none());
    }

    #[test]
    fn test_cagr_negative_growth() {
        let series = vec![obs(2022, 100.0), obs(2023, 80.0)];
        assert_relative_eq!(fcf_cagr_percent(&series, 5).unwrap(), -20.0, epsilon = 1e-9);
    }
}
