//! Linear-trend forecast over the monthly spending series.
//!
//! The series is position-indexed: x is 0..n-1 in chronological order,
//! not a calendar distance. A missing calendar month simply contributes
//! no point, and the next observed month takes the next index.

use serde::Serialize;

use crate::error::{OutlayError, Result};

pub const DEFAULT_HORIZON: usize = 3;

/// Fitted line y = slope * x + intercept.
#[derive(Debug, Clone, Copy)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    pub fn at(&self, index: usize) -> f64 {
        self.slope * index as f64 + self.intercept
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastPoint {
    pub index: usize,
    pub amount: f64,
}

/// Ordinary least squares over the position-indexed series. A single
/// point has no determinable slope; it is held flat (slope 0). An empty
/// series is a caller error, surfaced as a precondition failure.
pub fn fit(series: &[f64]) -> Result<TrendLine> {
    if series.is_empty() {
        return Err(OutlayError::Precondition(
            "forecasting requires at least one monthly total",
        ));
    }
    if series.len() == 1 {
        return Ok(TrendLine {
            slope: 0.0,
            intercept: series[0],
        });
    }

    let n = series.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for (i, &y) in series.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    // x values are distinct, so the denominator is never zero here.
    let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_xx - sum_x * sum_x);
    let intercept = (sum_y - slope * sum_x) / n;
    Ok(TrendLine { slope, intercept })
}

/// Evaluate the fitted line at indices n .. n+horizon-1. Predictions are
/// returned as-is, including negative values.
pub fn forecast(series: &[f64], horizon: usize) -> Result<Vec<ForecastPoint>> {
    let line = fit(series)?;
    Ok((series.len()..series.len() + horizon)
        .map(|index| ForecastPoint {
            index,
            amount: line.at(index),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_recovers_exact_line() {
        let line = fit(&[10.0, 20.0, 30.0]).unwrap();
        assert!((line.slope - 10.0).abs() < 1e-9);
        assert!((line.intercept - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_forecast_extends_the_line() {
        let points = forecast(&[10.0, 20.0, 30.0], 3).unwrap();
        let amounts: Vec<f64> = points.iter().map(|p| p.amount).collect();
        assert!((amounts[0] - 40.0).abs() < 1e-9);
        assert!((amounts[1] - 50.0).abs() < 1e-9);
        assert!((amounts[2] - 60.0).abs() < 1e-9);
        let indices: Vec<usize> = points.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![3, 4, 5]);
    }

    #[test]
    fn test_single_point_forecasts_flat() {
        let points = forecast(&[50.0], 3).unwrap();
        assert_eq!(points.len(), 3);
        assert!(points.iter().all(|p| (p.amount - 50.0).abs() < 1e-9));
    }

    #[test]
    fn test_declining_series_may_forecast_negative() {
        let points = forecast(&[30.0, 20.0, 10.0], 3).unwrap();
        assert!((points[0].amount - 0.0).abs() < 1e-9);
        assert!((points[1].amount + 10.0).abs() < 1e-9);
        assert!((points[2].amount + 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_series_is_a_precondition_failure() {
        assert!(matches!(
            fit(&[]),
            Err(OutlayError::Precondition(_))
        ));
    }

    #[test]
    fn test_fit_is_deterministic() {
        let series = [120.5, 98.0, 143.25, 101.0];
        let a = fit(&series).unwrap();
        let b = fit(&series).unwrap();
        assert_eq!(a.slope.to_bits(), b.slope.to_bits());
        assert_eq!(a.intercept.to_bits(), b.intercept.to_bits());
    }
}
