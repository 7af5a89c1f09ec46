use super::{leading, trailing};
use crate::{
    sales::ForecastObservation,
    stats::{mean, percent_change},
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HISTORICAL_FRACTION: f64 = 0.7;

/// Points compared on each side of the split when computing the trend.
pub const FORECAST_TREND_WINDOW: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSplit {
    pub historical: Vec<ForecastObservation>,
    pub forecast:   Vec<ForecastObservation>,
}

impl ForecastSplit {
    pub fn len(&self) -> usize {
        self.historical.len() + self.forecast.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Distinct categories in first-seen order.
pub fn categories(observations: &[ForecastObservation]) -> Vec<String> {
    distinct(observations.iter().map(|o| o.category.as_str()))
}

/// Distinct regions in first-seen order.
pub fn regions(observations: &[ForecastObservation]) -> Vec<String> {
    distinct(observations.iter().map(|o| o.region.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

/// The independent time series for one (category, region) pair, by date.
pub fn series_for(observations: &[ForecastObservation], category: &str, region: &str) -> Vec<ForecastObservation> {
    let mut series: Vec<ForecastObservation> = observations
        .iter()
        .filter(|o| o.belongs_to(category, region))
        .cloned()
        .collect();
    series.sort_by_key(|o| o.date);
    series
}

/// Sort by date, then cut at `floor(len * fraction)`.
/// The fraction is clamped to [0, 1]; the prefix is historical.
pub fn split_historical_forecast(series: &[ForecastObservation], historical_fraction: f64) -> ForecastSplit {
    let mut ordered = series.to_vec();
    ordered.sort_by_key(|o| o.date);

    let fraction = if historical_fraction.is_nan() { 0.0 } else { historical_fraction.clamp(0.0, 1.0) };
    let split_at = ((ordered.len() as f64) * fraction).floor() as usize;
    let forecast = ordered.split_off(split_at.min(ordered.len()));

    ForecastSplit { historical: ordered, forecast }
}

/// MAPE over the historical points, as a percentage (10.0 == 10%).
///
/// Points without an actual value, or with `actual == 0`, are skipped.
/// `None` when no point is left.
pub fn mean_absolute_percentage_error(historical: &[ForecastObservation]) -> Option<f64> {
    mean(historical.iter().filter_map(|o| {
        let actual = o.actual.filter(|a| *a != 0.0)?;
        Some((actual - o.predicted).abs() / actual)
    }))
    .map(|fraction| fraction * 100.0)
}

/// `100 - MAPE`: the headline accuracy figure.
pub fn forecast_accuracy_percent(historical: &[ForecastObservation]) -> Option<f64> {
    mean_absolute_percentage_error(historical).map(|mape| 100.0 - mape)
}

/// `(mean(forecast) - mean(recent)) / mean(recent) * 100`.
pub fn trend_percent(recent_actual_window: &[f64], forecast_window: &[f64]) -> Option<f64> {
    let recent = mean(recent_actual_window.iter().copied())?;
    let forecast = mean(forecast_window.iter().copied())?;
    percent_change(recent, forecast)
}

/// Trend between the trailing `window` historical actuals and the
/// leading `window` forecast predictions.
pub fn forecast_trend(split: &ForecastSplit, window: usize) -> Option<f64> {
    let recent: Vec<f64> = trailing(&split.historical, window)
        .iter()
        .filter_map(|o| o.actual)
        .collect();
    let upcoming: Vec<f64> = leading(&split.forecast, window).iter().map(|o| o.predicted).collect();
    trend_percent(&recent, &upcoming)
}
