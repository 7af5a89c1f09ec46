//! Chart-ready aggregations over the generated datasets.
//!
//! Every function here is pure: same input slice, same output. Nothing
//! panics on empty input; undefined averages and ratios come back as
//! `None` and empty groups are left out of the result.

pub mod churn;
pub mod experiment;
pub mod forecast;
pub mod real_estate;

pub use churn::{risk_distribution, RiskShare};
pub use experiment::{
    conversion_series, experiment_lift, experiment_summary, pivot_by_date_and_variant,
    revenue_series, DailyVariantPivot, ExperimentLift, ExperimentSummary, VariantMetrics,
    VariantPoint,
};
pub use forecast::{
    categories, forecast_accuracy_percent, forecast_trend, mean_absolute_percentage_error,
    regions, series_for, split_historical_forecast, trend_percent, ForecastSplit,
    DEFAULT_HISTORICAL_FRACTION, FORECAST_TREND_WINDOW,
};
pub use real_estate::{
    bedroom_price_summary, cities, city_price_summary, filter_by_city, market_stats,
    price_vs_sqft, upper_median, BedroomPriceSummary, CityPriceSummary, MarketStats, PricePoint,
};

/// The last `n` items (or all of them when shorter).
pub fn trailing<T>(items: &[T], n: usize) -> &[T] {
    &items[items.len().saturating_sub(n)..]
}

/// The first `n` items (or all of them when shorter).
pub fn leading<T>(items: &[T], n: usize) -> &[T] {
    &items[..n.min(items.len())]
}
