//! Dashboard snapshot: every chart input for one filter selection.
//!
//! A snapshot is re-derived from the immutable datasets whenever a filter
//! changes. Nothing is cached between snapshots.

use crate::{
    ab_test::Variant,
    analytics::{
        bedroom_price_summary, categories, cities, city_price_summary, conversion_series,
        experiment_lift, experiment_summary, filter_by_city, forecast_accuracy_percent,
        forecast_trend, market_stats, mean_absolute_percentage_error, pivot_by_date_and_variant,
        price_vs_sqft, regions, revenue_series, risk_distribution, series_for,
        split_historical_forecast, trailing, BedroomPriceSummary, CityPriceSummary,
        DailyVariantPivot, ExperimentLift, ExperimentSummary, ForecastSplit, MarketStats,
        PricePoint, RiskShare, VariantPoint, DEFAULT_HISTORICAL_FRACTION, FORECAST_TREND_WINDOW,
    },
    datasets::Datasets,
    error::PortfolioResult,
    model_performance::{ModelPerformance, MODEL_PERFORMANCE},
};
use serde::{Deserialize, Serialize};

/// Days of conversion rates shown on the line chart.
pub const CONVERSION_CHART_DAYS: usize = 30;
/// Days of revenue shown on the bar chart.
pub const REVENUE_CHART_DAYS: usize = 14;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardFilters {
    /// `None` shows every city.
    pub city:                Option<String>,
    pub category:            String,
    pub region:              String,
    pub historical_fraction: f64,
}

impl Default for DashboardFilters {
    fn default() -> Self {
        Self {
            city: None,
            category: "Electronics".into(),
            region: "North".into(),
            historical_fraction: DEFAULT_HISTORICAL_FRACTION,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChurnSection {
    pub customers:         usize,
    pub risk_distribution: Vec<RiskShare>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RealEstateSection {
    pub cities:           Vec<String>,
    pub selected_city:    Option<String>,
    pub price_by_city:    Vec<CityPriceSummary>,
    pub price_by_bedroom: Vec<BedroomPriceSummary>,
    pub market:           Option<MarketStats>,
    pub scatter:          Vec<PricePoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperimentSection {
    pub control:          ExperimentSummary,
    pub treatment:        ExperimentSummary,
    pub lift:             ExperimentLift,
    pub daily:            Vec<DailyVariantPivot>,
    pub conversion_chart: Vec<VariantPoint>,
    pub revenue_chart:    Vec<VariantPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastSection {
    pub categories:    Vec<String>,
    pub regions:       Vec<String>,
    pub category:      String,
    pub region:        String,
    pub split:         ForecastSplit,
    pub mape:          Option<f64>,
    pub accuracy:      Option<f64>,
    pub trend_percent: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub seed:              u64,
    pub filters:           DashboardFilters,
    pub churn:             ChurnSection,
    pub real_estate:       RealEstateSection,
    pub experiment:        ExperimentSection,
    pub forecast:          ForecastSection,
    pub model_performance: ModelPerformance,
}

impl DashboardSnapshot {
    pub fn build(datasets: &Datasets, filters: &DashboardFilters) -> Self {
        Self {
            seed: datasets.seed(),
            filters: filters.clone(),
            churn: churn_section(datasets),
            real_estate: real_estate_section(datasets, filters.city.as_deref()),
            experiment: experiment_section(datasets),
            forecast: forecast_section(datasets, filters),
            model_performance: MODEL_PERFORMANCE,
        }
    }

    pub fn to_json(&self) -> PortfolioResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn churn_section(datasets: &Datasets) -> ChurnSection {
    ChurnSection {
        customers: datasets.customers().len(),
        risk_distribution: risk_distribution(datasets.customers()),
    }
}

fn real_estate_section(datasets: &Datasets, city: Option<&str>) -> RealEstateSection {
    let properties = datasets.properties();
    let selected = filter_by_city(properties, city);
    if let (Some(city), true) = (city, selected.is_empty()) {
        log::warn!("city filter '{city}' matched no listings");
    }

    RealEstateSection {
        cities: cities(properties),
        selected_city: city.map(str::to_string),
        // The city comparison chart always covers every city.
        price_by_city: city_price_summary(properties, None),
        price_by_bedroom: bedroom_price_summary(selected.iter().copied()),
        market: market_stats(selected.iter().copied()),
        scatter: price_vs_sqft(selected.iter().copied()),
    }
}

fn experiment_section(datasets: &Datasets) -> ExperimentSection {
    let observations = datasets.experiment();
    let control = experiment_summary(observations, Variant::Control);
    let treatment = experiment_summary(observations, Variant::Treatment);
    let lift = experiment_lift(&control, &treatment);
    let daily = pivot_by_date_and_variant(observations);
    let conversion_chart = trailing(&conversion_series(&daily), CONVERSION_CHART_DAYS).to_vec();
    let revenue_chart = trailing(&revenue_series(&daily), REVENUE_CHART_DAYS).to_vec();

    ExperimentSection { control, treatment, lift, daily, conversion_chart, revenue_chart }
}

fn forecast_section(datasets: &Datasets, filters: &DashboardFilters) -> ForecastSection {
    let observations = datasets.sales();
    let series = series_for(observations, &filters.category, &filters.region);
    if series.is_empty() {
        log::warn!(
            "no sales series for category='{}' region='{}'",
            filters.category,
            filters.region
        );
    }
    let split = split_historical_forecast(&series, filters.historical_fraction);

    ForecastSection {
        categories: categories(observations),
        regions: regions(observations),
        category: filters.category.clone(),
        region: filters.region.clone(),
        mape: mean_absolute_percentage_error(&split.historical),
        accuracy: forecast_accuracy_percent(&split.historical),
        trend_percent: forecast_trend(&split, FORECAST_TREND_WINDOW),
        split,
    }
}
