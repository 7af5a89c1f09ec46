use crate::{
    error::{PortfolioError, PortfolioResult},
    types::{Date, DayIndex},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ── Churn ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChurnConfig {
    /// Total customers, including the fixed showcase records.
    pub customer_count: usize,
    pub tenure_months_min: u32,
    pub tenure_months_max: u32,
    pub monthly_charges_min: u32,
    pub monthly_charges_max: u32,
    pub age_min: u32,
    pub age_max: u32,
    pub base_probability: f64,
    pub short_tenure_months: u32,
    pub short_tenure_penalty: f64,
    pub high_charges_threshold: f64,
    pub high_charges_penalty: f64,
    pub young_age_threshold: u32,
    pub young_age_penalty: f64,
    pub noise_amplitude: f64,
    pub probability_floor: f64,
    pub probability_ceiling: f64,
}

impl Default for ChurnConfig {
    fn default() -> Self {
        Self {
            customer_count: 100,
            tenure_months_min: 1,
            tenure_months_max: 60,
            monthly_charges_min: 30,
            monthly_charges_max: 129,
            age_min: 20,
            age_max: 69,
            base_probability: 0.3,
            short_tenure_months: 12,
            short_tenure_penalty: 0.3,
            high_charges_threshold: 80.0,
            high_charges_penalty: 0.2,
            young_age_threshold: 30,
            young_age_penalty: 0.1,
            noise_amplitude: 0.15,
            probability_floor: 0.05,
            probability_ceiling: 0.95,
        }
    }
}

// ── Real estate ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityProfile {
    pub name: String,
    pub state: String,
    pub base_price_per_sqft: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl CityProfile {
    fn new(name: &str, state: &str, base: f64, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            state: state.into(),
            base_price_per_sqft: base,
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RealEstateConfig {
    pub property_count: usize,
    pub cities: Vec<CityProfile>,
    pub sqft_min: u32,
    pub sqft_max: u32,
    pub bedrooms_max: u32,
    pub bathrooms_max: u32,
    pub year_built_min: u32,
    pub year_built_max: u32,
    pub lot_size_min: u32,
    pub lot_size_max: u32,
    pub days_on_market_max: u32,
    /// Multiplier range applied to a city's base price per sqft.
    pub price_jitter_min: f64,
    pub price_jitter_max: f64,
    /// Full width of the lat/long scatter around the city centre.
    pub coordinate_spread: f64,
}

impl Default for RealEstateConfig {
    fn default() -> Self {
        Self {
            property_count: 300,
            cities: vec![
                CityProfile::new("San Francisco", "CA", 800.0, 37.7749, -122.4194),
                CityProfile::new("Austin", "TX", 300.0, 30.2672, -97.7431),
                CityProfile::new("Denver", "CO", 400.0, 39.7392, -104.9903),
                CityProfile::new("Seattle", "WA", 600.0, 47.6062, -122.3321),
                CityProfile::new("Miami", "FL", 350.0, 25.7617, -80.1918),
            ],
            sqft_min: 800,
            sqft_max: 3799,
            bedrooms_max: 5,
            bathrooms_max: 3,
            year_built_min: 1970,
            year_built_max: 2019,
            lot_size_min: 2000,
            lot_size_max: 11999,
            days_on_market_max: 120,
            price_jitter_min: 0.7,
            price_jitter_max: 1.3,
            coordinate_spread: 0.5,
        }
    }
}

// ── A/B test ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AbTestConfig {
    pub start_date: Date,
    pub days: DayIndex,
    /// Daily visitors are drawn from [visitors_min, visitors_max).
    pub visitors_min: u32,
    pub visitors_max: u32,
    pub control_rate: f64,
    pub treatment_rate: f64,
    pub rate_noise: f64,
    pub average_order_value: f64,
}

impl Default for AbTestConfig {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            days: 90,
            visitors_min: 1000,
            visitors_max: 1500,
            control_rate: 0.12,
            treatment_rate: 0.15,
            rate_noise: 0.02,
            average_order_value: 50.0,
        }
    }
}

// ── Sales forecast ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SalesConfig {
    pub start_date: Date,
    pub days: DayIndex,
    pub categories: Vec<String>,
    pub regions: Vec<String>,
    pub base_min: f64,
    pub base_max: f64,
    pub seasonal_amplitude: f64,
    pub seasonal_period_days: f64,
    pub trend_per_day: f64,
    pub noise_amplitude: f64,
    /// Half-width of the predicted-vs-actual error, as a fraction of actual.
    pub prediction_error: f64,
    /// Confidence band half-width, as a fraction of actual.
    pub uncertainty: f64,
    /// Observations after this day carry no actual value.
    pub actuals_through_day: Option<DayIndex>,
}

impl Default for SalesConfig {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            days: 365,
            categories: ["Electronics", "Clothing", "Home & Garden", "Sports", "Books"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            regions: ["North", "South", "East", "West"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            base_min: 10_000.0,
            base_max: 60_000.0,
            seasonal_amplitude: 0.3,
            seasonal_period_days: 365.0,
            trend_per_day: 50.0,
            noise_amplitude: 2_500.0,
            prediction_error: 0.05,
            uncertainty: 0.15,
            actuals_through_day: None,
        }
    }
}

fn default_start_date() -> Date {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

// ── Top level ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub churn: ChurnConfig,
    pub real_estate: RealEstateConfig,
    pub ab_test: AbTestConfig,
    pub sales: SalesConfig,
}

impl DatasetConfig {
    /// Load from a JSON file. Missing fields fall back to the defaults.
    /// In tests, use DatasetConfig::default_test().
    pub fn load(path: &str) -> PortfolioResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: DatasetConfig = serde_json::from_str(&content)?;
        config.validate()?;
        log::debug!("Loaded dataset config from {path}");
        Ok(config)
    }

    /// Small cardinalities for fast tests. Same shapes as the defaults.
    pub fn default_test() -> Self {
        let mut config = Self::default();
        config.churn.customer_count = 40;
        config.real_estate.property_count = 60;
        config.ab_test.days = 14;
        config.sales.days = 60;
        config.sales.categories.truncate(2);
        config.sales.regions.truncate(2);
        config
    }

    pub fn validate(&self) -> PortfolioResult<()> {
        let churn = &self.churn;
        if churn.tenure_months_min > churn.tenure_months_max {
            return Err(PortfolioError::invalid("churn.tenure_months", "min exceeds max"));
        }
        if churn.monthly_charges_min > churn.monthly_charges_max {
            return Err(PortfolioError::invalid("churn.monthly_charges", "min exceeds max"));
        }
        if churn.age_min > churn.age_max {
            return Err(PortfolioError::invalid("churn.age", "min exceeds max"));
        }
        if !(0.0..=1.0).contains(&churn.probability_floor)
            || !(0.0..=1.0).contains(&churn.probability_ceiling)
            || churn.probability_floor > churn.probability_ceiling
        {
            return Err(PortfolioError::invalid(
                "churn.probability_floor",
                "floor and ceiling must satisfy 0 <= floor <= ceiling <= 1",
            ));
        }

        let estate = &self.real_estate;
        if estate.property_count > 0 && estate.cities.is_empty() {
            return Err(PortfolioError::invalid("real_estate.cities", "must not be empty"));
        }
        if estate.cities.iter().any(|c| c.base_price_per_sqft <= 0.0) {
            return Err(PortfolioError::invalid(
                "real_estate.cities",
                "base_price_per_sqft must be positive",
            ));
        }
        if estate.sqft_min == 0 || estate.sqft_min > estate.sqft_max {
            return Err(PortfolioError::invalid("real_estate.sqft", "need 0 < min <= max"));
        }
        if estate.bedrooms_max == 0 || estate.bathrooms_max == 0 {
            return Err(PortfolioError::invalid("real_estate.rooms", "maxima must be at least 1"));
        }
        if estate.price_jitter_min <= 0.0 || estate.price_jitter_min > estate.price_jitter_max {
            return Err(PortfolioError::invalid("real_estate.price_jitter", "need 0 < min <= max"));
        }
        if estate.year_built_min > estate.year_built_max {
            return Err(PortfolioError::invalid("real_estate.year_built", "min exceeds max"));
        }
        if estate.lot_size_min > estate.lot_size_max {
            return Err(PortfolioError::invalid("real_estate.lot_size", "min exceeds max"));
        }
        if estate.days_on_market_max == 0 {
            return Err(PortfolioError::invalid("real_estate.days_on_market_max", "must be at least 1"));
        }

        let ab = &self.ab_test;
        if ab.visitors_min == 0 || ab.visitors_min >= ab.visitors_max {
            return Err(PortfolioError::invalid("ab_test.visitors", "need 0 < min < max"));
        }
        let rate_in_bounds = |rate: f64| {
            (0.0..=1.0).contains(&(rate - ab.rate_noise)) && (0.0..=1.0).contains(&(rate + ab.rate_noise))
        };
        if !rate_in_bounds(ab.control_rate) || !rate_in_bounds(ab.treatment_rate) {
            return Err(PortfolioError::invalid("ab_test.rates", "rates +/- noise must stay in [0, 1]"));
        }

        let sales = &self.sales;
        if sales.days > 0 && (sales.categories.is_empty() || sales.regions.is_empty()) {
            return Err(PortfolioError::invalid(
                "sales.categories",
                "categories and regions must not be empty",
            ));
        }
        if sales.seasonal_period_days <= 0.0 {
            return Err(PortfolioError::invalid("sales.seasonal_period_days", "must be positive"));
        }
        if sales.base_min < 0.0 || sales.base_min > sales.base_max {
            return Err(PortfolioError::invalid("sales.base", "need 0 <= min <= max"));
        }
        if !(0.0..=1.0).contains(&sales.prediction_error) {
            return Err(PortfolioError::invalid("sales.prediction_error", "must be in [0, 1]"));
        }
        // A negative band would put upper_bound below lower_bound.
        if sales.uncertainty.is_nan() || sales.uncertainty < 0.0 {
            return Err(PortfolioError::invalid("sales.uncertainty", "must be non-negative"));
        }
        Ok(())
    }
}
