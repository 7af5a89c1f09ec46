//! Sales forecast dataset.
//!
//! One observation per (day, category, region). Each (category, region)
//! pair is an independent daily series:
//!   actual    = base + seasonal(sine) + linear trend + noise, floored at 0
//!   predicted = actual +/- prediction_error
//!   bounds    = predicted +/- uncertainty (lower floored at 0)

use crate::{
    config::SalesConfig,
    rng::StreamRng,
    types::{Date, DayIndex},
};
use chrono::Days;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastObservation {
    pub date:        Date,
    /// Absent for dates that have not been observed yet.
    pub actual:      Option<f64>,
    pub predicted:   f64,
    pub upper_bound: f64,
    pub lower_bound: f64,
    pub category:    String,
    pub region:      String,
}

impl ForecastObservation {
    pub fn belongs_to(&self, category: &str, region: &str) -> bool {
        self.category == category && self.region == region
    }
}

/// Seasonal + trend level for a given day, before noise.
pub fn expected_level(config: &SalesConfig, day: DayIndex, base: f64) -> f64 {
    let phase = f64::from(day) / config.seasonal_period_days * 2.0 * PI;
    let seasonality = phase.sin() * config.seasonal_amplitude;
    base + seasonality * base + f64::from(day) * config.trend_per_day
}

pub fn generate_sales(config: &SalesConfig, rng: &mut StreamRng) -> Vec<ForecastObservation> {
    let capacity = config.days as usize * config.categories.len() * config.regions.len();
    let mut observations = Vec::with_capacity(capacity);

    for day in 0..config.days {
        let Some(date) = config.start_date.checked_add_days(Days::new(u64::from(day))) else {
            log::warn!("{}: date overflow at day {day}, stopping", rng.name);
            break;
        };
        let observed = config.actuals_through_day.map_or(true, |last| day <= last);

        for category in &config.categories {
            for region in &config.regions {
                let base = rng.uniform(config.base_min, config.base_max);
                let actual = (expected_level(config, day, base) + rng.noise(config.noise_amplitude)).max(0.0);
                let predicted = (actual + rng.noise(config.prediction_error) * actual).max(0.0);
                let uncertainty = actual * config.uncertainty;

                observations.push(ForecastObservation {
                    date,
                    actual: observed.then(|| actual.round()),
                    predicted: predicted.round(),
                    upper_bound: (predicted + uncertainty).round(),
                    lower_bound: (predicted - uncertainty).max(0.0).round(),
                    category: category.clone(),
                    region: region.clone(),
                });
            }
        }
    }

    log::debug!("{}: generated {} observations", rng.name, observations.len());
    observations
}
