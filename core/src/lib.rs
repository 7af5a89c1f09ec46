//! Data core for the portfolio dashboard: seeded synthetic datasets and
//! the pure aggregations that feed its charts.

pub mod analytics;
pub mod churn;
pub mod config;
pub mod dashboard;
pub mod datasets;
pub mod error;
pub mod model_performance;
pub mod real_estate;
pub mod rng;
pub mod sales;
pub mod stats;
pub mod types;
