//! The dataset bank: builds every collection once, then hands them out
//! read-only.
//!
//! GENERATION ORDER (fixed, each dataset on its own RNG slot):
//!   1. Churn customers
//!   2. Real-estate listings
//!   3. A/B experiment observations
//!   4. Sales forecast observations
//!
//! RULES:
//!   - Generation happens once, in the composition root.
//!   - Collections are never mutated afterwards; consumers borrow slices.
//!   - All randomness flows through the RngBank.

use crate::{
    ab_test::{generate_experiment, ExperimentObservation},
    churn::{generate_customers, CustomerRecord},
    config::DatasetConfig,
    error::PortfolioResult,
    real_estate::{generate_properties, PropertyRecord},
    rng::{DatasetSlot, RngBank},
    sales::{generate_sales, ForecastObservation},
};

#[derive(Debug, Clone)]
pub struct Datasets {
    seed:        u64,
    customers:   Vec<CustomerRecord>,
    properties:  Vec<PropertyRecord>,
    experiment:  Vec<ExperimentObservation>,
    sales:       Vec<ForecastObservation>,
}

impl Datasets {
    /// Validate the config and generate all four collections from `seed`.
    pub fn generate(config: &DatasetConfig, seed: u64) -> PortfolioResult<Self> {
        config.validate()?;
        let bank = RngBank::new(seed);

        let customers = generate_customers(&config.churn, &mut bank.for_dataset(DatasetSlot::Churn));
        let properties =
            generate_properties(&config.real_estate, &mut bank.for_dataset(DatasetSlot::RealEstate));
        let experiment = generate_experiment(&config.ab_test, &mut bank.for_dataset(DatasetSlot::AbTest));
        let sales = generate_sales(&config.sales, &mut bank.for_dataset(DatasetSlot::Sales));

        log::info!(
            "datasets ready (seed={seed}): customers={} properties={} experiment={} sales={}",
            customers.len(),
            properties.len(),
            experiment.len(),
            sales.len()
        );

        Ok(Self { seed, customers, properties, experiment, sales })
    }

    /// Generate with the default config.
    pub fn with_defaults(seed: u64) -> PortfolioResult<Self> {
        Self::generate(&DatasetConfig::default(), seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn customers(&self) -> &[CustomerRecord] {
        &self.customers
    }

    pub fn properties(&self) -> &[PropertyRecord] {
        &self.properties
    }

    pub fn experiment(&self) -> &[ExperimentObservation] {
        &self.experiment
    }

    pub fn sales(&self) -> &[ForecastObservation] {
        &self.sales
    }
}
