//! Customer churn dataset.
//!
//! Each customer carries a heuristic churn probability built from tenure,
//! monthly charges and age, plus noise. The risk tier is derived from the
//! stored (rounded) probability so the two always agree.

use crate::{
    config::ChurnConfig,
    rng::StreamRng,
    stats::round_to,
    types::RecordId,
};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const HIGH_RISK_THRESHOLD: f64 = 0.6;
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.3;

/// Fixed showcase customers that lead the dataset.
const SHOWCASE_COUNT: usize = 3;

// ── Public types ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub const ALL: [RiskTier; 3] = [RiskTier::Low, RiskTier::Medium, RiskTier::High];

    pub fn from_probability(probability: f64) -> Self {
        if probability > HIGH_RISK_THRESHOLD {
            RiskTier::High
        } else if probability > MEDIUM_RISK_THRESHOLD {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractType {
    Monthly,
    Yearly,
    #[serde(rename = "Two-Year")]
    TwoYear,
}

impl ContractType {
    pub const ALL: [ContractType; 3] = [ContractType::Monthly, ContractType::Yearly, ContractType::TwoYear];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InternetService {
    #[serde(rename = "DSL")]
    Dsl,
    Fiber,
    No,
}

impl InternetService {
    pub const ALL: [InternetService; 3] = [InternetService::Dsl, InternetService::Fiber, InternetService::No];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    #[serde(rename = "Electronic Check")]
    ElectronicCheck,
    #[serde(rename = "Mailed Check")]
    MailedCheck,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::CreditCard,
        PaymentMethod::BankTransfer,
        PaymentMethod::ElectronicCheck,
        PaymentMethod::MailedCheck,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub customer_id:       RecordId,
    pub age:               u32,
    pub tenure_months:     u32,
    pub monthly_charges:   f64,
    pub total_charges:     f64,
    pub churn_probability: f64,
    pub churn_risk:        RiskTier,
    pub contract_type:     ContractType,
    pub internet_service:  InternetService,
    pub payment_method:    PaymentMethod,
}

impl CustomerRecord {
    /// Build a record whose tier and total charges are derived, never supplied.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        customer_id: RecordId,
        age: u32,
        tenure_months: u32,
        monthly_charges: f64,
        churn_probability: f64,
        contract_type: ContractType,
        internet_service: InternetService,
        payment_method: PaymentMethod,
    ) -> Self {
        let monthly_charges = round_to(monthly_charges, 2);
        let churn_probability = round_to(churn_probability, 2);
        Self {
            customer_id,
            age,
            tenure_months,
            monthly_charges,
            total_charges: round_to(monthly_charges * f64::from(tenure_months), 2),
            churn_probability,
            churn_risk: RiskTier::from_probability(churn_probability),
            contract_type,
            internet_service,
            payment_method,
        }
    }
}

pub fn customer_id(index: usize) -> RecordId {
    format!("CUST{index:03}")
}

// ── Generator ────────────────────────────────────────────────────────────────

/// Heuristic churn probability before noise and clamping.
pub fn base_churn_probability(config: &ChurnConfig, tenure_months: u32, monthly_charges: f64, age: u32) -> f64 {
    let mut probability = config.base_probability;
    if tenure_months < config.short_tenure_months {
        probability += config.short_tenure_penalty;
    }
    if monthly_charges > config.high_charges_threshold {
        probability += config.high_charges_penalty;
    }
    if age < config.young_age_threshold {
        probability += config.young_age_penalty;
    }
    probability
}

fn showcase_customers() -> Vec<CustomerRecord> {
    vec![
        CustomerRecord::new(
            customer_id(1), 35, 24, 85.50, 0.15,
            ContractType::Yearly, InternetService::Fiber, PaymentMethod::CreditCard,
        ),
        CustomerRecord::new(
            customer_id(2), 42, 6, 120.00, 0.75,
            ContractType::Monthly, InternetService::Fiber, PaymentMethod::BankTransfer,
        ),
        CustomerRecord::new(
            customer_id(3), 28, 36, 65.00, 0.08,
            ContractType::TwoYear, InternetService::Dsl, PaymentMethod::CreditCard,
        ),
    ]
}

pub fn generate_customers(config: &ChurnConfig, rng: &mut StreamRng) -> Vec<CustomerRecord> {
    let n = config.customer_count;
    let mut customers = showcase_customers();
    customers.truncate(n);
    customers.reserve(n.saturating_sub(customers.len()));

    for index in (SHOWCASE_COUNT + 1)..=n {
        let tenure_months = rng.int_inclusive(config.tenure_months_min, config.tenure_months_max);
        let monthly_charges =
            f64::from(rng.int_inclusive(config.monthly_charges_min, config.monthly_charges_max));
        let age = rng.int_inclusive(config.age_min, config.age_max);

        let probability = (base_churn_probability(config, tenure_months, monthly_charges, age)
            + rng.noise(config.noise_amplitude))
        .clamp(config.probability_floor, config.probability_ceiling);

        let contract_type = *rng.pick(&ContractType::ALL).unwrap_or(&ContractType::Monthly);
        let internet_service = *rng.pick(&InternetService::ALL).unwrap_or(&InternetService::No);
        let payment_method = *rng.pick(&PaymentMethod::ALL).unwrap_or(&PaymentMethod::CreditCard);

        customers.push(CustomerRecord::new(
            customer_id(index),
            age,
            tenure_months,
            monthly_charges,
            probability,
            contract_type,
            internet_service,
            payment_method,
        ));
    }

    log::debug!("{}: generated {} customers", rng.name, customers.len());
    customers
}
