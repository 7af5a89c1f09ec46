use crate::churn::{CustomerRecord, RiskTier};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskShare {
    pub tier:       RiskTier,
    pub count:      usize,
    /// Whole percent of all customers.
    pub percentage: u32,
}

/// Count customers per risk tier, in Low, Medium, High order.
/// Tiers with no customers are omitted.
pub fn risk_distribution(customers: &[CustomerRecord]) -> Vec<RiskShare> {
    let total = customers.len();
    if total == 0 {
        return Vec::new();
    }

    let mut counts = [0usize; 3];
    for customer in customers {
        counts[tier_slot(customer.churn_risk)] += 1;
    }

    RiskTier::ALL
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(&tier, count)| RiskShare {
            tier,
            count,
            percentage: (count as f64 / total as f64 * 100.0).round() as u32,
        })
        .collect()
}

fn tier_slot(tier: RiskTier) -> usize {
    match tier {
        RiskTier::Low => 0,
        RiskTier::Medium => 1,
        RiskTier::High => 2,
    }
}
