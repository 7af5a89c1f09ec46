use crate::{
    ab_test::{ExperimentObservation, Variant},
    stats::{mean, percent_change},
    types::Date,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantMetrics {
    pub conversion_rate: f64,
    pub visitors:        u32,
    pub conversions:     u32,
    pub revenue:         f64,
}

impl From<&ExperimentObservation> for VariantMetrics {
    fn from(obs: &ExperimentObservation) -> Self {
        Self {
            conversion_rate: obs.conversion_rate,
            visitors: obs.visitors,
            conversions: obs.conversions,
            revenue: obs.revenue,
        }
    }
}

/// Both arms of the experiment for one day. Either arm may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyVariantPivot {
    pub date:      Date,
    pub control:   Option<VariantMetrics>,
    pub treatment: Option<VariantMetrics>,
}

impl DailyVariantPivot {
    pub fn get(&self, variant: Variant) -> Option<&VariantMetrics> {
        match variant {
            Variant::Control => self.control.as_ref(),
            Variant::Treatment => self.treatment.as_ref(),
        }
    }

    fn slot_mut(&mut self, variant: Variant) -> &mut Option<VariantMetrics> {
        match variant {
            Variant::Control => &mut self.control,
            Variant::Treatment => &mut self.treatment,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentSummary {
    pub variant:             Variant,
    pub days:                usize,
    pub total_visitors:      u64,
    pub total_conversions:   u64,
    pub total_revenue:       f64,
    /// Unweighted mean of the daily conversion rates, in percent.
    pub avg_conversion_rate: Option<f64>,
}

/// Relative improvement of Treatment over Control, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentLift {
    pub conversion_rate_pct: Option<f64>,
    pub revenue_pct:         Option<f64>,
}

/// One plotted value per day and arm; a missing arm plots as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantPoint {
    pub date:      Date,
    pub control:   f64,
    pub treatment: f64,
}

/// One entry per distinct date, in first-seen order.
///
/// Built in a single pass over a date -> position index. A repeated
/// (date, variant) pair replaces the earlier metrics.
pub fn pivot_by_date_and_variant(observations: &[ExperimentObservation]) -> Vec<DailyVariantPivot> {
    let mut index: HashMap<Date, usize> = HashMap::new();
    let mut pivots: Vec<DailyVariantPivot> = Vec::new();

    for obs in observations {
        let pos = *index.entry(obs.date).or_insert_with(|| {
            pivots.push(DailyVariantPivot { date: obs.date, control: None, treatment: None });
            pivots.len() - 1
        });
        *pivots[pos].slot_mut(obs.variant) = Some(VariantMetrics::from(obs));
    }

    pivots
}

/// Totals for one arm. The average rate is the plain mean of each day's
/// `conversion_rate`, not total conversions over total visitors.
pub fn experiment_summary(observations: &[ExperimentObservation], variant: Variant) -> ExperimentSummary {
    let rows: Vec<&ExperimentObservation> = observations.iter().filter(|o| o.variant == variant).collect();

    ExperimentSummary {
        variant,
        days: rows.len(),
        total_visitors: rows.iter().map(|o| u64::from(o.visitors)).sum(),
        total_conversions: rows.iter().map(|o| u64::from(o.conversions)).sum(),
        total_revenue: rows.iter().map(|o| o.revenue).sum(),
        avg_conversion_rate: mean(rows.iter().map(|o| o.conversion_rate)),
    }
}

pub fn experiment_lift(control: &ExperimentSummary, treatment: &ExperimentSummary) -> ExperimentLift {
    let conversion_rate_pct = match (control.avg_conversion_rate, treatment.avg_conversion_rate) {
        (Some(c), Some(t)) => percent_change(c, t),
        _ => None,
    };
    ExperimentLift {
        conversion_rate_pct,
        revenue_pct: percent_change(control.total_revenue, treatment.total_revenue),
    }
}

pub fn conversion_series(pivots: &[DailyVariantPivot]) -> Vec<VariantPoint> {
    series_of(pivots, |m| m.conversion_rate)
}

pub fn revenue_series(pivots: &[DailyVariantPivot]) -> Vec<VariantPoint> {
    series_of(pivots, |m| m.revenue)
}

fn series_of(pivots: &[DailyVariantPivot], value: impl Fn(&VariantMetrics) -> f64) -> Vec<VariantPoint> {
    pivots
        .iter()
        .map(|p| VariantPoint {
            date: p.date,
            control: p.control.as_ref().map_or(0.0, &value),
            treatment: p.treatment.as_ref().map_or(0.0, &value),
        })
        .collect()
}
