//! A/B experiment observations, pivot and summaries.

use chrono::NaiveDate;
use portfolio_core::{
    ab_test::{generate_experiment, ExperimentObservation, Variant},
    analytics::{
        conversion_series, experiment_lift, experiment_summary, pivot_by_date_and_variant,
        revenue_series,
    },
    config::AbTestConfig,
    datasets::Datasets,
    rng::{DatasetSlot, RngBank},
};
use std::collections::HashSet;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

fn obs(d: u32, variant: Variant, visitors: u32, conversions: u32) -> ExperimentObservation {
    ExperimentObservation::new(day(d), variant, visitors, conversions, 50.0)
}

/// Three days: Control 10/12/11 %, Treatment 14/13/15 %.
fn three_day_series() -> Vec<ExperimentObservation> {
    vec![
        obs(1, Variant::Control, 1000, 100),
        obs(1, Variant::Treatment, 1000, 140),
        obs(2, Variant::Control, 1000, 120),
        obs(2, Variant::Treatment, 1000, 130),
        obs(3, Variant::Control, 1000, 110),
        obs(3, Variant::Treatment, 1000, 150),
    ]
}

fn default_experiment(seed: u64) -> Vec<ExperimentObservation> {
    Datasets::with_defaults(seed).unwrap().experiment().to_vec()
}

// ── Generator ────────────────────────────────────────────────────────────────

#[test]
fn ninety_days_two_variants_per_day() {
    let observations = default_experiment(42);
    assert_eq!(observations.len(), 180);
    assert_eq!(observations[0].date, day(1));
    assert_eq!(observations[0].variant, Variant::Control);
    assert_eq!(observations[1].variant, Variant::Treatment);
    assert_eq!(observations[179].date, NaiveDate::from_ymd_opt(2024, 3, 30).unwrap());
}

#[test]
fn observation_fields_are_consistent() {
    for seed in 0..10 {
        for o in default_experiment(seed) {
            assert!((1000..1500).contains(&o.visitors), "visitors {}", o.visitors);
            assert!(o.conversions <= o.visitors);
            let rate = f64::from(o.conversions) / f64::from(o.visitors) * 100.0;
            assert!((rate - o.conversion_rate).abs() <= 0.005 + 1e-9);
            assert_eq!(o.revenue, f64::from(o.conversions) * 50.0);
            assert!((o.revenue / f64::from(o.visitors) - o.revenue_per_visitor).abs() <= 0.005 + 1e-9);
        }
    }
}

#[test]
fn daily_rates_stay_near_their_centres() {
    for o in default_experiment(3) {
        let (lo, hi) = match o.variant {
            Variant::Control => (9.9, 14.1),
            Variant::Treatment => (12.9, 17.1),
        };
        assert!(
            (lo..=hi).contains(&o.conversion_rate),
            "{} rate {} on {}",
            o.variant,
            o.conversion_rate,
            o.date
        );
    }
}

#[test]
fn conversions_never_exceed_visitors_even_when_supplied() {
    let o = obs(1, Variant::Control, 10, 25);
    assert_eq!(o.conversions, 10);
    assert_eq!(o.conversion_rate, 100.0);

    let empty = obs(1, Variant::Control, 0, 0);
    assert_eq!(empty.conversion_rate, 0.0);
    assert_eq!(empty.revenue_per_visitor, 0.0);
}

// ── Summary ──────────────────────────────────────────────────────────────────

#[test]
fn summary_scenario_averages_daily_rates() {
    let series = three_day_series();

    let control = experiment_summary(&series, Variant::Control);
    assert_eq!(control.days, 3);
    assert_eq!(control.total_visitors, 3000);
    assert_eq!(control.total_conversions, 330);
    assert_eq!(control.total_revenue, 16_500.0);
    assert!((control.avg_conversion_rate.unwrap() - 11.0).abs() < 1e-9);

    let treatment = experiment_summary(&series, Variant::Treatment);
    assert!((treatment.avg_conversion_rate.unwrap() - 14.0).abs() < 1e-9);
}

#[test]
fn summary_uses_unweighted_daily_mean() {
    // 10% on 100 visitors and 20% on 900 visitors:
    // weighted would be 19%, the daily mean is 15%.
    let series = vec![obs(1, Variant::Control, 100, 10), obs(2, Variant::Control, 900, 180)];
    let summary = experiment_summary(&series, Variant::Control);
    assert!((summary.avg_conversion_rate.unwrap() - 15.0).abs() < 1e-9);
}

#[test]
fn summary_of_missing_variant_is_empty() {
    let series = vec![obs(1, Variant::Control, 1000, 100)];
    let treatment = experiment_summary(&series, Variant::Treatment);
    assert_eq!(treatment.days, 0);
    assert_eq!(treatment.total_visitors, 0);
    assert_eq!(treatment.avg_conversion_rate, None);
}

#[test]
fn lift_compares_treatment_to_control() {
    let series = three_day_series();
    let control = experiment_summary(&series, Variant::Control);
    let treatment = experiment_summary(&series, Variant::Treatment);

    let lift = experiment_lift(&control, &treatment);
    // (14 - 11) / 11
    assert!((lift.conversion_rate_pct.unwrap() - 300.0 / 11.0).abs() < 1e-9);
    // (21_000 - 16_500) / 16_500
    assert!((lift.revenue_pct.unwrap() - 4500.0 / 16_500.0 * 100.0).abs() < 1e-9);

    let nothing = experiment_summary(&[], Variant::Control);
    let no_lift = experiment_lift(&nothing, &treatment);
    assert_eq!(no_lift.conversion_rate_pct, None);
    assert_eq!(no_lift.revenue_pct, None);
}

#[test]
fn generated_treatment_outperforms_control() {
    let observations = default_experiment(42);
    let control = experiment_summary(&observations, Variant::Control);
    let treatment = experiment_summary(&observations, Variant::Treatment);
    assert!(treatment.avg_conversion_rate > control.avg_conversion_rate);
    assert!(experiment_lift(&control, &treatment).conversion_rate_pct.unwrap() > 0.0);
}

// ── Pivot ────────────────────────────────────────────────────────────────────

#[test]
fn pivot_has_one_entry_per_distinct_date() {
    for seed in 0..5 {
        let observations = default_experiment(seed);
        let pivots = pivot_by_date_and_variant(&observations);

        let distinct: HashSet<NaiveDate> = observations.iter().map(|o| o.date).collect();
        assert_eq!(pivots.len(), distinct.len());

        for o in &observations {
            let entry = pivots.iter().find(|p| p.date == o.date).unwrap();
            let metrics = entry.get(o.variant).expect("variant present");
            assert_eq!(metrics.visitors, o.visitors);
            assert_eq!(metrics.conversions, o.conversions);
            assert_eq!(metrics.conversion_rate, o.conversion_rate);
            assert_eq!(metrics.revenue, o.revenue);
        }
    }
}

#[test]
fn pivot_keeps_first_seen_order_and_missing_variants() {
    let series = vec![
        obs(3, Variant::Treatment, 1000, 150),
        obs(1, Variant::Control, 1000, 100),
        obs(3, Variant::Control, 1000, 110),
    ];
    let pivots = pivot_by_date_and_variant(&series);

    assert_eq!(pivots.len(), 2);
    assert_eq!(pivots[0].date, day(3));
    assert_eq!(pivots[1].date, day(1));
    assert!(pivots[0].control.is_some() && pivots[0].treatment.is_some());
    assert!(pivots[1].treatment.is_none());

    let conversions = conversion_series(&pivots);
    assert_eq!(conversions[1].control, 10.0);
    assert_eq!(conversions[1].treatment, 0.0, "missing arm plots as zero");

    let revenue = revenue_series(&pivots);
    assert_eq!(revenue[0].treatment, 7_500.0);
}

#[test]
fn pivot_is_idempotent() {
    let observations = default_experiment(12);
    assert_eq!(
        pivot_by_date_and_variant(&observations),
        pivot_by_date_and_variant(&observations)
    );
}

#[test]
fn unvalidated_zero_visitor_range_does_not_underflow() {
    let config = AbTestConfig { days: 3, visitors_min: 0, visitors_max: 0, ..AbTestConfig::default() };
    let mut rng = RngBank::new(9).for_dataset(DatasetSlot::AbTest);
    let observations = generate_experiment(&config, &mut rng);

    assert_eq!(observations.len(), 6);
    for o in &observations {
        assert_eq!(o.visitors, 0);
        assert_eq!(o.conversions, 0);
        assert_eq!(o.revenue, 0.0);
    }
}
