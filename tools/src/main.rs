//! dataset-runner: builds the portfolio datasets and prints the dashboard.
//!
//! Usage:
//!   dataset-runner --seed 12345
//!   dataset-runner --seed 12345 --city Austin --category Books --region West
//!   dataset-runner --config datasets.json --split 0.8 --json

use anyhow::Result;
use portfolio_core::{
    config::DatasetConfig,
    dashboard::{DashboardFilters, DashboardSnapshot},
    datasets::Datasets,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let json_mode = args.iter().any(|a| a == "--json");
    let config_path = string_arg(&args, "--config");

    let defaults = DashboardFilters::default();
    let filters = DashboardFilters {
        city: string_arg(&args, "--city").map(str::to_string),
        category: string_arg(&args, "--category").unwrap_or(defaults.category.as_str()).to_string(),
        region: string_arg(&args, "--region").unwrap_or(defaults.region.as_str()).to_string(),
        historical_fraction: parse_arg(&args, "--split", defaults.historical_fraction),
    };

    let config = match config_path {
        Some(path) => DatasetConfig::load(path)?,
        None => DatasetConfig::default(),
    };

    if !json_mode {
        println!("Portfolio dashboard: dataset-runner");
        println!("  seed:      {seed}");
        println!("  config:    {}", config_path.unwrap_or("(defaults)"));
        println!("  city:      {}", filters.city.as_deref().unwrap_or("all"));
        println!("  category:  {}", filters.category);
        println!("  region:    {}", filters.region);
        println!("  split:     {:.2}", filters.historical_fraction);
        println!();
    }

    log::debug!("dashboard filters: {filters:?}");

    // Built once; snapshots only borrow the collections.
    let datasets = Datasets::generate(&config, seed)?;
    let snapshot = DashboardSnapshot::build(&datasets, &filters);

    if json_mode {
        println!("{}", snapshot.to_json()?);
    } else {
        print_summary(&snapshot);
    }

    Ok(())
}

fn print_summary(snapshot: &DashboardSnapshot) {
    println!("=== CHURN RISK ({} customers) ===", snapshot.churn.customers);
    for share in &snapshot.churn.risk_distribution {
        println!("  {:<7} {:>4}  ({}%)", share.tier.label(), share.count, share.percentage);
    }

    println!();
    println!("=== REAL ESTATE ===");
    for city in &snapshot.real_estate.price_by_city {
        println!(
            "  {:<14} n={:<4} avg ${:.0}k  median ${:.0}k",
            city.city,
            city.count,
            city.avg_price / 1000.0,
            city.median_price / 1000.0
        );
    }
    match &snapshot.real_estate.market {
        Some(m) => println!(
            "  selection: {} listings | avg ${:.0}k | ${:.0}/sqft | {:.0} sqft | {:.0} days on market",
            m.count,
            m.avg_price / 1000.0,
            m.avg_price_per_sqft,
            m.avg_sqft,
            m.avg_days_on_market
        ),
        None => println!("  selection: (no listings)"),
    }
    for bucket in &snapshot.real_estate.price_by_bedroom {
        println!(
            "  {} BR: ${:.0}/sqft over {} listings",
            bucket.bedrooms, bucket.avg_price_per_sqft, bucket.count
        );
    }

    println!();
    println!("=== A/B TEST ===");
    for summary in [&snapshot.experiment.control, &snapshot.experiment.treatment] {
        println!(
            "  {:<9} days={} visitors={} conversions={} revenue=${:.0}k avg rate={}",
            summary.variant.label(),
            summary.days,
            summary.total_visitors,
            summary.total_conversions,
            summary.total_revenue / 1000.0,
            fmt_pct(summary.avg_conversion_rate)
        );
    }
    println!(
        "  lift: conversion {} | revenue {}",
        fmt_pct(snapshot.experiment.lift.conversion_rate_pct),
        fmt_pct(snapshot.experiment.lift.revenue_pct)
    );

    println!();
    println!(
        "=== SALES FORECAST ({} / {}) ===",
        snapshot.forecast.category, snapshot.forecast.region
    );
    println!(
        "  historical: {} points | forecast: {} points",
        snapshot.forecast.split.historical.len(),
        snapshot.forecast.split.forecast.len()
    );
    println!("  MAPE:      {}", fmt_pct(snapshot.forecast.mape));
    println!("  accuracy:  {}", fmt_pct(snapshot.forecast.accuracy));
    println!("  trend:     {}", fmt_pct(snapshot.forecast.trend_percent));

    let model = &snapshot.model_performance;
    println!();
    println!("=== MODEL PERFORMANCE (reference figures) ===");
    println!(
        "  churn: accuracy {:.2} | AUC {:.2} | sales: R² {:.3} | A/B p-value {:.3}",
        model.churn_model.accuracy,
        model.churn_model.auc,
        model.sales_model.r2,
        model.ab_test_results.statistical_significance
    );
}

fn fmt_pct(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}%"))
}

fn string_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
