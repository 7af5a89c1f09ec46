//! Real-estate listings and their price summaries.

use portfolio_core::{
    analytics::{
        bedroom_price_summary, cities, city_price_summary, filter_by_city, market_stats,
        price_vs_sqft,
    },
    datasets::Datasets,
    real_estate::PropertyRecord,
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn listing(id: usize, city: &str, bedrooms: u32, sqft: u32, price_per_sqft: f64) -> PropertyRecord {
    PropertyRecord {
        property_id: format!("PROP{id:03}"),
        price: f64::from(sqft) * price_per_sqft,
        bedrooms,
        bathrooms: 1,
        sqft,
        lot_size: 5000,
        year_built: 1990,
        city: city.into(),
        state: "XX".into(),
        zipcode: "12345".into(),
        price_per_sqft,
        days_on_market: 10 * id as u32,
        latitude: 0.0,
        longitude: 0.0,
    }
}

fn default_properties(seed: u64) -> Vec<PropertyRecord> {
    Datasets::with_defaults(seed).unwrap().properties().to_vec()
}

// ── Generator ────────────────────────────────────────────────────────────────

#[test]
fn generates_three_hundred_listings_in_five_cities() {
    let properties = default_properties(42);
    assert_eq!(properties.len(), 300);
    assert_eq!(properties[0].property_id, "PROP001");
    assert_eq!(properties[299].property_id, "PROP300");

    let seen = cities(&properties);
    assert_eq!(seen.len(), 5, "expected all five cities, got {seen:?}");
    for city in ["San Francisco", "Austin", "Denver", "Seattle", "Miami"] {
        assert!(seen.iter().any(|c| c == city), "{city} missing");
    }
}

#[test]
fn price_per_sqft_agrees_with_price_and_sqft() {
    for seed in 0..10 {
        for p in default_properties(seed) {
            let recomputed = p.price / f64::from(p.sqft);
            assert!(
                (recomputed - p.price_per_sqft).abs() < 1.0,
                "{}: price/sqft {recomputed:.3} vs stored {}",
                p.property_id,
                p.price_per_sqft
            );
        }
    }
}

#[test]
fn listing_fields_stay_in_range() {
    for p in default_properties(5) {
        assert!((800..=3799).contains(&p.sqft));
        assert!((1..=5).contains(&p.bedrooms));
        assert!((1..=3).contains(&p.bathrooms));
        assert!((1970..=2019).contains(&p.year_built));
        assert!((2000..=11999).contains(&p.lot_size));
        assert!((1..=120).contains(&p.days_on_market));
        assert_eq!(p.zipcode.len(), 5);
    }
}

#[test]
fn rates_track_city_base_price() {
    // Base 800 in San Francisco, 300 in Austin, jitter 0.7..1.3.
    for p in default_properties(9) {
        match p.city.as_str() {
            "San Francisco" => assert!((560.0..=1040.0).contains(&p.price_per_sqft)),
            "Austin" => assert!((210.0..=390.0).contains(&p.price_per_sqft)),
            _ => {}
        }
    }
}

// ── City summary ─────────────────────────────────────────────────────────────

#[test]
fn city_summary_averages_and_takes_upper_median() {
    let properties = vec![
        listing(1, "Austin", 2, 1000, 100.0), // 100_000
        listing(2, "Austin", 2, 1000, 300.0), // 300_000
        listing(3, "Denver", 3, 1000, 200.0), // 200_000
        listing(4, "Austin", 3, 1000, 200.0), // 200_000
        listing(5, "Austin", 3, 1000, 400.0), // 400_000
    ];

    let summary = city_price_summary(&properties, None);
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].city, "Austin", "first-seen order");
    assert_eq!(summary[0].count, 4);
    assert_eq!(summary[0].avg_price, 250_000.0);
    // Sorted: 100k 200k 300k 400k; index 2 is the upper middle.
    assert_eq!(summary[0].median_price, 300_000.0);

    assert_eq!(summary[1].city, "Denver");
    assert_eq!(summary[1].median_price, 200_000.0);
}

#[test]
fn city_summary_for_one_city() {
    let properties = default_properties(3);
    let only = city_price_summary(&properties, Some("Seattle"));
    assert_eq!(only.len(), 1);
    assert_eq!(only[0].city, "Seattle");
    assert_eq!(only[0].count, filter_by_city(&properties, Some("Seattle")).len());

    assert!(city_price_summary(&properties, Some("Atlantis")).is_empty());
    assert!(city_price_summary(&[], None).is_empty());
}

#[test]
fn city_counts_cover_every_listing() {
    let properties = default_properties(17);
    let total: usize = city_price_summary(&properties, None).iter().map(|c| c.count).sum();
    assert_eq!(total, properties.len());
}

// ── Bedroom summary ──────────────────────────────────────────────────────────

#[test]
fn bedroom_summary_scenario() {
    let properties = vec![
        listing(1, "Austin", 1, 1000, 100.0),
        listing(2, "Austin", 1, 1000, 120.0),
        listing(3, "Austin", 2, 1000, 200.0),
        listing(4, "Austin", 3, 1000, 300.0),
        listing(5, "Austin", 3, 1000, 320.0),
    ];

    let summary = bedroom_price_summary(&properties);
    assert_eq!(summary.len(), 3);

    assert_eq!(summary[0].bedrooms, 1);
    assert_eq!(summary[0].avg_price_per_sqft, 110.0);
    assert_eq!(summary[0].count, 2);

    assert_eq!(summary[1].bedrooms, 2);
    assert_eq!(summary[1].avg_price_per_sqft, 200.0);
    assert_eq!(summary[1].count, 1);

    assert_eq!(summary[2].bedrooms, 3);
    assert_eq!(summary[2].avg_price_per_sqft, 310.0);

    assert!(summary.iter().all(|b| b.bedrooms != 4 && b.bedrooms != 5));
}

#[test]
fn bedroom_summary_respects_city_filter() {
    let properties = default_properties(21);
    let miami = filter_by_city(&properties, Some("Miami"));
    let summary = bedroom_price_summary(miami.iter().copied());
    let total: usize = summary.iter().map(|b| b.count).sum();
    assert_eq!(total, miami.len());
}

// ── Market stats and scatter ─────────────────────────────────────────────────

#[test]
fn market_stats_for_selection() {
    let properties = vec![
        listing(1, "Austin", 2, 1000, 100.0),
        listing(2, "Austin", 2, 2000, 200.0),
    ];
    let stats = market_stats(&properties).unwrap();
    assert_eq!(stats.count, 2);
    assert_eq!(stats.avg_price, 250_000.0);
    assert_eq!(stats.avg_price_per_sqft, 150.0);
    assert_eq!(stats.avg_sqft, 1500.0);
    assert_eq!(stats.avg_days_on_market, 15.0);

    let nothing: Vec<PropertyRecord> = Vec::new();
    assert!(market_stats(&nothing).is_none());
}

#[test]
fn scatter_has_one_point_per_selected_listing() {
    let properties = default_properties(8);
    let all = filter_by_city(&properties, None);
    assert_eq!(all.len(), properties.len());
    assert_eq!(price_vs_sqft(all.iter().copied()).len(), properties.len());

    let denver = filter_by_city(&properties, Some("Denver"));
    let points = price_vs_sqft(denver.iter().copied());
    assert!(points.iter().all(|p| p.city == "Denver"));
}

#[test]
fn summaries_are_idempotent() {
    let properties = default_properties(4);
    assert_eq!(city_price_summary(&properties, None), city_price_summary(&properties, None));
    assert_eq!(bedroom_price_summary(&properties), bedroom_price_summary(&properties));
}
