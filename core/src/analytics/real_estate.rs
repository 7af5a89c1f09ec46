use crate::{real_estate::PropertyRecord, stats::mean};
use serde::{Deserialize, Serialize};

/// Bedroom counts reported by the per-bedroom summary.
pub const BEDROOM_BUCKETS: std::ops::RangeInclusive<u32> = 1..=5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityPriceSummary {
    pub city:         String,
    pub avg_price:    f64,
    pub median_price: f64,
    pub count:        usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BedroomPriceSummary {
    pub bedrooms:           u32,
    pub avg_price_per_sqft: f64,
    pub count:              usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketStats {
    pub count:              usize,
    pub avg_price:          f64,
    pub avg_price_per_sqft: f64,
    pub avg_sqft:           f64,
    pub avg_days_on_market: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub sqft:           u32,
    pub price:          f64,
    pub price_per_sqft: f64,
    pub city:           String,
    pub bedrooms:       u32,
}

/// Distinct cities in first-seen order.
pub fn cities(properties: &[PropertyRecord]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for property in properties {
        if !seen.iter().any(|c| *c == property.city) {
            seen.push(property.city.clone());
        }
    }
    seen
}

/// `None` keeps every listing.
pub fn filter_by_city<'a>(properties: &'a [PropertyRecord], city: Option<&str>) -> Vec<&'a PropertyRecord> {
    properties
        .iter()
        .filter(|p| city.map_or(true, |c| p.city == c))
        .collect()
}

/// Median as the element at index `len / 2` of the sorted values.
///
/// For even counts this is the upper of the two middle elements; no
/// averaging happens, so the result is always an observed value.
pub fn upper_median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted.get(sorted.len() / 2).copied()
}

/// Average and median price per city, cities in first-seen order.
/// With `Some(city)` only that city is summarised (empty if unknown).
pub fn city_price_summary(properties: &[PropertyRecord], city: Option<&str>) -> Vec<CityPriceSummary> {
    let wanted: Vec<String> = match city {
        Some(c) => vec![c.to_string()],
        None => cities(properties),
    };

    wanted
        .into_iter()
        .filter_map(|city| {
            let prices: Vec<f64> = properties
                .iter()
                .filter(|p| p.city == city)
                .map(|p| p.price)
                .collect();
            let avg_price = mean(prices.iter().copied())?;
            let median_price = upper_median(&prices)?;
            Some(CityPriceSummary {
                city,
                avg_price: avg_price.round(),
                median_price: median_price.round(),
                count: prices.len(),
            })
        })
        .collect()
}

/// Average price per sqft for each bedroom count in 1..=5.
/// Bedroom counts with no listings are omitted.
pub fn bedroom_price_summary<'a, I>(properties: I) -> Vec<BedroomPriceSummary>
where
    I: IntoIterator<Item = &'a PropertyRecord>,
{
    let listings: Vec<&PropertyRecord> = properties.into_iter().collect();

    BEDROOM_BUCKETS
        .filter_map(|bedrooms| {
            let rates: Vec<f64> = listings
                .iter()
                .filter(|p| p.bedrooms == bedrooms)
                .map(|p| p.price_per_sqft)
                .collect();
            let avg = mean(rates.iter().copied())?;
            Some(BedroomPriceSummary {
                bedrooms,
                avg_price_per_sqft: avg.round(),
                count: rates.len(),
            })
        })
        .collect()
}

/// Headline averages for a selection of listings. `None` when empty.
pub fn market_stats<'a, I>(properties: I) -> Option<MarketStats>
where
    I: IntoIterator<Item = &'a PropertyRecord>,
{
    let listings: Vec<&PropertyRecord> = properties.into_iter().collect();
    Some(MarketStats {
        count: listings.len(),
        avg_price: mean(listings.iter().map(|p| p.price))?.round(),
        avg_price_per_sqft: mean(listings.iter().map(|p| p.price_per_sqft))?.round(),
        avg_sqft: mean(listings.iter().map(|p| f64::from(p.sqft)))?.round(),
        avg_days_on_market: mean(listings.iter().map(|p| f64::from(p.days_on_market)))?.round(),
    })
}

/// Scatter projection: one point per listing.
pub fn price_vs_sqft<'a, I>(properties: I) -> Vec<PricePoint>
where
    I: IntoIterator<Item = &'a PropertyRecord>,
{
    properties
        .into_iter()
        .map(|p| PricePoint {
            sqft: p.sqft,
            price: p.price,
            price_per_sqft: p.price_per_sqft,
            city: p.city.clone(),
            bedrooms: p.bedrooms,
        })
        .collect()
}
