//! Real-estate listings dataset.

use crate::{
    config::RealEstateConfig,
    rng::StreamRng,
    types::RecordId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub property_id:    RecordId,
    pub price:          f64,
    pub bedrooms:       u32,
    pub bathrooms:      u32,
    pub sqft:           u32,
    pub lot_size:       u32,
    pub year_built:     u32,
    pub city:           String,
    pub state:          String,
    pub zipcode:        String,
    /// Sampled rate rounded to whole dollars; `price / sqft` agrees within 1.
    pub price_per_sqft: f64,
    pub days_on_market: u32,
    pub latitude:       f64,
    pub longitude:      f64,
}

pub fn property_id(index: usize) -> RecordId {
    format!("PROP{index:03}")
}

pub fn generate_properties(config: &RealEstateConfig, rng: &mut StreamRng) -> Vec<PropertyRecord> {
    let mut properties = Vec::with_capacity(config.property_count);

    for i in 0..config.property_count {
        let Some(city) = rng.pick(&config.cities) else {
            log::warn!("{}: no cities configured, skipping listings", rng.name);
            break;
        };

        let sqft = rng.int_inclusive(config.sqft_min, config.sqft_max);
        let bedrooms = rng.int_inclusive(1, config.bedrooms_max);
        let bathrooms = rng.int_inclusive(1, config.bathrooms_max);
        let year_built = rng.int_inclusive(config.year_built_min, config.year_built_max);
        let lot_size = rng.int_inclusive(config.lot_size_min, config.lot_size_max);

        let rate = city.base_price_per_sqft * rng.uniform(config.price_jitter_min, config.price_jitter_max);
        let price = (f64::from(sqft) * rate).round();

        let zipcode = rng.int_inclusive(10_000, 99_999).to_string();
        let days_on_market = rng.int_inclusive(1, config.days_on_market_max);
        let half_spread = config.coordinate_spread / 2.0;

        properties.push(PropertyRecord {
            property_id: property_id(i + 1),
            price,
            bedrooms,
            bathrooms,
            sqft,
            lot_size,
            year_built,
            city: city.name.clone(),
            state: city.state.clone(),
            zipcode,
            price_per_sqft: rate.round(),
            days_on_market,
            latitude: city.latitude + rng.noise(half_spread),
            longitude: city.longitude + rng.noise(half_spread),
        });
    }

    log::debug!("{}: generated {} properties", rng.name, properties.len());
    properties
}
