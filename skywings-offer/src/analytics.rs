use chrono::{DateTime, Utc};
use serde::Serialize;
use skywings_core::{CabinClass, City, FlightRecord};
use std::collections::HashMap;

pub const DEFAULT_HISTOGRAM_BINS: usize = 20;
pub const DEFAULT_TOP_DESTINATIONS: usize = 10;

/// Headline figures for a catalog
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CatalogSummary {
    pub total_flights: usize,
    pub average_price: Option<f64>,
    pub most_popular_destination: Option<City>,
}

impl CatalogSummary {
    pub fn from_catalog(catalog: &[FlightRecord]) -> Self {
        let average_price = if catalog.is_empty() {
            None
        } else {
            let total: u64 = catalog.iter().map(|f| f.price_cents as u64).sum();
            Some(total as f64 / catalog.len() as f64 / 100.0)
        };

        // Mode of arrival cities; ties go to the alphabetically first name.
        let most_popular_destination = arrival_counts(catalog)
            .into_iter()
            .max_by(|(city_a, count_a, _), (city_b, count_b, _)| {
                count_a
                    .cmp(count_b)
                    .then_with(|| city_b.as_str().cmp(city_a.as_str()))
            })
            .map(|(city, _, _)| city);

        Self {
            total_flights: catalog.len(),
            average_price,
            most_popular_destination,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PriceBucket {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width price buckets spanning the catalog's cheapest to dearest fare.
/// The last bucket includes its upper edge.
pub fn price_histogram(catalog: &[FlightRecord], bins: usize) -> Vec<PriceBucket> {
    if catalog.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = catalog.iter().map(|f| f.price_cents).min().unwrap_or(0);
    let max = catalog.iter().map(|f| f.price_cents).max().unwrap_or(0);

    if min == max {
        let price = min as f64 / 100.0;
        return vec![PriceBucket { lower: price, upper: price, count: catalog.len() }];
    }

    let width = (max - min) as f64 / bins as f64;
    let mut counts = vec![0usize; bins];
    for flight in catalog {
        let idx = ((flight.price_cents - min) as f64 / width) as usize;
        counts[idx.min(bins - 1)] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| PriceBucket {
            lower: (min as f64 + width * i as f64) / 100.0,
            upper: (min as f64 + width * (i + 1) as f64) / 100.0,
            count,
        })
        .collect()
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DestinationCount {
    pub city: City,
    pub flights: usize,
}

/// Arrival cities by descending flight count; equal counts keep the order
/// in which the city first appears in the catalog.
pub fn top_destinations(catalog: &[FlightRecord], limit: usize) -> Vec<DestinationCount> {
    let mut counts = arrival_counts(catalog);
    counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    counts
        .into_iter()
        .take(limit)
        .map(|(city, flights, _)| DestinationCount { city, flights })
        .collect()
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DurationPricePoint {
    pub duration_hours: f64,
    pub price: f64,
    #[serde(rename = "class")]
    pub cabin_class: CabinClass,
    pub departure_city: City,
    pub arrival_city: City,
    pub departure_time: DateTime<Utc>,
}

pub fn duration_price_points(catalog: &[FlightRecord]) -> Vec<DurationPricePoint> {
    catalog
        .iter()
        .map(|f| DurationPricePoint {
            duration_hours: f.duration_hours(),
            price: f.price(),
            cabin_class: f.cabin_class,
            departure_city: f.departure_city,
            arrival_city: f.arrival_city,
            departure_time: f.departure_time,
        })
        .collect()
}

/// (city, count, index of first appearance)
fn arrival_counts(catalog: &[FlightRecord]) -> Vec<(City, usize, usize)> {
    let mut counts: HashMap<City, (usize, usize)> = HashMap::new();
    for (idx, flight) in catalog.iter().enumerate() {
        counts.entry(flight.arrival_city).or_insert((0, idx)).0 += 1;
    }
    counts
        .into_iter()
        .map(|(city, (count, first))| (city, count, first))
        .collect()
}
