pub mod analytics;
pub mod search;

pub use analytics::{
    duration_price_points, price_histogram, top_destinations, CatalogSummary, DestinationCount,
    DurationPricePoint, PriceBucket,
};
pub use search::search;
