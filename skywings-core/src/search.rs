use serde::{Deserialize, Serialize};

use crate::flight::{Airline, CabinClass, City};
use crate::{CoreError, CoreResult};

/// Filter and ordering parameters for one search over a catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchQuery {
    /// `None` means any departure city
    #[serde(default)]
    pub departure_city: Option<City>,
    /// `None` means any arrival city
    #[serde(default)]
    pub arrival_city: Option<City>,
    /// `None` disables the airline filter. `Some` keeps only the listed
    /// airlines, so an empty selection matches nothing.
    #[serde(default)]
    pub airlines: Option<Vec<Airline>>,
    #[serde(default, rename = "class")]
    pub cabin_class: Option<CabinClass>,
    pub price_range: PriceRange,
    #[serde(default)]
    pub sort: SortKey,
}

impl Default for SearchQuery {
    /// The search form's initial state: two airlines preselected,
    /// fares between 200 and 1000, cheapest first.
    fn default() -> Self {
        Self {
            departure_city: None,
            arrival_city: None,
            airlines: Some(vec![Airline::SkyWings, Airline::GlobalAirways]),
            cabin_class: None,
            price_range: PriceRange { min: 200.0, max: 1000.0 },
            sort: SortKey::PriceAsc,
        }
    }
}

/// Inclusive fare bounds in currency units
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> CoreResult<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(CoreError::ValidationError(
                "price range bounds must be finite".to_string(),
            ));
        }
        if self.min > self.max {
            return Err(CoreError::ValidationError(format!(
                "price range minimum {} exceeds maximum {}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    PriceAsc,
    PriceDesc,
    Duration,
    DepartureTime,
}
