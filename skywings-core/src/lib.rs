pub mod clock;
pub mod flight;
pub mod passenger;
pub mod search;

pub use clock::{Clock, FixedClock, SystemClock};
pub use flight::{AircraftType, Airline, CabinClass, City, FlightRecord};
pub use passenger::{MealPreference, PassengerInfo, PaymentMethod, SeatPreference};
pub use search::{PriceRange, SearchQuery, SortKey};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
