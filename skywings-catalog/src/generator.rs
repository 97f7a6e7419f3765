use chrono::Duration;
use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;
use skywings_core::{AircraftType, Airline, CabinClass, City, Clock, FlightRecord, SystemClock};
use std::sync::Arc;

/// Number of flights produced per search when the caller has no preference
pub const DEFAULT_CATALOG_SIZE: usize = 50;

const MIN_DAYS_AHEAD: i64 = 1;
const MAX_DAYS_AHEAD: i64 = 30;
const MAX_HOUR_OFFSET: i64 = 23;
const MIN_DURATION_HOURS: i64 = 1;
const MAX_DURATION_HOURS: i64 = 12;
const MIN_PRICE_CENTS: u32 = 15_000;
const MAX_PRICE_CENTS: u32 = 150_000;
const MIN_SEATS: u32 = 5;
const MAX_SEATS: u32 = 200;

/// Produces synthetic flight catalogs.
///
/// Holds no state between calls: every `generate` draws fresh values from
/// the supplied random source, relative to the clock's current time.
pub struct FlightGenerator {
    clock: Arc<dyn Clock>,
}

impl FlightGenerator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Generate `count` independent flight records
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<FlightRecord> {
        let now = self.clock.now();
        let flights: Vec<FlightRecord> = (0..count)
            .map(|_| self.generate_one(rng, now))
            .collect();

        tracing::debug!("Generated catalog of {} flights", flights.len());
        flights
    }

    fn generate_one<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        now: chrono::DateTime<chrono::Utc>,
    ) -> FlightRecord {
        let departure_city = pick(City::ALL.choose(rng));
        let arrival_city = pick(
            City::ALL
                .iter()
                .filter(|c| **c != departure_city)
                .choose(rng),
        );

        let departure_time = now
            + Duration::days(rng.gen_range(MIN_DAYS_AHEAD..=MAX_DAYS_AHEAD))
            + Duration::hours(rng.gen_range(0..=MAX_HOUR_OFFSET));
        let duration = Duration::hours(rng.gen_range(MIN_DURATION_HOURS..=MAX_DURATION_HOURS));

        FlightRecord {
            flight_number: format!("SW{}", rng.gen_range(1000..=9999)),
            airline: pick(Airline::ALL.choose(rng)),
            departure_city,
            arrival_city,
            departure_time,
            arrival_time: departure_time + duration,
            duration,
            price_cents: rng.gen_range(MIN_PRICE_CENTS..=MAX_PRICE_CENTS),
            available_seats: rng.gen_range(MIN_SEATS..=MAX_SEATS),
            aircraft_type: pick(AircraftType::ALL.choose(rng)),
            cabin_class: pick(CabinClass::ALL.choose(rng)),
        }
    }
}

impl Default for FlightGenerator {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

// Every `ALL` list is a non-empty constant and holds at least two cities
fn pick<T: Copy>(choice: Option<&T>) -> T {
    *choice.expect("choice from a non-empty constant list")
}
