use chrono::{DateTime, Utc};
use rand::Rng;
use skywings_core::{Clock, FlightRecord, PassengerInfo, PaymentMethod};
use uuid::Uuid;

use crate::manager::{BookingDesk, BookingError};
use crate::models::Booking;
use crate::profile::{Profile, ProfileForm};

/// Per-user container for everything that outlives a single request:
/// bookings, profile and the last ordered search results.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub bookings: Vec<Booking>,
    pub profile: Option<Profile>,
    pub search_results: Vec<FlightRecord>,
}

impl Session {
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at,
            bookings: Vec::new(),
            profile: None,
            search_results: Vec::new(),
        }
    }

    /// Replace the last result set
    pub fn record_search(&mut self, results: Vec<FlightRecord>) {
        self.search_results = results;
    }

    /// Book the flight at `result_index` of the last search. On success the
    /// profile is replaced with the passenger's details.
    pub fn book<R: Rng + ?Sized>(
        &mut self,
        result_index: usize,
        passenger: PassengerInfo,
        payment_method: PaymentMethod,
        rng: &mut R,
        clock: &dyn Clock,
    ) -> Result<Booking, BookingError> {
        let flight = self
            .search_results
            .get(result_index)
            .ok_or(BookingError::FlightNotFound(result_index))?;

        let profile = Profile::from_passenger(&passenger);
        let booking = BookingDesk::create_booking(
            &mut self.bookings,
            flight,
            passenger,
            payment_method,
            rng,
            clock,
        )?
        .clone();

        self.profile = Some(profile);
        Ok(booking)
    }

    pub fn cancel(&mut self, booking_id: &str) -> Result<(), BookingError> {
        BookingDesk::cancel_booking(&mut self.bookings, booking_id)
    }

    pub fn booking(&self, booking_id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.booking_id == booking_id)
    }

    pub fn save_profile(&mut self, form: ProfileForm) -> Result<&Profile, BookingError> {
        let profile = Profile::from_form(form)?;
        Ok(self.profile.insert(profile))
    }
}
