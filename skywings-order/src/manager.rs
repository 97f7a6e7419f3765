use crate::models::Booking;
use rand::Rng;
use skywings_core::{Clock, FlightRecord, PassengerInfo, PaymentMethod};
use skywings_shared::Masked;

/// Creates and cancels bookings on a caller-owned booking list.
///
/// Holds no state of its own; the list belongs to the session.
pub struct BookingDesk;

impl BookingDesk {
    /// Book `flight` for `passenger` and append the booking to `bookings`.
    ///
    /// Fails without touching the list when any of first name, last name,
    /// email or phone is blank.
    pub fn create_booking<'a, R: Rng + ?Sized>(
        bookings: &'a mut Vec<Booking>,
        flight: &FlightRecord,
        passenger: PassengerInfo,
        payment_method: PaymentMethod,
        rng: &mut R,
        clock: &dyn Clock,
    ) -> Result<&'a Booking, BookingError> {
        let missing_fields = passenger.missing_fields();
        if !missing_fields.is_empty() {
            tracing::warn!("Booking rejected, missing fields: {:?}", missing_fields);
            return Err(BookingError::Validation { missing_fields });
        }

        let booking_id = Self::fresh_booking_id(bookings, rng);
        tracing::info!(
            booking_id = %booking_id,
            flight_number = %flight.flight_number,
            email = %Masked(passenger.email.as_str()),
            "Booking confirmed: {}",
            flight.route()
        );

        bookings.push(Booking::new(
            booking_id,
            flight.clone(),
            passenger,
            payment_method,
            clock.now(),
        ));

        let idx = bookings.len() - 1;
        Ok(&bookings[idx])
    }

    /// Mark a booking cancelled. Cancelling twice is allowed and leaves it
    /// cancelled.
    pub fn cancel_booking(bookings: &mut [Booking], booking_id: &str) -> Result<(), BookingError> {
        let booking = bookings
            .iter_mut()
            .find(|b| b.booking_id == booking_id)
            .ok_or_else(|| BookingError::NotFound(booking_id.to_string()))?;

        booking.cancel();
        tracing::info!(booking_id = %booking_id, "Booking cancelled");
        Ok(())
    }

    /// `BK` followed by six digits, redrawn until unused in this list
    fn fresh_booking_id<R: Rng + ?Sized>(bookings: &[Booking], rng: &mut R) -> String {
        loop {
            let candidate = format!("BK{}", rng.gen_range(100_000..=999_999));
            if !bookings.iter().any(|b| b.booking_id == candidate) {
                return candidate;
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Missing required passenger fields: {}", missing_fields.join(", "))]
    Validation { missing_fields: Vec<&'static str> },

    #[error("Booking not found: {0}")]
    NotFound(String),

    #[error("No flight at result position {0}")]
    FlightNotFound(usize),
}
