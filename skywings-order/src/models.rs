use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skywings_core::{FlightRecord, PassengerInfo, PaymentMethod};

/// Booking status. `Confirmed` is the only starting state and `Cancelled`
/// is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

/// A reservation tying one flight to one passenger.
///
/// Flight and passenger are copies taken at booking time, so regenerating
/// the catalog never changes an existing booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: String,
    pub flight: FlightRecord,
    pub passenger: PassengerInfo,
    pub payment_method: PaymentMethod,
    pub booking_date: DateTime<Utc>,
    pub status: BookingStatus,
}

impl Booking {
    pub fn new(
        booking_id: String,
        flight: FlightRecord,
        passenger: PassengerInfo,
        payment_method: PaymentMethod,
        booking_date: DateTime<Utc>,
    ) -> Self {
        Self {
            booking_id,
            flight,
            passenger,
            payment_method,
            booking_date,
            status: BookingStatus::Confirmed,
        }
    }

    /// Mark as cancelled (never removed from the list)
    pub fn cancel(&mut self) {
        self.status = BookingStatus::Cancelled;
    }

    pub fn is_active(&self) -> bool {
        self.status == BookingStatus::Confirmed
    }
}
