pub mod manager;
pub mod models;
pub mod profile;
pub mod session;

pub use manager::{BookingDesk, BookingError};
pub use models::{Booking, BookingStatus};
pub use profile::{Profile, ProfileForm};
pub use session::Session;

#[cfg(test)]
mod test_support;
