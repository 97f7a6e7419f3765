use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use skywings_core::{MealPreference, PassengerInfo, SeatPreference};

use crate::manager::BookingError;

/// Traveller profile shown on the profile page. Filled either from the
/// profile form or from the passenger of the latest booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub passport: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub seat_preference: Option<SeatPreference>,
    pub meal_preference: Option<MealPreference>,
}

/// Fields accepted by the standalone profile form
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Profile {
    /// First name, last name and email are required; phone is not.
    pub fn from_form(form: ProfileForm) -> Result<Self, BookingError> {
        let missing_fields: Vec<&'static str> = [
            ("first_name", &form.first_name),
            ("last_name", &form.last_name),
            ("email", &form.email),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if !missing_fields.is_empty() {
            return Err(BookingError::Validation { missing_fields });
        }

        Ok(Self {
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            phone: form.phone.filter(|p| !p.trim().is_empty()),
            passport: None,
            date_of_birth: None,
            seat_preference: None,
            meal_preference: None,
        })
    }

    pub fn from_passenger(passenger: &PassengerInfo) -> Self {
        Self {
            first_name: passenger.first_name.clone(),
            last_name: passenger.last_name.clone(),
            email: passenger.email.clone(),
            phone: Some(passenger.phone.clone()),
            passport: Some(passenger.passport.clone()).filter(|p| !p.trim().is_empty()),
            date_of_birth: passenger.date_of_birth,
            seat_preference: Some(passenger.seat_preference),
            meal_preference: Some(passenger.meal_preference),
        }
    }
}
