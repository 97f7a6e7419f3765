use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SeatPreference {
    Aisle,
    Window,
    #[default]
    #[serde(rename = "No Preference")]
    NoPreference,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum MealPreference {
    #[default]
    Standard,
    Vegetarian,
    Vegan,
    Kosher,
    Halal,
    #[serde(rename = "No Meal")]
    NoMeal,
}

/// Recorded on the booking only; nothing is charged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Debit Card")]
    DebitCard,
    PayPal,
    #[serde(rename = "Apple Pay")]
    ApplePay,
}

/// Primary passenger details captured by the booking form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PassengerInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub passport: String,
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub seat_preference: SeatPreference,
    #[serde(default)]
    pub meal_preference: MealPreference,
}

impl PassengerInfo {
    /// Names of the required fields that are blank after trimming.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passenger() -> PassengerInfo {
        PassengerInfo {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 20 7946 0000".to_string(),
            passport: String::new(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 12, 10),
            seat_preference: SeatPreference::Window,
            meal_preference: MealPreference::Vegetarian,
        }
    }

    #[test]
    fn test_complete_passenger_has_no_missing_fields() {
        assert!(passenger().missing_fields().is_empty());
    }

    #[test]
    fn test_whitespace_only_fields_are_missing() {
        let mut p = passenger();
        p.last_name = "   ".to_string();
        p.phone = String::new();
        assert_eq!(p.missing_fields(), vec!["last_name", "phone"]);
    }

    #[test]
    fn test_passport_is_optional() {
        let p = passenger();
        assert!(p.passport.is_empty());
        assert!(p.missing_fields().is_empty());
    }

    #[test]
    fn test_preference_deserialization() {
        let seat: SeatPreference = serde_json::from_str("\"No Preference\"").unwrap();
        let meal: MealPreference = serde_json::from_str("\"No Meal\"").unwrap();
        let payment: PaymentMethod = serde_json::from_str("\"Apple Pay\"").unwrap();
        assert_eq!(seat, SeatPreference::NoPreference);
        assert_eq!(meal, MealPreference::NoMeal);
        assert_eq!(payment, PaymentMethod::ApplePay);
    }
}
