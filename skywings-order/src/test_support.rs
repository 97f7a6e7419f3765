use chrono::{Duration, NaiveDate, TimeZone, Utc};
use skywings_core::{
    AircraftType, Airline, CabinClass, City, FixedClock, FlightRecord, MealPreference,
    PassengerInfo, SeatPreference,
};

pub fn clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap())
}

pub fn flight() -> FlightRecord {
    let departure = Utc.with_ymd_and_hms(2026, 11, 3, 14, 0, 0).unwrap();
    FlightRecord {
        flight_number: "SW4821".to_string(),
        airline: Airline::SkyWings,
        departure_city: City::London,
        arrival_city: City::Singapore,
        departure_time: departure,
        arrival_time: departure + Duration::hours(12),
        duration: Duration::hours(12),
        price_cents: 112_300,
        available_seats: 37,
        aircraft_type: AircraftType::AirbusA350,
        cabin_class: CabinClass::Business,
    }
}

pub fn passenger() -> PassengerInfo {
    PassengerInfo {
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        email: "grace@example.com".to_string(),
        phone: "+1 555 0199".to_string(),
        passport: "X1234567".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1986, 12, 9),
        seat_preference: SeatPreference::Aisle,
        meal_preference: MealPreference::Standard,
    }
}
