use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cities served by the mock network
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum City {
    #[serde(rename = "New York")]
    NewYork,
    #[serde(rename = "Los Angeles")]
    LosAngeles,
    Chicago,
    Miami,
    London,
    Paris,
    Tokyo,
    Dubai,
    Sydney,
    Singapore,
    Delhi,
    Frankfurt,
}

impl City {
    pub const ALL: [City; 12] = [
        City::NewYork,
        City::LosAngeles,
        City::Chicago,
        City::Miami,
        City::London,
        City::Paris,
        City::Tokyo,
        City::Dubai,
        City::Sydney,
        City::Singapore,
        City::Delhi,
        City::Frankfurt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            City::NewYork => "New York",
            City::LosAngeles => "Los Angeles",
            City::Chicago => "Chicago",
            City::Miami => "Miami",
            City::London => "London",
            City::Paris => "Paris",
            City::Tokyo => "Tokyo",
            City::Dubai => "Dubai",
            City::Sydney => "Sydney",
            City::Singapore => "Singapore",
            City::Delhi => "Delhi",
            City::Frankfurt => "Frankfurt",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Airline {
    #[serde(rename = "SkyWings Airlines")]
    SkyWings,
    #[serde(rename = "Global Airways")]
    GlobalAirways,
    #[serde(rename = "Oceanic Airlines")]
    Oceanic,
    #[serde(rename = "Continental Express")]
    ContinentalExpress,
}

impl Airline {
    pub const ALL: [Airline; 4] = [
        Airline::SkyWings,
        Airline::GlobalAirways,
        Airline::Oceanic,
        Airline::ContinentalExpress,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Airline::SkyWings => "SkyWings Airlines",
            Airline::GlobalAirways => "Global Airways",
            Airline::Oceanic => "Oceanic Airlines",
            Airline::ContinentalExpress => "Continental Express",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AircraftType {
    #[serde(rename = "Boeing 737")]
    Boeing737,
    #[serde(rename = "Airbus A320")]
    AirbusA320,
    #[serde(rename = "Boeing 787")]
    Boeing787,
    #[serde(rename = "Airbus A350")]
    AirbusA350,
}

impl AircraftType {
    pub const ALL: [AircraftType; 4] = [
        AircraftType::Boeing737,
        AircraftType::AirbusA320,
        AircraftType::Boeing787,
        AircraftType::AirbusA350,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AircraftType::Boeing737 => "Boeing 737",
            AircraftType::AirbusA320 => "Airbus A320",
            AircraftType::Boeing787 => "Boeing 787",
            AircraftType::AirbusA350 => "Airbus A350",
        }
    }
}

/// Cabin class sold on a flight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CabinClass {
    Economy,
    #[serde(rename = "Premium Economy")]
    PremiumEconomy,
    Business,
    First,
}

impl CabinClass {
    pub const ALL: [CabinClass; 4] = [
        CabinClass::Economy,
        CabinClass::PremiumEconomy,
        CabinClass::Business,
        CabinClass::First,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CabinClass::Economy => "Economy",
            CabinClass::PremiumEconomy => "Premium Economy",
            CabinClass::Business => "Business",
            CabinClass::First => "First",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Airline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AircraftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single generated flight. Immutable once produced by the generator;
/// bookings hold their own copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightRecord {
    pub flight_number: String,
    pub airline: Airline,
    pub departure_city: City,
    pub arrival_city: City,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    #[serde(rename = "duration_secs", with = "duration_secs")]
    pub duration: Duration,
    /// Fare in cents
    pub price_cents: u32,
    pub available_seats: u32,
    pub aircraft_type: AircraftType,
    #[serde(rename = "class")]
    pub cabin_class: CabinClass,
}

impl FlightRecord {
    /// Fare in currency units (two decimal places)
    pub fn price(&self) -> f64 {
        self.price_cents as f64 / 100.0
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration.num_seconds() as f64 / 3600.0
    }

    /// `Paris → Tokyo`
    pub fn route(&self) -> String {
        format!("{} → {}", self.departure_city, self.arrival_city)
    }
}

mod duration_secs {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(duration.num_seconds())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = i64::deserialize(deserializer)?;
        Duration::try_seconds(secs)
            .ok_or_else(|| serde::de::Error::custom("duration out of range"))
    }
}
