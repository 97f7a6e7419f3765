pub mod generator;

pub use generator::{FlightGenerator, DEFAULT_CATALOG_SIZE};
