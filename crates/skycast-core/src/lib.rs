//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Country-name to ISO-code resolution
//! - Query construction for the OpenWeather endpoints
//! - Blocking HTTP clients for geocoding and weather lookups
//! - Condition classification and text rendering
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries.

pub mod condition;
pub mod country;
pub mod error;
pub mod geocode;
mod http;
pub mod query;
pub mod render;
pub mod weather;

pub use condition::Condition;
pub use error::Error;
pub use query::{Location, Units, WeatherQuery};
pub use render::Renderer;
pub use weather::WeatherClient;
