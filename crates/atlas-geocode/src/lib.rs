pub mod client;
pub mod error;
pub mod types;

pub use client::GeoSearchClient;
pub use error::GeocodeError;
pub use types::SearchHit;
