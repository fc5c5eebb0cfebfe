pub mod api;
pub mod config;
pub mod derived;
pub mod models;
pub mod pages;
pub mod render;
pub mod router;

#[cfg(test)]
mod testing;

pub use api::{ClientConfig, FetchError, StaySource, StaysClient};
pub use models::{Property, SchemaError};
pub use router::{Route, RouteError};
