pub mod client;
pub mod error;
pub mod traits;
pub mod types;

pub use client::StaysClient;
pub use error::FetchError;
pub use traits::StaySource;
pub use types::ClientConfig;
