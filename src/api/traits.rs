use crate::api::error::FetchError;
use crate::models::Property;
use async_trait::async_trait;

/// Read-only source of stay listings.
///
/// Pages only talk to this trait, so the HTTP client can be swapped for a
/// fixture in tests.
#[async_trait]
pub trait StaySource: Send + Sync {
    /// Fetch the full search result set
    async fn fetch_list(&self) -> Result<Vec<Property>, FetchError>;

    /// Fetch one property; `id` is forwarded verbatim from the route
    async fn fetch_by_id(&self, id: &str) -> Result<Property, FetchError>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}
