//! Client layer for the shortener backend
//!
//! ```text
//! CLI → LinkClient ──→ HttpTransport (ureq on the blocking pool)
//!                  └→ TokenStore → KeyValueStore (file / memory)
//! ```

mod link_client;
pub mod transport;
mod types;

pub use link_client::{LOOKUP_FAILED_MESSAGE, LinkClient, SHORTEN_FAILED_MESSAGE};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, UreqTransport};
pub use types::{AnalyticsRecord, HealthStatus, ShortLinkResult, ShortenRequest};
