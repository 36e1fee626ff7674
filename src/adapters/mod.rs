// Adapters layer: concrete implementations for the remote service ports.

pub mod analytics_http;
pub mod tag_manager_http;

pub use analytics_http::AnalyticsHttpClient;
pub use tag_manager_http::TagManagerHttpClient;
