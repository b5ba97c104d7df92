pub mod api;
pub mod config;
pub mod debounce;
pub mod errors;
pub mod server;
pub mod time;
pub mod types;
pub mod view;

/// Polymarket data API base URL (public, no auth required)
pub const DATA_API_BASE: &str = "https://data-api.polymarket.com";

/// Path of the activity history endpoint on the data API.
pub const ACTIVITY_PATH: &str = "/activity";

/// Environment variable overriding the configured data API base URL.
pub const DATA_API_ENV: &str = "DATA_API_BASEURL";
