//! GeoDB Cities: a blocking client for the GeoDB Cities REST API.
//!
//! ```no_run
//! use geodb_cities::{GeoDbClient, QueryParams};
//!
//! let client = GeoDbClient::new("my-rapidapi-key");
//! let resp = client.get_cities(&QueryParams::new().with("namePrefix", "Stock").with("limit", 5))?;
//! println!("{} {}", resp.status(), resp.text());
//! # Ok::<(), geodb_cities::ClientError>(())
//! ```

pub mod client;

pub use client::{
    ApiResponse, ClientConfig, ClientError, GeoDbClient, Headers, Method, PreparedRequest, QueryParams,
    RequestOptions, Result, API_HOST_HEADER, API_KEY_HEADER, DEFAULT_API_HOST,
};
