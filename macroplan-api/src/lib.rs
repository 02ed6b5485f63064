pub mod config;
pub mod error;
pub mod request;
pub mod routes;

use actix_cors::Cors;
use actix_web::{http::header, middleware::DefaultHeaders};

pub use routes::{configure, fallback, AppState};

/// CORS preflight handling for browser clients on any origin.
///
/// Preflights are always answered with an empty 200, whatever method or
/// headers they ask for.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .send_wildcard()
}

/// CORS headers attached to every response, including non-CORS requests.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS, GET"))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
}
