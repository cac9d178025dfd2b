//! Root route.

/// Greeting served at `/`. The exact text is part of the wire contract.
pub const BANNER: &str = "Welcome to the Fulmine Labs Medical Imaging API!";

/// `GET /` — plain-text banner.
pub async fn banner() -> &'static str {
    BANNER
}
