//! Browser-facing middleware. The demo pages are served from another
//! origin, so CORS stays permissive.
use tower_http::cors::CorsLayer;

pub fn cors() -> CorsLayer {
    CorsLayer::permissive()
}
