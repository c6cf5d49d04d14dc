//! Cross-origin policy for browser clients.

use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Accept any origin, method and header, with credentials.
///
/// A literal `*` cannot be combined with `allow-credentials`, so the request's
/// own origin, method and headers are echoed back instead.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
