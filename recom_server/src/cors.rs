use actix_cors::Cors;
use actix_web::http::header::ACCESS_CONTROL_ALLOW_ORIGIN;
use actix_web::middleware::DefaultHeaders;

/// Permissive policy: any origin (echoed back), any method, any header
pub fn cors_policy() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
}

/// `Access-Control-Allow-Origin: *` for responses [`cors_policy`] left untouched,
/// i.e. requests without an `Origin`. Has to wrap outside of it.
pub fn cors_fallback_headers() -> DefaultHeaders {
    DefaultHeaders::new().add((ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
}
