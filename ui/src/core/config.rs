//! Backend origin configuration.
//!
//! The only external configuration the site takes is the backend origin,
//! supplied at build time through `GALO_BACKEND_URL`. When unset the API is
//! assumed to live on the same origin as the page.

/// Backend origin baked in at compile time, e.g. `https://api.galologistics.com`.
/// Empty means same-origin relative requests.
pub fn backend_origin() -> &'static str {
    option_env!("GALO_BACKEND_URL").unwrap_or("")
}

/// Full URL for an API route, `{origin}/api/{route}`.
pub fn api_url(route: &str) -> String {
    format!(
        "{}/api/{}",
        backend_origin().trim_end_matches('/'),
        route.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_is_origin_relative_by_default() {
        // GALO_BACKEND_URL is not set in the test environment.
        assert_eq!(api_url("stats"), "/api/stats");
    }

    #[test]
    fn api_url_normalises_slashes() {
        assert_eq!(api_url("/testimonials"), "/api/testimonials");
    }
}
