//! Resilient remote-data loading.
//!
//! Both display payloads (stats, testimonials) follow the same contract: one
//! GET at view mount, no retry, no timeout; on any failure the view swaps in
//! a fixed fallback value and renders as if the load had succeeded, while the
//! error is logged for diagnostics. A hung request therefore leaves the view
//! in its loading skeleton indefinitely — a known limitation of the retry-free
//! design, kept deliberately for this low-stakes display data.

use dioxus::logger::tracing;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure of a display-data fetch. Callers treat every variant identically:
/// substitute the fallback and keep rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("remote fetch is unavailable on this platform")]
    Unsupported,
}

/// Lifecycle of a remotely sourced display value.
///
/// Modeled as three states rather than a loading flag plus mutable payload:
/// a view is either still waiting, showing the server's data, or showing the
/// baked-in fallback after a failed load. There is no user-facing error state.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteData<T> {
    Loading,
    Loaded(T),
    Fallback(T),
}

impl<T> RemoteData<T> {
    /// Resolve a finished fetch. Success replaces the payload wholesale with
    /// the response body; any failure replaces it wholesale with `fallback`.
    /// Never returns `Loading`, so the loading state ends exactly once.
    pub fn settle(result: Result<T, FetchError>, fallback: T) -> Self {
        match result {
            Ok(body) => RemoteData::Loaded(body),
            Err(err) => {
                tracing::warn!("display data fetch failed, using fallback: {err}");
                RemoteData::Fallback(fallback)
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteData::Loading)
    }

    pub fn used_fallback(&self) -> bool {
        matches!(self, RemoteData::Fallback(_))
    }

    /// The payload to render, if the load has finished either way.
    pub fn value(&self) -> Option<&T> {
        match self {
            RemoteData::Loading => None,
            RemoteData::Loaded(value) | RemoteData::Fallback(value) => Some(value),
        }
    }
}

/// One GET against `{backend}/api/{route}`, JSON-decoded. No retry, no
/// timeout; every failure mode collapses into `FetchError`.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_json<T: DeserializeOwned>(route: &str) -> Result<T, FetchError> {
    let url = super::config::api_url(route);
    let response = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|err| FetchError::Http(err.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Http(format!(
            "{url} returned status {}",
            response.status()
        )));
    }

    response
        .json::<T>()
        .await
        .map_err(|err| FetchError::Decode(err.to_string()))
}

/// Native builds have no fetch plumbing; views settle straight into their
/// fallback content, which keeps non-wasm targets rendering something sane.
#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_json<T: DeserializeOwned>(_route: &str) -> Result<T, FetchError> {
    Err(FetchError::Unsupported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_keeps_successful_body_wholesale() {
        let settled = RemoteData::settle(Ok(vec![1, 2, 3]), vec![9]);
        assert_eq!(settled, RemoteData::Loaded(vec![1, 2, 3]));
        assert!(!settled.is_loading());
        assert!(!settled.used_fallback());
        assert_eq!(settled.value(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn settle_substitutes_fallback_on_any_error() {
        for err in [
            FetchError::Http("status 503".into()),
            FetchError::Decode("trailing garbage".into()),
            FetchError::Unsupported,
        ] {
            let settled = RemoteData::settle(Err(err), "fallback");
            assert_eq!(settled, RemoteData::Fallback("fallback"));
            assert!(settled.used_fallback());
            assert_eq!(settled.value(), Some(&"fallback"));
        }
    }

    #[test]
    fn settle_never_yields_loading() {
        assert!(!RemoteData::settle(Ok(0u8), 1).is_loading());
        assert!(!RemoteData::settle(Err(FetchError::Unsupported), 1u8).is_loading());
    }

    #[test]
    fn loading_has_no_renderable_value() {
        let pending: RemoteData<u8> = RemoteData::Loading;
        assert!(pending.is_loading());
        assert_eq!(pending.value(), None);
    }
}
