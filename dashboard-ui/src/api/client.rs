//! HTTP Client
//!
//! Single fetch of the salary dataset. The body goes through the same
//! boundary check as the native sources.

use gloo_net::http::Request;
use salary_dashboard::{parse_records, DataFetchError, FetchResult, SalaryRecord};

/// Dataset path, relative to the page origin
pub const DEFAULT_DATASET_URL: &str = "/data/salaries.json";

/// Dataset URL, overridable with `?data=<url>`
pub fn dataset_url() -> String {
    let search = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default();

    dataset_url_from_search(&search)
}

/// Pick the `data` parameter out of a query string, percent-decoded.
///
/// A value that fails to decode is used as-is.
pub fn dataset_url_from_search(search: &str) -> String {
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("data="))
        .filter(|raw| !raw.is_empty())
        .map(|raw| {
            js_sys::decode_uri_component(raw)
                .map(String::from)
                .unwrap_or_else(|_| raw.to_string())
        })
        .unwrap_or_else(|| DEFAULT_DATASET_URL.to_string())
}

/// Fetch and validate the dataset (single attempt, no retries)
pub async fn fetch_records(url: &str) -> FetchResult<Vec<SalaryRecord>> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| DataFetchError::Http(e.to_string()))?;

    if !response.ok() {
        return Err(DataFetchError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let bytes = response
        .binary()
        .await
        .map_err(|e| DataFetchError::Http(e.to_string()))?;

    parse_records(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_default_url() {
        assert_eq!(dataset_url_from_search(""), DEFAULT_DATASET_URL);
        assert_eq!(dataset_url_from_search("?page=2"), DEFAULT_DATASET_URL);
        assert_eq!(dataset_url_from_search("?data="), DEFAULT_DATASET_URL);
    }

    #[wasm_bindgen_test]
    fn test_raw_override() {
        assert_eq!(
            dataset_url_from_search("?page=2&data=/mirror/salaries.json"),
            "/mirror/salaries.json"
        );
    }

    #[wasm_bindgen_test]
    fn test_encoded_override_is_decoded() {
        assert_eq!(
            dataset_url_from_search("?data=https%3A%2F%2Fhost%2Fs.json"),
            "https://host/s.json"
        );
    }

    #[wasm_bindgen_test]
    fn test_malformed_encoding_kept() {
        assert_eq!(dataset_url_from_search("?data=bad%zz"), "bad%zz");
    }
}
