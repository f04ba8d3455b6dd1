//! Generic HTTP client tools
//!
//! Shared request/response handling for catalog sources: sending, logging and
//! reading the body. Each source still builds its own `RequestBuilder`.
//!
//! Requests are sent exactly once. There is deliberately no retry loop here; a
//! failed page fetch surfaces to the caller, which retries on the next
//! navigation.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::CatalogError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, query)
    /// * `source_name` - catalog name (for logging)
    /// * `method_name` - request method name (such as "GET", used for logs)
    /// * `url` - URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` for any HTTP response, 2xx or not
    /// * `Err(CatalogError::Timeout)` - the request timed out
    /// * `Err(CatalogError::NetworkError)` - any other transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        source_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), CatalogError> {
        log::debug!("[{source_name}] {method_name} {url}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| transport_error(source_name, &e))?;

        let status_code = response.status().as_u16();
        log::debug!("[{source_name}] Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                transport_error(source_name, &e)
            } else {
                CatalogError::NetworkError {
                    source_id: source_name.to_string(),
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;

        log::debug!(
            "[{source_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(CatalogError::ParseError)` - malformed JSON or unexpected shape
    pub fn parse_json<T>(response_text: &str, source_name: &str) -> Result<T, CatalogError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{source_name}] JSON parse failed: {e}");
            log::error!(
                "[{source_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            CatalogError::ParseError {
                source_id: source_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

/// Map a reqwest send failure onto the transport error variants.
fn transport_error(source_name: &str, e: &reqwest::Error) -> CatalogError {
    if e.is_timeout() {
        CatalogError::Timeout {
            source_id: source_name.to_string(),
            detail: e.to_string(),
        }
    } else {
        CatalogError::NetworkError {
            source_id: source_name.to_string(),
            detail: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, CatalogError> = HttpUtils::parse_json(r#"{"x":42}"#, "test");
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, CatalogError> = HttpUtils::parse_json("not json", "test");
        assert!(
            matches!(&result, Err(CatalogError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_wrong_shape() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, CatalogError> = HttpUtils::parse_json(r#"{"y":"a"}"#, "test");
        assert!(matches!(&result, Err(CatalogError::ParseError { source_id, .. }) if source_id == "test"));
    }
}
