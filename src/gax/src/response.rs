// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Response types.
//!
//! Every successful Storage Gateway call returns a [Response]: the decoded
//! output plus the HTTP headers that came with it. The service tags each
//! reply with a request id, which is what support cases and service logs are
//! keyed on, so [Response::request_id] exposes it directly.
//!
//! # Examples
//!
//! Logging the request id of a call
//!
//! ```no_run
//! # use storagegateway_gax::Result;
//! # use storagegateway_gax::response::Response;
//! // A type representing a service resource, for example, a gateway.
//! struct Resource {
//!   // ...
//! }
//!
//! async fn describe_gateway(gateway_arn: &str) -> Result<Response<Resource>> {
//!   // ...
//! # panic!()
//! }
//!
//! # tokio_test::block_on(async {
//! let response = describe_gateway("my-gateway").await?;
//! if let Some(id) = response.request_id() {
//!     println!("describe_gateway request id: {id}");
//! }
//! let resource = response.into_body();
//! # Result::<()>::Ok(()) });
//! ```
//!
//! Creating a response for mocks
//!
//! ```
//! # use storagegateway_gax::response::Response;
//! let mut headers = http::HeaderMap::new();
//! headers.insert("x-amzn-requestid", http::HeaderValue::from_static("req-123"));
//! let response = Response::with_headers(headers, "gateway-arn".to_string());
//! assert_eq!(response.request_id(), Some("req-123"));
//! ```

/// The header carrying the service-assigned id of each request.
pub const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

// Some front ends report the id under the S3-style name instead.
const ALT_REQUEST_ID_HEADER: &str = "x-amz-request-id";

/// A Storage Gateway service response.
///
/// Holds the decoded operation output and the HTTP headers returned with it.
/// Request builders discard the headers and return only the body; transports
/// and mocks construct full responses.
#[derive(Clone, Debug)]
pub struct Response<T> {
    headers: http::HeaderMap,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response with no headers.
    ///
    /// # Example
    /// ```
    /// # use storagegateway_gax::response::Response;
    /// let response = Response::from(());
    /// assert!(response.headers().is_empty());
    /// assert!(response.request_id().is_none());
    /// ```
    pub fn from(body: T) -> Self {
        Self {
            headers: http::HeaderMap::new(),
            body,
        }
    }

    /// Creates a response carrying the headers returned by the service.
    pub fn with_headers(headers: http::HeaderMap, body: T) -> Self {
        Self { headers, body }
    }

    /// Returns the headers associated with this response.
    pub fn headers(&self) -> &http::HeaderMap {
        &self.headers
    }

    /// Returns the id the service assigned to this request, if any.
    ///
    /// Header names are matched without regard to case. Values that are not
    /// printable ASCII are ignored.
    ///
    /// # Example
    /// ```
    /// # use storagegateway_gax::response::Response;
    /// let mut headers = http::HeaderMap::new();
    /// headers.insert("x-amzn-requestid", http::HeaderValue::from_static("abc-123"));
    /// let response = Response::with_headers(headers, ());
    /// assert_eq!(response.request_id(), Some("abc-123"));
    /// ```
    pub fn request_id(&self) -> Option<&str> {
        [REQUEST_ID_HEADER, ALT_REQUEST_ID_HEADER]
            .into_iter()
            .find_map(|name| self.headers.get(name))
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
    }

    /// Returns the body associated with this response.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the response returning only its body.
    pub fn into_body(self) -> T {
        self.body
    }

    /// Replaces the body, keeping the headers.
    ///
    /// # Example
    /// ```
    /// # use storagegateway_gax::response::Response;
    /// let mut headers = http::HeaderMap::new();
    /// headers.insert("x-amzn-requestid", http::HeaderValue::from_static("abc-123"));
    /// let response = Response::with_headers(headers, "42".to_string());
    /// let response = response.map(|s| s.parse::<i32>().unwrap_or_default());
    /// assert_eq!(response.body(), &42);
    /// assert_eq!(response.request_id(), Some("abc-123"));
    /// ```
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            headers: self.headers,
            body: f(self.body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderMap, HeaderName, HeaderValue};
    use test_case::test_case;

    fn headers(name: &'static str, value: &'static str) -> HeaderMap {
        let name = HeaderName::from_bytes(name.as_bytes()).expect("valid header name");
        let mut headers = HeaderMap::new();
        headers.insert(name, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn response_from() {
        let response = Response::from("abc123".to_string());
        assert!(response.headers().is_empty());
        assert!(response.request_id().is_none());
        assert_eq!(response.body().as_str(), "abc123");

        let body = response.into_body();
        assert_eq!(body.as_str(), "abc123");
    }

    #[test_case("x-amzn-RequestId"; "service casing")]
    #[test_case("x-amzn-requestid"; "lowercase")]
    #[test_case("X-AMZN-REQUESTID"; "uppercase")]
    #[test_case("x-amz-request-id"; "alternate name")]
    fn request_id(name: &'static str) {
        let response = Response::with_headers(headers(name, "req-42"), ());
        assert_eq!(response.request_id(), Some("req-42"));
    }

    #[test]
    fn request_id_prefers_service_header() {
        let mut h = headers("x-amz-request-id", "alternate");
        h.insert(REQUEST_ID_HEADER, HeaderValue::from_static("primary"));
        let response = Response::with_headers(h, ());
        assert_eq!(response.request_id(), Some("primary"));
    }

    #[test]
    fn request_id_missing_or_unusable() {
        let response = Response::with_headers(headers("content-type", "application/json"), ());
        assert!(response.request_id().is_none(), "{response:?}");

        let response = Response::with_headers(headers("x-amzn-RequestId", ""), ());
        assert!(response.request_id().is_none(), "{response:?}");

        let mut h = HeaderMap::new();
        let value = HeaderValue::from_bytes(b"caf\xc3\xa9").expect("opaque bytes are valid");
        h.insert(REQUEST_ID_HEADER, value);
        let response = Response::with_headers(h, ());
        assert!(response.request_id().is_none(), "{response:?}");
    }

    #[test]
    fn with_headers() {
        let h = headers("content-type", "application/x-amz-json-1.1");
        let response = Response::with_headers(h.clone(), "abc123".to_string());
        assert_eq!(response.headers(), &h);
        assert_eq!(response.body().as_str(), "abc123");
    }

    #[test]
    fn map_keeps_headers() {
        let response = Response::with_headers(headers("x-amzn-RequestId", "req-7"), 7_u32);
        let response = response.map(|v| v.to_string());
        assert_eq!(response.body().as_str(), "7");
        assert_eq!(response.request_id(), Some("req-7"));
    }
}
