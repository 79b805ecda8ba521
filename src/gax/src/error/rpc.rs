// Copyright 2024 Google LLC
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

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// The error document returned by the service.
///
/// Each error response names the error type (e.g.
/// `InvalidGatewayRequestException`), includes a human-readable message, and
/// may include a structured error with more details. The full document is
/// preserved in [details][Status::details], so service-specific error types
/// can be decoded from it.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Status {
    /// The error type, without any namespace prefix.
    pub error_type: String,

    /// A developer-facing error message, which should be in English.
    pub message: String,

    /// The full error document, if the service returned one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl Status {
    /// Sets the value for [error_type][Status::error_type].
    pub fn set_error_type<T: Into<String>>(mut self, v: T) -> Self {
        self.error_type = v.into();
        self
    }

    /// Sets the value for [message][Status::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value for [details][Status::details].
    pub fn set_details<T: Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.details = Some(v.into());
        self
    }
}

/// A helper to deserialize the service error document.
#[derive(Clone, Debug, Deserialize)]
struct ErrorWrapper {
    #[serde(rename = "__type")]
    error_type: String,
    #[serde(alias = "Message")]
    message: Option<String>,
}

impl TryFrom<&bytes::Bytes> for Status {
    type Error = Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        let details = serde_json::from_slice::<serde_json::Value>(value).map_err(Error::deser)?;
        let wrapper = serde_json::from_value::<ErrorWrapper>(details.clone()).map_err(Error::deser)?;
        let error_type = match wrapper.error_type.rsplit_once('#') {
            Some((_, t)) => t.to_string(),
            None => wrapper.error_type,
        };
        Ok(Status {
            error_type,
            message: wrapper.message.unwrap_or_default(),
            details: Some(details),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;
    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    const SAMPLE_PAYLOAD: &[u8] = br#"{
        "__type": "com.amazonaws.storagegateway.v20130630#InvalidGatewayRequestException",
        "message": "The specified gateway was not found.",
        "error": {
            "errorCode": "GatewayNotFound",
            "errorDetails": {"gatewayArn": "arn:aws:storagegateway:us-east-2:111122223333:gateway/sgw-12A3456B"}
        }
    }"#;

    #[test]
    fn status_basic_setters() {
        let got = Status::default()
            .set_error_type("InternalServerError")
            .set_message("test-message")
            .set_details(json!({"a": 1}));
        let want = Status {
            error_type: "InternalServerError".into(),
            message: "test-message".into(),
            details: Some(json!({"a": 1})),
        };
        assert_eq!(got, want);
    }

    #[test]
    fn try_from_bytes() -> Result<()> {
        let got = Status::try_from(&bytes::Bytes::from_static(SAMPLE_PAYLOAD))?;
        assert_eq!(got.error_type, "InvalidGatewayRequestException");
        assert_eq!(got.message, "The specified gateway was not found.");
        let details = got.details.ok_or("missing details")?;
        assert_eq!(details["error"]["errorCode"], json!("GatewayNotFound"));
        Ok(())
    }

    #[test_case(br#"{"__type": "InternalServerError", "Message": "upper"}"#, "InternalServerError", "upper"; "capitalized message")]
    #[test_case(br#"{"__type": "a.b#ServiceUnavailableError"}"#, "ServiceUnavailableError", ""; "missing message")]
    fn try_from_bytes_variants(input: &'static [u8], error_type: &str, message: &str) -> Result<()> {
        let got = Status::try_from(&bytes::Bytes::from_static(input))?;
        assert_eq!(got.error_type, error_type);
        assert_eq!(got.message, message);
        Ok(())
    }

    #[test_case(b"\"__type\": 1234"; "not an object")]
    #[test_case(b"{\"message\": \"missing type\"}"; "missing type")]
    #[test_case(b"<html></html>"; "not json")]
    fn try_from_bytes_errors(input: &'static [u8]) {
        let got = Status::try_from(&bytes::Bytes::from_static(input));
        assert!(
            matches!(&got, Err(e) if e.is_deserialization()),
            "{got:?}"
        );
    }

    #[test]
    fn serialize_roundtrip() -> Result<()> {
        let status = Status::default()
            .set_error_type("InvalidGatewayRequestException")
            .set_message("oops");
        let json = serde_json::to_value(&status)?;
        assert_eq!(
            json,
            json!({"errorType": "InvalidGatewayRequestException", "message": "oops"})
        );
        let got = serde_json::from_value::<Status>(json)?;
        assert_eq!(got, status);
        Ok(())
    }
}
