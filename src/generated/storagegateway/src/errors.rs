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

//! The errors reported by the Storage Gateway service.
//!
//! Operations return [gax::error::Error]. When the service rejects a request
//! the transport reports the error type and the error document in
//! [Status][gax::error::rpc::Status]. Use [StorageGatewayException::from_error]
//! to recover the typed error.
//!
//! # Example
//! ```
//! use storagegateway::errors::StorageGatewayException;
//! use storagegateway::model::ErrorCode;
//! fn handle(error: &gax::error::Error) {
//!     match StorageGatewayException::from_error(error) {
//!         Some(StorageGatewayException::InvalidGatewayRequest(e)) => {
//!             let code = e.error.as_ref().and_then(|x| x.error_code.as_ref());
//!             if code == Some(&ErrorCode::GatewayNotFound) {
//!                 println!("the gateway does not exist: {e}");
//!             }
//!         }
//!         Some(e) => println!("the service could not handle the request: {e}"),
//!         None => println!("the request failed: {error}"),
//!     }
//! }
//! ```

use crate::model::StorageGatewayError;

/// An exception occurred because an invalid gateway request was issued to the
/// service.
///
/// The [error][InvalidGatewayRequestException::error] field describes the
/// cause, for example [GatewayNotFound][crate::model::ErrorCode::GatewayNotFound].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct InvalidGatewayRequestException {
    /// A human-readable message describing the error that occurred.
    #[serde(alias = "Message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// A `StorageGatewayError` that provides more detail about the cause of
    /// the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<StorageGatewayError>,
}

/// An internal server error has occurred during the request.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct InternalServerError {
    /// A human-readable message describing the error that occurred.
    #[serde(alias = "Message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// A `StorageGatewayError` that provides more information about the cause
    /// of the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<StorageGatewayError>,
}

/// An internal server error has occurred because the service is unavailable.
///
/// The request can be retried after some time.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ServiceUnavailableError {
    /// A human-readable message describing the error that occurred.
    #[serde(alias = "Message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// A `StorageGatewayError` that provides more information about the cause
    /// of the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<StorageGatewayError>,
}

macro_rules! impl_service_error {
    ($name:ident) => {
        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            /// Sets the value of [message][Self::message].
            pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
                self.message = Some(v.into());
                self
            }

            /// Sets or clears the value of [message][Self::message].
            pub fn set_or_clear_message<T: Into<String>>(mut self, v: Option<T>) -> Self {
                self.message = v.map(|x| x.into());
                self
            }

            /// Sets the value of [error][Self::error].
            pub fn set_error<T: Into<StorageGatewayError>>(mut self, v: T) -> Self {
                self.error = Some(v.into());
                self
            }

            /// Sets or clears the value of [error][Self::error].
            pub fn set_or_clear_error<T: Into<StorageGatewayError>>(mut self, v: Option<T>) -> Self {
                self.error = v.map(|x| x.into());
                self
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let mut debug_struct = f.debug_struct(stringify!($name));
                if let Some(v) = &self.message {
                    debug_struct.field("message", v);
                }
                if let Some(v) = &self.error {
                    debug_struct.field("error", v);
                }
                debug_struct.finish()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(stringify!($name))?;
                if let Some(code) = self.error.as_ref().and_then(|e| e.error_code.as_ref()) {
                    write!(f, " ({code})")?;
                }
                if let Some(m) = &self.message {
                    write!(f, ": {m}")?;
                }
                Ok(())
            }
        }

        impl std::error::Error for $name {}
    };
}

impl_service_error!(InvalidGatewayRequestException);
impl_service_error!(InternalServerError);
impl_service_error!(ServiceUnavailableError);

// The error document as sent by the service. Each part is decoded on its
// own, so a malformed `error` or a body that repeats `message` with different
// casing still yields the typed error.
#[derive(Default, serde::Deserialize)]
#[serde(default)]
struct ErrorDocument {
    message: Option<String>,
    #[serde(rename = "Message")]
    upper_message: Option<String>,
    error: Option<serde_json::Value>,
}

/// The errors modeled by the Storage Gateway service.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum StorageGatewayException {
    /// The service reported an `InvalidGatewayRequestException`.
    InvalidGatewayRequest(InvalidGatewayRequestException),
    /// The service reported an `InternalServerError`.
    InternalServer(InternalServerError),
    /// The service reported a `ServiceUnavailableError`.
    ServiceUnavailable(ServiceUnavailableError),
}

impl StorageGatewayException {
    /// Recovers the typed service error from an operation error.
    ///
    /// Returns `None` if the error is not a service error, or if the service
    /// reported an error type that is not modeled by this library.
    pub fn from_error(error: &gax::error::Error) -> Option<Self> {
        let status = error.status()?;
        let document = status
            .details
            .clone()
            .and_then(|d| serde_json::from_value::<ErrorDocument>(d).ok())
            .unwrap_or_default();
        let message = document
            .message
            .or(document.upper_message)
            .or_else(|| (!status.message.is_empty()).then(|| status.message.clone()));
        let payload = document
            .error
            .and_then(|v| serde_json::from_value::<StorageGatewayError>(v).ok());
        match status.error_type.as_str() {
            "InvalidGatewayRequestException" => Some(Self::InvalidGatewayRequest(
                InvalidGatewayRequestException::new()
                    .set_or_clear_message(message)
                    .set_or_clear_error(payload),
            )),
            "InternalServerError" => Some(Self::InternalServer(
                InternalServerError::new()
                    .set_or_clear_message(message)
                    .set_or_clear_error(payload),
            )),
            "ServiceUnavailableError" => Some(Self::ServiceUnavailable(
                ServiceUnavailableError::new()
                    .set_or_clear_message(message)
                    .set_or_clear_error(payload),
            )),
            _ => None,
        }
    }

    /// The human-readable message reported by the service, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::InvalidGatewayRequest(e) => e.message.as_deref(),
            Self::InternalServer(e) => e.message.as_deref(),
            Self::ServiceUnavailable(e) => e.message.as_deref(),
        }
    }

    /// The error details reported by the service, if any.
    pub fn error(&self) -> Option<&StorageGatewayError> {
        match self {
            Self::InvalidGatewayRequest(e) => e.error.as_ref(),
            Self::InternalServer(e) => e.error.as_ref(),
            Self::ServiceUnavailable(e) => e.error.as_ref(),
        }
    }
}

impl std::fmt::Display for StorageGatewayException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidGatewayRequest(e) => std::fmt::Display::fmt(e, f),
            Self::InternalServer(e) => std::fmt::Display::fmt(e, f),
            Self::ServiceUnavailable(e) => std::fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for StorageGatewayException {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGatewayRequest(e) => Some(e),
            Self::InternalServer(e) => Some(e),
            Self::ServiceUnavailable(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ErrorCode;
    use gax::error::rpc::Status;
    use serde_json::json;
    use test_case::test_case;

    fn service_error(error_type: &str, details: serde_json::Value) -> gax::error::Error {
        let status = Status::default()
            .set_error_type(error_type)
            .set_message("test-only message")
            .set_details(details);
        gax::error::Error::service(status)
    }

    #[test]
    fn invalid_gateway_request() {
        let error = service_error(
            "InvalidGatewayRequestException",
            json!({
                "__type": "InvalidGatewayRequestException",
                "message": "The specified gateway was not found.",
                "error": {
                    "errorCode": "GatewayNotFound",
                    "errorDetails": {"gatewayArn": "arn:aws:storagegateway:us-east-2:111122223333:gateway/sgw-12A3456B"}
                }
            }),
        );
        let got = StorageGatewayException::from_error(&error);
        let want = InvalidGatewayRequestException::new()
            .set_message("The specified gateway was not found.")
            .set_error(
                StorageGatewayError::new()
                    .set_error_code(ErrorCode::GatewayNotFound)
                    .set_error_details([(
                        "gatewayArn",
                        "arn:aws:storagegateway:us-east-2:111122223333:gateway/sgw-12A3456B",
                    )]),
            );
        assert_eq!(got, Some(StorageGatewayException::InvalidGatewayRequest(want)));
    }

    #[test]
    fn message_from_status() {
        let error = service_error("InternalServerError", json!({"__type": "InternalServerError"}));
        let got = StorageGatewayException::from_error(&error);
        assert!(
            matches!(&got, Some(StorageGatewayException::InternalServer(_))),
            "{got:?}"
        );
        let got = got.unwrap();
        assert_eq!(got.message(), Some("test-only message"));
        assert!(got.error().is_none(), "{got:?}");
    }

    #[test_case("InvalidGatewayRequestException")]
    #[test_case("InternalServerError")]
    #[test_case("ServiceUnavailableError")]
    fn known_types(error_type: &str) {
        let error = service_error(error_type, json!({"error": {"errorCode": "VolumeNotReady"}}));
        let got = StorageGatewayException::from_error(&error).unwrap();
        assert_eq!(
            got.error().and_then(|e| e.error_code.clone()),
            Some(ErrorCode::VolumeNotReady)
        );
        assert_eq!(got.message(), Some("test-only message"));
    }

    #[test]
    fn both_message_spellings() {
        let error = service_error(
            "InvalidGatewayRequestException",
            json!({
                "message": "lower",
                "Message": "upper",
                "error": {"errorCode": "GatewayNotFound"}
            }),
        );
        let got = StorageGatewayException::from_error(&error);
        let want = InvalidGatewayRequestException::new()
            .set_message("lower")
            .set_error(StorageGatewayError::new().set_error_code(ErrorCode::GatewayNotFound));
        assert_eq!(got, Some(StorageGatewayException::InvalidGatewayRequest(want)));
    }

    #[test]
    fn capitalized_message() {
        let error = service_error("ServiceUnavailableError", json!({"Message": "upper"}));
        let got = StorageGatewayException::from_error(&error);
        assert_eq!(got.as_ref().and_then(|e| e.message()), Some("upper"), "{got:?}");
    }

    #[test_case(json!("plain text body"); "string")]
    #[test_case(json!([1, 2, 3]); "array")]
    #[test_case(json!(null); "null")]
    #[test_case(json!({"error": "not an object"}); "malformed error payload")]
    fn details_not_decoded(details: serde_json::Value) {
        let error = service_error("InvalidGatewayRequestException", details);
        let got = StorageGatewayException::from_error(&error);
        let want = InvalidGatewayRequestException::new().set_message("test-only message");
        assert_eq!(got, Some(StorageGatewayException::InvalidGatewayRequest(want)));
    }

    #[test]
    fn missing_details() {
        let status = Status::default()
            .set_error_type("InternalServerError")
            .set_message("no body");
        let error = gax::error::Error::service(status);
        let got = StorageGatewayException::from_error(&error);
        let want = InternalServerError::new().set_message("no body");
        assert_eq!(got, Some(StorageGatewayException::InternalServer(want)));
    }

    #[test]
    fn unknown_type() {
        let error = service_error("ThrottlingException", json!({}));
        assert!(StorageGatewayException::from_error(&error).is_none());
    }

    #[test]
    fn not_a_service_error() {
        let error = gax::error::Error::deser("bad payload");
        assert!(StorageGatewayException::from_error(&error).is_none());
    }

    #[test]
    fn display() {
        let e = InvalidGatewayRequestException::new()
            .set_message("gateway not found")
            .set_error(StorageGatewayError::new().set_error_code(ErrorCode::GatewayNotFound));
        assert_eq!(
            e.to_string(),
            "InvalidGatewayRequestException (GatewayNotFound): gateway not found"
        );
        let e = ServiceUnavailableError::new();
        assert_eq!(e.to_string(), "ServiceUnavailableError");
        let e = StorageGatewayException::InternalServer(InternalServerError::new().set_message("oops"));
        assert_eq!(e.to_string(), "InternalServerError: oops");
        use std::error::Error as _;
        assert!(e.source().is_some(), "{e:?}");
    }

    #[test]
    fn debug_only_set_fields() {
        let e = InvalidGatewayRequestException::new().set_message("m");
        let got = format!("{e:?}");
        assert!(got.contains("message"), "{got}");
        assert!(!got.contains("error"), "{got}");
    }
}
