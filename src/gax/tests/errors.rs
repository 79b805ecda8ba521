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

use storagegateway_gax::error::Error;

#[cfg(test)]
mod test {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug, Default)]
    struct LeafError {}

    impl LeafError {
        fn hey(&self) -> &'static str {
            "hey"
        }
    }

    impl std::fmt::Display for LeafError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "other error")
        }
    }

    impl std::error::Error for LeafError {}

    #[test]
    fn source_chain() -> anyhow::Result<()> {
        let err = Error::io(LeafError::default());
        assert!(err.is_io(), "{err:?}");
        assert!(err.is_transport(), "{err:?}");
        let leaf = err
            .source()
            .and_then(|e| e.downcast_ref::<LeafError>())
            .ok_or_else(|| anyhow::anyhow!("missing source in {err:?}"))?;
        assert_eq!(leaf.hey(), "hey");

        let err = Error::other(LeafError::default());
        assert!(!err.is_transport(), "{err:?}");
        assert!(err.status().is_none(), "{err:?}");
        Ok(())
    }

    #[test]
    fn service_error_from_http_response() {
        let payload = bytes::Bytes::from_static(
            br#"{"__type": "com.amazonaws.storagegateway.v20130630#InternalServerError", "message": "try again"}"#,
        );
        let err = Error::from_http_response(500, http::HeaderMap::new(), payload);
        let status = err.status();
        assert_eq!(
            status.map(|s| s.error_type.as_str()),
            Some("InternalServerError"),
            "{err:?}"
        );
        assert_eq!(status.map(|s| s.message.as_str()), Some("try again"));
        assert_eq!(err.http_status_code(), Some(500));
        assert!(err.http_payload().is_none(), "{err:?}");
    }

    #[test]
    fn transport_error_from_http_response() {
        let payload = bytes::Bytes::from_static(b"<html>bad gateway</html>");
        let err = Error::from_http_response(502, http::HeaderMap::new(), payload.clone());
        assert!(err.is_transport(), "{err:?}");
        assert!(err.status().is_none(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(502));
        assert_eq!(err.http_payload(), Some(&payload));
    }
}
