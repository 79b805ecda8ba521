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

#[cfg(test)]
mod tests {
    use gax::response::Response;
    use std::sync::{Arc, Mutex};
    use storagegateway::client::StorageGateway;
    use storagegateway::model;
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    #[derive(Debug)]
    struct FakeTransport;

    impl storagegateway::stub::StorageGateway for FakeTransport {
        async fn list_gateways(
            &self,
            _req: model::ListGatewaysRequest,
            _options: gax::options::RequestOptions,
        ) -> gax::Result<Response<model::ListGatewaysResponse>> {
            Ok(Response::from(model::ListGatewaysResponse::new().set_gateways([
                model::GatewayInfo::new().set_gateway_name("traced"),
            ])))
        }

        async fn set_local_console_password(
            &self,
            _req: model::SetLocalConsolePasswordRequest,
            _options: gax::options::RequestOptions,
        ) -> gax::Result<Response<model::SetLocalConsolePasswordResponse>> {
            Ok(Response::from(
                model::SetLocalConsolePasswordResponse::new().set_gateway_arn("test-gateway"),
            ))
        }
    }

    // Records the name and the field values of every span created while the
    // layer is active.
    #[derive(Clone, Default)]
    struct SpanNames(Arc<Mutex<Vec<String>>>, Arc<Mutex<Vec<String>>>);

    impl SpanNames {
        fn names(&self) -> Vec<String> {
            self.0.lock().map(|v| v.clone()).unwrap_or_default()
        }

        fn fields(&self) -> Vec<String> {
            self.1.lock().map(|v| v.clone()).unwrap_or_default()
        }
    }

    struct FieldVisitor<'a>(&'a mut Vec<String>);

    impl tracing::field::Visit for FieldVisitor<'_> {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            self.0.push(format!("{}={value:?}", field.name()));
        }
    }

    impl<S: tracing::Subscriber> Layer<S> for SpanNames {
        fn on_new_span(
            &self,
            attrs: &tracing::span::Attributes<'_>,
            _id: &tracing::span::Id,
            _ctx: Context<'_, S>,
        ) {
            if let Ok(mut v) = self.0.lock() {
                v.push(attrs.metadata().name().to_string());
            }
            if let Ok(mut v) = self.1.lock() {
                attrs.record(&mut FieldVisitor(&mut *v));
            }
        }
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn with_tracing_creates_spans() -> anyhow::Result<()> {
        let names = SpanNames::default();
        let subscriber = tracing_subscriber::registry().with(names.clone());
        let _guard = tracing::subscriber::set_default(subscriber);

        let client = StorageGateway::builder()
            .with_transport(FakeTransport)
            .with_tracing()
            .build()
            .await?;
        let response = client.list_gateways().send().await?;
        assert_eq!(response.gateways.len(), 1);

        let got = names.names();
        assert!(got.iter().any(|n| n == "list_gateways"), "{got:?}");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn without_tracing_no_spans() -> anyhow::Result<()> {
        let _env = scoped_env::ScopedEnv::remove("STORAGEGATEWAY_RUST_LOGGING");
        let names = SpanNames::default();
        let subscriber = tracing_subscriber::registry().with(names.clone());
        let _guard = tracing::subscriber::set_default(subscriber);

        let client = StorageGateway::builder()
            .with_transport(FakeTransport)
            .build()
            .await?;
        let _ = client.list_gateways().send().await?;

        let got = names.names();
        assert!(!got.iter().any(|n| n == "list_gateways"), "{got:?}");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn spans_censor_secrets() -> anyhow::Result<()> {
        let names = SpanNames::default();
        let subscriber = tracing_subscriber::registry().with(names.clone());
        let _guard = tracing::subscriber::set_default(subscriber);

        let client = StorageGateway::builder()
            .with_transport(FakeTransport)
            .with_tracing()
            .build()
            .await?;
        let _ = client
            .set_local_console_password()
            .set_gateway_arn("test-gateway")
            .set_local_console_password("hunter2-secret")
            .send()
            .await?;

        let got = names.names();
        assert!(got.iter().any(|n| n == "set_local_console_password"), "{got:?}");
        let fields = names.fields();
        assert!(fields.iter().any(|f| f.contains("test-gateway")), "{fields:?}");
        assert!(fields.iter().any(|f| f.contains("[censored]")), "{fields:?}");
        assert!(!fields.iter().any(|f| f.contains("hunter2-secret")), "{fields:?}");
        Ok(())
    }
}
