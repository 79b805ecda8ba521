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

// Verify `ClientBuilder` can be used outside the crate.
#[cfg(test)]
mod test {
    use gax::client_builder::internal::ClientConfig;
    use storagegateway_gax as gax;

    #[tokio::test]
    async fn missing_transport() {
        let client = MyClient::builder().build().await;
        assert!(matches!(&client, Err(e) if e.is_transport()));
    }

    #[tokio::test]
    async fn with_transport() -> anyhow::Result<()> {
        let client = MyClient::builder()
            .with_transport(Transport("abc123".into()))
            .with_tracing()
            .build()
            .await?;
        assert_eq!(client.transport.0, "abc123");
        assert!(client.tracing);
        Ok(())
    }

    #[derive(Clone, Debug)]
    pub struct Transport(String);

    pub struct MyClient {
        transport: Transport,
        tracing: bool,
    }
    impl MyClient {
        pub fn builder() -> my_client::Builder {
            gax::client_builder::internal::new_builder(my_client::Factory)
        }

        async fn new(config: ClientConfig<Transport>) -> gax::client_builder::Result<Self> {
            let tracing = gax::client_builder::internal::tracing_enabled(&config);
            let transport = config
                .transport
                .ok_or_else(|| gax::client_builder::Error::transport("missing transport"))?;
            Ok(Self { transport, tracing })
        }
    }
    mod my_client {
        use super::gax;
        pub type Builder = gax::client_builder::ClientBuilder<Factory, super::Transport>;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = super::MyClient;
            type Transport = super::Transport;
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig<Self::Transport>,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }
}
