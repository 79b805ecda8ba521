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

//! Provide types for client construction.
//!
//! Applications need to construct clients with some configuration, at the very
//! least they must provide the transport that carries requests to the
//! service. The client library uses a generic builder type to provide such
//! functionality. The types in this module implement the client builders.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! ## Example: create a client with a transport.
//!
//! ```
//! # use storagegateway_gax::client_builder::examples;
//! # use storagegateway_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_transport(examples::Transport::new("placeholder"))
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```
//!
//! ## Example: create a client with tracing enabled
//!
//! ```
//! # use storagegateway_gax::client_builder::examples;
//! # use storagegateway_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_transport(examples::Transport::new("placeholder"))
//!     .with_tracing()
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use storagegateway_gax::client_builder::examples;
/// use storagegateway_gax::client_builder::Error as Error;
/// use examples::Client; // Placeholder for examples
/// # tokio_test::block_on(async {
/// let client = match Client::builder().build().await {
///     Ok(c) => c,
///     Err(e) if e.is_transport() => {
///         println!("cannot initialize the transport: {e}");
///         return Err(e);
///     }
///     Err(e) => {
///         println!("error during client initialization {e}");
///         return Err(e);
///     }
/// };
/// # Ok::<(), Error>(()) });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client could not initialize the transport.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// A "client" represents a connection to a specific service. Clients are
/// initialized using a `ClientBuilder`.
///
/// Applications obtain a builder with the correct generic types using the
/// `builder()` method on each client:
/// ```
/// # use storagegateway_gax::client_builder::examples;
/// use examples::Client; // Placeholder for examples
/// let builder = Client::builder();
/// ```
///
/// As usual, the builder offers several method to configure the client, and a
/// `.build()` method to construct the client:
/// ```
/// # use storagegateway_gax::client_builder::examples;
/// # use storagegateway_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = Client::builder()
///     .with_transport(examples::Transport::new("placeholder"))
///     .build().await?;
/// # Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Tr> {
    config: internal::ClientConfig<Tr>,
    factory: F,
}

impl<F, Tr> ClientBuilder<F, Tr> {
    /// Creates a new client.
    ///
    /// ```
    /// # use storagegateway_gax::client_builder::examples;
    /// # use storagegateway_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_transport(examples::Transport::new("placeholder"))
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Transport = Tr>,
    {
        self.factory.build(self.config).await
    }

    /// Enables tracing.
    ///
    /// The client library can be dynamically instrumented with the Tokio
    /// [tracing] framework. Setting this flag enables this instrumentation.
    ///
    /// ```
    /// # use storagegateway_gax::client_builder::examples;
    /// # use storagegateway_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_transport(examples::Transport::new("placeholder"))
    ///     .with_tracing()
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configure the transport.
    ///
    /// The transport is responsible for signing, serializing, and sending each
    /// request, and for decoding the responses and errors.
    ///
    /// ```
    /// # use storagegateway_gax::client_builder::examples;
    /// # use storagegateway_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_transport(examples::Transport::new("placeholder"))
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_transport<T: Into<Tr>>(mut self, v: T) -> Self {
        self.config.transport = Some(v.into());
        self
    }
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    use super::*;

    const LOGGING_VAR: &str = "STORAGEGATEWAY_RUST_LOGGING";

    pub trait ClientFactory {
        type Client;
        type Transport;
        fn build(
            self,
            config: internal::ClientConfig<Self::Transport>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, Tr, C>(factory: F) -> super::ClientBuilder<F, Tr>
    where
        F: ClientFactory<Client = C, Transport = Tr>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    ///
    /// A client represents a connection to the service. The configuration
    /// names the transport and controls the instrumentation of the client.
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Tr> {
        pub transport: Option<Tr>,
        pub tracing: bool,
    }

    impl<Tr> std::default::Default for ClientConfig<Tr> {
        fn default() -> Self {
            Self {
                transport: None,
                tracing: false,
            }
        }
    }

    // Returns true if the environment or client configuration enables tracing.
    pub fn tracing_enabled<Tr>(config: &ClientConfig<Tr>) -> bool {
        if config.tracing {
            return true;
        }
        std::env::var(LOGGING_VAR)
            .map(|v| v == "true")
            .unwrap_or(false)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use scoped_env::ScopedEnv;

        // This test must run serially because it manipulates the environment.
        #[test]
        #[serial_test::serial]
        fn config_tracing() {
            let _e = ScopedEnv::remove(LOGGING_VAR);
            let config = ClientConfig::<()>::default();
            assert!(!tracing_enabled(&config), "expected tracing to be disabled");
            let mut config = ClientConfig::<()>::default();
            config.tracing = true;
            let config = config;
            assert!(tracing_enabled(&config), "expected tracing to be enabled");

            let _e = ScopedEnv::set(LOGGING_VAR, "true");
            let config = ClientConfig::<()>::default();
            assert!(tracing_enabled(&config), "expected tracing to be enabled");

            let _e = ScopedEnv::set(LOGGING_VAR, "not-true");
            let config = ClientConfig::<()>::default();
            assert!(!tracing_enabled(&config), "expected tracing to be disabled");
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! This module contains helper types used in the rustdoc examples.
    //!
    //! The examples require relatively complex types to be useful.

    type Config = super::internal::ClientConfig<Transport>;
    use super::{Error, Result};

    /// A client type for use in examples.
    ///
    /// This type is used in examples as a placeholder for a real client. It
    /// does not work, but illustrates how to use `ClientBuilder`.
    #[allow(dead_code)]
    pub struct Client(Config);
    impl Client {
        /// Create a builder to initialize new instances of this client.
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: super::internal::ClientConfig<Transport>) -> Result<Self> {
            if config.transport.is_none() {
                return Err(Error::transport("missing transport"));
            }
            Ok(Self(config))
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory, super::Transport>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Transport = super::Transport;
            type Client = super::Client;
            async fn build(
                self,
                config: crate::client_builder::internal::ClientConfig<Self::Transport>,
            ) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// A transport type for use in examples.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Transport {
        pub name: String,
    }

    impl Transport {
        pub fn new<T: Into<String>>(name: T) -> Self {
            Self { name: name.into() }
        }
    }

    impl From<&str> for Transport {
        fn from(value: &str) -> Self {
            Self::new(value)
        }
    }

    // We use the examples as scaffolding for the tests.
    #[cfg(test)]
    mod tests {
        use super::*;
        use std::error::Error as _;

        #[tokio::test]
        async fn build_default() {
            let client = Client::builder().build().await;
            let err = client.err().unwrap();
            assert!(err.is_transport(), "{err:?}");
            assert!(err.source().is_some(), "{err:?}");
        }

        #[tokio::test]
        async fn transport() {
            let client = Client::builder()
                .with_transport(Transport::new("test-transport"))
                .build()
                .await
                .unwrap();
            let config = client.0;
            assert_eq!(config.transport, Some(Transport::new("test-transport")));
            assert!(!config.tracing);
        }

        #[tokio::test]
        async fn transport_into() {
            let client = Client::builder()
                .with_transport("test-transport")
                .build()
                .await
                .unwrap();
            let config = client.0;
            assert_eq!(config.transport, Some(Transport::new("test-transport")));
        }

        #[tokio::test]
        async fn tracing() {
            let client = Client::builder()
                .with_transport(Transport::default())
                .with_tracing()
                .build()
                .await
                .unwrap();
            let config = client.0;
            assert!(config.tracing);
        }
    }
}
