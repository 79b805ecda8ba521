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

//! Storage Gateway Client Library for Rust.
//!
//! This crate contains the client, request builders and messages for the
//! Storage Gateway management API (version `2013-06-30`).
//!
//! The library does not include a wire transport. Applications provide one by
//! implementing [stub::StorageGateway] and passing it to
//! [ClientBuilder::with_transport][gax::client_builder::ClientBuilder::with_transport].
//! The transport signs, serializes, and sends each request, and maps error
//! responses to [Error]. The same trait is used to mock the client in tests.
//!
//! # Example
//! ```no_run
//! # use storagegateway::client::StorageGateway;
//! use gax::paginator::ItemPaginator as _;
//! async fn sample(client: &StorageGateway) -> storagegateway::Result<()> {
//!     let mut gateways = client.list_gateways().set_limit(10).by_item();
//!     while let Some(gateway) = gateways.next().await {
//!         let gateway = gateway?;
//!         println!("{:?} {:?}", gateway.gateway_name, gateway.gateway_arn);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Available clients
//!
//! * [StorageGateway](client/struct.StorageGateway.html)

/// The messages and enums that are part of this client library.
#[allow(rustdoc::invalid_html_tags)]
#[allow(rustdoc::redundant_explicit_links)]
pub mod model;

pub mod errors;

pub use gax::Result;
pub use gax::error::Error;

pub mod builder;

pub mod client;

pub mod stub;

pub(crate) mod tracing;

#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    #[test]
    fn send_and_sync() {
        assert_impl_all!(crate::client::StorageGateway: Clone, Send, Sync, std::fmt::Debug);
        assert_impl_all!(crate::model::ListGatewaysRequest: Clone, Send, Sync, Default, PartialEq);
        assert_impl_all!(crate::model::DescribeGatewayInformationResponse: Clone, Send, Sync);
        assert_impl_all!(crate::errors::InvalidGatewayRequestException: std::error::Error, Send, Sync);
        assert_impl_all!(crate::builder::storage_gateway::ListTapes: Clone, Send, Sync);
    }
}
