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

pub mod storage_gateway {
    use crate::Result;

    /// A builder for [StorageGateway][crate::client::StorageGateway].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use storagegateway::*;
    /// # use builder::storage_gateway::ClientBuilder;
    /// # use client::StorageGateway;
    /// # #[derive(Debug)]
    /// # struct MyTransport;
    /// # impl stub::StorageGateway for MyTransport {}
    /// let builder: ClientBuilder = StorageGateway::builder();
    /// let client = builder
    ///     .with_transport(MyTransport)
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<client::Factory, Transport>;

    pub(crate) mod client {
        use super::super::super::client::StorageGateway;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = StorageGateway;
            type Transport = super::Transport;
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig<Self::Transport>,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// The transport used by [StorageGateway][crate::client::StorageGateway].
    ///
    /// Any implementation of [stub::StorageGateway][crate::stub::StorageGateway]
    /// converts into a `Transport`, so applications rarely name this type.
    #[derive(Clone, Debug)]
    pub struct Transport(
        pub(crate) std::sync::Arc<dyn crate::stub::dynamic::StorageGateway>,
    );

    impl<T> std::convert::From<T> for Transport
    where
        T: crate::stub::StorageGateway + 'static,
    {
        fn from(value: T) -> Self {
            Self(std::sync::Arc::new(value))
        }
    }

    /// Common implementation for [crate::client::StorageGateway] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [StorageGateway::activate_gateway][crate::client::StorageGateway::activate_gateway] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::ActivateGateway;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ActivateGateway {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ActivateGateway(RequestBuilder<crate::model::ActivateGatewayRequest>);

    impl ActivateGateway {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ActivateGatewayRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ActivateGatewayResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .activate_gateway(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [activation_key][crate::model::ActivateGatewayRequest::activation_key].
        pub fn set_activation_key<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.activation_key = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [activation_key][crate::model::ActivateGatewayRequest::activation_key].
        pub fn set_or_clear_activation_key<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.activation_key = v.map(|x| x.into());
            self
        }

        /// Sets the value of [gateway_name][crate::model::ActivateGatewayRequest::gateway_name].
        pub fn set_gateway_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_name][crate::model::ActivateGatewayRequest::gateway_name].
        pub fn set_or_clear_gateway_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [gateway_timezone][crate::model::ActivateGatewayRequest::gateway_timezone].
        pub fn set_gateway_timezone<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_timezone = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_timezone][crate::model::ActivateGatewayRequest::gateway_timezone].
        pub fn set_or_clear_gateway_timezone<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_timezone = v.map(|x| x.into());
            self
        }

        /// Sets the value of [gateway_region][crate::model::ActivateGatewayRequest::gateway_region].
        pub fn set_gateway_region<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_region = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_region][crate::model::ActivateGatewayRequest::gateway_region].
        pub fn set_or_clear_gateway_region<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_region = v.map(|x| x.into());
            self
        }

        /// Sets the value of [gateway_type][crate::model::ActivateGatewayRequest::gateway_type].
        pub fn set_gateway_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_type][crate::model::ActivateGatewayRequest::gateway_type].
        pub fn set_or_clear_gateway_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [tape_drive_type][crate::model::ActivateGatewayRequest::tape_drive_type].
        pub fn set_tape_drive_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.tape_drive_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [tape_drive_type][crate::model::ActivateGatewayRequest::tape_drive_type].
        pub fn set_or_clear_tape_drive_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.tape_drive_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [medium_changer_type][crate::model::ActivateGatewayRequest::medium_changer_type].
        pub fn set_medium_changer_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.medium_changer_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [medium_changer_type][crate::model::ActivateGatewayRequest::medium_changer_type].
        pub fn set_or_clear_medium_changer_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.medium_changer_type = v.map(|x| x.into());
            self
        }

        /// Sets the value of [tags][crate::model::ActivateGatewayRequest::tags].
        pub fn set_tags<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::Tag>,
        {
            use std::iter::Iterator;
            self.0.request.tags = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ActivateGateway {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::add_cache][crate::client::StorageGateway::add_cache] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::AddCache;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> AddCache {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct AddCache(RequestBuilder<crate::model::AddCacheRequest>);

    impl AddCache {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::AddCacheRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AddCacheResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .add_cache(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::AddCacheRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::AddCacheRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [disk_ids][crate::model::AddCacheRequest::disk_ids].
        pub fn set_disk_ids<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.disk_ids = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for AddCache {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::add_tags_to_resource][crate::client::StorageGateway::add_tags_to_resource] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::AddTagsToResource;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> AddTagsToResource {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct AddTagsToResource(RequestBuilder<crate::model::AddTagsToResourceRequest>);

    impl AddTagsToResource {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::AddTagsToResourceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AddTagsToResourceResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .add_tags_to_resource(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [resource_arn][crate::model::AddTagsToResourceRequest::resource_arn].
        pub fn set_resource_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.resource_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [resource_arn][crate::model::AddTagsToResourceRequest::resource_arn].
        pub fn set_or_clear_resource_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.resource_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [tags][crate::model::AddTagsToResourceRequest::tags].
        pub fn set_tags<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::Tag>,
        {
            use std::iter::Iterator;
            self.0.request.tags = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for AddTagsToResource {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::add_upload_buffer][crate::client::StorageGateway::add_upload_buffer] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::AddUploadBuffer;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> AddUploadBuffer {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct AddUploadBuffer(RequestBuilder<crate::model::AddUploadBufferRequest>);

    impl AddUploadBuffer {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::AddUploadBufferRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AddUploadBufferResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .add_upload_buffer(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::AddUploadBufferRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::AddUploadBufferRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [disk_ids][crate::model::AddUploadBufferRequest::disk_ids].
        pub fn set_disk_ids<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.disk_ids = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for AddUploadBuffer {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::add_working_storage][crate::client::StorageGateway::add_working_storage] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::AddWorkingStorage;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> AddWorkingStorage {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct AddWorkingStorage(RequestBuilder<crate::model::AddWorkingStorageRequest>);

    impl AddWorkingStorage {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::AddWorkingStorageRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AddWorkingStorageResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .add_working_storage(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::AddWorkingStorageRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::AddWorkingStorageRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [disk_ids][crate::model::AddWorkingStorageRequest::disk_ids].
        pub fn set_disk_ids<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.disk_ids = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for AddWorkingStorage {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::assign_tape_pool][crate::client::StorageGateway::assign_tape_pool] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::AssignTapePool;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> AssignTapePool {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct AssignTapePool(RequestBuilder<crate::model::AssignTapePoolRequest>);

    impl AssignTapePool {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::AssignTapePoolRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AssignTapePoolResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .assign_tape_pool(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [tape_arn][crate::model::AssignTapePoolRequest::tape_arn].
        pub fn set_tape_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.tape_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [tape_arn][crate::model::AssignTapePoolRequest::tape_arn].
        pub fn set_or_clear_tape_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.tape_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [pool_id][crate::model::AssignTapePoolRequest::pool_id].
        pub fn set_pool_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.pool_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [pool_id][crate::model::AssignTapePoolRequest::pool_id].
        pub fn set_or_clear_pool_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.pool_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for AssignTapePool {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::attach_volume][crate::client::StorageGateway::attach_volume] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::AttachVolume;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> AttachVolume {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct AttachVolume(RequestBuilder<crate::model::AttachVolumeRequest>);

    impl AttachVolume {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::AttachVolumeRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AttachVolumeResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .attach_volume(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::AttachVolumeRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::AttachVolumeRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [target_name][crate::model::AttachVolumeRequest::target_name].
        pub fn set_target_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.target_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [target_name][crate::model::AttachVolumeRequest::target_name].
        pub fn set_or_clear_target_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.target_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [volume_arn][crate::model::AttachVolumeRequest::volume_arn].
        pub fn set_volume_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.volume_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [volume_arn][crate::model::AttachVolumeRequest::volume_arn].
        pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.volume_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [network_interface_id][crate::model::AttachVolumeRequest::network_interface_id].
        pub fn set_network_interface_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.network_interface_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [network_interface_id][crate::model::AttachVolumeRequest::network_interface_id].
        pub fn set_or_clear_network_interface_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.network_interface_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [disk_id][crate::model::AttachVolumeRequest::disk_id].
        pub fn set_disk_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.disk_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [disk_id][crate::model::AttachVolumeRequest::disk_id].
        pub fn set_or_clear_disk_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.disk_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for AttachVolume {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::cancel_archival][crate::client::StorageGateway::cancel_archival] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::CancelArchival;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CancelArchival {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CancelArchival(RequestBuilder<crate::model::CancelArchivalRequest>);

    impl CancelArchival {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CancelArchivalRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::CancelArchivalResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .cancel_archival(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::CancelArchivalRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::CancelArchivalRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [tape_arn][crate::model::CancelArchivalRequest::tape_arn].
        pub fn set_tape_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.tape_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [tape_arn][crate::model::CancelArchivalRequest::tape_arn].
        pub fn set_or_clear_tape_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.tape_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CancelArchival {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::cancel_retrieval][crate::client::StorageGateway::cancel_retrieval] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::CancelRetrieval;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CancelRetrieval {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CancelRetrieval(RequestBuilder<crate::model::CancelRetrievalRequest>);

    impl CancelRetrieval {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CancelRetrievalRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::CancelRetrievalResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .cancel_retrieval(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::CancelRetrievalRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::CancelRetrievalRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [tape_arn][crate::model::CancelRetrievalRequest::tape_arn].
        pub fn set_tape_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.tape_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [tape_arn][crate::model::CancelRetrievalRequest::tape_arn].
        pub fn set_or_clear_tape_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.tape_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CancelRetrieval {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::create_cached_iscsi_volume][crate::client::StorageGateway::create_cached_iscsi_volume] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::CreateCachediScsiVolume;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateCachediScsiVolume {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateCachediScsiVolume(RequestBuilder<crate::model::CreateCachediScsiVolumeRequest>);

    impl CreateCachediScsiVolume {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateCachediScsiVolumeRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::CreateCachediScsiVolumeResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .create_cached_iscsi_volume(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::CreateCachediScsiVolumeRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::CreateCachediScsiVolumeRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [volume_size_in_bytes][crate::model::CreateCachediScsiVolumeRequest::volume_size_in_bytes].
        pub fn set_volume_size_in_bytes<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.volume_size_in_bytes = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [volume_size_in_bytes][crate::model::CreateCachediScsiVolumeRequest::volume_size_in_bytes].
        pub fn set_or_clear_volume_size_in_bytes<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.volume_size_in_bytes = v.map(|x| x.into());
            self
        }

        /// Sets the value of [snapshot_id][crate::model::CreateCachediScsiVolumeRequest::snapshot_id].
        pub fn set_snapshot_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.snapshot_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [snapshot_id][crate::model::CreateCachediScsiVolumeRequest::snapshot_id].
        pub fn set_or_clear_snapshot_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.snapshot_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [target_name][crate::model::CreateCachediScsiVolumeRequest::target_name].
        pub fn set_target_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.target_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [target_name][crate::model::CreateCachediScsiVolumeRequest::target_name].
        pub fn set_or_clear_target_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.target_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [source_volume_arn][crate::model::CreateCachediScsiVolumeRequest::source_volume_arn].
        pub fn set_source_volume_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.source_volume_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [source_volume_arn][crate::model::CreateCachediScsiVolumeRequest::source_volume_arn].
        pub fn set_or_clear_source_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.source_volume_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [network_interface_id][crate::model::CreateCachediScsiVolumeRequest::network_interface_id].
        pub fn set_network_interface_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.network_interface_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [network_interface_id][crate::model::CreateCachediScsiVolumeRequest::network_interface_id].
        pub fn set_or_clear_network_interface_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.network_interface_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [client_token][crate::model::CreateCachediScsiVolumeRequest::client_token].
        pub fn set_client_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.client_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [client_token][crate::model::CreateCachediScsiVolumeRequest::client_token].
        pub fn set_or_clear_client_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.client_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [kms_encrypted][crate::model::CreateCachediScsiVolumeRequest::kms_encrypted].
        pub fn set_kms_encrypted<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.kms_encrypted = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [kms_encrypted][crate::model::CreateCachediScsiVolumeRequest::kms_encrypted].
        pub fn set_or_clear_kms_encrypted<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.kms_encrypted = v.map(|x| x.into());
            self
        }

        /// Sets the value of [kms_key][crate::model::CreateCachediScsiVolumeRequest::kms_key].
        pub fn set_kms_key<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.kms_key = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [kms_key][crate::model::CreateCachediScsiVolumeRequest::kms_key].
        pub fn set_or_clear_kms_key<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.kms_key = v.map(|x| x.into());
            self
        }

        /// Sets the value of [tags][crate::model::CreateCachediScsiVolumeRequest::tags].
        pub fn set_tags<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::Tag>,
        {
            use std::iter::Iterator;
            self.0.request.tags = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateCachediScsiVolume {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::create_nfs_file_share][crate::client::StorageGateway::create_nfs_file_share] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::CreateNfsFileShare;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateNfsFileShare {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateNfsFileShare(RequestBuilder<crate::model::CreateNfsFileShareRequest>);

    impl CreateNfsFileShare {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateNfsFileShareRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::CreateNfsFileShareResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .create_nfs_file_share(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [client_token][crate::model::CreateNfsFileShareRequest::client_token].
        pub fn set_client_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.client_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [client_token][crate::model::CreateNfsFileShareRequest::client_token].
        pub fn set_or_clear_client_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.client_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [nfs_file_share_defaults][crate::model::CreateNfsFileShareRequest::nfs_file_share_defaults].
        pub fn set_nfs_file_share_defaults<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::NfsFileShareDefaults>,
        {
            self.0.request.nfs_file_share_defaults = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [nfs_file_share_defaults][crate::model::CreateNfsFileShareRequest::nfs_file_share_defaults].
        pub fn set_or_clear_nfs_file_share_defaults<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::NfsFileShareDefaults>,
        {
            self.0.request.nfs_file_share_defaults = v.map(|x| x.into());
            self
        }

        /// Sets the value of [gateway_arn][crate::model::CreateNfsFileShareRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::CreateNfsFileShareRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [kms_encrypted][crate::model::CreateNfsFileShareRequest::kms_encrypted].
        pub fn set_kms_encrypted<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.kms_encrypted = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [kms_encrypted][crate::model::CreateNfsFileShareRequest::kms_encrypted].
        pub fn set_or_clear_kms_encrypted<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.kms_encrypted = v.map(|x| x.into());
            self
        }

        /// Sets the value of [kms_key][crate::model::CreateNfsFileShareRequest::kms_key].
        pub fn set_kms_key<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.kms_key = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [kms_key][crate::model::CreateNfsFileShareRequest::kms_key].
        pub fn set_or_clear_kms_key<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.kms_key = v.map(|x| x.into());
            self
        }

        /// Sets the value of [role][crate::model::CreateNfsFileShareRequest::role].
        pub fn set_role<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.role = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [role][crate::model::CreateNfsFileShareRequest::role].
        pub fn set_or_clear_role<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.role = v.map(|x| x.into());
            self
        }

        /// Sets the value of [location_arn][crate::model::CreateNfsFileShareRequest::location_arn].
        pub fn set_location_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.location_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [location_arn][crate::model::CreateNfsFileShareRequest::location_arn].
        pub fn set_or_clear_location_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.location_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [default_storage_class][crate::model::CreateNfsFileShareRequest::default_storage_class].
        pub fn set_default_storage_class<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.default_storage_class = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [default_storage_class][crate::model::CreateNfsFileShareRequest::default_storage_class].
        pub fn set_or_clear_default_storage_class<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.default_storage_class = v.map(|x| x.into());
            self
        }

        /// Sets the value of [object_acl][crate::model::CreateNfsFileShareRequest::object_acl].
        pub fn set_object_acl<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ObjectAcl>,
        {
            self.0.request.object_acl = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [object_acl][crate::model::CreateNfsFileShareRequest::object_acl].
        pub fn set_or_clear_object_acl<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::ObjectAcl>,
        {
            self.0.request.object_acl = v.map(|x| x.into());
            self
        }

        /// Sets the value of [client_list][crate::model::CreateNfsFileShareRequest::client_list].
        pub fn set_client_list<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.client_list = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [squash][crate::model::CreateNfsFileShareRequest::squash].
        pub fn set_squash<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.squash = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [squash][crate::model::CreateNfsFileShareRequest::squash].
        pub fn set_or_clear_squash<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.squash = v.map(|x| x.into());
            self
        }

        /// Sets the value of [read_only][crate::model::CreateNfsFileShareRequest::read_only].
        pub fn set_read_only<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.read_only = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [read_only][crate::model::CreateNfsFileShareRequest::read_only].
        pub fn set_or_clear_read_only<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.read_only = v.map(|x| x.into());
            self
        }

        /// Sets the value of [guess_mime_type_enabled][crate::model::CreateNfsFileShareRequest::guess_mime_type_enabled].
        pub fn set_guess_mime_type_enabled<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.guess_mime_type_enabled = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [guess_mime_type_enabled][crate::model::CreateNfsFileShareRequest::guess_mime_type_enabled].
        pub fn set_or_clear_guess_mime_type_enabled<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.guess_mime_type_enabled = v.map(|x| x.into());
            self
        }

        /// Sets the value of [requester_pays][crate::model::CreateNfsFileShareRequest::requester_pays].
        pub fn set_requester_pays<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.requester_pays = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [requester_pays][crate::model::CreateNfsFileShareRequest::requester_pays].
        pub fn set_or_clear_requester_pays<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.requester_pays = v.map(|x| x.into());
            self
        }

        /// Sets the value of [tags][crate::model::CreateNfsFileShareRequest::tags].
        pub fn set_tags<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::Tag>,
        {
            use std::iter::Iterator;
            self.0.request.tags = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateNfsFileShare {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::create_smb_file_share][crate::client::StorageGateway::create_smb_file_share] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::CreateSmbFileShare;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateSmbFileShare {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateSmbFileShare(RequestBuilder<crate::model::CreateSmbFileShareRequest>);

    impl CreateSmbFileShare {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateSmbFileShareRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::CreateSmbFileShareResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .create_smb_file_share(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [client_token][crate::model::CreateSmbFileShareRequest::client_token].
        pub fn set_client_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.client_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [client_token][crate::model::CreateSmbFileShareRequest::client_token].
        pub fn set_or_clear_client_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.client_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [gateway_arn][crate::model::CreateSmbFileShareRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::CreateSmbFileShareRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [kms_encrypted][crate::model::CreateSmbFileShareRequest::kms_encrypted].
        pub fn set_kms_encrypted<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.kms_encrypted = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [kms_encrypted][crate::model::CreateSmbFileShareRequest::kms_encrypted].
        pub fn set_or_clear_kms_encrypted<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.kms_encrypted = v.map(|x| x.into());
            self
        }

        /// Sets the value of [kms_key][crate::model::CreateSmbFileShareRequest::kms_key].
        pub fn set_kms_key<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.kms_key = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [kms_key][crate::model::CreateSmbFileShareRequest::kms_key].
        pub fn set_or_clear_kms_key<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.kms_key = v.map(|x| x.into());
            self
        }

        /// Sets the value of [role][crate::model::CreateSmbFileShareRequest::role].
        pub fn set_role<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.role = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [role][crate::model::CreateSmbFileShareRequest::role].
        pub fn set_or_clear_role<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.role = v.map(|x| x.into());
            self
        }

        /// Sets the value of [location_arn][crate::model::CreateSmbFileShareRequest::location_arn].
        pub fn set_location_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.location_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [location_arn][crate::model::CreateSmbFileShareRequest::location_arn].
        pub fn set_or_clear_location_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.location_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [default_storage_class][crate::model::CreateSmbFileShareRequest::default_storage_class].
        pub fn set_default_storage_class<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.default_storage_class = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [default_storage_class][crate::model::CreateSmbFileShareRequest::default_storage_class].
        pub fn set_or_clear_default_storage_class<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.default_storage_class = v.map(|x| x.into());
            self
        }

        /// Sets the value of [object_acl][crate::model::CreateSmbFileShareRequest::object_acl].
        pub fn set_object_acl<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ObjectAcl>,
        {
            self.0.request.object_acl = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [object_acl][crate::model::CreateSmbFileShareRequest::object_acl].
        pub fn set_or_clear_object_acl<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::ObjectAcl>,
        {
            self.0.request.object_acl = v.map(|x| x.into());
            self
        }

        /// Sets the value of [read_only][crate::model::CreateSmbFileShareRequest::read_only].
        pub fn set_read_only<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.read_only = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [read_only][crate::model::CreateSmbFileShareRequest::read_only].
        pub fn set_or_clear_read_only<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.read_only = v.map(|x| x.into());
            self
        }

        /// Sets the value of [guess_mime_type_enabled][crate::model::CreateSmbFileShareRequest::guess_mime_type_enabled].
        pub fn set_guess_mime_type_enabled<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.guess_mime_type_enabled = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [guess_mime_type_enabled][crate::model::CreateSmbFileShareRequest::guess_mime_type_enabled].
        pub fn set_or_clear_guess_mime_type_enabled<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.guess_mime_type_enabled = v.map(|x| x.into());
            self
        }

        /// Sets the value of [requester_pays][crate::model::CreateSmbFileShareRequest::requester_pays].
        pub fn set_requester_pays<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.requester_pays = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [requester_pays][crate::model::CreateSmbFileShareRequest::requester_pays].
        pub fn set_or_clear_requester_pays<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.requester_pays = v.map(|x| x.into());
            self
        }

        /// Sets the value of [smb_acl_enabled][crate::model::CreateSmbFileShareRequest::smb_acl_enabled].
        pub fn set_smb_acl_enabled<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.smb_acl_enabled = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [smb_acl_enabled][crate::model::CreateSmbFileShareRequest::smb_acl_enabled].
        pub fn set_or_clear_smb_acl_enabled<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.smb_acl_enabled = v.map(|x| x.into());
            self
        }

        /// Sets the value of [admin_user_list][crate::model::CreateSmbFileShareRequest::admin_user_list].
        pub fn set_admin_user_list<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.admin_user_list = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [valid_user_list][crate::model::CreateSmbFileShareRequest::valid_user_list].
        pub fn set_valid_user_list<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.valid_user_list = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [invalid_user_list][crate::model::CreateSmbFileShareRequest::invalid_user_list].
        pub fn set_invalid_user_list<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.invalid_user_list = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [audit_destination_arn][crate::model::CreateSmbFileShareRequest::audit_destination_arn].
        pub fn set_audit_destination_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.audit_destination_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [audit_destination_arn][crate::model::CreateSmbFileShareRequest::audit_destination_arn].
        pub fn set_or_clear_audit_destination_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.audit_destination_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [authentication][crate::model::CreateSmbFileShareRequest::authentication].
        pub fn set_authentication<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.authentication = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [authentication][crate::model::CreateSmbFileShareRequest::authentication].
        pub fn set_or_clear_authentication<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.authentication = v.map(|x| x.into());
            self
        }

        /// Sets the value of [tags][crate::model::CreateSmbFileShareRequest::tags].
        pub fn set_tags<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::Tag>,
        {
            use std::iter::Iterator;
            self.0.request.tags = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateSmbFileShare {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::create_snapshot][crate::client::StorageGateway::create_snapshot] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::CreateSnapshot;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateSnapshot {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateSnapshot(RequestBuilder<crate::model::CreateSnapshotRequest>);

    impl CreateSnapshot {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateSnapshotRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::CreateSnapshotResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .create_snapshot(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [volume_arn][crate::model::CreateSnapshotRequest::volume_arn].
        pub fn set_volume_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.volume_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [volume_arn][crate::model::CreateSnapshotRequest::volume_arn].
        pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.volume_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [snapshot_description][crate::model::CreateSnapshotRequest::snapshot_description].
        pub fn set_snapshot_description<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.snapshot_description = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [snapshot_description][crate::model::CreateSnapshotRequest::snapshot_description].
        pub fn set_or_clear_snapshot_description<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.snapshot_description = v.map(|x| x.into());
            self
        }

        /// Sets the value of [tags][crate::model::CreateSnapshotRequest::tags].
        pub fn set_tags<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::Tag>,
        {
            use std::iter::Iterator;
            self.0.request.tags = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateSnapshot {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::create_snapshot_from_volume_recovery_point][crate::client::StorageGateway::create_snapshot_from_volume_recovery_point] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::CreateSnapshotFromVolumeRecoveryPoint;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateSnapshotFromVolumeRecoveryPoint {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateSnapshotFromVolumeRecoveryPoint(RequestBuilder<crate::model::CreateSnapshotFromVolumeRecoveryPointRequest>);

    impl CreateSnapshotFromVolumeRecoveryPoint {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateSnapshotFromVolumeRecoveryPointRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::CreateSnapshotFromVolumeRecoveryPointResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .create_snapshot_from_volume_recovery_point(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [volume_arn][crate::model::CreateSnapshotFromVolumeRecoveryPointRequest::volume_arn].
        pub fn set_volume_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.volume_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [volume_arn][crate::model::CreateSnapshotFromVolumeRecoveryPointRequest::volume_arn].
        pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.volume_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [snapshot_description][crate::model::CreateSnapshotFromVolumeRecoveryPointRequest::snapshot_description].
        pub fn set_snapshot_description<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.snapshot_description = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [snapshot_description][crate::model::CreateSnapshotFromVolumeRecoveryPointRequest::snapshot_description].
        pub fn set_or_clear_snapshot_description<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.snapshot_description = v.map(|x| x.into());
            self
        }

        /// Sets the value of [tags][crate::model::CreateSnapshotFromVolumeRecoveryPointRequest::tags].
        pub fn set_tags<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::Tag>,
        {
            use std::iter::Iterator;
            self.0.request.tags = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateSnapshotFromVolumeRecoveryPoint {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::create_stored_iscsi_volume][crate::client::StorageGateway::create_stored_iscsi_volume] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::CreateStorediScsiVolume;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateStorediScsiVolume {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateStorediScsiVolume(RequestBuilder<crate::model::CreateStorediScsiVolumeRequest>);

    impl CreateStorediScsiVolume {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateStorediScsiVolumeRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::CreateStorediScsiVolumeResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .create_stored_iscsi_volume(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::CreateStorediScsiVolumeRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::CreateStorediScsiVolumeRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [disk_id][crate::model::CreateStorediScsiVolumeRequest::disk_id].
        pub fn set_disk_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.disk_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [disk_id][crate::model::CreateStorediScsiVolumeRequest::disk_id].
        pub fn set_or_clear_disk_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.disk_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [snapshot_id][crate::model::CreateStorediScsiVolumeRequest::snapshot_id].
        pub fn set_snapshot_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.snapshot_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [snapshot_id][crate::model::CreateStorediScsiVolumeRequest::snapshot_id].
        pub fn set_or_clear_snapshot_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.snapshot_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [preserve_existing_data][crate::model::CreateStorediScsiVolumeRequest::preserve_existing_data].
        pub fn set_preserve_existing_data<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.preserve_existing_data = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [preserve_existing_data][crate::model::CreateStorediScsiVolumeRequest::preserve_existing_data].
        pub fn set_or_clear_preserve_existing_data<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.preserve_existing_data = v.map(|x| x.into());
            self
        }

        /// Sets the value of [target_name][crate::model::CreateStorediScsiVolumeRequest::target_name].
        pub fn set_target_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.target_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [target_name][crate::model::CreateStorediScsiVolumeRequest::target_name].
        pub fn set_or_clear_target_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.target_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [network_interface_id][crate::model::CreateStorediScsiVolumeRequest::network_interface_id].
        pub fn set_network_interface_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.network_interface_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [network_interface_id][crate::model::CreateStorediScsiVolumeRequest::network_interface_id].
        pub fn set_or_clear_network_interface_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.network_interface_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [kms_encrypted][crate::model::CreateStorediScsiVolumeRequest::kms_encrypted].
        pub fn set_kms_encrypted<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.kms_encrypted = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [kms_encrypted][crate::model::CreateStorediScsiVolumeRequest::kms_encrypted].
        pub fn set_or_clear_kms_encrypted<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.kms_encrypted = v.map(|x| x.into());
            self
        }

        /// Sets the value of [kms_key][crate::model::CreateStorediScsiVolumeRequest::kms_key].
        pub fn set_kms_key<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.kms_key = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [kms_key][crate::model::CreateStorediScsiVolumeRequest::kms_key].
        pub fn set_or_clear_kms_key<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.kms_key = v.map(|x| x.into());
            self
        }

        /// Sets the value of [tags][crate::model::CreateStorediScsiVolumeRequest::tags].
        pub fn set_tags<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::Tag>,
        {
            use std::iter::Iterator;
            self.0.request.tags = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateStorediScsiVolume {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::create_tape_with_barcode][crate::client::StorageGateway::create_tape_with_barcode] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::CreateTapeWithBarcode;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateTapeWithBarcode {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateTapeWithBarcode(RequestBuilder<crate::model::CreateTapeWithBarcodeRequest>);

    impl CreateTapeWithBarcode {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateTapeWithBarcodeRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::CreateTapeWithBarcodeResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .create_tape_with_barcode(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::CreateTapeWithBarcodeRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::CreateTapeWithBarcodeRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [tape_size_in_bytes][crate::model::CreateTapeWithBarcodeRequest::tape_size_in_bytes].
        pub fn set_tape_size_in_bytes<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.tape_size_in_bytes = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [tape_size_in_bytes][crate::model::CreateTapeWithBarcodeRequest::tape_size_in_bytes].
        pub fn set_or_clear_tape_size_in_bytes<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.tape_size_in_bytes = v.map(|x| x.into());
            self
        }

        /// Sets the value of [tape_barcode][crate::model::CreateTapeWithBarcodeRequest::tape_barcode].
        pub fn set_tape_barcode<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.tape_barcode = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [tape_barcode][crate::model::CreateTapeWithBarcodeRequest::tape_barcode].
        pub fn set_or_clear_tape_barcode<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.tape_barcode = v.map(|x| x.into());
            self
        }

        /// Sets the value of [kms_encrypted][crate::model::CreateTapeWithBarcodeRequest::kms_encrypted].
        pub fn set_kms_encrypted<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.kms_encrypted = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [kms_encrypted][crate::model::CreateTapeWithBarcodeRequest::kms_encrypted].
        pub fn set_or_clear_kms_encrypted<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.kms_encrypted = v.map(|x| x.into());
            self
        }

        /// Sets the value of [kms_key][crate::model::CreateTapeWithBarcodeRequest::kms_key].
        pub fn set_kms_key<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.kms_key = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [kms_key][crate::model::CreateTapeWithBarcodeRequest::kms_key].
        pub fn set_or_clear_kms_key<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.kms_key = v.map(|x| x.into());
            self
        }

        /// Sets the value of [pool_id][crate::model::CreateTapeWithBarcodeRequest::pool_id].
        pub fn set_pool_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.pool_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [pool_id][crate::model::CreateTapeWithBarcodeRequest::pool_id].
        pub fn set_or_clear_pool_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.pool_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [tags][crate::model::CreateTapeWithBarcodeRequest::tags].
        pub fn set_tags<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::Tag>,
        {
            use std::iter::Iterator;
            self.0.request.tags = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateTapeWithBarcode {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::create_tapes][crate::client::StorageGateway::create_tapes] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::CreateTapes;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateTapes {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateTapes(RequestBuilder<crate::model::CreateTapesRequest>);

    impl CreateTapes {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateTapesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::CreateTapesResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .create_tapes(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::CreateTapesRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::CreateTapesRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [tape_size_in_bytes][crate::model::CreateTapesRequest::tape_size_in_bytes].
        pub fn set_tape_size_in_bytes<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.tape_size_in_bytes = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [tape_size_in_bytes][crate::model::CreateTapesRequest::tape_size_in_bytes].
        pub fn set_or_clear_tape_size_in_bytes<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.tape_size_in_bytes = v.map(|x| x.into());
            self
        }

        /// Sets the value of [client_token][crate::model::CreateTapesRequest::client_token].
        pub fn set_client_token<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.client_token = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [client_token][crate::model::CreateTapesRequest::client_token].
        pub fn set_or_clear_client_token<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.client_token = v.map(|x| x.into());
            self
        }

        /// Sets the value of [num_tapes_to_create][crate::model::CreateTapesRequest::num_tapes_to_create].
        pub fn set_num_tapes_to_create<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.num_tapes_to_create = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [num_tapes_to_create][crate::model::CreateTapesRequest::num_tapes_to_create].
        pub fn set_or_clear_num_tapes_to_create<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.num_tapes_to_create = v.map(|x| x.into());
            self
        }

        /// Sets the value of [tape_barcode_prefix][crate::model::CreateTapesRequest::tape_barcode_prefix].
        pub fn set_tape_barcode_prefix<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.tape_barcode_prefix = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [tape_barcode_prefix][crate::model::CreateTapesRequest::tape_barcode_prefix].
        pub fn set_or_clear_tape_barcode_prefix<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.tape_barcode_prefix = v.map(|x| x.into());
            self
        }

        /// Sets the value of [kms_encrypted][crate::model::CreateTapesRequest::kms_encrypted].
        pub fn set_kms_encrypted<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.kms_encrypted = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [kms_encrypted][crate::model::CreateTapesRequest::kms_encrypted].
        pub fn set_or_clear_kms_encrypted<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.kms_encrypted = v.map(|x| x.into());
            self
        }

        /// Sets the value of [kms_key][crate::model::CreateTapesRequest::kms_key].
        pub fn set_kms_key<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.kms_key = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [kms_key][crate::model::CreateTapesRequest::kms_key].
        pub fn set_or_clear_kms_key<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.kms_key = v.map(|x| x.into());
            self
        }

        /// Sets the value of [pool_id][crate::model::CreateTapesRequest::pool_id].
        pub fn set_pool_id<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.pool_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [pool_id][crate::model::CreateTapesRequest::pool_id].
        pub fn set_or_clear_pool_id<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.pool_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [tags][crate::model::CreateTapesRequest::tags].
        pub fn set_tags<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::Tag>,
        {
            use std::iter::Iterator;
            self.0.request.tags = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateTapes {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::delete_automatic_tape_creation_policy][crate::client::StorageGateway::delete_automatic_tape_creation_policy] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DeleteAutomaticTapeCreationPolicy;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteAutomaticTapeCreationPolicy {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteAutomaticTapeCreationPolicy(RequestBuilder<crate::model::DeleteAutomaticTapeCreationPolicyRequest>);

    impl DeleteAutomaticTapeCreationPolicy {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteAutomaticTapeCreationPolicyRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DeleteAutomaticTapeCreationPolicyResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .delete_automatic_tape_creation_policy(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::DeleteAutomaticTapeCreationPolicyRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::DeleteAutomaticTapeCreationPolicyRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteAutomaticTapeCreationPolicy {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::delete_bandwidth_rate_limit][crate::client::StorageGateway::delete_bandwidth_rate_limit] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DeleteBandwidthRateLimit;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteBandwidthRateLimit {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteBandwidthRateLimit(RequestBuilder<crate::model::DeleteBandwidthRateLimitRequest>);

    impl DeleteBandwidthRateLimit {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteBandwidthRateLimitRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DeleteBandwidthRateLimitResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .delete_bandwidth_rate_limit(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::DeleteBandwidthRateLimitRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::DeleteBandwidthRateLimitRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [bandwidth_type][crate::model::DeleteBandwidthRateLimitRequest::bandwidth_type].
        pub fn set_bandwidth_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.bandwidth_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [bandwidth_type][crate::model::DeleteBandwidthRateLimitRequest::bandwidth_type].
        pub fn set_or_clear_bandwidth_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.bandwidth_type = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteBandwidthRateLimit {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::delete_chap_credentials][crate::client::StorageGateway::delete_chap_credentials] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DeleteChapCredentials;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteChapCredentials {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteChapCredentials(RequestBuilder<crate::model::DeleteChapCredentialsRequest>);

    impl DeleteChapCredentials {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteChapCredentialsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DeleteChapCredentialsResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .delete_chap_credentials(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [target_arn][crate::model::DeleteChapCredentialsRequest::target_arn].
        pub fn set_target_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.target_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [target_arn][crate::model::DeleteChapCredentialsRequest::target_arn].
        pub fn set_or_clear_target_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.target_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [initiator_name][crate::model::DeleteChapCredentialsRequest::initiator_name].
        pub fn set_initiator_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.initiator_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [initiator_name][crate::model::DeleteChapCredentialsRequest::initiator_name].
        pub fn set_or_clear_initiator_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.initiator_name = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteChapCredentials {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::delete_file_share][crate::client::StorageGateway::delete_file_share] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DeleteFileShare;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteFileShare {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteFileShare(RequestBuilder<crate::model::DeleteFileShareRequest>);

    impl DeleteFileShare {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteFileShareRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DeleteFileShareResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .delete_file_share(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [file_share_arn][crate::model::DeleteFileShareRequest::file_share_arn].
        pub fn set_file_share_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.file_share_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [file_share_arn][crate::model::DeleteFileShareRequest::file_share_arn].
        pub fn set_or_clear_file_share_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.file_share_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [force_delete][crate::model::DeleteFileShareRequest::force_delete].
        pub fn set_force_delete<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.force_delete = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [force_delete][crate::model::DeleteFileShareRequest::force_delete].
        pub fn set_or_clear_force_delete<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.force_delete = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteFileShare {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::delete_gateway][crate::client::StorageGateway::delete_gateway] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DeleteGateway;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteGateway {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteGateway(RequestBuilder<crate::model::DeleteGatewayRequest>);

    impl DeleteGateway {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteGatewayRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DeleteGatewayResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .delete_gateway(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::DeleteGatewayRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::DeleteGatewayRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteGateway {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::delete_snapshot_schedule][crate::client::StorageGateway::delete_snapshot_schedule] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DeleteSnapshotSchedule;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteSnapshotSchedule {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteSnapshotSchedule(RequestBuilder<crate::model::DeleteSnapshotScheduleRequest>);

    impl DeleteSnapshotSchedule {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteSnapshotScheduleRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DeleteSnapshotScheduleResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .delete_snapshot_schedule(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [volume_arn][crate::model::DeleteSnapshotScheduleRequest::volume_arn].
        pub fn set_volume_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.volume_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [volume_arn][crate::model::DeleteSnapshotScheduleRequest::volume_arn].
        pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.volume_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteSnapshotSchedule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::delete_tape][crate::client::StorageGateway::delete_tape] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DeleteTape;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteTape {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteTape(RequestBuilder<crate::model::DeleteTapeRequest>);

    impl DeleteTape {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteTapeRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DeleteTapeResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .delete_tape(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::DeleteTapeRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::DeleteTapeRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [tape_arn][crate::model::DeleteTapeRequest::tape_arn].
        pub fn set_tape_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.tape_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [tape_arn][crate::model::DeleteTapeRequest::tape_arn].
        pub fn set_or_clear_tape_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.tape_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteTape {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::delete_tape_archive][crate::client::StorageGateway::delete_tape_archive] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DeleteTapeArchive;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteTapeArchive {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteTapeArchive(RequestBuilder<crate::model::DeleteTapeArchiveRequest>);

    impl DeleteTapeArchive {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteTapeArchiveRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DeleteTapeArchiveResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .delete_tape_archive(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [tape_arn][crate::model::DeleteTapeArchiveRequest::tape_arn].
        pub fn set_tape_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.tape_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [tape_arn][crate::model::DeleteTapeArchiveRequest::tape_arn].
        pub fn set_or_clear_tape_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.tape_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteTapeArchive {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::delete_volume][crate::client::StorageGateway::delete_volume] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DeleteVolume;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteVolume {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteVolume(RequestBuilder<crate::model::DeleteVolumeRequest>);

    impl DeleteVolume {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteVolumeRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DeleteVolumeResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .delete_volume(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [volume_arn][crate::model::DeleteVolumeRequest::volume_arn].
        pub fn set_volume_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.volume_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [volume_arn][crate::model::DeleteVolumeRequest::volume_arn].
        pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.volume_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteVolume {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::describe_availability_monitor_test][crate::client::StorageGateway::describe_availability_monitor_test] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DescribeAvailabilityMonitorTest;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeAvailabilityMonitorTest {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DescribeAvailabilityMonitorTest(RequestBuilder<crate::model::DescribeAvailabilityMonitorTestRequest>);

    impl DescribeAvailabilityMonitorTest {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DescribeAvailabilityMonitorTestRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DescribeAvailabilityMonitorTestResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                true,
            );
            (*self.0.stub)
                .describe_availability_monitor_test(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::DescribeAvailabilityMonitorTestRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::DescribeAvailabilityMonitorTestRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DescribeAvailabilityMonitorTest {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::describe_bandwidth_rate_limit][crate::client::StorageGateway::describe_bandwidth_rate_limit] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DescribeBandwidthRateLimit;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeBandwidthRateLimit {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DescribeBandwidthRateLimit(RequestBuilder<crate::model::DescribeBandwidthRateLimitRequest>);

    impl DescribeBandwidthRateLimit {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DescribeBandwidthRateLimitRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DescribeBandwidthRateLimitResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                true,
            );
            (*self.0.stub)
                .describe_bandwidth_rate_limit(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::DescribeBandwidthRateLimitRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::DescribeBandwidthRateLimitRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DescribeBandwidthRateLimit {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::describe_cache][crate::client::StorageGateway::describe_cache] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DescribeCache;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeCache {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DescribeCache(RequestBuilder<crate::model::DescribeCacheRequest>);

    impl DescribeCache {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DescribeCacheRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DescribeCacheResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                true,
            );
            (*self.0.stub)
                .describe_cache(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::DescribeCacheRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::DescribeCacheRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DescribeCache {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::describe_cached_iscsi_volumes][crate::client::StorageGateway::describe_cached_iscsi_volumes] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DescribeCachediScsiVolumes;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeCachediScsiVolumes {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DescribeCachediScsiVolumes(RequestBuilder<crate::model::DescribeCachediScsiVolumesRequest>);

    impl DescribeCachediScsiVolumes {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DescribeCachediScsiVolumesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DescribeCachediScsiVolumesResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                true,
            );
            (*self.0.stub)
                .describe_cached_iscsi_volumes(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [volume_arns][crate::model::DescribeCachediScsiVolumesRequest::volume_arns].
        pub fn set_volume_arns<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.volume_arns = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DescribeCachediScsiVolumes {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::describe_chap_credentials][crate::client::StorageGateway::describe_chap_credentials] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DescribeChapCredentials;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeChapCredentials {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DescribeChapCredentials(RequestBuilder<crate::model::DescribeChapCredentialsRequest>);

    impl DescribeChapCredentials {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DescribeChapCredentialsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DescribeChapCredentialsResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                true,
            );
            (*self.0.stub)
                .describe_chap_credentials(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [target_arn][crate::model::DescribeChapCredentialsRequest::target_arn].
        pub fn set_target_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.target_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [target_arn][crate::model::DescribeChapCredentialsRequest::target_arn].
        pub fn set_or_clear_target_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.target_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DescribeChapCredentials {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::describe_gateway_information][crate::client::StorageGateway::describe_gateway_information] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DescribeGatewayInformation;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeGatewayInformation {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DescribeGatewayInformation(RequestBuilder<crate::model::DescribeGatewayInformationRequest>);

    impl DescribeGatewayInformation {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DescribeGatewayInformationRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DescribeGatewayInformationResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                true,
            );
            (*self.0.stub)
                .describe_gateway_information(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::DescribeGatewayInformationRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::DescribeGatewayInformationRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DescribeGatewayInformation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::describe_maintenance_start_time][crate::client::StorageGateway::describe_maintenance_start_time] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DescribeMaintenanceStartTime;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeMaintenanceStartTime {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DescribeMaintenanceStartTime(RequestBuilder<crate::model::DescribeMaintenanceStartTimeRequest>);

    impl DescribeMaintenanceStartTime {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DescribeMaintenanceStartTimeRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DescribeMaintenanceStartTimeResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                true,
            );
            (*self.0.stub)
                .describe_maintenance_start_time(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::DescribeMaintenanceStartTimeRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::DescribeMaintenanceStartTimeRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DescribeMaintenanceStartTime {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::describe_nfs_file_shares][crate::client::StorageGateway::describe_nfs_file_shares] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DescribeNfsFileShares;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeNfsFileShares {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DescribeNfsFileShares(RequestBuilder<crate::model::DescribeNfsFileSharesRequest>);

    impl DescribeNfsFileShares {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DescribeNfsFileSharesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DescribeNfsFileSharesResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                true,
            );
            (*self.0.stub)
                .describe_nfs_file_shares(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [file_share_arn_list][crate::model::DescribeNfsFileSharesRequest::file_share_arn_list].
        pub fn set_file_share_arn_list<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.file_share_arn_list = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DescribeNfsFileShares {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::describe_smb_file_shares][crate::client::StorageGateway::describe_smb_file_shares] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DescribeSmbFileShares;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeSmbFileShares {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DescribeSmbFileShares(RequestBuilder<crate::model::DescribeSmbFileSharesRequest>);

    impl DescribeSmbFileShares {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DescribeSmbFileSharesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DescribeSmbFileSharesResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                true,
            );
            (*self.0.stub)
                .describe_smb_file_shares(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [file_share_arn_list][crate::model::DescribeSmbFileSharesRequest::file_share_arn_list].
        pub fn set_file_share_arn_list<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.file_share_arn_list = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DescribeSmbFileShares {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::describe_smb_settings][crate::client::StorageGateway::describe_smb_settings] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DescribeSmbSettings;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeSmbSettings {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DescribeSmbSettings(RequestBuilder<crate::model::DescribeSmbSettingsRequest>);

    impl DescribeSmbSettings {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DescribeSmbSettingsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DescribeSmbSettingsResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                true,
            );
            (*self.0.stub)
                .describe_smb_settings(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::DescribeSmbSettingsRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::DescribeSmbSettingsRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DescribeSmbSettings {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::describe_snapshot_schedule][crate::client::StorageGateway::describe_snapshot_schedule] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DescribeSnapshotSchedule;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeSnapshotSchedule {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DescribeSnapshotSchedule(RequestBuilder<crate::model::DescribeSnapshotScheduleRequest>);

    impl DescribeSnapshotSchedule {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DescribeSnapshotScheduleRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DescribeSnapshotScheduleResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                true,
            );
            (*self.0.stub)
                .describe_snapshot_schedule(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [volume_arn][crate::model::DescribeSnapshotScheduleRequest::volume_arn].
        pub fn set_volume_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.volume_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [volume_arn][crate::model::DescribeSnapshotScheduleRequest::volume_arn].
        pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.volume_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DescribeSnapshotSchedule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::describe_stored_iscsi_volumes][crate::client::StorageGateway::describe_stored_iscsi_volumes] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DescribeStorediScsiVolumes;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeStorediScsiVolumes {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DescribeStorediScsiVolumes(RequestBuilder<crate::model::DescribeStorediScsiVolumesRequest>);

    impl DescribeStorediScsiVolumes {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DescribeStorediScsiVolumesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DescribeStorediScsiVolumesResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                true,
            );
            (*self.0.stub)
                .describe_stored_iscsi_volumes(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [volume_arns][crate::model::DescribeStorediScsiVolumesRequest::volume_arns].
        pub fn set_volume_arns<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.volume_arns = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DescribeStorediScsiVolumes {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::describe_tape_archives][crate::client::StorageGateway::describe_tape_archives] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DescribeTapeArchives;
    /// # tokio_test::block_on(async {
    /// use gax::paginator::ItemPaginator;
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeTapeArchives {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DescribeTapeArchives(RequestBuilder<crate::model::DescribeTapeArchivesRequest>);

    impl DescribeTapeArchives {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DescribeTapeArchivesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DescribeTapeArchivesResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                true,
            );
            (*self.0.stub)
                .describe_tape_archives(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> impl gax::paginator::Paginator<crate::model::DescribeTapeArchivesResponse, gax::error::Error> {
            use std::clone::Clone;
            let token = self.0.request.marker.clone().unwrap_or_default();
            let execute = move |token: String| {
                let builder = self
                    .clone()
                    .set_or_clear_marker((!token.is_empty()).then_some(token));
                builder.send()
            };
            gax::paginator::internal::new_paginator(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> impl gax::paginator::ItemPaginator<crate::model::DescribeTapeArchivesResponse, gax::error::Error> {
            use gax::paginator::Paginator;
            self.by_page().items()
        }

        /// Sets the value of [tape_arns][crate::model::DescribeTapeArchivesRequest::tape_arns].
        pub fn set_tape_arns<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.tape_arns = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [marker][crate::model::DescribeTapeArchivesRequest::marker].
        pub fn set_marker<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.marker = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [marker][crate::model::DescribeTapeArchivesRequest::marker].
        pub fn set_or_clear_marker<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.marker = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::DescribeTapeArchivesRequest::limit].
        pub fn set_limit<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::DescribeTapeArchivesRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DescribeTapeArchives {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::describe_tape_recovery_points][crate::client::StorageGateway::describe_tape_recovery_points] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DescribeTapeRecoveryPoints;
    /// # tokio_test::block_on(async {
    /// use gax::paginator::ItemPaginator;
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeTapeRecoveryPoints {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DescribeTapeRecoveryPoints(RequestBuilder<crate::model::DescribeTapeRecoveryPointsRequest>);

    impl DescribeTapeRecoveryPoints {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DescribeTapeRecoveryPointsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DescribeTapeRecoveryPointsResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                true,
            );
            (*self.0.stub)
                .describe_tape_recovery_points(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> impl gax::paginator::Paginator<crate::model::DescribeTapeRecoveryPointsResponse, gax::error::Error> {
            use std::clone::Clone;
            let token = self.0.request.marker.clone().unwrap_or_default();
            let execute = move |token: String| {
                let builder = self
                    .clone()
                    .set_or_clear_marker((!token.is_empty()).then_some(token));
                builder.send()
            };
            gax::paginator::internal::new_paginator(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> impl gax::paginator::ItemPaginator<crate::model::DescribeTapeRecoveryPointsResponse, gax::error::Error> {
            use gax::paginator::Paginator;
            self.by_page().items()
        }

        /// Sets the value of [gateway_arn][crate::model::DescribeTapeRecoveryPointsRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::DescribeTapeRecoveryPointsRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [marker][crate::model::DescribeTapeRecoveryPointsRequest::marker].
        pub fn set_marker<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.marker = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [marker][crate::model::DescribeTapeRecoveryPointsRequest::marker].
        pub fn set_or_clear_marker<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.marker = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::DescribeTapeRecoveryPointsRequest::limit].
        pub fn set_limit<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::DescribeTapeRecoveryPointsRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DescribeTapeRecoveryPoints {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::describe_tapes][crate::client::StorageGateway::describe_tapes] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DescribeTapes;
    /// # tokio_test::block_on(async {
    /// use gax::paginator::ItemPaginator;
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeTapes {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DescribeTapes(RequestBuilder<crate::model::DescribeTapesRequest>);

    impl DescribeTapes {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DescribeTapesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DescribeTapesResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                true,
            );
            (*self.0.stub)
                .describe_tapes(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> impl gax::paginator::Paginator<crate::model::DescribeTapesResponse, gax::error::Error> {
            use std::clone::Clone;
            let token = self.0.request.marker.clone().unwrap_or_default();
            let execute = move |token: String| {
                let builder = self
                    .clone()
                    .set_or_clear_marker((!token.is_empty()).then_some(token));
                builder.send()
            };
            gax::paginator::internal::new_paginator(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> impl gax::paginator::ItemPaginator<crate::model::DescribeTapesResponse, gax::error::Error> {
            use gax::paginator::Paginator;
            self.by_page().items()
        }

        /// Sets the value of [gateway_arn][crate::model::DescribeTapesRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::DescribeTapesRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [tape_arns][crate::model::DescribeTapesRequest::tape_arns].
        pub fn set_tape_arns<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.tape_arns = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [marker][crate::model::DescribeTapesRequest::marker].
        pub fn set_marker<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.marker = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [marker][crate::model::DescribeTapesRequest::marker].
        pub fn set_or_clear_marker<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.marker = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::DescribeTapesRequest::limit].
        pub fn set_limit<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::DescribeTapesRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DescribeTapes {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::describe_upload_buffer][crate::client::StorageGateway::describe_upload_buffer] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DescribeUploadBuffer;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeUploadBuffer {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DescribeUploadBuffer(RequestBuilder<crate::model::DescribeUploadBufferRequest>);

    impl DescribeUploadBuffer {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DescribeUploadBufferRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DescribeUploadBufferResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                true,
            );
            (*self.0.stub)
                .describe_upload_buffer(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::DescribeUploadBufferRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::DescribeUploadBufferRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DescribeUploadBuffer {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::describe_vtl_devices][crate::client::StorageGateway::describe_vtl_devices] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DescribeVtlDevices;
    /// # tokio_test::block_on(async {
    /// use gax::paginator::ItemPaginator;
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeVtlDevices {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DescribeVtlDevices(RequestBuilder<crate::model::DescribeVtlDevicesRequest>);

    impl DescribeVtlDevices {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DescribeVtlDevicesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DescribeVtlDevicesResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                true,
            );
            (*self.0.stub)
                .describe_vtl_devices(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> impl gax::paginator::Paginator<crate::model::DescribeVtlDevicesResponse, gax::error::Error> {
            use std::clone::Clone;
            let token = self.0.request.marker.clone().unwrap_or_default();
            let execute = move |token: String| {
                let builder = self
                    .clone()
                    .set_or_clear_marker((!token.is_empty()).then_some(token));
                builder.send()
            };
            gax::paginator::internal::new_paginator(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> impl gax::paginator::ItemPaginator<crate::model::DescribeVtlDevicesResponse, gax::error::Error> {
            use gax::paginator::Paginator;
            self.by_page().items()
        }

        /// Sets the value of [gateway_arn][crate::model::DescribeVtlDevicesRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::DescribeVtlDevicesRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [vtl_device_arns][crate::model::DescribeVtlDevicesRequest::vtl_device_arns].
        pub fn set_vtl_device_arns<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.vtl_device_arns = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [marker][crate::model::DescribeVtlDevicesRequest::marker].
        pub fn set_marker<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.marker = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [marker][crate::model::DescribeVtlDevicesRequest::marker].
        pub fn set_or_clear_marker<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.marker = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::DescribeVtlDevicesRequest::limit].
        pub fn set_limit<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::DescribeVtlDevicesRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DescribeVtlDevices {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::describe_working_storage][crate::client::StorageGateway::describe_working_storage] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DescribeWorkingStorage;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeWorkingStorage {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DescribeWorkingStorage(RequestBuilder<crate::model::DescribeWorkingStorageRequest>);

    impl DescribeWorkingStorage {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DescribeWorkingStorageRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DescribeWorkingStorageResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                true,
            );
            (*self.0.stub)
                .describe_working_storage(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::DescribeWorkingStorageRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::DescribeWorkingStorageRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DescribeWorkingStorage {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::detach_volume][crate::client::StorageGateway::detach_volume] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DetachVolume;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DetachVolume {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DetachVolume(RequestBuilder<crate::model::DetachVolumeRequest>);

    impl DetachVolume {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DetachVolumeRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DetachVolumeResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .detach_volume(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [volume_arn][crate::model::DetachVolumeRequest::volume_arn].
        pub fn set_volume_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.volume_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [volume_arn][crate::model::DetachVolumeRequest::volume_arn].
        pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.volume_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [force_detach][crate::model::DetachVolumeRequest::force_detach].
        pub fn set_force_detach<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.force_detach = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [force_detach][crate::model::DetachVolumeRequest::force_detach].
        pub fn set_or_clear_force_detach<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.force_detach = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DetachVolume {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::disable_gateway][crate::client::StorageGateway::disable_gateway] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::DisableGateway;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DisableGateway {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DisableGateway(RequestBuilder<crate::model::DisableGatewayRequest>);

    impl DisableGateway {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DisableGatewayRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DisableGatewayResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .disable_gateway(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::DisableGatewayRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::DisableGatewayRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DisableGateway {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::join_domain][crate::client::StorageGateway::join_domain] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::JoinDomain;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> JoinDomain {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct JoinDomain(RequestBuilder<crate::model::JoinDomainRequest>);

    impl JoinDomain {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::JoinDomainRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::JoinDomainResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .join_domain(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::JoinDomainRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::JoinDomainRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [domain_name][crate::model::JoinDomainRequest::domain_name].
        pub fn set_domain_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.domain_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [domain_name][crate::model::JoinDomainRequest::domain_name].
        pub fn set_or_clear_domain_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.domain_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [organizational_unit][crate::model::JoinDomainRequest::organizational_unit].
        pub fn set_organizational_unit<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.organizational_unit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [organizational_unit][crate::model::JoinDomainRequest::organizational_unit].
        pub fn set_or_clear_organizational_unit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.organizational_unit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [domain_controllers][crate::model::JoinDomainRequest::domain_controllers].
        pub fn set_domain_controllers<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.domain_controllers = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [timeout_in_seconds][crate::model::JoinDomainRequest::timeout_in_seconds].
        pub fn set_timeout_in_seconds<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.timeout_in_seconds = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [timeout_in_seconds][crate::model::JoinDomainRequest::timeout_in_seconds].
        pub fn set_or_clear_timeout_in_seconds<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.timeout_in_seconds = v.map(|x| x.into());
            self
        }

        /// Sets the value of [user_name][crate::model::JoinDomainRequest::user_name].
        pub fn set_user_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.user_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [user_name][crate::model::JoinDomainRequest::user_name].
        pub fn set_or_clear_user_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.user_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [password][crate::model::JoinDomainRequest::password].
        pub fn set_password<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.password = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [password][crate::model::JoinDomainRequest::password].
        pub fn set_or_clear_password<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.password = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for JoinDomain {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::list_automatic_tape_creation_policies][crate::client::StorageGateway::list_automatic_tape_creation_policies] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::ListAutomaticTapeCreationPolicies;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListAutomaticTapeCreationPolicies {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListAutomaticTapeCreationPolicies(RequestBuilder<crate::model::ListAutomaticTapeCreationPoliciesRequest>);

    impl ListAutomaticTapeCreationPolicies {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListAutomaticTapeCreationPoliciesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListAutomaticTapeCreationPoliciesResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                true,
            );
            (*self.0.stub)
                .list_automatic_tape_creation_policies(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::ListAutomaticTapeCreationPoliciesRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::ListAutomaticTapeCreationPoliciesRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListAutomaticTapeCreationPolicies {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::list_file_shares][crate::client::StorageGateway::list_file_shares] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::ListFileShares;
    /// # tokio_test::block_on(async {
    /// use gax::paginator::ItemPaginator;
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListFileShares {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListFileShares(RequestBuilder<crate::model::ListFileSharesRequest>);

    impl ListFileShares {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListFileSharesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListFileSharesResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                true,
            );
            (*self.0.stub)
                .list_file_shares(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> impl gax::paginator::Paginator<crate::model::ListFileSharesResponse, gax::error::Error> {
            use std::clone::Clone;
            let token = self.0.request.marker.clone().unwrap_or_default();
            let execute = move |token: String| {
                let builder = self
                    .clone()
                    .set_or_clear_marker((!token.is_empty()).then_some(token));
                builder.send()
            };
            gax::paginator::internal::new_paginator(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> impl gax::paginator::ItemPaginator<crate::model::ListFileSharesResponse, gax::error::Error> {
            use gax::paginator::Paginator;
            self.by_page().items()
        }

        /// Sets the value of [gateway_arn][crate::model::ListFileSharesRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::ListFileSharesRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListFileSharesRequest::limit].
        pub fn set_limit<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListFileSharesRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [marker][crate::model::ListFileSharesRequest::marker].
        pub fn set_marker<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.marker = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [marker][crate::model::ListFileSharesRequest::marker].
        pub fn set_or_clear_marker<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.marker = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListFileShares {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::list_gateways][crate::client::StorageGateway::list_gateways] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::ListGateways;
    /// # tokio_test::block_on(async {
    /// use gax::paginator::ItemPaginator;
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListGateways {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListGateways(RequestBuilder<crate::model::ListGatewaysRequest>);

    impl ListGateways {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListGatewaysRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListGatewaysResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                true,
            );
            (*self.0.stub)
                .list_gateways(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> impl gax::paginator::Paginator<crate::model::ListGatewaysResponse, gax::error::Error> {
            use std::clone::Clone;
            let token = self.0.request.marker.clone().unwrap_or_default();
            let execute = move |token: String| {
                let builder = self
                    .clone()
                    .set_or_clear_marker((!token.is_empty()).then_some(token));
                builder.send()
            };
            gax::paginator::internal::new_paginator(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> impl gax::paginator::ItemPaginator<crate::model::ListGatewaysResponse, gax::error::Error> {
            use gax::paginator::Paginator;
            self.by_page().items()
        }

        /// Sets the value of [marker][crate::model::ListGatewaysRequest::marker].
        pub fn set_marker<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.marker = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [marker][crate::model::ListGatewaysRequest::marker].
        pub fn set_or_clear_marker<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.marker = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListGatewaysRequest::limit].
        pub fn set_limit<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListGatewaysRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListGateways {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::list_local_disks][crate::client::StorageGateway::list_local_disks] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::ListLocalDisks;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListLocalDisks {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListLocalDisks(RequestBuilder<crate::model::ListLocalDisksRequest>);

    impl ListLocalDisks {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLocalDisksRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListLocalDisksResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                true,
            );
            (*self.0.stub)
                .list_local_disks(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::ListLocalDisksRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::ListLocalDisksRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLocalDisks {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::list_tags_for_resource][crate::client::StorageGateway::list_tags_for_resource] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::ListTagsForResource;
    /// # tokio_test::block_on(async {
    /// use gax::paginator::ItemPaginator;
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListTagsForResource {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListTagsForResource(RequestBuilder<crate::model::ListTagsForResourceRequest>);

    impl ListTagsForResource {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListTagsForResourceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListTagsForResourceResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                true,
            );
            (*self.0.stub)
                .list_tags_for_resource(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> impl gax::paginator::Paginator<crate::model::ListTagsForResourceResponse, gax::error::Error> {
            use std::clone::Clone;
            let token = self.0.request.marker.clone().unwrap_or_default();
            let execute = move |token: String| {
                let builder = self
                    .clone()
                    .set_or_clear_marker((!token.is_empty()).then_some(token));
                builder.send()
            };
            gax::paginator::internal::new_paginator(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> impl gax::paginator::ItemPaginator<crate::model::ListTagsForResourceResponse, gax::error::Error> {
            use gax::paginator::Paginator;
            self.by_page().items()
        }

        /// Sets the value of [resource_arn][crate::model::ListTagsForResourceRequest::resource_arn].
        pub fn set_resource_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.resource_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [resource_arn][crate::model::ListTagsForResourceRequest::resource_arn].
        pub fn set_or_clear_resource_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.resource_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [marker][crate::model::ListTagsForResourceRequest::marker].
        pub fn set_marker<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.marker = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [marker][crate::model::ListTagsForResourceRequest::marker].
        pub fn set_or_clear_marker<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.marker = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListTagsForResourceRequest::limit].
        pub fn set_limit<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListTagsForResourceRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListTagsForResource {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::list_tapes][crate::client::StorageGateway::list_tapes] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::ListTapes;
    /// # tokio_test::block_on(async {
    /// use gax::paginator::ItemPaginator;
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListTapes {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListTapes(RequestBuilder<crate::model::ListTapesRequest>);

    impl ListTapes {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListTapesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListTapesResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                true,
            );
            (*self.0.stub)
                .list_tapes(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> impl gax::paginator::Paginator<crate::model::ListTapesResponse, gax::error::Error> {
            use std::clone::Clone;
            let token = self.0.request.marker.clone().unwrap_or_default();
            let execute = move |token: String| {
                let builder = self
                    .clone()
                    .set_or_clear_marker((!token.is_empty()).then_some(token));
                builder.send()
            };
            gax::paginator::internal::new_paginator(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> impl gax::paginator::ItemPaginator<crate::model::ListTapesResponse, gax::error::Error> {
            use gax::paginator::Paginator;
            self.by_page().items()
        }

        /// Sets the value of [tape_arns][crate::model::ListTapesRequest::tape_arns].
        pub fn set_tape_arns<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.tape_arns = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [marker][crate::model::ListTapesRequest::marker].
        pub fn set_marker<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.marker = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [marker][crate::model::ListTapesRequest::marker].
        pub fn set_or_clear_marker<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.marker = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListTapesRequest::limit].
        pub fn set_limit<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListTapesRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListTapes {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::list_volume_initiators][crate::client::StorageGateway::list_volume_initiators] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::ListVolumeInitiators;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListVolumeInitiators {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListVolumeInitiators(RequestBuilder<crate::model::ListVolumeInitiatorsRequest>);

    impl ListVolumeInitiators {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListVolumeInitiatorsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListVolumeInitiatorsResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                true,
            );
            (*self.0.stub)
                .list_volume_initiators(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [volume_arn][crate::model::ListVolumeInitiatorsRequest::volume_arn].
        pub fn set_volume_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.volume_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [volume_arn][crate::model::ListVolumeInitiatorsRequest::volume_arn].
        pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.volume_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListVolumeInitiators {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::list_volume_recovery_points][crate::client::StorageGateway::list_volume_recovery_points] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::ListVolumeRecoveryPoints;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListVolumeRecoveryPoints {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListVolumeRecoveryPoints(RequestBuilder<crate::model::ListVolumeRecoveryPointsRequest>);

    impl ListVolumeRecoveryPoints {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListVolumeRecoveryPointsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListVolumeRecoveryPointsResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                true,
            );
            (*self.0.stub)
                .list_volume_recovery_points(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::ListVolumeRecoveryPointsRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::ListVolumeRecoveryPointsRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListVolumeRecoveryPoints {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::list_volumes][crate::client::StorageGateway::list_volumes] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::ListVolumes;
    /// # tokio_test::block_on(async {
    /// use gax::paginator::ItemPaginator;
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListVolumes {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListVolumes(RequestBuilder<crate::model::ListVolumesRequest>);

    impl ListVolumes {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListVolumesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListVolumesResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                true,
            );
            (*self.0.stub)
                .list_volumes(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> impl gax::paginator::Paginator<crate::model::ListVolumesResponse, gax::error::Error> {
            use std::clone::Clone;
            let token = self.0.request.marker.clone().unwrap_or_default();
            let execute = move |token: String| {
                let builder = self
                    .clone()
                    .set_or_clear_marker((!token.is_empty()).then_some(token));
                builder.send()
            };
            gax::paginator::internal::new_paginator(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> impl gax::paginator::ItemPaginator<crate::model::ListVolumesResponse, gax::error::Error> {
            use gax::paginator::Paginator;
            self.by_page().items()
        }

        /// Sets the value of [gateway_arn][crate::model::ListVolumesRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::ListVolumesRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [marker][crate::model::ListVolumesRequest::marker].
        pub fn set_marker<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.marker = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [marker][crate::model::ListVolumesRequest::marker].
        pub fn set_or_clear_marker<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.marker = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListVolumesRequest::limit].
        pub fn set_limit<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListVolumesRequest::limit].
        pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.limit = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListVolumes {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::notify_when_uploaded][crate::client::StorageGateway::notify_when_uploaded] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::NotifyWhenUploaded;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> NotifyWhenUploaded {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct NotifyWhenUploaded(RequestBuilder<crate::model::NotifyWhenUploadedRequest>);

    impl NotifyWhenUploaded {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::NotifyWhenUploadedRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::NotifyWhenUploadedResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .notify_when_uploaded(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [file_share_arn][crate::model::NotifyWhenUploadedRequest::file_share_arn].
        pub fn set_file_share_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.file_share_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [file_share_arn][crate::model::NotifyWhenUploadedRequest::file_share_arn].
        pub fn set_or_clear_file_share_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.file_share_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for NotifyWhenUploaded {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::refresh_cache][crate::client::StorageGateway::refresh_cache] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::RefreshCache;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> RefreshCache {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct RefreshCache(RequestBuilder<crate::model::RefreshCacheRequest>);

    impl RefreshCache {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RefreshCacheRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::RefreshCacheResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .refresh_cache(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [file_share_arn][crate::model::RefreshCacheRequest::file_share_arn].
        pub fn set_file_share_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.file_share_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [file_share_arn][crate::model::RefreshCacheRequest::file_share_arn].
        pub fn set_or_clear_file_share_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.file_share_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [folder_list][crate::model::RefreshCacheRequest::folder_list].
        pub fn set_folder_list<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.folder_list = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [recursive][crate::model::RefreshCacheRequest::recursive].
        pub fn set_recursive<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.recursive = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [recursive][crate::model::RefreshCacheRequest::recursive].
        pub fn set_or_clear_recursive<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.recursive = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for RefreshCache {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::remove_tags_from_resource][crate::client::StorageGateway::remove_tags_from_resource] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::RemoveTagsFromResource;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> RemoveTagsFromResource {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct RemoveTagsFromResource(RequestBuilder<crate::model::RemoveTagsFromResourceRequest>);

    impl RemoveTagsFromResource {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RemoveTagsFromResourceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::RemoveTagsFromResourceResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .remove_tags_from_resource(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [resource_arn][crate::model::RemoveTagsFromResourceRequest::resource_arn].
        pub fn set_resource_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.resource_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [resource_arn][crate::model::RemoveTagsFromResourceRequest::resource_arn].
        pub fn set_or_clear_resource_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.resource_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [tag_keys][crate::model::RemoveTagsFromResourceRequest::tag_keys].
        pub fn set_tag_keys<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.tag_keys = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for RemoveTagsFromResource {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::reset_cache][crate::client::StorageGateway::reset_cache] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::ResetCache;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ResetCache {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ResetCache(RequestBuilder<crate::model::ResetCacheRequest>);

    impl ResetCache {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ResetCacheRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ResetCacheResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .reset_cache(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::ResetCacheRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::ResetCacheRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ResetCache {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::retrieve_tape_archive][crate::client::StorageGateway::retrieve_tape_archive] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::RetrieveTapeArchive;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> RetrieveTapeArchive {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct RetrieveTapeArchive(RequestBuilder<crate::model::RetrieveTapeArchiveRequest>);

    impl RetrieveTapeArchive {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RetrieveTapeArchiveRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::RetrieveTapeArchiveResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .retrieve_tape_archive(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [tape_arn][crate::model::RetrieveTapeArchiveRequest::tape_arn].
        pub fn set_tape_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.tape_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [tape_arn][crate::model::RetrieveTapeArchiveRequest::tape_arn].
        pub fn set_or_clear_tape_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.tape_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [gateway_arn][crate::model::RetrieveTapeArchiveRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::RetrieveTapeArchiveRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for RetrieveTapeArchive {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::retrieve_tape_recovery_point][crate::client::StorageGateway::retrieve_tape_recovery_point] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::RetrieveTapeRecoveryPoint;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> RetrieveTapeRecoveryPoint {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct RetrieveTapeRecoveryPoint(RequestBuilder<crate::model::RetrieveTapeRecoveryPointRequest>);

    impl RetrieveTapeRecoveryPoint {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RetrieveTapeRecoveryPointRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::RetrieveTapeRecoveryPointResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .retrieve_tape_recovery_point(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [tape_arn][crate::model::RetrieveTapeRecoveryPointRequest::tape_arn].
        pub fn set_tape_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.tape_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [tape_arn][crate::model::RetrieveTapeRecoveryPointRequest::tape_arn].
        pub fn set_or_clear_tape_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.tape_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [gateway_arn][crate::model::RetrieveTapeRecoveryPointRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::RetrieveTapeRecoveryPointRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for RetrieveTapeRecoveryPoint {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::set_local_console_password][crate::client::StorageGateway::set_local_console_password] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::SetLocalConsolePassword;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> SetLocalConsolePassword {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct SetLocalConsolePassword(RequestBuilder<crate::model::SetLocalConsolePasswordRequest>);

    impl SetLocalConsolePassword {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::SetLocalConsolePasswordRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::SetLocalConsolePasswordResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .set_local_console_password(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::SetLocalConsolePasswordRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::SetLocalConsolePasswordRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [local_console_password][crate::model::SetLocalConsolePasswordRequest::local_console_password].
        pub fn set_local_console_password<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.local_console_password = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [local_console_password][crate::model::SetLocalConsolePasswordRequest::local_console_password].
        pub fn set_or_clear_local_console_password<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.local_console_password = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for SetLocalConsolePassword {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::set_smb_guest_password][crate::client::StorageGateway::set_smb_guest_password] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::SetSmbGuestPassword;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> SetSmbGuestPassword {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct SetSmbGuestPassword(RequestBuilder<crate::model::SetSmbGuestPasswordRequest>);

    impl SetSmbGuestPassword {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::SetSmbGuestPasswordRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::SetSmbGuestPasswordResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .set_smb_guest_password(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::SetSmbGuestPasswordRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::SetSmbGuestPasswordRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [password][crate::model::SetSmbGuestPasswordRequest::password].
        pub fn set_password<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.password = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [password][crate::model::SetSmbGuestPasswordRequest::password].
        pub fn set_or_clear_password<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.password = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for SetSmbGuestPassword {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::shutdown_gateway][crate::client::StorageGateway::shutdown_gateway] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::ShutdownGateway;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ShutdownGateway {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ShutdownGateway(RequestBuilder<crate::model::ShutdownGatewayRequest>);

    impl ShutdownGateway {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ShutdownGatewayRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ShutdownGatewayResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .shutdown_gateway(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::ShutdownGatewayRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::ShutdownGatewayRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ShutdownGateway {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::start_availability_monitor_test][crate::client::StorageGateway::start_availability_monitor_test] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::StartAvailabilityMonitorTest;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> StartAvailabilityMonitorTest {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct StartAvailabilityMonitorTest(RequestBuilder<crate::model::StartAvailabilityMonitorTestRequest>);

    impl StartAvailabilityMonitorTest {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::StartAvailabilityMonitorTestRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::StartAvailabilityMonitorTestResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .start_availability_monitor_test(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::StartAvailabilityMonitorTestRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::StartAvailabilityMonitorTestRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for StartAvailabilityMonitorTest {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::start_gateway][crate::client::StorageGateway::start_gateway] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::StartGateway;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> StartGateway {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct StartGateway(RequestBuilder<crate::model::StartGatewayRequest>);

    impl StartGateway {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::StartGatewayRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::StartGatewayResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .start_gateway(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::StartGatewayRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::StartGatewayRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for StartGateway {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::update_automatic_tape_creation_policy][crate::client::StorageGateway::update_automatic_tape_creation_policy] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::UpdateAutomaticTapeCreationPolicy;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateAutomaticTapeCreationPolicy {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateAutomaticTapeCreationPolicy(RequestBuilder<crate::model::UpdateAutomaticTapeCreationPolicyRequest>);

    impl UpdateAutomaticTapeCreationPolicy {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateAutomaticTapeCreationPolicyRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::UpdateAutomaticTapeCreationPolicyResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .update_automatic_tape_creation_policy(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [automatic_tape_creation_rules][crate::model::UpdateAutomaticTapeCreationPolicyRequest::automatic_tape_creation_rules].
        pub fn set_automatic_tape_creation_rules<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::AutomaticTapeCreationRule>,
        {
            use std::iter::Iterator;
            self.0.request.automatic_tape_creation_rules = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [gateway_arn][crate::model::UpdateAutomaticTapeCreationPolicyRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::UpdateAutomaticTapeCreationPolicyRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateAutomaticTapeCreationPolicy {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::update_bandwidth_rate_limit][crate::client::StorageGateway::update_bandwidth_rate_limit] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::UpdateBandwidthRateLimit;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateBandwidthRateLimit {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateBandwidthRateLimit(RequestBuilder<crate::model::UpdateBandwidthRateLimitRequest>);

    impl UpdateBandwidthRateLimit {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateBandwidthRateLimitRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::UpdateBandwidthRateLimitResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .update_bandwidth_rate_limit(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::UpdateBandwidthRateLimitRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::UpdateBandwidthRateLimitRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [average_upload_rate_limit_in_bits_per_sec][crate::model::UpdateBandwidthRateLimitRequest::average_upload_rate_limit_in_bits_per_sec].
        pub fn set_average_upload_rate_limit_in_bits_per_sec<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.average_upload_rate_limit_in_bits_per_sec = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [average_upload_rate_limit_in_bits_per_sec][crate::model::UpdateBandwidthRateLimitRequest::average_upload_rate_limit_in_bits_per_sec].
        pub fn set_or_clear_average_upload_rate_limit_in_bits_per_sec<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.average_upload_rate_limit_in_bits_per_sec = v.map(|x| x.into());
            self
        }

        /// Sets the value of [average_download_rate_limit_in_bits_per_sec][crate::model::UpdateBandwidthRateLimitRequest::average_download_rate_limit_in_bits_per_sec].
        pub fn set_average_download_rate_limit_in_bits_per_sec<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.average_download_rate_limit_in_bits_per_sec = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [average_download_rate_limit_in_bits_per_sec][crate::model::UpdateBandwidthRateLimitRequest::average_download_rate_limit_in_bits_per_sec].
        pub fn set_or_clear_average_download_rate_limit_in_bits_per_sec<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i64>,
        {
            self.0.request.average_download_rate_limit_in_bits_per_sec = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateBandwidthRateLimit {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::update_chap_credentials][crate::client::StorageGateway::update_chap_credentials] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::UpdateChapCredentials;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateChapCredentials {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateChapCredentials(RequestBuilder<crate::model::UpdateChapCredentialsRequest>);

    impl UpdateChapCredentials {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateChapCredentialsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::UpdateChapCredentialsResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .update_chap_credentials(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [target_arn][crate::model::UpdateChapCredentialsRequest::target_arn].
        pub fn set_target_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.target_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [target_arn][crate::model::UpdateChapCredentialsRequest::target_arn].
        pub fn set_or_clear_target_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.target_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [secret_to_authenticate_initiator][crate::model::UpdateChapCredentialsRequest::secret_to_authenticate_initiator].
        pub fn set_secret_to_authenticate_initiator<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.secret_to_authenticate_initiator = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [secret_to_authenticate_initiator][crate::model::UpdateChapCredentialsRequest::secret_to_authenticate_initiator].
        pub fn set_or_clear_secret_to_authenticate_initiator<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.secret_to_authenticate_initiator = v.map(|x| x.into());
            self
        }

        /// Sets the value of [initiator_name][crate::model::UpdateChapCredentialsRequest::initiator_name].
        pub fn set_initiator_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.initiator_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [initiator_name][crate::model::UpdateChapCredentialsRequest::initiator_name].
        pub fn set_or_clear_initiator_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.initiator_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [secret_to_authenticate_target][crate::model::UpdateChapCredentialsRequest::secret_to_authenticate_target].
        pub fn set_secret_to_authenticate_target<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.secret_to_authenticate_target = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [secret_to_authenticate_target][crate::model::UpdateChapCredentialsRequest::secret_to_authenticate_target].
        pub fn set_or_clear_secret_to_authenticate_target<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.secret_to_authenticate_target = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateChapCredentials {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::update_gateway_information][crate::client::StorageGateway::update_gateway_information] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::UpdateGatewayInformation;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateGatewayInformation {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateGatewayInformation(RequestBuilder<crate::model::UpdateGatewayInformationRequest>);

    impl UpdateGatewayInformation {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateGatewayInformationRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::UpdateGatewayInformationResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .update_gateway_information(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::UpdateGatewayInformationRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::UpdateGatewayInformationRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [gateway_name][crate::model::UpdateGatewayInformationRequest::gateway_name].
        pub fn set_gateway_name<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_name = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_name][crate::model::UpdateGatewayInformationRequest::gateway_name].
        pub fn set_or_clear_gateway_name<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [gateway_timezone][crate::model::UpdateGatewayInformationRequest::gateway_timezone].
        pub fn set_gateway_timezone<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_timezone = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_timezone][crate::model::UpdateGatewayInformationRequest::gateway_timezone].
        pub fn set_or_clear_gateway_timezone<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_timezone = v.map(|x| x.into());
            self
        }

        /// Sets the value of [cloud_watch_log_group_arn][crate::model::UpdateGatewayInformationRequest::cloud_watch_log_group_arn].
        pub fn set_cloud_watch_log_group_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.cloud_watch_log_group_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [cloud_watch_log_group_arn][crate::model::UpdateGatewayInformationRequest::cloud_watch_log_group_arn].
        pub fn set_or_clear_cloud_watch_log_group_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.cloud_watch_log_group_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateGatewayInformation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::update_gateway_software_now][crate::client::StorageGateway::update_gateway_software_now] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::UpdateGatewaySoftwareNow;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateGatewaySoftwareNow {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateGatewaySoftwareNow(RequestBuilder<crate::model::UpdateGatewaySoftwareNowRequest>);

    impl UpdateGatewaySoftwareNow {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateGatewaySoftwareNowRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::UpdateGatewaySoftwareNowResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .update_gateway_software_now(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::UpdateGatewaySoftwareNowRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::UpdateGatewaySoftwareNowRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateGatewaySoftwareNow {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::update_maintenance_start_time][crate::client::StorageGateway::update_maintenance_start_time] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::UpdateMaintenanceStartTime;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateMaintenanceStartTime {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateMaintenanceStartTime(RequestBuilder<crate::model::UpdateMaintenanceStartTimeRequest>);

    impl UpdateMaintenanceStartTime {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateMaintenanceStartTimeRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::UpdateMaintenanceStartTimeResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .update_maintenance_start_time(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::UpdateMaintenanceStartTimeRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::UpdateMaintenanceStartTimeRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [hour_of_day][crate::model::UpdateMaintenanceStartTimeRequest::hour_of_day].
        pub fn set_hour_of_day<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.hour_of_day = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [hour_of_day][crate::model::UpdateMaintenanceStartTimeRequest::hour_of_day].
        pub fn set_or_clear_hour_of_day<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.hour_of_day = v.map(|x| x.into());
            self
        }

        /// Sets the value of [minute_of_hour][crate::model::UpdateMaintenanceStartTimeRequest::minute_of_hour].
        pub fn set_minute_of_hour<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.minute_of_hour = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [minute_of_hour][crate::model::UpdateMaintenanceStartTimeRequest::minute_of_hour].
        pub fn set_or_clear_minute_of_hour<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.minute_of_hour = v.map(|x| x.into());
            self
        }

        /// Sets the value of [day_of_week][crate::model::UpdateMaintenanceStartTimeRequest::day_of_week].
        pub fn set_day_of_week<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.day_of_week = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [day_of_week][crate::model::UpdateMaintenanceStartTimeRequest::day_of_week].
        pub fn set_or_clear_day_of_week<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.day_of_week = v.map(|x| x.into());
            self
        }

        /// Sets the value of [day_of_month][crate::model::UpdateMaintenanceStartTimeRequest::day_of_month].
        pub fn set_day_of_month<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.day_of_month = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [day_of_month][crate::model::UpdateMaintenanceStartTimeRequest::day_of_month].
        pub fn set_or_clear_day_of_month<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.day_of_month = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateMaintenanceStartTime {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::update_nfs_file_share][crate::client::StorageGateway::update_nfs_file_share] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::UpdateNfsFileShare;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateNfsFileShare {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateNfsFileShare(RequestBuilder<crate::model::UpdateNfsFileShareRequest>);

    impl UpdateNfsFileShare {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateNfsFileShareRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::UpdateNfsFileShareResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .update_nfs_file_share(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [file_share_arn][crate::model::UpdateNfsFileShareRequest::file_share_arn].
        pub fn set_file_share_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.file_share_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [file_share_arn][crate::model::UpdateNfsFileShareRequest::file_share_arn].
        pub fn set_or_clear_file_share_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.file_share_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [kms_encrypted][crate::model::UpdateNfsFileShareRequest::kms_encrypted].
        pub fn set_kms_encrypted<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.kms_encrypted = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [kms_encrypted][crate::model::UpdateNfsFileShareRequest::kms_encrypted].
        pub fn set_or_clear_kms_encrypted<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.kms_encrypted = v.map(|x| x.into());
            self
        }

        /// Sets the value of [kms_key][crate::model::UpdateNfsFileShareRequest::kms_key].
        pub fn set_kms_key<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.kms_key = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [kms_key][crate::model::UpdateNfsFileShareRequest::kms_key].
        pub fn set_or_clear_kms_key<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.kms_key = v.map(|x| x.into());
            self
        }

        /// Sets the value of [nfs_file_share_defaults][crate::model::UpdateNfsFileShareRequest::nfs_file_share_defaults].
        pub fn set_nfs_file_share_defaults<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::NfsFileShareDefaults>,
        {
            self.0.request.nfs_file_share_defaults = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [nfs_file_share_defaults][crate::model::UpdateNfsFileShareRequest::nfs_file_share_defaults].
        pub fn set_or_clear_nfs_file_share_defaults<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::NfsFileShareDefaults>,
        {
            self.0.request.nfs_file_share_defaults = v.map(|x| x.into());
            self
        }

        /// Sets the value of [default_storage_class][crate::model::UpdateNfsFileShareRequest::default_storage_class].
        pub fn set_default_storage_class<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.default_storage_class = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [default_storage_class][crate::model::UpdateNfsFileShareRequest::default_storage_class].
        pub fn set_or_clear_default_storage_class<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.default_storage_class = v.map(|x| x.into());
            self
        }

        /// Sets the value of [object_acl][crate::model::UpdateNfsFileShareRequest::object_acl].
        pub fn set_object_acl<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ObjectAcl>,
        {
            self.0.request.object_acl = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [object_acl][crate::model::UpdateNfsFileShareRequest::object_acl].
        pub fn set_or_clear_object_acl<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::ObjectAcl>,
        {
            self.0.request.object_acl = v.map(|x| x.into());
            self
        }

        /// Sets the value of [client_list][crate::model::UpdateNfsFileShareRequest::client_list].
        pub fn set_client_list<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.client_list = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [squash][crate::model::UpdateNfsFileShareRequest::squash].
        pub fn set_squash<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.squash = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [squash][crate::model::UpdateNfsFileShareRequest::squash].
        pub fn set_or_clear_squash<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.squash = v.map(|x| x.into());
            self
        }

        /// Sets the value of [read_only][crate::model::UpdateNfsFileShareRequest::read_only].
        pub fn set_read_only<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.read_only = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [read_only][crate::model::UpdateNfsFileShareRequest::read_only].
        pub fn set_or_clear_read_only<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.read_only = v.map(|x| x.into());
            self
        }

        /// Sets the value of [guess_mime_type_enabled][crate::model::UpdateNfsFileShareRequest::guess_mime_type_enabled].
        pub fn set_guess_mime_type_enabled<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.guess_mime_type_enabled = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [guess_mime_type_enabled][crate::model::UpdateNfsFileShareRequest::guess_mime_type_enabled].
        pub fn set_or_clear_guess_mime_type_enabled<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.guess_mime_type_enabled = v.map(|x| x.into());
            self
        }

        /// Sets the value of [requester_pays][crate::model::UpdateNfsFileShareRequest::requester_pays].
        pub fn set_requester_pays<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.requester_pays = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [requester_pays][crate::model::UpdateNfsFileShareRequest::requester_pays].
        pub fn set_or_clear_requester_pays<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.requester_pays = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateNfsFileShare {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::update_smb_file_share][crate::client::StorageGateway::update_smb_file_share] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::UpdateSmbFileShare;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateSmbFileShare {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateSmbFileShare(RequestBuilder<crate::model::UpdateSmbFileShareRequest>);

    impl UpdateSmbFileShare {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateSmbFileShareRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::UpdateSmbFileShareResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .update_smb_file_share(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [file_share_arn][crate::model::UpdateSmbFileShareRequest::file_share_arn].
        pub fn set_file_share_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.file_share_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [file_share_arn][crate::model::UpdateSmbFileShareRequest::file_share_arn].
        pub fn set_or_clear_file_share_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.file_share_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [kms_encrypted][crate::model::UpdateSmbFileShareRequest::kms_encrypted].
        pub fn set_kms_encrypted<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.kms_encrypted = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [kms_encrypted][crate::model::UpdateSmbFileShareRequest::kms_encrypted].
        pub fn set_or_clear_kms_encrypted<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.kms_encrypted = v.map(|x| x.into());
            self
        }

        /// Sets the value of [kms_key][crate::model::UpdateSmbFileShareRequest::kms_key].
        pub fn set_kms_key<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.kms_key = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [kms_key][crate::model::UpdateSmbFileShareRequest::kms_key].
        pub fn set_or_clear_kms_key<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.kms_key = v.map(|x| x.into());
            self
        }

        /// Sets the value of [default_storage_class][crate::model::UpdateSmbFileShareRequest::default_storage_class].
        pub fn set_default_storage_class<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.default_storage_class = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [default_storage_class][crate::model::UpdateSmbFileShareRequest::default_storage_class].
        pub fn set_or_clear_default_storage_class<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.default_storage_class = v.map(|x| x.into());
            self
        }

        /// Sets the value of [object_acl][crate::model::UpdateSmbFileShareRequest::object_acl].
        pub fn set_object_acl<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::ObjectAcl>,
        {
            self.0.request.object_acl = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [object_acl][crate::model::UpdateSmbFileShareRequest::object_acl].
        pub fn set_or_clear_object_acl<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::ObjectAcl>,
        {
            self.0.request.object_acl = v.map(|x| x.into());
            self
        }

        /// Sets the value of [read_only][crate::model::UpdateSmbFileShareRequest::read_only].
        pub fn set_read_only<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.read_only = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [read_only][crate::model::UpdateSmbFileShareRequest::read_only].
        pub fn set_or_clear_read_only<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.read_only = v.map(|x| x.into());
            self
        }

        /// Sets the value of [guess_mime_type_enabled][crate::model::UpdateSmbFileShareRequest::guess_mime_type_enabled].
        pub fn set_guess_mime_type_enabled<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.guess_mime_type_enabled = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [guess_mime_type_enabled][crate::model::UpdateSmbFileShareRequest::guess_mime_type_enabled].
        pub fn set_or_clear_guess_mime_type_enabled<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.guess_mime_type_enabled = v.map(|x| x.into());
            self
        }

        /// Sets the value of [requester_pays][crate::model::UpdateSmbFileShareRequest::requester_pays].
        pub fn set_requester_pays<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.requester_pays = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [requester_pays][crate::model::UpdateSmbFileShareRequest::requester_pays].
        pub fn set_or_clear_requester_pays<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.requester_pays = v.map(|x| x.into());
            self
        }

        /// Sets the value of [smb_acl_enabled][crate::model::UpdateSmbFileShareRequest::smb_acl_enabled].
        pub fn set_smb_acl_enabled<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.smb_acl_enabled = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [smb_acl_enabled][crate::model::UpdateSmbFileShareRequest::smb_acl_enabled].
        pub fn set_or_clear_smb_acl_enabled<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<bool>,
        {
            self.0.request.smb_acl_enabled = v.map(|x| x.into());
            self
        }

        /// Sets the value of [admin_user_list][crate::model::UpdateSmbFileShareRequest::admin_user_list].
        pub fn set_admin_user_list<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.admin_user_list = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [valid_user_list][crate::model::UpdateSmbFileShareRequest::valid_user_list].
        pub fn set_valid_user_list<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.valid_user_list = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [invalid_user_list][crate::model::UpdateSmbFileShareRequest::invalid_user_list].
        pub fn set_invalid_user_list<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.invalid_user_list = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [audit_destination_arn][crate::model::UpdateSmbFileShareRequest::audit_destination_arn].
        pub fn set_audit_destination_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.audit_destination_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [audit_destination_arn][crate::model::UpdateSmbFileShareRequest::audit_destination_arn].
        pub fn set_or_clear_audit_destination_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.audit_destination_arn = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateSmbFileShare {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::update_smb_security_strategy][crate::client::StorageGateway::update_smb_security_strategy] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::UpdateSmbSecurityStrategy;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateSmbSecurityStrategy {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateSmbSecurityStrategy(RequestBuilder<crate::model::UpdateSmbSecurityStrategyRequest>);

    impl UpdateSmbSecurityStrategy {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateSmbSecurityStrategyRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::UpdateSmbSecurityStrategyResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .update_smb_security_strategy(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [gateway_arn][crate::model::UpdateSmbSecurityStrategyRequest::gateway_arn].
        pub fn set_gateway_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [gateway_arn][crate::model::UpdateSmbSecurityStrategyRequest::gateway_arn].
        pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.gateway_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [smb_security_strategy][crate::model::UpdateSmbSecurityStrategyRequest::smb_security_strategy].
        pub fn set_smb_security_strategy<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::SmbSecurityStrategy>,
        {
            self.0.request.smb_security_strategy = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [smb_security_strategy][crate::model::UpdateSmbSecurityStrategyRequest::smb_security_strategy].
        pub fn set_or_clear_smb_security_strategy<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::SmbSecurityStrategy>,
        {
            self.0.request.smb_security_strategy = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateSmbSecurityStrategy {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::update_snapshot_schedule][crate::client::StorageGateway::update_snapshot_schedule] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::UpdateSnapshotSchedule;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateSnapshotSchedule {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateSnapshotSchedule(RequestBuilder<crate::model::UpdateSnapshotScheduleRequest>);

    impl UpdateSnapshotSchedule {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateSnapshotScheduleRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::UpdateSnapshotScheduleResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .update_snapshot_schedule(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [volume_arn][crate::model::UpdateSnapshotScheduleRequest::volume_arn].
        pub fn set_volume_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.volume_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [volume_arn][crate::model::UpdateSnapshotScheduleRequest::volume_arn].
        pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.volume_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [start_at][crate::model::UpdateSnapshotScheduleRequest::start_at].
        pub fn set_start_at<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.start_at = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [start_at][crate::model::UpdateSnapshotScheduleRequest::start_at].
        pub fn set_or_clear_start_at<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.start_at = v.map(|x| x.into());
            self
        }

        /// Sets the value of [recurrence_in_hours][crate::model::UpdateSnapshotScheduleRequest::recurrence_in_hours].
        pub fn set_recurrence_in_hours<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.recurrence_in_hours = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [recurrence_in_hours][crate::model::UpdateSnapshotScheduleRequest::recurrence_in_hours].
        pub fn set_or_clear_recurrence_in_hours<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<i32>,
        {
            self.0.request.recurrence_in_hours = v.map(|x| x.into());
            self
        }

        /// Sets the value of [description][crate::model::UpdateSnapshotScheduleRequest::description].
        pub fn set_description<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.description = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [description][crate::model::UpdateSnapshotScheduleRequest::description].
        pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.description = v.map(|x| x.into());
            self
        }

        /// Sets the value of [tags][crate::model::UpdateSnapshotScheduleRequest::tags].
        pub fn set_tags<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::Tag>,
        {
            use std::iter::Iterator;
            self.0.request.tags = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateSnapshotSchedule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [StorageGateway::update_vtl_device_type][crate::client::StorageGateway::update_vtl_device_type] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::builder;
    /// use builder::storage_gateway::UpdateVtlDeviceType;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> UpdateVtlDeviceType {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateVtlDeviceType(RequestBuilder<crate::model::UpdateVtlDeviceTypeRequest>);

    impl UpdateVtlDeviceType {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::StorageGateway>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateVtlDeviceTypeRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::UpdateVtlDeviceTypeResponse> {
            let options = gax::options::internal::set_default_idempotency(
                self.0.options,
                false,
            );
            (*self.0.stub)
                .update_vtl_device_type(self.0.request, options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [vtl_device_arn][crate::model::UpdateVtlDeviceTypeRequest::vtl_device_arn].
        pub fn set_vtl_device_arn<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.vtl_device_arn = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [vtl_device_arn][crate::model::UpdateVtlDeviceTypeRequest::vtl_device_arn].
        pub fn set_or_clear_vtl_device_arn<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.vtl_device_arn = v.map(|x| x.into());
            self
        }

        /// Sets the value of [device_type][crate::model::UpdateVtlDeviceTypeRequest::device_type].
        pub fn set_device_type<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.device_type = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [device_type][crate::model::UpdateVtlDeviceTypeRequest::device_type].
        pub fn set_or_clear_device_type<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<std::string::String>,
        {
            self.0.request.device_type = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateVtlDeviceType {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
