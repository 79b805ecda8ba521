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

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

//! The messages exchanged with the Storage Gateway API.
//!
//! Every operation has a request and a response message. All fields are
//! optional, an unset field is omitted from the wire and from the `Debug`
//! output. The documented length and range constraints are enforced by the
//! service, not by these types.

mod debug;

/// The request message for [StorageGateway::activate_gateway][crate::client::StorageGateway::activate_gateway].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ActivateGatewayRequest {
    /// Your gateway activation key, obtained from the gateway's activation redirect.
    ///
    /// Length: 1 to 50 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub activation_key: std::option::Option<std::string::String>,

    /// The name you configured for the gateway.
    ///
    /// Length: 2 to 255 characters, matching `^[ -\.0-\[\]-~]*[!-\.0-\[\]-~][ -\.0-\[\]-~]*$`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_name: std::option::Option<std::string::String>,

    /// A value that indicates the time zone of the gateway, for example `GMT-4:00`.
    ///
    /// Length: 3 to 10 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_timezone: std::option::Option<std::string::String>,

    /// The region where snapshots, tapes and other data are stored, for example `us-east-2`.
    ///
    /// Length: 1 to 25 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_region: std::option::Option<std::string::String>,

    /// The type of the gateway, for example `STORED`, `CACHED`, `VTL` or `FILE_S3`.
    ///
    /// Length: 2 to 20 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_type: std::option::Option<std::string::String>,

    /// The tape drive emulated by a tape gateway, for example `IBM-ULT3580-TD5`.
    ///
    /// Length: 2 to 50 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tape_drive_type: std::option::Option<std::string::String>,

    /// The medium changer emulated by a tape gateway, for example `AWS-Gateway-VTL`.
    ///
    /// Length: 2 to 50 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub medium_changer_type: std::option::Option<std::string::String>,

    /// A list of up to 50 tags assigned to the resource.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tags: std::vec::Vec<crate::model::Tag>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ActivateGatewayRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [activation_key][crate::model::ActivateGatewayRequest::activation_key].
    pub fn set_activation_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.activation_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [activation_key][crate::model::ActivateGatewayRequest::activation_key].
    pub fn set_or_clear_activation_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.activation_key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_name][crate::model::ActivateGatewayRequest::gateway_name].
    pub fn set_gateway_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_name][crate::model::ActivateGatewayRequest::gateway_name].
    pub fn set_or_clear_gateway_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_timezone][crate::model::ActivateGatewayRequest::gateway_timezone].
    pub fn set_gateway_timezone<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_timezone = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_timezone][crate::model::ActivateGatewayRequest::gateway_timezone].
    pub fn set_or_clear_gateway_timezone<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_timezone = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_region][crate::model::ActivateGatewayRequest::gateway_region].
    pub fn set_gateway_region<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_region][crate::model::ActivateGatewayRequest::gateway_region].
    pub fn set_or_clear_gateway_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_type][crate::model::ActivateGatewayRequest::gateway_type].
    pub fn set_gateway_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_type][crate::model::ActivateGatewayRequest::gateway_type].
    pub fn set_or_clear_gateway_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tape_drive_type][crate::model::ActivateGatewayRequest::tape_drive_type].
    pub fn set_tape_drive_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_drive_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_drive_type][crate::model::ActivateGatewayRequest::tape_drive_type].
    pub fn set_or_clear_tape_drive_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_drive_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [medium_changer_type][crate::model::ActivateGatewayRequest::medium_changer_type].
    pub fn set_medium_changer_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.medium_changer_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [medium_changer_type][crate::model::ActivateGatewayRequest::medium_changer_type].
    pub fn set_or_clear_medium_changer_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.medium_changer_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tags][crate::model::ActivateGatewayRequest::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        use std::iter::Iterator;
        self.tags = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The response message for [StorageGateway::activate_gateway][crate::client::StorageGateway::activate_gateway].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ActivateGatewayResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ActivateGatewayResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::ActivateGatewayResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::ActivateGatewayResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::add_cache][crate::client::StorageGateway::add_cache].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct AddCacheRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The local disk identifiers, as returned by `ListLocalDisks`.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub disk_ids: std::vec::Vec<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl AddCacheRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::AddCacheRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::AddCacheRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disk_ids][crate::model::AddCacheRequest::disk_ids].
    pub fn set_disk_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.disk_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The response message for [StorageGateway::add_cache][crate::client::StorageGateway::add_cache].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct AddCacheResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl AddCacheResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::AddCacheResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::AddCacheResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::add_tags_to_resource][crate::client::StorageGateway::add_tags_to_resource].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct AddTagsToResourceRequest {
    /// The Amazon Resource Name (ARN) of the tagged resource.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "ResourceARN", skip_serializing_if = "std::option::Option::is_none")]
    pub resource_arn: std::option::Option<std::string::String>,

    /// A list of up to 50 tags assigned to the resource.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tags: std::vec::Vec<crate::model::Tag>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl AddTagsToResourceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resource_arn][crate::model::AddTagsToResourceRequest::resource_arn].
    pub fn set_resource_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_arn][crate::model::AddTagsToResourceRequest::resource_arn].
    pub fn set_or_clear_resource_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tags][crate::model::AddTagsToResourceRequest::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        use std::iter::Iterator;
        self.tags = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The response message for [StorageGateway::add_tags_to_resource][crate::client::StorageGateway::add_tags_to_resource].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct AddTagsToResourceResponse {
    /// The Amazon Resource Name (ARN) of the tagged resource.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "ResourceARN", skip_serializing_if = "std::option::Option::is_none")]
    pub resource_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl AddTagsToResourceResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resource_arn][crate::model::AddTagsToResourceResponse::resource_arn].
    pub fn set_resource_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_arn][crate::model::AddTagsToResourceResponse::resource_arn].
    pub fn set_or_clear_resource_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::add_upload_buffer][crate::client::StorageGateway::add_upload_buffer].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct AddUploadBufferRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The local disk identifiers, as returned by `ListLocalDisks`.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub disk_ids: std::vec::Vec<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl AddUploadBufferRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::AddUploadBufferRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::AddUploadBufferRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disk_ids][crate::model::AddUploadBufferRequest::disk_ids].
    pub fn set_disk_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.disk_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The response message for [StorageGateway::add_upload_buffer][crate::client::StorageGateway::add_upload_buffer].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct AddUploadBufferResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl AddUploadBufferResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::AddUploadBufferResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::AddUploadBufferResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::add_working_storage][crate::client::StorageGateway::add_working_storage].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct AddWorkingStorageRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The local disk identifiers, as returned by `ListLocalDisks`.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub disk_ids: std::vec::Vec<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl AddWorkingStorageRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::AddWorkingStorageRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::AddWorkingStorageRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disk_ids][crate::model::AddWorkingStorageRequest::disk_ids].
    pub fn set_disk_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.disk_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The response message for [StorageGateway::add_working_storage][crate::client::StorageGateway::add_working_storage].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct AddWorkingStorageResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl AddWorkingStorageResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::AddWorkingStorageResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::AddWorkingStorageResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::assign_tape_pool][crate::client::StorageGateway::assign_tape_pool].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct AssignTapePoolRequest {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TapeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub tape_arn: std::option::Option<std::string::String>,

    /// The identifier of the tape pool, for example `GLACIER` or `DEEP_ARCHIVE`.
    ///
    /// Length: 1 to 100 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub pool_id: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl AssignTapePoolRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [tape_arn][crate::model::AssignTapePoolRequest::tape_arn].
    pub fn set_tape_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_arn][crate::model::AssignTapePoolRequest::tape_arn].
    pub fn set_or_clear_tape_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [pool_id][crate::model::AssignTapePoolRequest::pool_id].
    pub fn set_pool_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.pool_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [pool_id][crate::model::AssignTapePoolRequest::pool_id].
    pub fn set_or_clear_pool_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.pool_id = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::assign_tape_pool][crate::client::StorageGateway::assign_tape_pool].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct AssignTapePoolResponse {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TapeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub tape_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl AssignTapePoolResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [tape_arn][crate::model::AssignTapePoolResponse::tape_arn].
    pub fn set_tape_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_arn][crate::model::AssignTapePoolResponse::tape_arn].
    pub fn set_or_clear_tape_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::attach_volume][crate::client::StorageGateway::attach_volume].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct AttachVolumeRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The name of the iSCSI target used by an initiator to connect to a volume.
    ///
    /// Length: 1 to 200 characters, lowercase letters, numbers, periods and hyphens.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub target_name: std::option::Option<std::string::String>,

    /// The Amazon Resource Name (ARN) of the storage volume.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "VolumeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub volume_arn: std::option::Option<std::string::String>,

    /// The IPv4 address of the network interface on the gateway used for iSCSI traffic.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub network_interface_id: std::option::Option<std::string::String>,

    /// The identifier of the local disk, as returned by `ListLocalDisks`.
    ///
    /// Length: 1 to 300 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub disk_id: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl AttachVolumeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::AttachVolumeRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::AttachVolumeRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [target_name][crate::model::AttachVolumeRequest::target_name].
    pub fn set_target_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [target_name][crate::model::AttachVolumeRequest::target_name].
    pub fn set_or_clear_target_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_arn][crate::model::AttachVolumeRequest::volume_arn].
    pub fn set_volume_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_arn][crate::model::AttachVolumeRequest::volume_arn].
    pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network_interface_id][crate::model::AttachVolumeRequest::network_interface_id].
    pub fn set_network_interface_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network_interface_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_interface_id][crate::model::AttachVolumeRequest::network_interface_id].
    pub fn set_or_clear_network_interface_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network_interface_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disk_id][crate::model::AttachVolumeRequest::disk_id].
    pub fn set_disk_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.disk_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [disk_id][crate::model::AttachVolumeRequest::disk_id].
    pub fn set_or_clear_disk_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.disk_id = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::attach_volume][crate::client::StorageGateway::attach_volume].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct AttachVolumeResponse {
    /// The Amazon Resource Name (ARN) of the storage volume.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "VolumeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub volume_arn: std::option::Option<std::string::String>,

    /// The Amazon Resource Name (ARN) of the iSCSI target, including the target name.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TargetARN", skip_serializing_if = "std::option::Option::is_none")]
    pub target_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl AttachVolumeResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [volume_arn][crate::model::AttachVolumeResponse::volume_arn].
    pub fn set_volume_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_arn][crate::model::AttachVolumeResponse::volume_arn].
    pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [target_arn][crate::model::AttachVolumeResponse::target_arn].
    pub fn set_target_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [target_arn][crate::model::AttachVolumeResponse::target_arn].
    pub fn set_or_clear_target_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::cancel_archival][crate::client::StorageGateway::cancel_archival].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CancelArchivalRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TapeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub tape_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CancelArchivalRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::CancelArchivalRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::CancelArchivalRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tape_arn][crate::model::CancelArchivalRequest::tape_arn].
    pub fn set_tape_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_arn][crate::model::CancelArchivalRequest::tape_arn].
    pub fn set_or_clear_tape_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::cancel_archival][crate::client::StorageGateway::cancel_archival].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CancelArchivalResponse {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TapeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub tape_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CancelArchivalResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [tape_arn][crate::model::CancelArchivalResponse::tape_arn].
    pub fn set_tape_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_arn][crate::model::CancelArchivalResponse::tape_arn].
    pub fn set_or_clear_tape_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::cancel_retrieval][crate::client::StorageGateway::cancel_retrieval].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CancelRetrievalRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TapeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub tape_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CancelRetrievalRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::CancelRetrievalRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::CancelRetrievalRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tape_arn][crate::model::CancelRetrievalRequest::tape_arn].
    pub fn set_tape_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_arn][crate::model::CancelRetrievalRequest::tape_arn].
    pub fn set_or_clear_tape_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::cancel_retrieval][crate::client::StorageGateway::cancel_retrieval].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CancelRetrievalResponse {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TapeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub tape_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CancelRetrievalResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [tape_arn][crate::model::CancelRetrievalResponse::tape_arn].
    pub fn set_tape_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_arn][crate::model::CancelRetrievalResponse::tape_arn].
    pub fn set_or_clear_tape_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::create_cached_iscsi_volume][crate::client::StorageGateway::create_cached_iscsi_volume].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateCachediScsiVolumeRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The size of the volume in bytes.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_size_in_bytes: std::option::Option<i64>,

    /// The snapshot identifier, for example `snap-78e22663`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub snapshot_id: std::option::Option<std::string::String>,

    /// The name of the iSCSI target used by an initiator to connect to a volume.
    ///
    /// Length: 1 to 200 characters, lowercase letters, numbers, periods and hyphens.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub target_name: std::option::Option<std::string::String>,

    /// The ARN of an existing volume to clone.
    ///
    /// The new volume must be equal to or larger than the source volume.
    #[serde(rename = "SourceVolumeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub source_volume_arn: std::option::Option<std::string::String>,

    /// The IPv4 address of the network interface on the gateway used for iSCSI traffic.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub network_interface_id: std::option::Option<std::string::String>,

    /// A unique string used to make the request idempotent.
    ///
    /// Length: 5 to 100 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub client_token: std::option::Option<std::string::String>,

    /// Set to `true` to encrypt objects with a customer-managed key, `false` for service-managed keys.
    #[serde(rename = "KMSEncrypted", skip_serializing_if = "std::option::Option::is_none")]
    pub kms_encrypted: std::option::Option<bool>,

    /// The ARN of the symmetric customer master key used for server-side encryption.
    ///
    /// Length: 7 to 2048 characters. Only set when `KMSEncrypted` is `true`.
    #[serde(rename = "KMSKey", skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key: std::option::Option<std::string::String>,

    /// A list of up to 50 tags assigned to the resource.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tags: std::vec::Vec<crate::model::Tag>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateCachediScsiVolumeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::CreateCachediScsiVolumeRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::CreateCachediScsiVolumeRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_size_in_bytes][crate::model::CreateCachediScsiVolumeRequest::volume_size_in_bytes].
    pub fn set_volume_size_in_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.volume_size_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_size_in_bytes][crate::model::CreateCachediScsiVolumeRequest::volume_size_in_bytes].
    pub fn set_or_clear_volume_size_in_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.volume_size_in_bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [snapshot_id][crate::model::CreateCachediScsiVolumeRequest::snapshot_id].
    pub fn set_snapshot_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.snapshot_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [snapshot_id][crate::model::CreateCachediScsiVolumeRequest::snapshot_id].
    pub fn set_or_clear_snapshot_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.snapshot_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [target_name][crate::model::CreateCachediScsiVolumeRequest::target_name].
    pub fn set_target_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [target_name][crate::model::CreateCachediScsiVolumeRequest::target_name].
    pub fn set_or_clear_target_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_volume_arn][crate::model::CreateCachediScsiVolumeRequest::source_volume_arn].
    pub fn set_source_volume_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_volume_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_volume_arn][crate::model::CreateCachediScsiVolumeRequest::source_volume_arn].
    pub fn set_or_clear_source_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_volume_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network_interface_id][crate::model::CreateCachediScsiVolumeRequest::network_interface_id].
    pub fn set_network_interface_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network_interface_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_interface_id][crate::model::CreateCachediScsiVolumeRequest::network_interface_id].
    pub fn set_or_clear_network_interface_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network_interface_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [client_token][crate::model::CreateCachediScsiVolumeRequest::client_token].
    pub fn set_client_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [client_token][crate::model::CreateCachediScsiVolumeRequest::client_token].
    pub fn set_or_clear_client_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_encrypted][crate::model::CreateCachediScsiVolumeRequest::kms_encrypted].
    pub fn set_kms_encrypted<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.kms_encrypted = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kms_encrypted][crate::model::CreateCachediScsiVolumeRequest::kms_encrypted].
    pub fn set_or_clear_kms_encrypted<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.kms_encrypted = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_key][crate::model::CreateCachediScsiVolumeRequest::kms_key].
    pub fn set_kms_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kms_key][crate::model::CreateCachediScsiVolumeRequest::kms_key].
    pub fn set_or_clear_kms_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tags][crate::model::CreateCachediScsiVolumeRequest::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        use std::iter::Iterator;
        self.tags = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The response message for [StorageGateway::create_cached_iscsi_volume][crate::client::StorageGateway::create_cached_iscsi_volume].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateCachediScsiVolumeResponse {
    /// The Amazon Resource Name (ARN) of the storage volume.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "VolumeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub volume_arn: std::option::Option<std::string::String>,

    /// The Amazon Resource Name (ARN) of the iSCSI target, including the target name.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TargetARN", skip_serializing_if = "std::option::Option::is_none")]
    pub target_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateCachediScsiVolumeResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [volume_arn][crate::model::CreateCachediScsiVolumeResponse::volume_arn].
    pub fn set_volume_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_arn][crate::model::CreateCachediScsiVolumeResponse::volume_arn].
    pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [target_arn][crate::model::CreateCachediScsiVolumeResponse::target_arn].
    pub fn set_target_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [target_arn][crate::model::CreateCachediScsiVolumeResponse::target_arn].
    pub fn set_or_clear_target_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::create_nfs_file_share][crate::client::StorageGateway::create_nfs_file_share].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateNfsFileShareRequest {
    /// A unique string used to make the request idempotent.
    ///
    /// Length: 5 to 100 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub client_token: std::option::Option<std::string::String>,

    /// File share default values applied to newly created files and directories.
    #[serde(rename = "NFSFileShareDefaults", skip_serializing_if = "std::option::Option::is_none")]
    pub nfs_file_share_defaults: std::option::Option<crate::model::NfsFileShareDefaults>,

    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// Set to `true` to encrypt objects with a customer-managed key, `false` for service-managed keys.
    #[serde(rename = "KMSEncrypted", skip_serializing_if = "std::option::Option::is_none")]
    pub kms_encrypted: std::option::Option<bool>,

    /// The ARN of the symmetric customer master key used for server-side encryption.
    ///
    /// Length: 7 to 2048 characters. Only set when `KMSEncrypted` is `true`.
    #[serde(rename = "KMSKey", skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key: std::option::Option<std::string::String>,

    /// The ARN of the IAM role the file gateway assumes when it accesses the bucket.
    ///
    /// Length: 50 to 500 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub role: std::option::Option<std::string::String>,

    /// The ARN of the backend storage used for the file share, optionally with a key prefix.
    ///
    /// Length: 16 to 1400 characters.
    #[serde(rename = "LocationARN", skip_serializing_if = "std::option::Option::is_none")]
    pub location_arn: std::option::Option<std::string::String>,

    /// The default storage class for objects written by the file gateway, for example `S3_STANDARD`.
    ///
    /// Length: 5 to 50 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub default_storage_class: std::option::Option<std::string::String>,

    /// The access control list applied to objects written to the bucket.
    #[serde(rename = "ObjectACL", skip_serializing_if = "std::option::Option::is_none")]
    pub object_acl: std::option::Option<crate::model::ObjectAcl>,

    /// The IP addresses or CIDR blocks of the clients allowed to access the file share.
    ///
    /// Between 1 and 100 entries.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub client_list: std::vec::Vec<std::string::String>,

    /// The user mapped to anonymous users: `RootSquash`, `NoSquash` or `AllSquash`.
    ///
    /// Length: 5 to 15 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub squash: std::option::Option<std::string::String>,

    /// Set to `true` to export the file share as read-only.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_only: std::option::Option<bool>,

    /// Set to `true` to guess the MIME type of uploaded objects from their file extensions.
    #[serde(rename = "GuessMIMETypeEnabled", skip_serializing_if = "std::option::Option::is_none")]
    pub guess_mime_type_enabled: std::option::Option<bool>,

    /// Set to `true` when the requester, not the bucket owner, pays for data access.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub requester_pays: std::option::Option<bool>,

    /// A list of up to 50 tags assigned to the resource.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tags: std::vec::Vec<crate::model::Tag>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateNfsFileShareRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [client_token][crate::model::CreateNfsFileShareRequest::client_token].
    pub fn set_client_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [client_token][crate::model::CreateNfsFileShareRequest::client_token].
    pub fn set_or_clear_client_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [nfs_file_share_defaults][crate::model::CreateNfsFileShareRequest::nfs_file_share_defaults].
    pub fn set_nfs_file_share_defaults<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::NfsFileShareDefaults>,
    {
        self.nfs_file_share_defaults = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [nfs_file_share_defaults][crate::model::CreateNfsFileShareRequest::nfs_file_share_defaults].
    pub fn set_or_clear_nfs_file_share_defaults<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::NfsFileShareDefaults>,
    {
        self.nfs_file_share_defaults = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_arn][crate::model::CreateNfsFileShareRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::CreateNfsFileShareRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_encrypted][crate::model::CreateNfsFileShareRequest::kms_encrypted].
    pub fn set_kms_encrypted<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.kms_encrypted = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kms_encrypted][crate::model::CreateNfsFileShareRequest::kms_encrypted].
    pub fn set_or_clear_kms_encrypted<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.kms_encrypted = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_key][crate::model::CreateNfsFileShareRequest::kms_key].
    pub fn set_kms_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kms_key][crate::model::CreateNfsFileShareRequest::kms_key].
    pub fn set_or_clear_kms_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [role][crate::model::CreateNfsFileShareRequest::role].
    pub fn set_role<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.role = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [role][crate::model::CreateNfsFileShareRequest::role].
    pub fn set_or_clear_role<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.role = v.map(|x| x.into());
        self
    }

    /// Sets the value of [location_arn][crate::model::CreateNfsFileShareRequest::location_arn].
    pub fn set_location_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.location_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [location_arn][crate::model::CreateNfsFileShareRequest::location_arn].
    pub fn set_or_clear_location_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.location_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [default_storage_class][crate::model::CreateNfsFileShareRequest::default_storage_class].
    pub fn set_default_storage_class<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.default_storage_class = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [default_storage_class][crate::model::CreateNfsFileShareRequest::default_storage_class].
    pub fn set_or_clear_default_storage_class<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.default_storage_class = v.map(|x| x.into());
        self
    }

    /// Sets the value of [object_acl][crate::model::CreateNfsFileShareRequest::object_acl].
    pub fn set_object_acl<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ObjectAcl>,
    {
        self.object_acl = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [object_acl][crate::model::CreateNfsFileShareRequest::object_acl].
    pub fn set_or_clear_object_acl<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ObjectAcl>,
    {
        self.object_acl = v.map(|x| x.into());
        self
    }

    /// Sets the value of [client_list][crate::model::CreateNfsFileShareRequest::client_list].
    pub fn set_client_list<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.client_list = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [squash][crate::model::CreateNfsFileShareRequest::squash].
    pub fn set_squash<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.squash = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [squash][crate::model::CreateNfsFileShareRequest::squash].
    pub fn set_or_clear_squash<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.squash = v.map(|x| x.into());
        self
    }

    /// Sets the value of [read_only][crate::model::CreateNfsFileShareRequest::read_only].
    pub fn set_read_only<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.read_only = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [read_only][crate::model::CreateNfsFileShareRequest::read_only].
    pub fn set_or_clear_read_only<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.read_only = v.map(|x| x.into());
        self
    }

    /// Sets the value of [guess_mime_type_enabled][crate::model::CreateNfsFileShareRequest::guess_mime_type_enabled].
    pub fn set_guess_mime_type_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.guess_mime_type_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [guess_mime_type_enabled][crate::model::CreateNfsFileShareRequest::guess_mime_type_enabled].
    pub fn set_or_clear_guess_mime_type_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.guess_mime_type_enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [requester_pays][crate::model::CreateNfsFileShareRequest::requester_pays].
    pub fn set_requester_pays<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.requester_pays = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [requester_pays][crate::model::CreateNfsFileShareRequest::requester_pays].
    pub fn set_or_clear_requester_pays<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.requester_pays = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tags][crate::model::CreateNfsFileShareRequest::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        use std::iter::Iterator;
        self.tags = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The response message for [StorageGateway::create_nfs_file_share][crate::client::StorageGateway::create_nfs_file_share].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateNfsFileShareResponse {
    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "FileShareARN", skip_serializing_if = "std::option::Option::is_none")]
    pub file_share_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateNfsFileShareResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [file_share_arn][crate::model::CreateNfsFileShareResponse::file_share_arn].
    pub fn set_file_share_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [file_share_arn][crate::model::CreateNfsFileShareResponse::file_share_arn].
    pub fn set_or_clear_file_share_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::create_smb_file_share][crate::client::StorageGateway::create_smb_file_share].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateSmbFileShareRequest {
    /// A unique string used to make the request idempotent.
    ///
    /// Length: 5 to 100 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub client_token: std::option::Option<std::string::String>,

    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// Set to `true` to encrypt objects with a customer-managed key, `false` for service-managed keys.
    #[serde(rename = "KMSEncrypted", skip_serializing_if = "std::option::Option::is_none")]
    pub kms_encrypted: std::option::Option<bool>,

    /// The ARN of the symmetric customer master key used for server-side encryption.
    ///
    /// Length: 7 to 2048 characters. Only set when `KMSEncrypted` is `true`.
    #[serde(rename = "KMSKey", skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key: std::option::Option<std::string::String>,

    /// The ARN of the IAM role the file gateway assumes when it accesses the bucket.
    ///
    /// Length: 50 to 500 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub role: std::option::Option<std::string::String>,

    /// The ARN of the backend storage used for the file share, optionally with a key prefix.
    ///
    /// Length: 16 to 1400 characters.
    #[serde(rename = "LocationARN", skip_serializing_if = "std::option::Option::is_none")]
    pub location_arn: std::option::Option<std::string::String>,

    /// The default storage class for objects written by the file gateway, for example `S3_STANDARD`.
    ///
    /// Length: 5 to 50 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub default_storage_class: std::option::Option<std::string::String>,

    /// The access control list applied to objects written to the bucket.
    #[serde(rename = "ObjectACL", skip_serializing_if = "std::option::Option::is_none")]
    pub object_acl: std::option::Option<crate::model::ObjectAcl>,

    /// Set to `true` to export the file share as read-only.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_only: std::option::Option<bool>,

    /// Set to `true` to guess the MIME type of uploaded objects from their file extensions.
    #[serde(rename = "GuessMIMETypeEnabled", skip_serializing_if = "std::option::Option::is_none")]
    pub guess_mime_type_enabled: std::option::Option<bool>,

    /// Set to `true` when the requester, not the bucket owner, pays for data access.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub requester_pays: std::option::Option<bool>,

    /// Set to `true` to enable access control lists on the SMB file share.
    #[serde(rename = "SMBACLEnabled", skip_serializing_if = "std::option::Option::is_none")]
    pub smb_acl_enabled: std::option::Option<bool>,

    /// Users in the Active Directory with administrator rights to the file share.
    ///
    /// At most 100 entries.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub admin_user_list: std::vec::Vec<std::string::String>,

    /// Users or groups in the Active Directory allowed to access the file share.
    ///
    /// At most 100 entries.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub valid_user_list: std::vec::Vec<std::string::String>,

    /// Users or groups in the Active Directory denied access to the file share.
    ///
    /// At most 100 entries.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub invalid_user_list: std::vec::Vec<std::string::String>,

    /// The ARN of the storage used for the audit logs.
    ///
    /// At most 1024 characters.
    #[serde(rename = "AuditDestinationARN", skip_serializing_if = "std::option::Option::is_none")]
    pub audit_destination_arn: std::option::Option<std::string::String>,

    /// The authentication method used by SMB clients: `ActiveDirectory` or `GuestAccess`.
    ///
    /// Length: 5 to 15 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub authentication: std::option::Option<std::string::String>,

    /// A list of up to 50 tags assigned to the resource.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tags: std::vec::Vec<crate::model::Tag>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateSmbFileShareRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [client_token][crate::model::CreateSmbFileShareRequest::client_token].
    pub fn set_client_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [client_token][crate::model::CreateSmbFileShareRequest::client_token].
    pub fn set_or_clear_client_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_arn][crate::model::CreateSmbFileShareRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::CreateSmbFileShareRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_encrypted][crate::model::CreateSmbFileShareRequest::kms_encrypted].
    pub fn set_kms_encrypted<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.kms_encrypted = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kms_encrypted][crate::model::CreateSmbFileShareRequest::kms_encrypted].
    pub fn set_or_clear_kms_encrypted<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.kms_encrypted = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_key][crate::model::CreateSmbFileShareRequest::kms_key].
    pub fn set_kms_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kms_key][crate::model::CreateSmbFileShareRequest::kms_key].
    pub fn set_or_clear_kms_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [role][crate::model::CreateSmbFileShareRequest::role].
    pub fn set_role<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.role = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [role][crate::model::CreateSmbFileShareRequest::role].
    pub fn set_or_clear_role<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.role = v.map(|x| x.into());
        self
    }

    /// Sets the value of [location_arn][crate::model::CreateSmbFileShareRequest::location_arn].
    pub fn set_location_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.location_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [location_arn][crate::model::CreateSmbFileShareRequest::location_arn].
    pub fn set_or_clear_location_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.location_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [default_storage_class][crate::model::CreateSmbFileShareRequest::default_storage_class].
    pub fn set_default_storage_class<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.default_storage_class = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [default_storage_class][crate::model::CreateSmbFileShareRequest::default_storage_class].
    pub fn set_or_clear_default_storage_class<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.default_storage_class = v.map(|x| x.into());
        self
    }

    /// Sets the value of [object_acl][crate::model::CreateSmbFileShareRequest::object_acl].
    pub fn set_object_acl<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ObjectAcl>,
    {
        self.object_acl = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [object_acl][crate::model::CreateSmbFileShareRequest::object_acl].
    pub fn set_or_clear_object_acl<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ObjectAcl>,
    {
        self.object_acl = v.map(|x| x.into());
        self
    }

    /// Sets the value of [read_only][crate::model::CreateSmbFileShareRequest::read_only].
    pub fn set_read_only<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.read_only = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [read_only][crate::model::CreateSmbFileShareRequest::read_only].
    pub fn set_or_clear_read_only<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.read_only = v.map(|x| x.into());
        self
    }

    /// Sets the value of [guess_mime_type_enabled][crate::model::CreateSmbFileShareRequest::guess_mime_type_enabled].
    pub fn set_guess_mime_type_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.guess_mime_type_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [guess_mime_type_enabled][crate::model::CreateSmbFileShareRequest::guess_mime_type_enabled].
    pub fn set_or_clear_guess_mime_type_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.guess_mime_type_enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [requester_pays][crate::model::CreateSmbFileShareRequest::requester_pays].
    pub fn set_requester_pays<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.requester_pays = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [requester_pays][crate::model::CreateSmbFileShareRequest::requester_pays].
    pub fn set_or_clear_requester_pays<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.requester_pays = v.map(|x| x.into());
        self
    }

    /// Sets the value of [smb_acl_enabled][crate::model::CreateSmbFileShareRequest::smb_acl_enabled].
    pub fn set_smb_acl_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.smb_acl_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [smb_acl_enabled][crate::model::CreateSmbFileShareRequest::smb_acl_enabled].
    pub fn set_or_clear_smb_acl_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.smb_acl_enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [admin_user_list][crate::model::CreateSmbFileShareRequest::admin_user_list].
    pub fn set_admin_user_list<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.admin_user_list = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [valid_user_list][crate::model::CreateSmbFileShareRequest::valid_user_list].
    pub fn set_valid_user_list<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.valid_user_list = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [invalid_user_list][crate::model::CreateSmbFileShareRequest::invalid_user_list].
    pub fn set_invalid_user_list<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.invalid_user_list = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [audit_destination_arn][crate::model::CreateSmbFileShareRequest::audit_destination_arn].
    pub fn set_audit_destination_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.audit_destination_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [audit_destination_arn][crate::model::CreateSmbFileShareRequest::audit_destination_arn].
    pub fn set_or_clear_audit_destination_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.audit_destination_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [authentication][crate::model::CreateSmbFileShareRequest::authentication].
    pub fn set_authentication<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.authentication = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [authentication][crate::model::CreateSmbFileShareRequest::authentication].
    pub fn set_or_clear_authentication<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.authentication = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tags][crate::model::CreateSmbFileShareRequest::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        use std::iter::Iterator;
        self.tags = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The response message for [StorageGateway::create_smb_file_share][crate::client::StorageGateway::create_smb_file_share].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateSmbFileShareResponse {
    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "FileShareARN", skip_serializing_if = "std::option::Option::is_none")]
    pub file_share_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateSmbFileShareResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [file_share_arn][crate::model::CreateSmbFileShareResponse::file_share_arn].
    pub fn set_file_share_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [file_share_arn][crate::model::CreateSmbFileShareResponse::file_share_arn].
    pub fn set_or_clear_file_share_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::create_snapshot][crate::client::StorageGateway::create_snapshot].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateSnapshotRequest {
    /// The Amazon Resource Name (ARN) of the storage volume.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "VolumeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub volume_arn: std::option::Option<std::string::String>,

    /// A textual description of the snapshot, shown in the snapshot listings.
    ///
    /// Length: 1 to 255 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub snapshot_description: std::option::Option<std::string::String>,

    /// A list of up to 50 tags assigned to the resource.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tags: std::vec::Vec<crate::model::Tag>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateSnapshotRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [volume_arn][crate::model::CreateSnapshotRequest::volume_arn].
    pub fn set_volume_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_arn][crate::model::CreateSnapshotRequest::volume_arn].
    pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [snapshot_description][crate::model::CreateSnapshotRequest::snapshot_description].
    pub fn set_snapshot_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.snapshot_description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [snapshot_description][crate::model::CreateSnapshotRequest::snapshot_description].
    pub fn set_or_clear_snapshot_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.snapshot_description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tags][crate::model::CreateSnapshotRequest::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        use std::iter::Iterator;
        self.tags = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The response message for [StorageGateway::create_snapshot][crate::client::StorageGateway::create_snapshot].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateSnapshotResponse {
    /// The Amazon Resource Name (ARN) of the storage volume.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "VolumeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub volume_arn: std::option::Option<std::string::String>,

    /// The snapshot identifier, for example `snap-78e22663`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub snapshot_id: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateSnapshotResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [volume_arn][crate::model::CreateSnapshotResponse::volume_arn].
    pub fn set_volume_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_arn][crate::model::CreateSnapshotResponse::volume_arn].
    pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [snapshot_id][crate::model::CreateSnapshotResponse::snapshot_id].
    pub fn set_snapshot_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.snapshot_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [snapshot_id][crate::model::CreateSnapshotResponse::snapshot_id].
    pub fn set_or_clear_snapshot_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.snapshot_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::create_snapshot_from_volume_recovery_point][crate::client::StorageGateway::create_snapshot_from_volume_recovery_point].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateSnapshotFromVolumeRecoveryPointRequest {
    /// The Amazon Resource Name (ARN) of the storage volume.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "VolumeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub volume_arn: std::option::Option<std::string::String>,

    /// A textual description of the snapshot, shown in the snapshot listings.
    ///
    /// Length: 1 to 255 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub snapshot_description: std::option::Option<std::string::String>,

    /// A list of up to 50 tags assigned to the resource.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tags: std::vec::Vec<crate::model::Tag>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateSnapshotFromVolumeRecoveryPointRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [volume_arn][crate::model::CreateSnapshotFromVolumeRecoveryPointRequest::volume_arn].
    pub fn set_volume_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_arn][crate::model::CreateSnapshotFromVolumeRecoveryPointRequest::volume_arn].
    pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [snapshot_description][crate::model::CreateSnapshotFromVolumeRecoveryPointRequest::snapshot_description].
    pub fn set_snapshot_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.snapshot_description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [snapshot_description][crate::model::CreateSnapshotFromVolumeRecoveryPointRequest::snapshot_description].
    pub fn set_or_clear_snapshot_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.snapshot_description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tags][crate::model::CreateSnapshotFromVolumeRecoveryPointRequest::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        use std::iter::Iterator;
        self.tags = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The response message for [StorageGateway::create_snapshot_from_volume_recovery_point][crate::client::StorageGateway::create_snapshot_from_volume_recovery_point].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateSnapshotFromVolumeRecoveryPointResponse {
    /// The snapshot identifier, for example `snap-78e22663`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub snapshot_id: std::option::Option<std::string::String>,

    /// The Amazon Resource Name (ARN) of the storage volume.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "VolumeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub volume_arn: std::option::Option<std::string::String>,

    /// The time the recovery point was taken, in ISO 8601 format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_recovery_point_time: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateSnapshotFromVolumeRecoveryPointResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [snapshot_id][crate::model::CreateSnapshotFromVolumeRecoveryPointResponse::snapshot_id].
    pub fn set_snapshot_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.snapshot_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [snapshot_id][crate::model::CreateSnapshotFromVolumeRecoveryPointResponse::snapshot_id].
    pub fn set_or_clear_snapshot_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.snapshot_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_arn][crate::model::CreateSnapshotFromVolumeRecoveryPointResponse::volume_arn].
    pub fn set_volume_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_arn][crate::model::CreateSnapshotFromVolumeRecoveryPointResponse::volume_arn].
    pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_recovery_point_time][crate::model::CreateSnapshotFromVolumeRecoveryPointResponse::volume_recovery_point_time].
    pub fn set_volume_recovery_point_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_recovery_point_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_recovery_point_time][crate::model::CreateSnapshotFromVolumeRecoveryPointResponse::volume_recovery_point_time].
    pub fn set_or_clear_volume_recovery_point_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_recovery_point_time = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::create_stored_iscsi_volume][crate::client::StorageGateway::create_stored_iscsi_volume].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateStorediScsiVolumeRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The identifier of the local disk, as returned by `ListLocalDisks`.
    ///
    /// Length: 1 to 300 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub disk_id: std::option::Option<std::string::String>,

    /// The snapshot identifier, for example `snap-78e22663`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub snapshot_id: std::option::Option<std::string::String>,

    /// Set to `true` to preserve the existing data on the disk.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub preserve_existing_data: std::option::Option<bool>,

    /// The name of the iSCSI target used by an initiator to connect to a volume.
    ///
    /// Length: 1 to 200 characters, lowercase letters, numbers, periods and hyphens.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub target_name: std::option::Option<std::string::String>,

    /// The IPv4 address of the network interface on the gateway used for iSCSI traffic.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub network_interface_id: std::option::Option<std::string::String>,

    /// Set to `true` to encrypt objects with a customer-managed key, `false` for service-managed keys.
    #[serde(rename = "KMSEncrypted", skip_serializing_if = "std::option::Option::is_none")]
    pub kms_encrypted: std::option::Option<bool>,

    /// The ARN of the symmetric customer master key used for server-side encryption.
    ///
    /// Length: 7 to 2048 characters. Only set when `KMSEncrypted` is `true`.
    #[serde(rename = "KMSKey", skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key: std::option::Option<std::string::String>,

    /// A list of up to 50 tags assigned to the resource.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tags: std::vec::Vec<crate::model::Tag>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateStorediScsiVolumeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::CreateStorediScsiVolumeRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::CreateStorediScsiVolumeRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disk_id][crate::model::CreateStorediScsiVolumeRequest::disk_id].
    pub fn set_disk_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.disk_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [disk_id][crate::model::CreateStorediScsiVolumeRequest::disk_id].
    pub fn set_or_clear_disk_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.disk_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [snapshot_id][crate::model::CreateStorediScsiVolumeRequest::snapshot_id].
    pub fn set_snapshot_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.snapshot_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [snapshot_id][crate::model::CreateStorediScsiVolumeRequest::snapshot_id].
    pub fn set_or_clear_snapshot_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.snapshot_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [preserve_existing_data][crate::model::CreateStorediScsiVolumeRequest::preserve_existing_data].
    pub fn set_preserve_existing_data<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.preserve_existing_data = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [preserve_existing_data][crate::model::CreateStorediScsiVolumeRequest::preserve_existing_data].
    pub fn set_or_clear_preserve_existing_data<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.preserve_existing_data = v.map(|x| x.into());
        self
    }

    /// Sets the value of [target_name][crate::model::CreateStorediScsiVolumeRequest::target_name].
    pub fn set_target_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [target_name][crate::model::CreateStorediScsiVolumeRequest::target_name].
    pub fn set_or_clear_target_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network_interface_id][crate::model::CreateStorediScsiVolumeRequest::network_interface_id].
    pub fn set_network_interface_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network_interface_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_interface_id][crate::model::CreateStorediScsiVolumeRequest::network_interface_id].
    pub fn set_or_clear_network_interface_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network_interface_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_encrypted][crate::model::CreateStorediScsiVolumeRequest::kms_encrypted].
    pub fn set_kms_encrypted<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.kms_encrypted = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kms_encrypted][crate::model::CreateStorediScsiVolumeRequest::kms_encrypted].
    pub fn set_or_clear_kms_encrypted<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.kms_encrypted = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_key][crate::model::CreateStorediScsiVolumeRequest::kms_key].
    pub fn set_kms_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kms_key][crate::model::CreateStorediScsiVolumeRequest::kms_key].
    pub fn set_or_clear_kms_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tags][crate::model::CreateStorediScsiVolumeRequest::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        use std::iter::Iterator;
        self.tags = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The response message for [StorageGateway::create_stored_iscsi_volume][crate::client::StorageGateway::create_stored_iscsi_volume].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateStorediScsiVolumeResponse {
    /// The Amazon Resource Name (ARN) of the storage volume.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "VolumeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub volume_arn: std::option::Option<std::string::String>,

    /// The size of the volume in bytes.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_size_in_bytes: std::option::Option<i64>,

    /// The Amazon Resource Name (ARN) of the iSCSI target, including the target name.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TargetARN", skip_serializing_if = "std::option::Option::is_none")]
    pub target_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateStorediScsiVolumeResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [volume_arn][crate::model::CreateStorediScsiVolumeResponse::volume_arn].
    pub fn set_volume_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_arn][crate::model::CreateStorediScsiVolumeResponse::volume_arn].
    pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_size_in_bytes][crate::model::CreateStorediScsiVolumeResponse::volume_size_in_bytes].
    pub fn set_volume_size_in_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.volume_size_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_size_in_bytes][crate::model::CreateStorediScsiVolumeResponse::volume_size_in_bytes].
    pub fn set_or_clear_volume_size_in_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.volume_size_in_bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [target_arn][crate::model::CreateStorediScsiVolumeResponse::target_arn].
    pub fn set_target_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [target_arn][crate::model::CreateStorediScsiVolumeResponse::target_arn].
    pub fn set_or_clear_target_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::create_tape_with_barcode][crate::client::StorageGateway::create_tape_with_barcode].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateTapeWithBarcodeRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The size of the virtual tape in bytes.
    ///
    /// The size must be aligned by gigabyte (1024\*1024\*1024 bytes).
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tape_size_in_bytes: std::option::Option<i64>,

    /// The barcode of the virtual tape.
    ///
    /// Length: 7 to 16 characters, upper-case letters A to Z and digits.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tape_barcode: std::option::Option<std::string::String>,

    /// Set to `true` to encrypt objects with a customer-managed key, `false` for service-managed keys.
    #[serde(rename = "KMSEncrypted", skip_serializing_if = "std::option::Option::is_none")]
    pub kms_encrypted: std::option::Option<bool>,

    /// The ARN of the symmetric customer master key used for server-side encryption.
    ///
    /// Length: 7 to 2048 characters. Only set when `KMSEncrypted` is `true`.
    #[serde(rename = "KMSKey", skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key: std::option::Option<std::string::String>,

    /// The identifier of the tape pool, for example `GLACIER` or `DEEP_ARCHIVE`.
    ///
    /// Length: 1 to 100 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub pool_id: std::option::Option<std::string::String>,

    /// A list of up to 50 tags assigned to the resource.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tags: std::vec::Vec<crate::model::Tag>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateTapeWithBarcodeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::CreateTapeWithBarcodeRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::CreateTapeWithBarcodeRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tape_size_in_bytes][crate::model::CreateTapeWithBarcodeRequest::tape_size_in_bytes].
    pub fn set_tape_size_in_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.tape_size_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_size_in_bytes][crate::model::CreateTapeWithBarcodeRequest::tape_size_in_bytes].
    pub fn set_or_clear_tape_size_in_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.tape_size_in_bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tape_barcode][crate::model::CreateTapeWithBarcodeRequest::tape_barcode].
    pub fn set_tape_barcode<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_barcode = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_barcode][crate::model::CreateTapeWithBarcodeRequest::tape_barcode].
    pub fn set_or_clear_tape_barcode<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_barcode = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_encrypted][crate::model::CreateTapeWithBarcodeRequest::kms_encrypted].
    pub fn set_kms_encrypted<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.kms_encrypted = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kms_encrypted][crate::model::CreateTapeWithBarcodeRequest::kms_encrypted].
    pub fn set_or_clear_kms_encrypted<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.kms_encrypted = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_key][crate::model::CreateTapeWithBarcodeRequest::kms_key].
    pub fn set_kms_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kms_key][crate::model::CreateTapeWithBarcodeRequest::kms_key].
    pub fn set_or_clear_kms_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [pool_id][crate::model::CreateTapeWithBarcodeRequest::pool_id].
    pub fn set_pool_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.pool_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [pool_id][crate::model::CreateTapeWithBarcodeRequest::pool_id].
    pub fn set_or_clear_pool_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.pool_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tags][crate::model::CreateTapeWithBarcodeRequest::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        use std::iter::Iterator;
        self.tags = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The response message for [StorageGateway::create_tape_with_barcode][crate::client::StorageGateway::create_tape_with_barcode].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateTapeWithBarcodeResponse {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TapeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub tape_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateTapeWithBarcodeResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [tape_arn][crate::model::CreateTapeWithBarcodeResponse::tape_arn].
    pub fn set_tape_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_arn][crate::model::CreateTapeWithBarcodeResponse::tape_arn].
    pub fn set_or_clear_tape_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::create_tapes][crate::client::StorageGateway::create_tapes].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateTapesRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The size of the virtual tape in bytes.
    ///
    /// The size must be aligned by gigabyte (1024\*1024\*1024 bytes).
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tape_size_in_bytes: std::option::Option<i64>,

    /// A unique string used to make the request idempotent.
    ///
    /// Length: 5 to 100 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub client_token: std::option::Option<std::string::String>,

    /// The number of virtual tapes to create.
    ///
    /// Range: 1 to 10.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub num_tapes_to_create: std::option::Option<i32>,

    /// A prefix prepended to the barcode of the created virtual tapes.
    ///
    /// Length: 1 to 4 upper-case letters A to Z.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tape_barcode_prefix: std::option::Option<std::string::String>,

    /// Set to `true` to encrypt objects with a customer-managed key, `false` for service-managed keys.
    #[serde(rename = "KMSEncrypted", skip_serializing_if = "std::option::Option::is_none")]
    pub kms_encrypted: std::option::Option<bool>,

    /// The ARN of the symmetric customer master key used for server-side encryption.
    ///
    /// Length: 7 to 2048 characters. Only set when `KMSEncrypted` is `true`.
    #[serde(rename = "KMSKey", skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key: std::option::Option<std::string::String>,

    /// The identifier of the tape pool, for example `GLACIER` or `DEEP_ARCHIVE`.
    ///
    /// Length: 1 to 100 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub pool_id: std::option::Option<std::string::String>,

    /// A list of up to 50 tags assigned to the resource.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tags: std::vec::Vec<crate::model::Tag>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateTapesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::CreateTapesRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::CreateTapesRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tape_size_in_bytes][crate::model::CreateTapesRequest::tape_size_in_bytes].
    pub fn set_tape_size_in_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.tape_size_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_size_in_bytes][crate::model::CreateTapesRequest::tape_size_in_bytes].
    pub fn set_or_clear_tape_size_in_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.tape_size_in_bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [client_token][crate::model::CreateTapesRequest::client_token].
    pub fn set_client_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [client_token][crate::model::CreateTapesRequest::client_token].
    pub fn set_or_clear_client_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.client_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [num_tapes_to_create][crate::model::CreateTapesRequest::num_tapes_to_create].
    pub fn set_num_tapes_to_create<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.num_tapes_to_create = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [num_tapes_to_create][crate::model::CreateTapesRequest::num_tapes_to_create].
    pub fn set_or_clear_num_tapes_to_create<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.num_tapes_to_create = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tape_barcode_prefix][crate::model::CreateTapesRequest::tape_barcode_prefix].
    pub fn set_tape_barcode_prefix<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_barcode_prefix = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_barcode_prefix][crate::model::CreateTapesRequest::tape_barcode_prefix].
    pub fn set_or_clear_tape_barcode_prefix<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_barcode_prefix = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_encrypted][crate::model::CreateTapesRequest::kms_encrypted].
    pub fn set_kms_encrypted<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.kms_encrypted = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kms_encrypted][crate::model::CreateTapesRequest::kms_encrypted].
    pub fn set_or_clear_kms_encrypted<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.kms_encrypted = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_key][crate::model::CreateTapesRequest::kms_key].
    pub fn set_kms_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kms_key][crate::model::CreateTapesRequest::kms_key].
    pub fn set_or_clear_kms_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [pool_id][crate::model::CreateTapesRequest::pool_id].
    pub fn set_pool_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.pool_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [pool_id][crate::model::CreateTapesRequest::pool_id].
    pub fn set_or_clear_pool_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.pool_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tags][crate::model::CreateTapesRequest::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        use std::iter::Iterator;
        self.tags = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The response message for [StorageGateway::create_tapes][crate::client::StorageGateway::create_tapes].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateTapesResponse {
    /// The Amazon Resource Names (ARNs) of the virtual tapes.
    #[serde(rename = "TapeARNs", skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tape_arns: std::vec::Vec<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateTapesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [tape_arns][crate::model::CreateTapesResponse::tape_arns].
    pub fn set_tape_arns<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.tape_arns = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request message for [StorageGateway::delete_automatic_tape_creation_policy][crate::client::StorageGateway::delete_automatic_tape_creation_policy].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteAutomaticTapeCreationPolicyRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteAutomaticTapeCreationPolicyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DeleteAutomaticTapeCreationPolicyRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DeleteAutomaticTapeCreationPolicyRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::delete_automatic_tape_creation_policy][crate::client::StorageGateway::delete_automatic_tape_creation_policy].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteAutomaticTapeCreationPolicyResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteAutomaticTapeCreationPolicyResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DeleteAutomaticTapeCreationPolicyResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DeleteAutomaticTapeCreationPolicyResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::delete_bandwidth_rate_limit][crate::client::StorageGateway::delete_bandwidth_rate_limit].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteBandwidthRateLimitRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// One of `UPLOAD`, `DOWNLOAD` or `ALL`.
    ///
    /// Length: 3 to 25 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub bandwidth_type: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteBandwidthRateLimitRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DeleteBandwidthRateLimitRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DeleteBandwidthRateLimitRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [bandwidth_type][crate::model::DeleteBandwidthRateLimitRequest::bandwidth_type].
    pub fn set_bandwidth_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bandwidth_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bandwidth_type][crate::model::DeleteBandwidthRateLimitRequest::bandwidth_type].
    pub fn set_or_clear_bandwidth_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bandwidth_type = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::delete_bandwidth_rate_limit][crate::client::StorageGateway::delete_bandwidth_rate_limit].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteBandwidthRateLimitResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteBandwidthRateLimitResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DeleteBandwidthRateLimitResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DeleteBandwidthRateLimitResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::delete_chap_credentials][crate::client::StorageGateway::delete_chap_credentials].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteChapCredentialsRequest {
    /// The Amazon Resource Name (ARN) of the iSCSI target, including the target name.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TargetARN", skip_serializing_if = "std::option::Option::is_none")]
    pub target_arn: std::option::Option<std::string::String>,

    /// The iSCSI initiator that connects to the target.
    ///
    /// Length: 1 to 255 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub initiator_name: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteChapCredentialsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [target_arn][crate::model::DeleteChapCredentialsRequest::target_arn].
    pub fn set_target_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [target_arn][crate::model::DeleteChapCredentialsRequest::target_arn].
    pub fn set_or_clear_target_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [initiator_name][crate::model::DeleteChapCredentialsRequest::initiator_name].
    pub fn set_initiator_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.initiator_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [initiator_name][crate::model::DeleteChapCredentialsRequest::initiator_name].
    pub fn set_or_clear_initiator_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.initiator_name = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::delete_chap_credentials][crate::client::StorageGateway::delete_chap_credentials].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteChapCredentialsResponse {
    /// The Amazon Resource Name (ARN) of the iSCSI target, including the target name.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TargetARN", skip_serializing_if = "std::option::Option::is_none")]
    pub target_arn: std::option::Option<std::string::String>,

    /// The iSCSI initiator that connects to the target.
    ///
    /// Length: 1 to 255 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub initiator_name: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteChapCredentialsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [target_arn][crate::model::DeleteChapCredentialsResponse::target_arn].
    pub fn set_target_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [target_arn][crate::model::DeleteChapCredentialsResponse::target_arn].
    pub fn set_or_clear_target_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [initiator_name][crate::model::DeleteChapCredentialsResponse::initiator_name].
    pub fn set_initiator_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.initiator_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [initiator_name][crate::model::DeleteChapCredentialsResponse::initiator_name].
    pub fn set_or_clear_initiator_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.initiator_name = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::delete_file_share][crate::client::StorageGateway::delete_file_share].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteFileShareRequest {
    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "FileShareARN", skip_serializing_if = "std::option::Option::is_none")]
    pub file_share_arn: std::option::Option<std::string::String>,

    /// If `true`, the file share is deleted immediately and pending uploads are aborted.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub force_delete: std::option::Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteFileShareRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [file_share_arn][crate::model::DeleteFileShareRequest::file_share_arn].
    pub fn set_file_share_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [file_share_arn][crate::model::DeleteFileShareRequest::file_share_arn].
    pub fn set_or_clear_file_share_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [force_delete][crate::model::DeleteFileShareRequest::force_delete].
    pub fn set_force_delete<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.force_delete = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [force_delete][crate::model::DeleteFileShareRequest::force_delete].
    pub fn set_or_clear_force_delete<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.force_delete = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::delete_file_share][crate::client::StorageGateway::delete_file_share].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteFileShareResponse {
    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "FileShareARN", skip_serializing_if = "std::option::Option::is_none")]
    pub file_share_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteFileShareResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [file_share_arn][crate::model::DeleteFileShareResponse::file_share_arn].
    pub fn set_file_share_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [file_share_arn][crate::model::DeleteFileShareResponse::file_share_arn].
    pub fn set_or_clear_file_share_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::delete_gateway][crate::client::StorageGateway::delete_gateway].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteGatewayRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteGatewayRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DeleteGatewayRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DeleteGatewayRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::delete_gateway][crate::client::StorageGateway::delete_gateway].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteGatewayResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteGatewayResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DeleteGatewayResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DeleteGatewayResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::delete_snapshot_schedule][crate::client::StorageGateway::delete_snapshot_schedule].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteSnapshotScheduleRequest {
    /// The Amazon Resource Name (ARN) of the storage volume.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "VolumeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub volume_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteSnapshotScheduleRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [volume_arn][crate::model::DeleteSnapshotScheduleRequest::volume_arn].
    pub fn set_volume_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_arn][crate::model::DeleteSnapshotScheduleRequest::volume_arn].
    pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::delete_snapshot_schedule][crate::client::StorageGateway::delete_snapshot_schedule].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteSnapshotScheduleResponse {
    /// The Amazon Resource Name (ARN) of the storage volume.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "VolumeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub volume_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteSnapshotScheduleResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [volume_arn][crate::model::DeleteSnapshotScheduleResponse::volume_arn].
    pub fn set_volume_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_arn][crate::model::DeleteSnapshotScheduleResponse::volume_arn].
    pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::delete_tape][crate::client::StorageGateway::delete_tape].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteTapeRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TapeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub tape_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteTapeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DeleteTapeRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DeleteTapeRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tape_arn][crate::model::DeleteTapeRequest::tape_arn].
    pub fn set_tape_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_arn][crate::model::DeleteTapeRequest::tape_arn].
    pub fn set_or_clear_tape_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::delete_tape][crate::client::StorageGateway::delete_tape].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteTapeResponse {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TapeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub tape_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteTapeResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [tape_arn][crate::model::DeleteTapeResponse::tape_arn].
    pub fn set_tape_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_arn][crate::model::DeleteTapeResponse::tape_arn].
    pub fn set_or_clear_tape_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::delete_tape_archive][crate::client::StorageGateway::delete_tape_archive].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteTapeArchiveRequest {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TapeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub tape_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteTapeArchiveRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [tape_arn][crate::model::DeleteTapeArchiveRequest::tape_arn].
    pub fn set_tape_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_arn][crate::model::DeleteTapeArchiveRequest::tape_arn].
    pub fn set_or_clear_tape_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::delete_tape_archive][crate::client::StorageGateway::delete_tape_archive].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteTapeArchiveResponse {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TapeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub tape_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteTapeArchiveResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [tape_arn][crate::model::DeleteTapeArchiveResponse::tape_arn].
    pub fn set_tape_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_arn][crate::model::DeleteTapeArchiveResponse::tape_arn].
    pub fn set_or_clear_tape_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::delete_volume][crate::client::StorageGateway::delete_volume].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteVolumeRequest {
    /// The Amazon Resource Name (ARN) of the storage volume.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "VolumeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub volume_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteVolumeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [volume_arn][crate::model::DeleteVolumeRequest::volume_arn].
    pub fn set_volume_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_arn][crate::model::DeleteVolumeRequest::volume_arn].
    pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::delete_volume][crate::client::StorageGateway::delete_volume].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteVolumeResponse {
    /// The Amazon Resource Name (ARN) of the storage volume.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "VolumeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub volume_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteVolumeResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [volume_arn][crate::model::DeleteVolumeResponse::volume_arn].
    pub fn set_volume_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_arn][crate::model::DeleteVolumeResponse::volume_arn].
    pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::describe_availability_monitor_test][crate::client::StorageGateway::describe_availability_monitor_test].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeAvailabilityMonitorTestRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeAvailabilityMonitorTestRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DescribeAvailabilityMonitorTestRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DescribeAvailabilityMonitorTestRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::describe_availability_monitor_test][crate::client::StorageGateway::describe_availability_monitor_test].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeAvailabilityMonitorTestResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The status of the high availability monitoring test.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::AvailabilityMonitorTestStatus>,

    /// The time the high availability monitoring test started.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub start_time: std::option::Option<wkt::Timestamp>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeAvailabilityMonitorTestResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DescribeAvailabilityMonitorTestResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DescribeAvailabilityMonitorTestResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][crate::model::DescribeAvailabilityMonitorTestResponse::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::AvailabilityMonitorTestStatus>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::DescribeAvailabilityMonitorTestResponse::status].
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::AvailabilityMonitorTestStatus>,
    {
        self.status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [start_time][crate::model::DescribeAvailabilityMonitorTestResponse::start_time].
    pub fn set_start_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.start_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start_time][crate::model::DescribeAvailabilityMonitorTestResponse::start_time].
    pub fn set_or_clear_start_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.start_time = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::describe_bandwidth_rate_limit][crate::client::StorageGateway::describe_bandwidth_rate_limit].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeBandwidthRateLimitRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeBandwidthRateLimitRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DescribeBandwidthRateLimitRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DescribeBandwidthRateLimitRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::describe_bandwidth_rate_limit][crate::client::StorageGateway::describe_bandwidth_rate_limit].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeBandwidthRateLimitResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The average upload bandwidth rate limit in bits per second.
    ///
    /// Minimum: 51200.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub average_upload_rate_limit_in_bits_per_sec: std::option::Option<i64>,

    /// The average download bandwidth rate limit in bits per second.
    ///
    /// Minimum: 102400.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub average_download_rate_limit_in_bits_per_sec: std::option::Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeBandwidthRateLimitResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DescribeBandwidthRateLimitResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DescribeBandwidthRateLimitResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [average_upload_rate_limit_in_bits_per_sec][crate::model::DescribeBandwidthRateLimitResponse::average_upload_rate_limit_in_bits_per_sec].
    pub fn set_average_upload_rate_limit_in_bits_per_sec<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.average_upload_rate_limit_in_bits_per_sec = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [average_upload_rate_limit_in_bits_per_sec][crate::model::DescribeBandwidthRateLimitResponse::average_upload_rate_limit_in_bits_per_sec].
    pub fn set_or_clear_average_upload_rate_limit_in_bits_per_sec<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.average_upload_rate_limit_in_bits_per_sec = v.map(|x| x.into());
        self
    }

    /// Sets the value of [average_download_rate_limit_in_bits_per_sec][crate::model::DescribeBandwidthRateLimitResponse::average_download_rate_limit_in_bits_per_sec].
    pub fn set_average_download_rate_limit_in_bits_per_sec<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.average_download_rate_limit_in_bits_per_sec = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [average_download_rate_limit_in_bits_per_sec][crate::model::DescribeBandwidthRateLimitResponse::average_download_rate_limit_in_bits_per_sec].
    pub fn set_or_clear_average_download_rate_limit_in_bits_per_sec<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.average_download_rate_limit_in_bits_per_sec = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::describe_cache][crate::client::StorageGateway::describe_cache].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeCacheRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeCacheRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DescribeCacheRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DescribeCacheRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::describe_cache][crate::client::StorageGateway::describe_cache].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeCacheResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The local disk identifiers, as returned by `ListLocalDisks`.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub disk_ids: std::vec::Vec<std::string::String>,

    /// The amount of cache allocated, in bytes.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cache_allocated_in_bytes: std::option::Option<i64>,

    /// Percent use of the gateway's cache storage.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cache_used_percentage: std::option::Option<f64>,

    /// Percent of the cache that contains data not yet persisted to the cloud.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cache_dirty_percentage: std::option::Option<f64>,

    /// Percent of application read operations served from the cache.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cache_hit_percentage: std::option::Option<f64>,

    /// Percent of application read operations not served from the cache.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cache_miss_percentage: std::option::Option<f64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeCacheResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DescribeCacheResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DescribeCacheResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disk_ids][crate::model::DescribeCacheResponse::disk_ids].
    pub fn set_disk_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.disk_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [cache_allocated_in_bytes][crate::model::DescribeCacheResponse::cache_allocated_in_bytes].
    pub fn set_cache_allocated_in_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.cache_allocated_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cache_allocated_in_bytes][crate::model::DescribeCacheResponse::cache_allocated_in_bytes].
    pub fn set_or_clear_cache_allocated_in_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.cache_allocated_in_bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [cache_used_percentage][crate::model::DescribeCacheResponse::cache_used_percentage].
    pub fn set_cache_used_percentage<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.cache_used_percentage = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cache_used_percentage][crate::model::DescribeCacheResponse::cache_used_percentage].
    pub fn set_or_clear_cache_used_percentage<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.cache_used_percentage = v.map(|x| x.into());
        self
    }

    /// Sets the value of [cache_dirty_percentage][crate::model::DescribeCacheResponse::cache_dirty_percentage].
    pub fn set_cache_dirty_percentage<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.cache_dirty_percentage = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cache_dirty_percentage][crate::model::DescribeCacheResponse::cache_dirty_percentage].
    pub fn set_or_clear_cache_dirty_percentage<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.cache_dirty_percentage = v.map(|x| x.into());
        self
    }

    /// Sets the value of [cache_hit_percentage][crate::model::DescribeCacheResponse::cache_hit_percentage].
    pub fn set_cache_hit_percentage<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.cache_hit_percentage = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cache_hit_percentage][crate::model::DescribeCacheResponse::cache_hit_percentage].
    pub fn set_or_clear_cache_hit_percentage<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.cache_hit_percentage = v.map(|x| x.into());
        self
    }

    /// Sets the value of [cache_miss_percentage][crate::model::DescribeCacheResponse::cache_miss_percentage].
    pub fn set_cache_miss_percentage<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.cache_miss_percentage = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cache_miss_percentage][crate::model::DescribeCacheResponse::cache_miss_percentage].
    pub fn set_or_clear_cache_miss_percentage<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.cache_miss_percentage = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::describe_cached_iscsi_volumes][crate::client::StorageGateway::describe_cached_iscsi_volumes].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeCachediScsiVolumesRequest {
    /// The Amazon Resource Names (ARNs) of the volumes.
    #[serde(rename = "VolumeARNs", skip_serializing_if = "std::vec::Vec::is_empty")]
    pub volume_arns: std::vec::Vec<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeCachediScsiVolumesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [volume_arns][crate::model::DescribeCachediScsiVolumesRequest::volume_arns].
    pub fn set_volume_arns<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.volume_arns = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The response message for [StorageGateway::describe_cached_iscsi_volumes][crate::client::StorageGateway::describe_cached_iscsi_volumes].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeCachediScsiVolumesResponse {
    /// The cached volumes.
    #[serde(rename = "CachediSCSIVolumes", skip_serializing_if = "std::vec::Vec::is_empty")]
    pub cached_iscsi_volumes: std::vec::Vec<crate::model::CachediScsiVolume>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeCachediScsiVolumesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [cached_iscsi_volumes][crate::model::DescribeCachediScsiVolumesResponse::cached_iscsi_volumes].
    pub fn set_cached_iscsi_volumes<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::CachediScsiVolume>,
    {
        use std::iter::Iterator;
        self.cached_iscsi_volumes = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request message for [StorageGateway::describe_chap_credentials][crate::client::StorageGateway::describe_chap_credentials].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeChapCredentialsRequest {
    /// The Amazon Resource Name (ARN) of the iSCSI target, including the target name.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TargetARN", skip_serializing_if = "std::option::Option::is_none")]
    pub target_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeChapCredentialsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [target_arn][crate::model::DescribeChapCredentialsRequest::target_arn].
    pub fn set_target_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [target_arn][crate::model::DescribeChapCredentialsRequest::target_arn].
    pub fn set_or_clear_target_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::describe_chap_credentials][crate::client::StorageGateway::describe_chap_credentials].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeChapCredentialsResponse {
    /// The CHAP credentials of the target.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub chap_credentials: std::vec::Vec<crate::model::ChapInfo>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeChapCredentialsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [chap_credentials][crate::model::DescribeChapCredentialsResponse::chap_credentials].
    pub fn set_chap_credentials<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ChapInfo>,
    {
        use std::iter::Iterator;
        self.chap_credentials = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request message for [StorageGateway::describe_gateway_information][crate::client::StorageGateway::describe_gateway_information].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeGatewayInformationRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeGatewayInformationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DescribeGatewayInformationRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DescribeGatewayInformationRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::describe_gateway_information][crate::client::StorageGateway::describe_gateway_information].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeGatewayInformationResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The unique identifier assigned to the gateway.
    ///
    /// Length: 12 to 30 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_id: std::option::Option<std::string::String>,

    /// The name you configured for the gateway.
    ///
    /// Length: 2 to 255 characters, matching `^[ -\.0-\[\]-~]*[!-\.0-\[\]-~][ -\.0-\[\]-~]*$`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_name: std::option::Option<std::string::String>,

    /// A value that indicates the time zone of the gateway, for example `GMT-4:00`.
    ///
    /// Length: 3 to 10 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_timezone: std::option::Option<std::string::String>,

    /// A value that indicates the operating state of the gateway.
    ///
    /// Length: 2 to 25 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_state: std::option::Option<std::string::String>,

    /// The network interfaces configured on the gateway.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub gateway_network_interfaces: std::vec::Vec<crate::model::NetworkInterface>,

    /// The type of the gateway, for example `STORED`, `CACHED`, `VTL` or `FILE_S3`.
    ///
    /// Length: 2 to 20 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_type: std::option::Option<std::string::String>,

    /// The date on which an update to the gateway is available, in the gateway's time zone.
    ///
    /// Length: 1 to 25 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_update_availability_date: std::option::Option<std::string::String>,

    /// The date on which the last software update was applied to the gateway.
    ///
    /// Length: 1 to 25 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_software_update: std::option::Option<std::string::String>,

    /// The ID of the Amazon EC2 instance used to launch the gateway.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ec2_instance_id: std::option::Option<std::string::String>,

    /// The region where the Amazon EC2 instance is located.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ec2_instance_region: std::option::Option<std::string::String>,

    /// A list of up to 50 tags assigned to the resource.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tags: std::vec::Vec<crate::model::Tag>,

    /// The configuration settings for the virtual private cloud (VPC) endpoint of the gateway.
    #[serde(rename = "VPCEndpoint", skip_serializing_if = "std::option::Option::is_none")]
    pub vpc_endpoint: std::option::Option<std::string::String>,

    /// The ARN of the CloudWatch log group used to monitor and log events in the gateway.
    ///
    /// At most 562 characters.
    #[serde(rename = "CloudWatchLogGroupARN", skip_serializing_if = "std::option::Option::is_none")]
    pub cloud_watch_log_group_arn: std::option::Option<std::string::String>,

    /// The type of hypervisor environment used by the host.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub host_environment: std::option::Option<crate::model::HostEnvironment>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeGatewayInformationResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DescribeGatewayInformationResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DescribeGatewayInformationResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_id][crate::model::DescribeGatewayInformationResponse::gateway_id].
    pub fn set_gateway_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_id][crate::model::DescribeGatewayInformationResponse::gateway_id].
    pub fn set_or_clear_gateway_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_name][crate::model::DescribeGatewayInformationResponse::gateway_name].
    pub fn set_gateway_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_name][crate::model::DescribeGatewayInformationResponse::gateway_name].
    pub fn set_or_clear_gateway_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_timezone][crate::model::DescribeGatewayInformationResponse::gateway_timezone].
    pub fn set_gateway_timezone<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_timezone = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_timezone][crate::model::DescribeGatewayInformationResponse::gateway_timezone].
    pub fn set_or_clear_gateway_timezone<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_timezone = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_state][crate::model::DescribeGatewayInformationResponse::gateway_state].
    pub fn set_gateway_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_state][crate::model::DescribeGatewayInformationResponse::gateway_state].
    pub fn set_or_clear_gateway_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_state = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_network_interfaces][crate::model::DescribeGatewayInformationResponse::gateway_network_interfaces].
    pub fn set_gateway_network_interfaces<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::NetworkInterface>,
    {
        use std::iter::Iterator;
        self.gateway_network_interfaces = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [gateway_type][crate::model::DescribeGatewayInformationResponse::gateway_type].
    pub fn set_gateway_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_type][crate::model::DescribeGatewayInformationResponse::gateway_type].
    pub fn set_or_clear_gateway_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_update_availability_date][crate::model::DescribeGatewayInformationResponse::next_update_availability_date].
    pub fn set_next_update_availability_date<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_update_availability_date = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_update_availability_date][crate::model::DescribeGatewayInformationResponse::next_update_availability_date].
    pub fn set_or_clear_next_update_availability_date<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_update_availability_date = v.map(|x| x.into());
        self
    }

    /// Sets the value of [last_software_update][crate::model::DescribeGatewayInformationResponse::last_software_update].
    pub fn set_last_software_update<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.last_software_update = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [last_software_update][crate::model::DescribeGatewayInformationResponse::last_software_update].
    pub fn set_or_clear_last_software_update<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.last_software_update = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ec2_instance_id][crate::model::DescribeGatewayInformationResponse::ec2_instance_id].
    pub fn set_ec2_instance_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ec2_instance_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ec2_instance_id][crate::model::DescribeGatewayInformationResponse::ec2_instance_id].
    pub fn set_or_clear_ec2_instance_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ec2_instance_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ec2_instance_region][crate::model::DescribeGatewayInformationResponse::ec2_instance_region].
    pub fn set_ec2_instance_region<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ec2_instance_region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ec2_instance_region][crate::model::DescribeGatewayInformationResponse::ec2_instance_region].
    pub fn set_or_clear_ec2_instance_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ec2_instance_region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tags][crate::model::DescribeGatewayInformationResponse::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        use std::iter::Iterator;
        self.tags = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [vpc_endpoint][crate::model::DescribeGatewayInformationResponse::vpc_endpoint].
    pub fn set_vpc_endpoint<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vpc_endpoint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vpc_endpoint][crate::model::DescribeGatewayInformationResponse::vpc_endpoint].
    pub fn set_or_clear_vpc_endpoint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vpc_endpoint = v.map(|x| x.into());
        self
    }

    /// Sets the value of [cloud_watch_log_group_arn][crate::model::DescribeGatewayInformationResponse::cloud_watch_log_group_arn].
    pub fn set_cloud_watch_log_group_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.cloud_watch_log_group_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cloud_watch_log_group_arn][crate::model::DescribeGatewayInformationResponse::cloud_watch_log_group_arn].
    pub fn set_or_clear_cloud_watch_log_group_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.cloud_watch_log_group_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [host_environment][crate::model::DescribeGatewayInformationResponse::host_environment].
    pub fn set_host_environment<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::HostEnvironment>,
    {
        self.host_environment = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [host_environment][crate::model::DescribeGatewayInformationResponse::host_environment].
    pub fn set_or_clear_host_environment<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::HostEnvironment>,
    {
        self.host_environment = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::describe_maintenance_start_time][crate::client::StorageGateway::describe_maintenance_start_time].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeMaintenanceStartTimeRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeMaintenanceStartTimeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DescribeMaintenanceStartTimeRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DescribeMaintenanceStartTimeRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::describe_maintenance_start_time][crate::client::StorageGateway::describe_maintenance_start_time].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeMaintenanceStartTimeResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The hour component of the maintenance start time, in the gateway's time zone.
    ///
    /// Range: 0 to 23.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hour_of_day: std::option::Option<i32>,

    /// The minute component of the maintenance start time, in the gateway's time zone.
    ///
    /// Range: 0 to 59.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub minute_of_hour: std::option::Option<i32>,

    /// The day of the week for the maintenance start time, where 0 is Sunday.
    ///
    /// Range: 0 to 6.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub day_of_week: std::option::Option<i32>,

    /// The day of the month for the maintenance start time.
    ///
    /// Range: 1 to 28.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub day_of_month: std::option::Option<i32>,

    /// The time zone of the gateway, for example `GMT-4:00`.
    ///
    /// Length: 3 to 10 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timezone: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeMaintenanceStartTimeResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DescribeMaintenanceStartTimeResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DescribeMaintenanceStartTimeResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [hour_of_day][crate::model::DescribeMaintenanceStartTimeResponse::hour_of_day].
    pub fn set_hour_of_day<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.hour_of_day = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [hour_of_day][crate::model::DescribeMaintenanceStartTimeResponse::hour_of_day].
    pub fn set_or_clear_hour_of_day<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.hour_of_day = v.map(|x| x.into());
        self
    }

    /// Sets the value of [minute_of_hour][crate::model::DescribeMaintenanceStartTimeResponse::minute_of_hour].
    pub fn set_minute_of_hour<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.minute_of_hour = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [minute_of_hour][crate::model::DescribeMaintenanceStartTimeResponse::minute_of_hour].
    pub fn set_or_clear_minute_of_hour<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.minute_of_hour = v.map(|x| x.into());
        self
    }

    /// Sets the value of [day_of_week][crate::model::DescribeMaintenanceStartTimeResponse::day_of_week].
    pub fn set_day_of_week<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.day_of_week = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [day_of_week][crate::model::DescribeMaintenanceStartTimeResponse::day_of_week].
    pub fn set_or_clear_day_of_week<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.day_of_week = v.map(|x| x.into());
        self
    }

    /// Sets the value of [day_of_month][crate::model::DescribeMaintenanceStartTimeResponse::day_of_month].
    pub fn set_day_of_month<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.day_of_month = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [day_of_month][crate::model::DescribeMaintenanceStartTimeResponse::day_of_month].
    pub fn set_or_clear_day_of_month<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.day_of_month = v.map(|x| x.into());
        self
    }

    /// Sets the value of [timezone][crate::model::DescribeMaintenanceStartTimeResponse::timezone].
    pub fn set_timezone<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.timezone = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [timezone][crate::model::DescribeMaintenanceStartTimeResponse::timezone].
    pub fn set_or_clear_timezone<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.timezone = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::describe_nfs_file_shares][crate::client::StorageGateway::describe_nfs_file_shares].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeNfsFileSharesRequest {
    /// The Amazon Resource Names (ARNs) of the file shares.
    ///
    /// Between 1 and 10 entries.
    #[serde(rename = "FileShareARNList", skip_serializing_if = "std::vec::Vec::is_empty")]
    pub file_share_arn_list: std::vec::Vec<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeNfsFileSharesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [file_share_arn_list][crate::model::DescribeNfsFileSharesRequest::file_share_arn_list].
    pub fn set_file_share_arn_list<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.file_share_arn_list = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The response message for [StorageGateway::describe_nfs_file_shares][crate::client::StorageGateway::describe_nfs_file_shares].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeNfsFileSharesResponse {
    /// The NFS file shares.
    #[serde(rename = "NFSFileShareInfoList", skip_serializing_if = "std::vec::Vec::is_empty")]
    pub nfs_file_share_info_list: std::vec::Vec<crate::model::NfsFileShareInfo>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeNfsFileSharesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [nfs_file_share_info_list][crate::model::DescribeNfsFileSharesResponse::nfs_file_share_info_list].
    pub fn set_nfs_file_share_info_list<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::NfsFileShareInfo>,
    {
        use std::iter::Iterator;
        self.nfs_file_share_info_list = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request message for [StorageGateway::describe_smb_file_shares][crate::client::StorageGateway::describe_smb_file_shares].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeSmbFileSharesRequest {
    /// The Amazon Resource Names (ARNs) of the file shares.
    ///
    /// Between 1 and 10 entries.
    #[serde(rename = "FileShareARNList", skip_serializing_if = "std::vec::Vec::is_empty")]
    pub file_share_arn_list: std::vec::Vec<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeSmbFileSharesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [file_share_arn_list][crate::model::DescribeSmbFileSharesRequest::file_share_arn_list].
    pub fn set_file_share_arn_list<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.file_share_arn_list = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The response message for [StorageGateway::describe_smb_file_shares][crate::client::StorageGateway::describe_smb_file_shares].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeSmbFileSharesResponse {
    /// The SMB file shares.
    #[serde(rename = "SMBFileShareInfoList", skip_serializing_if = "std::vec::Vec::is_empty")]
    pub smb_file_share_info_list: std::vec::Vec<crate::model::SmbFileShareInfo>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeSmbFileSharesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [smb_file_share_info_list][crate::model::DescribeSmbFileSharesResponse::smb_file_share_info_list].
    pub fn set_smb_file_share_info_list<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::SmbFileShareInfo>,
    {
        use std::iter::Iterator;
        self.smb_file_share_info_list = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request message for [StorageGateway::describe_smb_settings][crate::client::StorageGateway::describe_smb_settings].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeSmbSettingsRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeSmbSettingsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DescribeSmbSettingsRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DescribeSmbSettingsRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::describe_smb_settings][crate::client::StorageGateway::describe_smb_settings].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeSmbSettingsResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The name of the Active Directory domain.
    ///
    /// Length: 1 to 1024 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub domain_name: std::option::Option<std::string::String>,

    /// The status of the gateway in the Active Directory domain.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub active_directory_status: std::option::Option<crate::model::ActiveDirectoryStatus>,

    /// Whether a password is set for the SMB guest user `smbguest`.
    #[serde(rename = "SMBGuestPasswordSet", skip_serializing_if = "std::option::Option::is_none")]
    pub smb_guest_password_set: std::option::Option<bool>,

    /// The SMB security strategy of the gateway.
    #[serde(rename = "SMBSecurityStrategy", skip_serializing_if = "std::option::Option::is_none")]
    pub smb_security_strategy: std::option::Option<crate::model::SmbSecurityStrategy>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeSmbSettingsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DescribeSmbSettingsResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DescribeSmbSettingsResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [domain_name][crate::model::DescribeSmbSettingsResponse::domain_name].
    pub fn set_domain_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.domain_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [domain_name][crate::model::DescribeSmbSettingsResponse::domain_name].
    pub fn set_or_clear_domain_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.domain_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [active_directory_status][crate::model::DescribeSmbSettingsResponse::active_directory_status].
    pub fn set_active_directory_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ActiveDirectoryStatus>,
    {
        self.active_directory_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [active_directory_status][crate::model::DescribeSmbSettingsResponse::active_directory_status].
    pub fn set_or_clear_active_directory_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ActiveDirectoryStatus>,
    {
        self.active_directory_status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [smb_guest_password_set][crate::model::DescribeSmbSettingsResponse::smb_guest_password_set].
    pub fn set_smb_guest_password_set<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.smb_guest_password_set = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [smb_guest_password_set][crate::model::DescribeSmbSettingsResponse::smb_guest_password_set].
    pub fn set_or_clear_smb_guest_password_set<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.smb_guest_password_set = v.map(|x| x.into());
        self
    }

    /// Sets the value of [smb_security_strategy][crate::model::DescribeSmbSettingsResponse::smb_security_strategy].
    pub fn set_smb_security_strategy<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::SmbSecurityStrategy>,
    {
        self.smb_security_strategy = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [smb_security_strategy][crate::model::DescribeSmbSettingsResponse::smb_security_strategy].
    pub fn set_or_clear_smb_security_strategy<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SmbSecurityStrategy>,
    {
        self.smb_security_strategy = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::describe_snapshot_schedule][crate::client::StorageGateway::describe_snapshot_schedule].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeSnapshotScheduleRequest {
    /// The Amazon Resource Name (ARN) of the storage volume.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "VolumeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub volume_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeSnapshotScheduleRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [volume_arn][crate::model::DescribeSnapshotScheduleRequest::volume_arn].
    pub fn set_volume_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_arn][crate::model::DescribeSnapshotScheduleRequest::volume_arn].
    pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::describe_snapshot_schedule][crate::client::StorageGateway::describe_snapshot_schedule].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeSnapshotScheduleResponse {
    /// The Amazon Resource Name (ARN) of the storage volume.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "VolumeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub volume_arn: std::option::Option<std::string::String>,

    /// The hour of the day at which the snapshot schedule begins.
    ///
    /// Range: 0 to 23.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub start_at: std::option::Option<i32>,

    /// The frequency of snapshots, in hours.
    ///
    /// One of 1, 2, 4, 8, 12 or 24.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub recurrence_in_hours: std::option::Option<i32>,

    /// A description of the snapshot schedule.
    ///
    /// Length: 1 to 255 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    /// The time zone of the gateway, for example `GMT-4:00`.
    ///
    /// Length: 3 to 10 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timezone: std::option::Option<std::string::String>,

    /// A list of up to 50 tags assigned to the resource.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tags: std::vec::Vec<crate::model::Tag>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeSnapshotScheduleResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [volume_arn][crate::model::DescribeSnapshotScheduleResponse::volume_arn].
    pub fn set_volume_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_arn][crate::model::DescribeSnapshotScheduleResponse::volume_arn].
    pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [start_at][crate::model::DescribeSnapshotScheduleResponse::start_at].
    pub fn set_start_at<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.start_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start_at][crate::model::DescribeSnapshotScheduleResponse::start_at].
    pub fn set_or_clear_start_at<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.start_at = v.map(|x| x.into());
        self
    }

    /// Sets the value of [recurrence_in_hours][crate::model::DescribeSnapshotScheduleResponse::recurrence_in_hours].
    pub fn set_recurrence_in_hours<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.recurrence_in_hours = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [recurrence_in_hours][crate::model::DescribeSnapshotScheduleResponse::recurrence_in_hours].
    pub fn set_or_clear_recurrence_in_hours<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.recurrence_in_hours = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::DescribeSnapshotScheduleResponse::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::DescribeSnapshotScheduleResponse::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [timezone][crate::model::DescribeSnapshotScheduleResponse::timezone].
    pub fn set_timezone<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.timezone = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [timezone][crate::model::DescribeSnapshotScheduleResponse::timezone].
    pub fn set_or_clear_timezone<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.timezone = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tags][crate::model::DescribeSnapshotScheduleResponse::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        use std::iter::Iterator;
        self.tags = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request message for [StorageGateway::describe_stored_iscsi_volumes][crate::client::StorageGateway::describe_stored_iscsi_volumes].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeStorediScsiVolumesRequest {
    /// The Amazon Resource Names (ARNs) of the volumes.
    #[serde(rename = "VolumeARNs", skip_serializing_if = "std::vec::Vec::is_empty")]
    pub volume_arns: std::vec::Vec<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeStorediScsiVolumesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [volume_arns][crate::model::DescribeStorediScsiVolumesRequest::volume_arns].
    pub fn set_volume_arns<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.volume_arns = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The response message for [StorageGateway::describe_stored_iscsi_volumes][crate::client::StorageGateway::describe_stored_iscsi_volumes].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeStorediScsiVolumesResponse {
    /// The stored volumes.
    #[serde(rename = "StorediSCSIVolumes", skip_serializing_if = "std::vec::Vec::is_empty")]
    pub stored_iscsi_volumes: std::vec::Vec<crate::model::StorediScsiVolume>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeStorediScsiVolumesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [stored_iscsi_volumes][crate::model::DescribeStorediScsiVolumesResponse::stored_iscsi_volumes].
    pub fn set_stored_iscsi_volumes<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::StorediScsiVolume>,
    {
        use std::iter::Iterator;
        self.stored_iscsi_volumes = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request message for [StorageGateway::describe_tape_archives][crate::client::StorageGateway::describe_tape_archives].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeTapeArchivesRequest {
    /// The Amazon Resource Names (ARNs) of the virtual tapes.
    #[serde(rename = "TapeARNs", skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tape_arns: std::vec::Vec<std::string::String>,

    /// An opaque string that indicates the position at which to begin the listing.
    ///
    /// Length: 1 to 1000 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub marker: std::option::Option<std::string::String>,

    /// The maximum number of results to return.
    ///
    /// Minimum: 1.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeTapeArchivesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [tape_arns][crate::model::DescribeTapeArchivesRequest::tape_arns].
    pub fn set_tape_arns<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.tape_arns = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [marker][crate::model::DescribeTapeArchivesRequest::marker].
    pub fn set_marker<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [marker][crate::model::DescribeTapeArchivesRequest::marker].
    pub fn set_or_clear_marker<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::DescribeTapeArchivesRequest::limit].
    pub fn set_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::DescribeTapeArchivesRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::describe_tape_archives][crate::client::StorageGateway::describe_tape_archives].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeTapeArchivesResponse {
    /// The virtual tapes in the virtual tape shelf.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tape_archives: std::vec::Vec<crate::model::TapeArchive>,

    /// An opaque string that indicates the position at which to begin the listing.
    ///
    /// Length: 1 to 1000 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub marker: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeTapeArchivesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [tape_archives][crate::model::DescribeTapeArchivesResponse::tape_archives].
    pub fn set_tape_archives<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::TapeArchive>,
    {
        use std::iter::Iterator;
        self.tape_archives = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [marker][crate::model::DescribeTapeArchivesResponse::marker].
    pub fn set_marker<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [marker][crate::model::DescribeTapeArchivesResponse::marker].
    pub fn set_or_clear_marker<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = v.map(|x| x.into());
        self
    }
}

#[doc(hidden)]
impl gax::paginator::PageableResponse for DescribeTapeArchivesResponse {
    type PageItem = crate::model::TapeArchive;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.tape_archives
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.marker.clone().unwrap_or_default()
    }
}

/// The request message for [StorageGateway::describe_tape_recovery_points][crate::client::StorageGateway::describe_tape_recovery_points].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeTapeRecoveryPointsRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// An opaque string that indicates the position at which to begin the listing.
    ///
    /// Length: 1 to 1000 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub marker: std::option::Option<std::string::String>,

    /// The maximum number of results to return.
    ///
    /// Minimum: 1.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeTapeRecoveryPointsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DescribeTapeRecoveryPointsRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DescribeTapeRecoveryPointsRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [marker][crate::model::DescribeTapeRecoveryPointsRequest::marker].
    pub fn set_marker<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [marker][crate::model::DescribeTapeRecoveryPointsRequest::marker].
    pub fn set_or_clear_marker<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::DescribeTapeRecoveryPointsRequest::limit].
    pub fn set_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::DescribeTapeRecoveryPointsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::describe_tape_recovery_points][crate::client::StorageGateway::describe_tape_recovery_points].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeTapeRecoveryPointsResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The recovery points of the virtual tapes.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tape_recovery_point_infos: std::vec::Vec<crate::model::TapeRecoveryPointInfo>,

    /// An opaque string that indicates the position at which to begin the listing.
    ///
    /// Length: 1 to 1000 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub marker: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeTapeRecoveryPointsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DescribeTapeRecoveryPointsResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DescribeTapeRecoveryPointsResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tape_recovery_point_infos][crate::model::DescribeTapeRecoveryPointsResponse::tape_recovery_point_infos].
    pub fn set_tape_recovery_point_infos<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::TapeRecoveryPointInfo>,
    {
        use std::iter::Iterator;
        self.tape_recovery_point_infos = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [marker][crate::model::DescribeTapeRecoveryPointsResponse::marker].
    pub fn set_marker<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [marker][crate::model::DescribeTapeRecoveryPointsResponse::marker].
    pub fn set_or_clear_marker<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = v.map(|x| x.into());
        self
    }
}

#[doc(hidden)]
impl gax::paginator::PageableResponse for DescribeTapeRecoveryPointsResponse {
    type PageItem = crate::model::TapeRecoveryPointInfo;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.tape_recovery_point_infos
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.marker.clone().unwrap_or_default()
    }
}

/// The request message for [StorageGateway::describe_tapes][crate::client::StorageGateway::describe_tapes].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeTapesRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The Amazon Resource Names (ARNs) of the virtual tapes.
    #[serde(rename = "TapeARNs", skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tape_arns: std::vec::Vec<std::string::String>,

    /// An opaque string that indicates the position at which to begin the listing.
    ///
    /// Length: 1 to 1000 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub marker: std::option::Option<std::string::String>,

    /// The maximum number of results to return.
    ///
    /// Minimum: 1.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeTapesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DescribeTapesRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DescribeTapesRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tape_arns][crate::model::DescribeTapesRequest::tape_arns].
    pub fn set_tape_arns<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.tape_arns = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [marker][crate::model::DescribeTapesRequest::marker].
    pub fn set_marker<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [marker][crate::model::DescribeTapesRequest::marker].
    pub fn set_or_clear_marker<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::DescribeTapesRequest::limit].
    pub fn set_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::DescribeTapesRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::describe_tapes][crate::client::StorageGateway::describe_tapes].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeTapesResponse {
    /// The virtual tapes.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tapes: std::vec::Vec<crate::model::Tape>,

    /// An opaque string that indicates the position at which to begin the listing.
    ///
    /// Length: 1 to 1000 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub marker: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeTapesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [tapes][crate::model::DescribeTapesResponse::tapes].
    pub fn set_tapes<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tape>,
    {
        use std::iter::Iterator;
        self.tapes = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [marker][crate::model::DescribeTapesResponse::marker].
    pub fn set_marker<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [marker][crate::model::DescribeTapesResponse::marker].
    pub fn set_or_clear_marker<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = v.map(|x| x.into());
        self
    }
}

#[doc(hidden)]
impl gax::paginator::PageableResponse for DescribeTapesResponse {
    type PageItem = crate::model::Tape;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.tapes
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.marker.clone().unwrap_or_default()
    }
}

/// The request message for [StorageGateway::describe_upload_buffer][crate::client::StorageGateway::describe_upload_buffer].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeUploadBufferRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeUploadBufferRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DescribeUploadBufferRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DescribeUploadBufferRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::describe_upload_buffer][crate::client::StorageGateway::describe_upload_buffer].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeUploadBufferResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The local disk identifiers, as returned by `ListLocalDisks`.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub disk_ids: std::vec::Vec<std::string::String>,

    /// The total number of bytes used in the upload buffer.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub upload_buffer_used_in_bytes: std::option::Option<i64>,

    /// The total number of bytes allocated to the upload buffer.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub upload_buffer_allocated_in_bytes: std::option::Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeUploadBufferResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DescribeUploadBufferResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DescribeUploadBufferResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disk_ids][crate::model::DescribeUploadBufferResponse::disk_ids].
    pub fn set_disk_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.disk_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [upload_buffer_used_in_bytes][crate::model::DescribeUploadBufferResponse::upload_buffer_used_in_bytes].
    pub fn set_upload_buffer_used_in_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.upload_buffer_used_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [upload_buffer_used_in_bytes][crate::model::DescribeUploadBufferResponse::upload_buffer_used_in_bytes].
    pub fn set_or_clear_upload_buffer_used_in_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.upload_buffer_used_in_bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [upload_buffer_allocated_in_bytes][crate::model::DescribeUploadBufferResponse::upload_buffer_allocated_in_bytes].
    pub fn set_upload_buffer_allocated_in_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.upload_buffer_allocated_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [upload_buffer_allocated_in_bytes][crate::model::DescribeUploadBufferResponse::upload_buffer_allocated_in_bytes].
    pub fn set_or_clear_upload_buffer_allocated_in_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.upload_buffer_allocated_in_bytes = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::describe_vtl_devices][crate::client::StorageGateway::describe_vtl_devices].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeVtlDevicesRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The Amazon Resource Names (ARNs) of the VTL devices.
    #[serde(rename = "VTLDeviceARNs", skip_serializing_if = "std::vec::Vec::is_empty")]
    pub vtl_device_arns: std::vec::Vec<std::string::String>,

    /// An opaque string that indicates the position at which to begin the listing.
    ///
    /// Length: 1 to 1000 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub marker: std::option::Option<std::string::String>,

    /// The maximum number of results to return.
    ///
    /// Minimum: 1.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeVtlDevicesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DescribeVtlDevicesRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DescribeVtlDevicesRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [vtl_device_arns][crate::model::DescribeVtlDevicesRequest::vtl_device_arns].
    pub fn set_vtl_device_arns<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.vtl_device_arns = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [marker][crate::model::DescribeVtlDevicesRequest::marker].
    pub fn set_marker<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [marker][crate::model::DescribeVtlDevicesRequest::marker].
    pub fn set_or_clear_marker<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::DescribeVtlDevicesRequest::limit].
    pub fn set_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::DescribeVtlDevicesRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::describe_vtl_devices][crate::client::StorageGateway::describe_vtl_devices].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeVtlDevicesResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The VTL devices.
    #[serde(rename = "VTLDevices", skip_serializing_if = "std::vec::Vec::is_empty")]
    pub vtl_devices: std::vec::Vec<crate::model::VtlDevice>,

    /// An opaque string that indicates the position at which to begin the listing.
    ///
    /// Length: 1 to 1000 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub marker: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeVtlDevicesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DescribeVtlDevicesResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DescribeVtlDevicesResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [vtl_devices][crate::model::DescribeVtlDevicesResponse::vtl_devices].
    pub fn set_vtl_devices<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::VtlDevice>,
    {
        use std::iter::Iterator;
        self.vtl_devices = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [marker][crate::model::DescribeVtlDevicesResponse::marker].
    pub fn set_marker<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [marker][crate::model::DescribeVtlDevicesResponse::marker].
    pub fn set_or_clear_marker<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = v.map(|x| x.into());
        self
    }
}

#[doc(hidden)]
impl gax::paginator::PageableResponse for DescribeVtlDevicesResponse {
    type PageItem = crate::model::VtlDevice;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.vtl_devices
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.marker.clone().unwrap_or_default()
    }
}

/// The request message for [StorageGateway::describe_working_storage][crate::client::StorageGateway::describe_working_storage].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeWorkingStorageRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeWorkingStorageRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DescribeWorkingStorageRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DescribeWorkingStorageRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::describe_working_storage][crate::client::StorageGateway::describe_working_storage].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeWorkingStorageResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The local disk identifiers, as returned by `ListLocalDisks`.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub disk_ids: std::vec::Vec<std::string::String>,

    /// The total number of bytes used in the working storage.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub working_storage_used_in_bytes: std::option::Option<i64>,

    /// The total number of bytes allocated to the working storage.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub working_storage_allocated_in_bytes: std::option::Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DescribeWorkingStorageResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DescribeWorkingStorageResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DescribeWorkingStorageResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disk_ids][crate::model::DescribeWorkingStorageResponse::disk_ids].
    pub fn set_disk_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.disk_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [working_storage_used_in_bytes][crate::model::DescribeWorkingStorageResponse::working_storage_used_in_bytes].
    pub fn set_working_storage_used_in_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.working_storage_used_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [working_storage_used_in_bytes][crate::model::DescribeWorkingStorageResponse::working_storage_used_in_bytes].
    pub fn set_or_clear_working_storage_used_in_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.working_storage_used_in_bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [working_storage_allocated_in_bytes][crate::model::DescribeWorkingStorageResponse::working_storage_allocated_in_bytes].
    pub fn set_working_storage_allocated_in_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.working_storage_allocated_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [working_storage_allocated_in_bytes][crate::model::DescribeWorkingStorageResponse::working_storage_allocated_in_bytes].
    pub fn set_or_clear_working_storage_allocated_in_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.working_storage_allocated_in_bytes = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::detach_volume][crate::client::StorageGateway::detach_volume].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DetachVolumeRequest {
    /// The Amazon Resource Name (ARN) of the storage volume.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "VolumeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub volume_arn: std::option::Option<std::string::String>,

    /// Set to `true` to detach the volume even if it is in use.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub force_detach: std::option::Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DetachVolumeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [volume_arn][crate::model::DetachVolumeRequest::volume_arn].
    pub fn set_volume_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_arn][crate::model::DetachVolumeRequest::volume_arn].
    pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [force_detach][crate::model::DetachVolumeRequest::force_detach].
    pub fn set_force_detach<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.force_detach = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [force_detach][crate::model::DetachVolumeRequest::force_detach].
    pub fn set_or_clear_force_detach<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.force_detach = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::detach_volume][crate::client::StorageGateway::detach_volume].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DetachVolumeResponse {
    /// The Amazon Resource Name (ARN) of the storage volume.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "VolumeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub volume_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DetachVolumeResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [volume_arn][crate::model::DetachVolumeResponse::volume_arn].
    pub fn set_volume_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_arn][crate::model::DetachVolumeResponse::volume_arn].
    pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::disable_gateway][crate::client::StorageGateway::disable_gateway].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DisableGatewayRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DisableGatewayRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DisableGatewayRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DisableGatewayRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::disable_gateway][crate::client::StorageGateway::disable_gateway].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DisableGatewayResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DisableGatewayResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::DisableGatewayResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::DisableGatewayResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::join_domain][crate::client::StorageGateway::join_domain].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct JoinDomainRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The name of the Active Directory domain.
    ///
    /// Length: 1 to 1024 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub domain_name: std::option::Option<std::string::String>,

    /// The organizational unit (OU) in the Active Directory domain for the gateway.
    ///
    /// Length: 1 to 1024 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub organizational_unit: std::option::Option<std::string::String>,

    /// The host names of the domain controllers, optionally with a port.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub domain_controllers: std::vec::Vec<std::string::String>,

    /// The time, in seconds, allowed for the join domain operation.
    ///
    /// Range: 0 to 3600.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timeout_in_seconds: std::option::Option<i32>,

    /// A domain account with permissions to join the gateway to the domain.
    ///
    /// Length: 1 to 1024 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub user_name: std::option::Option<std::string::String>,

    /// The password for the account.
    ///
    /// Length: 1 to 1024 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub password: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl JoinDomainRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::JoinDomainRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::JoinDomainRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [domain_name][crate::model::JoinDomainRequest::domain_name].
    pub fn set_domain_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.domain_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [domain_name][crate::model::JoinDomainRequest::domain_name].
    pub fn set_or_clear_domain_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.domain_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [organizational_unit][crate::model::JoinDomainRequest::organizational_unit].
    pub fn set_organizational_unit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.organizational_unit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [organizational_unit][crate::model::JoinDomainRequest::organizational_unit].
    pub fn set_or_clear_organizational_unit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.organizational_unit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [domain_controllers][crate::model::JoinDomainRequest::domain_controllers].
    pub fn set_domain_controllers<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.domain_controllers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [timeout_in_seconds][crate::model::JoinDomainRequest::timeout_in_seconds].
    pub fn set_timeout_in_seconds<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.timeout_in_seconds = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [timeout_in_seconds][crate::model::JoinDomainRequest::timeout_in_seconds].
    pub fn set_or_clear_timeout_in_seconds<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.timeout_in_seconds = v.map(|x| x.into());
        self
    }

    /// Sets the value of [user_name][crate::model::JoinDomainRequest::user_name].
    pub fn set_user_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.user_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [user_name][crate::model::JoinDomainRequest::user_name].
    pub fn set_or_clear_user_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.user_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [password][crate::model::JoinDomainRequest::password].
    pub fn set_password<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.password = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [password][crate::model::JoinDomainRequest::password].
    pub fn set_or_clear_password<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.password = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::join_domain][crate::client::StorageGateway::join_domain].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct JoinDomainResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The status of the gateway in the Active Directory domain.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub active_directory_status: std::option::Option<crate::model::ActiveDirectoryStatus>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl JoinDomainResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::JoinDomainResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::JoinDomainResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [active_directory_status][crate::model::JoinDomainResponse::active_directory_status].
    pub fn set_active_directory_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ActiveDirectoryStatus>,
    {
        self.active_directory_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [active_directory_status][crate::model::JoinDomainResponse::active_directory_status].
    pub fn set_or_clear_active_directory_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ActiveDirectoryStatus>,
    {
        self.active_directory_status = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::list_automatic_tape_creation_policies][crate::client::StorageGateway::list_automatic_tape_creation_policies].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListAutomaticTapeCreationPoliciesRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListAutomaticTapeCreationPoliciesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::ListAutomaticTapeCreationPoliciesRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::ListAutomaticTapeCreationPoliciesRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::list_automatic_tape_creation_policies][crate::client::StorageGateway::list_automatic_tape_creation_policies].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListAutomaticTapeCreationPoliciesResponse {
    /// The automatic tape creation policies of the gateways.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub automatic_tape_creation_policy_infos: std::vec::Vec<crate::model::AutomaticTapeCreationPolicyInfo>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListAutomaticTapeCreationPoliciesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [automatic_tape_creation_policy_infos][crate::model::ListAutomaticTapeCreationPoliciesResponse::automatic_tape_creation_policy_infos].
    pub fn set_automatic_tape_creation_policy_infos<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::AutomaticTapeCreationPolicyInfo>,
    {
        use std::iter::Iterator;
        self.automatic_tape_creation_policy_infos = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request message for [StorageGateway::list_file_shares][crate::client::StorageGateway::list_file_shares].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListFileSharesRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The maximum number of results to return.
    ///
    /// Minimum: 1.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i32>,

    /// An opaque string that indicates the position at which to begin the listing.
    ///
    /// Length: 1 to 1000 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub marker: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListFileSharesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::ListFileSharesRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::ListFileSharesRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListFileSharesRequest::limit].
    pub fn set_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListFileSharesRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [marker][crate::model::ListFileSharesRequest::marker].
    pub fn set_marker<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [marker][crate::model::ListFileSharesRequest::marker].
    pub fn set_or_clear_marker<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::list_file_shares][crate::client::StorageGateway::list_file_shares].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListFileSharesResponse {
    /// An opaque string that indicates the position at which to begin the listing.
    ///
    /// Length: 1 to 1000 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub marker: std::option::Option<std::string::String>,

    /// The cursor to use in the next request, empty when there are no more results.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_marker: std::option::Option<std::string::String>,

    /// The file shares.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub file_share_info_list: std::vec::Vec<crate::model::FileShareInfo>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListFileSharesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [marker][crate::model::ListFileSharesResponse::marker].
    pub fn set_marker<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [marker][crate::model::ListFileSharesResponse::marker].
    pub fn set_or_clear_marker<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next_marker][crate::model::ListFileSharesResponse::next_marker].
    pub fn set_next_marker<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_marker = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next_marker][crate::model::ListFileSharesResponse::next_marker].
    pub fn set_or_clear_next_marker<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_marker = v.map(|x| x.into());
        self
    }

    /// Sets the value of [file_share_info_list][crate::model::ListFileSharesResponse::file_share_info_list].
    pub fn set_file_share_info_list<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::FileShareInfo>,
    {
        use std::iter::Iterator;
        self.file_share_info_list = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

#[doc(hidden)]
impl gax::paginator::PageableResponse for ListFileSharesResponse {
    type PageItem = crate::model::FileShareInfo;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.file_share_info_list
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_marker.clone().unwrap_or_default()
    }
}

/// The request message for [StorageGateway::list_gateways][crate::client::StorageGateway::list_gateways].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListGatewaysRequest {
    /// An opaque string that indicates the position at which to begin the listing.
    ///
    /// Length: 1 to 1000 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub marker: std::option::Option<std::string::String>,

    /// The maximum number of results to return.
    ///
    /// Minimum: 1.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListGatewaysRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [marker][crate::model::ListGatewaysRequest::marker].
    pub fn set_marker<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [marker][crate::model::ListGatewaysRequest::marker].
    pub fn set_or_clear_marker<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListGatewaysRequest::limit].
    pub fn set_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListGatewaysRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::list_gateways][crate::client::StorageGateway::list_gateways].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListGatewaysResponse {
    /// The gateways.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub gateways: std::vec::Vec<crate::model::GatewayInfo>,

    /// An opaque string that indicates the position at which to begin the listing.
    ///
    /// Length: 1 to 1000 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub marker: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListGatewaysResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateways][crate::model::ListGatewaysResponse::gateways].
    pub fn set_gateways<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::GatewayInfo>,
    {
        use std::iter::Iterator;
        self.gateways = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [marker][crate::model::ListGatewaysResponse::marker].
    pub fn set_marker<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [marker][crate::model::ListGatewaysResponse::marker].
    pub fn set_or_clear_marker<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = v.map(|x| x.into());
        self
    }
}

#[doc(hidden)]
impl gax::paginator::PageableResponse for ListGatewaysResponse {
    type PageItem = crate::model::GatewayInfo;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.gateways
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.marker.clone().unwrap_or_default()
    }
}

/// The request message for [StorageGateway::list_local_disks][crate::client::StorageGateway::list_local_disks].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListLocalDisksRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListLocalDisksRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::ListLocalDisksRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::ListLocalDisksRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::list_local_disks][crate::client::StorageGateway::list_local_disks].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListLocalDisksResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The local disks of the gateway.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub disks: std::vec::Vec<crate::model::Disk>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListLocalDisksResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::ListLocalDisksResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::ListLocalDisksResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disks][crate::model::ListLocalDisksResponse::disks].
    pub fn set_disks<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Disk>,
    {
        use std::iter::Iterator;
        self.disks = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request message for [StorageGateway::list_tags_for_resource][crate::client::StorageGateway::list_tags_for_resource].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListTagsForResourceRequest {
    /// The Amazon Resource Name (ARN) of the tagged resource.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "ResourceARN", skip_serializing_if = "std::option::Option::is_none")]
    pub resource_arn: std::option::Option<std::string::String>,

    /// An opaque string that indicates the position at which to begin the listing.
    ///
    /// Length: 1 to 1000 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub marker: std::option::Option<std::string::String>,

    /// The maximum number of results to return.
    ///
    /// Minimum: 1.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListTagsForResourceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resource_arn][crate::model::ListTagsForResourceRequest::resource_arn].
    pub fn set_resource_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_arn][crate::model::ListTagsForResourceRequest::resource_arn].
    pub fn set_or_clear_resource_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [marker][crate::model::ListTagsForResourceRequest::marker].
    pub fn set_marker<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [marker][crate::model::ListTagsForResourceRequest::marker].
    pub fn set_or_clear_marker<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListTagsForResourceRequest::limit].
    pub fn set_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListTagsForResourceRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::list_tags_for_resource][crate::client::StorageGateway::list_tags_for_resource].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListTagsForResourceResponse {
    /// The Amazon Resource Name (ARN) of the tagged resource.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "ResourceARN", skip_serializing_if = "std::option::Option::is_none")]
    pub resource_arn: std::option::Option<std::string::String>,

    /// An opaque string that indicates the position at which to begin the listing.
    ///
    /// Length: 1 to 1000 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub marker: std::option::Option<std::string::String>,

    /// A list of up to 50 tags assigned to the resource.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tags: std::vec::Vec<crate::model::Tag>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListTagsForResourceResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resource_arn][crate::model::ListTagsForResourceResponse::resource_arn].
    pub fn set_resource_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_arn][crate::model::ListTagsForResourceResponse::resource_arn].
    pub fn set_or_clear_resource_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [marker][crate::model::ListTagsForResourceResponse::marker].
    pub fn set_marker<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [marker][crate::model::ListTagsForResourceResponse::marker].
    pub fn set_or_clear_marker<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tags][crate::model::ListTagsForResourceResponse::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        use std::iter::Iterator;
        self.tags = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

#[doc(hidden)]
impl gax::paginator::PageableResponse for ListTagsForResourceResponse {
    type PageItem = crate::model::Tag;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.tags
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.marker.clone().unwrap_or_default()
    }
}

/// The request message for [StorageGateway::list_tapes][crate::client::StorageGateway::list_tapes].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListTapesRequest {
    /// The Amazon Resource Names (ARNs) of the virtual tapes.
    #[serde(rename = "TapeARNs", skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tape_arns: std::vec::Vec<std::string::String>,

    /// An opaque string that indicates the position at which to begin the listing.
    ///
    /// Length: 1 to 1000 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub marker: std::option::Option<std::string::String>,

    /// The maximum number of results to return.
    ///
    /// Minimum: 1.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListTapesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [tape_arns][crate::model::ListTapesRequest::tape_arns].
    pub fn set_tape_arns<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.tape_arns = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [marker][crate::model::ListTapesRequest::marker].
    pub fn set_marker<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [marker][crate::model::ListTapesRequest::marker].
    pub fn set_or_clear_marker<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListTapesRequest::limit].
    pub fn set_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListTapesRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::list_tapes][crate::client::StorageGateway::list_tapes].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListTapesResponse {
    /// The virtual tapes.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tape_infos: std::vec::Vec<crate::model::TapeInfo>,

    /// An opaque string that indicates the position at which to begin the listing.
    ///
    /// Length: 1 to 1000 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub marker: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListTapesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [tape_infos][crate::model::ListTapesResponse::tape_infos].
    pub fn set_tape_infos<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::TapeInfo>,
    {
        use std::iter::Iterator;
        self.tape_infos = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [marker][crate::model::ListTapesResponse::marker].
    pub fn set_marker<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [marker][crate::model::ListTapesResponse::marker].
    pub fn set_or_clear_marker<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = v.map(|x| x.into());
        self
    }
}

#[doc(hidden)]
impl gax::paginator::PageableResponse for ListTapesResponse {
    type PageItem = crate::model::TapeInfo;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.tape_infos
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.marker.clone().unwrap_or_default()
    }
}

/// The request message for [StorageGateway::list_volume_initiators][crate::client::StorageGateway::list_volume_initiators].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListVolumeInitiatorsRequest {
    /// The Amazon Resource Name (ARN) of the storage volume.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "VolumeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub volume_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListVolumeInitiatorsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [volume_arn][crate::model::ListVolumeInitiatorsRequest::volume_arn].
    pub fn set_volume_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_arn][crate::model::ListVolumeInitiatorsRequest::volume_arn].
    pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::list_volume_initiators][crate::client::StorageGateway::list_volume_initiators].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListVolumeInitiatorsResponse {
    /// The hosts and ports that are connected to the volume.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub initiators: std::vec::Vec<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListVolumeInitiatorsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [initiators][crate::model::ListVolumeInitiatorsResponse::initiators].
    pub fn set_initiators<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.initiators = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request message for [StorageGateway::list_volume_recovery_points][crate::client::StorageGateway::list_volume_recovery_points].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListVolumeRecoveryPointsRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListVolumeRecoveryPointsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::ListVolumeRecoveryPointsRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::ListVolumeRecoveryPointsRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::list_volume_recovery_points][crate::client::StorageGateway::list_volume_recovery_points].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListVolumeRecoveryPointsResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The recovery points of the volumes.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub volume_recovery_point_infos: std::vec::Vec<crate::model::VolumeRecoveryPointInfo>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListVolumeRecoveryPointsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::ListVolumeRecoveryPointsResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::ListVolumeRecoveryPointsResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_recovery_point_infos][crate::model::ListVolumeRecoveryPointsResponse::volume_recovery_point_infos].
    pub fn set_volume_recovery_point_infos<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::VolumeRecoveryPointInfo>,
    {
        use std::iter::Iterator;
        self.volume_recovery_point_infos = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request message for [StorageGateway::list_volumes][crate::client::StorageGateway::list_volumes].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListVolumesRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// An opaque string that indicates the position at which to begin the listing.
    ///
    /// Length: 1 to 1000 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub marker: std::option::Option<std::string::String>,

    /// The maximum number of results to return.
    ///
    /// Minimum: 1.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListVolumesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::ListVolumesRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::ListVolumesRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [marker][crate::model::ListVolumesRequest::marker].
    pub fn set_marker<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [marker][crate::model::ListVolumesRequest::marker].
    pub fn set_or_clear_marker<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ListVolumesRequest::limit].
    pub fn set_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListVolumesRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::list_volumes][crate::client::StorageGateway::list_volumes].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListVolumesResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// An opaque string that indicates the position at which to begin the listing.
    ///
    /// Length: 1 to 1000 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub marker: std::option::Option<std::string::String>,

    /// The storage volumes.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub volume_infos: std::vec::Vec<crate::model::VolumeInfo>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListVolumesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::ListVolumesResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::ListVolumesResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [marker][crate::model::ListVolumesResponse::marker].
    pub fn set_marker<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [marker][crate::model::ListVolumesResponse::marker].
    pub fn set_or_clear_marker<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.marker = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_infos][crate::model::ListVolumesResponse::volume_infos].
    pub fn set_volume_infos<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::VolumeInfo>,
    {
        use std::iter::Iterator;
        self.volume_infos = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

#[doc(hidden)]
impl gax::paginator::PageableResponse for ListVolumesResponse {
    type PageItem = crate::model::VolumeInfo;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.volume_infos
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.marker.clone().unwrap_or_default()
    }
}

/// The request message for [StorageGateway::notify_when_uploaded][crate::client::StorageGateway::notify_when_uploaded].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct NotifyWhenUploadedRequest {
    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "FileShareARN", skip_serializing_if = "std::option::Option::is_none")]
    pub file_share_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl NotifyWhenUploadedRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [file_share_arn][crate::model::NotifyWhenUploadedRequest::file_share_arn].
    pub fn set_file_share_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [file_share_arn][crate::model::NotifyWhenUploadedRequest::file_share_arn].
    pub fn set_or_clear_file_share_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::notify_when_uploaded][crate::client::StorageGateway::notify_when_uploaded].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct NotifyWhenUploadedResponse {
    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "FileShareARN", skip_serializing_if = "std::option::Option::is_none")]
    pub file_share_arn: std::option::Option<std::string::String>,

    /// The randomly generated ID of the notification sent when the operation completes.
    ///
    /// Length: 1 to 2048 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notification_id: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl NotifyWhenUploadedResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [file_share_arn][crate::model::NotifyWhenUploadedResponse::file_share_arn].
    pub fn set_file_share_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [file_share_arn][crate::model::NotifyWhenUploadedResponse::file_share_arn].
    pub fn set_or_clear_file_share_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [notification_id][crate::model::NotifyWhenUploadedResponse::notification_id].
    pub fn set_notification_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.notification_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [notification_id][crate::model::NotifyWhenUploadedResponse::notification_id].
    pub fn set_or_clear_notification_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.notification_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::refresh_cache][crate::client::StorageGateway::refresh_cache].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct RefreshCacheRequest {
    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "FileShareARN", skip_serializing_if = "std::option::Option::is_none")]
    pub file_share_arn: std::option::Option<std::string::String>,

    /// The folders to refresh in the cache, `/` refreshes the root of the share.
    ///
    /// Between 1 and 50 entries.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub folder_list: std::vec::Vec<std::string::String>,

    /// Set to `true` to refresh the folders recursively.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub recursive: std::option::Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl RefreshCacheRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [file_share_arn][crate::model::RefreshCacheRequest::file_share_arn].
    pub fn set_file_share_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [file_share_arn][crate::model::RefreshCacheRequest::file_share_arn].
    pub fn set_or_clear_file_share_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [folder_list][crate::model::RefreshCacheRequest::folder_list].
    pub fn set_folder_list<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.folder_list = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [recursive][crate::model::RefreshCacheRequest::recursive].
    pub fn set_recursive<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.recursive = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [recursive][crate::model::RefreshCacheRequest::recursive].
    pub fn set_or_clear_recursive<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.recursive = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::refresh_cache][crate::client::StorageGateway::refresh_cache].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct RefreshCacheResponse {
    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "FileShareARN", skip_serializing_if = "std::option::Option::is_none")]
    pub file_share_arn: std::option::Option<std::string::String>,

    /// The randomly generated ID of the notification sent when the operation completes.
    ///
    /// Length: 1 to 2048 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notification_id: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl RefreshCacheResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [file_share_arn][crate::model::RefreshCacheResponse::file_share_arn].
    pub fn set_file_share_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [file_share_arn][crate::model::RefreshCacheResponse::file_share_arn].
    pub fn set_or_clear_file_share_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [notification_id][crate::model::RefreshCacheResponse::notification_id].
    pub fn set_notification_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.notification_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [notification_id][crate::model::RefreshCacheResponse::notification_id].
    pub fn set_or_clear_notification_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.notification_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::remove_tags_from_resource][crate::client::StorageGateway::remove_tags_from_resource].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct RemoveTagsFromResourceRequest {
    /// The Amazon Resource Name (ARN) of the tagged resource.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "ResourceARN", skip_serializing_if = "std::option::Option::is_none")]
    pub resource_arn: std::option::Option<std::string::String>,

    /// The keys of the tags to remove.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tag_keys: std::vec::Vec<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl RemoveTagsFromResourceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resource_arn][crate::model::RemoveTagsFromResourceRequest::resource_arn].
    pub fn set_resource_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_arn][crate::model::RemoveTagsFromResourceRequest::resource_arn].
    pub fn set_or_clear_resource_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tag_keys][crate::model::RemoveTagsFromResourceRequest::tag_keys].
    pub fn set_tag_keys<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.tag_keys = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The response message for [StorageGateway::remove_tags_from_resource][crate::client::StorageGateway::remove_tags_from_resource].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct RemoveTagsFromResourceResponse {
    /// The Amazon Resource Name (ARN) of the tagged resource.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "ResourceARN", skip_serializing_if = "std::option::Option::is_none")]
    pub resource_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl RemoveTagsFromResourceResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resource_arn][crate::model::RemoveTagsFromResourceResponse::resource_arn].
    pub fn set_resource_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_arn][crate::model::RemoveTagsFromResourceResponse::resource_arn].
    pub fn set_or_clear_resource_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::reset_cache][crate::client::StorageGateway::reset_cache].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ResetCacheRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ResetCacheRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::ResetCacheRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::ResetCacheRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::reset_cache][crate::client::StorageGateway::reset_cache].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ResetCacheResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ResetCacheResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::ResetCacheResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::ResetCacheResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::retrieve_tape_archive][crate::client::StorageGateway::retrieve_tape_archive].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct RetrieveTapeArchiveRequest {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TapeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub tape_arn: std::option::Option<std::string::String>,

    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl RetrieveTapeArchiveRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [tape_arn][crate::model::RetrieveTapeArchiveRequest::tape_arn].
    pub fn set_tape_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_arn][crate::model::RetrieveTapeArchiveRequest::tape_arn].
    pub fn set_or_clear_tape_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_arn][crate::model::RetrieveTapeArchiveRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::RetrieveTapeArchiveRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::retrieve_tape_archive][crate::client::StorageGateway::retrieve_tape_archive].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct RetrieveTapeArchiveResponse {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TapeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub tape_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl RetrieveTapeArchiveResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [tape_arn][crate::model::RetrieveTapeArchiveResponse::tape_arn].
    pub fn set_tape_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_arn][crate::model::RetrieveTapeArchiveResponse::tape_arn].
    pub fn set_or_clear_tape_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::retrieve_tape_recovery_point][crate::client::StorageGateway::retrieve_tape_recovery_point].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct RetrieveTapeRecoveryPointRequest {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TapeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub tape_arn: std::option::Option<std::string::String>,

    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl RetrieveTapeRecoveryPointRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [tape_arn][crate::model::RetrieveTapeRecoveryPointRequest::tape_arn].
    pub fn set_tape_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_arn][crate::model::RetrieveTapeRecoveryPointRequest::tape_arn].
    pub fn set_or_clear_tape_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_arn][crate::model::RetrieveTapeRecoveryPointRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::RetrieveTapeRecoveryPointRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::retrieve_tape_recovery_point][crate::client::StorageGateway::retrieve_tape_recovery_point].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct RetrieveTapeRecoveryPointResponse {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TapeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub tape_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl RetrieveTapeRecoveryPointResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [tape_arn][crate::model::RetrieveTapeRecoveryPointResponse::tape_arn].
    pub fn set_tape_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_arn][crate::model::RetrieveTapeRecoveryPointResponse::tape_arn].
    pub fn set_or_clear_tape_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::set_local_console_password][crate::client::StorageGateway::set_local_console_password].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct SetLocalConsolePasswordRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The password for the local console of the gateway.
    ///
    /// Length: 6 to 512 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub local_console_password: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl SetLocalConsolePasswordRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::SetLocalConsolePasswordRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::SetLocalConsolePasswordRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [local_console_password][crate::model::SetLocalConsolePasswordRequest::local_console_password].
    pub fn set_local_console_password<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.local_console_password = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [local_console_password][crate::model::SetLocalConsolePasswordRequest::local_console_password].
    pub fn set_or_clear_local_console_password<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.local_console_password = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::set_local_console_password][crate::client::StorageGateway::set_local_console_password].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct SetLocalConsolePasswordResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl SetLocalConsolePasswordResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::SetLocalConsolePasswordResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::SetLocalConsolePasswordResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::set_smb_guest_password][crate::client::StorageGateway::set_smb_guest_password].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct SetSmbGuestPasswordRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The password for the account.
    ///
    /// Length: 1 to 1024 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub password: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl SetSmbGuestPasswordRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::SetSmbGuestPasswordRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::SetSmbGuestPasswordRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [password][crate::model::SetSmbGuestPasswordRequest::password].
    pub fn set_password<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.password = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [password][crate::model::SetSmbGuestPasswordRequest::password].
    pub fn set_or_clear_password<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.password = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::set_smb_guest_password][crate::client::StorageGateway::set_smb_guest_password].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct SetSmbGuestPasswordResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl SetSmbGuestPasswordResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::SetSmbGuestPasswordResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::SetSmbGuestPasswordResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::shutdown_gateway][crate::client::StorageGateway::shutdown_gateway].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ShutdownGatewayRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ShutdownGatewayRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::ShutdownGatewayRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::ShutdownGatewayRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::shutdown_gateway][crate::client::StorageGateway::shutdown_gateway].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ShutdownGatewayResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ShutdownGatewayResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::ShutdownGatewayResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::ShutdownGatewayResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::start_availability_monitor_test][crate::client::StorageGateway::start_availability_monitor_test].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StartAvailabilityMonitorTestRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl StartAvailabilityMonitorTestRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::StartAvailabilityMonitorTestRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::StartAvailabilityMonitorTestRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::start_availability_monitor_test][crate::client::StorageGateway::start_availability_monitor_test].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StartAvailabilityMonitorTestResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl StartAvailabilityMonitorTestResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::StartAvailabilityMonitorTestResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::StartAvailabilityMonitorTestResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::start_gateway][crate::client::StorageGateway::start_gateway].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StartGatewayRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl StartGatewayRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::StartGatewayRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::StartGatewayRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::start_gateway][crate::client::StorageGateway::start_gateway].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StartGatewayResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl StartGatewayResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::StartGatewayResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::StartGatewayResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::update_automatic_tape_creation_policy][crate::client::StorageGateway::update_automatic_tape_creation_policy].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateAutomaticTapeCreationPolicyRequest {
    /// The rules that create tapes automatically.
    ///
    /// At least one entry.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub automatic_tape_creation_rules: std::vec::Vec<crate::model::AutomaticTapeCreationRule>,

    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateAutomaticTapeCreationPolicyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [automatic_tape_creation_rules][crate::model::UpdateAutomaticTapeCreationPolicyRequest::automatic_tape_creation_rules].
    pub fn set_automatic_tape_creation_rules<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::AutomaticTapeCreationRule>,
    {
        use std::iter::Iterator;
        self.automatic_tape_creation_rules = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [gateway_arn][crate::model::UpdateAutomaticTapeCreationPolicyRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::UpdateAutomaticTapeCreationPolicyRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::update_automatic_tape_creation_policy][crate::client::StorageGateway::update_automatic_tape_creation_policy].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateAutomaticTapeCreationPolicyResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateAutomaticTapeCreationPolicyResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::UpdateAutomaticTapeCreationPolicyResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::UpdateAutomaticTapeCreationPolicyResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::update_bandwidth_rate_limit][crate::client::StorageGateway::update_bandwidth_rate_limit].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateBandwidthRateLimitRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The average upload bandwidth rate limit in bits per second.
    ///
    /// Minimum: 51200.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub average_upload_rate_limit_in_bits_per_sec: std::option::Option<i64>,

    /// The average download bandwidth rate limit in bits per second.
    ///
    /// Minimum: 102400.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub average_download_rate_limit_in_bits_per_sec: std::option::Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateBandwidthRateLimitRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::UpdateBandwidthRateLimitRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::UpdateBandwidthRateLimitRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [average_upload_rate_limit_in_bits_per_sec][crate::model::UpdateBandwidthRateLimitRequest::average_upload_rate_limit_in_bits_per_sec].
    pub fn set_average_upload_rate_limit_in_bits_per_sec<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.average_upload_rate_limit_in_bits_per_sec = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [average_upload_rate_limit_in_bits_per_sec][crate::model::UpdateBandwidthRateLimitRequest::average_upload_rate_limit_in_bits_per_sec].
    pub fn set_or_clear_average_upload_rate_limit_in_bits_per_sec<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.average_upload_rate_limit_in_bits_per_sec = v.map(|x| x.into());
        self
    }

    /// Sets the value of [average_download_rate_limit_in_bits_per_sec][crate::model::UpdateBandwidthRateLimitRequest::average_download_rate_limit_in_bits_per_sec].
    pub fn set_average_download_rate_limit_in_bits_per_sec<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.average_download_rate_limit_in_bits_per_sec = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [average_download_rate_limit_in_bits_per_sec][crate::model::UpdateBandwidthRateLimitRequest::average_download_rate_limit_in_bits_per_sec].
    pub fn set_or_clear_average_download_rate_limit_in_bits_per_sec<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.average_download_rate_limit_in_bits_per_sec = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::update_bandwidth_rate_limit][crate::client::StorageGateway::update_bandwidth_rate_limit].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateBandwidthRateLimitResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateBandwidthRateLimitResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::UpdateBandwidthRateLimitResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::UpdateBandwidthRateLimitResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::update_chap_credentials][crate::client::StorageGateway::update_chap_credentials].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateChapCredentialsRequest {
    /// The Amazon Resource Name (ARN) of the iSCSI target, including the target name.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TargetARN", skip_serializing_if = "std::option::Option::is_none")]
    pub target_arn: std::option::Option<std::string::String>,

    /// The secret key that the initiator must provide to authenticate.
    ///
    /// Length: 1 to 100 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub secret_to_authenticate_initiator: std::option::Option<std::string::String>,

    /// The iSCSI initiator that connects to the target.
    ///
    /// Length: 1 to 255 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub initiator_name: std::option::Option<std::string::String>,

    /// The secret key that the target must provide to the initiator for mutual CHAP.
    ///
    /// Length: 1 to 100 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub secret_to_authenticate_target: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateChapCredentialsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [target_arn][crate::model::UpdateChapCredentialsRequest::target_arn].
    pub fn set_target_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [target_arn][crate::model::UpdateChapCredentialsRequest::target_arn].
    pub fn set_or_clear_target_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [secret_to_authenticate_initiator][crate::model::UpdateChapCredentialsRequest::secret_to_authenticate_initiator].
    pub fn set_secret_to_authenticate_initiator<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.secret_to_authenticate_initiator = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [secret_to_authenticate_initiator][crate::model::UpdateChapCredentialsRequest::secret_to_authenticate_initiator].
    pub fn set_or_clear_secret_to_authenticate_initiator<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.secret_to_authenticate_initiator = v.map(|x| x.into());
        self
    }

    /// Sets the value of [initiator_name][crate::model::UpdateChapCredentialsRequest::initiator_name].
    pub fn set_initiator_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.initiator_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [initiator_name][crate::model::UpdateChapCredentialsRequest::initiator_name].
    pub fn set_or_clear_initiator_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.initiator_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [secret_to_authenticate_target][crate::model::UpdateChapCredentialsRequest::secret_to_authenticate_target].
    pub fn set_secret_to_authenticate_target<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.secret_to_authenticate_target = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [secret_to_authenticate_target][crate::model::UpdateChapCredentialsRequest::secret_to_authenticate_target].
    pub fn set_or_clear_secret_to_authenticate_target<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.secret_to_authenticate_target = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::update_chap_credentials][crate::client::StorageGateway::update_chap_credentials].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateChapCredentialsResponse {
    /// The Amazon Resource Name (ARN) of the iSCSI target, including the target name.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TargetARN", skip_serializing_if = "std::option::Option::is_none")]
    pub target_arn: std::option::Option<std::string::String>,

    /// The iSCSI initiator that connects to the target.
    ///
    /// Length: 1 to 255 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub initiator_name: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateChapCredentialsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [target_arn][crate::model::UpdateChapCredentialsResponse::target_arn].
    pub fn set_target_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [target_arn][crate::model::UpdateChapCredentialsResponse::target_arn].
    pub fn set_or_clear_target_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [initiator_name][crate::model::UpdateChapCredentialsResponse::initiator_name].
    pub fn set_initiator_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.initiator_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [initiator_name][crate::model::UpdateChapCredentialsResponse::initiator_name].
    pub fn set_or_clear_initiator_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.initiator_name = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::update_gateway_information][crate::client::StorageGateway::update_gateway_information].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateGatewayInformationRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The name you configured for the gateway.
    ///
    /// Length: 2 to 255 characters, matching `^[ -\.0-\[\]-~]*[!-\.0-\[\]-~][ -\.0-\[\]-~]*$`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_name: std::option::Option<std::string::String>,

    /// A value that indicates the time zone of the gateway, for example `GMT-4:00`.
    ///
    /// Length: 3 to 10 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_timezone: std::option::Option<std::string::String>,

    /// The ARN of the CloudWatch log group used to monitor and log events in the gateway.
    ///
    /// At most 562 characters.
    #[serde(rename = "CloudWatchLogGroupARN", skip_serializing_if = "std::option::Option::is_none")]
    pub cloud_watch_log_group_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateGatewayInformationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::UpdateGatewayInformationRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::UpdateGatewayInformationRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_name][crate::model::UpdateGatewayInformationRequest::gateway_name].
    pub fn set_gateway_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_name][crate::model::UpdateGatewayInformationRequest::gateway_name].
    pub fn set_or_clear_gateway_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_timezone][crate::model::UpdateGatewayInformationRequest::gateway_timezone].
    pub fn set_gateway_timezone<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_timezone = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_timezone][crate::model::UpdateGatewayInformationRequest::gateway_timezone].
    pub fn set_or_clear_gateway_timezone<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_timezone = v.map(|x| x.into());
        self
    }

    /// Sets the value of [cloud_watch_log_group_arn][crate::model::UpdateGatewayInformationRequest::cloud_watch_log_group_arn].
    pub fn set_cloud_watch_log_group_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.cloud_watch_log_group_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cloud_watch_log_group_arn][crate::model::UpdateGatewayInformationRequest::cloud_watch_log_group_arn].
    pub fn set_or_clear_cloud_watch_log_group_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.cloud_watch_log_group_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::update_gateway_information][crate::client::StorageGateway::update_gateway_information].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateGatewayInformationResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The name you configured for the gateway.
    ///
    /// Length: 2 to 255 characters, matching `^[ -\.0-\[\]-~]*[!-\.0-\[\]-~][ -\.0-\[\]-~]*$`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_name: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateGatewayInformationResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::UpdateGatewayInformationResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::UpdateGatewayInformationResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_name][crate::model::UpdateGatewayInformationResponse::gateway_name].
    pub fn set_gateway_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_name][crate::model::UpdateGatewayInformationResponse::gateway_name].
    pub fn set_or_clear_gateway_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_name = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::update_gateway_software_now][crate::client::StorageGateway::update_gateway_software_now].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateGatewaySoftwareNowRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateGatewaySoftwareNowRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::UpdateGatewaySoftwareNowRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::UpdateGatewaySoftwareNowRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::update_gateway_software_now][crate::client::StorageGateway::update_gateway_software_now].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateGatewaySoftwareNowResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateGatewaySoftwareNowResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::UpdateGatewaySoftwareNowResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::UpdateGatewaySoftwareNowResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::update_maintenance_start_time][crate::client::StorageGateway::update_maintenance_start_time].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateMaintenanceStartTimeRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The hour component of the maintenance start time, in the gateway's time zone.
    ///
    /// Range: 0 to 23.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hour_of_day: std::option::Option<i32>,

    /// The minute component of the maintenance start time, in the gateway's time zone.
    ///
    /// Range: 0 to 59.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub minute_of_hour: std::option::Option<i32>,

    /// The day of the week for the maintenance start time, where 0 is Sunday.
    ///
    /// Range: 0 to 6.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub day_of_week: std::option::Option<i32>,

    /// The day of the month for the maintenance start time.
    ///
    /// Range: 1 to 28.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub day_of_month: std::option::Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateMaintenanceStartTimeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::UpdateMaintenanceStartTimeRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::UpdateMaintenanceStartTimeRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [hour_of_day][crate::model::UpdateMaintenanceStartTimeRequest::hour_of_day].
    pub fn set_hour_of_day<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.hour_of_day = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [hour_of_day][crate::model::UpdateMaintenanceStartTimeRequest::hour_of_day].
    pub fn set_or_clear_hour_of_day<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.hour_of_day = v.map(|x| x.into());
        self
    }

    /// Sets the value of [minute_of_hour][crate::model::UpdateMaintenanceStartTimeRequest::minute_of_hour].
    pub fn set_minute_of_hour<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.minute_of_hour = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [minute_of_hour][crate::model::UpdateMaintenanceStartTimeRequest::minute_of_hour].
    pub fn set_or_clear_minute_of_hour<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.minute_of_hour = v.map(|x| x.into());
        self
    }

    /// Sets the value of [day_of_week][crate::model::UpdateMaintenanceStartTimeRequest::day_of_week].
    pub fn set_day_of_week<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.day_of_week = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [day_of_week][crate::model::UpdateMaintenanceStartTimeRequest::day_of_week].
    pub fn set_or_clear_day_of_week<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.day_of_week = v.map(|x| x.into());
        self
    }

    /// Sets the value of [day_of_month][crate::model::UpdateMaintenanceStartTimeRequest::day_of_month].
    pub fn set_day_of_month<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.day_of_month = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [day_of_month][crate::model::UpdateMaintenanceStartTimeRequest::day_of_month].
    pub fn set_or_clear_day_of_month<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.day_of_month = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::update_maintenance_start_time][crate::client::StorageGateway::update_maintenance_start_time].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateMaintenanceStartTimeResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateMaintenanceStartTimeResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::UpdateMaintenanceStartTimeResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::UpdateMaintenanceStartTimeResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::update_nfs_file_share][crate::client::StorageGateway::update_nfs_file_share].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateNfsFileShareRequest {
    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "FileShareARN", skip_serializing_if = "std::option::Option::is_none")]
    pub file_share_arn: std::option::Option<std::string::String>,

    /// Set to `true` to encrypt objects with a customer-managed key, `false` for service-managed keys.
    #[serde(rename = "KMSEncrypted", skip_serializing_if = "std::option::Option::is_none")]
    pub kms_encrypted: std::option::Option<bool>,

    /// The ARN of the symmetric customer master key used for server-side encryption.
    ///
    /// Length: 7 to 2048 characters. Only set when `KMSEncrypted` is `true`.
    #[serde(rename = "KMSKey", skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key: std::option::Option<std::string::String>,

    /// File share default values applied to newly created files and directories.
    #[serde(rename = "NFSFileShareDefaults", skip_serializing_if = "std::option::Option::is_none")]
    pub nfs_file_share_defaults: std::option::Option<crate::model::NfsFileShareDefaults>,

    /// The default storage class for objects written by the file gateway, for example `S3_STANDARD`.
    ///
    /// Length: 5 to 50 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub default_storage_class: std::option::Option<std::string::String>,

    /// The access control list applied to objects written to the bucket.
    #[serde(rename = "ObjectACL", skip_serializing_if = "std::option::Option::is_none")]
    pub object_acl: std::option::Option<crate::model::ObjectAcl>,

    /// The IP addresses or CIDR blocks of the clients allowed to access the file share.
    ///
    /// Between 1 and 100 entries.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub client_list: std::vec::Vec<std::string::String>,

    /// The user mapped to anonymous users: `RootSquash`, `NoSquash` or `AllSquash`.
    ///
    /// Length: 5 to 15 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub squash: std::option::Option<std::string::String>,

    /// Set to `true` to export the file share as read-only.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_only: std::option::Option<bool>,

    /// Set to `true` to guess the MIME type of uploaded objects from their file extensions.
    #[serde(rename = "GuessMIMETypeEnabled", skip_serializing_if = "std::option::Option::is_none")]
    pub guess_mime_type_enabled: std::option::Option<bool>,

    /// Set to `true` when the requester, not the bucket owner, pays for data access.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub requester_pays: std::option::Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateNfsFileShareRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [file_share_arn][crate::model::UpdateNfsFileShareRequest::file_share_arn].
    pub fn set_file_share_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [file_share_arn][crate::model::UpdateNfsFileShareRequest::file_share_arn].
    pub fn set_or_clear_file_share_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_encrypted][crate::model::UpdateNfsFileShareRequest::kms_encrypted].
    pub fn set_kms_encrypted<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.kms_encrypted = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kms_encrypted][crate::model::UpdateNfsFileShareRequest::kms_encrypted].
    pub fn set_or_clear_kms_encrypted<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.kms_encrypted = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_key][crate::model::UpdateNfsFileShareRequest::kms_key].
    pub fn set_kms_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kms_key][crate::model::UpdateNfsFileShareRequest::kms_key].
    pub fn set_or_clear_kms_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [nfs_file_share_defaults][crate::model::UpdateNfsFileShareRequest::nfs_file_share_defaults].
    pub fn set_nfs_file_share_defaults<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::NfsFileShareDefaults>,
    {
        self.nfs_file_share_defaults = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [nfs_file_share_defaults][crate::model::UpdateNfsFileShareRequest::nfs_file_share_defaults].
    pub fn set_or_clear_nfs_file_share_defaults<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::NfsFileShareDefaults>,
    {
        self.nfs_file_share_defaults = v.map(|x| x.into());
        self
    }

    /// Sets the value of [default_storage_class][crate::model::UpdateNfsFileShareRequest::default_storage_class].
    pub fn set_default_storage_class<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.default_storage_class = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [default_storage_class][crate::model::UpdateNfsFileShareRequest::default_storage_class].
    pub fn set_or_clear_default_storage_class<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.default_storage_class = v.map(|x| x.into());
        self
    }

    /// Sets the value of [object_acl][crate::model::UpdateNfsFileShareRequest::object_acl].
    pub fn set_object_acl<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ObjectAcl>,
    {
        self.object_acl = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [object_acl][crate::model::UpdateNfsFileShareRequest::object_acl].
    pub fn set_or_clear_object_acl<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ObjectAcl>,
    {
        self.object_acl = v.map(|x| x.into());
        self
    }

    /// Sets the value of [client_list][crate::model::UpdateNfsFileShareRequest::client_list].
    pub fn set_client_list<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.client_list = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [squash][crate::model::UpdateNfsFileShareRequest::squash].
    pub fn set_squash<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.squash = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [squash][crate::model::UpdateNfsFileShareRequest::squash].
    pub fn set_or_clear_squash<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.squash = v.map(|x| x.into());
        self
    }

    /// Sets the value of [read_only][crate::model::UpdateNfsFileShareRequest::read_only].
    pub fn set_read_only<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.read_only = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [read_only][crate::model::UpdateNfsFileShareRequest::read_only].
    pub fn set_or_clear_read_only<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.read_only = v.map(|x| x.into());
        self
    }

    /// Sets the value of [guess_mime_type_enabled][crate::model::UpdateNfsFileShareRequest::guess_mime_type_enabled].
    pub fn set_guess_mime_type_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.guess_mime_type_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [guess_mime_type_enabled][crate::model::UpdateNfsFileShareRequest::guess_mime_type_enabled].
    pub fn set_or_clear_guess_mime_type_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.guess_mime_type_enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [requester_pays][crate::model::UpdateNfsFileShareRequest::requester_pays].
    pub fn set_requester_pays<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.requester_pays = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [requester_pays][crate::model::UpdateNfsFileShareRequest::requester_pays].
    pub fn set_or_clear_requester_pays<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.requester_pays = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::update_nfs_file_share][crate::client::StorageGateway::update_nfs_file_share].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateNfsFileShareResponse {
    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "FileShareARN", skip_serializing_if = "std::option::Option::is_none")]
    pub file_share_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateNfsFileShareResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [file_share_arn][crate::model::UpdateNfsFileShareResponse::file_share_arn].
    pub fn set_file_share_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [file_share_arn][crate::model::UpdateNfsFileShareResponse::file_share_arn].
    pub fn set_or_clear_file_share_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::update_smb_file_share][crate::client::StorageGateway::update_smb_file_share].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateSmbFileShareRequest {
    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "FileShareARN", skip_serializing_if = "std::option::Option::is_none")]
    pub file_share_arn: std::option::Option<std::string::String>,

    /// Set to `true` to encrypt objects with a customer-managed key, `false` for service-managed keys.
    #[serde(rename = "KMSEncrypted", skip_serializing_if = "std::option::Option::is_none")]
    pub kms_encrypted: std::option::Option<bool>,

    /// The ARN of the symmetric customer master key used for server-side encryption.
    ///
    /// Length: 7 to 2048 characters. Only set when `KMSEncrypted` is `true`.
    #[serde(rename = "KMSKey", skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key: std::option::Option<std::string::String>,

    /// The default storage class for objects written by the file gateway, for example `S3_STANDARD`.
    ///
    /// Length: 5 to 50 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub default_storage_class: std::option::Option<std::string::String>,

    /// The access control list applied to objects written to the bucket.
    #[serde(rename = "ObjectACL", skip_serializing_if = "std::option::Option::is_none")]
    pub object_acl: std::option::Option<crate::model::ObjectAcl>,

    /// Set to `true` to export the file share as read-only.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_only: std::option::Option<bool>,

    /// Set to `true` to guess the MIME type of uploaded objects from their file extensions.
    #[serde(rename = "GuessMIMETypeEnabled", skip_serializing_if = "std::option::Option::is_none")]
    pub guess_mime_type_enabled: std::option::Option<bool>,

    /// Set to `true` when the requester, not the bucket owner, pays for data access.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub requester_pays: std::option::Option<bool>,

    /// Set to `true` to enable access control lists on the SMB file share.
    #[serde(rename = "SMBACLEnabled", skip_serializing_if = "std::option::Option::is_none")]
    pub smb_acl_enabled: std::option::Option<bool>,

    /// Users in the Active Directory with administrator rights to the file share.
    ///
    /// At most 100 entries.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub admin_user_list: std::vec::Vec<std::string::String>,

    /// Users or groups in the Active Directory allowed to access the file share.
    ///
    /// At most 100 entries.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub valid_user_list: std::vec::Vec<std::string::String>,

    /// Users or groups in the Active Directory denied access to the file share.
    ///
    /// At most 100 entries.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub invalid_user_list: std::vec::Vec<std::string::String>,

    /// The ARN of the storage used for the audit logs.
    ///
    /// At most 1024 characters.
    #[serde(rename = "AuditDestinationARN", skip_serializing_if = "std::option::Option::is_none")]
    pub audit_destination_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateSmbFileShareRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [file_share_arn][crate::model::UpdateSmbFileShareRequest::file_share_arn].
    pub fn set_file_share_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [file_share_arn][crate::model::UpdateSmbFileShareRequest::file_share_arn].
    pub fn set_or_clear_file_share_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_encrypted][crate::model::UpdateSmbFileShareRequest::kms_encrypted].
    pub fn set_kms_encrypted<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.kms_encrypted = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kms_encrypted][crate::model::UpdateSmbFileShareRequest::kms_encrypted].
    pub fn set_or_clear_kms_encrypted<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.kms_encrypted = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_key][crate::model::UpdateSmbFileShareRequest::kms_key].
    pub fn set_kms_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kms_key][crate::model::UpdateSmbFileShareRequest::kms_key].
    pub fn set_or_clear_kms_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [default_storage_class][crate::model::UpdateSmbFileShareRequest::default_storage_class].
    pub fn set_default_storage_class<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.default_storage_class = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [default_storage_class][crate::model::UpdateSmbFileShareRequest::default_storage_class].
    pub fn set_or_clear_default_storage_class<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.default_storage_class = v.map(|x| x.into());
        self
    }

    /// Sets the value of [object_acl][crate::model::UpdateSmbFileShareRequest::object_acl].
    pub fn set_object_acl<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ObjectAcl>,
    {
        self.object_acl = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [object_acl][crate::model::UpdateSmbFileShareRequest::object_acl].
    pub fn set_or_clear_object_acl<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ObjectAcl>,
    {
        self.object_acl = v.map(|x| x.into());
        self
    }

    /// Sets the value of [read_only][crate::model::UpdateSmbFileShareRequest::read_only].
    pub fn set_read_only<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.read_only = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [read_only][crate::model::UpdateSmbFileShareRequest::read_only].
    pub fn set_or_clear_read_only<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.read_only = v.map(|x| x.into());
        self
    }

    /// Sets the value of [guess_mime_type_enabled][crate::model::UpdateSmbFileShareRequest::guess_mime_type_enabled].
    pub fn set_guess_mime_type_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.guess_mime_type_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [guess_mime_type_enabled][crate::model::UpdateSmbFileShareRequest::guess_mime_type_enabled].
    pub fn set_or_clear_guess_mime_type_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.guess_mime_type_enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [requester_pays][crate::model::UpdateSmbFileShareRequest::requester_pays].
    pub fn set_requester_pays<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.requester_pays = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [requester_pays][crate::model::UpdateSmbFileShareRequest::requester_pays].
    pub fn set_or_clear_requester_pays<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.requester_pays = v.map(|x| x.into());
        self
    }

    /// Sets the value of [smb_acl_enabled][crate::model::UpdateSmbFileShareRequest::smb_acl_enabled].
    pub fn set_smb_acl_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.smb_acl_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [smb_acl_enabled][crate::model::UpdateSmbFileShareRequest::smb_acl_enabled].
    pub fn set_or_clear_smb_acl_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.smb_acl_enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [admin_user_list][crate::model::UpdateSmbFileShareRequest::admin_user_list].
    pub fn set_admin_user_list<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.admin_user_list = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [valid_user_list][crate::model::UpdateSmbFileShareRequest::valid_user_list].
    pub fn set_valid_user_list<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.valid_user_list = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [invalid_user_list][crate::model::UpdateSmbFileShareRequest::invalid_user_list].
    pub fn set_invalid_user_list<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.invalid_user_list = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [audit_destination_arn][crate::model::UpdateSmbFileShareRequest::audit_destination_arn].
    pub fn set_audit_destination_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.audit_destination_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [audit_destination_arn][crate::model::UpdateSmbFileShareRequest::audit_destination_arn].
    pub fn set_or_clear_audit_destination_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.audit_destination_arn = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::update_smb_file_share][crate::client::StorageGateway::update_smb_file_share].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateSmbFileShareResponse {
    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "FileShareARN", skip_serializing_if = "std::option::Option::is_none")]
    pub file_share_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateSmbFileShareResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [file_share_arn][crate::model::UpdateSmbFileShareResponse::file_share_arn].
    pub fn set_file_share_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [file_share_arn][crate::model::UpdateSmbFileShareResponse::file_share_arn].
    pub fn set_or_clear_file_share_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::update_smb_security_strategy][crate::client::StorageGateway::update_smb_security_strategy].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateSmbSecurityStrategyRequest {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The SMB security strategy of the gateway.
    #[serde(rename = "SMBSecurityStrategy", skip_serializing_if = "std::option::Option::is_none")]
    pub smb_security_strategy: std::option::Option<crate::model::SmbSecurityStrategy>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateSmbSecurityStrategyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::UpdateSmbSecurityStrategyRequest::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::UpdateSmbSecurityStrategyRequest::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [smb_security_strategy][crate::model::UpdateSmbSecurityStrategyRequest::smb_security_strategy].
    pub fn set_smb_security_strategy<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::SmbSecurityStrategy>,
    {
        self.smb_security_strategy = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [smb_security_strategy][crate::model::UpdateSmbSecurityStrategyRequest::smb_security_strategy].
    pub fn set_or_clear_smb_security_strategy<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SmbSecurityStrategy>,
    {
        self.smb_security_strategy = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::update_smb_security_strategy][crate::client::StorageGateway::update_smb_security_strategy].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateSmbSecurityStrategyResponse {
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateSmbSecurityStrategyResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_arn][crate::model::UpdateSmbSecurityStrategyResponse::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::UpdateSmbSecurityStrategyResponse::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::update_snapshot_schedule][crate::client::StorageGateway::update_snapshot_schedule].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateSnapshotScheduleRequest {
    /// The Amazon Resource Name (ARN) of the storage volume.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "VolumeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub volume_arn: std::option::Option<std::string::String>,

    /// The hour of the day at which the snapshot schedule begins.
    ///
    /// Range: 0 to 23.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub start_at: std::option::Option<i32>,

    /// The frequency of snapshots, in hours.
    ///
    /// One of 1, 2, 4, 8, 12 or 24.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub recurrence_in_hours: std::option::Option<i32>,

    /// A description of the snapshot schedule.
    ///
    /// Length: 1 to 255 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<std::string::String>,

    /// A list of up to 50 tags assigned to the resource.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tags: std::vec::Vec<crate::model::Tag>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateSnapshotScheduleRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [volume_arn][crate::model::UpdateSnapshotScheduleRequest::volume_arn].
    pub fn set_volume_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_arn][crate::model::UpdateSnapshotScheduleRequest::volume_arn].
    pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [start_at][crate::model::UpdateSnapshotScheduleRequest::start_at].
    pub fn set_start_at<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.start_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start_at][crate::model::UpdateSnapshotScheduleRequest::start_at].
    pub fn set_or_clear_start_at<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.start_at = v.map(|x| x.into());
        self
    }

    /// Sets the value of [recurrence_in_hours][crate::model::UpdateSnapshotScheduleRequest::recurrence_in_hours].
    pub fn set_recurrence_in_hours<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.recurrence_in_hours = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [recurrence_in_hours][crate::model::UpdateSnapshotScheduleRequest::recurrence_in_hours].
    pub fn set_or_clear_recurrence_in_hours<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.recurrence_in_hours = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::UpdateSnapshotScheduleRequest::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::UpdateSnapshotScheduleRequest::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tags][crate::model::UpdateSnapshotScheduleRequest::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        use std::iter::Iterator;
        self.tags = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The response message for [StorageGateway::update_snapshot_schedule][crate::client::StorageGateway::update_snapshot_schedule].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateSnapshotScheduleResponse {
    /// The Amazon Resource Name (ARN) of the storage volume.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "VolumeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub volume_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateSnapshotScheduleResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [volume_arn][crate::model::UpdateSnapshotScheduleResponse::volume_arn].
    pub fn set_volume_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_arn][crate::model::UpdateSnapshotScheduleResponse::volume_arn].
    pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = v.map(|x| x.into());
        self
    }
}

/// The request message for [StorageGateway::update_vtl_device_type][crate::client::StorageGateway::update_vtl_device_type].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateVtlDeviceTypeRequest {
    /// The Amazon Resource Name (ARN) of the VTL device.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "VTLDeviceARN", skip_serializing_if = "std::option::Option::is_none")]
    pub vtl_device_arn: std::option::Option<std::string::String>,

    /// The type of medium changer, for example `STK-L700`.
    ///
    /// Length: 2 to 50 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub device_type: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateVtlDeviceTypeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [vtl_device_arn][crate::model::UpdateVtlDeviceTypeRequest::vtl_device_arn].
    pub fn set_vtl_device_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vtl_device_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vtl_device_arn][crate::model::UpdateVtlDeviceTypeRequest::vtl_device_arn].
    pub fn set_or_clear_vtl_device_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vtl_device_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [device_type][crate::model::UpdateVtlDeviceTypeRequest::device_type].
    pub fn set_device_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.device_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [device_type][crate::model::UpdateVtlDeviceTypeRequest::device_type].
    pub fn set_or_clear_device_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.device_type = v.map(|x| x.into());
        self
    }
}

/// The response message for [StorageGateway::update_vtl_device_type][crate::client::StorageGateway::update_vtl_device_type].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateVtlDeviceTypeResponse {
    /// The Amazon Resource Name (ARN) of the VTL device.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "VTLDeviceARN", skip_serializing_if = "std::option::Option::is_none")]
    pub vtl_device_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateVtlDeviceTypeResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [vtl_device_arn][crate::model::UpdateVtlDeviceTypeResponse::vtl_device_arn].
    pub fn set_vtl_device_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vtl_device_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vtl_device_arn][crate::model::UpdateVtlDeviceTypeResponse::vtl_device_arn].
    pub fn set_or_clear_vtl_device_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vtl_device_arn = v.map(|x| x.into());
        self
    }
}

/// A key-value pair attached to a resource.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Tag {
    /// The key of the tag.
    ///
    /// Length: 1 to 128 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key: std::option::Option<std::string::String>,

    /// The value of the tag.
    ///
    /// At most 256 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub value: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Tag {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [key][crate::model::Tag::key].
    pub fn set_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [key][crate::model::Tag::key].
    pub fn set_or_clear_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [value][crate::model::Tag::value].
    pub fn set_value<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.value = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [value][crate::model::Tag::value].
    pub fn set_or_clear_value<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.value = v.map(|x| x.into());
        self
    }
}

/// Describes the Challenge-Handshake Authentication Protocol (CHAP) information
/// that supports authentication between the gateway and iSCSI initiators.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ChapInfo {
    /// The Amazon Resource Name (ARN) of the iSCSI target, including the target name.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TargetARN", skip_serializing_if = "std::option::Option::is_none")]
    pub target_arn: std::option::Option<std::string::String>,

    /// The secret key that the initiator must provide to authenticate.
    ///
    /// Length: 1 to 100 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub secret_to_authenticate_initiator: std::option::Option<std::string::String>,

    /// The iSCSI initiator that connects to the target.
    ///
    /// Length: 1 to 255 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub initiator_name: std::option::Option<std::string::String>,

    /// The secret key that the target must provide to the initiator for mutual CHAP.
    ///
    /// Length: 1 to 100 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub secret_to_authenticate_target: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ChapInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [target_arn][crate::model::ChapInfo::target_arn].
    pub fn set_target_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [target_arn][crate::model::ChapInfo::target_arn].
    pub fn set_or_clear_target_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [secret_to_authenticate_initiator][crate::model::ChapInfo::secret_to_authenticate_initiator].
    pub fn set_secret_to_authenticate_initiator<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.secret_to_authenticate_initiator = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [secret_to_authenticate_initiator][crate::model::ChapInfo::secret_to_authenticate_initiator].
    pub fn set_or_clear_secret_to_authenticate_initiator<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.secret_to_authenticate_initiator = v.map(|x| x.into());
        self
    }

    /// Sets the value of [initiator_name][crate::model::ChapInfo::initiator_name].
    pub fn set_initiator_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.initiator_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [initiator_name][crate::model::ChapInfo::initiator_name].
    pub fn set_or_clear_initiator_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.initiator_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [secret_to_authenticate_target][crate::model::ChapInfo::secret_to_authenticate_target].
    pub fn set_secret_to_authenticate_target<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.secret_to_authenticate_target = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [secret_to_authenticate_target][crate::model::ChapInfo::secret_to_authenticate_target].
    pub fn set_or_clear_secret_to_authenticate_target<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.secret_to_authenticate_target = v.map(|x| x.into());
        self
    }
}

/// Describes an iSCSI cached volume.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CachediScsiVolume {
    /// The Amazon Resource Name (ARN) of the storage volume.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "VolumeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub volume_arn: std::option::Option<std::string::String>,

    /// The unique identifier of the volume, for example `vol-AE4B946D`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_id: std::option::Option<std::string::String>,

    /// The type of the volume, for example `CACHED iSCSI` or `STORED iSCSI`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_type: std::option::Option<std::string::String>,

    /// The state of the volume, for example `AVAILABLE` or `BOOTSTRAPPING`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_status: std::option::Option<std::string::String>,

    /// Whether the volume is attached to a gateway: `ATTACHED`, `ATTACHING`, `DETACHED` or `DETACHING`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_attachment_status: std::option::Option<std::string::String>,

    /// The size of the volume in bytes.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_size_in_bytes: std::option::Option<i64>,

    /// The percentage complete while the volume is restoring or bootstrapping.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_progress: std::option::Option<f64>,

    /// The snapshot used to create the volume, if any.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_snapshot_id: std::option::Option<std::string::String>,

    /// The iSCSI attributes of the volume.
    #[serde(rename = "VolumeiSCSIAttributes", skip_serializing_if = "std::option::Option::is_none")]
    pub volume_iscsi_attributes: std::option::Option<crate::model::VolumeiScsiAttributes>,

    /// The date the volume was created.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub created_date: std::option::Option<wkt::Timestamp>,

    /// The size of the data stored on the volume, in bytes.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_used_in_bytes: std::option::Option<i64>,

    /// The ARN of the symmetric customer master key used for server-side encryption.
    ///
    /// Length: 7 to 2048 characters. Only set when `KMSEncrypted` is `true`.
    #[serde(rename = "KMSKey", skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key: std::option::Option<std::string::String>,

    /// The name of the iSCSI target used by an initiator to connect to a volume.
    ///
    /// Length: 1 to 200 characters, lowercase letters, numbers, periods and hyphens.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub target_name: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CachediScsiVolume {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [volume_arn][crate::model::CachediScsiVolume::volume_arn].
    pub fn set_volume_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_arn][crate::model::CachediScsiVolume::volume_arn].
    pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_id][crate::model::CachediScsiVolume::volume_id].
    pub fn set_volume_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_id][crate::model::CachediScsiVolume::volume_id].
    pub fn set_or_clear_volume_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_type][crate::model::CachediScsiVolume::volume_type].
    pub fn set_volume_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_type][crate::model::CachediScsiVolume::volume_type].
    pub fn set_or_clear_volume_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_status][crate::model::CachediScsiVolume::volume_status].
    pub fn set_volume_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_status][crate::model::CachediScsiVolume::volume_status].
    pub fn set_or_clear_volume_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_attachment_status][crate::model::CachediScsiVolume::volume_attachment_status].
    pub fn set_volume_attachment_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_attachment_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_attachment_status][crate::model::CachediScsiVolume::volume_attachment_status].
    pub fn set_or_clear_volume_attachment_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_attachment_status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_size_in_bytes][crate::model::CachediScsiVolume::volume_size_in_bytes].
    pub fn set_volume_size_in_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.volume_size_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_size_in_bytes][crate::model::CachediScsiVolume::volume_size_in_bytes].
    pub fn set_or_clear_volume_size_in_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.volume_size_in_bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_progress][crate::model::CachediScsiVolume::volume_progress].
    pub fn set_volume_progress<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.volume_progress = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_progress][crate::model::CachediScsiVolume::volume_progress].
    pub fn set_or_clear_volume_progress<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.volume_progress = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_snapshot_id][crate::model::CachediScsiVolume::source_snapshot_id].
    pub fn set_source_snapshot_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_snapshot_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_snapshot_id][crate::model::CachediScsiVolume::source_snapshot_id].
    pub fn set_or_clear_source_snapshot_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_snapshot_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_iscsi_attributes][crate::model::CachediScsiVolume::volume_iscsi_attributes].
    pub fn set_volume_iscsi_attributes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::VolumeiScsiAttributes>,
    {
        self.volume_iscsi_attributes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_iscsi_attributes][crate::model::CachediScsiVolume::volume_iscsi_attributes].
    pub fn set_or_clear_volume_iscsi_attributes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::VolumeiScsiAttributes>,
    {
        self.volume_iscsi_attributes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [created_date][crate::model::CachediScsiVolume::created_date].
    pub fn set_created_date<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.created_date = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [created_date][crate::model::CachediScsiVolume::created_date].
    pub fn set_or_clear_created_date<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.created_date = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_used_in_bytes][crate::model::CachediScsiVolume::volume_used_in_bytes].
    pub fn set_volume_used_in_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.volume_used_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_used_in_bytes][crate::model::CachediScsiVolume::volume_used_in_bytes].
    pub fn set_or_clear_volume_used_in_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.volume_used_in_bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_key][crate::model::CachediScsiVolume::kms_key].
    pub fn set_kms_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kms_key][crate::model::CachediScsiVolume::kms_key].
    pub fn set_or_clear_kms_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [target_name][crate::model::CachediScsiVolume::target_name].
    pub fn set_target_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [target_name][crate::model::CachediScsiVolume::target_name].
    pub fn set_or_clear_target_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_name = v.map(|x| x.into());
        self
    }
}

/// Describes an iSCSI stored volume.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StorediScsiVolume {
    /// The Amazon Resource Name (ARN) of the storage volume.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "VolumeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub volume_arn: std::option::Option<std::string::String>,

    /// The unique identifier of the volume, for example `vol-AE4B946D`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_id: std::option::Option<std::string::String>,

    /// The type of the volume, for example `CACHED iSCSI` or `STORED iSCSI`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_type: std::option::Option<std::string::String>,

    /// The state of the volume, for example `AVAILABLE` or `BOOTSTRAPPING`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_status: std::option::Option<std::string::String>,

    /// Whether the volume is attached to a gateway: `ATTACHED`, `ATTACHING`, `DETACHED` or `DETACHING`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_attachment_status: std::option::Option<std::string::String>,

    /// The size of the volume in bytes.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_size_in_bytes: std::option::Option<i64>,

    /// The percentage complete while the volume is restoring or bootstrapping.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_progress: std::option::Option<f64>,

    /// The ID of the local disk that stores the volume.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_disk_id: std::option::Option<std::string::String>,

    /// The snapshot used to create the volume, if any.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_snapshot_id: std::option::Option<std::string::String>,

    /// Whether the existing data on the disk was preserved when the volume was created.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub preserved_existing_data: std::option::Option<bool>,

    /// The iSCSI attributes of the volume.
    #[serde(rename = "VolumeiSCSIAttributes", skip_serializing_if = "std::option::Option::is_none")]
    pub volume_iscsi_attributes: std::option::Option<crate::model::VolumeiScsiAttributes>,

    /// The date the volume was created.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub created_date: std::option::Option<wkt::Timestamp>,

    /// The size of the data stored on the volume, in bytes.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_used_in_bytes: std::option::Option<i64>,

    /// The ARN of the symmetric customer master key used for server-side encryption.
    ///
    /// Length: 7 to 2048 characters. Only set when `KMSEncrypted` is `true`.
    #[serde(rename = "KMSKey", skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key: std::option::Option<std::string::String>,

    /// The name of the iSCSI target used by an initiator to connect to a volume.
    ///
    /// Length: 1 to 200 characters, lowercase letters, numbers, periods and hyphens.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub target_name: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl StorediScsiVolume {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [volume_arn][crate::model::StorediScsiVolume::volume_arn].
    pub fn set_volume_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_arn][crate::model::StorediScsiVolume::volume_arn].
    pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_id][crate::model::StorediScsiVolume::volume_id].
    pub fn set_volume_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_id][crate::model::StorediScsiVolume::volume_id].
    pub fn set_or_clear_volume_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_type][crate::model::StorediScsiVolume::volume_type].
    pub fn set_volume_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_type][crate::model::StorediScsiVolume::volume_type].
    pub fn set_or_clear_volume_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_status][crate::model::StorediScsiVolume::volume_status].
    pub fn set_volume_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_status][crate::model::StorediScsiVolume::volume_status].
    pub fn set_or_clear_volume_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_attachment_status][crate::model::StorediScsiVolume::volume_attachment_status].
    pub fn set_volume_attachment_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_attachment_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_attachment_status][crate::model::StorediScsiVolume::volume_attachment_status].
    pub fn set_or_clear_volume_attachment_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_attachment_status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_size_in_bytes][crate::model::StorediScsiVolume::volume_size_in_bytes].
    pub fn set_volume_size_in_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.volume_size_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_size_in_bytes][crate::model::StorediScsiVolume::volume_size_in_bytes].
    pub fn set_or_clear_volume_size_in_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.volume_size_in_bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_progress][crate::model::StorediScsiVolume::volume_progress].
    pub fn set_volume_progress<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.volume_progress = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_progress][crate::model::StorediScsiVolume::volume_progress].
    pub fn set_or_clear_volume_progress<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.volume_progress = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_disk_id][crate::model::StorediScsiVolume::volume_disk_id].
    pub fn set_volume_disk_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_disk_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_disk_id][crate::model::StorediScsiVolume::volume_disk_id].
    pub fn set_or_clear_volume_disk_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_disk_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_snapshot_id][crate::model::StorediScsiVolume::source_snapshot_id].
    pub fn set_source_snapshot_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_snapshot_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_snapshot_id][crate::model::StorediScsiVolume::source_snapshot_id].
    pub fn set_or_clear_source_snapshot_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_snapshot_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [preserved_existing_data][crate::model::StorediScsiVolume::preserved_existing_data].
    pub fn set_preserved_existing_data<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.preserved_existing_data = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [preserved_existing_data][crate::model::StorediScsiVolume::preserved_existing_data].
    pub fn set_or_clear_preserved_existing_data<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.preserved_existing_data = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_iscsi_attributes][crate::model::StorediScsiVolume::volume_iscsi_attributes].
    pub fn set_volume_iscsi_attributes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::VolumeiScsiAttributes>,
    {
        self.volume_iscsi_attributes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_iscsi_attributes][crate::model::StorediScsiVolume::volume_iscsi_attributes].
    pub fn set_or_clear_volume_iscsi_attributes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::VolumeiScsiAttributes>,
    {
        self.volume_iscsi_attributes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [created_date][crate::model::StorediScsiVolume::created_date].
    pub fn set_created_date<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.created_date = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [created_date][crate::model::StorediScsiVolume::created_date].
    pub fn set_or_clear_created_date<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.created_date = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_used_in_bytes][crate::model::StorediScsiVolume::volume_used_in_bytes].
    pub fn set_volume_used_in_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.volume_used_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_used_in_bytes][crate::model::StorediScsiVolume::volume_used_in_bytes].
    pub fn set_or_clear_volume_used_in_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.volume_used_in_bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_key][crate::model::StorediScsiVolume::kms_key].
    pub fn set_kms_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kms_key][crate::model::StorediScsiVolume::kms_key].
    pub fn set_or_clear_kms_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [target_name][crate::model::StorediScsiVolume::target_name].
    pub fn set_target_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [target_name][crate::model::StorediScsiVolume::target_name].
    pub fn set_or_clear_target_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_name = v.map(|x| x.into());
        self
    }
}

/// Lists the iSCSI properties of a volume.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct VolumeiScsiAttributes {
    /// The Amazon Resource Name (ARN) of the iSCSI target, including the target name.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TargetARN", skip_serializing_if = "std::option::Option::is_none")]
    pub target_arn: std::option::Option<std::string::String>,

    /// The IPv4 address of the network interface on the gateway used for iSCSI traffic.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub network_interface_id: std::option::Option<std::string::String>,

    /// The port used to communicate with iSCSI targets.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub network_interface_port: std::option::Option<i32>,

    /// The logical disk number.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lun_number: std::option::Option<i32>,

    /// Whether mutual CHAP is enabled for the iSCSI target.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub chap_enabled: std::option::Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl VolumeiScsiAttributes {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [target_arn][crate::model::VolumeiScsiAttributes::target_arn].
    pub fn set_target_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [target_arn][crate::model::VolumeiScsiAttributes::target_arn].
    pub fn set_or_clear_target_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network_interface_id][crate::model::VolumeiScsiAttributes::network_interface_id].
    pub fn set_network_interface_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network_interface_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_interface_id][crate::model::VolumeiScsiAttributes::network_interface_id].
    pub fn set_or_clear_network_interface_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network_interface_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network_interface_port][crate::model::VolumeiScsiAttributes::network_interface_port].
    pub fn set_network_interface_port<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.network_interface_port = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_interface_port][crate::model::VolumeiScsiAttributes::network_interface_port].
    pub fn set_or_clear_network_interface_port<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.network_interface_port = v.map(|x| x.into());
        self
    }

    /// Sets the value of [lun_number][crate::model::VolumeiScsiAttributes::lun_number].
    pub fn set_lun_number<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.lun_number = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [lun_number][crate::model::VolumeiScsiAttributes::lun_number].
    pub fn set_or_clear_lun_number<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.lun_number = v.map(|x| x.into());
        self
    }

    /// Sets the value of [chap_enabled][crate::model::VolumeiScsiAttributes::chap_enabled].
    pub fn set_chap_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.chap_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [chap_enabled][crate::model::VolumeiScsiAttributes::chap_enabled].
    pub fn set_or_clear_chap_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.chap_enabled = v.map(|x| x.into());
        self
    }
}

/// Lists the iSCSI properties of a VTL device.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeviceiScsiAttributes {
    /// The Amazon Resource Name (ARN) of the iSCSI target, including the target name.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TargetARN", skip_serializing_if = "std::option::Option::is_none")]
    pub target_arn: std::option::Option<std::string::String>,

    /// The IPv4 address of the network interface on the gateway used for iSCSI traffic.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub network_interface_id: std::option::Option<std::string::String>,

    /// The port used to communicate with iSCSI targets.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub network_interface_port: std::option::Option<i32>,

    /// Whether mutual CHAP is enabled for the iSCSI target.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub chap_enabled: std::option::Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeviceiScsiAttributes {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [target_arn][crate::model::DeviceiScsiAttributes::target_arn].
    pub fn set_target_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [target_arn][crate::model::DeviceiScsiAttributes::target_arn].
    pub fn set_or_clear_target_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.target_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network_interface_id][crate::model::DeviceiScsiAttributes::network_interface_id].
    pub fn set_network_interface_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network_interface_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_interface_id][crate::model::DeviceiScsiAttributes::network_interface_id].
    pub fn set_or_clear_network_interface_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.network_interface_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network_interface_port][crate::model::DeviceiScsiAttributes::network_interface_port].
    pub fn set_network_interface_port<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.network_interface_port = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_interface_port][crate::model::DeviceiScsiAttributes::network_interface_port].
    pub fn set_or_clear_network_interface_port<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.network_interface_port = v.map(|x| x.into());
        self
    }

    /// Sets the value of [chap_enabled][crate::model::DeviceiScsiAttributes::chap_enabled].
    pub fn set_chap_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.chap_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [chap_enabled][crate::model::DeviceiScsiAttributes::chap_enabled].
    pub fn set_or_clear_chap_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.chap_enabled = v.map(|x| x.into());
        self
    }
}

/// Represents a gateway's local disk.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Disk {
    /// The identifier of the local disk, as returned by `ListLocalDisks`.
    ///
    /// Length: 1 to 300 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub disk_id: std::option::Option<std::string::String>,

    /// The path of the local disk.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub disk_path: std::option::Option<std::string::String>,

    /// The device node of the local disk.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub disk_node: std::option::Option<std::string::String>,

    /// The status of the local disk: `present`, `missing` or `mismatch`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub disk_status: std::option::Option<std::string::String>,

    /// The size of the local disk in bytes.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub disk_size_in_bytes: std::option::Option<i64>,

    /// How the local disk is configured, for example `CACHE STORAGE` or `UPLOAD BUFFER`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub disk_allocation_type: std::option::Option<std::string::String>,

    /// The iSCSI qualified name of a disk allocated to a volume.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub disk_allocation_resource: std::option::Option<std::string::String>,

    /// Attributes of the local disk.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub disk_attribute_list: std::vec::Vec<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Disk {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [disk_id][crate::model::Disk::disk_id].
    pub fn set_disk_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.disk_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [disk_id][crate::model::Disk::disk_id].
    pub fn set_or_clear_disk_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.disk_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disk_path][crate::model::Disk::disk_path].
    pub fn set_disk_path<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.disk_path = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [disk_path][crate::model::Disk::disk_path].
    pub fn set_or_clear_disk_path<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.disk_path = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disk_node][crate::model::Disk::disk_node].
    pub fn set_disk_node<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.disk_node = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [disk_node][crate::model::Disk::disk_node].
    pub fn set_or_clear_disk_node<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.disk_node = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disk_status][crate::model::Disk::disk_status].
    pub fn set_disk_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.disk_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [disk_status][crate::model::Disk::disk_status].
    pub fn set_or_clear_disk_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.disk_status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disk_size_in_bytes][crate::model::Disk::disk_size_in_bytes].
    pub fn set_disk_size_in_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.disk_size_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [disk_size_in_bytes][crate::model::Disk::disk_size_in_bytes].
    pub fn set_or_clear_disk_size_in_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.disk_size_in_bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disk_allocation_type][crate::model::Disk::disk_allocation_type].
    pub fn set_disk_allocation_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.disk_allocation_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [disk_allocation_type][crate::model::Disk::disk_allocation_type].
    pub fn set_or_clear_disk_allocation_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.disk_allocation_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disk_allocation_resource][crate::model::Disk::disk_allocation_resource].
    pub fn set_disk_allocation_resource<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.disk_allocation_resource = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [disk_allocation_resource][crate::model::Disk::disk_allocation_resource].
    pub fn set_or_clear_disk_allocation_resource<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.disk_allocation_resource = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disk_attribute_list][crate::model::Disk::disk_attribute_list].
    pub fn set_disk_attribute_list<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.disk_attribute_list = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Represents a device object associated with a tape gateway.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct VtlDevice {
    /// The Amazon Resource Name (ARN) of the VTL device.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "VTLDeviceARN", skip_serializing_if = "std::option::Option::is_none")]
    pub vtl_device_arn: std::option::Option<std::string::String>,

    /// The type of the VTL device.
    #[serde(rename = "VTLDeviceType", skip_serializing_if = "std::option::Option::is_none")]
    pub vtl_device_type: std::option::Option<std::string::String>,

    /// The vendor of the VTL device.
    #[serde(rename = "VTLDeviceVendor", skip_serializing_if = "std::option::Option::is_none")]
    pub vtl_device_vendor: std::option::Option<std::string::String>,

    /// The product identifier of the VTL device.
    #[serde(rename = "VTLDeviceProductIdentifier", skip_serializing_if = "std::option::Option::is_none")]
    pub vtl_device_product_identifier: std::option::Option<std::string::String>,

    /// The iSCSI attributes of the VTL device.
    #[serde(rename = "DeviceiSCSIAttributes", skip_serializing_if = "std::option::Option::is_none")]
    pub device_iscsi_attributes: std::option::Option<crate::model::DeviceiScsiAttributes>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl VtlDevice {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [vtl_device_arn][crate::model::VtlDevice::vtl_device_arn].
    pub fn set_vtl_device_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vtl_device_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vtl_device_arn][crate::model::VtlDevice::vtl_device_arn].
    pub fn set_or_clear_vtl_device_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vtl_device_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [vtl_device_type][crate::model::VtlDevice::vtl_device_type].
    pub fn set_vtl_device_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vtl_device_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vtl_device_type][crate::model::VtlDevice::vtl_device_type].
    pub fn set_or_clear_vtl_device_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vtl_device_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [vtl_device_vendor][crate::model::VtlDevice::vtl_device_vendor].
    pub fn set_vtl_device_vendor<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vtl_device_vendor = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vtl_device_vendor][crate::model::VtlDevice::vtl_device_vendor].
    pub fn set_or_clear_vtl_device_vendor<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vtl_device_vendor = v.map(|x| x.into());
        self
    }

    /// Sets the value of [vtl_device_product_identifier][crate::model::VtlDevice::vtl_device_product_identifier].
    pub fn set_vtl_device_product_identifier<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vtl_device_product_identifier = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vtl_device_product_identifier][crate::model::VtlDevice::vtl_device_product_identifier].
    pub fn set_or_clear_vtl_device_product_identifier<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vtl_device_product_identifier = v.map(|x| x.into());
        self
    }

    /// Sets the value of [device_iscsi_attributes][crate::model::VtlDevice::device_iscsi_attributes].
    pub fn set_device_iscsi_attributes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::DeviceiScsiAttributes>,
    {
        self.device_iscsi_attributes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [device_iscsi_attributes][crate::model::VtlDevice::device_iscsi_attributes].
    pub fn set_or_clear_device_iscsi_attributes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::DeviceiScsiAttributes>,
    {
        self.device_iscsi_attributes = v.map(|x| x.into());
        self
    }
}

/// Describes a virtual tape object.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Tape {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TapeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub tape_arn: std::option::Option<std::string::String>,

    /// The barcode of the virtual tape.
    ///
    /// Length: 7 to 16 characters, upper-case letters A to Z and digits.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tape_barcode: std::option::Option<std::string::String>,

    /// The date the virtual tape was created.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tape_created_date: std::option::Option<wkt::Timestamp>,

    /// The size of the virtual tape in bytes.
    ///
    /// The size must be aligned by gigabyte (1024\*1024\*1024 bytes).
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tape_size_in_bytes: std::option::Option<i64>,

    /// The current state of the virtual tape.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tape_status: std::option::Option<std::string::String>,

    /// The ARN of the VTL device where the virtual tape is loaded.
    #[serde(rename = "VTLDevice", skip_serializing_if = "std::option::Option::is_none")]
    pub vtl_device: std::option::Option<std::string::String>,

    /// The percentage complete while the tape is being created or restored.
    ///
    /// Range: 0 to 100.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub progress: std::option::Option<f64>,

    /// The size, in bytes, of the data stored on the virtual tape.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tape_used_in_bytes: std::option::Option<i64>,

    /// The ARN of the symmetric customer master key used for server-side encryption.
    ///
    /// Length: 7 to 2048 characters. Only set when `KMSEncrypted` is `true`.
    #[serde(rename = "KMSKey", skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key: std::option::Option<std::string::String>,

    /// The identifier of the tape pool, for example `GLACIER` or `DEEP_ARCHIVE`.
    ///
    /// Length: 1 to 100 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub pool_id: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Tape {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [tape_arn][crate::model::Tape::tape_arn].
    pub fn set_tape_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_arn][crate::model::Tape::tape_arn].
    pub fn set_or_clear_tape_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tape_barcode][crate::model::Tape::tape_barcode].
    pub fn set_tape_barcode<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_barcode = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_barcode][crate::model::Tape::tape_barcode].
    pub fn set_or_clear_tape_barcode<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_barcode = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tape_created_date][crate::model::Tape::tape_created_date].
    pub fn set_tape_created_date<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.tape_created_date = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_created_date][crate::model::Tape::tape_created_date].
    pub fn set_or_clear_tape_created_date<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.tape_created_date = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tape_size_in_bytes][crate::model::Tape::tape_size_in_bytes].
    pub fn set_tape_size_in_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.tape_size_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_size_in_bytes][crate::model::Tape::tape_size_in_bytes].
    pub fn set_or_clear_tape_size_in_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.tape_size_in_bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tape_status][crate::model::Tape::tape_status].
    pub fn set_tape_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_status][crate::model::Tape::tape_status].
    pub fn set_or_clear_tape_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [vtl_device][crate::model::Tape::vtl_device].
    pub fn set_vtl_device<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vtl_device = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vtl_device][crate::model::Tape::vtl_device].
    pub fn set_or_clear_vtl_device<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vtl_device = v.map(|x| x.into());
        self
    }

    /// Sets the value of [progress][crate::model::Tape::progress].
    pub fn set_progress<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.progress = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [progress][crate::model::Tape::progress].
    pub fn set_or_clear_progress<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.progress = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tape_used_in_bytes][crate::model::Tape::tape_used_in_bytes].
    pub fn set_tape_used_in_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.tape_used_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_used_in_bytes][crate::model::Tape::tape_used_in_bytes].
    pub fn set_or_clear_tape_used_in_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.tape_used_in_bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_key][crate::model::Tape::kms_key].
    pub fn set_kms_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kms_key][crate::model::Tape::kms_key].
    pub fn set_or_clear_kms_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [pool_id][crate::model::Tape::pool_id].
    pub fn set_pool_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.pool_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [pool_id][crate::model::Tape::pool_id].
    pub fn set_or_clear_pool_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.pool_id = v.map(|x| x.into());
        self
    }
}

/// Represents a virtual tape that is archived in the virtual tape shelf (VTS).
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct TapeArchive {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TapeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub tape_arn: std::option::Option<std::string::String>,

    /// The barcode of the virtual tape.
    ///
    /// Length: 7 to 16 characters, upper-case letters A to Z and digits.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tape_barcode: std::option::Option<std::string::String>,

    /// The date the virtual tape was created.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tape_created_date: std::option::Option<wkt::Timestamp>,

    /// The size of the virtual tape in bytes.
    ///
    /// The size must be aligned by gigabyte (1024\*1024\*1024 bytes).
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tape_size_in_bytes: std::option::Option<i64>,

    /// The time the archiving of the virtual tape completed.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub completion_time: std::option::Option<wkt::Timestamp>,

    /// The ARN of the tape gateway the virtual tape is being retrieved to.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub retrieved_to: std::option::Option<std::string::String>,

    /// The current state of the virtual tape.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tape_status: std::option::Option<std::string::String>,

    /// The size, in bytes, of the data stored on the virtual tape.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tape_used_in_bytes: std::option::Option<i64>,

    /// The ARN of the symmetric customer master key used for server-side encryption.
    ///
    /// Length: 7 to 2048 characters. Only set when `KMSEncrypted` is `true`.
    #[serde(rename = "KMSKey", skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key: std::option::Option<std::string::String>,

    /// The identifier of the tape pool, for example `GLACIER` or `DEEP_ARCHIVE`.
    ///
    /// Length: 1 to 100 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub pool_id: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl TapeArchive {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [tape_arn][crate::model::TapeArchive::tape_arn].
    pub fn set_tape_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_arn][crate::model::TapeArchive::tape_arn].
    pub fn set_or_clear_tape_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tape_barcode][crate::model::TapeArchive::tape_barcode].
    pub fn set_tape_barcode<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_barcode = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_barcode][crate::model::TapeArchive::tape_barcode].
    pub fn set_or_clear_tape_barcode<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_barcode = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tape_created_date][crate::model::TapeArchive::tape_created_date].
    pub fn set_tape_created_date<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.tape_created_date = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_created_date][crate::model::TapeArchive::tape_created_date].
    pub fn set_or_clear_tape_created_date<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.tape_created_date = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tape_size_in_bytes][crate::model::TapeArchive::tape_size_in_bytes].
    pub fn set_tape_size_in_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.tape_size_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_size_in_bytes][crate::model::TapeArchive::tape_size_in_bytes].
    pub fn set_or_clear_tape_size_in_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.tape_size_in_bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [completion_time][crate::model::TapeArchive::completion_time].
    pub fn set_completion_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.completion_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [completion_time][crate::model::TapeArchive::completion_time].
    pub fn set_or_clear_completion_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.completion_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [retrieved_to][crate::model::TapeArchive::retrieved_to].
    pub fn set_retrieved_to<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.retrieved_to = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [retrieved_to][crate::model::TapeArchive::retrieved_to].
    pub fn set_or_clear_retrieved_to<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.retrieved_to = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tape_status][crate::model::TapeArchive::tape_status].
    pub fn set_tape_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_status][crate::model::TapeArchive::tape_status].
    pub fn set_or_clear_tape_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tape_used_in_bytes][crate::model::TapeArchive::tape_used_in_bytes].
    pub fn set_tape_used_in_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.tape_used_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_used_in_bytes][crate::model::TapeArchive::tape_used_in_bytes].
    pub fn set_or_clear_tape_used_in_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.tape_used_in_bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_key][crate::model::TapeArchive::kms_key].
    pub fn set_kms_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kms_key][crate::model::TapeArchive::kms_key].
    pub fn set_or_clear_kms_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [pool_id][crate::model::TapeArchive::pool_id].
    pub fn set_pool_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.pool_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [pool_id][crate::model::TapeArchive::pool_id].
    pub fn set_or_clear_pool_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.pool_id = v.map(|x| x.into());
        self
    }
}

/// Describes a virtual tape.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct TapeInfo {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TapeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub tape_arn: std::option::Option<std::string::String>,

    /// The barcode of the virtual tape.
    ///
    /// Length: 7 to 16 characters, upper-case letters A to Z and digits.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tape_barcode: std::option::Option<std::string::String>,

    /// The size of the virtual tape in bytes.
    ///
    /// The size must be aligned by gigabyte (1024\*1024\*1024 bytes).
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tape_size_in_bytes: std::option::Option<i64>,

    /// The current state of the virtual tape.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tape_status: std::option::Option<std::string::String>,

    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The identifier of the tape pool, for example `GLACIER` or `DEEP_ARCHIVE`.
    ///
    /// Length: 1 to 100 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub pool_id: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl TapeInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [tape_arn][crate::model::TapeInfo::tape_arn].
    pub fn set_tape_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_arn][crate::model::TapeInfo::tape_arn].
    pub fn set_or_clear_tape_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tape_barcode][crate::model::TapeInfo::tape_barcode].
    pub fn set_tape_barcode<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_barcode = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_barcode][crate::model::TapeInfo::tape_barcode].
    pub fn set_or_clear_tape_barcode<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_barcode = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tape_size_in_bytes][crate::model::TapeInfo::tape_size_in_bytes].
    pub fn set_tape_size_in_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.tape_size_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_size_in_bytes][crate::model::TapeInfo::tape_size_in_bytes].
    pub fn set_or_clear_tape_size_in_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.tape_size_in_bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tape_status][crate::model::TapeInfo::tape_status].
    pub fn set_tape_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_status][crate::model::TapeInfo::tape_status].
    pub fn set_or_clear_tape_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_arn][crate::model::TapeInfo::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::TapeInfo::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [pool_id][crate::model::TapeInfo::pool_id].
    pub fn set_pool_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.pool_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [pool_id][crate::model::TapeInfo::pool_id].
    pub fn set_or_clear_pool_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.pool_id = v.map(|x| x.into());
        self
    }
}

/// Describes a recovery point.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct TapeRecoveryPointInfo {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "TapeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub tape_arn: std::option::Option<std::string::String>,

    /// The time the recovery point was taken.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tape_recovery_point_time: std::option::Option<wkt::Timestamp>,

    /// The size of the virtual tape in bytes.
    ///
    /// The size must be aligned by gigabyte (1024\*1024\*1024 bytes).
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tape_size_in_bytes: std::option::Option<i64>,

    /// The current state of the virtual tape.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tape_status: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl TapeRecoveryPointInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [tape_arn][crate::model::TapeRecoveryPointInfo::tape_arn].
    pub fn set_tape_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_arn][crate::model::TapeRecoveryPointInfo::tape_arn].
    pub fn set_or_clear_tape_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tape_recovery_point_time][crate::model::TapeRecoveryPointInfo::tape_recovery_point_time].
    pub fn set_tape_recovery_point_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.tape_recovery_point_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_recovery_point_time][crate::model::TapeRecoveryPointInfo::tape_recovery_point_time].
    pub fn set_or_clear_tape_recovery_point_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.tape_recovery_point_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tape_size_in_bytes][crate::model::TapeRecoveryPointInfo::tape_size_in_bytes].
    pub fn set_tape_size_in_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.tape_size_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_size_in_bytes][crate::model::TapeRecoveryPointInfo::tape_size_in_bytes].
    pub fn set_or_clear_tape_size_in_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.tape_size_in_bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tape_status][crate::model::TapeRecoveryPointInfo::tape_status].
    pub fn set_tape_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_status][crate::model::TapeRecoveryPointInfo::tape_status].
    pub fn set_or_clear_tape_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_status = v.map(|x| x.into());
        self
    }
}

/// Describes a gateway object.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GatewayInfo {
    /// The unique identifier assigned to the gateway.
    ///
    /// Length: 12 to 30 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_id: std::option::Option<std::string::String>,

    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The type of the gateway, for example `STORED`, `CACHED`, `VTL` or `FILE_S3`.
    ///
    /// Length: 2 to 20 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_type: std::option::Option<std::string::String>,

    /// The state of the gateway: `ACTIVE` or `SHUTDOWN`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_operational_state: std::option::Option<std::string::String>,

    /// The name you configured for the gateway.
    ///
    /// Length: 2 to 255 characters, matching `^[ -\.0-\[\]-~]*[!-\.0-\[\]-~][ -\.0-\[\]-~]*$`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_name: std::option::Option<std::string::String>,

    /// The ID of the Amazon EC2 instance used to launch the gateway.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ec2_instance_id: std::option::Option<std::string::String>,

    /// The region where the Amazon EC2 instance is located.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ec2_instance_region: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl GatewayInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gateway_id][crate::model::GatewayInfo::gateway_id].
    pub fn set_gateway_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_id][crate::model::GatewayInfo::gateway_id].
    pub fn set_or_clear_gateway_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_arn][crate::model::GatewayInfo::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::GatewayInfo::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_type][crate::model::GatewayInfo::gateway_type].
    pub fn set_gateway_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_type][crate::model::GatewayInfo::gateway_type].
    pub fn set_or_clear_gateway_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_operational_state][crate::model::GatewayInfo::gateway_operational_state].
    pub fn set_gateway_operational_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_operational_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_operational_state][crate::model::GatewayInfo::gateway_operational_state].
    pub fn set_or_clear_gateway_operational_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_operational_state = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_name][crate::model::GatewayInfo::gateway_name].
    pub fn set_gateway_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_name][crate::model::GatewayInfo::gateway_name].
    pub fn set_or_clear_gateway_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ec2_instance_id][crate::model::GatewayInfo::ec2_instance_id].
    pub fn set_ec2_instance_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ec2_instance_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ec2_instance_id][crate::model::GatewayInfo::ec2_instance_id].
    pub fn set_or_clear_ec2_instance_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ec2_instance_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ec2_instance_region][crate::model::GatewayInfo::ec2_instance_region].
    pub fn set_ec2_instance_region<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ec2_instance_region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ec2_instance_region][crate::model::GatewayInfo::ec2_instance_region].
    pub fn set_or_clear_ec2_instance_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ec2_instance_region = v.map(|x| x.into());
        self
    }
}

/// Describes a gateway's network interface.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct NetworkInterface {
    /// The IPv4 address of the interface.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ipv4_address: std::option::Option<std::string::String>,

    /// The MAC address of the interface.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub mac_address: std::option::Option<std::string::String>,

    /// The IPv6 address of the interface.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ipv6_address: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl NetworkInterface {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [ipv4_address][crate::model::NetworkInterface::ipv4_address].
    pub fn set_ipv4_address<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ipv4_address = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ipv4_address][crate::model::NetworkInterface::ipv4_address].
    pub fn set_or_clear_ipv4_address<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ipv4_address = v.map(|x| x.into());
        self
    }

    /// Sets the value of [mac_address][crate::model::NetworkInterface::mac_address].
    pub fn set_mac_address<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.mac_address = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [mac_address][crate::model::NetworkInterface::mac_address].
    pub fn set_or_clear_mac_address<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.mac_address = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ipv6_address][crate::model::NetworkInterface::ipv6_address].
    pub fn set_ipv6_address<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ipv6_address = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ipv6_address][crate::model::NetworkInterface::ipv6_address].
    pub fn set_or_clear_ipv6_address<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.ipv6_address = v.map(|x| x.into());
        self
    }
}

/// Describes a storage volume object.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct VolumeInfo {
    /// The Amazon Resource Name (ARN) of the storage volume.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "VolumeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub volume_arn: std::option::Option<std::string::String>,

    /// The unique identifier of the volume, for example `vol-AE4B946D`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_id: std::option::Option<std::string::String>,

    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// The unique identifier assigned to the gateway.
    ///
    /// Length: 12 to 30 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_id: std::option::Option<std::string::String>,

    /// The type of the volume, for example `CACHED iSCSI` or `STORED iSCSI`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_type: std::option::Option<std::string::String>,

    /// The size of the volume in bytes.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_size_in_bytes: std::option::Option<i64>,

    /// Whether the volume is attached to a gateway: `ATTACHED`, `ATTACHING`, `DETACHED` or `DETACHING`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_attachment_status: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl VolumeInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [volume_arn][crate::model::VolumeInfo::volume_arn].
    pub fn set_volume_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_arn][crate::model::VolumeInfo::volume_arn].
    pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_id][crate::model::VolumeInfo::volume_id].
    pub fn set_volume_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_id][crate::model::VolumeInfo::volume_id].
    pub fn set_or_clear_volume_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_arn][crate::model::VolumeInfo::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::VolumeInfo::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_id][crate::model::VolumeInfo::gateway_id].
    pub fn set_gateway_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_id][crate::model::VolumeInfo::gateway_id].
    pub fn set_or_clear_gateway_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_type][crate::model::VolumeInfo::volume_type].
    pub fn set_volume_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_type][crate::model::VolumeInfo::volume_type].
    pub fn set_or_clear_volume_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_size_in_bytes][crate::model::VolumeInfo::volume_size_in_bytes].
    pub fn set_volume_size_in_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.volume_size_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_size_in_bytes][crate::model::VolumeInfo::volume_size_in_bytes].
    pub fn set_or_clear_volume_size_in_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.volume_size_in_bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_attachment_status][crate::model::VolumeInfo::volume_attachment_status].
    pub fn set_volume_attachment_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_attachment_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_attachment_status][crate::model::VolumeInfo::volume_attachment_status].
    pub fn set_or_clear_volume_attachment_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_attachment_status = v.map(|x| x.into());
        self
    }
}

/// Describes a storage volume recovery point object.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct VolumeRecoveryPointInfo {
    /// The Amazon Resource Name (ARN) of the storage volume.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "VolumeARN", skip_serializing_if = "std::option::Option::is_none")]
    pub volume_arn: std::option::Option<std::string::String>,

    /// The size of the volume in bytes.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_size_in_bytes: std::option::Option<i64>,

    /// The size of the data stored on the volume, in bytes.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_usage_in_bytes: std::option::Option<i64>,

    /// The time the recovery point was taken, in ISO 8601 format.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_recovery_point_time: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl VolumeRecoveryPointInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [volume_arn][crate::model::VolumeRecoveryPointInfo::volume_arn].
    pub fn set_volume_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_arn][crate::model::VolumeRecoveryPointInfo::volume_arn].
    pub fn set_or_clear_volume_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_size_in_bytes][crate::model::VolumeRecoveryPointInfo::volume_size_in_bytes].
    pub fn set_volume_size_in_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.volume_size_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_size_in_bytes][crate::model::VolumeRecoveryPointInfo::volume_size_in_bytes].
    pub fn set_or_clear_volume_size_in_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.volume_size_in_bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_usage_in_bytes][crate::model::VolumeRecoveryPointInfo::volume_usage_in_bytes].
    pub fn set_volume_usage_in_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.volume_usage_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_usage_in_bytes][crate::model::VolumeRecoveryPointInfo::volume_usage_in_bytes].
    pub fn set_or_clear_volume_usage_in_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.volume_usage_in_bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [volume_recovery_point_time][crate::model::VolumeRecoveryPointInfo::volume_recovery_point_time].
    pub fn set_volume_recovery_point_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_recovery_point_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [volume_recovery_point_time][crate::model::VolumeRecoveryPointInfo::volume_recovery_point_time].
    pub fn set_or_clear_volume_recovery_point_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.volume_recovery_point_time = v.map(|x| x.into());
        self
    }
}

/// Describes a file share.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct FileShareInfo {
    /// The protocol of the file share.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub file_share_type: std::option::Option<crate::model::FileShareType>,

    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "FileShareARN", skip_serializing_if = "std::option::Option::is_none")]
    pub file_share_arn: std::option::Option<std::string::String>,

    /// The ID of the file share.
    ///
    /// Length: 12 to 30 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub file_share_id: std::option::Option<std::string::String>,

    /// The status of the file share, for example `CREATING` or `AVAILABLE`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub file_share_status: std::option::Option<std::string::String>,

    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl FileShareInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [file_share_type][crate::model::FileShareInfo::file_share_type].
    pub fn set_file_share_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::FileShareType>,
    {
        self.file_share_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [file_share_type][crate::model::FileShareInfo::file_share_type].
    pub fn set_or_clear_file_share_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::FileShareType>,
    {
        self.file_share_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [file_share_arn][crate::model::FileShareInfo::file_share_arn].
    pub fn set_file_share_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [file_share_arn][crate::model::FileShareInfo::file_share_arn].
    pub fn set_or_clear_file_share_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [file_share_id][crate::model::FileShareInfo::file_share_id].
    pub fn set_file_share_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [file_share_id][crate::model::FileShareInfo::file_share_id].
    pub fn set_or_clear_file_share_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [file_share_status][crate::model::FileShareInfo::file_share_status].
    pub fn set_file_share_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [file_share_status][crate::model::FileShareInfo::file_share_status].
    pub fn set_or_clear_file_share_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_arn][crate::model::FileShareInfo::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::FileShareInfo::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// Describes Network File System (NFS) file share default values.
///
/// Files and folders stored as Amazon S3 objects in S3 buckets don't, by default,
/// have Unix file permissions assigned to them. These values are applied when the
/// gateway discovers objects without file permissions.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct NfsFileShareDefaults {
    /// The Unix file mode, in octal, for files in the file share. The default is `0666`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub file_mode: std::option::Option<std::string::String>,

    /// The Unix directory mode, in octal, for directories in the file share. The default is `0777`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub directory_mode: std::option::Option<std::string::String>,

    /// The default group ID for the file share. The default is `nfsnobody`.
    ///
    /// Range: 0 to 4294967294.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub group_id: std::option::Option<i64>,

    /// The default owner ID for the file share. The default is `nfsnobody`.
    ///
    /// Range: 0 to 4294967294.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub owner_id: std::option::Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl NfsFileShareDefaults {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [file_mode][crate::model::NfsFileShareDefaults::file_mode].
    pub fn set_file_mode<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_mode = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [file_mode][crate::model::NfsFileShareDefaults::file_mode].
    pub fn set_or_clear_file_mode<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_mode = v.map(|x| x.into());
        self
    }

    /// Sets the value of [directory_mode][crate::model::NfsFileShareDefaults::directory_mode].
    pub fn set_directory_mode<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.directory_mode = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [directory_mode][crate::model::NfsFileShareDefaults::directory_mode].
    pub fn set_or_clear_directory_mode<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.directory_mode = v.map(|x| x.into());
        self
    }

    /// Sets the value of [group_id][crate::model::NfsFileShareDefaults::group_id].
    pub fn set_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [group_id][crate::model::NfsFileShareDefaults::group_id].
    pub fn set_or_clear_group_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.group_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [owner_id][crate::model::NfsFileShareDefaults::owner_id].
    pub fn set_owner_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.owner_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [owner_id][crate::model::NfsFileShareDefaults::owner_id].
    pub fn set_or_clear_owner_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.owner_id = v.map(|x| x.into());
        self
    }
}

/// The Unix file permissions and ownership information assigned, by default, to
/// native S3 objects when a file gateway discovers them in S3 buckets, together
/// with the configuration of an NFS file share.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct NfsFileShareInfo {
    /// File share default values applied to newly created files and directories.
    #[serde(rename = "NFSFileShareDefaults", skip_serializing_if = "std::option::Option::is_none")]
    pub nfs_file_share_defaults: std::option::Option<crate::model::NfsFileShareDefaults>,

    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "FileShareARN", skip_serializing_if = "std::option::Option::is_none")]
    pub file_share_arn: std::option::Option<std::string::String>,

    /// The ID of the file share.
    ///
    /// Length: 12 to 30 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub file_share_id: std::option::Option<std::string::String>,

    /// The status of the file share, for example `CREATING` or `AVAILABLE`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub file_share_status: std::option::Option<std::string::String>,

    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// Set to `true` to encrypt objects with a customer-managed key, `false` for service-managed keys.
    #[serde(rename = "KMSEncrypted", skip_serializing_if = "std::option::Option::is_none")]
    pub kms_encrypted: std::option::Option<bool>,

    /// The ARN of the symmetric customer master key used for server-side encryption.
    ///
    /// Length: 7 to 2048 characters. Only set when `KMSEncrypted` is `true`.
    #[serde(rename = "KMSKey", skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key: std::option::Option<std::string::String>,

    /// The path of the file share as exposed by the gateway.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub path: std::option::Option<std::string::String>,

    /// The ARN of the IAM role the file gateway assumes when it accesses the bucket.
    ///
    /// Length: 50 to 500 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub role: std::option::Option<std::string::String>,

    /// The ARN of the backend storage used for the file share, optionally with a key prefix.
    ///
    /// Length: 16 to 1400 characters.
    #[serde(rename = "LocationARN", skip_serializing_if = "std::option::Option::is_none")]
    pub location_arn: std::option::Option<std::string::String>,

    /// The default storage class for objects written by the file gateway, for example `S3_STANDARD`.
    ///
    /// Length: 5 to 50 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub default_storage_class: std::option::Option<std::string::String>,

    /// The access control list applied to objects written to the bucket.
    #[serde(rename = "ObjectACL", skip_serializing_if = "std::option::Option::is_none")]
    pub object_acl: std::option::Option<crate::model::ObjectAcl>,

    /// The IP addresses or CIDR blocks of the clients allowed to access the file share.
    ///
    /// Between 1 and 100 entries.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub client_list: std::vec::Vec<std::string::String>,

    /// The user mapped to anonymous users: `RootSquash`, `NoSquash` or `AllSquash`.
    ///
    /// Length: 5 to 15 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub squash: std::option::Option<std::string::String>,

    /// Set to `true` to export the file share as read-only.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_only: std::option::Option<bool>,

    /// Set to `true` to guess the MIME type of uploaded objects from their file extensions.
    #[serde(rename = "GuessMIMETypeEnabled", skip_serializing_if = "std::option::Option::is_none")]
    pub guess_mime_type_enabled: std::option::Option<bool>,

    /// Set to `true` when the requester, not the bucket owner, pays for data access.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub requester_pays: std::option::Option<bool>,

    /// A list of up to 50 tags assigned to the resource.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tags: std::vec::Vec<crate::model::Tag>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl NfsFileShareInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [nfs_file_share_defaults][crate::model::NfsFileShareInfo::nfs_file_share_defaults].
    pub fn set_nfs_file_share_defaults<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::NfsFileShareDefaults>,
    {
        self.nfs_file_share_defaults = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [nfs_file_share_defaults][crate::model::NfsFileShareInfo::nfs_file_share_defaults].
    pub fn set_or_clear_nfs_file_share_defaults<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::NfsFileShareDefaults>,
    {
        self.nfs_file_share_defaults = v.map(|x| x.into());
        self
    }

    /// Sets the value of [file_share_arn][crate::model::NfsFileShareInfo::file_share_arn].
    pub fn set_file_share_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [file_share_arn][crate::model::NfsFileShareInfo::file_share_arn].
    pub fn set_or_clear_file_share_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [file_share_id][crate::model::NfsFileShareInfo::file_share_id].
    pub fn set_file_share_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [file_share_id][crate::model::NfsFileShareInfo::file_share_id].
    pub fn set_or_clear_file_share_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [file_share_status][crate::model::NfsFileShareInfo::file_share_status].
    pub fn set_file_share_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [file_share_status][crate::model::NfsFileShareInfo::file_share_status].
    pub fn set_or_clear_file_share_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_arn][crate::model::NfsFileShareInfo::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::NfsFileShareInfo::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_encrypted][crate::model::NfsFileShareInfo::kms_encrypted].
    pub fn set_kms_encrypted<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.kms_encrypted = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kms_encrypted][crate::model::NfsFileShareInfo::kms_encrypted].
    pub fn set_or_clear_kms_encrypted<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.kms_encrypted = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_key][crate::model::NfsFileShareInfo::kms_key].
    pub fn set_kms_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kms_key][crate::model::NfsFileShareInfo::kms_key].
    pub fn set_or_clear_kms_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [path][crate::model::NfsFileShareInfo::path].
    pub fn set_path<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.path = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [path][crate::model::NfsFileShareInfo::path].
    pub fn set_or_clear_path<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.path = v.map(|x| x.into());
        self
    }

    /// Sets the value of [role][crate::model::NfsFileShareInfo::role].
    pub fn set_role<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.role = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [role][crate::model::NfsFileShareInfo::role].
    pub fn set_or_clear_role<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.role = v.map(|x| x.into());
        self
    }

    /// Sets the value of [location_arn][crate::model::NfsFileShareInfo::location_arn].
    pub fn set_location_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.location_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [location_arn][crate::model::NfsFileShareInfo::location_arn].
    pub fn set_or_clear_location_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.location_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [default_storage_class][crate::model::NfsFileShareInfo::default_storage_class].
    pub fn set_default_storage_class<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.default_storage_class = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [default_storage_class][crate::model::NfsFileShareInfo::default_storage_class].
    pub fn set_or_clear_default_storage_class<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.default_storage_class = v.map(|x| x.into());
        self
    }

    /// Sets the value of [object_acl][crate::model::NfsFileShareInfo::object_acl].
    pub fn set_object_acl<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ObjectAcl>,
    {
        self.object_acl = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [object_acl][crate::model::NfsFileShareInfo::object_acl].
    pub fn set_or_clear_object_acl<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ObjectAcl>,
    {
        self.object_acl = v.map(|x| x.into());
        self
    }

    /// Sets the value of [client_list][crate::model::NfsFileShareInfo::client_list].
    pub fn set_client_list<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.client_list = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [squash][crate::model::NfsFileShareInfo::squash].
    pub fn set_squash<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.squash = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [squash][crate::model::NfsFileShareInfo::squash].
    pub fn set_or_clear_squash<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.squash = v.map(|x| x.into());
        self
    }

    /// Sets the value of [read_only][crate::model::NfsFileShareInfo::read_only].
    pub fn set_read_only<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.read_only = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [read_only][crate::model::NfsFileShareInfo::read_only].
    pub fn set_or_clear_read_only<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.read_only = v.map(|x| x.into());
        self
    }

    /// Sets the value of [guess_mime_type_enabled][crate::model::NfsFileShareInfo::guess_mime_type_enabled].
    pub fn set_guess_mime_type_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.guess_mime_type_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [guess_mime_type_enabled][crate::model::NfsFileShareInfo::guess_mime_type_enabled].
    pub fn set_or_clear_guess_mime_type_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.guess_mime_type_enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [requester_pays][crate::model::NfsFileShareInfo::requester_pays].
    pub fn set_requester_pays<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.requester_pays = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [requester_pays][crate::model::NfsFileShareInfo::requester_pays].
    pub fn set_or_clear_requester_pays<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.requester_pays = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tags][crate::model::NfsFileShareInfo::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        use std::iter::Iterator;
        self.tags = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The Windows file permissions and ownership information assigned, by default,
/// to native S3 objects when a file gateway discovers them in S3 buckets, together
/// with the configuration of an SMB file share.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct SmbFileShareInfo {
    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "FileShareARN", skip_serializing_if = "std::option::Option::is_none")]
    pub file_share_arn: std::option::Option<std::string::String>,

    /// The ID of the file share.
    ///
    /// Length: 12 to 30 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub file_share_id: std::option::Option<std::string::String>,

    /// The status of the file share, for example `CREATING` or `AVAILABLE`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub file_share_status: std::option::Option<std::string::String>,

    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    /// Set to `true` to encrypt objects with a customer-managed key, `false` for service-managed keys.
    #[serde(rename = "KMSEncrypted", skip_serializing_if = "std::option::Option::is_none")]
    pub kms_encrypted: std::option::Option<bool>,

    /// The ARN of the symmetric customer master key used for server-side encryption.
    ///
    /// Length: 7 to 2048 characters. Only set when `KMSEncrypted` is `true`.
    #[serde(rename = "KMSKey", skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key: std::option::Option<std::string::String>,

    /// The path of the file share as exposed by the gateway.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub path: std::option::Option<std::string::String>,

    /// The ARN of the IAM role the file gateway assumes when it accesses the bucket.
    ///
    /// Length: 50 to 500 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub role: std::option::Option<std::string::String>,

    /// The ARN of the backend storage used for the file share, optionally with a key prefix.
    ///
    /// Length: 16 to 1400 characters.
    #[serde(rename = "LocationARN", skip_serializing_if = "std::option::Option::is_none")]
    pub location_arn: std::option::Option<std::string::String>,

    /// The default storage class for objects written by the file gateway, for example `S3_STANDARD`.
    ///
    /// Length: 5 to 50 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub default_storage_class: std::option::Option<std::string::String>,

    /// The access control list applied to objects written to the bucket.
    #[serde(rename = "ObjectACL", skip_serializing_if = "std::option::Option::is_none")]
    pub object_acl: std::option::Option<crate::model::ObjectAcl>,

    /// Set to `true` to export the file share as read-only.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_only: std::option::Option<bool>,

    /// Set to `true` to guess the MIME type of uploaded objects from their file extensions.
    #[serde(rename = "GuessMIMETypeEnabled", skip_serializing_if = "std::option::Option::is_none")]
    pub guess_mime_type_enabled: std::option::Option<bool>,

    /// Set to `true` when the requester, not the bucket owner, pays for data access.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub requester_pays: std::option::Option<bool>,

    /// Set to `true` to enable access control lists on the SMB file share.
    #[serde(rename = "SMBACLEnabled", skip_serializing_if = "std::option::Option::is_none")]
    pub smb_acl_enabled: std::option::Option<bool>,

    /// Users in the Active Directory with administrator rights to the file share.
    ///
    /// At most 100 entries.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub admin_user_list: std::vec::Vec<std::string::String>,

    /// Users or groups in the Active Directory allowed to access the file share.
    ///
    /// At most 100 entries.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub valid_user_list: std::vec::Vec<std::string::String>,

    /// Users or groups in the Active Directory denied access to the file share.
    ///
    /// At most 100 entries.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub invalid_user_list: std::vec::Vec<std::string::String>,

    /// The ARN of the storage used for the audit logs.
    ///
    /// At most 1024 characters.
    #[serde(rename = "AuditDestinationARN", skip_serializing_if = "std::option::Option::is_none")]
    pub audit_destination_arn: std::option::Option<std::string::String>,

    /// The authentication method used by SMB clients: `ActiveDirectory` or `GuestAccess`.
    ///
    /// Length: 5 to 15 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub authentication: std::option::Option<std::string::String>,

    /// A list of up to 50 tags assigned to the resource.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tags: std::vec::Vec<crate::model::Tag>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl SmbFileShareInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [file_share_arn][crate::model::SmbFileShareInfo::file_share_arn].
    pub fn set_file_share_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [file_share_arn][crate::model::SmbFileShareInfo::file_share_arn].
    pub fn set_or_clear_file_share_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [file_share_id][crate::model::SmbFileShareInfo::file_share_id].
    pub fn set_file_share_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [file_share_id][crate::model::SmbFileShareInfo::file_share_id].
    pub fn set_or_clear_file_share_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [file_share_status][crate::model::SmbFileShareInfo::file_share_status].
    pub fn set_file_share_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [file_share_status][crate::model::SmbFileShareInfo::file_share_status].
    pub fn set_or_clear_file_share_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.file_share_status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_arn][crate::model::SmbFileShareInfo::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::SmbFileShareInfo::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_encrypted][crate::model::SmbFileShareInfo::kms_encrypted].
    pub fn set_kms_encrypted<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.kms_encrypted = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kms_encrypted][crate::model::SmbFileShareInfo::kms_encrypted].
    pub fn set_or_clear_kms_encrypted<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.kms_encrypted = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_key][crate::model::SmbFileShareInfo::kms_key].
    pub fn set_kms_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [kms_key][crate::model::SmbFileShareInfo::kms_key].
    pub fn set_or_clear_kms_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.kms_key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [path][crate::model::SmbFileShareInfo::path].
    pub fn set_path<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.path = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [path][crate::model::SmbFileShareInfo::path].
    pub fn set_or_clear_path<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.path = v.map(|x| x.into());
        self
    }

    /// Sets the value of [role][crate::model::SmbFileShareInfo::role].
    pub fn set_role<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.role = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [role][crate::model::SmbFileShareInfo::role].
    pub fn set_or_clear_role<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.role = v.map(|x| x.into());
        self
    }

    /// Sets the value of [location_arn][crate::model::SmbFileShareInfo::location_arn].
    pub fn set_location_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.location_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [location_arn][crate::model::SmbFileShareInfo::location_arn].
    pub fn set_or_clear_location_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.location_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [default_storage_class][crate::model::SmbFileShareInfo::default_storage_class].
    pub fn set_default_storage_class<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.default_storage_class = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [default_storage_class][crate::model::SmbFileShareInfo::default_storage_class].
    pub fn set_or_clear_default_storage_class<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.default_storage_class = v.map(|x| x.into());
        self
    }

    /// Sets the value of [object_acl][crate::model::SmbFileShareInfo::object_acl].
    pub fn set_object_acl<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ObjectAcl>,
    {
        self.object_acl = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [object_acl][crate::model::SmbFileShareInfo::object_acl].
    pub fn set_or_clear_object_acl<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ObjectAcl>,
    {
        self.object_acl = v.map(|x| x.into());
        self
    }

    /// Sets the value of [read_only][crate::model::SmbFileShareInfo::read_only].
    pub fn set_read_only<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.read_only = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [read_only][crate::model::SmbFileShareInfo::read_only].
    pub fn set_or_clear_read_only<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.read_only = v.map(|x| x.into());
        self
    }

    /// Sets the value of [guess_mime_type_enabled][crate::model::SmbFileShareInfo::guess_mime_type_enabled].
    pub fn set_guess_mime_type_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.guess_mime_type_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [guess_mime_type_enabled][crate::model::SmbFileShareInfo::guess_mime_type_enabled].
    pub fn set_or_clear_guess_mime_type_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.guess_mime_type_enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [requester_pays][crate::model::SmbFileShareInfo::requester_pays].
    pub fn set_requester_pays<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.requester_pays = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [requester_pays][crate::model::SmbFileShareInfo::requester_pays].
    pub fn set_or_clear_requester_pays<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.requester_pays = v.map(|x| x.into());
        self
    }

    /// Sets the value of [smb_acl_enabled][crate::model::SmbFileShareInfo::smb_acl_enabled].
    pub fn set_smb_acl_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.smb_acl_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [smb_acl_enabled][crate::model::SmbFileShareInfo::smb_acl_enabled].
    pub fn set_or_clear_smb_acl_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.smb_acl_enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [admin_user_list][crate::model::SmbFileShareInfo::admin_user_list].
    pub fn set_admin_user_list<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.admin_user_list = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [valid_user_list][crate::model::SmbFileShareInfo::valid_user_list].
    pub fn set_valid_user_list<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.valid_user_list = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [invalid_user_list][crate::model::SmbFileShareInfo::invalid_user_list].
    pub fn set_invalid_user_list<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.invalid_user_list = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [audit_destination_arn][crate::model::SmbFileShareInfo::audit_destination_arn].
    pub fn set_audit_destination_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.audit_destination_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [audit_destination_arn][crate::model::SmbFileShareInfo::audit_destination_arn].
    pub fn set_or_clear_audit_destination_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.audit_destination_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [authentication][crate::model::SmbFileShareInfo::authentication].
    pub fn set_authentication<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.authentication = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [authentication][crate::model::SmbFileShareInfo::authentication].
    pub fn set_or_clear_authentication<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.authentication = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tags][crate::model::SmbFileShareInfo::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Tag>,
    {
        use std::iter::Iterator;
        self.tags = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A rule that creates tapes automatically when the number of available tapes
/// drops below a minimum.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct AutomaticTapeCreationRule {
    /// A prefix prepended to the barcode of the created virtual tapes.
    ///
    /// Length: 1 to 4 upper-case letters A to Z.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tape_barcode_prefix: std::option::Option<std::string::String>,

    /// The identifier of the tape pool, for example `GLACIER` or `DEEP_ARCHIVE`.
    ///
    /// Length: 1 to 100 characters.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub pool_id: std::option::Option<std::string::String>,

    /// The size of the virtual tape in bytes.
    ///
    /// The size must be aligned by gigabyte (1024\*1024\*1024 bytes).
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tape_size_in_bytes: std::option::Option<i64>,

    /// The minimum number of available virtual tapes the gateway keeps.
    ///
    /// Range: 1 to 10.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub minimum_num_tapes: std::option::Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl AutomaticTapeCreationRule {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [tape_barcode_prefix][crate::model::AutomaticTapeCreationRule::tape_barcode_prefix].
    pub fn set_tape_barcode_prefix<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_barcode_prefix = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_barcode_prefix][crate::model::AutomaticTapeCreationRule::tape_barcode_prefix].
    pub fn set_or_clear_tape_barcode_prefix<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tape_barcode_prefix = v.map(|x| x.into());
        self
    }

    /// Sets the value of [pool_id][crate::model::AutomaticTapeCreationRule::pool_id].
    pub fn set_pool_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.pool_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [pool_id][crate::model::AutomaticTapeCreationRule::pool_id].
    pub fn set_or_clear_pool_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.pool_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tape_size_in_bytes][crate::model::AutomaticTapeCreationRule::tape_size_in_bytes].
    pub fn set_tape_size_in_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.tape_size_in_bytes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tape_size_in_bytes][crate::model::AutomaticTapeCreationRule::tape_size_in_bytes].
    pub fn set_or_clear_tape_size_in_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.tape_size_in_bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [minimum_num_tapes][crate::model::AutomaticTapeCreationRule::minimum_num_tapes].
    pub fn set_minimum_num_tapes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.minimum_num_tapes = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [minimum_num_tapes][crate::model::AutomaticTapeCreationRule::minimum_num_tapes].
    pub fn set_or_clear_minimum_num_tapes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.minimum_num_tapes = v.map(|x| x.into());
        self
    }
}

/// The automatic tape creation policy of a gateway.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct AutomaticTapeCreationPolicyInfo {
    /// The rules that create tapes automatically.
    ///
    /// At least one entry.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub automatic_tape_creation_rules: std::vec::Vec<crate::model::AutomaticTapeCreationRule>,

    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 to 500 characters.
    #[serde(rename = "GatewayARN", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_arn: std::option::Option<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl AutomaticTapeCreationPolicyInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [automatic_tape_creation_rules][crate::model::AutomaticTapeCreationPolicyInfo::automatic_tape_creation_rules].
    pub fn set_automatic_tape_creation_rules<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::AutomaticTapeCreationRule>,
    {
        use std::iter::Iterator;
        self.automatic_tape_creation_rules = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [gateway_arn][crate::model::AutomaticTapeCreationPolicyInfo::gateway_arn].
    pub fn set_gateway_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_arn][crate::model::AutomaticTapeCreationPolicyInfo::gateway_arn].
    pub fn set_or_clear_gateway_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.gateway_arn = v.map(|x| x.into());
        self
    }
}

/// The error details reported by the service.
///
/// The service includes this payload in `InvalidGatewayRequestException`,
/// `InternalServerError` and `ServiceUnavailableError` responses, see
/// [errors][crate::errors].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StorageGatewayError {
    /// Additional information about the error.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub error_code: std::option::Option<crate::model::ErrorCode>,

    /// Human-readable text that provides detail about the error that occurred.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub error_details: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl StorageGatewayError {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [error_code][crate::model::StorageGatewayError::error_code].
    pub fn set_error_code<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ErrorCode>,
    {
        self.error_code = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [error_code][crate::model::StorageGatewayError::error_code].
    pub fn set_or_clear_error_code<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ErrorCode>,
    {
        self.error_code = v.map(|x| x.into());
        self
    }

    /// Sets the value of [error_details][crate::model::StorageGatewayError::error_details].
    pub fn set_error_details<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.error_details = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// The canned access control list applied to objects that a file share writes to the bucket.
///
/// # Working with unknown values
///
/// This enum is defined as `#[non_exhaustive]` because the service may add
/// new values at any time. Values that this version of the library does not
/// recognize are preserved in the `UnknownValue` variant, so they can be
/// sent back to the service unchanged.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ObjectAcl {
    /// `private`
    Private,
    /// `public-read`
    PublicRead,
    /// `public-read-write`
    PublicReadWrite,
    /// `authenticated-read`
    AuthenticatedRead,
    /// `bucket-owner-read`
    BucketOwnerRead,
    /// `bucket-owner-full-control`
    BucketOwnerFullControl,
    /// `aws-exec-read`
    AwsExecRead,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [ObjectAcl::name].
    UnknownValue(object_acl::UnknownValue),
}

#[doc(hidden)]
pub mod object_acl {
    #[allow(unused_imports)]
    use super::*;
    #[derive(Clone, Debug, PartialEq)]
    pub struct UnknownValue(pub(crate) wkt::internal::UnknownEnumValue);
}

impl ObjectAcl {
    /// Gets the enum value as a string.
    ///
    /// Returns the string received from the service for unknown values.
    pub fn name(&self) -> &str {
        match self {
            Self::Private => "private",
            Self::PublicRead => "public-read",
            Self::PublicReadWrite => "public-read-write",
            Self::AuthenticatedRead => "authenticated-read",
            Self::BucketOwnerRead => "bucket-owner-read",
            Self::BucketOwnerFullControl => "bucket-owner-full-control",
            Self::AwsExecRead => "aws-exec-read",
            Self::UnknownValue(u) => u.0.name(),
        }
    }
}

impl std::fmt::Display for ObjectAcl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        wkt::internal::display_enum(f, self.name())
    }
}

impl std::convert::From<&str> for ObjectAcl {
    fn from(value: &str) -> Self {
        match value {
            "private" => Self::Private,
            "public-read" => Self::PublicRead,
            "public-read-write" => Self::PublicReadWrite,
            "authenticated-read" => Self::AuthenticatedRead,
            "bucket-owner-read" => Self::BucketOwnerRead,
            "bucket-owner-full-control" => Self::BucketOwnerFullControl,
            "aws-exec-read" => Self::AwsExecRead,
            _ => Self::UnknownValue(object_acl::UnknownValue(
                wkt::internal::UnknownEnumValue::new(value),
            )),
        }
    }
}

impl serde::ser::Serialize for ObjectAcl {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for ObjectAcl {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(wkt::internal::EnumVisitor::<ObjectAcl>::new(
            "storagegateway.ObjectACL",
        ))
    }
}

/// The protocol used to expose a file share.
///
/// # Working with unknown values
///
/// This enum is defined as `#[non_exhaustive]` because the service may add
/// new values at any time. Values that this version of the library does not
/// recognize are preserved in the `UnknownValue` variant, so they can be
/// sent back to the service unchanged.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum FileShareType {
    /// `NFS`
    Nfs,
    /// `SMB`
    Smb,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [FileShareType::name].
    UnknownValue(file_share_type::UnknownValue),
}

#[doc(hidden)]
pub mod file_share_type {
    #[allow(unused_imports)]
    use super::*;
    #[derive(Clone, Debug, PartialEq)]
    pub struct UnknownValue(pub(crate) wkt::internal::UnknownEnumValue);
}

impl FileShareType {
    /// Gets the enum value as a string.
    ///
    /// Returns the string received from the service for unknown values.
    pub fn name(&self) -> &str {
        match self {
            Self::Nfs => "NFS",
            Self::Smb => "SMB",
            Self::UnknownValue(u) => u.0.name(),
        }
    }
}

impl std::fmt::Display for FileShareType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        wkt::internal::display_enum(f, self.name())
    }
}

impl std::convert::From<&str> for FileShareType {
    fn from(value: &str) -> Self {
        match value {
            "NFS" => Self::Nfs,
            "SMB" => Self::Smb,
            _ => Self::UnknownValue(file_share_type::UnknownValue(
                wkt::internal::UnknownEnumValue::new(value),
            )),
        }
    }
}

impl serde::ser::Serialize for FileShareType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for FileShareType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(wkt::internal::EnumVisitor::<FileShareType>::new(
            "storagegateway.FileShareType",
        ))
    }
}

/// The state of a gateway's membership in an Active Directory domain.
///
/// # Working with unknown values
///
/// This enum is defined as `#[non_exhaustive]` because the service may add
/// new values at any time. Values that this version of the library does not
/// recognize are preserved in the `UnknownValue` variant, so they can be
/// sent back to the service unchanged.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ActiveDirectoryStatus {
    /// `ACCESS_DENIED`
    AccessDenied,
    /// `DETACHED`
    Detached,
    /// `JOINED`
    Joined,
    /// `JOINING`
    Joining,
    /// `NETWORK_ERROR`
    NetworkError,
    /// `TIMEOUT`
    Timeout,
    /// `UNKNOWN_ERROR`
    UnknownError,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [ActiveDirectoryStatus::name].
    UnknownValue(active_directory_status::UnknownValue),
}

#[doc(hidden)]
pub mod active_directory_status {
    #[allow(unused_imports)]
    use super::*;
    #[derive(Clone, Debug, PartialEq)]
    pub struct UnknownValue(pub(crate) wkt::internal::UnknownEnumValue);
}

impl ActiveDirectoryStatus {
    /// Gets the enum value as a string.
    ///
    /// Returns the string received from the service for unknown values.
    pub fn name(&self) -> &str {
        match self {
            Self::AccessDenied => "ACCESS_DENIED",
            Self::Detached => "DETACHED",
            Self::Joined => "JOINED",
            Self::Joining => "JOINING",
            Self::NetworkError => "NETWORK_ERROR",
            Self::Timeout => "TIMEOUT",
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::UnknownValue(u) => u.0.name(),
        }
    }
}

impl std::fmt::Display for ActiveDirectoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        wkt::internal::display_enum(f, self.name())
    }
}

impl std::convert::From<&str> for ActiveDirectoryStatus {
    fn from(value: &str) -> Self {
        match value {
            "ACCESS_DENIED" => Self::AccessDenied,
            "DETACHED" => Self::Detached,
            "JOINED" => Self::Joined,
            "JOINING" => Self::Joining,
            "NETWORK_ERROR" => Self::NetworkError,
            "TIMEOUT" => Self::Timeout,
            "UNKNOWN_ERROR" => Self::UnknownError,
            _ => Self::UnknownValue(active_directory_status::UnknownValue(
                wkt::internal::UnknownEnumValue::new(value),
            )),
        }
    }
}

impl serde::ser::Serialize for ActiveDirectoryStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for ActiveDirectoryStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(wkt::internal::EnumVisitor::<ActiveDirectoryStatus>::new(
            "storagegateway.ActiveDirectoryStatus",
        ))
    }
}

/// The progress of a high availability monitoring test.
///
/// # Working with unknown values
///
/// This enum is defined as `#[non_exhaustive]` because the service may add
/// new values at any time. Values that this version of the library does not
/// recognize are preserved in the `UnknownValue` variant, so they can be
/// sent back to the service unchanged.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum AvailabilityMonitorTestStatus {
    /// `COMPLETE`
    Complete,
    /// `FAILED`
    Failed,
    /// `PENDING`
    Pending,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [AvailabilityMonitorTestStatus::name].
    UnknownValue(availability_monitor_test_status::UnknownValue),
}

#[doc(hidden)]
pub mod availability_monitor_test_status {
    #[allow(unused_imports)]
    use super::*;
    #[derive(Clone, Debug, PartialEq)]
    pub struct UnknownValue(pub(crate) wkt::internal::UnknownEnumValue);
}

impl AvailabilityMonitorTestStatus {
    /// Gets the enum value as a string.
    ///
    /// Returns the string received from the service for unknown values.
    pub fn name(&self) -> &str {
        match self {
            Self::Complete => "COMPLETE",
            Self::Failed => "FAILED",
            Self::Pending => "PENDING",
            Self::UnknownValue(u) => u.0.name(),
        }
    }
}

impl std::fmt::Display for AvailabilityMonitorTestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        wkt::internal::display_enum(f, self.name())
    }
}

impl std::convert::From<&str> for AvailabilityMonitorTestStatus {
    fn from(value: &str) -> Self {
        match value {
            "COMPLETE" => Self::Complete,
            "FAILED" => Self::Failed,
            "PENDING" => Self::Pending,
            _ => Self::UnknownValue(availability_monitor_test_status::UnknownValue(
                wkt::internal::UnknownEnumValue::new(value),
            )),
        }
    }
}

impl serde::ser::Serialize for AvailabilityMonitorTestStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for AvailabilityMonitorTestStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(wkt::internal::EnumVisitor::<AvailabilityMonitorTestStatus>::new(
            "storagegateway.AvailabilityMonitorTestStatus",
        ))
    }
}

/// The type of hypervisor or platform hosting the gateway.
///
/// # Working with unknown values
///
/// This enum is defined as `#[non_exhaustive]` because the service may add
/// new values at any time. Values that this version of the library does not
/// recognize are preserved in the `UnknownValue` variant, so they can be
/// sent back to the service unchanged.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum HostEnvironment {
    /// `VMWARE`
    Vmware,
    /// `HYPER-V`
    HyperV,
    /// `EC2`
    Ec2,
    /// `KVM`
    Kvm,
    /// `OTHER`
    Other,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [HostEnvironment::name].
    UnknownValue(host_environment::UnknownValue),
}

#[doc(hidden)]
pub mod host_environment {
    #[allow(unused_imports)]
    use super::*;
    #[derive(Clone, Debug, PartialEq)]
    pub struct UnknownValue(pub(crate) wkt::internal::UnknownEnumValue);
}

impl HostEnvironment {
    /// Gets the enum value as a string.
    ///
    /// Returns the string received from the service for unknown values.
    pub fn name(&self) -> &str {
        match self {
            Self::Vmware => "VMWARE",
            Self::HyperV => "HYPER-V",
            Self::Ec2 => "EC2",
            Self::Kvm => "KVM",
            Self::Other => "OTHER",
            Self::UnknownValue(u) => u.0.name(),
        }
    }
}

impl std::fmt::Display for HostEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        wkt::internal::display_enum(f, self.name())
    }
}

impl std::convert::From<&str> for HostEnvironment {
    fn from(value: &str) -> Self {
        match value {
            "VMWARE" => Self::Vmware,
            "HYPER-V" => Self::HyperV,
            "EC2" => Self::Ec2,
            "KVM" => Self::Kvm,
            "OTHER" => Self::Other,
            _ => Self::UnknownValue(host_environment::UnknownValue(
                wkt::internal::UnknownEnumValue::new(value),
            )),
        }
    }
}

impl serde::ser::Serialize for HostEnvironment {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for HostEnvironment {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(wkt::internal::EnumVisitor::<HostEnvironment>::new(
            "storagegateway.HostEnvironment",
        ))
    }
}

/// The signing and encryption requirements for SMB client connections.
///
/// # Working with unknown values
///
/// This enum is defined as `#[non_exhaustive]` because the service may add
/// new values at any time. Values that this version of the library does not
/// recognize are preserved in the `UnknownValue` variant, so they can be
/// sent back to the service unchanged.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum SmbSecurityStrategy {
    /// `ClientSpecified`
    ClientSpecified,
    /// `MandatorySigning`
    MandatorySigning,
    /// `MandatoryEncryption`
    MandatoryEncryption,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [SmbSecurityStrategy::name].
    UnknownValue(smb_security_strategy::UnknownValue),
}

#[doc(hidden)]
pub mod smb_security_strategy {
    #[allow(unused_imports)]
    use super::*;
    #[derive(Clone, Debug, PartialEq)]
    pub struct UnknownValue(pub(crate) wkt::internal::UnknownEnumValue);
}

impl SmbSecurityStrategy {
    /// Gets the enum value as a string.
    ///
    /// Returns the string received from the service for unknown values.
    pub fn name(&self) -> &str {
        match self {
            Self::ClientSpecified => "ClientSpecified",
            Self::MandatorySigning => "MandatorySigning",
            Self::MandatoryEncryption => "MandatoryEncryption",
            Self::UnknownValue(u) => u.0.name(),
        }
    }
}

impl std::fmt::Display for SmbSecurityStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        wkt::internal::display_enum(f, self.name())
    }
}

impl std::convert::From<&str> for SmbSecurityStrategy {
    fn from(value: &str) -> Self {
        match value {
            "ClientSpecified" => Self::ClientSpecified,
            "MandatorySigning" => Self::MandatorySigning,
            "MandatoryEncryption" => Self::MandatoryEncryption,
            _ => Self::UnknownValue(smb_security_strategy::UnknownValue(
                wkt::internal::UnknownEnumValue::new(value),
            )),
        }
    }
}

impl serde::ser::Serialize for SmbSecurityStrategy {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for SmbSecurityStrategy {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(wkt::internal::EnumVisitor::<SmbSecurityStrategy>::new(
            "storagegateway.SMBSecurityStrategy",
        ))
    }
}

/// The error codes reported in [StorageGatewayError].
///
/// # Working with unknown values
///
/// This enum is defined as `#[non_exhaustive]` because the service may add
/// new values at any time. Values that this version of the library does not
/// recognize are preserved in the `UnknownValue` variant, so they can be
/// sent back to the service unchanged.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ErrorCode {
    /// `ActivationKeyExpired`
    ActivationKeyExpired,
    /// `ActivationKeyInvalid`
    ActivationKeyInvalid,
    /// `ActivationKeyNotFound`
    ActivationKeyNotFound,
    /// `GatewayInternalError`
    GatewayInternalError,
    /// `GatewayNotConnected`
    GatewayNotConnected,
    /// `GatewayNotFound`
    GatewayNotFound,
    /// `GatewayProxyNetworkConnectionBusy`
    GatewayProxyNetworkConnectionBusy,
    /// `AuthenticationFailure`
    AuthenticationFailure,
    /// `BandwidthThrottleScheduleNotFound`
    BandwidthThrottleScheduleNotFound,
    /// `Blocked`
    Blocked,
    /// `CannotExportSnapshot`
    CannotExportSnapshot,
    /// `ChapCredentialNotFound`
    ChapCredentialNotFound,
    /// `DiskAlreadyAllocated`
    DiskAlreadyAllocated,
    /// `DiskDoesNotExist`
    DiskDoesNotExist,
    /// `DiskSizeGreaterThanVolumeMaxSize`
    DiskSizeGreaterThanVolumeMaxSize,
    /// `DiskSizeLessThanVolumeSize`
    DiskSizeLessThanVolumeSize,
    /// `DiskSizeNotGigAligned`
    DiskSizeNotGigAligned,
    /// `DuplicateCertificateInfo`
    DuplicateCertificateInfo,
    /// `DuplicateSchedule`
    DuplicateSchedule,
    /// `EndpointNotFound`
    EndpointNotFound,
    /// `IAMNotSupported`
    IamNotSupported,
    /// `InitiatorInvalid`
    InitiatorInvalid,
    /// `InitiatorNotFound`
    InitiatorNotFound,
    /// `InternalError`
    InternalError,
    /// `InvalidGateway`
    InvalidGateway,
    /// `InvalidEndpoint`
    InvalidEndpoint,
    /// `InvalidParameters`
    InvalidParameters,
    /// `InvalidSchedule`
    InvalidSchedule,
    /// `LocalStorageLimitExceeded`
    LocalStorageLimitExceeded,
    /// `LunAlreadyAllocated`
    LunAlreadyAllocated,
    /// `LunInvalid`
    LunInvalid,
    /// `JoinDomainInProgress`
    JoinDomainInProgress,
    /// `MaximumContentLengthExceeded`
    MaximumContentLengthExceeded,
    /// `MaximumTapeCartridgeCountExceeded`
    MaximumTapeCartridgeCountExceeded,
    /// `MaximumVolumeCountExceeded`
    MaximumVolumeCountExceeded,
    /// `NetworkConfigurationChanged`
    NetworkConfigurationChanged,
    /// `NoDisksAvailable`
    NoDisksAvailable,
    /// `NotImplemented`
    NotImplemented,
    /// `NotSupported`
    NotSupported,
    /// `OperationAborted`
    OperationAborted,
    /// `OutdatedGateway`
    OutdatedGateway,
    /// `ParametersNotImplemented`
    ParametersNotImplemented,
    /// `RegionInvalid`
    RegionInvalid,
    /// `RequestTimeout`
    RequestTimeout,
    /// `ServiceUnavailable`
    ServiceUnavailable,
    /// `SnapshotDeleted`
    SnapshotDeleted,
    /// `SnapshotIdInvalid`
    SnapshotIdInvalid,
    /// `SnapshotInProgress`
    SnapshotInProgress,
    /// `SnapshotNotFound`
    SnapshotNotFound,
    /// `SnapshotScheduleNotFound`
    SnapshotScheduleNotFound,
    /// `StagingAreaFull`
    StagingAreaFull,
    /// `StorageFailure`
    StorageFailure,
    /// `TapeCartridgeNotFound`
    TapeCartridgeNotFound,
    /// `TargetAlreadyExists`
    TargetAlreadyExists,
    /// `TargetInvalid`
    TargetInvalid,
    /// `TargetNotFound`
    TargetNotFound,
    /// `UnauthorizedOperation`
    UnauthorizedOperation,
    /// `VolumeAlreadyExists`
    VolumeAlreadyExists,
    /// `VolumeIdInvalid`
    VolumeIdInvalid,
    /// `VolumeInUse`
    VolumeInUse,
    /// `VolumeNotFound`
    VolumeNotFound,
    /// `VolumeNotReady`
    VolumeNotReady,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [ErrorCode::name].
    UnknownValue(error_code::UnknownValue),
}

#[doc(hidden)]
pub mod error_code {
    #[allow(unused_imports)]
    use super::*;
    #[derive(Clone, Debug, PartialEq)]
    pub struct UnknownValue(pub(crate) wkt::internal::UnknownEnumValue);
}

impl ErrorCode {
    /// Gets the enum value as a string.
    ///
    /// Returns the string received from the service for unknown values.
    pub fn name(&self) -> &str {
        match self {
            Self::ActivationKeyExpired => "ActivationKeyExpired",
            Self::ActivationKeyInvalid => "ActivationKeyInvalid",
            Self::ActivationKeyNotFound => "ActivationKeyNotFound",
            Self::GatewayInternalError => "GatewayInternalError",
            Self::GatewayNotConnected => "GatewayNotConnected",
            Self::GatewayNotFound => "GatewayNotFound",
            Self::GatewayProxyNetworkConnectionBusy => "GatewayProxyNetworkConnectionBusy",
            Self::AuthenticationFailure => "AuthenticationFailure",
            Self::BandwidthThrottleScheduleNotFound => "BandwidthThrottleScheduleNotFound",
            Self::Blocked => "Blocked",
            Self::CannotExportSnapshot => "CannotExportSnapshot",
            Self::ChapCredentialNotFound => "ChapCredentialNotFound",
            Self::DiskAlreadyAllocated => "DiskAlreadyAllocated",
            Self::DiskDoesNotExist => "DiskDoesNotExist",
            Self::DiskSizeGreaterThanVolumeMaxSize => "DiskSizeGreaterThanVolumeMaxSize",
            Self::DiskSizeLessThanVolumeSize => "DiskSizeLessThanVolumeSize",
            Self::DiskSizeNotGigAligned => "DiskSizeNotGigAligned",
            Self::DuplicateCertificateInfo => "DuplicateCertificateInfo",
            Self::DuplicateSchedule => "DuplicateSchedule",
            Self::EndpointNotFound => "EndpointNotFound",
            Self::IamNotSupported => "IAMNotSupported",
            Self::InitiatorInvalid => "InitiatorInvalid",
            Self::InitiatorNotFound => "InitiatorNotFound",
            Self::InternalError => "InternalError",
            Self::InvalidGateway => "InvalidGateway",
            Self::InvalidEndpoint => "InvalidEndpoint",
            Self::InvalidParameters => "InvalidParameters",
            Self::InvalidSchedule => "InvalidSchedule",
            Self::LocalStorageLimitExceeded => "LocalStorageLimitExceeded",
            Self::LunAlreadyAllocated => "LunAlreadyAllocated ",
            Self::LunInvalid => "LunInvalid",
            Self::JoinDomainInProgress => "JoinDomainInProgress",
            Self::MaximumContentLengthExceeded => "MaximumContentLengthExceeded",
            Self::MaximumTapeCartridgeCountExceeded => "MaximumTapeCartridgeCountExceeded",
            Self::MaximumVolumeCountExceeded => "MaximumVolumeCountExceeded",
            Self::NetworkConfigurationChanged => "NetworkConfigurationChanged",
            Self::NoDisksAvailable => "NoDisksAvailable",
            Self::NotImplemented => "NotImplemented",
            Self::NotSupported => "NotSupported",
            Self::OperationAborted => "OperationAborted",
            Self::OutdatedGateway => "OutdatedGateway",
            Self::ParametersNotImplemented => "ParametersNotImplemented",
            Self::RegionInvalid => "RegionInvalid",
            Self::RequestTimeout => "RequestTimeout",
            Self::ServiceUnavailable => "ServiceUnavailable",
            Self::SnapshotDeleted => "SnapshotDeleted",
            Self::SnapshotIdInvalid => "SnapshotIdInvalid",
            Self::SnapshotInProgress => "SnapshotInProgress",
            Self::SnapshotNotFound => "SnapshotNotFound",
            Self::SnapshotScheduleNotFound => "SnapshotScheduleNotFound",
            Self::StagingAreaFull => "StagingAreaFull",
            Self::StorageFailure => "StorageFailure",
            Self::TapeCartridgeNotFound => "TapeCartridgeNotFound",
            Self::TargetAlreadyExists => "TargetAlreadyExists",
            Self::TargetInvalid => "TargetInvalid",
            Self::TargetNotFound => "TargetNotFound",
            Self::UnauthorizedOperation => "UnauthorizedOperation",
            Self::VolumeAlreadyExists => "VolumeAlreadyExists",
            Self::VolumeIdInvalid => "VolumeIdInvalid",
            Self::VolumeInUse => "VolumeInUse",
            Self::VolumeNotFound => "VolumeNotFound",
            Self::VolumeNotReady => "VolumeNotReady",
            Self::UnknownValue(u) => u.0.name(),
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        wkt::internal::display_enum(f, self.name())
    }
}

impl std::convert::From<&str> for ErrorCode {
    fn from(value: &str) -> Self {
        match value {
            "ActivationKeyExpired" => Self::ActivationKeyExpired,
            "ActivationKeyInvalid" => Self::ActivationKeyInvalid,
            "ActivationKeyNotFound" => Self::ActivationKeyNotFound,
            "GatewayInternalError" => Self::GatewayInternalError,
            "GatewayNotConnected" => Self::GatewayNotConnected,
            "GatewayNotFound" => Self::GatewayNotFound,
            "GatewayProxyNetworkConnectionBusy" => Self::GatewayProxyNetworkConnectionBusy,
            "AuthenticationFailure" => Self::AuthenticationFailure,
            "BandwidthThrottleScheduleNotFound" => Self::BandwidthThrottleScheduleNotFound,
            "Blocked" => Self::Blocked,
            "CannotExportSnapshot" => Self::CannotExportSnapshot,
            "ChapCredentialNotFound" => Self::ChapCredentialNotFound,
            "DiskAlreadyAllocated" => Self::DiskAlreadyAllocated,
            "DiskDoesNotExist" => Self::DiskDoesNotExist,
            "DiskSizeGreaterThanVolumeMaxSize" => Self::DiskSizeGreaterThanVolumeMaxSize,
            "DiskSizeLessThanVolumeSize" => Self::DiskSizeLessThanVolumeSize,
            "DiskSizeNotGigAligned" => Self::DiskSizeNotGigAligned,
            "DuplicateCertificateInfo" => Self::DuplicateCertificateInfo,
            "DuplicateSchedule" => Self::DuplicateSchedule,
            "EndpointNotFound" => Self::EndpointNotFound,
            "IAMNotSupported" => Self::IamNotSupported,
            "InitiatorInvalid" => Self::InitiatorInvalid,
            "InitiatorNotFound" => Self::InitiatorNotFound,
            "InternalError" => Self::InternalError,
            "InvalidGateway" => Self::InvalidGateway,
            "InvalidEndpoint" => Self::InvalidEndpoint,
            "InvalidParameters" => Self::InvalidParameters,
            "InvalidSchedule" => Self::InvalidSchedule,
            "LocalStorageLimitExceeded" => Self::LocalStorageLimitExceeded,
            "LunAlreadyAllocated " | "LunAlreadyAllocated" => Self::LunAlreadyAllocated,
            "LunInvalid" => Self::LunInvalid,
            "JoinDomainInProgress" => Self::JoinDomainInProgress,
            "MaximumContentLengthExceeded" => Self::MaximumContentLengthExceeded,
            "MaximumTapeCartridgeCountExceeded" => Self::MaximumTapeCartridgeCountExceeded,
            "MaximumVolumeCountExceeded" => Self::MaximumVolumeCountExceeded,
            "NetworkConfigurationChanged" => Self::NetworkConfigurationChanged,
            "NoDisksAvailable" => Self::NoDisksAvailable,
            "NotImplemented" => Self::NotImplemented,
            "NotSupported" => Self::NotSupported,
            "OperationAborted" => Self::OperationAborted,
            "OutdatedGateway" => Self::OutdatedGateway,
            "ParametersNotImplemented" => Self::ParametersNotImplemented,
            "RegionInvalid" => Self::RegionInvalid,
            "RequestTimeout" => Self::RequestTimeout,
            "ServiceUnavailable" => Self::ServiceUnavailable,
            "SnapshotDeleted" => Self::SnapshotDeleted,
            "SnapshotIdInvalid" => Self::SnapshotIdInvalid,
            "SnapshotInProgress" => Self::SnapshotInProgress,
            "SnapshotNotFound" => Self::SnapshotNotFound,
            "SnapshotScheduleNotFound" => Self::SnapshotScheduleNotFound,
            "StagingAreaFull" => Self::StagingAreaFull,
            "StorageFailure" => Self::StorageFailure,
            "TapeCartridgeNotFound" => Self::TapeCartridgeNotFound,
            "TargetAlreadyExists" => Self::TargetAlreadyExists,
            "TargetInvalid" => Self::TargetInvalid,
            "TargetNotFound" => Self::TargetNotFound,
            "UnauthorizedOperation" => Self::UnauthorizedOperation,
            "VolumeAlreadyExists" => Self::VolumeAlreadyExists,
            "VolumeIdInvalid" => Self::VolumeIdInvalid,
            "VolumeInUse" => Self::VolumeInUse,
            "VolumeNotFound" => Self::VolumeNotFound,
            "VolumeNotReady" => Self::VolumeNotReady,
            _ => Self::UnknownValue(error_code::UnknownValue(
                wkt::internal::UnknownEnumValue::new(value),
            )),
        }
    }
}

impl serde::ser::Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for ErrorCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(wkt::internal::EnumVisitor::<ErrorCode>::new(
            "storagegateway.ErrorCode",
        ))
    }
}
