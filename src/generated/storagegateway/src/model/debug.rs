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

use super::*;

impl std::fmt::Debug for crate::model::ActivateGatewayRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ActivateGatewayRequest");
        if let Some(v) = &self.activation_key {
            debug_struct.field("activation_key", v);
        }
        if let Some(v) = &self.gateway_name {
            debug_struct.field("gateway_name", v);
        }
        if let Some(v) = &self.gateway_timezone {
            debug_struct.field("gateway_timezone", v);
        }
        if let Some(v) = &self.gateway_region {
            debug_struct.field("gateway_region", v);
        }
        if let Some(v) = &self.gateway_type {
            debug_struct.field("gateway_type", v);
        }
        if let Some(v) = &self.tape_drive_type {
            debug_struct.field("tape_drive_type", v);
        }
        if let Some(v) = &self.medium_changer_type {
            debug_struct.field("medium_changer_type", v);
        }
        if !self.tags.is_empty() {
            debug_struct.field("tags", &self.tags);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::ActivateGatewayResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ActivateGatewayResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::AddCacheRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("AddCacheRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self.disk_ids.is_empty() {
            debug_struct.field("disk_ids", &self.disk_ids);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::AddCacheResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("AddCacheResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::AddTagsToResourceRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("AddTagsToResourceRequest");
        if let Some(v) = &self.resource_arn {
            debug_struct.field("resource_arn", v);
        }
        if !self.tags.is_empty() {
            debug_struct.field("tags", &self.tags);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::AddTagsToResourceResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("AddTagsToResourceResponse");
        if let Some(v) = &self.resource_arn {
            debug_struct.field("resource_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::AddUploadBufferRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("AddUploadBufferRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self.disk_ids.is_empty() {
            debug_struct.field("disk_ids", &self.disk_ids);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::AddUploadBufferResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("AddUploadBufferResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::AddWorkingStorageRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("AddWorkingStorageRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self.disk_ids.is_empty() {
            debug_struct.field("disk_ids", &self.disk_ids);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::AddWorkingStorageResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("AddWorkingStorageResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::AssignTapePoolRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("AssignTapePoolRequest");
        if let Some(v) = &self.tape_arn {
            debug_struct.field("tape_arn", v);
        }
        if let Some(v) = &self.pool_id {
            debug_struct.field("pool_id", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::AssignTapePoolResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("AssignTapePoolResponse");
        if let Some(v) = &self.tape_arn {
            debug_struct.field("tape_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::AttachVolumeRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("AttachVolumeRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.target_name {
            debug_struct.field("target_name", v);
        }
        if let Some(v) = &self.volume_arn {
            debug_struct.field("volume_arn", v);
        }
        if let Some(v) = &self.network_interface_id {
            debug_struct.field("network_interface_id", v);
        }
        if let Some(v) = &self.disk_id {
            debug_struct.field("disk_id", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::AttachVolumeResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("AttachVolumeResponse");
        if let Some(v) = &self.volume_arn {
            debug_struct.field("volume_arn", v);
        }
        if let Some(v) = &self.target_arn {
            debug_struct.field("target_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::CancelArchivalRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CancelArchivalRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.tape_arn {
            debug_struct.field("tape_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::CancelArchivalResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CancelArchivalResponse");
        if let Some(v) = &self.tape_arn {
            debug_struct.field("tape_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::CancelRetrievalRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CancelRetrievalRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.tape_arn {
            debug_struct.field("tape_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::CancelRetrievalResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CancelRetrievalResponse");
        if let Some(v) = &self.tape_arn {
            debug_struct.field("tape_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::CreateCachediScsiVolumeRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CreateCachediScsiVolumeRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.volume_size_in_bytes {
            debug_struct.field("volume_size_in_bytes", v);
        }
        if let Some(v) = &self.snapshot_id {
            debug_struct.field("snapshot_id", v);
        }
        if let Some(v) = &self.target_name {
            debug_struct.field("target_name", v);
        }
        if let Some(v) = &self.source_volume_arn {
            debug_struct.field("source_volume_arn", v);
        }
        if let Some(v) = &self.network_interface_id {
            debug_struct.field("network_interface_id", v);
        }
        if let Some(v) = &self.client_token {
            debug_struct.field("client_token", v);
        }
        if let Some(v) = &self.kms_encrypted {
            debug_struct.field("kms_encrypted", v);
        }
        if let Some(v) = &self.kms_key {
            debug_struct.field("kms_key", v);
        }
        if !self.tags.is_empty() {
            debug_struct.field("tags", &self.tags);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::CreateCachediScsiVolumeResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CreateCachediScsiVolumeResponse");
        if let Some(v) = &self.volume_arn {
            debug_struct.field("volume_arn", v);
        }
        if let Some(v) = &self.target_arn {
            debug_struct.field("target_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::CreateNfsFileShareRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CreateNfsFileShareRequest");
        if let Some(v) = &self.client_token {
            debug_struct.field("client_token", v);
        }
        if let Some(v) = &self.nfs_file_share_defaults {
            debug_struct.field("nfs_file_share_defaults", v);
        }
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.kms_encrypted {
            debug_struct.field("kms_encrypted", v);
        }
        if let Some(v) = &self.kms_key {
            debug_struct.field("kms_key", v);
        }
        if let Some(v) = &self.role {
            debug_struct.field("role", v);
        }
        if let Some(v) = &self.location_arn {
            debug_struct.field("location_arn", v);
        }
        if let Some(v) = &self.default_storage_class {
            debug_struct.field("default_storage_class", v);
        }
        if let Some(v) = &self.object_acl {
            debug_struct.field("object_acl", v);
        }
        if !self.client_list.is_empty() {
            debug_struct.field("client_list", &self.client_list);
        }
        if let Some(v) = &self.squash {
            debug_struct.field("squash", v);
        }
        if let Some(v) = &self.read_only {
            debug_struct.field("read_only", v);
        }
        if let Some(v) = &self.guess_mime_type_enabled {
            debug_struct.field("guess_mime_type_enabled", v);
        }
        if let Some(v) = &self.requester_pays {
            debug_struct.field("requester_pays", v);
        }
        if !self.tags.is_empty() {
            debug_struct.field("tags", &self.tags);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::CreateNfsFileShareResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CreateNfsFileShareResponse");
        if let Some(v) = &self.file_share_arn {
            debug_struct.field("file_share_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::CreateSmbFileShareRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CreateSmbFileShareRequest");
        if let Some(v) = &self.client_token {
            debug_struct.field("client_token", v);
        }
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.kms_encrypted {
            debug_struct.field("kms_encrypted", v);
        }
        if let Some(v) = &self.kms_key {
            debug_struct.field("kms_key", v);
        }
        if let Some(v) = &self.role {
            debug_struct.field("role", v);
        }
        if let Some(v) = &self.location_arn {
            debug_struct.field("location_arn", v);
        }
        if let Some(v) = &self.default_storage_class {
            debug_struct.field("default_storage_class", v);
        }
        if let Some(v) = &self.object_acl {
            debug_struct.field("object_acl", v);
        }
        if let Some(v) = &self.read_only {
            debug_struct.field("read_only", v);
        }
        if let Some(v) = &self.guess_mime_type_enabled {
            debug_struct.field("guess_mime_type_enabled", v);
        }
        if let Some(v) = &self.requester_pays {
            debug_struct.field("requester_pays", v);
        }
        if let Some(v) = &self.smb_acl_enabled {
            debug_struct.field("smb_acl_enabled", v);
        }
        if !self.admin_user_list.is_empty() {
            debug_struct.field("admin_user_list", &self.admin_user_list);
        }
        if !self.valid_user_list.is_empty() {
            debug_struct.field("valid_user_list", &self.valid_user_list);
        }
        if !self.invalid_user_list.is_empty() {
            debug_struct.field("invalid_user_list", &self.invalid_user_list);
        }
        if let Some(v) = &self.audit_destination_arn {
            debug_struct.field("audit_destination_arn", v);
        }
        if let Some(v) = &self.authentication {
            debug_struct.field("authentication", v);
        }
        if !self.tags.is_empty() {
            debug_struct.field("tags", &self.tags);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::CreateSmbFileShareResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CreateSmbFileShareResponse");
        if let Some(v) = &self.file_share_arn {
            debug_struct.field("file_share_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::CreateSnapshotRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CreateSnapshotRequest");
        if let Some(v) = &self.volume_arn {
            debug_struct.field("volume_arn", v);
        }
        if let Some(v) = &self.snapshot_description {
            debug_struct.field("snapshot_description", v);
        }
        if !self.tags.is_empty() {
            debug_struct.field("tags", &self.tags);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::CreateSnapshotResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CreateSnapshotResponse");
        if let Some(v) = &self.volume_arn {
            debug_struct.field("volume_arn", v);
        }
        if let Some(v) = &self.snapshot_id {
            debug_struct.field("snapshot_id", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::CreateSnapshotFromVolumeRecoveryPointRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CreateSnapshotFromVolumeRecoveryPointRequest");
        if let Some(v) = &self.volume_arn {
            debug_struct.field("volume_arn", v);
        }
        if let Some(v) = &self.snapshot_description {
            debug_struct.field("snapshot_description", v);
        }
        if !self.tags.is_empty() {
            debug_struct.field("tags", &self.tags);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::CreateSnapshotFromVolumeRecoveryPointResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CreateSnapshotFromVolumeRecoveryPointResponse");
        if let Some(v) = &self.snapshot_id {
            debug_struct.field("snapshot_id", v);
        }
        if let Some(v) = &self.volume_arn {
            debug_struct.field("volume_arn", v);
        }
        if let Some(v) = &self.volume_recovery_point_time {
            debug_struct.field("volume_recovery_point_time", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::CreateStorediScsiVolumeRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CreateStorediScsiVolumeRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.disk_id {
            debug_struct.field("disk_id", v);
        }
        if let Some(v) = &self.snapshot_id {
            debug_struct.field("snapshot_id", v);
        }
        if let Some(v) = &self.preserve_existing_data {
            debug_struct.field("preserve_existing_data", v);
        }
        if let Some(v) = &self.target_name {
            debug_struct.field("target_name", v);
        }
        if let Some(v) = &self.network_interface_id {
            debug_struct.field("network_interface_id", v);
        }
        if let Some(v) = &self.kms_encrypted {
            debug_struct.field("kms_encrypted", v);
        }
        if let Some(v) = &self.kms_key {
            debug_struct.field("kms_key", v);
        }
        if !self.tags.is_empty() {
            debug_struct.field("tags", &self.tags);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::CreateStorediScsiVolumeResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CreateStorediScsiVolumeResponse");
        if let Some(v) = &self.volume_arn {
            debug_struct.field("volume_arn", v);
        }
        if let Some(v) = &self.volume_size_in_bytes {
            debug_struct.field("volume_size_in_bytes", v);
        }
        if let Some(v) = &self.target_arn {
            debug_struct.field("target_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::CreateTapeWithBarcodeRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CreateTapeWithBarcodeRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.tape_size_in_bytes {
            debug_struct.field("tape_size_in_bytes", v);
        }
        if let Some(v) = &self.tape_barcode {
            debug_struct.field("tape_barcode", v);
        }
        if let Some(v) = &self.kms_encrypted {
            debug_struct.field("kms_encrypted", v);
        }
        if let Some(v) = &self.kms_key {
            debug_struct.field("kms_key", v);
        }
        if let Some(v) = &self.pool_id {
            debug_struct.field("pool_id", v);
        }
        if !self.tags.is_empty() {
            debug_struct.field("tags", &self.tags);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::CreateTapeWithBarcodeResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CreateTapeWithBarcodeResponse");
        if let Some(v) = &self.tape_arn {
            debug_struct.field("tape_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::CreateTapesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CreateTapesRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.tape_size_in_bytes {
            debug_struct.field("tape_size_in_bytes", v);
        }
        if let Some(v) = &self.client_token {
            debug_struct.field("client_token", v);
        }
        if let Some(v) = &self.num_tapes_to_create {
            debug_struct.field("num_tapes_to_create", v);
        }
        if let Some(v) = &self.tape_barcode_prefix {
            debug_struct.field("tape_barcode_prefix", v);
        }
        if let Some(v) = &self.kms_encrypted {
            debug_struct.field("kms_encrypted", v);
        }
        if let Some(v) = &self.kms_key {
            debug_struct.field("kms_key", v);
        }
        if let Some(v) = &self.pool_id {
            debug_struct.field("pool_id", v);
        }
        if !self.tags.is_empty() {
            debug_struct.field("tags", &self.tags);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::CreateTapesResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CreateTapesResponse");
        if !self.tape_arns.is_empty() {
            debug_struct.field("tape_arns", &self.tape_arns);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DeleteAutomaticTapeCreationPolicyRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DeleteAutomaticTapeCreationPolicyRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DeleteAutomaticTapeCreationPolicyResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DeleteAutomaticTapeCreationPolicyResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DeleteBandwidthRateLimitRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DeleteBandwidthRateLimitRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.bandwidth_type {
            debug_struct.field("bandwidth_type", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DeleteBandwidthRateLimitResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DeleteBandwidthRateLimitResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DeleteChapCredentialsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DeleteChapCredentialsRequest");
        if let Some(v) = &self.target_arn {
            debug_struct.field("target_arn", v);
        }
        if let Some(v) = &self.initiator_name {
            debug_struct.field("initiator_name", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DeleteChapCredentialsResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DeleteChapCredentialsResponse");
        if let Some(v) = &self.target_arn {
            debug_struct.field("target_arn", v);
        }
        if let Some(v) = &self.initiator_name {
            debug_struct.field("initiator_name", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DeleteFileShareRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DeleteFileShareRequest");
        if let Some(v) = &self.file_share_arn {
            debug_struct.field("file_share_arn", v);
        }
        if let Some(v) = &self.force_delete {
            debug_struct.field("force_delete", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DeleteFileShareResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DeleteFileShareResponse");
        if let Some(v) = &self.file_share_arn {
            debug_struct.field("file_share_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DeleteGatewayRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DeleteGatewayRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DeleteGatewayResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DeleteGatewayResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DeleteSnapshotScheduleRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DeleteSnapshotScheduleRequest");
        if let Some(v) = &self.volume_arn {
            debug_struct.field("volume_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DeleteSnapshotScheduleResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DeleteSnapshotScheduleResponse");
        if let Some(v) = &self.volume_arn {
            debug_struct.field("volume_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DeleteTapeRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DeleteTapeRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.tape_arn {
            debug_struct.field("tape_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DeleteTapeResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DeleteTapeResponse");
        if let Some(v) = &self.tape_arn {
            debug_struct.field("tape_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DeleteTapeArchiveRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DeleteTapeArchiveRequest");
        if let Some(v) = &self.tape_arn {
            debug_struct.field("tape_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DeleteTapeArchiveResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DeleteTapeArchiveResponse");
        if let Some(v) = &self.tape_arn {
            debug_struct.field("tape_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DeleteVolumeRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DeleteVolumeRequest");
        if let Some(v) = &self.volume_arn {
            debug_struct.field("volume_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DeleteVolumeResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DeleteVolumeResponse");
        if let Some(v) = &self.volume_arn {
            debug_struct.field("volume_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeAvailabilityMonitorTestRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeAvailabilityMonitorTestRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeAvailabilityMonitorTestResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeAvailabilityMonitorTestResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.status {
            debug_struct.field("status", v);
        }
        if let Some(v) = &self.start_time {
            debug_struct.field("start_time", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeBandwidthRateLimitRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeBandwidthRateLimitRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeBandwidthRateLimitResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeBandwidthRateLimitResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.average_upload_rate_limit_in_bits_per_sec {
            debug_struct.field("average_upload_rate_limit_in_bits_per_sec", v);
        }
        if let Some(v) = &self.average_download_rate_limit_in_bits_per_sec {
            debug_struct.field("average_download_rate_limit_in_bits_per_sec", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeCacheRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeCacheRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeCacheResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeCacheResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self.disk_ids.is_empty() {
            debug_struct.field("disk_ids", &self.disk_ids);
        }
        if let Some(v) = &self.cache_allocated_in_bytes {
            debug_struct.field("cache_allocated_in_bytes", v);
        }
        if let Some(v) = &self.cache_used_percentage {
            debug_struct.field("cache_used_percentage", v);
        }
        if let Some(v) = &self.cache_dirty_percentage {
            debug_struct.field("cache_dirty_percentage", v);
        }
        if let Some(v) = &self.cache_hit_percentage {
            debug_struct.field("cache_hit_percentage", v);
        }
        if let Some(v) = &self.cache_miss_percentage {
            debug_struct.field("cache_miss_percentage", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeCachediScsiVolumesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeCachediScsiVolumesRequest");
        if !self.volume_arns.is_empty() {
            debug_struct.field("volume_arns", &self.volume_arns);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeCachediScsiVolumesResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeCachediScsiVolumesResponse");
        if !self.cached_iscsi_volumes.is_empty() {
            debug_struct.field("cached_iscsi_volumes", &self.cached_iscsi_volumes);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeChapCredentialsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeChapCredentialsRequest");
        if let Some(v) = &self.target_arn {
            debug_struct.field("target_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeChapCredentialsResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeChapCredentialsResponse");
        if !self.chap_credentials.is_empty() {
            debug_struct.field("chap_credentials", &self.chap_credentials);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeGatewayInformationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeGatewayInformationRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeGatewayInformationResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeGatewayInformationResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.gateway_id {
            debug_struct.field("gateway_id", v);
        }
        if let Some(v) = &self.gateway_name {
            debug_struct.field("gateway_name", v);
        }
        if let Some(v) = &self.gateway_timezone {
            debug_struct.field("gateway_timezone", v);
        }
        if let Some(v) = &self.gateway_state {
            debug_struct.field("gateway_state", v);
        }
        if !self.gateway_network_interfaces.is_empty() {
            debug_struct.field("gateway_network_interfaces", &self.gateway_network_interfaces);
        }
        if let Some(v) = &self.gateway_type {
            debug_struct.field("gateway_type", v);
        }
        if let Some(v) = &self.next_update_availability_date {
            debug_struct.field("next_update_availability_date", v);
        }
        if let Some(v) = &self.last_software_update {
            debug_struct.field("last_software_update", v);
        }
        if let Some(v) = &self.ec2_instance_id {
            debug_struct.field("ec2_instance_id", v);
        }
        if let Some(v) = &self.ec2_instance_region {
            debug_struct.field("ec2_instance_region", v);
        }
        if !self.tags.is_empty() {
            debug_struct.field("tags", &self.tags);
        }
        if let Some(v) = &self.vpc_endpoint {
            debug_struct.field("vpc_endpoint", v);
        }
        if let Some(v) = &self.cloud_watch_log_group_arn {
            debug_struct.field("cloud_watch_log_group_arn", v);
        }
        if let Some(v) = &self.host_environment {
            debug_struct.field("host_environment", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeMaintenanceStartTimeRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeMaintenanceStartTimeRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeMaintenanceStartTimeResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeMaintenanceStartTimeResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.hour_of_day {
            debug_struct.field("hour_of_day", v);
        }
        if let Some(v) = &self.minute_of_hour {
            debug_struct.field("minute_of_hour", v);
        }
        if let Some(v) = &self.day_of_week {
            debug_struct.field("day_of_week", v);
        }
        if let Some(v) = &self.day_of_month {
            debug_struct.field("day_of_month", v);
        }
        if let Some(v) = &self.timezone {
            debug_struct.field("timezone", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeNfsFileSharesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeNfsFileSharesRequest");
        if !self.file_share_arn_list.is_empty() {
            debug_struct.field("file_share_arn_list", &self.file_share_arn_list);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeNfsFileSharesResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeNfsFileSharesResponse");
        if !self.nfs_file_share_info_list.is_empty() {
            debug_struct.field("nfs_file_share_info_list", &self.nfs_file_share_info_list);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeSmbFileSharesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeSmbFileSharesRequest");
        if !self.file_share_arn_list.is_empty() {
            debug_struct.field("file_share_arn_list", &self.file_share_arn_list);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeSmbFileSharesResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeSmbFileSharesResponse");
        if !self.smb_file_share_info_list.is_empty() {
            debug_struct.field("smb_file_share_info_list", &self.smb_file_share_info_list);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeSmbSettingsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeSmbSettingsRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeSmbSettingsResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeSmbSettingsResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.domain_name {
            debug_struct.field("domain_name", v);
        }
        if let Some(v) = &self.active_directory_status {
            debug_struct.field("active_directory_status", v);
        }
        if let Some(v) = &self.smb_guest_password_set {
            debug_struct.field("smb_guest_password_set", v);
        }
        if let Some(v) = &self.smb_security_strategy {
            debug_struct.field("smb_security_strategy", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeSnapshotScheduleRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeSnapshotScheduleRequest");
        if let Some(v) = &self.volume_arn {
            debug_struct.field("volume_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeSnapshotScheduleResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeSnapshotScheduleResponse");
        if let Some(v) = &self.volume_arn {
            debug_struct.field("volume_arn", v);
        }
        if let Some(v) = &self.start_at {
            debug_struct.field("start_at", v);
        }
        if let Some(v) = &self.recurrence_in_hours {
            debug_struct.field("recurrence_in_hours", v);
        }
        if let Some(v) = &self.description {
            debug_struct.field("description", v);
        }
        if let Some(v) = &self.timezone {
            debug_struct.field("timezone", v);
        }
        if !self.tags.is_empty() {
            debug_struct.field("tags", &self.tags);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeStorediScsiVolumesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeStorediScsiVolumesRequest");
        if !self.volume_arns.is_empty() {
            debug_struct.field("volume_arns", &self.volume_arns);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeStorediScsiVolumesResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeStorediScsiVolumesResponse");
        if !self.stored_iscsi_volumes.is_empty() {
            debug_struct.field("stored_iscsi_volumes", &self.stored_iscsi_volumes);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeTapeArchivesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeTapeArchivesRequest");
        if !self.tape_arns.is_empty() {
            debug_struct.field("tape_arns", &self.tape_arns);
        }
        if let Some(v) = &self.marker {
            debug_struct.field("marker", v);
        }
        if let Some(v) = &self.limit {
            debug_struct.field("limit", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeTapeArchivesResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeTapeArchivesResponse");
        if !self.tape_archives.is_empty() {
            debug_struct.field("tape_archives", &self.tape_archives);
        }
        if let Some(v) = &self.marker {
            debug_struct.field("marker", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeTapeRecoveryPointsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeTapeRecoveryPointsRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.marker {
            debug_struct.field("marker", v);
        }
        if let Some(v) = &self.limit {
            debug_struct.field("limit", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeTapeRecoveryPointsResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeTapeRecoveryPointsResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self.tape_recovery_point_infos.is_empty() {
            debug_struct.field("tape_recovery_point_infos", &self.tape_recovery_point_infos);
        }
        if let Some(v) = &self.marker {
            debug_struct.field("marker", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeTapesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeTapesRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self.tape_arns.is_empty() {
            debug_struct.field("tape_arns", &self.tape_arns);
        }
        if let Some(v) = &self.marker {
            debug_struct.field("marker", v);
        }
        if let Some(v) = &self.limit {
            debug_struct.field("limit", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeTapesResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeTapesResponse");
        if !self.tapes.is_empty() {
            debug_struct.field("tapes", &self.tapes);
        }
        if let Some(v) = &self.marker {
            debug_struct.field("marker", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeUploadBufferRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeUploadBufferRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeUploadBufferResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeUploadBufferResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self.disk_ids.is_empty() {
            debug_struct.field("disk_ids", &self.disk_ids);
        }
        if let Some(v) = &self.upload_buffer_used_in_bytes {
            debug_struct.field("upload_buffer_used_in_bytes", v);
        }
        if let Some(v) = &self.upload_buffer_allocated_in_bytes {
            debug_struct.field("upload_buffer_allocated_in_bytes", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeVtlDevicesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeVtlDevicesRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self.vtl_device_arns.is_empty() {
            debug_struct.field("vtl_device_arns", &self.vtl_device_arns);
        }
        if let Some(v) = &self.marker {
            debug_struct.field("marker", v);
        }
        if let Some(v) = &self.limit {
            debug_struct.field("limit", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeVtlDevicesResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeVtlDevicesResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self.vtl_devices.is_empty() {
            debug_struct.field("vtl_devices", &self.vtl_devices);
        }
        if let Some(v) = &self.marker {
            debug_struct.field("marker", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeWorkingStorageRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeWorkingStorageRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DescribeWorkingStorageResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DescribeWorkingStorageResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self.disk_ids.is_empty() {
            debug_struct.field("disk_ids", &self.disk_ids);
        }
        if let Some(v) = &self.working_storage_used_in_bytes {
            debug_struct.field("working_storage_used_in_bytes", v);
        }
        if let Some(v) = &self.working_storage_allocated_in_bytes {
            debug_struct.field("working_storage_allocated_in_bytes", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DetachVolumeRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DetachVolumeRequest");
        if let Some(v) = &self.volume_arn {
            debug_struct.field("volume_arn", v);
        }
        if let Some(v) = &self.force_detach {
            debug_struct.field("force_detach", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DetachVolumeResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DetachVolumeResponse");
        if let Some(v) = &self.volume_arn {
            debug_struct.field("volume_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DisableGatewayRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DisableGatewayRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DisableGatewayResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DisableGatewayResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::JoinDomainRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("JoinDomainRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.domain_name {
            debug_struct.field("domain_name", v);
        }
        if let Some(v) = &self.organizational_unit {
            debug_struct.field("organizational_unit", v);
        }
        if !self.domain_controllers.is_empty() {
            debug_struct.field("domain_controllers", &self.domain_controllers);
        }
        if let Some(v) = &self.timeout_in_seconds {
            debug_struct.field("timeout_in_seconds", v);
        }
        if let Some(v) = &self.user_name {
            debug_struct.field("user_name", v);
        }
        if self.password.is_some() {
            debug_struct.field("password", &"[censored]");
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::JoinDomainResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("JoinDomainResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.active_directory_status {
            debug_struct.field("active_directory_status", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::ListAutomaticTapeCreationPoliciesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ListAutomaticTapeCreationPoliciesRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::ListAutomaticTapeCreationPoliciesResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ListAutomaticTapeCreationPoliciesResponse");
        if !self.automatic_tape_creation_policy_infos.is_empty() {
            debug_struct.field("automatic_tape_creation_policy_infos", &self.automatic_tape_creation_policy_infos);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::ListFileSharesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ListFileSharesRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.limit {
            debug_struct.field("limit", v);
        }
        if let Some(v) = &self.marker {
            debug_struct.field("marker", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::ListFileSharesResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ListFileSharesResponse");
        if let Some(v) = &self.marker {
            debug_struct.field("marker", v);
        }
        if let Some(v) = &self.next_marker {
            debug_struct.field("next_marker", v);
        }
        if !self.file_share_info_list.is_empty() {
            debug_struct.field("file_share_info_list", &self.file_share_info_list);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::ListGatewaysRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ListGatewaysRequest");
        if let Some(v) = &self.marker {
            debug_struct.field("marker", v);
        }
        if let Some(v) = &self.limit {
            debug_struct.field("limit", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::ListGatewaysResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ListGatewaysResponse");
        if !self.gateways.is_empty() {
            debug_struct.field("gateways", &self.gateways);
        }
        if let Some(v) = &self.marker {
            debug_struct.field("marker", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::ListLocalDisksRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ListLocalDisksRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::ListLocalDisksResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ListLocalDisksResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self.disks.is_empty() {
            debug_struct.field("disks", &self.disks);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::ListTagsForResourceRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ListTagsForResourceRequest");
        if let Some(v) = &self.resource_arn {
            debug_struct.field("resource_arn", v);
        }
        if let Some(v) = &self.marker {
            debug_struct.field("marker", v);
        }
        if let Some(v) = &self.limit {
            debug_struct.field("limit", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::ListTagsForResourceResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ListTagsForResourceResponse");
        if let Some(v) = &self.resource_arn {
            debug_struct.field("resource_arn", v);
        }
        if let Some(v) = &self.marker {
            debug_struct.field("marker", v);
        }
        if !self.tags.is_empty() {
            debug_struct.field("tags", &self.tags);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::ListTapesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ListTapesRequest");
        if !self.tape_arns.is_empty() {
            debug_struct.field("tape_arns", &self.tape_arns);
        }
        if let Some(v) = &self.marker {
            debug_struct.field("marker", v);
        }
        if let Some(v) = &self.limit {
            debug_struct.field("limit", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::ListTapesResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ListTapesResponse");
        if !self.tape_infos.is_empty() {
            debug_struct.field("tape_infos", &self.tape_infos);
        }
        if let Some(v) = &self.marker {
            debug_struct.field("marker", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::ListVolumeInitiatorsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ListVolumeInitiatorsRequest");
        if let Some(v) = &self.volume_arn {
            debug_struct.field("volume_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::ListVolumeInitiatorsResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ListVolumeInitiatorsResponse");
        if !self.initiators.is_empty() {
            debug_struct.field("initiators", &self.initiators);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::ListVolumeRecoveryPointsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ListVolumeRecoveryPointsRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::ListVolumeRecoveryPointsResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ListVolumeRecoveryPointsResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self.volume_recovery_point_infos.is_empty() {
            debug_struct.field("volume_recovery_point_infos", &self.volume_recovery_point_infos);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::ListVolumesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ListVolumesRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.marker {
            debug_struct.field("marker", v);
        }
        if let Some(v) = &self.limit {
            debug_struct.field("limit", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::ListVolumesResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ListVolumesResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.marker {
            debug_struct.field("marker", v);
        }
        if !self.volume_infos.is_empty() {
            debug_struct.field("volume_infos", &self.volume_infos);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::NotifyWhenUploadedRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("NotifyWhenUploadedRequest");
        if let Some(v) = &self.file_share_arn {
            debug_struct.field("file_share_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::NotifyWhenUploadedResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("NotifyWhenUploadedResponse");
        if let Some(v) = &self.file_share_arn {
            debug_struct.field("file_share_arn", v);
        }
        if let Some(v) = &self.notification_id {
            debug_struct.field("notification_id", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::RefreshCacheRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("RefreshCacheRequest");
        if let Some(v) = &self.file_share_arn {
            debug_struct.field("file_share_arn", v);
        }
        if !self.folder_list.is_empty() {
            debug_struct.field("folder_list", &self.folder_list);
        }
        if let Some(v) = &self.recursive {
            debug_struct.field("recursive", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::RefreshCacheResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("RefreshCacheResponse");
        if let Some(v) = &self.file_share_arn {
            debug_struct.field("file_share_arn", v);
        }
        if let Some(v) = &self.notification_id {
            debug_struct.field("notification_id", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::RemoveTagsFromResourceRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("RemoveTagsFromResourceRequest");
        if let Some(v) = &self.resource_arn {
            debug_struct.field("resource_arn", v);
        }
        if !self.tag_keys.is_empty() {
            debug_struct.field("tag_keys", &self.tag_keys);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::RemoveTagsFromResourceResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("RemoveTagsFromResourceResponse");
        if let Some(v) = &self.resource_arn {
            debug_struct.field("resource_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::ResetCacheRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ResetCacheRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::ResetCacheResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ResetCacheResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::RetrieveTapeArchiveRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("RetrieveTapeArchiveRequest");
        if let Some(v) = &self.tape_arn {
            debug_struct.field("tape_arn", v);
        }
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::RetrieveTapeArchiveResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("RetrieveTapeArchiveResponse");
        if let Some(v) = &self.tape_arn {
            debug_struct.field("tape_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::RetrieveTapeRecoveryPointRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("RetrieveTapeRecoveryPointRequest");
        if let Some(v) = &self.tape_arn {
            debug_struct.field("tape_arn", v);
        }
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::RetrieveTapeRecoveryPointResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("RetrieveTapeRecoveryPointResponse");
        if let Some(v) = &self.tape_arn {
            debug_struct.field("tape_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::SetLocalConsolePasswordRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("SetLocalConsolePasswordRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if self.local_console_password.is_some() {
            debug_struct.field("local_console_password", &"[censored]");
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::SetLocalConsolePasswordResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("SetLocalConsolePasswordResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::SetSmbGuestPasswordRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("SetSmbGuestPasswordRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if self.password.is_some() {
            debug_struct.field("password", &"[censored]");
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::SetSmbGuestPasswordResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("SetSmbGuestPasswordResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::ShutdownGatewayRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ShutdownGatewayRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::ShutdownGatewayResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ShutdownGatewayResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::StartAvailabilityMonitorTestRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("StartAvailabilityMonitorTestRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::StartAvailabilityMonitorTestResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("StartAvailabilityMonitorTestResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::StartGatewayRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("StartGatewayRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::StartGatewayResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("StartGatewayResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::UpdateAutomaticTapeCreationPolicyRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UpdateAutomaticTapeCreationPolicyRequest");
        if !self.automatic_tape_creation_rules.is_empty() {
            debug_struct.field("automatic_tape_creation_rules", &self.automatic_tape_creation_rules);
        }
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::UpdateAutomaticTapeCreationPolicyResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UpdateAutomaticTapeCreationPolicyResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::UpdateBandwidthRateLimitRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UpdateBandwidthRateLimitRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.average_upload_rate_limit_in_bits_per_sec {
            debug_struct.field("average_upload_rate_limit_in_bits_per_sec", v);
        }
        if let Some(v) = &self.average_download_rate_limit_in_bits_per_sec {
            debug_struct.field("average_download_rate_limit_in_bits_per_sec", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::UpdateBandwidthRateLimitResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UpdateBandwidthRateLimitResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::UpdateChapCredentialsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UpdateChapCredentialsRequest");
        if let Some(v) = &self.target_arn {
            debug_struct.field("target_arn", v);
        }
        if self.secret_to_authenticate_initiator.is_some() {
            debug_struct.field("secret_to_authenticate_initiator", &"[censored]");
        }
        if let Some(v) = &self.initiator_name {
            debug_struct.field("initiator_name", v);
        }
        if self.secret_to_authenticate_target.is_some() {
            debug_struct.field("secret_to_authenticate_target", &"[censored]");
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::UpdateChapCredentialsResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UpdateChapCredentialsResponse");
        if let Some(v) = &self.target_arn {
            debug_struct.field("target_arn", v);
        }
        if let Some(v) = &self.initiator_name {
            debug_struct.field("initiator_name", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::UpdateGatewayInformationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UpdateGatewayInformationRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.gateway_name {
            debug_struct.field("gateway_name", v);
        }
        if let Some(v) = &self.gateway_timezone {
            debug_struct.field("gateway_timezone", v);
        }
        if let Some(v) = &self.cloud_watch_log_group_arn {
            debug_struct.field("cloud_watch_log_group_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::UpdateGatewayInformationResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UpdateGatewayInformationResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.gateway_name {
            debug_struct.field("gateway_name", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::UpdateGatewaySoftwareNowRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UpdateGatewaySoftwareNowRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::UpdateGatewaySoftwareNowResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UpdateGatewaySoftwareNowResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::UpdateMaintenanceStartTimeRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UpdateMaintenanceStartTimeRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.hour_of_day {
            debug_struct.field("hour_of_day", v);
        }
        if let Some(v) = &self.minute_of_hour {
            debug_struct.field("minute_of_hour", v);
        }
        if let Some(v) = &self.day_of_week {
            debug_struct.field("day_of_week", v);
        }
        if let Some(v) = &self.day_of_month {
            debug_struct.field("day_of_month", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::UpdateMaintenanceStartTimeResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UpdateMaintenanceStartTimeResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::UpdateNfsFileShareRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UpdateNfsFileShareRequest");
        if let Some(v) = &self.file_share_arn {
            debug_struct.field("file_share_arn", v);
        }
        if let Some(v) = &self.kms_encrypted {
            debug_struct.field("kms_encrypted", v);
        }
        if let Some(v) = &self.kms_key {
            debug_struct.field("kms_key", v);
        }
        if let Some(v) = &self.nfs_file_share_defaults {
            debug_struct.field("nfs_file_share_defaults", v);
        }
        if let Some(v) = &self.default_storage_class {
            debug_struct.field("default_storage_class", v);
        }
        if let Some(v) = &self.object_acl {
            debug_struct.field("object_acl", v);
        }
        if !self.client_list.is_empty() {
            debug_struct.field("client_list", &self.client_list);
        }
        if let Some(v) = &self.squash {
            debug_struct.field("squash", v);
        }
        if let Some(v) = &self.read_only {
            debug_struct.field("read_only", v);
        }
        if let Some(v) = &self.guess_mime_type_enabled {
            debug_struct.field("guess_mime_type_enabled", v);
        }
        if let Some(v) = &self.requester_pays {
            debug_struct.field("requester_pays", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::UpdateNfsFileShareResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UpdateNfsFileShareResponse");
        if let Some(v) = &self.file_share_arn {
            debug_struct.field("file_share_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::UpdateSmbFileShareRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UpdateSmbFileShareRequest");
        if let Some(v) = &self.file_share_arn {
            debug_struct.field("file_share_arn", v);
        }
        if let Some(v) = &self.kms_encrypted {
            debug_struct.field("kms_encrypted", v);
        }
        if let Some(v) = &self.kms_key {
            debug_struct.field("kms_key", v);
        }
        if let Some(v) = &self.default_storage_class {
            debug_struct.field("default_storage_class", v);
        }
        if let Some(v) = &self.object_acl {
            debug_struct.field("object_acl", v);
        }
        if let Some(v) = &self.read_only {
            debug_struct.field("read_only", v);
        }
        if let Some(v) = &self.guess_mime_type_enabled {
            debug_struct.field("guess_mime_type_enabled", v);
        }
        if let Some(v) = &self.requester_pays {
            debug_struct.field("requester_pays", v);
        }
        if let Some(v) = &self.smb_acl_enabled {
            debug_struct.field("smb_acl_enabled", v);
        }
        if !self.admin_user_list.is_empty() {
            debug_struct.field("admin_user_list", &self.admin_user_list);
        }
        if !self.valid_user_list.is_empty() {
            debug_struct.field("valid_user_list", &self.valid_user_list);
        }
        if !self.invalid_user_list.is_empty() {
            debug_struct.field("invalid_user_list", &self.invalid_user_list);
        }
        if let Some(v) = &self.audit_destination_arn {
            debug_struct.field("audit_destination_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::UpdateSmbFileShareResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UpdateSmbFileShareResponse");
        if let Some(v) = &self.file_share_arn {
            debug_struct.field("file_share_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::UpdateSmbSecurityStrategyRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UpdateSmbSecurityStrategyRequest");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.smb_security_strategy {
            debug_struct.field("smb_security_strategy", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::UpdateSmbSecurityStrategyResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UpdateSmbSecurityStrategyResponse");
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::UpdateSnapshotScheduleRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UpdateSnapshotScheduleRequest");
        if let Some(v) = &self.volume_arn {
            debug_struct.field("volume_arn", v);
        }
        if let Some(v) = &self.start_at {
            debug_struct.field("start_at", v);
        }
        if let Some(v) = &self.recurrence_in_hours {
            debug_struct.field("recurrence_in_hours", v);
        }
        if let Some(v) = &self.description {
            debug_struct.field("description", v);
        }
        if !self.tags.is_empty() {
            debug_struct.field("tags", &self.tags);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::UpdateSnapshotScheduleResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UpdateSnapshotScheduleResponse");
        if let Some(v) = &self.volume_arn {
            debug_struct.field("volume_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::UpdateVtlDeviceTypeRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UpdateVtlDeviceTypeRequest");
        if let Some(v) = &self.vtl_device_arn {
            debug_struct.field("vtl_device_arn", v);
        }
        if let Some(v) = &self.device_type {
            debug_struct.field("device_type", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::UpdateVtlDeviceTypeResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("UpdateVtlDeviceTypeResponse");
        if let Some(v) = &self.vtl_device_arn {
            debug_struct.field("vtl_device_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("Tag");
        if let Some(v) = &self.key {
            debug_struct.field("key", v);
        }
        if let Some(v) = &self.value {
            debug_struct.field("value", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::ChapInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ChapInfo");
        if let Some(v) = &self.target_arn {
            debug_struct.field("target_arn", v);
        }
        if self.secret_to_authenticate_initiator.is_some() {
            debug_struct.field("secret_to_authenticate_initiator", &"[censored]");
        }
        if let Some(v) = &self.initiator_name {
            debug_struct.field("initiator_name", v);
        }
        if self.secret_to_authenticate_target.is_some() {
            debug_struct.field("secret_to_authenticate_target", &"[censored]");
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::CachediScsiVolume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CachediScsiVolume");
        if let Some(v) = &self.volume_arn {
            debug_struct.field("volume_arn", v);
        }
        if let Some(v) = &self.volume_id {
            debug_struct.field("volume_id", v);
        }
        if let Some(v) = &self.volume_type {
            debug_struct.field("volume_type", v);
        }
        if let Some(v) = &self.volume_status {
            debug_struct.field("volume_status", v);
        }
        if let Some(v) = &self.volume_attachment_status {
            debug_struct.field("volume_attachment_status", v);
        }
        if let Some(v) = &self.volume_size_in_bytes {
            debug_struct.field("volume_size_in_bytes", v);
        }
        if let Some(v) = &self.volume_progress {
            debug_struct.field("volume_progress", v);
        }
        if let Some(v) = &self.source_snapshot_id {
            debug_struct.field("source_snapshot_id", v);
        }
        if let Some(v) = &self.volume_iscsi_attributes {
            debug_struct.field("volume_iscsi_attributes", v);
        }
        if let Some(v) = &self.created_date {
            debug_struct.field("created_date", v);
        }
        if let Some(v) = &self.volume_used_in_bytes {
            debug_struct.field("volume_used_in_bytes", v);
        }
        if let Some(v) = &self.kms_key {
            debug_struct.field("kms_key", v);
        }
        if let Some(v) = &self.target_name {
            debug_struct.field("target_name", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::StorediScsiVolume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("StorediScsiVolume");
        if let Some(v) = &self.volume_arn {
            debug_struct.field("volume_arn", v);
        }
        if let Some(v) = &self.volume_id {
            debug_struct.field("volume_id", v);
        }
        if let Some(v) = &self.volume_type {
            debug_struct.field("volume_type", v);
        }
        if let Some(v) = &self.volume_status {
            debug_struct.field("volume_status", v);
        }
        if let Some(v) = &self.volume_attachment_status {
            debug_struct.field("volume_attachment_status", v);
        }
        if let Some(v) = &self.volume_size_in_bytes {
            debug_struct.field("volume_size_in_bytes", v);
        }
        if let Some(v) = &self.volume_progress {
            debug_struct.field("volume_progress", v);
        }
        if let Some(v) = &self.volume_disk_id {
            debug_struct.field("volume_disk_id", v);
        }
        if let Some(v) = &self.source_snapshot_id {
            debug_struct.field("source_snapshot_id", v);
        }
        if let Some(v) = &self.preserved_existing_data {
            debug_struct.field("preserved_existing_data", v);
        }
        if let Some(v) = &self.volume_iscsi_attributes {
            debug_struct.field("volume_iscsi_attributes", v);
        }
        if let Some(v) = &self.created_date {
            debug_struct.field("created_date", v);
        }
        if let Some(v) = &self.volume_used_in_bytes {
            debug_struct.field("volume_used_in_bytes", v);
        }
        if let Some(v) = &self.kms_key {
            debug_struct.field("kms_key", v);
        }
        if let Some(v) = &self.target_name {
            debug_struct.field("target_name", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::VolumeiScsiAttributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("VolumeiScsiAttributes");
        if let Some(v) = &self.target_arn {
            debug_struct.field("target_arn", v);
        }
        if let Some(v) = &self.network_interface_id {
            debug_struct.field("network_interface_id", v);
        }
        if let Some(v) = &self.network_interface_port {
            debug_struct.field("network_interface_port", v);
        }
        if let Some(v) = &self.lun_number {
            debug_struct.field("lun_number", v);
        }
        if let Some(v) = &self.chap_enabled {
            debug_struct.field("chap_enabled", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::DeviceiScsiAttributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DeviceiScsiAttributes");
        if let Some(v) = &self.target_arn {
            debug_struct.field("target_arn", v);
        }
        if let Some(v) = &self.network_interface_id {
            debug_struct.field("network_interface_id", v);
        }
        if let Some(v) = &self.network_interface_port {
            debug_struct.field("network_interface_port", v);
        }
        if let Some(v) = &self.chap_enabled {
            debug_struct.field("chap_enabled", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::Disk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("Disk");
        if let Some(v) = &self.disk_id {
            debug_struct.field("disk_id", v);
        }
        if let Some(v) = &self.disk_path {
            debug_struct.field("disk_path", v);
        }
        if let Some(v) = &self.disk_node {
            debug_struct.field("disk_node", v);
        }
        if let Some(v) = &self.disk_status {
            debug_struct.field("disk_status", v);
        }
        if let Some(v) = &self.disk_size_in_bytes {
            debug_struct.field("disk_size_in_bytes", v);
        }
        if let Some(v) = &self.disk_allocation_type {
            debug_struct.field("disk_allocation_type", v);
        }
        if let Some(v) = &self.disk_allocation_resource {
            debug_struct.field("disk_allocation_resource", v);
        }
        if !self.disk_attribute_list.is_empty() {
            debug_struct.field("disk_attribute_list", &self.disk_attribute_list);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::VtlDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("VtlDevice");
        if let Some(v) = &self.vtl_device_arn {
            debug_struct.field("vtl_device_arn", v);
        }
        if let Some(v) = &self.vtl_device_type {
            debug_struct.field("vtl_device_type", v);
        }
        if let Some(v) = &self.vtl_device_vendor {
            debug_struct.field("vtl_device_vendor", v);
        }
        if let Some(v) = &self.vtl_device_product_identifier {
            debug_struct.field("vtl_device_product_identifier", v);
        }
        if let Some(v) = &self.device_iscsi_attributes {
            debug_struct.field("device_iscsi_attributes", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::Tape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("Tape");
        if let Some(v) = &self.tape_arn {
            debug_struct.field("tape_arn", v);
        }
        if let Some(v) = &self.tape_barcode {
            debug_struct.field("tape_barcode", v);
        }
        if let Some(v) = &self.tape_created_date {
            debug_struct.field("tape_created_date", v);
        }
        if let Some(v) = &self.tape_size_in_bytes {
            debug_struct.field("tape_size_in_bytes", v);
        }
        if let Some(v) = &self.tape_status {
            debug_struct.field("tape_status", v);
        }
        if let Some(v) = &self.vtl_device {
            debug_struct.field("vtl_device", v);
        }
        if let Some(v) = &self.progress {
            debug_struct.field("progress", v);
        }
        if let Some(v) = &self.tape_used_in_bytes {
            debug_struct.field("tape_used_in_bytes", v);
        }
        if let Some(v) = &self.kms_key {
            debug_struct.field("kms_key", v);
        }
        if let Some(v) = &self.pool_id {
            debug_struct.field("pool_id", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::TapeArchive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("TapeArchive");
        if let Some(v) = &self.tape_arn {
            debug_struct.field("tape_arn", v);
        }
        if let Some(v) = &self.tape_barcode {
            debug_struct.field("tape_barcode", v);
        }
        if let Some(v) = &self.tape_created_date {
            debug_struct.field("tape_created_date", v);
        }
        if let Some(v) = &self.tape_size_in_bytes {
            debug_struct.field("tape_size_in_bytes", v);
        }
        if let Some(v) = &self.completion_time {
            debug_struct.field("completion_time", v);
        }
        if let Some(v) = &self.retrieved_to {
            debug_struct.field("retrieved_to", v);
        }
        if let Some(v) = &self.tape_status {
            debug_struct.field("tape_status", v);
        }
        if let Some(v) = &self.tape_used_in_bytes {
            debug_struct.field("tape_used_in_bytes", v);
        }
        if let Some(v) = &self.kms_key {
            debug_struct.field("kms_key", v);
        }
        if let Some(v) = &self.pool_id {
            debug_struct.field("pool_id", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::TapeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("TapeInfo");
        if let Some(v) = &self.tape_arn {
            debug_struct.field("tape_arn", v);
        }
        if let Some(v) = &self.tape_barcode {
            debug_struct.field("tape_barcode", v);
        }
        if let Some(v) = &self.tape_size_in_bytes {
            debug_struct.field("tape_size_in_bytes", v);
        }
        if let Some(v) = &self.tape_status {
            debug_struct.field("tape_status", v);
        }
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.pool_id {
            debug_struct.field("pool_id", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::TapeRecoveryPointInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("TapeRecoveryPointInfo");
        if let Some(v) = &self.tape_arn {
            debug_struct.field("tape_arn", v);
        }
        if let Some(v) = &self.tape_recovery_point_time {
            debug_struct.field("tape_recovery_point_time", v);
        }
        if let Some(v) = &self.tape_size_in_bytes {
            debug_struct.field("tape_size_in_bytes", v);
        }
        if let Some(v) = &self.tape_status {
            debug_struct.field("tape_status", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::GatewayInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("GatewayInfo");
        if let Some(v) = &self.gateway_id {
            debug_struct.field("gateway_id", v);
        }
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.gateway_type {
            debug_struct.field("gateway_type", v);
        }
        if let Some(v) = &self.gateway_operational_state {
            debug_struct.field("gateway_operational_state", v);
        }
        if let Some(v) = &self.gateway_name {
            debug_struct.field("gateway_name", v);
        }
        if let Some(v) = &self.ec2_instance_id {
            debug_struct.field("ec2_instance_id", v);
        }
        if let Some(v) = &self.ec2_instance_region {
            debug_struct.field("ec2_instance_region", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::NetworkInterface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("NetworkInterface");
        if let Some(v) = &self.ipv4_address {
            debug_struct.field("ipv4_address", v);
        }
        if let Some(v) = &self.mac_address {
            debug_struct.field("mac_address", v);
        }
        if let Some(v) = &self.ipv6_address {
            debug_struct.field("ipv6_address", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::VolumeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("VolumeInfo");
        if let Some(v) = &self.volume_arn {
            debug_struct.field("volume_arn", v);
        }
        if let Some(v) = &self.volume_id {
            debug_struct.field("volume_id", v);
        }
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.gateway_id {
            debug_struct.field("gateway_id", v);
        }
        if let Some(v) = &self.volume_type {
            debug_struct.field("volume_type", v);
        }
        if let Some(v) = &self.volume_size_in_bytes {
            debug_struct.field("volume_size_in_bytes", v);
        }
        if let Some(v) = &self.volume_attachment_status {
            debug_struct.field("volume_attachment_status", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::VolumeRecoveryPointInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("VolumeRecoveryPointInfo");
        if let Some(v) = &self.volume_arn {
            debug_struct.field("volume_arn", v);
        }
        if let Some(v) = &self.volume_size_in_bytes {
            debug_struct.field("volume_size_in_bytes", v);
        }
        if let Some(v) = &self.volume_usage_in_bytes {
            debug_struct.field("volume_usage_in_bytes", v);
        }
        if let Some(v) = &self.volume_recovery_point_time {
            debug_struct.field("volume_recovery_point_time", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::FileShareInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("FileShareInfo");
        if let Some(v) = &self.file_share_type {
            debug_struct.field("file_share_type", v);
        }
        if let Some(v) = &self.file_share_arn {
            debug_struct.field("file_share_arn", v);
        }
        if let Some(v) = &self.file_share_id {
            debug_struct.field("file_share_id", v);
        }
        if let Some(v) = &self.file_share_status {
            debug_struct.field("file_share_status", v);
        }
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::NfsFileShareDefaults {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("NfsFileShareDefaults");
        if let Some(v) = &self.file_mode {
            debug_struct.field("file_mode", v);
        }
        if let Some(v) = &self.directory_mode {
            debug_struct.field("directory_mode", v);
        }
        if let Some(v) = &self.group_id {
            debug_struct.field("group_id", v);
        }
        if let Some(v) = &self.owner_id {
            debug_struct.field("owner_id", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::NfsFileShareInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("NfsFileShareInfo");
        if let Some(v) = &self.nfs_file_share_defaults {
            debug_struct.field("nfs_file_share_defaults", v);
        }
        if let Some(v) = &self.file_share_arn {
            debug_struct.field("file_share_arn", v);
        }
        if let Some(v) = &self.file_share_id {
            debug_struct.field("file_share_id", v);
        }
        if let Some(v) = &self.file_share_status {
            debug_struct.field("file_share_status", v);
        }
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.kms_encrypted {
            debug_struct.field("kms_encrypted", v);
        }
        if let Some(v) = &self.kms_key {
            debug_struct.field("kms_key", v);
        }
        if let Some(v) = &self.path {
            debug_struct.field("path", v);
        }
        if let Some(v) = &self.role {
            debug_struct.field("role", v);
        }
        if let Some(v) = &self.location_arn {
            debug_struct.field("location_arn", v);
        }
        if let Some(v) = &self.default_storage_class {
            debug_struct.field("default_storage_class", v);
        }
        if let Some(v) = &self.object_acl {
            debug_struct.field("object_acl", v);
        }
        if !self.client_list.is_empty() {
            debug_struct.field("client_list", &self.client_list);
        }
        if let Some(v) = &self.squash {
            debug_struct.field("squash", v);
        }
        if let Some(v) = &self.read_only {
            debug_struct.field("read_only", v);
        }
        if let Some(v) = &self.guess_mime_type_enabled {
            debug_struct.field("guess_mime_type_enabled", v);
        }
        if let Some(v) = &self.requester_pays {
            debug_struct.field("requester_pays", v);
        }
        if !self.tags.is_empty() {
            debug_struct.field("tags", &self.tags);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::SmbFileShareInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("SmbFileShareInfo");
        if let Some(v) = &self.file_share_arn {
            debug_struct.field("file_share_arn", v);
        }
        if let Some(v) = &self.file_share_id {
            debug_struct.field("file_share_id", v);
        }
        if let Some(v) = &self.file_share_status {
            debug_struct.field("file_share_status", v);
        }
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if let Some(v) = &self.kms_encrypted {
            debug_struct.field("kms_encrypted", v);
        }
        if let Some(v) = &self.kms_key {
            debug_struct.field("kms_key", v);
        }
        if let Some(v) = &self.path {
            debug_struct.field("path", v);
        }
        if let Some(v) = &self.role {
            debug_struct.field("role", v);
        }
        if let Some(v) = &self.location_arn {
            debug_struct.field("location_arn", v);
        }
        if let Some(v) = &self.default_storage_class {
            debug_struct.field("default_storage_class", v);
        }
        if let Some(v) = &self.object_acl {
            debug_struct.field("object_acl", v);
        }
        if let Some(v) = &self.read_only {
            debug_struct.field("read_only", v);
        }
        if let Some(v) = &self.guess_mime_type_enabled {
            debug_struct.field("guess_mime_type_enabled", v);
        }
        if let Some(v) = &self.requester_pays {
            debug_struct.field("requester_pays", v);
        }
        if let Some(v) = &self.smb_acl_enabled {
            debug_struct.field("smb_acl_enabled", v);
        }
        if !self.admin_user_list.is_empty() {
            debug_struct.field("admin_user_list", &self.admin_user_list);
        }
        if !self.valid_user_list.is_empty() {
            debug_struct.field("valid_user_list", &self.valid_user_list);
        }
        if !self.invalid_user_list.is_empty() {
            debug_struct.field("invalid_user_list", &self.invalid_user_list);
        }
        if let Some(v) = &self.audit_destination_arn {
            debug_struct.field("audit_destination_arn", v);
        }
        if let Some(v) = &self.authentication {
            debug_struct.field("authentication", v);
        }
        if !self.tags.is_empty() {
            debug_struct.field("tags", &self.tags);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::AutomaticTapeCreationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("AutomaticTapeCreationRule");
        if let Some(v) = &self.tape_barcode_prefix {
            debug_struct.field("tape_barcode_prefix", v);
        }
        if let Some(v) = &self.pool_id {
            debug_struct.field("pool_id", v);
        }
        if let Some(v) = &self.tape_size_in_bytes {
            debug_struct.field("tape_size_in_bytes", v);
        }
        if let Some(v) = &self.minimum_num_tapes {
            debug_struct.field("minimum_num_tapes", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::AutomaticTapeCreationPolicyInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("AutomaticTapeCreationPolicyInfo");
        if !self.automatic_tape_creation_rules.is_empty() {
            debug_struct.field("automatic_tape_creation_rules", &self.automatic_tape_creation_rules);
        }
        if let Some(v) = &self.gateway_arn {
            debug_struct.field("gateway_arn", v);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for crate::model::StorageGatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("StorageGatewayError");
        if let Some(v) = &self.error_code {
            debug_struct.field("error_code", v);
        }
        if !self.error_details.is_empty() {
            debug_struct.field("error_details", &self.error_details);
        }
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}
