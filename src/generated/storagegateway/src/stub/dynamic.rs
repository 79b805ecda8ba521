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

/// A dyn-compatible, crate-private version of [super::StorageGateway].
#[async_trait::async_trait]
pub trait StorageGateway: std::fmt::Debug + Send + Sync {
    async fn activate_gateway(
        &self,
        req: crate::model::ActivateGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ActivateGatewayResponse>>;

    async fn add_cache(
        &self,
        req: crate::model::AddCacheRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AddCacheResponse>>;

    async fn add_tags_to_resource(
        &self,
        req: crate::model::AddTagsToResourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AddTagsToResourceResponse>>;

    async fn add_upload_buffer(
        &self,
        req: crate::model::AddUploadBufferRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AddUploadBufferResponse>>;

    async fn add_working_storage(
        &self,
        req: crate::model::AddWorkingStorageRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AddWorkingStorageResponse>>;

    async fn assign_tape_pool(
        &self,
        req: crate::model::AssignTapePoolRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AssignTapePoolResponse>>;

    async fn attach_volume(
        &self,
        req: crate::model::AttachVolumeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AttachVolumeResponse>>;

    async fn cancel_archival(
        &self,
        req: crate::model::CancelArchivalRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CancelArchivalResponse>>;

    async fn cancel_retrieval(
        &self,
        req: crate::model::CancelRetrievalRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CancelRetrievalResponse>>;

    async fn create_cached_iscsi_volume(
        &self,
        req: crate::model::CreateCachediScsiVolumeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CreateCachediScsiVolumeResponse>>;

    async fn create_nfs_file_share(
        &self,
        req: crate::model::CreateNfsFileShareRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CreateNfsFileShareResponse>>;

    async fn create_smb_file_share(
        &self,
        req: crate::model::CreateSmbFileShareRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CreateSmbFileShareResponse>>;

    async fn create_snapshot(
        &self,
        req: crate::model::CreateSnapshotRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CreateSnapshotResponse>>;

    async fn create_snapshot_from_volume_recovery_point(
        &self,
        req: crate::model::CreateSnapshotFromVolumeRecoveryPointRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CreateSnapshotFromVolumeRecoveryPointResponse>>;

    async fn create_stored_iscsi_volume(
        &self,
        req: crate::model::CreateStorediScsiVolumeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CreateStorediScsiVolumeResponse>>;

    async fn create_tape_with_barcode(
        &self,
        req: crate::model::CreateTapeWithBarcodeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CreateTapeWithBarcodeResponse>>;

    async fn create_tapes(
        &self,
        req: crate::model::CreateTapesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CreateTapesResponse>>;

    async fn delete_automatic_tape_creation_policy(
        &self,
        req: crate::model::DeleteAutomaticTapeCreationPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteAutomaticTapeCreationPolicyResponse>>;

    async fn delete_bandwidth_rate_limit(
        &self,
        req: crate::model::DeleteBandwidthRateLimitRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteBandwidthRateLimitResponse>>;

    async fn delete_chap_credentials(
        &self,
        req: crate::model::DeleteChapCredentialsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteChapCredentialsResponse>>;

    async fn delete_file_share(
        &self,
        req: crate::model::DeleteFileShareRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteFileShareResponse>>;

    async fn delete_gateway(
        &self,
        req: crate::model::DeleteGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteGatewayResponse>>;

    async fn delete_snapshot_schedule(
        &self,
        req: crate::model::DeleteSnapshotScheduleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteSnapshotScheduleResponse>>;

    async fn delete_tape(
        &self,
        req: crate::model::DeleteTapeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteTapeResponse>>;

    async fn delete_tape_archive(
        &self,
        req: crate::model::DeleteTapeArchiveRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteTapeArchiveResponse>>;

    async fn delete_volume(
        &self,
        req: crate::model::DeleteVolumeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteVolumeResponse>>;

    async fn describe_availability_monitor_test(
        &self,
        req: crate::model::DescribeAvailabilityMonitorTestRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeAvailabilityMonitorTestResponse>>;

    async fn describe_bandwidth_rate_limit(
        &self,
        req: crate::model::DescribeBandwidthRateLimitRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeBandwidthRateLimitResponse>>;

    async fn describe_cache(
        &self,
        req: crate::model::DescribeCacheRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeCacheResponse>>;

    async fn describe_cached_iscsi_volumes(
        &self,
        req: crate::model::DescribeCachediScsiVolumesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeCachediScsiVolumesResponse>>;

    async fn describe_chap_credentials(
        &self,
        req: crate::model::DescribeChapCredentialsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeChapCredentialsResponse>>;

    async fn describe_gateway_information(
        &self,
        req: crate::model::DescribeGatewayInformationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeGatewayInformationResponse>>;

    async fn describe_maintenance_start_time(
        &self,
        req: crate::model::DescribeMaintenanceStartTimeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeMaintenanceStartTimeResponse>>;

    async fn describe_nfs_file_shares(
        &self,
        req: crate::model::DescribeNfsFileSharesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeNfsFileSharesResponse>>;

    async fn describe_smb_file_shares(
        &self,
        req: crate::model::DescribeSmbFileSharesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeSmbFileSharesResponse>>;

    async fn describe_smb_settings(
        &self,
        req: crate::model::DescribeSmbSettingsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeSmbSettingsResponse>>;

    async fn describe_snapshot_schedule(
        &self,
        req: crate::model::DescribeSnapshotScheduleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeSnapshotScheduleResponse>>;

    async fn describe_stored_iscsi_volumes(
        &self,
        req: crate::model::DescribeStorediScsiVolumesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeStorediScsiVolumesResponse>>;

    async fn describe_tape_archives(
        &self,
        req: crate::model::DescribeTapeArchivesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeTapeArchivesResponse>>;

    async fn describe_tape_recovery_points(
        &self,
        req: crate::model::DescribeTapeRecoveryPointsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeTapeRecoveryPointsResponse>>;

    async fn describe_tapes(
        &self,
        req: crate::model::DescribeTapesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeTapesResponse>>;

    async fn describe_upload_buffer(
        &self,
        req: crate::model::DescribeUploadBufferRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeUploadBufferResponse>>;

    async fn describe_vtl_devices(
        &self,
        req: crate::model::DescribeVtlDevicesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeVtlDevicesResponse>>;

    async fn describe_working_storage(
        &self,
        req: crate::model::DescribeWorkingStorageRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeWorkingStorageResponse>>;

    async fn detach_volume(
        &self,
        req: crate::model::DetachVolumeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DetachVolumeResponse>>;

    async fn disable_gateway(
        &self,
        req: crate::model::DisableGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DisableGatewayResponse>>;

    async fn join_domain(
        &self,
        req: crate::model::JoinDomainRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::JoinDomainResponse>>;

    async fn list_automatic_tape_creation_policies(
        &self,
        req: crate::model::ListAutomaticTapeCreationPoliciesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListAutomaticTapeCreationPoliciesResponse>>;

    async fn list_file_shares(
        &self,
        req: crate::model::ListFileSharesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListFileSharesResponse>>;

    async fn list_gateways(
        &self,
        req: crate::model::ListGatewaysRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListGatewaysResponse>>;

    async fn list_local_disks(
        &self,
        req: crate::model::ListLocalDisksRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListLocalDisksResponse>>;

    async fn list_tags_for_resource(
        &self,
        req: crate::model::ListTagsForResourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListTagsForResourceResponse>>;

    async fn list_tapes(
        &self,
        req: crate::model::ListTapesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListTapesResponse>>;

    async fn list_volume_initiators(
        &self,
        req: crate::model::ListVolumeInitiatorsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListVolumeInitiatorsResponse>>;

    async fn list_volume_recovery_points(
        &self,
        req: crate::model::ListVolumeRecoveryPointsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListVolumeRecoveryPointsResponse>>;

    async fn list_volumes(
        &self,
        req: crate::model::ListVolumesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListVolumesResponse>>;

    async fn notify_when_uploaded(
        &self,
        req: crate::model::NotifyWhenUploadedRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::NotifyWhenUploadedResponse>>;

    async fn refresh_cache(
        &self,
        req: crate::model::RefreshCacheRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RefreshCacheResponse>>;

    async fn remove_tags_from_resource(
        &self,
        req: crate::model::RemoveTagsFromResourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RemoveTagsFromResourceResponse>>;

    async fn reset_cache(
        &self,
        req: crate::model::ResetCacheRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ResetCacheResponse>>;

    async fn retrieve_tape_archive(
        &self,
        req: crate::model::RetrieveTapeArchiveRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RetrieveTapeArchiveResponse>>;

    async fn retrieve_tape_recovery_point(
        &self,
        req: crate::model::RetrieveTapeRecoveryPointRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RetrieveTapeRecoveryPointResponse>>;

    async fn set_local_console_password(
        &self,
        req: crate::model::SetLocalConsolePasswordRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SetLocalConsolePasswordResponse>>;

    async fn set_smb_guest_password(
        &self,
        req: crate::model::SetSmbGuestPasswordRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SetSmbGuestPasswordResponse>>;

    async fn shutdown_gateway(
        &self,
        req: crate::model::ShutdownGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ShutdownGatewayResponse>>;

    async fn start_availability_monitor_test(
        &self,
        req: crate::model::StartAvailabilityMonitorTestRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::StartAvailabilityMonitorTestResponse>>;

    async fn start_gateway(
        &self,
        req: crate::model::StartGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::StartGatewayResponse>>;

    async fn update_automatic_tape_creation_policy(
        &self,
        req: crate::model::UpdateAutomaticTapeCreationPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateAutomaticTapeCreationPolicyResponse>>;

    async fn update_bandwidth_rate_limit(
        &self,
        req: crate::model::UpdateBandwidthRateLimitRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateBandwidthRateLimitResponse>>;

    async fn update_chap_credentials(
        &self,
        req: crate::model::UpdateChapCredentialsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateChapCredentialsResponse>>;

    async fn update_gateway_information(
        &self,
        req: crate::model::UpdateGatewayInformationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateGatewayInformationResponse>>;

    async fn update_gateway_software_now(
        &self,
        req: crate::model::UpdateGatewaySoftwareNowRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateGatewaySoftwareNowResponse>>;

    async fn update_maintenance_start_time(
        &self,
        req: crate::model::UpdateMaintenanceStartTimeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateMaintenanceStartTimeResponse>>;

    async fn update_nfs_file_share(
        &self,
        req: crate::model::UpdateNfsFileShareRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateNfsFileShareResponse>>;

    async fn update_smb_file_share(
        &self,
        req: crate::model::UpdateSmbFileShareRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateSmbFileShareResponse>>;

    async fn update_smb_security_strategy(
        &self,
        req: crate::model::UpdateSmbSecurityStrategyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateSmbSecurityStrategyResponse>>;

    async fn update_snapshot_schedule(
        &self,
        req: crate::model::UpdateSnapshotScheduleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateSnapshotScheduleResponse>>;

    async fn update_vtl_device_type(
        &self,
        req: crate::model::UpdateVtlDeviceTypeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateVtlDeviceTypeResponse>>;
}

/// All implementations of [super::StorageGateway] also implement [StorageGateway].
#[async_trait::async_trait]
impl<T: super::StorageGateway> StorageGateway for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn activate_gateway(
        &self,
        req: crate::model::ActivateGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ActivateGatewayResponse>> {
        T::activate_gateway(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn add_cache(
        &self,
        req: crate::model::AddCacheRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AddCacheResponse>> {
        T::add_cache(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn add_tags_to_resource(
        &self,
        req: crate::model::AddTagsToResourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AddTagsToResourceResponse>> {
        T::add_tags_to_resource(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn add_upload_buffer(
        &self,
        req: crate::model::AddUploadBufferRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AddUploadBufferResponse>> {
        T::add_upload_buffer(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn add_working_storage(
        &self,
        req: crate::model::AddWorkingStorageRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AddWorkingStorageResponse>> {
        T::add_working_storage(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn assign_tape_pool(
        &self,
        req: crate::model::AssignTapePoolRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AssignTapePoolResponse>> {
        T::assign_tape_pool(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn attach_volume(
        &self,
        req: crate::model::AttachVolumeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AttachVolumeResponse>> {
        T::attach_volume(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn cancel_archival(
        &self,
        req: crate::model::CancelArchivalRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CancelArchivalResponse>> {
        T::cancel_archival(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn cancel_retrieval(
        &self,
        req: crate::model::CancelRetrievalRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CancelRetrievalResponse>> {
        T::cancel_retrieval(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_cached_iscsi_volume(
        &self,
        req: crate::model::CreateCachediScsiVolumeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CreateCachediScsiVolumeResponse>> {
        T::create_cached_iscsi_volume(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_nfs_file_share(
        &self,
        req: crate::model::CreateNfsFileShareRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CreateNfsFileShareResponse>> {
        T::create_nfs_file_share(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_smb_file_share(
        &self,
        req: crate::model::CreateSmbFileShareRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CreateSmbFileShareResponse>> {
        T::create_smb_file_share(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_snapshot(
        &self,
        req: crate::model::CreateSnapshotRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CreateSnapshotResponse>> {
        T::create_snapshot(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_snapshot_from_volume_recovery_point(
        &self,
        req: crate::model::CreateSnapshotFromVolumeRecoveryPointRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CreateSnapshotFromVolumeRecoveryPointResponse>> {
        T::create_snapshot_from_volume_recovery_point(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_stored_iscsi_volume(
        &self,
        req: crate::model::CreateStorediScsiVolumeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CreateStorediScsiVolumeResponse>> {
        T::create_stored_iscsi_volume(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_tape_with_barcode(
        &self,
        req: crate::model::CreateTapeWithBarcodeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CreateTapeWithBarcodeResponse>> {
        T::create_tape_with_barcode(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_tapes(
        &self,
        req: crate::model::CreateTapesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CreateTapesResponse>> {
        T::create_tapes(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_automatic_tape_creation_policy(
        &self,
        req: crate::model::DeleteAutomaticTapeCreationPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteAutomaticTapeCreationPolicyResponse>> {
        T::delete_automatic_tape_creation_policy(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_bandwidth_rate_limit(
        &self,
        req: crate::model::DeleteBandwidthRateLimitRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteBandwidthRateLimitResponse>> {
        T::delete_bandwidth_rate_limit(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_chap_credentials(
        &self,
        req: crate::model::DeleteChapCredentialsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteChapCredentialsResponse>> {
        T::delete_chap_credentials(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_file_share(
        &self,
        req: crate::model::DeleteFileShareRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteFileShareResponse>> {
        T::delete_file_share(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_gateway(
        &self,
        req: crate::model::DeleteGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteGatewayResponse>> {
        T::delete_gateway(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_snapshot_schedule(
        &self,
        req: crate::model::DeleteSnapshotScheduleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteSnapshotScheduleResponse>> {
        T::delete_snapshot_schedule(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_tape(
        &self,
        req: crate::model::DeleteTapeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteTapeResponse>> {
        T::delete_tape(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_tape_archive(
        &self,
        req: crate::model::DeleteTapeArchiveRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteTapeArchiveResponse>> {
        T::delete_tape_archive(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_volume(
        &self,
        req: crate::model::DeleteVolumeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteVolumeResponse>> {
        T::delete_volume(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_availability_monitor_test(
        &self,
        req: crate::model::DescribeAvailabilityMonitorTestRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeAvailabilityMonitorTestResponse>> {
        T::describe_availability_monitor_test(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_bandwidth_rate_limit(
        &self,
        req: crate::model::DescribeBandwidthRateLimitRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeBandwidthRateLimitResponse>> {
        T::describe_bandwidth_rate_limit(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_cache(
        &self,
        req: crate::model::DescribeCacheRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeCacheResponse>> {
        T::describe_cache(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_cached_iscsi_volumes(
        &self,
        req: crate::model::DescribeCachediScsiVolumesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeCachediScsiVolumesResponse>> {
        T::describe_cached_iscsi_volumes(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_chap_credentials(
        &self,
        req: crate::model::DescribeChapCredentialsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeChapCredentialsResponse>> {
        T::describe_chap_credentials(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_gateway_information(
        &self,
        req: crate::model::DescribeGatewayInformationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeGatewayInformationResponse>> {
        T::describe_gateway_information(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_maintenance_start_time(
        &self,
        req: crate::model::DescribeMaintenanceStartTimeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeMaintenanceStartTimeResponse>> {
        T::describe_maintenance_start_time(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_nfs_file_shares(
        &self,
        req: crate::model::DescribeNfsFileSharesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeNfsFileSharesResponse>> {
        T::describe_nfs_file_shares(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_smb_file_shares(
        &self,
        req: crate::model::DescribeSmbFileSharesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeSmbFileSharesResponse>> {
        T::describe_smb_file_shares(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_smb_settings(
        &self,
        req: crate::model::DescribeSmbSettingsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeSmbSettingsResponse>> {
        T::describe_smb_settings(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_snapshot_schedule(
        &self,
        req: crate::model::DescribeSnapshotScheduleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeSnapshotScheduleResponse>> {
        T::describe_snapshot_schedule(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_stored_iscsi_volumes(
        &self,
        req: crate::model::DescribeStorediScsiVolumesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeStorediScsiVolumesResponse>> {
        T::describe_stored_iscsi_volumes(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_tape_archives(
        &self,
        req: crate::model::DescribeTapeArchivesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeTapeArchivesResponse>> {
        T::describe_tape_archives(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_tape_recovery_points(
        &self,
        req: crate::model::DescribeTapeRecoveryPointsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeTapeRecoveryPointsResponse>> {
        T::describe_tape_recovery_points(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_tapes(
        &self,
        req: crate::model::DescribeTapesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeTapesResponse>> {
        T::describe_tapes(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_upload_buffer(
        &self,
        req: crate::model::DescribeUploadBufferRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeUploadBufferResponse>> {
        T::describe_upload_buffer(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_vtl_devices(
        &self,
        req: crate::model::DescribeVtlDevicesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeVtlDevicesResponse>> {
        T::describe_vtl_devices(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_working_storage(
        &self,
        req: crate::model::DescribeWorkingStorageRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeWorkingStorageResponse>> {
        T::describe_working_storage(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn detach_volume(
        &self,
        req: crate::model::DetachVolumeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DetachVolumeResponse>> {
        T::detach_volume(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn disable_gateway(
        &self,
        req: crate::model::DisableGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DisableGatewayResponse>> {
        T::disable_gateway(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn join_domain(
        &self,
        req: crate::model::JoinDomainRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::JoinDomainResponse>> {
        T::join_domain(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_automatic_tape_creation_policies(
        &self,
        req: crate::model::ListAutomaticTapeCreationPoliciesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListAutomaticTapeCreationPoliciesResponse>> {
        T::list_automatic_tape_creation_policies(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_file_shares(
        &self,
        req: crate::model::ListFileSharesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListFileSharesResponse>> {
        T::list_file_shares(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_gateways(
        &self,
        req: crate::model::ListGatewaysRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListGatewaysResponse>> {
        T::list_gateways(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_local_disks(
        &self,
        req: crate::model::ListLocalDisksRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListLocalDisksResponse>> {
        T::list_local_disks(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_tags_for_resource(
        &self,
        req: crate::model::ListTagsForResourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListTagsForResourceResponse>> {
        T::list_tags_for_resource(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_tapes(
        &self,
        req: crate::model::ListTapesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListTapesResponse>> {
        T::list_tapes(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_volume_initiators(
        &self,
        req: crate::model::ListVolumeInitiatorsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListVolumeInitiatorsResponse>> {
        T::list_volume_initiators(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_volume_recovery_points(
        &self,
        req: crate::model::ListVolumeRecoveryPointsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListVolumeRecoveryPointsResponse>> {
        T::list_volume_recovery_points(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_volumes(
        &self,
        req: crate::model::ListVolumesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListVolumesResponse>> {
        T::list_volumes(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn notify_when_uploaded(
        &self,
        req: crate::model::NotifyWhenUploadedRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::NotifyWhenUploadedResponse>> {
        T::notify_when_uploaded(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn refresh_cache(
        &self,
        req: crate::model::RefreshCacheRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RefreshCacheResponse>> {
        T::refresh_cache(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn remove_tags_from_resource(
        &self,
        req: crate::model::RemoveTagsFromResourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RemoveTagsFromResourceResponse>> {
        T::remove_tags_from_resource(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn reset_cache(
        &self,
        req: crate::model::ResetCacheRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ResetCacheResponse>> {
        T::reset_cache(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn retrieve_tape_archive(
        &self,
        req: crate::model::RetrieveTapeArchiveRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RetrieveTapeArchiveResponse>> {
        T::retrieve_tape_archive(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn retrieve_tape_recovery_point(
        &self,
        req: crate::model::RetrieveTapeRecoveryPointRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RetrieveTapeRecoveryPointResponse>> {
        T::retrieve_tape_recovery_point(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn set_local_console_password(
        &self,
        req: crate::model::SetLocalConsolePasswordRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SetLocalConsolePasswordResponse>> {
        T::set_local_console_password(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn set_smb_guest_password(
        &self,
        req: crate::model::SetSmbGuestPasswordRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SetSmbGuestPasswordResponse>> {
        T::set_smb_guest_password(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn shutdown_gateway(
        &self,
        req: crate::model::ShutdownGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ShutdownGatewayResponse>> {
        T::shutdown_gateway(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn start_availability_monitor_test(
        &self,
        req: crate::model::StartAvailabilityMonitorTestRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::StartAvailabilityMonitorTestResponse>> {
        T::start_availability_monitor_test(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn start_gateway(
        &self,
        req: crate::model::StartGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::StartGatewayResponse>> {
        T::start_gateway(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_automatic_tape_creation_policy(
        &self,
        req: crate::model::UpdateAutomaticTapeCreationPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateAutomaticTapeCreationPolicyResponse>> {
        T::update_automatic_tape_creation_policy(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_bandwidth_rate_limit(
        &self,
        req: crate::model::UpdateBandwidthRateLimitRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateBandwidthRateLimitResponse>> {
        T::update_bandwidth_rate_limit(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_chap_credentials(
        &self,
        req: crate::model::UpdateChapCredentialsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateChapCredentialsResponse>> {
        T::update_chap_credentials(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_gateway_information(
        &self,
        req: crate::model::UpdateGatewayInformationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateGatewayInformationResponse>> {
        T::update_gateway_information(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_gateway_software_now(
        &self,
        req: crate::model::UpdateGatewaySoftwareNowRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateGatewaySoftwareNowResponse>> {
        T::update_gateway_software_now(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_maintenance_start_time(
        &self,
        req: crate::model::UpdateMaintenanceStartTimeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateMaintenanceStartTimeResponse>> {
        T::update_maintenance_start_time(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_nfs_file_share(
        &self,
        req: crate::model::UpdateNfsFileShareRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateNfsFileShareResponse>> {
        T::update_nfs_file_share(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_smb_file_share(
        &self,
        req: crate::model::UpdateSmbFileShareRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateSmbFileShareResponse>> {
        T::update_smb_file_share(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_smb_security_strategy(
        &self,
        req: crate::model::UpdateSmbSecurityStrategyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateSmbSecurityStrategyResponse>> {
        T::update_smb_security_strategy(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_snapshot_schedule(
        &self,
        req: crate::model::UpdateSnapshotScheduleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateSnapshotScheduleResponse>> {
        T::update_snapshot_schedule(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_vtl_device_type(
        &self,
        req: crate::model::UpdateVtlDeviceTypeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateVtlDeviceTypeResponse>> {
        T::update_vtl_device_type(self, req, options).await
    }
}
