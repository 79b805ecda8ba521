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

use crate::Result;

/// Implements a [StorageGateway](super::stub::StorageGateway) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct StorageGateway {
    inner: std::sync::Arc<dyn super::stub::dynamic::StorageGateway>,
}

impl StorageGateway {
    pub fn new(inner: std::sync::Arc<dyn super::stub::dynamic::StorageGateway>) -> Self {
        Self { inner }
    }
}

impl super::stub::StorageGateway for StorageGateway {
    #[tracing::instrument(ret)]
    async fn activate_gateway(
        &self,
        req: crate::model::ActivateGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ActivateGatewayResponse>> {
        self.inner.activate_gateway(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn add_cache(
        &self,
        req: crate::model::AddCacheRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AddCacheResponse>> {
        self.inner.add_cache(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn add_tags_to_resource(
        &self,
        req: crate::model::AddTagsToResourceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AddTagsToResourceResponse>> {
        self.inner.add_tags_to_resource(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn add_upload_buffer(
        &self,
        req: crate::model::AddUploadBufferRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AddUploadBufferResponse>> {
        self.inner.add_upload_buffer(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn add_working_storage(
        &self,
        req: crate::model::AddWorkingStorageRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AddWorkingStorageResponse>> {
        self.inner.add_working_storage(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn assign_tape_pool(
        &self,
        req: crate::model::AssignTapePoolRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AssignTapePoolResponse>> {
        self.inner.assign_tape_pool(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn attach_volume(
        &self,
        req: crate::model::AttachVolumeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AttachVolumeResponse>> {
        self.inner.attach_volume(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn cancel_archival(
        &self,
        req: crate::model::CancelArchivalRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CancelArchivalResponse>> {
        self.inner.cancel_archival(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn cancel_retrieval(
        &self,
        req: crate::model::CancelRetrievalRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CancelRetrievalResponse>> {
        self.inner.cancel_retrieval(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_cached_iscsi_volume(
        &self,
        req: crate::model::CreateCachediScsiVolumeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CreateCachediScsiVolumeResponse>> {
        self.inner.create_cached_iscsi_volume(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_nfs_file_share(
        &self,
        req: crate::model::CreateNfsFileShareRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CreateNfsFileShareResponse>> {
        self.inner.create_nfs_file_share(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_smb_file_share(
        &self,
        req: crate::model::CreateSmbFileShareRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CreateSmbFileShareResponse>> {
        self.inner.create_smb_file_share(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_snapshot(
        &self,
        req: crate::model::CreateSnapshotRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CreateSnapshotResponse>> {
        self.inner.create_snapshot(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_snapshot_from_volume_recovery_point(
        &self,
        req: crate::model::CreateSnapshotFromVolumeRecoveryPointRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CreateSnapshotFromVolumeRecoveryPointResponse>> {
        self.inner.create_snapshot_from_volume_recovery_point(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_stored_iscsi_volume(
        &self,
        req: crate::model::CreateStorediScsiVolumeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CreateStorediScsiVolumeResponse>> {
        self.inner.create_stored_iscsi_volume(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_tape_with_barcode(
        &self,
        req: crate::model::CreateTapeWithBarcodeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CreateTapeWithBarcodeResponse>> {
        self.inner.create_tape_with_barcode(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_tapes(
        &self,
        req: crate::model::CreateTapesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CreateTapesResponse>> {
        self.inner.create_tapes(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_automatic_tape_creation_policy(
        &self,
        req: crate::model::DeleteAutomaticTapeCreationPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeleteAutomaticTapeCreationPolicyResponse>> {
        self.inner.delete_automatic_tape_creation_policy(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_bandwidth_rate_limit(
        &self,
        req: crate::model::DeleteBandwidthRateLimitRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeleteBandwidthRateLimitResponse>> {
        self.inner.delete_bandwidth_rate_limit(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_chap_credentials(
        &self,
        req: crate::model::DeleteChapCredentialsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeleteChapCredentialsResponse>> {
        self.inner.delete_chap_credentials(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_file_share(
        &self,
        req: crate::model::DeleteFileShareRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeleteFileShareResponse>> {
        self.inner.delete_file_share(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_gateway(
        &self,
        req: crate::model::DeleteGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeleteGatewayResponse>> {
        self.inner.delete_gateway(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_snapshot_schedule(
        &self,
        req: crate::model::DeleteSnapshotScheduleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeleteSnapshotScheduleResponse>> {
        self.inner.delete_snapshot_schedule(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_tape(
        &self,
        req: crate::model::DeleteTapeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeleteTapeResponse>> {
        self.inner.delete_tape(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_tape_archive(
        &self,
        req: crate::model::DeleteTapeArchiveRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeleteTapeArchiveResponse>> {
        self.inner.delete_tape_archive(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_volume(
        &self,
        req: crate::model::DeleteVolumeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeleteVolumeResponse>> {
        self.inner.delete_volume(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn describe_availability_monitor_test(
        &self,
        req: crate::model::DescribeAvailabilityMonitorTestRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DescribeAvailabilityMonitorTestResponse>> {
        self.inner.describe_availability_monitor_test(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn describe_bandwidth_rate_limit(
        &self,
        req: crate::model::DescribeBandwidthRateLimitRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DescribeBandwidthRateLimitResponse>> {
        self.inner.describe_bandwidth_rate_limit(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn describe_cache(
        &self,
        req: crate::model::DescribeCacheRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DescribeCacheResponse>> {
        self.inner.describe_cache(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn describe_cached_iscsi_volumes(
        &self,
        req: crate::model::DescribeCachediScsiVolumesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DescribeCachediScsiVolumesResponse>> {
        self.inner.describe_cached_iscsi_volumes(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn describe_chap_credentials(
        &self,
        req: crate::model::DescribeChapCredentialsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DescribeChapCredentialsResponse>> {
        self.inner.describe_chap_credentials(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn describe_gateway_information(
        &self,
        req: crate::model::DescribeGatewayInformationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DescribeGatewayInformationResponse>> {
        self.inner.describe_gateway_information(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn describe_maintenance_start_time(
        &self,
        req: crate::model::DescribeMaintenanceStartTimeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DescribeMaintenanceStartTimeResponse>> {
        self.inner.describe_maintenance_start_time(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn describe_nfs_file_shares(
        &self,
        req: crate::model::DescribeNfsFileSharesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DescribeNfsFileSharesResponse>> {
        self.inner.describe_nfs_file_shares(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn describe_smb_file_shares(
        &self,
        req: crate::model::DescribeSmbFileSharesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DescribeSmbFileSharesResponse>> {
        self.inner.describe_smb_file_shares(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn describe_smb_settings(
        &self,
        req: crate::model::DescribeSmbSettingsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DescribeSmbSettingsResponse>> {
        self.inner.describe_smb_settings(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn describe_snapshot_schedule(
        &self,
        req: crate::model::DescribeSnapshotScheduleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DescribeSnapshotScheduleResponse>> {
        self.inner.describe_snapshot_schedule(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn describe_stored_iscsi_volumes(
        &self,
        req: crate::model::DescribeStorediScsiVolumesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DescribeStorediScsiVolumesResponse>> {
        self.inner.describe_stored_iscsi_volumes(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn describe_tape_archives(
        &self,
        req: crate::model::DescribeTapeArchivesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DescribeTapeArchivesResponse>> {
        self.inner.describe_tape_archives(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn describe_tape_recovery_points(
        &self,
        req: crate::model::DescribeTapeRecoveryPointsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DescribeTapeRecoveryPointsResponse>> {
        self.inner.describe_tape_recovery_points(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn describe_tapes(
        &self,
        req: crate::model::DescribeTapesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DescribeTapesResponse>> {
        self.inner.describe_tapes(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn describe_upload_buffer(
        &self,
        req: crate::model::DescribeUploadBufferRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DescribeUploadBufferResponse>> {
        self.inner.describe_upload_buffer(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn describe_vtl_devices(
        &self,
        req: crate::model::DescribeVtlDevicesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DescribeVtlDevicesResponse>> {
        self.inner.describe_vtl_devices(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn describe_working_storage(
        &self,
        req: crate::model::DescribeWorkingStorageRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DescribeWorkingStorageResponse>> {
        self.inner.describe_working_storage(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn detach_volume(
        &self,
        req: crate::model::DetachVolumeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DetachVolumeResponse>> {
        self.inner.detach_volume(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn disable_gateway(
        &self,
        req: crate::model::DisableGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DisableGatewayResponse>> {
        self.inner.disable_gateway(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn join_domain(
        &self,
        req: crate::model::JoinDomainRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::JoinDomainResponse>> {
        self.inner.join_domain(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_automatic_tape_creation_policies(
        &self,
        req: crate::model::ListAutomaticTapeCreationPoliciesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListAutomaticTapeCreationPoliciesResponse>> {
        self.inner.list_automatic_tape_creation_policies(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_file_shares(
        &self,
        req: crate::model::ListFileSharesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListFileSharesResponse>> {
        self.inner.list_file_shares(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_gateways(
        &self,
        req: crate::model::ListGatewaysRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListGatewaysResponse>> {
        self.inner.list_gateways(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_local_disks(
        &self,
        req: crate::model::ListLocalDisksRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListLocalDisksResponse>> {
        self.inner.list_local_disks(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_tags_for_resource(
        &self,
        req: crate::model::ListTagsForResourceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListTagsForResourceResponse>> {
        self.inner.list_tags_for_resource(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_tapes(
        &self,
        req: crate::model::ListTapesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListTapesResponse>> {
        self.inner.list_tapes(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_volume_initiators(
        &self,
        req: crate::model::ListVolumeInitiatorsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListVolumeInitiatorsResponse>> {
        self.inner.list_volume_initiators(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_volume_recovery_points(
        &self,
        req: crate::model::ListVolumeRecoveryPointsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListVolumeRecoveryPointsResponse>> {
        self.inner.list_volume_recovery_points(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_volumes(
        &self,
        req: crate::model::ListVolumesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListVolumesResponse>> {
        self.inner.list_volumes(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn notify_when_uploaded(
        &self,
        req: crate::model::NotifyWhenUploadedRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::NotifyWhenUploadedResponse>> {
        self.inner.notify_when_uploaded(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn refresh_cache(
        &self,
        req: crate::model::RefreshCacheRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RefreshCacheResponse>> {
        self.inner.refresh_cache(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn remove_tags_from_resource(
        &self,
        req: crate::model::RemoveTagsFromResourceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RemoveTagsFromResourceResponse>> {
        self.inner.remove_tags_from_resource(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn reset_cache(
        &self,
        req: crate::model::ResetCacheRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ResetCacheResponse>> {
        self.inner.reset_cache(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn retrieve_tape_archive(
        &self,
        req: crate::model::RetrieveTapeArchiveRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RetrieveTapeArchiveResponse>> {
        self.inner.retrieve_tape_archive(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn retrieve_tape_recovery_point(
        &self,
        req: crate::model::RetrieveTapeRecoveryPointRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RetrieveTapeRecoveryPointResponse>> {
        self.inner.retrieve_tape_recovery_point(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn set_local_console_password(
        &self,
        req: crate::model::SetLocalConsolePasswordRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SetLocalConsolePasswordResponse>> {
        self.inner.set_local_console_password(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn set_smb_guest_password(
        &self,
        req: crate::model::SetSmbGuestPasswordRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SetSmbGuestPasswordResponse>> {
        self.inner.set_smb_guest_password(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn shutdown_gateway(
        &self,
        req: crate::model::ShutdownGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ShutdownGatewayResponse>> {
        self.inner.shutdown_gateway(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn start_availability_monitor_test(
        &self,
        req: crate::model::StartAvailabilityMonitorTestRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::StartAvailabilityMonitorTestResponse>> {
        self.inner.start_availability_monitor_test(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn start_gateway(
        &self,
        req: crate::model::StartGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::StartGatewayResponse>> {
        self.inner.start_gateway(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_automatic_tape_creation_policy(
        &self,
        req: crate::model::UpdateAutomaticTapeCreationPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UpdateAutomaticTapeCreationPolicyResponse>> {
        self.inner.update_automatic_tape_creation_policy(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_bandwidth_rate_limit(
        &self,
        req: crate::model::UpdateBandwidthRateLimitRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UpdateBandwidthRateLimitResponse>> {
        self.inner.update_bandwidth_rate_limit(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_chap_credentials(
        &self,
        req: crate::model::UpdateChapCredentialsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UpdateChapCredentialsResponse>> {
        self.inner.update_chap_credentials(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_gateway_information(
        &self,
        req: crate::model::UpdateGatewayInformationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UpdateGatewayInformationResponse>> {
        self.inner.update_gateway_information(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_gateway_software_now(
        &self,
        req: crate::model::UpdateGatewaySoftwareNowRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UpdateGatewaySoftwareNowResponse>> {
        self.inner.update_gateway_software_now(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_maintenance_start_time(
        &self,
        req: crate::model::UpdateMaintenanceStartTimeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UpdateMaintenanceStartTimeResponse>> {
        self.inner.update_maintenance_start_time(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_nfs_file_share(
        &self,
        req: crate::model::UpdateNfsFileShareRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UpdateNfsFileShareResponse>> {
        self.inner.update_nfs_file_share(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_smb_file_share(
        &self,
        req: crate::model::UpdateSmbFileShareRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UpdateSmbFileShareResponse>> {
        self.inner.update_smb_file_share(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_smb_security_strategy(
        &self,
        req: crate::model::UpdateSmbSecurityStrategyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UpdateSmbSecurityStrategyResponse>> {
        self.inner.update_smb_security_strategy(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_snapshot_schedule(
        &self,
        req: crate::model::UpdateSnapshotScheduleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UpdateSnapshotScheduleResponse>> {
        self.inner.update_snapshot_schedule(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_vtl_device_type(
        &self,
        req: crate::model::UpdateVtlDeviceTypeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UpdateVtlDeviceTypeResponse>> {
        self.inner.update_vtl_device_type(req, options).await
    }
}
