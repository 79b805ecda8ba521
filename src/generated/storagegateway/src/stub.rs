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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.
//!
//! The same traits are the seam where applications plug in the transport that
//! signs, serializes, and sends each request to the service.

#![allow(rustdoc::broken_intra_doc_links)]

pub(crate) mod dynamic;

/// Defines the trait used to implement [super::client::StorageGateway].
///
/// Application developers may need to implement this trait to mock
/// `client::StorageGateway`. In other use-cases, application developers only
/// use `client::StorageGateway` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait StorageGateway: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::StorageGateway::activate_gateway].
    fn activate_gateway(
        &self,
        _req: crate::model::ActivateGatewayRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ActivateGatewayResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::add_cache].
    fn add_cache(
        &self,
        _req: crate::model::AddCacheRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::AddCacheResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::add_tags_to_resource].
    fn add_tags_to_resource(
        &self,
        _req: crate::model::AddTagsToResourceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::AddTagsToResourceResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::add_upload_buffer].
    fn add_upload_buffer(
        &self,
        _req: crate::model::AddUploadBufferRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::AddUploadBufferResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::add_working_storage].
    fn add_working_storage(
        &self,
        _req: crate::model::AddWorkingStorageRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::AddWorkingStorageResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::assign_tape_pool].
    fn assign_tape_pool(
        &self,
        _req: crate::model::AssignTapePoolRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::AssignTapePoolResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::attach_volume].
    fn attach_volume(
        &self,
        _req: crate::model::AttachVolumeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::AttachVolumeResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::cancel_archival].
    fn cancel_archival(
        &self,
        _req: crate::model::CancelArchivalRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::CancelArchivalResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::cancel_retrieval].
    fn cancel_retrieval(
        &self,
        _req: crate::model::CancelRetrievalRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::CancelRetrievalResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::create_cached_iscsi_volume].
    fn create_cached_iscsi_volume(
        &self,
        _req: crate::model::CreateCachediScsiVolumeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::CreateCachediScsiVolumeResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::create_nfs_file_share].
    fn create_nfs_file_share(
        &self,
        _req: crate::model::CreateNfsFileShareRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::CreateNfsFileShareResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::create_smb_file_share].
    fn create_smb_file_share(
        &self,
        _req: crate::model::CreateSmbFileShareRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::CreateSmbFileShareResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::create_snapshot].
    fn create_snapshot(
        &self,
        _req: crate::model::CreateSnapshotRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::CreateSnapshotResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::create_snapshot_from_volume_recovery_point].
    fn create_snapshot_from_volume_recovery_point(
        &self,
        _req: crate::model::CreateSnapshotFromVolumeRecoveryPointRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::CreateSnapshotFromVolumeRecoveryPointResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::create_stored_iscsi_volume].
    fn create_stored_iscsi_volume(
        &self,
        _req: crate::model::CreateStorediScsiVolumeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::CreateStorediScsiVolumeResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::create_tape_with_barcode].
    fn create_tape_with_barcode(
        &self,
        _req: crate::model::CreateTapeWithBarcodeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::CreateTapeWithBarcodeResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::create_tapes].
    fn create_tapes(
        &self,
        _req: crate::model::CreateTapesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::CreateTapesResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::delete_automatic_tape_creation_policy].
    fn delete_automatic_tape_creation_policy(
        &self,
        _req: crate::model::DeleteAutomaticTapeCreationPolicyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DeleteAutomaticTapeCreationPolicyResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::delete_bandwidth_rate_limit].
    fn delete_bandwidth_rate_limit(
        &self,
        _req: crate::model::DeleteBandwidthRateLimitRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DeleteBandwidthRateLimitResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::delete_chap_credentials].
    fn delete_chap_credentials(
        &self,
        _req: crate::model::DeleteChapCredentialsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DeleteChapCredentialsResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::delete_file_share].
    fn delete_file_share(
        &self,
        _req: crate::model::DeleteFileShareRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DeleteFileShareResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::delete_gateway].
    fn delete_gateway(
        &self,
        _req: crate::model::DeleteGatewayRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DeleteGatewayResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::delete_snapshot_schedule].
    fn delete_snapshot_schedule(
        &self,
        _req: crate::model::DeleteSnapshotScheduleRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DeleteSnapshotScheduleResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::delete_tape].
    fn delete_tape(
        &self,
        _req: crate::model::DeleteTapeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DeleteTapeResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::delete_tape_archive].
    fn delete_tape_archive(
        &self,
        _req: crate::model::DeleteTapeArchiveRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DeleteTapeArchiveResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::delete_volume].
    fn delete_volume(
        &self,
        _req: crate::model::DeleteVolumeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DeleteVolumeResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::describe_availability_monitor_test].
    fn describe_availability_monitor_test(
        &self,
        _req: crate::model::DescribeAvailabilityMonitorTestRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DescribeAvailabilityMonitorTestResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::describe_bandwidth_rate_limit].
    fn describe_bandwidth_rate_limit(
        &self,
        _req: crate::model::DescribeBandwidthRateLimitRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DescribeBandwidthRateLimitResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::describe_cache].
    fn describe_cache(
        &self,
        _req: crate::model::DescribeCacheRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DescribeCacheResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::describe_cached_iscsi_volumes].
    fn describe_cached_iscsi_volumes(
        &self,
        _req: crate::model::DescribeCachediScsiVolumesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DescribeCachediScsiVolumesResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::describe_chap_credentials].
    fn describe_chap_credentials(
        &self,
        _req: crate::model::DescribeChapCredentialsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DescribeChapCredentialsResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::describe_gateway_information].
    fn describe_gateway_information(
        &self,
        _req: crate::model::DescribeGatewayInformationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DescribeGatewayInformationResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::describe_maintenance_start_time].
    fn describe_maintenance_start_time(
        &self,
        _req: crate::model::DescribeMaintenanceStartTimeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DescribeMaintenanceStartTimeResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::describe_nfs_file_shares].
    fn describe_nfs_file_shares(
        &self,
        _req: crate::model::DescribeNfsFileSharesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DescribeNfsFileSharesResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::describe_smb_file_shares].
    fn describe_smb_file_shares(
        &self,
        _req: crate::model::DescribeSmbFileSharesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DescribeSmbFileSharesResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::describe_smb_settings].
    fn describe_smb_settings(
        &self,
        _req: crate::model::DescribeSmbSettingsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DescribeSmbSettingsResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::describe_snapshot_schedule].
    fn describe_snapshot_schedule(
        &self,
        _req: crate::model::DescribeSnapshotScheduleRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DescribeSnapshotScheduleResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::describe_stored_iscsi_volumes].
    fn describe_stored_iscsi_volumes(
        &self,
        _req: crate::model::DescribeStorediScsiVolumesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DescribeStorediScsiVolumesResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::describe_tape_archives].
    fn describe_tape_archives(
        &self,
        _req: crate::model::DescribeTapeArchivesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DescribeTapeArchivesResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::describe_tape_recovery_points].
    fn describe_tape_recovery_points(
        &self,
        _req: crate::model::DescribeTapeRecoveryPointsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DescribeTapeRecoveryPointsResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::describe_tapes].
    fn describe_tapes(
        &self,
        _req: crate::model::DescribeTapesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DescribeTapesResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::describe_upload_buffer].
    fn describe_upload_buffer(
        &self,
        _req: crate::model::DescribeUploadBufferRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DescribeUploadBufferResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::describe_vtl_devices].
    fn describe_vtl_devices(
        &self,
        _req: crate::model::DescribeVtlDevicesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DescribeVtlDevicesResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::describe_working_storage].
    fn describe_working_storage(
        &self,
        _req: crate::model::DescribeWorkingStorageRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DescribeWorkingStorageResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::detach_volume].
    fn detach_volume(
        &self,
        _req: crate::model::DetachVolumeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DetachVolumeResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::disable_gateway].
    fn disable_gateway(
        &self,
        _req: crate::model::DisableGatewayRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DisableGatewayResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::join_domain].
    fn join_domain(
        &self,
        _req: crate::model::JoinDomainRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::JoinDomainResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::list_automatic_tape_creation_policies].
    fn list_automatic_tape_creation_policies(
        &self,
        _req: crate::model::ListAutomaticTapeCreationPoliciesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ListAutomaticTapeCreationPoliciesResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::list_file_shares].
    fn list_file_shares(
        &self,
        _req: crate::model::ListFileSharesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ListFileSharesResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::list_gateways].
    fn list_gateways(
        &self,
        _req: crate::model::ListGatewaysRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ListGatewaysResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::list_local_disks].
    fn list_local_disks(
        &self,
        _req: crate::model::ListLocalDisksRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ListLocalDisksResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::list_tags_for_resource].
    fn list_tags_for_resource(
        &self,
        _req: crate::model::ListTagsForResourceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ListTagsForResourceResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::list_tapes].
    fn list_tapes(
        &self,
        _req: crate::model::ListTapesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ListTapesResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::list_volume_initiators].
    fn list_volume_initiators(
        &self,
        _req: crate::model::ListVolumeInitiatorsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ListVolumeInitiatorsResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::list_volume_recovery_points].
    fn list_volume_recovery_points(
        &self,
        _req: crate::model::ListVolumeRecoveryPointsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ListVolumeRecoveryPointsResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::list_volumes].
    fn list_volumes(
        &self,
        _req: crate::model::ListVolumesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ListVolumesResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::notify_when_uploaded].
    fn notify_when_uploaded(
        &self,
        _req: crate::model::NotifyWhenUploadedRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::NotifyWhenUploadedResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::refresh_cache].
    fn refresh_cache(
        &self,
        _req: crate::model::RefreshCacheRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::RefreshCacheResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::remove_tags_from_resource].
    fn remove_tags_from_resource(
        &self,
        _req: crate::model::RemoveTagsFromResourceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::RemoveTagsFromResourceResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::reset_cache].
    fn reset_cache(
        &self,
        _req: crate::model::ResetCacheRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ResetCacheResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::retrieve_tape_archive].
    fn retrieve_tape_archive(
        &self,
        _req: crate::model::RetrieveTapeArchiveRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::RetrieveTapeArchiveResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::retrieve_tape_recovery_point].
    fn retrieve_tape_recovery_point(
        &self,
        _req: crate::model::RetrieveTapeRecoveryPointRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::RetrieveTapeRecoveryPointResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::set_local_console_password].
    fn set_local_console_password(
        &self,
        _req: crate::model::SetLocalConsolePasswordRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::SetLocalConsolePasswordResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::set_smb_guest_password].
    fn set_smb_guest_password(
        &self,
        _req: crate::model::SetSmbGuestPasswordRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::SetSmbGuestPasswordResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::shutdown_gateway].
    fn shutdown_gateway(
        &self,
        _req: crate::model::ShutdownGatewayRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ShutdownGatewayResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::start_availability_monitor_test].
    fn start_availability_monitor_test(
        &self,
        _req: crate::model::StartAvailabilityMonitorTestRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::StartAvailabilityMonitorTestResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::start_gateway].
    fn start_gateway(
        &self,
        _req: crate::model::StartGatewayRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::StartGatewayResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::update_automatic_tape_creation_policy].
    fn update_automatic_tape_creation_policy(
        &self,
        _req: crate::model::UpdateAutomaticTapeCreationPolicyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::UpdateAutomaticTapeCreationPolicyResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::update_bandwidth_rate_limit].
    fn update_bandwidth_rate_limit(
        &self,
        _req: crate::model::UpdateBandwidthRateLimitRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::UpdateBandwidthRateLimitResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::update_chap_credentials].
    fn update_chap_credentials(
        &self,
        _req: crate::model::UpdateChapCredentialsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::UpdateChapCredentialsResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::update_gateway_information].
    fn update_gateway_information(
        &self,
        _req: crate::model::UpdateGatewayInformationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::UpdateGatewayInformationResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::update_gateway_software_now].
    fn update_gateway_software_now(
        &self,
        _req: crate::model::UpdateGatewaySoftwareNowRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::UpdateGatewaySoftwareNowResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::update_maintenance_start_time].
    fn update_maintenance_start_time(
        &self,
        _req: crate::model::UpdateMaintenanceStartTimeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::UpdateMaintenanceStartTimeResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::update_nfs_file_share].
    fn update_nfs_file_share(
        &self,
        _req: crate::model::UpdateNfsFileShareRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::UpdateNfsFileShareResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::update_smb_file_share].
    fn update_smb_file_share(
        &self,
        _req: crate::model::UpdateSmbFileShareRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::UpdateSmbFileShareResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::update_smb_security_strategy].
    fn update_smb_security_strategy(
        &self,
        _req: crate::model::UpdateSmbSecurityStrategyRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::UpdateSmbSecurityStrategyResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::update_snapshot_schedule].
    fn update_snapshot_schedule(
        &self,
        _req: crate::model::UpdateSnapshotScheduleRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::UpdateSnapshotScheduleResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::StorageGateway::update_vtl_device_type].
    fn update_vtl_device_type(
        &self,
        _req: crate::model::UpdateVtlDeviceTypeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::UpdateVtlDeviceTypeResponse>>,
    > + Send {
        gax::unimplemented::unimplemented_stub()
    }
}
