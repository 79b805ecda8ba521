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

/// Implements a client for the Storage Gateway API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use storagegateway::client::StorageGateway;
/// # use storagegateway::stub;
/// # #[derive(Debug)]
/// # struct MyTransport;
/// # impl stub::StorageGateway for MyTransport {}
/// let client = StorageGateway::builder()
///     .with_transport(MyTransport)
///     .build()
///     .await?;
/// let mut gateways = client.list_gateways().by_item();
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// AWS Storage Gateway connects an on-premises software appliance with
/// cloud-based storage to provide seamless and secure integration between an
/// organization's on-premises IT environment and the cloud storage
/// infrastructure. The service enables you to securely upload data to the cloud
/// for cost effective backup and rapid disaster recovery.
///
/// # Configuration
///
/// To configure `StorageGateway` use the `with_*` methods in the type returned
/// by [builder()][StorageGateway::builder]. The transport is mandatory: it
/// signs, serializes and sends each request, and decodes the responses. Any
/// type implementing [stub::StorageGateway][crate::stub::StorageGateway] can be
/// used as a transport.
///
/// # Pooling and Cloning
///
/// `StorageGateway` holds the transport in an [Arc](std::sync::Arc), so
/// cloning the client is cheap and clones share the transport. Create one
/// client and reuse it across the application.
#[derive(Clone, Debug)]
pub struct StorageGateway {
    inner: std::sync::Arc<dyn super::stub::dynamic::StorageGateway>,
}

impl StorageGateway {
    /// Returns a builder for [StorageGateway].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use storagegateway::client::StorageGateway;
    /// # #[derive(Debug)]
    /// # struct MyTransport;
    /// # impl storagegateway::stub::StorageGateway for MyTransport {}
    /// let client = StorageGateway::builder()
    ///     .with_transport(MyTransport)
    ///     .with_tracing()
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::storage_gateway::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::storage_gateway::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::StorageGateway + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gax::client_builder::internal::ClientConfig<
            super::builder::storage_gateway::Transport,
        >,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gax::client_builder::internal::ClientConfig<
            super::builder::storage_gateway::Transport,
        >,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::StorageGateway>> {
        let tracing = gax::client_builder::internal::tracing_enabled(&conf);
        let transport = conf.transport.ok_or_else(|| {
            gax::client_builder::Error::transport("a transport is required to build the client")
        })?;
        if tracing {
            tracing::debug!("StorageGateway client created with tracing enabled");
            return Ok(std::sync::Arc::new(super::tracing::StorageGateway::new(
                transport.0,
            )));
        }
        tracing::debug!("StorageGateway client created");
        Ok(transport.0)
    }

    /// Activates the gateway you previously deployed on your host. In the
    /// activation process, you specify information such as the AWS Region that you
    /// want to use for storing snapshots or tapes, the time zone for scheduled
    /// snapshots the gateway snapshot schedule window, an activation key, and a
    /// name for your gateway. The activation process also associates your gateway
    /// with your account; for more information, see UpdateGatewayInformation.
    ///
    /// You must turn on the gateway VM before you can activate your gateway.
    pub fn activate_gateway(&self) -> super::builder::storage_gateway::ActivateGateway {
        super::builder::storage_gateway::ActivateGateway::new(self.inner.clone())
    }

    /// Configures one or more gateway local disks as cache for a gateway. This
    /// operation is only supported in the cached volume, tape and file gateway type
    /// (see Storage Gateway Concepts).
    ///
    /// In the request, you specify the gateway Amazon Resource Name (ARN) to which
    /// you want to add cache, and one or more disk IDs that you want to configure
    /// as cache.
    pub fn add_cache(&self) -> super::builder::storage_gateway::AddCache {
        super::builder::storage_gateway::AddCache::new(self.inner.clone())
    }

    /// Adds one or more tags to the specified resource. You use tags to add
    /// metadata to resources, which you can use to categorize these resources. For
    /// example, you can categorize resources by purpose, owner, environment, or
    /// team. Each tag consists of a key and a value, which you define.
    pub fn add_tags_to_resource(&self) -> super::builder::storage_gateway::AddTagsToResource {
        super::builder::storage_gateway::AddTagsToResource::new(self.inner.clone())
    }

    /// Configures one or more gateway local disks as upload buffer for a specified
    /// gateway. This operation is supported for the stored volume, cached volume
    /// and tape gateway types.
    ///
    /// In the request, you specify the gateway Amazon Resource Name (ARN) to which
    /// you want to add upload buffer, and one or more disk IDs that you want to
    /// configure as upload buffer.
    pub fn add_upload_buffer(&self) -> super::builder::storage_gateway::AddUploadBuffer {
        super::builder::storage_gateway::AddUploadBuffer::new(self.inner.clone())
    }

    /// Configures one or more gateway local disks as working storage for a gateway.
    /// This operation is only supported in the stored volume gateway type. This
    /// operation is deprecated in cached volume API version 20120630. Use
    /// AddUploadBuffer instead.
    ///
    /// Working storage is also referred to as upload buffer. You can also use the
    /// AddUploadBuffer operation to add upload buffer to a stored volume gateway.
    pub fn add_working_storage(&self) -> super::builder::storage_gateway::AddWorkingStorage {
        super::builder::storage_gateway::AddWorkingStorage::new(self.inner.clone())
    }

    /// Assigns a tape to a tape pool for archiving. The tape assigned to a pool is
    /// archived in the S3 storage class that is associated with the pool. When you
    /// use your backup application to eject the tape, the tape is archived directly
    /// into the S3 storage class (S3 Glacier or S3 Glacier Deep Archive) that
    /// corresponds to the pool.
    pub fn assign_tape_pool(&self) -> super::builder::storage_gateway::AssignTapePool {
        super::builder::storage_gateway::AssignTapePool::new(self.inner.clone())
    }

    /// Connects a volume to an iSCSI connection and then attaches the volume to the
    /// specified gateway. Detaching and attaching a volume enables you to recover
    /// your data from one gateway to a different gateway without creating a
    /// snapshot. It also makes it easier to move your volumes from an on-premises
    /// gateway to a gateway hosted on an Amazon EC2 instance.
    pub fn attach_volume(&self) -> super::builder::storage_gateway::AttachVolume {
        super::builder::storage_gateway::AttachVolume::new(self.inner.clone())
    }

    /// Cancels archiving of a virtual tape to the virtual tape shelf (VTS) after
    /// the archiving process is initiated. This operation is only supported in the
    /// tape gateway type.
    pub fn cancel_archival(&self) -> super::builder::storage_gateway::CancelArchival {
        super::builder::storage_gateway::CancelArchival::new(self.inner.clone())
    }

    /// Cancels retrieval of a virtual tape from the virtual tape shelf (VTS) to a
    /// gateway after the retrieval process is initiated. The virtual tape is
    /// returned to the VTS. This operation is only supported in the tape gateway
    /// type.
    pub fn cancel_retrieval(&self) -> super::builder::storage_gateway::CancelRetrieval {
        super::builder::storage_gateway::CancelRetrieval::new(self.inner.clone())
    }

    /// Creates a cached volume on a specified cached volume gateway. This operation
    /// is only supported in the cached volume gateway type.
    pub fn create_cached_iscsi_volume(&self) -> super::builder::storage_gateway::CreateCachediScsiVolume {
        super::builder::storage_gateway::CreateCachediScsiVolume::new(self.inner.clone())
    }

    /// Creates a Network File System (NFS) file share on an existing file gateway.
    /// In Storage Gateway, a file share is a file system mount point backed by
    /// Amazon S3 cloud storage. Storage Gateway exposes file shares using an NFS
    /// interface. This operation is only supported for file gateways.
    pub fn create_nfs_file_share(&self) -> super::builder::storage_gateway::CreateNfsFileShare {
        super::builder::storage_gateway::CreateNfsFileShare::new(self.inner.clone())
    }

    /// Creates a Server Message Block (SMB) file share on an existing file gateway.
    /// In Storage Gateway, a file share is a file system mount point backed by
    /// Amazon S3 cloud storage. Storage Gateway expose file shares using an SMB
    /// interface. This operation is only supported for file gateways.
    pub fn create_smb_file_share(&self) -> super::builder::storage_gateway::CreateSmbFileShare {
        super::builder::storage_gateway::CreateSmbFileShare::new(self.inner.clone())
    }

    /// Initiates a snapshot of a volume.
    ///
    /// AWS Storage Gateway provides the ability to back up point-in-time snapshots
    /// of your data to Amazon Simple Storage Service (Amazon S3) for durable
    /// off-site recovery, as well as import the data to an Amazon Elastic Block
    /// Store (EBS) volume in Amazon Elastic Compute Cloud (EC2). You can take
    /// snapshots of your gateway volume on a scheduled or ad hoc basis. This API
    /// enables you to take an ad hoc snapshot. For more information, see Editing a
    /// Snapshot Schedule.
    pub fn create_snapshot(&self) -> super::builder::storage_gateway::CreateSnapshot {
        super::builder::storage_gateway::CreateSnapshot::new(self.inner.clone())
    }

    /// Initiates a snapshot of a gateway from a volume recovery point. This
    /// operation is only supported in the cached volume gateway type.
    pub fn create_snapshot_from_volume_recovery_point(&self) -> super::builder::storage_gateway::CreateSnapshotFromVolumeRecoveryPoint {
        super::builder::storage_gateway::CreateSnapshotFromVolumeRecoveryPoint::new(self.inner.clone())
    }

    /// Creates a volume on a specified gateway. This operation is only supported in
    /// the stored volume gateway type.
    pub fn create_stored_iscsi_volume(&self) -> super::builder::storage_gateway::CreateStorediScsiVolume {
        super::builder::storage_gateway::CreateStorediScsiVolume::new(self.inner.clone())
    }

    /// Creates a virtual tape by using your own barcode. You write data to the
    /// virtual tape and then archive the tape. A barcode is unique and can not be
    /// reused if it has already been used on a tape. This operation is only
    /// supported in the tape gateway type.
    pub fn create_tape_with_barcode(&self) -> super::builder::storage_gateway::CreateTapeWithBarcode {
        super::builder::storage_gateway::CreateTapeWithBarcode::new(self.inner.clone())
    }

    /// Creates one or more virtual tapes. You write data to the virtual tapes and
    /// then archive the tapes. This operation is only supported in the tape gateway
    /// type.
    ///
    /// Cache storage must be allocated to the gateway before you can create virtual
    /// tapes. Use the AddCache operation to add cache storage to a gateway.
    pub fn create_tapes(&self) -> super::builder::storage_gateway::CreateTapes {
        super::builder::storage_gateway::CreateTapes::new(self.inner.clone())
    }

    /// Deletes the automatic tape creation policy of a gateway. If you delete this
    /// policy, new virtual tapes must be created manually.
    pub fn delete_automatic_tape_creation_policy(&self) -> super::builder::storage_gateway::DeleteAutomaticTapeCreationPolicy {
        super::builder::storage_gateway::DeleteAutomaticTapeCreationPolicy::new(self.inner.clone())
    }

    /// Deletes the bandwidth rate limits of a gateway. You can delete either the
    /// upload and download bandwidth rate limit, or you can delete both. If you
    /// delete only one of the limits, the other limit remains unchanged.
    pub fn delete_bandwidth_rate_limit(&self) -> super::builder::storage_gateway::DeleteBandwidthRateLimit {
        super::builder::storage_gateway::DeleteBandwidthRateLimit::new(self.inner.clone())
    }

    /// Deletes Challenge-Handshake Authentication Protocol (CHAP) credentials for a
    /// specified iSCSI target and initiator pair.
    pub fn delete_chap_credentials(&self) -> super::builder::storage_gateway::DeleteChapCredentials {
        super::builder::storage_gateway::DeleteChapCredentials::new(self.inner.clone())
    }

    /// Deletes a file share from a file gateway. This operation is only supported
    /// for file gateways.
    pub fn delete_file_share(&self) -> super::builder::storage_gateway::DeleteFileShare {
        super::builder::storage_gateway::DeleteFileShare::new(self.inner.clone())
    }

    /// Deletes a gateway. To specify which gateway to delete, use the Amazon
    /// Resource Name (ARN) of the gateway in your request. The operation deletes
    /// the gateway; however, it does not delete the gateway virtual machine (VM)
    /// from your host computer.
    ///
    /// After you delete a gateway, you cannot reactivate it. Completed snapshots of
    /// the gateway volumes are not deleted upon deleting the gateway, however,
    /// pending snapshots will not complete. After you delete a gateway, your next
    /// step is to remove it from your environment.
    pub fn delete_gateway(&self) -> super::builder::storage_gateway::DeleteGateway {
        super::builder::storage_gateway::DeleteGateway::new(self.inner.clone())
    }

    /// Deletes a snapshot of a volume. You can take snapshots of your gateway
    /// volumes on a scheduled or ad hoc basis. This API action enables you to
    /// delete a snapshot schedule for a volume.
    pub fn delete_snapshot_schedule(&self) -> super::builder::storage_gateway::DeleteSnapshotSchedule {
        super::builder::storage_gateway::DeleteSnapshotSchedule::new(self.inner.clone())
    }

    /// Deletes the specified virtual tape. This operation is only supported in the
    /// tape gateway type.
    pub fn delete_tape(&self) -> super::builder::storage_gateway::DeleteTape {
        super::builder::storage_gateway::DeleteTape::new(self.inner.clone())
    }

    /// Deletes the specified virtual tape from the virtual tape shelf (VTS). This
    /// operation is only supported in the tape gateway type.
    pub fn delete_tape_archive(&self) -> super::builder::storage_gateway::DeleteTapeArchive {
        super::builder::storage_gateway::DeleteTapeArchive::new(self.inner.clone())
    }

    /// Deletes the specified storage volume that you previously created using the
    /// CreateCachediSCSIVolume or CreateStorediSCSIVolume API. This operation is
    /// only supported in the cached volume and stored volume types. For stored
    /// volume gateways, the local disk that was configured as the storage volume is
    /// not deleted. You can reuse the local disk to create another storage volume.
    pub fn delete_volume(&self) -> super::builder::storage_gateway::DeleteVolume {
        super::builder::storage_gateway::DeleteVolume::new(self.inner.clone())
    }

    /// Returns information about the most recent high availability monitoring test
    /// that was performed on the host in a cluster. If a test isn't performed, the
    /// status and start time in the response would be null.
    pub fn describe_availability_monitor_test(&self) -> super::builder::storage_gateway::DescribeAvailabilityMonitorTest {
        super::builder::storage_gateway::DescribeAvailabilityMonitorTest::new(self.inner.clone())
    }

    /// Returns the bandwidth rate limits of a gateway. By default, these limits are
    /// not set, which means no bandwidth rate limiting is in effect.
    pub fn describe_bandwidth_rate_limit(&self) -> super::builder::storage_gateway::DescribeBandwidthRateLimit {
        super::builder::storage_gateway::DescribeBandwidthRateLimit::new(self.inner.clone())
    }

    /// Returns information about the cache of a gateway. This operation is only
    /// supported in the cached volume, tape, and file gateway types.
    ///
    /// The response includes disk IDs that are configured as cache, and it includes
    /// the amount of cache allocated and used.
    pub fn describe_cache(&self) -> super::builder::storage_gateway::DescribeCache {
        super::builder::storage_gateway::DescribeCache::new(self.inner.clone())
    }

    /// Returns a description of the gateway volumes specified in the request. This
    /// operation is only supported in the cached volume gateway types.
    pub fn describe_cached_iscsi_volumes(&self) -> super::builder::storage_gateway::DescribeCachediScsiVolumes {
        super::builder::storage_gateway::DescribeCachediScsiVolumes::new(self.inner.clone())
    }

    /// Returns an array of Challenge-Handshake Authentication Protocol (CHAP)
    /// credentials information for a specified iSCSI target, one for each
    /// target-initiator pair.
    pub fn describe_chap_credentials(&self) -> super::builder::storage_gateway::DescribeChapCredentials {
        super::builder::storage_gateway::DescribeChapCredentials::new(self.inner.clone())
    }

    /// Returns metadata about a gateway such as its name, network interfaces,
    /// configured time zone, and the state (whether the gateway is running or not).
    pub fn describe_gateway_information(&self) -> super::builder::storage_gateway::DescribeGatewayInformation {
        super::builder::storage_gateway::DescribeGatewayInformation::new(self.inner.clone())
    }

    /// Returns your gateway's weekly maintenance start time including the day and
    /// time of the week. Note that values are in terms of the gateway's time zone.
    pub fn describe_maintenance_start_time(&self) -> super::builder::storage_gateway::DescribeMaintenanceStartTime {
        super::builder::storage_gateway::DescribeMaintenanceStartTime::new(self.inner.clone())
    }

    /// Gets a description for one or more Network File System (NFS) file shares
    /// from a file gateway. This operation is only supported for file gateways.
    pub fn describe_nfs_file_shares(&self) -> super::builder::storage_gateway::DescribeNfsFileShares {
        super::builder::storage_gateway::DescribeNfsFileShares::new(self.inner.clone())
    }

    /// Gets a description for one or more Server Message Block (SMB) file shares
    /// from a file gateway. This operation is only supported for file gateways.
    pub fn describe_smb_file_shares(&self) -> super::builder::storage_gateway::DescribeSmbFileShares {
        super::builder::storage_gateway::DescribeSmbFileShares::new(self.inner.clone())
    }

    /// Gets a description of a Server Message Block (SMB) file share settings from
    /// a file gateway. This operation is only supported for file gateways.
    pub fn describe_smb_settings(&self) -> super::builder::storage_gateway::DescribeSmbSettings {
        super::builder::storage_gateway::DescribeSmbSettings::new(self.inner.clone())
    }

    /// Describes the snapshot schedule for the specified gateway volume. The
    /// snapshot schedule information includes intervals at which snapshots are
    /// automatically initiated on the volume.
    pub fn describe_snapshot_schedule(&self) -> super::builder::storage_gateway::DescribeSnapshotSchedule {
        super::builder::storage_gateway::DescribeSnapshotSchedule::new(self.inner.clone())
    }

    /// Returns the description of the gateway volumes specified in the request. The
    /// list of gateway volumes in the request must be from one gateway. In the
    /// response, AWS Storage Gateway returns volume information sorted by volume
    /// ARNs.
    pub fn describe_stored_iscsi_volumes(&self) -> super::builder::storage_gateway::DescribeStorediScsiVolumes {
        super::builder::storage_gateway::DescribeStorediScsiVolumes::new(self.inner.clone())
    }

    /// Returns a description of specified virtual tapes in the virtual tape shelf
    /// (VTS). This operation is only supported in the tape gateway type.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::client::StorageGateway;
    /// use gax::paginator::ItemPaginator as _;
    /// async fn sample(client: &StorageGateway) -> gax::Result<()> {
    ///     let mut items = client.describe_tape_archives().by_item();
    ///     while let Some(item) = items.next().await {
    ///         let item = item?;
    ///         println!("{item:?}");
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn describe_tape_archives(&self) -> super::builder::storage_gateway::DescribeTapeArchives {
        super::builder::storage_gateway::DescribeTapeArchives::new(self.inner.clone())
    }

    /// Returns a list of virtual tape recovery points that are available for the
    /// specified tape gateway.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::client::StorageGateway;
    /// use gax::paginator::ItemPaginator as _;
    /// async fn sample(client: &StorageGateway) -> gax::Result<()> {
    ///     let mut items = client.describe_tape_recovery_points().by_item();
    ///     while let Some(item) = items.next().await {
    ///         let item = item?;
    ///         println!("{item:?}");
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn describe_tape_recovery_points(&self) -> super::builder::storage_gateway::DescribeTapeRecoveryPoints {
        super::builder::storage_gateway::DescribeTapeRecoveryPoints::new(self.inner.clone())
    }

    /// Returns a description of the specified Amazon Resource Name (ARN) of virtual
    /// tapes. If a TapeARN is not specified, returns a description of all virtual
    /// tapes associated with the specified gateway. This operation is only
    /// supported in the tape gateway type.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::client::StorageGateway;
    /// use gax::paginator::ItemPaginator as _;
    /// async fn sample(client: &StorageGateway) -> gax::Result<()> {
    ///     let mut items = client.describe_tapes().by_item();
    ///     while let Some(item) = items.next().await {
    ///         let item = item?;
    ///         println!("{item:?}");
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn describe_tapes(&self) -> super::builder::storage_gateway::DescribeTapes {
        super::builder::storage_gateway::DescribeTapes::new(self.inner.clone())
    }

    /// Returns information about the upload buffer of a gateway. This operation is
    /// supported for the stored volume, cached volume and tape gateway types.
    pub fn describe_upload_buffer(&self) -> super::builder::storage_gateway::DescribeUploadBuffer {
        super::builder::storage_gateway::DescribeUploadBuffer::new(self.inner.clone())
    }

    /// Returns a description of virtual tape library (VTL) devices for the
    /// specified tape gateway. In the response, AWS Storage Gateway returns VTL
    /// device information.
    ///
    /// This operation is only supported in the tape gateway type.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::client::StorageGateway;
    /// use gax::paginator::ItemPaginator as _;
    /// async fn sample(client: &StorageGateway) -> gax::Result<()> {
    ///     let mut items = client.describe_vtl_devices().by_item();
    ///     while let Some(item) = items.next().await {
    ///         let item = item?;
    ///         println!("{item:?}");
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn describe_vtl_devices(&self) -> super::builder::storage_gateway::DescribeVtlDevices {
        super::builder::storage_gateway::DescribeVtlDevices::new(self.inner.clone())
    }

    /// Returns information about the working storage of a gateway. This operation
    /// is only supported in the stored volumes gateway type. This operation is
    /// deprecated in cached volumes API version (20120630). Use
    /// DescribeUploadBuffer instead.
    pub fn describe_working_storage(&self) -> super::builder::storage_gateway::DescribeWorkingStorage {
        super::builder::storage_gateway::DescribeWorkingStorage::new(self.inner.clone())
    }

    /// Disconnects a volume from an iSCSI connection and then detaches the volume
    /// from the specified gateway. Detaching and attaching a volume enables you to
    /// recover your data from one gateway to a different gateway without creating a
    /// snapshot. It also makes it easier to move your volumes from an on-premises
    /// gateway to a gateway hosted on an Amazon EC2 instance. This operation is
    /// only supported in the volume gateway type.
    pub fn detach_volume(&self) -> super::builder::storage_gateway::DetachVolume {
        super::builder::storage_gateway::DetachVolume::new(self.inner.clone())
    }

    /// Disables a tape gateway when the gateway is no longer functioning. For
    /// example, if your gateway VM is damaged, you can disable the gateway so you
    /// can recover virtual tapes.
    ///
    /// Use this operation for a tape gateway that is not reachable or not
    /// functioning. This operation is only supported in the tape gateway type.
    pub fn disable_gateway(&self) -> super::builder::storage_gateway::DisableGateway {
        super::builder::storage_gateway::DisableGateway::new(self.inner.clone())
    }

    /// Adds a file gateway to an Active Directory domain. This operation is only
    /// supported for file gateways that support the SMB file protocol.
    pub fn join_domain(&self) -> super::builder::storage_gateway::JoinDomain {
        super::builder::storage_gateway::JoinDomain::new(self.inner.clone())
    }

    /// Lists the automatic tape creation policies for a gateway. If there are no
    /// automatic tape creation policies for the gateway, it returns an empty list.
    pub fn list_automatic_tape_creation_policies(&self) -> super::builder::storage_gateway::ListAutomaticTapeCreationPolicies {
        super::builder::storage_gateway::ListAutomaticTapeCreationPolicies::new(self.inner.clone())
    }

    /// Gets a list of the file shares for a specific file gateway, or the list of
    /// file shares that belong to the calling user account. This operation is only
    /// supported for file gateways.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::client::StorageGateway;
    /// use gax::paginator::ItemPaginator as _;
    /// async fn sample(client: &StorageGateway) -> gax::Result<()> {
    ///     let mut items = client.list_file_shares().by_item();
    ///     while let Some(item) = items.next().await {
    ///         let item = item?;
    ///         println!("{item:?}");
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list_file_shares(&self) -> super::builder::storage_gateway::ListFileShares {
        super::builder::storage_gateway::ListFileShares::new(self.inner.clone())
    }

    /// Lists gateways owned by an AWS account in an AWS Region specified in the
    /// request. The returned list is ordered by gateway Amazon Resource Name (ARN).
    ///
    /// By default, the operation returns a maximum of 100 gateways. This operation
    /// supports pagination that allows you to optionally reduce the number of
    /// gateways returned in a response.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::client::StorageGateway;
    /// use gax::paginator::ItemPaginator as _;
    /// async fn sample(client: &StorageGateway) -> gax::Result<()> {
    ///     let mut items = client.list_gateways().by_item();
    ///     while let Some(item) = items.next().await {
    ///         let item = item?;
    ///         println!("{item:?}");
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list_gateways(&self) -> super::builder::storage_gateway::ListGateways {
        super::builder::storage_gateway::ListGateways::new(self.inner.clone())
    }

    /// Returns a list of the gateway's local disks. To specify which gateway to
    /// describe, you use the Amazon Resource Name (ARN) of the gateway in the body
    /// of the request.
    ///
    /// The request returns a list of all disks, specifying which are configured as
    /// working storage, cache storage, or stored volume or not configured at all.
    /// The response includes a DiskStatus field. This field can have a value of
    /// present (the disk is available to use), missing (the disk is no longer
    /// connected to the gateway), or mismatch (the disk node is occupied by a disk
    /// that has incorrect metadata or the disk content is corrupted).
    pub fn list_local_disks(&self) -> super::builder::storage_gateway::ListLocalDisks {
        super::builder::storage_gateway::ListLocalDisks::new(self.inner.clone())
    }

    /// Lists the tags that have been added to the specified resource. This
    /// operation is supported in storage gateways of all types.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::client::StorageGateway;
    /// use gax::paginator::ItemPaginator as _;
    /// async fn sample(client: &StorageGateway) -> gax::Result<()> {
    ///     let mut items = client.list_tags_for_resource().by_item();
    ///     while let Some(item) = items.next().await {
    ///         let item = item?;
    ///         println!("{item:?}");
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list_tags_for_resource(&self) -> super::builder::storage_gateway::ListTagsForResource {
        super::builder::storage_gateway::ListTagsForResource::new(self.inner.clone())
    }

    /// Lists virtual tapes in your virtual tape library (VTL) and your virtual tape
    /// shelf (VTS). You specify the tapes to list by specifying one or more tape
    /// Amazon Resource Names (ARNs). If you don't specify a tape ARN, the operation
    /// lists all virtual tapes in both your VTL and VTS.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::client::StorageGateway;
    /// use gax::paginator::ItemPaginator as _;
    /// async fn sample(client: &StorageGateway) -> gax::Result<()> {
    ///     let mut items = client.list_tapes().by_item();
    ///     while let Some(item) = items.next().await {
    ///         let item = item?;
    ///         println!("{item:?}");
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list_tapes(&self) -> super::builder::storage_gateway::ListTapes {
        super::builder::storage_gateway::ListTapes::new(self.inner.clone())
    }

    /// Lists iSCSI initiators that are connected to a volume. You can use this
    /// operation to determine whether a volume is being used or not. This operation
    /// is only supported in the cached volume and stored volume gateway types.
    pub fn list_volume_initiators(&self) -> super::builder::storage_gateway::ListVolumeInitiators {
        super::builder::storage_gateway::ListVolumeInitiators::new(self.inner.clone())
    }

    /// Lists the recovery points for a specified gateway. This operation is only
    /// supported in the cached volume gateway type.
    pub fn list_volume_recovery_points(&self) -> super::builder::storage_gateway::ListVolumeRecoveryPoints {
        super::builder::storage_gateway::ListVolumeRecoveryPoints::new(self.inner.clone())
    }

    /// Lists the iSCSI stored volumes of a gateway. Results are sorted by volume
    /// ARN. The response includes only the volume ARNs. If you want additional
    /// volume information, use the DescribeStorediSCSIVolumes or the
    /// DescribeCachediSCSIVolumes API.
    ///
    /// # Example
    /// ```no_run
    /// # use storagegateway::client::StorageGateway;
    /// use gax::paginator::ItemPaginator as _;
    /// async fn sample(client: &StorageGateway) -> gax::Result<()> {
    ///     let mut items = client.list_volumes().by_item();
    ///     while let Some(item) = items.next().await {
    ///         let item = item?;
    ///         println!("{item:?}");
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list_volumes(&self) -> super::builder::storage_gateway::ListVolumes {
        super::builder::storage_gateway::ListVolumes::new(self.inner.clone())
    }

    /// Sends you notification through CloudWatch Events when all files written to
    /// your file share have been uploaded to Amazon S3.
    ///
    /// AWS Storage Gateway can send a notification through Amazon CloudWatch Events
    /// when all files written to your file share up to that point in time have been
    /// uploaded to Amazon S3. These files include files written to the file share
    /// up to the time that you make a request for notification. When the upload is
    /// done, Storage Gateway sends you notification through an Amazon CloudWatch
    /// Event. You can configure CloudWatch Events to send the notification through
    /// event targets such as Amazon SNS or AWS Lambda function. This operation is
    /// only supported for file gateways.
    pub fn notify_when_uploaded(&self) -> super::builder::storage_gateway::NotifyWhenUploaded {
        super::builder::storage_gateway::NotifyWhenUploaded::new(self.inner.clone())
    }

    /// Refreshes the cache for the specified file share. This operation finds
    /// objects in the Amazon S3 bucket that were added, removed or replaced since
    /// the gateway last listed the bucket's contents and cached the results. This
    /// operation is only supported in the file gateway type. You can subscribe to
    /// be notified through an Amazon CloudWatch event when your RefreshCache
    /// operation completes. For more information, see Getting Notified About File
    /// Operations.
    pub fn refresh_cache(&self) -> super::builder::storage_gateway::RefreshCache {
        super::builder::storage_gateway::RefreshCache::new(self.inner.clone())
    }

    /// Removes one or more tags from the specified resource. This operation is
    /// supported in storage gateways of all types.
    pub fn remove_tags_from_resource(&self) -> super::builder::storage_gateway::RemoveTagsFromResource {
        super::builder::storage_gateway::RemoveTagsFromResource::new(self.inner.clone())
    }

    /// Resets all cache disks that have encountered an error and makes the disks
    /// available for reconfiguration as cache storage. If your cache disk
    /// encounters an error, the gateway prevents read and write operations on
    /// virtual tapes in the gateway. For example, an error can occur when a disk is
    /// corrupted or removed from the gateway. When a cache is reset, the gateway
    /// loses its cache storage. At this point, you can reconfigure the disks as
    /// cache disks. This operation is only supported in the cached volume and tape
    /// types.
    pub fn reset_cache(&self) -> super::builder::storage_gateway::ResetCache {
        super::builder::storage_gateway::ResetCache::new(self.inner.clone())
    }

    /// Retrieves an archived virtual tape from the virtual tape shelf (VTS) to a
    /// tape gateway. Virtual tapes archived in the VTS are not associated with any
    /// gateway. However after a tape is retrieved, it is associated with a gateway,
    /// even though it is also listed in the VTS, that is, archive. This operation
    /// is only supported in the tape gateway type.
    pub fn retrieve_tape_archive(&self) -> super::builder::storage_gateway::RetrieveTapeArchive {
        super::builder::storage_gateway::RetrieveTapeArchive::new(self.inner.clone())
    }

    /// Retrieves the recovery point for the specified virtual tape. This operation
    /// is only supported in the tape gateway type.
    pub fn retrieve_tape_recovery_point(&self) -> super::builder::storage_gateway::RetrieveTapeRecoveryPoint {
        super::builder::storage_gateway::RetrieveTapeRecoveryPoint::new(self.inner.clone())
    }

    /// Sets the password for your VM local console. When you log in to the local
    /// console for the first time, you log in to the VM with the default
    /// credentials. We recommend that you set a new password. You don't need to
    /// know the default password to set a new password.
    pub fn set_local_console_password(&self) -> super::builder::storage_gateway::SetLocalConsolePassword {
        super::builder::storage_gateway::SetLocalConsolePassword::new(self.inner.clone())
    }

    /// Sets the password for the guest user `smbguest`. The `smbguest` user is the
    /// user when the authentication method for the file share is set to
    /// `GuestAccess`.
    pub fn set_smb_guest_password(&self) -> super::builder::storage_gateway::SetSmbGuestPassword {
        super::builder::storage_gateway::SetSmbGuestPassword::new(self.inner.clone())
    }

    /// Shuts down a gateway. To specify which gateway to shut down, use the Amazon
    /// Resource Name (ARN) of the gateway in the body of your request.
    ///
    /// The operation shuts down the gateway service component running in the
    /// gateway's virtual machine (VM) and not the host VM.
    pub fn shutdown_gateway(&self) -> super::builder::storage_gateway::ShutdownGateway {
        super::builder::storage_gateway::ShutdownGateway::new(self.inner.clone())
    }

    /// Start a test that verifies that the specified gateway is configured for High
    /// Availability monitoring in your host environment. This request only
    /// initiates the test and a successful response only indicates that the test
    /// was started.
    pub fn start_availability_monitor_test(&self) -> super::builder::storage_gateway::StartAvailabilityMonitorTest {
        super::builder::storage_gateway::StartAvailabilityMonitorTest::new(self.inner.clone())
    }

    /// Starts a gateway that you previously shut down (see ShutdownGateway). After
    /// the gateway starts, you can then make other API calls, your applications can
    /// read from or write to the gateway's storage volumes and you will be able to
    /// take snapshot backups.
    ///
    /// When you make a request, you will get a 200 OK success response immediately.
    /// However, it might take some time for the gateway to be ready. You should
    /// call DescribeGatewayInformation and check the status before making any
    /// additional API calls. For more information, see ActivateGateway.
    pub fn start_gateway(&self) -> super::builder::storage_gateway::StartGateway {
        super::builder::storage_gateway::StartGateway::new(self.inner.clone())
    }

    /// Updates the automatic tape creation policy of a gateway. Use this to update
    /// the policy with a new set of automatic tape creation rules. This is only
    /// supported for tape gateways.
    pub fn update_automatic_tape_creation_policy(&self) -> super::builder::storage_gateway::UpdateAutomaticTapeCreationPolicy {
        super::builder::storage_gateway::UpdateAutomaticTapeCreationPolicy::new(self.inner.clone())
    }

    /// Updates the bandwidth rate limits of a gateway. You can update both the
    /// upload and download bandwidth rate limit or specify only one of the two. If
    /// you don't set a bandwidth rate limit, the existing rate limit remains.
    pub fn update_bandwidth_rate_limit(&self) -> super::builder::storage_gateway::UpdateBandwidthRateLimit {
        super::builder::storage_gateway::UpdateBandwidthRateLimit::new(self.inner.clone())
    }

    /// Updates the Challenge-Handshake Authentication Protocol (CHAP) credentials
    /// for a specified iSCSI target. By default, a gateway does not have CHAP
    /// enabled; however, for added security, you might use it.
    pub fn update_chap_credentials(&self) -> super::builder::storage_gateway::UpdateChapCredentials {
        super::builder::storage_gateway::UpdateChapCredentials::new(self.inner.clone())
    }

    /// Updates a gateway's metadata, which includes the gateway's name and time
    /// zone. To specify which gateway to update, use the Amazon Resource Name (ARN)
    /// of the gateway in your request.
    pub fn update_gateway_information(&self) -> super::builder::storage_gateway::UpdateGatewayInformation {
        super::builder::storage_gateway::UpdateGatewayInformation::new(self.inner.clone())
    }

    /// Updates the gateway virtual machine (VM) software. The request immediately
    /// triggers the software update.
    pub fn update_gateway_software_now(&self) -> super::builder::storage_gateway::UpdateGatewaySoftwareNow {
        super::builder::storage_gateway::UpdateGatewaySoftwareNow::new(self.inner.clone())
    }

    /// Updates a gateway's weekly maintenance start time information, including day
    /// and time of the week. The maintenance time is the time in your gateway's
    /// time zone.
    pub fn update_maintenance_start_time(&self) -> super::builder::storage_gateway::UpdateMaintenanceStartTime {
        super::builder::storage_gateway::UpdateMaintenanceStartTime::new(self.inner.clone())
    }

    /// Updates a Network File System (NFS) file share. This operation is only
    /// supported in the file gateway type.
    ///
    /// To leave a file share field unchanged, set the corresponding input field to
    /// null.
    pub fn update_nfs_file_share(&self) -> super::builder::storage_gateway::UpdateNfsFileShare {
        super::builder::storage_gateway::UpdateNfsFileShare::new(self.inner.clone())
    }

    /// Updates a Server Message Block (SMB) file share.
    ///
    /// To leave a file share field unchanged, set the corresponding input field to
    /// null. This operation is only supported for file gateways.
    pub fn update_smb_file_share(&self) -> super::builder::storage_gateway::UpdateSmbFileShare {
        super::builder::storage_gateway::UpdateSmbFileShare::new(self.inner.clone())
    }

    /// Updates the SMB security strategy on a file gateway. This action is only
    /// supported in file gateways.
    pub fn update_smb_security_strategy(&self) -> super::builder::storage_gateway::UpdateSmbSecurityStrategy {
        super::builder::storage_gateway::UpdateSmbSecurityStrategy::new(self.inner.clone())
    }

    /// Updates a snapshot schedule configured for a gateway volume. This operation
    /// is only supported in the cached volume and stored volume gateway types.
    pub fn update_snapshot_schedule(&self) -> super::builder::storage_gateway::UpdateSnapshotSchedule {
        super::builder::storage_gateway::UpdateSnapshotSchedule::new(self.inner.clone())
    }

    /// Updates the type of medium changer in a tape gateway. When you activate a
    /// tape gateway, you select a medium changer type for the tape gateway. This
    /// operation enables you to select a different type of medium changer after a
    /// tape gateway is activated. This operation is only supported in the tape
    /// gateway type.
    pub fn update_vtl_device_type(&self) -> super::builder::storage_gateway::UpdateVtlDeviceType {
        super::builder::storage_gateway::UpdateVtlDeviceType::new(self.inner.clone())
    }
}
