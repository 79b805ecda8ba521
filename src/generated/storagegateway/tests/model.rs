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

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use storagegateway::model;
    use test_case::test_case;

    type Result = anyhow::Result<()>;

    const GATEWAY_ARN: &str = "arn:aws:storagegateway:us-east-2:111122223333:gateway/sgw-12A3456B";
    const BUCKET_ARN: &str = "arn:aws:s3:::my-bucket";

    #[test]
    fn create_smb_file_share_wire_names() -> Result {
        let request = model::CreateSmbFileShareRequest::new()
            .set_client_token("token-12345")
            .set_gateway_arn(GATEWAY_ARN)
            .set_kms_encrypted(false)
            .set_location_arn(BUCKET_ARN)
            .set_object_acl(model::ObjectAcl::BucketOwnerFullControl)
            .set_guess_mime_type_enabled(true)
            .set_smb_acl_enabled(true)
            .set_admin_user_list(["admin"])
            .set_tags([model::Tag::new().set_key("env").set_value("test")]);
        let got = serde_json::to_value(&request)?;
        let want = json!({
            "ClientToken": "token-12345",
            "GatewayARN": GATEWAY_ARN,
            "KMSEncrypted": false,
            "LocationARN": BUCKET_ARN,
            "ObjectACL": "bucket-owner-full-control",
            "GuessMIMETypeEnabled": true,
            "SMBACLEnabled": true,
            "AdminUserList": ["admin"],
            "Tags": [{"Key": "env", "Value": "test"}],
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn empty_request_serializes_to_empty_object() -> Result {
        let got = serde_json::to_value(model::CreateSmbFileShareRequest::new())?;
        assert_eq!(got, json!({}));
        let got = serde_json::to_value(model::ListGatewaysRequest::new())?;
        assert_eq!(got, json!({}));
        Ok(())
    }

    #[test]
    fn cached_volumes_decode() -> Result {
        let input = json!({
            "CachediSCSIVolumes": [{
                "VolumeARN": format!("{GATEWAY_ARN}/volume/vol-1122AABB"),
                "VolumeId": "vol-1122AABB",
                "VolumeType": "CACHED iSCSI",
                "VolumeStatus": "AVAILABLE",
                "VolumeSizeInBytes": 1099511627776_i64,
                "VolumeProgress": 23.7,
                "CreatedDate": 1_500_000_000,
                "VolumeiSCSIAttributes": {
                    "TargetARN": format!("{GATEWAY_ARN}/target/iqn.1997-05.com.amazon:myvolume"),
                    "NetworkInterfaceId": "10.243.43.207",
                    "NetworkInterfacePort": 3260,
                    "LunNumber": 1,
                    "ChapEnabled": true,
                },
            }],
        });
        let got = serde_json::from_value::<model::DescribeCachediScsiVolumesResponse>(input)?;
        assert_eq!(got.cached_iscsi_volumes.len(), 1);
        let volume = &got.cached_iscsi_volumes[0];
        assert_eq!(volume.volume_id.as_deref(), Some("vol-1122AABB"));
        assert_eq!(volume.volume_size_in_bytes, Some(1099511627776));
        assert_eq!(volume.volume_progress, Some(23.7));
        assert_eq!(
            volume.created_date,
            Some(wkt::Timestamp::new(1_500_000_000, 0)?)
        );
        let attributes = volume
            .volume_iscsi_attributes
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("missing iSCSI attributes"))?;
        assert_eq!(attributes.network_interface_port, Some(3260));
        assert_eq!(attributes.lun_number, Some(1));
        assert_eq!(attributes.chap_enabled, Some(true));
        assert!(volume.kms_key.is_none());
        Ok(())
    }

    #[test]
    fn fractional_timestamps() -> Result {
        let input = json!({"Disks": [], "GatewayARN": GATEWAY_ARN});
        let got = serde_json::from_value::<model::ListLocalDisksResponse>(input)?;
        assert!(got.disks.is_empty());

        let volume = serde_json::from_value::<model::CachediScsiVolume>(
            json!({"CreatedDate": 1_500_000_000.5}),
        )?;
        let created = volume
            .created_date
            .ok_or_else(|| anyhow::anyhow!("missing created date"))?;
        assert_eq!(created.seconds(), 1_500_000_000);
        assert_eq!(created.nanos(), 500_000_000);
        assert_eq!(
            serde_json::to_value(&volume)?,
            json!({"CreatedDate": 1_500_000_000.5})
        );
        Ok(())
    }

    #[test]
    fn unknown_fields_are_preserved() -> Result {
        let input = json!({
            "GatewayARN": GATEWAY_ARN,
            "GatewayName": "my-gateway",
            "SomeNewField": {"a": 1},
        });
        let got = serde_json::from_value::<model::DescribeGatewayInformationResponse>(input.clone())?;
        assert_eq!(got.gateway_name.as_deref(), Some("my-gateway"));
        assert_eq!(serde_json::to_value(&got)?, input);
        let fmt = format!("{got:?}");
        assert!(fmt.contains("SomeNewField"), "{fmt}");
        Ok(())
    }

    #[test]
    fn debug_shows_only_set_fields() {
        let empty = model::ActivateGatewayRequest::new();
        assert_eq!(format!("{empty:?}"), "ActivateGatewayRequest");

        let request = model::ActivateGatewayRequest::new()
            .set_activation_key("29AV1-3OFV9-VVIUB-NKT0I-LRO6V")
            .set_gateway_region("us-east-2");
        assert_eq!(
            format!("{request:?}"),
            r#"ActivateGatewayRequest { activation_key: "29AV1-3OFV9-VVIUB-NKT0I-LRO6V", gateway_region: "us-east-2" }"#
        );

        let tags = model::AddTagsToResourceRequest::new()
            .set_resource_arn(GATEWAY_ARN)
            .set_tags([model::Tag::new().set_key("k")]);
        let fmt = format!("{tags:?}");
        assert!(fmt.contains(r#"tags: [Tag { key: "k" }]"#), "{fmt}");
    }

    #[test]
    fn debug_censors_secrets() {
        let request = model::SetLocalConsolePasswordRequest::new()
            .set_gateway_arn(GATEWAY_ARN)
            .set_local_console_password("hunter2-secret");
        let fmt = format!("{request:?}");
        assert!(fmt.contains(r#"local_console_password: "[censored]""#), "{fmt}");
        assert!(fmt.contains(GATEWAY_ARN), "{fmt}");
        assert!(!fmt.contains("hunter2-secret"), "{fmt}");

        let request = model::JoinDomainRequest::new()
            .set_user_name("admin")
            .set_password("ad-secret");
        let fmt = format!("{request:?}");
        assert!(fmt.contains(r#"user_name: "admin""#), "{fmt}");
        assert!(!fmt.contains("ad-secret"), "{fmt}");

        let request = model::SetSmbGuestPasswordRequest::new().set_password("guest-secret");
        let fmt = format!("{request:?}");
        assert!(!fmt.contains("guest-secret"), "{fmt}");

        let chap = model::ChapInfo::new()
            .set_initiator_name("iqn.1991-05.com.microsoft:computername.domain.example.com")
            .set_secret_to_authenticate_initiator("initiator-secret")
            .set_secret_to_authenticate_target("target-secret");
        let update = model::UpdateChapCredentialsRequest::new()
            .set_secret_to_authenticate_initiator("initiator-secret")
            .set_secret_to_authenticate_target("target-secret");
        for fmt in [format!("{chap:?}"), format!("{update:?}")] {
            assert!(!fmt.contains("initiator-secret"), "{fmt}");
            assert!(!fmt.contains("target-secret"), "{fmt}");
            assert!(fmt.contains("[censored]"), "{fmt}");
        }

        // Unset secrets are omitted like any other field.
        let empty = model::JoinDomainRequest::new();
        assert_eq!(format!("{empty:?}"), "JoinDomainRequest");
    }

    #[test]
    fn secrets_still_serialize() -> Result {
        let request = model::SetLocalConsolePasswordRequest::new()
            .set_local_console_password("hunter2-secret");
        assert_eq!(
            serde_json::to_value(&request)?,
            json!({"LocalConsolePassword": "hunter2-secret"})
        );
        Ok(())
    }

    #[test]
    fn set_or_clear() {
        let request = model::ListGatewaysRequest::new()
            .set_marker("m1")
            .set_limit(10)
            .set_or_clear_marker(None::<String>);
        assert_eq!(request.marker, None);
        assert_eq!(request.limit, Some(10));

        let request = request.set_or_clear_limit(None::<i32>);
        assert_eq!(request, model::ListGatewaysRequest::new());
    }

    #[test]
    fn equality_uses_all_fields() {
        let a = model::Tag::new().set_key("k").set_value("v");
        let b = model::Tag::new().set_key("k").set_value("v");
        let c = model::Tag::new().set_key("k");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(c, model::Tag::new());
        assert_eq!(a.clone(), a);
    }

    #[test]
    fn vec_setters_replace() {
        let request = model::DescribeCachediScsiVolumesRequest::new()
            .set_volume_arns(["a", "b"])
            .set_volume_arns(["c"]);
        assert_eq!(request.volume_arns, vec!["c".to_string()]);

        let request = request.set_volume_arns(Vec::<String>::new());
        assert!(request.volume_arns.is_empty());
    }

    #[test_case(model::ObjectAcl::Private, "private")]
    #[test_case(model::ObjectAcl::AwsExecRead, "aws-exec-read")]
    #[test_case(model::FileShareType::Smb, "SMB")]
    #[test_case(model::HostEnvironment::Vmware, "VMWARE")]
    #[test_case(model::ActiveDirectoryStatus::Detached, "DETACHED")]
    #[test_case(model::AvailabilityMonitorTestStatus::Complete, "COMPLETE")]
    #[test_case(model::SmbSecurityStrategy::MandatoryEncryption, "MandatoryEncryption")]
    #[test_case(model::ErrorCode::GatewayNotFound, "GatewayNotFound")]
    fn enum_names<T>(value: T, name: &str) -> Result
    where
        T: serde::Serialize + serde::de::DeserializeOwned + std::fmt::Display + std::fmt::Debug + PartialEq,
    {
        assert_eq!(value.to_string(), name);
        assert_eq!(serde_json::to_value(&value)?, json!(name));
        let got = serde_json::from_value::<T>(json!(name))?;
        assert_eq!(got, value);
        Ok(())
    }

    #[test]
    fn enum_unknown_values() -> Result {
        let got = serde_json::from_value::<model::HostEnvironment>(json!("QUANTUM"))?;
        assert!(
            matches!(got, model::HostEnvironment::UnknownValue(_)),
            "{got:?}"
        );
        assert_eq!(got.name(), "QUANTUM");
        assert_eq!(serde_json::to_value(&got)?, json!("QUANTUM"));
        assert_eq!(got, model::HostEnvironment::from("QUANTUM"));

        let err = serde_json::from_value::<model::HostEnvironment>(json!(42));
        assert!(err.is_err(), "{err:?}");
        Ok(())
    }

    #[test]
    fn lun_already_allocated_keeps_trailing_space() -> Result {
        let code = model::ErrorCode::LunAlreadyAllocated;
        assert_eq!(code.name(), "LunAlreadyAllocated ");
        assert_eq!(serde_json::to_value(&code)?, json!("LunAlreadyAllocated "));
        assert_eq!(
            model::ErrorCode::from("LunAlreadyAllocated"),
            model::ErrorCode::LunAlreadyAllocated
        );
        Ok(())
    }

    #[test]
    fn storage_gateway_error_is_camel_case() -> Result {
        let input = json!({
            "errorCode": "VolumeNotFound",
            "errorDetails": {"volumeId": "vol-1122AABB"},
        });
        let got = serde_json::from_value::<model::StorageGatewayError>(input.clone())?;
        assert_eq!(got.error_code, Some(model::ErrorCode::VolumeNotFound));
        assert_eq!(
            got.error_details.get("volumeId").map(String::as_str),
            Some("vol-1122AABB")
        );
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn pageable_responses() {
        use gax::paginator::PageableResponse;
        let page = model::ListVolumesResponse::new()
            .set_marker("next")
            .set_volume_infos([model::VolumeInfo::new().set_volume_id("vol-1")]);
        assert_eq!(page.next_page_token(), "next");
        assert_eq!(page.items().len(), 1);

        let last = model::ListVolumesResponse::new();
        assert_eq!(last.next_page_token(), "");

        let shares = model::ListFileSharesResponse::new()
            .set_marker("this-page")
            .set_next_marker("next-page");
        assert_eq!(shares.next_page_token(), "next-page");
    }
}
