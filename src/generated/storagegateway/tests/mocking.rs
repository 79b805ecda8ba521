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
    use gax::error::Error;
    use gax::error::rpc::Status;
    use gax::options::RequestOptionsBuilder;
    use gax::paginator::{ItemPaginator, Paginator};
    use gax::response::Response;
    use storagegateway::client::StorageGateway;
    use storagegateway::errors::StorageGatewayException;
    use storagegateway::model;

    const GATEWAY_ARN: &str = "arn:aws:storagegateway:us-east-2:111122223333:gateway/sgw-12A3456B";

    mockall::mock! {
        #[derive(Debug)]
        StorageGateway {}
        impl storagegateway::stub::StorageGateway for StorageGateway {
            async fn activate_gateway(&self, req: model::ActivateGatewayRequest, options: gax::options::RequestOptions) -> gax::Result<Response<model::ActivateGatewayResponse>>;
            async fn describe_gateway_information(&self, req: model::DescribeGatewayInformationRequest, options: gax::options::RequestOptions) -> gax::Result<Response<model::DescribeGatewayInformationResponse>>;
            async fn list_gateways(&self, req: model::ListGatewaysRequest, options: gax::options::RequestOptions) -> gax::Result<Response<model::ListGatewaysResponse>>;
            async fn list_file_shares(&self, req: model::ListFileSharesRequest, options: gax::options::RequestOptions) -> gax::Result<Response<model::ListFileSharesResponse>>;
            async fn list_tags_for_resource(&self, req: model::ListTagsForResourceRequest, options: gax::options::RequestOptions) -> gax::Result<Response<model::ListTagsForResourceResponse>>;
        }
    }

    fn gateway(name: &str) -> model::GatewayInfo {
        model::GatewayInfo::new()
            .set_gateway_name(name)
            .set_gateway_arn(format!("{GATEWAY_ARN}-{name}"))
    }

    fn gateways_page(names: &[&str], marker: Option<&str>) -> model::ListGatewaysResponse {
        model::ListGatewaysResponse::new()
            .set_gateways(names.iter().map(|n| gateway(n)))
            .set_or_clear_marker(marker)
    }

    #[tokio::test]
    async fn send_success() -> anyhow::Result<()> {
        let mut mock = MockStorageGateway::new();
        mock.expect_describe_gateway_information()
            .withf(|r, _| r.gateway_arn.as_deref() == Some(GATEWAY_ARN))
            .return_once(|_, _| {
                Ok(Response::from(
                    model::DescribeGatewayInformationResponse::new()
                        .set_gateway_arn(GATEWAY_ARN)
                        .set_gateway_name("test-gateway")
                        .set_host_environment(model::HostEnvironment::Ec2),
                ))
            });

        let client = StorageGateway::from_stub(mock);
        let response = client
            .describe_gateway_information()
            .set_gateway_arn(GATEWAY_ARN)
            .send()
            .await?;
        assert_eq!(response.gateway_name.as_deref(), Some("test-gateway"));
        assert_eq!(response.host_environment, Some(model::HostEnvironment::Ec2));
        assert!(response.gateway_network_interfaces.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn with_request_replaces_fields() -> anyhow::Result<()> {
        let mut mock = MockStorageGateway::new();
        mock.expect_activate_gateway()
            .withf(|r, _| {
                r.activation_key.as_deref() == Some("29AV1-3OFV9-VVIUB-NKT0I-LRO6V")
                    && r.gateway_name.is_none()
                    && r.tags.len() == 1
            })
            .return_once(|_, _| {
                Ok(Response::from(
                    model::ActivateGatewayResponse::new().set_gateway_arn(GATEWAY_ARN),
                ))
            });

        let client = StorageGateway::from_stub(mock);
        let request = model::ActivateGatewayRequest::new()
            .set_activation_key("29AV1-3OFV9-VVIUB-NKT0I-LRO6V")
            .set_tags([model::Tag::new().set_key("env").set_value("test")]);
        let response = client
            .activate_gateway()
            .set_gateway_name("replaced")
            .with_request(request)
            .send()
            .await?;
        assert_eq!(response.gateway_arn.as_deref(), Some(GATEWAY_ARN));
        Ok(())
    }

    #[tokio::test]
    async fn options_reach_the_stub() -> anyhow::Result<()> {
        let mut mock = MockStorageGateway::new();
        mock.expect_activate_gateway()
            .withf(|_, o| {
                o.idempotent() == Some(false)
                    && o.user_agent().as_deref() == Some("test-agent/1.0")
                    && *o.attempt_timeout() == Some(std::time::Duration::from_secs(5))
            })
            .return_once(|_, _| Ok(Response::from(model::ActivateGatewayResponse::new())));

        let client = StorageGateway::from_stub(mock);
        let _ = client
            .activate_gateway()
            .with_user_agent("test-agent/1.0")
            .with_attempt_timeout(std::time::Duration::from_secs(5))
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn default_idempotency() -> anyhow::Result<()> {
        let mut mock = MockStorageGateway::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_describe_gateway_information()
            .once()
            .in_sequence(&mut seq)
            .withf(|_, o| o.idempotent() == Some(true))
            .returning(|_, _| Ok(Response::from(model::DescribeGatewayInformationResponse::new())));
        mock.expect_describe_gateway_information()
            .once()
            .in_sequence(&mut seq)
            .withf(|_, o| o.idempotent() == Some(false))
            .returning(|_, _| Ok(Response::from(model::DescribeGatewayInformationResponse::new())));

        let client = StorageGateway::from_stub(mock);
        client.describe_gateway_information().send().await?;
        client
            .describe_gateway_information()
            .with_idempotency(false)
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> anyhow::Result<()> {
        let mut mock = MockStorageGateway::new();
        mock.expect_describe_gateway_information().return_once(|_, _| {
            let status = Status::default()
                .set_error_type("InvalidGatewayRequestException")
                .set_message("The specified gateway was not found.")
                .set_details(serde_json::json!({
                    "error": {"errorCode": "GatewayNotFound"}
                }));
            Err(Error::service(status))
        });

        let client = StorageGateway::from_stub(mock);
        let err = client
            .describe_gateway_information()
            .set_gateway_arn(GATEWAY_ARN)
            .send()
            .await
            .unwrap_err();
        assert_eq!(
            err.status().map(|s| s.error_type.as_str()),
            Some("InvalidGatewayRequestException")
        );
        let e = match StorageGatewayException::from_error(&err) {
            Some(StorageGatewayException::InvalidGatewayRequest(e)) => e,
            other => panic!("expected an InvalidGatewayRequestException, got {other:?}"),
        };
        assert_eq!(
            e.error.and_then(|x| x.error_code),
            Some(model::ErrorCode::GatewayNotFound)
        );
        assert_eq!(
            e.message.as_deref(),
            Some("The specified gateway was not found.")
        );
        Ok(())
    }

    #[tokio::test]
    async fn by_page_follows_marker() -> anyhow::Result<()> {
        let mut mock = MockStorageGateway::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_gateways()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.marker.is_none() && r.limit == Some(2))
            .returning(|_, _| Ok(Response::from(gateways_page(&["a", "b"], Some("m1")))));
        mock.expect_list_gateways()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.marker.as_deref() == Some("m1") && r.limit == Some(2))
            .returning(|_, _| Ok(Response::from(gateways_page(&["c", "d"], Some("m2")))));
        mock.expect_list_gateways()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.marker.as_deref() == Some("m2"))
            .returning(|_, _| Ok(Response::from(gateways_page(&["e"], None))));

        let client = StorageGateway::from_stub(mock);
        let mut pages = client.list_gateways().set_limit(2).by_page();
        let mut names = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page?;
            names.push(
                page.gateways
                    .iter()
                    .filter_map(|g| g.gateway_name.clone())
                    .collect::<Vec<_>>(),
            );
        }
        assert_eq!(names, vec![vec!["a", "b"], vec!["c", "d"], vec!["e"]]);
        Ok(())
    }

    #[tokio::test]
    async fn by_page_starts_at_request_marker() -> anyhow::Result<()> {
        let mut mock = MockStorageGateway::new();
        mock.expect_list_gateways()
            .once()
            .withf(|r, _| r.marker.as_deref() == Some("start-here"))
            .returning(|_, _| Ok(Response::from(gateways_page(&["z"], Some("")))));

        let client = StorageGateway::from_stub(mock);
        let mut pages = client.list_gateways().set_marker("start-here").by_page();
        let page = pages.next().await.transpose()?;
        assert_eq!(page.map(|p| p.gateways.len()), Some(1));
        assert!(pages.next().await.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn by_page_stops_after_error() -> anyhow::Result<()> {
        let mut mock = MockStorageGateway::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_gateways()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(Response::from(gateways_page(&["a"], Some("m1")))));
        mock.expect_list_gateways()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Err(Error::service(
                    Status::default()
                        .set_error_type("ServiceUnavailableError")
                        .set_message("try again later"),
                ))
            });

        let client = StorageGateway::from_stub(mock);
        let mut pages = client.list_gateways().by_page();
        assert!(matches!(pages.next().await, Some(Ok(_))));
        let err = pages.next().await;
        assert!(matches!(&err, Some(Err(e)) if e.status().is_some()), "{err:?}");
        assert!(pages.next().await.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn by_item() -> anyhow::Result<()> {
        let mut mock = MockStorageGateway::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_tags_for_resource()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.resource_arn.as_deref() == Some(GATEWAY_ARN) && r.marker.is_none())
            .returning(|_, _| {
                Ok(Response::from(
                    model::ListTagsForResourceResponse::new()
                        .set_resource_arn(GATEWAY_ARN)
                        .set_tags([
                            model::Tag::new().set_key("k1").set_value("v1"),
                            model::Tag::new().set_key("k2").set_value("v2"),
                        ])
                        .set_marker("m1"),
                ))
            });
        mock.expect_list_tags_for_resource()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.marker.as_deref() == Some("m1"))
            .returning(|_, _| {
                Ok(Response::from(
                    model::ListTagsForResourceResponse::new()
                        .set_tags([model::Tag::new().set_key("k3").set_value("v3")]),
                ))
            });

        let client = StorageGateway::from_stub(mock);
        let mut items = client
            .list_tags_for_resource()
            .set_resource_arn(GATEWAY_ARN)
            .by_item();
        let mut keys = Vec::new();
        while let Some(tag) = items.next().await {
            keys.push(tag?.key.unwrap_or_default());
        }
        assert_eq!(keys, vec!["k1", "k2", "k3"]);
        Ok(())
    }

    #[tokio::test]
    async fn list_file_shares_uses_next_marker() -> anyhow::Result<()> {
        let mut mock = MockStorageGateway::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_file_shares()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.marker.is_none())
            .returning(|_, _| {
                Ok(Response::from(
                    model::ListFileSharesResponse::new()
                        .set_marker("current")
                        .set_next_marker("next-page")
                        .set_file_share_info_list([model::FileShareInfo::new()
                            .set_file_share_type(model::FileShareType::Nfs)
                            .set_file_share_id("share-1")]),
                ))
            });
        mock.expect_list_file_shares()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.marker.as_deref() == Some("next-page"))
            .returning(|_, _| {
                Ok(Response::from(
                    model::ListFileSharesResponse::new()
                        .set_marker("next-page")
                        .set_file_share_info_list([model::FileShareInfo::new()
                            .set_file_share_type(model::FileShareType::Smb)
                            .set_file_share_id("share-2")]),
                ))
            });

        let client = StorageGateway::from_stub(mock);
        let mut items = client.list_file_shares().set_gateway_arn(GATEWAY_ARN).by_item();
        let mut got = Vec::new();
        while let Some(share) = items.next().await {
            let share = share?;
            got.push((share.file_share_id, share.file_share_type));
        }
        assert_eq!(
            got,
            vec![
                (Some("share-1".to_string()), Some(model::FileShareType::Nfs)),
                (Some("share-2".to_string()), Some(model::FileShareType::Smb)),
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn paginator_is_send() -> anyhow::Result<()> {
        let mut mock = MockStorageGateway::new();
        mock.expect_list_gateways()
            .once()
            .returning(|_, _| Ok(Response::from(gateways_page(&["a", "b"], None))));

        let client = StorageGateway::from_stub(mock);
        let items = client.list_gateways().by_item();
        let join = tokio::spawn(async move {
            let mut items = items;
            let mut count = 0;
            while let Some(item) = items.next().await {
                item?;
                count += 1;
            }
            gax::Result::<usize>::Ok(count)
        });
        assert_eq!(join.await??, 2);
        Ok(())
    }

    #[tokio::test]
    async fn paginator_into_stream() -> anyhow::Result<()> {
        use futures::stream::StreamExt;
        let mut mock = MockStorageGateway::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_list_gateways()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(Response::from(gateways_page(&["a"], Some("m1")))));
        mock.expect_list_gateways()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(Response::from(gateways_page(&["b"], None))));

        let client = StorageGateway::from_stub(mock);
        let pages = client
            .list_gateways()
            .by_page()
            .into_stream()
            .collect::<Vec<_>>()
            .await;
        assert_eq!(pages.len(), 2);
        assert!(pages.iter().all(|p| p.is_ok()), "{pages:?}");
        Ok(())
    }

    #[tokio::test]
    async fn client_builder_requires_transport() {
        let err = StorageGateway::builder().build().await.unwrap_err();
        assert!(err.is_transport(), "{err:?}");
    }

    #[tokio::test]
    async fn client_builder_with_transport() -> anyhow::Result<()> {
        let mut mock = MockStorageGateway::new();
        mock.expect_list_gateways()
            .once()
            .returning(|_, _| Ok(Response::from(gateways_page(&["a"], None))));
        let client = StorageGateway::builder()
            .with_transport(mock)
            .build()
            .await?;
        let response = client.list_gateways().send().await?;
        assert_eq!(response.gateways, vec![gateway("a")]);

        let clone = client.clone();
        drop(client);
        let _ = format!("{clone:?}");
        Ok(())
    }

    #[tokio::test]
    #[should_panic(expected = "mocked all methods")]
    async fn unimplemented_method_panics() {
        #[derive(Debug)]
        struct Empty;
        impl storagegateway::stub::StorageGateway for Empty {}
        let client = StorageGateway::from_stub(Empty);
        let _ = client.delete_gateway().send().await;
    }
}
