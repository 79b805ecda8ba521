// Copyright 2024 Google LLC
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

//! Iterate over the pages (or the items) returned by `Marker`-based list
//! operations.
//!
//! Operations such as `ListGateways`, `ListVolumes`, or `DescribeTapes`
//! return their results in pages. Each page includes a `Marker` to request
//! the next page. The last page has no marker. The traits in this module
//! hide these details.
//!
//! # Example
//! ```
//! # use storagegateway_gax::paginator::{ItemPaginator, Paginator, PageableResponse};
//! async fn sample<P, T>(mut pages: P) -> Result<(), Box<dyn std::error::Error>>
//! where
//!     P: Paginator<T, storagegateway_gax::error::Error>,
//!     T: PageableResponse,
//! {
//!     while let Some(page) = pages.next().await {
//!         let page = page?;
//!         println!("the next marker is {}", page.next_page_token());
//!     }
//!     Ok(())
//! }
//! ```

use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

/// Describes a type that can be iterated over asyncly when used with [Paginator].
pub trait PageableResponse {
    type PageItem: Send;

    /// Consumes the page, returning its items.
    fn items(self) -> Vec<Self::PageItem>;

    /// The marker to fetch the next page, empty if this is the last page.
    fn next_page_token(&self) -> String;
}

mod sealed {
    pub trait Paginator {}
    pub trait ItemPaginator {}
}

/// An adapter that converts `Marker`-based list operations into an async
/// iterator over the pages.
pub trait Paginator<PageType, Error>: Send + sealed::Paginator
where
    PageType: PageableResponse,
{
    /// Creates a new [ItemPaginator] from an existing [Paginator].
    fn items(self) -> impl ItemPaginator<PageType, Error>;

    /// Returns the next page. Returns `None` after the last page, or after
    /// the first error.
    fn next(&mut self) -> impl Future<Output = Option<Result<PageType, Error>>> + Send;

    /// Converts the paginator into a [Stream].
    #[cfg(feature = "unstable-stream")]
    fn into_stream(self) -> impl Stream<Item = Result<PageType, Error>> + Unpin;
}

/// An adapter that converts `Marker`-based list operations into an async
/// iterator over the items.
pub trait ItemPaginator<PageType, Error>: Send + sealed::ItemPaginator
where
    PageType: PageableResponse,
{
    /// Returns the next item. Fetches more pages as needed.
    fn next(&mut self) -> impl Future<Output = Option<Result<PageType::PageItem, Error>>> + Send;
}

type ControlFlow = std::ops::ControlFlow<(), String>;

#[pin_project]
struct PaginatorImpl<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>> + Send>>,
}

impl<T, E> PaginatorImpl<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    fn new<F>(seed_token: String, execute: impl Fn(String) -> F + Clone + Send + 'static) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let stream = unfold(ControlFlow::Continue(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    ControlFlow::Continue(token) => token,
                    ControlFlow::Break(_) => return None,
                };
                match execute(token).await {
                    Ok(page_resp) => {
                        let tok = page_resp.next_page_token();
                        let next_state = if tok.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(tok)
                        };
                        Some((Ok(page_resp), next_state))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }
}

impl<T, E> Stream for PaginatorImpl<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

impl<T, E> sealed::Paginator for PaginatorImpl<T, E> {}

impl<T, E> Paginator<T, E> for PaginatorImpl<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    fn items(self) -> impl ItemPaginator<T, E> {
        ItemPaginatorImpl::new(self)
    }

    fn next(&mut self) -> impl Future<Output = Option<Result<T, E>>> + Send {
        StreamExt::next(self)
    }

    #[cfg(feature = "unstable-stream")]
    fn into_stream(self) -> impl Stream<Item = Result<T, E>> + Unpin {
        self
    }
}

struct ItemPaginatorImpl<T, E>
where
    T: PageableResponse,
{
    pages: PaginatorImpl<T, E>,
    current: std::vec::IntoIter<T::PageItem>,
}

impl<T, E> ItemPaginatorImpl<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    fn new(pages: PaginatorImpl<T, E>) -> Self {
        Self {
            pages,
            current: Vec::new().into_iter(),
        }
    }

    async fn next_item(&mut self) -> Option<Result<T::PageItem, E>> {
        loop {
            if let Some(item) = self.current.next() {
                return Some(Ok(item));
            }
            match StreamExt::next(&mut self.pages).await? {
                Ok(page) => self.current = page.items().into_iter(),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

impl<T, E> sealed::ItemPaginator for ItemPaginatorImpl<T, E> where T: PageableResponse {}

impl<T, E> ItemPaginator<T, E> for ItemPaginatorImpl<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    fn next(&mut self) -> impl Future<Output = Option<Result<T::PageItem, E>>> + Send {
        self.next_item()
    }
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::*;

    /// Creates a new [Paginator] given the initial marker and a function to
    /// fetch each page.
    ///
    /// An empty `seed_token` fetches the first page.
    pub fn new_paginator<T, E, F>(
        seed_token: String,
        execute: impl Fn(String) -> F + Clone + Send + 'static,
    ) -> impl Paginator<T, E>
    where
        T: PageableResponse + Send + 'static,
        E: Send + 'static,
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        PaginatorImpl::new(seed_token, execute)
    }
}

#[cfg(test)]
mod tests {
    use super::internal::new_paginator;
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Debug, Default)]
    struct TestRequest {
        marker: String,
    }

    #[derive(Clone, Debug)]
    struct TestResponse {
        items: Vec<PageItem>,
        marker: String,
    }

    #[derive(Clone, Debug, PartialEq)]
    struct PageItem {
        name: String,
    }

    impl PageableResponse for TestResponse {
        type PageItem = PageItem;
        fn items(self) -> Vec<PageItem> {
            self.items
        }
        fn next_page_token(&self) -> String {
            self.marker.clone()
        }
    }

    type TestError = Box<dyn std::error::Error + Send + Sync>;

    #[derive(Clone)]
    struct Client {
        data: Arc<Mutex<VecDeque<TestResponse>>>,
    }

    impl Client {
        async fn list_rpc(&self, _req: TestRequest) -> Result<TestResponse, TestError> {
            let mut responses = self.data.lock().map_err(|e| e.to_string())?;
            responses.pop_front().ok_or_else(|| "no more responses".into())
        }

        fn by_page(&self, req: TestRequest) -> impl Paginator<TestResponse, TestError> + use<> {
            let client = self.clone();
            let tok = req.marker.clone();
            let execute = move |token| {
                let mut req = req.clone();
                let client = client.clone();
                req.marker = token;
                async move { client.list_rpc(req).await }
            };
            new_paginator(tok, execute)
        }
    }

    fn item(name: &str) -> PageItem {
        PageItem {
            name: name.to_string(),
        }
    }

    fn sample_client() -> Client {
        let responses = VecDeque::from([
            TestResponse {
                items: vec![item("item1"), item("item2")],
                marker: "marker1".to_string(),
            },
            TestResponse {
                items: vec![],
                marker: "marker2".to_string(),
            },
            TestResponse {
                items: vec![item("item3")],
                marker: "".to_string(),
            },
        ]);
        Client {
            data: Arc::new(Mutex::new(responses)),
        }
    }

    #[tokio::test]
    async fn paginator_tokens() -> anyhow::Result<()> {
        let responses = VecDeque::from([
            TestResponse {
                items: vec![item("item1"), item("item2")],
                marker: "marker2".to_string(),
            },
            TestResponse {
                items: vec![item("item3")],
                marker: "".to_string(),
            },
        ]);
        let expected_tokens = VecDeque::from(["marker1".to_string(), "marker2".to_string()]);

        let state = Arc::new(Mutex::new(responses));
        let tokens = Arc::new(Mutex::new(expected_tokens));

        let execute = move |token: String| {
            let expected_token = tokens.lock().unwrap().pop_front().unwrap();
            assert_eq!(token, expected_token);
            let resp = state.lock().unwrap().pop_front().unwrap();
            async move { Ok::<TestResponse, TestError>(resp) }
        };

        let mut resps = vec![];
        let mut paginator = new_paginator("marker1".to_string(), execute);
        while let Some(resp) = paginator.next().await {
            resps.push(resp.map_err(|e| anyhow::anyhow!(e))?);
        }
        assert_eq!(resps.len(), 2);
        assert_eq!(resps[0].items, vec![item("item1"), item("item2")]);
        assert_eq!(resps[1].items, vec![item("item3")]);
        Ok(())
    }

    #[tokio::test]
    async fn paginator_as_client() -> anyhow::Result<()> {
        let client = sample_client();
        let mut resps = vec![];
        let mut pages = client.by_page(TestRequest::default());
        while let Some(resp) = pages.next().await {
            resps.push(resp.map_err(|e| anyhow::anyhow!(e))?);
        }
        assert_eq!(resps.len(), 3);
        assert_eq!(resps[0].items[0].name, "item1");
        assert_eq!(resps[0].items[1].name, "item2");
        assert!(resps[1].items.is_empty(), "{resps:?}");
        assert_eq!(resps[2].items[0].name, "item3");
        Ok(())
    }

    #[tokio::test]
    async fn item_paginator() -> anyhow::Result<()> {
        let client = sample_client();
        let mut names = vec![];
        let mut items = client.by_page(TestRequest::default()).items();
        while let Some(item) = items.next().await {
            names.push(item.map_err(|e| anyhow::anyhow!(e))?.name);
        }
        assert_eq!(names, vec!["item1", "item2", "item3"]);
        Ok(())
    }

    #[tokio::test]
    async fn paginator_error() {
        let execute = |_| async { Err::<TestResponse, TestError>("err".into()) };

        let mut paginator = new_paginator(String::new(), execute);
        let mut count = 0;
        while let Some(resp) = paginator.next().await {
            match resp {
                Ok(_) => {
                    panic!("Should not succeed");
                }
                Err(e) => {
                    assert_eq!(e.to_string(), "err");
                    count += 1;
                }
            }
        }
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn item_paginator_error() {
        let pages = Arc::new(Mutex::new(VecDeque::from([Ok::<TestResponse, String>(
            TestResponse {
                items: vec![item("item1")],
                marker: "marker1".to_string(),
            },
        )])));
        let execute = move |_| {
            let next = pages.lock().unwrap().pop_front();
            async move {
                match next {
                    Some(Ok(p)) => Ok(p),
                    Some(Err(e)) => Err(e),
                    None => Err("err".to_string()),
                }
            }
        };
        let mut items = new_paginator(String::new(), execute).items();
        assert_eq!(items.next().await, Some(Ok(item("item1"))));
        assert_eq!(items.next().await, Some(Err("err".to_string())));
        assert_eq!(items.next().await, None);
    }

    #[tokio::test]
    async fn paginator_is_send() -> anyhow::Result<()> {
        let client = sample_client();
        let mut pages = client.by_page(TestRequest::default());
        let count = tokio::spawn(async move {
            let mut count = 0;
            while let Some(p) = pages.next().await {
                if p.is_ok() {
                    count += 1;
                }
            }
            count
        })
        .await?;
        assert_eq!(count, 3);
        Ok(())
    }

    #[cfg(feature = "unstable-stream")]
    #[tokio::test]
    async fn paginator_into_stream() -> anyhow::Result<()> {
        let client = sample_client();
        let pages = client.by_page(TestRequest::default()).into_stream();
        let pages = pages.collect::<Vec<_>>().await;
        assert_eq!(pages.len(), 3);
        Ok(())
    }
}
