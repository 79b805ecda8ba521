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

use std::time::Duration;
use storagegateway_gax::options::internal::{RequestBuilder, set_default_idempotency};
use storagegateway_gax::options::{RequestOptions, RequestOptionsBuilder};

#[derive(Default)]
struct TestBuilder {
    options: RequestOptions,
}

impl RequestBuilder for TestBuilder {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

#[test]
fn builder_setters() {
    let builder = TestBuilder::default()
        .with_user_agent("myapp/4.5.6")
        .with_attempt_timeout(Duration::from_secs(123))
        .with_idempotency(true);
    assert_eq!(builder.options.user_agent().as_deref(), Some("myapp/4.5.6"));
    assert_eq!(
        *builder.options.attempt_timeout(),
        Some(Duration::from_secs(123))
    );
    assert_eq!(builder.options.idempotent(), Some(true));
}

#[test]
fn default_idempotency_does_not_override() {
    let options = set_default_idempotency(RequestOptions::default(), true);
    assert_eq!(options.idempotent(), Some(true));

    let mut options = RequestOptions::default();
    options.set_idempotency(false);
    let options = set_default_idempotency(options, true);
    assert_eq!(options.idempotent(), Some(false));
}
