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

//! Storage Gateway client helpers.
//!
//! This crate contains a number of types and functions used in the
//! implementation of the Storage Gateway client library for Rust.
//!
//! <div class="warning">
//! All the types, traits, and functions in modules marked as hidden, or in
//! <code>internal</code> modules, are <b>not</b> intended for general use.
//! They will remain unstable for the foreseeable future.
//! </div>

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping service operations.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the client.
pub mod error;

/// Converts `Marker`-based list operations into async iterators.
pub mod paginator;

pub mod client_builder;
pub mod options;
pub mod response;

#[doc(hidden)]
pub mod unimplemented;
