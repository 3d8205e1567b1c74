// Copyright 2025 the hexglobe authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types shared across the client, conversion, and presentation layers.

use thiserror::Error;

/// Errors produced by the hexbot pipeline.
///
/// None of these are retryable: bad arguments and malformed colors are
/// caller mistakes, and remote failures are surfaced unchanged so the
/// caller can decide what to do with them.
#[derive(Debug, Error)]
pub enum Error {
    /// A value had the wrong type or was missing entirely.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A count fell outside the accepted range.
    #[error("value {value} out of range, must be between {min} and {max}")]
    OutOfRange { value: i64, min: u32, max: u32 },

    /// A color string did not match the `#RRGGBB` pattern.
    #[error("invalid hex color: {0:?}")]
    InvalidColor(String),

    /// Network or remote service failure, passed through unchanged.
    #[error("remote error: {0}")]
    Remote(#[from] reqwest::Error),
}

impl Error {
    /// Convenience constructor for invalid-argument errors.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
