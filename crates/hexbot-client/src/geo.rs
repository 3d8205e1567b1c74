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

//! Color-to-coordinate mapping.
//!
//! Each color channel is linearly interpolated onto one spherical axis:
//! red to longitude, green to latitude, blue to altitude. The result is a
//! synthetic coordinate for visualization, not a real-world location.

use crate::color::Rgb;
use crate::error::Error;

/// Altitude ceiling in kilometers, roughly the edge of the exosphere.
/// A blue channel of 255 maps to exactly this value.
pub const MAX_ALTITUDE: f64 = 100_000.0;

/// A derived (longitude, latitude, altitude) triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    /// Longitude in degrees, in [-180, 180].
    pub longitude: f64,
    /// Latitude in degrees, in [-90, 90].
    pub latitude: f64,
    /// Altitude in kilometers, in [0, MAX_ALTITUDE].
    pub altitude: f64,
}

impl GeoCoordinate {
    /// Map a 3-element component slice onto a coordinate.
    ///
    /// Components must be finite values in [0, 255]. The channel order is
    /// fixed: component 0 drives longitude, 1 latitude, 2 altitude.
    /// (0, 0, 0) maps to (-180, -90, 0) and (255, 255, 255) to
    /// (180, 90, [`MAX_ALTITUDE`]).
    pub fn from_components(components: &[f64]) -> Result<Self, Error> {
        if components.len() != 3 {
            return Err(Error::invalid_argument(format!(
                "expected 3 color components, got {}",
                components.len()
            )));
        }

        for &c in components {
            if !c.is_finite() || !(0.0..=255.0).contains(&c) {
                return Err(Error::invalid_argument(format!(
                    "color component {c} outside 0-255"
                )));
            }
        }

        Ok(Self {
            longitude: (components[0] / 255.0) * 360.0 - 180.0,
            latitude: (components[1] / 255.0) * 180.0 - 90.0,
            altitude: (components[2] / 255.0) * MAX_ALTITUDE,
        })
    }

    /// Map a decoded RGB triple onto a coordinate.
    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            longitude: (f64::from(rgb.r) / 255.0) * 360.0 - 180.0,
            latitude: (f64::from(rgb.g) / 255.0) * 180.0 - 90.0,
            altitude: (f64::from(rgb.b) / 255.0) * MAX_ALTITUDE,
        }
    }
}
