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

//! Client library for turning hexbot colors into globe-ready entities.
//!
//! The library is layered so each piece can be used on its own:
//!
//! - **Client layer**: HTTP access to the hexbot color service
//!   ([`HexBotClient`], with the [`ColorSource`] trait as the seam for
//!   alternative transports)
//! - **Conversion layer**: pure hex-color parsing and color-to-coordinate
//!   mapping ([`HexColor`], [`GeoCoordinate`])
//! - **Aggregation layer**: fetches a batch and converts it all-or-nothing
//!   ([`GeoColorController`])
//! - **Presentation layer**: named, filterable entity collection with
//!   lifecycle events ([`ColorsDataSource`])
//!
//! # Quick Start
//!
//! ```no_run
//! use hexbot_client::{ColorsDataSource, GeoColorController, HexBotClient, DEFAULT_SERIES};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let controller = GeoColorController::new(HexBotClient::new());
//!     let pairs = controller.get_geo_colors(Some(100)).await?;
//!
//!     let mut source = ColorsDataSource::new("hexbot colors");
//!     source.load(&pairs);
//!     source.set_active_series(DEFAULT_SERIES);
//!
//!     for entity in source.entities() {
//!         println!("{}", entity.id);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Using Individual Layers
//!
//! The conversion layer is pure and needs no runtime:
//!
//! ```
//! use hexbot_client::{GeoCoordinate, HexColor};
//!
//! let color = HexColor::parse("#FF0A10")?;
//! let coord = GeoCoordinate::from_rgb(color.rgb());
//! assert!(coord.longitude > 179.0);
//! # Ok::<(), hexbot_client::Error>(())
//! ```
//!
//! The aggregation layer accepts any [`ColorSource`], so tests can run
//! against canned data instead of the network.

pub mod client;
pub mod color;
pub mod controller;
pub mod datasource;
pub mod error;
pub mod geo;

pub use client::{ColorRecord, ColorSource, HexBotClient, parse_count, COUNT_MAX, COUNT_MIN, DEFAULT_ENDPOINT};
pub use color::{HexColor, Rgb};
pub use controller::{GeoColor, GeoColorController, DEFAULT_COUNT};
pub use datasource::{ColorsDataSource, DataSourceEvent, LineEntity, Position, DEFAULT_SERIES};
pub use error::Error;
pub use geo::{GeoCoordinate, MAX_ALTITUDE};
