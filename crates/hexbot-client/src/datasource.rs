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

//! Presentation data source.
//!
//! Turns geo-color pairs into named, filterable line entities and emits
//! lifecycle events over a broadcast channel so a host viewer can react
//! to loads without the source knowing anything about rendering.

use log::debug;
use tokio::sync::broadcast;

use crate::color::HexColor;
use crate::controller::GeoColor;
use crate::error::Error;

/// Series name assigned to every entity produced by a load.
pub const DEFAULT_SERIES: &str = "defaultSeries";

const EVENT_CAPACITY: usize = 64;

/// A single 3D anchor point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub longitude: f64,
    pub latitude: f64,
    pub height: f64,
}

/// A vertical color bar from the surface up to its altitude.
#[derive(Debug, Clone, PartialEq)]
pub struct LineEntity {
    /// Human-readable identifier derived from the source color and position.
    pub id: String,
    /// Whether the entity is currently visible.
    pub show: bool,
    /// Series this entity belongs to.
    pub series_name: String,
    /// Source color, also used as the line material.
    pub color: HexColor,
    /// Surface anchor and altitude anchor, in that order.
    pub positions: [Position; 2],
    /// Line width in pixels.
    pub width: f64,
}

/// Lifecycle events raised by [`ColorsDataSource`].
#[derive(Debug, Clone, PartialEq)]
pub enum DataSourceEvent {
    /// Loading started (`true`) or finished (`false`).
    LoadingChanged(bool),
    /// The entity collection changed.
    Changed,
    /// Something went wrong while processing data.
    Error(String),
}

/// Named, filterable collection of line entities.
///
/// Mutations happen only through [`load`](Self::load) and
/// [`set_active_series`](Self::set_active_series); observers receive one
/// batched notification cycle per load rather than one event per entity.
#[derive(Debug)]
pub struct ColorsDataSource {
    name: String,
    entities: Vec<LineEntity>,
    series_names: Vec<String>,
    series_to_display: Option<String>,
    height_scale: f64,
    line_width: f64,
    is_loading: bool,
    events: broadcast::Sender<DataSourceEvent>,
}

impl ColorsDataSource {
    /// Create an empty data source with the given display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            name: name.into(),
            entities: Vec::new(),
            series_names: Vec::new(),
            series_to_display: None,
            height_scale: 1.0,
            line_width: 5.0,
            is_loading: false,
            events,
        }
    }

    /// Display name of this source.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current entities, in load order.
    #[must_use]
    pub fn entities(&self) -> &[LineEntity] {
        &self.entities
    }

    /// Names of the series produced by the last load.
    #[must_use]
    pub fn series_names(&self) -> &[String] {
        &self.series_names
    }

    /// Currently displayed series, if one has been selected.
    #[must_use]
    pub fn series_to_display(&self) -> Option<&str> {
        self.series_to_display.as_deref()
    }

    /// Whether a load is in progress.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Subscribe to lifecycle events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<DataSourceEvent> {
        self.events.subscribe()
    }

    /// Set the multiplier applied to each altitude anchor.
    ///
    /// Fails with [`Error::InvalidArgument`] before any mutation if the
    /// scale is not strictly positive.
    pub fn set_height_scale(&mut self, scale: f64) -> Result<(), Error> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::invalid_argument(format!(
                "height scale must be greater than 0, got {scale}"
            )));
        }
        self.height_scale = scale;
        Ok(())
    }

    /// Set the line width used for entities built by future loads.
    pub fn set_line_width(&mut self, width: f64) -> Result<(), Error> {
        if !width.is_finite() || width <= 0.0 {
            return Err(Error::invalid_argument(format!(
                "line width must be greater than 0, got {width}"
            )));
        }
        self.line_width = width;
        Ok(())
    }

    /// Load a batch of geo-color pairs, replacing any existing entities.
    ///
    /// Builds one hidden line per pair, from the surface point up to the
    /// scaled altitude, tagged with [`DEFAULT_SERIES`]. Pairs whose
    /// altitude is exactly zero are skipped; the order of the rest is
    /// preserved. Observers see exactly one `Changed` event per load.
    pub fn load(&mut self, pairs: &[GeoColor]) {
        self.set_loading(true);

        self.entities.clear();
        self.series_names.clear();
        self.series_to_display = None;

        self.series_names.push(DEFAULT_SERIES.to_owned());

        for pair in pairs {
            let coord = pair.coordinate;

            // A zero-height line has nothing to draw.
            if coord.altitude == 0.0 {
                continue;
            }

            let height = coord.altitude * self.height_scale;
            let surface = Position {
                longitude: coord.longitude,
                latitude: coord.latitude,
                height: 0.0,
            };
            let top = Position {
                longitude: coord.longitude,
                latitude: coord.latitude,
                height,
            };

            self.entities.push(LineEntity {
                id: format!(
                    "color: {}, [{:.2}, {:.2}], {} km",
                    pair.color,
                    coord.latitude,
                    coord.longitude,
                    (height / 1000.0).round()
                ),
                show: false,
                series_name: DEFAULT_SERIES.to_owned(),
                color: pair.color.clone(),
                positions: [surface, top],
                width: self.line_width,
            });
        }

        debug!(
            "Loaded {} entities from {} pairs into '{}'",
            self.entities.len(),
            pairs.len(),
            self.name
        );

        self.emit(DataSourceEvent::Changed);
        self.set_loading(false);
    }

    /// Show only the entities tagged with `name`.
    ///
    /// This is the sole filtering mechanism: exactly one series is
    /// visible at a time. Idempotent.
    pub fn set_active_series(&mut self, name: &str) {
        self.series_to_display = Some(name.to_owned());

        for entity in &mut self.entities {
            entity.show = entity.series_name == name;
        }

        self.emit(DataSourceEvent::Changed);
    }

    /// Report a processing failure to observers.
    pub fn report_error(&mut self, message: impl Into<String>) {
        self.set_loading(false);
        self.emit(DataSourceEvent::Error(message.into()));
    }

    fn set_loading(&mut self, is_loading: bool) {
        if self.is_loading != is_loading {
            self.is_loading = is_loading;
            self.emit(DataSourceEvent::LoadingChanged(is_loading));
        }
    }

    fn emit(&self, event: DataSourceEvent) {
        // No subscribers is fine; events are best-effort notifications.
        let _ = self.events.send(event);
    }
}
