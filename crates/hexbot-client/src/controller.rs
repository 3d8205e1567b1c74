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

//! Aggregation of fetched colors into geo-color pairs.

use log::info;

use crate::client::{ColorSource, COUNT_MAX, COUNT_MIN};
use crate::color::HexColor;
use crate::error::Error;
use crate::geo::GeoCoordinate;

/// Count used when the caller does not supply one.
pub const DEFAULT_COUNT: u32 = 1000;

/// A color paired with its derived coordinate.
///
/// Pairs are immutable and rebuilt wholesale on every request; there is
/// no incremental update.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoColor {
    pub color: HexColor,
    pub coordinate: GeoCoordinate,
}

/// Orchestrates the color source and the coordinate mapping.
#[derive(Debug)]
pub struct GeoColorController<S> {
    source: S,
}

impl<S: ColorSource> GeoColorController<S> {
    /// Wrap a color source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch colors and convert each one to a geo-color pair.
    ///
    /// `None` and `Some(0)` fall back to [`DEFAULT_COUNT`]. Every call
    /// issues a fresh fetch; nothing is cached. A single malformed color
    /// aborts the whole batch, so the result is all-or-nothing and the
    /// output order matches the fetched order.
    pub async fn get_geo_colors(&self, count: Option<u32>) -> Result<Vec<GeoColor>, Error> {
        let count = match count {
            None | Some(0) => DEFAULT_COUNT,
            Some(n) => n,
        };

        if !(COUNT_MIN..=COUNT_MAX).contains(&count) {
            return Err(Error::OutOfRange {
                value: i64::from(count),
                min: COUNT_MIN,
                max: COUNT_MAX,
            });
        }

        let records = self.source.fetch_colors(count).await?;

        let pairs = records
            .into_iter()
            .map(|record| {
                let color = HexColor::parse(&record.value)?;
                let coordinate = GeoCoordinate::from_rgb(color.rgb());
                Ok(GeoColor { color, coordinate })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        info!("Converted {} colors to geo coordinates", pairs.len());
        Ok(pairs)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::client::ColorRecord;

    /// Returns canned records and remembers the requested count.
    struct MockSource {
        values: Vec<&'static str>,
        requested: Mutex<Vec<u32>>,
    }

    impl MockSource {
        fn new(values: Vec<&'static str>) -> Self {
            Self {
                values,
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    impl ColorSource for MockSource {
        async fn fetch_colors(&self, count: u32) -> Result<Vec<ColorRecord>, Error> {
            self.requested.lock().unwrap().push(count);
            Ok(self
                .values
                .iter()
                .map(|v| ColorRecord {
                    value: (*v).to_owned(),
                })
                .collect())
        }
    }

    const TEN_COLORS: [&str; 10] = [
        "#8CD7F3", "#1DF195", "#64BF06", "#7ED6DC", "#CE5220", "#C6736D", "#16E2AF", "#DDD5EF",
        "#FFC427", "#0069C6",
    ];

    #[tokio::test]
    async fn test_default_count_requests_one_thousand() {
        let source = MockSource::new(TEN_COLORS.to_vec());
        let controller = GeoColorController::new(source);

        controller.get_geo_colors(None).await.unwrap();
        assert_eq!(*controller.source.requested.lock().unwrap(), vec![1000]);
    }

    #[tokio::test]
    async fn test_zero_count_falls_back_to_default() {
        let source = MockSource::new(TEN_COLORS.to_vec());
        let controller = GeoColorController::new(source);

        controller.get_geo_colors(Some(0)).await.unwrap();
        assert_eq!(*controller.source.requested.lock().unwrap(), vec![1000]);
    }

    #[tokio::test]
    async fn test_pairs_preserve_order_and_hex_text() {
        let source = MockSource::new(TEN_COLORS.to_vec());
        let controller = GeoColorController::new(source);

        let pairs = controller.get_geo_colors(Some(10)).await.unwrap();
        assert_eq!(pairs.len(), 10);
        for (pair, expected) in pairs.iter().zip(TEN_COLORS) {
            assert_eq!(pair.color.as_str(), expected);
        }
    }

    #[tokio::test]
    async fn test_out_of_range_count_rejected() {
        let source = MockSource::new(TEN_COLORS.to_vec());
        let controller = GeoColorController::new(source);

        let err = controller.get_geo_colors(Some(1001)).await.unwrap_err();
        assert!(matches!(err, Error::OutOfRange { value: 1001, .. }));
        // The source was never consulted.
        assert!(controller.source.requested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_color_aborts_whole_batch() {
        let source = MockSource::new(vec!["#8CD7F3", "not-a-color", "#0069C6"]);
        let controller = GeoColorController::new(source);

        let err = controller.get_geo_colors(Some(3)).await.unwrap_err();
        assert!(matches!(err, Error::InvalidColor(_)));
    }

    #[tokio::test]
    async fn test_no_caching_between_calls() {
        let source = MockSource::new(TEN_COLORS.to_vec());
        let controller = GeoColorController::new(source);

        controller.get_geo_colors(Some(10)).await.unwrap();
        controller.get_geo_colors(Some(10)).await.unwrap();
        assert_eq!(*controller.source.requested.lock().unwrap(), vec![10, 10]);
    }

    #[tokio::test]
    async fn test_coordinates_match_channel_mapping() {
        let source = MockSource::new(vec!["#FF0000"]);
        let controller = GeoColorController::new(source);

        let pairs = controller.get_geo_colors(Some(1)).await.unwrap();
        assert_eq!(pairs[0].coordinate.longitude, 180.0);
        assert_eq!(pairs[0].coordinate.latitude, -90.0);
        assert_eq!(pairs[0].coordinate.altitude, 0.0);
    }
}
