//! The seam between game logic and the third-party map widget.
//!
//! Geometry, drag handling and result presentation only see these traits, so
//! the real widget can be swapped for a stub in tests.

use crate::error::GeocodeError;
use crate::geocode::AddressComponent;
use crate::models::{GeoBounds, GeoCoordinate, ViewportRect, WorldPoint};

/// Conversion between geographic coordinates and the provider's world plane.
pub trait Projection {
    fn geo_to_world(&self, at: GeoCoordinate) -> WorldPoint;
    fn world_to_geo(&self, point: WorldPoint) -> GeoCoordinate;

    /// Horizontal extent of the world plane. Longitude wraps every
    /// `world_width` units of x.
    fn world_width(&self) -> f64;
}

/// Snapshot of what the map currently shows.
///
/// `bounds` and `projection` are `None` until the map has finished its first
/// render.
pub struct MapViewport {
    pub rect: ViewportRect,
    pub bounds: Option<GeoBounds>,
    pub projection: Option<Box<dyn Projection>>,
}

impl MapViewport {
    pub fn is_ready(&self) -> bool {
        self.bounds.is_some() && self.projection.is_some() && !self.rect.is_empty()
    }
}

impl std::fmt::Debug for MapViewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapViewport")
            .field("rect", &self.rect)
            .field("bounds", &self.bounds)
            .field("has_projection", &self.projection.is_some())
            .finish()
    }
}

/// Services the game needs from a map widget.
#[allow(async_fn_in_trait)]
pub trait MapProvider {
    /// Handle to a placed marker; passed back to `remove_marker`.
    type Marker;

    /// Current viewport, or `None` if the map has not been created.
    fn viewport(&self) -> Option<MapViewport>;

    /// Address components for the best match at `at`, most specific first.
    /// An empty list means the provider found nothing there.
    async fn reverse_geocode(&self, at: GeoCoordinate)
        -> Result<Vec<AddressComponent>, GeocodeError>;

    fn place_marker(&self, at: GeoCoordinate, title: &str) -> Self::Marker;

    fn remove_marker(&self, marker: Self::Marker);
}

#[cfg(test)]
pub(crate) mod stub {
    //! In-memory provider used by the session and presenter tests.

    use std::cell::{Cell, RefCell};

    use super::*;

    /// Linear projection: longitude maps to x, latitude to -y. Longitude wraps
    /// into [-180, 180) on the way back.
    pub struct LinearProjection;

    impl Projection for LinearProjection {
        fn geo_to_world(&self, at: GeoCoordinate) -> WorldPoint {
            WorldPoint {
                x: at.lng,
                y: -at.lat,
            }
        }

        fn world_to_geo(&self, point: WorldPoint) -> GeoCoordinate {
            let lng = (point.x + 180.0).rem_euclid(360.0) - 180.0;
            GeoCoordinate::new(-point.y, lng)
        }

        fn world_width(&self) -> f64 {
            360.0
        }
    }

    pub enum StubGeocode {
        Components(Vec<AddressComponent>),
        Fail,
    }

    pub struct StubProvider {
        pub rect: ViewportRect,
        pub bounds: GeoBounds,
        pub initialized: bool,
        pub geocode: StubGeocode,
        pub geocode_calls: Cell<usize>,
        pub markers: RefCell<Vec<(u32, GeoCoordinate, String)>>,
        next_marker: Cell<u32>,
    }

    impl StubProvider {
        pub fn new(rect: ViewportRect, bounds: GeoBounds, geocode: StubGeocode) -> Self {
            Self {
                rect,
                bounds,
                initialized: true,
                geocode,
                geocode_calls: Cell::new(0),
                markers: RefCell::new(Vec::new()),
                next_marker: Cell::new(0),
            }
        }

        pub fn marker_count(&self) -> usize {
            self.markers.borrow().len()
        }
    }

    impl MapProvider for StubProvider {
        type Marker = u32;

        fn viewport(&self) -> Option<MapViewport> {
            if !self.initialized {
                return None;
            }
            Some(MapViewport {
                rect: self.rect,
                bounds: Some(self.bounds),
                projection: Some(Box::new(LinearProjection)),
            })
        }

        async fn reverse_geocode(
            &self,
            _at: GeoCoordinate,
        ) -> Result<Vec<AddressComponent>, GeocodeError> {
            self.geocode_calls.set(self.geocode_calls.get() + 1);
            match &self.geocode {
                StubGeocode::Components(c) => Ok(c.clone()),
                StubGeocode::Fail => Err(GeocodeError::Request("connection refused".into())),
            }
        }

        fn place_marker(&self, at: GeoCoordinate, title: &str) -> u32 {
            let id = self.next_marker.get();
            self.next_marker.set(id + 1);
            self.markers.borrow_mut().push((id, at, title.to_string()));
            id
        }

        fn remove_marker(&self, marker: u32) {
            self.markers.borrow_mut().retain(|(id, _, _)| *id != marker);
        }
    }
}
