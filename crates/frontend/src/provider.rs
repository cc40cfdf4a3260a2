use dart_atlas_shared::error::GeocodeError;
use dart_atlas_shared::geocode::AddressComponent;
use dart_atlas_shared::models::{GeoBounds, GeoCoordinate, WorldPoint};
use dart_atlas_shared::provider::{MapProvider, MapViewport, Projection};
use wasm_bindgen::JsValue;

use crate::api;
use crate::coords;
use crate::maps::{self, GoogleMap, LatLng, MapProjection, Marker, Point};

pub const MAP_ELEMENT_ID: &str = "dart-map";

/// Width of the Google Maps world plane at zoom 0, the scale `Projection` works in.
const WORLD_WIDTH: f64 = 256.0;

/// `MapProvider` backed by a live Google Maps instance.
#[derive(Debug, Clone)]
pub struct GoogleMapProvider {
    map: GoogleMap,
    api_key: String,
    language: String,
}

impl GoogleMapProvider {
    pub fn new(map: GoogleMap, api_key: String, language: String) -> Self {
        Self {
            map,
            api_key,
            language,
        }
    }
}

struct GoogleProjection(MapProjection);

impl Projection for GoogleProjection {
    fn geo_to_world(&self, at: GeoCoordinate) -> WorldPoint {
        let p = self.0.from_lat_lng_to_point(&LatLng::new(at.lat, at.lng));
        WorldPoint { x: p.x(), y: p.y() }
    }

    fn world_to_geo(&self, point: WorldPoint) -> GeoCoordinate {
        let at = self.0.from_point_to_lat_lng(&Point::new(point.x, point.y));
        GeoCoordinate::from(&at)
    }

    fn world_width(&self) -> f64 {
        WORLD_WIDTH
    }
}

impl MapProvider for GoogleMapProvider {
    type Marker = Marker;

    fn viewport(&self) -> Option<MapViewport> {
        // Bounds and projection are read fresh each time so resizes are picked up
        let rect = coords::element_rect(MAP_ELEMENT_ID)?;
        let bounds = self.map.get_bounds().map(|b| {
            GeoBounds::new(
                GeoCoordinate::from(&b.get_north_east()),
                GeoCoordinate::from(&b.get_south_west()),
            )
        });
        let projection = self
            .map
            .get_projection()
            .map(|p| Box::new(GoogleProjection(p)) as Box<dyn Projection>);
        Some(MapViewport {
            rect,
            bounds,
            projection,
        })
    }

    async fn reverse_geocode(&self, at: GeoCoordinate) -> Result<Vec<AddressComponent>, GeocodeError> {
        api::reverse_geocode(at, &self.api_key, &self.language).await
    }

    fn place_marker(&self, at: GeoCoordinate, title: &str) -> Marker {
        maps::new_marker(&self.map, at, title)
    }

    fn remove_marker(&self, marker: Marker) {
        marker.set_map(&JsValue::NULL);
    }
}
