use serde::{Deserialize, Serialize};

/// Pixel position relative to the browser viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Vector from `origin` to `self`.
    pub fn delta_from(self, origin: ScreenPoint) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lng: f64,
}

impl GeoCoordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl std::fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lng)
    }
}

/// A point on the map provider's flattened world plane.
/// X grows eastward, Y grows southward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

/// Bounding box of a DOM element, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewportRect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Visible geographic area of the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub north_east: GeoCoordinate,
    pub south_west: GeoCoordinate,
}

impl GeoBounds {
    pub fn new(north_east: GeoCoordinate, south_west: GeoCoordinate) -> Self {
        Self {
            north_east,
            south_west,
        }
    }

    /// Whether the bounds span the antimeridian (west edge east of the east edge).
    pub fn crosses_antimeridian(&self) -> bool {
        self.south_west.lng > self.north_east.lng
    }

    pub fn contains(&self, at: GeoCoordinate) -> bool {
        let lat_ok = at.lat >= self.south_west.lat && at.lat <= self.north_east.lat;
        let lng_ok = if self.crosses_antimeridian() {
            at.lng >= self.south_west.lng || at.lng <= self.north_east.lng
        } else {
            at.lng >= self.south_west.lng && at.lng <= self.north_east.lng
        };
        lat_ok && lng_ok
    }
}

/// Rendered size of the dart element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DartSize {
    pub width: f64,
    pub height: f64,
}

impl DartSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Half of the larger side; the clearance kept from the field edge.
    pub fn half_extent(&self) -> f64 {
        self.width.max(self.height) / 2.0
    }

    pub fn center_of(&self, top_left: ScreenPoint) -> ScreenPoint {
        top_left.offset(self.width / 2.0, self.height / 2.0)
    }

    pub fn top_left_of(&self, center: ScreenPoint) -> ScreenPoint {
        center.offset(-self.width / 2.0, -self.height / 2.0)
    }
}

/// Circular region the dart must stay inside while dragged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayField {
    pub center: ScreenPoint,
    pub radius: f64,
}

impl PlayField {
    /// Derive the field from the map container: centered in the box, with a
    /// radius of half its width.
    pub fn from_rect(rect: &ViewportRect) -> Self {
        Self {
            center: rect.center(),
            radius: rect.width / 2.0,
        }
    }
}

/// Outcome of a single throw. `coordinate` is only present on a hit.
#[derive(Debug, Clone, PartialEq)]
pub struct ThrowResult {
    hit: bool,
    coordinate: Option<GeoCoordinate>,
    place_name: Option<String>,
}

impl ThrowResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            coordinate: None,
            place_name: None,
        }
    }

    pub fn hit(coordinate: GeoCoordinate) -> Self {
        Self {
            hit: true,
            coordinate: Some(coordinate),
            place_name: None,
        }
    }

    /// Attach the resolved place name. Ignored on a miss.
    pub fn with_place_name(mut self, name: impl Into<String>) -> Self {
        if self.hit {
            self.place_name = Some(name.into());
        }
        self
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    pub fn coordinate(&self) -> Option<GeoCoordinate> {
        self.coordinate
    }

    pub fn place_name(&self) -> Option<&str> {
        self.place_name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_coordinate_display() {
        let at = GeoCoordinate::new(35.6895, -139.25);
        assert_eq!(at.to_string(), "35.689500,-139.250000");
    }

    fn japan() -> GeoBounds {
        GeoBounds::new(GeoCoordinate::new(46.0, 150.0), GeoCoordinate::new(24.0, 122.0))
    }

    #[test]
    fn test_bounds_contains_inside() {
        assert!(japan().contains(GeoCoordinate::new(35.6895, 139.6917)));
    }

    #[test]
    fn test_bounds_excludes_outside() {
        assert!(!japan().contains(GeoCoordinate::new(10.0, 139.0)));
        assert!(!japan().contains(GeoCoordinate::new(35.0, 160.0)));
    }

    #[test]
    fn test_bounds_across_antimeridian() {
        let pacific = GeoBounds::new(GeoCoordinate::new(10.0, -170.0), GeoCoordinate::new(-10.0, 170.0));
        assert!(pacific.crosses_antimeridian());
        assert!(pacific.contains(GeoCoordinate::new(0.0, 179.0)));
        assert!(pacific.contains(GeoCoordinate::new(0.0, -175.0)));
        assert!(!pacific.contains(GeoCoordinate::new(0.0, 0.0)));
    }

    #[test]
    fn test_play_field_from_rect() {
        let field = PlayField::from_rect(&ViewportRect::new(100.0, 50.0, 400.0, 400.0));
        assert_eq!(field.center, ScreenPoint::new(300.0, 250.0));
        assert!((field.radius - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_dart_half_extent_uses_larger_side() {
        assert!((DartSize::new(40.0, 60.0).half_extent() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_miss_has_no_coordinate_or_name() {
        let miss = ThrowResult::miss().with_place_name("Tokyo");
        assert!(!miss.is_hit());
        assert!(miss.coordinate().is_none());
        assert!(miss.place_name().is_none());
    }

    #[test]
    fn test_hit_carries_coordinate() {
        let hit = ThrowResult::hit(GeoCoordinate::new(35.0, 139.0)).with_place_name("Tokyo");
        assert!(hit.is_hit());
        assert_eq!(hit.coordinate(), Some(GeoCoordinate::new(35.0, 139.0)));
        assert_eq!(hit.place_name(), Some("Tokyo"));
    }
}
