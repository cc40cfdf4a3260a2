//! Screen/world/geographic conversions and play-field clamping.
//!
//! Screen coordinates are viewport pixels with Y growing downward. World
//! coordinates come from the map provider's projection, also Y-down.

use crate::models::{GeoCoordinate, PlayField, ScreenPoint, WorldPoint};
use crate::provider::MapViewport;

/// Euclidean distance between two screen points.
pub fn distance(a: ScreenPoint, b: ScreenPoint) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Keep `point` within `field`, leaving `half_size` of clearance from the edge.
///
/// Points further than `field.radius - half_size` from the center are moved
/// onto that circle along the ray from the center. Points inside are returned
/// unchanged.
pub fn clamp_to_circle(point: ScreenPoint, field: &PlayField, half_size: f64) -> ScreenPoint {
    let limit = field.radius - half_size;
    if limit <= 0.0 {
        return field.center;
    }

    let dist = distance(field.center, point);
    if dist <= limit {
        return point;
    }

    let angle = (point.y - field.center.y).atan2(point.x - field.center.x);
    ScreenPoint::new(
        field.center.x + limit * angle.cos(),
        field.center.y + limit * angle.sin(),
    )
}

/// Convert a viewport pixel position to a geographic coordinate.
///
/// Interpolation happens on the provider's world plane rather than directly on
/// lat/lng, so the map's projection distortion is respected. Bounds that
/// cross the antimeridian are unwrapped by one world width. Returns `None`
/// while the map has no projection or bounds yet, or when the map element has
/// no area.
pub fn screen_to_geo(point: ScreenPoint, viewport: &MapViewport) -> Option<GeoCoordinate> {
    let projection = viewport.projection.as_deref()?;
    let bounds = viewport.bounds?;
    let rect = viewport.rect;
    if rect.is_empty() {
        return None;
    }

    let frac_x = (point.x - rect.left) / rect.width;
    let frac_y = (point.y - rect.top) / rect.height;

    let top_right = projection.geo_to_world(bounds.north_east);
    let bottom_left = projection.geo_to_world(bounds.south_west);
    let mut world_width = top_right.x - bottom_left.x;
    if world_width < 0.0 {
        world_width += projection.world_width();
    }
    let world_height = bottom_left.y - top_right.y;

    let world = WorldPoint {
        x: bottom_left.x + frac_x * world_width,
        y: top_right.y + frac_y * world_height,
    };
    Some(projection.world_to_geo(world))
}

/// Resolve where a dart centered at `point` lands. `None` is a miss: either the
/// map cannot resolve the point or it falls outside the visible bounds.
pub fn landing_coordinate(point: ScreenPoint, viewport: &MapViewport) -> Option<GeoCoordinate> {
    let at = screen_to_geo(point, viewport)?;
    let bounds = viewport.bounds?;
    bounds.contains(at).then_some(at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GeoBounds, ViewportRect};
    use crate::provider::stub::LinearProjection;

    fn field() -> PlayField {
        PlayField {
            center: ScreenPoint::new(200.0, 200.0),
            radius: 150.0,
        }
    }

    fn viewport() -> MapViewport {
        MapViewport {
            rect: ViewportRect::new(50.0, 50.0, 300.0, 300.0),
            bounds: Some(GeoBounds::new(
                GeoCoordinate::new(46.0, 150.0),
                GeoCoordinate::new(24.0, 122.0),
            )),
            projection: Some(Box::new(LinearProjection)),
        }
    }

    #[test]
    fn test_distance_diagonal() {
        let a = ScreenPoint::new(0.0, 0.0);
        let b = ScreenPoint::new(3.0, 4.0);
        assert!((distance(a, b) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamp_inside_unchanged() {
        let p = ScreenPoint::new(250.0, 180.0);
        assert_eq!(clamp_to_circle(p, &field(), 20.0), p);
    }

    #[test]
    fn test_clamp_center_unchanged() {
        let f = field();
        assert_eq!(clamp_to_circle(f.center, &f, 20.0), f.center);
    }

    #[test]
    fn test_clamp_outside_lands_on_inset_circle() {
        let f = field();
        let half = 20.0;
        for &(x, y) in &[
            (600.0, 200.0),
            (200.0, -300.0),
            (-10.0, -10.0),
            (340.0, 340.0),
            (199.0, 999.0),
        ] {
            let p = ScreenPoint::new(x, y);
            let clamped = clamp_to_circle(p, &f, half);
            let d = distance(f.center, clamped);
            assert!((d - (f.radius - half)).abs() < 1e-9, "{p:?} -> {clamped:?}");

            // Same direction from center as the input point
            let (ox, oy) = p.delta_from(f.center);
            let (cx, cy) = clamped.delta_from(f.center);
            let cross = ox * cy - oy * cx;
            let dot = ox * cx + oy * cy;
            assert!(cross.abs() < 1e-6);
            assert!(dot > 0.0);
        }
    }

    #[test]
    fn test_clamp_boundary_point_unchanged() {
        let f = field();
        let p = ScreenPoint::new(f.center.x + 130.0, f.center.y);
        assert_eq!(clamp_to_circle(p, &f, 20.0), p);
    }

    #[test]
    fn test_clamp_dart_larger_than_field_snaps_to_center() {
        let f = field();
        let clamped = clamp_to_circle(ScreenPoint::new(10.0, 10.0), &f, 200.0);
        assert_eq!(clamped, f.center);
    }

    #[test]
    fn test_screen_to_geo_center_is_bounds_midpoint() {
        let vp = viewport();
        let at = screen_to_geo(vp.rect.center(), &vp).unwrap();
        assert!((at.lat - 35.0).abs() < 1e-9);
        assert!((at.lng - 136.0).abs() < 1e-9);
    }

    #[test]
    fn test_screen_to_geo_corners() {
        let vp = viewport();
        let top_left = screen_to_geo(ScreenPoint::new(50.0, 50.0), &vp).unwrap();
        assert!((top_left.lat - 46.0).abs() < 1e-9);
        assert!((top_left.lng - 122.0).abs() < 1e-9);

        let bottom_right = screen_to_geo(ScreenPoint::new(350.0, 350.0), &vp).unwrap();
        assert!((bottom_right.lat - 24.0).abs() < 1e-9);
        assert!((bottom_right.lng - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_screen_to_geo_without_projection() {
        let mut vp = viewport();
        vp.projection = None;
        assert!(screen_to_geo(vp.rect.center(), &vp).is_none());
    }

    #[test]
    fn test_screen_to_geo_without_bounds() {
        let mut vp = viewport();
        vp.bounds = None;
        assert!(screen_to_geo(vp.rect.center(), &vp).is_none());
    }

    #[test]
    fn test_screen_to_geo_zero_size() {
        let mut vp = viewport();
        vp.rect.width = 0.0;
        assert!(screen_to_geo(ScreenPoint::new(50.0, 50.0), &vp).is_none());
        vp.rect.width = 300.0;
        vp.rect.height = 0.0;
        assert!(screen_to_geo(ScreenPoint::new(50.0, 50.0), &vp).is_none());
    }

    #[test]
    fn test_landing_outside_viewport_is_miss() {
        let vp = viewport();
        assert!(landing_coordinate(ScreenPoint::new(10.0, 10.0), &vp).is_none());
        assert!(landing_coordinate(ScreenPoint::new(400.0, 200.0), &vp).is_none());
    }

    #[test]
    fn test_landing_inside_viewport_is_hit() {
        let vp = viewport();
        let at = landing_coordinate(ScreenPoint::new(125.0, 275.0), &vp).unwrap();
        assert!((at.lng - 129.0).abs() < 1e-9);
        assert!((at.lat - 29.5).abs() < 1e-9);
    }

    fn pacific_viewport() -> MapViewport {
        MapViewport {
            rect: ViewportRect::new(0.0, 0.0, 400.0, 400.0),
            bounds: Some(GeoBounds::new(
                GeoCoordinate::new(10.0, -170.0),
                GeoCoordinate::new(-10.0, 170.0),
            )),
            projection: Some(Box::new(LinearProjection)),
        }
    }

    #[test]
    fn test_screen_to_geo_across_antimeridian() {
        let vp = pacific_viewport();

        let center = landing_coordinate(vp.rect.center(), &vp).unwrap();
        assert!((center.lng.abs() - 180.0).abs() < 1e-9);
        assert!(center.lat.abs() < 1e-9);

        let west = landing_coordinate(ScreenPoint::new(100.0, 200.0), &vp).unwrap();
        assert!((west.lng - 175.0).abs() < 1e-9);

        let east = landing_coordinate(ScreenPoint::new(300.0, 200.0), &vp).unwrap();
        assert!((east.lng + 175.0).abs() < 1e-9);
    }

    #[test]
    fn test_landing_past_east_edge_across_antimeridian_is_miss() {
        let vp = pacific_viewport();
        assert_eq!(landing_coordinate(ScreenPoint::new(500.0, 200.0), &vp), None);
    }
}
