use egui::{Pos2, Rect, Vec2};

/// Axis-aligned box spanned by two arbitrary corners.
///
/// The result does not depend on which corner comes first: the min corner is
/// taken per axis and the size is the absolute difference.
pub fn normalized_rect(a: Pos2, b: Pos2) -> Rect {
    let min = Pos2::new(a.x.min(b.x), a.y.min(b.y));
    let size = Vec2::new((a.x - b.x).abs(), (a.y - b.y).abs());
    Rect::from_min_size(min, size)
}

/// Closed outline of the ellipse inscribed in `rect`, sampled at `segments` points
pub fn ellipse_points(rect: Rect, segments: usize) -> Vec<Pos2> {
    let segments = segments.max(4);
    let center = rect.center();
    let radius = rect.size() / 2.0;

    (0..segments)
        .map(|i| {
            let angle = i as f32 / segments as f32 * std::f32::consts::TAU;
            Pos2::new(
                center.x + radius.x * angle.cos(),
                center.y + radius.y * angle.sin(),
            )
        })
        .collect()
}

/// True if `point` lies within `distance` of `target` (inclusive)
pub fn within_distance(point: Pos2, target: Pos2, distance: f32) -> bool {
    point.distance(target) <= distance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_rect_any_corner_order() {
        let expected = Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(30.0, 40.0));

        assert_eq!(normalized_rect(Pos2::new(10.0, 20.0), Pos2::new(40.0, 60.0)), expected);
        assert_eq!(normalized_rect(Pos2::new(40.0, 60.0), Pos2::new(10.0, 20.0)), expected);
        assert_eq!(normalized_rect(Pos2::new(10.0, 60.0), Pos2::new(40.0, 20.0)), expected);
        assert_eq!(normalized_rect(Pos2::new(40.0, 20.0), Pos2::new(10.0, 60.0)), expected);
    }

    #[test]
    fn test_normalized_rect_degenerate() {
        let rect = normalized_rect(Pos2::new(5.0, 5.0), Pos2::new(5.0, 5.0));
        assert_eq!(rect.min, Pos2::new(5.0, 5.0));
        assert_eq!(rect.size(), Vec2::ZERO);
    }

    #[test]
    fn test_ellipse_points_stay_on_outline() {
        let rect = Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(40.0, 20.0));
        let points = ellipse_points(rect, 32);
        assert_eq!(points.len(), 32);

        for p in &points {
            let nx = (p.x - 20.0) / 20.0;
            let ny = (p.y - 10.0) / 10.0;
            assert!((nx * nx + ny * ny - 1.0).abs() < 0.001);
        }
    }

    #[test]
    fn test_within_distance_is_inclusive() {
        let origin = Pos2::new(0.0, 0.0);
        assert!(within_distance(Pos2::new(6.0, 8.0), origin, 10.0));
        assert!(!within_distance(Pos2::new(6.0, 8.1), origin, 10.0));
    }
}
