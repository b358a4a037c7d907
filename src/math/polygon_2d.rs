use super::Vector2;

/// Even-odd (ray casting) point-in-polygon test.
///
/// Casts a ray from `point` towards +x and toggles on every edge whose
/// endpoints straddle the horizontal line through `point.y`. An endpoint
/// exactly on that line counts as below it.
///
/// Points on the boundary get whatever result the comparisons produce: for
/// an axis-aligned rectangle, the bottom and left edges test inside and the
/// top and right edges test outside. Fewer than 3 vertices is always outside.
#[must_use]
pub fn point_in_polygon_even_odd(point: &Vector2, polygon: &[Vector2]) -> bool {
    let Some(mut prev) = polygon.last() else {
        return false;
    };
    let mut inside = false;
    for curr in polygon {
        if (curr.y > point.y) != (prev.y > point.y) {
            let x_cross = (prev.x - curr.x) * (point.y - curr.y) / (prev.y - curr.y) + curr.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        prev = curr;
    }
    inside
}

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Vector2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}
