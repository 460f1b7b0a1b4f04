use super::{Point3, Vector3, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Computes the signed area of a polygon in the XY plane (shoelace formula).
///
/// The sequence is treated as cyclic: the last vertex connects back to the
/// first. Positive for counter-clockwise, negative for clockwise. Fewer than
/// three vertices yield `0.0`. Z is ignored.
#[must_use]
pub fn polygon_area(points: &[Point3]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += cross_xy(&points[i], &points[j]);
    }
    sum * 0.5
}

/// Computes the centroid of a simple polygon.
///
/// X and Y come from the polygon first moment normalised by `6 * area`, so
/// the result is independent of winding order. Z is the arithmetic mean of
/// the input z values, which only matches the true centroid when the polygon
/// lies in a plane parallel to XY.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the polygon has fewer than three
/// vertices or its area is zero. Zero is judged relative to the squared
/// diagonal of the XY bounding box, so small but valid polygons pass.
pub fn polygon_centroid(points: &[Point3]) -> Result<Point3> {
    let n = points.len();
    if n < 3 {
        return Err(GeometryError::Degenerate(format!(
            "polygon centroid needs at least 3 vertices, got {n}"
        ))
        .into());
    }
    let area = polygon_area(points);
    if area.abs() <= TOLERANCE * extent_sq_xy(points) {
        return Err(GeometryError::Degenerate("polygon has zero area".to_owned()).into());
    }

    let (mut x, mut y, mut z) = (0.0, 0.0, 0.0);
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        let p = cross_xy(a, b);
        x += (a.x + b.x) * p;
        y += (a.y + b.y) * p;
        z += a.z;
    }
    let scale = 6.0 * area;
    Ok(Point3::new(x / scale, y / scale, z / count_as_f64(n)))
}

/// Arithmetic mean of a point set.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if `points` is empty.
pub fn vertex_mean(points: &[Point3]) -> Result<Point3> {
    if points.is_empty() {
        return Err(GeometryError::Degenerate("mean of an empty point set".to_owned()).into());
    }
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Ok(Point3::from(sum / count_as_f64(points.len())))
}

/// Newell normal of a (possibly non-planar) polygon, not normalised.
///
/// Its length is twice the area of the polygon projected onto the plane it
/// defines, and its direction follows the right-hand rule over the winding.
#[must_use]
pub fn newell_normal(points: &[Point3]) -> Vector3 {
    let n = points.len();
    let mut normal = Vector3::zeros();
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        normal.x += (a.y - b.y) * (a.z + b.z);
        normal.y += (a.z - b.z) * (a.x + b.x);
        normal.z += (a.x - b.x) * (a.y + b.y);
    }
    normal
}

/// Winding number of point `(px, py)` with respect to the closed polygon
/// `verts`. Non-zero means inside.
#[must_use]
pub fn winding_number(px: f64, py: f64, verts: &[(f64, f64)]) -> i32 {
    let n = verts.len();
    let mut winding = 0;
    for i in 0..n {
        let (x0, y0) = verts[i];
        let (x1, y1) = verts[(i + 1) % n];
        let side = (x1 - x0) * (py - y0) - (y1 - y0) * (px - x0);
        if y0 <= py {
            if y1 > py && side > 0.0 {
                winding += 1;
            }
        } else if y1 <= py && side < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// Squared diagonal of the XY bounding box.
fn extent_sq_xy(points: &[Point3]) -> f64 {
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    let (dx, dy) = (max_x - min_x, max_y - min_y);
    dx * dx + dy * dy
}

/// 2D cross product of two points taken as vectors from the origin.
#[inline]
fn cross_xy(a: &Point3, b: &Point3) -> f64 {
    a.x * b.y - b.x * a.y
}

#[allow(clippy::cast_precision_loss)]
fn count_as_f64(n: usize) -> f64 {
    n as f64
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::MeshTagError;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn unit_square() -> Vec<Point3> {
        vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn area_ccw_square_is_positive() {
        assert_relative_eq!(polygon_area(&unit_square()), 1.0);
    }

    #[test]
    fn area_cw_square_is_negative() {
        let mut pts = unit_square();
        pts.reverse();
        assert_relative_eq!(polygon_area(&pts), -1.0);
    }

    #[test]
    fn area_ignores_z() {
        let pts = vec![p(0.0, 0.0, 5.0), p(4.0, 0.0, -2.0), p(0.0, 3.0, 7.0)];
        assert_relative_eq!(polygon_area(&pts), 6.0);
    }

    #[test]
    fn area_degenerate_inputs() {
        assert!(polygon_area(&[]).abs() < TOLERANCE);
        assert!(polygon_area(&[p(1.0, 1.0, 0.0), p(2.0, 2.0, 0.0)]).abs() < TOLERANCE);
        let colinear = vec![p(0.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(2.0, 2.0, 0.0)];
        assert!(polygon_area(&colinear).abs() < TOLERANCE);
    }

    #[test]
    fn centroid_unit_square() {
        let mut pts = unit_square();
        pts[0].z = 1.0;
        pts[2].z = 3.0;
        let c = polygon_centroid(&pts).unwrap();
        assert_relative_eq!(c.x, 0.5);
        assert_relative_eq!(c.y, 0.5);
        assert_relative_eq!(c.z, 1.0);
    }

    #[test]
    fn centroid_independent_of_winding() {
        let mut pts = vec![p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0), p(0.0, 3.0, 0.0)];
        let ccw = polygon_centroid(&pts).unwrap();
        pts.reverse();
        let cw = polygon_centroid(&pts).unwrap();
        assert_relative_eq!(ccw.x, 4.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(ccw.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(ccw.x, cw.x, epsilon = 1e-12);
        assert_relative_eq!(ccw.y, cw.y, epsilon = 1e-12);
    }

    #[test]
    fn centroid_l_shape() {
        // Two unit squares side by side plus one on top of the left one.
        let pts = vec![
            p(0.0, 0.0, 0.0),
            p(2.0, 0.0, 0.0),
            p(2.0, 1.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(1.0, 2.0, 0.0),
            p(0.0, 2.0, 0.0),
        ];
        let c = polygon_centroid(&pts).unwrap();
        assert_relative_eq!(c.x, 5.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 5.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn centroid_of_micrometre_square() {
        let pts: Vec<Point3> = unit_square()
            .iter()
            .map(|q| p(q.x * 1e-6, q.y * 1e-6, 2.0))
            .collect();
        let c = polygon_centroid(&pts).unwrap();
        assert_relative_eq!(c.x, 0.5e-6, epsilon = 1e-18);
        assert_relative_eq!(c.y, 0.5e-6, epsilon = 1e-18);
        assert_relative_eq!(c.z, 2.0);
    }

    #[test]
    fn centroid_rejects_coincident_points() {
        let pts = vec![p(3.0, 3.0, 0.0); 4];
        let err = polygon_centroid(&pts).unwrap_err();
        assert!(matches!(err, MeshTagError::Geometry(GeometryError::Degenerate(_))));
    }

    #[test]
    fn centroid_rejects_two_points() {
        let err = polygon_centroid(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)]).unwrap_err();
        assert!(matches!(err, MeshTagError::Geometry(GeometryError::Degenerate(_))));
    }

    #[test]
    fn centroid_rejects_colinear() {
        let pts = vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(3.0, 0.0, 0.0)];
        let err = polygon_centroid(&pts).unwrap_err();
        assert!(matches!(err, MeshTagError::Geometry(GeometryError::Degenerate(_))));
    }

    #[test]
    fn mean_of_square() {
        let c = vertex_mean(&unit_square()).unwrap();
        assert_relative_eq!(c.x, 0.5);
        assert_relative_eq!(c.y, 0.5);
        assert_relative_eq!(c.z, 0.0);
    }

    #[test]
    fn mean_of_nothing_fails() {
        assert!(vertex_mean(&[]).is_err());
    }

    #[test]
    fn winding_inside_and_outside() {
        let sq = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        assert_eq!(winding_number(0.5, 0.5, &sq), 1);
        assert_eq!(winding_number(1.5, 0.5, &sq), 0);
        let cw: Vec<_> = sq.iter().rev().copied().collect();
        assert_eq!(winding_number(0.5, 0.5, &cw), -1);
    }

    #[test]
    fn newell_normal_of_ccw_square_points_up() {
        let n = newell_normal(&unit_square());
        assert_relative_eq!(n.x, 0.0);
        assert_relative_eq!(n.y, 0.0);
        assert_relative_eq!(n.z, 2.0);
    }

    #[test]
    fn newell_normal_of_vertical_square() {
        let pts = vec![
            p(0.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(0.0, 1.0, 1.0),
            p(0.0, 0.0, 1.0),
        ];
        let n = newell_normal(&pts);
        assert_relative_eq!(n.x, 2.0);
        assert_relative_eq!(n.y, 0.0);
        assert_relative_eq!(n.z, 0.0);
    }
}
