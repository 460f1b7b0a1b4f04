use crate::math::polygon_2d::newell_normal;
use crate::math::Vector3;
use crate::operations::tagging::FaceTagOutline;

use super::TriangleMesh;

/// Triangulates an outline as a fan around its centre.
///
/// Vertex 0 is the centre, followed by the outline points in walk order;
/// triangle `i` joins the centre to points `i` and `i + 1`, wrapping back to
/// the first point. Only correct for outlines that are star-shaped about
/// their centre; use [`super::TessellateLoop`] for concave faces.
///
/// Outlines with fewer than three points produce an empty mesh.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn fan_triangles(outline: &FaceTagOutline) -> TriangleMesh {
    let n = outline.points.len();
    if n < 3 {
        tracing::debug!(points = n, "outline too short to fill");
        return TriangleMesh::default();
    }

    let normal = newell_normal(&outline.points)
        .try_normalize(0.0)
        .unwrap_or_else(Vector3::zeros);

    let mut mesh = TriangleMesh::default();
    mesh.vertices.push(outline.centre);
    mesh.vertices.extend_from_slice(&outline.points);
    mesh.normals = vec![normal; n + 1];
    for i in 0..n {
        let a = (i + 1) as u32;
        let b = ((i + 1) % n + 1) as u32;
        mesh.indices.push([0, a, b]);
    }
    mesh
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::topology::OrderedLoop;

    fn outline(points: Vec<Point3>) -> FaceTagOutline {
        let centre = crate::math::polygon_2d::vertex_mean(&points).unwrap();
        FaceTagOutline {
            boundary: OrderedLoop::default(),
            points,
            centre,
        }
    }

    #[test]
    fn square_fan_has_four_triangles() {
        let mesh = fan_triangles(&outline(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(2.0, 2.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        ]));
        assert_eq!(mesh.vertices.len(), 5);
        assert_eq!(mesh.normals.len(), 5);
        assert_eq!(mesh.indices, vec![[0, 1, 2], [0, 2, 3], [0, 3, 4], [0, 4, 1]]);
        assert!((mesh.area() - 4.0).abs() < 1e-12);
        assert!((mesh.normals[0].z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn short_outline_is_empty() {
        let mesh = fan_triangles(&outline(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        ]));
        assert!(mesh.indices.is_empty());
        assert!(mesh.vertices.is_empty());
    }
}
