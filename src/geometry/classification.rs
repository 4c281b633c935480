// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Point classification against a mesh
//!
//! Containment is decided by parity: a segment from a point known to be
//! outside the mesh to the query point crosses the surface an odd number of
//! times exactly when the query point is inside. A segment that runs exactly
//! through an edge or a vertex is not counted by the ray test, so the
//! outside point is nudged by a fixed set of small offsets and the parity
//! results are put to a majority vote.
//!
//! This is a heuristic. A query point lying on the surface itself has no
//! defined answer.

use super::predicates::{is_point_on_triangle_within, ray_intersects_triangle, PLANE_THICKNESS};
use super::Mesh;
use nalgebra::{Point3, Vector3};
use rayon::prelude::*;
use tracing::trace;

/// Size of the nudges applied to the outside point
pub const DEFAULT_JITTER: f64 = 0.1;

/// Offsets applied to the outside point, in units of the jitter size
///
/// Five trials so the vote cannot tie.
pub const JITTER_PATTERN: [[f64; 3]; 5] = [
    [0.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 1.0],
    [1.0, 0.0, 1.0],
    [0.0, -1.0, 0.0],
];

/// Number of triangles crossed by the segment from `origin` to `target`
pub fn count_ray_crossings(mesh: &Mesh, origin: &Point3<f64>, target: &Point3<f64>) -> usize {
    mesh.triangles
        .iter()
        .filter(|triangle| ray_intersects_triangle(triangle, origin, target))
        .count()
}

/// Check whether `point` lies inside a closed manifold mesh
///
/// `outside` must lie outside the mesh's bounding box, for example
/// [`BoundingBox::exterior_point`](super::BoundingBox::exterior_point).
pub fn is_point_inside_mesh(point: &Point3<f64>, mesh: &Mesh, outside: &Point3<f64>) -> bool {
    is_point_inside_mesh_with_jitter(point, mesh, outside, DEFAULT_JITTER)
}

/// [`is_point_inside_mesh`] with an explicit jitter size
pub fn is_point_inside_mesh_with_jitter(
    point: &Point3<f64>,
    mesh: &Mesh,
    outside: &Point3<f64>,
    jitter: f64,
) -> bool {
    let votes_inside = JITTER_PATTERN
        .iter()
        .filter(|offset| {
            let origin = *outside + Vector3::new(offset[0], offset[1], offset[2]) * jitter;
            let crossings = count_ray_crossings(mesh, &origin, point);
            trace!(crossings, x = origin.x, y = origin.y, z = origin.z, "containment trial");
            crossings % 2 == 1
        })
        .count();

    votes_inside > JITTER_PATTERN.len() / 2
}

/// Classify many points against the same mesh in parallel
pub fn classify_points(points: &[Point3<f64>], mesh: &Mesh, outside: &Point3<f64>) -> Vec<bool> {
    classify_points_with_jitter(points, mesh, outside, DEFAULT_JITTER)
}

/// [`classify_points`] with an explicit jitter size
pub fn classify_points_with_jitter(
    points: &[Point3<f64>],
    mesh: &Mesh,
    outside: &Point3<f64>,
    jitter: f64,
) -> Vec<bool> {
    points
        .par_iter()
        .map(|point| is_point_inside_mesh_with_jitter(point, mesh, outside, jitter))
        .collect()
}

/// Check whether `point` lies on any triangle of the mesh
pub fn is_point_on_mesh(point: &Point3<f64>, mesh: &Mesh) -> bool {
    is_point_on_mesh_within(point, mesh, PLANE_THICKNESS)
}

/// [`is_point_on_mesh`] with an explicit plane thickness
pub fn is_point_on_mesh_within(point: &Point3<f64>, mesh: &Mesh, plane_thickness: f64) -> bool {
    mesh.triangles
        .iter()
        .any(|triangle| is_point_on_triangle_within(point, triangle, plane_thickness))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Primitive};

    fn unit_tetrahedron() -> Mesh {
        let points = [
            Point::new(1, 0.0, 0.0, 0.0),
            Point::new(2, 1.0, 0.0, 0.0),
            Point::new(3, 0.0, 0.0, 1.0),
            Point::new(4, 0.0, 1.0, 0.0),
        ];
        Mesh::from_indexed(&points, &[[1, 2, 3], [1, 2, 4], [1, 3, 4], [2, 3, 4]]).unwrap()
    }

    #[test]
    fn test_interior_point_is_inside() {
        let mesh = unit_tetrahedron();
        let outside = mesh.bounding_box().exterior_point(1.0);

        assert!(is_point_inside_mesh(
            &Point3::new(0.25, 0.25, 0.25),
            &mesh,
            &outside
        ));
    }

    #[test]
    fn test_point_inside_box_but_outside_mesh() {
        let mesh = unit_tetrahedron();
        let outside = mesh.bounding_box().exterior_point(1.0);

        assert!(!is_point_inside_mesh(&Point3::new(0.5, 0.5, 0.5), &mesh, &outside));
    }

    #[test]
    fn test_point_outside_box() {
        let mesh = unit_tetrahedron();
        let outside = mesh.bounding_box().exterior_point(1.0);

        assert!(!is_point_inside_mesh(&Point3::new(-3.0, 0.2, 0.2), &mesh, &outside));
    }

    #[test]
    fn test_crossing_count_through_cube() {
        let cube = Primitive::cube(2.0).to_mesh();
        let origin = Point3::new(-1.0, 0.7, 0.3);

        assert_eq!(count_ray_crossings(&cube, &origin, &Point3::new(1.0, 0.7, 0.3)), 1);
        assert_eq!(count_ray_crossings(&cube, &origin, &Point3::new(3.0, 0.7, 0.3)), 2);
    }

    #[test]
    fn test_classify_points_matches_single_queries() {
        let sphere = Primitive::sphere(1.0, 16, 12).to_mesh();
        let outside = sphere.bounding_box().exterior_point(1.0);
        let points = vec![
            Point3::new(0.05, -0.1, 0.02),
            Point3::new(0.3, -0.2, 0.1),
            Point3::new(0.9, 0.9, 0.9),
            Point3::new(-0.95, -0.95, 0.0),
        ];

        let results = classify_points(&points, &sphere, &outside);
        assert_eq!(results, vec![true, true, false, false]);
    }

    #[test]
    fn test_point_on_mesh() {
        let points = [
            Point::new(1, 1.0, 0.0, 0.0),
            Point::new(2, 0.0, 0.0, 1.0),
            Point::new(3, 0.0, 1.0, 0.0),
        ];
        let mesh = Mesh::from_indexed(&points, &[[1, 2, 3]]).unwrap();

        assert!(is_point_on_mesh(&Point3::new(0.3333, 0.3333, 0.3333), &mesh));
        assert!(is_point_on_mesh(&Point3::new(0.0, 1.0, 0.0), &mesh));
        assert!(is_point_on_mesh(&Point3::new(0.5, 0.0, 0.5), &mesh));
        assert!(!is_point_on_mesh(&Point3::new(0.0, 0.0, 0.0), &mesh));
        assert!(!is_point_on_mesh(&Point3::new(0.0, 0.0, 0.0), &Mesh::empty()));
    }
}
