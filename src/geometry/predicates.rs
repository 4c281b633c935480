// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Point-on-triangle and ray-triangle predicates
//!
//! The coplanarity test uses a fixed absolute plane thickness. It does not
//! scale with the mesh, so very large or very small models may need a
//! different threshold through [`is_point_on_triangle_within`].

use super::Triangle;
use crate::utils::math::{cross, dot, length, vector_to, volume_sign};
use nalgebra::{Point3, Vector3};

/// Maximum distance from the triangle's plane for a point to count as on it
pub const PLANE_THICKNESS: f64 = 0.0001;

/// Check whether `point` lies on the triangle, boundary included
///
/// Vertices and edge points return true. The triangle must not be
/// degenerate; a zero-area triangle has no plane and the result is
/// meaningless.
pub fn is_point_on_triangle(point: &Point3<f64>, triangle: &Triangle) -> bool {
    is_point_on_triangle_within(point, triangle, PLANE_THICKNESS)
}

/// [`is_point_on_triangle`] with an explicit plane thickness
pub fn is_point_on_triangle_within(
    point: &Point3<f64>,
    triangle: &Triangle,
    plane_thickness: f64,
) -> bool {
    let [a, b, c] = triangle.positions();
    let ab = vector_to(a, b);
    let ac = vector_to(a, c);
    let ap = vector_to(a, point);
    let normal = cross(&ab, &ac);
    let normal_length = length(&normal);

    is_on_plane(&normal, &ap, normal_length, plane_thickness)
        && is_within_triangle_bounds(&ab, &ac, &ap, &normal)
}

fn is_on_plane(
    normal: &Vector3<f64>,
    ap: &Vector3<f64>,
    normal_length: f64,
    plane_thickness: f64,
) -> bool {
    dot(normal, ap).abs() / normal_length <= plane_thickness
}

/// Barycentric bounds of the point's projection onto the triangle's plane
fn is_within_triangle_bounds(
    ab: &Vector3<f64>,
    ac: &Vector3<f64>,
    ap: &Vector3<f64>,
    normal: &Vector3<f64>,
) -> bool {
    // Squared length taken as n·n so the vertices land exactly on 0 and 1
    let normal_squared = dot(normal, normal);
    let unit_interval = 0.0..=1.0;

    let gamma = dot(&cross(ab, ap), normal) / normal_squared;
    if !unit_interval.contains(&gamma) {
        return false;
    }

    let beta = dot(&cross(ap, ac), normal) / normal_squared;
    if !unit_interval.contains(&beta) {
        return false;
    }

    let alpha = 1.0 - gamma - beta;
    unit_interval.contains(&alpha)
}

/// Check whether the ray from `origin` through `far` crosses the triangle
///
/// The ray is treated as the segment origin→far. It intersects when the two
/// endpoints lie on opposite sides of the triangle's plane and the segment
/// turns the same way around all three edges.
///
/// Grazing an edge or a vertex (a zero sign on an edge test) is not an
/// intersection. An endpoint lying exactly on the triangle is.
pub fn ray_intersects_triangle(
    triangle: &Triangle,
    origin: &Point3<f64>,
    far: &Point3<f64>,
) -> bool {
    let [a, b, c] = triangle.positions();

    if volume_sign(a, b, c, origin) == volume_sign(a, b, c, far) {
        return false;
    }

    let turn = volume_sign(a, b, origin, far);
    turn == volume_sign(b, c, origin, far) && turn == volume_sign(c, a, origin, far)
}
