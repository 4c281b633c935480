// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Vector primitives
//!
//! Plain double-precision arithmetic. No tolerance handling happens here;
//! callers decide what counts as zero.

use nalgebra::{Point3, Vector3};

/// Dot product of two vectors
pub fn dot(u: &Vector3<f64>, v: &Vector3<f64>) -> f64 {
    u.dot(v)
}

/// Cross product of two vectors
pub fn cross(u: &Vector3<f64>, v: &Vector3<f64>) -> Vector3<f64> {
    u.cross(v)
}

/// Euclidean length, `sqrt(dot(v, v))`
pub fn length(v: &Vector3<f64>) -> f64 {
    dot(v, v).sqrt()
}

/// Vector pointing from `p` to `q`
pub fn vector_to(p: &Point3<f64>, q: &Point3<f64>) -> Vector3<f64> {
    q - p
}

/// Euclidean distance between two points
pub fn distance(p: &Point3<f64>, q: &Point3<f64>) -> f64 {
    length(&vector_to(p, q))
}

/// Scalar triple product `(pq × pr) · ps`, six times the signed volume of
/// the tetrahedron (p, q, r, s)
pub fn triple_product(
    p: &Point3<f64>,
    q: &Point3<f64>,
    r: &Point3<f64>,
    s: &Point3<f64>,
) -> f64 {
    dot(&cross(&vector_to(p, q), &vector_to(p, r)), &vector_to(p, s))
}

/// Sign of the triple product: -1, 0 or 1
///
/// Exact zero maps to 0; there is no epsilon band.
pub fn volume_sign(p: &Point3<f64>, q: &Point3<f64>, r: &Point3<f64>, s: &Point3<f64>) -> i8 {
    let volume = triple_product(p, q, r, s);
    if volume > 0.0 {
        1
    } else if volume < 0.0 {
        -1
    } else {
        0
    }
}

/// Signed volume of the tetrahedron (a, b, c, apex)
pub fn signed_tetrahedron_volume(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    apex: &Point3<f64>,
) -> f64 {
    triple_product(a, b, c, apex) / 6.0
}
