// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Bounding box utilities

use super::Mesh;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Per-axis multiples of the margin used by [`BoundingBox::exterior_point`]
pub const EXTERIOR_SKEW: [f64; 3] = [1.0, 1.37, 1.71];

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl BoundingBox {
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn from_mesh(mesh: &Mesh) -> Self {
        let mut bbox = Self::empty();
        for triangle in &mesh.triangles {
            for point in &triangle.vertices {
                bbox.expand_to_include(&point.position);
            }
        }
        bbox
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn expand_to_include(&mut self, point: &Point3<f64>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);

        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Point beyond the max corner of the box
    ///
    /// Used as the far-away ray origin for containment tests. Each axis is
    /// pushed out by a different multiple of `margin` so neither the point
    /// nor its jittered copies lie on a diagonal plane of the box, where a
    /// ray can run exactly through a box edge. An empty box falls back to
    /// the same offset from the origin.
    pub fn exterior_point(&self, margin: f64) -> Point3<f64> {
        let offset = Vector3::from(EXTERIOR_SKEW) * margin;
        if self.is_empty() {
            Point3::origin() + offset
        } else {
            self.max + offset
        }
    }

    /// `[min_x, min_y, min_z, max_x, max_y, max_z]`
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z,
        ]
    }
}
