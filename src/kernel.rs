// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Kernel API with configured tolerances and manifold checks

use crate::config::KernelConfig;
use crate::error::{KernelError, Result};
use crate::geometry::analytics::{self, GeometryStats};
use crate::geometry::classification::{
    classify_points_with_jitter, is_point_inside_mesh_with_jitter, is_point_on_mesh_within,
};
use crate::geometry::predicates::{is_point_on_triangle_within, ray_intersects_triangle};
use crate::geometry::topology::check_manifold;
use crate::geometry::{ManifoldDefect, Mesh, Triangle};
use crate::utils::math;
use nalgebra::Point3;
use tracing::debug;

/// Main kernel for mesh queries
///
/// Volume and containment go through a manifold check first and fail with
/// [`KernelError::NotManifold`] instead of returning a meaningless number.
#[derive(Debug, Clone, Default)]
pub struct Kernel {
    config: KernelConfig,
}

impl Kernel {
    /// Create a new kernel with default tolerances
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a kernel with explicit tolerances
    pub fn with_config(config: KernelConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    pub fn distance(&self, p: &Point3<f64>, q: &Point3<f64>) -> f64 {
        math::distance(p, q)
    }

    pub fn triangle_area(&self, triangle: &Triangle) -> f64 {
        analytics::triangle_area(triangle)
    }

    pub fn mesh_area(&self, mesh: &Mesh) -> f64 {
        analytics::mesh_area(mesh)
    }

    pub fn is_point_on_triangle(&self, point: &Point3<f64>, triangle: &Triangle) -> bool {
        is_point_on_triangle_within(point, triangle, self.config.plane_thickness)
    }

    pub fn is_point_on_mesh(&self, point: &Point3<f64>, mesh: &Mesh) -> bool {
        is_point_on_mesh_within(point, mesh, self.config.plane_thickness)
    }

    pub fn does_ray_intersect_triangle(
        &self,
        triangle: &Triangle,
        origin: &Point3<f64>,
        far: &Point3<f64>,
    ) -> bool {
        ray_intersects_triangle(triangle, origin, far)
    }

    pub fn check_manifold(&self, mesh: &Mesh) -> std::result::Result<(), ManifoldDefect> {
        check_manifold(mesh)
    }

    pub fn is_mesh_manifold(&self, mesh: &Mesh) -> bool {
        check_manifold(mesh).is_ok()
    }

    /// Enclosed volume; the mesh must be a closed manifold
    pub fn mesh_volume(&self, mesh: &Mesh) -> Result<f64> {
        self.require_manifold(mesh)?;
        Ok(analytics::mesh_volume(mesh))
    }

    /// Containment test against an outside point derived from the bounding box
    pub fn is_point_inside_mesh(&self, point: &Point3<f64>, mesh: &Mesh) -> Result<bool> {
        let outside = mesh
            .bounding_box()
            .exterior_point(self.config.exterior_margin);
        self.is_point_inside_mesh_from(point, mesh, &outside)
    }

    /// Containment test against a caller-supplied outside point
    pub fn is_point_inside_mesh_from(
        &self,
        point: &Point3<f64>,
        mesh: &Mesh,
        outside: &Point3<f64>,
    ) -> Result<bool> {
        self.require_manifold(mesh)?;
        Ok(is_point_inside_mesh_with_jitter(
            point,
            mesh,
            outside,
            self.config.jitter,
        ))
    }

    /// Classify many points at once
    pub fn classify_points(&self, points: &[Point3<f64>], mesh: &Mesh) -> Result<Vec<bool>> {
        self.require_manifold(mesh)?;
        let outside = mesh
            .bounding_box()
            .exterior_point(self.config.exterior_margin);
        Ok(classify_points_with_jitter(
            points,
            mesh,
            &outside,
            self.config.jitter,
        ))
    }

    /// Aggregate statistics
    pub fn analyze(&self, mesh: &Mesh) -> GeometryStats {
        analytics::analyze(mesh)
    }

    fn require_manifold(&self, mesh: &Mesh) -> Result<()> {
        check_manifold(mesh).map_err(|defect| {
            debug!(%defect, "rejected non-manifold mesh");
            KernelError::NotManifold(defect)
        })
    }
}
