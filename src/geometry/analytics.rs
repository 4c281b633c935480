// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Area, volume and aggregate mesh statistics

use super::orientation::orient_components;
use super::topology::is_manifold;
use super::{Mesh, Triangle};
use crate::utils::math::{cross, length, signed_tetrahedron_volume, vector_to};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Geometry statistics and analytics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryStats {
    /// Enclosed volume, present only for manifold meshes
    pub volume: Option<f64>,
    /// Total surface area
    pub surface_area: f64,
    /// Bounding box [min_x, min_y, min_z, max_x, max_y, max_z]
    pub bbox: [f64; 6],
    /// Number of distinct points
    pub point_count: usize,
    /// Number of triangles
    pub triangle_count: usize,
    /// Number of edge-connected pieces
    pub component_count: usize,
    /// Is the mesh a closed manifold?
    pub is_manifold: bool,
}

impl GeometryStats {
    /// Create empty stats
    pub fn empty() -> Self {
        Self {
            volume: None,
            surface_area: 0.0,
            bbox: [0.0; 6],
            point_count: 0,
            triangle_count: 0,
            component_count: 0,
            is_manifold: false,
        }
    }

    /// Pretty print statistics
    pub fn print(&self) {
        println!("╔══════════════════════════════════════════════════════════╗");
        println!("║              MESH ANALYTICS                              ║");
        println!("╠══════════════════════════════════════════════════════════╣");
        match self.volume {
            Some(volume) => println!("║ Volume:          {:>14.6}                          ║", volume),
            None => println!("║ Volume:          {:>14}                          ║", "n/a"),
        }
        println!(
            "║ Surface Area:    {:>14.6}                          ║",
            self.surface_area
        );
        println!("║                                                          ║");
        println!("║ Bounding Box:                                            ║");
        println!(
            "║   Min: ({:>9.3}, {:>9.3}, {:>9.3})                  ║",
            self.bbox[0], self.bbox[1], self.bbox[2]
        );
        println!(
            "║   Max: ({:>9.3}, {:>9.3}, {:>9.3})                  ║",
            self.bbox[3], self.bbox[4], self.bbox[5]
        );
        println!("║                                                          ║");
        println!(
            "║ Points:          {:>10}                              ║",
            self.point_count
        );
        println!(
            "║ Triangles:       {:>10}                              ║",
            self.triangle_count
        );
        println!(
            "║ Components:      {:>10}                              ║",
            self.component_count
        );
        println!(
            "║ Manifold:        {:>10}                              ║",
            if self.is_manifold { "Yes" } else { "No" }
        );
        println!("╚══════════════════════════════════════════════════════════╝");
    }
}

/// Analyze mesh geometry and compute statistics
pub fn analyze(mesh: &Mesh) -> GeometryStats {
    if mesh.is_empty() {
        return GeometryStats::empty();
    }

    let is_manifold = is_manifold(mesh);
    let components = orient_components(mesh);
    let volume = is_manifold.then(|| components.iter().map(integrate_volume).sum::<f64>());

    GeometryStats {
        volume,
        surface_area: mesh_area(mesh),
        bbox: mesh.bounding_box().to_array(),
        point_count: mesh.points().len(),
        triangle_count: mesh.len(),
        component_count: components.len(),
        is_manifold,
    }
}

/// Triangle area, half the length of the edge cross product
///
/// Collinear or repeated points give exactly zero.
pub fn triangle_area(triangle: &Triangle) -> f64 {
    let [a, b, c] = triangle.positions();
    0.5 * length(&cross(&vector_to(a, b), &vector_to(a, c)))
}

/// Calculate total surface area
pub fn mesh_area(mesh: &Mesh) -> f64 {
    mesh.triangles.iter().map(triangle_area).sum()
}

/// Enclosed volume of a consistently oriented closed mesh
///
/// Every triangle forms a tetrahedron with a common hook point (the first
/// vertex of the first triangle). With consistent winding the contributions
/// outside the solid cancel, so the absolute sum is the enclosed volume
/// whatever the hook. A flat mesh sums to zero.
pub fn integrate_volume(mesh: &Mesh) -> f64 {
    let Some(first) = mesh.triangles.first() else {
        return 0.0;
    };
    let hook = first.a().position;

    mesh.triangles
        .iter()
        .map(|triangle| {
            let [a, b, c] = triangle.positions();
            signed_tetrahedron_volume(a, b, c, &hook)
        })
        .sum::<f64>()
        .abs()
}

/// Enclosed volume of a manifold mesh with arbitrary input windings
///
/// Each edge-connected piece is oriented on its own and the piece volumes
/// are added. The mesh must be manifold; nothing here checks it, and a
/// non-manifold mesh gives a meaningless number.
pub fn mesh_volume(mesh: &Mesh) -> f64 {
    let pieces = orient_components(mesh);
    let volume: f64 = pieces.iter().map(integrate_volume).sum();
    debug!(pieces = pieces.len(), volume, "integrated mesh volume");
    volume
}
