// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - mesh representation and queries

mod bbox;
mod mesh;
mod primitives;

pub mod analytics;
pub mod classification;
pub mod orientation;
pub mod predicates;
pub mod topology;

pub use analytics::{analyze, integrate_volume, mesh_area, mesh_volume, triangle_area, GeometryStats};
pub use bbox::BoundingBox;
pub use classification::{
    classify_points, count_ray_crossings, is_point_inside_mesh, is_point_on_mesh, DEFAULT_JITTER,
    JITTER_PATTERN,
};
pub use mesh::{DirectedEdge, Edge, Mesh, Point, PointId, Triangle};
pub use orientation::{is_consistently_oriented, orient, orient_components};
pub use predicates::{is_point_on_triangle, ray_intersects_triangle, PLANE_THICKNESS};
pub use primitives::Primitive;
pub use topology::{check_manifold, connected_components, is_manifold, ManifoldDefect};
