// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Triangle Mesh Kernel
//!
//! Geometric queries over triangle meshes whose points carry opaque ids:
//! point-on-triangle and ray-triangle predicates, manifold checking,
//! orientation repair, surface area, enclosed volume and point-in-mesh
//! classification.
//!
//! The free functions are unchecked and assume well-formed input. [`Kernel`]
//! bundles a [`KernelConfig`] with the same queries and refuses volume and
//! containment on meshes that are not closed manifolds.

pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod kernel;
pub mod utils;

pub use config::KernelConfig;
pub use error::{KernelError, Result};
pub use geometry::{
    analyze, check_manifold, classify_points, connected_components, count_ray_crossings,
    is_consistently_oriented, is_manifold, is_point_inside_mesh, is_point_on_mesh,
    is_point_on_triangle, mesh_area, mesh_volume, orient, orient_components,
    ray_intersects_triangle, triangle_area, BoundingBox, DirectedEdge, Edge, GeometryStats,
    ManifoldDefect, Mesh, Point, PointId, Primitive, Triangle,
};
pub use kernel::Kernel;
pub use utils::{cross, distance, dot, length, vector_to};
