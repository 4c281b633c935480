// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Closed manifold solids with shared, numbered points
//!
//! Point ids start at 0 and every face is wound counter-clockwise seen from
//! outside.

use super::{Mesh, Point, PointId, Triangle};
use nalgebra::{Point3, Vector3};
use std::f64::consts::PI;

/// Geometric primitives
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Right-angle corner tetrahedron with legs of length `size` along the axes
    Tetrahedron { size: f64 },
    Octahedron { radius: f64 },
    Icosahedron { radius: f64 },
    /// Axis-aligned cube spanning `[0, size]` on every axis
    Cube { size: f64 },
    /// UV sphere with single-point poles
    Sphere { radius: f64, slices: u32, stacks: u32 },
}

impl Primitive {
    pub fn tetrahedron(size: f64) -> Self {
        Self::Tetrahedron { size }
    }

    pub fn octahedron(radius: f64) -> Self {
        Self::Octahedron { radius }
    }

    pub fn icosahedron(radius: f64) -> Self {
        Self::Icosahedron { radius }
    }

    pub fn cube(size: f64) -> Self {
        Self::Cube { size }
    }

    pub fn sphere(radius: f64, slices: u32, stacks: u32) -> Self {
        Self::Sphere {
            radius,
            slices: slices.max(3),
            stacks: stacks.max(2),
        }
    }

    pub fn to_mesh(&self) -> Mesh {
        match *self {
            Self::Tetrahedron { size } => generate_tetrahedron_mesh(size),
            Self::Octahedron { radius } => generate_octahedron_mesh(radius),
            Self::Icosahedron { radius } => generate_icosahedron_mesh(radius),
            Self::Cube { size } => generate_cube_mesh(size),
            Self::Sphere {
                radius,
                slices,
                stacks,
            } => generate_sphere_mesh(radius, slices, stacks),
        }
    }

    /// Mesh moved by (dx, dy, dz) with every point id shifted by `id_offset`
    pub fn translated(&self, dx: f64, dy: f64, dz: f64, id_offset: PointId) -> Mesh {
        let offset = Vector3::new(dx, dy, dz);
        let shift = |point: &Point| Point::from_position(point.id + id_offset, point.position + offset);

        let triangles = self
            .to_mesh()
            .triangles
            .iter()
            .map(|triangle| {
                let [a, b, c] = &triangle.vertices;
                Triangle::new(shift(a), shift(b), shift(c))
            })
            .collect();

        Mesh::from_triangles(triangles)
    }
}

fn build_mesh(positions: &[Point3<f64>], faces: &[[usize; 3]]) -> Mesh {
    let points: Vec<Point> = positions
        .iter()
        .enumerate()
        .map(|(id, position)| Point::from_position(id as PointId, *position))
        .collect();

    let triangles = faces
        .iter()
        .map(|&[a, b, c]| Triangle::new(points[a], points[b], points[c]))
        .collect();

    Mesh::from_triangles(triangles)
}

fn generate_tetrahedron_mesh(size: f64) -> Mesh {
    let positions = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(size, 0.0, 0.0),
        Point3::new(0.0, size, 0.0),
        Point3::new(0.0, 0.0, size),
    ];
    let faces = [[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]];

    build_mesh(&positions, &faces)
}

fn generate_octahedron_mesh(radius: f64) -> Mesh {
    let positions = [
        Point3::new(radius, 0.0, 0.0),
        Point3::new(-radius, 0.0, 0.0),
        Point3::new(0.0, radius, 0.0),
        Point3::new(0.0, -radius, 0.0),
        Point3::new(0.0, 0.0, radius),
        Point3::new(0.0, 0.0, -radius),
    ];
    let faces = [
        // Upper half
        [0, 2, 4],
        [2, 1, 4],
        [1, 3, 4],
        [3, 0, 4],
        // Lower half
        [2, 0, 5],
        [1, 2, 5],
        [3, 1, 5],
        [0, 3, 5],
    ];

    build_mesh(&positions, &faces)
}

fn generate_icosahedron_mesh(radius: f64) -> Mesh {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let scale = radius / (1.0 + phi * phi).sqrt();

    let positions: Vec<Point3<f64>> = [
        (-1.0, phi, 0.0),
        (1.0, phi, 0.0),
        (-1.0, -phi, 0.0),
        (1.0, -phi, 0.0),
        (0.0, -1.0, phi),
        (0.0, 1.0, phi),
        (0.0, -1.0, -phi),
        (0.0, 1.0, -phi),
        (phi, 0.0, -1.0),
        (phi, 0.0, 1.0),
        (-phi, 0.0, -1.0),
        (-phi, 0.0, 1.0),
    ]
    .iter()
    .map(|&(x, y, z)| Point3::new(x * scale, y * scale, z * scale))
    .collect();

    let mut faces = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    // Centred and convex: a face points outward when its normal agrees with
    // its centroid
    for face in faces.iter_mut() {
        let [a, b, c] = face.map(|index| positions[index]);
        let normal = (b - a).cross(&(c - a));
        if normal.dot(&a.coords) < 0.0 {
            face.swap(1, 2);
        }
    }

    build_mesh(&positions, &faces)
}

fn generate_cube_mesh(size: f64) -> Mesh {
    // 8 corners of the cube
    let positions = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(size, 0.0, 0.0),
        Point3::new(size, size, 0.0),
        Point3::new(0.0, size, 0.0),
        Point3::new(0.0, 0.0, size),
        Point3::new(size, 0.0, size),
        Point3::new(size, size, size),
        Point3::new(0.0, size, size),
    ];

    // 6 faces, two triangles each
    let faces = [
        // Front (z+)
        [4, 5, 6],
        [4, 6, 7],
        // Back (z-)
        [1, 0, 3],
        [1, 3, 2],
        // Right (x+)
        [5, 1, 2],
        [5, 2, 6],
        // Left (x-)
        [0, 4, 7],
        [0, 7, 3],
        // Top (y+)
        [7, 6, 2],
        [7, 2, 3],
        // Bottom (y-)
        [0, 1, 5],
        [0, 5, 4],
    ];

    build_mesh(&positions, &faces)
}

fn generate_sphere_mesh(radius: f64, slices: u32, stacks: u32) -> Mesh {
    let slices = slices as usize;
    let stacks = stacks as usize;

    let mut positions = vec![Point3::new(0.0, 0.0, radius)];
    for i in 1..stacks {
        let phi = PI * i as f64 / stacks as f64;
        let z = radius * phi.cos();
        let r = radius * phi.sin();

        for j in 0..slices {
            let theta = 2.0 * PI * j as f64 / slices as f64;
            positions.push(Point3::new(r * theta.cos(), r * theta.sin(), z));
        }
    }
    positions.push(Point3::new(0.0, 0.0, -radius));

    let top = 0;
    let bottom = positions.len() - 1;
    let ring = |i: usize, j: usize| 1 + (i - 1) * slices + j % slices;

    let mut faces = Vec::with_capacity(2 * slices * (stacks - 1));

    for j in 0..slices {
        faces.push([top, ring(1, j), ring(1, j + 1)]);
    }

    for i in 1..stacks - 1 {
        for j in 0..slices {
            let upper = ring(i, j);
            let upper_next = ring(i, j + 1);
            let lower = ring(i + 1, j);
            let lower_next = ring(i + 1, j + 1);

            faces.push([upper, lower, lower_next]);
            faces.push([upper, lower_next, upper_next]);
        }
    }

    for j in 0..slices {
        faces.push([bottom, ring(stacks - 1, j + 1), ring(stacks - 1, j)]);
    }

    build_mesh(&positions, &faces)
}
