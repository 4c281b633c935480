// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Manifold check scenarios

use anyhow::Result;
use trimesh_kernel::{check_manifold, is_manifold, Edge, ManifoldDefect, Mesh, Point, PointId, Primitive};

fn hourglass_points() -> Vec<Point> {
    vec![
        Point::new(1, 0.0, 0.0, 0.0),
        Point::new(2, 1.0, 0.0, 0.0),
        Point::new(3, 0.0, 0.0, 1.0),
        Point::new(4, 0.0, 1.0, 0.0),
        Point::new(5, 0.0, -1.0, 0.0),
        Point::new(6, 0.0, 0.0, -1.0),
        Point::new(7, -1.0, 0.0, 0.0),
    ]
}

const TETRAHEDRON: [[PointId; 3]; 4] = [[1, 2, 3], [1, 2, 4], [1, 3, 4], [2, 3, 4]];

#[test]
fn test_tetrahedron_is_manifold() -> Result<()> {
    let mesh = Mesh::from_indexed(&hourglass_points(), &TETRAHEDRON)?;
    assert!(is_manifold(&mesh));
    Ok(())
}

#[test]
fn test_hourglass_is_not_manifold() -> Result<()> {
    let faces = [
        [1, 2, 3],
        [1, 2, 4],
        [1, 3, 4],
        [2, 3, 4],
        [1, 5, 6],
        [1, 5, 7],
        [1, 6, 7],
        [5, 6, 7],
    ];
    let mesh = Mesh::from_indexed(&hourglass_points(), &faces)?;

    // Every edge is shared twice; only the pinched vertex gives it away
    assert_eq!(check_manifold(&mesh), Err(ManifoldDefect::OpenFan { vertex: 1 }));
    Ok(())
}

#[test]
fn test_three_triangles_on_one_edge() -> Result<()> {
    let mut faces = TETRAHEDRON.to_vec();
    faces.push([2, 3, 5]);
    let mesh = Mesh::from_indexed(&hourglass_points(), &faces)?;

    assert_eq!(
        check_manifold(&mesh),
        Err(ManifoldDefect::EdgeMultiplicity {
            edge: Edge::new(2, 3),
            count: 3
        })
    );
    Ok(())
}

#[test]
fn test_open_and_empty_meshes() -> Result<()> {
    let mesh = Mesh::from_indexed(&hourglass_points(), &TETRAHEDRON[..3])?;
    assert!(matches!(
        check_manifold(&mesh),
        Err(ManifoldDefect::EdgeMultiplicity { count: 1, .. })
    ));

    assert_eq!(check_manifold(&Mesh::empty()), Err(ManifoldDefect::Empty));
    Ok(())
}

#[test]
fn test_primitives_are_manifold() {
    let primitives = [
        Primitive::tetrahedron(2.0),
        Primitive::octahedron(1.0),
        Primitive::icosahedron(3.0),
        Primitive::cube(5.0),
        Primitive::sphere(1.0, 24, 12),
    ];

    for primitive in primitives {
        assert!(is_manifold(&primitive.to_mesh()), "{:?}", primitive);
    }
}

#[test]
fn test_manifold_ignores_winding_and_order() {
    let mut mesh = Primitive::icosahedron(1.0).to_mesh();
    mesh.triangles.reverse();
    for triangle in mesh.triangles.iter_mut().skip(1).step_by(3) {
        *triangle = triangle.reversed();
    }

    assert!(is_manifold(&mesh));
}
