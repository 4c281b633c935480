// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Loading meshes from JSON documents and querying them

use anyhow::Result;
use approx::assert_relative_eq;
use std::io::Write;
use tempfile::NamedTempFile;
use trimesh_kernel::io::{load_mesh, save_mesh, MeshDocument};
use trimesh_kernel::{analyze, Kernel, KernelConfig, KernelError, Primitive};

const SCRAMBLED_TETRAHEDRON: &str = r#"{
    "points": [
        {"id": 40, "x": 0.0, "y": 1.0, "z": 0.0},
        {"id": 10, "x": 0.0, "y": 0.0, "z": 0.0},
        {"id": 30, "x": 0.0, "y": 0.0, "z": 1.0},
        {"id": 20, "x": 1.0, "y": 0.0, "z": 0.0}
    ],
    "triangles": [
        {"id": 1, "a": 10, "b": 20, "c": 30},
        {"id": 2, "a": 20, "b": 40, "c": 10},
        {"id": 3, "a": 10, "b": 30, "c": 40},
        {"id": 4, "a": 40, "b": 30, "c": 20}
    ]
}"#;

#[test]
fn test_load_and_measure_document() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(file, "{}", SCRAMBLED_TETRAHEDRON)?;

    let mesh = load_mesh(file.path())?;
    let stats = analyze(&mesh);

    assert!(stats.is_manifold);
    assert_eq!(stats.point_count, 4);
    assert_eq!(stats.triangle_count, 4);
    assert_relative_eq!(stats.volume.unwrap_or_default(), 1.0 / 6.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_conflicting_point_is_rejected() -> Result<()> {
    let source = r#"{
        "points": [
            {"id": 1, "x": 0.0, "y": 0.0, "z": 0.0},
            {"id": 1, "x": 1.0, "y": 0.0, "z": 0.0}
        ],
        "triangles": []
    }"#;

    let document = MeshDocument::from_json_str(source)?;
    assert_eq!(document.to_mesh(), Err(KernelError::ConflictingPoint { id: 1 }));
    Ok(())
}

#[test]
fn test_saved_mesh_answers_the_same_queries() -> Result<()> {
    let file = NamedTempFile::new()?;
    let cube = Primitive::cube(4.0).to_mesh();
    save_mesh(&cube, file.path())?;

    let kernel = Kernel::with_config(KernelConfig {
        exterior_margin: 2.5,
        ..KernelConfig::default()
    })?;
    let loaded = load_mesh(file.path())?;

    assert_relative_eq!(kernel.mesh_volume(&loaded)?, 64.0, epsilon = 1e-9);
    assert!(kernel.is_point_inside_mesh(&nalgebra::Point3::new(1.3, 2.2, 0.7), &loaded)?);
    Ok(())
}

#[test]
fn test_config_file_drives_kernel() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "plane_thickness = 0.01")?;
    writeln!(file, "jitter = 0.2")?;

    let config = KernelConfig::from_file(file.path())?;
    let kernel = Kernel::with_config(config)?;

    assert_eq!(kernel.config().plane_thickness, 0.01);
    assert_eq!(kernel.config().jitter, 0.2);
    assert_eq!(kernel.config().exterior_margin, 1.0);
    Ok(())
}
