// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh document file import and export

use super::MeshDocument;
use crate::geometry::Mesh;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a JSON mesh document and resolve it into a mesh
pub fn load_mesh(path: impl AsRef<Path>) -> Result<Mesh> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read mesh file: {}", path.display()))?;

    let document = MeshDocument::from_json_str(&source)
        .with_context(|| format!("Failed to parse mesh file: {}", path.display()))?;

    document
        .to_mesh()
        .with_context(|| format!("Invalid mesh in file: {}", path.display()))
}

/// Write a mesh as a JSON mesh document
pub fn save_mesh(mesh: &Mesh, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = MeshDocument::from_mesh(mesh).to_json_string()?;
    fs::write(path, json).with_context(|| format!("Failed to write mesh file: {}", path.display()))
}
