// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! JSON mesh document: a point table and triangles that refer to it by id

use crate::error::{KernelError, Result};
use crate::geometry::{Mesh, Point, PointId};
use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub id: PointId,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Triangle by point ids, in winding order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriangleRecord {
    /// Optional label kept for the caller's bookkeeping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub a: PointId,
    pub b: PointId,
    pub c: PointId,
}

/// Serialized mesh as exchanged with the store that owns the data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshDocument {
    pub points: Vec<PointRecord>,
    pub triangles: Vec<TriangleRecord>,
}

impl MeshDocument {
    pub fn from_json_str(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|e| KernelError::Parse(e.to_string()))
    }

    pub fn to_json_string(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize mesh document")
    }

    /// Resolve the triangles against the point table
    pub fn to_mesh(&self) -> Result<Mesh> {
        let points: Vec<Point> = self
            .points
            .iter()
            .map(|record| Point::new(record.id, record.x, record.y, record.z))
            .collect();
        let faces: Vec<[PointId; 3]> = self
            .triangles
            .iter()
            .map(|record| [record.a, record.b, record.c])
            .collect();

        Mesh::from_indexed(&points, &faces)
    }

    /// Build a document from a mesh; triangles are labelled by position
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let points = mesh
            .points()
            .into_iter()
            .map(|point| PointRecord {
                id: point.id,
                x: point.position.x,
                y: point.position.y,
                z: point.position.z,
            })
            .collect();

        let triangles = mesh
            .triangles
            .iter()
            .enumerate()
            .map(|(index, triangle)| {
                let [a, b, c] = triangle.ids();
                TriangleRecord {
                    id: Some(index as u32),
                    a,
                    b,
                    c,
                }
            })
            .collect();

        Self { points, triangles }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Primitive;

    const TETRAHEDRON: &str = r#"{
        "points": [
            {"id": 1, "x": 0.0, "y": 0.0, "z": 0.0},
            {"id": 2, "x": 1.0, "y": 0.0, "z": 0.0},
            {"id": 3, "x": 0.0, "y": 0.0, "z": 1.0},
            {"id": 4, "x": 0.0, "y": 1.0, "z": 0.0}
        ],
        "triangles": [
            {"id": 10, "a": 1, "b": 2, "c": 3},
            {"a": 1, "b": 2, "c": 4},
            {"a": 1, "b": 3, "c": 4},
            {"a": 2, "b": 3, "c": 4}
        ]
    }"#;

    #[test]
    fn test_parse_document() {
        let document = MeshDocument::from_json_str(TETRAHEDRON).unwrap();
        assert_eq!(document.points.len(), 4);
        assert_eq!(document.triangles[0].id, Some(10));
        assert_eq!(document.triangles[1].id, None);

        let mesh = document.to_mesh().unwrap();
        assert_eq!(mesh.len(), 4);
        assert_eq!(mesh.triangles[3].ids(), [2, 3, 4]);
    }

    #[test]
    fn test_unknown_point_is_reported() {
        let source = r#"{
            "points": [{"id": 1, "x": 0, "y": 0, "z": 0}],
            "triangles": [{"a": 1, "b": 2, "c": 3}]
        }"#;
        let document = MeshDocument::from_json_str(source).unwrap();

        assert_eq!(document.to_mesh(), Err(KernelError::UnknownPoint { id: 2 }));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        assert!(matches!(
            MeshDocument::from_json_str("{\"points\": ["),
            Err(KernelError::Parse(_))
        ));
    }

    #[test]
    fn test_document_from_mesh() {
        let cube = Primitive::cube(1.0).to_mesh();
        let document = MeshDocument::from_mesh(&cube);

        assert_eq!(document.points.len(), 8);
        assert_eq!(document.triangles.len(), 12);
        assert_eq!(document.to_mesh().unwrap(), cube);

        let json = document.to_json_string().unwrap();
        assert_eq!(MeshDocument::from_json_str(&json).unwrap(), document);
    }
}
