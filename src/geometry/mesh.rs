// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh representation: points with ids, wound triangles, canonical edges

use super::BoundingBox;
use crate::error::{KernelError, Result};
use ahash::{AHashMap, AHashSet};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned to a point by whoever owns the data
pub type PointId = u32;

/// Point with an opaque identifier and a position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: PointId,
    pub position: Point3<f64>,
}

impl Point {
    pub fn new(id: PointId, x: f64, y: f64, z: f64) -> Self {
        Self {
            id,
            position: Point3::new(x, y, z),
        }
    }

    pub fn from_position(id: PointId, position: Point3<f64>) -> Self {
        Self { id, position }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(p {}: [{}, {}, {}])",
            self.id, self.position.x, self.position.y, self.position.z
        )
    }
}

/// Unordered pair of point ids, lowest id first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub lo: PointId,
    pub hi: PointId,
}

impl Edge {
    pub fn new(p: PointId, q: PointId) -> Self {
        if p < q {
            Self { lo: p, hi: q }
        } else {
            Self { lo: q, hi: p }
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lo, self.hi)
    }
}

/// Edge as traversed by a particular triangle winding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectedEdge {
    pub from: PointId,
    pub to: PointId,
}

impl DirectedEdge {
    pub fn new(from: PointId, to: PointId) -> Self {
        Self { from, to }
    }

    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    pub fn canonical(&self) -> Edge {
        Edge::new(self.from, self.to)
    }
}

/// Triangle defined by three points; the listing order is its winding
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub vertices: [Point; 3],
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    pub fn a(&self) -> &Point {
        &self.vertices[0]
    }

    pub fn b(&self) -> &Point {
        &self.vertices[1]
    }

    pub fn c(&self) -> &Point {
        &self.vertices[2]
    }

    pub fn ids(&self) -> [PointId; 3] {
        [self.vertices[0].id, self.vertices[1].id, self.vertices[2].id]
    }

    pub fn positions(&self) -> [&Point3<f64>; 3] {
        [
            &self.vertices[0].position,
            &self.vertices[1].position,
            &self.vertices[2].position,
        ]
    }

    /// The three canonical edges
    pub fn edges(&self) -> [Edge; 3] {
        let [a, b, c] = self.ids();
        [Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)]
    }

    /// Edges in winding order: a→b, b→c, c→a
    pub fn directed_edges(&self) -> [DirectedEdge; 3] {
        let [a, b, c] = self.ids();
        [
            DirectedEdge::new(a, b),
            DirectedEdge::new(b, c),
            DirectedEdge::new(c, a),
        ]
    }

    pub fn contains_directed(&self, edge: &DirectedEdge) -> bool {
        self.directed_edges().contains(edge)
    }

    /// Same points with the winding flipped: (a, b, c) becomes (c, b, a)
    pub fn reversed(&self) -> Self {
        let [a, b, c] = self.vertices;
        Self::new(c, b, a)
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(t: {}, {}, {})",
            self.vertices[0], self.vertices[1], self.vertices[2]
        )
    }
}

/// Unordered collection of triangles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn empty() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// Build a mesh from a point table and faces that refer to point ids
    pub fn from_indexed(points: &[Point], faces: &[[PointId; 3]]) -> Result<Self> {
        let mut table: AHashMap<PointId, Point> = AHashMap::with_capacity(points.len());
        for point in points {
            if let Some(existing) = table.insert(point.id, *point) {
                if existing.position != point.position {
                    return Err(KernelError::ConflictingPoint { id: point.id });
                }
            }
        }

        let lookup = |id: PointId| {
            table
                .get(&id)
                .copied()
                .ok_or(KernelError::UnknownPoint { id })
        };

        let triangles = faces
            .iter()
            .map(|&[a, b, c]| Ok(Triangle::new(lookup(a)?, lookup(b)?, lookup(c)?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { triangles })
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Distinct points in first-seen order
    pub fn points(&self) -> Vec<Point> {
        let mut seen = AHashSet::new();
        self.triangles
            .iter()
            .flat_map(|triangle| triangle.vertices.iter())
            .filter(|point| seen.insert(point.id))
            .copied()
            .collect()
    }

    /// Compute bounding box
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_mesh(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corner_points() -> Vec<Point> {
        vec![
            Point::new(1, 0.0, 0.0, 0.0),
            Point::new(2, 1.0, 0.0, 0.0),
            Point::new(3, 0.0, 0.0, 1.0),
            Point::new(4, 0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_edge_is_order_independent() {
        assert_eq!(Edge::new(7, 3), Edge::new(3, 7));
        assert_eq!(Edge::new(7, 3).lo, 3);
        assert_eq!(DirectedEdge::new(7, 3).canonical(), Edge::new(3, 7));
    }

    #[test]
    fn test_triangle_edges() {
        let points = corner_points();
        let triangle = Triangle::new(points[2], points[0], points[1]);

        assert_eq!(
            triangle.edges(),
            [Edge::new(1, 3), Edge::new(1, 2), Edge::new(2, 3)]
        );
        assert!(triangle.contains_directed(&DirectedEdge::new(3, 1)));
        assert!(!triangle.contains_directed(&DirectedEdge::new(1, 3)));
    }

    #[test]
    fn test_reversal_keeps_vertex_set() {
        let points = corner_points();
        let triangle = Triangle::new(points[0], points[1], points[2]);
        let flipped = triangle.reversed();

        let mut before = triangle.ids();
        let mut after = flipped.ids();
        before.sort();
        after.sort();
        assert_eq!(before, after);
        assert!(flipped.contains_directed(&DirectedEdge::new(2, 1)));
    }

    #[test]
    fn test_from_indexed() {
        let mesh = Mesh::from_indexed(&corner_points(), &[[1, 2, 3], [1, 2, 4]]).unwrap();
        assert_eq!(mesh.len(), 2);
        assert_eq!(mesh.points().len(), 4);
        assert_eq!(mesh.triangles[1].c().id, 4);
    }

    #[test]
    fn test_from_indexed_rejects_unknown_point() {
        let result = Mesh::from_indexed(&corner_points(), &[[1, 2, 9]]);
        assert_eq!(result, Err(KernelError::UnknownPoint { id: 9 }));
    }

    #[test]
    fn test_from_indexed_rejects_conflicting_point() {
        let mut points = corner_points();
        points.push(Point::new(1, 5.0, 5.0, 5.0));
        let result = Mesh::from_indexed(&points, &[[1, 2, 3]]);
        assert_eq!(result, Err(KernelError::ConflictingPoint { id: 1 }));
    }

    #[test]
    fn test_point_display() {
        let point = Point::new(1, 0.2, 0.4, 3.0);
        assert_eq!(point.to_string(), "(p 1: [0.2, 0.4, 3])");
    }
}
