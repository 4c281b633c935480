// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Consistent triangle winding
//!
//! Two triangles sharing an edge are consistently wound when they traverse
//! that edge in opposite directions. Starting from a seed triangle whose
//! winding is taken as reference, the resolver walks the triangle adjacency
//! graph breadth-first and flips every neighbour that runs a shared edge the
//! same way as the triangle it was reached from.
//!
//! Triangles are only ever reversed, so each keeps its vertex set.

use super::topology::{connected_components, edge_triangles};
use super::{DirectedEdge, Edge, Mesh, Triangle};
use ahash::AHashMap;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Triangle adjacency graph: triangles are nodes addressed by index, shared
/// canonical edges are the links
#[derive(Debug, Clone)]
pub struct TriangleGraph {
    owners: AHashMap<Edge, Vec<usize>>,
    size: usize,
}

impl TriangleGraph {
    pub fn new(mesh: &Mesh) -> Self {
        Self {
            owners: edge_triangles(mesh),
            size: mesh.len(),
        }
    }

    /// Indices of the triangles bordering `edge`
    pub fn owners(&self, edge: &Edge) -> &[usize] {
        self.owners.get(edge).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

/// Working state of one resolver run over a mesh
struct Resolver<'a> {
    graph: &'a TriangleGraph,
    triangles: Vec<Triangle>,
    finalized: Vec<bool>,
    flipped: usize,
}

impl<'a> Resolver<'a> {
    fn new(graph: &'a TriangleGraph, mesh: &Mesh) -> Self {
        Self {
            graph,
            triangles: mesh.triangles.clone(),
            finalized: vec![false; mesh.len()],
            flipped: 0,
        }
    }

    /// Propagate the seed's winding to everything reachable from it
    fn propagate(&mut self, seed: usize) {
        if self.finalized[seed] {
            return;
        }

        let graph = self.graph;
        self.finalized[seed] = true;
        let mut queue: VecDeque<DirectedEdge> =
            self.triangles[seed].directed_edges().into_iter().collect();

        while let Some(edge) = queue.pop_front() {
            for &index in graph.owners(&edge.canonical()) {
                if self.finalized[index] {
                    continue;
                }

                let mut triangle = self.triangles[index];
                if triangle.contains_directed(&edge) {
                    triangle = triangle.reversed();
                    self.triangles[index] = triangle;
                    self.flipped += 1;
                    trace!(triangle = index, from = edge.from, to = edge.to, "flipped winding");
                }
                self.finalized[index] = true;

                // The shared edge now runs to→from; queue the other two
                let shared = edge.reversed();
                queue.extend(
                    triangle
                        .directed_edges()
                        .into_iter()
                        .filter(|directed| *directed != shared),
                );
            }
        }
    }
}

/// Orient the mesh so shared edges run in opposite directions
///
/// The first triangle is the reference. The mesh is expected to be one
/// connected manifold component; triangles that cannot be reached from the
/// first one keep their input winding. Use [`orient_components`] for meshes
/// made of several pieces.
pub fn orient(mesh: &Mesh) -> Mesh {
    if mesh.is_empty() {
        return Mesh::empty();
    }

    let graph = TriangleGraph::new(mesh);
    let mut resolver = Resolver::new(&graph, mesh);
    resolver.propagate(0);

    debug!(
        triangles = mesh.len(),
        flipped = resolver.flipped,
        "resolved triangle orientation"
    );

    Mesh::from_triangles(resolver.triangles)
}

/// Split the mesh into edge-connected pieces and orient each one on its own
///
/// Each piece is seeded from its lowest-index triangle. Pieces come back in
/// the order of [`connected_components`].
pub fn orient_components(mesh: &Mesh) -> Vec<Mesh> {
    let graph = TriangleGraph::new(mesh);
    let mut resolver = Resolver::new(&graph, mesh);
    let components = connected_components(mesh);

    for component in &components {
        resolver.propagate(component[0]);
    }

    debug!(
        components = components.len(),
        flipped = resolver.flipped,
        "resolved triangle orientation per component"
    );

    components
        .into_iter()
        .map(|component| {
            Mesh::from_triangles(
                component
                    .into_iter()
                    .map(|index| resolver.triangles[index])
                    .collect(),
            )
        })
        .collect()
}

/// Check that every shared edge is traversed once in each direction
pub fn is_consistently_oriented(mesh: &Mesh) -> bool {
    let mut directed: AHashMap<DirectedEdge, usize> = AHashMap::new();
    for triangle in &mesh.triangles {
        for edge in triangle.directed_edges() {
            *directed.entry(edge).or_insert(0) += 1;
        }
    }

    directed.iter().all(|(edge, &count)| {
        count == 1 && directed.get(&edge.reversed()).map_or(true, |&back| back == 1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Primitive};

    fn unit_tetrahedron() -> Mesh {
        let points = [
            Point::new(1, 0.0, 0.0, 0.0),
            Point::new(2, 1.0, 0.0, 0.0),
            Point::new(3, 0.0, 0.0, 1.0),
            Point::new(4, 0.0, 1.0, 0.0),
        ];
        // Ascending ids, as a store would list them: windings disagree
        Mesh::from_indexed(&points, &[[1, 2, 3], [1, 2, 4], [1, 3, 4], [2, 3, 4]]).unwrap()
    }

    fn sorted_ids(triangle: &Triangle) -> [u32; 3] {
        let mut ids = triangle.ids();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_orient_fixes_inconsistent_windings() {
        let mesh = unit_tetrahedron();
        assert!(!is_consistently_oriented(&mesh));

        let oriented = orient(&mesh);
        assert!(is_consistently_oriented(&oriented));
    }

    #[test]
    fn test_orient_keeps_reference_and_vertex_sets() {
        let mesh = unit_tetrahedron();
        let oriented = orient(&mesh);

        assert_eq!(oriented.triangles[0], mesh.triangles[0]);
        for (before, after) in mesh.triangles.iter().zip(&oriented.triangles) {
            assert_eq!(sorted_ids(before), sorted_ids(after));
        }
    }

    #[test]
    fn test_orient_scrambled_sphere() {
        let mut mesh = Primitive::sphere(2.0, 10, 6).to_mesh();
        for (index, triangle) in mesh.triangles.iter_mut().enumerate() {
            if index % 3 == 1 {
                *triangle = triangle.reversed();
            }
        }
        assert!(!is_consistently_oriented(&mesh));

        let oriented = orient(&mesh);
        assert!(is_consistently_oriented(&oriented));
    }

    #[test]
    fn test_orient_components() {
        let mut mesh = unit_tetrahedron();
        mesh.triangles.extend(
            Primitive::cube(1.0)
                .translated(5.0, 5.0, 5.0, 100)
                .triangles
                .into_iter()
                .map(|triangle| triangle.reversed()),
        );

        let pieces = orient_components(&mesh);
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].len(), 4);
        assert_eq!(pieces[1].len(), 12);
        assert!(pieces.iter().all(is_consistently_oriented));
    }

    #[test]
    fn test_orient_empty_mesh() {
        assert!(orient(&Mesh::empty()).is_empty());
        assert!(orient_components(&Mesh::empty()).is_empty());
    }
}
