// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh topology: edge tallies, vertex links and the manifold check
//!
//! A mesh is manifold when every edge borders exactly two triangles and the
//! triangles around every vertex form one closed fan. The second condition
//! rejects meshes such as two closed shells touching at a single vertex,
//! where every edge count is fine but the vertex neighbourhood is two rings.

use super::{Edge, Mesh, PointId};
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use tracing::debug;

/// First reason a mesh failed the manifold check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManifoldDefect {
    /// No triangles at all
    Empty,
    /// Edge bordered by a number of triangles other than two
    EdgeMultiplicity { edge: Edge, count: usize },
    /// Triangles around the vertex do not form a single closed fan
    OpenFan { vertex: PointId },
}

impl fmt::Display for ManifoldDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "mesh has no triangles"),
            Self::EdgeMultiplicity { edge, count } => {
                write!(f, "edge {} is shared by {} triangles", edge, count)
            }
            Self::OpenFan { vertex } => {
                write!(f, "triangles around point {} do not form a closed fan", vertex)
            }
        }
    }
}

/// Per-vertex link: for vertex v, the graph whose nodes are v's neighbours
/// and whose edges are the opposite sides of the triangles around v
pub type VertexLinks = AHashMap<PointId, AHashMap<PointId, AHashSet<PointId>>>;

/// Number of triangles bordering each canonical edge
pub fn edge_counts(mesh: &Mesh) -> AHashMap<Edge, usize> {
    let mut counts: AHashMap<Edge, usize> = AHashMap::with_capacity(mesh.len() * 3 / 2);
    for triangle in &mesh.triangles {
        for edge in triangle.edges() {
            *counts.entry(edge).or_insert(0) += 1;
        }
    }
    counts
}

/// Indices of the triangles bordering each canonical edge
pub fn edge_triangles(mesh: &Mesh) -> AHashMap<Edge, Vec<usize>> {
    let mut owners: AHashMap<Edge, Vec<usize>> = AHashMap::with_capacity(mesh.len() * 3 / 2);
    for (index, triangle) in mesh.triangles.iter().enumerate() {
        for edge in triangle.edges() {
            owners.entry(edge).or_default().push(index);
        }
    }
    owners
}

/// Link graph of every vertex
pub fn vertex_links(mesh: &Mesh) -> VertexLinks {
    let mut links: VertexLinks = AHashMap::new();
    for triangle in &mesh.triangles {
        let ids = triangle.ids();
        for i in 0..3 {
            let (p, q) = (ids[(i + 1) % 3], ids[(i + 2) % 3]);
            let link = links.entry(ids[i]).or_default();
            link.entry(p).or_default().insert(q);
            link.entry(q).or_default().insert(p);
        }
    }
    links
}

/// Every edge must border exactly two triangles
pub fn check_edge_multiplicity(mesh: &Mesh) -> Result<(), ManifoldDefect> {
    if mesh.is_empty() {
        return Err(ManifoldDefect::Empty);
    }

    let defect = edge_counts(mesh)
        .into_iter()
        .filter(|&(_, count)| count != 2)
        .min_by_key(|&(edge, _)| edge);

    match defect {
        Some((edge, count)) => {
            debug!(%edge, count, "edge multiplicity check failed");
            Err(ManifoldDefect::EdgeMultiplicity { edge, count })
        }
        None => Ok(()),
    }
}

/// The triangles around every vertex must form one closed fan
pub fn check_closed_fans(mesh: &Mesh) -> Result<(), ManifoldDefect> {
    if mesh.is_empty() {
        return Err(ManifoldDefect::Empty);
    }

    let links = vertex_links(mesh);
    let mut vertices: Vec<PointId> = links.keys().copied().collect();
    vertices.sort_unstable();

    for vertex in vertices {
        if !is_single_cycle(&links[&vertex]) {
            debug!(vertex, "closed fan check failed");
            return Err(ManifoldDefect::OpenFan { vertex });
        }
    }

    Ok(())
}

/// Check whether a vertex link is one cycle through all of its nodes
///
/// Every node must have exactly two link neighbours. The walk then starts
/// anywhere, keeps stepping to an unvisited neighbour of the current node and
/// must finally step back to the start. A second ring sharing the vertex
/// leaves nodes unvisited when the walk runs out of neighbours.
fn is_single_cycle(link: &AHashMap<PointId, AHashSet<PointId>>) -> bool {
    if link.len() < 3 || link.values().any(|next| next.len() != 2) {
        return false;
    }

    let Some(&first) = link.keys().min() else {
        return false;
    };
    let mut remaining: AHashSet<PointId> = link.keys().copied().collect();
    remaining.remove(&first);

    let mut current = first;
    while !remaining.is_empty() {
        let next = link[&current]
            .iter()
            .copied()
            .find(|candidate| remaining.contains(candidate));

        match next {
            Some(next) => {
                remaining.remove(&next);
                current = next;
            }
            None => return false,
        }
    }

    link[&current].contains(&first)
}

/// Run both manifold passes and report the first defect
pub fn check_manifold(mesh: &Mesh) -> Result<(), ManifoldDefect> {
    check_edge_multiplicity(mesh)?;
    check_closed_fans(mesh)
}

/// Check if mesh is a closed manifold
pub fn is_manifold(mesh: &Mesh) -> bool {
    check_manifold(mesh).is_ok()
}

/// Triangle indices grouped into pieces connected through shared edges
///
/// Components are ordered by their lowest triangle index, and each component
/// lists its triangles in ascending order.
pub fn connected_components(mesh: &Mesh) -> Vec<Vec<usize>> {
    let owners = edge_triangles(mesh);
    let mut visited = vec![false; mesh.len()];
    let mut components = Vec::new();

    for seed in 0..mesh.len() {
        if visited[seed] {
            continue;
        }

        visited[seed] = true;
        let mut component = vec![seed];
        let mut queue = VecDeque::from([seed]);

        while let Some(index) = queue.pop_front() {
            for edge in mesh.triangles[index].edges() {
                for &neighbour in &owners[&edge] {
                    if !visited[neighbour] {
                        visited[neighbour] = true;
                        component.push(neighbour);
                        queue.push_back(neighbour);
                    }
                }
            }
        }

        component.sort_unstable();
        components.push(component);
    }

    components
}
