// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - mesh documents and coordinate parsing

mod document;
mod importer;
mod parser;

pub use document::{MeshDocument, PointRecord, TriangleRecord};
pub use importer::{load_mesh, save_mesh};
pub use parser::parse_coordinates;
