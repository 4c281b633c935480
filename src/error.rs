// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Kernel error types

use crate::geometry::{ManifoldDefect, PointId};
use thiserror::Error;

/// Errors raised by the checked kernel API and by mesh construction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KernelError {
    /// Volume and containment queries need a closed manifold mesh
    #[error("mesh is not manifold: {0}")]
    NotManifold(ManifoldDefect),

    /// A face refers to a point id that was never supplied
    #[error("unknown point id {id}")]
    UnknownPoint { id: PointId },

    /// The same point id was supplied twice with different coordinates
    #[error("point id {id} supplied with conflicting coordinates")]
    ConflictingPoint { id: PointId },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, KernelError>;
