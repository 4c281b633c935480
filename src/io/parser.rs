// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Coordinate triple parsing

use crate::error::{KernelError, Result};
use nalgebra::Point3;

/// Parse `"x,y,z"` into a position; whitespace around each value is ignored
pub fn parse_coordinates(source: &str) -> Result<Point3<f64>> {
    let values = source
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| KernelError::Parse(format!("invalid coordinate {:?} in {:?}", part.trim(), source)))
        })
        .collect::<Result<Vec<f64>>>()?;

    match values.as_slice() {
        [x, y, z] => Ok(Point3::new(*x, *y, *z)),
        _ => Err(KernelError::Parse(format!(
            "expected three comma-separated coordinates, got {:?}",
            source
        ))),
    }
}
