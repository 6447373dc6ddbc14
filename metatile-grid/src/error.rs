//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Error types

use thiserror::Error;

/// Errors returned by metatile grid calculations.
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum GridError {
    /// Metatile size must be at least one tile.
    #[error("invalid metatile size {size} (expected an integer >= 1)")]
    InvalidConfig { size: u32 },

    /// Zoom level or tile coordinate outside of the tile pyramid.
    #[error("invalid tile coordinate: {0}")]
    InvalidCoordinate(String),
}
