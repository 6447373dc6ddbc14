//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile addresses in XYZ adressing scheme

use crate::error::GridError;
use crate::geometry::{tile_length, MAX_ZOOM};
use std::fmt;
use std::str::FromStr;

/// Tile in the power-of-two pyramid (row 0 at the top)
#[derive(Serialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct TileAddress {
    pub z: u8,
    pub x: u32,
    pub y: u32,
}

impl TileAddress {
    pub fn new(z: u8, x: u32, y: u32) -> TileAddress {
        TileAddress { z, x, y }
    }

    /// Check zoom level and that `x` and `y` are within `[0, 2^z)`.
    pub fn validate(&self) -> Result<(), GridError> {
        check_zoom(self.z)?;
        let maxidx = tile_length(self.z);
        if self.x as u64 >= maxidx || self.y as u64 >= maxidx {
            return Err(GridError::InvalidCoordinate(format!(
                "tile {} outside of zoom level {} (0 <= x,y < {})",
                self, self.z, maxidx
            )));
        }
        Ok(())
    }
}

pub(crate) fn check_zoom(zoom: u8) -> Result<(), GridError> {
    if zoom > MAX_ZOOM {
        Err(GridError::InvalidCoordinate(format!(
            "zoom level {} exceeds maximum zoom {}",
            zoom, MAX_ZOOM
        )))
    } else {
        Ok(())
    }
}

impl fmt::Display for TileAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

impl FromStr for TileAddress {
    type Err = GridError;

    /// Parse and validate a `z/x/y` path
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('/').collect();
        if parts.len() != 3 {
            return Err(GridError::InvalidCoordinate(format!(
                "expected z/x/y, got '{}'",
                s
            )));
        }
        let invalid = |name: &str, val: &str| {
            GridError::InvalidCoordinate(format!("{} '{}' is not a non-negative integer", name, val))
        };
        let z = parts[0].parse::<u8>().map_err(|_| invalid("z", parts[0]))?;
        let x = parts[1].parse::<u32>().map_err(|_| invalid("x", parts[1]))?;
        let y = parts[2].parse::<u32>().map_err(|_| invalid("y", parts[2]))?;
        let tile = TileAddress { z, x, y };
        tile.validate()?;
        Ok(tile)
    }
}
