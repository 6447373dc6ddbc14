//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Metatile grids

use crate::error::GridError;
use crate::geometry::{span_bounds, tile_length, BoundingBox, TILE_SIZE};
use crate::metatile_iterator::MetatileIterator;
use crate::tile::{check_zoom, TileAddress};
use std::cmp;
use std::convert::TryFrom;

//       ◄─── dx ──►
//   ▲   ╬═════════╦═════════╬─────────┼─
//   |   ║         │         ║         │
//  dy   ║  x0,y0  │  x1,y0  ║   ...   │
//   |   ║         │         ║         │
//   ▼  ─╠───── size = 4 ────╣─────────┼─
//       ║         │         ║         │
//       ║  x0,y1  │  x1,y1  ║   ...   │
//       ║         │         ║         │
//      ─╬═════════╬═════════╬─────────┼─

/// Metatile configuration
#[derive(Deserialize, Serialize, PartialEq, Clone, Debug)]
pub struct GridConfig {
    /// Target number of tiles per metatile. The cell edge is `floor(sqrt(size))`.
    #[serde(default = "default_size")]
    pub size: u32,
}

pub fn default_size() -> u32 {
    1
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            size: default_size(),
        }
    }
}

/// Number of tiles per cell edge
#[derive(Serialize, PartialEq, Eq, Clone, Copy, Debug)]
pub struct GridDimensions {
    pub dx: u32,
    pub dy: u32,
}

/// Cell size in pixels
#[derive(Serialize, PartialEq, Eq, Clone, Copy, Debug)]
pub struct PixelDimensions {
    pub width: u32,
    pub height: u32,
}

/// Top-left tile of a cell
#[derive(Serialize, PartialEq, Eq, Clone, Copy, Debug)]
pub struct CellOrigin {
    pub x0: u32,
    pub y0: u32,
}

/// Metatile grid calculator
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Metatile {
    size: u32,
    /// `floor(sqrt(size))`
    edge: u32,
}

impl Default for Metatile {
    fn default() -> Self {
        Metatile { size: 1, edge: 1 }
    }
}

impl TryFrom<&GridConfig> for Metatile {
    type Error = GridError;

    fn try_from(cfg: &GridConfig) -> Result<Self, Self::Error> {
        Metatile::new(cfg.size)
    }
}

impl Metatile {
    pub fn new(size: u32) -> Result<Metatile, GridError> {
        if size < 1 {
            return Err(GridError::InvalidConfig { size });
        }
        let edge = isqrt(size);
        debug!("Metatile size {} -> {}x{} tiles per cell", size, edge, edge);
        Ok(Metatile { size, edge })
    }
    pub fn size(&self) -> u32 {
        self.size
    }
    /// Cell dimensions at a zoom level.
    ///
    /// Levels with less than `floor(sqrt(size))` tiles per row fall back to single tiles.
    pub fn dimensions(&self, zoom: u8) -> Result<GridDimensions, GridError> {
        check_zoom(zoom)?;
        let d = if tile_length(zoom) < self.edge as u64 {
            1
        } else {
            self.edge
        };
        Ok(GridDimensions { dx: d, dy: d })
    }
    pub fn dimensions_in_pixels(&self, zoom: u8) -> Result<PixelDimensions, GridError> {
        let GridDimensions { dx, dy } = self.dimensions(zoom)?;
        Ok(PixelDimensions {
            width: dx * TILE_SIZE,
            height: dy * TILE_SIZE,
        })
    }
    /// Top-left tile of the cell containing `tile`.
    ///
    /// Cells are aligned to tile (0, 0). The cell is not clipped to the pyramid,
    /// so its tiles may extend past the last row or column.
    pub fn origin_of(&self, tile: &TileAddress) -> Result<CellOrigin, GridError> {
        tile.validate()?;
        let GridDimensions { dx, dy } = self.dimensions(tile.z)?;
        Ok(CellOrigin {
            x0: tile.x - tile.x % dx,
            y0: tile.y - tile.y % dy,
        })
    }
    /// Tiles of the cell containing `tile`, column by column.
    pub fn iter_tiles(&self, tile: &TileAddress) -> Result<MetatileIterator, GridError> {
        let origin = self.origin_of(tile)?;
        let dims = self.dimensions(tile.z)?;
        Ok(MetatileIterator::new(tile.z, origin, dims))
    }
    /// All tiles of the cell containing `tile` in column-major order.
    ///
    /// Tiles beyond `2^z - 1` are not filtered out.
    pub fn tiles(&self, tile: &TileAddress) -> Result<Vec<TileAddress>, GridError> {
        let tiles: Vec<TileAddress> = self.iter_tiles(tile)?.collect();
        debug!("Metatile of {}: {} tiles", tile, tiles.len());
        Ok(tiles)
    }
    /// Extent of the `size` x `size` tile block starting at `tile`, clipped to the pyramid.
    ///
    /// The block starts at the given tile, not at its cell origin.
    pub fn bounding_box(&self, tile: &TileAddress) -> Result<BoundingBox, GridError> {
        tile.validate()?;
        let tile_len = tile_length(tile.z);
        let size = self.size as u64;
        let width = cmp::min(cmp::min(size, tile_len), tile_len - tile.x as u64);
        let height = cmp::min(cmp::min(size, tile_len), tile_len - tile.y as u64);
        Ok(span_bounds(
            tile.z,
            tile.x as u64,
            tile.y as u64,
            width,
            height,
        ))
    }
    /// Extent of a single tile
    pub fn tile_bounding_box(&self, tile: &TileAddress) -> Result<BoundingBox, GridError> {
        tile.validate()?;
        Ok(span_bounds(tile.z, tile.x as u64, tile.y as u64, 1, 1))
    }
    /// Extent of the cell containing `tile`, clipped to the pyramid
    pub fn cell_bounding_box(&self, tile: &TileAddress) -> Result<BoundingBox, GridError> {
        let CellOrigin { x0, y0 } = self.origin_of(tile)?;
        let GridDimensions { dx, dy } = self.dimensions(tile.z)?;
        let tile_len = tile_length(tile.z);
        let width = cmp::min(dx as u64, tile_len - x0 as u64);
        let height = cmp::min(dy as u64, tile_len - y0 as u64);
        Ok(span_bounds(tile.z, x0 as u64, y0 as u64, width, height))
    }
}

/// Integer square root (rounded down)
fn isqrt(n: u32) -> u32 {
    let n = n as u64;
    let mut root = (n as f64).sqrt() as u64;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root as u32
}
