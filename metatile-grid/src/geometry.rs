//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Spherical Mercator (EPSG:3857) constants and tile geometry

use std::f64::consts;

/// Edge length of a raster tile, in pixels.
pub const TILE_SIZE: u32 = 256;
/// Radius of the Mercator sphere (WGS84 semi-major axis), in meters.
pub const EARTH_RADIUS: f64 = 6378137.0;
pub const EARTH_CIRCUMFERENCE: f64 = EARTH_RADIUS * 2.0 * consts::PI;
/// Offset between the grid origin (top-left corner) and the projection origin.
pub const ORIGIN_SHIFT: f64 = EARTH_CIRCUMFERENCE / 2.0;
/// Meters per pixel at zoom level 0.
pub const MAX_RESOLUTION: f64 = EARTH_CIRCUMFERENCE / TILE_SIZE as f64;
/// Deepest supported zoom level.
///
/// Cells at the last column or row may overhang the pyramid by up to 65534 tiles
/// (`floor(sqrt(u32::MAX))` - 1), which still fits into `u32` coordinates below `2^31`.
pub const MAX_ZOOM: u8 = 31;

/// Mercator extent in meters
#[derive(Serialize, PartialEq, Clone, Copy, Debug)]
pub struct BoundingBox {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl BoundingBox {
    /// Coordinates ordered as `[minx, miny, maxx, maxy]`
    pub fn to_array(&self) -> [f64; 4] {
        [self.minx, self.miny, self.maxx, self.maxy]
    }
    pub fn width(&self) -> f64 {
        self.maxx - self.minx
    }
    pub fn height(&self) -> f64 {
        self.maxy - self.miny
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(bbox: BoundingBox) -> [f64; 4] {
        bbox.to_array()
    }
}

/// Number of tile columns (and rows) at a zoom level.
///
/// `zoom` must not exceed 63.
pub fn tile_length(zoom: u8) -> u64 {
    1u64 << zoom
}

/// Meters per pixel at a zoom level
pub fn resolution(zoom: u8) -> f64 {
    MAX_RESOLUTION / tile_length(zoom) as f64
}

/// Extent of a `width` x `height` block of tiles with top-left tile `(xtile, ytile)`.
///
/// Tile rows grow southwards, Mercator y grows northwards.
pub fn span_bounds(zoom: u8, xtile: u64, ytile: u64, width: u64, height: u64) -> BoundingBox {
    let res = resolution(zoom);
    let tile_size = TILE_SIZE as f64;
    BoundingBox {
        minx: (xtile as f64 * tile_size) * res - ORIGIN_SHIFT,
        miny: -((ytile + height) as f64 * tile_size) * res + ORIGIN_SHIFT,
        maxx: ((xtile + width) as f64 * tile_size) * res - ORIGIN_SHIFT,
        maxy: ORIGIN_SHIFT - (ytile as f64 * tile_size) * res,
    }
}
