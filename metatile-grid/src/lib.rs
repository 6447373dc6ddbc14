//! A library for metatile grid calculations in the Spherical Mercator tile pyramid
//!
//! ## Metatile cells
//!
//! ```rust
//! use metatile_grid::{CellOrigin, GridDimensions, Metatile, TileAddress};
//!
//! let metatile = Metatile::new(4).unwrap();
//! let tile = TileAddress::new(2, 3, 2);
//! assert_eq!(metatile.dimensions(2).unwrap(), GridDimensions { dx: 2, dy: 2 });
//! assert_eq!(metatile.origin_of(&tile).unwrap(), CellOrigin { x0: 2, y0: 2 });
//! assert_eq!(
//!     metatile.tiles(&tile).unwrap(),
//!     vec![
//!         TileAddress::new(2, 2, 2),
//!         TileAddress::new(2, 2, 3),
//!         TileAddress::new(2, 3, 2),
//!         TileAddress::new(2, 3, 3),
//!     ]
//! );
//! ```
//!
//! ## Bounding boxes
//!
//! ```rust
//! use metatile_grid::{Metatile, TileAddress, ORIGIN_SHIFT};
//!
//! let metatile = Metatile::default();
//! let bbox = metatile.bounding_box(&"0/0/0".parse::<TileAddress>().unwrap()).unwrap();
//! assert!((bbox.minx + ORIGIN_SHIFT).abs() < 0.01);
//! assert!((bbox.maxy - 20037508.34).abs() < 0.01);
//! ```

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod error;
mod geometry;
mod metatile;
mod metatile_iterator;
mod tile;

pub use error::GridError;
pub use geometry::{
    resolution, span_bounds, tile_length, BoundingBox, EARTH_CIRCUMFERENCE, EARTH_RADIUS,
    MAX_RESOLUTION, MAX_ZOOM, ORIGIN_SHIFT, TILE_SIZE,
};
pub use metatile::{CellOrigin, GridConfig, GridDimensions, Metatile, PixelDimensions};
pub use metatile_iterator::MetatileIterator;
pub use tile::TileAddress;
