//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Metatile iterators

use crate::metatile::{CellOrigin, GridDimensions};
use crate::tile::TileAddress;

/// Column-by-column iterator over the tiles of one cell
#[derive(Clone, Debug)]
pub struct MetatileIterator {
    z: u8,
    origin: CellOrigin,
    dims: GridDimensions,
    /// Current offsets from the cell origin
    dx: u32,
    dy: u32,
    finished: bool,
}

impl MetatileIterator {
    pub fn new(z: u8, origin: CellOrigin, dims: GridDimensions) -> MetatileIterator {
        MetatileIterator {
            z,
            origin,
            dims,
            dx: 0,
            dy: 0,
            // Return "empty" iterator for empty cells
            finished: dims.dx == 0 || dims.dy == 0,
        }
    }
}

impl Iterator for MetatileIterator {
    type Item = TileAddress;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let current = TileAddress {
            z: self.z,
            x: self.origin.x0 + self.dx,
            y: self.origin.y0 + self.dy,
        };
        if self.dy < self.dims.dy - 1 {
            self.dy += 1;
        } else if self.dx < self.dims.dx - 1 {
            self.dx += 1;
            self.dy = 0;
        } else {
            self.finished = true;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.finished {
            0
        } else {
            let total = self.dims.dx as usize * self.dims.dy as usize;
            total - (self.dx as usize * self.dims.dy as usize + self.dy as usize)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MetatileIterator {}

#[test]
fn test_cell_iter() {
    let origin = CellOrigin { x0: 2, y0: 2 };
    let dims = GridDimensions { dx: 2, dy: 2 };
    let cells = MetatileIterator::new(2, origin, dims)
        .map(|t| (t.z, t.x, t.y))
        .collect::<Vec<_>>();
    assert_eq!(cells, vec![(2, 2, 2), (2, 2, 3), (2, 3, 2), (2, 3, 3)]);

    let iter = MetatileIterator::new(
        5,
        CellOrigin { x0: 3, y0: 6 },
        GridDimensions { dx: 3, dy: 3 },
    );
    assert_eq!(iter.len(), 9);
    let cells = iter.map(|t| (t.x, t.y)).collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![
            (3, 6),
            (3, 7),
            (3, 8),
            (4, 6),
            (4, 7),
            (4, 8),
            (5, 6),
            (5, 7),
            (5, 8)
        ]
    );

    let cells = MetatileIterator::new(
        0,
        CellOrigin { x0: 0, y0: 0 },
        GridDimensions { dx: 1, dy: 1 },
    )
    .collect::<Vec<_>>();
    assert_eq!(cells, vec![TileAddress::new(0, 0, 0)]);
}

#[test]
fn test_empty_cell() {
    let mut iter = MetatileIterator::new(
        3,
        CellOrigin { x0: 0, y0: 0 },
        GridDimensions { dx: 0, dy: 0 },
    );
    assert_eq!(iter.len(), 0);
    assert_eq!(iter.next(), None);
}
