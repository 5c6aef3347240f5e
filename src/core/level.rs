//! Static level grid shared by the tile map and every player.
use crate::error::GameError;

/// Tile values stored in the grid.
pub const TILE_WALL: u8 = 0;
pub const TILE_FLOOR_A: u8 = 1;
pub const TILE_FLOOR_B: u8 = 2;

#[rustfmt::skip]
const SAMPLE_LEVEL: [u8; 200] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0,
    0, 1, 1, 1, 1, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0,
    0, 1, 1, 1, 1, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0,
    0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 2, 2, 2, 2, 2, 2, 2, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 2, 2, 2, 2, 2, 2, 2, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// Row-major grid of tile values: `cells[x + y * width]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

impl Level {
    pub fn new(width: u32, height: u32, cells: Vec<u8>) -> Result<Self, GameError> {
        if cells.len() != (width as usize) * (height as usize) {
            return Err(GameError::LevelSize { width, height, cells: cells.len() });
        }
        Ok(Self { width, height, cells })
    }

    /// The compiled-in 20x10 level.
    pub fn sample() -> Self {
        Self { width: 20, height: 10, cells: SAMPLE_LEVEL.to_vec() }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn cells(&self) -> &[u8] { &self.cells }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Tile value at `(x, y)`, `None` outside the grid.
    pub fn tile(&self, x: i32, y: i32) -> Option<u8> {
        if !self.contains(x, y) {
            return None;
        }
        self.cells.get(x as usize + y as usize * self.width as usize).copied()
    }
}

/// Only the two floor types can be walked on.
pub fn is_floor(tile: u8) -> bool {
    tile == TILE_FLOOR_A || tile == TILE_FLOOR_B
}
