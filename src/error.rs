//! Error types for loading the level and its textures.
use thiserror::Error;

use crate::render::textures::TextureKey;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("could not load texture {path}: {reason}")]
    TextureLoad { path: String, reason: String },

    #[error("tileset is {width}px wide, narrower than one {tile_width}px tile")]
    TilesetTooSmall { width: u32, tile_width: u32 },

    #[error("level is {width}x{height} but has {cells} cells")]
    LevelSize { width: u32, height: u32, cells: usize },

    #[error("texture {0:?} was never loaded")]
    MissingTexture(TextureKey),
}
