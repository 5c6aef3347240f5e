//! Rendering: textures, tile map and the drawable capability.
//!
//! Re-exports:
//! - `textures`: Texture manager, every texture loaded once
//! - `tilemap`: Level grid to textured quads

pub mod textures;
pub mod tilemap;

use raylib::prelude::RaylibDraw;

use crate::error::GameError;
use textures::TextureManager;

/// Anything that can draw itself onto a raylib draw target.
pub trait Renderable {
    fn draw<D: RaylibDraw>(&self, d: &mut D, textures: &TextureManager) -> Result<(), GameError>;
}
