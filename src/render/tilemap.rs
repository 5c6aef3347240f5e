//! Tile map: the level grid turned into one batch of textured quads.
//!
//! Exposes:
//! - `TileMesh`: GPU-free quad list, four vertices per cell
//! - `TileMap`: mesh + tileset texture, drawable
use log::info;
use raylib::prelude::*;

use crate::core::level::Level;
use crate::error::GameError;
use crate::render::textures::{TextureKey, TextureManager};
use crate::render::Renderable;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
}

/// Quads in cell order `i + j * width`; corners are top-left, top-right,
/// bottom-right, bottom-left.
#[derive(Clone, Debug, PartialEq)]
pub struct TileMesh {
    width: u32,
    height: u32,
    vertices: Vec<Vertex>,
}

impl TileMesh {
    /// The tile index is not checked against the tileset: an index past the
    /// last tile samples outside the tileset image.
    pub fn build(level: &Level, tile_size: (u32, u32), tileset_width: u32) -> Result<Self, GameError> {
        let (tw, th) = tile_size;
        let cols = if tw == 0 { 0 } else { tileset_width / tw };
        if cols == 0 {
            return Err(GameError::TilesetTooSmall { width: tileset_width, tile_width: tw });
        }

        let (width, height) = (level.width(), level.height());
        let (twf, thf) = (tw as f32, th as f32);
        let zero = Vertex { position: [0.0; 2], tex_coords: [0.0; 2] };
        let mut vertices = vec![zero; level.cells().len() * 4];

        for i in 0..width as usize {
            for j in 0..height as usize {
                let cell = i + j * width as usize;
                let t = level.cells()[cell] as u32;
                let tu = (t % cols) as f32;
                let tv = (t / cols) as f32;
                let (x, y) = (i as f32, j as f32);

                let corners = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
                for (k, (cx, cy)) in corners.into_iter().enumerate() {
                    vertices[cell * 4 + k] = Vertex {
                        position: [(x + cx) * twf, (y + cy) * thf],
                        tex_coords: [(tu + cx) * twf, (tv + cy) * thf],
                    };
                }
            }
        }

        Ok(Self { width, height, vertices })
    }

    /// Replaces the quads with a fresh build; `self` is untouched on error.
    pub fn rebuild(&mut self, level: &Level, tile_size: (u32, u32), tileset_width: u32) -> Result<(), GameError> {
        *self = Self::build(level, tile_size, tileset_width)?;
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// The four vertices of cell `(i, j)`.
    pub fn quad(&self, i: u32, j: u32) -> Option<&[Vertex]> {
        if i >= self.width || j >= self.height {
            return None;
        }
        let base = (i as usize + j as usize * self.width as usize) * 4;
        self.vertices.get(base..base + 4)
    }

    pub fn quads(&self) -> impl Iterator<Item = &[Vertex]> {
        self.vertices.chunks_exact(4)
    }
}

pub struct TileMap {
    mesh: TileMesh,
    tile_size: (u32, u32),
}

impl TileMap {
    pub fn load(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        textures: &mut TextureManager,
        tileset: &str,
        tile_size: (u32, u32),
        level: &Level,
    ) -> Result<Self, GameError> {
        let (tileset_width, _) = textures.load(rl, thread, TextureKey::Tileset, tileset)?;
        let mesh = TileMesh::build(level, tile_size, tileset_width)?;
        info!("tile map built: {}x{} cells, {} vertices", level.width(), level.height(), mesh.vertex_count());
        Ok(Self { mesh, tile_size })
    }

    /// Rebuilds the mesh from `tileset`; the only way the mesh changes.
    pub fn reload(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        textures: &mut TextureManager,
        tileset: &str,
        level: &Level,
    ) -> Result<(), GameError> {
        let (tileset_width, _) = textures.load(rl, thread, TextureKey::Tileset, tileset)?;
        self.mesh.rebuild(level, self.tile_size, tileset_width)?;
        info!("tile map reloaded from {}", tileset);
        Ok(())
    }
}

impl Renderable for TileMap {
    fn draw<D: RaylibDraw>(&self, d: &mut D, textures: &TextureManager) -> Result<(), GameError> {
        let tileset = textures.get(TextureKey::Tileset)?;
        for q in self.mesh.quads() {
            let [u0, v0] = q[0].tex_coords;
            let [u1, v1] = q[2].tex_coords;
            let source = Rectangle::new(u0, v0, u1 - u0, v1 - v0);
            let dest = Vector2::new(q[0].position[0], q[0].position[1]);
            d.draw_texture_rec(tileset, source, dest, Color::WHITE);
        }
        Ok(())
    }
}
