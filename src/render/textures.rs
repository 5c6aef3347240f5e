use log::info;
use raylib::prelude::*;
use std::collections::HashMap;

use crate::config::{DAMAGE_SHEET_PATH, IDLE_SHEET_PATH, JUMP_SHEET_PATH, WALK_SHEET_PATH};
use crate::error::GameError;

/// Every texture the game draws with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureKey {
    Tileset,
    Idle,
    Walk,
    Damage,
    Jump,
}

/// GPU textures loaded once at start-up; switching sheets is a lookup, not a reload.
#[derive(Default)]
pub struct TextureManager {
    textures: HashMap<TextureKey, Texture2D>,
}

impl TextureManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `path` under `key`, replacing any previous texture. Returns its size in pixels.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        key: TextureKey,
        path: &str,
    ) -> Result<(u32, u32), GameError> {
        let tex = rl.load_texture(thread, path).map_err(|e| GameError::TextureLoad {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        let size = (tex.width.max(0) as u32, tex.height.max(0) as u32);
        info!("loaded {:?} from {} ({}x{})", key, path, size.0, size.1);
        self.textures.insert(key, tex);
        Ok(size)
    }

    /// Loads the four character sheets. Returns the width of the idle sheet,
    /// which fixes the frame layout for all of them.
    pub fn load_character_sheets(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
    ) -> Result<u32, GameError> {
        let (width, _) = self.load(rl, thread, TextureKey::Idle, IDLE_SHEET_PATH)?;
        self.load(rl, thread, TextureKey::Walk, WALK_SHEET_PATH)?;
        self.load(rl, thread, TextureKey::Damage, DAMAGE_SHEET_PATH)?;
        self.load(rl, thread, TextureKey::Jump, JUMP_SHEET_PATH)?;
        Ok(width)
    }

    pub fn get(&self, key: TextureKey) -> Result<&Texture2D, GameError> {
        self.textures.get(&key).ok_or(GameError::MissingTexture(key))
    }

    pub fn contains(&self, key: TextureKey) -> bool {
        self.textures.contains_key(&key)
    }
}
