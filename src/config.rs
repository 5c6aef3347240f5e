//! Compiled-in game settings: window, camera, sprites, timings and key bindings.
use raylib::prelude::KeyboardKey;

// ventana
pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;
pub const WINDOW_TITLE: &str = "Roguelike";

// vista de la cámara (unidades de mundo visibles)
pub const VIEW_WIDTH: f32 = 400.0;
pub const VIEW_HEIGHT: f32 = 300.0;

// mapa
pub const MAP_TILE_SIZE: u32 = 16;
pub const TILESET_PATH: &str = "resources/Tiles/grass.png";

// sprites del jugador
pub const IDLE_SHEET_PATH: &str = "resources/Characters/idle.png";
pub const WALK_SHEET_PATH: &str = "resources/Characters/walk.png";
pub const DAMAGE_SHEET_PATH: &str = "resources/Characters/damage.png";
pub const JUMP_SHEET_PATH: &str = "resources/Characters/jump.png";

/// Size of one cell in the character sheets, in pixels.
pub const SPRITE_FRAME_SIZE: u32 = 80;
/// Frames in one animation row.
pub const SPRITE_FRAMES: u32 = 4;
/// Padding before the first frame (x) and the first row (y) of every sheet.
pub const SPRITE_SHEET_INSET: u32 = 32;

// tiempos (segundos)
pub const WALK_INTERVAL: f64 = 0.2;
pub const RUN_INTERVAL: f64 = 0.1;
pub const ANIMATION_INTERVAL: f64 = 0.1;
pub const ATTACK_DURATION: f64 = 0.5;
pub const JUMP_DURATION: f64 = 0.5;

// stats
pub const PLAYER_HEALTH: i32 = 100;
pub const PLAYER_DAMAGE: u32 = 10;
pub const PLAYER_SHIELD: u32 = 5;
pub const PLAYER_SPAWN: (i32, i32) = (1, 1);

/// The four direction keys of one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Controls {
    pub up: KeyboardKey,
    pub down: KeyboardKey,
    pub left: KeyboardKey,
    pub right: KeyboardKey,
}

impl Controls {
    pub fn new(up: KeyboardKey, down: KeyboardKey, left: KeyboardKey, right: KeyboardKey) -> Self {
        Self { up, down, left, right }
    }

    pub fn wasd() -> Self {
        Self::new(KeyboardKey::KEY_W, KeyboardKey::KEY_S, KeyboardKey::KEY_A, KeyboardKey::KEY_D)
    }

    pub fn arrows() -> Self {
        Self::new(KeyboardKey::KEY_UP, KeyboardKey::KEY_DOWN, KeyboardKey::KEY_LEFT, KeyboardKey::KEY_RIGHT)
    }
}

/// Keys shared by every player: whoever is updated reads them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionKeys {
    pub run: KeyboardKey,
    pub jump: KeyboardKey,
    pub attack: KeyboardKey,
}

impl Default for ActionKeys {
    fn default() -> Self {
        Self {
            run: KeyboardKey::KEY_LEFT_SHIFT,
            jump: KeyboardKey::KEY_M,
            attack: KeyboardKey::KEY_SPACE,
        }
    }
}

/// Sprite sheet layout shared by all character sheets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteLayout {
    pub frame_size: u32,
    pub num_frames: u32,
    /// Frames per row of the loaded sheet (sheet width / frame size).
    pub columns: u32,
    pub inset: u32,
}

impl SpriteLayout {
    pub fn from_sheet_width(sheet_width: u32) -> Self {
        Self {
            frame_size: SPRITE_FRAME_SIZE,
            num_frames: SPRITE_FRAMES,
            // nunca 0: evita el módulo por cero si la imagen es más estrecha que un frame
            columns: (sheet_width / SPRITE_FRAME_SIZE).max(1),
            inset: SPRITE_SHEET_INSET,
        }
    }
}
