//! Main loop state: window close handling, camera, per-frame update and draw order.
use log::info;
use raylib::prelude::*;

use crate::config::{
    Controls, SpriteLayout, MAP_TILE_SIZE, TILESET_PATH, VIEW_WIDTH, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use crate::core::input::InputSource;
use crate::core::level::Level;
use crate::core::player::Player;
use crate::error::GameError;
use crate::render::textures::TextureManager;
use crate::render::tilemap::TileMap;
use crate::render::Renderable;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Running,
    Closed,
}

/// Camera showing a `VIEW_WIDTH` x `VIEW_HEIGHT` region centred on `target`.
pub fn camera_for(target: Vector2) -> Camera2D {
    Camera2D {
        offset: Vector2::new(WINDOW_WIDTH as f32 / 2.0, WINDOW_HEIGHT as f32 / 2.0),
        target,
        rotation: 0.0,
        zoom: WINDOW_WIDTH as f32 / VIEW_WIDTH,
    }
}

/// Input first for every player, then their timers.
pub fn update_players(players: &mut [Player<'_>], input: &impl InputSource, now: f64) {
    for p in players.iter_mut() {
        p.handle_input(input, now);
    }
    for p in players.iter_mut() {
        p.update(now);
    }
}

pub struct Game<'a> {
    state: GameState,
    textures: TextureManager,
    map: TileMap,
    players: [Player<'a>; 2],
    view_target: Vector2,
}

impl<'a> Game<'a> {
    pub fn new(rl: &mut RaylibHandle, thread: &RaylibThread, level: &'a Level) -> Result<Self, GameError> {
        let mut textures = TextureManager::new();
        let tile = (MAP_TILE_SIZE, MAP_TILE_SIZE);
        let map = TileMap::load(rl, thread, &mut textures, TILESET_PATH, tile, level)?;

        let sheet_width = textures.load_character_sheets(rl, thread)?;
        let layout = SpriteLayout::from_sheet_width(sheet_width);

        let now = rl.get_time();
        let players = [
            Player::new("player 1", level, Controls::wasd(), layout, MAP_TILE_SIZE, now),
            Player::new("player 2", level, Controls::arrows(), layout, MAP_TILE_SIZE, now),
        ];
        let view_target = players[0].view_center();

        Ok(Self { state: GameState::Running, textures, map, players, view_target })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// One iteration of the loop. Switches to `Closed` on a close request.
    pub fn frame(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<(), GameError> {
        if rl.window_should_close() {
            info!("close requested");
            self.state = GameState::Closed;
            return Ok(());
        }

        // la cámara sigue al jugador 1
        self.view_target = self.players[0].view_center();

        let now = rl.get_time();
        update_players(&mut self.players, &*rl, now);

        let mut d = rl.begin_drawing(thread);
        d.clear_background(Color::BLACK);
        {
            let mut world = d.begin_mode2D(camera_for(self.view_target));
            self.map.draw(&mut world, &self.textures)?;
            for p in &self.players {
                p.draw(&mut world, &self.textures)?;
            }
        }
        Ok(())
    }
}
