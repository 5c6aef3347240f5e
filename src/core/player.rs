//! Player data, grid movement and timed actions (attack, jump, animation).
use log::{debug, info, trace, warn};
use raylib::prelude::*;

use crate::config::{
    ActionKeys, Controls, SpriteLayout, ANIMATION_INTERVAL, ATTACK_DURATION, JUMP_DURATION,
    PLAYER_DAMAGE, PLAYER_HEALTH, PLAYER_SHIELD, PLAYER_SPAWN, RUN_INTERVAL, WALK_INTERVAL,
};
use crate::core::input::InputSource;
use crate::core::level::{is_floor, Level};
use crate::core::timers::{ActionWindow, IntervalTimer, WindowPhase};
use crate::error::GameError;
use crate::render::textures::{TextureKey, TextureManager};
use crate::render::Renderable;

/// Direction of the last step; picks the row of the sprite sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Right,
    Left,
    Down,
    Up,
}

impl Facing {
    fn row(self) -> u32 {
        match self {
            Facing::Right => 0,
            Facing::Left => 1,
            Facing::Down => 2,
            Facing::Up => 3,
        }
    }

    fn delta(self) -> (i32, i32) {
        match self {
            Facing::Right => (1, 0),
            Facing::Left => (-1, 0),
            Facing::Down => (0, 1),
            Facing::Up => (0, -1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locomotion {
    Idle,
    Walk,
}

/// Source rectangle inside a sprite sheet, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl From<FrameRect> for Rectangle {
    fn from(r: FrameRect) -> Self {
        Rectangle::new(r.x as f32, r.y as f32, r.w as f32, r.h as f32)
    }
}

pub struct Player<'a> {
    name: String,
    level: &'a Level,
    controls: Controls,
    actions: ActionKeys,
    layout: SpriteLayout,
    map_tile_size: u32,

    position: (i32, i32), // en celdas
    screen_pos: Vector2,  // en píxeles de mundo
    frame: u32,
    source: FrameRect,
    facing: Facing,
    locomotion: Locomotion,
    running: bool,

    move_timer: IntervalTimer,
    anim_timer: IntervalTimer,
    attack: ActionWindow,
    jump: ActionWindow,

    health: i32,
    damage: u32,
    shield: u32,
}

impl<'a> Player<'a> {
    pub fn new(
        name: impl Into<String>,
        level: &'a Level,
        controls: Controls,
        layout: SpriteLayout,
        map_tile_size: u32,
        now: f64,
    ) -> Self {
        let (x, y) = PLAYER_SPAWN;
        let mut player = Self {
            name: name.into(),
            level,
            controls,
            actions: ActionKeys::default(),
            layout,
            map_tile_size,
            position: (x, y),
            screen_pos: Vector2::new(0.0, 0.0),
            frame: 0,
            source: FrameRect { x: 0, y: 0, w: 0, h: 0 },
            facing: Facing::Right,
            locomotion: Locomotion::Idle,
            running: false,
            move_timer: IntervalTimer::new(now),
            anim_timer: IntervalTimer::new(now),
            attack: ActionWindow::new(ATTACK_DURATION),
            jump: ActionWindow::new(JUMP_DURATION),
            health: PLAYER_HEALTH,
            damage: PLAYER_DAMAGE,
            shield: PLAYER_SHIELD,
        };
        player.source = player.frame_rect();
        player.sync_screen_pos();
        info!("{} spawned at ({}, {})", player.name, x, y);
        player
    }

    pub fn set_controls(&mut self, controls: Controls) {
        self.controls = controls;
    }

    pub fn position(&self) -> (i32, i32) { self.position }
    pub fn screen_position(&self) -> Vector2 { self.screen_pos }
    pub fn frame(&self) -> u32 { self.frame }
    pub fn source_rect(&self) -> FrameRect { self.source }
    pub fn facing(&self) -> Facing { self.facing }
    pub fn locomotion(&self) -> Locomotion { self.locomotion }
    pub fn health(&self) -> i32 { self.health }
    pub fn is_running(&self) -> bool { self.running }
    pub fn is_attacking(&self) -> bool { self.attack.is_active() }
    pub fn is_jumping(&self) -> bool { self.jump.is_active() }

    /// Centre of the sprite on the map, used to aim the camera.
    pub fn view_center(&self) -> Vector2 {
        let half = self.map_tile_size as f32 / 2.0;
        Vector2::new(self.screen_pos.x + half, self.screen_pos.y + half)
    }

    /// Sheet shown this frame: jump wins over attack, attack over walking/idle.
    pub fn current_sheet(&self) -> TextureKey {
        if self.is_jumping() {
            TextureKey::Jump
        } else if self.is_attacking() {
            TextureKey::Damage
        } else {
            match self.locomotion {
                Locomotion::Idle => TextureKey::Idle,
                Locomotion::Walk => TextureKey::Walk,
            }
        }
    }

    pub fn handle_input(&mut self, input: &impl InputSource, now: f64) {
        self.running = input.key_down(self.actions.run);
        let interval = if self.running { RUN_INTERVAL } else { WALK_INTERVAL };

        if self.move_timer.is_ready(now, interval) {
            match self.pressed_direction(input) {
                Some(facing) => self.step(facing, now),
                None => self.locomotion = Locomotion::Idle,
            }
        }

        if input.key_down(self.actions.jump) {
            self.start_jump(now);
        }
        if input.key_down(self.actions.attack) {
            self.start_attack(now);
        }
    }

    // prioridad fija: arriba, abajo, izquierda, derecha
    fn pressed_direction(&self, input: &impl InputSource) -> Option<Facing> {
        [
            (self.controls.up, Facing::Up),
            (self.controls.down, Facing::Down),
            (self.controls.left, Facing::Left),
            (self.controls.right, Facing::Right),
        ]
        .into_iter()
        .find(|(key, _)| input.key_down(*key))
        .map(|(_, facing)| facing)
    }

    fn step(&mut self, facing: Facing, now: f64) {
        self.facing = facing;
        self.locomotion = Locomotion::Walk;
        self.move_timer.restart(now);

        let (dx, dy) = facing.delta();
        let target = (self.position.0 + dx, self.position.1 + dy);
        if self.can_move_to(target) {
            self.position = target;
            debug!("{} moved {:?} to ({}, {})", self.name, facing, target.0, target.1);
        } else {
            debug!("{} blocked at ({}, {})", self.name, target.0, target.1);
        }
    }

    pub fn can_move_to(&self, (x, y): (i32, i32)) -> bool {
        if !self.level.contains(x, y) {
            return false;
        }
        // saltando se ignora el terreno
        if self.is_jumping() {
            return true;
        }
        self.level.tile(x, y).is_some_and(is_floor)
    }

    pub fn start_attack(&mut self, now: f64) {
        if self.attack.start(now) {
            info!("{} attacking", self.name);
        }
    }

    pub fn start_jump(&mut self, now: f64) {
        if self.jump.start(now) {
            info!("{} jumping", self.name);
        }
    }

    /// Outgoing damage of one hit. Nothing consumes it yet.
    pub fn attack(&self) -> u32 {
        info!("{} attacks for {}", self.name, self.damage);
        self.damage
    }

    pub fn take_damage(&mut self, amount: u32) {
        let actual = amount.saturating_sub(self.shield);
        // sin desbordes: la vida puede bajar de cero pero se queda en i32::MIN
        self.health = self.health.saturating_sub(i32::try_from(actual).unwrap_or(i32::MAX));
        info!("{} took {} damage, health now {}", self.name, actual, self.health);
        if self.health <= 0 {
            warn!("{} health reached {}", self.name, self.health);
        }
    }

    pub fn update(&mut self, now: f64) {
        self.sync_screen_pos();
        trace!("{} sprite at ({}, {})", self.name, self.screen_pos.x, self.screen_pos.y);

        if self.attack.poll(now) == WindowPhase::Expired {
            info!("{} attack finished", self.name);
        }
        if self.jump.poll(now) == WindowPhase::Expired {
            info!("{} jump finished", self.name);
        }
        self.update_animation(now);
    }

    fn update_animation(&mut self, now: f64) {
        if !self.anim_timer.is_ready(now, ANIMATION_INTERVAL) {
            return;
        }
        self.frame = (self.frame + 1) % self.layout.num_frames;
        self.source = self.frame_rect();
        self.anim_timer.restart(now);
    }

    fn frame_rect(&self) -> FrameRect {
        let l = &self.layout;
        let tu = self.frame % l.columns;
        FrameRect {
            x: tu * l.frame_size + l.inset,
            y: l.inset + self.facing.row() * l.frame_size,
            w: l.frame_size / 4,
            h: l.frame_size / 4,
        }
    }

    fn sync_screen_pos(&mut self) {
        let ts = self.map_tile_size as f32;
        self.screen_pos = Vector2::new(self.position.0 as f32 * ts, self.position.1 as f32 * ts);
    }
}

impl Renderable for Player<'_> {
    fn draw<D: RaylibDraw>(&self, d: &mut D, textures: &TextureManager) -> Result<(), GameError> {
        let sheet = textures.get(self.current_sheet())?;
        let source: Rectangle = self.source.into();
        d.draw_texture_rec(sheet, source, self.screen_pos, Color::WHITE);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::HeldKeys;

    fn player(level: &Level) -> Player<'_> {
        Player::new("test", level, Controls::wasd(), SpriteLayout::from_sheet_width(320), 16, 0.0)
    }

    fn keys(keys: &[KeyboardKey]) -> HeldKeys {
        HeldKeys(keys.to_vec())
    }

    #[test]
    fn test_can_move_to_floor_and_walls() {
        let level = Level::sample();
        let p = player(&level);
        assert!(p.can_move_to((1, 1)));
        assert!(p.can_move_to((12, 5))); // suelo tipo 2
        assert!(!p.can_move_to((0, 0)));
        assert!(!p.can_move_to((6, 2)));
    }

    #[test]
    fn test_can_move_to_out_of_bounds() {
        let level = Level::sample();
        let mut p = player(&level);
        for pos in [(-1, 1), (1, -1), (20, 1), (1, 10)] {
            assert!(!p.can_move_to(pos));
        }
        p.start_jump(0.0);
        for pos in [(-1, 1), (1, -1), (20, 1), (1, 10)] {
            assert!(!p.can_move_to(pos));
        }
    }

    #[test]
    fn test_jump_ignores_terrain() {
        let level = Level::sample();
        let mut p = player(&level);
        p.start_jump(0.0);
        assert!(p.is_jumping());
        assert!(p.can_move_to((0, 0)));
        assert!(p.can_move_to((19, 9)));
    }

    #[test]
    fn test_take_damage_subtracts_shield() {
        let level = Level::sample();
        let mut p = player(&level);
        p.take_damage(20);
        assert_eq!(p.health(), 85);
        p.take_damage(3);
        assert_eq!(p.health(), 85);
    }

    #[test]
    fn test_health_can_drop_below_zero() {
        let level = Level::sample();
        let mut p = player(&level);
        p.take_damage(200);
        assert_eq!(p.health(), -95);
    }

    #[test]
    fn test_huge_damage_never_heals() {
        let level = Level::sample();
        let mut p = player(&level);
        p.take_damage(u32::MAX);
        assert!(p.health() < 0);
        assert_eq!(p.health(), 100 - i32::MAX);
    }

    #[test]
    fn test_repeated_huge_hits_saturate() {
        let level = Level::sample();
        let mut p = player(&level);
        p.take_damage(2_000_000_000);
        assert_eq!(p.health(), 100 - 1_999_999_995);
        p.take_damage(2_000_000_000);
        assert_eq!(p.health(), i32::MIN);
        p.take_damage(10);
        assert_eq!(p.health(), i32::MIN);
    }

    #[test]
    fn test_attack_returns_damage_stat() {
        let level = Level::sample();
        let p = player(&level);
        assert_eq!(p.attack(), 10);
        assert_eq!(p.health(), 100);
    }

    #[test]
    fn test_attack_window() {
        let level = Level::sample();
        let mut p = player(&level);
        p.start_attack(0.0);
        p.update(0.25);
        assert!(p.is_attacking());
        p.start_attack(0.25); // no reinicia
        p.update(0.49);
        assert!(p.is_attacking());
        p.update(0.5);
        assert!(!p.is_attacking());
    }

    #[test]
    fn test_jump_window() {
        let level = Level::sample();
        let mut p = player(&level);
        p.handle_input(&keys(&[KeyboardKey::KEY_M]), 0.0);
        assert!(p.is_jumping());
        p.update(0.375);
        assert!(p.is_jumping());
        p.update(0.5);
        assert!(!p.is_jumping());
    }

    #[test]
    fn test_space_starts_attack() {
        let level = Level::sample();
        let mut p = player(&level);
        p.handle_input(&keys(&[KeyboardKey::KEY_SPACE]), 0.0);
        assert!(p.is_attacking());
        assert!(!p.is_jumping());
    }

    #[test]
    fn test_walk_cadence() {
        let level = Level::sample();
        let mut p = player(&level);
        let down = keys(&[KeyboardKey::KEY_S]);

        p.handle_input(&down, 0.125);
        assert_eq!(p.position(), (1, 1));

        p.handle_input(&down, 0.25);
        assert_eq!(p.position(), (1, 2));
        assert_eq!(p.facing(), Facing::Down);
        assert_eq!(p.locomotion(), Locomotion::Walk);

        p.handle_input(&down, 0.375);
        assert_eq!(p.position(), (1, 2));
        p.handle_input(&down, 0.5);
        assert_eq!(p.position(), (1, 3));
    }

    #[test]
    fn test_run_halves_interval() {
        let level = Level::sample();
        let mut p = player(&level);
        let run_down = keys(&[KeyboardKey::KEY_S, KeyboardKey::KEY_LEFT_SHIFT]);

        p.handle_input(&run_down, 0.125);
        assert!(p.is_running());
        assert_eq!(p.position(), (1, 2));
        p.handle_input(&run_down, 0.25);
        assert_eq!(p.position(), (1, 3));
    }

    #[test]
    fn test_direction_priority_and_blocked_step() {
        let level = Level::sample();
        let mut p = player(&level);
        // arriba gana; (1,0) es pared
        p.handle_input(&keys(&[KeyboardKey::KEY_W, KeyboardKey::KEY_D]), 0.25);
        assert_eq!(p.position(), (1, 1));
        assert_eq!(p.facing(), Facing::Up);
        assert_eq!(p.locomotion(), Locomotion::Walk);

        // el paso bloqueado también reinicia el temporizador
        let right = keys(&[KeyboardKey::KEY_D]);
        p.handle_input(&right, 0.375);
        assert_eq!(p.position(), (1, 1));
        p.handle_input(&right, 0.5);
        assert_eq!(p.position(), (2, 1));
        assert_eq!(p.facing(), Facing::Right);
    }

    #[test]
    fn test_idle_does_not_restart_move_timer() {
        let level = Level::sample();
        let mut p = player(&level);
        p.handle_input(&HeldKeys::default(), 0.25);
        assert_eq!(p.locomotion(), Locomotion::Idle);
        assert_eq!(p.current_sheet(), TextureKey::Idle);

        p.handle_input(&keys(&[KeyboardKey::KEY_S]), 0.3125);
        assert_eq!(p.position(), (1, 2));
        assert_eq!(p.current_sheet(), TextureKey::Walk);
    }

    #[test]
    fn test_jump_crosses_walls() {
        let level = Level::sample();
        let mut p = player(&level);
        p.start_jump(0.0);
        p.handle_input(&keys(&[KeyboardKey::KEY_W]), 0.25);
        assert_eq!(p.position(), (1, 0));
    }

    #[test]
    fn test_other_controls_ignore_wasd() {
        let level = Level::sample();
        let mut p = player(&level);
        p.set_controls(Controls::arrows());
        p.handle_input(&keys(&[KeyboardKey::KEY_S]), 0.25);
        assert_eq!(p.position(), (1, 1));
        p.handle_input(&keys(&[KeyboardKey::KEY_DOWN]), 0.25);
        assert_eq!(p.position(), (1, 2));
    }

    #[test]
    fn test_sheet_priority() {
        let level = Level::sample();
        let mut p = player(&level);
        assert_eq!(p.current_sheet(), TextureKey::Idle);
        p.start_attack(0.0);
        assert_eq!(p.current_sheet(), TextureKey::Damage);
        p.start_jump(0.0);
        assert_eq!(p.current_sheet(), TextureKey::Jump);

        // la animación no cambia la hoja
        p.update(0.25);
        assert_eq!(p.current_sheet(), TextureKey::Jump);
        p.update(0.5);
        assert_eq!(p.current_sheet(), TextureKey::Idle);
    }

    #[test]
    fn test_animation_cycles_frames() {
        let level = Level::sample();
        let mut p = player(&level);
        assert_eq!(p.source_rect(), FrameRect { x: 32, y: 32, w: 20, h: 20 });

        p.update(0.0625);
        assert_eq!(p.frame(), 0);
        p.update(0.125);
        assert_eq!(p.frame(), 1);
        assert_eq!(p.source_rect().x, 112);
        for t in [0.25, 0.375, 0.5] {
            p.update(t);
        }
        assert_eq!(p.frame(), 0);
        assert_eq!(p.source_rect().x, 32);
    }

    #[test]
    fn test_animation_row_follows_facing() {
        let level = Level::sample();
        let mut p = player(&level);
        p.handle_input(&keys(&[KeyboardKey::KEY_S]), 0.25);
        p.update(0.25);
        assert_eq!(p.source_rect().y, 192);

        p.handle_input(&keys(&[KeyboardKey::KEY_A]), 0.5);
        p.update(0.5);
        assert_eq!(p.source_rect().y, 112);

        p.handle_input(&keys(&[KeyboardKey::KEY_W]), 0.75);
        p.update(0.75);
        assert_eq!(p.source_rect().y, 272);
    }

    #[test]
    fn test_screen_position_and_view_center() {
        let level = Level::sample();
        let mut p = player(&level);
        assert_eq!(p.screen_position().x, 16.0);
        assert_eq!(p.view_center().x, 24.0);
        assert_eq!(p.view_center().y, 24.0);

        p.handle_input(&keys(&[KeyboardKey::KEY_D]), 0.25);
        // la posición en pantalla se actualiza en update
        assert_eq!(p.screen_position().x, 16.0);
        p.update(0.25);
        assert_eq!(p.screen_position().x, 32.0);
        assert_eq!(p.screen_position().y, 16.0);
    }
}
