//! Core game types and logic (level, input, timers, players).
//!
//! Re-exports:
//! - `level`: Static level grid
//! - `input`: Keyboard capability
//! - `timers`: Interval timers and action windows
//! - `player`: Player movement, collision and actions

pub mod level;
pub mod input;
pub mod timers;
pub mod player;
