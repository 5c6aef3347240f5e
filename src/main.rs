// main.rs
#![allow(dead_code)]

mod config;
mod core;
mod error;
mod game;
mod render;

use anyhow::Context;
use log::{error, info};

use config::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::core::level::Level;
use game::{Game, GameState};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(-1);
    }
}

fn run() -> anyhow::Result<()> {
    let (mut window, raylib_thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title(WINDOW_TITLE)
        .build();
    window.set_target_fps(60);

    // el nivel vive todo el proceso; mapa y jugadores lo toman prestado
    let level = Level::sample();
    let mut game = Game::new(&mut window, &raylib_thread, &level).context("loading game assets")?;

    while game.state() == GameState::Running {
        game.frame(&mut window, &raylib_thread).context("drawing frame")?;
    }

    info!("window closed");
    Ok(())
}
