use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;

mod animation;
mod cloud;
mod config;
mod constants;
mod layout;
mod oscillator;
mod scene;
mod splash;
mod state;
mod texture_loader;

use crate::cloud::Viewport;
use crate::config::Args;
use crate::scene::SplashScene;
use crate::splash::SplashAnimation;
use crate::texture_loader::{load_texture, resolve_assets};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    // Fail before opening a window if sprites are missing
    let assets = resolve_assets(&args.assets)
        .with_context(|| format!("Cannot start splash from {:?}", args.assets))?;

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Parachute")
        .vsync()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Sprites ---
    let parachute = load_texture(&mut rl, &thread, &assets.parachute)?;
    let cloud = load_texture(&mut rl, &thread, &assets.cloud)?;

    // Viewport is read once; the window is not resizable
    let viewport = Viewport::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
    log::info!("Splash viewport {}x{}", viewport.width, viewport.height);

    let mut scene = SplashScene::new(SplashAnimation::new(viewport, args.seed), parachute, cloud);

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time(); // realtime rendering
        scene.update(dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        scene.draw(&mut d);
    }

    scene.animation.unmount();
    Ok(())
}
