//! Headless overlay demo
//!
//! Scatters random entities around a camera, runs a few frames and logs the
//! draw commands the overlay produces.
//!
//! Usage: `overlay_demo [settings.toml|settings.ron] [frames]`

mod world;

use entity_overlay::foundation::logging;
use entity_overlay::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

use world::DemoWorld;

/// Demo failures
#[derive(Error, Debug)]
enum DemoError {
    #[error("Settings error: {0}")]
    Settings(#[from] ConfigError),

    #[error("Invalid frame count '{0}'")]
    FrameCount(String),
}

/// Interpolation steps rendered per simulation tick
const SUBFRAMES: [f32; 2] = [0.5, 1.0];

fn load_settings(path: Option<&str>) -> Result<OverlaySettings, DemoError> {
    match path {
        Some(path) => {
            log::info!("Loading overlay settings from {}", path);
            Ok(OverlaySettings::load_from_file(path)?)
        }
        None => Ok(OverlaySettings::default()),
    }
}

fn run() -> Result<(), DemoError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings = load_settings(args.first().map(String::as_str))?;
    let ticks = match args.get(1) {
        Some(count) => count.parse::<usize>().map_err(|_| DemoError::FrameCount(count.clone()))?,
        None => 3,
    };

    let viewport = Viewport::new(1600.0, 900.0);
    let mut camera = Camera::perspective(
        DVec3::new(1_250_000.5, 72.0, -840_000.25),
        70.0,
        viewport.width / viewport.height,
        0.05,
        512.0,
    );

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut world = DemoWorld::scatter(camera.position, 40, 48.0, &mut rng);
    let friends = world.friends();
    log::info!("Scattered 40 entities, {} friends", friends.len());

    let overlay = EntityOverlay::new(settings);
    let metrics = MonospaceMetrics::default();
    let mut surface = DrawCommandBuffer::new();

    for tick in 0..ticks {
        world.tick();
        let yaw = tick as f64 * 0.35;
        camera.look_at(camera.position + DVec3::new(yaw.sin(), -0.1, -yaw.cos()), Vec3::new(0.0, 1.0, 0.0));

        for tick_delta in SUBFRAMES {
            let ctx = camera.frame_context(viewport, tick_delta);
            let (list, stats) = overlay.on_frame_begin(&ctx, &world, &friends, &metrics, &mut surface);

            log::info!(
                "tick {} ({:.1}): {} candidates, {} drawn, {} skipped",
                tick,
                tick_delta,
                stats.candidates,
                stats.drawn,
                stats.skipped
            );
            if let Some(nearest) = list.descriptors().last() {
                log::info!("  nearest: {:?} at {:.1} blocks", nearest.kind, nearest.distance);
            }
            for command in surface.drain() {
                log::debug!("  {:?}", command);
            }
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    log::info!("Starting entity overlay demo");

    match run() {
        Ok(()) => {
            log::info!("Overlay demo finished successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Overlay demo failed: {}", e);
            Err(e.into())
        }
    }
}
