mod game;
mod headless;
mod random;

use ember_engine::{GameRunner, RecordingBackend};

use crate::game::AsteroidsGame;
use crate::headless::{HeadlessLoader, ScriptedHost};

const DEFAULT_FRAMES: u32 = 180;
const SEED: u64 = 0x5eed;

fn main() -> ember_engine::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let frames = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let mut backend = RecordingBackend::new();
    let mut runner = GameRunner::new(AsteroidsGame::new(SEED), HeadlessLoader::new());
    runner.init(&mut backend)?;

    let mut host = ScriptedHost::new(frames);
    let result = runner.run(&mut host, &mut backend);

    let stats = runner.last_stats();
    log::info!(
        "last frame: {} meshes, {} sprites, {} failures, {} skipped",
        stats.meshes_drawn,
        stats.sprites_drawn,
        stats.failures,
        stats.skipped
    );
    if let Some(ship) = runner.scene().find_by_tag("ship") {
        if let Some(actor) = runner.scene().get(ship) {
            log::info!("ship finished at {}", actor.position());
        }
    }

    runner.shutdown(&mut backend);
    log::info!("{} backend calls recorded", backend.calls().len());
    result
}
