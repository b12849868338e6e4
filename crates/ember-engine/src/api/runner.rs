use crate::api::game::{EngineConfig, Game};
use crate::api::host::{Host, HostSignal};
use crate::assets::cache::AssetCache;
use crate::assets::types::AssetLoader;
use crate::core::scene::Scene;
use crate::core::time::FramePacer;
use crate::error::{EngineError, Result};
use crate::input::keyboard::KeyboardState;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::submission::{FrameStats, Renderer};
use crate::renderer::traits::GraphicsBackend;

/// Generic game runner that wires up the engine loop.
///
/// Owns the scene, renderer, asset cache and input state for one game.
/// Each frame runs input collection, update, reconciliation and draw
/// submission in that order.
pub struct GameRunner<G: Game> {
    game: G,
    scene: Scene,
    renderer: Renderer,
    assets: AssetCache,
    input: InputQueue,
    keys: KeyboardState,
    pacer: FramePacer,
    config: EngineConfig,
    initialized: bool,
    running: bool,
    last_stats: FrameStats,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G, loader: impl AssetLoader + 'static) -> Self {
        let config = game.config();
        Self {
            renderer: Renderer::new(&config),
            pacer: FramePacer::from_millis(config.tick_ms, config.max_delta_ms),
            game,
            scene: Scene::new(),
            assets: AssetCache::new(loader),
            input: InputQueue::new(),
            keys: KeyboardState::new(),
            config,
            initialized: false,
            running: false,
            last_stats: FrameStats::default(),
        }
    }

    /// Load shaders, create the sprite quad and let the game spawn its
    /// initial actors. Call once before `run` or `frame`.
    pub fn init(&mut self, backend: &mut dyn GraphicsBackend) -> Result<()> {
        self.renderer.initialize(backend, &self.config)?;
        self.game.load(&mut self.scene, &mut self.assets)?;
        self.initialized = true;
        self.running = true;
        log::info!(
            "{} initialized: {} actors, {} textures, {} meshes",
            self.config.title,
            self.scene.len(),
            self.assets.texture_count(),
            self.assets.mesh_count()
        );
        Ok(())
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame with an explicit delta in seconds.
    pub fn frame(&mut self, dt: f32, backend: &mut dyn GraphicsBackend) -> Result<FrameStats> {
        if !self.initialized {
            return Err(EngineError::NotInitialized);
        }

        self.keys.apply_all(&self.input.drain());
        if let Some(quit) = self.config.quit_key {
            if self.keys.is_down(quit) {
                log::info!("quit key pressed");
                self.running = false;
            }
        }

        self.scene.process_input(&self.keys);
        let game = &mut self.game;
        let keys = &self.keys;
        self.scene.update_with(dt, |scene| game.update(scene, keys, dt));

        let renderer = &self.renderer;
        let stats = self.scene.render(|scene| renderer.draw(scene, backend))?;
        if stats.failures > 0 {
            log::debug!("{} draw failures this frame", stats.failures);
        }
        self.last_stats = stats;
        Ok(stats)
    }

    /// Loop until the host or the quit key stops it.
    pub fn run(&mut self, host: &mut dyn Host, backend: &mut dyn GraphicsBackend) -> Result<()> {
        if !self.initialized {
            return Err(EngineError::NotInitialized);
        }
        self.pacer.reset();
        while self.running {
            if host.pump(&mut self.input) == HostSignal::Quit {
                log::info!("host requested quit");
                self.running = false;
                break;
            }
            let dt = self.pacer.wait();
            self.frame(dt, backend)?;
        }
        log::info!("run loop finished after {} frames", self.pacer.frame_count());
        Ok(())
    }

    /// Destroy every actor, release assets and unload shaders.
    pub fn shutdown(&mut self, backend: &mut dyn GraphicsBackend) {
        self.scene.clear();
        self.assets.unload();
        self.renderer.shutdown(backend);
        self.initialized = false;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn keys(&self) -> &KeyboardState {
        &self.keys
    }

    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }
}
