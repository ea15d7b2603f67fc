//! Sky Gap entry point
//!
//! The native build runs a headless demo: the autopilot plays for a while
//! and the run lifecycle shows up in the log. The browser build is driven
//! through `platform::web::WebGame`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use sky_gap::persistence::{BestScoreStore, FileStore, MemoryStore};
    use sky_gap::renderer::RecordingRenderer;
    use sky_gap::sim::{GameRng, RunEvent};
    use sky_gap::{Session, Tuning};

    env_logger::init();
    log::info!("Sky Gap (native) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load(&path).unwrap_or_else(|e| {
            log::warn!("Could not load tuning from {}: {}", path, e);
            Tuning::default()
        }),
        None => Tuning::default(),
    };

    let store: Box<dyn BestScoreStore> = match FileStore::in_config_dir() {
        Ok(store) => {
            log::info!("Best score file: {}", store.path().display());
            Box::new(store)
        }
        Err(e) => {
            log::warn!("No config directory ({}), best score kept in memory", e);
            Box::new(MemoryStore::new())
        }
    };

    let seed = GameRng::from_entropy().seed();
    log::info!("Game initialized with seed: {}", seed);

    let mut session = Session::new(tuning, store, seed);
    session.autopilot = true;

    // 60 seconds at 60 fps
    let dt = 1.0 / 60.0;
    let mut renderer = RecordingRenderer::new();
    for _ in 0..60 * 60 {
        for event in session.frame(dt) {
            match event {
                RunEvent::Scored { score } => log::debug!("Score: {}", score),
                RunEvent::NewBest { score } => log::info!("New best score: {}", score),
                RunEvent::GameOver { cause, score, best } => {
                    println!("Run over ({:?}): score {}, best {}", cause, score, best)
                }
                RunEvent::Flapped => {}
            }
        }
        renderer.clear();
        session.render(&mut renderer);
        log::trace!("{:?}", renderer.commands);
    }

    println!(
        "Demo finished: {} runs completed, current score {}, best {}",
        session.runs_completed(),
        session.run.score,
        session.run.best_score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is WebGame, this is just to satisfy the compiler
}
