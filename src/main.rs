//! Zomboid Arena entry point
//!
//! Loads settings and assets, then runs a headless autopilot session: both
//! players are driven by `sim::autopilot` at the configured frame rate until
//! the base falls, quit is requested, or the session time runs out.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use zomboid_arena::Settings;
use zomboid_arena::assets::Assets;
use zomboid_arena::sim::{
    FrameClock, GameEvent, GamePhase, GameState, KillCause, autopilot, tick,
};

fn main() -> Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Zomboid Arena starting...");

    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(Settings::FILE_NAME));
    let settings = Settings::load(&settings_path);

    let assets = match Assets::load(&settings) {
        Ok(assets) => assets,
        Err(err) => {
            log::error!("{err:#}");
            return Err(err);
        }
    };
    log::debug!(
        "Assets ready ({} + {} bytes)",
        assets.font.len(),
        assets.sprite.len()
    );

    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Game initialized with seed: {}", seed);

    run_session(&settings, seed);
    Ok(())
}

/// Seed from the wall clock when none is configured
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Running totals from drained game events
#[derive(Debug, Default)]
struct Tally {
    bullet_kills: u32,
    explosion_kills: u32,
    barricades_placed: u32,
    barricades_lost: u32,
}

impl Tally {
    fn record(&mut self, event: &GameEvent) {
        log::trace!("{:?}", event);
        match event {
            GameEvent::ZombieRemoved {
                cause: KillCause::Bullet(_),
                ..
            } => self.bullet_kills += 1,
            GameEvent::ZombieRemoved {
                cause: KillCause::Explosion,
                ..
            } => self.explosion_kills += 1,
            GameEvent::BarricadePlaced { .. } => self.barricades_placed += 1,
            GameEvent::BarricadeDestroyed { .. } => self.barricades_lost += 1,
            _ => {}
        }
    }
}

fn run_session(settings: &Settings, seed: u64) {
    let mut state = GameState::new(seed);
    let mut clock = FrameClock::new();
    let mut tally = Tally::default();
    let frame_dt = settings.frame_dt() as f64;
    let mut now = 0.0f64;
    let mut simulated = 0.0f32;

    loop {
        let input = autopilot::drive(&state);
        let dt = clock.delta(now, state.phase.simulates());
        now += frame_dt;
        simulated += dt;

        let frame = tick(&mut state, &input, dt);
        for event in state.drain_events() {
            tally.record(&event);
        }

        if frame.quit {
            log::info!("Quit requested");
            break;
        }
        if state.phase == GamePhase::GameOver {
            break;
        }
        if simulated >= settings.autopilot_secs {
            log::info!("Session time up after {:.1}s", simulated);
            break;
        }
    }

    log::info!(
        "Session over: wave {}, {} zombies left, {} steps",
        state.wave.wave,
        state.wave.remaining,
        state.time_ticks
    );
    log::info!("{:?}", tally);
}
