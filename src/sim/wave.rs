//! Wave director
//!
//! Tracks the current wave, how many zombies it spawns, and how many are still
//! unaccounted for. `remaining` only drops when a zombie leaves the store, so
//! a wave can't advance while its last zombies are still walking.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Counters for the current wave
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveState {
    /// Current wave number (0 before the first wave starts)
    pub wave: u32,
    /// Zombies this wave spawns in total
    pub quota: u32,
    /// Zombies spawned so far this wave (never exceeds `quota`)
    pub spawned: u32,
    /// Zombies not yet removed from the store. Signed so the `<= 0` clear
    /// check is total
    pub remaining: i32,
    /// Seconds since the last spawn
    pub spawn_timer: f32,
}

/// What the director wants done this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaveAction {
    Idle,
    /// Spawn one zombie at this position
    Spawn(Vec2),
    /// The previous wave is cleared and a new one has begun
    Advanced { wave: u32 },
}

/// Quota for a given wave number (1-based)
pub fn quota_for_wave(wave: u32) -> u32 {
    INITIAL_ZOMBIES + wave.saturating_sub(1) * ZOMBIE_INCREMENT_PER_WAVE
}

impl WaveState {
    /// Zero every counter (world reset)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Begin the next wave
    pub fn start_wave(&mut self) {
        self.wave += 1;
        self.quota = quota_for_wave(self.wave);
        self.spawned = 0;
        self.remaining = self.quota as i32;
        log::info!("Wave {} started: {} zombies", self.wave, self.quota);
    }

    /// Advance the spawn timer
    pub fn advance(&mut self, dt: f32) {
        self.spawn_timer += dt;
    }

    /// Whether the wave still has zombies to spawn
    pub fn spawning(&self) -> bool {
        self.spawned < self.quota
    }

    /// Whether the wave is done: all spawned, none alive, none unaccounted
    pub fn cleared(&self, zombies_alive: usize) -> bool {
        self.spawned == self.quota && zombies_alive == 0 && self.remaining <= 0
    }

    /// Decide on spawning or advancing for this tick
    ///
    /// Spawning and advancing are exclusive: the advance check only runs once
    /// the whole quota is out.
    pub fn update(&mut self, zombies_alive: usize, rng: &mut impl Rng) -> WaveAction {
        if self.spawning() {
            if self.spawn_timer > ZOMBIE_SPAWN_INTERVAL {
                self.spawned += 1;
                self.spawn_timer = 0.0;
                return WaveAction::Spawn(edge_spawn_point(rng));
            }
        } else if self.cleared(zombies_alive) {
            self.start_wave();
            return WaveAction::Advanced { wave: self.wave };
        }
        WaveAction::Idle
    }

    /// Account for one zombie leaving the store (bullet, explosion or base)
    pub fn record_removal(&mut self) {
        self.remaining -= 1;
    }
}

/// Random point on one of the four world edges, pushed outside by `SPAWN_MARGIN`
pub fn edge_spawn_point(rng: &mut impl Rng) -> Vec2 {
    match rng.random_range(0..4) {
        0 => Vec2::new(rng.random_range(0.0..WORLD_W), -SPAWN_MARGIN),
        1 => Vec2::new(rng.random_range(0.0..WORLD_W), WORLD_H + SPAWN_MARGIN),
        2 => Vec2::new(-SPAWN_MARGIN, rng.random_range(0.0..WORLD_H)),
        _ => Vec2::new(WORLD_W + SPAWN_MARGIN, rng.random_range(0.0..WORLD_H)),
    }
}
