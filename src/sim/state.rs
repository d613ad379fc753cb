//! Game state and core simulation types
//!
//! Entity stores are plain `Vec`s kept in spawn order. Wave and ability
//! counters live here too so a whole run is one owned value.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ability::{AbilityState, Explosion};
use super::phase::GamePhase;
use super::wave::{WaveAction, WaveState};
use crate::consts::*;
use crate::render::colors;
use crate::{clamp_to_world, world_center};

/// Which of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub const ALL: [PlayerSlot; 2] = [PlayerSlot::One, PlayerSlot::Two];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }
}

/// A player-controlled defender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub slot: PlayerSlot,
    pub pos: Vec2,
    pub radius: f32,
    pub alive: bool,
    /// Last non-zero movement direction; aims shots and barricades
    pub last_dir: Vec2,
    /// Seconds since the last shot
    pub fire_timer: f32,
    pub color: [f32; 4],
}

impl Player {
    pub fn new(slot: PlayerSlot) -> Self {
        let mut player = Self {
            slot,
            pos: Vec2::ZERO,
            radius: PLAYER_RADIUS,
            alive: true,
            last_dir: Vec2::NEG_Y,
            fire_timer: FIRE_INTERVAL,
            color: match slot {
                PlayerSlot::One => colors::PLAYER_ONE,
                PlayerSlot::Two => colors::PLAYER_TWO,
            },
        };
        player.reset();
        player
    }

    /// Spawn position for this slot: thirds of the world width, mid height
    pub fn spawn_point(slot: PlayerSlot) -> Vec2 {
        match slot {
            PlayerSlot::One => Vec2::new(WORLD_W / 3.0, WORLD_H / 2.0),
            PlayerSlot::Two => Vec2::new(2.0 * WORLD_W / 3.0, WORLD_H / 2.0),
        }
    }

    /// Back to the spawn point, alive, facing up, gun ready on the next
    /// frame that advances time
    pub fn reset(&mut self) {
        self.pos = Self::spawn_point(self.slot);
        self.alive = true;
        self.last_dir = Vec2::NEG_Y;
        self.fire_timer = FIRE_INTERVAL;
    }

    /// Move along `axis` (unnormalized, may be zero) for `dt` seconds
    pub fn steer(&mut self, axis: Vec2, dt: f32) {
        let dir = axis.normalize_or_zero();
        if dir != Vec2::ZERO {
            self.last_dir = dir;
        }
        self.pos = clamp_to_world(self.pos + dir * PLAYER_SPEED * dt, self.radius);
    }

    /// Whether the fire interval has strictly elapsed
    pub fn can_fire(&self) -> bool {
        self.fire_timer > FIRE_INTERVAL
    }
}

/// A projectile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub owner: PlayerSlot,
    pub color: [f32; 4],
}

/// A zombie. Radius never changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zombie {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    /// Sprite scale for drawing
    pub scale: f32,
}

impl Zombie {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            radius: ZOMBIE_RADIUS,
            scale: ZOMBIE_SPRITE_SCALE,
        }
    }
}

/// A square obstacle that zombies chew through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Barricade {
    pub id: u32,
    /// Center of the square
    pub pos: Vec2,
    pub size: Vec2,
    pub health: i32,
    pub max_health: i32,
}

impl Barricade {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            size: BARRICADE_SIZE,
            health: BARRICADE_HEALTH,
            max_health: BARRICADE_HEALTH,
        }
    }

    /// Blue at full health, shading to red as it wears down
    pub fn color(&self) -> [f32; 4] {
        let ratio = (self.health as f32 / self.max_health as f32).clamp(0.0, 1.0);
        [1.0 - ratio, 150.0 / 255.0, ratio, 1.0]
    }

    /// "health/max" label drawn above the barricade
    pub fn label(&self) -> String {
        format!("{}/{}", self.health, self.max_health)
    }
}

/// Why a zombie left the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KillCause {
    Bullet(PlayerSlot),
    Explosion,
    ReachedBase,
}

/// Notable things that happened during a tick (drained by the driver)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    WaveStarted { wave: u32, quota: u32 },
    ZombieSpawned { id: u32 },
    ZombieRemoved { id: u32, cause: KillCause },
    ExplosionTriggered { pos: Vec2, kills: u32 },
    BarricadePlaced { id: u32 },
    BarricadeDestroyed { id: u32 },
    PlayerDown { slot: PlayerSlot },
    BaseOverrun,
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the spawn RNG was created from
    pub seed: u64,
    pub phase: GamePhase,
    pub players: [Player; 2],
    /// Stores in spawn order
    pub bullets: Vec<Bullet>,
    pub zombies: Vec<Zombie>,
    pub barricades: Vec<Barricade>,
    pub explosion: Explosion,
    pub wave: WaveState,
    /// Indexed by `PlayerSlot::index`
    pub abilities: [AbilityState; 2],
    pub base_pos: Vec2,
    /// Camera center from the last Playing step
    pub camera: Vec2,
    /// Simulation steps run this session
    pub time_ticks: u64,
    pub quit_requested: bool,
    /// Events since the driver last drained them
    pub events: Vec<GameEvent>,
    rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a new session sitting in the main menu
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::MainMenu,
            players: [Player::new(PlayerSlot::One), Player::new(PlayerSlot::Two)],
            bullets: Vec::new(),
            zombies: Vec::new(),
            barricades: Vec::new(),
            explosion: Explosion::default(),
            wave: WaveState::default(),
            abilities: [
                AbilityState::new(PLAYER1_ABILITY_COOLDOWN),
                AbilityState::new(PLAYER2_ABILITY_COOLDOWN),
            ],
            base_pos: world_center(),
            camera: world_center(),
            time_ticks: 0,
            quit_requested: false,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn player(&self, slot: PlayerSlot) -> &Player {
        &self.players[slot.index()]
    }

    pub fn player_mut(&mut self, slot: PlayerSlot) -> &mut Player {
        &mut self.players[slot.index()]
    }

    pub fn ability(&self, slot: PlayerSlot) -> &AbilityState {
        &self.abilities[slot.index()]
    }

    /// Full world reset: players, transient entities and wave counters.
    /// Cooldowns are left alone; see `restart_run`.
    pub fn reset_world(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
        self.bullets.clear();
        self.zombies.clear();
        self.barricades.clear();
        self.explosion.clear();
        self.wave.reset();
        self.camera = world_center();
    }

    /// Reset the world, restart both cooldowns and begin wave 1
    pub fn restart_run(&mut self) {
        self.reset_world();
        self.reset_cooldowns();
        self.start_wave();
    }

    pub fn reset_cooldowns(&mut self) {
        for ability in &mut self.abilities {
            ability.restart();
        }
    }

    pub fn start_wave(&mut self) {
        self.wave.start_wave();
        self.events.push(GameEvent::WaveStarted {
            wave: self.wave.wave,
            quota: self.wave.quota,
        });
    }

    /// Run the wave director for this step
    pub fn update_wave(&mut self) -> WaveAction {
        self.wave.update(self.zombies.len(), &mut self.rng)
    }

    /// Add a zombie at `pos`, returning its id
    pub fn spawn_zombie(&mut self, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.zombies.push(Zombie::new(id, pos));
        self.events.push(GameEvent::ZombieSpawned { id });
        log::debug!("Zombie {} spawned at ({:.0}, {:.0})", id, pos.x, pos.y);
        id
    }

    /// Add a full-health barricade centered at `pos`, returning its id
    pub fn place_barricade(&mut self, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.barricades.push(Barricade::new(id, pos));
        self.events.push(GameEvent::BarricadePlaced { id });
        id
    }

    /// Fire a bullet from `slot` along its last direction
    pub fn spawn_bullet(&mut self, slot: PlayerSlot) {
        let id = self.next_entity_id();
        let player = &self.players[slot.index()];
        self.bullets.push(Bullet {
            id,
            pos: player.pos,
            vel: player.last_dir * BULLET_SPEED,
            radius: BULLET_RADIUS,
            owner: slot,
            color: player.color,
        });
    }

    /// Book-keeping for a zombie that has left the store
    pub fn record_zombie_removed(&mut self, id: u32, cause: KillCause) {
        self.wave.record_removal();
        self.events.push(GameEvent::ZombieRemoved { id, cause });
        log::debug!("Zombie {} removed ({:?})", id, cause);
    }

    /// Take the events accumulated since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
