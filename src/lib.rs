//! Zomboid Arena - two players hold a central base against zombie waves
//!
//! Core modules:
//! - `sim`: Simulation (phases, waves, abilities, zombie AI, collisions)
//! - `render`: Render payload consumed by a presentation layer
//! - `input`: Key bindings and per-frame control state
//! - `settings`: Presentation preferences (bindings, frame cap, asset paths)
//! - `assets`: Startup asset verification

pub mod assets;
pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// World dimensions
    pub const WORLD_W: f32 = 1600.0;
    pub const WORLD_H: f32 = 1200.0;
    /// Camera view dimensions
    pub const VIEW_W: f32 = 800.0;
    pub const VIEW_H: f32 = 600.0;

    /// Largest frame delta fed to the simulation (prevents huge jumps after a stall)
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Players
    pub const PLAYER_RADIUS: f32 = 12.0;
    pub const PLAYER_SPEED: f32 = 300.0;

    /// Bullets
    pub const BULLET_SPEED: f32 = 600.0;
    pub const BULLET_RADIUS: f32 = 5.0;
    /// Minimum time between shots (seconds, strictly exceeded)
    pub const FIRE_INTERVAL: f32 = 0.2;
    /// Bullets are culled once this far outside the world
    pub const BULLET_CULL_MARGIN: f32 = 100.0;

    /// Zombies
    pub const ZOMBIE_SPEED: f32 = 60.0;
    pub const ZOMBIE_RADIUS: f32 = 12.0;
    /// Sprite is 64px, drawn at 24px
    pub const ZOMBIE_SPRITE_SCALE: f32 = 24.0 / 64.0;
    /// Time between spawns (seconds, strictly exceeded)
    pub const ZOMBIE_SPAWN_INTERVAL: f32 = 0.5;
    /// Spawn distance outside the world edge (off camera)
    pub const SPAWN_MARGIN: f32 = 60.0;

    /// Waves
    pub const INITIAL_ZOMBIES: u32 = 10;
    pub const ZOMBIE_INCREMENT_PER_WAVE: u32 = 5;

    /// Base sits at the world center
    pub const BASE_SIZE: f32 = 24.0;
    pub const BASE_RADIUS: f32 = BASE_SIZE / 2.0;

    /// Abilities
    pub const PLAYER1_ABILITY_COOLDOWN: f32 = 10.0;
    pub const PLAYER2_ABILITY_COOLDOWN: f32 = 10.0;

    /// Explosion (player 1)
    pub const EXPLOSION_RADIUS: f32 = 150.0;
    pub const EXPLOSION_EXPAND_SPEED: f32 = 500.0;
    /// Alpha units (0-255) lost per second
    pub const EXPLOSION_FADE_SPEED: f32 = 200.0;

    /// Barricade (player 2)
    pub const BARRICADE_HEALTH: i32 = 500;
    pub const BARRICADE_SIZE: Vec2 = Vec2::new(40.0, 40.0);
    /// Gap between the player's edge and the barricade's edge
    pub const BARRICADE_SPACING: f32 = 5.0;

    /// A barricade counts as "on the way" to the base above this cosine (~45.6°)
    pub const PATH_CONE_COS: f32 = 0.7;
}

/// World center (base position)
#[inline]
pub fn world_center() -> Vec2 {
    Vec2::new(consts::WORLD_W / 2.0, consts::WORLD_H / 2.0)
}

/// Clamp a point so a circle of `radius` stays inside the world
#[inline]
pub fn clamp_to_world(pos: Vec2, radius: f32) -> Vec2 {
    Vec2::new(
        pos.x.clamp(radius, consts::WORLD_W - radius),
        pos.y.clamp(radius, consts::WORLD_H - radius),
    )
}
