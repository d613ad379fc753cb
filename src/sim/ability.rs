//! Per-player special abilities
//!
//! Player 1 detonates an explosion around itself; player 2 drops a barricade
//! in front of itself. Each ability is gated by its own cooldown timer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::circles_overlap;
use super::state::{GameEvent, GameState, KillCause, PlayerSlot};
use crate::consts::*;

/// Cooldown timer for one player's ability
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbilityState {
    /// Seconds since the ability was last used (or since the run began)
    pub elapsed: f32,
    /// Seconds required between uses
    pub cooldown: f32,
}

impl AbilityState {
    pub fn new(cooldown: f32) -> Self {
        Self {
            elapsed: 0.0,
            cooldown,
        }
    }

    /// Usable once the full cooldown has passed (inclusive)
    pub fn ready(&self) -> bool {
        self.elapsed >= self.cooldown
    }

    /// Whole seconds left until ready (0 when ready)
    pub fn remaining_secs(&self) -> u32 {
        if self.ready() {
            0
        } else {
            (self.cooldown - self.elapsed).ceil() as u32
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Restart the cooldown
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
    }

    /// Consume the ability if ready; returns whether it fired
    pub fn try_use(&mut self) -> bool {
        if self.ready() {
            self.restart();
            true
        } else {
            false
        }
    }
}

/// Player 1's explosion. Damage is applied once at the trigger instant; the
/// growth and fade afterwards are for drawing only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub pos: Vec2,
    /// Animated radius, grows toward `max_radius`
    pub radius: f32,
    pub max_radius: f32,
    /// Opacity in 0-255
    pub alpha: f32,
    pub active: bool,
    pub damage_dealt: bool,
}

impl Default for Explosion {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            radius: 0.0,
            max_radius: EXPLOSION_RADIUS,
            alpha: 0.0,
            active: false,
            damage_dealt: false,
        }
    }
}

impl Explosion {
    /// Start a new blast at `pos`
    pub fn detonate(&mut self, pos: Vec2) {
        self.pos = pos;
        self.radius = 0.0;
        self.alpha = 255.0;
        self.active = true;
        self.damage_dealt = false;
    }

    /// Grow and fade; deactivates once fully transparent
    pub fn animate(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.radius = (self.radius + EXPLOSION_EXPAND_SPEED * dt).min(self.max_radius);
        self.alpha = (self.alpha - EXPLOSION_FADE_SPEED * dt).max(0.0);
        if self.alpha <= 0.0 {
            self.active = false;
            self.damage_dealt = false;
        }
    }

    /// Switch off immediately (world reset)
    pub fn clear(&mut self) {
        self.active = false;
        self.damage_dealt = false;
        self.radius = 0.0;
        self.alpha = 0.0;
    }
}

/// Center of a barricade dropped by a player at `pos` facing `dir`
pub fn barricade_drop_point(pos: Vec2, dir: Vec2, player_radius: f32) -> Vec2 {
    let offset = player_radius + BARRICADE_SIZE.x / 2.0 + BARRICADE_SPACING;
    pos + dir * offset
}

/// Player 1's ability: blast every zombie within the maximum radius right
/// now. Returns the kill count, or `None` if the ability couldn't be used.
pub fn trigger_explosion(state: &mut GameState) -> Option<u32> {
    let slot = PlayerSlot::One;
    if !state.player(slot).alive || !state.abilities[slot.index()].try_use() {
        return None;
    }

    let origin = state.player(slot).pos;
    state.explosion.detonate(origin);
    let reach = state.explosion.max_radius;

    let mut killed = Vec::new();
    state.zombies.retain(|z| {
        let hit = circles_overlap(origin, reach, z.pos, z.radius);
        if hit {
            killed.push(z.id);
        }
        !hit
    });
    for &id in &killed {
        state.record_zombie_removed(id, KillCause::Explosion);
    }
    state.explosion.damage_dealt = true;

    let kills = killed.len() as u32;
    log::info!("Explosion at ({:.0}, {:.0}) killed {}", origin.x, origin.y, kills);
    state.events.push(GameEvent::ExplosionTriggered { pos: origin, kills });
    Some(kills)
}

/// Player 2's ability: drop a barricade ahead of the player. Returns the new
/// barricade's id, or `None` if the ability couldn't be used.
pub fn trigger_barricade(state: &mut GameState) -> Option<u32> {
    let slot = PlayerSlot::Two;
    if !state.player(slot).alive || !state.abilities[slot.index()].try_use() {
        return None;
    }

    let player = state.player(slot);
    let pos = barricade_drop_point(player.pos, player.last_dir, player.radius);
    let id = state.place_barricade(pos);
    log::info!("Barricade {} placed at ({:.0}, {:.0})", id, pos.x, pos.y);
    Some(id)
}
