//! Per-frame simulation tick
//!
//! `tick` routes input through the phase machine, runs one simulation step
//! while Playing, and returns the frame to draw.

use glam::Vec2;

use super::ability;
use super::ai;
use super::collision::outside_bounds;
use super::phase;
use super::resolve;
use super::state::{GameEvent, GameState, PlayerSlot};
use super::wave::WaveAction;
use crate::consts::*;
use crate::render::{self, Frame};

/// Controls for one player this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerControls {
    /// Held movement keys
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Held fire key
    pub fire: bool,
    /// Ability key pressed this frame
    pub ability: bool,
}

impl PlayerControls {
    /// Unnormalized movement axis (+y is down)
    pub fn axis(&self) -> Vec2 {
        let mut axis = Vec2::ZERO;
        if self.up {
            axis.y -= 1.0;
        }
        if self.down {
            axis.y += 1.0;
        }
        if self.left {
            axis.x -= 1.0;
        }
        if self.right {
            axis.x += 1.0;
        }
        axis
    }
}

/// Input for a single frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Indexed by `PlayerSlot::index`
    pub players: [PlayerControls; 2],
    /// Start a run from the title screen
    pub confirm: bool,
    /// Pause toggle
    pub pause: bool,
    /// Start over (pause / game over screens)
    pub restart: bool,
    /// Back to the title screen (pause / game over screens)
    pub menu: bool,
    /// Leave the game (pause / game over screens)
    pub quit: bool,
}

impl TickInput {
    pub fn controls(&self, slot: PlayerSlot) -> &PlayerControls {
        &self.players[slot.index()]
    }
}

/// Handle input, advance the simulation by `dt` if Playing, and build the frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Frame {
    let transition = state.phase.handle(input);
    phase::apply(state, transition);

    if state.phase.simulates() && !state.quit_requested {
        step(state, input, dt);
    }

    Frame::capture(state)
}

/// One simulation step. Order matters: later stages read what earlier
/// stages produced.
pub fn step(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;

    // Timers
    for ability in &mut state.abilities {
        ability.advance(dt);
    }
    for player in &mut state.players {
        player.fire_timer += dt;
    }
    state.wave.advance(dt);

    // Abilities
    if input.controls(PlayerSlot::One).ability {
        ability::trigger_explosion(state);
    }
    if input.controls(PlayerSlot::Two).ability {
        ability::trigger_barricade(state);
    }
    state.explosion.animate(dt);

    state.camera = render::camera_center(&state.players, state.base_pos);

    // Spawning / wave advance
    match state.update_wave() {
        WaveAction::Spawn(pos) => {
            state.spawn_zombie(pos);
        }
        WaveAction::Advanced { wave } => {
            state.events.push(GameEvent::WaveStarted {
                wave,
                quota: state.wave.quota,
            });
        }
        WaveAction::Idle => {}
    }

    // Players
    for slot in PlayerSlot::ALL {
        let controls = input.controls(slot);
        let player = state.player_mut(slot);
        if !player.alive {
            continue;
        }
        player.steer(controls.axis(), dt);
        if controls.fire && player.can_fire() {
            player.fire_timer = 0.0;
            state.spawn_bullet(slot);
        }
    }

    // Zombies
    ai::run(
        &mut state.zombies,
        state.base_pos,
        &state.barricades,
        ZOMBIE_SPEED,
        dt,
    );

    // Bullets
    let world = Vec2::new(WORLD_W, WORLD_H);
    for bullet in &mut state.bullets {
        bullet.pos += bullet.vel * dt;
    }
    state
        .bullets
        .retain(|b| !outside_bounds(b.pos, world, BULLET_CULL_MARGIN));

    resolve::run(state, dt);
}
