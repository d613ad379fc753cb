//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time only enters through the `dt` passed to `tick`
//! - Seeded RNG only
//! - Stable iteration order (stores kept in spawn order)
//! - No drawing or file I/O

pub mod ability;
pub mod ai;
pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod phase;
pub mod resolve;
pub mod state;
pub mod tick;
pub mod wave;

pub use ability::{AbilityState, Explosion, trigger_barricade, trigger_explosion};
pub use clock::FrameClock;
pub use phase::{GamePhase, Transition};
pub use state::{
    Barricade, Bullet, GameEvent, GameState, KillCause, Player, PlayerSlot, Zombie,
};
pub use tick::{PlayerControls, TickInput, step, tick};
pub use wave::{WaveAction, WaveState};
