//! Demo autopilot: both players play themselves
//!
//! Used by the headless binary and by soak tests. Each player turns to face
//! the nearest zombie, keeps firing, and spends its ability when it is ready.

use glam::Vec2;

use super::phase::GamePhase;
use super::state::{GameState, PlayerSlot, Zombie};
use super::tick::{PlayerControls, TickInput};
use crate::consts::EXPLOSION_RADIUS;

/// Players back off from zombies closer than this
const KEEP_AWAY: f32 = 90.0;

/// Build this frame's input from the current state
pub fn drive(state: &GameState) -> TickInput {
    let mut input = TickInput::default();

    match state.phase {
        GamePhase::MainMenu => input.confirm = true,
        GamePhase::Playing => {
            for slot in PlayerSlot::ALL {
                input.players[slot.index()] = drive_player(state, slot);
            }
        }
        GamePhase::Paused | GamePhase::GameOver => {}
    }

    input
}

fn nearest_zombie(zombies: &[Zombie], pos: Vec2) -> Option<&Zombie> {
    zombies.iter().min_by(|a, b| {
        a.pos
            .distance_squared(pos)
            .partial_cmp(&b.pos.distance_squared(pos))
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}

fn drive_player(state: &GameState, slot: PlayerSlot) -> PlayerControls {
    let player = state.player(slot);
    let mut controls = PlayerControls::default();
    if !player.alive {
        return controls;
    }

    let Some(zombie) = nearest_zombie(&state.zombies, player.pos) else {
        // Nothing to shoot: drift back toward the base
        steer_toward(&mut controls, state.base_pos - player.pos);
        return controls;
    };

    let to_zombie = zombie.pos - player.pos;
    let dist = to_zombie.length();
    if dist < KEEP_AWAY {
        steer_toward(&mut controls, -to_zombie);
    } else {
        steer_toward(&mut controls, to_zombie);
        controls.fire = true;
    }

    controls.ability = state.ability(slot).ready()
        && match slot {
            PlayerSlot::One => dist < EXPLOSION_RADIUS,
            PlayerSlot::Two => true,
        };

    controls
}

/// Hold the movement keys that point along `dir` (8-way)
fn steer_toward(controls: &mut PlayerControls, dir: Vec2) {
    const DEAD_ZONE: f32 = 4.0;
    controls.left = dir.x < -DEAD_ZONE;
    controls.right = dir.x > DEAD_ZONE;
    controls.up = dir.y < -DEAD_ZONE;
    controls.down = dir.y > DEAD_ZONE;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::tick;

    #[test]
    fn test_confirms_from_menu() {
        let state = GameState::new(1);
        assert!(drive(&state).confirm);
    }

    #[test]
    fn test_faces_and_fires_at_nearest_zombie() {
        let mut state = GameState::new(1);
        state.restart_run();
        state.phase = GamePhase::Playing;
        let p1 = state.players[0].pos;
        state.spawn_zombie(p1 + Vec2::new(300.0, 0.0));
        state.spawn_zombie(p1 + Vec2::new(0.0, 500.0));

        let input = drive(&state);
        let controls = input.players[0];
        assert!(controls.right && !controls.left && !controls.up && !controls.down);
        assert!(controls.fire);
        // Cooldown just restarted
        assert!(!controls.ability);
    }

    #[test]
    fn test_backs_off_when_close() {
        let mut state = GameState::new(1);
        state.restart_run();
        state.phase = GamePhase::Playing;
        let p2 = state.players[1].pos;
        state.spawn_zombie(p2 + Vec2::new(0.0, -50.0));

        let controls = drive(&state).players[1];
        assert!(controls.down);
        assert!(!controls.fire);
    }

    #[test]
    fn test_dead_player_is_idle() {
        let mut state = GameState::new(1);
        state.restart_run();
        state.phase = GamePhase::Playing;
        state.players[0].alive = false;
        state.spawn_zombie(Vec2::ZERO);
        assert_eq!(drive(&state).players[0], PlayerControls::default());
    }

    #[test]
    fn test_same_seed_same_session() {
        let run = |seed| {
            let mut state = GameState::new(seed);
            for _ in 0..600 {
                let input = drive(&state);
                tick(&mut state, &input, 1.0 / 60.0);
            }
            (state.time_ticks, state.wave.clone(), state.zombies.len())
        };
        assert_eq!(run(77), run(77));
    }
}
