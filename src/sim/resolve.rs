//! Collision resolution, run once per step in a fixed order:
//! bullets vs zombies, zombies vs barricades, zombies vs base, zombies vs players.
//!
//! Removals are marked during a scan and compacted once afterwards, so store
//! order is preserved and nothing is skipped by shifting indices.

use super::collision::{circle_rect_overlap, circles_overlap};
use super::phase::{self, GamePhase};
use super::state::{GameEvent, GameState, KillCause};
use crate::consts::{BASE_RADIUS, ZOMBIE_SPEED};

/// Drop every item whose flag is set, keeping the rest in order
fn compact<T>(items: &mut Vec<T>, removed: &[bool]) {
    let mut index = 0;
    items.retain(|_| {
        let keep = !removed[index];
        index += 1;
        keep
    });
}

/// Each bullet kills at most one zombie; both are removed.
/// Returns the number of kills.
pub fn bullets_vs_zombies(state: &mut GameState) -> u32 {
    let mut bullet_gone = vec![false; state.bullets.len()];
    let mut zombie_gone = vec![false; state.zombies.len()];
    let mut kills = Vec::new();

    for bi in (0..state.bullets.len()).rev() {
        let bullet = &state.bullets[bi];
        for zi in (0..state.zombies.len()).rev() {
            if zombie_gone[zi] {
                continue;
            }
            let zombie = &state.zombies[zi];
            if circles_overlap(bullet.pos, bullet.radius, zombie.pos, zombie.radius) {
                bullet_gone[bi] = true;
                zombie_gone[zi] = true;
                kills.push((zombie.id, bullet.owner));
                break;
            }
        }
    }

    if kills.is_empty() {
        return 0;
    }
    compact(&mut state.bullets, &bullet_gone);
    compact(&mut state.zombies, &zombie_gone);
    for &(id, owner) in &kills {
        state.record_zombie_removed(id, KillCause::Bullet(owner));
    }
    kills.len() as u32
}

/// A zombie touching a barricade chips one health off it and is shoved back.
/// Each zombie touches at most one barricade per step; a barricade at zero
/// health is gone before the next zombie is checked.
pub fn zombies_vs_barricades(state: &mut GameState, dt: f32) {
    if state.barricades.is_empty() {
        return;
    }
    let mut destroyed = vec![false; state.barricades.len()];
    let push = 2.0 * ZOMBIE_SPEED * dt;

    for zi in (0..state.zombies.len()).rev() {
        let zombie = &mut state.zombies[zi];
        for bi in (0..state.barricades.len()).rev() {
            if destroyed[bi] {
                continue;
            }
            let bar = &mut state.barricades[bi];
            if !circle_rect_overlap(zombie.pos, zombie.radius, bar.pos, bar.size) {
                continue;
            }

            bar.health -= 1;
            let away = (zombie.pos - bar.pos).normalize_or_zero();
            zombie.pos += away * push;

            if bar.health <= 0 {
                destroyed[bi] = true;
                log::info!("Barricade {} destroyed", bar.id);
                state.events.push(GameEvent::BarricadeDestroyed { id: bar.id });
            }
            break;
        }
    }

    if destroyed.iter().any(|&d| d) {
        compact(&mut state.barricades, &destroyed);
    }
}

/// The first zombie to touch the base ends the run. It leaves the store and
/// is counted off the wave. Returns whether the base was reached.
pub fn zombies_vs_base(state: &mut GameState) -> bool {
    let base = state.base_pos;
    let Some(index) = state
        .zombies
        .iter()
        .position(|z| circles_overlap(z.pos, z.radius, base, BASE_RADIUS))
    else {
        return false;
    };

    let zombie = state.zombies.remove(index);
    state.record_zombie_removed(zombie.id, KillCause::ReachedBase);
    state.events.push(GameEvent::BaseOverrun);
    log::info!("Base overrun on wave {}", state.wave.wave);
    phase::enter_game_over(state);
    true
}

/// Any zombie touching a living player knocks it out. Both players are
/// checked every step.
pub fn zombies_vs_players(state: &mut GameState) {
    for player in state.players.iter_mut().filter(|p| p.alive) {
        let hit = state
            .zombies
            .iter()
            .any(|z| circles_overlap(z.pos, z.radius, player.pos, player.radius));
        if hit {
            player.alive = false;
            log::info!("Player {:?} is down", player.slot);
            state.events.push(GameEvent::PlayerDown { slot: player.slot });
        }
    }
}

/// Run every collision rule in order
pub fn run(state: &mut GameState, dt: f32) {
    // Player checks are skipped only if the run had already ended before this
    // phase; a base overrun during this phase doesn't spare the players.
    let already_over = state.phase == GamePhase::GameOver;

    bullets_vs_zombies(state);
    zombies_vs_barricades(state, dt);
    if !already_over {
        zombies_vs_base(state);
        zombies_vs_players(state);
    }
}
