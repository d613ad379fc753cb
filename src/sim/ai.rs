//! Zombie targeting and movement
//!
//! Zombies walk straight at the base unless a barricade is in the way. A
//! barricade they are touching always wins; otherwise the nearest barricade
//! inside a cone around the base direction is chosen.

use glam::Vec2;

use super::collision::circle_rect_overlap;
use super::state::{Barricade, Zombie};
use crate::consts::PATH_CONE_COS;

/// What a zombie is heading for this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    Base(Vec2),
    /// Center of a barricade the zombie is touching
    Engaged(Vec2),
    /// Center of a barricade roughly on the way to the base
    Blocking(Vec2),
}

impl Target {
    pub fn pos(&self) -> Vec2 {
        match *self {
            Target::Base(pos) => pos,
            Target::Engaged(pos) | Target::Blocking(pos) => pos,
        }
    }
}

/// Pick a zombie's target for this tick
pub fn select_target(zombie: &Zombie, base: Vec2, barricades: &[Barricade]) -> Target {
    if let Some(bar) = barricades
        .iter()
        .find(|bar| circle_rect_overlap(zombie.pos, zombie.radius, bar.pos, bar.size))
    {
        return Target::Engaged(bar.pos);
    }

    let to_base = base - zombie.pos;
    let base_len = to_base.length();
    if base_len <= 0.0 {
        return Target::Base(base);
    }

    let mut best: Option<(Vec2, f32)> = None;
    for bar in barricades {
        let to_bar = bar.pos - zombie.pos;
        let bar_len = to_bar.length();
        if bar_len <= 0.0 {
            continue;
        }
        let cosine = to_base.dot(to_bar) / (base_len * bar_len);
        if cosine > PATH_CONE_COS && best.is_none_or(|(_, d)| bar_len < d) {
            best = Some((bar.pos, bar_len));
        }
    }

    match best {
        Some((pos, _)) => Target::Blocking(pos),
        None => Target::Base(base),
    }
}

/// Step a zombie toward `target` at `speed`, stopping on it rather than past it
pub fn step_toward(zombie: &mut Zombie, target: Vec2, speed: f32, dt: f32) {
    let to_target = target - zombie.pos;
    let dist = to_target.length();
    let stride = speed * dt;
    if dist <= stride {
        zombie.pos = target;
    } else {
        zombie.pos += to_target / dist * stride;
    }
}

/// Retarget and move every zombie
pub fn run(zombies: &mut [Zombie], base: Vec2, barricades: &[Barricade], speed: f32, dt: f32) {
    for zombie in zombies.iter_mut() {
        let target = select_target(zombie, base, barricades);
        step_toward(zombie, target.pos(), speed, dt);
    }
}
