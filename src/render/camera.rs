//! Camera framing

use glam::Vec2;

use crate::consts::{VIEW_H, VIEW_W, WORLD_H, WORLD_W};
use crate::sim::Player;

/// Midpoint of the living players, the lone survivor, or the base when both
/// are down. Clamped so the view never shows past the world edge.
pub fn camera_center(players: &[Player; 2], base: Vec2) -> Vec2 {
    let target = match players {
        [a, b] if a.alive && b.alive => (a.pos + b.pos) / 2.0,
        [a, _] if a.alive => a.pos,
        [_, b] if b.alive => b.pos,
        _ => base,
    };
    clamp_view(target)
}

/// Keep a view center far enough from the edges for the whole view to fit
pub fn clamp_view(center: Vec2) -> Vec2 {
    let half = Vec2::new(VIEW_W, VIEW_H) / 2.0;
    center.clamp(half, Vec2::new(WORLD_W, WORLD_H) - half)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::PlayerSlot;
    use crate::world_center;

    fn players() -> [Player; 2] {
        [Player::new(PlayerSlot::One), Player::new(PlayerSlot::Two)]
    }

    #[test]
    fn test_midpoint_of_living_players() {
        let players = players();
        let center = camera_center(&players, world_center());
        assert_eq!(center, (players[0].pos + players[1].pos) / 2.0);
    }

    #[test]
    fn test_follows_survivor_then_base() {
        let mut players = players();
        players[0].alive = false;
        players[1].pos = Vec2::new(1000.0, 700.0);
        assert_eq!(camera_center(&players, world_center()), Vec2::new(1000.0, 700.0));

        players[1].alive = false;
        assert_eq!(camera_center(&players, world_center()), world_center());
    }

    #[test]
    fn test_clamped_at_world_corner() {
        let mut players = players();
        players[0].pos = Vec2::new(10.0, 10.0);
        players[1].pos = Vec2::new(20.0, 20.0);
        assert_eq!(
            camera_center(&players, world_center()),
            Vec2::new(VIEW_W / 2.0, VIEW_H / 2.0)
        );

        players[0].pos = Vec2::new(WORLD_W, WORLD_H);
        players[1].pos = Vec2::new(WORLD_W, WORLD_H);
        assert_eq!(
            camera_center(&players, world_center()),
            Vec2::new(WORLD_W - VIEW_W / 2.0, WORLD_H - VIEW_H / 2.0)
        );
    }
}
