//! Overlap tests for circles and axis-aligned rectangles
//!
//! Every entity collides as a circle except barricades, which are squares
//! whose position is their center.

use glam::Vec2;

/// Circle/circle overlap (touching does not count)
#[inline]
pub fn circles_overlap(p1: Vec2, r1: f32, p2: Vec2, r2: f32) -> bool {
    let radius_sum = r1 + r2;
    p1.distance_squared(p2) < radius_sum * radius_sum
}

/// Point on a centered rectangle closest to `point`
#[inline]
pub fn closest_point_on_rect(point: Vec2, rect_center: Vec2, rect_size: Vec2) -> Vec2 {
    let half = rect_size / 2.0;
    point.clamp(rect_center - half, rect_center + half)
}

/// Circle/rectangle overlap, rectangle given by its center and full size
#[inline]
pub fn circle_rect_overlap(
    circle_pos: Vec2,
    circle_radius: f32,
    rect_center: Vec2,
    rect_size: Vec2,
) -> bool {
    let nearest = closest_point_on_rect(circle_pos, rect_center, rect_size);
    circle_pos.distance_squared(nearest) < circle_radius * circle_radius
}

/// Check if a point lies outside the world expanded by `margin` on every side
#[inline]
pub fn outside_bounds(pos: Vec2, world: Vec2, margin: f32) -> bool {
    pos.x < -margin || pos.y < -margin || pos.x > world.x + margin || pos.y > world.y + margin
}
