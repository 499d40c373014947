//! Random item placement.
//!
//! Positions are drawn uniformly inside the padded board and rejected when
//! the item center lands inside the exclusion circle (the altar's clear
//! radius). Retries are bounded: after `MAX_ATTEMPTS` the last draw wins,
//! so placement always terminates even on boards too cramped to satisfy
//! the constraint.

use glam::Vec2;
use rand::Rng;

use super::board::Board;

/// Upper bound on rejection retries per placement.
pub const MAX_ATTEMPTS: u32 = 100;

/// Pick a spot for one item of `item_size` board units. The returned
/// position is the item's top-left corner, always within the padded
/// bounds; clearing the exclusion circle is best effort.
pub fn sample_position(
    rng: &mut impl Rng,
    board: Board,
    item_size: f32,
    padding: f32,
    exclusion_center: Vec2,
    exclusion_radius: f32,
) -> Vec2 {
    // Usable range per axis. Boards smaller than item + 2 * padding
    // collapse the range to the single coordinate `padding`.
    let max_x = (board.width - item_size - padding).max(padding);
    let max_y = (board.height - item_size - padding).max(padding);

    let mut pos = Vec2::new(padding, padding);
    for _ in 0..MAX_ATTEMPTS {
        pos = Vec2::new(
            rng.random_range(padding..=max_x),
            rng.random_range(padding..=max_y),
        );
        let center = pos + Vec2::splat(item_size / 2.0);
        if center.distance(exclusion_center) > exclusion_radius {
            return pos;
        }
    }
    // Every draw landed in the circle; keep the last one.
    pos
}
