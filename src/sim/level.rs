//! Level catalog and loader.
//!
//! The catalog is fixed: three levels of rising pressure, shorter timers
//! and larger collections each time. Loading past the end of the catalog
//! is the win condition, decided here so `step` never special-cases it.

use crate::domain::item::{
    requirement_line, Collectible, ItemCounts, ItemKind, ITEM_SIZE, TRAP_GLYPHS,
};
use crate::domain::sampler;
use crate::sim::world::{Phase, WorldState};

/// One catalog entry: the time limit in seconds and the offerings
/// to gather.
pub struct LevelDef {
    pub time_limit: u32,
    pub required: ItemCounts,
}

/// Play order. Counts are [uva, vasija, pergamino, moneda].
const CATALOG: [LevelDef; 3] = [
    LevelDef { time_limit: 60, required: ItemCounts::new([3, 1, 0, 0]) },
    LevelDef { time_limit: 50, required: ItemCounts::new([2, 2, 1, 0]) },
    LevelDef { time_limit: 40, required: ItemCounts::new([1, 2, 2, 1]) },
];

pub fn level_count() -> usize {
    CATALOG.len()
}

pub fn definition_at(index: usize) -> Option<&'static LevelDef> {
    CATALOG.get(index)
}

/// Load a level into the world. Preserves score; resets everything the
/// level owns. An index past the catalog means the run is won: the phase
/// flips to GameComplete and nothing spawns.
pub fn load_level(world: &mut WorldState, index: usize) {
    let def = match definition_at(index) {
        Some(def) => def,
        None => {
            world.phase = Phase::GameComplete;
            world.message.clear();
            world.message_timer = 0;
            return;
        }
    };

    world.current_level = index;
    world.total_levels = level_count();
    world.items.clear();
    world.required = def.required;
    world.collected = ItemCounts::default();
    world.time_remaining = def.time_limit;
    world.subtick = 0;
    world.clear_ticks = 0;
    world.phase = Phase::Playing;

    spawn_items(world);

    world.set_message(&requirement_line(&world.required), 0);
}

/// One collectible per required count unit, plus exactly two traps.
/// Spawn order decides draw order: later items sit on top.
fn spawn_items(world: &mut WorldState) {
    let board = world.board;
    let padding = world.padding;
    let exclusion = world.altar.center();
    let radius = world.exclusion_radius;
    let required = world.required;

    let mut pending: Vec<(ItemKind, &'static str)> = Vec::new();
    for (kind, n) in required.iter() {
        for _ in 0..n {
            pending.push((kind, kind.glyph()));
        }
    }
    for glyph in TRAP_GLYPHS {
        pending.push((ItemKind::Trampa, glyph));
    }

    for (kind, glyph) in pending {
        let pos = sampler::sample_position(
            &mut world.rng,
            board,
            ITEM_SIZE,
            padding,
            exclusion,
            radius,
        );
        let id = world.alloc_id();
        world.items.push(Collectible::new(id, kind, glyph, pos));
    }
}

// ══════════════════════════════════════════
// Tests
// ══════════════════════════════════════════
