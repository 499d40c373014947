//! The state transition function. Every gameplay rule lives here.
//!
//! Processing order for a tick:
//!   1. Banner expiry
//!   2. Fade-outs (clicked items leaving the registry)
//!   3. Countdown (1 Hz, derived from the tick rate)
//!   4. LevelClear delay, then the next level load
//!
//! Clicks arrive already resolved by the UI to `ClickItem` / `ClickAltar`;
//! everything else about them is decided here.

use crate::domain::item::ItemKind;
use crate::sim::event::{Action, GameEvent};
use crate::sim::level;
use crate::sim::world::{Phase, WorldState};

// ── Scoring ──
pub const COLLECT_POINTS: u32 = 10;
pub const TRAP_PENALTY: u32 = 5;
pub const DELIVERY_BONUS: u32 = 50;

/// Advance the simulation by one action. Returns events for the
/// presentation layer.
pub fn step(world: &mut WorldState, action: Action) -> Vec<GameEvent> {
    let mut events = Vec::new();
    match action {
        Action::Start => resolve_start(world, &mut events),
        Action::ClickItem(id) => resolve_item_click(world, id, &mut events),
        Action::ClickAltar => resolve_altar_click(world, &mut events),
        Action::Tick => resolve_tick(world, &mut events),
    }
    events
}

// ══════════════════════════════════════════
// Start / retry
// ══════════════════════════════════════════

fn resolve_start(world: &mut WorldState, events: &mut Vec<GameEvent>) {
    if !matches!(
        world.phase,
        Phase::Title | Phase::GameOver | Phase::GameComplete
    ) {
        return;
    }
    world.score = 0;
    load_and_report(world, 0, events);
}

/// Load `index` and emit the matching event. Loading past the catalog is
/// the win; `load_level` flips the phase and we report it here.
fn load_and_report(world: &mut WorldState, index: usize, events: &mut Vec<GameEvent>) {
    level::load_level(world, index);
    if world.phase == Phase::GameComplete {
        events.push(GameEvent::GameWon { final_score: world.score });
    } else {
        events.push(GameEvent::LevelLoaded { level: world.current_level });
    }
}

// ══════════════════════════════════════════
// Clicks
// ══════════════════════════════════════════

fn resolve_item_click(world: &mut WorldState, id: u32, events: &mut Vec<GameEvent>) {
    if world.phase != Phase::Playing {
        return;
    }

    // A fading or removed item no longer reacts.
    let idx = match world.items.iter().position(|it| it.id == id && !it.collected) {
        Some(i) => i,
        None => return,
    };
    let kind = world.items[idx].kind;
    let fade = world.timing.fade_ticks;

    if kind.is_trap() {
        world.score = world.score.saturating_sub(TRAP_PENALTY);
        world.items[idx].start_fade(fade);
        world.set_message("¡Cuidado! ¡Eso no es una ofrenda!", 0);
        events.push(GameEvent::TrapSprung { penalty: TRAP_PENALTY });
        return;
    }

    let have = world.collected.get(kind);
    let need = world.required.get(kind);
    if have < need {
        world.collected.bump(kind);
        world.score += COLLECT_POINTS;
        world.items[idx].start_fade(fade);
        world.set_message(
            &format!("Has recogido {} de {} {}", have + 1, need, kind.glyph()),
            0,
        );
        events.push(GameEvent::ItemCollected { kind, have: have + 1, need });
    } else {
        // At the cap, or a kind this level never asked for. The item stays.
        world.set_message("Ya tienes suficientes de estos o no los necesitas.", 0);
        events.push(GameEvent::ClickRejected);
    }
}

fn resolve_altar_click(world: &mut WorldState, events: &mut Vec<GameEvent>) {
    if world.phase != Phase::Playing {
        return;
    }

    if !world.offerings_complete() {
        world.set_message("¡Te faltan ofrendas! Revisa lo que necesitas.", 0);
        events.push(GameEvent::OfferingsMissing);
        return;
    }

    world.score += DELIVERY_BONUS;
    world.current_level += 1;
    world.phase = Phase::LevelClear;
    world.clear_ticks = world.timing.clear_delay_ticks;

    // Sweep whatever is left (traps, spares) off the board.
    let fade = world.timing.fade_ticks;
    for item in &mut world.items {
        if !item.collected {
            item.start_fade(fade);
        }
    }

    world.set_message("¡Ofrendas entregadas! ¡Pasas al siguiente nivel!", 0);
    events.push(GameEvent::OfferingsDelivered { bonus: DELIVERY_BONUS });
}

// ══════════════════════════════════════════
// Tick
// ══════════════════════════════════════════

fn resolve_tick(world: &mut WorldState, events: &mut Vec<GameEvent>) {
    world.anim_tick = world.anim_tick.wrapping_add(1);

    if world.message_timer > 0 {
        world.message_timer -= 1;
        if world.message_timer == 0 {
            world.message.clear();
        }
    }

    if !matches!(world.phase, Phase::Playing | Phase::LevelClear) {
        return;
    }

    resolve_fades(world);
    resolve_countdown(world, events);

    // The countdown may have ended the run; the pending load dies with it.
    if world.phase == Phase::LevelClear {
        resolve_level_clear(world, events);
    }
}

/// Drop clicked items once their fade runs out.
fn resolve_fades(world: &mut WorldState) {
    for item in &mut world.items {
        if item.collected && item.fade > 0 {
            item.fade -= 1;
        }
    }
    world.items.retain(|it| !it.collected || it.fade > 0);
}

/// 1 Hz countdown built out of sim ticks. Runs through LevelClear too, so
/// dawdling before delivery can still cost the run.
fn resolve_countdown(world: &mut WorldState, events: &mut Vec<GameEvent>) {
    world.subtick += 1;
    if world.subtick < world.ticks_per_second() {
        return;
    }
    world.subtick = 0;
    world.time_remaining = world.time_remaining.saturating_sub(1);
    events.push(GameEvent::SecondElapsed { remaining: world.time_remaining });

    if world.time_remaining == 0 {
        world.phase = Phase::GameOver;
        world.clear_ticks = 0;
        events.push(GameEvent::TimeExpired { final_score: world.score });
    }
}

/// Between levels: wait out the delay, then load.
fn resolve_level_clear(world: &mut WorldState, events: &mut Vec<GameEvent>) {
    if world.clear_ticks > 0 {
        world.clear_ticks -= 1;
    }
    if world.clear_ticks == 0 {
        load_and_report(world, world.current_level, events);
    }
}

// ══════════════════════════════════════════
// Tests
// ══════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::domain::item::Collectible;
    use glam::Vec2;

    fn playing_world() -> WorldState {
        let mut w = WorldState::new(&GameConfig::default(), 7);
        step(&mut w, Action::Start);
        w
    }

    fn id_of_kind(w: &WorldState, kind: ItemKind) -> u32 {
        w.items
            .iter()
            .find(|it| it.kind == kind && !it.collected)
            .map(|it| it.id)
            .unwrap()
    }

    fn tick_seconds(w: &mut WorldState, secs: u32) -> Vec<GameEvent> {
        let mut all = Vec::new();
        for _ in 0..secs * w.ticks_per_second() {
            all.extend(step(w, Action::Tick));
        }
        all
    }

    /// Click offerings until the requirement is met.
    fn collect_all_required(w: &mut WorldState) {
        loop {
            let next = w
                .items
                .iter()
                .find(|it| {
                    !it.collected
                        && !it.kind.is_trap()
                        && w.collected.get(it.kind) < w.required.get(it.kind)
                })
                .map(|it| it.id);
            match next {
                Some(id) => {
                    step(w, Action::ClickItem(id));
                }
                None => break,
            }
        }
    }

    #[test]
    fn start_loads_the_first_level() {
        let w = playing_world();
        assert_eq!(w.phase, Phase::Playing);
        assert_eq!(w.current_level, 0);
        assert_eq!(w.score, 0);
        assert_eq!(w.time_remaining, 60);
        assert_eq!(w.items.len(), 6);
    }

    #[test]
    fn start_is_ignored_mid_run() {
        let mut w = playing_world();
        let id = id_of_kind(&w, ItemKind::Uva);
        step(&mut w, Action::ClickItem(id));
        assert_eq!(w.score, 10);

        let events = step(&mut w, Action::Start);
        assert!(events.is_empty());
        assert_eq!(w.score, 10);
        assert_eq!(w.phase, Phase::Playing);
    }

    #[test]
    fn start_after_game_over_wipes_the_old_run() {
        let mut w = playing_world();
        let id = id_of_kind(&w, ItemKind::Uva);
        step(&mut w, Action::ClickItem(id));
        w.time_remaining = 1;
        tick_seconds(&mut w, 1);
        assert_eq!(w.phase, Phase::GameOver);

        step(&mut w, Action::Start);
        assert_eq!(w.phase, Phase::Playing);
        assert_eq!(w.score, 0);
        assert_eq!(w.current_level, 0);
        assert_eq!(w.time_remaining, 60);
        assert_eq!(w.items.len(), 6);
    }

    #[test]
    fn collecting_a_required_offering_scores_ten() {
        let mut w = playing_world();
        let id = id_of_kind(&w, ItemKind::Uva);

        let events = step(&mut w, Action::ClickItem(id));

        assert_eq!(w.score, 10);
        assert_eq!(w.collected.get(ItemKind::Uva), 1);
        assert_eq!(w.message, "Has recogido 1 de 3 🍇");
        assert!(matches!(
            events[0],
            GameEvent::ItemCollected { kind: ItemKind::Uva, have: 1, need: 3 }
        ));
        let item = w.items.iter().find(|it| it.id == id).unwrap();
        assert!(item.collected);
    }

    #[test]
    fn clicking_the_same_item_twice_counts_once() {
        let mut w = playing_world();
        let id = id_of_kind(&w, ItemKind::Uva);
        step(&mut w, Action::ClickItem(id));

        let events = step(&mut w, Action::ClickItem(id));
        assert!(events.is_empty());
        assert_eq!(w.score, 10);
        assert_eq!(w.collected.get(ItemKind::Uva), 1);
    }

    #[test]
    fn unknown_item_ids_are_ignored() {
        let mut w = playing_world();
        let events = step(&mut w, Action::ClickItem(9999));
        assert!(events.is_empty());
        assert_eq!(w.score, 0);
    }

    #[test]
    fn offering_past_its_cap_is_rejected() {
        let mut w = playing_world();
        // An extra uva beyond the three the level asks for.
        let extra = w.alloc_id();
        w.items.push(Collectible::new(
            extra,
            ItemKind::Uva,
            "🍇",
            Vec2::new(2.0, 2.0),
        ));
        for _ in 0..3 {
            let id = id_of_kind(&w, ItemKind::Uva);
            step(&mut w, Action::ClickItem(id));
        }
        assert_eq!(w.collected.get(ItemKind::Uva), 3);
        let leftover = id_of_kind(&w, ItemKind::Uva);

        let events = step(&mut w, Action::ClickItem(leftover));

        assert!(matches!(events[0], GameEvent::ClickRejected));
        assert_eq!(w.score, 30);
        assert_eq!(w.collected.get(ItemKind::Uva), 3);
        assert_eq!(w.message, "Ya tienes suficientes de estos o no los necesitas.");
        // The rejected item stays live on the board.
        let item = w.items.iter().find(|it| it.id == leftover).unwrap();
        assert!(!item.collected);
    }

    #[test]
    fn unrequested_kind_is_rejected() {
        let mut w = playing_world();
        // Level 0 never asks for monedas.
        let id = w.alloc_id();
        w.items.push(Collectible::new(
            id,
            ItemKind::Moneda,
            "🪙",
            Vec2::new(2.0, 2.0),
        ));

        let events = step(&mut w, Action::ClickItem(id));

        assert!(matches!(events[0], GameEvent::ClickRejected));
        assert_eq!(w.score, 0);
        assert_eq!(w.collected.total(), 0);
    }

    #[test]
    fn trap_click_costs_five_points() {
        let mut w = playing_world();
        let uva = id_of_kind(&w, ItemKind::Uva);
        step(&mut w, Action::ClickItem(uva));
        let trap = id_of_kind(&w, ItemKind::Trampa);

        let events = step(&mut w, Action::ClickItem(trap));

        assert_eq!(w.score, 5);
        assert_eq!(w.message, "¡Cuidado! ¡Eso no es una ofrenda!");
        assert!(matches!(events[0], GameEvent::TrapSprung { penalty: 5 }));
        // The sprung trap fades out like a collected item.
        let item = w.items.iter().find(|it| it.id == trap).unwrap();
        assert!(item.collected);
    }

    #[test]
    fn trap_penalty_never_drops_the_score_below_zero() {
        let mut w = playing_world();
        let trap = id_of_kind(&w, ItemKind::Trampa);
        step(&mut w, Action::ClickItem(trap));
        assert_eq!(w.score, 0);
    }

    #[test]
    fn altar_with_an_incomplete_set_is_refused() {
        let mut w = playing_world();
        let events = step(&mut w, Action::ClickAltar);

        assert!(matches!(events[0], GameEvent::OfferingsMissing));
        assert_eq!(w.phase, Phase::Playing);
        assert_eq!(w.score, 0);
        assert_eq!(w.current_level, 0);
        assert_eq!(w.message, "¡Te faltan ofrendas! Revisa lo que necesitas.");
    }

    #[test]
    fn delivery_scores_the_bonus_and_schedules_the_next_level() {
        let mut w = playing_world();
        collect_all_required(&mut w);
        assert_eq!(w.score, 40); // 3 uvas + 1 vasija

        let events = step(&mut w, Action::ClickAltar);

        assert!(matches!(events[0], GameEvent::OfferingsDelivered { bonus: 50 }));
        assert_eq!(w.score, 90);
        assert_eq!(w.phase, Phase::LevelClear);
        assert_eq!(w.current_level, 1);
        // Leftovers (the traps) are swept off the board.
        assert!(w.items.iter().all(|it| it.collected));

        // Wait out the transition.
        let mut loaded = Vec::new();
        for _ in 0..=w.timing.clear_delay_ticks {
            loaded.extend(step(&mut w, Action::Tick));
        }
        assert_eq!(w.phase, Phase::Playing);
        assert_eq!(w.current_level, 1);
        assert_eq!(w.time_remaining, 50);
        assert!(loaded
            .iter()
            .any(|e| matches!(e, GameEvent::LevelLoaded { level: 1 })));
    }

    #[test]
    fn altar_clicks_during_the_transition_are_ignored() {
        let mut w = playing_world();
        collect_all_required(&mut w);
        step(&mut w, Action::ClickAltar);
        assert_eq!(w.phase, Phase::LevelClear);
        let score = w.score;

        let events = step(&mut w, Action::ClickAltar);
        assert!(events.is_empty());
        assert_eq!(w.score, score);
        assert_eq!(w.current_level, 1);
    }

    #[test]
    fn item_clicks_during_the_transition_are_ignored() {
        let mut w = playing_world();
        let trap = id_of_kind(&w, ItemKind::Trampa);
        collect_all_required(&mut w);
        step(&mut w, Action::ClickAltar);
        let score = w.score;

        let events = step(&mut w, Action::ClickItem(trap));
        assert!(events.is_empty());
        assert_eq!(w.score, score);
    }

    #[test]
    fn countdown_reaches_zero_and_ends_the_run() {
        let mut w = playing_world();
        w.time_remaining = 3;
        w.score = 25;

        let events = tick_seconds(&mut w, 3);

        assert_eq!(w.phase, Phase::GameOver);
        assert_eq!(w.time_remaining, 0);
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::TimeExpired { final_score: 25 })));

        // Frozen afterwards: no more countdown, score untouched.
        let after = tick_seconds(&mut w, 2);
        assert!(after.is_empty());
        assert_eq!(w.time_remaining, 0);
        assert_eq!(w.score, 25);
    }

    #[test]
    fn seconds_report_the_remaining_time() {
        let mut w = playing_world();
        let events = tick_seconds(&mut w, 1);
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::SecondElapsed { remaining: 59 })));
        assert_eq!(w.time_remaining, 59);
    }

    #[test]
    fn expiry_during_the_transition_cancels_the_pending_load() {
        let mut w = playing_world();
        collect_all_required(&mut w);
        step(&mut w, Action::ClickAltar);
        assert_eq!(w.phase, Phase::LevelClear);

        // One second left; the clear delay is longer than that.
        w.time_remaining = 1;
        w.timing.clear_delay_ticks = w.ticks_per_second() * 3;
        w.clear_ticks = w.timing.clear_delay_ticks;

        let events = tick_seconds(&mut w, 4);

        assert_eq!(w.phase, Phase::GameOver);
        assert!(events
            .iter()
            .all(|e| !matches!(e, GameEvent::LevelLoaded { .. })));
    }

    #[test]
    fn countdown_keeps_running_through_the_transition() {
        let mut w = playing_world();
        collect_all_required(&mut w);
        step(&mut w, Action::ClickAltar);
        w.timing.clear_delay_ticks = w.ticks_per_second() * 2;
        w.clear_ticks = w.timing.clear_delay_ticks;
        let before = w.time_remaining;

        tick_seconds(&mut w, 1);
        assert_eq!(w.phase, Phase::LevelClear);
        assert_eq!(w.time_remaining, before - 1);
    }

    #[test]
    fn fading_items_leave_the_registry_after_the_delay() {
        let mut w = playing_world();
        let id = id_of_kind(&w, ItemKind::Uva);
        step(&mut w, Action::ClickItem(id));
        assert_eq!(w.items.len(), 6);

        for _ in 0..w.timing.fade_ticks {
            step(&mut w, Action::Tick);
        }
        assert_eq!(w.items.len(), 5);
        assert!(w.items.iter().all(|it| it.id != id));
    }

    #[test]
    fn sticky_messages_survive_ticks_and_timed_ones_expire() {
        let mut w = playing_world();
        assert_eq!(w.message, "Necesitas: 3 🍇, 1 🏺");
        tick_seconds(&mut w, 2);
        assert_eq!(w.message, "Necesitas: 3 🍇, 1 🏺");

        w.set_message("un momento", 3);
        step(&mut w, Action::Tick);
        step(&mut w, Action::Tick);
        assert_eq!(w.message, "un momento");
        step(&mut w, Action::Tick);
        assert!(w.message.is_empty());
    }

    #[test]
    fn delivering_the_final_level_wins_the_run() {
        let mut w = playing_world();
        level::load_level(&mut w, 2);
        collect_all_required(&mut w);
        assert_eq!(w.score, 60); // 6 offerings at 10 each

        step(&mut w, Action::ClickAltar);
        assert_eq!(w.score, 110);
        assert_eq!(w.phase, Phase::LevelClear);

        let mut events = Vec::new();
        for _ in 0..=w.timing.clear_delay_ticks {
            events.extend(step(&mut w, Action::Tick));
        }

        assert_eq!(w.phase, Phase::GameComplete);
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::GameWon { final_score: 110 })));
        // Nothing spawned on the way out.
        assert!(w.items.is_empty());
    }
}
