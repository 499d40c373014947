//! WorldState: the complete snapshot of a running game.
//!
//! The sim core never touches the terminal. The UI reads this state to
//! draw each frame and feeds `Action`s back through `sim::step`; all
//! gameplay mutation happens there or in `sim::level::load_level`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::{GameConfig, TimingConfig};
use crate::domain::board::{Board, Zone};
use crate::domain::item::{Collectible, ItemCounts};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Title,
    Playing,
    /// Offerings delivered; short pause while the next level loads.
    /// The countdown keeps running.
    LevelClear,
    /// The countdown hit zero. Score is frozen.
    GameOver,
    /// Catalog exhausted. Score is frozen.
    GameComplete,
}

pub struct WorldState {
    // ── Board geometry (fixed for the whole run) ──
    pub board: Board,
    pub altar: Zone,
    pub padding: f32,
    pub exclusion_radius: f32,

    // ── Item registry ──
    pub items: Vec<Collectible>,
    next_id: u32,

    // ── Collection requirements ──
    pub required: ItemCounts,
    pub collected: ItemCounts,

    // ── Timing ──
    pub timing: TimingConfig,
    /// Seconds left on the level countdown.
    pub time_remaining: u32,
    /// Ticks into the current countdown second.
    pub subtick: u32,
    /// LevelClear only: ticks until the next level loads.
    pub clear_ticks: u32,

    // ── Run state ──
    pub phase: Phase,
    pub score: u32,
    pub current_level: usize,
    pub total_levels: usize,

    // ── UI ──
    pub message: String,
    pub message_timer: u32,
    pub anim_tick: u32,
    pub paused: bool,

    // ── Placement RNG ──
    pub rng: Pcg32,
}

impl WorldState {
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let board = Board::new(config.board.width as f32, config.board.height as f32);
        let altar = Zone::altar(board, config.board.altar_width, config.board.altar_height);
        WorldState {
            board,
            altar,
            padding: config.board.padding,
            exclusion_radius: config.board.exclusion_radius,
            items: Vec::new(),
            next_id: 0,
            required: ItemCounts::default(),
            collected: ItemCounts::default(),
            timing: config.timing.clone(),
            time_remaining: 0,
            subtick: 0,
            clear_ticks: 0,
            phase: Phase::Title,
            score: 0,
            current_level: 0,
            total_levels: 0,
            message: String::new(),
            message_timer: 0,
            anim_tick: 0,
            paused: false,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Set the banner message. Duration in ticks, 0 = sticky.
    pub fn set_message(&mut self, msg: &str, duration: u32) {
        self.message = msg.to_string();
        self.message_timer = duration;
    }

    /// Fresh id for a spawned collectible.
    pub fn alloc_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    /// Topmost live item drawn in the cell (cx, cy). Later spawns draw on
    /// top, so scan the registry back to front. Fading items do not hit.
    pub fn item_at_cell(&self, cx: i32, cy: i32) -> Option<u32> {
        self.items
            .iter()
            .rev()
            .find(|it| !it.collected && it.cell() == (cx, cy))
            .map(|it| it.id)
    }

    /// Every required offering collected?
    #[inline]
    pub fn offerings_complete(&self) -> bool {
        self.collected.fulfills(&self.required)
    }

    /// How many sim ticks make up one countdown second.
    #[inline]
    pub fn ticks_per_second(&self) -> u32 {
        (1000 / self.timing.tick_rate_ms.max(1)).max(1) as u32
    }
}
