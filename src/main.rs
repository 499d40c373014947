/// Entry point and game loop.

mod config;
mod domain;
mod sim;
mod ui;

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use config::GameConfig;
use domain::item::ItemCounts;
use sim::event::{Action, GameEvent};
use sim::level;
use sim::step;
use sim::world::{Phase, WorldState};
use ui::input::InputState;
use ui::renderer::{click_to_cell, Renderer};
use ui::sound::SoundEngine;

const FRAME_SLEEP: Duration = Duration::from_millis(5);

fn main() {
    let config = GameConfig::load();

    // Seed 0 in the config means "a different board every run".
    let seed = if config.seed == 0 { rand::random() } else { config.seed };

    let mut world = WorldState::new(&config, seed);
    world.total_levels = level::level_count();

    // Probe the audio device before the terminal enters raw mode so the
    // warning stays readable in the scrollback.
    let sound = SoundEngine::new();
    if sound.is_none() {
        eprintln!("Audio unavailable, continuing without sound.");
    }

    let mut renderer = Renderer::new();

    if let Err(e) = renderer.init() {
        eprintln!("Terminal init failed: {e}");
        return;
    }

    let result = game_loop(&mut world, &mut renderer, sound.as_ref(), &config);

    if let Err(e) = renderer.cleanup() {
        eprintln!("Terminal cleanup failed: {e}");
    }

    if let Err(e) = result {
        eprintln!("Game error: {e}");
    }

    println!();
    println!("¡Gracias por jugar a Ofrenda!");
    println!("Puntuación final: {}", world.score);
}

fn game_loop(
    world: &mut WorldState,
    renderer: &mut Renderer,
    sound: Option<&SoundEngine>,
    config: &GameConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut kb = InputState::new();
    let mut last_tick = Instant::now();
    let tick_rate = Duration::from_millis(config.timing.tick_rate_ms);

    loop {
        kb.drain_events();

        if kb.ctrl_c_pressed() {
            break;
        }
        if handle_meta(world, sound, &kb) {
            break;
        }

        if !world.paused {
            for &(col, row) in &kb.clicks {
                if let Some(action) = click_action(world, col, row) {
                    let events = step::step(world, action);
                    process_sound_events(sound, &events);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            // Pause freezes the simulation but keeps the blink cursor alive.
            if world.paused {
                world.anim_tick = world.anim_tick.wrapping_add(1);
            } else {
                let events = step::step(world, Action::Tick);
                process_sound_events(sound, &events);
            }
            last_tick = Instant::now();
        }

        renderer.render(world)?;
        std::thread::sleep(FRAME_SLEEP);
    }

    Ok(())
}

/// Resolve a terminal click into a simulation action for the current phase.
fn click_action(world: &WorldState, col: u16, row: u16) -> Option<Action> {
    match world.phase {
        // The static screens treat any click as the confirm button.
        Phase::Title | Phase::GameOver | Phase::GameComplete => Some(Action::Start),
        Phase::Playing => {
            let (cx, cy) = click_to_cell(world, col, row)?;
            if let Some(id) = world.item_at_cell(cx, cy) {
                Some(Action::ClickItem(id))
            } else if world.altar.contains_cell(cx, cy) {
                Some(Action::ClickAltar)
            } else {
                None
            }
        }
        Phase::LevelClear => None,
    }
}

fn process_sound_events(sound: Option<&SoundEngine>, events: &[GameEvent]) {
    let sfx = match sound {
        Some(s) => s,
        None => return,
    };
    for event in events {
        match event {
            GameEvent::ItemCollected { .. } => sfx.play_collect(),
            GameEvent::TrapSprung { .. } => sfx.play_trap(),
            GameEvent::ClickRejected | GameEvent::OfferingsMissing => sfx.play_reject(),
            GameEvent::OfferingsDelivered { .. } => sfx.play_deliver(),
            GameEvent::SecondElapsed { remaining } if *remaining > 0 && *remaining <= 5 => {
                sfx.play_time_tick(*remaining)
            }
            GameEvent::TimeExpired { .. } => sfx.play_lose(),
            GameEvent::GameWon { .. } => sfx.play_win(),
            _ => {}
        }
    }
}

// ── Key Constants ──

const KEYS_CONFIRM: &[KeyCode] = &[KeyCode::Enter, KeyCode::Char(' ')];
const KEYS_QUIT: &[KeyCode] = &[KeyCode::Char('q'), KeyCode::Char('Q')];

/// Back to the title screen. The score stays for the farewell banner,
/// the board is emptied.
fn return_to_title(world: &mut WorldState) {
    world.items.clear();
    world.collected = ItemCounts::default();
    world.message.clear();
    world.message_timer = 0;
    world.clear_ticks = 0;
    world.subtick = 0;
    world.paused = false;
    world.phase = Phase::Title;
}

fn start_game(world: &mut WorldState, sound: Option<&SoundEngine>) {
    let events = step::step(world, Action::Start);
    process_sound_events(sound, &events);
}

/// Keyboard shortcuts that live outside the simulation. Returns true
/// when the player asked to quit.
fn handle_meta(world: &mut WorldState, sound: Option<&SoundEngine>, kb: &InputState) -> bool {
    let confirm = kb.any_pressed(KEYS_CONFIRM);
    let esc = kb.was_pressed(KeyCode::Esc);

    // F1 pauses mid-game; while paused only F1 and ESC respond.
    if matches!(world.phase, Phase::Playing | Phase::LevelClear) {
        if kb.any_pressed(&[KeyCode::F(1)]) {
            world.paused = !world.paused;
            return false;
        }
        if world.paused {
            if esc {
                return_to_title(world);
            }
            return false;
        }
    }

    match world.phase {
        Phase::Title => {
            if confirm {
                start_game(world, sound);
            } else if kb.any_pressed(KEYS_QUIT) || esc {
                return true;
            }
        }

        Phase::Playing | Phase::LevelClear => {
            if esc {
                return_to_title(world);
            }
        }

        Phase::GameOver | Phase::GameComplete => {
            if confirm {
                start_game(world, sound);
            } else if esc {
                return_to_title(world);
            } else if kb.any_pressed(KEYS_QUIT) {
                return true;
            }
        }
    }

    false
}
