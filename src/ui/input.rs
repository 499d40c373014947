//! Input collector.
//!
//! Drains all pending terminal events once per frame. Keys are edge
//! triggered and only drive menus, pause and quit; gameplay itself runs
//! on mouse clicks, reported as raw terminal coordinates for the board
//! layout to translate.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

pub struct InputState {
    /// Keys freshly pressed during the most recent `drain_events`.
    fresh_presses: Vec<KeyCode>,
    /// Raw key events from the same drain, for modifier checks.
    raw_events: Vec<KeyEvent>,
    /// Left-button presses this frame, in terminal (column, row) coords.
    pub clicks: Vec<(u16, u16)>,
}

impl InputState {
    pub fn new() -> Self {
        InputState {
            fresh_presses: Vec::with_capacity(8),
            raw_events: Vec::with_capacity(8),
            clicks: Vec::with_capacity(4),
        }
    }

    /// Drain all pending terminal events. Call once per frame.
    pub fn drain_events(&mut self) {
        self.fresh_presses.clear();
        self.raw_events.clear();
        self.clicks.clear();

        while event::poll(Duration::ZERO).unwrap_or(false) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    self.raw_events.push(key);
                    // Repeats would auto-fire menu actions; presses only.
                    if key.kind == KeyEventKind::Press {
                        self.fresh_presses.push(key.code);
                    }
                }
                Ok(Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                })) => {
                    self.clicks.push((column, row));
                }
                _ => {}
            }
        }
    }

    /// Was this key pressed this frame?
    pub fn was_pressed(&self, code: KeyCode) -> bool {
        self.fresh_presses.contains(&code)
    }

    /// Was any of these keys pressed this frame?
    pub fn any_pressed(&self, codes: &[KeyCode]) -> bool {
        codes.iter().any(|c| self.was_pressed(*c))
    }

    /// Ctrl+C always quits, raw mode or not.
    pub fn ctrl_c_pressed(&self) -> bool {
        self.raw_events.iter().any(|k| {
            k.modifiers.contains(KeyModifiers::CONTROL)
                && (k.code == KeyCode::Char('c') || k.code == KeyCode::Char('C'))
        })
    }
}
