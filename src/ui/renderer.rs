//! Presentation layer: double-buffered, diff-based terminal renderer.
//!
//! How it works:
//!   1. Build the next frame into the `front` buffer (array of Cell)
//!   2. Compare each cell with the `back` buffer (previous frame)
//!   3. Only emit terminal commands for cells that changed
//!   4. All commands are batched with `queue!`, flushed once at the end
//!   5. Swap front/back
//!
//! This eliminates flicker caused by full-screen redraws. The renderer
//! also owns the board layout, so it is the one translating terminal
//! clicks back into game cells (`click_to_cell`).

use std::io::{self, BufWriter, Write};

use crossterm::{
    cursor::{self, MoveTo},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

use crate::sim::world::{Phase, WorldState};

// ── Cell: the unit of the back-buffer ──

#[derive(Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: [u8; 16], // up to 16 bytes (supports multi-codepoint emoji)
    ch_len: u8,
    fg: Color,
    bg: Color,
    wide: bool, // true = this char occupies 2 terminal columns
    cont: bool, // true = continuation of previous wide char (skip render)
}

impl Cell {
    /// Explicit dark background for all "empty" terminal cells.
    ///
    /// On VTE-based Linux terminals (GNOME Terminal, etc.), the inter-row gap
    /// pixels use the background color from the last Clear or the terminal's
    /// configured default. By using the SAME explicit RGB for both
    /// `Clear(ClearType::All)` and every cell's background, the gap color
    /// matches the cell color exactly, eliminating visible horizontal lines.
    ///
    /// If your terminal's own background differs from this value, set it to
    /// RGB(26,22,30) in your terminal preferences for a seamless look.
    const BASE_BG: Color = Color::Rgb { r: 26, g: 22, b: 30 };

    const BLANK: Cell = Cell {
        ch: [b' ', 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        ch_len: 1,
        fg: Color::White,
        bg: Cell::BASE_BG,
        wide: false,
        cont: false,
    };

    const WIDE_CONT: Cell = Cell {
        ch: [0; 16],
        ch_len: 0,
        fg: Color::White,
        bg: Cell::BASE_BG,
        wide: false,
        cont: true,
    };

    /// Sentinel cell used to invalidate the back buffer.
    /// Different from any real cell, so every position will be diff'd.
    const INVALID: Cell = Cell {
        ch: [b'?', 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        ch_len: 1,
        fg: Color::Magenta,
        bg: Color::Magenta,
        wide: false,
        cont: false,
    };

    /// Normalize bg: Color::Reset becomes BASE_BG so that every cell gets
    /// an explicit background color (never terminal-default).
    #[inline]
    fn norm_bg(bg: Color) -> Color {
        match bg {
            Color::Reset => Self::BASE_BG,
            other => other,
        }
    }

    fn from_char(c: char, fg: Color, bg: Color) -> Self {
        let mut cell = Self::BLANK;
        let len = c.encode_utf8(&mut cell.ch).len() as u8;
        cell.ch_len = len;
        cell.fg = fg;
        cell.bg = Self::norm_bg(bg);
        cell
    }

    fn from_char_wide(c: char, fg: Color, bg: Color) -> Self {
        let mut cell = Self::from_char(c, fg, bg);
        cell.wide = true;
        cell
    }

    /// Wide cell from a multi-codepoint string (emoji plus variation
    /// selector, e.g. the spider trap).
    fn from_str_wide(s: &str, fg: Color, bg: Color) -> Self {
        let mut cell = Self::BLANK;
        let bytes = s.as_bytes();
        let len = bytes.len().min(16);
        cell.ch[..len].copy_from_slice(&bytes[..len]);
        cell.ch_len = len as u8;
        cell.fg = fg;
        cell.bg = Self::norm_bg(bg);
        cell.wide = true;
        cell
    }

    fn as_str(&self) -> &str {
        if self.ch_len == 0 {
            return "";
        }
        unsafe { std::str::from_utf8_unchecked(&self.ch[..self.ch_len as usize]) }
    }
}

/// Supplementary-plane pictographs render two columns wide. This covers
/// every glyph our strings carry; box drawing and `◈` stay narrow.
#[inline]
fn is_wide(c: char) -> bool {
    (c as u32) >= 0x1F300
}

// ── FrameBuffer: a 2D grid of Cells ──

struct FrameBuffer {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    fn new(w: usize, h: usize) -> Self {
        FrameBuffer {
            width: w,
            height: h,
            cells: vec![Cell::BLANK; w * h],
        }
    }

    fn resize(&mut self, w: usize, h: usize) {
        if self.width != w || self.height != h {
            self.width = w;
            self.height = h;
            self.cells = vec![Cell::BLANK; w * h];
        }
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = cell;
        }
    }

    fn get(&self, x: usize, y: usize) -> Cell {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            Cell::BLANK
        }
    }

    /// Write a string at (x, y). Each char occupies 1 column; only safe
    /// for text without emoji.
    fn put_str(&mut self, x: usize, y: usize, s: &str, fg: Color, bg: Color) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.set(cx, y, Cell::from_char(ch, fg, bg));
            cx += 1;
        }
    }

    /// Write text that may mix ASCII and emoji. Emoji take two columns
    /// and may carry a trailing variation selector.
    fn put_text(&mut self, x: usize, y: usize, s: &str, fg: Color, bg: Color) {
        let mut cx = x;
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            if cx >= self.width {
                break;
            }
            if is_wide(c) {
                let mut glyph = [0u8; 8];
                let mut len = c.encode_utf8(&mut glyph).len();
                if chars.peek() == Some(&'\u{FE0F}') {
                    let vs = chars.next().unwrap_or('\u{FE0F}');
                    len += vs.encode_utf8(&mut glyph[len..]).len();
                }
                let text = unsafe { std::str::from_utf8_unchecked(&glyph[..len]) };
                self.set(cx, y, Cell::from_str_wide(text, fg, bg));
                self.set(cx + 1, y, Cell::WIDE_CONT);
                cx += 2;
            } else {
                self.set(cx, y, Cell::from_char(c, fg, bg));
                cx += 1;
            }
        }
    }
}

// ── Layout ──

/// Each game cell = 2 terminal columns, so emoji keep their aspect.
const CELL_W: usize = 2;

/// Vertical offsets
const HUD_ROW: usize = 0;
const BOARD_ROW: usize = 2;

// ── Theme ──

const BOARD_BG: Color = Color::Rgb { r: 34, g: 29, b: 22 };
const ALTAR_BG: Color = Color::Rgb { r: 74, g: 52, b: 16 };
const ALTAR_FG: Color = Color::Rgb { r: 255, g: 214, b: 100 };
const HUD_BG: Color = Color::Rgb { r: 45, g: 30, b: 18 };
const BANNER_BG: Color = Color::Rgb { r: 200, g: 180, b: 50 };

/// Translate a terminal click to a game cell, if it lands on the board.
pub fn click_to_cell(world: &WorldState, col: u16, row: u16) -> Option<(i32, i32)> {
    let row = row as usize;
    if row < BOARD_ROW {
        return None;
    }
    let cx = col as usize / CELL_W;
    let cy = row - BOARD_ROW;
    if cx >= world.board.cols() || cy >= world.board.rows() {
        return None;
    }
    Some((cx as i32, cy as i32))
}

// ── Renderer ──

pub struct Renderer {
    writer: BufWriter<io::Stdout>,
    front: FrameBuffer,
    back: FrameBuffer,
    term_w: usize,
    term_h: usize,
    last_phase: Option<Phase>,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            writer: BufWriter::with_capacity(16384, io::stdout()),
            front: FrameBuffer::new(0, 0),
            back: FrameBuffer::new(0, 0),
            term_w: 0,
            term_h: 0,
            last_phase: None,
        }
    }

    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.writer,
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide,
            SetBackgroundColor(Cell::BASE_BG),
            Clear(ClearType::All)
        )?;

        let (tw, th) = terminal::size().unwrap_or((80, 24));
        self.term_w = tw as usize;
        self.term_h = th as usize;
        self.front.resize(self.term_w, self.term_h);
        self.back.resize(self.term_w, self.term_h);
        // Force full repaint on first frame: back differs for every cell.
        self.back.cells.fill(Cell::INVALID);

        Ok(())
    }

    pub fn cleanup(&mut self) -> io::Result<()> {
        execute!(
            self.writer,
            ResetColor,
            cursor::Show,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }

    pub fn render(&mut self, world: &WorldState) -> io::Result<()> {
        // Detect terminal resize
        let (tw, th) = terminal::size().unwrap_or((80, 24));
        if tw as usize != self.term_w || th as usize != self.term_h {
            self.term_w = tw as usize;
            self.term_h = th as usize;
            self.front.resize(self.term_w, self.term_h);
            self.back.resize(self.term_w, self.term_h);
            // Force full repaint after resize.
            self.back.cells.fill(Cell::INVALID);
            queue!(self.writer, SetBackgroundColor(Cell::BASE_BG), Clear(ClearType::All))?;
        }

        // Phase change: clear for a clean transition.
        if self.last_phase != Some(world.phase) {
            self.back.cells.fill(Cell::INVALID);
            queue!(self.writer, SetBackgroundColor(Cell::BASE_BG), Clear(ClearType::All))?;
            self.last_phase = Some(world.phase);
        }

        self.front.clear();

        match world.phase {
            Phase::Title => self.compose_title(world),
            Phase::Playing | Phase::LevelClear => self.compose_game(world),
            Phase::GameOver => self.compose_game_over(world),
            Phase::GameComplete => self.compose_game_complete(world),
        }

        // Pause overlay (drawn on top of the game)
        if world.paused {
            self.compose_pause_overlay(world);
        }

        self.flush_diff()?;

        // Swap: current front becomes next back
        std::mem::swap(&mut self.front, &mut self.back);

        Ok(())
    }

    // ── Diff flush: only write changed cells ──

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_fg = Color::White;
        let mut last_bg = Cell::BASE_BG;
        let mut need_move = true;
        let mut last_x: usize = 0;
        let mut last_y: usize = 0;

        // Set explicit base colors at start of frame. Not ResetColor: that
        // falls back to the terminal's native default, which may differ
        // from BASE_BG and cause line artifacts.
        queue!(
            self.writer,
            SetForegroundColor(Color::White),
            SetBackgroundColor(Cell::BASE_BG),
        )?;

        for y in 0..self.front.height {
            let mut x = 0;
            while x < self.front.width {
                let cell = self.front.get(x, y);
                let prev = self.back.get(x, y);

                // Skip continuation cells (right half of wide emoji)
                if cell.cont {
                    if cell != prev {
                        need_move = true;
                    }
                    x += 1;
                    continue;
                }

                // For wide cells, also check if the continuation changed
                let cont_changed = cell.wide
                    && x + 1 < self.front.width
                    && self.front.get(x + 1, y) != self.back.get(x + 1, y);

                if cell == prev && !cont_changed {
                    need_move = true;
                    x += 1;
                    continue;
                }

                // Position cursor if needed
                if need_move || x != last_x + 1 || y != last_y {
                    queue!(self.writer, MoveTo(x as u16, y as u16))?;
                    need_move = false;
                }

                // Set colors only if changed
                if cell.fg != last_fg {
                    queue!(self.writer, SetForegroundColor(cell.fg))?;
                    last_fg = cell.fg;
                }
                if cell.bg != last_bg {
                    queue!(self.writer, SetBackgroundColor(cell.bg))?;
                    last_bg = cell.bg;
                }

                queue!(self.writer, Print(cell.as_str()))?;

                if cell.wide {
                    // Wide char printed: cursor advanced 2 columns
                    last_x = x + 1;
                    x += 2; // skip the continuation cell
                } else {
                    last_x = x;
                    x += 1;
                }
                last_y = y;
            }
        }

        self.writer.flush()
    }

    // ── Compose: the game board ──

    fn compose_game(&mut self, w: &WorldState) {
        let buf_w = self.front.width;
        let cols = w.board.cols();
        let rows = w.board.rows();

        // ── HUD row ──
        for x in 0..buf_w {
            self.front.set(x, HUD_ROW, Cell::from_char(' ', Color::White, HUD_BG));
        }
        let shown_level = (w.current_level + 1).min(w.total_levels.max(1));
        let hud = format!(
            " Nivel {}/{}   Puntos: {:<6} Ofrendas {:>2}/{}",
            shown_level,
            w.total_levels,
            w.score,
            w.collected.total(),
            w.required.total(),
        );
        self.front.put_str(0, HUD_ROW, &hud, Color::White, HUD_BG);

        // Countdown on the right, hourglass first. Red when short, blinking
        // red for the last five seconds.
        let time_str = format!(" {:>3}s ", w.time_remaining);
        let timer_fg = if w.time_remaining <= 5 {
            if (w.anim_tick / 2) % 2 == 0 {
                Color::Rgb { r: 255, g: 60, b: 60 }
            } else {
                Color::Rgb { r: 160, g: 40, b: 40 }
            }
        } else if w.time_remaining <= 10 {
            Color::Rgb { r: 255, g: 60, b: 60 }
        } else {
            Color::White
        };
        let tx = buf_w.saturating_sub(time_str.len() + 2);
        self.front.set(tx, HUD_ROW, Cell::from_char_wide('⏳', Color::Reset, HUD_BG));
        self.front.set(tx + 1, HUD_ROW, Cell::WIDE_CONT);
        self.front.put_str(tx + 2, HUD_ROW, &time_str, timer_fg, HUD_BG);

        // ── Board ──
        for cy in 0..rows {
            let row = BOARD_ROW + cy;
            if row >= self.front.height {
                break;
            }
            for cx in 0..cols {
                let col = cx * CELL_W;
                if col + 1 >= buf_w {
                    break;
                }
                self.compose_board_cell(w, cx, cy, col, row);
            }
        }

        self.compose_altar_dressing(w);

        // ── Transition note ──
        if w.phase == Phase::LevelClear && (w.anim_tick / 4) % 2 == 0 {
            let note = " Preparando el siguiente nivel... ";
            let board_cols = cols * CELL_W;
            let nx = board_cols.saturating_sub(note.len()) / 2;
            let ny = BOARD_ROW + rows / 2;
            self.front.put_str(nx, ny, note, Color::Black, BANNER_BG);
        }

        // ── Message bar ──
        let msg_row = BOARD_ROW + rows + 1;
        if msg_row < self.front.height && !w.message.is_empty() {
            for x in 0..buf_w {
                self.front.set(x, msg_row, Cell::from_char(' ', Color::Black, BANNER_BG));
            }
            let msg = format!(" ◈ {} ", w.message);
            self.front.put_text(0, msg_row, &msg, Color::Black, BANNER_BG);
        }

        // ── Help bar ──
        let help_row = BOARD_ROW + rows + 3;
        if help_row < self.front.height {
            let help = " clic izq: recoger  │  clic en el altar: entregar  │  F1 pausa  ESC título";
            self.front.put_str(0, help_row, help, Color::DarkGrey, Color::Reset);
        }
    }

    /// Visual for game cell (cx, cy) at terminal (col, row). Items draw
    /// over the altar zone; fading items blink before they disappear.
    fn compose_board_cell(&mut self, w: &WorldState, cx: usize, cy: usize, col: usize, row: usize) {
        let altar_cell = w.altar.contains_cell(cx as i32, cy as i32);
        let bg = if altar_cell { ALTAR_BG } else { BOARD_BG };

        if let Some(item) = w
            .items
            .iter()
            .rev()
            .find(|it| it.cell() == (cx as i32, cy as i32))
        {
            if !item.collected || (w.anim_tick / 2) % 2 == 0 {
                self.front.set(col, row, Cell::from_str_wide(item.glyph, Color::Reset, bg));
                self.front.set(col + 1, row, Cell::WIDE_CONT);
                return;
            }
        }

        self.front.set(col, row, Cell::from_char(' ', Color::Reset, bg));
        self.front.set(col + 1, row, Cell::from_char(' ', Color::Reset, bg));
    }

    /// Temple glyph on the altar's top row, label on its bottom row.
    fn compose_altar_dressing(&mut self, w: &WorldState) {
        let ax = w.altar.min.x as usize;
        let ay = w.altar.min.y as usize;
        let aw = w.altar.size.x as usize;
        let ah = w.altar.size.y as usize;

        let glyph_col = (ax + aw / 2) * CELL_W;
        let glyph_row = BOARD_ROW + ay;
        if glyph_row < self.front.height {
            self.front.set(glyph_col, glyph_row, Cell::from_str_wide("🏛️", Color::Reset, ALTAR_BG));
            self.front.set(glyph_col + 1, glyph_row, Cell::WIDE_CONT);
        }

        if ah > 1 {
            let label = "ALTAR";
            let label_row = BOARD_ROW + ay + ah - 1;
            let lx = ax * CELL_W + (aw * CELL_W).saturating_sub(label.len()) / 2;
            if label_row < self.front.height {
                self.front.put_str(lx, label_row, label, ALTAR_FG, ALTAR_BG);
            }
        }
    }

    // ── Static screens (title, game over, victory) ──

    fn compose_title(&mut self, w: &WorldState) {
        let title = [
            r"  ___   ___  ___  ___  _  _  ___    _   ",
            r" / _ \ | __|| _ \| __|| \| ||   \  /_\  ",
            r"| (_) || _| |   /| _| | .` || |) |/ _ \ ",
            r" \___/ |_|  |_|_\|___||_|\_||___//_/ \_\",
        ];

        for (i, line) in title.iter().enumerate() {
            self.front.put_str(2, 2 + i, line, Color::Rgb { r: 255, g: 200, b: 50 }, Color::Reset);
        }

        let subtitle = "◈◈  Las Ofrendas del Templo  ◈◈";
        let sx = 2 + (title[1].len().saturating_sub(subtitle.chars().count())) / 2;
        self.front.put_str(sx, 7, subtitle, Color::Rgb { r: 80, g: 255, b: 80 }, Color::Reset);

        let tagline = "━━━ Edición Terminal (Rust) ━━━";
        let tx = 2 + (title[1].len().saturating_sub(tagline.chars().count())) / 2;
        self.front.put_str(tx, 9, tagline, Color::Rgb { r: 180, g: 140, b: 50 }, Color::Reset);

        // Menu
        let menu_base = 12;
        let hi = Color::Rgb { r: 80, g: 255, b: 80 };
        let dim = Color::DarkGrey;

        self.front.put_str(8, menu_base, "ENTER / clic   Comenzar", hi, Color::Reset);
        self.front.put_str(8, menu_base + 1, "  Q            Salir", Color::White, Color::Reset);

        // How to play
        let help_base = menu_base + 4;
        self.front.put_str(8, help_base, "Cómo se juega", Color::Rgb { r: 255, g: 200, b: 50 }, Color::Reset);
        let lines = [
            "  Recoge con el clic izquierdo las ofrendas que pide el templo.",
            "  Entrega la colección completa con un clic en el altar.",
            "  Cada ofrenda suma 10 puntos; cada entrega, 50.",
        ];
        for (i, line) in lines.iter().enumerate() {
            self.front.put_str(8, help_base + 1 + i, line, Color::White, Color::Reset);
        }
        self.front.put_text(
            8,
            help_base + 4,
            "  Evita las trampas 💀 🕷️  (restan 5 puntos).",
            Color::White,
            Color::Reset,
        );
        let levels_line = format!(
            "  Supera los {} niveles antes de que el tiempo se agote.",
            w.total_levels.max(1)
        );
        self.front.put_str(8, help_base + 5, &levels_line, Color::White, Color::Reset);

        self.front.put_str(8, help_base + 7, "  F1 pausa    ESC título    Q salir", dim, Color::Reset);
        self.front.put_str(
            8,
            help_base + 9,
            "(mejor en un terminal de 80×24 o más, con soporte de ratón)",
            Color::Rgb { r: 80, g: 80, b: 100 },
            Color::Reset,
        );
    }

    fn compose_game_over(&mut self, w: &WorldState) {
        let box_art = [
            "╔════════════════════════════════╗",
            "║      ✕ TIEMPO  AGOTADO ✕       ║",
            "╚════════════════════════════════╝",
        ];
        for (i, l) in box_art.iter().enumerate() {
            self.front.put_str(6, 4 + i, l, Color::Rgb { r: 255, g: 60, b: 60 }, Color::Reset);
        }
        let reached = (w.current_level + 1).min(w.total_levels.max(1));
        let score = format!("◈ Puntuación final: {}", w.score);
        let level = format!("◈ Nivel alcanzado: {} de {}", reached, w.total_levels);
        self.front.put_str(8, 8, "No lograste completar la tarea a tiempo.", Color::White, Color::Reset);
        self.front.put_str(8, 10, &score, Color::White, Color::Reset);
        self.front.put_str(8, 11, &level, Color::White, Color::Reset);
        self.front.put_str(8, 13, "¡Inténtalo de nuevo!", Color::Rgb { r: 255, g: 200, b: 50 }, Color::Reset);
        self.front.put_str(8, 15, "▸ ENTER / clic: Reintentar", Color::Rgb { r: 80, g: 255, b: 80 }, Color::Reset);
        self.front.put_str(8, 16, "▸ ESC: Título    Q: Salir", Color::DarkGrey, Color::Reset);
    }

    fn compose_game_complete(&mut self, w: &WorldState) {
        let box_art = [
            "╔══════════════════════════════════════╗",
            "║      ★ ¡VICTORIA  GLORIOSA! ★        ║",
            "╚══════════════════════════════════════╝",
        ];
        for (i, l) in box_art.iter().enumerate() {
            self.front.put_str(4, 4 + i, l, Color::Rgb { r: 255, g: 220, b: 50 }, Color::Reset);
        }
        let body = format!(
            "Has completado todos los desafíos y tu puntuación final es: {}",
            w.score
        );
        let levels = format!("◈ Los {} niveles del templo, superados", w.total_levels);
        self.front.put_str(6, 8, &body, Color::White, Color::Reset);
        self.front.put_str(6, 10, &levels, Color::Rgb { r: 80, g: 255, b: 80 }, Color::Reset);
        self.front.put_str(6, 11, "¡Bien hecho, héroe antiguo!", Color::Rgb { r: 255, g: 200, b: 50 }, Color::Reset);
        self.front.put_str(6, 13, "▸ ENTER / clic: Jugar de Nuevo", Color::Rgb { r: 80, g: 255, b: 80 }, Color::Reset);
        self.front.put_str(6, 14, "▸ ESC: Título    Q: Salir", Color::DarkGrey, Color::Reset);
    }

    fn compose_pause_overlay(&mut self, w: &WorldState) {
        let dim = Color::Rgb { r: 40, g: 40, b: 40 };
        let blink = (w.anim_tick / 8) % 2 == 0;

        let board_cols = w.board.cols() * CELL_W;
        let board_rows = w.board.rows();
        let box_w = 28_usize.min(board_cols.max(20));
        let box_h = 7_usize.min(board_rows.max(5));
        let box_x = board_cols.saturating_sub(box_w) / 2;
        let box_y = BOARD_ROW + board_rows.saturating_sub(box_h) / 2;

        for y in box_y..box_y + box_h {
            for x in box_x..box_x + box_w {
                self.front.set(x, y, Cell::from_char(' ', Color::Reset, dim));
            }
        }

        let hdr = Color::Rgb { r: 255, g: 220, b: 50 };
        let key_c = Color::Rgb { r: 100, g: 200, b: 255 };

        let label = if blink { "║  ▶  PAUSA  ◀  ║" } else { "║     PAUSA     ║" };
        let art_x = box_x + box_w.saturating_sub(17) / 2;
        self.front.put_str(art_x, box_y + 1, "╔═══════════════╗", hdr, dim);
        self.front.put_str(art_x, box_y + 2, label, hdr, dim);
        self.front.put_str(art_x, box_y + 3, "╚═══════════════╝", hdr, dim);
        self.front.put_str(box_x + 2, box_y + 5, "F1 continuar  ESC título", key_c, dim);
    }
}
