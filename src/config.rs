//! External configuration loader.
//!
//! Reads `config.toml` from the executable's directory (or CWD, or the
//! usual data dirs). Falls back to sensible defaults if the file is
//! missing or incomplete.

use serde::Deserialize;
use std::path::PathBuf;

// ══════════════════════════════════════════
// Public config structs
// ══════════════════════════════════════════

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub board: BoardConfig,
    pub timing: TimingConfig,
    /// Placement RNG seed. 0 = draw one from entropy at startup.
    pub seed: u64,
}

#[derive(Clone, Debug)]
pub struct BoardConfig {
    /// Playfield size in game cells.
    pub width: u16,
    pub height: u16,
    /// Sampler margin along every edge, board units.
    pub padding: f32,
    /// Clear radius around the altar center that items must leave open.
    pub exclusion_radius: f32,
    /// Altar zone footprint in cells.
    pub altar_width: f32,
    pub altar_height: f32,
}

#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Sim tick interval. The 1 Hz countdown is derived from this.
    pub tick_rate_ms: u64,
    /// Ticks a clicked item lingers before leaving the board.
    pub fade_ticks: u32,
    /// Ticks between a delivery and the next level load.
    pub clear_delay_ticks: u32,
}

impl GameConfig {
    /// Load config from `config.toml`.
    ///
    /// Search order:
    ///   1. Executable's directory
    ///   2. Current working directory
    ///   3. ~/.local/share/ofrenda
    ///   4. /usr/share/ofrenda
    ///
    /// Missing file or missing keys fall back to defaults.
    pub fn load() -> Self {
        Self::from_toml(load_toml(&candidate_dirs()))
    }

    fn from_toml(t: TomlConfig) -> Self {
        GameConfig {
            board: BoardConfig {
                width: t.board.width.max(8),
                height: t.board.height.max(6),
                padding: t.board.padding.max(0.0),
                exclusion_radius: t.board.exclusion_radius.max(0.0),
                altar_width: t.board.altar_width.max(1.0),
                altar_height: t.board.altar_height.max(1.0),
            },
            timing: TimingConfig {
                tick_rate_ms: t.timing.tick_rate_ms,
                fade_ticks: t.timing.fade_ticks,
                clear_delay_ticks: t.timing.clear_delay_ticks,
            },
            seed: t.game.seed,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig::from_toml(TomlConfig::default())
    }
}

// ══════════════════════════════════════════
// TOML schema (private)
// ══════════════════════════════════════════

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    board: TomlBoard,
    #[serde(default)]
    timing: TomlTiming,
    #[serde(default)]
    game: TomlGame,
}

#[derive(Deserialize, Debug)]
struct TomlBoard {
    #[serde(default = "default_board_width")]
    width: u16,
    #[serde(default = "default_board_height")]
    height: u16,
    #[serde(default = "default_padding")]
    padding: f32,
    #[serde(default = "default_exclusion_radius")]
    exclusion_radius: f32,
    #[serde(default = "default_altar_width")]
    altar_width: f32,
    #[serde(default = "default_altar_height")]
    altar_height: f32,
}

#[derive(Deserialize, Debug)]
struct TomlTiming {
    #[serde(default = "default_tick_rate")]
    tick_rate_ms: u64,
    #[serde(default = "default_fade_ticks")]
    fade_ticks: u32,
    #[serde(default = "default_clear_delay")]
    clear_delay_ticks: u32,
}

#[derive(Deserialize, Debug, Default)]
struct TomlGame {
    #[serde(default)]
    seed: u64,
}

fn default_board_width() -> u16 { 40 }
fn default_board_height() -> u16 { 16 }
fn default_padding() -> f32 { 1.0 }
fn default_exclusion_radius() -> f32 { 7.0 }
fn default_altar_width() -> f32 { 6.0 }
fn default_altar_height() -> f32 { 2.0 }
fn default_tick_rate() -> u64 { 100 }
fn default_fade_ticks() -> u32 { 5 }
fn default_clear_delay() -> u32 { 20 }

impl Default for TomlBoard {
    fn default() -> Self {
        TomlBoard {
            width: default_board_width(),
            height: default_board_height(),
            padding: default_padding(),
            exclusion_radius: default_exclusion_radius(),
            altar_width: default_altar_width(),
            altar_height: default_altar_height(),
        }
    }
}

impl Default for TomlTiming {
    fn default() -> Self {
        TomlTiming {
            tick_rate_ms: default_tick_rate(),
            fade_ticks: default_fade_ticks(),
            clear_delay_ticks: default_clear_delay(),
        }
    }
}

// ══════════════════════════════════════════
// File discovery
// ══════════════════════════════════════════

fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    // 1. Exe directory (resolve symlinks)
    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    // 2. CWD
    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    // 3. XDG data home (~/.local/share/ofrenda)
    if let Ok(home) = std::env::var("HOME") {
        let xdg = PathBuf::from(&home).join(".local/share/ofrenda");
        if xdg.is_dir() && !dirs.iter().any(|d| d == &xdg) {
            dirs.push(xdg);
        }
    }

    // 4. System data (/usr/share/ofrenda)
    let sys = PathBuf::from("/usr/share/ofrenda");
    if sys.is_dir() && !dirs.iter().any(|d| d == &sys) {
        dirs.push(sys);
    }

    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }
    dirs
}

fn load_toml(dirs: &[PathBuf]) -> TomlConfig {
    for dir in dirs {
        let path = dir.join("config.toml");
        if !path.is_file() {
            continue;
        }
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<TomlConfig>(&content) {
                Ok(config) => return config,
                Err(e) => {
                    eprintln!("Warning: {} is not valid config ({e}), using defaults", path.display());
                    return TomlConfig::default();
                }
            },
            Err(e) => {
                eprintln!("Warning: could not read {} ({e}), using defaults", path.display());
                return TomlConfig::default();
            }
        }
    }
    TomlConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let t: TomlConfig = toml::from_str(
            r#"
            [timing]
            tick_rate_ms = 50
            "#,
        )
        .unwrap();
        let config = GameConfig::from_toml(t);
        assert_eq!(config.timing.tick_rate_ms, 50);
        assert_eq!(config.timing.fade_ticks, 5);
        assert_eq!(config.board.width, 40);
        assert_eq!(config.seed, 0);
    }

    #[test]
    fn degenerate_board_sizes_are_clamped() {
        let t: TomlConfig = toml::from_str(
            r#"
            [board]
            width = 2
            height = 1
            padding = -3.0
            "#,
        )
        .unwrap();
        let config = GameConfig::from_toml(t);
        assert_eq!(config.board.width, 8);
        assert_eq!(config.board.height, 6);
        assert_eq!(config.board.padding, 0.0);
    }
}
