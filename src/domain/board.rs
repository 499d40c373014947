//! Board geometry: the bounded play region and rectangular zones inside it.
//!
//! All coordinates are board units (1.0 = one game cell). The renderer maps
//! cells to terminal columns, so nothing here knows about the terminal.

use glam::Vec2;

#[derive(Clone, Copy, Debug)]
pub struct Board {
    pub width: f32,
    pub height: f32,
}

impl Board {
    pub fn new(width: f32, height: f32) -> Self {
        Board { width, height }
    }

    /// Whole cells across, for the renderer's grid.
    #[inline]
    pub fn cols(&self) -> usize {
        self.width as usize
    }

    /// Whole cells down.
    #[inline]
    pub fn rows(&self) -> usize {
        self.height as usize
    }
}

/// Axis-aligned rectangle in board units.
#[derive(Clone, Copy, Debug)]
pub struct Zone {
    pub min: Vec2,
    pub size: Vec2,
}

impl Zone {
    /// The altar zone: `w` x `h` cells centered horizontally, flush with
    /// the bottom edge of the board. Snapped to whole cells so the click
    /// grid and the drawn zone agree.
    pub fn altar(board: Board, w: f32, h: f32) -> Self {
        let w = w.min(board.width);
        let h = h.min(board.height);
        Zone {
            min: Vec2::new(((board.width - w) / 2.0).floor(), board.height - h),
            size: Vec2::new(w, h),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Min-edge inclusive, max-edge exclusive.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x
            && p.x < self.min.x + self.size.x
            && p.y >= self.min.y
            && p.y < self.min.y + self.size.y
    }

    /// Does the game cell (cx, cy) fall inside this zone? Tested at the
    /// cell center so edge cells behave consistently.
    pub fn contains_cell(&self, cx: i32, cy: i32) -> bool {
        self.contains(Vec2::new(cx as f32 + 0.5, cy as f32 + 0.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn altar_is_centered_on_the_bottom_edge() {
        let board = Board::new(40.0, 16.0);
        let altar = Zone::altar(board, 6.0, 2.0);
        assert_eq!(altar.min, Vec2::new(17.0, 14.0));
        assert_eq!(altar.size, Vec2::new(6.0, 2.0));
        assert_eq!(altar.center(), Vec2::new(20.0, 15.0));
    }

    #[test]
    fn altar_never_exceeds_the_board() {
        let board = Board::new(4.0, 3.0);
        let altar = Zone::altar(board, 10.0, 10.0);
        assert_eq!(altar.min, Vec2::ZERO);
        assert_eq!(altar.size, Vec2::new(4.0, 3.0));
    }

    #[test]
    fn contains_is_min_inclusive_max_exclusive() {
        let zone = Zone { min: Vec2::new(2.0, 2.0), size: Vec2::new(3.0, 3.0) };
        assert!(zone.contains(Vec2::new(2.0, 2.0)));
        assert!(zone.contains(Vec2::new(4.9, 4.9)));
        assert!(!zone.contains(Vec2::new(5.0, 3.0)));
        assert!(!zone.contains(Vec2::new(3.0, 5.0)));
        assert!(!zone.contains(Vec2::new(1.9, 3.0)));
    }

    #[test]
    fn cell_membership_matches_the_drawn_zone() {
        let board = Board::new(40.0, 16.0);
        let altar = Zone::altar(board, 6.0, 2.0);
        assert!(altar.contains_cell(17, 14));
        assert!(altar.contains_cell(22, 15));
        assert!(!altar.contains_cell(16, 14));
        assert!(!altar.contains_cell(23, 15));
        assert!(!altar.contains_cell(20, 13));
    }
}
