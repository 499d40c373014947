//! Item model: offering kinds, traps, per-kind counters and the
//! collectibles placed on the board.

use glam::Vec2;

/// Board-unit footprint of every placed item (one game cell).
pub const ITEM_SIZE: f32 = 1.0;

/// The two trap faces spawned each level. Same kind, different glyph.
pub const TRAP_GLYPHS: [&str; 2] = ["💀", "🕷️"];

/// Every clickable thing on the board is one of these.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ItemKind {
    Uva,
    Vasija,
    Pergamino,
    Moneda,
    Trampa,
}

impl ItemKind {
    /// Offering kinds in display order. Traps are excluded: they can be
    /// clicked but never required.
    pub const OFFERINGS: [ItemKind; 4] = [
        ItemKind::Uva,
        ItemKind::Vasija,
        ItemKind::Pergamino,
        ItemKind::Moneda,
    ];

    /// Display glyph. `&str` rather than `char` because some glyphs carry
    /// a variation selector and span several codepoints.
    pub fn glyph(self) -> &'static str {
        match self {
            ItemKind::Uva => "🍇",
            ItemKind::Vasija => "🏺",
            ItemKind::Pergamino => "📜",
            ItemKind::Moneda => "🪙",
            ItemKind::Trampa => "💀",
        }
    }

    #[inline]
    pub fn is_trap(self) -> bool {
        self == ItemKind::Trampa
    }

    /// Counter slot for this kind. Traps have none.
    fn slot(self) -> Option<usize> {
        Self::OFFERINGS.iter().position(|&k| k == self)
    }
}

/// Per-offering-kind counters, used both for "required" and "collected".
/// Traps are never counted: `get` on a trap reads zero, `bump` is a no-op.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct ItemCounts {
    counts: [u32; 4],
}

impl ItemCounts {
    /// Counts in `OFFERINGS` order: [uva, vasija, pergamino, moneda].
    pub const fn new(counts: [u32; 4]) -> Self {
        ItemCounts { counts }
    }

    pub fn get(&self, kind: ItemKind) -> u32 {
        kind.slot().map(|i| self.counts[i]).unwrap_or(0)
    }

    pub fn bump(&mut self, kind: ItemKind) {
        if let Some(i) = kind.slot() {
            self.counts[i] += 1;
        }
    }

    /// Sum across kinds (how many items a requirement spawns).
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Does this counter set cover `required` in every kind?
    pub fn fulfills(&self, required: &ItemCounts) -> bool {
        self.counts
            .iter()
            .zip(required.counts.iter())
            .all(|(have, need)| have >= need)
    }

    /// (kind, count) pairs in display order, zero counts included.
    pub fn iter(&self) -> impl Iterator<Item = (ItemKind, u32)> + '_ {
        ItemKind::OFFERINGS
            .iter()
            .copied()
            .zip(self.counts.iter().copied())
    }
}

/// Requirements banner shown at level start, e.g. "Necesitas: 3 🍇, 1 🏺".
/// Kinds the level does not ask for are omitted.
pub fn requirement_line(required: &ItemCounts) -> String {
    let parts: Vec<String> = required
        .iter()
        .filter(|&(_, n)| n > 0)
        .map(|(kind, n)| format!("{} {}", n, kind.glyph()))
        .collect();
    format!("Necesitas: {}", parts.join(", "))
}

/// One placed item. `pos` is the top-left corner in board units; the body
/// spans `ITEM_SIZE` from there.
#[derive(Clone, Debug)]
pub struct Collectible {
    pub id: u32,
    pub kind: ItemKind,
    pub glyph: &'static str,
    pub pos: Vec2,
    /// Set on click: the item is inert and fading out.
    pub collected: bool,
    /// Ticks left until a fading item leaves the registry.
    pub fade: u32,
}

impl Collectible {
    pub fn new(id: u32, kind: ItemKind, glyph: &'static str, pos: Vec2) -> Self {
        Collectible {
            id,
            kind,
            glyph,
            pos,
            collected: false,
            fade: 0,
        }
    }

    /// Center of the item body. Distance checks measure from here.
    #[allow(dead_code)]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(ITEM_SIZE / 2.0)
    }

    /// Game cell this item is drawn in and clicked at.
    #[inline]
    pub fn cell(&self) -> (i32, i32) {
        (self.pos.x.floor() as i32, self.pos.y.floor() as i32)
    }

    /// Start the fade-out. The item stops reacting to clicks immediately
    /// and is dropped from the registry after `ticks`.
    pub fn start_fade(&mut self, ticks: u32) {
        self.collected = true;
        self.fade = ticks.max(1);
    }
}

// ══════════════════════════════════════════
// Tests
// ══════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offering_glyphs_are_distinct() {
        let glyphs: Vec<&str> = ItemKind::OFFERINGS.iter().map(|k| k.glyph()).collect();
        for (i, g) in glyphs.iter().enumerate() {
            assert!(!glyphs[i + 1..].contains(g), "duplicate glyph {g}");
        }
    }

    #[test]
    fn only_trampa_is_a_trap() {
        assert!(ItemKind::Trampa.is_trap());
        for kind in ItemKind::OFFERINGS {
            assert!(!kind.is_trap());
        }
    }

    #[test]
    fn counts_bump_and_read_back() {
        let mut c = ItemCounts::default();
        assert_eq!(c.get(ItemKind::Uva), 0);
        c.bump(ItemKind::Uva);
        c.bump(ItemKind::Uva);
        c.bump(ItemKind::Moneda);
        assert_eq!(c.get(ItemKind::Uva), 2);
        assert_eq!(c.get(ItemKind::Moneda), 1);
        assert_eq!(c.get(ItemKind::Vasija), 0);
        assert_eq!(c.total(), 3);
    }

    #[test]
    fn trap_clicks_never_reach_the_counters() {
        let mut c = ItemCounts::default();
        c.bump(ItemKind::Trampa);
        assert_eq!(c.total(), 0);
        assert_eq!(c.get(ItemKind::Trampa), 0);
    }

    #[test]
    fn fulfills_requires_every_kind_covered() {
        let required = ItemCounts::new([3, 1, 0, 0]);
        let mut have = ItemCounts::new([3, 0, 0, 0]);
        assert!(!have.fulfills(&required));
        have.bump(ItemKind::Vasija);
        assert!(have.fulfills(&required));
        // Extra of an unrequested kind changes nothing.
        have.bump(ItemKind::Moneda);
        assert!(have.fulfills(&required));
    }

    #[test]
    fn requirement_line_lists_nonzero_kinds_in_order() {
        let req = ItemCounts::new([3, 1, 0, 0]);
        assert_eq!(requirement_line(&req), "Necesitas: 3 🍇, 1 🏺");

        let req = ItemCounts::new([1, 2, 2, 1]);
        assert_eq!(requirement_line(&req), "Necesitas: 1 🍇, 2 🏺, 2 📜, 1 🪙");
    }

    #[test]
    fn requirement_line_single_kind_has_no_comma() {
        let req = ItemCounts::new([0, 0, 4, 0]);
        assert_eq!(requirement_line(&req), "Necesitas: 4 📜");
    }

    #[test]
    fn collectible_center_and_cell() {
        let item = Collectible::new(1, ItemKind::Uva, "🍇", Vec2::new(3.2, 7.9));
        assert_eq!(item.cell(), (3, 7));
        assert!((item.center().x - 3.7).abs() < 1e-6);
        assert!((item.center().y - 8.4).abs() < 1e-6);
    }

    #[test]
    fn start_fade_marks_inert_with_at_least_one_tick() {
        let mut item = Collectible::new(1, ItemKind::Uva, "🍇", Vec2::ZERO);
        item.start_fade(0);
        assert!(item.collected);
        assert_eq!(item.fade, 1);
    }
}
