//! Inputs and outputs of the state machine.
//!
//! `Action` is everything the outside world may ask of the sim. The UI
//! translates raw terminal events into actions; nothing else mutates game
//! state. `GameEvent` is what the sim reports back; the presentation layer
//! consumes these for sound and effects.

use crate::domain::item::ItemKind;

/// One input to the state machine.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    /// Start or retry, valid on the title and both end screens.
    Start,
    /// Pointer click resolved to a live registry item.
    ClickItem(u32),
    /// Pointer click inside the altar zone.
    ClickAltar,
    /// Fixed-rate sim tick. A full second of them advances the countdown.
    Tick,
}

/// Events emitted by the simulation during a step.
#[derive(Clone, Debug)]
#[allow(dead_code)]
pub enum GameEvent {
    LevelLoaded { level: usize },
    ItemCollected { kind: ItemKind, have: u32, need: u32 },
    TrapSprung { penalty: u32 },
    /// Clicked an offering that is already at its cap or never required.
    ClickRejected,
    OfferingsDelivered { bonus: u32 },
    /// Altar clicked with the collection incomplete.
    OfferingsMissing,
    SecondElapsed { remaining: u32 },
    TimeExpired { final_score: u32 },
    GameWon { final_score: u32 },
}
