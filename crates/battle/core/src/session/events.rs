//! Events drained from a battle session.
//!
//! The original control flow threaded callbacks ("end battle", "apply
//! attack") through every layer; here the session records typed events and
//! the host drains them once per frame. This keeps the core testable
//! without constructing a full game object graph.

use crate::env::{AbilityKey, SpeciesKey};
use crate::party::SlotIndex;

use super::{FieldPosition, Side};

/// How a battle ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BattleOutcome {
    /// Opponent side wiped out. Carries the trainer id for trainer fights
    /// so the overworld can mark them defeated.
    Victory { trainer: Option<String> },
    /// Player side wiped out. Terminal: the session refuses further ticks.
    Defeat,
}

/// Something the host may want to react to: play a sound, spawn an effect,
/// leave the battle screen.
#[derive(Clone, Debug, PartialEq)]
pub enum BattleEvent {
    /// A combatant reached the initiative threshold and was granted a turn.
    TurnGranted { side: Side, slot: SlotIndex },
    /// An actor committed to an ability; the attack choreography started.
    AbilityUsed {
        side: Side,
        slot: SlotIndex,
        ability: AbilityKey,
    },
    /// Audio cue for the landing attack.
    Sound { cue: String },
    /// Visual effect to spawn at the target's field position.
    AttackCue {
        cue: String,
        side: Side,
        position: FieldPosition,
    },
    /// Health change that was just applied (negative = damage).
    HealthChanged {
        side: Side,
        slot: SlotIndex,
        delta: f32,
    },
    Fainted {
        side: Side,
        slot: SlotIndex,
        species: SpeciesKey,
    },
    /// A player combatant leveled up from an experience award.
    LeveledUp { slot: SlotIndex, level: u32 },
    /// A combatant entered the field (switch or automatic replacement).
    SwitchedIn { side: Side, slot: SlotIndex },
    CaptureSucceeded { species: SpeciesKey },
    CaptureFailed { species: SpeciesKey },
    Ended(BattleOutcome),
}
