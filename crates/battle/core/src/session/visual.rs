//! Animation-state proxy for a fielded combatant.
//!
//! The real animation frames live in the rendering layer; the proxy tracks
//! only the timing the battle logic depends on: when the attack window
//! completes (damage applies), when the highlight flash ends, and when a
//! fainted or captured combatant is finally removed from the field.

use std::time::Duration;

use crate::env::AbilityKey;
use crate::party::SlotIndex;
use crate::timer::Timer;

use super::ActorRef;

/// Why a combatant is leaving the field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemovalKind {
    /// Fainted; `replacement` is the reserve slot claimed to take over the
    /// field position, if any.
    Faint { replacement: Option<SlotIndex> },
    /// Captured by the player; transfers parties on completion.
    Capture,
}

#[derive(Clone, Debug)]
enum VisualPhase {
    Idle,
    Attacking {
        target: ActorRef,
        ability: AbilityKey,
        timer: Timer,
    },
}

#[derive(Clone, Debug)]
struct Removal {
    kind: RemovalKind,
    timer: Timer,
}

/// Completions produced by one visual tick.
#[derive(Debug, Default)]
pub struct VisualTick {
    /// The attack window finished; damage should apply now.
    pub attack_complete: Option<(ActorRef, AbilityKey)>,
    /// The exit delay finished; the field entry should be destroyed.
    pub removal_complete: Option<RemovalKind>,
}

/// Per-field-entry animation state.
#[derive(Clone, Debug)]
pub struct VisualProxy {
    phase: VisualPhase,
    removal: Option<Removal>,
    highlight: bool,
    highlight_timer: Timer,
}

impl VisualProxy {
    pub fn new(highlight_duration: Duration) -> Self {
        Self {
            phase: VisualPhase::Idle,
            removal: None,
            highlight: false,
            highlight_timer: Timer::new(highlight_duration),
        }
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlight
    }

    pub fn is_attacking(&self) -> bool {
        matches!(self.phase, VisualPhase::Attacking { .. })
    }

    pub fn is_removing(&self) -> bool {
        self.removal.is_some()
    }

    /// Replacement slot already claimed by a scheduled removal, if any.
    pub fn claimed_replacement(&self) -> Option<SlotIndex> {
        match self.removal {
            Some(Removal {
                kind: RemovalKind::Faint {
                    replacement: Some(slot),
                },
                ..
            }) => Some(slot),
            _ => None,
        }
    }

    /// Turns on the white selection flash; it clears itself after the
    /// configured duration.
    pub fn flash_highlight(&mut self) {
        self.highlight = true;
        self.highlight_timer.start();
    }

    /// Starts the attack choreography against `target`. Damage applies when
    /// the window elapses, not now.
    pub fn begin_attack(&mut self, target: ActorRef, ability: AbilityKey, window: Duration) {
        self.phase = VisualPhase::Attacking {
            target,
            ability,
            timer: Timer::started(window),
        };
    }

    /// Schedules removal from the field after the exit delay. A second call
    /// while one is pending is ignored.
    pub fn begin_removal(&mut self, kind: RemovalKind, delay: Duration) {
        if self.removal.is_some() {
            return;
        }
        self.removal = Some(Removal {
            kind,
            timer: Timer::started(delay),
        });
    }

    /// Advances all proxy timers and reports completions.
    pub fn tick(&mut self, dt: Duration) -> VisualTick {
        let mut result = VisualTick::default();

        if self.highlight_timer.tick(dt) {
            self.highlight = false;
        }

        if let VisualPhase::Attacking { timer, .. } = &mut self.phase
            && timer.tick(dt)
        {
            let VisualPhase::Attacking {
                target, ability, ..
            } = std::mem::replace(&mut self.phase, VisualPhase::Idle)
            else {
                unreachable!()
            };
            result.attack_complete = Some((target, ability));
        }

        if let Some(removal) = &mut self.removal
            && removal.timer.tick(dt)
        {
            let removal = self.removal.take().expect("removal checked above");
            result.removal_complete = Some(removal.kind);
        }

        result
    }
}
