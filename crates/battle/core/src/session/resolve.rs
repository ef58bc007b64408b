//! Damage application and the post-hit death scan.

use crate::env::{AbilityKey, ContentEnv};
use crate::party::SlotIndex;

use super::{ActorRef, BattleEvent, BattleSession, RemovalKind, Side};

impl BattleSession {
    /// Applies a finished attack to its target and runs the death scan.
    ///
    /// `base_amount` is the attacker's raw damage (attack × ability
    /// multiplier, negative for heals). Scaling order: elemental multiplier
    /// first, then the defense factor
    /// `clamp(1 - defense/2000 [- 0.2 if defending], 0, 1)`.
    /// Scheduling resumes only after the death scan has run.
    pub(super) fn apply_attack(
        &mut self,
        target: ActorRef,
        ability: &AbilityKey,
        base_amount: f32,
        env: &ContentEnv<'_>,
    ) {
        let Some(def) = self.ability_def(ability, env) else {
            self.end_turn();
            return;
        };
        if let Some(entry) = self.entry(target) {
            self.events.push(BattleEvent::AttackCue {
                cue: def.animation.clone(),
                side: target.side,
                position: entry.position,
            });
        }
        self.events.push(BattleEvent::Sound {
            cue: def.animation.clone(),
        });

        if let Some(combatant) = self.parties.get_mut(target.side).get_mut(target.slot) {
            let amount = base_amount * def.element.multiplier_against(combatant.element());

            let mut factor = 1.0 - combatant.stat(crate::combatant::StatKind::Defense) / 2000.0;
            if combatant.defending {
                factor -= 0.2;
            }
            let factor = factor.clamp(0.0, 1.0);

            let delta = -(amount * factor);
            combatant.apply_health_delta(delta);
            self.events.push(BattleEvent::HealthChanged {
                side: target.side,
                slot: target.slot,
                delta,
            });
        }

        self.check_death();
        self.end_turn();
    }

    /// Scans both sides for fainted combatants, opponents first, scheduling
    /// removal, claiming replacements, and awarding experience for downed
    /// opponents.
    fn check_death(&mut self) {
        for side in [Side::Opponent, Side::Player] {
            let fainted: Vec<SlotIndex> = self
                .field
                .get(side)
                .iter()
                .filter(|entry| !entry.visual.is_removing())
                .filter(|entry| {
                    self.parties
                        .get(side)
                        .get(entry.slot)
                        .is_some_and(|c| c.health() <= 0.0)
                })
                .map(|entry| entry.slot)
                .collect();

            for slot in fainted {
                self.handle_faint(ActorRef { side, slot });
            }
        }
    }

    fn handle_faint(&mut self, fallen: ActorRef) {
        let species = match self.parties.get(fallen.side).get(fallen.slot) {
            Some(combatant) => combatant.species().clone(),
            None => return,
        };

        // Claim the replacement now so two faints in one scan never grab
        // the same reserve.
        let unavailable = self.unavailable_slots(fallen.side);
        let replacement = match fallen.side {
            Side::Player => self.parties.player.next_healthy_reserve(&unavailable),
            Side::Opponent => self.parties.opponent.next_reserve(&unavailable),
        };

        if fallen.side == Side::Opponent {
            self.award_faint_experience(fallen.slot);
        }

        self.events.push(BattleEvent::Fainted {
            side: fallen.side,
            slot: fallen.slot,
            species,
        });

        let delay = self.config.removal_delay;
        if let Some(entry) = self.entry_mut(fallen) {
            entry.visual.begin_removal(RemovalKind::Faint { replacement }, delay);
        }
    }

    /// Experience for a downed opponent: `level × xp_per_level`, split
    /// evenly across every fielded player combatant.
    fn award_faint_experience(&mut self, fallen_slot: SlotIndex) {
        let Some(fallen) = self.parties.opponent.get(fallen_slot) else {
            return;
        };
        let active = self.field.player.len();
        if active == 0 {
            return;
        }
        let share = fallen.level() as f32 * self.config.xp_per_level / active as f32;

        let slots: Vec<SlotIndex> = self.field.player.iter().map(|entry| entry.slot).collect();
        for slot in slots {
            if let Some(combatant) = self.parties.player.get_mut(slot) {
                if combatant.gain_xp(share) {
                    let level = combatant.level();
                    self.events.push(BattleEvent::LeveledUp { slot, level });
                }
            }
        }
    }
}
