//! Actor selection and the AI decision policy.

use crate::env::{ContentEnv, compute_seed};

use super::{ActorRef, BattleEvent, BattleSession, Side, TurnPhase};

impl BattleSession {
    /// Scheduler pass: grants a turn to the first fielded combatant whose
    /// initiative crossed the threshold (player side scanned first). All
    /// others freeze until the turn fully resolves; only one actor can be
    /// mid-resolution at a time.
    pub(super) fn select_next_actor(&mut self) {
        if self.current.is_some() || self.phase != TurnPhase::AwaitingActor {
            return;
        }

        let Some(actor) = self.find_ready_actor() else {
            return;
        };

        self.set_all_paused(true);
        if let Some(combatant) = self.parties.get_mut(actor.side).get_mut(actor.slot) {
            // The defending stance lasts until the combatant's next turn
            // begins.
            combatant.defending = false;
            combatant.reset_initiative();
        }
        if let Some(entry) = self.entry_mut(actor) {
            entry.visual.flash_highlight();
        }
        self.current = Some(actor);
        self.phase = TurnPhase::ActorDeciding;
        self.events.push(BattleEvent::TurnGranted {
            side: actor.side,
            slot: actor.slot,
        });

        if actor.side.is_player() {
            self.menu.open_general();
        } else {
            self.opponent_delay.start();
        }
    }

    fn find_ready_actor(&self) -> Option<ActorRef> {
        let threshold = self.config.initiative_threshold;
        for side in [Side::Player, Side::Opponent] {
            for entry in self.field.get(side) {
                if entry.visual.is_removing() {
                    continue;
                }
                let Some(combatant) = self.parties.get(side).get(entry.slot) else {
                    continue;
                };
                // A fainted combatant awaiting removal never acts.
                if combatant.is_fainted() {
                    continue;
                }
                if combatant.initiative() >= threshold {
                    return Some(ActorRef {
                        side,
                        slot: entry.slot,
                    });
                }
            }
        }
        None
    }

    /// AI policy, invoked when the opponent-decision delay elapses: a
    /// uniformly random known ability (affordability ignored) against a
    /// uniformly random fielded target on whichever side the ability aims
    /// at. Deliberately trivial, and deterministic for a fixed battle seed.
    pub(super) fn opponent_decide(&mut self, env: &ContentEnv<'_>) {
        let Some(actor) = self.current else {
            return;
        };
        let Some(combatant) = self.parties.get(actor.side).get(actor.slot) else {
            return;
        };

        let known = combatant.abilities(env.abilities(), false);
        let nonce = self.decision_nonce;
        self.decision_nonce += 1;

        let ability = if known.is_empty() {
            None
        } else {
            let pick = env
                .rng()
                .pick_index(compute_seed(self.battle_seed, nonce, 0), known.len());
            Some(known[pick].clone())
        };
        let Some(ability) = ability else {
            // Nothing to act with; give the turn back.
            self.end_turn();
            return;
        };

        let Some(def) = self.ability_def(&ability, env) else {
            self.end_turn();
            return;
        };
        let target_side = self.resolve_target_side(actor.side, &def);
        let targets = self.target_slots(target_side);
        if targets.is_empty() {
            self.end_turn();
            return;
        }
        let pick = env
            .rng()
            .pick_index(compute_seed(self.battle_seed, nonce, 1), targets.len());
        let target = ActorRef {
            side: target_side,
            slot: targets[pick],
        };
        self.activate_attack(actor, target, ability, env);
    }
}
