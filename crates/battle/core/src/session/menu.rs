//! The player-facing decision tree.
//!
//! `general → attacks → target`, `general → switch`, and `general →
//! target` (capture): each state with a cyclic cursor, back navigation to
//! the general menu, and all cursors reset after any confirm. Input is only
//! consumed while a selection mode is active and a human-controlled actor
//! is deciding; AI actors never enter this state machine.

use crate::env::{AbilityKey, ContentEnv};
use crate::party::SlotIndex;

use super::{ActorRef, BattleEvent, BattleSession, InputFrame, RemovalKind, Side};

/// Active menu level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SelectionMode {
    General,
    Attacks,
    Switch,
    Target,
}

/// Entries of the general menu. Catch only appears in wild battles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum GeneralOption {
    Fight,
    Defend,
    Switch,
    Catch,
}

const GENERAL_WILD: &[GeneralOption] = &[
    GeneralOption::Fight,
    GeneralOption::Defend,
    GeneralOption::Switch,
    GeneralOption::Catch,
];
const GENERAL_TRAINER: &[GeneralOption] = &[
    GeneralOption::Fight,
    GeneralOption::Defend,
    GeneralOption::Switch,
];

/// Per-mode cursors plus the pending selection carried between states.
#[derive(Clone, Debug, Default)]
pub(super) struct MenuState {
    mode: Option<SelectionMode>,
    general_cursor: usize,
    attacks_cursor: usize,
    switch_cursor: usize,
    target_cursor: usize,
    /// Ability chosen in `attacks`, awaiting a target. `None` in target
    /// mode means a capture attempt.
    selected_ability: Option<AbilityKey>,
    /// Side the target cursor moves over.
    selection_side: Side,
}

impl MenuState {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn mode(&self) -> Option<SelectionMode> {
        self.mode
    }

    pub(super) fn selection_side(&self) -> Side {
        self.selection_side
    }

    pub(super) fn cursor(&self, mode: SelectionMode) -> usize {
        match mode {
            SelectionMode::General => self.general_cursor,
            SelectionMode::Attacks => self.attacks_cursor,
            SelectionMode::Switch => self.switch_cursor,
            SelectionMode::Target => self.target_cursor,
        }
    }

    fn cursor_mut(&mut self, mode: SelectionMode) -> &mut usize {
        match mode {
            SelectionMode::General => &mut self.general_cursor,
            SelectionMode::Attacks => &mut self.attacks_cursor,
            SelectionMode::Switch => &mut self.switch_cursor,
            SelectionMode::Target => &mut self.target_cursor,
        }
    }

    pub(super) fn open_general(&mut self) {
        self.mode = Some(SelectionMode::General);
        self.selected_ability = None;
        self.selection_side = Side::Player;
    }

    pub(super) fn close(&mut self) {
        self.mode = None;
        self.selected_ability = None;
        self.reset_cursors();
    }

    fn reset_cursors(&mut self) {
        self.general_cursor = 0;
        self.attacks_cursor = 0;
        self.switch_cursor = 0;
        self.target_cursor = 0;
    }
}

impl BattleSession {
    /// General-menu options for this battle kind.
    pub fn general_options(&self) -> &'static [GeneralOption] {
        if self.kind.is_wild() {
            GENERAL_WILD
        } else {
            GENERAL_TRAINER
        }
    }

    /// Abilities the current actor can pay for right now.
    pub(super) fn usable_abilities(
        &self,
        actor: ActorRef,
        env: &ContentEnv<'_>,
    ) -> Vec<AbilityKey> {
        self.parties
            .get(actor.side)
            .get(actor.slot)
            .map(|combatant| combatant.abilities(env.abilities(), true))
            .unwrap_or_default()
    }

    /// Reserves the player could switch in: alive and neither fielded nor
    /// already claimed as a pending replacement.
    pub(super) fn switch_candidates(&self) -> Vec<SlotIndex> {
        let unavailable = self.unavailable_slots(Side::Player);
        self.parties.player.healthy_reserves(&unavailable)
    }

    pub(super) fn menu_mode(&self) -> Option<SelectionMode> {
        self.menu.mode()
    }

    pub(super) fn menu_selection_side(&self) -> Side {
        self.menu.selection_side()
    }

    pub(super) fn menu_cursor(&self, mode: SelectionMode) -> usize {
        self.menu.cursor(mode)
    }

    /// Menu input pass. Runs only while a selection mode is active and the
    /// acting combatant belongs to the player.
    pub(super) fn handle_input(&mut self, input: InputFrame, env: &ContentEnv<'_>) {
        let (Some(mode), Some(actor)) = (self.menu.mode(), self.current) else {
            return;
        };
        if !actor.side.is_player() || input.is_empty() {
            return;
        }

        let count = match mode {
            SelectionMode::General => self.general_options().len(),
            SelectionMode::Attacks => self.usable_abilities(actor, env).len(),
            SelectionMode::Switch => self.switch_candidates().len(),
            SelectionMode::Target => self.target_slots(self.menu.selection_side()).len(),
        };

        if count > 0 {
            let cursor = self.menu.cursor_mut(mode);
            if input.contains(InputFrame::DOWN) {
                *cursor = (*cursor + 1) % count;
            }
            if input.contains(InputFrame::UP) {
                *cursor = (*cursor + count - 1) % count;
            }
        }

        if input.contains(InputFrame::CONFIRM) {
            self.confirm(mode, actor, env);
            self.menu.reset_cursors();
        }

        // Re-read the mode: a confirm in the same frame may have moved it.
        if input.contains(InputFrame::BACK)
            && matches!(
                self.menu.mode(),
                Some(SelectionMode::Attacks | SelectionMode::Switch | SelectionMode::Target)
            )
        {
            self.menu.mode = Some(SelectionMode::General);
            self.menu.selected_ability = None;
        }
    }

    fn confirm(&mut self, mode: SelectionMode, actor: ActorRef, env: &ContentEnv<'_>) {
        match mode {
            SelectionMode::General => self.confirm_general(actor, env),
            SelectionMode::Attacks => self.confirm_attack_choice(actor, env),
            SelectionMode::Switch => self.confirm_switch(actor),
            SelectionMode::Target => self.confirm_target(actor, env),
        }
    }

    fn confirm_general(&mut self, actor: ActorRef, env: &ContentEnv<'_>) {
        let options = self.general_options();
        let option = options[self.menu.cursor(SelectionMode::General) % options.len()];
        match option {
            GeneralOption::Fight => {
                // An empty ability list would leave nothing to confirm;
                // the option simply does not open.
                if !self.usable_abilities(actor, env).is_empty() {
                    self.menu.mode = Some(SelectionMode::Attacks);
                }
            }
            GeneralOption::Defend => {
                if let Some(combatant) = self.parties.get_mut(actor.side).get_mut(actor.slot) {
                    combatant.defending = true;
                }
                self.end_turn();
            }
            GeneralOption::Switch => {
                if !self.switch_candidates().is_empty() {
                    self.menu.mode = Some(SelectionMode::Switch);
                }
            }
            GeneralOption::Catch => {
                self.menu.mode = Some(SelectionMode::Target);
                self.menu.selection_side = Side::Opponent;
                self.menu.selected_ability = None;
            }
        }
    }

    fn confirm_attack_choice(&mut self, actor: ActorRef, env: &ContentEnv<'_>) {
        let abilities = self.usable_abilities(actor, env);
        let Some(ability) = abilities
            .get(self.menu.cursor(SelectionMode::Attacks))
            .cloned()
        else {
            return;
        };
        let Some(def) = self.ability_def(&ability, env) else {
            return;
        };
        self.menu.selection_side = self.resolve_target_side(actor.side, &def);
        self.menu.selected_ability = Some(ability);
        self.menu.mode = Some(SelectionMode::Target);
    }

    /// Swaps the acting combatant for the chosen reserve at the same field
    /// position, then ends the turn. The reserve keeps whatever health and
    /// energy it had.
    fn confirm_switch(&mut self, actor: ActorRef) {
        let candidates = self.switch_candidates();
        let Some(&incoming) = candidates.get(self.menu.cursor(SelectionMode::Switch)) else {
            return;
        };
        if let Some(index) = self
            .field
            .get(Side::Player)
            .iter()
            .position(|e| e.slot == actor.slot)
        {
            let position = self.field.get_mut(Side::Player).remove(index).position;
            self.field_combatant(Side::Player, incoming, position);
            self.events.push(BattleEvent::SwitchedIn {
                side: Side::Player,
                slot: incoming,
            });
        }
        self.end_turn();
    }

    fn confirm_target(&mut self, actor: ActorRef, env: &ContentEnv<'_>) {
        let side = self.menu.selection_side();
        let targets = self.target_slots(side);
        let Some(&slot) = targets.get(self.menu.cursor(SelectionMode::Target)) else {
            return;
        };
        let target = ActorRef { side, slot };

        if let Some(ability) = self.menu.selected_ability.take() {
            self.activate_attack(actor, target, ability, env);
        } else {
            self.attempt_capture(target);
        }
    }

    /// Capture check: strictly below the configured fraction of max health
    /// succeeds; otherwise only a visual cue fires. Either way the actor's
    /// turn ends.
    fn attempt_capture(&mut self, target: ActorRef) {
        let Some(combatant) = self.parties.get(target.side).get(target.slot) else {
            return;
        };
        let species = combatant.species().clone();
        if combatant.health() < combatant.max_health() * self.config.capture_threshold {
            let delay = self.config.removal_delay;
            if let Some(entry) = self.entry_mut(target) {
                entry.visual.begin_removal(RemovalKind::Capture, delay);
            }
            self.events.push(BattleEvent::CaptureSucceeded { species });
        } else {
            self.events.push(BattleEvent::CaptureFailed { species });
        }
        self.end_turn();
    }
}
