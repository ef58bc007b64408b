//! The battle session: turn scheduling, menus, damage, termination.
//!
//! [`BattleSession`] is the authoritative state machine for one battle. The
//! host calls [`BattleSession::update`] once per frame with delta time and
//! the pressed keys; everything observable comes back as drained
//! [`BattleEvent`]s plus a [`RenderState`](render::RenderState) snapshot.
//! Single-threaded and cooperative: suspensions (attack choreography, AI
//! decision delay, death removal) are timers plus the `paused` flag, never
//! background threads.

mod events;
mod input;
mod menu;
mod render;
mod resolve;
mod scheduler;
mod visual;

pub use events::{BattleEvent, BattleOutcome};
pub use input::InputFrame;
pub use menu::{GeneralOption, SelectionMode};
pub use render::{CombatantView, MenuView, RenderState};
pub use visual::{RemovalKind, VisualProxy, VisualTick};

use std::time::Duration;

use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::env::{AbilityDef, AbilityKey, ContentEnv, OracleError, TargetSide};
use crate::party::{Party, SlotIndex};
use crate::timer::Timer;

use menu::MenuState;

/// Field positions per side. Parties can be larger; the rest are reserves.
pub const MAX_FIELDED: usize = 3;

/// Which side of the battlefield a combatant fights on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    #[default]
    Player,
    Opponent,
}

impl Side {
    pub const fn opposite(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    pub const fn is_player(self) -> bool {
        matches!(self, Side::Player)
    }
}

/// On-screen slot of a fielded combatant, distinct from its party slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum FieldPosition {
    Top,
    Center,
    Bottom,
}

impl FieldPosition {
    pub const ALL: [FieldPosition; MAX_FIELDED] =
        [FieldPosition::Top, FieldPosition::Center, FieldPosition::Bottom];
}

/// Addresses one combatant: a side plus its party slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ActorRef {
    pub side: Side,
    pub slot: SlotIndex,
}

/// Pair of per-side values.
#[derive(Clone, Debug, Default)]
pub struct Sides<T> {
    pub player: T,
    pub opponent: T,
}

impl<T> Sides<T> {
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }
}

/// What triggered the battle. Wild battles expose the capture option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BattleKind {
    Wild,
    Trainer { id: String },
}

impl BattleKind {
    pub fn is_wild(&self) -> bool {
        matches!(self, BattleKind::Wild)
    }
}

/// Scheduler phase. Exactly one combatant resolves a turn at a time; all
/// others are frozen for the whole window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TurnPhase {
    /// Not running: the battle has not been assembled or already ended.
    #[default]
    Idle,
    /// Everyone accrues initiative; no actor selected.
    AwaitingActor,
    /// An actor was granted a turn and is deciding (player menu or AI
    /// delay).
    ActorDeciding,
    /// An action was committed; choreography runs, damage pending.
    Resolving,
}

/// One occupied field position.
#[derive(Clone, Debug)]
pub struct FieldEntry {
    pub slot: SlotIndex,
    pub position: FieldPosition,
    pub visual: VisualProxy,
}

type Field = ArrayVec<FieldEntry, MAX_FIELDED>;

/// Errors surfaced while assembling a battle session.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("cannot start a battle with an empty {0} party")]
    EmptyParty(Side),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

/// A running battle. Created when an encounter triggers, dropped when the
/// end condition fires and control returns to the overworld.
#[derive(Debug)]
pub struct BattleSession {
    kind: BattleKind,
    config: BattleConfig,
    parties: Sides<Party>,
    field: Sides<Field>,
    phase: TurnPhase,
    current: Option<ActorRef>,
    menu: MenuState,
    opponent_delay: Timer,
    battle_seed: u64,
    decision_nonce: u64,
    battle_over: bool,
    outcome: Option<BattleOutcome>,
    events: Vec<BattleEvent>,
}

impl BattleSession {
    /// Assembles a session, fielding up to [`MAX_FIELDED`] members per side
    /// in slot order.
    ///
    /// Every ability key referenced by either party is resolved against the
    /// environment up front, so an unknown key aborts setup instead of
    /// surfacing mid-battle.
    pub fn new(
        kind: BattleKind,
        player_party: Party,
        opponent_party: Party,
        battle_seed: u64,
        config: BattleConfig,
        env: &ContentEnv<'_>,
    ) -> Result<Self, SessionError> {
        if player_party.is_empty() {
            return Err(SessionError::EmptyParty(Side::Player));
        }
        if opponent_party.is_empty() {
            return Err(SessionError::EmptyParty(Side::Opponent));
        }
        for party in [&player_party, &opponent_party] {
            for (_, combatant) in party.iter() {
                for key in combatant.known_abilities() {
                    env.ability(key)?;
                }
            }
        }

        let mut session = Self {
            kind,
            opponent_delay: Timer::new(config.opponent_delay),
            config,
            parties: Sides {
                player: player_party,
                opponent: opponent_party,
            },
            field: Sides::default(),
            phase: TurnPhase::AwaitingActor,
            current: None,
            menu: MenuState::new(),
            battle_seed,
            decision_nonce: 0,
            battle_over: false,
            outcome: None,
            events: Vec::new(),
        };

        for side in [Side::Player, Side::Opponent] {
            let slots: Vec<SlotIndex> = session
                .parties
                .get(side)
                .iter()
                .take(MAX_FIELDED)
                .map(|(slot, _)| slot)
                .collect();
            for (index, slot) in slots.into_iter().enumerate() {
                session.field_combatant(side, slot, FieldPosition::ALL[index]);
            }
        }
        session.set_all_paused(false);
        Ok(session)
    }

    /// Per-frame update. Order mirrors the resolution pipeline: end
    /// conditions, menu input, scheduled delays, visual/combatant ticks,
    /// then the scheduler's actor-selection pass. Returns the events this
    /// frame produced; after the battle ends, ticking is a no-op.
    pub fn update(
        &mut self,
        dt: Duration,
        input: InputFrame,
        env: &ContentEnv<'_>,
    ) -> Vec<BattleEvent> {
        if self.battle_over {
            return Vec::new();
        }

        self.check_end();
        if !self.battle_over {
            self.handle_input(input, env);
            if self.opponent_delay.tick(dt) {
                self.opponent_decide(env);
            }
            self.tick_field(dt, env);
            self.select_next_actor();
        }

        std::mem::take(&mut self.events)
    }

    pub fn kind(&self) -> &BattleKind {
        &self.kind
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn current_actor(&self) -> Option<ActorRef> {
        self.current
    }

    pub fn is_over(&self) -> bool {
        self.battle_over
    }

    pub fn outcome(&self) -> Option<&BattleOutcome> {
        self.outcome.as_ref()
    }

    pub fn party(&self, side: Side) -> &Party {
        self.parties.get(side)
    }

    /// Hands the (possibly grown) player party back to the overworld.
    pub fn into_player_party(self) -> Party {
        self.parties.player
    }

    // ------------------------------------------------------------------
    // End conditions
    // ------------------------------------------------------------------

    fn check_end(&mut self) {
        if self.field.opponent.is_empty() {
            let trainer = match &self.kind {
                BattleKind::Trainer { id } => Some(id.clone()),
                BattleKind::Wild => None,
            };
            // Victory fires exactly once; initiative is reset so the next
            // battle starts from a clean slate.
            for (_, combatant) in self.parties.player.iter_mut() {
                combatant.reset_initiative();
            }
            self.finish(BattleOutcome::Victory { trainer });
        } else if self.field.player.is_empty() {
            self.finish(BattleOutcome::Defeat);
        }
    }

    fn finish(&mut self, outcome: BattleOutcome) {
        self.battle_over = true;
        self.phase = TurnPhase::Idle;
        self.outcome = Some(outcome.clone());
        self.events.push(BattleEvent::Ended(outcome));
    }

    // ------------------------------------------------------------------
    // Field bookkeeping
    // ------------------------------------------------------------------

    /// Places a party member on the field at the given position. While a
    /// turn is being resolved the newcomer joins frozen, like everyone
    /// else.
    fn field_combatant(&mut self, side: Side, slot: SlotIndex, position: FieldPosition) {
        let paused = matches!(
            self.phase,
            TurnPhase::ActorDeciding | TurnPhase::Resolving
        );
        if let Some(combatant) = self.parties.get_mut(side).get_mut(slot) {
            combatant.paused = paused;
        }
        self.field.get_mut(side).push(FieldEntry {
            slot,
            position,
            visual: VisualProxy::new(self.config.highlight_duration),
        });
    }

    fn entry(&self, actor: ActorRef) -> Option<&FieldEntry> {
        self.field
            .get(actor.side)
            .iter()
            .find(|entry| entry.slot == actor.slot)
    }

    fn entry_mut(&mut self, actor: ActorRef) -> Option<&mut FieldEntry> {
        self.field
            .get_mut(actor.side)
            .iter_mut()
            .find(|entry| entry.slot == actor.slot)
    }

    /// Fielded targets on a side, in field order. Combatants already
    /// leaving the field cannot be targeted.
    fn target_slots(&self, side: Side) -> Vec<SlotIndex> {
        self.field
            .get(side)
            .iter()
            .filter(|entry| !entry.visual.is_removing())
            .map(|entry| entry.slot)
            .collect()
    }

    /// Party slots unavailable as replacements on a side: currently
    /// fielded, plus reserves already claimed by a pending removal.
    fn unavailable_slots(&self, side: Side) -> Vec<SlotIndex> {
        let mut slots: Vec<SlotIndex> = Vec::new();
        for entry in self.field.get(side) {
            slots.push(entry.slot);
            if let Some(claimed) = entry.visual.claimed_replacement() {
                slots.push(claimed);
            }
        }
        slots
    }

    fn set_all_paused(&mut self, paused: bool) {
        for side in [Side::Player, Side::Opponent] {
            let slots: Vec<SlotIndex> =
                self.field.get(side).iter().map(|entry| entry.slot).collect();
            let party = self.parties.get_mut(side);
            for slot in slots {
                if let Some(combatant) = party.get_mut(slot) {
                    combatant.paused = paused;
                }
            }
        }
    }

    /// Ends the current actor's turn and lets everyone accrue initiative
    /// again.
    fn end_turn(&mut self) {
        self.menu.close();
        self.current = None;
        self.phase = TurnPhase::AwaitingActor;
        self.set_all_paused(false);
    }

    // ------------------------------------------------------------------
    // Action activation
    // ------------------------------------------------------------------

    /// Commits the current actor to an ability against a target: spends
    /// energy immediately and starts the attack choreography. Damage
    /// applies when the window completes (see `resolve`).
    fn activate_attack(
        &mut self,
        actor: ActorRef,
        target: ActorRef,
        ability: AbilityKey,
        env: &ContentEnv<'_>,
    ) {
        let Some(def) = self.ability_def(&ability, env) else {
            return;
        };
        let window = self.config.attack_animation;
        if let Some(combatant) = self.parties.get_mut(actor.side).get_mut(actor.slot) {
            combatant.spend_energy(&def);
        }
        if let Some(entry) = self.entry_mut(actor) {
            entry.visual.begin_attack(target, ability.clone(), window);
        }
        self.events.push(BattleEvent::AbilityUsed {
            side: actor.side,
            slot: actor.slot,
            ability,
        });
        self.menu.close();
        self.current = None;
        self.phase = TurnPhase::Resolving;
    }

    /// Resolves an ability key against the environment. Keys were validated
    /// at setup, so a miss here is an engine bug, not a user error.
    fn ability_def(&self, key: &AbilityKey, env: &ContentEnv<'_>) -> Option<AbilityDef> {
        let def = env.ability(key).ok().cloned();
        debug_assert!(def.is_some(), "ability '{key}' vanished after setup");
        def
    }

    /// The side an ability aims at, from the acting side's point of view.
    fn resolve_target_side(&self, actor_side: Side, def: &AbilityDef) -> Side {
        match def.target {
            TargetSide::Own => actor_side,
            TargetSide::Opposing => actor_side.opposite(),
        }
    }

    // ------------------------------------------------------------------
    // Per-frame field tick
    // ------------------------------------------------------------------

    /// Ticks every fielded visual proxy and combatant, then processes the
    /// completions. Completions are collected first: party and field
    /// collections must not be mutated while the scan is in progress.
    fn tick_field(&mut self, dt: Duration, env: &ContentEnv<'_>) {
        let dt_secs = dt.as_secs_f32();
        let mut attacks: Vec<(ActorRef, ActorRef, AbilityKey)> = Vec::new();
        let mut removals: Vec<(ActorRef, RemovalKind)> = Vec::new();

        for side in [Side::Player, Side::Opponent] {
            // Split borrows: entries live in the field, combatants in the
            // party.
            let field = match side {
                Side::Player => &mut self.field.player,
                Side::Opponent => &mut self.field.opponent,
            };
            let party = match side {
                Side::Player => &mut self.parties.player,
                Side::Opponent => &mut self.parties.opponent,
            };
            for entry in field.iter_mut() {
                let signal = entry.visual.tick(dt);
                let here = ActorRef {
                    side,
                    slot: entry.slot,
                };
                if let Some((target, ability)) = signal.attack_complete {
                    attacks.push((here, target, ability));
                }
                if let Some(kind) = signal.removal_complete {
                    removals.push((here, kind));
                }
                if let Some(combatant) = party.get_mut(entry.slot) {
                    combatant.tick(dt_secs);
                }
            }
        }

        for (attacker, target, ability) in attacks {
            let base_amount = self
                .parties
                .get(attacker.side)
                .get(attacker.slot)
                .zip(self.ability_def(&ability, env))
                .map(|(combatant, def)| combatant.base_damage(&def));
            if let Some(base_amount) = base_amount {
                self.apply_attack(target, &ability, base_amount, env);
            }
        }

        for (leaving, kind) in removals {
            self.destroy_field_entry(leaving, kind);
        }
    }

    /// Removes a field entry whose exit delay elapsed and fields the
    /// replacement, if one was claimed.
    fn destroy_field_entry(&mut self, leaving: ActorRef, kind: RemovalKind) {
        let Some(index) = self
            .field
            .get(leaving.side)
            .iter()
            .position(|entry| entry.slot == leaving.slot)
        else {
            return;
        };
        let entry = self.field.get_mut(leaving.side).remove(index);

        match kind {
            RemovalKind::Faint { replacement } => {
                // Opponent parties are battle-scoped: the fallen are dropped
                // outright. Player members stay in the party at health 0.
                if leaving.side == Side::Opponent {
                    self.parties.opponent.remove(leaving.slot);
                }
                if let Some(slot) = replacement {
                    self.field_combatant(leaving.side, slot, entry.position);
                    self.events.push(BattleEvent::SwitchedIn {
                        side: leaving.side,
                        slot,
                    });
                }
            }
            RemovalKind::Capture => {
                if let Some(captured) = self.parties.opponent.remove(leaving.slot) {
                    self.parties.player.insert(captured);
                }
            }
        }
    }
}
