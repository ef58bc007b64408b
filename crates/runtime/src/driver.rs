//! Per-battle frame loop wrapper.
//!
//! [`BattleDriver`] owns a session for the duration of one battle and turns
//! its drained events into structured logs before handing them to the host.
//! The driver adds no rules of its own.

use std::time::Duration;

use battle_core::env::ContentEnv;
use battle_core::{
    BattleConfig, BattleEvent, BattleKind, BattleOutcome, BattleSession, InputFrame, Party,
    RenderState,
};

use crate::error::Result;

#[derive(Debug)]
pub struct BattleDriver {
    session: BattleSession,
}

impl BattleDriver {
    /// Starts a battle. The opponent party is consumed; the player party is
    /// handed back by [`BattleDriver::finish`].
    pub fn new(
        kind: BattleKind,
        player_party: Party,
        opponent_party: Party,
        battle_seed: u64,
        config: BattleConfig,
        env: &ContentEnv<'_>,
    ) -> Result<Self> {
        tracing::info!(
            ?kind,
            player_members = player_party.len(),
            opponent_members = opponent_party.len(),
            battle_seed,
            "starting battle"
        );
        let session = BattleSession::new(
            kind,
            player_party,
            opponent_party,
            battle_seed,
            config,
            env,
        )?;
        Ok(Self { session })
    }

    pub fn session(&self) -> &BattleSession {
        &self.session
    }

    pub fn is_over(&self) -> bool {
        self.session.is_over()
    }

    pub fn outcome(&self) -> Option<&BattleOutcome> {
        self.session.outcome()
    }

    pub fn render_state(&self, env: &ContentEnv<'_>) -> RenderState {
        self.session.render_state(env)
    }

    /// One frame: forwards delta time and input, logs the resulting events,
    /// and returns them for the host to react to.
    pub fn update(
        &mut self,
        dt: Duration,
        input: InputFrame,
        env: &ContentEnv<'_>,
    ) -> Vec<BattleEvent> {
        let events = self.session.update(dt, input, env);
        for event in &events {
            log_event(event);
        }
        events
    }

    /// Tears the driver down, returning the (possibly grown) player party
    /// and the outcome if the battle ran to completion.
    pub fn finish(self) -> (Party, Option<BattleOutcome>) {
        let outcome = self.session.outcome().cloned();
        (self.session.into_player_party(), outcome)
    }
}

fn log_event(event: &BattleEvent) {
    match event {
        BattleEvent::TurnGranted { side, slot } => {
            tracing::debug!(%side, slot, "turn granted");
        }
        BattleEvent::AbilityUsed { side, slot, ability } => {
            tracing::info!(%side, slot, %ability, "ability used");
        }
        BattleEvent::Sound { cue } | BattleEvent::AttackCue { cue, .. } => {
            tracing::trace!(cue, "presentation cue");
        }
        BattleEvent::HealthChanged { side, slot, delta } => {
            tracing::debug!(%side, slot, delta, "health changed");
        }
        BattleEvent::Fainted { side, slot, species } => {
            tracing::info!(%side, slot, %species, "combatant fainted");
        }
        BattleEvent::LeveledUp { slot, level } => {
            tracing::info!(slot, level, "combatant leveled up");
        }
        BattleEvent::SwitchedIn { side, slot } => {
            tracing::debug!(%side, slot, "combatant switched in");
        }
        BattleEvent::CaptureSucceeded { species } => {
            tracing::info!(%species, "capture succeeded");
        }
        BattleEvent::CaptureFailed { species } => {
            tracing::info!(%species, "capture failed");
        }
        BattleEvent::Ended(outcome) => {
            tracing::info!(?outcome, "battle ended");
        }
    }
}
