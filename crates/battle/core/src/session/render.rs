//! Read-only snapshot of the session for the presentation layer.
//!
//! The host renders from this instead of reaching into session internals,
//! so the session can reorganize freely without breaking drawing code.

use crate::env::ContentEnv;
use crate::party::SlotIndex;

use super::menu::SelectionMode;
use super::{BattleSession, FieldPosition, Side, TurnPhase};

/// One fielded combatant, ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct CombatantView {
    pub side: Side,
    pub position: FieldPosition,
    pub slot: SlotIndex,
    pub species: String,
    pub level: u32,
    pub health: f32,
    pub max_health: f32,
    pub energy: f32,
    pub max_energy: f32,
    /// Initiative as a fraction of the acting threshold, clamped to `[0, 1]`.
    pub initiative_ratio: f32,
    pub highlighted: bool,
    pub is_current: bool,
    pub removing: bool,
}

/// The open menu, if any, with display-ready labels.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuView {
    pub mode: SelectionMode,
    /// Side the cursor moves over in target mode.
    pub side: Side,
    pub options: Vec<String>,
    pub cursor: usize,
}

/// Everything the battle screen draws in one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderState {
    pub phase: TurnPhase,
    pub combatants: Vec<CombatantView>,
    pub menu: Option<MenuView>,
}

impl BattleSession {
    /// Builds the frame snapshot.
    pub fn render_state(&self, env: &ContentEnv<'_>) -> RenderState {
        let mut combatants = Vec::new();
        for side in [Side::Player, Side::Opponent] {
            for entry in self.field.get(side) {
                let Some(combatant) = self.parties.get(side).get(entry.slot) else {
                    continue;
                };
                let threshold = self.config.initiative_threshold;
                combatants.push(CombatantView {
                    side,
                    position: entry.position,
                    slot: entry.slot,
                    species: combatant.species().to_string(),
                    level: combatant.level(),
                    health: combatant.health(),
                    max_health: combatant.max_health(),
                    energy: combatant.energy(),
                    max_energy: combatant.max_energy(),
                    initiative_ratio: (combatant.initiative() / threshold).clamp(0.0, 1.0),
                    highlighted: entry.visual.is_highlighted(),
                    is_current: self.current.is_some_and(|actor| {
                        actor.side == side && actor.slot == entry.slot
                    }),
                    removing: entry.visual.is_removing(),
                });
            }
        }

        RenderState {
            phase: self.phase,
            combatants,
            menu: self.menu_view(env),
        }
    }

    fn menu_view(&self, env: &ContentEnv<'_>) -> Option<MenuView> {
        let mode = self.menu_mode()?;
        let actor = self.current.filter(|actor| actor.side.is_player())?;

        let (side, options) = match mode {
            SelectionMode::General => (
                Side::Player,
                self.general_options()
                    .iter()
                    .map(|option| option.to_string())
                    .collect(),
            ),
            SelectionMode::Attacks => (
                Side::Player,
                self.usable_abilities(actor, env)
                    .iter()
                    .map(|key| key.to_string())
                    .collect(),
            ),
            SelectionMode::Switch => (
                Side::Player,
                self.switch_candidates()
                    .into_iter()
                    .filter_map(|slot| self.parties.player.get(slot))
                    .map(|c| format!("{} ({})", c.species(), c.level()))
                    .collect(),
            ),
            SelectionMode::Target => {
                let side = self.menu_selection_side();
                let options = self
                    .target_slots(side)
                    .into_iter()
                    .filter_map(|slot| self.parties.get(side).get(slot))
                    .map(|c| c.species().to_string())
                    .collect();
                (side, options)
            }
        };

        Some(MenuView {
            mode,
            side,
            options,
            cursor: self.menu_cursor(mode),
        })
    }
}
