//! Per-creature runtime state: stat pools, initiative, abilities, leveling.

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::element::Element;
use crate::env::{
    AbilityDef, AbilityKey, AbilityOracle, BaseStats, EvolutionDef, OracleError, SpeciesKey,
    SpeciesOracle,
};

/// Experience needed per level: `threshold = level × 150`.
const XP_THRESHOLD_PER_LEVEL: f32 = 150.0;

/// Derived stat selector. Every derived stat is `base × level`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum StatKind {
    MaxHealth,
    MaxEnergy,
    Attack,
    Defense,
    Recovery,
    Speed,
}

/// A creature participating in battles.
///
/// Base stats, the ability pool, and the evolution target are copied out of
/// the species oracle at construction; everything else is mutable runtime
/// state. Health and energy are clamped into `[0, max]` on every tick, so
/// transient overdraw from [`Combatant::spend_energy`] is tolerated.
#[derive(Clone, Debug)]
pub struct Combatant {
    species: SpeciesKey,
    element: Element,
    base: BaseStats,
    ability_pool: Vec<(u32, AbilityKey)>,
    evolution: Option<EvolutionDef>,

    level: u32,
    health: f32,
    energy: f32,
    initiative: f32,
    xp: f32,
    xp_threshold: f32,

    /// One-turn damage-mitigation stance, cleared when the next turn begins.
    pub defending: bool,
    /// Frozen while another combatant resolves its turn.
    pub paused: bool,
}

impl Combatant {
    /// Creates a fresh combatant at full health and energy.
    ///
    /// Fails when the species key is unknown, a fatal misconfiguration
    /// surfaced during battle setup.
    pub fn new(
        species: impl Into<SpeciesKey>,
        level: u32,
        oracle: &dyn SpeciesOracle,
    ) -> Result<Self, OracleError> {
        let species = species.into();
        let def = oracle
            .species(&species)
            .ok_or_else(|| OracleError::UnknownSpecies(species.clone()))?;

        let level = level.max(1);
        let mut combatant = Self {
            species,
            element: def.element,
            base: def.stats,
            ability_pool: def.abilities.clone(),
            evolution: def.evolution.clone(),
            level,
            health: 0.0,
            energy: 0.0,
            initiative: 0.0,
            xp: 0.0,
            xp_threshold: level as f32 * XP_THRESHOLD_PER_LEVEL,
            defending: false,
            paused: false,
        };
        combatant.health = combatant.stat(StatKind::MaxHealth);
        combatant.energy = combatant.stat(StatKind::MaxEnergy);
        Ok(combatant)
    }

    pub fn species(&self) -> &SpeciesKey {
        &self.species
    }

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn energy(&self) -> f32 {
        self.energy
    }

    pub fn initiative(&self) -> f32 {
        self.initiative
    }

    pub fn xp(&self) -> f32 {
        self.xp
    }

    pub fn xp_threshold(&self) -> f32 {
        self.xp_threshold
    }

    /// Derived stat value at the current level.
    pub fn stat(&self, kind: StatKind) -> f32 {
        let base = match kind {
            StatKind::MaxHealth => self.base.max_health,
            StatKind::MaxEnergy => self.base.max_energy,
            StatKind::Attack => self.base.attack,
            StatKind::Defense => self.base.defense,
            StatKind::Recovery => self.base.recovery,
            StatKind::Speed => self.base.speed,
        };
        base * self.level as f32
    }

    /// Every derived stat at the current level, in declaration order.
    pub fn stats(&self) -> impl Iterator<Item = (StatKind, f32)> + '_ {
        StatKind::iter().map(|kind| (kind, self.stat(kind)))
    }

    pub fn max_health(&self) -> f32 {
        self.stat(StatKind::MaxHealth)
    }

    pub fn max_energy(&self) -> f32 {
        self.stat(StatKind::MaxEnergy)
    }

    pub fn is_fainted(&self) -> bool {
        self.health <= 0.0
    }

    /// Abilities unlocked at the current level, in unlock-then-insertion
    /// order. With `affordable_only`, abilities costing more than the
    /// current energy are filtered out.
    pub fn abilities(&self, oracle: &dyn AbilityOracle, affordable_only: bool) -> Vec<AbilityKey> {
        self.ability_pool
            .iter()
            .filter(|(unlock, _)| *unlock <= self.level)
            .filter(|(_, key)| {
                if !affordable_only {
                    return true;
                }
                oracle
                    .ability(key)
                    .is_some_and(|def| def.cost <= self.energy)
            })
            .map(|(_, key)| key.clone())
            .collect()
    }

    /// Every ability key in the species pool, locked entries included.
    /// Battle setup resolves all of them so a bad key cannot hide behind an
    /// unlock level and surface after a mid-battle level-up.
    pub fn known_abilities(&self) -> impl Iterator<Item = &AbilityKey> {
        self.ability_pool.iter().map(|(_, key)| key)
    }

    /// Deducts the ability's energy cost. May go transiently negative; the
    /// next tick clamps it back into range.
    pub fn spend_energy(&mut self, ability: &AbilityDef) {
        self.energy -= ability.cost;
    }

    /// Raw outgoing damage before elemental and defense scaling:
    /// `attack × ability multiplier`. Negative for heals.
    pub fn base_damage(&self, ability: &AbilityDef) -> f32 {
        self.stat(StatKind::Attack) * ability.amount
    }

    /// Applies a signed health change. Clamping happens on the next tick.
    pub fn apply_health_delta(&mut self, delta: f32) {
        self.health += delta;
    }

    /// Restores health and energy to their maximums.
    pub fn restore_full(&mut self) {
        self.health = self.max_health();
        self.energy = self.max_energy();
    }

    pub fn reset_initiative(&mut self) {
        self.initiative = 0.0;
    }

    /// Adds experience; returns true when a level was gained.
    ///
    /// Levels at most once per call: the remainder is carried forward but
    /// not re-checked against the new threshold. A very large one-time
    /// reward therefore under-levels rather than cascading.
    pub fn gain_xp(&mut self, amount: f32) -> bool {
        if self.xp_threshold - self.xp > amount {
            self.xp += amount;
            false
        } else {
            self.level += 1;
            self.xp = amount - (self.xp_threshold - self.xp);
            self.xp_threshold = self.level as f32 * XP_THRESHOLD_PER_LEVEL;
            true
        }
    }

    /// The evolution target, once the required level has been reached.
    pub fn evolution_due(&self) -> Option<&EvolutionDef> {
        self.evolution
            .as_ref()
            .filter(|evo| self.level >= evo.at_level)
    }

    /// Per-frame update: clamps pools into range and, while not paused,
    /// accrues initiative at `speed × dt`. Accumulation past the acting
    /// threshold is harmless; the scheduler checks `>=` and zeroes it.
    pub fn tick(&mut self, dt_secs: f32) {
        self.health = self.health.clamp(0.0, self.max_health());
        self.energy = self.energy.clamp(0.0, self.max_energy());
        if !self.paused {
            self.initiative += self.stat(StatKind::Speed) * dt_secs;
        }
    }
}
