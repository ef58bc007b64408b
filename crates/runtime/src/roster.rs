//! Between-battle maintenance of the player party.

use battle_core::{Combatant, Party, SlotIndex};
use battle_core::env::{OracleError, SpeciesKey, SpeciesOracle};

/// Restores every party member to full health and energy (the nurse
/// interaction).
pub fn heal_party(party: &mut Party) {
    for (_, combatant) in party.iter_mut() {
        combatant.restore_full();
    }
    tracing::info!(members = party.len(), "party healed");
}

/// One completed evolution, for the host's evolution cutscene.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvolutionReport {
    pub slot: SlotIndex,
    pub from: SpeciesKey,
    pub into: SpeciesKey,
    pub level: u32,
}

/// Replaces every party member whose evolution level has been reached with
/// its evolved form at the same level, at full health and energy.
///
/// Accumulated experience toward the next level is not carried across the
/// species change.
pub fn check_evolutions(
    party: &mut Party,
    species: &dyn SpeciesOracle,
) -> Result<Vec<EvolutionReport>, OracleError> {
    let due: Vec<(SlotIndex, SpeciesKey, u32)> = party
        .iter()
        .filter_map(|(slot, combatant)| {
            combatant
                .evolution_due()
                .map(|evo| (slot, evo.into.clone(), combatant.level()))
        })
        .collect();

    let mut reports = Vec::with_capacity(due.len());
    for (slot, into, level) in due {
        let evolved = Combatant::new(into.clone(), level, species)?;
        if let Some(old) = party.get_mut(slot) {
            let from = old.species().clone();
            tracing::info!(%from, %into, level, "evolving party member");
            *old = evolved;
            reports.push(EvolutionReport {
                slot,
                from,
                into,
                level,
            });
        }
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_content::SpeciesCatalog;

    #[test]
    fn heal_party_tops_everyone_up() {
        let species = SpeciesCatalog::builtin();
        let mut party = Party::from_specs(&[("embercan", 5), ("capiblu", 7)], &species).unwrap();
        party.get_mut(0).unwrap().apply_health_delta(-100.0);
        party.get_mut(0).unwrap().tick(0.0);

        heal_party(&mut party);
        for (_, combatant) in party.iter() {
            assert_eq!(combatant.health(), combatant.max_health());
            assert_eq!(combatant.energy(), combatant.max_energy());
        }
    }

    #[test]
    fn evolution_swaps_species_and_keeps_the_level() {
        let species = SpeciesCatalog::builtin();
        // Capiblu evolves into earthshroud at level 28.
        let mut party = Party::from_specs(&[("capiblu", 28), ("embercan", 5)], &species).unwrap();

        let reports = check_evolutions(&mut party, &species).unwrap();
        assert_eq!(
            reports,
            vec![EvolutionReport {
                slot: 0,
                from: SpeciesKey::new("capiblu"),
                into: SpeciesKey::new("earthshroud"),
                level: 28,
            }]
        );
        let evolved = party.get(0).unwrap();
        assert_eq!(evolved.species(), &SpeciesKey::new("earthshroud"));
        assert_eq!(evolved.level(), 28);
        assert_eq!(evolved.health(), evolved.max_health());
        // The embercan is below its evolution level and stays put.
        assert_eq!(party.get(1).unwrap().species(), &SpeciesKey::new("embercan"));
    }

    #[test]
    fn no_evolutions_due_is_a_no_op() {
        let species = SpeciesCatalog::builtin();
        let mut party = Party::from_specs(&[("ignisblast", 40)], &species).unwrap();
        let reports = check_evolutions(&mut party, &species).unwrap();
        assert!(reports.is_empty());
    }
}
