//! End-to-end battles through the driver, using the builtin catalogs.

use std::time::Duration;

use battle_core::env::{ContentEnv, PcgRng};
use battle_core::{
    BattleConfig, BattleEvent, BattleKind, BattleOutcome, InputFrame, Party, SelectionMode, Side,
};
use battle_content::{AbilityCatalog, SpeciesCatalog, TrainerCatalog};
use runtime::{BattleDriver, TrainerLedger, trainer_encounter};

const STEP: Duration = Duration::from_millis(50);
const FRAME_BUDGET: usize = 4000;

struct Fixture {
    species: SpeciesCatalog,
    abilities: AbilityCatalog,
    trainers: TrainerCatalog,
    rng: PcgRng,
}

impl Fixture {
    fn new() -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        Self {
            species: SpeciesCatalog::builtin(),
            abilities: AbilityCatalog::builtin(),
            trainers: TrainerCatalog::builtin(),
            rng: PcgRng,
        }
    }

    fn env(&self) -> ContentEnv<'_> {
        ContentEnv::new(&self.species, &self.abilities, &self.rng)
    }
}

/// Runs a battle to completion with a scripted player, returning every
/// event. `player_input` is consulted whenever the player menu is open.
fn run_battle(
    driver: &mut BattleDriver,
    env: &ContentEnv<'_>,
    player_input: impl Fn(SelectionMode) -> InputFrame,
) -> Vec<BattleEvent> {
    let mut all = Vec::new();
    for _ in 0..FRAME_BUDGET {
        let input = driver
            .render_state(env)
            .menu
            .map(|menu| player_input(menu.mode))
            .unwrap_or_default();
        all.extend(driver.update(STEP, input, env));
        if driver.is_over() {
            return all;
        }
    }
    panic!("battle did not finish within the frame budget");
}

#[test]
fn trainer_battle_to_victory_marks_the_trainer_defeated() {
    let fix = Fixture::new();
    let env = fix.env();

    let player = Party::from_specs(&[("ignisblast", 40)], &fix.species).unwrap();
    let encounter = trainer_encounter("o1", &fix.trainers, &fix.species).unwrap();
    assert_eq!(encounter.biome, "forest");

    let mut driver = BattleDriver::new(
        BattleKind::Trainer { id: "o1".into() },
        player,
        encounter.party,
        11,
        BattleConfig::default(),
        &env,
    )
    .unwrap();

    // Always attack: confirm through fight -> first ability -> first target.
    let events = run_battle(&mut driver, &env, |_| InputFrame::CONFIRM);

    assert!(events.iter().any(|e| matches!(
        e,
        BattleEvent::Fainted { side: Side::Opponent, .. }
    )));
    let (party, outcome) = driver.finish();
    let outcome = outcome.expect("battle ran to completion");
    assert_eq!(
        outcome,
        BattleOutcome::Victory {
            trainer: Some("o1".into())
        }
    );
    assert_eq!(party.get(0).unwrap().initiative(), 0.0);

    let mut ledger = TrainerLedger::new();
    if let BattleOutcome::Victory { trainer: Some(id) } = &outcome {
        ledger.mark_defeated(id.clone());
    }
    assert!(ledger.is_defeated("o1"));
}

#[test]
fn outmatched_player_party_is_defeated() {
    let fix = Fixture::new();
    let env = fix.env();

    let player = Party::from_specs(&[("embercan", 1)], &fix.species).unwrap();
    let encounter = trainer_encounter("o1", &fix.trainers, &fix.species).unwrap();

    let mut driver = BattleDriver::new(
        BattleKind::Trainer { id: "o1".into() },
        player,
        encounter.party,
        5,
        BattleConfig::default(),
        &env,
    )
    .unwrap();

    // Cower: pick the defend option every turn and let the level-14 side
    // grind the party down.
    let events = run_battle(&mut driver, &env, |mode| match mode {
        SelectionMode::General => InputFrame::DOWN | InputFrame::CONFIRM,
        _ => InputFrame::BACK,
    });

    assert!(events.contains(&BattleEvent::Ended(BattleOutcome::Defeat)));
    let (party, outcome) = driver.finish();
    assert_eq!(outcome, Some(BattleOutcome::Defeat));
    assert!(party.get(0).unwrap().is_fainted());
}
