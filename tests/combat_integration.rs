//! Combat session integration tests
//!
//! End-to-end encounters through the public session API: quick wins, wipes,
//! refused skills and automatic switching after a defeat.

use catastrophe_chronicles::combat::{
    run_encounter, run_encounter_for, ActionError, AutoPilot, CombatSession, EncounterOutcome,
    EnemyAction, PlayerAction, ScriptedPolicy,
};
use catastrophe_chronicles::core::{BattleStatus, GameError, Side};
use catastrophe_chronicles::entity::{
    BaseStats, Combatant, EnemyCharacter, JobClass, PlayerCharacter, StatTable,
};
use catastrophe_chronicles::skills::EffectKind;

fn stats(health: i32, defense: i32, attack: i32, speed: i32) -> BaseStats {
    BaseStats {
        health,
        defense,
        attack,
        speed,
        luck: 0,
    }
}

fn always_attack() -> ScriptedPolicy {
    ScriptedPolicy::new(vec![EnemyAction::Attack])
}

/// A sturdy tank against a weak enemy wins with one attack
#[test]
fn test_tank_beats_weak_enemy() {
    let tank = PlayerCharacter::new("Whiskerwall", JobClass::Tank, stats(100, 20, 10, 5), 10);
    let rat = EnemyCharacter::new("Rat", stats(10, 0, 1, 1), None);
    let mut session = CombatSession::new(vec![tank], vec![rat])
        .unwrap()
        .with_seed(1)
        .with_policy(always_attack());

    assert_eq!(session.begin_round(), Ok(Side::Player));
    let line = session.player_attack().unwrap();
    assert_eq!(line, "Whiskerwall attacks Rat for 10 damage.");

    assert_eq!(session.status(), BattleStatus::PlayerWon);
    assert_eq!(session.enemies()[0].stats.health_points, 0);
    assert!(session
        .battle_log()
        .messages()
        .contains(&"Rat has been defeated by Whiskerwall!"));
}

/// Wiping the party ends the battle for the enemy and locks every command
#[test]
fn test_party_wipe_is_enemy_win() {
    let kitten = PlayerCharacter::new("Kitten", JobClass::Healer, stats(5, 0, 1, 1), 0);
    let brute = EnemyCharacter::new("Doomshroud", stats(100, 0, 50, 10), None);
    let mut session = CombatSession::new(vec![kitten], vec![brute])
        .unwrap()
        .with_seed(2)
        .with_policy(always_attack());

    let report = run_encounter(&mut session, &mut AutoPilot).unwrap();
    assert_eq!(report.outcome, EncounterOutcome::EnemyWon);
    assert_eq!(report.rounds, 1);
    assert_eq!(session.status(), BattleStatus::EnemyWon);

    assert_eq!(session.player_attack(), Err(ActionError::BattleOver));
    assert_eq!(session.player_defend(), Err(ActionError::BattleOver));
    assert_eq!(session.player_use_skill(0), Err(ActionError::BattleOver));
    assert_eq!(session.switch_player_character(None), Err(ActionError::BattleOver));
    assert_eq!(session.run_enemy_turn(), Err(ActionError::BattleOver));
}

/// When both sides fall on the same hit the enemy wins
#[test]
fn test_simultaneous_wipe_favours_enemy() {
    let mut mage = PlayerCharacter::new("Purrception", JobClass::MirrorMage, stats(5, 0, 1, 1), 0);
    mage.apply_effect(EffectKind::Reflect);
    let glass = EnemyCharacter::new("Glass Cannon", stats(10, 0, 20, 10), None);
    let mut session = CombatSession::new(vec![mage], vec![glass])
        .unwrap()
        .with_seed(3)
        .with_policy(always_attack());

    let line = session.run_enemy_turn().unwrap();
    assert!(line.contains("reflects 10 damage back"));
    assert!(!session.players()[0].is_alive());
    assert!(!session.enemies()[0].is_alive());
    assert_eq!(session.status(), BattleStatus::EnemyWon);
}

/// A skill the caster cannot pay for is refused without touching anything
#[test]
fn test_unaffordable_skill_refused() {
    let mut healer = PlayerCharacter::new("Meowdicine", JobClass::Healer, stats(100, 20, 8, 5), 25);
    healer.magic_points = 2;
    let viper = EnemyCharacter::new("Viperstrike", stats(120, 15, 14, 6), None);
    let mut session = CombatSession::new(vec![healer], vec![viper])
        .unwrap()
        .with_seed(4)
        .with_policy(always_attack());

    // Rejuvenate costs 5 magic points
    let refusal = session
        .apply_player_action(PlayerAction::UseSkill(1))
        .unwrap_err();
    assert_eq!(
        refusal,
        ActionError::NotEnoughMagic {
            skill: "Rejuvenate",
            required: 5,
            available: 2,
        }
    );
    assert!(refusal.to_string().starts_with("Not enough magic points!"));

    assert_eq!(session.active_player().magic_points, 2);
    assert_eq!(session.active_player().stats.speed_points, 5);
    assert_eq!(session.active_enemy().stats.health_points, 120);
    assert_eq!(session.active_enemy().stats.speed_points, 6);
    assert!(session.battle_log().is_empty());
    assert_eq!(session.status(), BattleStatus::Ongoing);
}

/// A defeated active member is replaced by the next living one in roster order
#[test]
fn test_auto_switch_skips_defeated() {
    let party = vec![
        PlayerCharacter::new("Shadowpaw", JobClass::Assassin, stats(1, 0, 18, 1), 12),
        PlayerCharacter::new("Fallen", JobClass::Tank, stats(0, 40, 10, 4), 10),
        PlayerCharacter::new("Meowdicine", JobClass::Healer, stats(100, 20, 8, 5), 25),
        PlayerCharacter::new("Whiskerwall", JobClass::Tank, stats(150, 40, 10, 4), 10),
    ];
    let viper = EnemyCharacter::new("Viperstrike", stats(120, 15, 14, 6), None);
    let mut session = CombatSession::new(party, vec![viper])
        .unwrap()
        .with_seed(5)
        .with_policy(always_attack());

    assert_eq!(session.begin_round(), Ok(Side::Enemy));
    session.run_enemy_turn().unwrap();

    assert_eq!(session.active_player_index(), 2);
    assert_eq!(session.active_player().stats.name, "Meowdicine");
    assert_eq!(session.players()[0].stats.health_points, 0);
    assert_eq!(session.status(), BattleStatus::Ongoing);
    assert_eq!(
        session.battle_log().messages(),
        vec![
            "Viperstrike attacks Shadowpaw for 1 damage.",
            "Shadowpaw has been defeated by Viperstrike!",
            "Active character switched from Shadowpaw to Meowdicine.",
        ]
    );

    // the defeated member can never be brought back in
    assert_eq!(
        session.switch_player_character(Some(0)),
        Err(ActionError::CharacterDefeated("Shadowpaw".into()))
    );
}

#[test]
fn test_rosters_returned_after_encounter() {
    let table = StatTable::builtin().unwrap();
    let party = table.party(&["Whiskerwall", "Meowdicine"]).unwrap();
    let enemies = table.enemy_group(&["Viperstrike"]).unwrap();
    let mut session = CombatSession::new(party, enemies).unwrap().with_seed(6);

    session.player_defend().unwrap();
    let (party, enemies) = session.into_rosters();
    assert_eq!(party.len(), 2);
    assert_eq!(party[0].stats.name, "Whiskerwall");
    assert_eq!(enemies[0].stats.name, "Viperstrike");
}

#[test]
fn test_construction_preconditions() {
    let rat = || EnemyCharacter::new("Rat", stats(10, 0, 1, 1), None);
    assert!(matches!(
        CombatSession::new(Vec::new(), vec![rat()]),
        Err(GameError::EmptyRoster(Side::Player))
    ));
    let fallen = PlayerCharacter::new("Fallen", JobClass::Tank, stats(0, 0, 1, 1), 0);
    assert!(matches!(
        CombatSession::new(vec![fallen], vec![rat()]),
        Err(GameError::RosterDefeated(Side::Player))
    ));
}

/// The built-in roster plays to a conclusion under the autopilot
#[test]
fn test_builtin_encounter_finishes() {
    let table = StatTable::builtin().unwrap();
    for seed in 0..5 {
        let party = table
            .party(&["Whiskerwall", "Purrception", "Meowdicine"])
            .unwrap();
        let enemies = table.enemy_group(&["Viperstrike", "Mistwalker"]).unwrap();
        let mut session = CombatSession::new(party, enemies).unwrap().with_seed(seed);
        let report = run_encounter_for(&mut session, &mut AutoPilot, Some(1_000)).unwrap();
        assert_ne!(report.outcome, EncounterOutcome::Unfinished);
        assert!(!session.status().is_ongoing());
        assert!(report.log.len() <= 5);
    }
}
