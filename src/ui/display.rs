//! Plain-text rendering of the combat screen

use std::fmt::Write as _;

use crate::combat::{CombatSession, EncounterOutcome, EncounterReport};
use crate::entity::{EnemyCharacter, PlayerCharacter, StatBlock};

const BAR_LENGTH: usize = 20;
const FILLED: char = '█';
const EMPTY: char = '▒';
const COLUMN_WIDTH: usize = 40;

/// `██████▒▒▒▒ 30/50` style bar; current is capped at max
pub fn percentage_bar(current: i32, max: i32, length: usize) -> String {
    let current = current.min(max).max(0);
    let filled = if max > 0 {
        (length as i64 * current as i64 / max as i64) as usize
    } else {
        0
    };
    let mut bar: String = std::iter::repeat(FILLED).take(filled).collect();
    bar.extend(std::iter::repeat(EMPTY).take(length - filled));
    format!("{} {}/{}", bar, current, max)
}

/// 1st, 2nd, 3rd, 11th...
pub fn ordinal(number: usize) -> String {
    let suffix = if (11..=13).contains(&(number % 100)) {
        "th"
    } else {
        match number % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{}{}", number, suffix)
}

fn stat_lines(stats: &StatBlock) -> Vec<String> {
    vec![
        format!("Name: {}", stats.name),
        format!("HP: {}", percentage_bar(stats.health_points, stats.max_health_points, BAR_LENGTH)),
        format!("DP: {}", percentage_bar(stats.defense_points, stats.max_defense_points, BAR_LENGTH)),
        format!("Attack: {} Points", stats.attack_points),
        format!("Speed: {} Points", stats.speed_points),
        format!("Luck: {} Points", stats.luck),
    ]
}

/// Active player and enemy side by side, then player-only resources
pub fn render_duel(player: &PlayerCharacter, enemy: &EnemyCharacter) -> String {
    let mut out = String::new();
    for (left, right) in stat_lines(&player.stats).iter().zip(stat_lines(&enemy.stats)) {
        let pad = COLUMN_WIDTH.saturating_sub(left.chars().count());
        let _ = writeln!(out, "{}{}| {}", left, " ".repeat(pad), right);
    }
    let _ = writeln!(out, "Class: {}", player.job_class);
    let _ = writeln!(out, "Magic: {} Points", player.magic_points);
    let _ = write!(out, "Effects: {}", player.active_effects.names().join(", "));
    out
}

/// One line per party member; the active member is marked
pub fn render_party(party: &[PlayerCharacter], active: usize) -> String {
    party
        .iter()
        .enumerate()
        .map(|(index, member)| {
            let marker = if index == active { '>' } else { ' ' };
            let state = if member.stats.is_alive() {
                format!("HP {}/{}", member.stats.health_points, member.stats.max_health_points)
            } else {
                "defeated".to_string()
            };
            format!("{} {}. {} ({}) {}", marker, index + 1, member.stats.name, member.job_class, state)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full combat screen: duel, party overview and battle log
pub fn render_combat_screen(session: &CombatSession) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ROUND {}", session.round());
    let _ = writeln!(out, "{}", render_duel(session.active_player(), session.active_enemy()));
    let _ = writeln!(out);
    let _ = writeln!(out, "PARTY");
    let _ = writeln!(out, "{}", render_party(session.players(), session.active_player_index()));
    let _ = writeln!(out);
    let _ = writeln!(out, "COMBAT LOG");
    let _ = writeln!(out, "==========");
    for entry in session.battle_log().iter() {
        let _ = writeln!(out, "[R{}] {}", entry.round, entry.message);
    }
    let _ = write!(out, "==========");
    out
}

/// Banner shown before an encounter
pub fn render_encounter_start(party: &[PlayerCharacter], enemies: &[EnemyCharacter]) -> String {
    let names = |names: Vec<&str>| names.join(", ");
    format!(
        "*** COMBAT START ***\n{}\n        VS\n{}",
        names(party.iter().map(|p| p.stats.name.as_str()).collect()),
        names(enemies.iter().map(|e| e.stats.name.as_str()).collect()),
    )
}

pub fn render_report(report: &EncounterReport) -> String {
    let headline = match report.outcome {
        EncounterOutcome::PlayerWon => "VICTORY!",
        EncounterOutcome::EnemyWon => "DEFEAT...",
        EncounterOutcome::Retreated => "The party retreats.",
        EncounterOutcome::Unfinished => "The fight drags on.",
    };
    let survivors: Vec<&str> = report
        .party
        .iter()
        .filter(|m| m.alive)
        .map(|m| m.name.as_str())
        .collect();
    format!(
        "{} ({} rounds)\nStill standing: {}",
        headline,
        report.rounds,
        if survivors.is_empty() {
            "nobody".to_string()
        } else {
            survivors.join(", ")
        }
    )
}
