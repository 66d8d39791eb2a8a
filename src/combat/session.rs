//! Combat session - the turn resolver
//!
//! The session owns both rosters for the length of one encounter. Every
//! mutation goes through its commands; each accepted command logs a line,
//! regenerates the idle side and resolves casualties before returning.
//!
//! Switching the active player character counts as the player's turn, so
//! the idle enemy regenerates afterwards.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::combat::action::{ActionError, EnemyAction, PlayerAction};
use crate::combat::log::BattleLog;
use crate::combat::policy::{EnemyPolicy, WeightedPolicy};
use crate::core::config::CombatConfig;
use crate::core::error::{GameError, Result};
use crate::core::types::{BattleStatus, Side};
use crate::entity::{Combatant, EnemyCharacter, PlayerCharacter};

/// Outcome of a single command: the log line, or the reason it was refused
pub type ActionResult = std::result::Result<String, ActionError>;

pub struct CombatSession {
    players: Vec<PlayerCharacter>,
    enemies: Vec<EnemyCharacter>,
    active_player: usize,
    active_enemy: usize,
    turn: Option<Side>,
    round: u32,
    status: BattleStatus,
    battle_log: BattleLog,
    config: CombatConfig,
    policy: Box<dyn EnemyPolicy>,
    rng: ChaCha8Rng,
}

impl CombatSession {
    /// Start an encounter with the first living member of each roster active
    pub fn new(players: Vec<PlayerCharacter>, enemies: Vec<EnemyCharacter>) -> Result<Self> {
        if players.is_empty() {
            return Err(GameError::EmptyRoster(Side::Player));
        }
        if enemies.is_empty() {
            return Err(GameError::EmptyRoster(Side::Enemy));
        }
        let active_player = first_living(&players, None).ok_or(GameError::RosterDefeated(Side::Player))?;
        let active_enemy = first_living(&enemies, None).ok_or(GameError::RosterDefeated(Side::Enemy))?;

        let config = CombatConfig::default();
        tracing::info!(
            player = %players[active_player].stats.name,
            enemy = %enemies[active_enemy].stats.name,
            party = players.len(),
            foes = enemies.len(),
            "Encounter started"
        );

        Ok(Self {
            players,
            enemies,
            active_player,
            active_enemy,
            turn: None,
            round: 0,
            status: BattleStatus::Ongoing,
            battle_log: BattleLog::with_capacity(config.battle_log_capacity),
            policy: Box::new(WeightedPolicy::default()),
            rng: ChaCha8Rng::from_entropy(),
            config,
        })
    }

    /// Seed crit rolls, enemy choices and speed ties
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    /// Apply session configuration; a configured seed reseeds the RNG
    pub fn with_config(mut self, config: CombatConfig) -> Self {
        if let Some(seed) = config.seed {
            self.rng = ChaCha8Rng::seed_from_u64(seed);
        }
        let mut log = BattleLog::with_capacity(config.battle_log_capacity);
        for entry in self.battle_log.iter() {
            log.push(entry.round, entry.message.clone());
        }
        self.battle_log = log;
        self.config = config;
        self
    }

    pub fn with_policy(mut self, policy: impl EnemyPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn status(&self) -> BattleStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        !self.status.is_ongoing()
    }

    /// Side holding the current round, `None` before the first round
    pub fn turn(&self) -> Option<Side> {
        self.turn
    }

    /// Number of rounds begun so far
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn active_player(&self) -> &PlayerCharacter {
        &self.players[self.active_player]
    }

    pub fn active_player_index(&self) -> usize {
        self.active_player
    }

    pub fn active_enemy(&self) -> &EnemyCharacter {
        &self.enemies[self.active_enemy]
    }

    pub fn active_enemy_index(&self) -> usize {
        self.active_enemy
    }

    pub fn players(&self) -> &[PlayerCharacter] {
        &self.players
    }

    pub fn enemies(&self) -> &[EnemyCharacter] {
        &self.enemies
    }

    pub fn battle_log(&self) -> &BattleLog {
        &self.battle_log
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Hand the rosters back once the encounter is done
    pub fn into_rosters(self) -> (Vec<PlayerCharacter>, Vec<EnemyCharacter>) {
        (self.players, self.enemies)
    }

    // ------------------------------------------------------------------
    // Round flow
    // ------------------------------------------------------------------

    /// Faster active member acts; a tie is settled by a coin flip
    pub fn determine_turn_order(&mut self) -> Side {
        let player_speed = self.players[self.active_player].stats.speed_points;
        let enemy_speed = self.enemies[self.active_enemy].stats.speed_points;

        if player_speed > enemy_speed {
            Side::Player
        } else if enemy_speed > player_speed {
            Side::Enemy
        } else if self.coin_flip() {
            Side::Player
        } else {
            Side::Enemy
        }
    }

    fn coin_flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// Open the next round and decide who acts in it
    ///
    /// Call once per round; a refused player action is retried within the
    /// same round.
    pub fn begin_round(&mut self) -> std::result::Result<Side, ActionError> {
        self.ensure_ongoing()?;
        self.round += 1;
        let side = self.determine_turn_order();
        self.turn = Some(side);
        tracing::debug!(round = self.round, side = %side, "Round begins");
        Ok(side)
    }

    // ------------------------------------------------------------------
    // Player commands
    // ------------------------------------------------------------------

    pub fn apply_player_action(&mut self, action: PlayerAction) -> ActionResult {
        match action {
            PlayerAction::Attack => self.player_attack(),
            PlayerAction::Defend => self.player_defend(),
            PlayerAction::UseSkill(index) => self.player_use_skill(index),
            PlayerAction::SwitchCharacter(index) => self.switch_player_character(Some(index)),
        }
    }

    pub fn player_attack(&mut self) -> ActionResult {
        self.ensure_ongoing()?;
        let player = &mut self.players[self.active_player];
        let enemy = &mut self.enemies[self.active_enemy];
        let line = player.basic_attack(enemy, &mut self.rng);
        Ok(self.finish_turn(Side::Player, line))
    }

    pub fn player_defend(&mut self) -> ActionResult {
        self.ensure_ongoing()?;
        let line = self.players[self.active_player].defend();
        Ok(self.finish_turn(Side::Player, line))
    }

    /// Use a skill of the active character
    ///
    /// Both costs are checked before anything changes; a refusal consumes
    /// no turn and writes nothing to the battle log.
    pub fn player_use_skill(&mut self, index: usize) -> ActionResult {
        self.ensure_ongoing()?;
        let player = &mut self.players[self.active_player];
        let skill = player.skill(index).ok_or(ActionError::InvalidSkill(index))?;

        if let Err(refusal) = skill.check_affordable(player.magic_points, player.stats.speed_points) {
            tracing::warn!(character = %player.stats.name, skill = skill.name, %refusal, "Skill refused");
            return Err(refusal);
        }

        player.magic_points -= skill.magic_points_cost;
        player.stats.speed_points -= skill.speed_points_cost;
        let enemy = &mut self.enemies[self.active_enemy];
        let line = skill.apply(player, enemy, &mut self.rng);
        Ok(self.finish_turn(Side::Player, line))
    }

    /// Make another party member active
    ///
    /// `None` picks the first living member other than the active one.
    /// The switch takes the player's turn.
    pub fn switch_player_character(&mut self, index: Option<usize>) -> ActionResult {
        self.ensure_ongoing()?;
        let current = self.active_player;
        let target = match index {
            Some(index) => {
                let candidate = self
                    .players
                    .get(index)
                    .ok_or(ActionError::InvalidCharacter(index))?;
                if !candidate.is_alive() {
                    return Err(ActionError::CharacterDefeated(candidate.stats.name.clone()));
                }
                if index == current {
                    return Err(ActionError::AlreadyActive(candidate.stats.name.clone()));
                }
                index
            }
            None => first_living(&self.players, Some(current)).ok_or_else(|| {
                ActionError::AlreadyActive(self.players[current].stats.name.clone())
            })?,
        };

        let line = self.activate(Side::Player, target);
        Ok(self.finish_turn(Side::Player, line))
    }

    // ------------------------------------------------------------------
    // Enemy commands
    // ------------------------------------------------------------------

    /// Let the policy pick an action for the active enemy and resolve it
    pub fn run_enemy_turn(&mut self) -> ActionResult {
        self.ensure_ongoing()?;
        let choice = self.policy.select_action(
            &self.enemies[self.active_enemy],
            &self.players[self.active_player],
            &mut self.rng,
        );

        let enemy = &mut self.enemies[self.active_enemy];
        let player = &mut self.players[self.active_player];
        let line = match choice {
            EnemyAction::Defend => enemy.defend(),
            EnemyAction::Technique => match enemy.technique() {
                Some(technique) if technique.check_affordable(0, enemy.stats.speed_points).is_ok() => {
                    enemy.stats.speed_points -= technique.speed_points_cost;
                    technique.apply(enemy, player, &mut self.rng)
                }
                _ => {
                    tracing::debug!(enemy = %enemy.stats.name, "Technique unavailable, attacking instead");
                    enemy.basic_attack(player, &mut self.rng)
                }
            },
            EnemyAction::Attack => enemy.basic_attack(player, &mut self.rng),
        };
        Ok(self.finish_turn(Side::Enemy, line))
    }

    /// Make the first living enemy other than the active one active
    ///
    /// Unlike the player switch this is a roster operation and takes no turn.
    pub fn switch_enemy_character(&mut self) -> ActionResult {
        self.ensure_ongoing()?;
        let current = self.active_enemy;
        let target = first_living(&self.enemies, Some(current)).ok_or_else(|| {
            ActionError::AlreadyActive(self.enemies[current].stats.name.clone())
        })?;
        let line = self.activate(Side::Enemy, target);
        self.battle_log.push(self.round, line.clone());
        Ok(line)
    }

    /// Passive regeneration for the active member of the idle side
    ///
    /// +speed, defense re-floored at 0, and for players +magic and a tick
    /// of their round-based effects.
    pub fn update_idle_character_stats(&mut self, side: Side) -> ActionResult {
        self.ensure_ongoing()?;
        let name = match side {
            Side::Player => self.players[self.active_player].stats.name.clone(),
            Side::Enemy => self.enemies[self.active_enemy].stats.name.clone(),
        };
        let line = match self.regenerate(side) {
            Some(tick) => {
                self.battle_log.push(self.round, tick.clone());
                tick
            }
            None => format!("{} catches their breath.", name),
        };
        self.resolve_casualties();
        Ok(line)
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn ensure_ongoing(&self) -> std::result::Result<(), ActionError> {
        if self.status.is_ongoing() {
            Ok(())
        } else {
            Err(ActionError::BattleOver)
        }
    }

    /// Log an accepted action, regenerate the idle side, resolve casualties
    fn finish_turn(&mut self, actor: Side, line: String) -> String {
        tracing::debug!(round = self.round, side = %actor, action = %line, "Action resolved");
        self.battle_log.push(self.round, line.clone());
        if let Some(tick) = self.regenerate(actor.opponent()) {
            self.battle_log.push(self.round, tick);
        }
        self.resolve_casualties();
        line
    }

    fn regenerate(&mut self, side: Side) -> Option<String> {
        match side {
            Side::Player => {
                let player = &mut self.players[self.active_player];
                player.stats.speed_points += self.config.speed_regen;
                player.stats.defense_points = player.stats.defense_points.max(0);
                player.magic_points += self.config.magic_regen;
                player.tick_effects()
            }
            Side::Enemy => {
                let enemy = &mut self.enemies[self.active_enemy];
                enemy.stats.speed_points += self.config.speed_regen;
                enemy.stats.defense_points = enemy.stats.defense_points.max(0);
                None
            }
        }
    }

    fn activate(&mut self, side: Side, index: usize) -> String {
        let (from, to) = match side {
            Side::Player => {
                let from = std::mem::replace(&mut self.active_player, index);
                (
                    self.players[from].stats.name.clone(),
                    self.players[index].stats.name.clone(),
                )
            }
            Side::Enemy => {
                let from = std::mem::replace(&mut self.active_enemy, index);
                (
                    self.enemies[from].stats.name.clone(),
                    self.enemies[index].stats.name.clone(),
                )
            }
        };
        tracing::debug!(side = %side, from = %from, to = %to, "Active character switched");
        format!("Active character switched from {} to {}.", from, to)
    }

    /// Floor defeated active members, bring in replacements, update status
    fn resolve_casualties(&mut self) {
        let player_name = self.players[self.active_player].stats.name.clone();
        let enemy_name = self.enemies[self.active_enemy].stats.name.clone();

        if !self.players[self.active_player].is_alive() {
            self.players[self.active_player].stats.mark_defeated();
            tracing::info!(character = %player_name, by = %enemy_name, "Player character defeated");
            self.battle_log.push(
                self.round,
                format!("{} has been defeated by {}!", player_name, enemy_name),
            );
            if let Some(next) = first_living(&self.players, None) {
                let line = self.activate(Side::Player, next);
                self.battle_log.push(self.round, line);
            }
        }

        if !self.enemies[self.active_enemy].is_alive() {
            self.enemies[self.active_enemy].stats.mark_defeated();
            tracing::info!(enemy = %enemy_name, by = %player_name, "Enemy defeated");
            self.battle_log.push(
                self.round,
                format!("{} has been defeated by {}!", enemy_name, player_name),
            );
            if let Some(next) = first_living(&self.enemies, None) {
                let line = self.activate(Side::Enemy, next);
                self.battle_log.push(self.round, line);
            }
        }

        self.status = if first_living(&self.players, None).is_none() {
            BattleStatus::EnemyWon
        } else if first_living(&self.enemies, None).is_none() {
            BattleStatus::PlayerWon
        } else {
            BattleStatus::Ongoing
        };

        if !self.status.is_ongoing() {
            tracing::info!(status = ?self.status, rounds = self.round, "Encounter ended");
        }
    }
}

/// First living member in roster order, optionally skipping one index
fn first_living<C: Combatant>(roster: &[C], skip: Option<usize>) -> Option<usize> {
    roster
        .iter()
        .enumerate()
        .find(|(index, member)| Some(*index) != skip && member.is_alive())
        .map(|(index, _)| index)
}
