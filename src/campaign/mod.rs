//! Linear scene script: party selection, two encounters and a path choice
//!
//! Each encounter builds a fresh session from the current party and takes
//! the party back afterwards, so damage carries between scenes.

pub mod story;

pub use story::{Beat, Path};

use serde::Serialize;

use crate::combat::{
    run_encounter, CombatSession, EncounterOutcome, EncounterReport, PlayerController,
    WeightedPolicy,
};
use crate::core::config::GameConfig;
use crate::core::error::{GameError, Result};
use crate::core::types::Side;
use crate::entity::roster::{CharacterEntry, StatTable};
use crate::entity::{EnemyCharacter, PlayerCharacter};

/// Largest party the player may field
pub const MAX_PARTY_SIZE: usize = 3;

/// Magic points granted by the storm on the meadows path
pub const MEADOWS_MAGIC_BONUS: i32 = 10;

const SCENE_ONE_ENEMIES: [&str; 1] = ["Viperstrike"];
const SCENE_TWO_ENEMIES: [&str; 1] = ["Doomshroud"];

/// Interactive front-end for the scene script
pub trait ScenePresenter: PlayerController {
    /// How many characters to field, between 1 and `max`
    fn choose_party_size(&mut self, max: usize) -> Result<usize>;

    /// Pick the `ordinal`-th party member (1-based) from what is still available
    ///
    /// Returns an index into `available`.
    fn choose_character(&mut self, ordinal: usize, available: &[CharacterEntry]) -> Result<usize>;

    fn choose_path(&mut self, paths: &[Path]) -> Result<Path>;

    fn show_beat(&mut self, beat: Beat) -> Result<()>;

    fn show_encounter_start(
        &mut self,
        party: &[PlayerCharacter],
        enemies: &[EnemyCharacter],
    ) -> Result<()>;

    fn show_encounter_result(&mut self, report: &EncounterReport) -> Result<()>;
}

/// How the campaign ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CampaignOutcome {
    Victory,
    Defeat,
    Retreated,
}

pub struct Campaign {
    table: StatTable,
    config: GameConfig,
    party: Vec<PlayerCharacter>,
    encounters: u64,
}

impl Campaign {
    pub fn new(table: StatTable, config: GameConfig) -> Self {
        Self {
            table,
            config,
            party: Vec::new(),
            encounters: 0,
        }
    }

    pub fn party(&self) -> &[PlayerCharacter] {
        &self.party
    }

    /// Play the whole script
    pub fn run(&mut self, presenter: &mut dyn ScenePresenter) -> Result<CampaignOutcome> {
        presenter.show_beat(Beat::Prologue)?;
        self.select_party(presenter)?;
        presenter.show_beat(Beat::PartyAssembled)?;

        presenter.show_beat(Beat::SceneOneIntro)?;
        match self.fight(presenter, &SCENE_ONE_ENEMIES)? {
            EncounterOutcome::PlayerWon => presenter.show_beat(Beat::SceneOneVictory)?,
            other => return self.end(presenter, other),
        }

        presenter.show_beat(Beat::SceneTwoIntro)?;
        let path = presenter.choose_path(&Path::ALL)?;
        tracing::info!(path = %path, "Path chosen");

        match path {
            Path::WhisperingCaverns => {
                for member in self.party.iter_mut().filter(|m| m.stats.is_alive()) {
                    member.restore_stats();
                }
                presenter.show_beat(Beat::CavernsRest)?;
            }
            Path::EnchantedMeadows => {
                for member in self.party.iter_mut().filter(|m| m.stats.is_alive()) {
                    member.magic_points += MEADOWS_MAGIC_BONUS;
                }
                presenter.show_beat(Beat::MeadowsStorm)?;
            }
            Path::MistyPeaks => {}
        }

        if path.has_encounter() {
            match self.fight(presenter, &SCENE_TWO_ENEMIES)? {
                EncounterOutcome::PlayerWon => presenter.show_beat(Beat::SecondVictory)?,
                other => return self.end(presenter, other),
            }
        }

        presenter.show_beat(Beat::PeaksCrossing)?;
        tracing::info!("Campaign won");
        Ok(CampaignOutcome::Victory)
    }

    /// Let the presenter pick distinct characters for the party
    pub fn select_party(&mut self, presenter: &mut dyn ScenePresenter) -> Result<()> {
        let mut available: Vec<CharacterEntry> = self.table.characters().to_vec();
        if available.is_empty() {
            return Err(GameError::EmptyRoster(Side::Player));
        }
        let max = MAX_PARTY_SIZE.min(available.len());
        let size = presenter.choose_party_size(max)?.clamp(1, max);

        self.party.clear();
        for ordinal in 1..=size {
            let index = presenter.choose_character(ordinal, &available)?;
            if index >= available.len() {
                return Err(GameError::UnknownCharacter(format!("#{}", index + 1)));
            }
            let entry = available.remove(index);
            self.party.push(self.table.character(&entry.name)?);
        }

        tracing::info!(
            party = ?self.party.iter().map(|p| p.stats.name.as_str()).collect::<Vec<_>>(),
            "Party selected"
        );
        Ok(())
    }

    /// Field the party against the named enemies
    fn fight(
        &mut self,
        presenter: &mut dyn ScenePresenter,
        enemy_names: &[&str],
    ) -> Result<EncounterOutcome> {
        let enemies = self.table.enemy_group(enemy_names)?;
        // the party is moved into the session, so it must not fail to start
        if self.party.is_empty() {
            return Err(GameError::EmptyRoster(Side::Player));
        }
        if !self.party.iter().any(|p| p.stats.is_alive()) {
            return Err(GameError::RosterDefeated(Side::Player));
        }
        if !enemies.iter().any(|e| e.stats.is_alive()) {
            return Err(GameError::RosterDefeated(Side::Enemy));
        }
        presenter.show_encounter_start(&self.party, &enemies)?;

        let mut session = CombatSession::new(std::mem::take(&mut self.party), enemies)?
            .with_config(self.config.combat.clone())
            .with_policy(WeightedPolicy::new(self.config.policy.clone()));
        if let Some(seed) = self.config.combat.seed {
            session = session.with_seed(seed.wrapping_add(self.encounters));
        }
        self.encounters += 1;

        let report = run_encounter(&mut session, &mut *presenter);
        let (party, _) = session.into_rosters();
        self.party = party;

        let report = report?;
        presenter.show_encounter_result(&report)?;
        Ok(report.outcome)
    }

    fn end(
        &self,
        presenter: &mut dyn ScenePresenter,
        outcome: EncounterOutcome,
    ) -> Result<CampaignOutcome> {
        if outcome == EncounterOutcome::Retreated {
            tracing::info!("Campaign abandoned");
            return Ok(CampaignOutcome::Retreated);
        }
        presenter.show_beat(Beat::Defeat)?;
        tracing::info!("Campaign lost");
        Ok(CampaignOutcome::Defeat)
    }
}
