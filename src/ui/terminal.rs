//! Line-based terminal front-end
//!
//! Generic over its input and output so scripted sessions can drive it
//! from a byte buffer.

use std::io::{BufRead, Write};

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

use crate::campaign::{Beat, Path, ScenePresenter};
use crate::combat::{
    ActionError, CombatSession, EncounterReport, PlayerAction, PlayerChoice, PlayerController,
};
use crate::core::error::{GameError, Result};
use crate::entity::roster::CharacterEntry;
use crate::entity::{Combatant, EnemyCharacter, PlayerCharacter};
use crate::ui::display::{ordinal, render_combat_screen, render_encounter_start, render_report};
use crate::ui::menu::Menu;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CombatCommand {
    Attack,
    Defend,
    Skill,
    Switch,
    Retreat,
}

pub struct TerminalUi<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> TerminalUi<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: true,
        }
    }

    /// Disable screen clearing (useful when output is piped or logged)
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn pause(&mut self) -> Result<()> {
        write!(self.output, "\nPress Enter to continue...")?;
        self.output.flush()?;
        self.read_line()?;
        Ok(())
    }

    /// Show a menu until the input resolves to one of its options
    pub fn prompt<T: Clone>(&mut self, menu: &Menu<T>) -> Result<T> {
        loop {
            writeln!(self.output, "{}", menu.render())?;
            write!(self.output, "> ")?;
            self.output.flush()?;
            let line = self.read_line()?;
            match menu.resolve(&line) {
                Some(tag) => return Ok(tag),
                None => writeln!(self.output, "Invalid choice \"{}\", try again.", line)?,
            }
        }
    }

    fn skill_menu(session: &CombatSession) -> Menu<Option<usize>> {
        let player = session.active_player();
        let mut menu = Menu::new(format!("{}'s Skills", player.stats.name));
        for (index, skill) in player.skills().enumerate() {
            menu.push(
                format!(
                    "{} (MP {}, SP {}): {}",
                    skill.name, skill.magic_points_cost, skill.speed_points_cost, skill.description
                ),
                Some(index),
            );
        }
        menu.option("Back", None)
    }

    fn switch_menu(session: &CombatSession) -> Menu<Option<usize>> {
        let mut menu = Menu::new("Switch Character");
        for (index, member) in session.players().iter().enumerate() {
            if index != session.active_player_index() && member.is_alive() {
                menu.push(format!("{} ({})", member.stats.name, member.job_class), Some(index));
            }
        }
        menu.option("Back", None)
    }
}

impl<R: BufRead, W: Write> PlayerController for TerminalUi<R, W> {
    fn choose_action(
        &mut self,
        session: &CombatSession,
        refusal: Option<&ActionError>,
    ) -> Result<PlayerChoice> {
        let top = Menu::new(format!("{}'s Turn", session.active_player().stats.name))
            .option("Attack", CombatCommand::Attack)
            .option("Defend", CombatCommand::Defend)
            .option("Use Skill", CombatCommand::Skill)
            .option("Switch Character", CombatCommand::Switch)
            .option("Retreat", CombatCommand::Retreat);

        let mut notice = refusal.map(ToString::to_string);
        loop {
            self.clear()?;
            writeln!(self.output, "{}\n", render_combat_screen(session))?;
            if let Some(notice) = notice.take() {
                writeln!(self.output, "{}\n", notice)?;
            }

            let action = match self.prompt(&top)? {
                CombatCommand::Attack => PlayerAction::Attack,
                CombatCommand::Defend => PlayerAction::Defend,
                CombatCommand::Retreat => return Ok(PlayerChoice::Retreat),
                CombatCommand::Skill => match self.prompt(&Self::skill_menu(session))? {
                    Some(index) => PlayerAction::UseSkill(index),
                    None => continue,
                },
                CombatCommand::Switch => {
                    let menu = Self::switch_menu(session);
                    if menu.len() == 1 {
                        notice = Some("Nobody else can fight.".to_string());
                        continue;
                    }
                    match self.prompt(&menu)? {
                        Some(index) => PlayerAction::SwitchCharacter(index),
                        None => continue,
                    }
                }
            };
            return Ok(PlayerChoice::Act(action));
        }
    }

    fn observe(&mut self, _session: &CombatSession, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> ScenePresenter for TerminalUi<R, W> {
    fn choose_party_size(&mut self, max: usize) -> Result<usize> {
        let mut menu = Menu::new("Choose Number of Playable Characters");
        for size in 1..=max {
            menu.push(size.to_string(), size);
        }
        self.prompt(&menu)
    }

    fn choose_character(&mut self, ordinal_number: usize, available: &[CharacterEntry]) -> Result<usize> {
        let mut menu = Menu::new(format!("Choose Your {} Character", ordinal(ordinal_number)));
        for (index, entry) in available.iter().enumerate() {
            menu.push(format!("{} ({})", entry.name, entry.job_class), index);
        }
        self.prompt(&menu)
    }

    fn choose_path(&mut self, paths: &[Path]) -> Result<Path> {
        let mut menu = Menu::new("Choose a Path");
        for path in paths {
            menu.push(path.label(), *path);
        }
        self.prompt(&menu)
    }

    fn show_beat(&mut self, beat: Beat) -> Result<()> {
        self.clear()?;
        writeln!(self.output, "{}", beat.text())?;
        self.pause()
    }

    fn show_encounter_start(
        &mut self,
        party: &[PlayerCharacter],
        enemies: &[EnemyCharacter],
    ) -> Result<()> {
        self.clear()?;
        writeln!(self.output, "{}", render_encounter_start(party, enemies))?;
        self.pause()
    }

    fn show_encounter_result(&mut self, report: &EncounterReport) -> Result<()> {
        writeln!(self.output, "\n{}", render_report(report))?;
        self.pause()
    }
}
