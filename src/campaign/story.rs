//! Story beats and path choices

use std::fmt;

use serde::{Deserialize, Serialize};

/// Paths offered after the first encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Path {
    /// Rest in the caverns (full restore), then face Doomshroud
    WhisperingCaverns,
    /// Slip past the guardian; no fight
    MistyPeaks,
    /// Draw power from the storm (+magic), then face Doomshroud
    EnchantedMeadows,
}

impl Path {
    pub const ALL: [Path; 3] = [
        Path::WhisperingCaverns,
        Path::MistyPeaks,
        Path::EnchantedMeadows,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Path::WhisperingCaverns => "The Whispering Caverns",
            Path::MistyPeaks => "The Misty Peaks",
            Path::EnchantedMeadows => "The Enchanted Meadows",
        }
    }

    /// Whether the path leads into the second encounter
    pub fn has_encounter(&self) -> bool {
        !matches!(self, Path::MistyPeaks)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Narrative moments shown between encounters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Beat {
    Prologue,
    PartyAssembled,
    SceneOneIntro,
    SceneOneVictory,
    SceneTwoIntro,
    CavernsRest,
    MeadowsStorm,
    SecondVictory,
    PeaksCrossing,
    Defeat,
}

impl Beat {
    pub fn text(&self) -> &'static str {
        match self {
            Beat::Prologue => {
                "The Wildcat Cafe has gone quiet. Its keeper vanished into the wilds beyond \
                 the alley, and the strays whisper of a serpent guarding the road.\n\n\
                 Only a few brave cats will answer the call."
            }
            Beat::PartyAssembled => {
                "The party gathers at the cafe door, whiskers twitching. The road ahead is \
                 long and the night is falling."
            }
            Beat::SceneOneIntro => {
                "Halfway down the overgrown path a hiss splits the silence. Viperstrike \
                 uncoils from the brambles, fangs dripping."
            }
            Beat::SceneOneVictory => {
                "Viperstrike slithers away into the dark. The road is clear, for now."
            }
            Beat::SceneTwoIntro => {
                "The path forks three ways. Echoes drift from the caverns, mist crowns the \
                 peaks, and thunder rolls over the meadows."
            }
            Beat::CavernsRest => {
                "A cool spring bubbles in the caverns. The party drinks deep and their \
                 wounds close.\n\nThen the ground trembles. Doomshroud rises from the stone."
            }
            Beat::MeadowsStorm => {
                "Lightning dances across the meadows and crackles through every whisker. \
                 Magic surges in the party.\n\nFrom the storm steps Doomshroud."
            }
            Beat::SecondVictory => {
                "Doomshroud crumbles to dust. Beyond it the misty peaks glitter in the dawn."
            }
            Beat::PeaksCrossing => {
                "Over the misty peaks the party finds the keeper, safe and sound, brewing \
                 tea in a mountain hut. The Wildcat Cafe will open again.\n\nThe End."
            }
            Beat::Defeat => "The party falls. The cafe stays dark tonight...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_peaks_skip_the_fight() {
        let fights: Vec<bool> = Path::ALL.iter().map(|p| p.has_encounter()).collect();
        assert_eq!(fights, vec![true, false, true]);
    }

    #[test]
    fn test_every_beat_has_text() {
        for beat in [Beat::Prologue, Beat::Defeat, Beat::PeaksCrossing] {
            assert!(!beat.text().is_empty());
        }
    }
}
