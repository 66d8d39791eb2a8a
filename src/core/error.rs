use thiserror::Error;

use crate::combat::action::ActionError;
use crate::core::types::Side;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("The {0} roster is empty")]
    EmptyRoster(Side),

    #[error("Every member of the {0} roster is already defeated")]
    RosterDefeated(Side),

    #[error("Unknown character: {0}")]
    UnknownCharacter(String),

    #[error("Unknown job class: {0}")]
    UnknownClass(String),

    #[error("Unknown enemy technique: {0}")]
    UnknownTechnique(String),

    #[error("Duplicate roster entry: {0}")]
    DuplicateName(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Input stream closed")]
    InputClosed,

    #[error("Action refused: {0}")]
    Action(#[from] ActionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
