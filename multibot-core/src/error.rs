use thiserror::Error;

use crate::types::RunMode;

#[derive(Error, Debug)]
pub enum MultibotError {
    #[error("Invalid mode: '{0}'. Must be 'one' or 'multi'")]
    InvalidMode(String),

    #[error("Invalid bots: bots must be a non-empty list")]
    InvalidBotList,

    #[error("No main bot found: exactly one bot must be designated as main")]
    NoMainBot,

    #[error("Main bot already exists: only one bot can be designated as main")]
    DuplicateMainBot,

    #[error("Invalid bot token at index {index}: token must be a non-empty string")]
    InvalidToken { index: usize },

    #[error("Invalid id for bot at index {index}: id must be a positive integer")]
    InvalidId { index: usize },

    #[error("Duplicate bot id {id} at index {index}")]
    DuplicateId { index: usize, id: i64 },

    #[error("Failed to initialize bot {id}: {source}")]
    Initialization {
        id: i64,
        #[source]
        source: Box<MultibotError>,
    },

    #[error("Bot client error: {0}")]
    Client(String),

    #[error("This method is only available in '{required}' mode")]
    WrongMode { required: RunMode },

    #[error("Registry does not hold an initialized bot list")]
    UninitializedRegistry,
}

pub type Result<T> = std::result::Result<T, MultibotError>;
