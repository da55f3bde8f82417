use thiserror::Error;

use super::{direction::Direction, roster::PlayerId};

#[derive(Error, Debug)]
pub enum PacError {
    #[error("No players")]
    NoPlayers,
    #[error("No sprite for direction {0}")]
    MissingSprite(Direction),
    #[error("Animation has no frames")]
    EmptyAnimation,
    #[error("Animation frame delay must be above zero")]
    ZeroFrameDelay,
    #[error("No such player {0}")]
    UnknownPlayer(PlayerId),
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, PacError>;
