use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum GameError {
    #[error("unknown player: {0}")]
    UnknownPlayer(String),
}
