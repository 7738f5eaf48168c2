use thiserror::Error;

/// Contract violations raised by the game core.
///
/// Illegal cell clicks are not errors; they are ignored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Move index {requested} out of range (history has {len} entries)")]
    MoveOutOfRange { requested: usize, len: usize },
}

/// Convenience Result type for game operations
pub type Result<T> = std::result::Result<T, GameError>;
