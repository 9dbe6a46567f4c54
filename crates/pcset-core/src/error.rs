//! Error types for pcset

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PcsetError {
    #[error("Cannot recognize a chord from an empty tone sequence")]
    EmptyTones,
    #[error("Unknown note name: {0:?}")]
    UnknownNoteName(String),
}

pub type Result<T> = std::result::Result<T, PcsetError>;
