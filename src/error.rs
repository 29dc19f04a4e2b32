//! Error types for cap resolution and reference-table loading.
//!
//! Validation problems with an allocation are *not* errors; they are
//! reported as [`ValidationMessage`](crate::validation::ValidationMessage)
//! data. The types here cover the faults that stop a recomputation.

use crate::height::HeightBand;
use crate::position::Position;
use crate::skill::SkillId;
use thiserror::Error;

/// A position or height could not be found in the reference tables.
///
/// With the built-in tables this only happens when a caller hands in a
/// string that does not name a known category, or when a custom table
/// loaded from configuration leaves a category out. Either way the
/// recomputation has to be aborted: there is no cap table to work with.
///
/// # Examples
///
/// ```rust
/// use skillcap::LookupError;
///
/// let err = LookupError::UnknownPosition("goalie".to_string());
/// assert_eq!(err.to_string(), "Unknown position: goalie");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The string does not name a position.
    #[error("Unknown position: {0}")]
    UnknownPosition(String),

    /// The string does not name a height band between 5'0 and 7'2.
    #[error("Unknown height: {0}")]
    UnknownHeight(String),

    /// The string does not name a skill.
    #[error("Unknown skill: {0}")]
    UnknownSkill(String),

    /// The base cap table has no row for this position.
    #[error("No base caps for position: {0}")]
    MissingPosition(Position),

    /// The height scaling table has no row for this height.
    #[error("No height scaling for height: {0}")]
    MissingHeight(HeightBand),
}

/// Reference data loaded from configuration was rejected.
#[derive(Debug, Error)]
pub enum TableError {
    /// A base cap is above the 99 ceiling.
    #[error("Base cap for {position} {skill} is {value}, above the maximum of 99")]
    InvalidBaseCap {
        position: Position,
        skill: SkillId,
        value: u8,
    },

    /// A scale factor is negative, NaN or infinite.
    #[error("Scale factor for {height} {skill} must be a finite non-negative number, got {value}")]
    InvalidScale {
        height: HeightBand,
        skill: SkillId,
        value: f64,
    },

    /// The document is not valid JSON or does not match the table shape.
    #[error("Malformed reference tables: {0}")]
    Json(#[from] serde_json::Error),
}
