//! Player positions.

use crate::error::LookupError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Court position, the first input to cap resolution.
///
/// Serialized as the short code (`"pg"`, `"c"`, ...). Parsing accepts
/// either the code or the full name, case-insensitively.
///
/// # Examples
///
/// ```rust
/// use skillcap::Position;
///
/// assert_eq!("sf".parse::<Position>().unwrap(), Position::SmallForward);
/// assert_eq!("Power Forward".parse::<Position>().unwrap(), Position::PowerForward);
/// assert_eq!(Position::Center.to_string(), "c");
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "pg")]
    PointGuard,
    #[serde(rename = "sg")]
    ShootingGuard,
    #[serde(rename = "sf")]
    SmallForward,
    #[serde(rename = "pf")]
    PowerForward,
    #[serde(rename = "c")]
    Center,
}

impl Position {
    /// All positions, guards first.
    pub const ALL: [Position; 5] = [
        Position::PointGuard,
        Position::ShootingGuard,
        Position::SmallForward,
        Position::PowerForward,
        Position::Center,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Position::PointGuard => "pg",
            Position::ShootingGuard => "sg",
            Position::SmallForward => "sf",
            Position::PowerForward => "pf",
            Position::Center => "c",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Position::PointGuard => "Point Guard",
            Position::ShootingGuard => "Shooting Guard",
            Position::SmallForward => "Small Forward",
            Position::PowerForward => "Power Forward",
            Position::Center => "Center",
        }
    }
}

impl FromStr for Position {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Position::ALL
            .into_iter()
            .find(|p| {
                p.code().eq_ignore_ascii_case(wanted) || p.display_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| LookupError::UnknownPosition(s.to_string()))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
