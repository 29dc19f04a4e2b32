//! Skill identifier module.
//!
//! Provides the `SkillId` enum. The eight skills are a closed set and are
//! carried as an enum end to end; the display name is a lookup on the
//! variant, never parsed back out of a string.

use crate::error::LookupError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight trainable skills.
///
/// Variant order is the chart label order. Validation walks skills in
/// this order, so when several skills produce a message the last one in
/// this order is the one reported.
///
/// # Examples
///
/// ```rust
/// use skillcap::SkillId;
///
/// let skill: SkillId = "rebounding".parse().unwrap();
/// assert_eq!(skill, SkillId::Rebounding);
/// assert_eq!(skill.display_name(), "Rebounding");
/// assert_eq!(SkillId::ALL[0], SkillId::Shooting);
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillId {
    Shooting,
    Passing,
    Dribbling,
    Defense,
    Rebounding,
    Speed,
    Vertical,
    Stamina,
}

impl SkillId {
    /// Number of skills.
    pub const COUNT: usize = 8;

    /// All skills in chart label order.
    pub const ALL: [SkillId; SkillId::COUNT] = [
        SkillId::Shooting,
        SkillId::Passing,
        SkillId::Dribbling,
        SkillId::Defense,
        SkillId::Rebounding,
        SkillId::Speed,
        SkillId::Vertical,
        SkillId::Stamina,
    ];

    /// Position of this skill in label order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase key, as used in configuration files.
    pub fn key(self) -> &'static str {
        match self {
            SkillId::Shooting => "shooting",
            SkillId::Passing => "passing",
            SkillId::Dribbling => "dribbling",
            SkillId::Defense => "defense",
            SkillId::Rebounding => "rebounding",
            SkillId::Speed => "speed",
            SkillId::Vertical => "vertical",
            SkillId::Stamina => "stamina",
        }
    }

    /// Capitalized name shown on chart labels and in status messages.
    pub fn display_name(self) -> &'static str {
        match self {
            SkillId::Shooting => "Shooting",
            SkillId::Passing => "Passing",
            SkillId::Dribbling => "Dribbling",
            SkillId::Defense => "Defense",
            SkillId::Rebounding => "Rebounding",
            SkillId::Speed => "Speed",
            SkillId::Vertical => "Vertical",
            SkillId::Stamina => "Stamina",
        }
    }
}

impl FromStr for SkillId {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SkillId::ALL
            .into_iter()
            .find(|skill| skill.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LookupError::UnknownSkill(s.to_string()))
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
