//! Height bands.
//!
//! Heights are discretized to whole inches between 5'0" and 7'2"
//! inclusive, which gives 27 bands. A `HeightBand` can only be built
//! inside that range.

use crate::error::LookupError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A player height, rounded to the inch.
///
/// Written and parsed in feet-and-inches form (`6'2`, a trailing `"` is
/// accepted). Orders from shortest to tallest.
///
/// # Examples
///
/// ```rust
/// use skillcap::HeightBand;
///
/// let height: HeightBand = "6'11\"".parse().unwrap();
/// assert_eq!(height.feet(), 6);
/// assert_eq!(height.inches(), 11);
/// assert_eq!(height.to_string(), "6'11");
/// assert_eq!(HeightBand::all().count(), 27);
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeightBand(u8);

impl HeightBand {
    /// 5'0".
    pub const SHORTEST: HeightBand = HeightBand(60);
    /// 7'2".
    pub const TALLEST: HeightBand = HeightBand(86);

    /// Build a band from feet and inches. Returns `None` outside 5'0..=7'2
    /// or when `inches` is 12 or more.
    pub fn new(feet: u8, inches: u8) -> Option<Self> {
        if inches >= 12 {
            return None;
        }
        Self::from_total_inches(feet.checked_mul(12)?.checked_add(inches)?)
    }

    pub fn from_total_inches(total: u8) -> Option<Self> {
        (Self::SHORTEST.0..=Self::TALLEST.0)
            .contains(&total)
            .then_some(HeightBand(total))
    }

    pub fn total_inches(self) -> u8 {
        self.0
    }

    pub fn feet(self) -> u8 {
        self.0 / 12
    }

    pub fn inches(self) -> u8 {
        self.0 % 12
    }

    /// Every band from shortest to tallest.
    pub fn all() -> impl Iterator<Item = HeightBand> {
        (Self::SHORTEST.0..=Self::TALLEST.0).map(HeightBand)
    }
}

impl FromStr for HeightBand {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || LookupError::UnknownHeight(s.to_string());
        let trimmed = s.trim().trim_end_matches('"');
        let (feet, inches) = trimmed.split_once('\'').ok_or_else(unknown)?;
        let feet: u8 = feet.trim().parse().map_err(|_| unknown())?;
        let inches: u8 = inches.trim().parse().map_err(|_| unknown())?;
        HeightBand::new(feet, inches).ok_or_else(unknown)
    }
}

impl fmt::Display for HeightBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'{}", self.feet(), self.inches())
    }
}

impl Serialize for HeightBand {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HeightBand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
