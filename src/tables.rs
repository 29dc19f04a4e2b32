//! Reference data for cap resolution.
//!
//! Two read-only tables drive every cap: the base caps for each position
//! and the per-skill height multipliers. `CapTables::standard()` is the
//! built-in data set; `CapTables::from_json` loads a replacement.

use crate::error::{LookupError, TableError};
use crate::height::HeightBand;
use crate::position::Position;
use crate::scale::ScaleFactor;
use crate::skill::SkillId;
use crate::skill_table::{SkillCapTable, SkillTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unscaled caps per position.
pub type BaseCapTable = BTreeMap<Position, SkillCapTable>;

/// Per-skill multipliers per height band.
pub type HeightScalingTable = BTreeMap<HeightBand, SkillTable<ScaleFactor>>;

/// Highest cap or skill value.
pub const CAP_CEILING: u8 = 99;

// Label order: shooting, passing, dribbling, defense, rebounding, speed, vertical, stamina.
const STANDARD_BASE_CAPS: [(Position, [u8; SkillId::COUNT]); 5] = [
    (Position::PointGuard, [85, 90, 88, 75, 60, 88, 80, 85]),
    (Position::ShootingGuard, [90, 80, 83, 78, 65, 85, 78, 85]),
    (Position::SmallForward, [79, 80, 75, 82, 80, 73, 83, 85]),
    (Position::PowerForward, [70, 72, 70, 86, 85, 68, 82, 85]),
    (Position::Center, [65, 65, 65, 90, 90, 65, 85, 85]),
];

// Percentages, same skill order, one row per band from 5'0 to 7'2.
const STANDARD_HEIGHT_PERCENT: [[u16; SkillId::COUNT]; 27] = [
    [110, 110, 120, 80, 80, 120, 80, 100],    // 5'0
    [110, 110, 120, 80, 85, 120, 85, 100],    // 5'1
    [110, 110, 115, 85, 85, 115, 85, 100],    // 5'2
    [110, 110, 115, 85, 85, 115, 85, 100],    // 5'3
    [110, 110, 115, 85, 85, 115, 85, 100],    // 5'4
    [105, 105, 110, 90, 85, 110, 90, 100],    // 5'5
    [105, 105, 110, 90, 85, 110, 90, 100],    // 5'6
    [105, 105, 110, 90, 85, 110, 90, 100],    // 5'7
    [105, 105, 110, 90, 90, 110, 95, 100],    // 5'8
    [105, 105, 110, 90, 90, 110, 95, 100],    // 5'9
    [105, 105, 110, 90, 90, 110, 95, 100],    // 5'10
    [105, 105, 105, 95, 95, 110, 95, 100],    // 5'11
    [105, 105, 105, 95, 95, 110, 95, 100],    // 6'0
    [105, 100, 100, 100, 100, 100, 100, 100], // 6'1
    [100, 100, 100, 100, 100, 100, 100, 100], // 6'2
    [100, 100, 100, 105, 105, 95, 100, 100],  // 6'3
    [100, 100, 100, 105, 105, 95, 100, 100],  // 6'4
    [100, 100, 100, 110, 110, 90, 100, 100],  // 6'5
    [100, 100, 100, 110, 110, 90, 100, 100],  // 6'6
    [95, 95, 95, 115, 115, 85, 110, 100],     // 6'7
    [95, 95, 95, 115, 115, 85, 110, 100],     // 6'8
    [90, 90, 90, 120, 120, 80, 120, 100],     // 6'9
    [90, 90, 90, 120, 120, 80, 120, 100],     // 6'10
    [85, 85, 85, 125, 125, 75, 130, 100],     // 6'11
    [85, 85, 85, 125, 125, 75, 130, 100],     // 7'0
    [80, 80, 80, 130, 130, 70, 140, 100],     // 7'1
    [80, 80, 80, 130, 130, 70, 140, 100],     // 7'2
];

/// The pair of reference tables a [`CapResolver`](crate::CapResolver) reads.
///
/// Immutable once built. Tables loaded from configuration may cover only
/// some positions or heights; resolving a missing one is a
/// [`LookupError`].
///
/// # Examples
///
/// ```rust
/// use skillcap::{CapTables, Position, SkillId};
///
/// let tables = CapTables::standard();
/// assert_eq!(tables.base_caps(Position::Center).unwrap()[SkillId::Rebounding], 90);
///
/// let json = r#"{
///     "base_caps": {
///         "c": {"shooting": 60, "passing": 60, "dribbling": 60, "defense": 95,
///               "rebounding": 95, "speed": 60, "vertical": 80, "stamina": 80}
///     },
///     "height_scaling": {
///         "7'0": {"shooting": 0.9, "passing": 0.9, "dribbling": 0.9, "defense": 1.0,
///                 "rebounding": 1.0, "speed": 0.8, "vertical": 1.0, "stamina": 1.0}
///     }
/// }"#;
/// let custom = CapTables::from_json(json).unwrap();
/// assert!(custom.base_caps(Position::PointGuard).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapTables {
    base_caps: BaseCapTable,
    height_scaling: HeightScalingTable,
}

/// On-disk shape, before validation.
#[derive(Deserialize)]
struct RawCapTables {
    base_caps: BTreeMap<Position, SkillTable<u8>>,
    height_scaling: BTreeMap<HeightBand, SkillTable<f64>>,
}

impl CapTables {
    /// The built-in reference data covering every position and height.
    pub fn standard() -> Self {
        let base_caps = STANDARD_BASE_CAPS
            .iter()
            .map(|&(position, caps)| (position, SkillTable::from_values(caps)))
            .collect();
        let height_scaling = HeightBand::all()
            .zip(STANDARD_HEIGHT_PERCENT.iter())
            .map(|(height, row)| {
                (
                    height,
                    SkillTable::from_fn(|skill| ScaleFactor::from_percent(row[skill.index()])),
                )
            })
            .collect();
        Self {
            base_caps,
            height_scaling,
        }
    }

    /// Build from already typed tables, checking every base cap is at most 99.
    pub fn new(
        base_caps: BaseCapTable,
        height_scaling: HeightScalingTable,
    ) -> Result<Self, TableError> {
        for (&position, caps) in &base_caps {
            if let Some((skill, &value)) = caps.iter().find(|(_, v)| **v > CAP_CEILING) {
                return Err(TableError::InvalidBaseCap {
                    position,
                    skill,
                    value,
                });
            }
        }
        Ok(Self {
            base_caps,
            height_scaling,
        })
    }

    /// Load reference data from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let raw: RawCapTables = serde_json::from_str(json)?;

        let mut height_scaling = HeightScalingTable::new();
        for (height, row) in raw.height_scaling {
            let mut scales = SkillTable::splat(ScaleFactor::ONE);
            for (skill, &value) in row.iter() {
                scales[skill] = ScaleFactor::from_f64(value).ok_or(TableError::InvalidScale {
                    height,
                    skill,
                    value,
                })?;
            }
            height_scaling.insert(height, scales);
        }

        let tables = Self::new(raw.base_caps, height_scaling)?;
        tracing::debug!(
            positions = tables.base_caps.len(),
            heights = tables.height_scaling.len(),
            "loaded reference tables"
        );
        Ok(tables)
    }

    /// Serialize back to the JSON shape `from_json` reads.
    pub fn to_json(&self) -> Result<String, TableError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn base_caps(&self, position: Position) -> Result<&SkillCapTable, LookupError> {
        self.base_caps
            .get(&position)
            .ok_or(LookupError::MissingPosition(position))
    }

    pub fn height_scaling(
        &self,
        height: HeightBand,
    ) -> Result<&SkillTable<ScaleFactor>, LookupError> {
        self.height_scaling
            .get(&height)
            .ok_or(LookupError::MissingHeight(height))
    }

    /// Positions that have base caps, in order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.base_caps.keys().copied()
    }

    /// Heights that have scale factors, shortest first.
    pub fn heights(&self) -> impl Iterator<Item = HeightBand> + '_ {
        self.height_scaling.keys().copied()
    }
}

impl Default for CapTables {
    fn default() -> Self {
        Self::standard()
    }
}
