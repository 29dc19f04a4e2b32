//! Cap resolver module.
//!
//! Provides `CapResolver`, which turns a position and a height into the
//! per-skill maximums for that build:
//!
//! ```text
//! cap = min(99, round_half_up(base_cap[position][skill] * scale[height][skill]))
//! ```
//!
//! Resolution is a pure function of its inputs and the reference tables.

use crate::error::LookupError;
use crate::height::HeightBand;
use crate::position::Position;
use crate::skill_table::{SkillCapTable, SkillTable};
use crate::tables::{CapTables, CAP_CEILING};
use std::sync::OnceLock;

/// Resolves skill caps against a set of reference tables.
///
/// # Examples
///
/// ```rust
/// use skillcap::{CapResolver, HeightBand, Position, SkillId};
///
/// let resolver = CapResolver::standard();
/// let height = HeightBand::new(5, 0).unwrap();
///
/// let caps = resolver.resolve_caps(Position::PointGuard, height).unwrap();
/// assert_eq!(caps[SkillId::Shooting], 94); // round(85 * 1.1)
/// ```
#[derive(Debug, Clone, Default)]
pub struct CapResolver {
    tables: CapTables,
}

impl CapResolver {
    /// Create a resolver over the given reference tables.
    pub fn new(tables: CapTables) -> Self {
        Self { tables }
    }

    /// Create a resolver over the built-in reference tables.
    pub fn standard() -> Self {
        Self::new(CapTables::standard())
    }

    pub fn tables(&self) -> &CapTables {
        &self.tables
    }

    /// Compute the cap table for a position and height.
    ///
    /// # Returns
    ///
    /// * `Ok(SkillCapTable)` - All eight caps, each in `0..=99`
    /// * `Err(LookupError)` - If either category has no row in the tables
    pub fn resolve_caps(
        &self,
        position: Position,
        height: HeightBand,
    ) -> Result<SkillCapTable, LookupError> {
        let base = self.tables.base_caps(position)?;
        let scale = self.tables.height_scaling(height)?;

        let caps: SkillCapTable = SkillTable::from_fn(|skill| {
            let scaled = scale[skill].apply(base[skill]);
            scaled.min(u32::from(CAP_CEILING)) as u8
        });

        tracing::debug!(%position, %height, caps = ?caps.values(), "resolved skill caps");
        Ok(caps)
    }

    /// Like [`resolve_caps`](Self::resolve_caps), taking the categories as
    /// the strings a form control would hold (`"pg"`, `"6'2"`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skillcap::{CapResolver, LookupError, SkillId};
    ///
    /// let resolver = CapResolver::standard();
    /// let caps = resolver.resolve_by_name("c", "7'2").unwrap();
    /// assert_eq!(caps[SkillId::Vertical], 99);
    ///
    /// let err = resolver.resolve_by_name("c", "8'0").unwrap_err();
    /// assert_eq!(err, LookupError::UnknownHeight("8'0".to_string()));
    /// ```
    pub fn resolve_by_name(
        &self,
        position: &str,
        height: &str,
    ) -> Result<SkillCapTable, LookupError> {
        self.resolve_caps(position.parse()?, height.parse()?)
    }
}

/// Resolve caps against the built-in reference tables.
///
/// The standard resolver is built once and shared.
///
/// # Examples
///
/// ```rust
/// use skillcap::{resolve_caps, HeightBand, Position, SkillId};
///
/// let caps = resolve_caps(Position::Center, HeightBand::new(6, 2).unwrap()).unwrap();
/// assert_eq!(caps[SkillId::Rebounding], 90);
/// ```
pub fn resolve_caps(position: Position, height: HeightBand) -> Result<SkillCapTable, LookupError> {
    static STANDARD: OnceLock<CapResolver> = OnceLock::new();
    STANDARD
        .get_or_init(CapResolver::standard)
        .resolve_caps(position, height)
}
