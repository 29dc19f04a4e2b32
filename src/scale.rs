//! Fixed-point height scale factors.
//!
//! Multipliers are stored as integers scaled by 10^4, so applying one to
//! a base cap and rounding half up is exact: `70 * 1.05` is `73.5`, never
//! a float a hair either side of it.

use serde::{Serialize, Serializer};
use std::fmt;

/// A non-negative multiplier with four decimal places.
///
/// # Examples
///
/// ```rust
/// use skillcap::ScaleFactor;
///
/// let scale = ScaleFactor::from_percent(110);
/// assert_eq!(scale.apply(85), 94); // 93.5 rounds up
///
/// let scale = ScaleFactor::from_f64(1.4).unwrap();
/// assert_eq!(scale.apply(85), 119);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScaleFactor {
    /// The multiplier scaled by `10^SCALE`.
    raw: u32,
}

impl ScaleFactor {
    /// Number of decimal places kept.
    pub const SCALE: u8 = 4;

    const DENOMINATOR: u32 = 10_u32.pow(Self::SCALE as u32);

    /// The identity multiplier.
    pub const ONE: ScaleFactor = ScaleFactor {
        raw: Self::DENOMINATOR,
    };

    /// Build from an already scaled integer (`12345` is `1.2345`).
    pub const fn from_raw(raw: u32) -> Self {
        Self { raw }
    }

    /// Build from a whole percentage (`105` is `1.05`).
    pub const fn from_percent(percent: u16) -> Self {
        Self {
            raw: percent as u32 * (Self::DENOMINATOR / 100),
        }
    }

    /// Build from an `f64`, rounding to four decimal places.
    ///
    /// Returns `None` for negative, NaN, infinite or absurdly large input.
    pub fn from_f64(f: f64) -> Option<Self> {
        if !f.is_finite() || f < 0.0 {
            return None;
        }
        let scaled = (f * f64::from(Self::DENOMINATOR)).round();
        (scaled <= f64::from(u32::MAX)).then(|| Self { raw: scaled as u32 })
    }

    pub fn raw(self) -> u32 {
        self.raw
    }

    pub fn to_f64(self) -> f64 {
        f64::from(self.raw) / f64::from(Self::DENOMINATOR)
    }

    /// Multiply `base` by this factor and round half up.
    pub fn apply(self, base: u8) -> u32 {
        let product = u64::from(base) * u64::from(self.raw);
        let half = u64::from(Self::DENOMINATOR / 2);
        let rounded = (product + half) / u64::from(Self::DENOMINATOR);
        // at most 255 * u32::MAX / 10^4, which fits
        rounded as u32
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.to_f64())
    }
}

impl Serialize for ScaleFactor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.to_f64())
    }
}
