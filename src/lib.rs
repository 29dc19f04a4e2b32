//! # skillcap - Skill Caps and Point Allocation for Player Builds
//!
//! A small, deterministic engine behind a basketball player builder:
//! - **Cap resolution**: position + height → per-skill maximums
//! - **Allocation validation**: keep eight skill values inside their
//!   range, their caps, and a shared 400-point budget
//! - **Session state**: an owned build that pushes chart data and a status
//!   line to whatever view renders it
//!
//! ## Core Concepts
//!
//! ### Recompute Pipeline
//!
//! Every edit runs one synchronous pass:
//!
//! ```text
//! [Position, HeightBand] → [CapResolver] → [SkillCapTable]
//!                                              ↓
//!                        [Allocation] → [validate] → [Validation]
//! ```
//!
//! 1. **Caps** are `min(99, round_half_up(base * height_scale))` per skill
//! 2. **Validation** clamps each value into `0..=99`, then to its cap, then
//!    checks the total against the budget
//! 3. **Validation** carries the corrected allocation, the status message
//!    and a breakdown of every correction
//!
//! Both steps are pure functions; state lives in a [`BuildSession`] owned
//! by the caller.
//!
//! ## Example
//!
//! ```rust
//! use skillcap::*;
//!
//! let caps = resolve_caps(Position::PointGuard, "5'0".parse().unwrap()).unwrap();
//! assert_eq!(caps[SkillId::Shooting], 94);
//!
//! let mut alloc = Allocation::splat(0);
//! alloc[SkillId::Rebounding] = 70;
//!
//! let outcome = validate(&alloc, &caps);
//! assert_eq!(outcome.corrected[SkillId::Rebounding], 48);
//! assert_eq!(outcome.status_text(), "Rebounding exceeds skill cap of 48.");
//! ```
//!
//! ## Modules
//!
//! - [`skill`] - Skill identifiers
//! - [`position`] - Court positions
//! - [`height`] - Height bands
//! - [`skill_table`] - Per-skill tables (caps, allocations)
//! - [`scale`] - Fixed-point height multipliers
//! - [`tables`] - Reference data
//! - [`caps`] - Cap resolver
//! - [`validation`] - Validation results
//! - [`validator`] - Validation and interactive edit rules
//! - [`session`] - Build session and view trait
//! - [`error`] - Error types

pub mod caps;
pub mod error;
pub mod height;
pub mod position;
pub mod scale;
pub mod session;
pub mod skill;
pub mod skill_table;
pub mod tables;
pub mod validation;
pub mod validator;

// Re-export main types for convenience
pub use caps::{resolve_caps, CapResolver};
pub use error::{LookupError, TableError};
pub use height::HeightBand;
pub use position::Position;
pub use scale::ScaleFactor;
pub use session::{BuildSession, BuildView, ChartFrame};
pub use skill::SkillId;
pub use skill_table::{Allocation, SkillCapTable, SkillTable};
pub use tables::{BaseCapTable, CapTables, HeightScalingTable, CAP_CEILING};
pub use validation::{Adjustment, AdjustmentReason, Validation, ValidationMessage};
pub use validator::{
    apply_numeric_edit, apply_slider_edit, edit_bound, validate, SliderOutcome, SKILL_MAX,
    SKILL_MIN, TOTAL_BUDGET,
};
