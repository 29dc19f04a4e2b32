//! Validation results module.
//!
//! Contains the `Validation` type returned by every validation pass: the
//! corrected allocation, the status message (if any), and a breakdown of
//! each correction that was applied.

use crate::skill::SkillId;
use crate::skill_table::Allocation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The single status line shown to the user.
///
/// Not an error in the `Result` sense: the allocation is still usable
/// while a message is present. `Display` renders the exact user text.
///
/// # Examples
///
/// ```rust
/// use skillcap::{SkillId, ValidationMessage};
///
/// let msg = ValidationMessage::ExceedsCap { skill: SkillId::Shooting, cap: 85 };
/// assert_eq!(msg.to_string(), "Shooting exceeds skill cap of 85.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationMessage {
    /// A raw value was below 0 or above 99.
    OutOfRange,
    /// A value was above the skill's cap for the current build.
    ExceedsCap { skill: SkillId, cap: u8 },
    /// The sum of all skills is above the budget.
    OverBudget { budget: i32 },
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMessage::OutOfRange => f.write_str("Each skill must be between 0 and 99."),
            ValidationMessage::ExceedsCap { skill, cap } => {
                write!(f, "{} exceeds skill cap of {}.", skill.display_name(), cap)
            }
            ValidationMessage::OverBudget { budget } => {
                write!(f, "Total points must not exceed {budget}.")
            }
        }
    }
}

/// Why a value was changed during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentReason {
    /// Clamped into `0..=99`.
    Range,
    /// Clamped down to the skill cap.
    Cap,
    /// Clamped to the points left in the budget during a numeric edit.
    Budget,
}

/// One correction applied to one skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Adjustment {
    pub skill: SkillId,
    pub from: i32,
    pub to: i32,
    pub reason: AdjustmentReason,
}

/// The result of one validation pass.
///
/// # Examples
///
/// ```rust
/// use skillcap::{validate, Allocation, SkillCapTable};
///
/// let outcome = validate(&Allocation::splat(0), &SkillCapTable::splat(80));
/// assert!(outcome.is_clean());
/// assert_eq!(outcome.corrected, Allocation::splat(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    /// The allocation after range and cap clamping.
    pub corrected: Allocation,

    /// The most severe condition found, or `None` when everything holds.
    pub message: Option<ValidationMessage>,

    /// Every correction applied, in the order it was applied.
    pub adjustments: Vec<Adjustment>,
}

impl Validation {
    pub fn new(corrected: Allocation) -> Self {
        Self {
            corrected,
            message: None,
            adjustments: Vec::new(),
        }
    }

    /// Record a correction to the breakdown.
    pub fn add_adjustment(&mut self, skill: SkillId, from: i32, to: i32, reason: AdjustmentReason) {
        self.adjustments.push(Adjustment {
            skill,
            from,
            to,
            reason,
        });
    }

    /// `true` when no message was raised.
    pub fn is_clean(&self) -> bool {
        self.message.is_none()
    }

    /// Status text for display; empty when clean.
    pub fn status_text(&self) -> String {
        self.message.map(|m| m.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_text() {
        assert_eq!(
            ValidationMessage::OutOfRange.to_string(),
            "Each skill must be between 0 and 99."
        );
        assert_eq!(
            ValidationMessage::ExceedsCap {
                skill: SkillId::Rebounding,
                cap: 48
            }
            .to_string(),
            "Rebounding exceeds skill cap of 48."
        );
        assert_eq!(
            ValidationMessage::OverBudget { budget: 400 }.to_string(),
            "Total points must not exceed 400."
        );
    }

    #[test]
    fn test_breakdown_order() {
        let mut validation = Validation::new(Allocation::splat(0));
        validation.add_adjustment(SkillId::Speed, 120, 99, AdjustmentReason::Range);
        validation.add_adjustment(SkillId::Speed, 99, 88, AdjustmentReason::Cap);

        assert_eq!(validation.adjustments.len(), 2);
        assert_eq!(validation.adjustments[0].reason, AdjustmentReason::Range);
        assert_eq!(validation.adjustments[1].to, 88);
    }

    #[test]
    fn test_status_text() {
        let mut validation = Validation::new(Allocation::splat(0));
        assert_eq!(validation.status_text(), "");
        validation.message = Some(ValidationMessage::OverBudget { budget: 400 });
        assert!(!validation.is_clean());
        assert_eq!(validation.status_text(), "Total points must not exceed 400.");
    }

    #[test]
    fn test_message_serde() {
        let msg = ValidationMessage::ExceedsCap {
            skill: SkillId::Passing,
            cap: 72,
        };
        let json = serde_json::to_value(msg).unwrap();
        assert_eq!(json["kind"], "exceeds_cap");
        assert_eq!(json["skill"], "passing");
        assert_eq!(json["cap"], 72);
    }
}
