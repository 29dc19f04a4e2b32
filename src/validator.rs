//! Allocation validator module.
//!
//! `validate` runs the full correction pass over an allocation:
//!
//! 1. clamp every value into `0..=99`
//! 2. clamp every value down to its skill cap
//! 3. check the total against the budget (reported, never corrected)
//!
//! Later steps take precedence for the status message, and within a step
//! the last skill in label order wins. The interactive rules used while a
//! single control is being edited live here too: numeric fields are held
//! to [`edit_bound`], sliders are rejected outright once the total would
//! reach the budget.

use crate::skill::SkillId;
use crate::skill_table::{Allocation, SkillCapTable};
use crate::validation::{Adjustment, AdjustmentReason, Validation, ValidationMessage};

/// Maximum sum of all eight skills.
pub const TOTAL_BUDGET: i32 = 400;

/// Lowest value any skill may hold.
pub const SKILL_MIN: i32 = 0;

/// Highest value any skill may hold.
pub const SKILL_MAX: i32 = 99;

/// Check and correct an allocation against a cap table.
///
/// Values outside `0..=99` are clamped into range and values above their
/// cap are clamped to the cap. An over-budget total is reported but the
/// values are left as they are.
///
/// # Examples
///
/// ```rust
/// use skillcap::{validate, Allocation, SkillCapTable, SkillId, ValidationMessage};
///
/// let mut alloc = Allocation::splat(0);
/// alloc[SkillId::Shooting] = 95;
/// let caps = SkillCapTable::splat(85);
///
/// let outcome = validate(&alloc, &caps);
/// assert_eq!(outcome.corrected[SkillId::Shooting], 85);
/// assert_eq!(
///     outcome.message,
///     Some(ValidationMessage::ExceedsCap { skill: SkillId::Shooting, cap: 85 })
/// );
/// ```
pub fn validate(allocation: &Allocation, caps: &SkillCapTable) -> Validation {
    let mut validation = Validation::new(*allocation);

    let mut range_message = None;
    for skill in SkillId::ALL {
        let raw = validation.corrected[skill];
        let clamped = raw.clamp(SKILL_MIN, SKILL_MAX);
        if clamped != raw {
            validation.corrected[skill] = clamped;
            validation.add_adjustment(skill, raw, clamped, AdjustmentReason::Range);
            range_message = Some(ValidationMessage::OutOfRange);
        }
    }

    let mut cap_message = None;
    for skill in SkillId::ALL {
        let value = validation.corrected[skill];
        let cap = i32::from(caps[skill]);
        if value > cap {
            validation.corrected[skill] = cap;
            validation.add_adjustment(skill, value, cap, AdjustmentReason::Cap);
            cap_message = Some(ValidationMessage::ExceedsCap {
                skill,
                cap: caps[skill],
            });
        }
    }

    let total = validation.corrected.total();
    let budget_message = (total > i64::from(TOTAL_BUDGET)).then_some(ValidationMessage::OverBudget {
        budget: TOTAL_BUDGET,
    });

    validation.message = budget_message.or(cap_message).or(range_message);
    tracing::debug!(
        total,
        adjustments = validation.adjustments.len(),
        message = ?validation.message,
        "validated allocation"
    );
    validation
}

/// The highest value `skill` may take while it is being edited directly:
/// `min(99, cap, 400 - sum_of_other_skills)`, never below 0.
///
/// # Examples
///
/// ```rust
/// use skillcap::{edit_bound, Allocation, SkillCapTable, SkillId};
///
/// let alloc = Allocation::from_values([80, 80, 80, 80, 50, 0, 0, 0]);
/// let caps = SkillCapTable::splat(90);
/// assert_eq!(edit_bound(&alloc, &caps, SkillId::Speed), 30);
/// assert_eq!(edit_bound(&alloc, &caps, SkillId::Rebounding), 80);
/// ```
pub fn edit_bound(allocation: &Allocation, caps: &SkillCapTable, skill: SkillId) -> i32 {
    let remaining = i64::from(TOTAL_BUDGET) - allocation.total_without(skill);
    let bound = remaining
        .min(i64::from(SKILL_MAX))
        .min(i64::from(caps[skill]))
        .max(i64::from(SKILL_MIN));
    // bounded by SKILL_MIN..=SKILL_MAX above
    bound as i32
}

/// Apply a direct numeric edit to one skill, then validate.
///
/// The typed value is first held to `0..=99` and to the points left in
/// the budget, silently, as an input field would. The regular validation
/// pass then clamps to the cap and reports it. The edited skill never ends
/// above [`edit_bound`], so a numeric edit can bring the total to exactly
/// 400 but not past it.
///
/// # Examples
///
/// ```rust
/// use skillcap::{apply_numeric_edit, Allocation, SkillCapTable, SkillId};
///
/// let alloc = Allocation::from_values([90, 90, 90, 90, 0, 0, 0, 0]);
/// let caps = SkillCapTable::splat(95);
///
/// let outcome = apply_numeric_edit(&alloc, &caps, SkillId::Rebounding, 75);
/// assert_eq!(outcome.corrected[SkillId::Rebounding], 40);
/// assert_eq!(outcome.corrected.total(), 400);
/// assert!(outcome.is_clean());
/// ```
pub fn apply_numeric_edit(
    allocation: &Allocation,
    caps: &SkillCapTable,
    skill: SkillId,
    raw: i32,
) -> Validation {
    let mut edited = *allocation;
    let mut pre_adjustments = Vec::new();

    let in_range = raw.clamp(SKILL_MIN, SKILL_MAX);
    if in_range != raw {
        pre_adjustments.push((raw, in_range, AdjustmentReason::Range));
    }

    let remaining = i64::from(TOTAL_BUDGET) - allocation.total_without(skill);
    let remaining = remaining.clamp(i64::from(SKILL_MIN), i64::from(SKILL_MAX)) as i32;
    let value = in_range.min(remaining);
    if value != in_range {
        pre_adjustments.push((in_range, value, AdjustmentReason::Budget));
    }
    edited[skill] = value;

    let mut validation = validate(&edited, caps);
    let mut adjustments: Vec<Adjustment> = pre_adjustments
        .into_iter()
        .map(|(from, to, reason)| Adjustment {
            skill,
            from,
            to,
            reason,
        })
        .collect();
    adjustments.append(&mut validation.adjustments);
    validation.adjustments = adjustments;
    validation
}

/// What happened to a slider drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliderOutcome {
    /// The change was kept and validated.
    Accepted(Validation),
    /// The change would have brought the total to the budget or beyond.
    /// The allocation is the one from before the drag.
    Rejected {
        kept: Allocation,
        message: ValidationMessage,
    },
}

impl SliderOutcome {
    /// The allocation the controls should now show.
    pub fn allocation(&self) -> &Allocation {
        match self {
            SliderOutcome::Accepted(validation) => &validation.corrected,
            SliderOutcome::Rejected { kept, .. } => kept,
        }
    }

    /// The status message to show, if any.
    pub fn message(&self) -> Option<ValidationMessage> {
        match self {
            SliderOutcome::Accepted(validation) => validation.message,
            SliderOutcome::Rejected { message, .. } => Some(*message),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, SliderOutcome::Accepted(_))
    }
}

/// Apply a slider drag to one skill.
///
/// Stricter than a numeric edit: if the new total would be 400 or more the
/// drag is rejected and the previous value stays. A slider therefore never
/// lands on a total of exactly 400.
///
/// # Examples
///
/// ```rust
/// use skillcap::{apply_slider_edit, Allocation, SkillCapTable, SkillId};
///
/// let alloc = Allocation::from_values([90, 90, 90, 90, 0, 0, 0, 0]);
/// let caps = SkillCapTable::splat(95);
///
/// let outcome = apply_slider_edit(&alloc, &caps, SkillId::Speed, 40);
/// assert!(!outcome.is_accepted());
/// assert_eq!(outcome.allocation()[SkillId::Speed], 0);
///
/// let outcome = apply_slider_edit(&alloc, &caps, SkillId::Speed, 39);
/// assert!(outcome.is_accepted());
/// assert_eq!(outcome.allocation().total(), 399);
/// ```
pub fn apply_slider_edit(
    allocation: &Allocation,
    caps: &SkillCapTable,
    skill: SkillId,
    value: i32,
) -> SliderOutcome {
    let mut moved = *allocation;
    moved[skill] = value.clamp(SKILL_MIN, SKILL_MAX);

    let total = moved.total();
    if total >= i64::from(TOTAL_BUDGET) {
        tracing::warn!(%skill, value, total, "slider change rejected: budget reached");
        return SliderOutcome::Rejected {
            kept: *allocation,
            message: ValidationMessage::OverBudget {
                budget: TOTAL_BUDGET,
            },
        };
    }

    SliderOutcome::Accepted(validate(&moved, caps))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps() -> SkillCapTable {
        SkillCapTable::from_values([85, 90, 88, 75, 60, 88, 80, 85])
    }

    #[test]
    fn test_clean_allocation_passes_through() {
        let alloc = Allocation::from_values([50, 50, 50, 50, 50, 50, 50, 50]);
        let outcome = validate(&alloc, &caps());
        assert_eq!(outcome.corrected, alloc);
        assert_eq!(outcome.message, None);
        assert!(outcome.adjustments.is_empty());
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let alloc = Allocation::from_values([-5, 0, 0, 0, 0, 0, 0, 0]);
        let outcome = validate(&alloc, &caps());
        assert_eq!(outcome.corrected[SkillId::Shooting], 0);
        assert_eq!(outcome.message, Some(ValidationMessage::OutOfRange));
        assert_eq!(
            outcome.adjustments,
            vec![Adjustment {
                skill: SkillId::Shooting,
                from: -5,
                to: 0,
                reason: AdjustmentReason::Range
            }]
        );
    }

    #[test]
    fn test_cap_message_supersedes_range() {
        // stamina is out of range, shooting is over cap; cap wins despite label order
        let alloc = Allocation::from_values([86, 0, 0, 0, 0, 0, 0, -1]);
        let outcome = validate(&alloc, &caps());
        assert_eq!(
            outcome.message,
            Some(ValidationMessage::ExceedsCap {
                skill: SkillId::Shooting,
                cap: 85
            })
        );
        assert_eq!(outcome.corrected[SkillId::Stamina], 0);
    }

    #[test]
    fn test_above_range_then_above_cap() {
        let alloc = Allocation::from_values([0, 0, 0, 0, 150, 0, 0, 0]);
        let outcome = validate(&alloc, &caps());
        assert_eq!(outcome.corrected[SkillId::Rebounding], 60);
        assert_eq!(outcome.adjustments.len(), 2);
        assert_eq!(outcome.adjustments[0].to, 99);
        assert_eq!(outcome.adjustments[1].to, 60);
    }

    #[test]
    fn test_last_cap_violation_wins() {
        let alloc = Allocation::from_values([99, 99, 0, 0, 0, 0, 0, 0]);
        let outcome = validate(&alloc, &caps());
        assert_eq!(
            outcome.message,
            Some(ValidationMessage::ExceedsCap {
                skill: SkillId::Passing,
                cap: 90
            })
        );
    }

    #[test]
    fn test_budget_reported_not_corrected() {
        let caps = SkillCapTable::splat(99);
        let alloc = Allocation::from_values([60, 60, 50, 50, 50, 50, 45, 45]);
        assert_eq!(alloc.total(), 410);
        let outcome = validate(&alloc, &caps);
        assert_eq!(outcome.corrected, alloc);
        assert_eq!(
            outcome.message,
            Some(ValidationMessage::OverBudget { budget: 400 })
        );
    }

    #[test]
    fn test_exactly_budget_is_clean() {
        let alloc = Allocation::from_values([50, 50, 50, 50, 50, 50, 50, 50]);
        let outcome = validate(&alloc, &SkillCapTable::splat(99));
        assert_eq!(outcome.corrected.total(), 400);
        assert!(outcome.is_clean());
    }

    #[test]
    fn test_edit_bound_never_negative() {
        let alloc = Allocation::splat(60); // 480 total
        assert_eq!(edit_bound(&alloc, &SkillCapTable::splat(99), SkillId::Speed), 0);
    }

    #[test]
    fn test_numeric_edit_clamps_silently_to_range() {
        let alloc = Allocation::splat(0);
        let outcome = apply_numeric_edit(&alloc, &SkillCapTable::splat(99), SkillId::Speed, 150);
        assert_eq!(outcome.corrected[SkillId::Speed], 99);
        assert!(outcome.is_clean());
        assert_eq!(outcome.adjustments[0].reason, AdjustmentReason::Range);
    }

    #[test]
    fn test_numeric_edit_reports_cap() {
        let alloc = Allocation::splat(0);
        let outcome = apply_numeric_edit(&alloc, &caps(), SkillId::Rebounding, 75);
        assert_eq!(outcome.corrected[SkillId::Rebounding], 60);
        assert_eq!(
            outcome.message,
            Some(ValidationMessage::ExceedsCap {
                skill: SkillId::Rebounding,
                cap: 60
            })
        );
    }

    #[test]
    fn test_numeric_edit_budget_clamp() {
        let alloc = Allocation::from_values([80, 80, 80, 70, 50, 0, 0, 0]);
        let outcome = apply_numeric_edit(&alloc, &caps(), SkillId::Speed, 88);
        assert_eq!(outcome.corrected[SkillId::Speed], 40);
        assert_eq!(outcome.corrected.total(), 400);
        assert!(outcome.is_clean());
        assert_eq!(
            outcome.adjustments,
            vec![Adjustment {
                skill: SkillId::Speed,
                from: 88,
                to: 40,
                reason: AdjustmentReason::Budget
            }]
        );
    }

    #[test]
    fn test_slider_rejects_at_budget() {
        let alloc = Allocation::from_values([80, 80, 80, 70, 50, 0, 0, 0]);
        let outcome = apply_slider_edit(&alloc, &caps(), SkillId::Speed, 40);
        assert_eq!(
            outcome,
            SliderOutcome::Rejected {
                kept: alloc,
                message: ValidationMessage::OverBudget { budget: 400 }
            }
        );
        assert_eq!(
            outcome.message().unwrap().to_string(),
            "Total points must not exceed 400."
        );
    }

    #[test]
    fn test_slider_accepts_below_budget_and_applies_cap() {
        let alloc = Allocation::splat(0);
        let outcome = apply_slider_edit(&alloc, &caps(), SkillId::Defense, 99);
        assert!(outcome.is_accepted());
        assert_eq!(outcome.allocation()[SkillId::Defense], 75);
        assert_eq!(
            outcome.message(),
            Some(ValidationMessage::ExceedsCap {
                skill: SkillId::Defense,
                cap: 75
            })
        );
    }
}
