//! Build session module.
//!
//! A `BuildSession` is the state one user edits: the chosen position and
//! height, the current caps and allocation, and the status line. Every
//! change runs a full recompute (caps, then validation) before returning,
//! and the result is pushed to a [`BuildView`] on [`BuildSession::refresh`].
//! The session owns its state outright; nothing is shared between sessions.

use crate::caps::CapResolver;
use crate::error::LookupError;
use crate::height::HeightBand;
use crate::position::Position;
use crate::skill::SkillId;
use crate::skill_table::{Allocation, SkillCapTable};
use crate::validation::ValidationMessage;
use crate::validator::{
    apply_numeric_edit, apply_slider_edit, validate, SliderOutcome, TOTAL_BUDGET,
};
use serde::Serialize;

/// Data for one bar-chart redraw: caps drawn behind the ratings, both in
/// label order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartFrame {
    pub labels: Vec<&'static str>,
    pub caps: Vec<u8>,
    pub ratings: Vec<i32>,
}

impl ChartFrame {
    pub fn new(caps: &SkillCapTable, allocation: &Allocation) -> Self {
        Self {
            labels: SkillId::ALL.iter().map(|s| s.display_name()).collect(),
            caps: caps.values().to_vec(),
            ratings: allocation.values().to_vec(),
        }
    }
}

/// The rendering collaborator a session pushes results into.
pub trait BuildView {
    /// Redraw the chart.
    fn render_chart(&mut self, frame: &ChartFrame);

    /// Replace the status line. `None` clears it.
    fn show_status(&mut self, message: Option<&ValidationMessage>);
}

/// One user's in-progress player build.
///
/// # Examples
///
/// ```rust
/// use skillcap::{BuildSession, CapResolver, HeightBand, Position, SkillId};
///
/// let mut session = BuildSession::new(
///     CapResolver::standard(),
///     Position::Center,
///     HeightBand::new(7, 2).unwrap(),
/// )
/// .unwrap();
///
/// session.edit_number(SkillId::Vertical, 99);
/// assert_eq!(session.allocation()[SkillId::Vertical], 99);
///
/// session.edit_number(SkillId::Speed, 60);
/// assert_eq!(session.allocation()[SkillId::Speed], 46);
/// assert_eq!(
///     session.status_text(),
///     "Speed exceeds skill cap of 46."
/// );
/// ```
#[derive(Debug, Clone)]
pub struct BuildSession {
    resolver: CapResolver,
    position: Position,
    height: HeightBand,
    caps: SkillCapTable,
    allocation: Allocation,
    message: Option<ValidationMessage>,
    dirty_chart: bool,
}

impl BuildSession {
    /// Start a session with every skill at 0.
    pub fn new(
        resolver: CapResolver,
        position: Position,
        height: HeightBand,
    ) -> Result<Self, LookupError> {
        let caps = resolver.resolve_caps(position, height)?;
        tracing::debug!(%position, %height, "build session started");
        Ok(Self {
            resolver,
            position,
            height,
            caps,
            allocation: Allocation::splat(0),
            message: None,
            dirty_chart: true,
        })
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn height(&self) -> HeightBand {
        self.height
    }

    pub fn caps(&self) -> &SkillCapTable {
        &self.caps
    }

    pub fn allocation(&self) -> &Allocation {
        &self.allocation
    }

    pub fn message(&self) -> Option<ValidationMessage> {
        self.message
    }

    /// The status line text; empty when there is no message.
    pub fn status_text(&self) -> String {
        self.message.map(|m| m.to_string()).unwrap_or_default()
    }

    /// Points still available under the budget. Negative when over.
    pub fn remaining_points(&self) -> i64 {
        i64::from(TOTAL_BUDGET) - self.allocation.total()
    }

    /// Change position, re-resolving caps and re-validating every skill.
    ///
    /// On a lookup failure the session is left exactly as it was.
    pub fn set_position(&mut self, position: Position) -> Result<(), LookupError> {
        self.recompute(position, self.height)
    }

    /// Change height, re-resolving caps and re-validating every skill.
    ///
    /// On a lookup failure the session is left exactly as it was.
    pub fn set_height(&mut self, height: HeightBand) -> Result<(), LookupError> {
        self.recompute(self.position, height)
    }

    /// Apply a value typed into a skill's number field.
    pub fn edit_number(&mut self, skill: SkillId, raw: i32) -> Option<ValidationMessage> {
        let validation = apply_numeric_edit(&self.allocation, &self.caps, skill, raw);
        self.allocation = validation.corrected;
        self.message = validation.message;
        self.dirty_chart = true;
        self.message
    }

    /// Apply a slider drag on a skill.
    pub fn drag_slider(&mut self, skill: SkillId, value: i32) -> Option<ValidationMessage> {
        let outcome = apply_slider_edit(&self.allocation, &self.caps, skill, value);
        if let SliderOutcome::Accepted(validation) = &outcome {
            self.allocation = validation.corrected;
            self.dirty_chart = true;
        }
        self.message = outcome.message();
        self.message
    }

    /// Replace the whole allocation, e.g. when restoring a build, and validate it.
    pub fn load_allocation(&mut self, allocation: Allocation) -> Option<ValidationMessage> {
        let validation = validate(&allocation, &self.caps);
        self.allocation = validation.corrected;
        self.message = validation.message;
        self.dirty_chart = true;
        self.message
    }

    /// Push the current state to the view.
    ///
    /// The status line is always updated. The chart is only redrawn after
    /// a change that left no message; while a message is showing the chart
    /// keeps its last clean frame.
    pub fn refresh(&mut self, view: &mut dyn BuildView) {
        view.show_status(self.message.as_ref());
        if self.message.is_none() && self.dirty_chart {
            view.render_chart(&self.chart_frame());
            self.dirty_chart = false;
        }
    }

    /// The chart data for the current state.
    pub fn chart_frame(&self) -> ChartFrame {
        ChartFrame::new(&self.caps, &self.allocation)
    }

    fn recompute(&mut self, position: Position, height: HeightBand) -> Result<(), LookupError> {
        let caps = self.resolver.resolve_caps(position, height)?;
        let validation = validate(&self.allocation, &caps);

        self.position = position;
        self.height = height;
        self.caps = caps;
        self.allocation = validation.corrected;
        self.message = validation.message;
        self.dirty_chart = true;
        Ok(())
    }
}
