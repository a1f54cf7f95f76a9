//! Report collection steps.
//!
//! The dialogue is linear with one branch: `SelectingOperator` is entered
//! only when the requester reports on someone else's behalf. Every
//! non-terminal step except the first also carries a back edge that
//! re-renders the previous step's prompt.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The step a report conversation is currently waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStep {
    /// Picking the shift date from the today ± window keyboard.
    ChoosingDate,
    /// Picking one of the four fixed shifts.
    ChoosingShift,
    /// Picking a model from the sorted, deduplicated candidate list.
    ChoosingModel,
    /// Picking a survey belonging to the selected model.
    ChoosingSurvey,
    /// Deciding whether the report is for the requester or another operator.
    ConfirmingIdentity,
    /// Paging through and picking from the external operator list.
    SelectingOperator,
    /// Free-text entry of the START value.
    InputStart,
    /// Free-text entry of the FINISH value.
    InputFinish,
    /// Free-text entry of the signed adjustment value.
    InputDiff,
    /// Reviewing the summary before commit or full re-entry.
    Confirming,
}

impl ReportStep {
    /// Position in the canonical forward ordering.
    ///
    /// `ConfirmingIdentity` and `SelectingOperator` share the property that
    /// both precede `InputStart`; the operator branch slots between them.
    pub fn position(&self) -> usize {
        match self {
            ReportStep::ChoosingDate => 0,
            ReportStep::ChoosingShift => 1,
            ReportStep::ChoosingModel => 2,
            ReportStep::ChoosingSurvey => 3,
            ReportStep::ConfirmingIdentity => 4,
            ReportStep::SelectingOperator => 5,
            ReportStep::InputStart => 6,
            ReportStep::InputFinish => 7,
            ReportStep::InputDiff => 8,
            ReportStep::Confirming => 9,
        }
    }

    /// Returns the step a back event re-enters, if one exists.
    ///
    /// The first step has nowhere to go, and `Confirming` offers EDIT (a
    /// full reset) instead of a back edge. Both operator-related steps
    /// return to the survey choice, matching the keyboard the user came
    /// from; the numeric steps return to their immediate predecessor.
    pub fn back_target(&self) -> Option<ReportStep> {
        match self {
            ReportStep::ChoosingDate => None,
            ReportStep::ChoosingShift => Some(ReportStep::ChoosingDate),
            ReportStep::ChoosingModel => Some(ReportStep::ChoosingShift),
            ReportStep::ChoosingSurvey => Some(ReportStep::ChoosingModel),
            ReportStep::ConfirmingIdentity => Some(ReportStep::ChoosingSurvey),
            ReportStep::SelectingOperator => Some(ReportStep::ChoosingSurvey),
            ReportStep::InputStart => Some(ReportStep::ConfirmingIdentity),
            ReportStep::InputFinish => Some(ReportStep::InputStart),
            ReportStep::InputDiff => Some(ReportStep::InputFinish),
            ReportStep::Confirming => None,
        }
    }

    /// Returns true if this step consumes free-text input rather than a
    /// choice selection.
    pub fn expects_text(&self) -> bool {
        matches!(
            self,
            ReportStep::InputStart | ReportStep::InputFinish | ReportStep::InputDiff
        )
    }
}

impl Default for ReportStep {
    fn default() -> Self {
        ReportStep::ChoosingDate
    }
}

impl StateMachine for ReportStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ReportStep::*;
        match self {
            ChoosingDate => vec![ChoosingShift],
            ChoosingShift => vec![ChoosingModel],
            ChoosingModel => vec![ChoosingSurvey],
            ChoosingSurvey => vec![ConfirmingIdentity],
            // SELF skips the operator branch entirely.
            ConfirmingIdentity => vec![SelectingOperator, InputStart],
            SelectingOperator => vec![InputStart],
            InputStart => vec![InputFinish],
            InputFinish => vec![InputDiff],
            InputDiff => vec![Confirming],
            // EDIT restarts collection from the top.
            Confirming => vec![ChoosingDate],
        }
    }
}
