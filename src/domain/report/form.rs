//! Mutable per-conversation state.
//!
//! One `Conversation` exists per active requester dialogue, owned by it
//! exclusively and mutated only through the engine. The transport keys
//! conversations by its own session identifier and never shares one
//! between requesters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConversationId, MessageId};

use super::shift::Shift;
use super::step::ReportStep;

/// Who the report is filed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "name")]
pub enum Identity {
    /// The requester themselves, resolved from their profile at selection time.
    Requester(String),
    /// An operator picked from the externally supplied list.
    Operator(String),
}

impl Identity {
    /// The display / persisted operator name.
    pub fn name(&self) -> &str {
        match self {
            Identity::Requester(name) => name,
            Identity::Operator(name) => name,
        }
    }
}

/// The record under assembly plus transient UI state.
///
/// Every field is optional until its step sets it; by the time the
/// confirmation summary renders, all of them are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub report_date: Option<NaiveDate>,
    pub shift: Option<Shift>,
    pub model: Option<String>,
    pub survey: Option<String>,
    pub identity: Option<Identity>,
    pub start_value: Option<i64>,
    pub finish_value: Option<i64>,
    pub diff_value: Option<i64>,
    /// Zero-based page index into the paginated operator list.
    pub operator_page: usize,
    /// Transport message ids created during this conversation, tracked for
    /// bulk deletion at terminal or restart. Appended on every engine
    /// prompt and every user input.
    pub pending_message_ids: Vec<MessageId>,
}

impl FormState {
    /// Sets the model, invalidating any survey chosen for a previous model.
    pub fn set_model(&mut self, model: String) {
        if self.model.as_deref() != Some(model.as_str()) {
            self.survey = None;
        }
        self.model = Some(model);
    }

    /// Records a transport message id for later bulk cleanup.
    pub fn track_message(&mut self, id: MessageId) {
        self.pending_message_ids.push(id);
    }

    /// Removes and returns every tracked message id.
    pub fn take_pending_messages(&mut self) -> Vec<MessageId> {
        std::mem::take(&mut self.pending_message_ids)
    }

    /// Clears all collected selections and numeric inputs (the EDIT path).
    ///
    /// Tracked message ids survive: cleanup happens exactly once, at
    /// terminal or restart, regardless of how many edit rounds occurred.
    pub fn clear_collected(&mut self) {
        let pending = std::mem::take(&mut self.pending_message_ids);
        *self = FormState {
            pending_message_ids: pending,
            ..FormState::default()
        };
    }
}

/// A report dialogue: identity, current step, and the form being assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    pub step: ReportStep,
    pub form: FormState,
}

impl Conversation {
    /// Starts a fresh conversation at the date-selection step.
    pub fn new(id: ConversationId) -> Self {
        Self {
            id,
            step: ReportStep::ChoosingDate,
            form: FormState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_conversation_starts_at_date_selection_with_empty_form() {
        let conversation = Conversation::new(ConversationId::new());
        assert_eq!(conversation.step, ReportStep::ChoosingDate);
        assert_eq!(conversation.form, FormState::default());
    }

    #[test]
    fn choosing_a_different_model_clears_the_survey() {
        let mut form = FormState::default();
        form.set_model("m1".to_string());
        form.survey = Some("s1".to_string());

        form.set_model("m2".to_string());

        assert_eq!(form.model.as_deref(), Some("m2"));
        assert_eq!(form.survey, None);
    }

    #[test]
    fn re_choosing_the_same_model_keeps_the_survey() {
        let mut form = FormState::default();
        form.set_model("m1".to_string());
        form.survey = Some("s1".to_string());

        form.set_model("m1".to_string());

        assert_eq!(form.survey.as_deref(), Some("s1"));
    }

    #[test]
    fn clear_collected_resets_fields_but_keeps_message_ids() {
        let mut form = FormState::default();
        form.report_date = NaiveDate::from_ymd_opt(2025, 7, 1);
        form.shift = Some(Shift::Day);
        form.set_model("m".to_string());
        form.survey = Some("s".to_string());
        form.identity = Some(Identity::Requester("ann".to_string()));
        form.start_value = Some(100);
        form.finish_value = Some(80);
        form.diff_value = Some(-20);
        form.operator_page = 2;
        form.track_message(MessageId::new(1));
        form.track_message(MessageId::new(2));

        form.clear_collected();

        assert_eq!(form.report_date, None);
        assert_eq!(form.shift, None);
        assert_eq!(form.model, None);
        assert_eq!(form.survey, None);
        assert_eq!(form.identity, None);
        assert_eq!(form.start_value, None);
        assert_eq!(form.finish_value, None);
        assert_eq!(form.diff_value, None);
        assert_eq!(form.operator_page, 0);
        assert_eq!(
            form.pending_message_ids,
            vec![MessageId::new(1), MessageId::new(2)]
        );
    }

    #[test]
    fn take_pending_messages_drains_the_ledger() {
        let mut form = FormState::default();
        form.track_message(MessageId::new(7));

        let taken = form.take_pending_messages();

        assert_eq!(taken, vec![MessageId::new(7)]);
        assert!(form.pending_message_ids.is_empty());
    }

    #[test]
    fn identity_exposes_the_operator_name() {
        assert_eq!(Identity::Requester("ann".to_string()).name(), "ann");
        assert_eq!(Identity::Operator("bob".to_string()).name(), "bob");
    }
}
