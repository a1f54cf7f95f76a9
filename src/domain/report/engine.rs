//! The conversation state machine.
//!
//! Maps (current step, inbound event) to (new step, prompt) over a
//! normalized catalog snapshot. All navigation rules live here: forward
//! progression, back edges, operator pagination, validation re-prompts,
//! and the confirm/edit gate. The engine is synchronous and pure with
//! respect to I/O; collaborator access happens in the application layer.

use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, MessageId, Timestamp};

use super::catalog::Catalog;
use super::event::Event;
use super::form::{Conversation, FormState, Identity};
use super::numeric::parse_signed_integer;
use super::paginator::paginate;
use super::prompt::{
    committed_summary, confirm_prompt, date_prompt, diff_prompt, finish_prompt, identity_prompt,
    model_prompt, operator_prompt, shift_prompt, start_prompt, survey_prompt, Prompt,
};
use super::record::ReportRecord;
use super::step::ReportStep;

/// Tunable collection parameters.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Operators shown per page.
    pub operator_page_size: usize,
    /// Days offered on each side of today on the date keyboard.
    pub date_window_days: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            operator_page_size: 30,
            date_window_days: 5,
        }
    }
}

/// The requester's profile as supplied by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requester {
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
}

impl Requester {
    /// Display name used when the requester reports for themselves:
    /// username if present, otherwise first plus last name.
    pub fn display_name(&self) -> String {
        match &self.username {
            Some(username) => username.clone(),
            None => match &self.last_name {
                Some(last) => format!("{} {}", self.first_name, last),
                None => self.first_name.clone(),
            },
        }
    }
}

/// Per-event facts the engine needs but does not own: the clock projected
/// into the reporting timezone, and who is talking.
#[derive(Debug, Clone)]
pub struct EngineContext {
    /// Today's date in the configured reporting timezone.
    pub today: NaiveDate,
    /// Commit timestamp for records produced by this event.
    pub now: Timestamp,
    pub requester: Requester,
}

/// A committed report: what to persist, what to tell the user, and which
/// transport messages to delete.
#[derive(Debug, Clone)]
pub struct Completion {
    pub record: ReportRecord,
    pub summary: String,
    pub purge: Vec<MessageId>,
}

/// The outcome of one handled event.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The dialogue continues; render this prompt.
    Continue(Prompt),
    /// The report was confirmed; the conversation is over.
    Finished(Completion),
}

/// The state machine proper.
pub struct ConversationEngine {
    catalog: Catalog,
    config: EngineConfig,
}

impl ConversationEngine {
    pub fn new(catalog: Catalog, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    /// Renders the prompt for the conversation's current step.
    ///
    /// The same builder serves forward entry, back navigation, and
    /// mismatch re-rendering, so a reconstructed prompt is always
    /// identical to the original.
    pub fn render(&self, conversation: &mut Conversation, ctx: &EngineContext) -> Prompt {
        self.prompt_for(conversation.step, &mut conversation.form, ctx)
    }

    /// Applies one event to the conversation.
    ///
    /// Exactly one of: the step advances with a new prompt; validation
    /// fails and the same step re-renders with an error; a stale or
    /// foreign event re-renders the current prompt unchanged; or the
    /// report completes.
    pub fn handle(
        &self,
        conversation: &mut Conversation,
        event: Event,
        ctx: &EngineContext,
    ) -> Result<Outcome, DomainError> {
        if event == Event::Back {
            if let Some(target) = conversation.step.back_target() {
                conversation.step = target;
            }
            return Ok(Outcome::Continue(self.render(conversation, ctx)));
        }

        let step = conversation.step;
        let form = &mut conversation.form;

        match (step, event) {
            (ReportStep::ChoosingDate, Event::DatePicked(date)) => {
                if !self.within_window(date, ctx.today) {
                    // Stale button from a keyboard built before midnight.
                    return self.reissue(conversation, ctx);
                }
                form.report_date = Some(date);
                self.advance(conversation, ReportStep::ChoosingShift, ctx)
            }

            (ReportStep::ChoosingShift, Event::ShiftPicked(shift)) => {
                form.shift = Some(shift);
                self.advance(conversation, ReportStep::ChoosingModel, ctx)
            }

            (ReportStep::ChoosingModel, Event::ModelPicked(model)) => {
                if !self.catalog.has_model(&model) {
                    return self.reissue(conversation, ctx);
                }
                form.set_model(model);
                self.advance(conversation, ReportStep::ChoosingSurvey, ctx)
            }

            (ReportStep::ChoosingSurvey, Event::SurveyPicked(survey)) => {
                let belongs = form
                    .model
                    .as_deref()
                    .map(|model| self.catalog.survey_belongs_to(model, &survey))
                    .unwrap_or(false);
                if !belongs {
                    return self.reissue(conversation, ctx);
                }
                form.survey = Some(survey);
                self.advance(conversation, ReportStep::ConfirmingIdentity, ctx)
            }

            (ReportStep::ConfirmingIdentity, Event::IdentitySelf) => {
                form.identity = Some(Identity::Requester(ctx.requester.display_name()));
                self.advance(conversation, ReportStep::InputStart, ctx)
            }

            (ReportStep::ConfirmingIdentity, Event::IdentityOther) => {
                form.operator_page = 0;
                self.advance(conversation, ReportStep::SelectingOperator, ctx)
            }

            (ReportStep::SelectingOperator, Event::PageNext) => {
                let page = paginate(
                    self.catalog.operators(),
                    self.config.operator_page_size,
                    form.operator_page,
                );
                if page.has_next {
                    form.operator_page = page.index + 1;
                }
                self.reissue(conversation, ctx)
            }

            (ReportStep::SelectingOperator, Event::PagePrev) => {
                let page = paginate(
                    self.catalog.operators(),
                    self.config.operator_page_size,
                    form.operator_page,
                );
                if page.has_prev {
                    form.operator_page = page.index - 1;
                }
                self.reissue(conversation, ctx)
            }

            (ReportStep::SelectingOperator, Event::OperatorPicked(index)) => {
                match self.catalog.operators().get(index) {
                    Some(operator) => {
                        form.identity = Some(Identity::Operator(operator.clone()));
                        self.advance(conversation, ReportStep::InputStart, ctx)
                    }
                    // Out-of-range picks cannot happen through our
                    // keyboards; fail silently and reissue the page.
                    None => self.reissue(conversation, ctx),
                }
            }

            (ReportStep::InputStart, Event::Text(text)) => {
                match parse_signed_integer("start", &text) {
                    Ok(value) => {
                        form.start_value = Some(value);
                        self.advance(conversation, ReportStep::InputFinish, ctx)
                    }
                    Err(_) => Ok(Outcome::Continue(
                        start_prompt().with_error("Please enter a whole number (START)."),
                    )),
                }
            }

            (ReportStep::InputFinish, Event::Text(text)) => {
                match parse_signed_integer("finish", &text) {
                    Ok(value) => {
                        form.finish_value = Some(value);
                        self.advance(conversation, ReportStep::InputDiff, ctx)
                    }
                    Err(_) => Ok(Outcome::Continue(
                        finish_prompt().with_error("Please enter a whole number (FINISH)."),
                    )),
                }
            }

            (ReportStep::InputDiff, Event::Text(text)) => {
                match parse_signed_integer("diff", &text) {
                    Ok(value) => {
                        form.diff_value = Some(value);
                        self.advance(conversation, ReportStep::Confirming, ctx)
                    }
                    Err(_) => Ok(Outcome::Continue(
                        diff_prompt().with_error("Please enter a whole number (with + or -)."),
                    )),
                }
            }

            (ReportStep::Confirming, Event::Confirm) => {
                let record = ReportRecord::from_form(form, ctx.now)?;
                let purge = form.take_pending_messages();
                let summary = committed_summary(&record);
                Ok(Outcome::Finished(Completion {
                    record,
                    summary,
                    purge,
                }))
            }

            (ReportStep::Confirming, Event::Edit) => {
                form.clear_collected();
                conversation.step = ReportStep::ChoosingDate;
                Ok(Outcome::Continue(self.render(conversation, ctx)))
            }

            // Any other (step, event) pair is a stale or foreign event:
            // ignore it without touching the form.
            _ => self.reissue(conversation, ctx),
        }
    }

    fn advance(
        &self,
        conversation: &mut Conversation,
        target: ReportStep,
        ctx: &EngineContext,
    ) -> Result<Outcome, DomainError> {
        conversation.step = target;
        Ok(Outcome::Continue(self.render(conversation, ctx)))
    }

    fn reissue(
        &self,
        conversation: &mut Conversation,
        ctx: &EngineContext,
    ) -> Result<Outcome, DomainError> {
        Ok(Outcome::Continue(self.render(conversation, ctx)))
    }

    fn within_window(&self, date: NaiveDate, today: NaiveDate) -> bool {
        (date - today).num_days().abs() <= self.config.date_window_days
    }

    fn prompt_for(&self, step: ReportStep, form: &mut FormState, ctx: &EngineContext) -> Prompt {
        match step {
            ReportStep::ChoosingDate => date_prompt(ctx.today, self.config.date_window_days),
            ReportStep::ChoosingShift => shift_prompt(),
            ReportStep::ChoosingModel => model_prompt(self.catalog.models()),
            ReportStep::ChoosingSurvey => {
                let surveys = form
                    .model
                    .as_deref()
                    .map(|model| self.catalog.surveys_for(model))
                    .unwrap_or_default();
                survey_prompt(&surveys)
            }
            ReportStep::ConfirmingIdentity => identity_prompt(),
            ReportStep::SelectingOperator => {
                let page = paginate(
                    self.catalog.operators(),
                    self.config.operator_page_size,
                    form.operator_page,
                );
                // The page index is re-clamped on every render so a
                // reloaded, shrunken list cannot strand the cursor.
                form.operator_page = page.index;
                operator_prompt(&page)
            }
            ReportStep::InputStart => start_prompt(),
            ReportStep::InputFinish => finish_prompt(),
            ReportStep::InputDiff => diff_prompt(),
            ReportStep::Confirming => confirm_prompt(form),
        }
    }
}
