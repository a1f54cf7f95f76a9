//! Outbound prompt descriptions.
//!
//! A prompt is plain data: text plus rows of labeled choices carrying wire
//! tokens, or an expectation of free text. The transport owns rendering;
//! the builders here are the single source for each step's prompt so that
//! back navigation reconstructs prior prompts exactly.

use chrono::{Duration, NaiveDate};

use super::event::Event;
use super::form::FormState;
use super::paginator::Page;
use super::record::ReportRecord;
use super::shift::Shift;

/// One tappable choice: a label and the event token it fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub token: String,
}

impl Choice {
    fn new(label: impl Into<String>, event: &Event) -> Self {
        Self {
            label: label.into(),
            // Only Event::Text lacks a token, and it is never a button.
            token: event.to_token().unwrap_or_default(),
        }
    }

    fn back() -> Self {
        Self::new("⬅ Back", &Event::Back)
    }
}

/// What the transport should display next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    /// Choice rows, outer = keyboard rows. Empty when only text is expected.
    pub rows: Vec<Vec<Choice>>,
    /// True when the step consumes the user's next free-text message.
    pub expects_text: bool,
}

impl Prompt {
    fn with_choices(text: impl Into<String>, rows: Vec<Vec<Choice>>) -> Self {
        Self {
            text: text.into(),
            rows,
            expects_text: false,
        }
    }

    fn free_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rows: vec![vec![Choice::back()]],
            expects_text: true,
        }
    }

    /// Re-issues this prompt prefixed with a validation error message.
    pub fn with_error(mut self, message: impl AsRef<str>) -> Self {
        self.text = format!("{}\n{}", message.as_ref(), self.text);
        self
    }
}

fn date_label(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Date keyboard: today on its own row, then past/future pairs at
/// increasing distance, `radius` days each way.
pub fn date_prompt(today: NaiveDate, radius: i64) -> Prompt {
    let mut rows = vec![vec![Choice::new(
        format!("Today ({})", date_label(today)),
        &Event::DatePicked(today),
    )]];
    for delta in 1..=radius {
        let past = today - Duration::days(delta);
        let future = today + Duration::days(delta);
        rows.push(vec![
            Choice::new(date_label(past), &Event::DatePicked(past)),
            Choice::new(date_label(future), &Event::DatePicked(future)),
        ]);
    }
    Prompt::with_choices("Select the shift date:", rows)
}

pub fn shift_prompt() -> Prompt {
    let button = |shift: Shift| Choice::new(shift.as_str(), &Event::ShiftPicked(shift));
    Prompt::with_choices(
        "Select the shift:",
        vec![
            vec![button(Shift::Night), button(Shift::Morning)],
            vec![button(Shift::Day), button(Shift::Evening)],
            vec![Choice::back()],
        ],
    )
}

pub fn model_prompt(models: &[String]) -> Prompt {
    let mut rows: Vec<Vec<Choice>> = models
        .iter()
        .map(|m| vec![Choice::new(m.clone(), &Event::ModelPicked(m.clone()))])
        .collect();
    rows.push(vec![Choice::back()]);
    Prompt::with_choices("Select the model:", rows)
}

pub fn survey_prompt(surveys: &[&str]) -> Prompt {
    let mut rows: Vec<Vec<Choice>> = surveys
        .iter()
        .map(|s| vec![Choice::new(*s, &Event::SurveyPicked(s.to_string()))])
        .collect();
    rows.push(vec![Choice::back()]);
    Prompt::with_choices("Select the survey:", rows)
}

pub fn identity_prompt() -> Prompt {
    Prompt::with_choices(
        "Who is this report for?",
        vec![
            vec![
                Choice::new("It's me", &Event::IdentitySelf),
                Choice::new("Someone else", &Event::IdentityOther),
            ],
            vec![Choice::back()],
        ],
    )
}

/// Operator keyboard: one button per visible operator (token carries the
/// absolute list index), then a navigation row whose prev/next buttons
/// appear only when such a page exists.
pub fn operator_prompt(page: &Page<'_, String>) -> Prompt {
    let mut rows: Vec<Vec<Choice>> = page
        .items
        .iter()
        .enumerate()
        .map(|(i, op)| vec![Choice::new(op.clone(), &Event::OperatorPicked(page.offset + i))])
        .collect();

    let mut nav = Vec::new();
    if page.has_prev {
        nav.push(Choice::new("⬅ Previous", &Event::PagePrev));
    }
    if page.has_next {
        nav.push(Choice::new("Next ➡", &Event::PageNext));
    }
    nav.push(Choice::back());
    rows.push(nav);

    Prompt::with_choices("Select the operator:", rows)
}

pub fn start_prompt() -> Prompt {
    Prompt::free_text("Enter the START value:")
}

pub fn finish_prompt() -> Prompt {
    Prompt::free_text("Enter the FINISH value:")
}

pub fn diff_prompt() -> Prompt {
    Prompt::free_text("Enter the \"+ OR -\" value:")
}

fn field_lines(
    date: &str,
    shift: &str,
    model: &str,
    survey: &str,
    operator: &str,
    start: i64,
    finish: i64,
    diff: i64,
) -> String {
    format!(
        "Shift date: {}\nShift: {}\nModel: {}\nSurvey: {}\nOperator: {}\nSTART: {}\nFINISH: {}\n+ OR -: {}",
        date, shift, model, survey, operator, start, finish, diff
    )
}

fn form_lines(form: &FormState) -> String {
    let missing = "—".to_string();
    field_lines(
        &form
            .report_date
            .map(date_label)
            .unwrap_or_else(|| missing.clone()),
        &form
            .shift
            .map(|s| s.as_str().to_string())
            .unwrap_or_else(|| missing.clone()),
        form.model.as_deref().unwrap_or(&missing),
        form.survey.as_deref().unwrap_or(&missing),
        form.identity
            .as_ref()
            .map(|i| i.name())
            .unwrap_or(&missing),
        form.start_value.unwrap_or_default(),
        form.finish_value.unwrap_or_default(),
        form.diff_value.unwrap_or_default(),
    )
}

/// Confirmation gate: the collected fields plus confirm/edit buttons.
pub fn confirm_prompt(form: &FormState) -> Prompt {
    Prompt::with_choices(
        format!("Please review your report:\n{}", form_lines(form)),
        vec![
            vec![Choice::new("Confirm", &Event::Confirm)],
            vec![Choice::new("Edit", &Event::Edit)],
        ],
    )
}

/// Final message after the record is committed.
pub fn committed_summary(record: &ReportRecord) -> String {
    format!(
        "✅ Report saved:\n{}",
        field_lines(
            &date_label(record.report_date),
            record.shift.as_str(),
            &record.model,
            &record.survey,
            &record.operator,
            record.start_value,
            record.finish_value,
            record.diff_value,
        )
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::report::form::Identity;
    use crate::domain::report::paginator::paginate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_prompt_anchors_today_and_pairs_the_window() {
        let prompt = date_prompt(day(2025, 7, 10), 5);

        assert_eq!(prompt.rows.len(), 6);
        assert_eq!(prompt.rows[0][0].label, "Today (10/07/2025)");
        assert_eq!(prompt.rows[0][0].token, "DATE:2025-07-10");
        // Row for delta = 1: yesterday then tomorrow.
        assert_eq!(prompt.rows[1][0].token, "DATE:2025-07-09");
        assert_eq!(prompt.rows[1][1].token, "DATE:2025-07-11");
        // Outermost row reaches the window edge.
        assert_eq!(prompt.rows[5][0].token, "DATE:2025-07-05");
        assert_eq!(prompt.rows[5][1].token, "DATE:2025-07-15");
        assert!(!prompt.expects_text);
    }

    #[test]
    fn shift_prompt_lists_all_four_shifts_and_back() {
        let prompt = shift_prompt();
        let tokens: Vec<&str> = prompt
            .rows
            .iter()
            .flatten()
            .map(|c| c.token.as_str())
            .collect();
        assert_eq!(tokens, vec!["NIGHT", "MORNING", "DAY", "EVENING", "BACK"]);
    }

    #[test]
    fn operator_prompt_tokens_carry_absolute_indexes() {
        let operators: Vec<String> = (0..65).map(|i| format!("op{}", i)).collect();
        let page = paginate(&operators, 30, 1);
        let prompt = operator_prompt(&page);

        assert_eq!(prompt.rows[0][0].token, "OP_30");
        assert_eq!(prompt.rows[29][0].token, "OP_59");
        let nav: Vec<&str> = prompt.rows[30].iter().map(|c| c.token.as_str()).collect();
        assert_eq!(nav, vec!["OP_PAGE_PREV", "OP_PAGE_NEXT", "BACK"]);
    }

    #[test]
    fn first_operator_page_omits_prev() {
        let operators: Vec<String> = (0..65).map(|i| format!("op{}", i)).collect();
        let page = paginate(&operators, 30, 0);
        let prompt = operator_prompt(&page);

        let nav: Vec<&str> = prompt
            .rows
            .last()
            .unwrap()
            .iter()
            .map(|c| c.token.as_str())
            .collect();
        assert_eq!(nav, vec!["OP_PAGE_NEXT", "BACK"]);
    }

    #[test]
    fn numeric_prompts_expect_text_with_a_back_row() {
        for prompt in [start_prompt(), finish_prompt(), diff_prompt()] {
            assert!(prompt.expects_text);
            assert_eq!(prompt.rows, vec![vec![Choice::back()]]);
        }
    }

    #[test]
    fn with_error_prefixes_the_message() {
        let prompt = start_prompt().with_error("Please enter a whole number (START).");
        assert_eq!(
            prompt.text,
            "Please enter a whole number (START).\nEnter the START value:"
        );
    }

    #[test]
    fn confirm_prompt_lists_every_collected_field() {
        let form = FormState {
            report_date: Some(day(2025, 7, 1)),
            shift: Some(Shift::Day),
            model: Some("atlas".to_string()),
            survey: Some("weekly".to_string()),
            identity: Some(Identity::Requester("ann".to_string())),
            start_value: Some(100),
            finish_value: Some(80),
            diff_value: Some(-20),
            ..FormState::default()
        };
        let prompt = confirm_prompt(&form);

        for needle in [
            "01/07/2025",
            "DAY",
            "atlas",
            "weekly",
            "ann",
            "START: 100",
            "FINISH: 80",
            "+ OR -: -20",
        ] {
            assert!(prompt.text.contains(needle), "missing {}", needle);
        }
        let tokens: Vec<&str> = prompt
            .rows
            .iter()
            .flatten()
            .map(|c| c.token.as_str())
            .collect();
        assert_eq!(tokens, vec!["CONFIRM", "EDIT"]);
    }

    #[test]
    fn committed_summary_mirrors_the_record() {
        let record = ReportRecord {
            recorded_at: Timestamp::now(),
            report_date: day(2025, 7, 1),
            shift: Shift::Night,
            model: "atlas".to_string(),
            survey: "weekly".to_string(),
            operator: "Bob".to_string(),
            start_value: 5,
            finish_value: 9,
            diff_value: 4,
        };
        let summary = committed_summary(&record);
        assert!(summary.starts_with("✅ Report saved:"));
        assert!(summary.contains("Operator: Bob"));
        assert!(summary.contains("+ OR -: 4"));
    }
}
