//! Inbound conversation events and their wire-token codec.
//!
//! The transport renders choice rows carrying opaque tokens and forwards
//! either one token or a raw text message per interaction. The codec here
//! is context-free: every token identifies its event kind without knowing
//! the current step, so stale button presses can be classified (and then
//! ignored) instead of misread.

use chrono::NaiveDate;

use super::shift::Shift;

/// One inbound interaction, already classified by the transport boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A date button from the today ± window keyboard.
    DatePicked(NaiveDate),
    /// One of the four fixed shift buttons.
    ShiftPicked(Shift),
    /// A model button.
    ModelPicked(String),
    /// A survey button.
    SurveyPicked(String),
    /// "It's me" on the identity keyboard.
    IdentitySelf,
    /// "Someone else" on the identity keyboard.
    IdentityOther,
    /// Next operator page.
    PageNext,
    /// Previous operator page.
    PagePrev,
    /// An operator button; the payload is the absolute list index.
    OperatorPicked(usize),
    /// A raw free-text message.
    Text(String),
    /// The back button of the current keyboard.
    Back,
    /// Commit the reviewed report.
    Confirm,
    /// Discard collected values and start over.
    Edit,
}

impl Event {
    /// Parses a wire token into an event.
    ///
    /// Returns `None` for tokens this codec never produced; the engine
    /// treats those the same as any other state mismatch.
    pub fn from_token(token: &str) -> Option<Event> {
        match token {
            "ME" => return Some(Event::IdentitySelf),
            "OTHER" => return Some(Event::IdentityOther),
            "OP_PAGE_NEXT" => return Some(Event::PageNext),
            "OP_PAGE_PREV" => return Some(Event::PagePrev),
            "BACK" => return Some(Event::Back),
            "CONFIRM" => return Some(Event::Confirm),
            "EDIT" => return Some(Event::Edit),
            _ => {}
        }
        if let Ok(shift) = token.parse::<Shift>() {
            return Some(Event::ShiftPicked(shift));
        }
        if let Some(rest) = token.strip_prefix("DATE:") {
            return NaiveDate::parse_from_str(rest, "%Y-%m-%d")
                .ok()
                .map(Event::DatePicked);
        }
        if let Some(rest) = token.strip_prefix("MODEL:") {
            return Some(Event::ModelPicked(rest.to_string()));
        }
        if let Some(rest) = token.strip_prefix("SURVEY:") {
            return Some(Event::SurveyPicked(rest.to_string()));
        }
        if let Some(rest) = token.strip_prefix("OP_") {
            return rest.parse::<usize>().ok().map(Event::OperatorPicked);
        }
        None
    }

    /// Encodes this event as its wire token.
    ///
    /// `Text` has no token: free text travels as the message body itself.
    pub fn to_token(&self) -> Option<String> {
        let token = match self {
            Event::DatePicked(date) => format!("DATE:{}", date.format("%Y-%m-%d")),
            Event::ShiftPicked(shift) => shift.as_str().to_string(),
            Event::ModelPicked(model) => format!("MODEL:{}", model),
            Event::SurveyPicked(survey) => format!("SURVEY:{}", survey),
            Event::IdentitySelf => "ME".to_string(),
            Event::IdentityOther => "OTHER".to_string(),
            Event::PageNext => "OP_PAGE_NEXT".to_string(),
            Event::PagePrev => "OP_PAGE_PREV".to_string(),
            Event::OperatorPicked(index) => format!("OP_{}", index),
            Event::Back => "BACK".to_string(),
            Event::Confirm => "CONFIRM".to_string(),
            Event::Edit => "EDIT".to_string(),
            Event::Text(_) => return None,
        };
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        let events = [
            Event::DatePicked(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()),
            Event::ShiftPicked(Shift::Evening),
            Event::ModelPicked("atlas".to_string()),
            Event::SurveyPicked("weekly".to_string()),
            Event::IdentitySelf,
            Event::IdentityOther,
            Event::PageNext,
            Event::PagePrev,
            Event::OperatorPicked(64),
            Event::Back,
            Event::Confirm,
            Event::Edit,
        ];
        for event in events {
            let token = event.to_token().unwrap();
            assert_eq!(Event::from_token(&token), Some(event), "token {}", token);
        }
    }

    #[test]
    fn free_text_has_no_token() {
        assert_eq!(Event::Text("100".to_string()).to_token(), None);
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert_eq!(Event::from_token("SOMETHING_ELSE"), None);
        assert_eq!(Event::from_token("DATE:not-a-date"), None);
        assert_eq!(Event::from_token("OP_x"), None);
        assert_eq!(Event::from_token(""), None);
    }

    #[test]
    fn operator_index_parses_from_suffix() {
        assert_eq!(Event::from_token("OP_0"), Some(Event::OperatorPicked(0)));
        assert_eq!(Event::from_token("OP_129"), Some(Event::OperatorPicked(129)));
    }

    #[test]
    fn model_payload_may_contain_separators() {
        assert_eq!(
            Event::from_token("MODEL:alpha:beta"),
            Some(Event::ModelPicked("alpha:beta".to_string()))
        );
    }
}
