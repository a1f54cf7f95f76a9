//! Dialogue configuration

use chrono_tz::Tz;
use serde::Deserialize;

use crate::application::handlers::report::DialogueSettings;
use crate::domain::report::EngineConfig;

use super::error::ValidationError;

/// Dialogue configuration (timezone, keyboard sizing)
#[derive(Debug, Clone, Deserialize)]
pub struct DialogueConfig {
    /// IANA timezone anchoring "today" on the date keyboard and the
    /// committed row timestamp
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Operators shown per keyboard page
    #[serde(default = "default_operator_page_size")]
    pub operator_page_size: usize,

    /// Days offered on each side of today on the date keyboard
    #[serde(default = "default_date_window_days")]
    pub date_window_days: i64,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_operator_page_size() -> usize {
    30
}

fn default_date_window_days() -> i64 {
    5
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            operator_page_size: default_operator_page_size(),
            date_window_days: default_date_window_days(),
        }
    }
}

impl DialogueConfig {
    /// Validate dialogue configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.parse_timezone()?;
        if self.operator_page_size == 0 {
            return Err(ValidationError::InvalidPageSize);
        }
        if self.date_window_days < 0 {
            return Err(ValidationError::InvalidDateWindow);
        }
        Ok(())
    }

    fn parse_timezone(&self) -> Result<Tz, ValidationError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| ValidationError::UnknownTimezone(self.timezone.clone()))
    }

    /// Convert into the settings handed to the dialogue handlers
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the timezone is not a known IANA name.
    pub fn to_settings(&self) -> Result<DialogueSettings, ValidationError> {
        Ok(DialogueSettings {
            timezone: self.parse_timezone()?,
            engine: EngineConfig {
                operator_page_size: self.operator_page_size,
                date_window_days: self.date_window_days,
            },
        })
    }
}
