//! The fixed set of reportable shifts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the four shifts a report can cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Shift {
    Night,
    Morning,
    Day,
    Evening,
}

impl Shift {
    /// All shifts in keyboard order.
    pub const ALL: [Shift; 4] = [Shift::Night, Shift::Morning, Shift::Day, Shift::Evening];

    /// Returns the wire token / display label for this shift.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shift::Night => "NIGHT",
            Shift::Morning => "MORNING",
            Shift::Day => "DAY",
            Shift::Evening => "EVENING",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shift {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NIGHT" => Ok(Shift::Night),
            "MORNING" => Ok(Shift::Morning),
            "DAY" => Ok(Shift::Day),
            "EVENING" => Ok(Shift::Evening),
            other => Err(ValidationError::invalid_format(
                "shift",
                format!("unknown shift token '{}'", other),
            )),
        }
    }
}
