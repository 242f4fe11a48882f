// ABOUTME: Menstrual cycle phase model used to tailor meal suggestions
// ABOUTME: Closed CyclePhase enum with strict string parsing at input boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bloom Wellness

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Phase of the menstrual cycle
///
/// The set is closed: any other value arriving from a UI or a stored string is
/// rejected with `ErrorCode::InvalidArgument` rather than mapped to a default.
/// Deserialization goes through [`CyclePhase::parse`], so serde and text input
/// accept exactly the same names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum CyclePhase {
    /// Days of bleeding
    Menstrual,
    /// From the end of menstruation to ovulation
    Follicular,
    /// Around ovulation
    Ovulatory,
    /// From ovulation to the next period
    Luteal,
}

impl CyclePhase {
    /// All phases in cycle order
    pub const ALL: [Self; 4] = [
        Self::Menstrual,
        Self::Follicular,
        Self::Ovulatory,
        Self::Luteal,
    ];

    /// Lowercase wire name of the phase
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Menstrual => "menstrual",
            Self::Follicular => "follicular",
            Self::Ovulatory => "ovulatory",
            Self::Luteal => "luteal",
        }
    }

    /// Parse a lowercase phase name; no trimming or case folding
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidArgument` if the name is not one of the four phases
    pub fn parse(value: &str) -> AppResult<Self> {
        Self::ALL
            .into_iter()
            .find(|phase| phase.as_str() == value)
            .ok_or_else(|| {
                AppError::invalid_argument(format!(
                    "unknown cycle phase '{value}', expected one of: menstrual, follicular, ovulatory, luteal"
                ))
                .with_resource_id("cycle_phase")
            })
    }
}

impl fmt::Display for CyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CyclePhase {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CyclePhase {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_parse_accepts_all_phases() {
        for phase in CyclePhase::ALL {
            assert_eq!(CyclePhase::parse(phase.as_str()).unwrap(), phase);
        }
    }

    #[test]
    fn test_parse_is_exact() {
        for raw in ["Luteal", "LUTEAL", " luteal", "luteal ", ""] {
            let error = raw.parse::<CyclePhase>().unwrap_err();
            assert_eq!(error.code, ErrorCode::InvalidArgument, "accepted {raw:?}");
        }
    }

    #[test]
    fn test_parse_rejects_unknown_phase() {
        let error = CyclePhase::parse("invalid").unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidArgument);
        assert_eq!(error.context.resource_id.as_deref(), Some("cycle_phase"));
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&CyclePhase::Ovulatory).unwrap();
        assert_eq!(json, "\"ovulatory\"");
        assert_eq!(
            serde_json::from_str::<CyclePhase>("\"ovulatory\"").unwrap(),
            CyclePhase::Ovulatory
        );
    }

    #[test]
    fn test_serde_rejects_what_parse_rejects() {
        for raw in ["\"invalid\"", "\"Luteal\""] {
            let error = AppError::from(serde_json::from_str::<CyclePhase>(raw).unwrap_err());
            assert_eq!(error.code, ErrorCode::InvalidArgument, "accepted {raw}");
        }
    }
}
