use crate::defaults::FALLBACK_DURATION_MINUTES;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Kind of speech being practised; each kind has a fixed time allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechType {
    Impromptu,
    Prepared,
    Evaluative,
}

impl SpeechType {
    /// Display order of the selector buttons.
    pub const ALL: [SpeechType; 3] = [
        SpeechType::Impromptu,
        SpeechType::Prepared,
        SpeechType::Evaluative,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SpeechType::Impromptu => "impromptu",
            SpeechType::Prepared => "prepared",
            SpeechType::Evaluative => "evaluative",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SpeechType::Impromptu => "Impromptu",
            SpeechType::Prepared => "Prepared",
            SpeechType::Evaluative => "Evaluative",
        }
    }

    /// Only impromptu speeches are given a topic from the picker.
    pub fn needs_topic(self) -> bool {
        matches!(self, SpeechType::Impromptu)
    }
}

impl fmt::Display for SpeechType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors raised when a selection arrives as free text (e.g. a form value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    UnknownSpeechType(String),
    UnknownTheme(String),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::UnknownSpeechType(name) => {
                write!(f, "Unknown speech type: {:?}", name)
            }
            SelectionError::UnknownTheme(name) => write!(f, "Unknown theme: {:?}", name),
        }
    }
}

impl std::error::Error for SelectionError {}

impl FromStr for SpeechType {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SpeechType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SelectionError::UnknownSpeechType(trimmed.to_string()))
    }
}

/// Minutes allotted to a speech type.
pub fn duration_for(speech_type: SpeechType) -> f64 {
    match speech_type {
        SpeechType::Impromptu => 2.5,
        SpeechType::Prepared => 7.0,
        SpeechType::Evaluative => 2.5,
    }
}

/// Minutes for a speech type given by name.
///
/// Names that do not resolve get the impromptu/evaluative allowance rather
/// than an error.
pub fn duration_minutes_for_name(name: &str) -> f64 {
    name.parse::<SpeechType>()
        .map(duration_for)
        .unwrap_or(FALLBACK_DURATION_MINUTES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn fixed_durations_per_type() {
        assert_eq!(duration_for(SpeechType::Impromptu), 2.5);
        assert_eq!(duration_for(SpeechType::Prepared), 7.0);
        assert_eq!(duration_for(SpeechType::Evaluative), 2.5);
    }

    #[test]
    fn unknown_names_fall_back_to_two_and_a_half_minutes() {
        assert_eq!(duration_minutes_for_name("prepared"), 7.0);
        assert_eq!(duration_minutes_for_name("Evaluative"), 2.5);
        assert_eq!(duration_minutes_for_name("keynote"), 2.5);
        assert_eq!(duration_minutes_for_name(""), 2.5);
    }

    #[test]
    fn parse_accepts_canonical_names_only() {
        assert_eq!(" impromptu ".parse::<SpeechType>(), Ok(SpeechType::Impromptu));
        assert_matches!(
            "debate".parse::<SpeechType>(),
            Err(SelectionError::UnknownSpeechType(name)) if name == "debate"
        );
    }

    #[test]
    fn only_impromptu_needs_a_topic() {
        let needing: Vec<_> = SpeechType::ALL.into_iter().filter(|t| t.needs_topic()).collect();
        assert_eq!(needing, vec![SpeechType::Impromptu]);
    }
}
