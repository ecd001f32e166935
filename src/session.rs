use crate::defaults::FALLBACK_DURATION_MINUTES;
use crate::minutes_to_seconds;
use crate::speech::{duration_for, SpeechType};
use crate::topics::Topic;
use log::{debug, info, warn};
use serde::Serialize;

/// Which top-level screen is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Speech type selector, plus either the topic picker or, once the
    /// selection is ready, an inline countdown for it.
    Selection,
    /// Full-screen countdown for the chosen selection.
    Countdown,
}

/// Navigation and selection state for one user session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    pub speech_type: Option<SpeechType>,
    pub selected_topic: Option<Topic>,
    pub session_active: bool,
    pub topic_picker_open: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose a speech type. Impromptu opens the picker; any previously
    /// chosen topic is dropped.
    pub fn select_speech_type(&mut self, speech_type: SpeechType) {
        self.speech_type = Some(speech_type);
        self.topic_picker_open = speech_type.needs_topic();
        self.selected_topic = None;
        debug!("Selected speech type {}", speech_type.name());
    }

    pub fn select_topic(&mut self, topic: Topic) {
        debug!("Selected topic {}", topic.id);
        self.selected_topic = Some(topic);
        self.topic_picker_open = false;
    }

    /// Whether the current selection is enough to run a countdown.
    pub fn is_ready(&self) -> bool {
        match self.speech_type {
            Some(t) if t.needs_topic() => self.selected_topic.is_some(),
            Some(_) => true,
            None => false,
        }
    }

    /// Enter the countdown screen. Returns `false` if the selection is not
    /// ready.
    pub fn begin(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.session_active = true;
        match serde_json::to_string(self) {
            Ok(snapshot) => info!("Session started: {}", snapshot),
            Err(err) => warn!("Session started; snapshot not serializable: {}", err),
        }
        true
    }

    /// Leave the countdown screen, keeping the selection.
    pub fn back(&mut self) {
        self.session_active = false;
    }

    /// The countdown finished; return to selection.
    pub fn complete(&mut self) {
        info!("Session completed");
        self.session_active = false;
    }

    pub fn screen(&self) -> Screen {
        if self.session_active {
            Screen::Countdown
        } else {
            Screen::Selection
        }
    }

    pub fn duration_minutes(&self) -> f64 {
        self.speech_type
            .map(duration_for)
            .unwrap_or(FALLBACK_DURATION_MINUTES)
    }

    pub fn duration_seconds(&self) -> u32 {
        minutes_to_seconds(self.duration_minutes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topics::{topics_for, Theme};

    fn topic() -> Topic {
        topics_for(Theme::Society).remove(3)
    }

    #[test]
    fn starts_with_no_selection() {
        let session = SessionState::new();
        assert_eq!(session.screen(), Screen::Selection);
        assert!(!session.is_ready());
        assert!(!session.topic_picker_open);
        assert_eq!(session.duration_seconds(), 150);
    }

    #[test]
    fn impromptu_opens_picker_and_needs_topic() {
        let mut session = SessionState::new();
        session.select_speech_type(SpeechType::Impromptu);
        assert!(session.topic_picker_open);
        assert!(!session.is_ready());
        assert!(!session.begin());
        assert_eq!(session.screen(), Screen::Selection);

        session.select_topic(topic());
        assert!(!session.topic_picker_open);
        assert!(session.is_ready());
        assert!(session.begin());
        assert_eq!(session.screen(), Screen::Countdown);
    }

    #[test]
    fn prepared_and_evaluative_are_ready_without_topic() {
        for (speech_type, seconds) in [(SpeechType::Prepared, 420), (SpeechType::Evaluative, 150)] {
            let mut session = SessionState::new();
            session.select_speech_type(speech_type);
            assert!(!session.topic_picker_open);
            assert!(session.is_ready());
            assert_eq!(session.duration_seconds(), seconds);
        }
    }

    #[test]
    fn changing_speech_type_drops_topic() {
        let mut session = SessionState::new();
        session.select_speech_type(SpeechType::Impromptu);
        session.select_topic(topic());
        session.select_speech_type(SpeechType::Impromptu);
        assert!(session.selected_topic.is_none());
        assert!(session.topic_picker_open);
    }

    #[test]
    fn back_keeps_selection_for_reentry() {
        let mut session = SessionState::new();
        session.select_speech_type(SpeechType::Impromptu);
        session.select_topic(topic());
        session.begin();
        session.back();
        assert_eq!(session.screen(), Screen::Selection);
        assert_eq!(session.speech_type, Some(SpeechType::Impromptu));
        assert_eq!(session.selected_topic, Some(topic()));
        assert!(session.begin());
    }

    #[test]
    fn completion_returns_to_selection() {
        let mut session = SessionState::new();
        session.select_speech_type(SpeechType::Prepared);
        session.begin();
        session.complete();
        assert_eq!(session.screen(), Screen::Selection);
        assert_eq!(session.speech_type, Some(SpeechType::Prepared));
    }

    #[test]
    fn switching_ready_types_keeps_countdown_reachable_with_new_duration() {
        let mut session = SessionState::new();
        session.select_speech_type(SpeechType::Prepared);
        assert_eq!(session.screen(), Screen::Selection);
        assert!(session.is_ready());
        assert_eq!(session.duration_seconds(), 420);

        session.select_speech_type(SpeechType::Evaluative);
        assert!(session.is_ready());
        assert!(!session.topic_picker_open);
        assert_eq!(session.duration_seconds(), 150);
    }

    #[test]
    fn reselecting_impromptu_after_pick_reopens_picker_without_topic() {
        let mut session = SessionState::new();
        session.select_speech_type(SpeechType::Impromptu);
        session.select_topic(topic());
        assert!(session.is_ready());

        session.select_speech_type(SpeechType::Prepared);
        session.select_speech_type(SpeechType::Impromptu);
        assert!(session.topic_picker_open);
        assert!(session.selected_topic.is_none());
        assert!(!session.is_ready());
    }

    #[test]
    fn snapshot_serializes_with_lowercase_names() {
        let mut session = SessionState::new();
        session.select_speech_type(SpeechType::Impromptu);
        session.select_topic(topic());
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains(r#""speech_type":"impromptu""#), "{}", json);
        assert!(json.contains(r#""id":"society-3""#), "{}", json);
        assert!(json.contains(r#""theme":"society""#), "{}", json);
    }
}
