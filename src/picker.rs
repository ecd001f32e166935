use crate::topics::{topics_for, Theme, Topic};
use log::debug;

/// State behind the topic picker panel.
///
/// A fresh picker is created each time the panel opens, so nothing carries
/// over between openings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopicPicker {
    theme: Theme,
    topics: Vec<Topic>,
}

impl TopicPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Change the theme. The current batch stays until `generate` is called.
    pub fn select_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Replace the batch with the topics for the current theme.
    pub fn generate(&mut self) {
        self.topics = topics_for(self.theme);
        debug!("Generated {} topics for {}", self.topics.len(), self.theme.name());
    }

    /// Hand back the chosen topic; the owner is expected to close the picker.
    pub fn pick(&self, topic: &Topic) -> Topic {
        debug!("Picked topic {}", topic.id);
        topic.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_theme_with_no_topics() {
        let picker = TopicPicker::new();
        assert_eq!(picker.theme(), Theme::Technology);
        assert!(picker.topics().is_empty());
    }

    #[test]
    fn selecting_theme_does_not_regenerate() {
        let mut picker = TopicPicker::new();
        picker.generate();
        picker.select_theme(Theme::Society);
        assert_eq!(picker.topics()[0].theme, Theme::Technology);
    }

    #[test]
    fn generate_replaces_previous_batch() {
        let mut picker = TopicPicker::new();
        picker.generate();
        picker.select_theme(Theme::Environment);
        picker.generate();
        assert_eq!(picker.topics(), topics_for(Theme::Environment).as_slice());
    }

    #[test]
    fn pick_returns_the_chosen_topic() {
        let mut picker = TopicPicker::new();
        picker.generate();
        let chosen = picker.topics()[2].clone();
        assert_eq!(picker.pick(&chosen), chosen);
    }
}
