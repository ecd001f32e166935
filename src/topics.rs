//! Static catalog of impromptu speaking prompts, grouped by theme.

use crate::defaults::TOPIC_BATCH_SIZE;
use crate::speech::SelectionError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Technology,
    Society,
    Environment,
    Education,
    Philosophy,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Technology,
        Theme::Society,
        Theme::Environment,
        Theme::Education,
        Theme::Philosophy,
    ];

    /// Lowercase identifier, also used as the topic id prefix.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Technology => "technology",
            Theme::Society => "society",
            Theme::Environment => "environment",
            Theme::Education => "education",
            Theme::Philosophy => "philosophy",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Technology => "Technology",
            Theme::Society => "Society",
            Theme::Environment => "Environment",
            Theme::Education => "Education",
            Theme::Philosophy => "Philosophy",
        }
    }

    fn prompts(self) -> &'static [&'static str; TOPIC_BATCH_SIZE] {
        match self {
            Theme::Technology => &TECHNOLOGY,
            Theme::Society => &SOCIETY,
            Theme::Environment => &ENVIRONMENT,
            Theme::Education => &EDUCATION,
            Theme::Philosophy => &PHILOSOPHY,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::ALL[0]
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Theme {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Theme::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SelectionError::UnknownTheme(trimmed.to_string()))
    }
}

/// A single speaking prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    /// `"<theme>-<index>"`, unique within one generated batch.
    pub id: String,
    pub text: &'static str,
    pub theme: Theme,
}

const TECHNOLOGY: [&str; TOPIC_BATCH_SIZE] = [
    "How has artificial intelligence changed human creativity?",
    "Should social media platforms be regulated like utilities?",
    "Is digital privacy a human right?",
    "The impact of remote work on society",
    "The future of transportation in smart cities",
];

const SOCIETY: [&str; TOPIC_BATCH_SIZE] = [
    "The role of tradition in modern society",
    "The impact of globalization on local cultures",
    "Universal basic income: necessity or mistake?",
    "The future of democracy in the digital age",
    "The changing nature of work and careers",
];

const ENVIRONMENT: [&str; TOPIC_BATCH_SIZE] = [
    "Individual vs corporate responsibility in climate change",
    "The future of renewable energy",
    "Urban farming and food sustainability",
    "Ocean conservation strategies",
    "The impact of fast fashion on the environment",
];

const EDUCATION: [&str; TOPIC_BATCH_SIZE] = [
    "The role of AI in education",
    "Should coding be mandatory in schools?",
    "The future of higher education",
    "Learning styles: myth or reality?",
    "The impact of gamification on learning",
];

const PHILOSOPHY: [&str; TOPIC_BATCH_SIZE] = [
    "The ethics of artificial intelligence",
    "Free will in the age of algorithms",
    "The nature of consciousness",
    "The role of truth in the post-truth era",
    "The meaning of progress in modern society",
];

/// Return the fixed batch of topics for `theme`, in table order.
pub fn topics_for(theme: Theme) -> Vec<Topic> {
    theme
        .prompts()
        .iter()
        .enumerate()
        .map(|(index, &text)| Topic {
            id: format!("{}-{}", theme.name(), index),
            text,
            theme,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_theme_yields_five_unique_topics() {
        for theme in Theme::ALL {
            let batch = topics_for(theme);
            assert_eq!(batch.len(), TOPIC_BATCH_SIZE);
            let ids: HashSet<_> = batch.iter().map(|t| t.id.as_str()).collect();
            assert_eq!(ids.len(), TOPIC_BATCH_SIZE, "duplicate id in {}", theme);
            assert!(batch.iter().all(|t| t.theme == theme));
        }
    }

    #[test]
    fn batches_are_deterministic() {
        for theme in Theme::ALL {
            assert_eq!(topics_for(theme), topics_for(theme));
        }
    }

    #[test]
    fn ids_combine_theme_and_index() {
        let batch = topics_for(Theme::Education);
        assert_eq!(batch[0].id, "education-0");
        assert_eq!(batch[4].id, "education-4");
        assert_eq!(batch[1].text, "Should coding be mandatory in schools?");
    }

    #[test]
    fn theme_defaults_to_first_and_parses_by_name() {
        assert_eq!(Theme::default(), Theme::Technology);
        assert_eq!("Philosophy".parse::<Theme>(), Ok(Theme::Philosophy));
        assert_eq!(
            "sports".parse::<Theme>(),
            Err(SelectionError::UnknownTheme("sports".to_string()))
        );
    }
}
