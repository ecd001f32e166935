//! Application-level configuration constants.

// Branding
pub const APP_TITLE: &str = "Oratio";

// Element ids
pub const THEME_SELECT_ID: &str = "theme-select";

// Button labels
pub const GENERATE_LABEL: &str = "Generate Topics";
pub const BEGIN_LABEL: &str = "Begin Session";
pub const BACK_LABEL: &str = "Back";
pub const FULLSCREEN_LABEL: &str = "Fullscreen";

// Headings around the chosen topic
pub const SELECTED_TOPIC_HEADING: &str = "Selected Topic";
pub const CURRENT_TOPIC_HEADING: &str = "Current Topic";
