use serde::{Deserialize, Serialize};

use crate::goal::CIRCLE_ID;

pub const DEFAULT_WIDTH: u32 = 200;

/// The four options a badge is configured with.
/// Re-read on every render; nothing here is cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeOptions {
    pub goal: String,
    pub label: String,
    pub width: u32,
    #[serde(alias = "colorOnly")]
    pub color_only: bool,
}

impl Default for BadgeOptions {
    fn default() -> Self {
        BadgeOptions {
            goal: CIRCLE_ID.to_string(),
            label: String::new(),
            width: DEFAULT_WIDTH,
            color_only: false,
        }
    }
}

impl BadgeOptions {
    pub fn new(goal: &str) -> Self {
        BadgeOptions {
            goal: goal.to_string(),
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn color_only(mut self, on: bool) -> Self {
        self.color_only = on;
        self
    }

    /// Width in pixels; zero is not a usable width and falls back to the default.
    pub fn effective_width(&self) -> u32 {
        if self.width == 0 {
            DEFAULT_WIDTH
        } else {
            self.width
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = BadgeOptions::default();
        assert_eq!(o.goal, "circle");
        assert_eq!(o.label, "");
        assert_eq!(o.width, 200);
        assert!(!o.color_only);
    }

    #[test]
    fn zero_width_falls_back() {
        assert_eq!(BadgeOptions::new("3").with_width(0).effective_width(), 200);
        assert_eq!(BadgeOptions::new("3").with_width(48).effective_width(), 48);
    }

    #[test]
    fn deserializes_partial_json_with_alias() {
        let o: BadgeOptions = serde_json::from_str(r#"{"goal":"4","colorOnly":true}"#).unwrap();
        assert_eq!(o.goal, "4");
        assert!(o.color_only);
        assert_eq!(o.width, DEFAULT_WIDTH);
        assert_eq!(o.label, "");
    }
}
