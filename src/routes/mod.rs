pub mod api;
pub mod public;

use rocket::form::FromForm;

use crate::badge::BadgeOptions;

/// Badge options as they arrive on a query string. Anything left out (or
/// unparseable) takes the configured default.
#[derive(Debug, Default, FromForm)]
pub struct BadgeQuery {
    pub goal: Option<String>,
    pub label: Option<String>,
    pub width: Option<u32>,
    #[field(name = uncased("colorOnly"))]
    #[field(name = "color_only")]
    pub color_only: Option<bool>,
}

impl BadgeQuery {
    pub fn into_options(self, defaults: &BadgeOptions) -> BadgeOptions {
        BadgeOptions {
            goal: self.goal.unwrap_or_else(|| defaults.goal.clone()),
            label: self.label.unwrap_or_else(|| defaults.label.clone()),
            width: self.width.unwrap_or(defaults.width),
            color_only: self.color_only.unwrap_or(defaults.color_only),
        }
    }
}
