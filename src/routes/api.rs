use log::debug;
use rocket::serde::json::Json;
use rocket::State;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::goal::Goal;
use crate::palette;
use crate::render::{self, RenderDescriptor};
use crate::routes::BadgeQuery;
use crate::Assets;

// ── Render descriptor ──────────────────────────────────

#[get("/badge.json?<query..>")]
pub fn badge_descriptor(
    query: BadgeQuery,
    cfg: &State<SiteConfig>,
    assets: &State<Assets>,
) -> Json<RenderDescriptor> {
    let opts = query.into_options(&cfg.badge);
    if !Goal::classify(&opts.goal).is_recognized() {
        debug!("Unrecognized goal {:?}, rendering with empty label", opts.goal);
    }
    Json(render::select_render(&opts, assets.0.as_ref()))
}

// ── Goal catalogue ─────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GoalEntry {
    pub id: String,
    pub goal: Goal,
    pub title: &'static str,
    pub color_token: String,
    pub fallback_color: &'static str,
    /// Ready for a `style` attribute: token with fallback.
    pub css_color: String,
    pub artwork: String,
}

pub fn catalogue(assets: &Assets) -> Vec<GoalEntry> {
    Goal::all()
        .filter_map(|goal| {
            let id = goal.id()?;
            Some(GoalEntry {
                title: goal.title().unwrap_or(""),
                color_token: palette::color_token(&id),
                fallback_color: palette::fallback_color(&goal),
                css_color: palette::css_color(&id),
                artwork: assets.0.resolve(&id),
                goal,
                id,
            })
        })
        .collect()
}

#[get("/goals")]
pub fn goals(assets: &State<Assets>) -> Json<Vec<GoalEntry>> {
    Json(catalogue(assets.inner()))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![badge_descriptor, goals]
}
