use log::debug;
use rocket::response::content::RawHtml;
use rocket::State;
use rocket_dyn_templates::Template;
use serde_json::json;

use crate::badge::BadgeOptions;
use crate::config::SiteConfig;
use crate::goal::Goal;
use crate::render;
use crate::routes::BadgeQuery;
use crate::Assets;

// ── Badge fragment ─────────────────────────────────────

#[get("/badge?<query..>")]
pub fn badge(query: BadgeQuery, cfg: &State<SiteConfig>, assets: &State<Assets>) -> RawHtml<String> {
    let opts = query.into_options(&cfg.badge);
    if !Goal::classify(&opts.goal).is_recognized() {
        debug!("Unrecognized goal {:?}, rendering with empty label", opts.goal);
    }
    RawHtml(render::render_badge(&opts, assets.0.as_ref()))
}

// ── Gallery ────────────────────────────────────────────

/// Every recognized goal, once as artwork and once as a colour swatch.
#[get("/?<width>")]
pub fn gallery(width: Option<u32>, cfg: &State<SiteConfig>, assets: &State<Assets>) -> Template {
    let width = width.unwrap_or(cfg.badge.width);
    let resolver = assets.0.as_ref();

    let goals: Vec<serde_json::Value> = Goal::all()
        .filter_map(|goal| {
            let id = goal.id()?;
            let opts = BadgeOptions::new(&id).with_width(width);
            Some(json!({
                "id": id,
                "title": goal.title().unwrap_or(""),
                "image_html": render::render_badge(&opts, resolver),
                "swatch_html": render::render_badge(&opts.clone().color_only(true), resolver),
            }))
        })
        .collect();

    let context = json!({
        "page_title": "UN Sustainable Development Goals",
        "css": render::BADGE_CSS,
        "goals": goals,
    });
    Template::render("gallery", &context)
}

pub fn routes() -> Vec<rocket::Route> {
    routes![badge, gallery]
}
