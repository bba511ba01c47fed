#[macro_use]
extern crate rocket;

use std::path::Path;

use rocket::fs::{FileServer, Options};
use rocket::response::content::RawHtml;
use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;

mod assets;
mod badge;
mod boot;
mod config;
mod goal;
mod palette;
mod render;
mod routes;


use assets::AssetResolver;
use config::SiteConfig;

/// Artwork resolver shared with every route via Rocket managed state.
pub struct Assets(pub Box<dyn AssetResolver>);

#[catch(404)]
fn not_found() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>404</h1><p>Page not found.</p><a href='/'>← Goals</a></body></html>".to_string())
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>500</h1><p>Internal server error.</p><a href='/'>← Goals</a></body></html>".to_string())
}

/// Mount the badge routes and artwork once. This is the only registration
/// step; everything it mounts is stateless apart from the immutable config.
pub fn build_rocket(cfg: SiteConfig) -> Rocket<Build> {
    let figment = rocket::Config::figment().merge(("template_dir", boot::TEMPLATE_DIR));
    let assets = Assets(cfg.asset_resolver());
    let art_dir = cfg.assets.dir.clone();
    let art_mount = cfg.assets.mount.clone();

    rocket::custom(figment)
        .manage(cfg)
        .manage(assets)
        .attach(Template::fairing())
        .mount(&art_mount, FileServer::new(art_dir, Options::Missing | Options::Index))
        .mount("/", routes::public::routes())
        .mount("/", routes::api::routes())
        .register("/", catchers![not_found, server_error])
}

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let cfg = SiteConfig::load(Path::new(config::CONFIG_FILE));

    // Create the artwork directory and report missing files before launch
    boot::run(&cfg);

    eprintln!("Artwork served at: {}", cfg.assets.mount);

    build_rocket(cfg)
}
