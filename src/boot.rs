use log::{error, info, warn};
use std::fs;
use std::path::Path;
use std::process;

use crate::assets::asset_file_name;
use crate::config::SiteConfig;
use crate::goal::Goal;

pub const TEMPLATE_DIR: &str = "website/templates";

/// Templates the gallery page cannot render without
const CRITICAL_TEMPLATES: &[&str] = &["gallery.html.tera"];

#[derive(Debug, Default)]
pub struct BootReport {
    pub warnings: u32,
    pub errors: u32,
    /// Artwork files expected for recognized goals but absent on disk.
    pub missing_artwork: Vec<String>,
}

/// Run all boot checks relative to the working directory. Call this before
/// Rocket launches. Aborts the process when a check fails hard.
pub fn run(cfg: &SiteConfig) {
    info!("sdg-badge boot check starting...");

    let report = check(cfg, Path::new("."));

    if report.errors > 0 {
        error!(
            "Boot check FAILED: {} error(s), {} warning(s). Aborting.",
            report.errors, report.warnings
        );
        process::exit(1);
    }

    if report.warnings > 0 {
        warn!(
            "Boot check passed with {} warning(s). Some badges may show broken images.",
            report.warnings
        );
    } else {
        info!("Boot check passed. All systems go.");
    }
}

/// The checks themselves, rooted at `root`.
pub fn check(cfg: &SiteConfig, root: &Path) -> BootReport {
    let mut report = BootReport::default();

    // ── 1. Artwork directory ───────────────────────────
    let art_dir = root.join(&cfg.assets.dir);
    if !art_dir.exists() {
        match fs::create_dir_all(&art_dir) {
            Ok(_) => info!("  Created directory: {}", art_dir.display()),
            Err(e) => {
                error!("  FAILED to create directory {}: {}", art_dir.display(), e);
                report.errors += 1;
                return report;
            }
        }
    } else if !art_dir.is_dir() {
        error!("  Artwork path is not a directory: {}", art_dir.display());
        report.errors += 1;
        return report;
    }

    // ── 2. Goal artwork ────────────────────────────────
    for goal in Goal::all() {
        let Some(id) = goal.id() else { continue };
        let file = asset_file_name(&id);
        if !art_dir.join(&file).is_file() {
            report.missing_artwork.push(file);
        }
    }
    if !report.missing_artwork.is_empty() {
        warn!(
            "  Missing artwork in {}: {}",
            art_dir.display(),
            report.missing_artwork.join(", ")
        );
        report.warnings += 1;
    }

    // ── 3. Templates ───────────────────────────────────
    for file in CRITICAL_TEMPLATES {
        let path = root.join(TEMPLATE_DIR).join(file);
        if !path.exists() {
            warn!("  Missing template: {} (gallery page will 500)", path.display());
            report.warnings += 1;
        }
    }

    // ── 4. Rocket.toml exists ──────────────────────────
    if !root.join("Rocket.toml").exists() {
        warn!("  Rocket.toml not found, using default config");
        report.warnings += 1;
    }

    report
}
