use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::assets::{AssetResolver, RelativeAssets, UrlAssets};
use crate::badge::BadgeOptions;

pub const CONFIG_FILE: &str = "sdg-badge.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory holding `<goal>.svg` artwork.
    pub dir: String,
    /// URL path the artwork directory is served under.
    pub mount: String,
    /// Absolute base for artwork links. Empty means links use `mount`.
    pub base_url: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        AssetsConfig {
            dir: "website/svg".to_string(),
            mount: "/lib/svg".to_string(),
            base_url: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub assets: AssetsConfig,
    /// Defaults for requests that leave options out.
    pub badge: BadgeOptions,
}

impl SiteConfig {
    pub fn from_toml_str(s: &str) -> Result<SiteConfig, String> {
        let mut cfg: SiteConfig = toml::from_str(s).map_err(|e| e.to_string())?;
        if !cfg.assets.mount.starts_with('/') {
            cfg.assets.mount = format!("/{}", cfg.assets.mount);
        }
        Ok(cfg)
    }

    /// Read the config file, falling back to defaults when it is missing or invalid.
    pub fn load(path: &Path) -> SiteConfig {
        let raw = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(_) => {
                warn!("{} not found, using default config", path.display());
                return SiteConfig::default();
            }
        };
        match SiteConfig::from_toml_str(&raw) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Invalid {}: {} (using default config)", path.display(), e);
                SiteConfig::default()
            }
        }
    }

    /// Resolver for artwork links. An unusable `base_url` is logged and ignored.
    pub fn asset_resolver(&self) -> Box<dyn AssetResolver> {
        if !self.assets.base_url.trim().is_empty() {
            match UrlAssets::parse(self.assets.base_url.trim()) {
                Ok(u) => return Box::new(u),
                Err(e) => warn!("{} (falling back to {})", e, self.assets.mount),
            }
        }
        Box::new(RelativeAssets::new(&self.assets.mount))
    }
}
