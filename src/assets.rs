use url::Url;

/// Default prefix for artwork paths, relative to the page.
pub const DEFAULT_PREFIX: &str = "lib/svg/";

/// Maps a goal identifier to a reference for its SVG artwork.
/// Implementations only build strings; nothing checks the file exists.
pub trait AssetResolver: Send + Sync {
    fn resolve(&self, goal: &str) -> String;
}

/// Artwork file name for a goal: the identifier verbatim plus `.svg`.
pub fn asset_file_name(goal: &str) -> String {
    format!("{}.svg", goal)
}

/// `<prefix><goal>.svg`
pub struct RelativeAssets {
    prefix: String,
}

impl RelativeAssets {
    pub fn new(prefix: &str) -> Self {
        let mut prefix = prefix.to_string();
        if !prefix.is_empty() && !prefix.ends_with('/') {
            prefix.push('/');
        }
        RelativeAssets { prefix }
    }
}

impl Default for RelativeAssets {
    fn default() -> Self {
        RelativeAssets::new(DEFAULT_PREFIX)
    }
}

impl AssetResolver for RelativeAssets {
    fn resolve(&self, goal: &str) -> String {
        format!("{}{}", self.prefix, asset_file_name(goal))
    }
}

/// Artwork under an absolute base URL, e.g. a CDN.
pub struct UrlAssets {
    base: Url,
}

impl UrlAssets {
    /// Parse the base URL. Query and fragment are dropped; artwork names are
    /// always appended as a path segment below the base.
    pub fn parse(base: &str) -> Result<Self, String> {
        let mut base = Url::parse(base).map_err(|e| format!("Invalid asset base URL: {}", e))?;
        if base.cannot_be_a_base() {
            return Err(format!("Asset base URL cannot be a base: {}", base));
        }
        base.set_query(None);
        base.set_fragment(None);
        Ok(UrlAssets { base })
    }
}

impl AssetResolver for UrlAssets {
    fn resolve(&self, goal: &str) -> String {
        // One percent-encoded segment: `/`, `?` and `#` in the identifier
        // cannot leave the base or start a query.
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&asset_file_name(goal));
        }
        url.to_string()
    }
}
