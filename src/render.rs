use serde::Serialize;

use crate::assets::AssetResolver;
use crate::badge::BadgeOptions;
use crate::goal::{resolve_label, Goal};
use crate::palette;

/// Appended to the label of colour-only badges.
pub const COLOR_ONLY_SUFFIX: &str = " color only";

/// Scoped styles for badge markup. Emit once per page.
pub const BADGE_CSS: &str = r#".sdg-badge { display: block; }
.sdg-badge img,
.sdg-badge .wrapper {
  width: var(--width, 200px);
  background-color: var(--goal-color, white);
  display: block;
}
.sdg-badge .color.wrapper { height: var(--width, 200px); }
.sdg-badge div { padding: 0; margin: 0; }
"#;

/// Everything the page needs to draw one badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderDescriptor {
    ColorSwatch {
        width: u32,
        color_token: String,
        accessible_label: String,
    },
    Image {
        src: String,
        width: u32,
        accessible_label: String,
        /// Shows through transparent parts of the artwork.
        color_token: String,
    },
}

impl RenderDescriptor {
    pub fn width(&self) -> u32 {
        match self {
            RenderDescriptor::ColorSwatch { width, .. } | RenderDescriptor::Image { width, .. } => {
                *width
            }
        }
    }

    /// Swatches are always square; images keep their intrinsic aspect ratio.
    pub fn height(&self) -> Option<u32> {
        match self {
            RenderDescriptor::ColorSwatch { width, .. } => Some(*width),
            RenderDescriptor::Image { .. } => None,
        }
    }

    pub fn color_token(&self) -> &str {
        match self {
            RenderDescriptor::ColorSwatch { color_token, .. }
            | RenderDescriptor::Image { color_token, .. } => color_token,
        }
    }

    pub fn accessible_label(&self) -> &str {
        match self {
            RenderDescriptor::ColorSwatch {
                accessible_label, ..
            }
            | RenderDescriptor::Image {
                accessible_label, ..
            } => accessible_label,
        }
    }
}

/// Decide how a badge is drawn. Pure: same options, same descriptor.
pub fn select_render(opts: &BadgeOptions, assets: &dyn AssetResolver) -> RenderDescriptor {
    let label = resolve_label(&opts.goal, &opts.label);
    let width = opts.effective_width();
    let color_token = palette::color_token(&opts.goal);

    if opts.color_only {
        RenderDescriptor::ColorSwatch {
            width,
            color_token,
            accessible_label: format!("{}{}", label, COLOR_ONLY_SUFFIX),
        }
    } else {
        RenderDescriptor::Image {
            src: assets.resolve(&opts.goal),
            width,
            accessible_label: label,
            color_token,
        }
    }
}

/// Render a badge straight to an HTML fragment.
pub fn render_badge(opts: &BadgeOptions, assets: &dyn AssetResolver) -> String {
    let fallback = palette::fallback_color(&Goal::classify(&opts.goal));
    descriptor_html(&select_render(opts, assets), fallback)
}

/// HTML for a descriptor. `fallback` is the colour used when the page does
/// not define the descriptor's colour token.
pub fn descriptor_html(desc: &RenderDescriptor, fallback: &str) -> String {
    let width = desc.width();
    let color = html_escape(&format!("var({}, {})", desc.color_token(), fallback));
    let label = html_escape(desc.accessible_label());

    match desc {
        RenderDescriptor::ColorSwatch { .. } => format!(
            r#"<div class="sdg-badge"><div class="color wrapper" style="--width: {w}px; --goal-color: {c}; height: {h}px" role="img" aria-label="{l}"></div></div>"#,
            w = width,
            h = desc.height().unwrap_or(width),
            c = color,
            l = label,
        ),
        RenderDescriptor::Image { src, .. } => format!(
            r#"<div class="sdg-badge"><div class="svg wrapper" style="--width: {w}px; --goal-color: {c}"><img src="{s}" alt="{l}" loading="lazy" fetchpriority="low" width="{w}"></div></div>"#,
            w = width,
            c = color,
            s = html_escape(src),
            l = label,
        ),
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
