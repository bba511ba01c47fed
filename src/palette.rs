use crate::goal::Goal;

/// Official SDG colours, index 0 = goal 1.
const GOAL_COLORS: [&str; 17] = [
    "#E5243B", "#DDA63A", "#4C9F38", "#C5192D", "#FF3A21", "#26BDE2", "#FCC30B", "#A21942",
    "#FD6925", "#DD1367", "#FD9D24", "#BF8B2E", "#3F7E44", "#0A97D9", "#56C02B", "#00689D",
    "#19486A",
];

/// Colour used when no goal colour applies.
pub const NEUTRAL_COLOR: &str = "white";

const TOKEN_PREFIX: &str = "--un-sdg-color-";

/// CSS custom property carrying the colour for a goal identifier.
/// Keyed by the identifier with anything outside `[A-Za-z0-9_-]` replaced by
/// `_`, so the token is always a plain CSS ident. The value itself is
/// supplied by the page.
pub fn color_token(goal: &str) -> String {
    let suffix: String = goal
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}{}", TOKEN_PREFIX, suffix)
}

pub fn fallback_color(goal: &Goal) -> &'static str {
    match goal {
        Goal::Numbered(n) => GOAL_COLORS
            .get(usize::from(*n).wrapping_sub(1))
            .copied()
            .unwrap_or(NEUTRAL_COLOR),
        _ => NEUTRAL_COLOR,
    }
}

/// `var(<token>, <fallback>)` for use in inline styles.
pub fn css_color(goal: &str) -> String {
    format!(
        "var({}, {})",
        color_token(goal),
        fallback_color(&Goal::classify(goal))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_uses_raw_identifier() {
        assert_eq!(color_token("7"), "--un-sdg-color-7");
        assert_eq!(color_token("all"), "--un-sdg-color-all");
        assert_eq!(color_token("bogus"), "--un-sdg-color-bogus");
    }

    #[test]
    fn token_cannot_break_out_of_declaration() {
        let token = color_token("x);background:url(//evil)");
        assert_eq!(token, "--un-sdg-color-x__background_url___evil_");
        assert!(!token.contains([';', ')', '(', ':', '/']));

        let css = css_color("x);background:url(//evil)");
        assert_eq!(css.matches(')').count(), 1);
        assert!(!css.contains(';'));
    }

    #[test]
    fn fallback_colors() {
        assert_eq!(fallback_color(&Goal::Numbered(1)), "#E5243B");
        assert_eq!(fallback_color(&Goal::Numbered(17)), "#19486A");
        assert_eq!(fallback_color(&Goal::Circle), NEUTRAL_COLOR);
        assert_eq!(fallback_color(&Goal::Unrecognized), NEUTRAL_COLOR);
        // Never constructed by classify, but must not panic.
        assert_eq!(fallback_color(&Goal::Numbered(0)), NEUTRAL_COLOR);
    }

    #[test]
    fn css_color_wraps_token() {
        assert_eq!(css_color("13"), "var(--un-sdg-color-13, #3F7E44)");
        assert_eq!(css_color("foo"), "var(--un-sdg-color-foo, white)");
    }
}
