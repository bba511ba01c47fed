use serde::Serialize;

/// Official goal titles, 1-indexed by goal number (index 0 = goal 1).
pub const GOAL_TITLES: [&str; 17] = [
    "No Poverty",
    "Zero Hunger",
    "Good Health and Well-being",
    "Quality Education",
    "Gender Equality",
    "Clean Water and Sanitation",
    "Affordable and Clean Energy",
    "Decent Work and Economic Growth",
    "Industry, Innovation, and Infrastructure",
    "Reduced Inequalities",
    "Sustainable Cities and Communities",
    "Responsible Consumption and Production",
    "Climate Action",
    "Life Below Water",
    "Life on Land",
    "Peace, Justice, and Strong Institutions",
    "Partnerships for the Goals",
];

pub const ALL_GOALS_TITLE: &str = "UN Sustainable Development Goals";
pub const LOGO_TITLE: &str = "UN Sustainable Development Goals Logo";

pub const ALL_ID: &str = "all";
pub const CIRCLE_ID: &str = "circle";

/// What a raw goal identifier refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// One of the seventeen goals, always in 1..=17.
    Numbered(u8),
    All,
    Circle,
    /// Anything else, including integers outside 1..=17.
    Unrecognized,
}

impl Goal {
    /// Classify a raw identifier. Never fails: unknown shapes are `Unrecognized`.
    pub fn classify(raw: &str) -> Goal {
        if let Some(n) = parse_integer(raw) {
            return match goal_title(n) {
                Some(_) => Goal::Numbered(n as u8),
                None => Goal::Unrecognized,
            };
        }
        match raw {
            ALL_ID => Goal::All,
            CIRCLE_ID => Goal::Circle,
            _ => Goal::Unrecognized,
        }
    }

    /// Computed title, or `None` for unrecognized identifiers.
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Goal::Numbered(n) => goal_title(i64::from(*n)),
            Goal::All => Some(ALL_GOALS_TITLE),
            Goal::Circle => Some(LOGO_TITLE),
            Goal::Unrecognized => None,
        }
    }

    /// Canonical identifier string ("1".."17", "all", "circle").
    pub fn id(&self) -> Option<String> {
        match self {
            Goal::Numbered(n) => Some(n.to_string()),
            Goal::All => Some(ALL_ID.to_string()),
            Goal::Circle => Some(CIRCLE_ID.to_string()),
            Goal::Unrecognized => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Goal::Unrecognized)
    }

    /// Every recognized goal in display order: 1..=17, then "all", then "circle".
    pub fn all() -> impl Iterator<Item = Goal> {
        (1..=GOAL_TITLES.len() as u8)
            .map(Goal::Numbered)
            .chain([Goal::All, Goal::Circle])
    }
}

/// Bounds-checked title lookup by goal number.
pub fn goal_title(n: i64) -> Option<&'static str> {
    if n < 1 {
        return None;
    }
    let idx = usize::try_from(n - 1).ok()?;
    GOAL_TITLES.get(idx).copied()
}

/// Integer parse that tolerates surrounding whitespace, a leading `+` and a
/// zero fractional part ("7.0", "7e0"). "7.5", "NaN" and "inf" are not integers.
fn parse_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(n);
    }
    let f = trimmed.parse::<f64>().ok()?;
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        Some(f as i64)
    } else {
        None
    }
}

/// Resolve the accessible label for a goal.
/// A non-empty `override_label` is returned verbatim; otherwise the computed
/// title, or an empty string for unrecognized identifiers.
pub fn resolve_label(goal: &str, override_label: &str) -> String {
    if !override_label.is_empty() {
        return override_label.to_string();
    }
    Goal::classify(goal).title().unwrap_or("").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_numbered_goals() {
        assert_eq!(Goal::classify("1"), Goal::Numbered(1));
        assert_eq!(Goal::classify("17"), Goal::Numbered(17));
        assert_eq!(Goal::classify(" 7 "), Goal::Numbered(7));
        assert_eq!(Goal::classify("+7"), Goal::Numbered(7));
        assert_eq!(Goal::classify("07"), Goal::Numbered(7));
    }

    #[test]
    fn classify_out_of_range_integers() {
        for raw in ["0", "18", "-1", "99999999999999999999", "-9223372036854775808"] {
            assert_eq!(Goal::classify(raw), Goal::Unrecognized, "{}", raw);
        }
    }

    #[test]
    fn classify_literals_are_case_sensitive() {
        assert_eq!(Goal::classify("all"), Goal::All);
        assert_eq!(Goal::classify("circle"), Goal::Circle);
        assert_eq!(Goal::classify("ALL"), Goal::Unrecognized);
        assert_eq!(Goal::classify("Circle"), Goal::Unrecognized);
        assert_eq!(Goal::classify(""), Goal::Unrecognized);
    }

    #[test]
    fn classify_whole_decimals() {
        assert_eq!(Goal::classify("7.0"), Goal::Numbered(7));
        assert_eq!(Goal::classify("17.00"), Goal::Numbered(17));
        assert_eq!(Goal::classify("7e0"), Goal::Numbered(7));
        assert_eq!(resolve_label("7.0", ""), "Affordable and Clean Energy");
        for raw in ["7.5", "18.0", "0.0", "NaN", "inf", "1e300"] {
            assert_eq!(Goal::classify(raw), Goal::Unrecognized, "{}", raw);
        }
    }

    #[test]
    fn goal_title_bounds() {
        assert_eq!(goal_title(1), Some("No Poverty"));
        assert_eq!(goal_title(17), Some("Partnerships for the Goals"));
        assert_eq!(goal_title(0), None);
        assert_eq!(goal_title(18), None);
        assert_eq!(goal_title(i64::MIN), None);
        assert_eq!(goal_title(i64::MAX), None);
    }

    #[test]
    fn all_lists_nineteen_in_order() {
        let ids: Vec<String> = Goal::all().filter_map(|g| g.id()).collect();
        assert_eq!(ids.len(), 19);
        assert_eq!(ids[0], "1");
        assert_eq!(ids[16], "17");
        assert_eq!(ids[17], "all");
        assert_eq!(ids[18], "circle");
    }

    #[test]
    fn override_wins_even_when_blank_goal() {
        assert_eq!(resolve_label("", "Custom"), "Custom");
        assert_eq!(resolve_label("3", " "), " ");
    }
}
