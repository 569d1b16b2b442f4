use crate::shared::hooks::HookList;
use crate::shared::markup::AttributeSource;

pub const TOGGLE_SELECTOR: &str = ".sw-toggle";

pub const ATTR_CONDITION: &str = "sw-condition";
pub const ATTR_TRANSITION: &str = "sw-transition";
pub const ATTR_ANIMATE: &str = "sw-animate";
pub const ATTR_POSITION: &str = "sw-position";
pub const ATTR_DISPLAY: &str = "sw-display";
pub const ATTR_INIT: &str = "sw-init-js";
pub const ATTR_ACTIVE: &str = "sw-active-js";
pub const ATTR_INACTIVE: &str = "sw-inactive-js";

const DEFAULT_TRANSITION_SECONDS: f64 = 0.6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Animation {
    None,
    FromRight,
    Other(String),
}

impl Animation {
    fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "" => Animation::None,
            "fromright" => Animation::FromRight,
            other => Animation::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position {
    Fullscreen,
    Other(String),
}

impl Position {
    fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "" | "fullscreen" => Position::Fullscreen,
            other => Position::Other(other.to_string()),
        }
    }
}

/// Everything a `.sw-toggle` element declares about its target.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleDescriptor {
    pub condition: String,
    pub transition_seconds: f64,
    pub animation: Animation,
    pub position: Position,
    /// `None` when `sw-display` is missing or empty.
    pub target_selector: Option<String>,
    pub init_hooks: HookList,
    pub active_hooks: HookList,
    pub inactive_hooks: HookList,
}

impl ToggleDescriptor {
    pub fn read(source: &impl AttributeSource) -> Self {
        let attr = |name: &str| source.attribute(name).unwrap_or_default();
        let hooks = |names: &[&str]| {
            HookList::parse(&source.first_attribute(names).unwrap_or_default())
        };

        Self {
            condition: attr(ATTR_CONDITION),
            transition_seconds: parse_transition(source.attribute(ATTR_TRANSITION).as_deref()),
            animation: Animation::parse(&attr(ATTR_ANIMATE)),
            position: Position::parse(&attr(ATTR_POSITION)),
            target_selector: source
                .attribute(ATTR_DISPLAY)
                .filter(|selector| !selector.trim().is_empty()),
            init_hooks: hooks(&[ATTR_INIT, "sw-initjs"]),
            active_hooks: hooks(&[ATTR_ACTIVE, "sw-activejs"]),
            // The compact spelling wins here, unlike the other two hooks.
            inactive_hooks: hooks(&["sw-inactivejs", ATTR_INACTIVE]),
        }
    }

    /// Inline styles that park a fullscreen target just off the right edge.
    pub fn pinned_layout(&self) -> Vec<(&'static str, String)> {
        vec![
            ("position", "fixed".to_string()),
            ("margin-left", "100%".to_string()),
            ("transition", format!("{}s", self.transition_seconds)),
            ("top", "0".to_string()),
            ("height", "100vh".to_string()),
            ("width", "100%".to_string()),
            ("z-index", "1000000000".to_string()),
        ]
    }

    pub fn hooks_for(&self, state: SlideState) -> &HookList {
        match state {
            SlideState::Shown => &self.active_hooks,
            SlideState::Hidden => &self.inactive_hooks,
        }
    }
}

/// Leading number of `raw`, read the way `parseFloat` reads it.
///
/// Missing, unparsable and zero values fall back to 0.6 seconds.
pub fn parse_transition(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return DEFAULT_TRANSITION_SECONDS;
    };
    let trimmed = raw.trim_start();
    let candidate: String = trimmed
        .chars()
        .take_while(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
        .collect();

    (1..=candidate.len())
        .rev()
        .find_map(|end| candidate[..end].parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value != 0.0)
        .unwrap_or(DEFAULT_TRANSITION_SECONDS)
}

/// Where a `fromright` target currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideState {
    Shown,
    Hidden,
}

impl SlideState {
    /// Anything but a resolved `0px` left margin counts as hidden.
    pub fn from_margin_left(computed: &str) -> Self {
        if computed.trim() == "0px" {
            SlideState::Shown
        } else {
            SlideState::Hidden
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SlideState::Shown => SlideState::Hidden,
            SlideState::Hidden => SlideState::Shown,
        }
    }

    pub fn margin_left(self) -> &'static str {
        match self {
            SlideState::Shown => "0%",
            SlideState::Hidden => "100%",
        }
    }

    /// Attribute whose hooks run after entering this state.
    pub fn hook_attribute(self) -> &'static str {
        match self {
            SlideState::Shown => ATTR_ACTIVE,
            SlideState::Hidden => ATTR_INACTIVE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_read_full_descriptor() {
        let descriptor = ToggleDescriptor::read(&attrs(&[
            ("sw-condition", "isWide"),
            ("sw-transition", "1.5"),
            ("sw-animate", "FromRight"),
            ("sw-display", "#menu"),
            ("sw-init-js", "prepareMenu"),
            ("sw-activejs", "lockScroll; track"),
            ("sw-inactive-js", "unlockScroll"),
        ]));

        assert_eq!(descriptor.condition, "isWide");
        assert_eq!(descriptor.transition_seconds, 1.5);
        assert_eq!(descriptor.animation, Animation::FromRight);
        assert_eq!(descriptor.position, Position::Fullscreen);
        assert_eq!(descriptor.target_selector.as_deref(), Some("#menu"));
        assert_eq!(descriptor.init_hooks, HookList::parse("prepareMenu"));
        assert_eq!(descriptor.active_hooks.names().len(), 2);
        assert_eq!(descriptor.inactive_hooks, HookList::parse("unlockScroll"));
    }

    #[test]
    fn test_empty_display_means_no_target() {
        let descriptor = ToggleDescriptor::read(&attrs(&[("sw-display", "  ")]));
        assert_eq!(descriptor.target_selector, None);
        assert_eq!(descriptor.animation, Animation::None);
    }

    #[test]
    fn test_inactive_prefers_compact_spelling() {
        let descriptor = ToggleDescriptor::read(&attrs(&[
            ("sw-inactivejs", "compact"),
            ("sw-inactive-js", "hyphenated"),
            ("sw-init-js", "hyphenated"),
            ("sw-initjs", "compact"),
        ]));
        assert_eq!(descriptor.inactive_hooks, HookList::parse("compact"));
        assert_eq!(descriptor.init_hooks, HookList::parse("hyphenated"));
    }

    #[test]
    fn test_position_parsing() {
        let sidebar = ToggleDescriptor::read(&attrs(&[("sw-position", "Sidebar")]));
        assert_eq!(sidebar.position, Position::Other("sidebar".to_string()));
        let full = ToggleDescriptor::read(&attrs(&[("sw-position", "FULLSCREEN")]));
        assert_eq!(full.position, Position::Fullscreen);
    }

    #[test]
    fn test_parse_transition_like_parse_float() {
        assert_eq!(parse_transition(None), 0.6);
        assert_eq!(parse_transition(Some("")), 0.6);
        assert_eq!(parse_transition(Some("abc")), 0.6);
        assert_eq!(parse_transition(Some("0")), 0.6);
        assert_eq!(parse_transition(Some("1.25s")), 1.25);
        assert_eq!(parse_transition(Some("  2")), 2.0);
        assert_eq!(parse_transition(Some(".3")), 0.3);
        assert_eq!(parse_transition(Some("1e1x")), 10.0);
        assert_eq!(parse_transition(Some("0.8-")), 0.8);
    }

    #[test]
    fn test_pinned_layout_uses_transition() {
        let descriptor = ToggleDescriptor::read(&attrs(&[("sw-transition", "1")]));
        let layout = descriptor.pinned_layout();
        assert!(layout.contains(&("transition", "1s".to_string())));
        assert!(layout.contains(&("margin-left", "100%".to_string())));
        assert!(layout.contains(&("z-index", "1000000000".to_string())));
    }

    /// Browser stand-in: inline margins resolve to pixels on a 1280px viewport.
    fn resolve(margin: &str) -> &'static str {
        match margin {
            "0%" => "0px",
            _ => "1280px",
        }
    }

    #[test]
    fn test_click_parity() {
        let initial = "1280px";
        for clicks in 0..6 {
            let mut computed = initial;
            for _ in 0..clicks {
                let next = SlideState::from_margin_left(computed).toggled();
                computed = resolve(next.margin_left());
            }
            let expected = if clicks % 2 == 0 { initial } else { "0px" };
            assert_eq!(computed, expected, "after {clicks} clicks");
        }
    }

    #[test]
    fn test_state_hooks() {
        let descriptor = ToggleDescriptor::read(&attrs(&[
            ("sw-active-js", "open"),
            ("sw-inactive-js", "close"),
        ]));
        assert_eq!(descriptor.hooks_for(SlideState::Shown), &HookList::parse("open"));
        assert_eq!(descriptor.hooks_for(SlideState::Hidden), &HookList::parse("close"));
        assert_eq!(SlideState::Shown.hook_attribute(), "sw-active-js");
        assert_eq!(SlideState::from_margin_left("0px"), SlideState::Shown);
        assert_eq!(SlideState::from_margin_left(""), SlideState::Hidden);
    }
}
