use crate::shared::hooks::HookList;
use crate::shared::markup::AttributeSource;

pub const WATCH_SELECTOR: &str = "input[button]:not([button='']), \
                                  select[button]:not([button='']), \
                                  textarea[button]:not([button=''])";

pub const ATTR_TARGET: &str = "button";
pub const ATTR_DEFAULT: &str = "default_value";
pub const ATTR_ON_CHANGED: &str = "new-js";
pub const ATTR_ON_RESTORED: &str = "default-js";

/// Class added to the target while the field differs from its default.
pub const CHANGED_CLASS: &str = "shake";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `input` and `select`: only the value counts.
    SingleLine,
    /// `textarea`: value and rendered content both count.
    MultiLine,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchedField {
    pub default_value: String,
    pub target_selector: String,
    pub on_changed: HookList,
    pub on_restored: HookList,
}

impl WatchedField {
    pub fn read(source: &impl AttributeSource) -> Self {
        let attr = |name: &str| source.attribute(name).unwrap_or_default();
        Self {
            default_value: attr(ATTR_DEFAULT),
            target_selector: attr(ATTR_TARGET),
            on_changed: HookList::parse(&attr(ATTR_ON_CHANGED)),
            on_restored: HookList::parse(&attr(ATTR_ON_RESTORED)),
        }
    }

    pub fn hooks(&self, changed: bool) -> &HookList {
        if changed {
            &self.on_changed
        } else {
            &self.on_restored
        }
    }

    pub fn hook_attribute(changed: bool) -> &'static str {
        if changed {
            ATTR_ON_CHANGED
        } else {
            ATTR_ON_RESTORED
        }
    }
}

/// Only the first double quote is swapped; defaults are stored with single
/// quotes by the pages that render them.
fn normalize_quote(text: &str) -> String {
    text.replacen('"', "'", 1)
}

pub fn is_changed(kind: FieldKind, value: &str, rendered: &str, default: &str) -> bool {
    match kind {
        FieldKind::SingleLine => value != default,
        FieldKind::MultiLine => {
            normalize_quote(value) != default || normalize_quote(rendered) != default
        }
    }
}
