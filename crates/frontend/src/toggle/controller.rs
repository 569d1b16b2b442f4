use web_sys::Element;

use super::descriptor::{Animation, Position, SlideState, ToggleDescriptor, ATTR_INIT, TOGGLE_SELECTOR};
use crate::shared::dom;
use crate::shared::hooks::{self, HookContext, HookError, HookList};

/// Apply the initial state of every `.sw-toggle` on the page and wire its click handler.
pub fn scan_all() -> usize {
    let sources = dom::select_all(TOGGLE_SELECTOR);
    for source in &sources {
        wire_toggle(source);
    }
    log::debug!("stew: {} toggle source(s) wired", sources.len());
    sources.len()
}

pub fn wire_toggle(source: &Element) {
    apply_initial_state(source);

    let clicked = source.clone();
    dom::listen(source, &["click"], move |_| toggle(&clicked));
}

fn apply_initial_state(source: &Element) {
    let descriptor = ToggleDescriptor::read(source);
    let Some(selector) = descriptor.target_selector.as_deref() else {
        return;
    };
    let targets = dom::select_all(selector);
    let ctx = HookContext::new(source).with_target(targets.first());

    if !hooks::evaluate_condition(&descriptor.condition, &ctx) {
        return;
    }

    if descriptor.animation == Animation::FromRight {
        dom::set_root_style("overflow-x", "hidden");
        if descriptor.position == Position::Fullscreen {
            let layout = descriptor.pinned_layout();
            for target in &targets {
                for (property, value) in &layout {
                    dom::set_style(target, property, value);
                }
            }
        }
    }

    if let Err(err) = hooks::run_hooks(&descriptor.init_hooks, &ctx) {
        report_failure(ATTR_INIT, selector, &descriptor.init_hooks, &err);
    }
}

/// Click handler. The descriptor is read again and the target re-resolved on
/// every click so markup changed after load is honoured.
fn toggle(source: &Element) {
    let descriptor = ToggleDescriptor::read(source);
    if descriptor.animation != Animation::FromRight {
        return;
    }
    let Some(selector) = descriptor.target_selector.as_deref() else {
        return;
    };
    let targets = dom::select_all(selector);
    let Some(first) = targets.first() else {
        log::warn!("stew: sw-display='{}' matches no element", selector);
        return;
    };

    let current = SlideState::from_margin_left(
        &dom::computed_style(first, "margin-left").unwrap_or_default(),
    );
    let next = current.toggled();
    for target in &targets {
        dom::set_style(target, "margin-left", next.margin_left());
    }

    // The slide already happened; a failing hook only gets reported.
    let hook_list = descriptor.hooks_for(next);
    let ctx = HookContext::new(source).with_target(Some(first));
    if let Err(err) = hooks::run_hooks(hook_list, &ctx) {
        report_failure(next.hook_attribute(), selector, hook_list, &err);
    }
}

fn report_failure(attribute: &str, selector: &str, hook_list: &HookList, err: &HookError) {
    let mut message = format!("Hook error in {} for sw-display='{}'.", attribute, selector);
    if attribute == ATTR_INIT {
        message.push_str(" Check console.");
    }
    dom::alert(&message);
    log::error!("stew: {}", err);
    log::error!("stew: {}=\"{}\"", attribute, hook_list);
}
