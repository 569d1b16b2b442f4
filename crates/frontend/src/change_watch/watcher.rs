use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use super::compare::{is_changed, FieldKind, WatchedField, CHANGED_CLASS, WATCH_SELECTOR};
use crate::shared::dom;
use crate::shared::hooks::{self, HookContext};

/// Watch every field carrying a non-empty `button` attribute.
pub fn attach_all() -> usize {
    let fields = dom::select_all(WATCH_SELECTOR);
    for field in &fields {
        watch_field(field);
    }
    log::debug!("stew: {} watched field(s)", fields.len());
    fields.len()
}

pub fn watch_field(field: &Element) {
    let watched = field.clone();
    dom::listen(field, &["change", "keyup"], move |_| evaluate(&watched));
}

/// Compare the field against its default and update the indicator.
pub fn evaluate(field: &Element) {
    let descriptor = WatchedField::read(field);
    let Some((kind, value)) = current_value(field) else {
        return;
    };
    let rendered = match kind {
        FieldKind::MultiLine => field.inner_html(),
        FieldKind::SingleLine => String::new(),
    };
    let changed = is_changed(kind, &value, &rendered, &descriptor.default_value);

    let targets = dom::select_all(&descriptor.target_selector);
    for target in &targets {
        let classes = target.class_list();
        if changed {
            let _ = classes.add_1(CHANGED_CLASS);
            dom::set_style(target, "display", "inline-block");
        } else {
            let _ = classes.remove_1(CHANGED_CLASS);
            dom::set_style(target, "display", "none");
        }
    }

    let hook_list = descriptor.hooks(changed);
    let ctx = HookContext::new(field).with_target(targets.first());
    if let Err(err) = hooks::run_hooks(hook_list, &ctx) {
        let attribute = WatchedField::hook_attribute(changed);
        let name = field.get_attribute("name").unwrap_or_else(|| field.tag_name().to_lowercase());
        dom::alert(&format!("Hook error in {} for field '{}'. Check console.", attribute, name));
        log::error!("stew: {}", err);
        log::error!("stew: {}=\"{}\"", attribute, hook_list);
    }
}

fn current_value(field: &Element) -> Option<(FieldKind, String)> {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        return Some((FieldKind::SingleLine, input.value()));
    }
    if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        return Some((FieldKind::SingleLine, select.value()));
    }
    field
        .dyn_ref::<HtmlTextAreaElement>()
        .map(|textarea| (FieldKind::MultiLine, textarea.value()))
}
