use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement};

use crate::shared::config::StewConfig;
use crate::shared::dom;

const SUBMIT_SELECTOR: &str = "[type=\"submit\"]";
/// Present on a form while its request is outstanding.
pub const BUSY_ATTRIBUTE: &str = "data-stew-busy";

struct SavedControl {
    element: Element,
    html: String,
    value: Option<String>,
}

/// A form dimmed and relabelled while its request is in flight.
///
/// Each submit control keeps its own label and value so forms with several
/// submit buttons come back exactly as they were.
pub struct BusyForm {
    form: HtmlFormElement,
    controls: Vec<SavedControl>,
}

impl BusyForm {
    pub fn is_engaged(form: &HtmlFormElement) -> bool {
        form.has_attribute(BUSY_ATTRIBUTE)
    }

    pub fn engage(form: &HtmlFormElement, config: &StewConfig) -> Self {
        let controls = dom::select_within(form, SUBMIT_SELECTOR)
            .into_iter()
            .map(|element| {
                let saved = SavedControl {
                    html: element.inner_html(),
                    value: control_value(&element),
                    element,
                };
                saved.element.set_inner_html(&config.in_progress_label);
                set_control_value(&saved.element, &config.in_progress_value);
                saved
            })
            .collect();

        dom::set_styles(form, &[("opacity", "0.4"), ("pointer-events", "none")]);
        let _ = form.set_attribute(BUSY_ATTRIBUTE, "");

        Self {
            form: form.clone(),
            controls,
        }
    }

    pub fn release(self) {
        dom::set_styles(&self.form, &[("opacity", "1"), ("pointer-events", "all")]);
        let _ = self.form.remove_attribute(BUSY_ATTRIBUTE);
        for control in &self.controls {
            control.element.set_inner_html(&control.html);
            if let Some(value) = &control.value {
                set_control_value(&control.element, value);
            }
        }
    }
}

/// `value` property of inputs and buttons.
pub(crate) fn control_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    element
        .dyn_ref::<HtmlButtonElement>()
        .map(HtmlButtonElement::value)
}

fn set_control_value(element: &Element, value: &str) {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
        button.set_value(value);
    }
}
