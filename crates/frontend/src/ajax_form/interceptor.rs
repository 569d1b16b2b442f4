use std::pin::pin;

use contracts::shared::form_envelope::FormEnvelope;
use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, AbortSignal, Event, FormData, HtmlFormElement};

use super::busy::{control_value, BusyForm};
use super::error::SubmitError;
use super::payload::{build_body, response_slot_id, Submitter, FORM_CONTENT_TYPE};
use crate::shared::config;
use crate::shared::dom;
use crate::shared::hooks::{self, describe_js_error, HookContext, HookList};

pub const FORM_SELECTOR: &str = "form.ajaxform";

pub fn attach_all() -> usize {
    let forms: Vec<HtmlFormElement> = dom::select_all(FORM_SELECTOR)
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlFormElement>().ok())
        .collect();
    for form in &forms {
        intercept(form);
    }
    log::debug!("stew: {} ajax form(s) intercepted", forms.len());
    forms.len()
}

/// Replace native submission of `form` with [`submit`].
pub fn intercept(form: &HtmlFormElement) {
    let target = form.clone();
    dom::listen(form, &["submit"], move |event: Event| {
        event.prevent_default();
        event.stop_immediate_propagation();
        spawn_local(submit(target.clone()));
    });
}

/// Post `form`, then apply the envelope or report the failure.
///
/// The form is restored before any response html or hook touches the page.
/// A form whose previous request is still outstanding is left alone.
pub async fn submit(form: HtmlFormElement) {
    if BusyForm::is_engaged(&form) {
        log::debug!("stew: form '{}' is still submitting, ignoring", form.id());
        return;
    }
    let config = config::current();
    let submitter = active_submitter();
    let body = build_body(&form_fields(&form), submitter.as_ref());
    let url = action_url(&form);

    let busy = BusyForm::engage(&form, &config);
    let outcome = post_form(&url, body, config.request_timeout_ms)
        .await
        .and_then(|text| {
            FormEnvelope::parse(&text).map_err(|err| {
                log::error!("stew: unreadable response body: {}", text);
                SubmitError::BadResponse(err.to_string())
            })
        });
    busy.release();

    match outcome {
        Ok(envelope) => apply_envelope(&form, envelope),
        Err(err) => {
            log::error!("stew: submission of form '{}' to '{}' failed: {}", form.id(), url, err);
            dom::alert(err.user_message(&config));
        }
    }
}

async fn post_form(url: &str, body: String, timeout_ms: u32) -> Result<String, SubmitError> {
    let controller =
        AbortController::new().map_err(|err| SubmitError::Transport(describe_js_error(&err)))?;
    let signal = controller.signal();

    let request = pin!(send(url, body, &signal));
    let deadline = pin!(TimeoutFuture::new(timeout_ms));
    match future::select(request, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            controller.abort();
            Err(SubmitError::Timeout(timeout_ms))
        }
    }
}

async fn send(url: &str, body: String, signal: &AbortSignal) -> Result<String, SubmitError> {
    let response = Request::post(url)
        .header("Content-Type", FORM_CONTENT_TYPE)
        .header("X-Requested-With", "XMLHttpRequest")
        .abort_signal(Some(signal))
        .body(body)
        .map_err(|err| SubmitError::Transport(err.to_string()))?
        .send()
        .await
        .map_err(|err| SubmitError::Transport(err.to_string()))?;

    if !response.ok() {
        return Err(SubmitError::Status(response.status()));
    }

    response
        .text()
        .await
        .map_err(|err| SubmitError::Transport(err.to_string()))
}

fn apply_envelope(form: &HtmlFormElement, envelope: FormEnvelope) {
    let form_id = form.id();
    let slot = response_slot_id(&form_id)
        .and_then(|id| dom::document().and_then(|document| document.get_element_by_id(&id)));

    if let Some(html) = envelope.accepted_html() {
        super::store_response_html(html);
        if let Some(slot) = &slot {
            slot.set_inner_html(html);
        }
    }

    let Some(raw) = envelope.hooks() else {
        return;
    };
    let hook_list = HookList::parse(raw);
    let ctx = HookContext::new(form)
        .with_target(slot.as_ref())
        .with_response(envelope.clone());
    if let Err(err) = hooks::run_hooks(&hook_list, &ctx) {
        dom::alert(&format!(
            "Hook error in response js for form='{}'. Check console.",
            form_id
        ));
        log::error!("stew: {}", err);
        log::error!("stew: js=\"{}\"", hook_list);
    }
}

/// Focused control at submit time; stands in for the clicked submit button.
fn active_submitter() -> Option<Submitter> {
    let active = dom::document()?.active_element()?;
    let name = active.get_attribute("name")?;
    let value = control_value(&active)
        .or_else(|| active.get_attribute("value"))
        .unwrap_or_default();
    Submitter::new(name, value)
}

/// Successful controls of `form`; file inputs are skipped.
fn form_fields(form: &HtmlFormElement) -> Vec<(String, String)> {
    let data = match FormData::new_with_form(form) {
        Ok(data) => data,
        Err(err) => {
            log::warn!("stew: could not read form fields: {}", describe_js_error(&err));
            return Vec::new();
        }
    };
    let Ok(Some(entries)) = js_sys::try_iter(&data) else {
        return Vec::new();
    };

    entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let pair = js_sys::Array::from(&entry);
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
}

fn action_url(form: &HtmlFormElement) -> String {
    form.get_attribute("action")
        .filter(|action| !action.is_empty())
        .or_else(|| web_sys::window().and_then(|window| window.location().href().ok()))
        .unwrap_or_default()
}
