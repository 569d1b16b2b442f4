//! Named hook registry.
//!
//! Markup attributes (`sw-init-js`, `new-js`, ...) and the `js` field of a form
//! response carry `;`-separated hook names. The page registers the behaviour
//! behind each name once, either from Rust with [`register_hook`] or from page
//! scripts through the `registerHook` export.
//!
//! ```rust,ignore
//! stew::shared::hooks::register_hook("lockScroll", |_ctx| {
//!     stew::shared::dom::set_root_style("overflow", "hidden");
//!     Ok(())
//! });
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use contracts::shared::form_envelope::FormEnvelope;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HookError {
    #[error("hook `{0}` is not registered")]
    Unknown(String),

    #[error("hook `{name}` failed: {message}")]
    Failed { name: String, message: String },
}

/// What a hook gets to look at when it runs.
#[derive(Clone, Default)]
pub struct HookContext {
    /// Element that carried the hook attribute (toggle source, field or form).
    pub source: Option<Element>,
    /// Element the behaviour acted on, when there is one.
    pub target: Option<Element>,
    /// Parsed response, for hooks named by a form response.
    pub response: Option<FormEnvelope>,
}

impl HookContext {
    pub fn new(source: &Element) -> Self {
        Self {
            source: Some(source.clone()),
            ..Self::default()
        }
    }

    pub fn with_target(mut self, target: Option<&Element>) -> Self {
        self.target = target.cloned();
        self
    }

    pub fn with_response(mut self, response: FormEnvelope) -> Self {
        self.response = Some(response);
        self
    }

    /// Plain JS object `{ source, target, response }` handed to script hooks.
    pub fn to_js(&self) -> JsValue {
        let object = js_sys::Object::new();
        let element_or_null =
            |element: &Option<Element>| element.clone().map(JsValue::from).unwrap_or(JsValue::NULL);
        let response = self
            .response
            .as_ref()
            .and_then(|envelope| serde_wasm_bindgen::to_value(envelope).ok())
            .unwrap_or(JsValue::NULL);

        let _ = js_sys::Reflect::set(&object, &"source".into(), &element_or_null(&self.source));
        let _ = js_sys::Reflect::set(&object, &"target".into(), &element_or_null(&self.target));
        let _ = js_sys::Reflect::set(&object, &"response".into(), &response);
        object.into()
    }
}

pub type HookFn = Rc<dyn Fn(&HookContext) -> Result<(), String>>;
pub type ConditionFn = Rc<dyn Fn(&HookContext) -> bool>;

#[derive(Default)]
struct HookRegistry {
    hooks: HashMap<String, HookFn>,
    conditions: HashMap<String, ConditionFn>,
}

// Page-lifetime registry; the wasm module runs on a single thread.
thread_local! {
    static REGISTRY: RefCell<HookRegistry> = RefCell::new(HookRegistry::default());
}

/// Register (or replace) the hook behind `name`.
pub fn register_hook<F>(name: impl Into<String>, hook: F)
where
    F: Fn(&HookContext) -> Result<(), String> + 'static,
{
    let name = name.into();
    if is_registered(&name) {
        log::debug!("stew: hook `{}` replaced", name);
    } else {
        log::debug!("stew: hook `{}` registered", name);
    }
    REGISTRY.with(|registry| {
        registry.borrow_mut().hooks.insert(name, Rc::new(hook));
    });
}

/// Register (or replace) the condition behind `name`, used by `sw-condition`.
pub fn register_condition<F>(name: impl Into<String>, condition: F)
where
    F: Fn(&HookContext) -> bool + 'static,
{
    let name = name.into();
    log::debug!("stew: condition `{}` registered", name);
    REGISTRY.with(|registry| {
        registry.borrow_mut().conditions.insert(name, Rc::new(condition));
    });
}

fn is_registered(name: &str) -> bool {
    REGISTRY.with(|registry| registry.borrow().hooks.contains_key(name))
}

/// Ordered list of hook names as written in an attribute or response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookList(Vec<String>);

impl HookList {
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(';')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for HookList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("; "))
    }
}

/// Run every hook of `list` in order, stopping at the first failure.
pub fn run_hooks(list: &HookList, ctx: &HookContext) -> Result<(), HookError> {
    for name in list.names() {
        // Clone the handle out so a hook may register other hooks while it runs.
        let hook = REGISTRY
            .with(|registry| registry.borrow().hooks.get(name).cloned())
            .ok_or_else(|| HookError::Unknown(name.clone()))?;

        hook(ctx).map_err(|message| HookError::Failed {
            name: name.clone(),
            message,
        })?;
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition<'a> {
    Literal(bool),
    Named(&'a str),
}

impl<'a> Condition<'a> {
    /// Blank and `false`/`0` are falsy, `true`/`1` truthy, anything else is a
    /// registered condition name.
    pub fn parse(expr: &'a str) -> Self {
        match expr.trim() {
            "" | "false" | "0" => Condition::Literal(false),
            "true" | "1" => Condition::Literal(true),
            name => Condition::Named(name),
        }
    }
}

pub fn evaluate_condition(expr: &str, ctx: &HookContext) -> bool {
    match Condition::parse(expr) {
        Condition::Literal(value) => value,
        Condition::Named(name) => {
            let condition =
                REGISTRY.with(|registry| registry.borrow().conditions.get(name).cloned());
            match condition {
                Some(condition) => condition(ctx),
                None => {
                    log::warn!("stew: condition `{}` is not registered, treating as false", name);
                    false
                }
            }
        }
    }
}

/// Human readable message for a value thrown by page script.
pub fn describe_js_error(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// `registerHook(name, fn)`: the function receives `{ source, target, response }`.
#[wasm_bindgen(js_name = registerHook)]
pub fn register_js_hook(name: String, callback: js_sys::Function) {
    register_hook(name, move |ctx| {
        callback
            .call1(&JsValue::NULL, &ctx.to_js())
            .map(|_| ())
            .map_err(|err| describe_js_error(&err))
    });
}

/// `registerCondition(name, fn)`: the return value is checked for truthiness.
#[wasm_bindgen(js_name = registerCondition)]
pub fn register_js_condition(name: String, callback: js_sys::Function) {
    let label = name.clone();
    register_condition(name, move |ctx| {
        match callback.call1(&JsValue::NULL, &ctx.to_js()) {
            Ok(value) => value.is_truthy(),
            Err(err) => {
                log::error!("stew: condition `{}` threw: {}", label, describe_js_error(&err));
                false
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> Rc<RefCell<Vec<&'static str>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn test_hook_list_parsing() {
        let list = HookList::parse(" openMenu ;; track ;");
        assert_eq!(list.names(), ["openMenu".to_string(), "track".to_string()]);
        assert_eq!(list.to_string(), "openMenu; track");
        assert!(HookList::parse(" ; ").is_empty());
    }

    #[test]
    fn test_hooks_run_in_order() {
        let calls = recorder();
        let first = calls.clone();
        let second = calls.clone();
        register_hook("first", move |_| {
            first.borrow_mut().push("first");
            Ok(())
        });
        register_hook("second", move |_| {
            second.borrow_mut().push("second");
            Ok(())
        });

        run_hooks(&HookList::parse("second; first"), &HookContext::default()).unwrap();
        assert_eq!(*calls.borrow(), vec!["second", "first"]);
    }

    #[test]
    fn test_failure_stops_the_chain() {
        let calls = recorder();
        let after = calls.clone();
        register_hook("broken", |_| Err("boom".to_string()));
        register_hook("after", move |_| {
            after.borrow_mut().push("after");
            Ok(())
        });

        let err = run_hooks(&HookList::parse("broken; after"), &HookContext::default());
        assert_eq!(
            err,
            Err(HookError::Failed {
                name: "broken".to_string(),
                message: "boom".to_string()
            })
        );
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_unknown_hook_is_an_error() {
        let err = run_hooks(&HookList::parse("nowhere"), &HookContext::default());
        assert_eq!(err, Err(HookError::Unknown("nowhere".to_string())));
        assert!(!is_registered("nowhere"));
    }

    #[test]
    fn test_empty_list_is_a_no_op() {
        assert_eq!(run_hooks(&HookList::default(), &HookContext::default()), Ok(()));
    }

    #[test]
    fn test_condition_literals() {
        let ctx = HookContext::default();
        assert!(!evaluate_condition("", &ctx));
        assert!(!evaluate_condition(" false ", &ctx));
        assert!(!evaluate_condition("0", &ctx));
        assert!(evaluate_condition("true", &ctx));
        assert!(evaluate_condition("1", &ctx));
    }

    #[test]
    fn test_named_conditions() {
        register_condition("isWide", |_| true);
        register_condition("isNarrow", |_| false);

        let ctx = HookContext::default();
        assert!(evaluate_condition("isWide", &ctx));
        assert!(!evaluate_condition("isNarrow", &ctx));
        assert!(!evaluate_condition("neverRegistered", &ctx));
        assert_eq!(Condition::parse(" isWide "), Condition::Named("isWide"));
    }
}
