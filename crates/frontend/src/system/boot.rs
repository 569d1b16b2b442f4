//! One-time page initialization.

use std::cell::Cell;

use wasm_bindgen::prelude::*;

use crate::notifications::{self, dots};
use crate::shared::config::{self, StewConfig};
use crate::shared::dom;
use crate::{ajax_form, change_watch, toggle};

thread_local! {
    static BOOTED: Cell<bool> = const { Cell::new(false) };
}

/// Install `config`, then wire every behaviour once the document is parsed.
///
/// Register hooks and conditions before calling this: toggle conditions and
/// init hooks run during the first scan. Later calls are ignored.
pub fn boot(config: StewConfig) {
    if BOOTED.with(|booted| booted.replace(true)) {
        log::warn!("stew: boot() called more than once, ignoring");
        return;
    }

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level());
    config::install(config);

    dom::when_ready(wire_page);
}

fn wire_page() {
    let config = config::current();

    notifications::mount(&config);
    dots::start(config.dots_period_ms);

    let forms = ajax_form::attach_all();
    let fields = change_watch::attach_all();
    let toggles = toggle::scan_all();

    log::info!(
        "stew: ready ({} form(s), {} watched field(s), {} toggle(s))",
        forms,
        fields,
        toggles
    );
}

/// `boot(config?)` for page scripts; `config` is a partial [`StewConfig`] object.
#[wasm_bindgen(js_name = boot)]
pub fn boot_js(config: JsValue) -> Result<(), JsValue> {
    let config = if config.is_undefined() || config.is_null() {
        StewConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };
    boot(config);
    Ok(())
}
