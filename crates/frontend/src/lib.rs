//! stew: AJAX forms, declarative slide-in panels, unsaved-change indicators
//! and notifications for server-rendered pages.
//!
//! Page scripts register hooks, then call `boot()`:
//!
//! ```js
//! import init, { boot, registerHook, toast } from "./pkg/stew.js";
//!
//! await init();
//! registerHook("saved", () => toast("Saved"));
//! boot({ requestTimeoutMs: 30000 });
//! ```

pub mod ajax_form;
pub mod change_watch;
pub mod notifications;
pub mod shared;
pub mod system;
pub mod toggle;

use wasm_bindgen::prelude::wasm_bindgen;

pub use notifications::{dismiss_notification, notify, toast};
pub use shared::config::StewConfig;
pub use shared::hooks::{register_condition, register_hook, HookContext, HookError};
pub use system::boot::boot;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}
