//! Toast and slide-in notifications, plus the "connecting" dots animation.
//!
//! Both widgets are mounted once by [`mount`] and driven through the global
//! [`toast`], [`notify`] and [`dismiss_notification`] functions, which page
//! scripts also reach as `toast(...)`, `notify(...)` and `dismissNotification()`.

pub mod dots;
pub mod service;
pub mod slide_in;
pub mod toast;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::shared::config::{self, StewConfig};
pub use service::NotificationService;
pub use slide_in::{NotifyRequest, SlideIn, SlideInState};
pub use toast::{Toast, ToastState};

/// Append the toast and slide-in panel to `<body>`. Only the first call mounts.
pub fn mount(config: &StewConfig) -> bool {
    if service::current().is_some() {
        return false;
    }

    let config = config.clone();
    leptos::mount::mount_to_body(move || {
        let notifications = NotificationService::new(&config);
        service::install(notifications);
        provide_context(notifications);

        view! {
            <Toast/>
            <SlideIn/>
        }
    });
    true
}

/// `toast(text, duration?, backgroundColor?, textColor?)`
#[wasm_bindgen]
pub fn toast(
    text: &str,
    duration: Option<u32>,
    background: Option<String>,
    color: Option<String>,
) {
    let Some(notifications) = service::current() else {
        log::warn!("stew: toast() called before boot");
        return;
    };
    let config = config::current();
    notifications.toast(
        text,
        duration.unwrap_or(config.toast_duration_ms),
        background.as_deref().unwrap_or(&config.toast_background),
        color.as_deref().unwrap_or(&config.toast_color),
    );
}

/// `notify(text?, title?, icon?, link?, duration?, backgroundColor?)`
#[wasm_bindgen]
pub fn notify(
    text: Option<String>,
    title: Option<String>,
    icon: Option<String>,
    link: Option<String>,
    duration: Option<u32>,
    background: Option<String>,
) {
    let Some(notifications) = service::current() else {
        log::warn!("stew: notify() called before boot");
        return;
    };
    let config = config::current();
    notifications.notify(NotifyRequest {
        text: text.unwrap_or_default(),
        title: title.unwrap_or_default(),
        icon: icon.unwrap_or(config.notification_icon),
        link: link.unwrap_or_default(),
        auto_dismiss_ms: duration.unwrap_or(0),
        background: background.unwrap_or(config.notification_background),
    });
}

#[wasm_bindgen(js_name = dismissNotification)]
pub fn dismiss_notification() {
    if let Some(notifications) = service::current() {
        notifications.dismiss();
    }
}
