use std::cell::Cell;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::slide_in::{NotifyRequest, SlideInState};
use super::toast::ToastState;
use crate::shared::config::StewConfig;

/// Owner of the toast and slide-in panel state.
///
/// One instance is created when the widgets mount and shared through context
/// and [`current`].
#[derive(Clone, Copy)]
pub struct NotificationService {
    toast: RwSignal<ToastState>,
    slide_in: RwSignal<SlideInState>,
}

impl NotificationService {
    pub fn new(config: &StewConfig) -> Self {
        Self {
            toast: RwSignal::new(ToastState::new(&config.toast_background, &config.toast_color)),
            slide_in: RwSignal::new(SlideInState::new(&config.notification_background)),
        }
    }

    pub fn toast_state(&self) -> RwSignal<ToastState> {
        self.toast
    }

    pub fn slide_in_state(&self) -> RwSignal<SlideInState> {
        self.slide_in
    }

    /// Show `content` and hide it after `duration_ms`, unless another toast
    /// replaced it in the meantime.
    pub fn toast(&self, content: &str, duration_ms: u32, background: &str, color: &str) {
        let Some(generation) = self
            .toast
            .try_update(|toast| toast.show(content, background, color))
        else {
            return;
        };

        let toast = self.toast;
        spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            toast.maybe_update(|toast| toast.expire(generation));
        });
    }

    pub fn notify(&self, request: NotifyRequest) {
        let Some(generation) = self
            .slide_in
            .try_update(|panel| panel.notify(&request))
            .flatten()
        else {
            return;
        };

        if request.auto_dismiss_ms > 0 {
            let slide_in = self.slide_in;
            spawn_local(async move {
                TimeoutFuture::new(request.auto_dismiss_ms).await;
                slide_in.maybe_update(|panel| panel.expire(generation));
            });
        }
    }

    pub fn dismiss(&self) {
        self.slide_in.update(SlideInState::dismiss);
    }
}

thread_local! {
    static CURRENT: Cell<Option<NotificationService>> = const { Cell::new(None) };
}

pub(crate) fn install(service: NotificationService) {
    CURRENT.with(|current| current.set(Some(service)));
}

/// The mounted service, if the widgets were mounted.
pub fn current() -> Option<NotificationService> {
    CURRENT.with(Cell::get)
}
