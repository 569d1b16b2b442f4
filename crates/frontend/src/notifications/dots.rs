//! Animated ellipsis inside `<connect>` markers, used by in-progress submit labels.

use std::cell::RefCell;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::shared::dom;

pub const DOTS_SELECTOR: &str = "connect";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotsStep {
    Append,
    Restart,
}

impl DotsStep {
    pub fn apply(self, current: &str) -> String {
        match self {
            DotsStep::Append => format!("{}.", current),
            DotsStep::Restart => ".".to_string(),
        }
    }
}

/// Page-wide tick counter. Starts at 4 so the first tick clears the marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotsCounter {
    count: u8,
}

impl Default for DotsCounter {
    fn default() -> Self {
        Self { count: 4 }
    }
}

impl DotsCounter {
    pub fn advance(&mut self) -> DotsStep {
        let step = if self.count > 2 {
            DotsStep::Restart
        } else {
            DotsStep::Append
        };
        self.count += 1;
        if self.count > 3 {
            self.count = 0;
        }
        step
    }
}

thread_local! {
    static DOTS: RefCell<DotsCounter> = RefCell::new(DotsCounter::default());
}

/// Advance the shared counter once and redraw every marker.
pub fn tick() {
    let step = DOTS.with(|dots| dots.borrow_mut().advance());
    for marker in dom::select_all(DOTS_SELECTOR) {
        let next = step.apply(&marker.inner_html());
        marker.set_inner_html(&next);
    }
}

/// Tick forever every `period_ms`.
pub fn start(period_ms: u32) {
    spawn_local(async move {
        loop {
            TimeoutFuture::new(period_ms).await;
            tick();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_cycle() {
        let mut counter = DotsCounter::default();
        let mut marker = String::from("stale");
        let mut seen = Vec::new();
        for _ in 0..9 {
            marker = counter.advance().apply(&marker);
            seen.push(marker.clone());
        }
        assert_eq!(
            seen,
            [".", "..", "...", "....", ".", "..", "...", "....", "."]
        );
    }

    #[test]
    fn test_first_tick_restarts() {
        assert_eq!(DotsCounter::default().advance(), DotsStep::Restart);
    }
}
