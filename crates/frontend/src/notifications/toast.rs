use leptos::prelude::*;

use super::service::NotificationService;

pub const TOAST_ID: &str = "toast";

const TOAST_STYLE: &str = "border:1px solid; width:100%; position:fixed; bottom:10px; \
    right:10px; max-width:200px; padding:10px; border-radius:3px; text-align:center; \
    font-size:14px; z-index:10000000000000000;";

/// Content and colors of the page's single toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastState {
    pub visible: bool,
    pub content: String,
    pub background: String,
    pub color: String,
    generation: u64,
}

impl ToastState {
    pub fn new(background: &str, color: &str) -> Self {
        Self {
            visible: false,
            content: String::new(),
            background: background.to_string(),
            color: color.to_string(),
            generation: 0,
        }
    }

    /// Show `content`; empty colors keep the previous ones.
    ///
    /// Returns the generation the matching hide timer must present to [`expire`](Self::expire).
    pub fn show(&mut self, content: &str, background: &str, color: &str) -> u64 {
        if !background.is_empty() {
            self.background = background.to_string();
        }
        if !color.is_empty() {
            self.color = color.to_string();
        }
        self.content = content.to_string();
        self.visible = true;
        self.generation += 1;
        self.generation
    }

    /// Hide and clear, unless a later [`show`](Self::show) superseded `generation`.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        self.content.clear();
        true
    }

    pub fn style(&self) -> String {
        format!(
            "display:{}; {} background-color:{}; color:{};",
            if self.visible { "block" } else { "none" },
            TOAST_STYLE,
            self.background,
            self.color
        )
    }
}

#[component]
pub fn Toast() -> impl IntoView {
    let service = expect_context::<NotificationService>();
    let state = service.toast_state();

    view! {
        <div
            id=TOAST_ID
            style=move || state.with(ToastState::style)
            inner_html=move || state.with(|toast| toast.content.clone())
        ></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_expire() {
        let mut toast = ToastState::new("rgba(0,0,0,0.64)", "white");
        let generation = toast.show("Saved", "", "");
        assert!(toast.visible);
        assert_eq!(toast.content, "Saved");
        assert_eq!(toast.background, "rgba(0,0,0,0.64)");

        assert!(toast.expire(generation));
        assert!(!toast.visible);
        assert_eq!(toast.content, "");
        assert!(toast.style().starts_with("display:none;"));
    }

    #[test]
    fn test_later_toast_survives_earlier_timer() {
        let mut toast = ToastState::new("black", "white");
        let hi = toast.show("hi", "black", "white");
        let bye = toast.show("bye", "black", "white");
        assert_eq!(toast.content, "bye");

        // The 100ms timer of "hi" fires first and must leave "bye" alone.
        assert!(!toast.expire(hi));
        assert!(toast.visible);
        assert_eq!(toast.content, "bye");

        assert!(toast.expire(bye));
        assert!(!toast.visible);
    }

    #[test]
    fn test_colors_only_change_when_given() {
        let mut toast = ToastState::new("black", "white");
        toast.show("a", "red", "");
        assert_eq!((toast.background.as_str(), toast.color.as_str()), ("red", "white"));
        toast.show("b", "", "yellow");
        assert_eq!((toast.background.as_str(), toast.color.as_str()), ("red", "yellow"));
        assert!(toast.style().contains("background-color:red; color:yellow;"));
    }
}
