use leptos::prelude::*;

use super::service::NotificationService;

pub const NOTIFICATION_ID: &str = "notification";

const PANEL_STYLE: &str = "width:100%; position:fixed; bottom:20px; transition:.6s; \
    max-width:300px; padding:10px; border-radius:3px; color:gray; text-align:left; \
    font-size:14px; z-index:2147483646; box-shadow:0 0 5px grey; overflow:hidden;";
const DISMISS_STYLE: &str = "padding:5px; color:#ff4d3f; font-size:1.2em; right:0; top:0; \
    position:absolute; cursor:pointer; background:#fdeeee;";
const HEADING_STYLE: &str = "border-left:1px solid gray; padding:0.3em; margin:0 5px; color:black;";

/// Arguments of a `notify` call once defaults are filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyRequest {
    pub text: String,
    pub title: String,
    pub icon: String,
    pub link: String,
    pub auto_dismiss_ms: u32,
    pub background: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideInState {
    pub shown: bool,
    pub text: String,
    pub title: String,
    pub icon: String,
    pub link: String,
    pub background: String,
    generation: u64,
}

impl SlideInState {
    pub fn new(background: &str) -> Self {
        Self {
            shown: false,
            text: String::new(),
            title: String::new(),
            icon: String::new(),
            link: String::new(),
            background: background.to_string(),
            generation: 0,
        }
    }

    /// Fill the panel and slide it in. `None` when there is nothing to show.
    pub fn notify(&mut self, request: &NotifyRequest) -> Option<u64> {
        if request.text.is_empty() && request.title.is_empty() {
            return None;
        }
        self.text = request.text.clone();
        self.title = request.title.clone();
        self.icon = request.icon.clone();
        self.link = request.link.clone();
        self.background = request.background.clone();
        self.shown = true;
        self.generation += 1;
        Some(self.generation)
    }

    /// Slide out; the content stays until the next `notify`.
    pub fn dismiss(&mut self) {
        self.shown = false;
    }

    /// Auto-dismiss for `generation`, ignored once a newer notification arrived.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.shown {
            return false;
        }
        self.dismiss();
        true
    }

    pub fn right(&self) -> &'static str {
        if self.shown {
            "20px"
        } else {
            "-100%"
        }
    }

    pub fn style(&self) -> String {
        format!(
            "right:{}; {} background-color:{};",
            self.right(),
            PANEL_STYLE,
            self.background
        )
    }
}

#[component]
pub fn SlideIn() -> impl IntoView {
    let service = expect_context::<NotificationService>();
    let state = service.slide_in_state();

    view! {
        <div id=NOTIFICATION_ID style=move || state.with(SlideInState::style)>
            <span
                class="notification_dismiss"
                title="dismiss"
                style=DISMISS_STYLE
                on:click=move |_| service.dismiss()
            >
                <i class="fa fa-arrow-right" style="margin-left:5px;"></i>
            </span>
            <p style="display:flex;">
                <img src=move || state.with(|s| s.icon.clone()) style="height:2em; width:2em;"/>
                <span
                    class="notification_heading"
                    style=HEADING_STYLE
                    inner_html=move || state.with(|s| s.title.clone())
                ></span>
            </p>
            <span
                class="notification_text"
                style="display:block; line-height:1.2em; font-size:0.9em;"
                inner_html=move || state.with(|s| s.text.clone())
            ></span>
            <div style="text-align:right; margin-top:10px;">
                <a
                    href=move || state.with(|s| s.link.clone())
                    class="notification_link"
                    style="color:#2196F3; display:inline-block; cursor:pointer;"
                >
                    "View Now..."
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str, title: &str, auto_dismiss_ms: u32) -> NotifyRequest {
        NotifyRequest {
            text: text.to_string(),
            title: title.to_string(),
            icon: "/icon.png".to_string(),
            link: "/inbox".to_string(),
            auto_dismiss_ms,
            background: "white".to_string(),
        }
    }

    #[test]
    fn test_empty_notification_is_ignored() {
        let mut panel = SlideInState::new("white");
        assert_eq!(panel.notify(&request("", "", 0)), None);
        assert!(!panel.shown);
        assert_eq!(panel.right(), "-100%");
    }

    #[test]
    fn test_title_alone_is_enough() {
        let mut panel = SlideInState::new("white");
        assert!(panel.notify(&request("", "New message", 0)).is_some());
        assert_eq!(panel.right(), "20px");
        assert_eq!(panel.link, "/inbox");
    }

    #[test]
    fn test_dismiss_is_idempotent_and_keeps_content() {
        let mut panel = SlideInState::new("white");
        panel.notify(&request("Body", "Title", 0));
        panel.dismiss();
        assert_eq!(panel.right(), "-100%");
        panel.dismiss();
        assert_eq!(panel.right(), "-100%");
        assert_eq!(panel.text, "Body");
        assert!(panel.style().starts_with("right:-100%;"));
    }

    #[test]
    fn test_stale_auto_dismiss_is_ignored() {
        let mut panel = SlideInState::new("white");
        let first = panel.notify(&request("one", "", 100)).unwrap();
        let second = panel.notify(&request("two", "", 5000)).unwrap();

        assert!(!panel.expire(first));
        assert!(panel.shown);
        assert!(panel.expire(second));
        assert!(!panel.shown);
    }
}
