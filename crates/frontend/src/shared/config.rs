use std::cell::RefCell;
use std::str::FromStr;

use serde::Deserialize;

/// Library settings, fixed at boot.
///
/// Page scripts pass a plain object with camelCase keys; anything left out keeps
/// its default:
///
/// ```js
/// boot({ requestTimeoutMs: 30000, notificationIcon: "/img/logo.png" });
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StewConfig {
    pub request_timeout_ms: u32,
    /// Inner HTML of submit controls while a form request is in flight.
    pub in_progress_label: String,
    pub in_progress_value: String,
    pub connect_error_message: String,
    pub bad_response_message: String,
    pub toast_duration_ms: u32,
    pub toast_background: String,
    pub toast_color: String,
    pub notification_icon: String,
    pub notification_background: String,
    pub dots_period_ms: u32,
    pub log_level: String,
}

impl Default for StewConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 60_000,
            in_progress_label: "Updating<connect></connect>".to_string(),
            in_progress_value: "Updating".to_string(),
            connect_error_message:
                "Could not connect.\nPlease check your internet connection and try again."
                    .to_string(),
            bad_response_message: "The server returned an invalid response.".to_string(),
            toast_duration_ms: 3_000,
            toast_background: "rgba(0,0,0,0.64)".to_string(),
            toast_color: "white".to_string(),
            notification_icon: "https://unicus.live/images/unicus_icon.png".to_string(),
            notification_background: "white".to_string(),
            dots_period_ms: 500,
            log_level: "debug".to_string(),
        }
    }
}

impl StewConfig {
    /// Parsed `log_level`, falling back to `Debug` for unknown names.
    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(&self.log_level).unwrap_or(log::Level::Debug)
    }
}

thread_local! {
    static CURRENT: RefCell<StewConfig> = RefCell::new(StewConfig::default());
}

pub fn install(config: StewConfig) {
    CURRENT.with(|current| *current.borrow_mut() = config);
}

/// Snapshot of the active configuration.
pub fn current() -> StewConfig {
    CURRENT.with(|current| current.borrow().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StewConfig::default();
        assert_eq!(config.request_timeout_ms, 60_000);
        assert_eq!(config.toast_duration_ms, 3_000);
        assert_eq!(config.dots_period_ms, 500);
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_partial_object_keeps_defaults() {
        let config: StewConfig = serde_json::from_str(
            r#"{ "requestTimeoutMs": 1500, "toastColor": "black", "logLevel": "warn" }"#,
        )
        .unwrap();
        assert_eq!(config.request_timeout_ms, 1500);
        assert_eq!(config.toast_color, "black");
        assert_eq!(config.log_level(), log::Level::Warn);
        assert_eq!(config.in_progress_value, "Updating");
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = StewConfig {
            log_level: "chatty".to_string(),
            ..StewConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_install_replaces_current() {
        install(StewConfig {
            toast_duration_ms: 10,
            ..StewConfig::default()
        });
        assert_eq!(current().toast_duration_ms, 10);
    }
}
