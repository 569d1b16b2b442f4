//! `.ajaxform` submission over fetch.
//!
//! The backend answers with a [`FormEnvelope`](contracts::shared::form_envelope::FormEnvelope);
//! accepted html lands in the element with id `{form_id}-html` and the hooks
//! named by `js` run afterwards.

pub mod busy;
pub mod error;
pub mod interceptor;
pub mod payload;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

pub use error::SubmitError;
pub use interceptor::{attach_all, intercept, submit};

thread_local! {
    static LAST_RESPONSE_HTML: RefCell<String> = RefCell::new(String::new());
}

pub(crate) fn store_response_html(html: &str) {
    LAST_RESPONSE_HTML.with(|slot| *slot.borrow_mut() = html.to_string());
}

/// Html of the most recent form response that carried any.
#[wasm_bindgen(js_name = lastResponseHtml)]
pub fn last_response_html() -> String {
    LAST_RESPONSE_HTML.with(|slot| slot.borrow().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_html_slot() {
        assert_eq!(last_response_html(), "");
        store_response_html("<p>ok</p>");
        assert_eq!(last_response_html(), "<p>ok</p>");
    }
}
