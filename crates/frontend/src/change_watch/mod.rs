//! Unsaved-change indicators for form fields.
//!
//! ```html
//! <input name="title" value="Draft" default_value="Draft" button="#save-title" new-js="markDirty">
//! <button id="save-title" style="display:none">Save</button>
//! ```

pub mod compare;
pub mod watcher;

pub use compare::{is_changed, FieldKind, WatchedField};
pub use watcher::{attach_all, watch_field};
