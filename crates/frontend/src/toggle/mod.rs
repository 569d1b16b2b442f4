//! Declarative slide-in panels driven by `sw-*` attributes.
//!
//! ```html
//! <button class="sw-toggle" sw-display="#menu" sw-animate="fromright"
//!         sw-condition="true" sw-active-js="lockScroll" sw-inactive-js="unlockScroll">
//!     Menu
//! </button>
//! ```

pub mod controller;
pub mod descriptor;

pub use controller::{scan_all, wire_toggle};
pub use descriptor::{Animation, Position, SlideState, ToggleDescriptor};
