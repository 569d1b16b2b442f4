pub mod config;
pub mod dom;
pub mod hooks;
pub mod markup;
