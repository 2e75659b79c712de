//! Hello UI
//!
//! A small component tree (header, text input, tooltip button) and the
//! headless host that mounts it and dispatches pointer and keyboard events.

pub mod app;
pub mod config;
pub mod dump;
pub mod element;
pub mod error;
pub mod event;
pub mod host;
pub mod widget;

pub use error::{Error, Result};
pub use host::UiHost;
