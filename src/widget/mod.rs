//! Widget system: the live tree the host builds from a declarative element tree.

mod frame;
mod registry;

pub use frame::Frame;
pub use registry::WidgetRegistry;

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

/// Generate a unique widget ID.
pub fn next_widget_id() -> u64 {
    NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed)
}

/// Widget types the host knows how to mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WidgetType {
    /// Generic container (`div`).
    Frame,
    /// Static heading (`header`).
    Header,
    /// Single-line text control (`input`).
    EditBox,
    /// Clickable control (`button`).
    Button,
}

impl WidgetType {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Frame => "div",
            Self::Header => "header",
            Self::EditBox => "input",
            Self::Button => "button",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frame => "Frame",
            Self::Header => "Header",
            Self::EditBox => "EditBox",
            Self::Button => "Button",
        }
    }
}

