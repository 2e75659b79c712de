//! Shared test helpers.

use hello_ui::UiHost;
use hello_ui::app::{BUTTON_LABEL, INPUT_PLACEHOLDER, app};

/// A host with the app mounted, plus the IDs tests usually need.
#[allow(dead_code)]
pub struct Mounted {
    pub host: UiHost,
    pub root: u64,
    pub input: u64,
    pub button: u64,
}

pub fn mount_app() -> Mounted {
    let mut host = UiHost::new();
    let root = host.mount(app());
    let input = host
        .get_by_placeholder_text(INPUT_PLACEHOLDER)
        .expect("input should be mounted");
    let button = host
        .get_by_text(BUTTON_LABEL)
        .expect("button should be mounted");
    Mounted {
        host,
        root,
        input,
        button,
    }
}
