//! Frame tree dumps for the CLI and diagnostics.

use crate::widget::{Frame, WidgetRegistry};
use crate::Result;
use serde::Serialize;
use std::fmt::Write;

/// Render the subtree under `root` as indented text, one element per line.
pub fn format_frame_tree(widgets: &WidgetRegistry, root: u64) -> String {
    let mut out = String::new();
    write_frame(widgets, root, 0, &mut out);
    out
}

fn write_frame(widgets: &WidgetRegistry, id: u64, depth: usize, out: &mut String) {
    let Some(frame) = widgets.get(id) else { return };
    let _ = writeln!(out, "{}{}", "  ".repeat(depth), describe(frame));
    for &child in &frame.children {
        write_frame(widgets, child, depth + 1, out);
    }
}

/// One-line description: `tag.class[type=..] "text" placeholder=".." value=".." attr=".."`.
fn describe(frame: &Frame) -> String {
    let mut line = frame.widget_type.tag().to_string();
    if let Some(class) = &frame.class_name {
        let _ = write!(line, ".{class}");
    }
    if let Some(input_type) = &frame.input_type {
        let _ = write!(line, "[type={input_type}]");
    }
    if let Some(text) = &frame.text {
        let _ = write!(line, " {text:?}");
    }
    if let Some(placeholder) = &frame.placeholder {
        let _ = write!(line, " placeholder={placeholder:?}");
    }
    if let Some(value) = &frame.value {
        let _ = write!(line, " value={value:?}");
    }
    for (name, value) in &frame.attributes {
        let _ = write!(line, " {name}={value:?}");
    }
    line
}

#[derive(Serialize)]
struct DumpNode<'a> {
    tag: &'static str,
    #[serde(flatten)]
    frame: &'a Frame,
    children: Vec<DumpNode<'a>>,
}

fn dump_node(widgets: &WidgetRegistry, id: u64) -> Option<DumpNode<'_>> {
    let frame = widgets.get(id)?;
    Some(DumpNode {
        tag: frame.widget_type.tag(),
        frame,
        children: frame
            .children
            .iter()
            .filter_map(|&child| dump_node(widgets, child))
            .collect(),
    })
}

/// Render the subtree under `root` as pretty-printed JSON.
pub fn frame_tree_json(widgets: &WidgetRegistry, root: u64) -> Result<String> {
    Ok(serde_json::to_string_pretty(&dump_node(widgets, root))?)
}
