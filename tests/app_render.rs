//! Tests for the mounted component tree.

mod common;

use common::mount_app;
use hello_ui::UiHost;
use hello_ui::app::app;
use hello_ui::widget::WidgetType;

#[test]
fn test_renders_header_input_and_button() {
    let m = mount_app();
    let header = m.host.get_by_text("hello world").unwrap();
    assert_eq!(m.host.frame(header).unwrap().widget_type, WidgetType::Header);
    let input = m.host.get_by_placeholder_text("enter text here").unwrap();
    assert_eq!(input, m.input);
    let button = m.host.get_by_text("CLICK ME").unwrap();
    assert_eq!(button, m.button);
}

#[test]
fn test_root_has_exactly_three_children_in_order() {
    let m = mount_app();
    let children = m.host.children(m.root).unwrap();
    assert_eq!(children.len(), 3);

    let header = m.host.frame(children[0]).unwrap();
    assert_eq!(header.widget_type, WidgetType::Header);
    assert_eq!(header.text.as_deref(), Some("Hello world"));
    assert_eq!(header.class_name.as_deref(), Some("App-header"));

    let input = m.host.frame(children[1]).unwrap();
    assert_eq!(input.widget_type, WidgetType::EditBox);
    assert_eq!(input.placeholder.as_deref(), Some("Enter text here"));
    assert_eq!(input.input_type.as_deref(), Some("text"));

    let button = m.host.frame(children[2]).unwrap();
    assert_eq!(button.widget_type, WidgetType::Button);
    assert_eq!(button.text.as_deref(), Some("Click me"));
}

#[test]
fn test_root_is_app_container() {
    let m = mount_app();
    let root = m.host.frame(m.root).unwrap();
    assert_eq!(root.widget_type, WidgetType::Frame);
    assert_eq!(root.class_name.as_deref(), Some("App"));
    assert_eq!(root.parent_id, None);
    assert_eq!(m.host.widgets().len(), 4);
}

#[test]
fn test_initial_state() {
    let m = mount_app();
    assert_eq!(m.host.value(m.input).unwrap(), "");
    assert_eq!(m.host.attribute(m.button, "title").unwrap(), None);
    assert_eq!(m.host.hovered_frame(), None);
    assert_eq!(m.host.focused_frame(), None);
}

#[test]
fn test_two_mounts_are_independent() {
    let mut host = UiHost::new();
    let first = host.mount(app());
    let second = host.mount(app());
    assert_ne!(first, second);
    assert_eq!(host.widgets().roots(), vec![first, second]);
    // Each label now appears twice.
    assert!(host.get_by_text("Click me").is_err());
}
