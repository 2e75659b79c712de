//! Tests for the uncontrolled text input.

mod common;

use common::mount_app;
use hello_ui::app::TOOLTIP_ATTRIBUTE;

#[test]
fn test_accepts_input() {
    let mut m = mount_app();
    let input = m.host.get_by_placeholder_text("Enter text here").unwrap();
    m.host.type_text(input, "Test input").unwrap();
    assert_eq!(m.host.value(input).unwrap(), "Test input");
}

#[test]
fn test_value_echoes_typed_text_exactly() {
    let long = "x".repeat(1000);
    let samples = ["", " ", "  padded  ", "ünïcödé ✓", "tab\tand\nnewline", long.as_str()];
    for sample in samples {
        let mut m = mount_app();
        m.host.type_text(m.input, sample).unwrap();
        assert_eq!(m.host.value(m.input).unwrap(), sample);
    }
}

#[test]
fn test_typing_appends_to_existing_value() {
    let mut m = mount_app();
    m.host.type_text(m.input, "Test").unwrap();
    m.host.type_text(m.input, " input").unwrap();
    assert_eq!(m.host.value(m.input).unwrap(), "Test input");
}

#[test]
fn test_typing_focuses_input() {
    let mut m = mount_app();
    m.host.type_text(m.input, "a").unwrap();
    assert_eq!(m.host.focused_frame(), Some(m.input));
    m.host.click(m.button).unwrap();
    assert_eq!(m.host.focused_frame(), None);
}

#[test]
fn test_input_and_button_are_isolated() {
    let mut m = mount_app();
    m.host.type_text(m.input, "hello").unwrap();
    assert_eq!(m.host.attribute(m.button, TOOLTIP_ATTRIBUTE).unwrap(), None);

    m.host.hover(m.button).unwrap();
    m.host.click(m.button).unwrap();
    m.host.unhover(m.button).unwrap();
    assert_eq!(m.host.value(m.input).unwrap(), "hello");
    assert!(m.host.frame(m.input).unwrap().attributes.is_empty());
}

#[test]
fn test_typing_into_button_does_not_edit() {
    let mut m = mount_app();
    m.host.type_text(m.button, "abc").unwrap();
    let button = m.host.frame(m.button).unwrap();
    assert_eq!(button.text.as_deref(), Some("Click me"));
    assert!(m.host.value(m.button).is_err());
    assert_eq!(m.host.value(m.input).unwrap(), "");
}
