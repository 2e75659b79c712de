//! The application component tree: header, text input and tooltip button.

use crate::element::Element;
use crate::event::{Event, ScriptHandler};
use crate::widget::{Frame, WidgetType};

pub const HEADER_TEXT: &str = "Hello world";
pub const INPUT_PLACEHOLDER: &str = "Enter text here";
pub const BUTTON_LABEL: &str = "Click me";
pub const TOOLTIP_ATTRIBUTE: &str = "title";
pub const TOOLTIP_TEXT: &str = "This is a tooltip";

/// Static page header.
pub fn header() -> Element {
    Element::new(WidgetType::Header)
        .class_name("App-header")
        .text(HEADER_TEXT)
}

/// Uncontrolled single-line input. The host owns its value.
pub fn text_input() -> Element {
    Element::new(WidgetType::EditBox)
        .input_type("text")
        .placeholder(INPUT_PLACEHOLDER)
}

/// Button that sets its own `title` on pointer enter.
///
/// There is no OnLeave or OnClick binding: once shown, the tooltip stays.
pub fn tooltip_button() -> Element {
    Element::new(WidgetType::Button)
        .text(BUTTON_LABEL)
        .on(ScriptHandler::OnEnter, show_tooltip)
}

/// OnEnter script for [`tooltip_button`].
pub fn show_tooltip(frame: &mut Frame, _event: &Event) {
    frame.set_attribute(TOOLTIP_ATTRIBUTE, TOOLTIP_TEXT);
}

/// Root container: header, input, button, in that order.
pub fn app() -> Element {
    Element::new(WidgetType::Frame)
        .class_name("App")
        .child(header())
        .child(text_input())
        .child(tooltip_button())
}
