//! Frame - a mounted element in the live tree.

use super::{next_widget_id, WidgetType};
use serde::Serialize;
use std::collections::BTreeMap;

/// A mounted element.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    /// Unique widget ID.
    pub id: u64,
    /// Widget type.
    pub widget_type: WidgetType,
    /// CSS class name, if declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Parent widget ID.
    #[serde(skip)]
    pub parent_id: Option<u64>,
    /// Child widget IDs in mount order.
    #[serde(skip)]
    pub children: Vec<u64>,
    /// Text content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Placeholder hint (EditBox only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Declared input type, e.g. `text`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    /// Native edit value. Owned by the host; `None` for non-editable widgets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Named string attributes (`title`, ...).
    pub attributes: BTreeMap<String, String>,
}

impl Frame {
    pub fn new(widget_type: WidgetType, parent_id: Option<u64>) -> Self {
        Self {
            id: next_widget_id(),
            widget_type,
            class_name: None,
            parent_id,
            children: Vec::new(),
            text: None,
            placeholder: None,
            input_type: None,
            value: (widget_type == WidgetType::EditBox).then(String::new),
            attributes: BTreeMap::new(),
        }
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn is_editable(&self) -> bool {
        self.value.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_editbox_has_empty_value() {
        let frame = Frame::new(WidgetType::EditBox, None);
        assert_eq!(frame.value.as_deref(), Some(""));
        assert!(frame.is_editable());
    }

    #[test]
    fn test_button_is_not_editable() {
        let frame = Frame::new(WidgetType::Button, None);
        assert!(frame.value.is_none());
        assert!(!frame.is_editable());
    }

    #[test]
    fn test_set_attribute_overwrites() {
        let mut frame = Frame::new(WidgetType::Button, None);
        assert_eq!(frame.attribute("title"), None);
        frame.set_attribute("title", "first");
        frame.set_attribute("title", "second");
        assert_eq!(frame.attribute("title"), Some("second"));
        assert_eq!(frame.attributes.len(), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Frame::new(WidgetType::Frame, None);
        let b = Frame::new(WidgetType::Frame, None);
        assert_ne!(a.id, b.id);
    }
}
