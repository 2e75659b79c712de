//! Headless rendering host.
//!
//! Mounts a declarative [`Element`] tree into a [`WidgetRegistry`], binds the
//! declared scripts, and answers queries over the live tree. Event dispatch
//! lives in `dispatch.rs`.

mod dispatch;

use crate::element::Element;
use crate::event::ScriptRegistry;
use crate::widget::{Frame, WidgetRegistry, WidgetType};
use crate::{Error, Result};

/// The host that owns the live element tree.
#[derive(Debug, Default)]
pub struct UiHost {
    pub(crate) widgets: WidgetRegistry,
    pub(crate) scripts: ScriptRegistry,
    /// Element the pointer is currently over.
    pub(crate) hovered_frame_id: Option<u64>,
    /// Element receiving keyboard input.
    pub(crate) focused_frame_id: Option<u64>,
}

impl UiHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount an element tree and return the root widget ID.
    pub fn mount(&mut self, root: Element) -> u64 {
        let count = root.count();
        let id = self.mount_element(root, None);
        tracing::debug!(root = id, count, "mounted element tree");
        id
    }

    fn mount_element(&mut self, element: Element, parent_id: Option<u64>) -> u64 {
        let Element {
            widget_type,
            class_name,
            text,
            placeholder,
            input_type,
            attributes,
            scripts,
            children,
        } = element;

        let mut frame = Frame::new(widget_type, parent_id);
        frame.class_name = class_name;
        frame.text = text;
        frame.placeholder = placeholder;
        frame.input_type = input_type;
        for (name, value) in &attributes {
            frame.set_attribute(name, value);
        }
        let id = self.widgets.register(frame);
        if let Some(pid) = parent_id {
            self.widgets.add_child(pid, id);
        }

        for (handler, script) in scripts {
            tracing::trace!(id, handler = handler.as_str(), "binding script");
            self.scripts.set(id, handler, script);
        }
        for child in children {
            self.mount_element(child, Some(id));
        }
        id
    }

    /// Access the widget registry.
    pub fn widgets(&self) -> &WidgetRegistry {
        &self.widgets
    }

    /// Borrow a mounted element.
    pub fn frame(&self, id: u64) -> Result<&Frame> {
        self.widgets.get(id).ok_or(Error::WidgetNotFound(id))
    }

    /// Child IDs of a mounted element.
    pub fn children(&self, id: u64) -> Result<&[u64]> {
        self.frame(id).map(|f| f.children.as_slice())
    }

    /// Read a named attribute. `Ok(None)` when the attribute is absent.
    pub fn attribute(&self, id: u64, name: &str) -> Result<Option<&str>> {
        Ok(self.frame(id)?.attribute(name))
    }

    /// Native value of an editable control.
    pub fn value(&self, id: u64) -> Result<&str> {
        let frame = self.frame(id)?;
        frame.value.as_deref().ok_or_else(|| Error::InvalidWidgetType {
            expected: WidgetType::EditBox.as_str().to_string(),
            actual: frame.widget_type.as_str().to_string(),
        })
    }

    pub fn hovered_frame(&self) -> Option<u64> {
        self.hovered_frame_id
    }

    pub fn focused_frame(&self) -> Option<u64> {
        self.focused_frame_id
    }

    /// Find the single element whose text contains `pattern` (case-insensitive).
    pub fn get_by_text(&self, pattern: &str) -> Result<u64> {
        self.query_by_text(pattern)?.ok_or_else(|| Error::NoMatch {
            query: "text",
            pattern: pattern.to_string(),
        })
    }

    /// Like [`get_by_text`](Self::get_by_text) but `Ok(None)` when nothing matches.
    pub fn query_by_text(&self, pattern: &str) -> Result<Option<u64>> {
        self.query_single("text", pattern, |f| f.text.as_deref())
    }

    /// Find the single element whose placeholder contains `pattern` (case-insensitive).
    pub fn get_by_placeholder_text(&self, pattern: &str) -> Result<u64> {
        self.query_by_placeholder_text(pattern)?
            .ok_or_else(|| Error::NoMatch {
                query: "placeholder text",
                pattern: pattern.to_string(),
            })
    }

    pub fn query_by_placeholder_text(&self, pattern: &str) -> Result<Option<u64>> {
        self.query_single("placeholder text", pattern, |f| f.placeholder.as_deref())
    }

    fn query_single(
        &self,
        query: &'static str,
        pattern: &str,
        field: impl Fn(&Frame) -> Option<&str>,
    ) -> Result<Option<u64>> {
        let needle = pattern.to_lowercase();
        let matches: Vec<u64> = self
            .widgets
            .iter()
            .filter(|&f| field(f).is_some_and(|s| s.to_lowercase().contains(&needle)))
            .map(|f| f.id)
            .collect();
        match matches.as_slice() {
            [] => Ok(None),
            [id] => Ok(Some(*id)),
            _ => Err(Error::MultipleMatches {
                query,
                pattern: pattern.to_string(),
                count: matches.len(),
            }),
        }
    }
}
