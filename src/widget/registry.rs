//! Widget registry for tracking every mounted element.

use super::Frame;
use std::collections::HashMap;

/// Registry of all widgets in the host.
#[derive(Debug, Default)]
pub struct WidgetRegistry {
    /// Widgets by ID.
    widgets: HashMap<u64, Frame>,
    /// Widget IDs in registration order.
    order: Vec<u64>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new widget.
    pub fn register(&mut self, widget: Frame) -> u64 {
        let id = widget.id;
        if self.widgets.insert(id, widget).is_some() {
            tracing::warn!(id, "re-registering widget");
        } else {
            self.order.push(id);
        }
        id
    }

    /// Get a widget by ID.
    pub fn get(&self, id: u64) -> Option<&Frame> {
        self.widgets.get(&id)
    }

    /// Get a mutable widget by ID.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Frame> {
        self.widgets.get_mut(&id)
    }

    /// Add a child to a parent widget.
    pub fn add_child(&mut self, parent_id: u64, child_id: u64) {
        if let Some(parent) = self.widgets.get_mut(&parent_id) {
            parent.children.push(child_id);
        }
    }

    /// Child IDs of a widget, empty if the widget is unknown.
    pub fn children(&self, id: u64) -> &[u64] {
        self.widgets
            .get(&id)
            .map(|f| f.children.as_slice())
            .unwrap_or(&[])
    }

    /// Widgets without a parent, in registration order.
    pub fn roots(&self) -> Vec<u64> {
        self.iter()
            .filter(|f| f.parent_id.is_none())
            .map(|f| f.id)
            .collect()
    }

    /// Iterate widgets in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.order.iter().filter_map(|id| self.widgets.get(id))
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}
