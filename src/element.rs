//! Declarative element tree consumed by the host at mount time.

use crate::event::{ScriptFn, ScriptHandler};
use crate::widget::WidgetType;

/// Description of one element and its subtree.
#[derive(Debug, Clone)]
pub struct Element {
    pub widget_type: WidgetType,
    pub class_name: Option<String>,
    pub text: Option<String>,
    pub placeholder: Option<String>,
    pub input_type: Option<String>,
    pub attributes: Vec<(String, String)>,
    pub scripts: Vec<(ScriptHandler, ScriptFn)>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(widget_type: WidgetType) -> Self {
        Self {
            widget_type,
            class_name: None,
            text: None,
            placeholder: None,
            input_type: None,
            attributes: Vec::new(),
            scripts: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Bind a script to this element. A later binding for the same handler wins.
    pub fn on(mut self, handler: ScriptHandler, script: ScriptFn) -> Self {
        self.scripts.push((handler, script));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Number of elements in this subtree, including itself.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Element::count).sum::<usize>()
    }
}
