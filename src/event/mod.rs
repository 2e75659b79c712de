//! Script handlers and the events the host dispatches to them.

use crate::widget::Frame;
use std::collections::HashMap;

/// An event delivered to a script handler.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub handler: ScriptHandler,
    pub args: Vec<EventArg>,
}

/// Event argument types.
#[derive(Debug, Clone, PartialEq)]
pub enum EventArg {
    String(String),
    Char(char),
    Boolean(bool),
}

impl Event {
    pub fn new(handler: ScriptHandler) -> Self {
        Self {
            handler,
            args: Vec::new(),
        }
    }

    pub fn with_arg(mut self, arg: EventArg) -> Self {
        self.args.push(arg);
        self
    }
}

/// Script handlers that can be attached to widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptHandler {
    OnEnter,
    OnLeave,
    OnClick,
    OnMouseDown,
    OnMouseUp,
    OnKeyDown,
    OnChar,
    OnTextChanged,
    OnEditFocusGained,
    OnEditFocusLost,
}

impl ScriptHandler {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnEnter => "OnEnter",
            Self::OnLeave => "OnLeave",
            Self::OnClick => "OnClick",
            Self::OnMouseDown => "OnMouseDown",
            Self::OnMouseUp => "OnMouseUp",
            Self::OnKeyDown => "OnKeyDown",
            Self::OnChar => "OnChar",
            Self::OnTextChanged => "OnTextChanged",
            Self::OnEditFocusGained => "OnEditFocusGained",
            Self::OnEditFocusLost => "OnEditFocusLost",
        }
    }
}

/// A script handler body. Receives the element it is bound to and the event.
pub type ScriptFn = fn(&mut Frame, &Event);

/// Storage for script handlers bound to mounted widgets.
#[derive(Debug, Default)]
pub struct ScriptRegistry {
    /// Map of widget ID -> handler type -> handler fn
    handlers: HashMap<u64, HashMap<ScriptHandler, ScriptFn>>,
}

impl ScriptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, widget_id: u64, handler: ScriptHandler, script: ScriptFn) {
        self.handlers
            .entry(widget_id)
            .or_default()
            .insert(handler, script);
    }

    pub fn get(&self, widget_id: u64, handler: ScriptHandler) -> Option<ScriptFn> {
        self.handlers
            .get(&widget_id)
            .and_then(|h| h.get(&handler).copied())
    }
}
