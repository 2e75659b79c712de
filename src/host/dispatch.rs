//! Event dispatch: pointer, click and keystroke simulation.

use super::UiHost;
use crate::event::{Event, EventArg, ScriptHandler};
use crate::{Error, Result};

impl UiHost {
    /// Run the script bound to `handler` on a widget. No-op when nothing is bound.
    pub fn fire_script_handler(&mut self, widget_id: u64, event: &Event) -> Result<()> {
        let frame = self
            .widgets
            .get_mut(widget_id)
            .ok_or(Error::WidgetNotFound(widget_id))?;
        if let Some(script) = self.scripts.get(widget_id, event.handler) {
            tracing::trace!(widget_id, handler = event.handler.as_str(), "firing script");
            script(frame, event);
        }
        Ok(())
    }

    /// Check if a script handler is bound on a widget.
    pub fn has_script_handler(&self, widget_id: u64, handler: ScriptHandler) -> bool {
        self.scripts.get(widget_id, handler).is_some()
    }

    /// Move the pointer onto a widget.
    ///
    /// Fires OnLeave on the previously hovered widget (if different), then
    /// OnEnter on this one.
    pub fn hover(&mut self, frame_id: u64) -> Result<()> {
        self.frame(frame_id)?;
        let old_hovered = self.hovered_frame_id.replace(frame_id);
        if let Some(old_id) = old_hovered
            && old_id != frame_id
        {
            self.fire_script_handler(old_id, &Event::new(ScriptHandler::OnLeave))?;
        }
        tracing::debug!(frame_id, "pointer enter");
        self.fire_script_handler(frame_id, &Event::new(ScriptHandler::OnEnter))
    }

    /// Move the pointer off a widget.
    pub fn unhover(&mut self, frame_id: u64) -> Result<()> {
        self.frame(frame_id)?;
        if self.hovered_frame_id == Some(frame_id) {
            self.hovered_frame_id = None;
        }
        tracing::debug!(frame_id, "pointer leave");
        self.fire_script_handler(frame_id, &Event::new(ScriptHandler::OnLeave))
    }

    /// Simulate a left-click on a widget.
    ///
    /// Handles EditBox focus, then fires OnMouseDown, OnClick and OnMouseUp.
    pub fn click(&mut self, frame_id: u64) -> Result<()> {
        let is_editable = self.frame(frame_id)?.is_editable();
        self.update_focus(frame_id, is_editable)?;

        let button = EventArg::String("LeftButton".to_string());
        self.fire_script_handler(
            frame_id,
            &Event::new(ScriptHandler::OnMouseDown).with_arg(button.clone()),
        )?;
        self.fire_script_handler(
            frame_id,
            &Event::new(ScriptHandler::OnClick)
                .with_arg(button.clone())
                .with_arg(EventArg::Boolean(false)),
        )?;
        self.fire_script_handler(
            frame_id,
            &Event::new(ScriptHandler::OnMouseUp).with_arg(button),
        )
    }

    fn update_focus(&mut self, frame_id: u64, is_editable: bool) -> Result<()> {
        let old_focus = self.focused_frame_id;
        if is_editable {
            if old_focus != Some(frame_id) {
                self.focused_frame_id = Some(frame_id);
                if let Some(old_id) = old_focus {
                    self.fire_script_handler(old_id, &Event::new(ScriptHandler::OnEditFocusLost))?;
                }
                self.fire_script_handler(frame_id, &Event::new(ScriptHandler::OnEditFocusGained))?;
            }
        } else if let Some(old_id) = old_focus {
            self.focused_frame_id = None;
            self.fire_script_handler(old_id, &Event::new(ScriptHandler::OnEditFocusLost))?;
        }
        Ok(())
    }

    /// Type text into a widget, one keystroke per character.
    ///
    /// Clicks the widget first so an EditBox takes focus. Each character fires
    /// OnKeyDown, is appended to the native value, then fires OnChar and
    /// OnTextChanged. Non-editable widgets receive the key events only.
    pub fn type_text(&mut self, frame_id: u64, text: &str) -> Result<()> {
        self.click(frame_id)?;
        tracing::debug!(frame_id, len = text.chars().count(), "typing text");
        for ch in text.chars() {
            self.send_char(frame_id, ch)?;
        }
        Ok(())
    }

    fn send_char(&mut self, frame_id: u64, ch: char) -> Result<()> {
        self.fire_script_handler(
            frame_id,
            &Event::new(ScriptHandler::OnKeyDown).with_arg(EventArg::String(ch.to_string())),
        )?;

        let edited = match self.widgets.get_mut(frame_id).and_then(|f| f.value.as_mut()) {
            Some(value) => {
                value.push(ch);
                true
            }
            None => false,
        };
        if !edited {
            return Ok(());
        }

        self.fire_script_handler(
            frame_id,
            &Event::new(ScriptHandler::OnChar).with_arg(EventArg::Char(ch)),
        )?;
        self.fire_script_handler(
            frame_id,
            &Event::new(ScriptHandler::OnTextChanged).with_arg(EventArg::Boolean(true)),
        )
    }
}
