//! Shell events and the dispatch table
//!
//! Every user or system notification the shell reacts to is a [`ShellEvent`].
//! Handlers are attached per [`EventKind`] and run synchronously, in attachment
//! order, on the UI thread.

use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt;

/// Mouse button reported by the tray indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button
    Left,
    /// Secondary button
    Right,
    /// Wheel button
    Middle,
}

/// Actions offered by the tray indicator's context menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Bring the main window back
    Settings,
    /// Terminate the process with status 0
    Exit,
}

/// A notification delivered to the shell by the windowing toolkit
#[derive(Debug, Clone, PartialEq)]
pub enum ShellEvent {
    /// The trigger button was activated
    TransformTriggered,
    /// The user asked to close the main window
    CloseRequested,
    /// The main window changed size (logical units)
    Resized {
        /// New width
        width: f32,
        /// New height
        height: f32,
    },
    /// A mouse button went down on the tray indicator
    IndicatorPressed(MouseButton),
    /// A context menu entry was chosen
    MenuTriggered(MenuAction),
}

/// Event name used as the dispatch key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// See [`ShellEvent::TransformTriggered`]
    TransformTriggered,
    /// See [`ShellEvent::CloseRequested`]
    CloseRequested,
    /// See [`ShellEvent::Resized`]
    Resized,
    /// See [`ShellEvent::IndicatorPressed`]
    IndicatorPressed,
    /// See [`ShellEvent::MenuTriggered`]
    MenuTriggered,
}

impl ShellEvent {
    /// The dispatch key for this event
    pub fn kind(&self) -> EventKind {
        match self {
            Self::TransformTriggered => EventKind::TransformTriggered,
            Self::CloseRequested => EventKind::CloseRequested,
            Self::Resized { .. } => EventKind::Resized,
            Self::IndicatorPressed(_) => EventKind::IndicatorPressed,
            Self::MenuTriggered(_) => EventKind::MenuTriggered,
        }
    }
}

/// Event handler operating on the application context `C`
pub type Handler<C> = Box<dyn FnMut(&mut C, &ShellEvent)>;

/// Mapping from event name to its ordered handler list
pub struct EventTable<C> {
    handlers: HashMap<EventKind, SmallVec<[Handler<C>; 2]>>,
}

impl<C> EventTable<C> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Append `handler` to the list for `kind`
    pub fn attach<F>(&mut self, kind: EventKind, handler: F)
    where
        F: FnMut(&mut C, &ShellEvent) + 'static,
    {
        self.handlers
            .entry(kind)
            .or_default()
            .push(Box::new(handler));
    }

    /// Run every handler attached to the event's kind, in attachment order.
    ///
    /// Returns the number of handlers that ran.
    pub fn dispatch(&mut self, ctx: &mut C, event: &ShellEvent) -> usize {
        let Some(handlers) = self.handlers.get_mut(&event.kind()) else {
            return 0;
        };

        for handler in handlers.iter_mut() {
            handler(&mut *ctx, event);
        }
        handlers.len()
    }

    /// Number of handlers attached to `kind`
    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, SmallVec::len)
    }
}

impl<C> Default for EventTable<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for EventTable<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (kind, handlers) in &self.handlers {
            map.entry(kind, &handlers.len());
        }
        map.finish()
    }
}
