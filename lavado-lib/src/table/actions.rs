//! Row-level context actions.

use std::collections::HashMap;

/// What the user asked to do with a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

impl RowAction {
    /// Menu label as shown in the row's context menu.
    pub fn label(self) -> &'static str {
        match self {
            RowAction::View => "Ver",
            RowAction::Edit => "Editar",
            RowAction::Delete => "Borrar",
        }
    }
}

type Handler<'a, R, T> = Box<dyn FnMut(&R) -> T + 'a>;

/// Callbacks bound to row actions.
///
/// The table never interprets what a handler returns: success, failure and
/// user feedback belong to whoever supplied the handler.
///
/// # Example
///
/// ```
/// use lavado_lib::table::{RowAction, RowActions};
///
/// let mut opened = Vec::new();
/// let mut actions = RowActions::new().on(RowAction::View, |id: &u32| opened.push(*id));
/// actions.invoke(RowAction::View, &7);
/// drop(actions);
/// assert_eq!(opened, vec![7]);
/// ```
pub struct RowActions<'a, R, T = ()> {
    handlers: HashMap<RowAction, Handler<'a, R, T>>,
}

impl<'a, R, T> RowActions<'a, R, T> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Bind a handler, replacing any previous one for the same action.
    pub fn on(mut self, action: RowAction, handler: impl FnMut(&R) -> T + 'a) -> Self {
        self.handlers.insert(action, Box::new(handler));
        self
    }

    /// Whether a handler is bound for `action`.
    pub fn has(&self, action: RowAction) -> bool {
        self.handlers.contains_key(&action)
    }

    /// Actions with a bound handler, in menu order.
    pub fn available(&self) -> Vec<RowAction> {
        [RowAction::View, RowAction::Edit, RowAction::Delete]
            .into_iter()
            .filter(|a| self.has(*a))
            .collect()
    }

    /// Call the handler for `action` with `row` and hand back its result.
    ///
    /// Returns `None` if nothing is bound.
    pub fn invoke(&mut self, action: RowAction, row: &R) -> Option<T> {
        let handler = self.handlers.get_mut(&action)?;
        log::debug!("invoking {:?} row action", action);
        Some(handler(row))
    }
}

impl<R, T> Default for RowActions<'_, R, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, T> std::fmt::Debug for RowActions<'_, R, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowActions")
            .field("actions", &self.available())
            .finish()
    }
}
