//! Per-entity list pages: the table plus the focused record and its drawer.

use crate::error::TableError;
use crate::model::{Company, Contact, Deal, Entity, Task};
use crate::table::{Row, TableView};

/// State of one entity page.
///
/// The focused record is what the edit drawer and the delete confirmation
/// act on. It is a copy of the row at the time it was focused.
#[derive(Debug)]
pub struct EntityPanel<R: Row> {
    pub table: TableView<R>,
    focused: Option<R>,
    drawer_open: bool,
}

impl<E: Entity> EntityPanel<E> {
    /// Panel with the entity's standard columns.
    pub fn for_entity() -> Result<Self, TableError> {
        Ok(Self::new(TableView::new(E::columns())?))
    }
}

impl<R: Row> EntityPanel<R> {
    pub fn new(table: TableView<R>) -> Self {
        Self {
            table,
            focused: None,
            drawer_open: false,
        }
    }

    pub fn focused(&self) -> Option<&R> {
        self.focused.as_ref()
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Focus a row without opening the drawer (delete confirmation).
    pub fn focus(&mut self, row: R) {
        self.focused = Some(row);
    }

    /// Open the drawer in edit mode for `row`.
    pub fn open_for(&mut self, row: R) {
        self.focused = Some(row);
        self.drawer_open = true;
    }

    /// Open the drawer with an empty form.
    pub fn open_blank(&mut self) {
        self.focused = None;
        self.drawer_open = true;
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
        if !self.drawer_open {
            self.focused = None;
        }
    }

    pub fn close(&mut self) {
        self.drawer_open = false;
        self.focused = None;
    }

    /// Drop focus if it points at `key`. Called after a delete succeeds.
    pub fn forget(&mut self, key: &R::Key) -> bool {
        match &self.focused {
            Some(row) if &row.key() == key => {
                log::debug!("clearing focus on removed row {:?}", key);
                self.focused = None;
                self.drawer_open = false;
                true
            }
            _ => false,
        }
    }
}

/// All entity pages of the dashboard.
#[derive(Debug)]
pub struct Workspace {
    pub companies: EntityPanel<Company>,
    pub contacts: EntityPanel<Contact>,
    pub tasks: EntityPanel<Task>,
    pub deals: EntityPanel<Deal>,
}

impl Workspace {
    pub fn new() -> Result<Self, TableError> {
        Ok(Self {
            companies: EntityPanel::for_entity()?,
            contacts: EntityPanel::for_entity()?,
            tasks: EntityPanel::for_entity()?,
            deals: EntityPanel::for_entity()?,
        })
    }

    /// Set the page size on every table.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        let mut changed = self.companies.table.set_page_size(size);
        changed |= self.contacts.table.set_page_size(size);
        changed |= self.tasks.table.set_page_size(size);
        changed |= self.deals.table.set_page_size(size);
        changed
    }
}
