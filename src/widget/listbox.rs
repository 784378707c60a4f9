//! Listbox - a selectable list control
//!
//! [`Listbox`] is the contract a binding layer drives; rendering and the
//! dispatch of the `onselect` callback belong to the toolkit.

use crate::domain::errors::{ModelError, ModelResult};
use crate::model::{ListenerId, ModelList, PropertyChangeEvent};
use crate::shared::config::ListboxConfig;

use super::{SelectionMode, WidgetState};

/// Selectable list widget contract
pub trait Listbox {
    /// Item type held by the list
    type Item;

    /// Add an item to the end of the list
    fn add_item(&mut self, item: Self::Item);

    /// Remove every item
    fn remove_items(&mut self);

    fn set_disabled(&mut self, disabled: bool);

    fn is_disabled(&self) -> bool;

    /// Number of rows displayed before a scrollbar appears
    fn rows(&self) -> usize;

    fn set_rows(&mut self, rows: usize);

    /// Total number of items, independent of [`Listbox::rows`]
    fn row_count(&self) -> usize;

    fn seltype(&self) -> SelectionMode;

    fn set_seltype(&mut self, mode: SelectionMode);

    /// Set the selection mode from its markup value ("single" or "multiple")
    fn set_seltype_str(&mut self, value: &str) -> ModelResult<()> {
        let mode = value.parse::<SelectionMode>().inspect_err(|_| {
            crate::log!("Listbox: rejected seltype {:?}", value);
        })?;
        self.set_seltype(mode);
        Ok(())
    }

    /// The single (or first) selected item
    fn selected_item(&self) -> Option<&Self::Item>;

    /// Select `item`, replacing the current selection
    fn set_selected_item(&mut self, item: &Self::Item) -> ModelResult<()>;

    /// All selected items; at most one in single mode
    fn selected_items(&self) -> Vec<&Self::Item>;

    /// Select `items`. In single mode only the first one is selected.
    fn set_selected_items(&mut self, items: &[Self::Item]) -> ModelResult<()>;

    /// Name of the method the binding layer invokes on selection
    fn set_onselect(&mut self, method: &str);

    fn onselect(&self) -> Option<&str>;

    fn state(&self) -> WidgetState {
        WidgetState::from_disabled(self.is_disabled())
    }
}

/// Headless listbox backed by a [`ModelList`]
#[derive(Debug)]
pub struct MemoryListbox<T> {
    items: ModelList<T>,
    /// Indices into `items`, in selection order
    selected: Vec<usize>,
    seltype: SelectionMode,
    rows: usize,
    disabled: bool,
    onselect: Option<String>,
}

impl<T: PartialEq> MemoryListbox<T> {
    pub fn new() -> Self {
        Self::from_config(&ListboxConfig::default())
    }

    /// Create a listbox using configured defaults
    pub fn from_config(config: &ListboxConfig) -> Self {
        Self {
            items: ModelList::new(),
            selected: Vec::new(),
            seltype: config.seltype,
            rows: config.rows,
            disabled: false,
            onselect: None,
        }
    }

    /// The backing model
    pub fn items(&self) -> &ModelList<T> {
        &self.items
    }

    /// Subscribe to changes of the backing model
    pub fn on_items_changed<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&PropertyChangeEvent<'_, T>) + 'static,
    {
        self.items.subscribe(listener)
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    fn index_of(&self, item: &T) -> ModelResult<usize> {
        self.items.index_of(item).ok_or(ModelError::ElementNotFound)
    }
}

impl<T: PartialEq> Default for MemoryListbox<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> Listbox for MemoryListbox<T> {
    type Item = T;

    fn add_item(&mut self, item: T) {
        self.items.add(item);
    }

    fn remove_items(&mut self) {
        self.selected.clear();
        self.items.clear();
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn set_rows(&mut self, rows: usize) {
        self.rows = rows;
    }

    fn row_count(&self) -> usize {
        self.items.len()
    }

    fn seltype(&self) -> SelectionMode {
        self.seltype
    }

    fn set_seltype(&mut self, mode: SelectionMode) {
        crate::log!("MemoryListbox: seltype {} -> {}", self.seltype, mode);
        self.seltype = mode;
        if !mode.is_multiple() {
            self.selected.truncate(1);
        }
    }

    fn selected_item(&self) -> Option<&T> {
        self.selected
            .first()
            .and_then(|&index| self.items.get(index).ok())
    }

    fn set_selected_item(&mut self, item: &T) -> ModelResult<()> {
        let index = self.index_of(item)?;
        self.selected = vec![index];
        Ok(())
    }

    fn selected_items(&self) -> Vec<&T> {
        self.selected
            .iter()
            .filter_map(|&index| self.items.get(index).ok())
            .collect()
    }

    fn set_selected_items(&mut self, items: &[T]) -> ModelResult<()> {
        let mut indices = Vec::with_capacity(items.len());
        for item in items {
            let index = self.index_of(item)?;
            if !indices.contains(&index) {
                indices.push(index);
            }
        }
        if !self.seltype.is_multiple() {
            indices.truncate(1);
        }
        self.selected = indices;
        Ok(())
    }

    fn set_onselect(&mut self, method: &str) {
        self.onselect = Some(method.to_string());
    }

    fn onselect(&self) -> Option<&str> {
        self.onselect.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn listbox(items: &[&'static str]) -> MemoryListbox<&'static str> {
        let mut lb = MemoryListbox::new();
        for item in items {
            lb.add_item(*item);
        }
        lb
    }

    #[test]
    fn test_defaults() {
        let lb: MemoryListbox<i32> = MemoryListbox::new();
        assert_eq!(lb.seltype(), SelectionMode::Single);
        assert_eq!(lb.rows(), 5);
        assert_eq!(lb.row_count(), 0);
        assert!(!lb.is_disabled());
        assert_eq!(lb.state(), WidgetState::Normal);
        assert_eq!(lb.selected_item(), None);
        assert_eq!(lb.onselect(), None);
    }

    #[test]
    fn test_from_config() {
        let config = ListboxConfig {
            seltype: SelectionMode::Multiple,
            rows: 9,
        };
        let lb: MemoryListbox<i32> = MemoryListbox::from_config(&config);
        assert_eq!(lb.seltype(), SelectionMode::Multiple);
        assert_eq!(lb.rows(), 9);
    }

    #[test]
    fn test_rows_vs_row_count() {
        let mut lb = listbox(&["a", "b", "c"]);
        lb.set_rows(2);
        assert_eq!(lb.rows(), 2);
        assert_eq!(lb.row_count(), 3);
        assert_eq!(lb.items().as_slice(), &["a", "b", "c"]);
    }

    #[test]
    fn test_single_selection() {
        let mut lb = listbox(&["a", "b", "c"]);
        lb.set_selected_item(&"b").unwrap();
        assert_eq!(lb.selected_item(), Some(&"b"));
        assert_eq!(lb.selected_items(), vec![&"b"]);

        lb.set_selected_items(&["c", "a"]).unwrap();
        assert_eq!(lb.selected_items(), vec![&"c"]);

        assert_eq!(lb.set_selected_item(&"z"), Err(ModelError::ElementNotFound));
        assert_eq!(lb.selected_item(), Some(&"c"));
    }

    #[test]
    fn test_multiple_selection() {
        let mut lb = listbox(&["a", "b", "c"]);
        lb.set_seltype_str("multiple").unwrap();

        lb.set_selected_items(&["c", "a", "c"]).unwrap();
        assert_eq!(lb.selected_items(), vec![&"c", &"a"]);
        assert_eq!(lb.selected_item(), Some(&"c"));

        assert!(lb.set_selected_items(&["a", "z"]).is_err());
        assert_eq!(lb.selected_items(), vec![&"c", &"a"]);

        lb.set_seltype(SelectionMode::Single);
        assert_eq!(lb.selected_items(), vec![&"c"]);
    }

    #[test]
    fn test_invalid_seltype_keeps_mode() {
        let mut lb = listbox(&[]);
        assert_eq!(
            lb.set_seltype_str("extended"),
            Err(ModelError::InvalidSelectionMode("extended".to_string()))
        );
        assert_eq!(lb.seltype(), SelectionMode::Single);
    }

    #[test]
    fn test_remove_items_clears_selection() {
        let mut lb = listbox(&["a", "b"]);
        lb.set_selected_item(&"a").unwrap();
        lb.remove_items();
        assert_eq!(lb.row_count(), 0);
        assert_eq!(lb.selected_item(), None);
        assert!(lb.selected_items().is_empty());
    }

    #[test]
    fn test_disabled_state() {
        let mut lb = listbox(&[]);
        lb.set_disabled(true);
        assert!(lb.is_disabled());
        assert_eq!(lb.state(), WidgetState::Disabled);
        assert!(!lb.state().is_interactive());
        lb.set_disabled(false);
        assert_eq!(lb.state(), WidgetState::Normal);
    }

    #[test]
    fn test_onselect_is_stored() {
        let mut lb = listbox(&[]);
        lb.set_onselect("controller.itemSelected()");
        assert_eq!(lb.onselect(), Some("controller.itemSelected()"));
    }

    #[test]
    fn test_items_changed_notifications() {
        let mut lb = listbox(&[]);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        lb.on_items_changed(move |e| s.borrow_mut().push(e.new_value.len()));

        lb.add_item("a");
        lb.add_item("b");
        lb.remove_items();

        assert_eq!(*seen.borrow(), vec![1, 2, 0]);
    }

    #[test]
    fn test_clear_selection() {
        let mut lb = listbox(&["a"]);
        lb.set_selected_item(&"a").unwrap();
        lb.clear_selection();
        assert_eq!(lb.selected_item(), None);
    }
}
