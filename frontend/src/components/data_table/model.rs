//! Render state and callback wiring of the data table, free of any view code.

use super::paging::{PageButton, parse_page_size};
use leptos::prelude::*;

/// Placeholder rows shown while loading.
pub const SKELETON_ROWS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Loading,
    Empty,
    Populated,
}

impl RenderMode {
    /// Loading wins over everything else.
    pub fn resolve(is_loading: bool, row_count: usize) -> Self {
        match (is_loading, row_count) {
            (true, _) => RenderMode::Loading,
            (false, 0) => RenderMode::Empty,
            (false, _) => RenderMode::Populated,
        }
    }

    /// Body rows drawn in this mode for `row_count` data rows.
    pub fn body_rows(&self, row_count: usize) -> usize {
        match self {
            RenderMode::Loading => SKELETON_ROWS,
            RenderMode::Empty => 1,
            RenderMode::Populated => row_count,
        }
    }
}

// =========================================================
// Row actions
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            RowAction::View => "View details",
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
        }
    }

    pub fn is_destructive(&self) -> bool {
        matches!(self, RowAction::Delete)
    }
}

pub struct MenuItem<T: 'static> {
    pub action: RowAction,
    pub callback: Callback<T>,
}

impl<T: 'static> Clone for MenuItem<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for MenuItem<T> {}

/// The optional per-row callbacks.
pub struct TableActions<T: 'static> {
    pub on_view: Option<Callback<T>>,
    pub on_edit: Option<Callback<T>>,
    pub on_delete: Option<Callback<T>>,
}

impl<T: 'static> Clone for TableActions<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for TableActions<T> {}

impl<T: 'static> Default for TableActions<T> {
    fn default() -> Self {
        Self {
            on_view: None,
            on_edit: None,
            on_delete: None,
        }
    }
}

impl<T: 'static> TableActions<T> {
    pub fn any(&self) -> bool {
        self.on_view.is_some() || self.on_edit.is_some() || self.on_delete.is_some()
    }

    /// Menu entries in view, edit, delete order.
    pub fn menu(&self) -> Vec<MenuItem<T>> {
        [
            (RowAction::View, self.on_view),
            (RowAction::Edit, self.on_edit),
            (RowAction::Delete, self.on_delete),
        ]
        .into_iter()
        .filter_map(|(action, cb)| cb.map(|callback| MenuItem { action, callback }))
        .collect()
    }
}

// =========================================================
// Shape
// =========================================================

/// Column layout shared by the header, skeleton, empty and data rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableShape {
    pub column_count: usize,
    /// `show_actions` and at least one row callback.
    pub actions_column: bool,
}

impl TableShape {
    pub fn new(column_count: usize, show_actions: bool, has_row_actions: bool) -> Self {
        Self {
            column_count,
            actions_column: show_actions && has_row_actions,
        }
    }

    pub fn skeleton_action_cell(&self) -> bool {
        self.actions_column
    }

    pub fn empty_colspan(&self) -> usize {
        self.column_count + usize::from(self.actions_column)
    }
}

// =========================================================
// Events
// =========================================================

/// Table-level callbacks. The table never updates paging state itself.
#[derive(Clone, Copy, Default)]
pub struct TableEvents {
    pub on_page_change: Option<Callback<usize>>,
    pub on_page_size_change: Option<Callback<usize>>,
    pub on_search: Option<Callback<String>>,
}

impl TableEvents {
    /// Passes the text through untouched.
    pub fn submit_search(&self, text: String) {
        if let Some(cb) = self.on_search {
            cb.run(text);
        }
    }

    pub fn go_to(&self, page: usize) {
        if let Some(cb) = self.on_page_change {
            cb.run(page);
        }
    }

    pub fn page_click(&self, button: PageButton) {
        if let Some(page) = button.click_target() {
            self.go_to(page);
        }
    }

    pub fn page_size_change(&self, value: &str) {
        match parse_page_size(value) {
            Some(size) => {
                if let Some(cb) = self.on_page_size_change {
                    cb.run(size);
                }
            }
            None => log::warn!("Ignoring page size {:?}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::sync::{Arc, Mutex};

    fn recorder<T: Clone + Send + Sync + 'static>() -> (Callback<T>, Arc<Mutex<Vec<T>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let cb = Callback::new(move |v: T| sink.lock().unwrap().push(v));
        (cb, seen)
    }

    #[test]
    fn render_modes_are_exclusive() {
        assert_eq!(RenderMode::resolve(true, 0), RenderMode::Loading);
        assert_eq!(RenderMode::resolve(true, 12), RenderMode::Loading);
        assert_eq!(RenderMode::resolve(false, 0), RenderMode::Empty);
        assert_eq!(RenderMode::resolve(false, 1), RenderMode::Populated);
    }

    #[rstest]
    #[case(true, 0, 5)]
    #[case(true, 3, 5)]
    #[case(true, 40, 5)]
    #[case(false, 0, 1)]
    #[case(false, 7, 7)]
    fn body_row_counts(#[case] loading: bool, #[case] rows: usize, #[case] expected: usize) {
        assert_eq!(RenderMode::resolve(loading, rows).body_rows(rows), expected);
    }

    #[test]
    fn no_row_callbacks_means_no_actions_column() {
        let actions = TableActions::<u32>::default();
        let shape = TableShape::new(4, true, actions.any());
        assert!(!shape.actions_column);
        assert_eq!(shape.empty_colspan(), 4);
        assert!(!shape.skeleton_action_cell());
    }

    #[test]
    fn actions_column_needs_show_actions_too() {
        Owner::new().with(|| {
            let (cb, _) = recorder::<u32>();
            let actions = TableActions {
                on_delete: Some(cb),
                ..TableActions::default()
            };
            assert_eq!(TableShape::new(3, true, actions.any()).empty_colspan(), 4);
            assert_eq!(TableShape::new(3, false, actions.any()).empty_colspan(), 3);
        });
    }

    #[test]
    fn menu_order_and_destructive_delete() {
        Owner::new().with(|| {
            let (view, _) = recorder::<u32>();
            let (delete, deleted) = recorder::<u32>();
            let actions = TableActions {
                on_view: Some(view),
                on_edit: None,
                on_delete: Some(delete),
            };

            let menu = actions.menu();
            let kinds: Vec<RowAction> = menu.iter().map(|m| m.action).collect();
            assert_eq!(kinds, vec![RowAction::View, RowAction::Delete]);
            assert!(menu[1].action.is_destructive());
            assert!(!menu[0].action.is_destructive());

            menu[1].callback.run(42);
            assert_eq!(*deleted.lock().unwrap(), vec![42]);
        });
    }

    #[test]
    fn search_submit_fires_once_without_paging() {
        Owner::new().with(|| {
            let (search, searched) = recorder::<String>();
            let (page, paged) = recorder::<usize>();
            let events = TableEvents {
                on_search: Some(search),
                on_page_change: Some(page),
                on_page_size_change: None,
            };

            events.submit_search("shirt".to_string());

            assert_eq!(*searched.lock().unwrap(), vec!["shirt".to_string()]);
            assert!(paged.lock().unwrap().is_empty());
        });
    }

    #[test]
    fn clicking_the_active_page_does_nothing() {
        Owner::new().with(|| {
            let (page, paged) = recorder::<usize>();
            let events = TableEvents {
                on_page_change: Some(page),
                ..TableEvents::default()
            };

            for button in PageButton::window(3, 10) {
                events.page_click(button);
            }

            assert_eq!(*paged.lock().unwrap(), vec![1, 2, 4, 5]);
        });
    }

    #[test]
    fn page_size_change_passes_the_number() {
        Owner::new().with(|| {
            let (size, sizes) = recorder::<usize>();
            let events = TableEvents {
                on_page_size_change: Some(size),
                ..TableEvents::default()
            };

            events.page_size_change("20");
            events.page_size_change("abc");

            assert_eq!(*sizes.lock().unwrap(), vec![20]);
        });
    }
}
