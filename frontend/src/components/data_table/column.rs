use leptos::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

type CellFn<T> = Arc<dyn Fn(&T, usize) -> AnyView + Send + Sync>;

/// One table column: a header and a renderer over `(row, index)`.
///
/// Ids must be unique within a table.
pub struct Column<T> {
    pub id: &'static str,
    pub header: &'static str,
    pub cell: CellFn<T>,
    pub sortable: bool,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            header: self.header,
            cell: self.cell.clone(),
            sortable: self.sortable,
        }
    }
}

impl<T> Column<T> {
    pub fn new<F, V>(id: &'static str, header: &'static str, cell: F) -> Self
    where
        F: Fn(&T, usize) -> V + Send + Sync + 'static,
        V: IntoView + 'static,
    {
        Self {
            id,
            header,
            cell: Arc::new(move |row, index| cell(row, index).into_any()),
            sortable: false,
        }
    }

    /// Flags the column as sortable. Sorting itself belongs to the caller.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn render(&self, row: &T, index: usize) -> AnyView {
        (self.cell)(row, index)
    }
}

/// Whether every column id in the set is distinct.
pub fn unique_ids<T>(columns: &[Column<T>]) -> bool {
    let mut seen = HashSet::new();
    columns.iter().all(|col| seen.insert(col.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(id: &'static str) -> Column<u32> {
        Column::new(id, "Header", |n: &u32, _| n.to_string())
    }

    #[test]
    fn duplicate_ids_are_detected() {
        assert!(unique_ids::<u32>(&[]));
        assert!(unique_ids(&[text("name"), text("price"), text("stock")]));
        assert!(!unique_ids(&[text("name"), text("price"), text("name")]));
    }

    #[test]
    fn sortable_keeps_the_id() {
        let col = text("price").sortable();
        assert_eq!(col.id, "price");
        assert!(col.sortable);
    }
}
