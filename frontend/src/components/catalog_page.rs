//! Screens over static fixture collections.
//!
//! The rows live in memory and go through the same paging contract as the
//! server-backed screens, so the table cannot tell them apart.

use crate::components::data_table::{Column, DataTable};
use crate::components::dialog::{ConfirmDialog, Modal};
use crate::components::form::DetailList;
use crate::toast::use_toast;
use admindash_shared::catalog::{LocalPage, Searchable};
use leptos::prelude::*;

/// A fixture row the catalogue screens can show, inspect and delete.
pub trait CatalogRecord: Searchable + Clone + Send + Sync + 'static {
    fn id(&self) -> u64;

    /// Shown in dialog titles and the delete prompt.
    fn label(&self) -> String;

    fn details(&self) -> Vec<(&'static str, String)>;
}

/// Drops the record with `id`. Returns whether anything was removed.
pub fn remove_record<T: CatalogRecord>(records: &mut Vec<T>, id: u64) -> bool {
    let before = records.len();
    records.retain(|r| r.id() != id);
    records.len() != before
}

/// Steps back when a delete empties the last page.
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    let last = total.div_ceil(page_size).max(1);
    page.clamp(1, last)
}

#[component]
pub fn CatalogPage<T>(
    title: &'static str,
    description: &'static str,
    columns: Vec<Column<T>>,
    records: Vec<T>,
) -> impl IntoView
where
    T: CatalogRecord,
{
    let toast = use_toast();

    let records = RwSignal::new(records);
    let query = RwSignal::new(String::new());
    let page = RwSignal::new(1usize);
    let page_size = RwSignal::new(10usize);

    let slice = Signal::derive(move || {
        records.with(|all| LocalPage::slice(all, &query.get(), page.get(), page_size.get()))
    });
    let rows = Signal::derive(move || slice.get().items);
    let total = Signal::derive(move || slice.with(|s| s.total));

    let viewing = RwSignal::new(None::<T>);
    let view_open = RwSignal::new(false);
    let deleting = RwSignal::new(None::<T>);
    let confirm_open = RwSignal::new(false);

    let on_search = Callback::new(move |text: String| {
        query.set(text);
        page.set(1);
    });
    let on_page_size_change = Callback::new(move |size: usize| {
        page_size.set(size);
        page.set(1);
    });
    let on_view = Callback::new(move |row: T| {
        viewing.set(Some(row));
        view_open.set(true);
    });
    let on_delete = Callback::new(move |row: T| {
        deleting.set(Some(row));
        confirm_open.set(true);
    });

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(row) = deleting.get_untracked() else {
            return;
        };
        let removed = records.try_update(|all| remove_record(all, row.id()));
        if removed == Some(true) {
            log::info!("Removed {} #{}", title, row.id());
            toast.success("Deleted", &format!("{} has been removed", row.label()));
        }
        let total = slice.with_untracked(|s| s.total);
        page.update(|p| *p = clamp_page(*p, total, page_size.get_untracked()));
        deleting.set(None);
    });

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold tracking-tight">{title}</h1>
                <p class="text-base-content/70">{description}</p>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <DataTable
                        columns=columns
                        data=rows
                        total_items=total
                        current_page=page
                        page_size=page_size
                        on_page_change=Callback::new(move |p: usize| page.set(p))
                        on_page_size_change=on_page_size_change
                        on_search=on_search
                        on_view=on_view
                        on_delete=on_delete
                    />
                </div>
            </div>

            <Modal
                open=view_open
                title=Signal::derive(move || viewing.with(|r| r.as_ref().map(|r| r.label()).unwrap_or_default()))
            >
                {move || viewing.get().map(|row| view! { <DetailList entries=row.details() /> })}
                <div class="modal-action">
                    <button type="button" class="btn" on:click=move |_| view_open.set(false)>
                        "Close"
                    </button>
                </div>
            </Modal>

            <ConfirmDialog
                open=confirm_open
                title="Are you sure?"
                description=Signal::derive(move || {
                    deleting
                        .with(|r| r.as_ref().map(|r| format!("Delete \"{}\"?", r.label())))
                        .unwrap_or_default()
                })
                confirm_text="Delete"
                destructive=true
                on_confirm=confirm_delete
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(u64, &'static str);

    impl Searchable for Row {
        fn haystack(&self) -> Vec<&str> {
            vec![self.1]
        }
    }

    impl CatalogRecord for Row {
        fn id(&self) -> u64 {
            self.0
        }

        fn label(&self) -> String {
            self.1.to_string()
        }

        fn details(&self) -> Vec<(&'static str, String)> {
            vec![("Name", self.1.to_string())]
        }
    }

    #[test]
    fn remove_record_by_id() {
        let mut rows = vec![Row(1, "a"), Row(2, "b"), Row(3, "c")];

        assert!(remove_record(&mut rows, 2));
        assert_eq!(rows, vec![Row(1, "a"), Row(3, "c")]);
        assert!(!remove_record(&mut rows, 2));
    }

    #[rstest]
    #[case(3, 21, 10, 3)]
    #[case(3, 20, 10, 2)]
    #[case(1, 0, 10, 1)]
    #[case(2, 5, 0, 1)]
    fn clamp_page_after_delete(
        #[case] page: usize,
        #[case] total: usize,
        #[case] size: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(clamp_page(page, total, size), expected);
    }
}
