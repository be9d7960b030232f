mod form_state;

use form_state::ProductForm;

use crate::api::use_api;
use crate::components::data_table::{Column, DataTable};
use crate::components::dialog::{ConfirmDialog, Modal};
use crate::components::form::{DialogMode, TextArea, TextField};
use crate::services::{LatestRequest, ListParams, products};
use crate::toast::use_toast;
use admindash_shared::{CategoryEntry, Product};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// The stock tabs filter the fetched page, not the whole catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StockTab {
    #[default]
    All,
    InStock,
    OutOfStock,
}

impl StockTab {
    pub const ALL: [StockTab; 3] = [StockTab::All, StockTab::InStock, StockTab::OutOfStock];

    pub fn label(&self) -> &'static str {
        match self {
            StockTab::All => "All Products",
            StockTab::InStock => "In Stock",
            StockTab::OutOfStock => "Out of Stock",
        }
    }

    pub fn keeps(&self, product: &Product) -> bool {
        match self {
            StockTab::All => true,
            StockTab::InStock => product.in_stock(),
            StockTab::OutOfStock => !product.in_stock(),
        }
    }

    /// Rows and total for this tab. Only `All` uses the server total.
    pub fn apply(&self, rows: &[Product], server_total: usize) -> (Vec<Product>, usize) {
        let kept: Vec<Product> = rows.iter().filter(|p| self.keeps(p)).cloned().collect();
        let total = match self {
            StockTab::All => server_total,
            _ => kept.len(),
        };
        (kept, total)
    }
}

/// Select value to filter; the blank option clears it.
fn category_filter(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

fn mode_title(mode: DialogMode) -> &'static str {
    match mode {
        DialogMode::Add => "Add Product",
        DialogMode::Edit => "Edit Product",
        DialogMode::View => "Product Details",
    }
}

fn mode_description(mode: DialogMode) -> &'static str {
    match mode {
        DialogMode::Add => "Add a new product to your inventory.",
        DialogMode::Edit => "Make changes to the product.",
        DialogMode::View => "View product details.",
    }
}

fn columns() -> Vec<Column<Product>> {
    vec![
        Column::new("product", "Product", |p: &Product, _| {
            view! {
                <div class="flex items-center gap-3">
                    <img src=p.thumbnail.clone() alt=p.title.clone() class="h-10 w-10 rounded-md object-cover" />
                    <div>
                        <div class="font-medium">{p.title.clone()}</div>
                        <div class="text-sm text-base-content/60">{p.brand.clone()}</div>
                    </div>
                </div>
            }
        }),
        Column::new("category", "Category", |p: &Product, _| {
            view! { <span class="badge badge-outline">{p.category.clone()}</span> }
        }),
        Column::new("price", "Price", |p: &Product, _| {
            view! { <div class="font-medium">{format!("${:.2}", p.price)}</div> }
        })
        .sortable(),
        Column::new("stock", "Stock", |p: &Product, _| {
            view! { <div class="font-medium">{p.stock}</div> }
        })
        .sortable(),
        Column::new("rating", "Rating", |p: &Product, _| {
            view! {
                <div class="flex items-center">
                    <div class="mr-1">{p.rating}</div>
                    <div class="text-yellow-400">"★"</div>
                </div>
            }
        }),
    ]
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let toast = use_toast();

    let search = RwSignal::new(String::new());
    let page = RwSignal::new(1usize);
    let page_size = RwSignal::new(10usize);
    let reload = RwSignal::new(0u32);
    let tab = RwSignal::new(StockTab::All);
    let category = RwSignal::new(None::<String>);
    let latest = LatestRequest::new();

    let (rows, set_rows) = signal(Vec::<Product>::new());
    let (server_total, set_server_total) = signal(0usize);
    let (loading, set_loading) = signal(true);

    let form = ProductForm::new();
    let mode = RwSignal::new(DialogMode::Add);
    let form_open = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);
    let current = RwSignal::new(None::<Product>);
    let confirm_open = RwSignal::new(false);

    let (categories, set_categories) = signal(Vec::<CategoryEntry>::new());
    {
        let api = api.get_value();
        spawn_local(async move {
            if let Ok(list) = products::categories(&api).await {
                set_categories.set(list);
            }
        });
    }

    Effect::new(move |_| {
        reload.track();
        let params = ListParams::new(page.get(), page_size.get()).with_search(search.get());
        let category = category.get();
        let api = api.get_value();
        let ticket = latest.begin();
        set_loading.set(true);
        spawn_local(async move {
            let result = products::list_in(&api, &params, category).await;
            if !latest.is_current(ticket) {
                return;
            }
            match result {
                Ok(listing) => {
                    set_server_total.set(listing.total);
                    set_rows.set(listing.items);
                }
                Err(_) => {
                    set_server_total.set(0);
                    set_rows.set(Vec::new());
                }
            }
            set_loading.set(false);
        });
    });

    let refetch = move || reload.update(|n| *n += 1);

    let open_dialog = move |next: DialogMode, product: Option<Product>| {
        match &product {
            Some(p) => form.load(p),
            None => form.reset(),
        }
        let viewing = match (next, &product) {
            (DialogMode::View, Some(p)) => Some(p.id),
            _ => None,
        };
        current.set(product);
        form_error.set(None);
        mode.set(next);
        form_open.set(true);

        // Refresh from the API while the details are open.
        if let Some(id) = viewing {
            let api = api.get_value();
            spawn_local(async move {
                let Ok(fresh) = products::get(&api, id).await else {
                    return;
                };
                let still_open = form_open.try_get_untracked() == Some(true)
                    && current.try_with_untracked(|c| c.as_ref().map(|p| p.id)).flatten() == Some(id);
                if still_open {
                    form.load(&fresh);
                    current.set(Some(fresh));
                }
            });
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = match form.to_draft() {
            Ok(draft) => draft,
            Err(msg) => {
                form_error.set(Some(msg));
                return;
            }
        };
        let api = api.get_value();
        let editing = current.get_untracked().map(|p| p.id);
        let mode_now = mode.get_untracked();
        spawn_local(async move {
            let result = match (mode_now, editing) {
                (DialogMode::Edit, Some(id)) => products::update(&api, id, draft)
                    .await
                    .map(|_| ("Product updated", "The product has been updated successfully")),
                (DialogMode::Add, _) => products::create(&api, draft)
                    .await
                    .map(|_| ("Product created", "The product has been added successfully")),
                _ => return,
            };
            if let Ok((title, description)) = result {
                toast.success(title, description);
                form_open.set(false);
                refetch();
            }
        });
    };

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(product) = current.get_untracked() else {
            return;
        };
        let api = api.get_value();
        spawn_local(async move {
            if products::delete(&api, product.id).await.is_ok() {
                toast.success("Product deleted", "The product has been deleted successfully");
                refetch();
            }
        });
    });

    let tab_rows = Signal::derive(move || {
        rows.with(|r| tab.get().apply(r, server_total.get()))
    });

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold tracking-tight">"Products"</h1>
                <p class="text-base-content/70">"Manage your product inventory"</p>
            </div>

            <div class="flex flex-wrap items-center justify-between gap-4">
                <div role="tablist" class="tabs tabs-boxed w-fit">
                    {StockTab::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <a
                                    role="tab"
                                    class=move || { if tab.get() == t { "tab tab-active" } else { "tab" } }
                                    on:click=move |_| tab.set(t)
                                >
                                    {t.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <select
                    class="select select-bordered select-sm w-56"
                    on:change=move |ev| {
                        category.set(category_filter(event_target_value(&ev)));
                        page.set(1);
                    }
                >
                    <option value="">"All categories"</option>
                    {move || {
                        categories
                            .with(|cats| {
                                cats.iter()
                                    .map(|c| view! { <option value=c.slug().to_string()>{c.name().to_string()}</option> })
                                    .collect_view()
                            })
                    }}
                </select>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <DataTable
                        columns=columns()
                        data=Signal::derive(move || tab_rows.get().0)
                        total_items=Signal::derive(move || tab_rows.with(|(_, total)| *total))
                        current_page=page
                        page_size=page_size
                        is_loading=loading
                        on_page_change=Callback::new(move |p: usize| page.set(p))
                        on_page_size_change=Callback::new(move |size: usize| {
                            page_size.set(size);
                            page.set(1);
                        })
                        on_search=Callback::new(move |text: String| {
                            search.set(text);
                            page.set(1);
                        })
                        on_add=Callback::new(move |_: ()| open_dialog(DialogMode::Add, None))
                        on_view=Callback::new(move |p: Product| open_dialog(DialogMode::View, Some(p)))
                        on_edit=Callback::new(move |p: Product| open_dialog(DialogMode::Edit, Some(p)))
                        on_delete=Callback::new(move |p: Product| {
                            current.set(Some(p));
                            confirm_open.set(true);
                        })
                    />
                </div>
            </div>

            <Modal
                open=form_open
                title=Signal::derive(move || mode_title(mode.get()).to_string())
                description=Signal::derive(move || Some(mode_description(mode.get()).to_string()))
                wide=true
            >
                <form class="space-y-4" on:submit=on_submit novalidate>
                    {move || form_error.get().map(|msg| view! { <div role="alert" class="alert alert-error text-sm py-2">{msg}</div> })}
                    <div class="grid grid-cols-2 gap-4">
                        <TextField id="title" label="Title" value=form.title readonly=Signal::derive(move || mode.get().is_readonly()) />
                        <TextField id="brand" label="Brand" value=form.brand readonly=Signal::derive(move || mode.get().is_readonly()) />
                    </div>
                    <TextArea id="description" label="Description" value=form.description readonly=Signal::derive(move || mode.get().is_readonly()) />
                    <div class="grid grid-cols-2 gap-4">
                        <TextField id="category" label="Category" value=form.category readonly=Signal::derive(move || mode.get().is_readonly()) />
                        <TextField id="thumbnail" label="Thumbnail URL" value=form.thumbnail readonly=Signal::derive(move || mode.get().is_readonly()) />
                    </div>
                    <div class="grid grid-cols-4 gap-4">
                        <TextField id="price" label="Price" input_type="number" value=form.price readonly=Signal::derive(move || mode.get().is_readonly()) />
                        <TextField id="stock" label="Stock" input_type="number" value=form.stock readonly=Signal::derive(move || mode.get().is_readonly()) />
                        <TextField id="discount" label="Discount %" input_type="number" value=form.discount_percentage readonly=Signal::derive(move || mode.get().is_readonly()) />
                        <TextField id="rating" label="Rating" input_type="number" value=form.rating readonly=Signal::derive(move || mode.get().is_readonly()) />
                    </div>
                    {move || {
                        mode.get()
                            .submit_label("Add Product")
                            .map(|label| {
                                view! {
                                    <div class="modal-action">
                                        <button type="submit" class="btn btn-primary">{label}</button>
                                    </div>
                                }
                            })
                    }}
                </form>
            </Modal>

            <ConfirmDialog
                open=confirm_open
                title="Delete Product"
                description=Signal::derive(move || {
                    let title = current.with(|p| p.as_ref().map(|p| p.title.clone()).unwrap_or_default());
                    format!("Are you sure you want to delete \"{}\"? This action cannot be undone.", title)
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
    use pretty_assertions::assert_eq;

    fn product(id: u64, stock: u32) -> Product {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Product {id}"),
            "price": 1.0,
            "stock": stock,
            "category": "misc",
        }))
        .unwrap()
    }

    #[test]
    fn stock_tabs_filter_the_page_and_count_locally() {
        let rows = vec![product(1, 3), product(2, 0), product(3, 8)];

        let (all, all_total) = StockTab::All.apply(&rows, 194);
        assert_eq!(all.len(), 3);
        assert_eq!(all_total, 194);

        let (in_stock, total) = StockTab::InStock.apply(&rows, 194);
        assert_eq!(in_stock.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(total, 2);

        let (out, total) = StockTab::OutOfStock.apply(&rows, 194);
        assert_eq!(out.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(total, 1);
    }

    #[test]
    fn blank_category_clears_the_filter() {
        assert_eq!(category_filter(String::new()), None);
        assert_eq!(category_filter("beauty".to_string()), Some("beauty".to_string()));
    }

    #[test]
    fn column_ids_are_unique() {
        assert!(crate::components::data_table::unique_ids(&columns()));
    }

    #[test]
    fn dialog_copy_follows_the_mode() {
        assert_eq!(mode_title(DialogMode::View), "Product Details");
        assert_eq!(mode_description(DialogMode::Edit), "Make changes to the product.");
    }
}
