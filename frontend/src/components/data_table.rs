//! Generic paginated data table
//!
//! Renders rows of any type through caller-supplied [`Column`]s. Paging,
//! search and row actions are delegated to callbacks; the only state owned
//! here is the search box text.

mod column;
mod model;
mod paging;

pub use column::{Column, unique_ids};

use model::{RenderMode, TableActions, TableEvents, TableShape};
use paging::{EntryRange, PAGE_SIZE_OPTIONS, PageButton, PagerControls, shows_footer, total_pages};

use crate::components::icons::{
    ChevronLeft, ChevronRight, ChevronsLeft, ChevronsRight, Filter, MoreHorizontal, Plus, Search,
};
use leptos::prelude::*;

#[component]
pub fn DataTable<T>(
    columns: Vec<Column<T>>,
    #[prop(into)] data: Signal<Vec<T>>,
    #[prop(into, optional)] total_items: Signal<usize>,
    #[prop(into, default = Signal::stored(1))] current_page: Signal<usize>,
    #[prop(into, default = Signal::stored(10))] page_size: Signal<usize>,
    #[prop(optional, into)] on_page_change: Option<Callback<usize>>,
    #[prop(optional, into)] on_page_size_change: Option<Callback<usize>>,
    #[prop(optional, into)] on_search: Option<Callback<String>>,
    #[prop(optional, into)] on_add: Option<Callback<()>>,
    #[prop(optional, into)] on_edit: Option<Callback<T>>,
    #[prop(optional, into)] on_delete: Option<Callback<T>>,
    #[prop(optional, into)] on_view: Option<Callback<T>>,
    #[prop(into, optional)] is_loading: Signal<bool>,
    #[prop(default = true)] show_actions: bool,
    #[prop(default = true)] show_toolbar: bool,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let actions = TableActions {
        on_view,
        on_edit,
        on_delete,
    };
    let events = TableEvents {
        on_page_change,
        on_page_size_change,
        on_search,
    };
    debug_assert!(unique_ids(&columns), "column ids must be unique within a table");
    let shape = TableShape::new(columns.len(), show_actions, actions.any());
    let columns = StoredValue::new(columns);

    view! {
        <div class="w-full space-y-4">
            {show_toolbar.then(|| view! { <Toolbar events=events on_add=on_add /> })}

            <div class="overflow-x-auto rounded-box border border-base-300">
                <table class="table w-full">
                    <thead>
                        <tr>
                            {columns
                                .with_value(|cols| {
                                    cols.iter()
                                        .map(|col| view! { <th class="font-medium">{col.header}</th> })
                                        .collect_view()
                                })}
                            {shape.actions_column.then(|| view! { <th class="text-right">"Actions"</th> })}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let mode = RenderMode::resolve(is_loading.get(), data.with(Vec::len));
                            match mode {
                                RenderMode::Loading => skeleton_rows(shape, mode.body_rows(0)).into_any(),
                                RenderMode::Empty => view! {
                                    <tr>
                                        <td colspan=shape.empty_colspan().to_string() class="h-24 text-center">
                                            "No results found."
                                        </td>
                                    </tr>
                                }
                                .into_any(),
                                RenderMode::Populated => data
                                    .get()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, row)| {
                                        let cells = columns
                                            .with_value(|cols| {
                                                cols.iter()
                                                    .map(|col| view! { <td>{col.render(&row, index)}</td> })
                                                    .collect_view()
                                            });
                                        view! {
                                            <tr class="group hover:bg-base-200/50">
                                                {cells}
                                                {shape.actions_column.then(|| row_menu(actions, row))}
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any(),
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <Show when=move || shows_footer(total_items.get())>
                <Pagination
                    events=events
                    total_items=total_items
                    current_page=current_page
                    page_size=page_size
                />
            </Show>
        </div>
    }
}

#[component]
fn Toolbar(events: TableEvents, on_add: Option<Callback<()>>) -> impl IntoView {
    let (query, set_query) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        events.submit_search(query.get_untracked());
    };

    view! {
        <div class="flex flex-col sm:flex-row justify-between items-center gap-4">
            <div class="flex-1 w-full sm:w-auto">
                <form on:submit=on_submit class="relative">
                    <Search attr:class="absolute left-2.5 top-2.5 h-4 w-4 opacity-50" />
                    <input
                        type="search"
                        placeholder="Search..."
                        class="input input-bordered input-sm w-full pl-8"
                        prop:value=query
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                </form>
            </div>

            <div class="flex items-center gap-2 w-full sm:w-auto justify-between sm:justify-start">
                <button type="button" class="btn btn-outline btn-sm h-9">
                    <Filter attr:class="h-4 w-4 mr-2" />
                    "Filter"
                </button>
                {on_add
                    .map(|add| {
                        view! {
                            <button type="button" class="btn btn-primary btn-sm h-9" on:click=move |_| add.run(())>
                                <Plus attr:class="h-4 w-4 mr-2" />
                                "Add New"
                            </button>
                        }
                    })}
            </div>
        </div>
    }
}

fn skeleton_rows(shape: TableShape, count: usize) -> impl IntoView {
    (0..count)
        .map(|_| {
            view! {
                <tr>
                    {(0..shape.column_count)
                        .map(|_| view! { <td><div class="h-5 bg-base-300 rounded animate-pulse"></div></td> })
                        .collect_view()}
                    {shape
                        .skeleton_action_cell()
                        .then(|| view! { <td><div class="h-8 w-20 bg-base-300 rounded animate-pulse ml-auto"></div></td> })}
                </tr>
            }
        })
        .collect_view()
}

fn row_menu<T: Clone + Send + Sync + 'static>(actions: TableActions<T>, row: T) -> impl IntoView {
    let items = actions
        .menu()
        .into_iter()
        .map(|item| {
            let row = row.clone();
            let class = if item.action.is_destructive() {
                "text-error hover:bg-error/10"
            } else {
                ""
            };
            view! {
                <li>
                    <a class=class on:click=move |_| item.callback.run(row.clone())>
                        {item.action.label()}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <td class="text-right">
            <div class="dropdown dropdown-end">
                <div
                    tabindex="0"
                    role="button"
                    class="btn btn-ghost btn-sm btn-square opacity-0 group-hover:opacity-100 focus:opacity-100"
                >
                    <MoreHorizontal attr:class="h-4 w-4" />
                </div>
                <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-44">
                    <li class="menu-title">"Actions"</li>
                    {items}
                </ul>
            </div>
        </td>
    }
}

#[component]
fn Pagination(
    events: TableEvents,
    total_items: Signal<usize>,
    current_page: Signal<usize>,
    page_size: Signal<usize>,
) -> impl IntoView {
    let pages = move || total_pages(total_items.get(), page_size.get());
    let controls = move || PagerControls::new(current_page.get(), pages());
    let caption = move || {
        EntryRange::new(total_items.get(), current_page.get(), page_size.get()).to_string()
    };

    view! {
        <div class="flex flex-col sm:flex-row items-center justify-between gap-2">
            <div class="text-sm text-base-content/70">{caption}</div>

            <div class="flex items-center gap-2">
                <div class="flex items-center gap-2">
                    <p class="text-sm whitespace-nowrap text-base-content/70">"Rows per page"</p>
                    <select
                        class="select select-bordered select-sm w-20"
                        prop:value=move || page_size.get().to_string()
                        on:change=move |ev| events.page_size_change(&event_target_value(&ev))
                    >
                        {PAGE_SIZE_OPTIONS
                            .into_iter()
                            .map(|size| {
                                view! {
                                    <option value=size.to_string() selected=move || page_size.get() == size>
                                        {size}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="join">
                    <button
                        class="join-item btn btn-outline btn-sm btn-square"
                        disabled=move || controls().first_disabled
                        on:click=move |_| events.go_to(1)
                    >
                        <ChevronsLeft attr:class="h-4 w-4" />
                    </button>
                    <button
                        class="join-item btn btn-outline btn-sm btn-square"
                        disabled=move || controls().prev_disabled
                        on:click=move |_| events.go_to(current_page.get_untracked().saturating_sub(1))
                    >
                        <ChevronLeft attr:class="h-4 w-4" />
                    </button>

                    {move || {
                        PageButton::window(current_page.get(), pages())
                            .into_iter()
                            .map(|button| {
                                let class = if button.selected {
                                    "join-item btn btn-primary btn-sm btn-square pointer-events-none"
                                } else {
                                    "join-item btn btn-outline btn-sm btn-square"
                                };
                                view! {
                                    <button class=class on:click=move |_| events.page_click(button)>
                                        {button.number}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}

                    <button
                        class="join-item btn btn-outline btn-sm btn-square"
                        disabled=move || controls().next_disabled
                        on:click=move |_| events.go_to(current_page.get_untracked() + 1)
                    >
                        <ChevronRight attr:class="h-4 w-4" />
                    </button>
                    <button
                        class="join-item btn btn-outline btn-sm btn-square"
                        disabled=move || controls().last_disabled
                        on:click=move |_| events.go_to(total_pages(total_items.get_untracked(), page_size.get_untracked()))
                    >
                        <ChevronsRight attr:class="h-4 w-4" />
                    </button>
                </div>
            </div>
        </div>
    }
}
