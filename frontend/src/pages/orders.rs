//! Orders screen. Status changes and deletes are mocked by the service layer,
//! so the visible rows are patched in place instead of refetched.

use crate::api::use_api;
use crate::components::data_table::{Column, DataTable};
use crate::components::dialog::{ConfirmDialog, Modal};
use crate::services::{LatestRequest, ListParams};
use crate::services::orders::{self, BrowserRolls};
use crate::toast::use_toast;
use admindash_shared::date::format_optional;
use admindash_shared::demo::merge_patch;
use admindash_shared::{NewOrder, Order, OrderLine, OrderPatch, OrderStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Badge label and classes. A missing status reads as pending.
pub fn status_badge(status: Option<OrderStatus>) -> (&'static str, &'static str) {
    match status.unwrap_or(OrderStatus::Pending) {
        OrderStatus::Completed => ("Completed", "badge badge-success"),
        OrderStatus::Cancelled => ("Cancelled", "badge badge-error"),
        OrderStatus::Pending => ("Pending", "badge badge-outline badge-warning"),
    }
}

/// Applies `patch` to the row with `id`, returning the patched order.
pub fn patch_row(rows: &mut [Order], id: u64, patch: &OrderPatch) -> Option<Order> {
    let row = rows.iter_mut().find(|o| o.id == id)?;
    *row = merge_patch(row.clone(), patch);
    Some(row.clone())
}

/// A new cart for the same customer with the same lines.
pub fn duplicate(order: &Order) -> NewOrder {
    NewOrder {
        user_id: order.user_id,
        products: order
            .products
            .iter()
            .map(|item| OrderLine {
                id: item.id,
                quantity: item.quantity,
            })
            .collect(),
    }
}

fn badge(status: Option<OrderStatus>) -> impl IntoView {
    let (label, class) = status_badge(status);
    view! { <span class=class>{label}</span> }
}

fn columns() -> Vec<Column<Order>> {
    vec![
        Column::new("id", "Order ID", |o: &Order, _| {
            view! { <div class="font-medium">{format!("#{}", o.id)}</div> }
        }),
        Column::new("date", "Date", |o: &Order, _| format_optional(o.date.as_ref())),
        Column::new("customer", "Customer", |o: &Order, _| format!("User #{}", o.user_id)),
        Column::new("total", "Total", |o: &Order, _| {
            view! { <div class="font-medium">{format!("${:.2}", o.total)}</div> }
        }),
        Column::new("status", "Status", |o: &Order, _| badge(o.status)),
        Column::new("items", "Items", |o: &Order, _| o.total_products.to_string()),
    ]
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let toast = use_toast();

    let page = RwSignal::new(1usize);
    let page_size = RwSignal::new(10usize);
    let latest = LatestRequest::new();

    let rows = RwSignal::new(Vec::<Order>::new());
    let (total, set_total) = signal(0usize);
    let (loading, set_loading) = signal(true);

    let current = RwSignal::new(None::<Order>);
    let view_open = RwSignal::new(false);
    let confirm_open = RwSignal::new(false);

    Effect::new(move |_| {
        let params = ListParams::new(page.get(), page_size.get());
        let api = api.get_value();
        let ticket = latest.begin();
        set_loading.set(true);
        spawn_local(async move {
            let result = orders::list(&api, &params, &BrowserRolls).await;
            if !latest.is_current(ticket) {
                return;
            }
            let listing = result.unwrap_or_default();
            set_total.set(listing.total);
            rows.set(listing.items);
            set_loading.set(false);
        });
    });

    let on_status_change = Callback::new(move |raw: String| {
        let (Some(order), Some(status)) = (current.get_untracked(), OrderStatus::parse(&raw)) else {
            return;
        };
        let patch = OrderPatch {
            status: Some(status),
        };
        let api = api.get_value();
        spawn_local(async move {
            if orders::update(&api, order.id, patch.clone(), &BrowserRolls)
                .await
                .is_ok()
            {
                let patched = rows
                    .try_update(|all| patch_row(all, order.id, &patch))
                    .flatten();
                current.set(patched.or(Some(merge_patch(order, &patch))));
                toast.success("Order updated", "The order status has been updated successfully");
            }
        });
    });

    let on_duplicate = Callback::new(move |_: ()| {
        let Some(order) = current.get_untracked() else {
            return;
        };
        let api = api.get_value();
        spawn_local(async move {
            if let Ok(created) = orders::create(&api, duplicate(&order)).await {
                toast.success(
                    "Order created",
                    &format!("Order #{} was created from order #{}", created.id, order.id),
                );
                view_open.set(false);
            }
        });
    });

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(order) = current.get_untracked() else {
            return;
        };
        let receipt = orders::delete(order.id, &BrowserRolls);
        if receipt.is_deleted {
            rows.update(|all| all.retain(|o| o.id != receipt.id));
            set_total.update(|t| *t = t.saturating_sub(1));
            toast.success("Order deleted", "The order has been deleted successfully");
        }
    });

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold tracking-tight">"Orders"</h1>
                <p class="text-base-content/70">"Manage customer orders and track status"</p>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <DataTable
                        columns=columns()
                        data=rows
                        total_items=total
                        current_page=page
                        page_size=page_size
                        is_loading=loading
                        show_toolbar=false
                        on_page_change=Callback::new(move |p: usize| page.set(p))
                        on_page_size_change=Callback::new(move |size: usize| {
                            page_size.set(size);
                            page.set(1);
                        })
                        on_view=Callback::new(move |o: Order| {
                            current.set(Some(o));
                            view_open.set(true);
                        })
                        on_delete=Callback::new(move |o: Order| {
                            current.set(Some(o));
                            confirm_open.set(true);
                        })
                    />
                </div>
            </div>

            <Modal
                open=view_open
                title=Signal::derive(move || {
                    current.with(|o| o.as_ref().map(|o| format!("Order #{}", o.id)).unwrap_or_default())
                })
                description="View order details and update status"
                wide=true
            >
                {move || current.get().map(|order| view! { <OrderDetails order=order on_status_change=on_status_change /> })}
                <div class="modal-action">
                    <button type="button" class="btn btn-primary" on:click=move |_| on_duplicate.run(())>
                        "Duplicate Order"
                    </button>
                    <button type="button" class="btn btn-outline" on:click=move |_| view_open.set(false)>
                        "Close"
                    </button>
                </div>
            </Modal>

            <ConfirmDialog
                open=confirm_open
                title="Delete Order"
                description=Signal::derive(move || {
                    let id = current.with(|o| o.as_ref().map(|o| o.id).unwrap_or_default());
                    format!("Are you sure you want to delete Order #{}? This action cannot be undone.", id)
                })
                confirm_text="Delete"
                destructive=true
                on_confirm=confirm_delete
            />
        </div>
    }
}

#[component]
fn OrderDetails(order: Order, on_status_change: Callback<String>) -> impl IntoView {
    let selected = order.status.unwrap_or(OrderStatus::Pending);
    let discount = order.total - order.discounted_total;

    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <div>
                    <p class="text-sm text-base-content/60">"Order Date"</p>
                    <p class="font-medium">{format_optional(order.date.as_ref())}</p>
                </div>
                <div>
                    <p class="text-sm text-base-content/60">"Customer ID"</p>
                    <p class="font-medium">{format!("User #{}", order.user_id)}</p>
                </div>
                <div>
                    <p class="text-sm text-base-content/60">"Total"</p>
                    <p class="font-medium">{format!("${:.2}", order.discounted_total)}</p>
                </div>
                <div>
                    <p class="text-sm text-base-content/60">"Status"</p>
                    <select
                        class="select select-bordered select-sm w-full mt-1"
                        on:change=move |ev| on_status_change.run(event_target_value(&ev))
                    >
                        {OrderStatus::ALL
                            .into_iter()
                            .map(|status| {
                                view! {
                                    <option value=status.as_str() selected={status == selected}>
                                        {status.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div>
                <h3 class="text-lg font-medium mb-3">"Order Items"</h3>
                <table class="table table-sm">
                    <thead>
                        <tr>
                            <th>"Product"</th>
                            <th>"Price"</th>
                            <th>"Quantity"</th>
                            <th class="text-right">"Total"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {order
                            .products
                            .iter()
                            .map(|item| {
                                view! {
                                    <tr>
                                        <td class="font-medium">{item.title.clone()}</td>
                                        <td>{format!("${:.2}", item.price)}</td>
                                        <td>{item.quantity}</td>
                                        <td class="text-right">{format!("${:.2}", item.total)}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>

            <div class="flex justify-between">
                <div>
                    <p class="text-sm text-base-content/60">"Items"</p>
                    <p class="font-medium">{order.total_products}</p>
                </div>
                <div>
                    <p class="text-sm text-base-content/60">"Subtotal"</p>
                    <p class="font-medium">{format!("${:.2}", order.total)}</p>
                </div>
                <div>
                    <p class="text-sm text-base-content/60">"Discount"</p>
                    <p class="font-medium">{format!("${:.2}", discount)}</p>
                </div>
                <div>
                    <p class="text-sm text-base-content/60">"Total"</p>
                    <p class="font-medium text-xl">{format!("${:.2}", order.discounted_total)}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn order(id: u64, status: Option<OrderStatus>) -> Order {
        Order {
            id,
            user_id: 7,
            products: Vec::new(),
            total: 100.0,
            discounted_total: 90.0,
            total_products: 2,
            total_quantity: 3,
            date: None,
            status,
        }
    }

    #[rstest]
    #[case(Some(OrderStatus::Completed), "Completed")]
    #[case(Some(OrderStatus::Cancelled), "Cancelled")]
    #[case(Some(OrderStatus::Pending), "Pending")]
    #[case(None, "Pending")]
    fn badge_labels(#[case] status: Option<OrderStatus>, #[case] label: &str) {
        assert_eq!(status_badge(status).0, label);
    }

    #[test]
    fn duplicate_keeps_customer_and_lines() {
        let mut source = order(3, Some(OrderStatus::Completed));
        source.products = serde_json::from_value(serde_json::json!([
            {"id": 11, "title": "Lamp", "price": 20.0, "quantity": 2, "total": 40.0},
            {"id": 12, "title": "Rug", "price": 50.0, "quantity": 1, "total": 50.0}
        ]))
        .unwrap();

        let draft = duplicate(&source);
        assert_eq!(draft.user_id, 7);
        assert_eq!(
            draft.products,
            vec![OrderLine { id: 11, quantity: 2 }, OrderLine { id: 12, quantity: 1 }]
        );
    }

    #[test]
    fn column_ids_are_unique() {
        assert!(crate::components::data_table::unique_ids(&columns()));
    }

    #[test]
    fn patch_row_updates_only_the_target() {
        let mut rows = vec![order(1, Some(OrderStatus::Pending)), order(2, None)];
        let patch = OrderPatch {
            status: Some(OrderStatus::Cancelled),
        };

        let patched = patch_row(&mut rows, 2, &patch).unwrap();
        assert_eq!(patched.status, Some(OrderStatus::Cancelled));
        assert_eq!(rows[0].status, Some(OrderStatus::Pending));
        assert_eq!(rows[1].status, Some(OrderStatus::Cancelled));
        assert_eq!(patch_row(&mut rows, 9, &patch), None);
    }
}
