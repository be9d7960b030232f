use crate::api::use_api;
use crate::components::icons::{DollarSign, Package, ShoppingCart, UsersIcon};
use crate::services::orders::{self, BrowserRolls};
use crate::services::{ListParams, products, users};
use admindash_shared::date::format_optional;
use admindash_shared::{Order, Product, stats};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Rows fetched for the summary widgets.
const SUMMARY_LIMIT: usize = 100;
const RECENT_ORDERS: usize = 5;

/// One bar of the monthly sales chart. `percent` is relative to the best month.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: &'static str,
    pub value: f64,
    pub percent: f64,
}

pub fn sales_bars(orders: &[Order]) -> Vec<Bar> {
    let months = stats::monthly_sales(orders);
    let max = months.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    months
        .into_iter()
        .map(|(label, value)| Bar {
            label,
            value,
            percent: if max > 0.0 { value / max * 100.0 } else { 0.0 },
        })
        .collect()
}

/// Category name, product count and rounded share of the total.
pub fn category_shares(products: &[Product]) -> Vec<(String, usize, u32)> {
    let total = products.len();
    stats::category_distribution(products)
        .into_iter()
        .map(|(name, count)| {
            let share = if total == 0 {
                0
            } else {
                (count as f64 / total as f64 * 100.0).round() as u32
            };
            (name, count, share)
        })
        .collect()
}

/// Newest first; undated orders go last.
pub fn recent_orders(orders: &[Order], n: usize) -> Vec<Order> {
    let mut sorted = orders.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(n);
    sorted
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_api();

    let (products_data, set_products_data) = signal(Vec::<Product>::new());
    let (orders_data, set_orders_data) = signal(Vec::<Order>::new());
    let (total_products, set_total_products) = signal(0usize);
    let (total_orders, set_total_orders) = signal(0usize);
    let (total_users, set_total_users) = signal(0usize);

    let params = ListParams::new(1, SUMMARY_LIMIT);
    spawn_local(async move {
        // Failures are already toasted by the client.
        if let Ok(listing) = products::list(&api, &params).await {
            set_total_products.set(listing.total);
            set_products_data.set(listing.items);
        }
        if let Ok(listing) = orders::list(&api, &params, &BrowserRolls).await {
            set_total_orders.set(listing.total);
            set_orders_data.set(listing.items);
        }
        if let Ok(listing) = users::list(&api, &params).await {
            set_total_users.set(listing.total);
        }
    });

    let revenue = move || orders_data.with(|o| format!("${:.2}", stats::total_revenue(o)));

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold tracking-tight">"Dashboard"</h1>
                <p class="text-base-content/70">"Welcome to your dashboard"</p>
            </div>

            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-4">
                <StatCard label="Total Revenue" value=Signal::derive(revenue) tone="bg-primary/10 text-primary">
                    <DollarSign attr:class="h-6 w-6" />
                </StatCard>
                <StatCard
                    label="Total Orders"
                    value=Signal::derive(move || total_orders.get().to_string())
                    tone="bg-blue-500/10 text-blue-500"
                >
                    <ShoppingCart attr:class="h-6 w-6" />
                </StatCard>
                <StatCard
                    label="Total Products"
                    value=Signal::derive(move || total_products.get().to_string())
                    tone="bg-green-500/10 text-green-500"
                >
                    <Package attr:class="h-6 w-6" />
                </StatCard>
                <StatCard
                    label="Total Users"
                    value=Signal::derive(move || total_users.get().to_string())
                    tone="bg-yellow-500/10 text-yellow-500"
                >
                    <UsersIcon attr:class="h-6 w-6" />
                </StatCard>
            </div>

            <div class="grid gap-4 md:grid-cols-2">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">"Monthly Sales"</h2>
                        <p class="text-sm text-base-content/70">"Revenue generated each month"</p>
                        <div class="flex h-64 items-end gap-2 pt-4">
                            {move || {
                                orders_data
                                    .with(|o| sales_bars(o))
                                    .into_iter()
                                    .map(|bar| {
                                        view! {
                                            <div class="flex flex-1 flex-col items-center gap-1 h-full justify-end">
                                                <div
                                                    class="w-full rounded-t bg-primary"
                                                    style=format!("height: {:.1}%", bar.percent)
                                                    title=format!("{}: ${:.2}", bar.label, bar.value)
                                                ></div>
                                                <span class="text-xs text-base-content/60">{bar.label}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </div>
                </div>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">"Product Categories"</h2>
                        <p class="text-sm text-base-content/70">"Distribution by category"</p>
                        <ul class="space-y-2 pt-2 max-h-72 overflow-y-auto">
                            {move || {
                                products_data
                                    .with(|p| category_shares(p))
                                    .into_iter()
                                    .map(|(name, count, share)| {
                                        view! {
                                            <li>
                                                <div class="flex justify-between text-sm">
                                                    <span>{format!("{} ({}%)", name, share)}</span>
                                                    <span class="text-base-content/60">{count}</span>
                                                </div>
                                                <progress class="progress progress-primary w-full" value=share.to_string() max="100"></progress>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">"Recent Orders"</h2>
                    <div class="overflow-x-auto">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Order"</th>
                                    <th>"Date"</th>
                                    <th>"Status"</th>
                                    <th class="text-right">"Total"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    orders_data
                                        .with(|o| recent_orders(o, RECENT_ORDERS))
                                        .into_iter()
                                        .map(|order| {
                                            let status = order
                                                .status
                                                .map(|s| s.label())
                                                .unwrap_or_default();
                                            view! {
                                                <tr>
                                                    <td>{format!("#{}", order.id)}</td>
                                                    <td>{format_optional(order.date.as_ref())}</td>
                                                    <td>{status}</td>
                                                    <td class="text-right">{format!("${:.2}", order.discounted_total)}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn StatCard(
    label: &'static str,
    value: Signal<String>,
    tone: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow hover:shadow-md transition-shadow">
            <div class="card-body p-6">
                <div class="flex items-center justify-between">
                    <div class="space-y-1">
                        <p class="text-sm text-base-content/70">{label}</p>
                        <p class="text-2xl font-bold">{move || value.get()}</p>
                    </div>
                    <div class=format!("h-12 w-12 rounded-full flex items-center justify-center {}", tone)>
                        {children()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admindash_shared::OrderStatus;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn order(id: u64, month: u32, total: f64) -> Order {
        Order {
            id,
            user_id: 1,
            products: Vec::new(),
            total,
            discounted_total: total,
            total_products: 0,
            total_quantity: 0,
            date: Some(Utc.with_ymd_and_hms(2025, month, 1, 0, 0, 0).unwrap()),
            status: Some(OrderStatus::Pending),
        }
    }

    #[test]
    fn bars_scale_against_the_best_month() {
        let bars = sales_bars(&[order(1, 1, 50.0), order(2, 3, 200.0)]);

        assert_eq!(bars.len(), 12);
        assert_eq!(bars[0].percent, 25.0);
        assert_eq!(bars[2].percent, 100.0);
        assert_eq!(bars[1].percent, 0.0);
    }

    #[test]
    fn bars_are_flat_without_sales() {
        assert!(sales_bars(&[]).iter().all(|b| b.percent == 0.0));
    }

    #[test]
    fn recent_orders_newest_first() {
        let mut undated = order(9, 1, 1.0);
        undated.date = None;
        let orders = vec![order(1, 2, 1.0), undated, order(2, 5, 1.0), order(3, 4, 1.0)];

        let ids: Vec<u64> = recent_orders(&orders, 3).iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
