//! Dashboard aggregations over the fetched products and orders.

use crate::date::{MONTH_LABELS, month_index};
use crate::{Order, OrderStatus, Product};
use std::collections::HashMap;

/// Product count per category, most populated first, ties by name.
pub fn category_distribution(products: &[Product]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for p in products {
        *counts.entry(p.category.as_str()).or_default() += 1;
    }
    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

/// Discounted sales per calendar month, Jan..Dec. Undated orders are skipped.
pub fn monthly_sales(orders: &[Order]) -> [(&'static str, f64); 12] {
    let mut months = MONTH_LABELS.map(|label| (label, 0.0));
    for order in orders {
        if let Some(date) = &order.date {
            months[month_index(date)].1 += order.discounted_total;
        }
    }
    months
}

pub fn total_revenue(orders: &[Order]) -> f64 {
    orders.iter().map(|o| o.discounted_total).sum()
}

/// Order count per status, in [`OrderStatus::ALL`] order. Orders without a status are skipped.
pub fn status_breakdown(orders: &[Order]) -> Vec<(OrderStatus, usize)> {
    OrderStatus::ALL
        .into_iter()
        .map(|status| {
            let n = orders.iter().filter(|o| o.status == Some(status)).count();
            (status, n)
        })
        .collect()
}
