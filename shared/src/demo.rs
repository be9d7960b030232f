//! Demo-only order scaffolding.
//!
//! The demo API's carts have no date, no status and no update/delete endpoints.
//! The orders screen still needs all four, so they are synthesised here. A real
//! backend would supply these fields; values already present are left alone.

use crate::date::days_before;
use crate::{DeleteResponse, Order, OrderPatch, OrderStatus};
use chrono::{DateTime, Utc};

/// Synthesised dates fall within this many days before `now`.
pub const DATE_SPREAD_DAYS: f64 = 30.0;

/// Two uniform samples in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rolls {
    pub date: f64,
    pub status: f64,
}

fn bucket(roll: f64, buckets: usize) -> usize {
    let idx = (roll.clamp(0.0, 1.0) * buckets as f64).floor() as usize;
    idx.min(buckets - 1)
}

pub fn status_from_roll(roll: f64) -> OrderStatus {
    OrderStatus::ALL[bucket(roll, OrderStatus::ALL.len())]
}

pub fn date_from_roll(now: DateTime<Utc>, roll: f64) -> DateTime<Utc> {
    let days = bucket(roll, DATE_SPREAD_DAYS as usize) as i64;
    days_before(now, days)
}

/// Fills a missing `date` and `status` on the order.
pub fn synthesize(order: &mut Order, now: DateTime<Utc>, rolls: Rolls) {
    if order.date.is_none() {
        order.date = Some(date_from_roll(now, rolls.date));
    }
    if order.status.is_none() {
        order.status = Some(status_from_roll(rolls.status));
    }
}

/// Stands in for the missing cart update endpoint.
pub fn merge_patch(mut order: Order, patch: &OrderPatch) -> Order {
    if let Some(status) = patch.status {
        order.status = Some(status);
    }
    order
}

/// Stands in for the missing cart delete endpoint.
pub fn mark_deleted(id: u64, now: DateTime<Utc>) -> DeleteResponse {
    DeleteResponse {
        id,
        is_deleted: true,
        deleted_on: Some(now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn order() -> Order {
        Order {
            id: 1,
            user_id: 2,
            products: Vec::new(),
            total: 10.0,
            discounted_total: 9.0,
            total_products: 0,
            total_quantity: 0,
            date: None,
            status: None,
        }
    }

    #[rstest]
    #[case(0.0, OrderStatus::Pending)]
    #[case(0.34, OrderStatus::Completed)]
    #[case(0.9999, OrderStatus::Cancelled)]
    #[case(1.0, OrderStatus::Cancelled)]
    fn status_buckets(#[case] roll: f64, #[case] expected: OrderStatus) {
        assert_eq!(status_from_roll(roll), expected);
    }

    #[test]
    fn synthesize_fills_only_missing_fields() {
        let now = Utc.with_ymd_and_hms(2025, 5, 31, 12, 0, 0).unwrap();
        let mut o = order();
        synthesize(&mut o, now, Rolls { date: 0.5, status: 0.0 });
        assert_eq!(o.date, Some(days_before(now, 15)));
        assert_eq!(o.status, Some(OrderStatus::Pending));

        synthesize(&mut o, now, Rolls { date: 0.0, status: 0.9 });
        assert_eq!(o.status, Some(OrderStatus::Pending));
        assert_eq!(o.date, Some(days_before(now, 15)));
    }

    #[test]
    fn dates_stay_within_spread() {
        let now = Utc.with_ymd_and_hms(2025, 5, 31, 12, 0, 0).unwrap();
        let oldest = date_from_roll(now, 0.99999);
        assert_eq!(oldest, days_before(now, 29));
    }

    #[test]
    fn merge_and_delete_mocks() {
        let merged = merge_patch(
            order(),
            &OrderPatch {
                status: Some(OrderStatus::Completed),
            },
        );
        assert_eq!(merged.status, Some(OrderStatus::Completed));

        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let deleted = mark_deleted(4, now);
        assert!(deleted.is_deleted);
        assert_eq!(deleted.deleted_on, Some(now));
    }
}
