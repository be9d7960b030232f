//! Orders, backed by the demo API's carts.
//!
//! Carts have no date or status and cannot be updated or deleted, so those
//! parts go through `admindash_shared::demo`.

use super::ListParams;
use crate::api::ApiClient;
use crate::error::ApiError;
use admindash_shared::demo::{self, Rolls};
use admindash_shared::protocol::{CreateOrder, GetOrder, ListOrders, ListUserOrders};
use admindash_shared::{DeleteResponse, Listing, NewOrder, Order, OrderPatch};
use chrono::{DateTime, Utc};

/// Randomness and clock for the demo fields.
pub trait RollSource {
    fn rolls(&self) -> Rolls;
    fn now(&self) -> DateTime<Utc>;
}

/// `Math.random` and the wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRolls;

impl RollSource for BrowserRolls {
    fn rolls(&self) -> Rolls {
        Rolls {
            date: js_sys::Math::random(),
            status: js_sys::Math::random(),
        }
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

fn enhance(listing: Listing<Order>, source: &dyn RollSource) -> Listing<Order> {
    let now = source.now();
    listing.map_items(|order| demo::synthesize(order, now, source.rolls()))
}

pub async fn list(
    api: &ApiClient,
    params: &ListParams,
    source: &dyn RollSource,
) -> Result<Listing<Order>, ApiError> {
    let req = ListOrders {
        page: Some(params.query()),
        user_id: None,
    };
    let listing = api.send(&req).await.map(Listing::from)?;
    Ok(enhance(listing, source))
}

pub async fn list_for_user(
    api: &ApiClient,
    user_id: u64,
    source: &dyn RollSource,
) -> Result<Listing<Order>, ApiError> {
    let listing = api
        .send(&ListUserOrders { user_id })
        .await
        .map(Listing::from)?;
    Ok(enhance(listing, source))
}

pub async fn get(api: &ApiClient, id: u64, source: &dyn RollSource) -> Result<Order, ApiError> {
    let mut order = api.send(&GetOrder { id }).await?;
    demo::synthesize(&mut order, source.now(), source.rolls());
    Ok(order)
}

pub async fn create(api: &ApiClient, order: NewOrder) -> Result<Order, ApiError> {
    api.send(&CreateOrder(order)).await
}

/// Fetches the order and merges the patch locally.
pub async fn update(
    api: &ApiClient,
    id: u64,
    patch: OrderPatch,
    source: &dyn RollSource,
) -> Result<Order, ApiError> {
    let order = get(api, id, source).await?;
    Ok(demo::merge_patch(order, &patch))
}

/// No request is made.
pub fn delete(id: u64, source: &dyn RollSource) -> DeleteResponse {
    demo::mark_deleted(id, source.now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::{MockTransport, client};
    use admindash_shared::OrderStatus;
    use admindash_shared::date::days_before;
    use chrono::TimeZone;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    struct FixedRolls(DateTime<Utc>);

    impl RollSource for FixedRolls {
        fn rolls(&self) -> Rolls {
            Rolls {
                date: 0.1,
                status: 0.5,
            }
        }

        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    const CART: &str = r#"{"id":7,"userId":5,"products":[],"total":120.0,"discountedTotal":100.0,"totalProducts":0,"totalQuantity":0}"#;

    #[test]
    fn listed_orders_get_demo_fields() {
        let body = format!(r#"{{"carts":[{}],"total":50,"skip":0,"limit":10}}"#, CART);
        let (api, transport, _) = client(MockTransport::default().reply(200, &body));

        let listing = block_on(list(&api, &ListParams::new(1, 10), &FixedRolls(now()))).unwrap();

        assert_eq!(listing.total, 50);
        let order = &listing.items[0];
        assert_eq!(order.status, Some(OrderStatus::Completed));
        assert_eq!(order.date, Some(days_before(now(), 3)));
        assert_eq!(
            transport.sent()[0].url,
            "https://dummyjson.com/carts?limit=10&skip=0"
        );
    }

    #[test]
    fn update_merges_the_patch_client_side() {
        let (api, transport, _) = client(MockTransport::default().reply(200, CART));

        let patch = OrderPatch {
            status: Some(OrderStatus::Cancelled),
        };
        let order = block_on(update(&api, 7, patch, &FixedRolls(now()))).unwrap();

        assert_eq!(order.status, Some(OrderStatus::Cancelled));
        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method.as_str(), "GET");
        assert_eq!(sent[0].url, "https://dummyjson.com/carts/7");
    }

    #[test]
    fn user_orders_hit_the_user_route() {
        let body = format!(r#"{{"carts":[{}],"total":1,"skip":0,"limit":1}}"#, CART);
        let (api, transport, _) = client(MockTransport::default().reply(200, &body));

        let listing = block_on(list_for_user(&api, 5, &FixedRolls(now()))).unwrap();

        assert_eq!(listing.items.len(), 1);
        assert_eq!(listing.items[0].status, Some(OrderStatus::Completed));
        assert_eq!(transport.sent()[0].url, "https://dummyjson.com/carts/user/5");
    }

    #[test]
    fn create_posts_the_lines() {
        let (api, transport, _) = client(MockTransport::default().reply(200, CART));

        let draft = NewOrder {
            user_id: 5,
            products: vec![admindash_shared::OrderLine { id: 11, quantity: 2 }],
        };
        let order = block_on(create(&api, draft)).unwrap();

        assert_eq!(order.id, 7);
        let sent = transport.sent();
        assert_eq!(sent[0].method.as_str(), "POST");
        assert_eq!(sent[0].url, "https://dummyjson.com/carts/add");
        let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["userId"], 5);
        assert_eq!(body["products"][0]["quantity"], 2);
    }

    #[test]
    fn delete_is_local() {
        let resp = delete(7, &FixedRolls(now()));
        assert_eq!(resp.id, 7);
        assert!(resp.is_deleted);
        assert_eq!(resp.deleted_on, Some(now()));
    }
}
