//! AdminDash shared types
//!
//! Wire models for the demo REST API (DummyJSON) plus everything that can be
//! computed without a browser: request definitions, catalogue fixtures,
//! demo-only order synthesis and dashboard aggregations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod date;
pub mod demo;
pub mod protocol;
pub mod stats;

// =========================================================
// Constants
// =========================================================

pub const DEFAULT_API_URL: &str = "https://dummyjson.com";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

// =========================================================
// Paging
// =========================================================

/// `limit`/`skip` pair understood by the list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub limit: usize,
    pub skip: usize,
}

impl PageQuery {
    /// Builds the query for a 1-based page number.
    pub fn from_page(page: usize, page_size: usize) -> Self {
        Self {
            limit: page_size,
            skip: page.saturating_sub(1) * page_size,
        }
    }

    pub fn first(limit: usize) -> Self {
        Self { limit, skip: 0 }
    }
}

/// One page of a remote collection, independent of the envelope key the API uses.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub skip: usize,
    pub limit: usize,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            skip: 0,
            limit: 0,
        }
    }
}

impl<T> Listing<T> {
    pub fn map_items<F>(mut self, f: F) -> Self
    where
        F: FnMut(&mut T),
    {
        self.items.iter_mut().for_each(f);
        self
    }
}

// =========================================================
// Products
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.price,
            discount_percentage: self.discount_percentage,
            rating: self.rating,
            stock: self.stock,
            brand: self.brand.clone(),
            category: self.category.clone(),
            thumbnail: self.thumbnail.clone(),
        }
    }
}

/// Editable product fields, used for both create and update.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub discount_percentage: f64,
    pub rating: f64,
    pub stock: u32,
    pub brand: String,
    pub category: String,
    pub thumbnail: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
    pub total: usize,
    #[serde(default)]
    pub skip: usize,
    #[serde(default)]
    pub limit: usize,
}

impl From<ProductsResponse> for Listing<Product> {
    fn from(r: ProductsResponse) -> Self {
        Self {
            items: r.products,
            total: r.total,
            skip: r.skip,
            limit: r.limit,
        }
    }
}

/// `/products/categories` has returned both bare slugs and objects over time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryEntry {
    Slug(String),
    Detailed {
        slug: String,
        name: String,
        #[serde(default)]
        url: String,
    },
}

impl CategoryEntry {
    pub fn slug(&self) -> &str {
        match self {
            CategoryEntry::Slug(s) => s,
            CategoryEntry::Detailed { slug, .. } => slug,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CategoryEntry::Slug(s) => s,
            CategoryEntry::Detailed { name, .. } => name,
        }
    }
}

// =========================================================
// Users
// =========================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub postal_code: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maiden_name: Option<String>,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn draft(&self) -> UserDraft {
        UserDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            username: self.username.clone(),
            age: self.age,
            gender: self.gender.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub username: String,
    pub age: u32,
    pub gender: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
    pub total: usize,
    #[serde(default)]
    pub skip: usize,
    #[serde(default)]
    pub limit: usize,
}

impl From<UsersResponse> for Listing<User> {
    fn from(r: UsersResponse) -> Self {
        Self {
            items: r.users,
            total: r.total,
            skip: r.skip,
            limit: r.limit,
        }
    }
}

// =========================================================
// Orders (the demo API calls them carts)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub quantity: u32,
    pub total: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    /// Older payloads call this `discountedPrice`.
    #[serde(default, alias = "discountedPrice")]
    pub discounted_total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub user_id: u64,
    #[serde(default)]
    pub products: Vec<OrderItem>,
    pub total: f64,
    pub discounted_total: f64,
    #[serde(default)]
    pub total_products: u32,
    #[serde(default)]
    pub total_quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

/// Client-side changes applied to an order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderPatch {
    pub status: Option<OrderStatus>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrdersResponse {
    pub carts: Vec<Order>,
    pub total: usize,
    #[serde(default)]
    pub skip: usize,
    #[serde(default)]
    pub limit: usize,
}

impl From<OrdersResponse> for Listing<Order> {
    fn from(r: OrdersResponse) -> Self {
        Self {
            items: r.carts,
            total: r.total,
            skip: r.skip,
            limit: r.limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: u64,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub user_id: u64,
    pub products: Vec<OrderLine>,
}

// =========================================================
// Deletes & auth
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub id: u64,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub deleted_on: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in_mins: Option<u32>,
}

/// Login response; persisted as the current user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub image: String,
    #[serde(alias = "accessToken")]
    pub token: String,
}

impl Session {
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.username.clone()
        } else {
            name.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn page_query_from_one_based_page() {
        assert_eq!(PageQuery::from_page(1, 10), PageQuery { limit: 10, skip: 0 });
        assert_eq!(PageQuery::from_page(3, 20), PageQuery { limit: 20, skip: 40 });
        assert_eq!(PageQuery::from_page(0, 10).skip, 0);
    }

    #[test]
    fn product_tolerates_missing_optional_fields() {
        let json = r#"{"id":7,"title":"Lipstick","price":12.5,"category":"beauty"}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.brand, "");
        assert!(p.images.is_empty());
        assert!(!p.in_stock());
    }

    #[test]
    fn products_envelope_converts_to_listing() {
        let json = r#"{"products":[{"id":1,"title":"A","price":1.0}],"total":194,"skip":0,"limit":1}"#;
        let r: ProductsResponse = serde_json::from_str(json).unwrap();
        let listing: Listing<Product> = r.into();
        assert_eq!(listing.total, 194);
        assert_eq!(listing.items.len(), 1);
    }

    #[test]
    fn session_accepts_access_token_key() {
        let json = r#"{"id":1,"username":"emilys","firstName":"Emily","lastName":"Johnson","accessToken":"abc"}"#;
        let s: Session = serde_json::from_str(json).unwrap();
        assert_eq!(s.token, "abc");
        assert_eq!(s.display_name(), "Emily Johnson");
    }

    #[test]
    fn category_entry_accepts_both_shapes() {
        let json = r#"["smartphones",{"slug":"beauty","name":"Beauty","url":"x"}]"#;
        let entries: Vec<CategoryEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].slug(), "smartphones");
        assert_eq!(entries[1].name(), "Beauty");
    }

    #[test]
    fn order_status_is_lowercase_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
        assert_eq!(OrderStatus::parse("pending"), Some(OrderStatus::Pending));
        assert_eq!(OrderStatus::parse("shipped"), None);
    }

    #[test]
    fn order_item_reads_legacy_discounted_price() {
        let json = r#"{"id":1,"title":"x","price":2.0,"quantity":3,"total":6.0,"discountedPrice":5.0}"#;
        let item: OrderItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.discounted_total, 5.0);
    }
}
