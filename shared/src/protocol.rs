use crate::{
    CategoryEntry, Credentials, DeleteResponse, NewOrder, Order, OrdersResponse, PageQuery,
    Product, ProductDraft, ProductsResponse, Session, User, UserDraft, UsersResponse,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }

    /// Reads are retried by the client, writes never are.
    pub fn is_query(&self) -> bool {
        matches!(self, HttpMethod::Get)
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Path relative to the API root, query string included.
    fn path(&self) -> String;
    /// JSON body, if the endpoint takes one.
    fn body(&self) -> Option<serde_json::Value> {
        None
    }
}

fn with_query<Q: Serialize>(path: &str, query: &Q) -> String {
    match serde_urlencoded::to_string(query) {
        Ok(qs) if !qs.is_empty() => {
            let sep = if path.contains('?') { '&' } else { '?' };
            format!("{}{}{}", path, sep, qs)
        }
        _ => path.to_string(),
    }
}

fn to_body<T: Serialize>(value: &T) -> Option<serde_json::Value> {
    serde_json::to_value(value).ok()
}

// =========================================================
// Auth
// =========================================================

pub const LOGIN_PATH: &str = "/auth/login";

#[derive(Debug, Clone)]
pub struct LoginRequest(pub Credentials);

impl ApiRequest for LoginRequest {
    type Response = Session;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        LOGIN_PATH.to_string()
    }

    fn body(&self) -> Option<serde_json::Value> {
        to_body(&self.0)
    }
}

// =========================================================
// Products
// =========================================================

#[derive(Debug, Clone, Default)]
pub struct ListProducts {
    pub page: Option<PageQuery>,
    pub search: Option<String>,
    pub category: Option<String>,
}

impl ApiRequest for ListProducts {
    type Response = ProductsResponse;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        let base = match (&self.search, &self.category) {
            (Some(q), _) if !q.is_empty() => with_query("/products/search", &[("q", q)]),
            (_, Some(c)) if !c.is_empty() => format!("/products/category/{}", c),
            _ => "/products".to_string(),
        };
        match &self.page {
            Some(page) => with_query(&base, page),
            None => base,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GetProduct {
    pub id: u64,
}

impl ApiRequest for GetProduct {
    type Response = Product;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/products/{}", self.id)
    }
}

#[derive(Debug, Clone)]
pub struct CreateProduct(pub ProductDraft);

impl ApiRequest for CreateProduct {
    type Response = Product;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/products/add".to_string()
    }

    fn body(&self) -> Option<serde_json::Value> {
        to_body(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateProduct {
    pub id: u64,
    pub patch: ProductDraft,
}

impl ApiRequest for UpdateProduct {
    type Response = Product;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/products/{}", self.id)
    }

    fn body(&self) -> Option<serde_json::Value> {
        to_body(&self.patch)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteProduct {
    pub id: u64,
}

impl ApiRequest for DeleteProduct {
    type Response = DeleteResponse;
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/products/{}", self.id)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ListCategories;

impl ApiRequest for ListCategories {
    type Response = Vec<CategoryEntry>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/products/categories".to_string()
    }
}

// =========================================================
// Users
// =========================================================

#[derive(Debug, Clone, Default)]
pub struct ListUsers {
    pub page: Option<PageQuery>,
    pub search: Option<String>,
}

impl ApiRequest for ListUsers {
    type Response = UsersResponse;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        let base = match &self.search {
            Some(q) if !q.is_empty() => with_query("/users/search", &[("q", q)]),
            _ => "/users".to_string(),
        };
        match &self.page {
            Some(page) => with_query(&base, page),
            None => base,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GetUser {
    pub id: u64,
}

impl ApiRequest for GetUser {
    type Response = User;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/users/{}", self.id)
    }
}

#[derive(Debug, Clone)]
pub struct CreateUser(pub UserDraft);

impl ApiRequest for CreateUser {
    type Response = User;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/users/add".to_string()
    }

    fn body(&self) -> Option<serde_json::Value> {
        to_body(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub id: u64,
    pub patch: UserDraft,
}

impl ApiRequest for UpdateUser {
    type Response = User;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/users/{}", self.id)
    }

    fn body(&self) -> Option<serde_json::Value> {
        to_body(&self.patch)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteUser {
    pub id: u64,
}

impl ApiRequest for DeleteUser {
    type Response = DeleteResponse;
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/users/{}", self.id)
    }
}

// =========================================================
// Orders
// =========================================================

#[derive(Debug, Clone, Default)]
pub struct ListOrders {
    pub page: Option<PageQuery>,
    pub user_id: Option<u64>,
}

#[derive(Serialize)]
struct UserFilter {
    #[serde(rename = "userId")]
    user_id: u64,
}

impl ApiRequest for ListOrders {
    type Response = OrdersResponse;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        let mut path = "/carts".to_string();
        if let Some(page) = &self.page {
            path = with_query(&path, page);
        }
        if let Some(user_id) = self.user_id {
            path = with_query(&path, &UserFilter { user_id });
        }
        path
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GetOrder {
    pub id: u64,
}

impl ApiRequest for GetOrder {
    type Response = Order;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/carts/{}", self.id)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ListUserOrders {
    pub user_id: u64,
}

impl ApiRequest for ListUserOrders {
    type Response = OrdersResponse;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/carts/user/{}", self.user_id)
    }
}

#[derive(Debug, Clone)]
pub struct CreateOrder(pub NewOrder);

impl ApiRequest for CreateOrder {
    type Response = Order;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/carts/add".to_string()
    }

    fn body(&self) -> Option<serde_json::Value> {
        to_body(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OrderLine;
    use pretty_assertions::assert_eq;

    #[test]
    fn list_products_plain() {
        let req = ListProducts {
            page: Some(PageQuery::from_page(2, 10)),
            ..Default::default()
        };
        assert_eq!(req.path(), "/products?limit=10&skip=10");
        assert!(ListProducts::METHOD.is_query());
    }

    #[test]
    fn list_products_search_wins_over_category() {
        let req = ListProducts {
            page: Some(PageQuery::first(5)),
            search: Some("red shirt".to_string()),
            category: Some("tops".to_string()),
        };
        assert_eq!(req.path(), "/products/search?q=red+shirt&limit=5&skip=0");
    }

    #[test]
    fn list_products_empty_search_falls_back_to_category() {
        let req = ListProducts {
            page: None,
            search: Some(String::new()),
            category: Some("laptops".to_string()),
        };
        assert_eq!(req.path(), "/products/category/laptops");
    }

    #[test]
    fn list_users_search() {
        let req = ListUsers {
            page: Some(PageQuery::first(10)),
            search: Some("emily".to_string()),
        };
        assert_eq!(req.path(), "/users/search?q=emily&limit=10&skip=0");
    }

    #[test]
    fn list_orders_with_user_filter() {
        let req = ListOrders {
            page: Some(PageQuery::first(100)),
            user_id: Some(5),
        };
        assert_eq!(req.path(), "/carts?limit=100&skip=0&userId=5");
    }

    #[test]
    fn write_requests_carry_camel_case_bodies() {
        let req = CreateOrder(NewOrder {
            user_id: 3,
            products: vec![OrderLine { id: 1, quantity: 2 }],
        });
        assert_eq!(
            req.body(),
            Some(serde_json::json!({"userId": 3, "products": [{"id": 1, "quantity": 2}]}))
        );
        assert_eq!(CreateOrder::METHOD, HttpMethod::Post);

        let upd = UpdateProduct {
            id: 9,
            patch: ProductDraft {
                title: "Mug".to_string(),
                discount_percentage: 5.0,
                ..Default::default()
            },
        };
        assert_eq!(upd.path(), "/products/9");
        let body = upd.body().unwrap();
        assert_eq!(body["discountPercentage"], 5.0);
        assert!(!UpdateProduct::METHOD.is_query());
    }

    #[test]
    fn login_posts_credentials() {
        let req = LoginRequest(Credentials {
            username: "emilys".to_string(),
            password: "emilyspass".to_string(),
            expires_in_mins: None,
        });
        assert_eq!(req.path(), LOGIN_PATH);
        assert_eq!(
            req.body(),
            Some(serde_json::json!({"username": "emilys", "password": "emilyspass"}))
        );
    }
}
