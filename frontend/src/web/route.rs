//! Route table
//!
//! Pure mapping between URL paths and screens, plus the guard rules. No DOM
//! access here; `router` does the History API work.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppRoute {
    Login,
    #[default]
    Dashboard,
    Products,
    ProductVariants,
    Categories,
    Brands,
    Orders,
    Vouchers,
    Users,
    AddressBook,
    Banners,
    NotFound,
}

impl AppRoute {
    /// Every route with a real path.
    pub const ROUTED: [AppRoute; 11] = [
        AppRoute::Login,
        AppRoute::Dashboard,
        AppRoute::Products,
        AppRoute::ProductVariants,
        AppRoute::Categories,
        AppRoute::Brands,
        AppRoute::Orders,
        AppRoute::Vouchers,
        AppRoute::Users,
        AppRoute::AddressBook,
        AppRoute::Banners,
    ];

    /// Parses a location pathname. A single trailing slash is ignored.
    pub fn from_path(path: &str) -> Self {
        let path = match path {
            "" => "/",
            "/" => "/",
            p => p.strip_suffix('/').unwrap_or(p),
        };
        match path {
            "/login" => Self::Login,
            "/" => Self::Dashboard,
            "/products" => Self::Products,
            "/product-variants" => Self::ProductVariants,
            "/categories" => Self::Categories,
            "/brands" => Self::Brands,
            "/orders" => Self::Orders,
            "/vouchers" => Self::Vouchers,
            "/users" => Self::Users,
            "/address-book" => Self::AddressBook,
            "/banners" => Self::Banners,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/",
            Self::Products => "/products",
            Self::ProductVariants => "/product-variants",
            Self::Categories => "/categories",
            Self::Brands => "/brands",
            Self::Orders => "/orders",
            Self::Vouchers => "/vouchers",
            Self::Users => "/users",
            Self::AddressBook => "/address-book",
            Self::Banners => "/banners",
            Self::NotFound => "/404",
        }
    }

    /// Guard rule: everything but the login and 404 screens needs a session.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::NotFound)
    }

    /// An authenticated user is bounced off these.
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn paths_round_trip() {
        for route in AppRoute::ROUTED {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[rstest]
    #[case("/analytics")]
    #[case("/settings")]
    #[case("/help")]
    #[case("/products/12")]
    fn unknown_paths_are_not_found(#[case] path: &str) {
        assert_eq!(AppRoute::from_path(path), AppRoute::NotFound);
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(AppRoute::from_path("/orders/"), AppRoute::Orders);
        assert_eq!(AppRoute::from_path(""), AppRoute::Dashboard);
    }

    #[test]
    fn guard_rules() {
        assert!(!AppRoute::Login.requires_auth());
        assert!(!AppRoute::NotFound.requires_auth());
        assert!(AppRoute::Dashboard.requires_auth());
        assert!(AppRoute::Banners.requires_auth());
        assert!(AppRoute::Login.should_redirect_when_authenticated());
        assert!(!AppRoute::Users.should_redirect_when_authenticated());
    }
}
