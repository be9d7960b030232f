//! AdminDash frontend
//!
//! Context-driven layout:
//! - `web::route`: route table and guard rules
//! - `web::router`: History API router
//! - `api` / `services`: REST client and typed endpoint calls
//! - `auth`, `theme`, `toast`: app-wide state provided as contexts
//! - `components` / `pages`: UI

mod api;
mod auth;
mod config;
mod error;
mod services;
mod theme;
mod toast;

mod components {
    pub mod catalog_page;
    pub mod data_table;
    pub mod dialog;
    pub mod form;
    pub mod icons;
    pub mod layout;
    pub mod toaster;
}

mod pages {
    pub mod catalog;
    pub mod dashboard;
    pub mod login;
    pub mod not_found;
    pub mod orders;
    pub mod products;
    pub mod users;
}

// Thin wrappers over browser APIs.
pub(crate) mod web {
    mod http;
    pub mod route;
    pub mod router;
    mod storage;

    pub use http::{FetchTransport, HttpError, HttpRequest, HttpResponse, HttpTransport};
    pub use storage::{KeyValueStore, LocalStorage, MemoryStore};
}

use std::sync::Arc;

use crate::api::{ApiClient, SessionToken};
use crate::auth::{AuthContext, init_auth};
use crate::components::layout::BaseLayout;
use crate::components::toaster::Toaster;
use crate::config::AppConfig;
use crate::pages::catalog::{
    AddressBookPage, BannersPage, BrandsPage, CategoriesPage, ProductVariantsPage, VouchersPage,
};
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::orders::OrdersPage;
use crate::pages::products::ProductsPage;
use crate::pages::users::UsersPage;
use crate::theme::provide_theme;
use crate::toast::ToastContext;

use leptos::prelude::*;
use log::Level;

use web::FetchTransport;
use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// Debug builds log everything down to `debug!`.
pub fn default_level(debug_build: bool) -> Level {
    if debug_build {
        Level::Debug
    } else {
        Level::Info
    }
}

/// Installs the console logger. A second call keeps the first logger.
pub fn init_logging(level: Level) {
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already installed");
    }
}

/// Screens behind the guard share the sidebar layout; login and 404 stand alone.
fn route_matcher(route: AppRoute) -> AnyView {
    let page = match route {
        AppRoute::Login => return view! { <LoginPage /> }.into_any(),
        AppRoute::NotFound => return view! { <NotFoundPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Products => view! { <ProductsPage /> }.into_any(),
        AppRoute::ProductVariants => view! { <ProductVariantsPage /> }.into_any(),
        AppRoute::Categories => view! { <CategoriesPage /> }.into_any(),
        AppRoute::Brands => view! { <BrandsPage /> }.into_any(),
        AppRoute::Orders => view! { <OrdersPage /> }.into_any(),
        AppRoute::Vouchers => view! { <VouchersPage /> }.into_any(),
        AppRoute::Users => view! { <UsersPage /> }.into_any(),
        AppRoute::AddressBook => view! { <AddressBookPage /> }.into_any(),
        AppRoute::Banners => view! { <BannersPage /> }.into_any(),
    };
    view! { <BaseLayout>{page}</BaseLayout> }.into_any()
}

#[component]
pub fn App() -> impl IntoView {
    // 1. Runtime configuration
    let config = AppConfig::load();
    log::info!("Starting {} against {}", config.app_name, config.api_url);
    provide_context(config.clone());

    // 2. Notifications; the API client reports failures through them
    let toast = ToastContext::new();
    provide_context(toast);

    // 3. API client sharing the session token with auth
    let token = SessionToken::new();
    let api = ApiClient::new(
        &config,
        token.clone(),
        Arc::new(FetchTransport),
        Arc::new(toast),
    );
    provide_context(api);

    // 4. Auth state, restored from storage
    let auth_ctx = AuthContext::new(token);
    init_auth(&auth_ctx);
    let is_authenticated = auth_ctx.is_authenticated_signal();
    provide_context(auth_ctx);

    // 5. Theme
    provide_theme();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
        <Toaster />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(true, Level::Debug)]
    #[case(false, Level::Info)]
    fn build_profile_picks_the_level(#[case] debug_build: bool, #[case] expected: Level) {
        assert_eq!(default_level(debug_build), expected);
    }
}
