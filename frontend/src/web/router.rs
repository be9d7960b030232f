//! Router service
//!
//! Owns every `window.history` call. Navigation runs request, guard, then
//! load; popstate and auth changes go through the same guard.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Result of running the guard against a target route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow(AppRoute),
    Redirect(AppRoute),
}

impl GuardOutcome {
    pub fn route(&self) -> AppRoute {
        match self {
            GuardOutcome::Allow(r) | GuardOutcome::Redirect(r) => *r,
        }
    }
}

pub fn guard(target: AppRoute, is_authenticated: bool) -> GuardOutcome {
    if target.requires_auth() && !is_authenticated {
        GuardOutcome::Redirect(AppRoute::auth_failure_redirect())
    } else if target.should_redirect_when_authenticated() && is_authenticated {
        GuardOutcome::Redirect(AppRoute::auth_success_redirect())
    } else {
        GuardOutcome::Allow(target)
    }
}

/// History-backed router, shared through context.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    /// Injected so the router does not depend on the auth module.
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let initial = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial);

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    pub fn navigate_route(&self, route: AppRoute) {
        self.navigate_to_route(route, true);
    }

    fn navigate_to_route(&self, target_route: AppRoute, use_push: bool) {
        let outcome = guard(target_route, self.is_authenticated.get_untracked());
        if let GuardOutcome::Redirect(to) = outcome {
            log::info!("Guard redirect: {} -> {}", target_route, to);
        }

        let route = outcome.route();
        if use_push {
            push_history_state(route.to_path());
        } else {
            replace_history_state(route.to_path());
        }
        self.set_route.set(route);
    }

    /// Back/forward buttons.
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            match guard(target, is_authenticated.get_untracked()) {
                GuardOutcome::Allow(route) => set_route.set(route),
                GuardOutcome::Redirect(route) => {
                    log::info!("Guard redirect on popstate: {} -> {}", target, route);
                    replace_history_state(route.to_path());
                    set_route.set(route);
                }
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Listener lives as long as the page.
        closure.forget();
    }

    /// Re-runs the guard whenever the session flips.
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();

            if let GuardOutcome::Redirect(to) = guard(route, is_auth) {
                log::info!(
                    "Auth state changed (authenticated: {}), redirecting to {}",
                    is_auth,
                    to
                );
                push_history_state(to.to_path());
                set_route.set(to);
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    // The initial URL has not been through the guard yet.
    router.navigate_to_route(router.current_route.get_untracked(), false);

    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// Components
// ============================================================================

#[component]
pub fn Router(is_authenticated: Signal<bool>, children: Children) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// Renders whatever `matcher` returns for the current route.
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// Client-side navigation anchor.
#[component]
pub fn Link(
    to: AppRoute,
    #[prop(into, optional)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate_route(to);
    };

    view! {
        <a href=to.to_path() class=move || class.get().unwrap_or_default() on:click=on_click>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_sends_anonymous_users_to_login() {
        assert_eq!(
            guard(AppRoute::Orders, false),
            GuardOutcome::Redirect(AppRoute::Login)
        );
        assert_eq!(
            guard(AppRoute::Login, false),
            GuardOutcome::Allow(AppRoute::Login)
        );
        assert_eq!(
            guard(AppRoute::NotFound, false),
            GuardOutcome::Allow(AppRoute::NotFound)
        );
    }

    #[test]
    fn guard_sends_signed_in_users_home_from_login() {
        assert_eq!(
            guard(AppRoute::Login, true),
            GuardOutcome::Redirect(AppRoute::Dashboard)
        );
        assert_eq!(
            guard(AppRoute::Users, true),
            GuardOutcome::Allow(AppRoute::Users)
        );
    }
}
