use crate::components::icons::{
    Award, BarChart, Check, ChevronLeft, ChevronRight, HelpCircle, ImageIcon, Layers,
    LayoutDashboard, MapPin, Package, Palette, SettingsIcon, ShoppingCart, Tag, Ticket, UsersIcon,
};
use crate::theme::{ColorTheme, use_theme};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Products,
    Variants,
    Categories,
    Brands,
    Orders,
    Vouchers,
    Users,
    Addresses,
    Banners,
    Analytics,
    Settings,
    Help,
}

impl NavIcon {
    fn render(self) -> AnyView {
        match self {
            NavIcon::Dashboard => view! { <LayoutDashboard attr:class="h-5 w-5 shrink-0" /> }.into_any(),
            NavIcon::Products => view! { <Package attr:class="h-5 w-5 shrink-0" /> }.into_any(),
            NavIcon::Variants => view! { <Layers attr:class="h-5 w-5 shrink-0" /> }.into_any(),
            NavIcon::Categories => view! { <Tag attr:class="h-5 w-5 shrink-0" /> }.into_any(),
            NavIcon::Brands => view! { <Award attr:class="h-5 w-5 shrink-0" /> }.into_any(),
            NavIcon::Orders => view! { <ShoppingCart attr:class="h-5 w-5 shrink-0" /> }.into_any(),
            NavIcon::Vouchers => view! { <Ticket attr:class="h-5 w-5 shrink-0" /> }.into_any(),
            NavIcon::Users => view! { <UsersIcon attr:class="h-5 w-5 shrink-0" /> }.into_any(),
            NavIcon::Addresses => view! { <MapPin attr:class="h-5 w-5 shrink-0" /> }.into_any(),
            NavIcon::Banners => view! { <ImageIcon attr:class="h-5 w-5 shrink-0" /> }.into_any(),
            NavIcon::Analytics => view! { <BarChart attr:class="h-5 w-5 shrink-0" /> }.into_any(),
            NavIcon::Settings => view! { <SettingsIcon attr:class="h-5 w-5 shrink-0" /> }.into_any(),
            NavIcon::Help => view! { <HelpCircle attr:class="h-5 w-5 shrink-0" /> }.into_any(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub icon: NavIcon,
    pub path: &'static str,
}

const fn item(title: &'static str, icon: NavIcon, path: &'static str) -> NavItem {
    NavItem { title, icon, path }
}

pub const NAV_ITEMS: [NavItem; 10] = [
    item("Dashboard", NavIcon::Dashboard, "/"),
    item("Products", NavIcon::Products, "/products"),
    item("Product Variants", NavIcon::Variants, "/product-variants"),
    item("Categories", NavIcon::Categories, "/categories"),
    item("Brands", NavIcon::Brands, "/brands"),
    item("Orders", NavIcon::Orders, "/orders"),
    item("Vouchers", NavIcon::Vouchers, "/vouchers"),
    item("Users", NavIcon::Users, "/users"),
    item("Address Book", NavIcon::Addresses, "/address-book"),
    item("Banners", NavIcon::Banners, "/banners"),
];

/// These have no screens yet and land on the 404 page.
pub const SECONDARY_NAV_ITEMS: [NavItem; 3] = [
    item("Analytics", NavIcon::Analytics, "/analytics"),
    item("Settings", NavIcon::Settings, "/settings"),
    item("Help", NavIcon::Help, "/help"),
];

impl NavItem {
    pub fn is_active(&self, current: AppRoute) -> bool {
        let route = AppRoute::from_path(self.path);
        route != AppRoute::NotFound && route == current
    }
}

#[component]
pub fn Sidebar(collapsed: RwSignal<bool>, on_toggle: Callback<()>) -> impl IntoView {
    let width = move || {
        if collapsed.get() {
            "w-16"
        } else {
            "w-64"
        }
    };

    view! {
        <aside class=move || {
            format!(
                "{} hidden md:flex flex-col shrink-0 border-r border-base-300 bg-base-100 transition-all duration-200",
                width(),
            )
        }>
            <div class="flex h-16 items-center justify-between px-4 border-b border-base-300">
                <Show when=move || !collapsed.get()>
                    <span class="text-xl font-bold text-primary">"AdminDash"</span>
                </Show>
                <button class="btn btn-ghost btn-square btn-sm" on:click=move |_| on_toggle.run(())>
                    {move || {
                        if collapsed.get() {
                            view! { <ChevronRight attr:class="h-4 w-4" /> }.into_any()
                        } else {
                            view! { <ChevronLeft attr:class="h-4 w-4" /> }.into_any()
                        }
                    }}
                </button>
            </div>

            <nav class="flex-1 overflow-y-auto py-2">
                <NavSection items=&NAV_ITEMS collapsed=collapsed />
                <div class="divider my-1"></div>
                <NavSection items=&SECONDARY_NAV_ITEMS collapsed=collapsed />
            </nav>

            <ColorThemePicker collapsed=collapsed />
        </aside>
    }
}

#[component]
fn NavSection(items: &'static [NavItem], collapsed: RwSignal<bool>) -> impl IntoView {
    let router = use_router();
    let current = router.current_route();

    view! {
        <ul class="menu w-full gap-1">
            {items
                .iter()
                .map(|nav| {
                    let nav = *nav;
                    let on_click = move |ev: web_sys::MouseEvent| {
                        ev.prevent_default();
                        router.navigate(nav.path);
                    };
                    view! {
                        <li>
                            <a
                                href=nav.path
                                title=nav.title
                                class=move || { if nav.is_active(current.get()) { "active" } else { "" } }
                                on:click=on_click
                            >
                                {nav.icon.render()}
                                <Show when=move || !collapsed.get()>
                                    <span>{nav.title}</span>
                                </Show>
                            </a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
fn ColorThemePicker(collapsed: RwSignal<bool>) -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="dropdown dropdown-top p-2 border-t border-base-300">
            <div tabindex="0" role="button" class="btn btn-ghost btn-sm w-full justify-start gap-2">
                <Palette attr:class="h-5 w-5 shrink-0" />
                <Show when=move || !collapsed.get()>
                    <span>"Color Theme"</span>
                </Show>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-100 rounded-box w-48">
                {ColorTheme::ALL
                    .into_iter()
                    .map(|color| {
                        view! {
                            <li>
                                <a on:click=move |_| theme.set_color_theme(color)>
                                    <span class=format!("h-3 w-3 rounded-full {}", color.swatch_class())></span>
                                    <span class="flex-1">{color.label()}</span>
                                    <Show when=move || theme.color.get() == color>
                                        <Check attr:class="h-4 w-4" />
                                    </Show>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_section_covers_every_screen() {
        let mut routes: Vec<AppRoute> = NAV_ITEMS
            .iter()
            .map(|nav| AppRoute::from_path(nav.path))
            .collect();
        routes.push(AppRoute::Login);

        for route in AppRoute::ROUTED {
            assert!(routes.contains(&route), "{route} has no nav entry");
        }
    }

    #[test]
    fn secondary_items_are_not_routed() {
        for nav in SECONDARY_NAV_ITEMS {
            assert_eq!(AppRoute::from_path(nav.path), AppRoute::NotFound);
            assert!(!nav.is_active(AppRoute::NotFound));
        }
    }

    #[test]
    fn only_the_matching_item_is_active() {
        let active: Vec<&str> = NAV_ITEMS
            .iter()
            .filter(|nav| nav.is_active(AppRoute::Orders))
            .map(|nav| nav.title)
            .collect();
        assert_eq!(active, vec!["Orders"]);
    }
}
