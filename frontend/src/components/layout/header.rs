use crate::auth::{logout, use_auth};
use crate::components::icons::{LogOut, MenuIcon, Moon, Sun};
use crate::config::AppConfig;
use crate::theme::{Theme, use_theme};
use leptos::prelude::*;

#[component]
pub fn Header(on_toggle_sidebar: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let theme = use_theme();
    let app_name = use_context::<AppConfig>()
        .map(|c| c.app_name)
        .unwrap_or_else(|| AppConfig::default().app_name);

    let state = auth.state;
    let user_name = move || {
        state.with(|s| {
            s.user
                .as_ref()
                .map(|u| u.display_name())
                .unwrap_or_default()
        })
    };
    let avatar = move || state.with(|s| s.user.as_ref().map(|u| u.image.clone()));

    let on_logout = move |_| logout(&auth);

    view! {
        <header class="navbar sticky top-0 z-30 bg-base-100 border-b border-base-300 px-4">
            <div class="flex-1 gap-2">
                <button class="btn btn-ghost btn-square btn-sm" on:click=move |_| on_toggle_sidebar.run(())>
                    <MenuIcon attr:class="h-5 w-5" />
                </button>
                <span class="text-lg font-semibold">{app_name}</span>
            </div>
            <div class="flex-none gap-2">
                <button class="btn btn-ghost btn-circle btn-sm" on:click=move |_| theme.toggle_theme()>
                    {move || match theme.theme.get() {
                        Theme::Light => view! { <Moon attr:class="h-5 w-5" /> }.into_any(),
                        Theme::Dark => view! { <Sun attr:class="h-5 w-5" /> }.into_any(),
                    }}
                </button>
                <div class="dropdown dropdown-end">
                    <div tabindex="0" role="button" class="btn btn-ghost gap-2">
                        {move || {
                            avatar()
                                .filter(|src| !src.is_empty())
                                .map(|src| {
                                    view! {
                                        <div class="avatar">
                                            <div class="w-8 rounded-full">
                                                <img src=src alt="avatar" />
                                            </div>
                                        </div>
                                    }
                                })
                        }}
                        <span class="hidden md:inline">{user_name}</span>
                    </div>
                    <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-100 rounded-box w-48">
                        <li class="menu-title">{user_name}</li>
                        <li>
                            <a class="text-error" on:click=on_logout>
                                <LogOut attr:class="h-4 w-4" />
                                "Logout"
                            </a>
                        </li>
                    </ul>
                </div>
            </div>
        </header>
    }
}
