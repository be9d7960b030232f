//! Authenticated page shell.

mod footer;
mod header;
mod sidebar;

use footer::Footer;
use header::Header;
use sidebar::Sidebar;

use leptos::prelude::*;

#[component]
pub fn BaseLayout(children: Children) -> impl IntoView {
    let sidebar_collapsed = RwSignal::new(false);
    let toggle_sidebar = Callback::new(move |_: ()| sidebar_collapsed.update(|c| *c = !*c));

    view! {
        <div class="flex min-h-screen bg-base-200">
            <Sidebar collapsed=sidebar_collapsed on_toggle=toggle_sidebar />
            <div class="flex flex-1 flex-col min-w-0">
                <Header on_toggle_sidebar=toggle_sidebar />
                <main class="flex-1 p-4 md:p-6">{children()}</main>
                <Footer />
            </div>
        </div>
    }
}
