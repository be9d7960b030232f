use leptos::prelude::*;

const FOOTER_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Contact"];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-base-300 bg-base-100 px-6 py-4">
            <div class="flex flex-col md:flex-row items-center justify-between gap-2 text-sm text-base-content/60">
                <p>"© 2025 AdminDash. All rights reserved."</p>
                <div class="flex gap-4">
                    {FOOTER_LINKS
                        .into_iter()
                        .map(|label| view! { <a href="#" class="link link-hover">{label}</a> })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
