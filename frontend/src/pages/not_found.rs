use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-primary">"404"</h1>
                <p class="text-xl mt-4 text-base-content/70">"Oops! Page not found"</p>
                <Link to=AppRoute::Dashboard class="btn btn-link mt-4">
                    "Return to Home"
                </Link>
            </div>
        </div>
    }
}
