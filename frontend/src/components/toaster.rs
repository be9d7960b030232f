use crate::components::icons::XIcon;
use crate::toast::use_toast;
use leptos::prelude::*;

/// Renders the toast stack in the top-end corner.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toast();

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || toasts.toasts().get()
                key=|t| t.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.variant.alert_class()>
                            <div class="flex flex-col">
                                <span class="font-semibold">{toast.title}</span>
                                <span class="text-sm">{toast.description}</span>
                            </div>
                            <button class="btn btn-ghost btn-xs btn-circle" on:click=move |_| toasts.dismiss(id)>
                                <XIcon attr:class="h-3 w-3" />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
