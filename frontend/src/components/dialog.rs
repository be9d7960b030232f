//! Modal dialogs built on the native `<dialog>` element.

use leptos::prelude::*;

/// A `<dialog>` that follows `open`. Closing through Esc or the backdrop
/// writes `false` back.
#[component]
pub fn Modal(
    open: RwSignal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into, optional)] description: MaybeProp<String>,
    #[prop(optional)] wide: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let box_class = if wide {
        "modal-box max-w-3xl"
    } else {
        "modal-box"
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class=box_class>
                <h3 class="font-bold text-lg">{move || title.get()}</h3>
                {move || {
                    description
                        .get()
                        .map(|text| view! { <p class="pt-1 pb-4 text-base-content/70">{text}</p> })
                }}
                // Content is only mounted while open so forms start fresh.
                <Show when=move || open.get()>{children()}</Show>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}

/// Yes/no confirmation. `on_confirm` runs before the dialog closes.
#[component]
pub fn ConfirmDialog(
    open: RwSignal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] description: Signal<String>,
    #[prop(into, default = "Confirm".into())] confirm_text: String,
    #[prop(into, default = "Cancel".into())] cancel_text: String,
    #[prop(optional)] destructive: bool,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let confirm_class = if destructive {
        "btn btn-error"
    } else {
        "btn btn-primary"
    };

    view! {
        <Modal open=open title=title description=Signal::derive(move || Some(description.get()))>
            <div class="modal-action">
                <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>
                    {cancel_text.clone()}
                </button>
                <button
                    type="button"
                    class=confirm_class
                    on:click=move |_| {
                        on_confirm.run(());
                        open.set(false);
                    }
                >
                    {confirm_text.clone()}
                </button>
            </div>
        </Modal>
    }
}
