//! Labelled form controls shared by the page dialogs.

use leptos::prelude::*;

/// What a record dialog is doing. View shows the same form read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogMode {
    #[default]
    Add,
    Edit,
    View,
}

impl DialogMode {
    pub fn is_readonly(&self) -> bool {
        *self == DialogMode::View
    }

    /// `None` in view mode, which has no submit button.
    pub fn submit_label(&self, add_label: &'static str) -> Option<&'static str> {
        match self {
            DialogMode::Add => Some(add_label),
            DialogMode::Edit => Some("Save Changes"),
            DialogMode::View => None,
        }
    }
}

/// Parses a numeric input, treating blank as zero.
pub fn parse_number<T>(raw: &str, field: &'static str) -> Result<T, String>
where
    T: std::str::FromStr + Default,
{
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(T::default());
    }
    raw.parse()
        .map_err(|_| format!("{} must be a valid number", field))
}

#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(into, optional)] readonly: Signal<bool>,
    #[prop(into, optional)] error: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="form-control w-full">
            <label for=id class="label">
                <span class="label-text">{label}</span>
            </label>
            <input
                id=id
                type=input_type
                placeholder=placeholder
                class=move || {
                    if error.get().is_some() {
                        "input input-bordered input-error w-full"
                    } else {
                        "input input-bordered w-full"
                    }
                }
                prop:readOnly=move || readonly.get()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || {
                error
                    .get()
                    .map(|msg| {
                        view! {
                            <label class="label">
                                <span class="label-text-alt text-error">{msg}</span>
                            </label>
                        }
                    })
            }}
        </div>
    }
}

#[component]
pub fn TextArea(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(into, optional)] readonly: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-control w-full">
            <label for=id class="label">
                <span class="label-text">{label}</span>
            </label>
            <textarea
                id=id
                rows="3"
                class="textarea textarea-bordered w-full"
                prop:readOnly=move || readonly.get()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

/// Key/value rows for read-only detail dialogs.
#[component]
pub fn DetailList(entries: Vec<(&'static str, String)>) -> impl IntoView {
    view! {
        <dl class="grid grid-cols-3 gap-x-4 gap-y-2 text-sm">
            {entries
                .into_iter()
                .map(|(key, value)| {
                    view! {
                        <dt class="font-medium text-base-content/70">{key}</dt>
                        <dd class="col-span-2">{value}</dd>
                    }
                })
                .collect_view()}
        </dl>
    }
}
