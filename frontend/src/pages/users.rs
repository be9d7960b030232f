mod form_state;

use form_state::UserForm;

use crate::api::use_api;
use crate::components::data_table::{Column, DataTable};
use crate::components::dialog::{ConfirmDialog, Modal};
use crate::components::form::{DialogMode, TextField};
use crate::services::orders::{self, BrowserRolls};
use crate::services::{LatestRequest, ListParams, users};
use crate::toast::use_toast;
use admindash_shared::{Order, User, stats};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn initials(user: &User) -> String {
    user.first_name
        .chars()
        .take(1)
        .chain(user.last_name.chars().take(1))
        .collect()
}

/// Order count and total spend shown in the user details.
fn order_summary(orders: &[Order]) -> String {
    format!("{} orders, ${:.2} spent", orders.len(), stats::total_revenue(orders))
}

fn columns() -> Vec<Column<User>> {
    vec![
        Column::new("user", "User", |u: &User, _| {
            let avatar = if u.image.is_empty() {
                view! {
                    <div class="avatar placeholder">
                        <div class="bg-neutral text-neutral-content w-10 rounded-full">
                            <span>{initials(u)}</span>
                        </div>
                    </div>
                }
                .into_any()
            } else {
                view! {
                    <div class="avatar">
                        <div class="w-10 rounded-full">
                            <img src=u.image.clone() alt=u.full_name() />
                        </div>
                    </div>
                }
                .into_any()
            };
            view! {
                <div class="flex items-center gap-3">
                    {avatar}
                    <div>
                        <div class="font-medium">{u.full_name()}</div>
                        <div class="text-sm text-base-content/60">{u.email.clone()}</div>
                    </div>
                </div>
            }
        }),
        Column::new("username", "Username", |u: &User, _| u.username.clone()),
        Column::new("gender", "Gender", |u: &User, _| {
            view! { <span class="badge badge-outline">{u.gender.clone()}</span> }
        }),
        Column::new("phone", "Phone", |u: &User, _| u.phone.clone()),
        Column::new("age", "Age", |u: &User, _| u.age.to_string()).sortable(),
    ]
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let toast = use_toast();

    let search = RwSignal::new(String::new());
    let page = RwSignal::new(1usize);
    let page_size = RwSignal::new(10usize);
    let reload = RwSignal::new(0u32);
    let latest = LatestRequest::new();

    let (rows, set_rows) = signal(Vec::<User>::new());
    let (total, set_total) = signal(0usize);
    let (loading, set_loading) = signal(true);

    let form = UserForm::new();
    let mode = RwSignal::new(DialogMode::Add);
    let form_open = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);
    let current = RwSignal::new(None::<User>);
    let confirm_open = RwSignal::new(false);
    let user_orders = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        reload.track();
        let params = ListParams::new(page.get(), page_size.get()).with_search(search.get());
        let api = api.get_value();
        let ticket = latest.begin();
        set_loading.set(true);
        spawn_local(async move {
            let result = users::list(&api, &params).await;
            if !latest.is_current(ticket) {
                return;
            }
            let listing = result.unwrap_or_default();
            set_total.set(listing.total);
            set_rows.set(listing.items);
            set_loading.set(false);
        });
    });

    let refetch = move || reload.update(|n| *n += 1);

    let open_dialog = move |next: DialogMode, user: Option<User>| {
        match &user {
            Some(u) => form.load(u),
            None => form.reset(),
        }
        let viewing = match (next, &user) {
            (DialogMode::View, Some(u)) => Some(u.id),
            _ => None,
        };
        current.set(user);
        form_error.set(None);
        user_orders.set(None);
        mode.set(next);
        form_open.set(true);

        // Refresh from the API and pull the user's carts while the details are open.
        if let Some(id) = viewing {
            let api = api.get_value();
            spawn_local(async move {
                let still_open = move || {
                    form_open.try_get_untracked() == Some(true)
                        && current.try_with_untracked(|c| c.as_ref().map(|u| u.id)).flatten() == Some(id)
                };
                if let Ok(fresh) = users::get(&api, id).await {
                    if still_open() {
                        form.load(&fresh);
                        current.set(Some(fresh));
                    }
                }
                if let Ok(listing) = orders::list_for_user(&api, id, &BrowserRolls).await {
                    if still_open() {
                        user_orders.set(Some(order_summary(&listing.items)));
                    }
                }
            });
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = match form.to_draft() {
            Ok(draft) => draft,
            Err(msg) => {
                form_error.set(Some(msg));
                return;
            }
        };
        let api = api.get_value();
        let editing = current.get_untracked().map(|u| u.id);
        let mode_now = mode.get_untracked();
        spawn_local(async move {
            let result = match (mode_now, editing) {
                (DialogMode::Edit, Some(id)) => users::update(&api, id, draft)
                    .await
                    .map(|_| ("User updated", "The user has been updated successfully")),
                (DialogMode::Add, _) => users::create(&api, draft)
                    .await
                    .map(|_| ("User created", "The user has been added successfully")),
                _ => return,
            };
            if let Ok((title, description)) = result {
                toast.success(title, description);
                form_open.set(false);
                refetch();
            }
        });
    };

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(user) = current.get_untracked() else {
            return;
        };
        let api = api.get_value();
        spawn_local(async move {
            if users::delete(&api, user.id).await.is_ok() {
                toast.success("User deleted", "The user has been deleted successfully");
                refetch();
            }
        });
    });

    let readonly = Signal::derive(move || mode.get().is_readonly());

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold tracking-tight">"Users"</h1>
                <p class="text-base-content/70">"Manage your system users"</p>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <DataTable
                        columns=columns()
                        data=rows
                        total_items=total
                        current_page=page
                        page_size=page_size
                        is_loading=loading
                        on_page_change=Callback::new(move |p: usize| page.set(p))
                        on_page_size_change=Callback::new(move |size: usize| {
                            page_size.set(size);
                            page.set(1);
                        })
                        on_search=Callback::new(move |text: String| {
                            search.set(text);
                            page.set(1);
                        })
                        on_add=Callback::new(move |_: ()| open_dialog(DialogMode::Add, None))
                        on_view=Callback::new(move |u: User| open_dialog(DialogMode::View, Some(u)))
                        on_edit=Callback::new(move |u: User| open_dialog(DialogMode::Edit, Some(u)))
                        on_delete=Callback::new(move |u: User| {
                            current.set(Some(u));
                            confirm_open.set(true);
                        })
                    />
                </div>
            </div>

            <Modal
                open=form_open
                title=Signal::derive(move || {
                    match mode.get() {
                        DialogMode::Add => "Add User",
                        DialogMode::Edit => "Edit User",
                        DialogMode::View => "User Details",
                    }
                    .to_string()
                })
            >
                <form class="space-y-4" on:submit=on_submit novalidate>
                    {move || form_error.get().map(|msg| view! { <div role="alert" class="alert alert-error text-sm py-2">{msg}</div> })}
                    <div class="grid grid-cols-2 gap-4">
                        <TextField id="first-name" label="First Name" value=form.first_name readonly=readonly />
                        <TextField id="last-name" label="Last Name" value=form.last_name readonly=readonly />
                    </div>
                    <TextField id="email" label="Email" input_type="email" value=form.email readonly=readonly />
                    <div class="grid grid-cols-2 gap-4">
                        <TextField id="username" label="Username" value=form.username readonly=readonly />
                        <TextField id="phone" label="Phone" value=form.phone readonly=readonly />
                    </div>
                    {move || {
                        user_orders
                            .get()
                            .filter(|_| mode.get().is_readonly())
                            .map(|summary| view! { <p class="text-sm text-base-content/70">{summary}</p> })
                    }}
                    <div class="grid grid-cols-2 gap-4">
                        <TextField id="age" label="Age" input_type="number" value=form.age readonly=readonly />
                        <TextField id="gender" label="Gender" value=form.gender readonly=readonly />
                    </div>
                    {move || {
                        mode.get()
                            .submit_label("Add User")
                            .map(|label| {
                                view! {
                                    <div class="modal-action">
                                        <button type="submit" class="btn btn-primary">{label}</button>
                                    </div>
                                }
                            })
                    }}
                </form>
            </Modal>

            <ConfirmDialog
                open=confirm_open
                title="Delete User"
                description=Signal::derive(move || {
                    let name = current.with(|u| u.as_ref().map(User::full_name).unwrap_or_default());
                    format!("Are you sure you want to delete {}? This action cannot be undone.", name)
                })
                confirm_text="Delete"
                destructive=true
                on_confirm=confirm_delete
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admindash_shared::OrderStatus;
    use pretty_assertions::assert_eq;

    fn order(discounted_total: f64) -> Order {
        Order {
            id: 1,
            user_id: 5,
            products: Vec::new(),
            total: discounted_total,
            discounted_total,
            total_products: 1,
            total_quantity: 1,
            date: None,
            status: Some(OrderStatus::Completed),
        }
    }

    #[test]
    fn order_summary_counts_and_sums() {
        assert_eq!(order_summary(&[]), "0 orders, $0.00 spent");
        assert_eq!(
            order_summary(&[order(12.5), order(30.0)]),
            "2 orders, $42.50 spent"
        );
    }

    #[test]
    fn column_ids_are_unique() {
        assert!(crate::components::data_table::unique_ids(&columns()));
    }

    #[test]
    fn initials_take_the_first_letters() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 1,
            "firstName": "Emily",
            "lastName": "Johnson",
        }))
        .unwrap();
        assert_eq!(initials(&user), "EJ");
    }
}
