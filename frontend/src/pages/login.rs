use crate::api::use_api;
use crate::auth::{login, use_auth};
use crate::components::form::TextField;
use crate::components::icons::ShieldCheck;
use crate::toast::use_toast;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use admindash_shared::Credentials;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DEMO_USERNAME: &str = "emilys";
const DEMO_PASSWORD: &str = "emilyspass";

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginErrors {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

#[derive(Clone, Copy)]
pub struct LoginForm {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            username: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
        }
    }

    /// Both fields are required; nothing else is checked client-side.
    pub fn validate(&self) -> LoginErrors {
        let required = |value: &String, msg| value.is_empty().then_some(msg);
        LoginErrors {
            username: self
                .username
                .with_untracked(|v| required(v, "Username is required")),
            password: self
                .password
                .with_untracked(|v| required(v, "Password is required")),
        }
    }

    pub fn to_credentials(&self) -> Credentials {
        Credentials {
            username: self.username.get_untracked(),
            password: self.password.get_untracked(),
            expires_in_mins: None,
        }
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let toast = use_toast();
    let router = use_router();

    let form = LoginForm::new();
    let errors = RwSignal::new(LoginErrors::default());
    let (is_pending, set_is_pending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_pending.get_untracked() {
            return;
        }

        let found = form.validate();
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }

        set_is_pending.set(true);
        let auth = auth.clone();
        let api = api.clone();
        spawn_local(async move {
            match login(&auth, &api, form.to_credentials()).await {
                Ok(_) => {
                    toast.success("Login successful", "Welcome to the admin dashboard");
                    router.navigate_route(AppRoute::Dashboard);
                }
                Err(err) => {
                    let description = err.server_message().unwrap_or("Invalid credentials");
                    toast.error("Login failed", description);
                }
            }
            set_is_pending.set(false);
        });
    };

    view! {
        <div class="flex min-h-screen items-center justify-center p-4 bg-base-200">
            <div class="max-w-md w-full">
                <div class="mb-8 text-center">
                    <div class="flex justify-center mb-2">
                        <div class="p-2 bg-primary rounded-lg text-primary-content">
                            <ShieldCheck attr:class="h-8 w-8" />
                        </div>
                    </div>
                    <h1 class="text-2xl font-bold">"Admin Dashboard"</h1>
                    <p class="text-base-content/70">"Sign in to your account"</p>
                </div>

                <div class="card bg-base-100 shadow-lg">
                    <div class="card-body">
                        <h2 class="card-title">"Login"</h2>
                        <p class="text-sm text-base-content/70">
                            "Enter your credentials to access the dashboard"
                        </p>
                        <form class="space-y-4" on:submit=on_submit novalidate>
                            <TextField
                                id="username"
                                label="Username"
                                value=form.username
                                placeholder="Enter your username"
                                error=Signal::derive(move || errors.with(|e| e.username.map(str::to_string)))
                            />
                            <TextField
                                id="password"
                                label="Password"
                                value=form.password
                                input_type="password"
                                placeholder="Enter your password"
                                error=Signal::derive(move || errors.with(|e| e.password.map(str::to_string)))
                            />
                            <button type="submit" class="btn btn-primary w-full" disabled=move || is_pending.get()>
                                {move || if is_pending.get() { "Signing in..." } else { "Sign in" }}
                            </button>
                        </form>
                        <div class="text-xs text-base-content/60 mt-4">
                            <p>"Demo credentials:"</p>
                            <p>"Username: " <strong>{DEMO_USERNAME}</strong></p>
                            <p>"Password: " <strong>{DEMO_PASSWORD}</strong></p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_fields_are_reported_individually() {
        Owner::new().with(|| {
            let form = LoginForm::new();
            assert_eq!(
                form.validate(),
                LoginErrors {
                    username: Some("Username is required"),
                    password: Some("Password is required"),
                }
            );

            form.username.set("emilys".to_string());
            let errors = form.validate();
            assert_eq!(errors.username, None);
            assert_eq!(errors.password, Some("Password is required"));
            assert!(!errors.is_empty());
        });
    }

    #[test]
    fn credentials_are_sent_verbatim() {
        Owner::new().with(|| {
            let form = LoginForm::new();
            form.username.set(" emilys ".to_string());
            form.password.set("emilyspass".to_string());

            assert!(form.validate().is_empty());
            let creds = form.to_credentials();
            assert_eq!(creds.username, " emilys ");
            assert_eq!(creds.password, "emilyspass");
            assert_eq!(creds.expires_in_mins, None);
        });
    }
}
