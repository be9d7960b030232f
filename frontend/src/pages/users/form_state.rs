use crate::components::form::parse_number;
use admindash_shared::{User, UserDraft};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct UserForm {
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub username: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub age: RwSignal<String>,
    pub gender: RwSignal<String>,
}

impl UserForm {
    pub fn new() -> Self {
        Self {
            first_name: RwSignal::new(String::new()),
            last_name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            username: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            age: RwSignal::new(String::new()),
            gender: RwSignal::new(String::new()),
        }
    }

    pub fn reset(&self) {
        for field in self.fields() {
            field.set(String::new());
        }
    }

    pub fn load(&self, user: &User) {
        let draft = user.draft();
        self.first_name.set(draft.first_name);
        self.last_name.set(draft.last_name);
        self.email.set(draft.email);
        self.username.set(draft.username);
        self.phone.set(draft.phone);
        self.age.set(draft.age.to_string());
        self.gender.set(draft.gender);
    }

    fn fields(&self) -> [RwSignal<String>; 7] {
        [
            self.first_name,
            self.last_name,
            self.email,
            self.username,
            self.phone,
            self.age,
            self.gender,
        ]
    }

    /// Names, username and a plausible email are required.
    pub fn to_draft(&self) -> Result<UserDraft, String> {
        let required = [
            (self.first_name, "First name"),
            (self.last_name, "Last name"),
            (self.username, "Username"),
            (self.email, "Email"),
        ];
        for (field, label) in required {
            if field.with_untracked(|v| v.trim().is_empty()) {
                return Err(format!("{} is required", label));
            }
        }

        let email = self.email.get_untracked();
        if !email.contains('@') {
            return Err("Email must be a valid address".to_string());
        }

        Ok(UserDraft {
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
            email,
            phone: self.phone.get_untracked(),
            username: self.username.get_untracked(),
            age: parse_number(&self.age.get_untracked(), "Age")?,
            gender: self.gender.get_untracked(),
        })
    }
}

impl Default for UserForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> UserForm {
        let form = UserForm::new();
        form.first_name.set("Emily".to_string());
        form.last_name.set("Johnson".to_string());
        form.username.set("emilys".to_string());
        form.email.set("emily@x.dummyjson.com".to_string());
        form.age.set("28".to_string());
        form.gender.set("female".to_string());
        form
    }

    #[test]
    fn filled_form_builds_a_draft() {
        Owner::new().with(|| {
            let draft = filled().to_draft().unwrap();
            assert_eq!(
                draft,
                UserDraft {
                    first_name: "Emily".to_string(),
                    last_name: "Johnson".to_string(),
                    email: "emily@x.dummyjson.com".to_string(),
                    phone: String::new(),
                    username: "emilys".to_string(),
                    age: 28,
                    gender: "female".to_string(),
                }
            );
        });
    }

    #[test]
    fn first_missing_field_is_reported() {
        Owner::new().with(|| {
            let form = filled();
            form.last_name.set(String::new());
            form.username.set(String::new());
            assert_eq!(form.to_draft(), Err("Last name is required".to_string()));
        });
    }

    #[test]
    fn email_needs_an_at_sign() {
        Owner::new().with(|| {
            let form = filled();
            form.email.set("emily".to_string());
            assert_eq!(
                form.to_draft(),
                Err("Email must be a valid address".to_string())
            );
        });
    }

    #[test]
    fn reset_blanks_every_field() {
        Owner::new().with(|| {
            let form = filled();
            form.reset();
            assert!(form.fields().iter().all(|f| f.get_untracked().is_empty()));
        });
    }
}
