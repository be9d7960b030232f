//! Toast notifications

use crate::error::{ErrorNotice, ErrorReporter};
use leptos::prelude::*;
use std::time::Duration;

/// How long a toast stays up.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Destructive,
}

impl ToastVariant {
    pub fn alert_class(&self) -> &'static str {
        match self {
            ToastVariant::Success => "alert alert-success shadow-lg",
            ToastVariant::Destructive => "alert alert-error shadow-lg",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    /// Adds a toast without scheduling its removal. Returns its id.
    pub fn add(&self, title: &str, description: &str, variant: ToastVariant) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|list| {
            list.push(Toast {
                id,
                title: title.to_string(),
                description: description.to_string(),
                variant,
            })
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    /// Adds a toast that goes away after [`TOAST_LIFETIME`].
    pub fn push(&self, title: &str, description: &str, variant: ToastVariant) {
        let id = self.add(title, description, variant);
        let ctx = *self;
        set_timeout(move || ctx.dismiss(id), TOAST_LIFETIME);
    }

    pub fn success(&self, title: &str, description: &str) {
        self.push(title, description, ToastVariant::Success);
    }

    pub fn error(&self, title: &str, description: &str) {
        self.push(title, description, ToastVariant::Destructive);
    }
}

impl ErrorReporter for ToastContext {
    fn report(&self, notice: ErrorNotice) {
        self.error(&notice.title, &notice.description);
    }
}

pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext should be provided")
}
