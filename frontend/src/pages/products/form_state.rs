//! Product dialog state
//!
//! Numeric fields are held as text so a half-typed value survives until
//! submit; `to_draft` does the parsing.

use crate::components::form::parse_number;
use admindash_shared::{Product, ProductDraft};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ProductForm {
    pub title: RwSignal<String>,
    pub brand: RwSignal<String>,
    pub description: RwSignal<String>,
    pub category: RwSignal<String>,
    pub thumbnail: RwSignal<String>,
    pub price: RwSignal<String>,
    pub stock: RwSignal<String>,
    pub discount_percentage: RwSignal<String>,
    pub rating: RwSignal<String>,
}

impl ProductForm {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            brand: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            thumbnail: RwSignal::new(String::new()),
            price: RwSignal::new("0".to_string()),
            stock: RwSignal::new("0".to_string()),
            discount_percentage: RwSignal::new("0".to_string()),
            rating: RwSignal::new("0".to_string()),
        }
    }

    pub fn reset(&self) {
        self.fill(&ProductDraft::default());
    }

    pub fn load(&self, product: &Product) {
        self.fill(&product.draft());
    }

    fn fill(&self, draft: &ProductDraft) {
        self.title.set(draft.title.clone());
        self.brand.set(draft.brand.clone());
        self.description.set(draft.description.clone());
        self.category.set(draft.category.clone());
        self.thumbnail.set(draft.thumbnail.clone());
        self.price.set(draft.price.to_string());
        self.stock.set(draft.stock.to_string());
        self.discount_percentage
            .set(draft.discount_percentage.to_string());
        self.rating.set(draft.rating.to_string());
    }

    /// Title is required; numbers must parse.
    pub fn to_draft(&self) -> Result<ProductDraft, String> {
        let title = self.title.get_untracked();
        if title.trim().is_empty() {
            return Err("Title is required".to_string());
        }

        Ok(ProductDraft {
            title,
            description: self.description.get_untracked(),
            price: parse_number(&self.price.get_untracked(), "Price")?,
            discount_percentage: parse_number(
                &self.discount_percentage.get_untracked(),
                "Discount",
            )?,
            rating: parse_number(&self.rating.get_untracked(), "Rating")?,
            stock: parse_number(&self.stock.get_untracked(), "Stock")?,
            brand: self.brand.get_untracked(),
            category: self.category.get_untracked(),
            thumbnail: self.thumbnail.get_untracked(),
        })
    }
}

impl Default for ProductForm {
    fn default() -> Self {
        Self::new()
    }
}
