//! Fixture-backed catalogue screens.

use crate::components::catalog_page::{CatalogPage, CatalogRecord};
use crate::components::data_table::Column;
use admindash_shared::catalog::{
    Address, Banner, Brand, Category, ProductVariant, RecordStatus, Voucher, sample_addresses,
    sample_banners, sample_brands, sample_categories, sample_variants, sample_vouchers,
};
use leptos::prelude::*;

const NONE: &str = "—";

fn status_badge(status: RecordStatus) -> impl IntoView {
    view! { <span class=format!("badge {}", status.badge_class())>{status.label()}</span> }
}

fn yes_no(flag: bool) -> String {
    let text = if flag { "Yes" } else { "No" };
    text.to_string()
}

// =========================================================
// Categories
// =========================================================

impl CatalogRecord for Category {
    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Slug", self.slug.clone()),
            ("Parent", self.parent.clone().unwrap_or_else(|| NONE.to_string())),
            ("Products", self.products_count.to_string()),
            ("Status", self.status.label().to_string()),
            ("Featured", yes_no(self.featured)),
        ]
    }
}

fn category_columns() -> Vec<Column<Category>> {
    vec![
        Column::new("name", "Name", |c: &Category, _| {
            let class = if c.parent.is_some() { "ml-4 font-medium" } else { "font-bold" };
            view! { <span class=class>{c.name.clone()}</span> }
        }),
        Column::new("slug", "Slug", |c: &Category, _| {
            view! { <span class="font-mono text-xs">{c.slug.clone()}</span> }
        }),
        Column::new("parent", "Parent", |c: &Category, _| {
            view! {
                <span class="text-base-content/60">
                    {c.parent.clone().unwrap_or_else(|| NONE.to_string())}
                </span>
            }
        }),
        Column::new("productsCount", "Products", |c: &Category, _| {
            view! { <span class="badge badge-outline">{c.products_count}</span> }
        }),
        Column::new("status", "Status", |c: &Category, _| status_badge(c.status)),
        Column::new("featured", "Featured", |c: &Category, _| {
            if c.featured { "★" } else { NONE }
        }),
    ]
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    view! {
        <CatalogPage
            title="Categories"
            description="Manage product categories and collections"
            columns=category_columns()
            records=sample_categories()
        />
    }
}

// =========================================================
// Brands
// =========================================================

impl CatalogRecord for Brand {
    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Brand Name", self.name.clone()),
            ("Products", self.products_count.to_string()),
            ("Status", self.status.label().to_string()),
            ("Featured", yes_no(self.featured)),
            ("Website", self.website.clone()),
        ]
    }
}

fn brand_columns() -> Vec<Column<Brand>> {
    vec![
        Column::new("logo", "Logo", |b: &Brand, _| {
            view! {
                <div class="avatar">
                    <div class="w-10 rounded">
                        <img src=b.logo.clone() alt=b.name.clone() />
                    </div>
                </div>
            }
        }),
        Column::new("name", "Brand Name", |b: &Brand, _| {
            view! { <span class="font-medium">{b.name.clone()}</span> }
        })
        .sortable(),
        Column::new("productsCount", "Products", |b: &Brand, _| {
            view! { <span class="badge badge-outline">{b.products_count}</span> }
        }),
        Column::new("status", "Status", |b: &Brand, _| status_badge(b.status)),
        Column::new("featured", "Featured", |b: &Brand, _| {
            if b.featured { "★" } else { NONE }
        }),
        Column::new("website", "Website", |b: &Brand, _| {
            view! {
                <a href=b.website.clone() target="_blank" class="link link-primary text-sm">
                    {b.website.clone()}
                </a>
            }
        }),
    ]
}

#[component]
pub fn BrandsPage() -> impl IntoView {
    view! {
        <CatalogPage
            title="Brands"
            description="Manage product brands and manufacturers"
            columns=brand_columns()
            records=sample_brands()
        />
    }
}

// =========================================================
// Vouchers
// =========================================================

impl CatalogRecord for Voucher {
    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        self.code.clone()
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Code", self.code.clone()),
            ("Discount", self.discount.clone()),
            ("Type", self.kind.clone()),
            ("Status", self.status.label().to_string()),
            ("Valid Until", self.valid_until.clone()),
            ("Usage", format!("{} / {}", self.usage_count, self.usage_limit)),
        ]
    }
}

fn voucher_columns() -> Vec<Column<Voucher>> {
    vec![
        Column::new("code", "Code", |v: &Voucher, _| {
            view! { <span class="font-mono font-medium">{v.code.clone()}</span> }
        }),
        Column::new("discount", "Discount", |v: &Voucher, _| v.discount.clone()),
        Column::new("type", "Type", |v: &Voucher, _| v.kind.clone()),
        Column::new("status", "Status", |v: &Voucher, _| status_badge(v.status)),
        Column::new("validUntil", "Valid Until", |v: &Voucher, _| v.valid_until.clone()),
        Column::new("usage", "Usage", |v: &Voucher, _| {
            view! {
                <div class="flex flex-col gap-1 min-w-24">
                    <span class="text-xs">{format!("{} / {}", v.usage_count, v.usage_limit)}</span>
                    <progress class="progress progress-primary w-full" value=v.usage_percent().to_string() max="100"></progress>
                </div>
            }
        }),
    ]
}

#[component]
pub fn VouchersPage() -> impl IntoView {
    view! {
        <CatalogPage
            title="Vouchers"
            description="Manage discount vouchers and promotional codes"
            columns=voucher_columns()
            records=sample_vouchers()
        />
    }
}

// =========================================================
// Banners
// =========================================================

impl CatalogRecord for Banner {
    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Title", self.title.clone()),
            ("Location", self.location.clone()),
            ("Status", self.status.label().to_string()),
            ("Duration", format!("{} to {}", self.start_date, self.end_date)),
            ("URL", self.url.clone()),
        ]
    }
}

fn banner_columns() -> Vec<Column<Banner>> {
    vec![
        Column::new("image", "Image", |b: &Banner, _| {
            view! { <img src=b.image.clone() alt=b.title.clone() class="h-12 w-24 rounded object-cover" /> }
        }),
        Column::new("title", "Title", |b: &Banner, _| {
            view! { <span class="font-medium">{b.title.clone()}</span> }
        }),
        Column::new("location", "Location", |b: &Banner, _| b.location.clone()),
        Column::new("status", "Status", |b: &Banner, _| status_badge(b.status)),
        Column::new("duration", "Duration", |b: &Banner, _| {
            view! {
                <div class="text-xs">
                    <div>{b.start_date.clone()}</div>
                    <div class="text-base-content/60">{format!("to {}", b.end_date)}</div>
                </div>
            }
        }),
        Column::new("url", "URL", |b: &Banner, _| {
            view! { <span class="font-mono text-xs">{b.url.clone()}</span> }
        }),
    ]
}

#[component]
pub fn BannersPage() -> impl IntoView {
    view! {
        <CatalogPage
            title="Banners"
            description="Manage promotional banners and marketing imagery"
            columns=banner_columns()
            records=sample_banners()
        />
    }
}

// =========================================================
// Address book
// =========================================================

impl CatalogRecord for Address {
    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Email", self.email.clone()),
            ("Phone", self.phone.clone()),
            ("City", self.city.clone()),
            ("District", self.district.clone()),
            ("Ward", self.ward.clone()),
            ("Address", self.address.clone()),
            ("Type", self.kind.clone()),
        ]
    }
}

fn address_columns() -> Vec<Column<Address>> {
    vec![
        Column::new("name", "Name", |a: &Address, _| {
            view! { <span class="font-medium">{a.name.clone()}</span> }
        }),
        Column::new("contact", "Contact", |a: &Address, _| {
            view! {
                <div class="text-sm">
                    <div>{a.email.clone()}</div>
                    <div class="text-base-content/60">{a.phone.clone()}</div>
                </div>
            }
        }),
        Column::new("location", "Location", |a: &Address, _| {
            format!("{}, {}, {}", a.ward, a.district, a.city)
        }),
        Column::new("address", "Address", |a: &Address, _| a.address.clone()),
        Column::new("type", "Type", |a: &Address, _| {
            view! { <span class="badge badge-outline">{a.kind.clone()}</span> }
        }),
    ]
}

#[component]
pub fn AddressBookPage() -> impl IntoView {
    view! {
        <CatalogPage
            title="Address Book"
            description="Manage customer and shipping addresses"
            columns=address_columns()
            records=sample_addresses()
        />
    }
}

// =========================================================
// Product variants
// =========================================================

impl CatalogRecord for ProductVariant {
    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        format!("{} ({})", self.product, self.variant)
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Product", self.product.clone()),
            ("SKU", self.sku.clone()),
            ("Variant", self.variant.clone()),
            ("Price", format!("${:.2}", self.price)),
            ("Stock", self.stock.to_string()),
            ("Status", self.stock_label().to_string()),
        ]
    }
}

fn stock_badge(variant: &ProductVariant) -> &'static str {
    match variant.stock {
        0 => "badge badge-error",
        1..=15 => "badge badge-warning",
        _ => "badge badge-success",
    }
}

fn variant_columns() -> Vec<Column<ProductVariant>> {
    vec![
        Column::new("product", "Product", |v: &ProductVariant, _| {
            view! { <span class="font-medium">{v.product.clone()}</span> }
        }),
        Column::new("sku", "SKU", |v: &ProductVariant, _| {
            view! { <span class="font-mono text-xs">{v.sku.clone()}</span> }
        }),
        Column::new("variant", "Variant", |v: &ProductVariant, _| v.variant.clone()),
        Column::new("price", "Price", |v: &ProductVariant, _| format!("${:.2}", v.price)),
        Column::new("stock", "Stock", |v: &ProductVariant, _| v.stock.to_string()),
        Column::new("status", "Status", |v: &ProductVariant, _| {
            view! { <span class=stock_badge(v)>{v.stock_label()}</span> }
        }),
    ]
}

#[component]
pub fn ProductVariantsPage() -> impl IntoView {
    view! {
        <CatalogPage
            title="Product Variants"
            description="Manage product variants, options, and stock levels"
            columns=variant_columns()
            records=sample_variants()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::data_table::unique_ids;
    use pretty_assertions::assert_eq;

    #[test]
    fn column_ids_are_unique_per_screen() {
        assert!(unique_ids(&category_columns()));
        assert!(unique_ids(&brand_columns()));
        assert!(unique_ids(&voucher_columns()));
        assert!(unique_ids(&banner_columns()));
        assert!(unique_ids(&address_columns()));
        assert!(unique_ids(&variant_columns()));
    }

    #[test]
    fn fixture_ids_are_unique() {
        fn ids<T: CatalogRecord>(records: Vec<T>) -> Vec<u64> {
            let mut ids: Vec<u64> = records.iter().map(CatalogRecord::id).collect();
            ids.sort_unstable();
            ids.dedup();
            ids
        }

        assert_eq!(ids(sample_categories()).len(), sample_categories().len());
        assert_eq!(ids(sample_brands()).len(), sample_brands().len());
        assert_eq!(ids(sample_vouchers()).len(), sample_vouchers().len());
        assert_eq!(ids(sample_banners()).len(), sample_banners().len());
        assert_eq!(ids(sample_addresses()).len(), sample_addresses().len());
        assert_eq!(ids(sample_variants()).len(), sample_variants().len());
    }

    #[test]
    fn top_level_category_has_no_parent_detail() {
        let root = sample_categories()
            .into_iter()
            .find(|c| c.parent.is_none())
            .unwrap();

        let details = root.details();
        assert_eq!(details[2], ("Parent", NONE.to_string()));
    }

    #[test]
    fn variant_label_names_the_option() {
        let variant = &sample_variants()[0];
        assert_eq!(
            variant.label(),
            format!("{} ({})", variant.product, variant.variant)
        );
    }
}
