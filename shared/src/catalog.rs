//! Catalogue fixtures
//!
//! The demo API has no categories/brands/vouchers/banners/address/variant
//! resources, so these screens run on in-memory sample records. [`LocalPage`]
//! gives them the same `{ items, total }` paging contract as the remote lists.

use serde::{Deserialize, Serialize};

/// Status shared by the catalogue records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    Active,
    Inactive,
    Scheduled,
    Draft,
}

impl RecordStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RecordStatus::Active => "Active",
            RecordStatus::Inactive => "Inactive",
            RecordStatus::Scheduled => "Scheduled",
            RecordStatus::Draft => "Draft",
        }
    }

    /// daisyUI badge modifier.
    pub fn badge_class(&self) -> &'static str {
        match self {
            RecordStatus::Active => "badge-success",
            RecordStatus::Inactive => "badge-ghost",
            RecordStatus::Scheduled => "badge-info",
            RecordStatus::Draft => "badge-warning",
        }
    }
}

/// Case-insensitive free-text match used by the local search box.
pub trait Searchable {
    fn haystack(&self) -> Vec<&str>;

    fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.haystack()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub parent: Option<String>,
    pub products_count: u32,
    pub status: RecordStatus,
    pub featured: bool,
}

impl Searchable for Category {
    fn haystack(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.slug.as_str()];
        if let Some(parent) = &self.parent {
            fields.push(parent.as_str());
        }
        fields
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: u64,
    pub name: String,
    pub logo: String,
    pub products_count: u32,
    pub status: RecordStatus,
    pub featured: bool,
    pub website: String,
}

impl Searchable for Brand {
    fn haystack(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.website.as_str()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voucher {
    pub id: u64,
    pub code: String,
    pub discount: String,
    pub kind: String,
    pub status: RecordStatus,
    pub valid_until: String,
    pub usage_limit: u32,
    pub usage_count: u32,
}

impl Voucher {
    /// Share of the usage limit already consumed, 0..=100.
    pub fn usage_percent(&self) -> u32 {
        if self.usage_limit == 0 {
            return 0;
        }
        (self.usage_count.min(self.usage_limit) * 100) / self.usage_limit
    }
}

impl Searchable for Voucher {
    fn haystack(&self) -> Vec<&str> {
        vec![self.code.as_str(), self.kind.as_str(), self.discount.as_str()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub id: u64,
    pub title: String,
    pub image: String,
    pub location: String,
    pub status: RecordStatus,
    pub start_date: String,
    pub end_date: String,
    pub url: String,
}

impl Searchable for Banner {
    fn haystack(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.location.as_str(), self.url.as_str()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub district: String,
    pub ward: String,
    pub address: String,
    pub kind: String,
}

impl Searchable for Address {
    fn haystack(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.city.as_str(),
            self.district.as_str(),
            self.address.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: u64,
    pub product: String,
    pub sku: String,
    pub variant: String,
    pub price: f64,
    pub stock: u32,
}

impl ProductVariant {
    pub fn stock_label(&self) -> &'static str {
        match self.stock {
            0 => "Out of Stock",
            1..=15 => "Low Stock",
            _ => "In Stock",
        }
    }
}

impl Searchable for ProductVariant {
    fn haystack(&self) -> Vec<&str> {
        vec![self.product.as_str(), self.sku.as_str(), self.variant.as_str()]
    }
}

// =========================================================
// Local paging
// =========================================================

/// A filtered, paginated view over an in-memory collection.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalPage<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T: Clone + Searchable> LocalPage<T> {
    /// `page` is 1-based. `total` counts every match, not just this page.
    pub fn slice(all: &[T], query: &str, page: usize, page_size: usize) -> Self {
        let matching: Vec<&T> = all.iter().filter(|item| item.matches(query)).collect();
        let total = matching.len();
        let skip = page.saturating_sub(1) * page_size;
        let items = matching
            .into_iter()
            .skip(skip)
            .take(page_size)
            .cloned()
            .collect();
        Self { items, total }
    }
}

// =========================================================
// Sample data
// =========================================================

fn category(
    id: u64,
    name: &str,
    slug: &str,
    parent: Option<&str>,
    products_count: u32,
    status: RecordStatus,
    featured: bool,
) -> Category {
    Category {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        parent: parent.map(str::to_string),
        products_count,
        status,
        featured,
    }
}

pub fn sample_categories() -> Vec<Category> {
    use RecordStatus::*;
    vec![
        category(1, "Electronics", "electronics", None, 124, Active, true),
        category(2, "Smartphones", "smartphones", Some("Electronics"), 45, Active, true),
        category(3, "Laptops", "laptops", Some("Electronics"), 38, Active, false),
        category(4, "Clothing", "clothing", None, 215, Active, true),
        category(5, "Men's Apparel", "mens-apparel", Some("Clothing"), 87, Active, true),
        category(6, "Women's Apparel", "womens-apparel", Some("Clothing"), 128, Active, true),
        category(7, "Home & Kitchen", "home-kitchen", None, 156, Active, false),
        category(8, "Seasonal", "seasonal", None, 42, Inactive, false),
    ]
}

pub fn sample_brands() -> Vec<Brand> {
    use RecordStatus::*;
    [
        (1, "Apple", 42, Active, true, "https://apple.com"),
        (2, "Samsung", 56, Active, true, "https://samsung.com"),
        (3, "Nike", 87, Active, true, "https://nike.com"),
        (4, "Adidas", 65, Active, false, "https://adidas.com"),
        (5, "Sony", 29, Active, false, "https://sony.com"),
        (6, "LG", 18, Inactive, false, "https://lg.com"),
    ]
    .into_iter()
    .map(|(id, name, products_count, status, featured, website)| Brand {
        id,
        name: name.to_string(),
        logo: "/placeholder.svg".to_string(),
        products_count,
        status,
        featured,
        website: website.to_string(),
    })
    .collect()
}

pub fn sample_vouchers() -> Vec<Voucher> {
    use RecordStatus::*;
    [
        (1, "SUMMER25", "25%", "Percentage", Active, "2025-06-30", 100, 45),
        (2, "WELCOME10", "10%", "Percentage", Active, "2025-12-31", 1000, 568),
        (3, "FREESHIP", "$15", "Fixed Amount", Active, "2025-05-15", 500, 324),
        (4, "FLASH50", "50%", "Percentage", Inactive, "2025-03-01", 200, 200),
        (5, "LOYALTY20", "20%", "Percentage", Active, "2025-08-01", 900, 312),
    ]
    .into_iter()
    .map(
        |(id, code, discount, kind, status, valid_until, usage_limit, usage_count)| Voucher {
            id,
            code: code.to_string(),
            discount: discount.to_string(),
            kind: kind.to_string(),
            status,
            valid_until: valid_until.to_string(),
            usage_limit,
            usage_count,
        },
    )
    .collect()
}

pub fn sample_banners() -> Vec<Banner> {
    use RecordStatus::*;
    [
        (1, "Summer Sale", "Homepage Hero", Active, "2025-04-01", "2025-05-31", "/summer-sale"),
        (2, "New Collection", "Category Page", Active, "2025-04-10", "2025-06-10", "/new-arrivals"),
        (3, "Flash Deals", "Homepage Slider", Scheduled, "2025-05-15", "2025-05-18", "/flash-deals"),
        (4, "Holiday Special", "Product Page", Draft, "2025-11-25", "2025-12-31", "/holiday-special"),
        (5, "Brand Spotlight", "Category Page", Inactive, "2025-03-01", "2025-03-31", "/brand-spotlight"),
    ]
    .into_iter()
    .map(|(id, title, location, status, start_date, end_date, url)| Banner {
        id,
        title: title.to_string(),
        image: "/placeholder.svg".to_string(),
        location: location.to_string(),
        status,
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
        url: url.to_string(),
    })
    .collect()
}

pub fn sample_addresses() -> Vec<Address> {
    [
        (1, "John Doe", "john.doe@example.com", "+1 (555) 123-4567", "New York", "Manhattan", "Midtown", "123 Broadway St, Apt 45", "Home"),
        (2, "Jane Smith", "jane.smith@example.com", "+1 (555) 987-6543", "Los Angeles", "Hollywood", "West Hollywood", "456 Sunset Blvd", "Work"),
        (3, "Robert Johnson", "robert.j@example.com", "+1 (555) 555-5555", "Chicago", "Downtown", "Loop", "789 Michigan Ave, Suite 1000", "Office"),
        (4, "Emily Wilson", "emily.w@example.com", "+1 (555) 111-2222", "San Francisco", "Mission", "Mission District", "101 Valencia St", "Home"),
        (5, "Michael Brown", "michael.b@example.com", "+1 (555) 444-3333", "Boston", "Back Bay", "Beacon Hill", "222 Newbury St", "Shipping"),
    ]
    .into_iter()
    .map(
        |(id, name, email, phone, city, district, ward, address, kind)| Address {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            city: city.to_string(),
            district: district.to_string(),
            ward: ward.to_string(),
            address: address.to_string(),
            kind: kind.to_string(),
        },
    )
    .collect()
}

pub fn sample_variants() -> Vec<ProductVariant> {
    [
        (1, "iPhone 14", "IPH14-128-BLK", "128GB / Black", 799.0, 45),
        (2, "iPhone 14", "IPH14-128-WHT", "128GB / White", 799.0, 32),
        (3, "iPhone 14", "IPH14-256-BLK", "256GB / Black", 899.0, 18),
        (4, "MacBook Pro", "MBP-13-8-256-SPC", "13\" / 8GB / 256GB / Space Gray", 1299.0, 12),
        (5, "MacBook Pro", "MBP-13-16-512-SPC", "13\" / 16GB / 512GB / Space Gray", 1699.0, 0),
        (6, "AirPods Pro", "APP-2-WHT", "2nd Gen / White", 249.0, 56),
    ]
    .into_iter()
    .map(|(id, product, sku, variant, price, stock)| ProductVariant {
        id,
        product: product.to_string(),
        sku: sku.to_string(),
        variant: variant.to_string(),
        price,
        stock,
    })
    .collect()
}
