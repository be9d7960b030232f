//! Typed wrappers over the demo REST API, one module per resource.

pub mod auth;
pub mod orders;
pub mod products;
pub mod users;

use admindash_shared::PageQuery;
use leptos::prelude::*;

/// Paging and search parameters shared by the list screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
    pub search: Option<String>,
}

impl ListParams {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page,
            page_size,
            search: None,
        }
    }

    /// Empty search text means no search.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = (!search.is_empty()).then_some(search);
        self
    }

    pub fn query(&self) -> PageQuery {
        PageQuery::from_page(self.page, self.page_size)
    }
}

/// Tags list fetches so a slow response cannot overwrite a newer one.
///
/// Each fetch takes a ticket from [`LatestRequest::begin`] and applies its
/// result only while [`LatestRequest::is_current`] still holds.
#[derive(Clone, Copy)]
pub struct LatestRequest(StoredValue<u64>);

impl LatestRequest {
    pub fn new() -> Self {
        Self(StoredValue::new(0))
    }

    pub fn begin(&self) -> u64 {
        let ticket = self.0.get_value() + 1;
        self.0.set_value(ticket);
        ticket
    }

    /// False once a newer fetch has started or the owning page is gone.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.try_with_value(|latest| *latest == ticket).unwrap_or(false)
    }
}

impl Default for LatestRequest {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_search_is_no_search() {
        assert_eq!(ListParams::new(1, 10).with_search("").search, None);
        assert_eq!(
            ListParams::new(1, 10).with_search(" phone").search,
            Some(" phone".to_string())
        );
    }

    #[test]
    fn only_the_newest_fetch_applies() {
        Owner::new().with(|| {
            let latest = LatestRequest::new();
            let page_two = latest.begin();
            let page_three = latest.begin();

            // page 3 lands first, then the late page 2 response
            assert!(latest.is_current(page_three));
            assert!(!latest.is_current(page_two));
        });
    }

    #[test]
    fn tickets_die_with_the_page() {
        let owner = Owner::new();
        let (latest, ticket) = owner.with(|| {
            let latest = LatestRequest::new();
            let ticket = latest.begin();
            (latest, ticket)
        });
        owner.cleanup();

        assert!(!latest.is_current(ticket));
    }
}
