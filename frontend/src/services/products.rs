use super::ListParams;
use crate::api::ApiClient;
use crate::error::ApiError;
use admindash_shared::protocol::{
    CreateProduct, DeleteProduct, GetProduct, ListCategories, ListProducts, UpdateProduct,
};
use admindash_shared::{CategoryEntry, DeleteResponse, Listing, Product, ProductDraft};

pub async fn list(api: &ApiClient, params: &ListParams) -> Result<Listing<Product>, ApiError> {
    list_in(api, params, None).await
}

/// Search takes precedence over the category filter.
pub async fn list_in(
    api: &ApiClient,
    params: &ListParams,
    category: Option<String>,
) -> Result<Listing<Product>, ApiError> {
    let req = ListProducts {
        page: Some(params.query()),
        search: params.search.clone(),
        category,
    };
    api.send(&req).await.map(Listing::from)
}

pub async fn get(api: &ApiClient, id: u64) -> Result<Product, ApiError> {
    api.send(&GetProduct { id }).await
}

pub async fn create(api: &ApiClient, draft: ProductDraft) -> Result<Product, ApiError> {
    api.send(&CreateProduct(draft)).await
}

pub async fn update(api: &ApiClient, id: u64, patch: ProductDraft) -> Result<Product, ApiError> {
    api.send(&UpdateProduct { id, patch }).await
}

pub async fn delete(api: &ApiClient, id: u64) -> Result<DeleteResponse, ApiError> {
    api.send(&DeleteProduct { id }).await
}

pub async fn categories(api: &ApiClient) -> Result<Vec<CategoryEntry>, ApiError> {
    api.send(&ListCategories).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::{MockTransport, client};
    use futures::executor::block_on;

    #[test]
    fn list_maps_the_envelope_and_paging() {
        let (api, transport, _) = client(MockTransport::default().reply(
            200,
            r#"{"products":[{"id":3,"title":"Powder Canister","price":14.99}],"total":194,"skip":20,"limit":10}"#,
        ));

        let params = ListParams::new(3, 10).with_search("powder");
        let listing = block_on(list(&api, &params)).unwrap();

        assert_eq!(listing.total, 194);
        assert_eq!(listing.items[0].id, 3);
        assert_eq!(
            transport.sent()[0].url,
            "https://dummyjson.com/products/search?q=powder&limit=10&skip=20"
        );
    }

    #[test]
    fn get_fetches_one_product() {
        let (api, transport, _) = client(
            MockTransport::default().reply(200, r#"{"id":9,"title":"Lipstick","price":4.5}"#),
        );

        let product = block_on(get(&api, 9)).unwrap();

        assert_eq!(product.title, "Lipstick");
        assert_eq!(transport.sent()[0].url, "https://dummyjson.com/products/9");
    }

    #[test]
    fn category_filter_changes_the_route() {
        let (api, transport, _) = client(MockTransport::default().reply(
            200,
            r#"{"products":[],"total":0,"skip":0,"limit":10}"#,
        ));

        block_on(list_in(&api, &ListParams::new(1, 10), Some("beauty".to_string()))).unwrap();

        assert_eq!(
            transport.sent()[0].url,
            "https://dummyjson.com/products/category/beauty?limit=10&skip=0"
        );
    }

    #[test]
    fn categories_accept_both_shapes() {
        let (api, _, _) = client(MockTransport::default().reply(
            200,
            r#"["beauty",{"slug":"home-decoration","name":"Home Decoration","url":"x"}]"#,
        ));

        let cats = block_on(categories(&api)).unwrap();
        assert_eq!(cats[0].slug(), "beauty");
        assert_eq!(cats[1].name(), "Home Decoration");
    }
}
