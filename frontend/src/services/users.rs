use super::ListParams;
use crate::api::ApiClient;
use crate::error::ApiError;
use admindash_shared::protocol::{CreateUser, DeleteUser, GetUser, ListUsers, UpdateUser};
use admindash_shared::{DeleteResponse, Listing, User, UserDraft};

pub async fn list(api: &ApiClient, params: &ListParams) -> Result<Listing<User>, ApiError> {
    let req = ListUsers {
        page: Some(params.query()),
        search: params.search.clone(),
    };
    api.send(&req).await.map(Listing::from)
}

pub async fn get(api: &ApiClient, id: u64) -> Result<User, ApiError> {
    api.send(&GetUser { id }).await
}

pub async fn create(api: &ApiClient, draft: UserDraft) -> Result<User, ApiError> {
    api.send(&CreateUser(draft)).await
}

pub async fn update(api: &ApiClient, id: u64, patch: UserDraft) -> Result<User, ApiError> {
    api.send(&UpdateUser { id, patch }).await
}

pub async fn delete(api: &ApiClient, id: u64) -> Result<DeleteResponse, ApiError> {
    api.send(&DeleteUser { id }).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::{MockTransport, client};
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    #[test]
    fn get_fetches_one_user() {
        let (api, transport, _) = client(MockTransport::default().reply(
            200,
            r#"{"id":1,"firstName":"Emily","lastName":"Johnson","username":"emilys"}"#,
        ));

        let user = block_on(get(&api, 1)).unwrap();

        assert_eq!(user.full_name(), "Emily Johnson");
        assert_eq!(transport.sent()[0].url, "https://dummyjson.com/users/1");
    }

    #[test]
    fn search_uses_the_search_route() {
        let (api, transport, _) = client(MockTransport::default().reply(
            200,
            r#"{"users":[],"total":0,"skip":0,"limit":10}"#,
        ));

        let listing = block_on(list(&api, &ListParams::new(2, 10).with_search("emily"))).unwrap();

        assert_eq!(listing.total, 0);
        assert_eq!(
            transport.sent()[0].url,
            "https://dummyjson.com/users/search?q=emily&limit=10&skip=10"
        );
    }
}
