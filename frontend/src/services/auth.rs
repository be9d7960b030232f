use crate::api::ApiClient;
use crate::error::ApiError;
use admindash_shared::protocol::LoginRequest;
use admindash_shared::{Credentials, Session};

/// Exchanges credentials for a session. Persisting it is the caller's job.
pub async fn login(api: &ApiClient, credentials: Credentials) -> Result<Session, ApiError> {
    api.send(&LoginRequest(credentials)).await
}
