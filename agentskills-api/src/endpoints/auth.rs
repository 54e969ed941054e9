use super::REFRESH_PATH;
use crate::client::{ApiClient, RequestOptions};
use crate::error::Result;
use crate::types::{LoginInput, RefreshInput, RegisterInput, TokenPair};
use agentskills_common::store::Store;
use agentskills_rest::http::Method;
use agentskills_rest::{RestClient, RestRequest};

// Credentials are exchanged here, so a 401 is the answer and never a reason to refresh.
impl<S, T> ApiClient<S, T>
where
    S: Store<(), TokenPair> + Send + Sync,
    S::Error: Send + Sync + 'static,
    T: RestClient + Send + Sync,
{
    /// Create an account.
    ///
    /// Sent without a bearer token; a `401` is returned as is.
    pub async fn register(&self, input: RegisterInput) -> Result<serde_json::Value> {
        self.request(
            &RestRequest::<(), _>::new(Method::POST, "/api/v1/auth/register").json(input),
            RequestOptions::anonymous().skip_refresh(),
        )
        .await
    }
    /// Exchange email and password for a token pair.
    ///
    /// Sent without a bearer token and never refreshed, so rejected
    /// credentials surface as [`Error::RequestRejected`](crate::Error::RequestRejected).
    /// The pair is returned, not stored; callers decide whether to keep it
    /// with [`store_tokens()`](Self::store_tokens).
    pub async fn login(&self, input: LoginInput) -> Result<TokenPair> {
        self.request(
            &RestRequest::<(), _>::new(Method::POST, "/api/v1/auth/login").json(input),
            RequestOptions::anonymous().skip_refresh(),
        )
        .await
    }
    /// Exchange a refresh token for a new token pair.
    pub async fn refresh(&self, input: RefreshInput) -> Result<TokenPair> {
        self.request(
            &RestRequest::<(), _>::new(Method::POST, REFRESH_PATH).json(input),
            RequestOptions::anonymous().skip_refresh(),
        )
        .await
    }
}
