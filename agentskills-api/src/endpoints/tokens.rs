use crate::client::{ApiClient, RequestOptions};
use crate::error::Result;
use crate::types::{CreateTokenInput, Listing, Page, Token, TokenPair};
use agentskills_common::store::Store;
use agentskills_rest::http::Method;
use agentskills_rest::{RestClient, RestRequest};

const TOKENS_PATH: &str = "/api/v1/tokens";

impl<S, T> ApiClient<S, T>
where
    S: Store<(), TokenPair> + Send + Sync,
    S::Error: Send + Sync + 'static,
    T: RestClient + Send + Sync,
{
    pub async fn list_tokens(&self) -> Result<Page<Token>> {
        let listing: Listing<Token> = self
            .request(&RestRequest::<(), ()>::new(Method::GET, TOKENS_PATH), RequestOptions::default())
            .await?;
        Ok(listing.into())
    }
    /// Create an API token. The returned [`Token::token`] is the only time
    /// the secret value is visible.
    pub async fn create_token(&self, input: CreateTokenInput) -> Result<Token> {
        self.request(
            &RestRequest::<(), _>::new(Method::POST, TOKENS_PATH).json(input),
            RequestOptions::default(),
        )
        .await
    }
    pub async fn revoke_token(&self, token_id: impl AsRef<str>) -> Result<serde_json::Value> {
        self.request(
            &RestRequest::<(), ()>::new(Method::DELETE, format!("{TOKENS_PATH}/{}", token_id.as_ref())),
            RequestOptions::default(),
        )
        .await
    }
}
