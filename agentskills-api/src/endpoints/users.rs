use crate::client::{ApiClient, RequestOptions};
use crate::error::Result;
use crate::types::{ChangePasswordInput, DeleteAccountInput, TokenPair, UpdateUserInput, User};
use agentskills_common::store::Store;
use agentskills_rest::http::Method;
use agentskills_rest::{RestClient, RestRequest};

const ME_PATH: &str = "/api/v1/users/me";

impl<S, T> ApiClient<S, T>
where
    S: Store<(), TokenPair> + Send + Sync,
    S::Error: Send + Sync + 'static,
    T: RestClient + Send + Sync,
{
    pub async fn get_me(&self) -> Result<User> {
        self.request(&RestRequest::<(), ()>::new(Method::GET, ME_PATH), RequestOptions::default()).await
    }
    pub async fn update_me(&self, input: UpdateUserInput) -> Result<serde_json::Value> {
        self.request(
            &RestRequest::<(), _>::new(Method::PUT, ME_PATH).json(input),
            RequestOptions::default(),
        )
        .await
    }
    pub async fn change_password(&self, input: ChangePasswordInput) -> Result<serde_json::Value> {
        self.request(
            &RestRequest::<(), _>::new(Method::PUT, format!("{ME_PATH}/password")).json(input),
            RequestOptions::default(),
        )
        .await
    }
    /// Delete the current account. Callers sign out afterwards.
    pub async fn delete_account(&self, input: DeleteAccountInput) -> Result<serde_json::Value> {
        self.request(
            &RestRequest::<(), _>::new(Method::DELETE, ME_PATH).json(input),
            RequestOptions::default(),
        )
        .await
    }
}
