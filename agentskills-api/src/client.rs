//! Implementation of [`ApiClient`], which manages the credential lifecycle.

mod refresh;

use self::refresh::{RefreshFailure, RefreshGuard};
use crate::endpoints::REFRESH_PATH;
use crate::error::{Error, Result};
use crate::types::{RefreshInput, TokenPair};
use agentskills_common::store::Store;
use agentskills_rest::http::{Method, StatusCode};
use agentskills_rest::{RestClient, RestRequest, RestResponse};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// Which access token a request carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Authorization {
    /// The access token of the stored credential, if any.
    #[default]
    Stored,
    /// This token, regardless of what is stored. An empty token sends no
    /// `Authorization` header.
    Bearer(String),
    /// No `Authorization` header.
    Anonymous,
}

/// Per-call options of [`ApiClient::request()`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub authorization: Authorization,
    /// Propagate a `401` as is instead of refreshing credentials.
    pub skip_refresh: bool,
}

impl RequestOptions {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self { authorization: Authorization::Bearer(token.into()), ..Default::default() }
    }
    pub fn anonymous() -> Self {
        Self { authorization: Authorization::Anonymous, ..Default::default() }
    }
    pub fn skip_refresh(mut self) -> Self {
        self.skip_refresh = true;
        self
    }
}

/// A client for the agentskills API.
///
/// Attaches the stored access token to requests and, when the backend
/// answers `401`, refreshes the credential once and retries the request once.
/// Clones share the credential store and the refresh guard.
pub struct ApiClient<S, T> {
    store: Arc<S>,
    inner: Arc<T>,
    refresh: Arc<RefreshGuard>,
}

impl<S, T> Clone for ApiClient<S, T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            inner: Arc::clone(&self.inner),
            refresh: Arc::clone(&self.refresh),
        }
    }
}

impl<S, T> ApiClient<S, T>
where
    S: Store<(), TokenPair> + Send + Sync,
    S::Error: Send + Sync + 'static,
    T: RestClient + Send + Sync,
{
    pub fn new(inner: T, store: S) -> Self {
        Self {
            store: Arc::new(store),
            inner: Arc::new(inner),
            refresh: Arc::new(RefreshGuard::default()),
        }
    }
    /// The base URI requests are sent to.
    pub fn base_uri(&self) -> String {
        self.inner.base_uri()
    }
    /// Get the stored credential.
    ///
    /// Store failures and unreadable content both read as no credential.
    pub async fn get_stored_tokens(&self) -> Option<TokenPair> {
        self.store.get(&()).await.transpose().and_then(core::result::Result::ok)
    }
    /// Replace the stored credential.
    pub async fn store_tokens(&self, tokens: TokenPair) -> Result<()> {
        self.store.set((), tokens).await.map_err(|e| Error::CredentialStore(Box::new(e)))
    }
    /// Remove the stored credential.
    pub async fn clear_tokens(&self) -> Result<()> {
        self.store.del(&()).await.map_err(|e| Error::CredentialStore(Box::new(e)))
    }
    /// Forget the current credential, e.g. on logout or after deleting the account.
    pub async fn sign_out(&self) -> Result<()> {
        self.clear_tokens().await
    }
    /// Send a request and decode the successful payload as `O`.
    ///
    /// A `401` on a call that allows refresh triggers at most one refresh
    /// and one retry of the same request with the new access token. Calls
    /// that hit `401` while another call is refreshing wait for that refresh
    /// and reuse its outcome.
    pub async fn request<P, I, O>(
        &self,
        request: &RestRequest<P, I>,
        options: RequestOptions,
    ) -> Result<O>
    where
        P: Serialize + Send + Sync,
        I: Serialize + Send + Sync,
        O: DeserializeOwned,
    {
        let generation = self.refresh.generation();
        let response = self.dispatch(request, &options.authorization).await?;
        if response.is_success() {
            return decode(response);
        }
        if response.status != StatusCode::UNAUTHORIZED || options.skip_refresh {
            return Err(Error::rejected(&response));
        }
        let access_token = self.refreshed_access_token(generation, &response).await?;
        let retried = self.dispatch(request, &Authorization::Bearer(access_token)).await?;
        if retried.is_success() {
            decode(retried)
        } else {
            Err(Error::rejected(&retried))
        }
    }
    async fn dispatch<P, I>(
        &self,
        request: &RestRequest<P, I>,
        authorization: &Authorization,
    ) -> Result<RestResponse>
    where
        P: Serialize + Send + Sync,
        I: Serialize + Send + Sync,
    {
        let bearer = match authorization {
            Authorization::Stored => self.get_stored_tokens().await.map(|tokens| tokens.access_token),
            Authorization::Bearer(token) => Some(token.clone()),
            Authorization::Anonymous => None,
        };
        Ok(self.inner.send_rest(request, bearer.as_deref()).await?)
    }
    // Resolve the access token to retry with after `original` came back 401.
    async fn refreshed_access_token(&self, generation: u64, original: &RestResponse) -> Result<String> {
        let mut last_failure = self.refresh.lock().await;
        // An empty refresh token cannot be exchanged.
        let stored = self.get_stored_tokens().await.filter(|tokens| !tokens.refresh_token.is_empty());
        if self.refresh.generation() != generation {
            match (last_failure.as_ref(), &stored) {
                (None, Some(tokens)) => {
                    tracing::debug!("reusing concurrently refreshed credentials");
                    return Ok(tokens.access_token.clone());
                }
                (Some(failure), None) => {
                    tracing::debug!("concurrent credential refresh was rejected");
                    return Err(failure.clone().into());
                }
                (Some(failure), Some(tokens)) if tokens.refresh_token == failure.refresh_token => {
                    tracing::debug!("stored refresh token was already rejected");
                    return Err(failure.clone().into());
                }
                // Credentials were stored after the last refresh; refresh with those.
                _ => {}
            }
        }
        let Some(tokens) = stored else {
            tracing::debug!("access token rejected and no refresh token stored");
            return Err(Error::unavailable(original));
        };
        tracing::debug!("access token rejected, refreshing credentials");
        let response = self
            .dispatch(
                &RestRequest::<(), _>::new(Method::POST, REFRESH_PATH)
                    .json(RefreshInput { refresh_token: tokens.refresh_token.clone() }),
                &Authorization::Anonymous,
            )
            .await?;
        if !response.is_success() {
            let failure = RefreshFailure {
                status: response.status,
                detail: response.detail(),
                refresh_token: tokens.refresh_token,
            };
            tracing::warn!(status = %response.status, detail = %failure.detail, "credential refresh rejected, clearing stored tokens");
            if let Err(err) = self.clear_tokens().await {
                tracing::warn!(error = %err, "failed to clear stored tokens");
            }
            self.refresh.complete(&mut last_failure, Some(failure));
            return Err(Error::expired(&response));
        }
        let refreshed: TokenPair = decode(response)?;
        self.store_tokens(refreshed.clone()).await?;
        self.refresh.complete(&mut last_failure, None);
        Ok(refreshed.access_token)
    }
}

fn decode<O: DeserializeOwned>(response: RestResponse) -> Result<O> {
    Ok(serde_json::from_value(response.payload)?)
}
