//! Bindings of the backend's endpoints onto [`ApiClient::request()`](crate::ApiClient::request).
mod auth;
mod skills;
mod tokens;
mod users;

pub(crate) const REFRESH_PATH: &str = "/api/v1/auth/refresh";
