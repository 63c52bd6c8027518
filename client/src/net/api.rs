//! Typed calls against the Lyceum REST API.
//!
//! ERROR HANDLING
//! ==============
//! Each endpoint maps its own non-2xx status to the matching `AuthError`
//! variant. Bodies are parsed here and nowhere else.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::transport::{ApiRequest, ApiResponse, RequestBody, Transport};
use super::types::{AuthorizeResponse, BearerToken, Credentials, TokenResponse, User};
use crate::config::ApiConfig;
use crate::error::AuthError;

fn logout_failed_message(status: u16) -> String {
    format!("logout request failed: {status}")
}

/// Parse the body of a token-mode login.
pub(crate) fn parse_token_response(body: &str) -> Result<BearerToken, AuthError> {
    let parsed: TokenResponse =
        serde_json::from_str(body).map_err(|e| AuthError::MalformedResponse(format!("login body: {e}")))?;
    BearerToken::new(&parsed.access_token)
        .ok_or_else(|| AuthError::MalformedResponse("login body: empty access_token".to_owned()))
}

/// Parse a `GET /profile` body.
pub(crate) fn parse_user(body: &str) -> Result<User, AuthError> {
    serde_json::from_str(body).map_err(|e| AuthError::MalformedResponse(format!("profile body: {e}")))
}

/// Parse a `GET /auth/google/authorize` body.
pub(crate) fn parse_authorization_url(body: &str) -> Result<String, AuthError> {
    let parsed: AuthorizeResponse =
        serde_json::from_str(body).map_err(|e| AuthError::MalformedResponse(format!("authorize body: {e}")))?;
    let url = parsed.authorization_url.trim();
    if url.is_empty() {
        return Err(AuthError::MalformedResponse("authorize body: empty authorization_url".to_owned()));
    }
    Ok(url.to_owned())
}

/// Endpoint client bound to one transport and base URL.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    transport: T,
    config: ApiConfig,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self { transport, config }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `POST /auth/jwt/login` with a form-encoded body.
    ///
    /// # Errors
    ///
    /// `Authentication` on any non-2xx status; `Transport` on network failure.
    pub async fn login(&self, credentials: &Credentials) -> Result<ApiResponse, AuthError> {
        let request = ApiRequest::post(self.config.login_url())
            .credentialed()
            .body(RequestBody::Form(credentials.form_encoded()));
        let resp = self.transport.send(request).await?;
        if !resp.is_success() {
            return Err(AuthError::Authentication);
        }
        Ok(resp)
    }

    /// `GET /profile`, authenticated by cookie or, when given, a bearer token.
    ///
    /// # Errors
    ///
    /// `ProfileFetch` on any non-2xx status, `MalformedResponse` on a bad body.
    pub async fn fetch_profile(&self, bearer: Option<&BearerToken>) -> Result<User, AuthError> {
        let mut request = ApiRequest::get(self.config.profile_url()).credentialed();
        if let Some(token) = bearer {
            request = request.bearer(token.as_str());
        }
        let resp = self.transport.send(request).await?;
        if !resp.is_success() {
            return Err(AuthError::ProfileFetch);
        }
        parse_user(&resp.body)
    }

    /// `POST /auth/jwt/logout` to invalidate the server session.
    ///
    /// # Errors
    ///
    /// `Transport` on network failure or a non-2xx status.
    pub async fn logout(&self) -> Result<(), AuthError> {
        let request = ApiRequest::post(self.config.logout_url()).credentialed();
        let resp = self.transport.send(request).await?;
        if !resp.is_success() {
            return Err(AuthError::Transport(logout_failed_message(resp.status)));
        }
        Ok(())
    }

    /// `POST /auth/register` with a JSON body.
    ///
    /// # Errors
    ///
    /// `Registration` on any non-2xx status.
    pub async fn register(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let request = ApiRequest::post(self.config.register_url()).body(RequestBody::Json(credentials.to_json()?));
        let resp = self.transport.send(request).await?;
        if !resp.is_success() {
            return Err(AuthError::Registration);
        }
        Ok(())
    }

    /// `GET /auth/google/authorize`, returning the provider consent URL.
    ///
    /// # Errors
    ///
    /// `OAuthInit` on network failure, non-2xx, or a body without a usable
    /// `authorization_url`.
    pub async fn authorization_url(&self) -> Result<String, AuthError> {
        let resp = self.transport.send(ApiRequest::get(self.config.google_authorize_url())).await.map_err(|e| {
            log::warn!("authorize request failed: {e}");
            AuthError::OAuthInit
        })?;
        if !resp.is_success() {
            log::warn!("authorize endpoint returned {}", resp.status);
            return Err(AuthError::OAuthInit);
        }
        parse_authorization_url(&resp.body).map_err(|e| {
            log::warn!("{e}");
            AuthError::OAuthInit
        })
    }
}
