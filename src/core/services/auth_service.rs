use super::types::AuthStatus;
use crate::AppError;
use crate::api::client::ReviewClient;
use crate::api::models::User;
use crate::api::state::ApiState;
use crate::error::AuthError;
use tracing::{info, warn};

/// Authentication service. The only owner allowed to change `ApiState`.
pub struct AuthService {
    client: ReviewClient,
    state: ApiState,
}

impl AuthService {
    /// Create new AuthService instance
    pub fn new(client: ReviewClient, state: ApiState) -> Self {
        Self { client, state }
    }

    pub fn state(&self) -> &ApiState {
        &self.state
    }

    /// Store a bearer token for subsequent calls
    pub fn login(&mut self, token: String) -> Result<(), AppError> {
        if token.trim().is_empty() {
            return Err(AuthError::EmptyToken.into());
        }
        self.state.auth_token = Some(token);
        Ok(())
    }

    /// Invalidate the server session and forget the token. The token is
    /// cleared even when the server call fails; the failure is still returned.
    pub async fn logout(&mut self) -> Result<(), AppError> {
        if !self.state.is_authenticated() {
            return Err(AuthError::NotAuthenticated.into());
        }

        let result = self.client.log_out_from_server(&self.state).await;
        self.state.auth_token = None;

        match result {
            Ok(()) => {
                info!("logged out from server");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "server logout failed; local token cleared anyway");
                Err(e.into())
            }
        }
    }

    pub async fn current_user(&self) -> Result<User, AppError> {
        Ok(self.client.get_current_user(&self.state).await?)
    }

    pub fn status(&self) -> AuthStatus {
        AuthStatus {
            is_authenticated: self.state.is_authenticated(),
            lang: self.state.lang.clone(),
        }
    }
}
