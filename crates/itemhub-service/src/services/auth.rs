//! Authentication service
//!
//! Handles user registration, login, token verification and profile lookup.

use chrono::Utc;
use itemhub_core::entities::{NewUser, User, UserResponse};
use itemhub_core::error::{AppError, RepositoryError};
use itemhub_core::traits::TokenSubject;
use itemhub_core::value_objects::UserId;
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, LoginRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const EMAIL_TAKEN: &str = "A user with this email already exists";
// Shared by the unknown-email and wrong-password paths
const INVALID_CREDENTIALS: &str = "Invalid email or password";
const INVALID_TOKEN: &str = "Invalid or expired token";

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user and sign them in
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        if self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(EMAIL_TAKEN).into());
        }

        let password_hash = self.ctx.password_hasher().hash(&request.password)?;

        let user = User::create(NewUser {
            id: UserId::new(),
            email: request.email,
            name: request.name,
            password_hash,
            created_at: Utc::now(),
        })?;

        // The check above races with concurrent registrations; the unique
        // constraint is the real guard.
        self.ctx
            .user_repo()
            .create(&user)
            .await
            .map_err(|e| match e {
                RepositoryError::UniqueViolation(_) => AppError::conflict(EMAIL_TAKEN).into(),
                other => ServiceError::from(other),
            })?;

        info!(user_id = %user.id(), "User registered successfully");

        self.auth_response(&user)
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let Some(user) = self.ctx.user_repo().find_by_email(&request.email).await? else {
            warn!("Login failed: user not found");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS).into());
        };

        let is_valid = self
            .ctx
            .password_hasher()
            .verify(&request.password, user.password_hash())?;

        if !is_valid {
            warn!(user_id = %user.id(), "Login failed: invalid password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS).into());
        }

        info!(user_id = %user.id(), "User logged in successfully");

        self.auth_response(&user)
    }

    /// Resolve a bearer token to the user id it was issued for
    pub fn verify_token(&self, token: &str) -> ServiceResult<UserId> {
        match self.ctx.token_issuer().verify(token) {
            Ok(subject) => Ok(subject.user_id),
            Err(e) if e.is_rejection() => {
                warn!(error = %e, "Rejected access token");
                Err(AppError::unauthorized(INVALID_TOKEN).into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Profile of the authenticated user
    #[instrument(skip(self))]
    pub async fn current_user(&self, user_id: UserId) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                warn!("Token subject no longer exists");
                AppError::unauthorized(INVALID_TOKEN)
            })?;

        Ok(user.to_response())
    }

    fn auth_response(&self, user: &User) -> ServiceResult<AuthResponse> {
        let token = self.ctx.token_issuer().issue(&TokenSubject {
            user_id: user.id(),
            email: user.email().to_string(),
        })?;

        Ok(AuthResponse {
            token,
            user: user.to_response(),
        })
    }
}
