//! JWT access tokens
//!
//! HS256 tokens carrying the user id (`sub`) and email. There are no refresh
//! tokens: a client logs in again once `exp` passes.

use chrono::{Duration, Utc};
use itemhub_core::{CredentialError, TokenIssuer, TokenSubject, UserId};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::JwtConfig;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Get the user ID from the subject
    pub fn user_id(&self) -> Result<UserId, CredentialError> {
        self.sub.parse().map_err(|_| CredentialError::InvalidToken)
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// JWT service for encoding and decoding tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_seconds: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and token lifetime
    #[must_use]
    pub fn new(secret: &str, expiry_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiry_seconds,
        }
    }

    #[must_use]
    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(&config.secret, config.expiry_seconds)
    }

    /// Token lifetime in seconds
    #[must_use]
    pub fn expiry_seconds(&self) -> i64 {
        self.expiry_seconds
    }

    /// Encode claims for `subject`, valid from now
    pub fn encode_token(&self, subject: &TokenSubject) -> Result<String, CredentialError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.user_id.to_string(),
            email: subject.email.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.expiry_seconds)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| CredentialError::Signing(e.to_string()))
    }

    /// Decode and validate a JWT token
    ///
    /// # Errors
    /// Returns `Expired` past `exp`, `InvalidToken` for anything else wrong
    pub fn decode_token(&self, token: &str) -> Result<Claims, CredentialError> {
        let validation = Validation::default();

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => CredentialError::Expired,
                _ => CredentialError::InvalidToken,
            })?;

        Ok(token_data.claims)
    }
}

impl TokenIssuer for JwtService {
    fn issue(&self, subject: &TokenSubject) -> Result<String, CredentialError> {
        self.encode_token(subject)
    }

    fn verify(&self, token: &str) -> Result<TokenSubject, CredentialError> {
        let claims = self.decode_token(token)?;
        Ok(TokenSubject {
            user_id: claims.user_id()?,
            email: claims.email,
        })
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("expiry_seconds", &self.expiry_seconds)
            .finish_non_exhaustive()
    }
}
