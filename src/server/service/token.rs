//! JWT issuing and verification.
//!
//! Two kinds of tokens share one HMAC secret but never each other's audience:
//! access tokens (`aud = "access"`) authenticate API calls, and blob tokens
//! (`aud = "storage"`) authorize a single read of one storage key.

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::{Role, User},
};

const ACCESS_AUDIENCE: &str = "access";
const STORAGE_AUDIENCE: &str = "storage";

/// Lifetime of signed read URLs.
pub const SIGNED_URL_TTL: Duration = Duration::from_secs(15 * 60);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// User ID.
    pub sub: String,
    pub role: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl AccessClaims {
    pub fn user_id(&self) -> Result<i32, AuthError> {
        self.sub
            .parse()
            .map_err(|_| AuthError::InvalidToken(format!("non numeric subject {}", self.sub)))
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin.as_str()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlobClaims {
    /// Storage key the token grants access to.
    pub sub: String,
    /// Content type served with the blob.
    pub ct: String,
    pub aud: String,
    pub exp: i64,
}

#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    access_ttl: Duration,
    app_url: Url,
}

impl TokenService {
    /// # Arguments
    /// - `secret` - HMAC secret shared by both token kinds
    /// - `access_ttl` - Lifetime of access tokens
    /// - `app_url` - Public base URL that signed URLs are built on
    pub fn new(secret: &str, access_ttl: Duration, app_url: Url) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl,
            app_url,
        }
    }

    /// Issues an access token for `user`.
    pub fn issue_access(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        self.encode_access(user, now, now + ttl_secs(self.access_ttl))
    }

    /// Validates an access token and returns its claims.
    ///
    /// # Returns
    /// - `Ok(AccessClaims)` - Signature, audience and expiry are valid
    /// - `Err(AuthError::InvalidToken)` - Any validation failure
    pub fn verify_access(&self, token: &str) -> Result<AccessClaims, AuthError> {
        let data = decode::<AccessClaims>(token, &self.decoding, &validation(ACCESS_AUDIENCE))
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        Ok(data.claims)
    }

    /// Signs a read token for one storage key.
    pub fn sign_blob(
        &self,
        key: &str,
        content_type: &str,
        ttl: Duration,
    ) -> Result<String, AppError> {
        let exp = Utc::now().timestamp() + ttl_secs(ttl);
        self.encode_blob(key, content_type, exp)
    }

    /// Validates a blob token for the requested `key`.
    ///
    /// # Returns
    /// - `Ok(BlobClaims)` - Token is valid and was minted for `key`
    /// - `Err(AuthError::InvalidToken)` - Invalid, expired, or minted for another key
    pub fn verify_blob(&self, token: &str, key: &str) -> Result<BlobClaims, AuthError> {
        let data = decode::<BlobClaims>(token, &self.decoding, &validation(STORAGE_AUDIENCE))
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        if data.claims.sub != key {
            return Err(AuthError::InvalidToken(format!(
                "token for {} used for {}",
                data.claims.sub, key
            )));
        }

        Ok(data.claims)
    }

    /// Builds `<APP_URL>/api/storage/<key>?token=<jwt>` valid for `SIGNED_URL_TTL`.
    pub fn signed_url(&self, key: &str, content_type: &str) -> Result<String, AppError> {
        let token = self.sign_blob(key, content_type, SIGNED_URL_TTL)?;

        let mut url = self.app_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::InternalError(format!("APP_URL {} cannot be a base", self.app_url)))?
            .pop_if_empty()
            .extend(["api", "storage"])
            .extend(key.split('/'));
        url.set_query(None);
        url.query_pairs_mut().append_pair("token", &token);

        Ok(url.into())
    }

    fn encode_access(&self, user: &User, iat: i64, exp: i64) -> Result<String, AppError> {
        let claims = AccessClaims {
            sub: user.id.to_string(),
            role: user.role.as_str().to_string(),
            aud: ACCESS_AUDIENCE.to_string(),
            iat,
            exp,
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    fn encode_blob(&self, key: &str, content_type: &str, exp: i64) -> Result<String, AppError> {
        let claims = BlobClaims {
            sub: key.to_string(),
            ct: content_type.to_string(),
            aud: STORAGE_AUDIENCE.to_string(),
            exp,
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }
}

fn validation(audience: &str) -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_audience(&[audience]);
    validation.leeway = 0;
    validation
}

fn ttl_secs(ttl: Duration) -> i64 {
    i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX / 2)
}
