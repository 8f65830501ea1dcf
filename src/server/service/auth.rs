//! Registration and login.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{AuthSession, CreateUserParam, LoginParams, RegisterParams, Role},
    service::{attendance::AttendanceService, token::TokenService, user::normalize_email},
    util::password,
};

const MIN_NAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 8;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Creates an account and issues its first access token.
    ///
    /// The first account ever created becomes an admin; every later one is a regular user.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Token and created user
    /// - `Err(AppError::BadRequest)` - Missing field, short name or password, malformed email
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn register(&self, params: RegisterParams) -> Result<AuthSession, AppError> {
        let name = params.name.trim().to_string();
        let email = normalize_email(&params.email);

        if name.is_empty() || email.is_empty() || params.password.is_empty() {
            return Err(AppError::BadRequest(
                "Name, email and password are required".to_string(),
            ));
        }
        if name.chars().count() < MIN_NAME_LEN {
            return Err(AppError::BadRequest(format!(
                "Name must be at least {} characters",
                MIN_NAME_LEN
            )));
        }
        if !is_valid_email(&email) {
            return Err(AppError::BadRequest("Invalid email address".to_string()));
        }
        if params.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        let repo = UserRepository::new(self.db);
        if repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict("Email is already registered".to_string()));
        }

        let role = if repo.count().await? == 0 {
            Role::Admin
        } else {
            Role::User
        };
        let password_hash = password::hash(params.password).await?;

        let user = repo
            .create(CreateUserParam {
                name,
                email,
                password_hash,
                role,
            })
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "Email is already registered"))?;

        if user.is_admin() {
            tracing::info!("First user {} registered as admin", user.email);
        }

        let token = self.tokens.issue_access(&user)?;

        Ok(AuthSession { token, user })
    }

    /// Verifies credentials, records attendance and issues an access token.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Token and authenticated user
    /// - `Err(AppError::BadRequest)` - Email or password missing
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, params: LoginParams) -> Result<AuthSession, AppError> {
        let email = normalize_email(&params.email);
        if email.is_empty() || params.password.is_empty() {
            return Err(AppError::BadRequest(
                "Email and password are required".to_string(),
            ));
        }

        let repo = UserRepository::new(self.db);
        let Some(user) = repo.find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify(params.password, user.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        AttendanceService::new(self.db).log_login(user.id).await;

        let token = self.tokens.issue_access(&user)?;

        Ok(AuthSession { token, user })
    }
}

/// Basic shape check: one `@`, a non-empty local part and a dotted domain, no whitespace.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
