//! User account business logic: signup validation and credential login.

use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::SignupParams,
};

const MIN_USERNAME_LEN: usize = 4;
const MIN_PASSWORD_LEN: usize = 6;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user account.
    ///
    /// Field validation failures are collected into one 400 response. A
    /// duplicate email or username resolves to the dedicated UserExists error
    /// and its fixed 500 response. The password is hashed here
    /// so only the hash ever reaches the data layer.
    ///
    /// # Returns
    /// - `Ok(user)` - The created user
    /// - `Err(AppError::Validation)` - One or more fields failed validation
    /// - `Err(AppError::UserExists)` - Email or username already taken
    pub async fn signup(&self, params: SignupParams) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        validate_signup(&params)?;

        if user_repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::UserExists {
                field: "email".to_string(),
                message: "User with that email already exists".to_string(),
            });
        }

        if user_repo
            .find_by_username(&params.username)
            .await?
            .is_some()
        {
            return Err(AppError::UserExists {
                field: "username".to_string(),
                message: "User with that username already exists".to_string(),
            });
        }

        let hashed_password = bcrypt::hash(&params.password, bcrypt::DEFAULT_COST)?;

        let user = user_repo
            .create(
                params.first_name,
                params.last_name,
                params.email,
                params.username,
                hashed_password,
            )
            .await?;

        Ok(user)
    }

    /// Authenticates a user by username or email plus password.
    ///
    /// A missing user and a wrong password are indistinguishable to the
    /// caller.
    ///
    /// # Returns
    /// - `Ok(user)` - Credentials matched
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - No match
    pub async fn login(
        &self,
        credential: &str,
        password: &str,
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_credential(credential).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !bcrypt::verify(password, &user.hashed_password)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}

/// Validates signup fields, collecting every failure into one error map.
fn validate_signup(params: &SignupParams) -> Result<(), AppError> {
    let mut errors = BTreeMap::new();

    if params.first_name.trim().is_empty() {
        errors.insert(
            "firstName".to_string(),
            "First Name is required".to_string(),
        );
    }
    if params.last_name.trim().is_empty() {
        errors.insert("lastName".to_string(), "Last Name is required".to_string());
    }
    if !is_valid_email(&params.email) {
        errors.insert(
            "email".to_string(),
            "Please provide a valid email.".to_string(),
        );
    }
    if params.username.len() < MIN_USERNAME_LEN {
        errors.insert(
            "username".to_string(),
            "Username of at least 4 characters is required".to_string(),
        );
    } else if is_valid_email(&params.username) {
        errors.insert(
            "username".to_string(),
            "Username cannot be an email.".to_string(),
        );
    }
    if params.password.len() < MIN_PASSWORD_LEN {
        errors.insert(
            "password".to_string(),
            "Password must be 6 characters or more.".to_string(),
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation {
            message: "Bad Request".to_string(),
            errors,
        })
    }
}

/// Minimal shape check: one `@` with a non-empty local part and a dotted
/// domain.
fn is_valid_email(value: &str) -> bool {
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let Some(domain) = parts.next() else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
