//! User data repository for database operations.
//!
//! Handles account creation and the credential lookups used by signup
//! uniqueness checks and login. Password hashing happens in the service
//! layer; this repository only ever stores the hash it is handed.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user account.
    ///
    /// # Arguments
    /// - `first_name` - User's first name
    /// - `last_name` - User's last name
    /// - `email` - Unique email address
    /// - `username` - Unique username
    /// - `hashed_password` - Bcrypt hash of the user's password
    ///
    /// # Returns
    /// - `Ok(user)` - The created user
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        first_name: String,
        last_name: String,
        email: String,
        username: String,
        hashed_password: String,
    ) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        let user = entity::prelude::User::insert(entity::user::ActiveModel {
            first_name: ActiveValue::Set(first_name),
            last_name: ActiveValue::Set(last_name),
            email: ActiveValue::Set(email),
            username: ActiveValue::Set(username),
            hashed_password: ActiveValue::Set(hashed_password),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(user)
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(user))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a user by email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Finds a user by username.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Finds a user by login credential, matching either username or email.
    ///
    /// # Returns
    /// - `Ok(Some(user))` - A user whose username or email matches
    /// - `Ok(None)` - No match
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_credential(
        &self,
        credential: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(entity::user::Column::Username.eq(credential))
                    .add(entity::user::Column::Email.eq(credential)),
            )
            .one(self.db)
            .await
    }
}
