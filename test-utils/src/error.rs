use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or execute schema statements.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Failed to migrate or access the session store backing table.
    #[error(transparent)]
    SessionStore(#[from] sea_orm::SqlxError),

    /// Failed to read or write session data.
    #[error(transparent)]
    Session(#[from] tower_sessions::session::Error),
}
