use crate::server::error::{auth::AuthError, AppError};
use crate::server::middleware::{auth::AuthGuard, session::AuthSession};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
