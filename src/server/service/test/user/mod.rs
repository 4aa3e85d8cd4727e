use crate::server::error::{auth::AuthError, AppError};
use crate::server::model::user::SignupParams;
use crate::server::service::user::UserService;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod signup;

fn signup_params() -> SignupParams {
    SignupParams {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        username: "ada-lovelace".to_string(),
        password: "difference engine".to_string(),
    }
}
