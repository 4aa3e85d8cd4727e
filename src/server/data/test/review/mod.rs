use crate::server::data::review::ReviewRepository;
use crate::server::model::review::CreateReviewParams;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod exists_for_user;
mod list_with_relations;
