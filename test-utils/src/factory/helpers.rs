use sea_orm::{DatabaseConnection, DbErr};
use std::sync::atomic::{AtomicI32, Ordering};

use crate::factory::{spot::SpotFactory, user::UserFactory};

static NEXT_ID: AtomicI32 = AtomicI32::new(1);

/// Returns a process-wide unique id for factory defaults.
///
/// Used to generate distinct emails, usernames, and names so that tests
/// sharing a database never collide on unique columns.
pub fn next_id() -> i32 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Creates a user and a spot owned by that user.
///
/// Most spot, review, and booking tests need this pair as a baseline.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, spot))` - Created owner and spot entities
/// - `Err(DbErr)` - Database error during insert
pub async fn create_owner_and_spot(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::spot::Model), DbErr> {
    let owner = UserFactory::new(db).build().await?;
    let spot = SpotFactory::new(db, owner.id).build().await?;

    Ok((owner, spot))
}

/// Creates a user who does not own any spot.
///
/// Shorthand for `UserFactory::new(db).build().await`, named for readability
/// in authorization tests where the actor is not the owner.
pub async fn create_guest(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
