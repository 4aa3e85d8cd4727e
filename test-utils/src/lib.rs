//! Shared test tooling for the openstay backend.
//!
//! Backend tests run against an in-memory SQLite database whose tables are
//! derived straight from the entity definitions, so no migration files or
//! external database are involved. `TestBuilder` picks which tables exist,
//! `TestContext` hands out the database connection (and a session, for auth
//! tests), and the `factory` module seeds rows with sensible defaults.
//!
//! A typical data-layer test asks the builder for the table group it needs
//! and seeds through factories:
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_owned_spots() -> Result<(), DbErr> {
//!     let test = TestBuilder::new().with_spot_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (owner, spot) = factory::helpers::create_owner_and_spot(db).await?;
//!     // Exercise the repository under test...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
