//! Entity factories for building test data.
//!
//! Each factory inserts an entity with sensible defaults that can be overridden
//! through a builder pattern, keeping test setup short. Factories return the
//! inserted entity model so tests can reference generated ids.

pub mod booking;
pub mod helpers;
pub mod review;
pub mod review_image;
pub mod spot;
pub mod spot_image;
pub mod user;
