//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary
//! and transformed to DTOs at the controller boundary. Operation parameter
//! structs carry validated input from controllers into services and
//! repositories. Pure presentation logic (pagination clamping, rating
//! aggregation) lives here so it can be unit tested without a database.

pub mod booking;
pub mod review;
pub mod spot;
pub mod user;
