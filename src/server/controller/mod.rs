//! HTTP controllers.
//!
//! Controllers deserialize request DTOs, resolve the authenticated user via
//! the session guard where an endpoint requires one, delegate to services,
//! and convert domain results back to response DTOs. All policy decisions
//! live in the service layer.

pub mod booking;
pub mod review;
pub mod spot;
pub mod user;
