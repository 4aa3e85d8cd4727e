//! Wire-level DTOs shared by all API endpoints.
//!
//! These types define the JSON shapes of requests and responses. Field names
//! are camelCase on the wire, with capitalized envelope keys (`Spots`,
//! `Reviews`, `Bookings`) on list responses. Domain models are converted to
//! DTOs at the controller boundary.

pub mod api;
pub mod booking;
pub mod review;
pub mod spot;
pub mod user;
