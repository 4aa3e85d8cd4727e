//! Data access layer.
//!
//! Repositories own all database queries and return entity models or small
//! composed read models. Authorization and validation rules live in the
//! service layer; repositories only answer questions about stored data and
//! apply writes, using transactions where a check and a write must be atomic.

pub mod booking;
pub mod review;
pub mod spot;
pub mod spot_image;
pub mod user;
