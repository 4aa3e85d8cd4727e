//! Business logic layer.
//!
//! Services compose repositories into the operations the controllers expose,
//! and own every policy decision: input validation, ownership checks,
//! NotFound-before-Forbidden ordering, and the mapping of conflict outcomes
//! to their error variants.

pub mod booking;
pub mod review;
pub mod spot;
pub mod user;
