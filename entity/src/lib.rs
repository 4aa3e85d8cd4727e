pub mod prelude;

pub mod booking;
pub mod review;
pub mod review_image;
pub mod spot;
pub mod spot_image;
pub mod user;
