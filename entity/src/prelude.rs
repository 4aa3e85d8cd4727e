pub use super::booking::Entity as Booking;
pub use super::review::Entity as Review;
pub use super::review_image::Entity as ReviewImage;
pub use super::spot::Entity as Spot;
pub use super::spot_image::Entity as SpotImage;
pub use super::user::Entity as User;
