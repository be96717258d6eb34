//! SQLite storage implementation for wishlist items and their schedule events.

mod model;
mod repository;

pub use model::{ScheduleEventDB, WishlistItemDB};
pub use repository::WishlistRepository;
