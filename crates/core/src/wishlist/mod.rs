//! Wishlist module - planned purchases inside a zone.

mod wishlist_model;
mod wishlist_service;
mod wishlist_traits;

pub use wishlist_model::{
    NewWishlistItem, ScheduleDatesInput, ScheduleEvent, ScheduleEventKind, ScheduleEventUpsert,
    WishlistItem, WishlistItemStatus, WishlistItemUpdate,
};
pub use wishlist_service::WishlistService;
pub use wishlist_traits::{WishlistRepositoryTrait, WishlistServiceTrait};
