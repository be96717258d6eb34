//! Zones module - sub-areas of a budget grouping wishlist items.

mod zones_detail;
#[cfg(test)]
mod zones_detail_tests;
mod zones_model;
mod zones_service;
mod zones_traits;

pub use zones_detail::{
    build_zone_detail, PurchasedItemRecord, ZoneDetail, ZoneDetailHeader, ZoneDetailItem,
};
pub use zones_model::{NewZone, Zone};
pub use zones_service::ZoneService;
pub use zones_traits::{ZoneRepositoryTrait, ZoneServiceTrait};
