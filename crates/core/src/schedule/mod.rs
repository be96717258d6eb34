//! Schedule module - delivery/installation overview and date notifications.

mod notifications;
#[cfg(test)]
mod notifications_tests;
mod schedule_model;
mod schedule_service;

pub use notifications::{
    date_notifications, ItemDateNotification, NotificationField, NotificationKind,
};
pub use schedule_model::{build_delivery_schedule, DeliveryScheduleItem};
pub use schedule_service::{ScheduleService, ScheduleServiceTrait};
