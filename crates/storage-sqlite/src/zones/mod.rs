//! SQLite storage implementation for zones.

mod model;
mod repository;

pub use model::ZoneDB;
pub use repository::ZoneRepository;
