pub mod error;
pub mod expiry;
pub mod health;
pub mod shelf_life;
pub mod suggestion;
pub mod tags;
pub mod urgency;
