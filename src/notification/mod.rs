//! Ephemeral notifications for the mission viewer

pub mod store;

pub use store::NotificationStore;
