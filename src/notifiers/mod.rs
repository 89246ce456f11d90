//! Delivery of rendered briefings.

pub mod telegram;

pub use telegram::TelegramNotifier;
