pub mod dispatch;
pub mod shared;

pub mod clubs;
pub mod dashboard;
pub mod events;
pub mod joined;
pub mod shell;
pub mod stats;
pub mod toggle;
