pub mod bubble;
pub mod config;
pub mod sender;
pub mod session;
pub mod storage;
pub mod theme;
pub mod types;

#[cfg(feature = "ui")]
pub mod ui;
#[cfg(feature = "ui")]
pub mod views;
