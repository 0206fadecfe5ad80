// SoloQuest Client Library
// Re-export modules for use in main.rs

pub mod advisory;
pub mod api;
pub mod app;
pub mod config;
pub mod reference;
pub mod store;
