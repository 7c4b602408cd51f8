pub mod components;
pub mod config;
pub mod connection_store;
pub mod icons;
pub mod list_utils;
pub mod page_frame;
