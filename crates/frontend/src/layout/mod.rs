pub mod global_context;
pub mod modal_service;

pub use global_context::AppGlobalContext;
pub use modal_service::Modal;
