pub mod credentials;
pub mod view;
pub mod view_model;

pub use view::ProviderPanel;
pub use view_model::ProviderPanelVm;
